use apz_app_switch::APP_SWITCH_EVENTS;
use apz_channel::{ChannelError, EventSink, MethodCall, MethodHandler, StreamHandler};
use apz_lifecycle::LifecycleState;
use serde_json::Value;
use tauri::{command, AppHandle, Manager, Runtime, State};

use crate::AppSwitchState;

fn attached<R: Runtime>(app: &AppHandle<R>) -> Result<State<'_, AppSwitchState>, ChannelError> {
    app.try_state::<AppSwitchState>().ok_or(ChannelError::NotAttached)
}

#[command]
pub fn initialize<R: Runtime>(app: AppHandle<R>) -> Result<Value, ChannelError> {
    attached(&app)?.channel.handle(&MethodCall::new("initialize"))
}

#[command]
pub fn listen<R: Runtime>(app: AppHandle<R>) -> Result<(), ChannelError> {
    let state = attached(&app)?;
    let sink = EventSink::direct(state.bus.clone(), APP_SWITCH_EVENTS);
    state.channel.on_listen(&Value::Null, sink)
}

#[command]
pub fn cancel<R: Runtime>(app: AppHandle<R>) -> Result<(), ChannelError> {
    attached(&app)?.channel.on_cancel(&Value::Null)
}

#[command]
pub fn current_state<R: Runtime>(app: AppHandle<R>) -> Result<Option<LifecycleState>, ChannelError> {
    Ok(attached(&app)?.channel.current_state())
}
