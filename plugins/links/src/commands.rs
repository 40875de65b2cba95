use apz_channel::{ChannelError, EventSink, StreamHandler};
use apz_events::event_names::DEEPLINK_EVENTS;
use apz_links::LinkData;
use serde_json::Value;
use tauri::{command, AppHandle, Manager, Runtime, State};

use crate::LinksState;

fn attached<R: Runtime>(app: &AppHandle<R>) -> Result<State<'_, LinksState>, ChannelError> {
    app.try_state::<LinksState>().ok_or(ChannelError::NotAttached)
}

#[command]
pub fn get_initial_link<R: Runtime>(app: AppHandle<R>) -> Result<Option<String>, ChannelError> {
    Ok(attached(&app)?.deep.initial_link())
}

#[command]
pub fn listen_links<R: Runtime>(app: AppHandle<R>) -> Result<(), ChannelError> {
    let state = attached(&app)?;
    let sink = EventSink::direct(state.bus.clone(), DEEPLINK_EVENTS);
    state.deep.on_listen(&Value::Null, sink)
}

#[command]
pub fn cancel_links<R: Runtime>(app: AppHandle<R>) -> Result<(), ChannelError> {
    attached(&app)?.deep.on_cancel(&Value::Null)
}

#[command]
pub fn get_initial_universal_link<R: Runtime>(
    app: AppHandle<R>,
) -> Result<Option<LinkData>, ChannelError> {
    Ok(attached(&app)?.universal.initial_link())
}
