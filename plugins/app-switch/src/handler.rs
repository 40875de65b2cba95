use tauri::{AppHandle, Manager, RunEvent, Runtime, Window, WindowEvent};

use crate::AppSwitchState;

pub fn window_ready<R: Runtime>(window: &Window<R>) {
    let Some(state) = window.try_state::<AppSwitchState>() else {
        tracing::warn!("app-switch state not managed, ignoring window {}", window.label());
        return;
    };

    let focused = window.is_focused().unwrap_or(false);
    state.apply(state.channel.windows().ready(window.label(), focused));
}

pub fn run_event<R: Runtime>(app: &AppHandle<R>, event: &RunEvent) {
    let RunEvent::WindowEvent { label, event, .. } = event else {
        return;
    };
    let Some(state) = app.try_state::<AppSwitchState>() else {
        return;
    };

    let transition = match event {
        WindowEvent::Focused(focused) => state.channel.windows().focus_changed(label, *focused),
        // Minimize and restore surface as resizes.
        WindowEvent::Resized(_) => {
            let minimized = app
                .get_webview_window(label)
                .and_then(|window| window.is_minimized().ok())
                .unwrap_or(false);
            state.channel.windows().minimized_changed(label, minimized)
        }
        WindowEvent::Destroyed => state.channel.windows().destroyed(label),
        _ => return,
    };
    state.apply(transition);
}
