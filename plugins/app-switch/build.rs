fn main() {
    tauri_plugin::Builder::new(&["initialize", "listen", "cancel", "current_state"]).build();
}
