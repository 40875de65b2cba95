fn main() {
    tauri_plugin::Builder::new(&[
        "get_initial_link",
        "listen_links",
        "cancel_links",
        "get_initial_universal_link",
    ])
    .build();
}
