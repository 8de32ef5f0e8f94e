mod app;
mod config;
mod domain;
mod infra;
mod logging;
mod platform;
mod ui;
mod usecase;


use config::{default_data_dir, ensure_webview_data_dir, WINDOW_TITLE};

fn main() {
    logging::init_tracing();

    let webview_data_dir = default_data_dir()
        .and_then(|dir| ensure_webview_data_dir(&dir))
        .expect("should resolve and create WebView2 data directory");
    tracing::info!(dir = %webview_data_dir.display(), "starting desktop app");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title(WINDOW_TITLE))
                .with_data_directory(webview_data_dir),
        )
        .launch(app::App);
}
