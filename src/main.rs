//! Browser entry point: install logging and mount the app.

use dashboard_shell::app::App;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    log::info!("starting dashboard shell");
    leptos::mount::mount_to_body(App);
}
