use scholar::app::App;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("scholar site starting");

    leptos::mount::mount_to_body(App);
}
