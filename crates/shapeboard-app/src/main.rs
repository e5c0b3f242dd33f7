//! Main application entry point (native).

#[cfg(feature = "native")]
fn main() {
    env_logger::init();
    log::info!("Starting ShapeBoard");

    let config = match std::env::args().nth(1) {
        Some(path) => match shapeboard_app::AppConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => shapeboard_app::AppConfig::default(),
    };

    shapeboard_app::ShortcutRegistry::log_all();

    if let Err(e) = shapeboard_app::App::run(config) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
