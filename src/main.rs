/// Chaos Kit entry point for native builds
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use chaoskit::{AppConfig, ChaosApp};

    // The log level lives in the config, so it is loaded before the logger
    let config = AppConfig::load_or_create_default();

    env_logger::Builder::new()
        .filter_level(config.preferences.log_level.to_level_filter())
        .parse_default_env()
        .init();

    log::info!("Starting {}", config.app_name);

    let mut app = ChaosApp::new(&config);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    if let Err(e) = app.run(&mut stdin.lock(), &mut stdout.lock()) {
        eprintln!("Application error: {}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
