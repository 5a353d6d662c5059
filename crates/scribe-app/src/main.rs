mod app_state;
mod cli;

use scribe_config::{load_config, ScribeConfig};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("panic: {info}");
        eprintln!("\n--- Scribe crashed ---");
        eprintln!("Please report this issue at: https://github.com/scribe-editor/scribe/issues");
        eprintln!("----------------------\n");

        default_hook(info);
    }));
}

fn main() {
    install_panic_hook();

    let args = cli::parse();

    // Config is loaded before logging so the configured level applies;
    // load and validation problems are reported once the subscriber is up.
    let loaded = load_config(args.config.as_deref());

    let log_directive = match (&args.log_level, &loaded) {
        (Some(level), _) => cli::log_directive(level),
        (None, Ok(config)) => config.logging.directive(),
        (None, Err(_)) => "scribe=info".to_string(),
    };
    let directive = log_directive
        .parse::<Directive>()
        .or_else(|_| "scribe=info".parse::<Directive>());
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = directive {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Scribe v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        ScribeConfig::default()
    });
    if let Err(e) = scribe_config::validation::validate(&config) {
        tracing::warn!("Config has invalid values, keeping them as parsed: {e}");
    }
    if let Some(content) = args.content {
        config.editor.initial_content = content;
    }
    tracing::info!(
        debounce_ms = config.keyboard.debounce_ms,
        entry = %config.webview.entry_url(),
        "Config loaded"
    );

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::ScribeApp::new(config);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
