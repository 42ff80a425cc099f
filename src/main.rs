use anyhow::Context;
use clap::Parser;
use slint::ComponentHandle;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use fraudshield_core::ShellConfig;

mod errors;
mod handlers;
mod operations;
mod state;
mod ui;

use errors::map_config_error;
use handlers::{register_nav_handlers, register_session_handlers, register_ui_handlers};
use operations::validate_user_name;
use state::{AppState, UiState};
use ui::update_ui_from_state;

slint::include_modules!();

/// FraudShield dashboard - banking shell with payment and history views
///
/// Examples:
///   # Start on the login view
///   fraudshield
///
///   # Start signed in with a custom config
///   fraudshield --config shell.json --user priya
///
///   # Print the effective configuration
///   fraudshield --config shell.json --dump-config
#[derive(Parser, Debug)]
#[command(name = "fraudshield")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a JSON shell configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Start with a session for this user instead of the login view
    #[arg(short, long, value_name = "NAME")]
    user: Option<String>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

/// Load the config file, falling back to defaults when it can't be used
fn load_config(path: Option<&PathBuf>) -> ShellConfig {
    let Some(path) = path else {
        return ShellConfig::default();
    };

    match ShellConfig::load(path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "Loaded shell configuration");
            config
        }
        Err(e) => {
            let (title, message, details) = map_config_error(&e, path);
            tracing::warn!(%title, %message, %details, "Using default shell configuration");
            ShellConfig::default()
        }
    }
}

pub fn main() -> anyhow::Result<()> {
    fraudshield_core::init_logging();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref());

    if cli.dump_config {
        let json = serde_json::to_string_pretty(&config).context("serializing config")?;
        println!("{}", json);
        return Ok(());
    }

    let main_window = MainWindow::new().context("creating main window")?;
    main_window
        .window()
        .set_size(slint::LogicalSize::new(
            config.window_width as f32,
            config.window_height as f32,
        ));

    let window_size = main_window.window().size();
    let scale_factor = main_window.window().scale_factor();
    let ui_state = Rc::new(RefCell::new(UiState::from_window_size(
        window_size,
        scale_factor,
    )));
    let app_state = Rc::new(RefCell::new(AppState::new(config)));

    if let Some(ref name) = cli.user {
        let user = validate_user_name(name).context("invalid --user")?;
        app_state.borrow_mut().sign_in(&user);
    }

    // Register all handlers
    register_nav_handlers(&main_window, &app_state, &ui_state);
    register_session_handlers(&main_window, &app_state, &ui_state);
    register_ui_handlers(&main_window, &app_state, &ui_state);

    update_ui_from_state(&main_window, &app_state, &ui_state);

    tracing::info!("FraudShield started");
    main_window.run().context("running event loop")?;

    Ok(())
}
