//! Terminal UI (TUI) app for browsing and editing a device inventory
//!
//! # Features:
//!
//! - List every device known to the inventory API
//! - Create new devices and edit existing ones through a validated form
//! - Delete devices after confirmation
//! - Deep link into any screen with `--route`
//!
//! # Examples
//!
//! ```bash
//! # show help menu
//! devinv-term --help
//!
//! # launch application against a local API
//! devinv-term --api-base-url http://localhost:8000
//!
//! # open straight into the edit form of a device
//! devinv-term --route /devices/edit/abc123
//! ```

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use directories::ProjectDirs;
use devinv_lib::{
    client::{DeviceApi, DeviceClient},
    config::{
        API_BASE_URL_ENV, APP_NAME_ENV, ApiConfig, DEFAULT_API_BASE_URL,
        DEFAULT_APP_NAME,
    },
};
use ratatui::{Terminal, prelude::CrosstermBackend};
use std::{
    fs, io,
    path::PathBuf,
    rc::Rc,
    sync::{
        Arc, Mutex,
        mpsc::{Receiver, channel},
    },
};

use crate::{
    config::{CONFIG_FILE_NAME, ConfigManager},
    renderer::Renderer,
    store::{
        Dispatcher, Store, action::Action, reducer::StoreReducer,
        state::State,
    },
    ui::route::Route,
    worker::ApiWorker,
};

#[doc(hidden)]
mod config;
#[doc(hidden)]
mod error;
#[doc(hidden)]
mod renderer;
#[doc(hidden)]
mod store;
#[doc(hidden)]
mod ui;
#[doc(hidden)]
mod worker;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the device inventory API
    #[arg(long, env = API_BASE_URL_ENV, default_value = DEFAULT_API_BASE_URL)]
    api_base_url: String,

    /// Name shown in the title bar
    #[arg(long, env = APP_NAME_ENV, default_value = DEFAULT_APP_NAME)]
    app_name: String,

    /// Screen to open on start, i.e. /devices/create
    #[arg(short, long, default_value = "/")]
    route: String,

    /// Write debug logs to the log file
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

#[doc(hidden)]
fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", "devinv-term")
        .ok_or(eyre!("failed to get project directory"))
}

#[doc(hidden)]
fn initialize_logger(args: &Args, dirs: &ProjectDirs) -> Result<PathBuf> {
    let filter = if args.debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    // the terminal belongs to the UI, so logs go to a file
    let data_dir = dirs.data_dir();
    fs::create_dir_all(data_dir)?;
    let log_path = data_dir.join("devinv-term.log");

    simplelog::WriteLogger::init(
        filter,
        simplelog::Config::default(),
        fs::File::create(&log_path)?,
    )?;

    Ok(log_path)
}

#[doc(hidden)]
fn create_config_manager(dirs: &ProjectDirs) -> Result<ConfigManager> {
    let config_dir = dirs.config_dir();
    fs::create_dir_all(config_dir)?;
    let config_path = config_dir
        .join(CONFIG_FILE_NAME)
        .to_str()
        .ok_or(eyre!("unable to construct config file path"))?
        .to_string();

    ConfigManager::builder().path(config_path).build()
}

#[doc(hidden)]
fn is_true_color_supported() -> bool {
    supports_color::on(supports_color::Stream::Stdout)
        .map(|level| level.has_16m)
        .unwrap_or(false)
}

/// Wires the store to a worker performing requests against `api`. Returns
/// the store along with the channel the worker reports results on.
#[doc(hidden)]
fn create_store(
    api: Arc<dyn DeviceApi>,
    config_manager: ConfigManager,
    app_name: &str,
    true_color_enabled: bool,
) -> Result<(Rc<Store>, Receiver<Action>)> {
    let theme = config_manager.get().theme;
    let (tx, rx) = channel();

    let worker = ApiWorker::builder()
        .api(api)
        .tx(tx)
        .config_manager(Arc::new(Mutex::new(config_manager)))
        .build()?;

    let store = Store::new(
        State::new(app_name, theme, true_color_enabled),
        StoreReducer::boxed(),
        Box::new(worker),
    );

    Ok((Rc::new(store), rx))
}

#[doc(hidden)]
fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let dirs = project_dirs()?;

    let log_path = initialize_logger(&args, &dirs)?;

    let route = Route::parse(&args.route)
        .ok_or_else(|| eyre!("unknown route: {}", args.route))?;

    let api_config = ApiConfig::builder()
        .base_url(args.api_base_url.as_str())
        .app_name(args.app_name.as_str())
        .build()?;

    log::info!(
        "starting against {} (logs at {})",
        api_config.base_url(),
        log_path.display()
    );

    let app_name = api_config.app_name().to_string();
    let client = DeviceClient::new(api_config)?;

    let (store, rx) = create_store(
        Arc::new(client),
        create_config_manager(&dirs)?,
        &app_name,
        is_true_color_supported(),
    )?;

    store.dispatch(Action::Navigate(route));

    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let renderer = Renderer::new(terminal, store, rx);

    renderer.start_render_loop()
}

#[cfg(test)]
#[path = "./main_tests.rs"]
mod tests;
