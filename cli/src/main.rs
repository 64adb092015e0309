//! CLI for reading and writing device inventory records
//!
//! # Examples
//!
//! ```bash
//! # help menu
//! devinv-cli --help
//!
//! # list devices as a table
//! devinv-cli list
//!
//! # create a device and print it as json
//! devinv-cli --json create --name Router --manufacturer Acme
//!
//! # rename a device
//! devinv-cli update abc123 --name Router --manufacturer "Acme Corp"
//! ```
use clap::{Parser, Subcommand};
use color_eyre::eyre::{Report, Result, eyre};
use devinv_lib::{
    client::{DeviceApi, DeviceClient},
    config::{
        API_BASE_URL_ENV, APP_NAME_ENV, ApiConfig, DEFAULT_API_BASE_URL,
        DEFAULT_APP_NAME,
    },
    device::{Device, DeviceCreateInput},
    error::DeviceApiError,
};
use itertools::Itertools;
use log::*;
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// CLI for reading and writing device inventory records
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Base URL of the device inventory API
    #[arg(
        long,
        global = true,
        env = API_BASE_URL_ENV,
        default_value = DEFAULT_API_BASE_URL
    )]
    api_base_url: String,

    /// Display name of the inventory
    #[arg(
        long,
        global = true,
        env = APP_NAME_ENV,
        default_value = DEFAULT_APP_NAME
    )]
    app_name: String,

    /// Output results in json instead of table text
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    /// Only print final output nothing else
    #[arg(short, long, global = true, default_value_t = false)]
    quiet: bool,

    /// Prints debug logs including those from devinv-lib
    #[arg(long, global = true, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
enum Command {
    /// List all devices
    List,

    /// Show a single device
    Get {
        /// Id of the device
        id: String,
    },

    /// Create a new device
    Create {
        /// Name of the device
        #[arg(short, long)]
        name: String,

        /// Manufacturer of the device
        #[arg(short, long)]
        manufacturer: String,
    },

    /// Replace the name and manufacturer of a device
    Update {
        /// Id of the device
        id: String,

        /// New name of the device
        #[arg(short, long)]
        name: String,

        /// New manufacturer of the device
        #[arg(short, long)]
        manufacturer: String,
    },

    /// Delete a device
    Delete {
        /// Id of the device
        id: String,
    },
}

#[doc(hidden)]
fn initialize_logger(args: &Args) -> Result<()> {
    let filter = if args.quiet {
        simplelog::LevelFilter::Error
    } else if args.debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    simplelog::TermLogger::init(
        filter,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[doc(hidden)]
fn print_args(args: &Args) {
    info!("configuration:");
    info!("app_name:     {}", args.app_name);
    info!("api_base_url: {}", args.api_base_url);
    info!("json:         {}", args.json);
    info!("quiet:        {}", args.quiet);
    debug!("command:      {:?}", args.command);
}

/// Tags a library error with its kind so the report reads
/// "not found: device not found: ..." and the like.
#[doc(hidden)]
fn api_error(e: DeviceApiError) -> Report {
    let kind = e.kind();
    Report::new(e).wrap_err(kind.to_string())
}

#[doc(hidden)]
fn require_fields(input: &DeviceCreateInput) -> Result<()> {
    let missing = input.missing_fields();

    if missing.is_empty() {
        return Ok(());
    }

    Err(eyre!("missing required fields: {}", missing.iter().join(", ")))
}

#[doc(hidden)]
fn print_devices(
    out: &mut dyn Write,
    json: bool,
    devices: &[Device],
) -> Result<()> {
    if json {
        let j: String = serde_json::to_string(&devices)?;
        writeln!(out, "{}", j)?;
        return Ok(());
    }

    let mut table = prettytable::Table::new();

    table.add_row(prettytable::row![
        "ID",
        "NAME",
        "MANUFACTURER",
        "CREATED",
        "UPDATED",
    ]);

    for d in devices {
        table.add_row(prettytable::row![
            d.id,
            d.name,
            d.manufacturer,
            d.created_at,
            d.updated_at
        ]);
    }

    table.print(out)?;

    Ok(())
}

#[doc(hidden)]
fn print_device(out: &mut dyn Write, json: bool, device: &Device) -> Result<()> {
    if json {
        let j: String = serde_json::to_string(device)?;
        writeln!(out, "{}", j)?;
        return Ok(());
    }

    print_devices(out, json, std::slice::from_ref(device))
}

#[doc(hidden)]
fn run(args: &Args, api: &dyn DeviceApi, out: &mut dyn Write) -> Result<()> {
    match &args.command {
        Command::List => {
            let devices = api.list().map_err(api_error)?;
            info!("found {} device(s)", devices.len());
            print_devices(out, args.json, &devices)
        }
        Command::Get { id } => {
            let device = api.get(id).map_err(api_error)?;
            print_device(out, args.json, &device)
        }
        Command::Create { name, manufacturer } => {
            let input = DeviceCreateInput::new(name, manufacturer);
            require_fields(&input)?;
            let device = api.create(&input).map_err(api_error)?;
            info!("created {}", device);
            print_device(out, args.json, &device)
        }
        Command::Update {
            id,
            name,
            manufacturer,
        } => {
            let input = DeviceCreateInput::new(name, manufacturer);
            require_fields(&input)?;
            let device = api.update(id, &input.into()).map_err(api_error)?;
            info!("updated {}", device);
            print_device(out, args.json, &device)
        }
        Command::Delete { id } => {
            api.delete(id).map_err(api_error)?;
            info!("deleted device {}", id);
            if args.json {
                writeln!(out, "{}", serde_json::json!({ "deleted": id }))?;
            } else {
                writeln!(out, "deleted {}", id)?;
            }
            Ok(())
        }
    }
}

#[doc(hidden)]
fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    initialize_logger(&args)?;

    print_args(&args);

    let config = ApiConfig::builder()
        .base_url(args.api_base_url.as_str())
        .app_name(args.app_name.as_str())
        .build()?;

    let client = DeviceClient::new(config)?;

    run(&args, &client, &mut io::stdout())
}

#[cfg(test)]
#[path = "./main_tests.rs"]
mod tests;
