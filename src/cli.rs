use crate::{config::Config, gateways};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use geohook_boundary as json;
use geohook_core::{
    entities::{ChangeNotification, EntityId, PendingFields},
    gateways::geocode::GeoCodingGateway,
    repositories::RecordRepo,
    usecases, GeocodeHook,
};
use std::{
    fs::File,
    io::{self, BufReader, Read, Write},
    path::PathBuf,
};

/// Adds coordinates to records whenever their address changes.
#[derive(Parser, Debug)]
#[command(name = "geohook", version)]
struct Cli {
    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the hook for a change notification (JSON) and print the fields to persist
    Process {
        /// Read the notification from this file instead of stdin
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Print the effective address of a stored record without geocoding it
    Resolve {
        /// Id of the record
        #[arg(long)]
        id: u64,

        /// Pending field value that overrules the stored one (NAME=VALUE)
        #[arg(short, long = "field", value_name = "NAME=VALUE", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },

    /// Look up the coordinates of a free text address
    Geocode { address: String },
}

fn parse_field(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("invalid field '{s}': expected NAME=VALUE"))
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let cfg = Config::try_load_from_file_or_default(cli.config.as_ref())?;
    let records = gateways::record_store(&cfg.record_store);

    match cli.command {
        Commands::Process { input } => {
            let geocoding = gateways::geocoding_gateway(&cfg.geocoding)?;
            let hook = GeocodeHook::new(cfg.hook.entity_type, records, geocoding);
            let input: Box<dyn Read> = match input {
                Some(path) => Box::new(BufReader::new(
                    File::open(&path)
                        .with_context(|| format!("Unable to open {}", path.display()))?,
                )),
                None => Box::new(io::stdin().lock()),
            };
            process(&hook, input, io::stdout().lock())
        }
        Commands::Resolve { id, fields } => {
            let pending: PendingFields = fields.into_iter().collect();
            let address = usecases::resolve_address(
                &records,
                &cfg.hook.entity_type,
                EntityId::new(id),
                &pending,
            )?;
            println!("{address}");
            Ok(())
        }
        Commands::Geocode { address } => {
            let geocoding = gateways::geocoding_gateway(&cfg.geocoding)?;
            let pos = usecases::lookup_coordinates(&geocoding, &address)?;
            println!("{}", serde_json::json!({ "lat": pos.lat(), "lng": pos.lng() }));
            Ok(())
        }
    }
}

/// Reads a single notification, runs the hook and writes
/// the fields that the host has to persist.
fn process<R, G>(
    hook: &GeocodeHook<R, G>,
    input: impl Read,
    mut output: impl Write,
) -> Result<()>
where
    R: RecordRepo,
    G: GeoCodingGateway,
{
    let notification: json::ChangeNotification =
        serde_json::from_reader(input).context("Invalid change notification")?;
    let ChangeNotification {
        entity_type,
        operation,
        entity_id,
        mut pending_fields,
    } = notification.into();
    hook.process_field_array(
        operation.as_str(),
        &entity_type,
        entity_id,
        &mut pending_fields,
    )?;
    let pending_fields: json::PendingFields = pending_fields
        .into_iter()
        .map(|(name, value)| (name, value.into()))
        .collect();
    serde_json::to_writer(&mut output, &pending_fields)?;
    writeln!(output)?;
    Ok(())
}
