//! toiletmap: command-line interface for toiletmap-core
//!
//! This binary drives the Copenhagen toilet map from your terminal. It
//! can print dataset statistics, list every toilet, run the map screen
//! against a headless map surface and show a marker's popup.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ toiletmap stats
//!
//! - List all toilets
//!   $ toiletmap list
//!
//! - Render the screen, with the user accepting the location prompt
//!   $ toiletmap render --location ask-grant
//!
//! - Show a popup
//!   $ toiletmap popup "kongens have"
//!
//! Data source
//! -----------
//!
//! By default the dataset embedded in `toiletmap-core` is used. Use
//! `--data-dir <dir>` to read from disk (gzipped `*.json.gz` assets are
//! decoded transparently) and `--asset <name>` to pick another file.
//! Set `RUST_LOG=debug` to see what the pipeline logs.
mod args;

use crate::args::{CliArgs, Commands, LocationScenario};
use clap::Parser;
use toiletmap_core::map::marker_for;
use toiletmap_core::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    let assets: Box<dyn AssetSource> = match &args.data_dir {
        Some(dir) => Box::new(DirAssets::new(dir)),
        None => Box::new(EmbeddedAssets),
    };
    let config = ScreenConfig {
        asset: args.asset.unwrap_or_else(|| DEFAULT_ASSET.to_string()),
        ..ScreenConfig::default()
    };

    match args.command {
        Commands::Stats => {
            let records = read_records(assets.as_ref(), &config.asset)?;
            let stats = DatasetStats::from_records(&records);
            println!("Dataset statistics:");
            println!("  Toilets: {}", stats.total);
            println!("  Accessible: {}", stats.accessible);
            println!("  Not accessible: {}", stats.not_accessible);
            println!("  Unknown: {}", stats.unknown);
        }

        Commands::List => {
            for r in read_records(assets.as_ref(), &config.asset)? {
                println!(
                    "{} ({}) | {} | {:?}",
                    r.name,
                    r.position(),
                    r.opening_hours,
                    r.accessible
                );
            }
        }

        Commands::Render { location } => {
            let map = match location {
                LocationScenario::Revoked => HeadlessMap::denying_location(),
                _ => HeadlessMap::new(),
            };
            let mut permissions = match location {
                LocationScenario::Granted | LocationScenario::Revoked => {
                    StaticPermissions::granted(&LocationPermission::ALL)
                }
                LocationScenario::AskGrant | LocationScenario::AskDeny => {
                    StaticPermissions::ungranted()
                }
            };

            let mut screen =
                MapScreen::on_map_ready(map, assets.as_ref(), &mut permissions, &config);
            if screen.location_flow().is_pending() {
                let granted = location == LocationScenario::AskGrant;
                println!(
                    "Location prompt answered: {}",
                    if granted { "allow" } else { "deny" }
                );
                screen.on_permissions_result(&PermissionGrants::uniform(
                    &LocationPermission::ALL,
                    granted,
                ));
            }

            let map = screen.map();
            if let Some((center, zoom)) = map.camera() {
                println!("Camera: {center} @ zoom {zoom}");
            }
            println!("Markers: {}", map.markers().len());
            for marker in map.markers() {
                print_popup(marker.position, map.show_popup(marker));
            }
            println!("Location flow: {:?}", screen.location_flow());
            println!("My location layer: {}", map.is_my_location_enabled());
        }

        Commands::Popup { name } => {
            let records = read_records(assets.as_ref(), &config.asset)?;
            let needle = name.to_lowercase();
            match records
                .iter()
                .find(|r| r.name.to_lowercase().contains(&needle))
            {
                Some(record) => {
                    let mut map = HeadlessMap::new();
                    map.set_popup_adapter(Box::new(ToiletPopupAdapter));
                    let marker = map.add_marker(marker_for(record));
                    print_popup(marker.position, map.show_popup(&marker));
                }
                None => eprintln!("No toilet found matching: {name}"),
            }
        }
    }

    Ok(())
}

/// Strict load for the inspection commands: errors go to the user.
fn read_records(assets: &dyn AssetSource, asset: &str) -> anyhow::Result<Vec<ToiletRecord>> {
    let json = assets.read_to_string(asset)?;
    Ok(parse_records(&json)?)
}

fn print_popup(position: LatLng, popup: Option<PopupContent>) {
    let Some(popup) = popup else {
        println!("- ({position}) <no popup adapter>");
        return;
    };
    println!(
        "- {} ({position})",
        popup.title.as_deref().unwrap_or("<untitled>")
    );
    for line in popup.visible_lines() {
        println!("    {line}");
    }
}
