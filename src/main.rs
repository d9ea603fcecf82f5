//! Deedplanner Bridges.
//!
//! Lädt eine Karte, baut alle Brücken auf und gibt die berechneten Teile als JSON aus.
//! Aufruf: `Deedplanner-Bridges <karte.xml> [--options <datei.toml>] [--write-options] [--compact]`

use anyhow::{bail, Context, Result};
use deedplanner_bridges::{parse_map_xml, Bridge, BridgeSegment, PlannerOptions};
use serde::Serialize;
use std::path::PathBuf;

/// Ausgabe einer aufgebauten Brücke
#[derive(Serialize)]
struct BridgeReport<'a> {
    data: &'a str,
    bridge_type: &'static str,
    first: [i32; 2],
    second: [i32; 2],
    parts: &'a [BridgeSegment],
}

struct CliArgs {
    map_path: PathBuf,
    options_path: Option<PathBuf>,
    write_options: bool,
    compact: bool,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut map_path = None;
        let mut options_path = None;
        let mut write_options = false;
        let mut compact = false;

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--options" => {
                    let path = args.next().context("--options erwartet einen Pfad")?;
                    options_path = Some(PathBuf::from(path));
                }
                "--write-options" => write_options = true,
                "--compact" => compact = true,
                _ if map_path.is_none() => map_path = Some(PathBuf::from(arg)),
                _ => bail!("Unerwartetes Argument: {}", arg),
            }
        }

        let map_path = map_path
            .context("Aufruf: Deedplanner-Bridges <karte.xml> [--options <datei.toml>] [--write-options] [--compact]")?;
        Ok(Self {
            map_path,
            options_path,
            write_options,
            compact,
        })
    }
}

fn main() -> Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Deedplanner Bridges v{} startet...", env!("CARGO_PKG_VERSION"));

    let args = CliArgs::parse()?;
    let options_path = args
        .options_path
        .clone()
        .unwrap_or_else(PlannerOptions::config_path);
    let options = PlannerOptions::load_from_file(&options_path);
    // Aktuelle Optionen als Vorlage zum Bearbeiten ablegen
    if args.write_options {
        options.save_to_file(&options_path)?;
    }
    let catalog = options.catalog();

    let xml = std::fs::read_to_string(&args.map_path)
        .with_context(|| format!("Karte konnte nicht gelesen werden: {}", args.map_path.display()))?;
    let document = parse_map_xml(&xml, &catalog)
        .with_context(|| format!("Fehler beim Laden der Karte: {}", args.map_path.display()))?;

    let mut map = document.map;
    let mut bridges = Vec::with_capacity(document.bridges.len());
    for (index, config) in document.bridges.into_iter().enumerate() {
        match Bridge::new(config, &map) {
            Ok(bridge) => {
                if options.register_parts {
                    bridge.register_parts(&mut map);
                }
                bridges.push(bridge);
            }
            // Fehlerhafte Brücken werden übersprungen, die Karte bleibt unverändert
            Err(e) => log::error!("Brücke Nr. {} übersprungen: {}", index + 1, e),
        }
    }

    log::info!(
        "{} Brücken aufgebaut, {} Teile registriert",
        bridges.len(),
        map.bridge_part_count()
    );

    let reports: Vec<BridgeReport<'_>> = bridges
        .iter()
        .map(|bridge| {
            let config = bridge.config();
            BridgeReport {
                data: &config.data().key,
                bridge_type: config.bridge_type().name(),
                first: config.first_tile().to_array(),
                second: config.second_tile().to_array(),
                parts: bridge.parts(),
            }
        })
        .collect();

    let json = if args.compact || !options.pretty_output {
        serde_json::to_string(&reports)?
    } else {
        serde_json::to_string_pretty(&reports)?
    };
    println!("{}", json);

    Ok(())
}
