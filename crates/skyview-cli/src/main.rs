//! Command-line entry point for the Skyview profile engine.
//!
//! Reads one profile input document (JSON), computes its report and prints
//! it to stdout. Logs go to stderr.
//!
//! ```text
//! profile.json --> lookups (optional) --> ProfileEngine --> report JSON
//! ```
//!
//! Display names and pet item metadata come from an optional lookup file
//! shaped as `{"names": {uuid: name}, "items": {id: {"name", "tier"}}}`.

mod error;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};
use skyview_core::{
    EngineConfig, Enrichment, LeaderboardValues, ProfileEngine, StaticLookupStore,
    leaderboard_values,
};
use skyview_types::{ItemMetadata, ProfileInput, ProfileReport};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(author, version, about = "Compute a Skyblock profile report", long_about = None)]
struct Cli {
    /// Profile input document (JSON).
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Engine configuration (YAML).
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Display names and item metadata (JSON).
    #[arg(short, long, value_name = "FILE")]
    lookups: Option<PathBuf>,

    /// Also print leaderboard values.
    #[arg(long)]
    leaderboard: bool,

    /// Pretty-print the output.
    #[arg(long)]
    pretty: bool,
}

/// Lookup file contents.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LookupFile {
    names: BTreeMap<String, String>,
    items: BTreeMap<String, ItemMetadata>,
}

impl LookupFile {
    fn into_store(self) -> StaticLookupStore {
        let store = self
            .names
            .iter()
            .fold(StaticLookupStore::new(), |store, (uuid, name)| store.with_name(uuid, name));
        self.items
            .into_iter()
            .fold(store, |store, (id, metadata)| store.with_item(&id, metadata))
    }
}

#[derive(Serialize)]
struct Output<'a> {
    report: &'a ProfileReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    leaderboard: Option<&'a LeaderboardValues>,
}

/// Application entry point.
///
/// `RUST_LOG` takes precedence over the configured log level.
#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => {
            let mut config = EngineConfig::default();
            config.apply_env_overrides();
            config
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!(
        reference_path = ?config.reference_path,
        lookups_enabled = config.lookup.enabled,
        lookup_timeout_ms = config.lookup.timeout_ms,
        "configuration loaded"
    );

    let reference = config.load_reference()?;
    let input: ProfileInput = serde_json::from_slice(&read(&cli.input)?)?;
    let engine = ProfileEngine::new(reference);

    let report = match &cli.lookups {
        Some(path) if config.lookup.enabled => {
            let lookups: LookupFile = serde_json::from_slice(&read(path)?)?;
            let store = lookups.into_store();
            engine
                .process_with_lookups(&input, &store, config.lookup.timeout())
                .await?
        }
        _ => engine.process(&input, &Enrichment::default())?,
    };

    let leaderboard = cli
        .leaderboard
        .then(|| leaderboard_values(&input, engine.reference()));
    let output = Output {
        report: &report,
        leaderboard: leaderboard.as_ref(),
    };

    let text = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{text}");
    Ok(())
}

fn read(path: &Path) -> Result<Vec<u8>, CliError> {
    std::fs::read(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::CommandFactory;
    use skyview_types::Rarity;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::try_parse_from(["skyview", "profile.json", "--config", "engine.yaml", "--pretty"]).unwrap();

        assert_eq!(cli.input, PathBuf::from("profile.json"));
        assert_eq!(cli.config, Some(PathBuf::from("engine.yaml")));
        assert!(cli.pretty);
        assert!(!cli.leaderboard);
    }

    #[tokio::test]
    async fn lookup_file_feeds_the_store() {
        use skyview_core::LookupStore;

        let file: LookupFile = serde_json::from_str(
            r#"{"names": {"abc": "Steve"}, "items": {"PET_ITEM_TEXTBOOK": {"name": "Textbook", "tier": "legendary"}}}"#,
        )
        .unwrap();
        let store = file.into_store();

        assert_eq!(store.display_name("abc").await.unwrap().as_deref(), Some("Steve"));
        let item = store.item_metadata("PET_ITEM_TEXTBOOK").await.unwrap().unwrap();
        assert_eq!(item.tier, Some(Rarity::Legendary));
    }
}
