use anyhow::Context;
use d5sim_core::SimConfig;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

pub const SEED_ENV: &str = "D5SIM_SEED";

/// Reads a JSON config file. Missing fields take their defaults; the result
/// is validated before it is returned.
pub fn load_sim_config(path: &Path) -> anyhow::Result<SimConfig> {
    let config: SimConfig = load_json(path)?;
    if let Err(err) = config.validate() {
        warn!(path = %path.display(), %err, "rejected config file");
        return Err(err).with_context(|| format!("validate {}", path.display()));
    }
    debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

/// Values given on the command line. Each one that is set replaces the
/// matching config field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub seed: Option<u64>,
    pub deck_count: Option<usize>,
    pub cut_card_padding: Option<usize>,
    pub rows: Option<usize>,
    pub cols: Option<usize>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut SimConfig) {
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(decks) = self.deck_count {
            config.shoe.deck_count = decks;
        }
        if let Some(padding) = self.cut_card_padding {
            config.shoe.cut_card_padding = padding;
        }
        if let Some(rows) = self.rows {
            config.road.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.road.cols = cols;
        }
    }
}

/// Parses a seed in decimal or `0x` hex.
pub fn parse_seed(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    if let Some(hex) = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        return u64::from_str_radix(hex, 16).ok();
    }
    raw.parse::<u64>().ok()
}

fn seed_from_env() -> Option<u64> {
    let raw = std::env::var(SEED_ENV).ok()?;
    let seed = parse_seed(&raw);
    if seed.is_none() {
        warn!(value = %raw, "ignoring unparsable D5SIM_SEED");
    }
    seed
}

/// Defaults, then the optional config file, then `overrides`, then
/// `D5SIM_SEED` unless a seed flag was given.
pub fn resolve_config(
    path: Option<&Path>,
    overrides: ConfigOverrides,
) -> anyhow::Result<SimConfig> {
    let mut config = match path {
        Some(path) => load_sim_config(path)?,
        None => SimConfig::default(),
    };
    let seed_flag = overrides.seed.is_some();
    overrides.apply(&mut config);
    if !seed_flag {
        if let Some(seed) = seed_from_env() {
            config.seed = Some(seed);
        }
    }
    if let Err(err) = config.validate() {
        warn!(%err, "rejected config");
        return Err(err).context("validate config");
    }
    Ok(config)
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn loads_partial_file_with_defaults() {
        let file = unique_temp_file();
        fs::write(&file, r#"{"shoe":{"deck_count":6},"seed":99}"#).expect("write");
        let config = load_sim_config(&file).expect("load");
        assert_eq!(config.shoe.deck_count, 6);
        assert_eq!(config.shoe.cut_card_padding, 14);
        assert_eq!(config.road.rows, 6);
        assert_eq!(config.seed, Some(99));
        let _ = fs::remove_file(file);
    }

    #[test]
    fn rejects_invalid_file() {
        let file = unique_temp_file();
        fs::write(&file, r#"{"shoe":{"deck_count":0}}"#).expect("write");
        let err = load_sim_config(&file).expect_err("zero decks");
        assert!(format!("{err:#}").contains("deck count"));
        let _ = fs::remove_file(file);
    }

    #[test]
    fn missing_file_reports_path() {
        let file = unique_temp_file();
        let err = load_sim_config(&file).expect_err("missing");
        assert!(err.to_string().contains("read"));
    }

    #[test]
    fn overrides_replace_only_set_fields() {
        let mut config = SimConfig::default();
        ConfigOverrides {
            seed: Some(5),
            cols: Some(30),
            ..ConfigOverrides::default()
        }
        .apply(&mut config);
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.road.cols, 30);
        assert_eq!(config.road.rows, 6);
        assert_eq!(config.shoe.deck_count, 8);
    }

    #[test]
    fn resolve_rejects_bad_override() {
        let overrides = ConfigOverrides {
            seed: Some(1),
            cut_card_padding: Some(2),
            ..ConfigOverrides::default()
        };
        assert!(resolve_config(None, overrides).is_err());
    }

    #[test]
    fn parses_decimal_and_hex_seeds() {
        assert_eq!(parse_seed("42"), Some(42));
        assert_eq!(parse_seed(" 0xC0FFEE "), Some(0xC0FFEE));
        assert_eq!(parse_seed("nope"), None);
    }

    fn unique_temp_file() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "d5sim_config_test_{}_{}.json",
            std::process::id(),
            nanos
        ))
    }
}
