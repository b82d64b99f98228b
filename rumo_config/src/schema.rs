use rumo_locale::AliasTable;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserDefaults,
    /// Extra aliases merged over the built-in airport table, keyed by
    /// canonical code.
    #[serde(default)]
    pub aliases: HashMap<String, Vec<String>>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ParserDefaults {
    /// Commands below this confidence are shown for manual correction
    /// instead of acted on.
    #[serde(default = "ParserDefaults::default_min_confidence")]
    pub min_confidence: u8,
}

impl Default for ParserDefaults {
    fn default() -> Self {
        Self {
            min_confidence: Self::default_min_confidence(),
        }
    }
}

impl ParserDefaults {
    const fn default_min_confidence() -> u8 {
        50
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("rumo");

        let config_path = config_dir.join("config.json");

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'rumo init' to create config.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_json::from_str(&content)?;

        Ok(config)
    }

    /// Load the config, or fall back to defaults when none was created yet.
    #[must_use]
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::debug!("using default config: {e}");
            Self::default()
        })
    }

    /// The built-in alias table with this config's extras merged in.
    pub fn alias_table(&self) -> anyhow::Result<AliasTable> {
        let mut table = AliasTable::builtin();
        for (code, aliases) in &self.aliases {
            table
                .extend(code, aliases)
                .map_err(|e| anyhow::anyhow!("invalid alias entry for {code}: {e}"))?;
        }
        Ok(table)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("rumo");

        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let config_template = r#"{
  "parser": {
    "min_confidence": 50
  },
  "aliases": {
    "GRU": ["sampa"]
  }
}"#;

        std::fs::write(&config_path, config_template)?;

        println!("Created config file at: {}", config_path.display());
        println!();
        println!("Next steps:");
        println!("   1. Adjust min_confidence to taste (commands below it are not acted on)");
        println!("   2. Add extra spoken aliases per airport code under \"aliases\"");
        println!("   3. Run 'rumo flight --text \"...\"' to parse a command");
        println!();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = Config::default();
        assert_eq!(config.parser.min_confidence, 50);
        assert!(config.aliases.is_empty());
    }

    #[test]
    fn deserializes_with_missing_sections() {
        let config: Config = serde_json::from_str("{}").unwrap_or_default();
        assert_eq!(config.parser.min_confidence, 50);
    }

    #[test]
    fn alias_table_merges_extras() {
        let mut config = Config::default();
        config
            .aliases
            .insert("GRU".to_string(), vec!["sampa".to_string()]);

        let table = config.alias_table().unwrap_or_else(|e| panic!("merge failed: {e}"));
        assert_eq!(table.resolve("sampa"), Some("GRU"));
        assert_eq!(table.resolve("guarulhos"), Some("GRU"));
    }

    #[test]
    fn alias_table_rejects_blank_aliases() {
        let mut config = Config::default();
        config
            .aliases
            .insert("UDI".to_string(), vec!["  ".to_string()]);

        assert!(config.alias_table().is_err());
    }

    #[test]
    fn config_round_trips_through_json() {
        let mut config = Config::default();
        config.parser.min_confidence = 70;
        config
            .aliases
            .insert("UDI".to_string(), vec!["uberlandia".to_string()]);

        let json = serde_json::to_string(&config).unwrap_or_default();
        let back: Config = serde_json::from_str(&json).unwrap_or_default();
        assert_eq!(back.parser.min_confidence, 70);
        assert_eq!(back.aliases.get("UDI").map(Vec::len), Some(1));
    }
}
