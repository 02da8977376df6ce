// =============================================================================
// Fichier : settings.rs
// Rôle    : Paramètres du logger chargeables depuis un fichier JSON
// =============================================================================

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::logger::LoggerConfig;
use crate::core::severity::Severity;
use crate::core::sink::{ConsoleSink, ConsoleStream};

/// Paramètres sérialisables d'un logger console.
///
/// Les fonctions de style et d'horodatage ne sont pas sérialisables : elles
/// gardent leurs valeurs par défaut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerSettings {
    pub source: String,
    pub min_level: Severity,
    pub stream: ConsoleStream,
    pub colorize: bool,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            source: String::new(),
            min_level: Severity::Debug,
            stream: ConsoleStream::Stdout,
            colorize: false,
        }
    }
}

impl LoggerSettings {
    /// Charge les paramètres depuis un fichier JSON.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Impossible de lire {}", path.display()))?;
        let settings: Self = serde_json::from_str(&content)
            .with_context(|| format!("Format JSON invalide dans {}", path.display()))?;
        log::info!("Paramètres du logger chargés depuis {}", path.display());
        Ok(settings)
    }

    /// Sauvegarde les paramètres, en créant les répertoires manquants.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Impossible de créer {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self).context("Erreur de sérialisation JSON")?;
        fs::write(path, json)
            .with_context(|| format!("Impossible d'écrire {}", path.display()))?;
        log::info!("Paramètres du logger sauvegardés dans {}", path.display());
        Ok(())
    }

    /// Configuration équivalente, avec un sink console adapté.
    pub fn into_config(self) -> LoggerConfig {
        let sink = ConsoleSink::new(self.stream).with_colorize(self.colorize);
        let config = LoggerConfig::new()
            .with_min_level(self.min_level)
            .with_sink(Arc::new(sink));
        if self.source.is_empty() {
            config
        } else {
            config.with_source(self.source)
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::core::logger::Logger;

    #[test]
    fn missing_fields_take_defaults() {
        let settings: LoggerSettings = serde_json::from_str(r#"{"source":"Net"}"#).unwrap();
        assert_eq!(settings.source, "Net");
        assert_eq!(settings.min_level, Severity::Debug);
        assert_eq!(settings.stream, ConsoleStream::Stdout);
        assert!(!settings.colorize);
    }

    #[test]
    fn unknown_level_is_rejected() {
        let err = serde_json::from_str::<LoggerSettings>(r#"{"min_level":"fatal"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn save_then_load_from_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf").join("logger.json");
        let settings = LoggerSettings {
            source: "Db".into(),
            min_level: Severity::Verbose,
            stream: ConsoleStream::Stderr,
            colorize: true,
        };
        settings.save_to_path(&path).unwrap();
        assert_eq!(LoggerSettings::load_from_path(&path).unwrap(), settings);
    }

    #[test]
    fn load_errors_name_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        let err = LoggerSettings::load_from_path(&missing).unwrap_err();
        assert!(format!("{err:#}").contains("absent.json"));

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        let err = LoggerSettings::load_from_path(&broken).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn into_config_carries_source_and_threshold() {
        let settings = LoggerSettings {
            source: "Net".into(),
            min_level: Severity::Warn,
            ..LoggerSettings::default()
        };
        let config = settings.into_config();
        assert_eq!(config.source.as_deref(), Some("Net"));
        assert_eq!(config.min_level, Some(Severity::Warn));
        assert!(config.sink.is_some());

        let logger = Logger::new(LoggerSettings::default().into_config());
        assert_eq!(logger.source(), "");
        assert_eq!(logger.min_level(), Severity::Debug);
    }
}
