// =============================================================================
// Fichier : facade.rs
// Rôle    : Pont vers la façade `log` (et installation d'env_logger)
// =============================================================================

use std::io::Write;

use anyhow::{Context, Result};
use env_logger::Builder;
use serde_json::Value;

use crate::core::severity::Severity;
use crate::core::sink::{render_value, LogSink};

/// Cible `log` utilisée par défaut par [`FacadeSink`].
pub const DEFAULT_TARGET: &str = "console_logger";

/// Sink qui transmet chaque ligne à la façade `log`.
///
/// Le style est ignoré : c'est le backend `log` installé qui décide du rendu.
#[derive(Debug, Clone)]
pub struct FacadeSink {
    target: String,
}

impl FacadeSink {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Message transmis : la ligne, suivie des arguments s'il y en a.
    pub fn compose(line: &str, args: &Value) -> String {
        match render_value(args) {
            rendered if rendered.is_empty() => line.to_string(),
            rendered => format!("{line} {rendered}"),
        }
    }
}

impl Default for FacadeSink {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET)
    }
}

impl LogSink for FacadeSink {
    fn emit(&self, line: &str, args: &Value, style: &str) {
        self.emit_at(Severity::Info, line, args, style);
    }

    fn emit_at(&self, level: Severity, line: &str, args: &Value, _style: &str) {
        log::log!(
            target: self.target.as_str(),
            level.to_log_level(),
            "{}",
            Self::compose(line, args)
        );
    }
}

/// Installe `env_logger` comme backend de la façade `log`.
///
/// Les lignes arrivent déjà formatées par le logger : le format écrit le
/// message tel quel. Échoue si un logger global est déjà installé.
pub fn init_facade(min: Severity) -> Result<()> {
    Builder::new()
        .filter_level(min.to_level_filter())
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .try_init()
        .context("Impossible d'installer le logger global")?;
    log::debug!("Façade log installée (seuil : {min})");
    Ok(())
}
