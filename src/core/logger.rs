// =============================================================================
// Fichier : logger.rs
// Rôle    : Logger à niveaux : formatage de la ligne et envoi au sink
// =============================================================================

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::core::severity::Severity;
use crate::core::sink::{ConsoleSink, LogSink};
use crate::core::style::default_style;
use crate::core::timestamp::default_timestamp;

/// Fonction de style : sévérité → indication de style.
pub type StyleFn = Arc<dyn Fn(Severity) -> String + Send + Sync>;

/// Fonction d'horodatage.
pub type TimestampFn = Arc<dyn Fn() -> String + Send + Sync>;

/// Options de construction du logger. Tous les champs sont facultatifs.
///
/// Les valeurs absentes sont remplacées à la construction par :
/// - `source` : aucune (segment omis),
/// - `min_level` : [`Severity::Debug`],
/// - `style_fn` : [`default_style`],
/// - `timestamp_fn` : [`default_timestamp`],
/// - `sink` : [`ConsoleSink`] sur stdout.
#[derive(Clone, Default)]
pub struct LoggerConfig {
    pub source: Option<String>,
    pub min_level: Option<Severity>,
    pub style_fn: Option<StyleFn>,
    pub timestamp_fn: Option<TimestampFn>,
    pub sink: Option<Arc<dyn LogSink>>,
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn with_min_level(mut self, level: Severity) -> Self {
        self.min_level = Some(level);
        self
    }

    #[must_use]
    pub fn with_style_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(Severity) -> String + Send + Sync + 'static,
    {
        self.style_fn = Some(Arc::new(f));
        self
    }

    #[must_use]
    pub fn with_timestamp_fn<F>(mut self, f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.timestamp_fn = Some(Arc::new(f));
        self
    }

    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = Some(sink);
        self
    }
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("source", &self.source)
            .field("min_level", &self.min_level)
            .field("style_fn", &self.style_fn.is_some())
            .field("timestamp_fn", &self.timestamp_fn.is_some())
            .field("sink", &self.sink.is_some())
            .finish()
    }
}

/// Logger console à niveaux.
///
/// La configuration est figée à la construction ; chaque appel est
/// indépendant des précédents.
pub struct Logger {
    source: String,
    min_level: Severity,
    style_fn: StyleFn,
    timestamp_fn: TimestampFn,
    sink: Arc<dyn LogSink>,
}

impl Logger {
    /// Construit un logger en complétant la configuration par les défauts.
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            source: config.source.unwrap_or_default(),
            min_level: config.min_level.unwrap_or_default(),
            style_fn: config.style_fn.unwrap_or_else(|| Arc::new(default_style)),
            timestamp_fn: config
                .timestamp_fn
                .unwrap_or_else(|| Arc::new(default_timestamp)),
            sink: config
                .sink
                .unwrap_or_else(|| Arc::new(ConsoleSink::stdout())),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub const fn min_level(&self) -> Severity {
        self.min_level
    }

    /// Vrai si un message de ce niveau serait émis.
    pub fn enabled(&self, level: Severity) -> bool {
        level.passes(self.min_level)
    }

    /// Formate et émet un message.
    ///
    /// Sans effet si `level` est moins grave que le seuil. Sinon, un seul
    /// appel au sink avec `"{time}{source} [{LEVEL}] {message}"`, les
    /// arguments (ou une chaîne vide s'ils sont absents) et le style.
    pub fn log(&self, level: Severity, message: &str, args: Option<&[Value]>) {
        if !self.enabled(level) {
            return;
        }

        let time = (self.timestamp_fn)();
        let source = if self.source.is_empty() {
            String::new()
        } else {
            format!(" [{}] ", self.source)
        };
        let line = format!("{time}{source} [{}] {message}", level.label());
        let args = args.map_or_else(|| Value::String(String::new()), |a| Value::Array(a.to_vec()));
        let style = (self.style_fn)(level);

        self.sink.emit_at(level, &line, &args, &style);
    }

    pub fn error(&self, message: &str, args: Option<&[Value]>) {
        self.log(Severity::Error, message, args);
    }

    pub fn warn(&self, message: &str, args: Option<&[Value]>) {
        self.log(Severity::Warn, message, args);
    }

    pub fn info(&self, message: &str, args: Option<&[Value]>) {
        self.log(Severity::Info, message, args);
    }

    pub fn debug(&self, message: &str, args: Option<&[Value]>) {
        self.log(Severity::Debug, message, args);
    }

    pub fn silly(&self, message: &str, args: Option<&[Value]>) {
        self.log(Severity::Silly, message, args);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("source", &self.source)
            .field("min_level", &self.min_level)
            .finish_non_exhaustive()
    }
}
