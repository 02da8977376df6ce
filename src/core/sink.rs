// =============================================================================
// Fichier : sink.rs
// Rôle    : Destinations des lignes de log (console, mémoire)
//
// Un sink reçoit trois valeurs positionnelles par appel : la ligne formatée,
// les arguments additionnels et l'indication de style. Le logger ne sait
// rien de plus de la destination.
// =============================================================================

use std::io::Write;
use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::severity::Severity;
use crate::core::style::parse_color_hint;

/// Destination d'une ligne de log.
pub trait LogSink: Send + Sync {
    /// Reçoit une ligne déjà formatée, ses arguments et son style.
    fn emit(&self, line: &str, args: &Value, style: &str);

    /// Variante appelée par le logger, qui connaît aussi la sévérité.
    ///
    /// Implémentation par défaut : ignore la sévérité et délègue à `emit`.
    fn emit_at(&self, _level: Severity, line: &str, args: &Value, style: &str) {
        self.emit(line, args, style);
    }
}

/// Rend une valeur comme le ferait une console : chaîne brute, JSON sinon.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Rend les trois valeurs positionnelles séparées par une espace.
pub fn render_positional(line: &str, args: &Value, style: &str) -> String {
    format!("{line} {} {style}", render_value(args))
}

// =============================================================================
// Console
// =============================================================================

/// Flux de sortie de la console.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleStream {
    #[default]
    Stdout,
    Stderr,
}

/// Sink console : une ligne par appel sur stdout ou stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsoleSink {
    stream: ConsoleStream,
    colorize: bool,
}

impl ConsoleSink {
    pub const fn new(stream: ConsoleStream) -> Self {
        Self {
            stream,
            colorize: false,
        }
    }

    pub const fn stdout() -> Self {
        Self::new(ConsoleStream::Stdout)
    }

    pub const fn stderr() -> Self {
        Self::new(ConsoleStream::Stderr)
    }

    /// Active la coloration ANSI des styles `color: #rrggbb`.
    #[must_use]
    pub const fn with_colorize(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    pub const fn stream(&self) -> ConsoleStream {
        self.stream
    }

    /// Texte exact écrit pour un appel (sans le saut de ligne).
    ///
    /// En mode couleur, un style reconnu colore la ligne et n'est pas
    /// affiché ; un style non reconnu est affiché tel quel.
    pub fn render(&self, line: &str, args: &Value, style: &str) -> String {
        match parse_color_hint(style).filter(|_| self.colorize) {
            Some(color) => format!("{} {}", color.paint(line), render_value(args)),
            None => render_positional(line, args, style),
        }
    }
}

impl LogSink for ConsoleSink {
    fn emit(&self, line: &str, args: &Value, style: &str) {
        let text = self.render(line, args, style);
        // Les erreurs d'écriture console sont ignorées.
        let _ = match self.stream {
            ConsoleStream::Stdout => writeln!(std::io::stdout().lock(), "{text}"),
            ConsoleStream::Stderr => writeln!(std::io::stderr().lock(), "{text}"),
        };
    }
}

// =============================================================================
// Mémoire
// =============================================================================

/// Un appel reçu par un [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emission {
    pub line: String,
    pub args: Value,
    pub style: String,
}

impl Emission {
    /// Rendu console de l'appel.
    pub fn rendered(&self) -> String {
        render_positional(&self.line, &self.args, &self.style)
    }
}

/// Sink qui conserve chaque appel en mémoire.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<Emission>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copie des appels reçus, dans l'ordre.
    pub fn emissions(&self) -> Vec<Emission> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Rendu console de chaque appel reçu.
    pub fn rendered(&self) -> Vec<String> {
        self.emissions().iter().map(Emission::rendered).collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Vide l'historique.
    pub fn clear(&self) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl LogSink for MemorySink {
    fn emit(&self, line: &str, args: &Value, style: &str) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Emission {
                line: line.to_string(),
                args: args.clone(),
                style: style.to_string(),
            });
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use serde_json::json;

    #[test]
    fn strings_render_raw_and_other_values_as_json() {
        assert_eq!(render_value(&json!("")), "");
        assert_eq!(render_value(&json!("abc")), "abc");
        assert_eq!(render_value(&json!([1, "a", null])), "[1,\"a\",null]");
    }

    #[test]
    fn plain_console_joins_positional_values() {
        let sink = ConsoleSink::stdout();
        assert_eq!(sink.render("L", &json!(""), ""), "L  ");
        assert_eq!(sink.render("L", &json!([42]), "color: #fbc02d"), "L [42] color: #fbc02d");
    }

    #[test]
    fn colorized_console_paints_recognised_styles() {
        let sink = ConsoleSink::stderr().with_colorize(true);
        assert_eq!(sink.stream(), ConsoleStream::Stderr);

        let painted = sink.render("boom", &json!(""), "color: #d32f2f");
        assert!(painted.contains("boom"));
        assert!(painted.starts_with('\u{1b}'));
        assert!(!painted.contains("color:"));

        assert_eq!(sink.render("calm", &json!(""), ""), "calm  ");
        assert_eq!(sink.render("x", &json!(""), "font-weight: bold"), "x  font-weight: bold");
    }

    #[test]
    fn memory_sink_records_in_order() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());
        sink.emit("one", &json!(""), "");
        sink.emit_at(Severity::Warn, "two", &json!(["x"]), "s");
        assert_eq!(sink.len(), 2);

        let got = sink.emissions();
        assert_eq!(got[0].line, "one");
        assert_eq!(got[1].args, json!(["x"]));
        assert_eq!(sink.rendered(), vec!["one  ".to_string(), "two [\"x\"] s".to_string()]);

        sink.clear();
        assert!(sink.is_empty());
    }
}
