// =============================================================================
// console-logger — Logger console à niveaux
// =============================================================================
//
// Architecture :
//   core/severity   — Niveaux ordonnés (error … silly)
//   core/logger     — Formatage de la ligne et envoi au sink
//   core/sink       — Destinations (console, mémoire)
//   core/facade     — Pont vers la façade `log` / env_logger
//   core/settings   — Paramètres JSON
//
// Format d'une ligne :
//   `{horodatage}{ [source] } [NIVEAU] {message}` + arguments + style
//
// Licence : MIT
// =============================================================================

pub mod core;

pub use crate::core::facade::{init_facade, FacadeSink};
pub use crate::core::logger::{Logger, LoggerConfig, StyleFn, TimestampFn};
pub use crate::core::settings::LoggerSettings;
pub use crate::core::severity::Severity;
pub use crate::core::sink::{ConsoleSink, ConsoleStream, Emission, LogSink, MemorySink};
pub use crate::core::style::default_style;
pub use crate::core::timestamp::default_timestamp;
