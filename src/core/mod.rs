// =============================================================================
// Fichier : mod.rs
// Rôle    : Modules du logger (sévérités, formatage, sinks, paramètres)
// =============================================================================

pub mod facade;
pub mod logger;
pub mod settings;
pub mod severity;
pub mod sink;
pub mod style;
pub mod timestamp;
