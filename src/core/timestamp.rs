// =============================================================================
// Fichier : timestamp.rs
// Rôle    : Horodatage par défaut des lignes de log
// =============================================================================

use chrono::{Datelike, Local, Timelike};

/// Horodatage courant en heure locale.
///
/// Format : `M-J H:M:S.ms`, sans aucun zéro de remplissage
/// (ex: `3-5 9:5:3.7` pour le 5 mars à 09:05:03.007).
pub fn default_timestamp() -> String {
    format_timestamp(&Local::now())
}

/// Formate un instant au format de [`default_timestamp`].
///
/// Le mois est compté à partir de 1. Les composantes ne sont jamais
/// complétées par des zéros : ce format est conservé tel quel.
pub fn format_timestamp<T: Datelike + Timelike>(now: &T) -> String {
    // Une seconde intercalaire porte les nanosecondes au-delà de 1e9.
    let ms = (now.nanosecond() % 1_000_000_000) / 1_000_000;
    format!(
        "{}-{} {}:{}:{}.{}",
        now.month(),
        now.day(),
        now.hour(),
        now.minute(),
        now.second(),
        ms
    )
}
