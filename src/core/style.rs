// =============================================================================
// Fichier : style.rs
// Rôle    : Indications de style associées à chaque sévérité
// =============================================================================

use nu_ansi_term::Color;

use crate::core::severity::Severity;

pub const ERROR_STYLE: &str = "color: #d32f2f";
pub const WARN_STYLE: &str = "color: #fbc02d";

/// Style par défaut : rouge pour `error`, jaune pour `warn`, rien sinon.
///
/// Le style est une simple indication transmise au sink ; le logger ne
/// l'interprète jamais.
pub fn default_style(level: Severity) -> String {
    match level {
        Severity::Error => ERROR_STYLE.to_string(),
        Severity::Warn => WARN_STYLE.to_string(),
        _ => String::new(),
    }
}

/// Extrait la couleur d'une indication de la forme `color: #rrggbb`.
pub fn parse_color_hint(style: &str) -> Option<Color> {
    let value = style.trim().strip_prefix("color:")?.trim();
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}
