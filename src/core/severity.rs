// =============================================================================
// Fichier : severity.rs
// Rôle    : Niveaux de sévérité ordonnés (error … silly)
// =============================================================================

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};

/// Niveau de sévérité d'un message.
///
/// L'ordre est fixe : `Error` (rang 0, le plus grave) jusqu'à `Silly`
/// (rang 5, le plus bavard). Un message est émis si son rang est inférieur
/// ou égal au rang du seuil configuré.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warn,
    Info,
    Verbose,
    #[default]
    Debug,
    Silly,
}

impl Severity {
    /// Tous les niveaux, dans l'ordre des rangs.
    pub const ALL: [Self; 6] = [
        Self::Error,
        Self::Warn,
        Self::Info,
        Self::Verbose,
        Self::Debug,
        Self::Silly,
    ];

    /// Rang numérique (0 = error, 5 = silly).
    pub const fn rank(self) -> u8 {
        match self {
            Self::Error => 0,
            Self::Warn => 1,
            Self::Info => 2,
            Self::Verbose => 3,
            Self::Debug => 4,
            Self::Silly => 5,
        }
    }

    /// Nom en minuscules, tel qu'utilisé dans la configuration.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Verbose => "verbose",
            Self::Debug => "debug",
            Self::Silly => "silly",
        }
    }

    /// Étiquette affichée dans la ligne de log.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Verbose => "VERBOSE",
            Self::Debug => "DEBUG",
            Self::Silly => "SILLY",
        }
    }

    /// Vrai si un message de ce niveau passe le seuil `min`.
    pub fn passes(self, min: Self) -> bool {
        self.rank() <= min.rank()
    }

    /// Niveau équivalent côté façade `log`.
    ///
    /// `log` n'a que cinq niveaux : `verbose` et `debug` partagent `Debug`,
    /// `silly` descend en `Trace`.
    pub const fn to_log_level(self) -> log::Level {
        match self {
            Self::Error => log::Level::Error,
            Self::Warn => log::Level::Warn,
            Self::Info => log::Level::Info,
            Self::Verbose | Self::Debug => log::Level::Debug,
            Self::Silly => log::Level::Trace,
        }
    }

    /// Filtre `log` correspondant à ce seuil.
    pub fn to_level_filter(self) -> log::LevelFilter {
        self.to_log_level().to_level_filter()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for Severity {
    type Error = anyhow::Error;

    fn try_from(rank: u8) -> Result<Self> {
        match Self::ALL.get(usize::from(rank)) {
            Some(level) => Ok(*level),
            None => bail!("Rang de sévérité invalide : {rank} (attendu 0..=5)"),
        }
    }
}

impl FromStr for Severity {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| anyhow!("Niveau de sévérité inconnu : {s:?}"))
    }
}
