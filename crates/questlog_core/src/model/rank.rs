//! Rank titles derived from the running score.
//!
//! # Responsibility
//! - Map a score to its cosmetic medieval title via a fixed step function.
//!
//! # Invariants
//! - Rank is a pure function of score; nothing here is persisted.
//! - Scores outside 0..=99 resolve to `Lord`. That includes negative
//!   scores, which the historical step function never had a case for;
//!   the behavior is kept as-is rather than silently changed.

use std::fmt::{Display, Formatter};

/// Cosmetic title awarded for a score band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    Peasant,
    Squire,
    Knight,
    Baron,
    Duke,
    Lord,
}

impl Rank {
    /// Resolves the rank for a score.
    ///
    /// Bands: 0–20 Peasant, 21–40 Squire, 41–60 Knight, 61–80 Baron,
    /// 81–99 Duke; anything else (100 and above, or negative) is Lord.
    pub fn for_score(score: i64) -> Self {
        match score {
            0..=20 => Self::Peasant,
            21..=40 => Self::Squire,
            41..=60 => Self::Knight,
            61..=80 => Self::Baron,
            81..=99 => Self::Duke,
            _ => Self::Lord,
        }
    }

    /// Title string shown next to the score.
    pub fn title(self) -> &'static str {
        match self {
            Self::Peasant => "Peasant",
            Self::Squire => "Squire",
            Self::Knight => "Knight",
            Self::Baron => "Baron",
            Self::Duke => "Duke",
            Self::Lord => "Lord",
        }
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
