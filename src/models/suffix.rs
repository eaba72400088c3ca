//! Magnitude suffixes accepted in salary input.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single-letter magnitude suffix, such as the `K` in `50K`.
///
/// Suffixes are matched case-insensitively.
///
/// # Example
///
/// ```
/// use salary_engine::models::SuffixMultiplier;
/// use rust_decimal::Decimal;
///
/// let suffix = SuffixMultiplier::from_char('l').unwrap();
/// assert_eq!(suffix, SuffixMultiplier::Lakh);
/// assert_eq!(suffix.multiplier(), Decimal::from(100_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuffixMultiplier {
    /// `K`: one thousand.
    Thousand,
    /// `L`: one lakh, a hundred thousand.
    Lakh,
    /// `M`: one million.
    Million,
    /// `B`: one billion.
    Billion,
}

impl SuffixMultiplier {
    /// Every suffix, smallest first.
    pub const ALL: [SuffixMultiplier; 4] = [
        SuffixMultiplier::Thousand,
        SuffixMultiplier::Lakh,
        SuffixMultiplier::Million,
        SuffixMultiplier::Billion,
    ];

    /// Maps a suffix letter to its multiplier kind.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'K' => Some(SuffixMultiplier::Thousand),
            'L' => Some(SuffixMultiplier::Lakh),
            'M' => Some(SuffixMultiplier::Million),
            'B' => Some(SuffixMultiplier::Billion),
            _ => None,
        }
    }

    /// The canonical (upper-case) letter.
    pub fn letter(self) -> char {
        match self {
            SuffixMultiplier::Thousand => 'K',
            SuffixMultiplier::Lakh => 'L',
            SuffixMultiplier::Million => 'M',
            SuffixMultiplier::Billion => 'B',
        }
    }

    /// The factor the numeric part is multiplied by.
    pub fn multiplier(self) -> Decimal {
        match self {
            SuffixMultiplier::Thousand => Decimal::from(1_000u32),
            SuffixMultiplier::Lakh => Decimal::from(100_000u32),
            SuffixMultiplier::Million => Decimal::from(1_000_000u32),
            SuffixMultiplier::Billion => Decimal::from(1_000_000_000u32),
        }
    }
}
