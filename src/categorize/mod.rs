//! Age-group categorization.
//!
//! The mortality source codes age at death as an integer 0-29. The codes map
//! onto a fixed, ordered set of human-readable life stages; the mapping is a
//! compile-time constant and never changes at runtime. The code field has
//! been observed both numerically and string-encoded (`7`, `"7"`, `"7.0"`),
//! which is why [`label_age`] parses in two tiers.

use crate::models::sentinels::NO_AGE_INFO;
use std::fmt;

/// Life-stage categories of the coded age groups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeStage {
    /// Codes 0-4: deaths in the first weeks of life
    Neonatal,
    /// Codes 5-6: deaths between 1 and 11 months
    Infant,
    /// Codes 7-8: ages 1-4
    EarlyChildhood,
    /// Codes 9-10: ages 5-14
    Childhood,
    /// Code 11: ages 15-19
    Adolescence,
    /// Codes 12-13: ages 20-29
    Youth,
    /// Codes 14-16: ages 30-44
    EarlyAdulthood,
    /// Codes 17-19: ages 45-59
    MiddleAdulthood,
    /// Codes 20-24: ages 60-84
    OldAge,
    /// Codes 25-28: ages 85 and over
    Longevity,
    /// Code 29: age not recorded
    AgeUnknown,
}

impl LifeStage {
    /// Map a numeric age-group code to its life stage
    ///
    /// Codes outside `0..=29` return `None`; the caller substitutes the
    /// "Sin info" sentinel.
    #[must_use]
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            0..=4 => Some(Self::Neonatal),
            5..=6 => Some(Self::Infant),
            7..=8 => Some(Self::EarlyChildhood),
            9..=10 => Some(Self::Childhood),
            11 => Some(Self::Adolescence),
            12..=13 => Some(Self::Youth),
            14..=16 => Some(Self::EarlyAdulthood),
            17..=19 => Some(Self::MiddleAdulthood),
            20..=24 => Some(Self::OldAge),
            25..=28 => Some(Self::Longevity),
            29 => Some(Self::AgeUnknown),
            _ => None,
        }
    }

    /// The display label for this life stage
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Neonatal => "Mortalidad neonatal 0-4",
            Self::Infant => "Mortalidad infantil 1-11 meses",
            Self::EarlyChildhood => "Primera infancia 1-4",
            Self::Childhood => "Niñez 5-14",
            Self::Adolescence => "Adolescencia 15-19",
            Self::Youth => "Juventud 20-29",
            Self::EarlyAdulthood => "Adultez temprana 30-44",
            Self::MiddleAdulthood => "Adultez intermedia 45-59",
            Self::OldAge => "Vejez 60-84",
            Self::Longevity => "Longevidad 85+",
            Self::AgeUnknown => "Edad desconocida / Sin información",
        }
    }

    /// All life stages, in age order
    #[must_use]
    pub fn all() -> Vec<Self> {
        vec![
            Self::Neonatal,
            Self::Infant,
            Self::EarlyChildhood,
            Self::Childhood,
            Self::Adolescence,
            Self::Youth,
            Self::EarlyAdulthood,
            Self::MiddleAdulthood,
            Self::OldAge,
            Self::Longevity,
            Self::AgeUnknown,
        ]
    }
}

impl fmt::Display for LifeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Label a raw age-group code, tolerating its observed encodings
///
/// Tier one interprets the trimmed code as a number, truncating decimal
/// encodings (`"7.0"` becomes 7). Tier two falls back to an exact match
/// against the map's own key strings (`"0"`..`"29"`). Anything else,
/// including `None` and out-of-range codes, labels as "Sin info".
#[must_use]
pub fn label_age(code: Option<&str>) -> &'static str {
    let Some(raw) = code else {
        return NO_AGE_INFO;
    };
    let trimmed = raw.trim();

    if let Ok(value) = trimmed.parse::<f64>() {
        if value.is_finite() {
            let code = value.trunc();
            if (0.0..=29.0).contains(&code) {
                if let Some(stage) = LifeStage::from_code(code as i64) {
                    return stage.label();
                }
            }
            return NO_AGE_INFO;
        }
    }

    (0..=29)
        .find(|i: &i64| trimmed == i.to_string())
        .and_then(LifeStage::from_code)
        .map_or(NO_AGE_INFO, LifeStage::label)
}
