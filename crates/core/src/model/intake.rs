use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IntakeError {
    #[error("unknown {field} value: {raw}")]
    UnknownValue { field: &'static str, raw: String },
}

/// How many times the learner has already sat the SAT.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SatHistory {
    #[default]
    Never,
    Once,
    Many,
}

impl SatHistory {
    pub const ALL: [SatHistory; 3] = [SatHistory::Never, SatHistory::Once, SatHistory::Many];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Never => "never",
            Self::Once => "once",
            Self::Many => "many",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Never => "Never",
            Self::Once => "Once",
            Self::Many => "Multiple times",
        }
    }
}

/// Self-assessed math level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UserLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl UserLevel {
    pub const ALL: [UserLevel; 3] = [
        UserLevel::Beginner,
        UserLevel::Intermediate,
        UserLevel::Advanced,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

/// Score band the learner is aiming for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetBand {
    #[serde(rename = "band400_600")]
    Band400To600,
    #[default]
    #[serde(rename = "band600_700")]
    Band600To700,
    #[serde(rename = "band700_800")]
    Band700To800,
}

impl TargetBand {
    pub const ALL: [TargetBand; 3] = [
        TargetBand::Band400To600,
        TargetBand::Band600To700,
        TargetBand::Band700To800,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Band400To600 => "band400_600",
            Self::Band600To700 => "band600_700",
            Self::Band700To800 => "band700_800",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Band400To600 => "400–600",
            Self::Band600To700 => "600–700",
            Self::Band700To800 => "700–800",
        }
    }
}

macro_rules! impl_raw_value {
    ($ty:ident, $field:literal) => {
        impl FromStr for $ty {
            type Err = IntakeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .into_iter()
                    .find(|value| value.as_str() == s)
                    .ok_or_else(|| IntakeError::UnknownValue {
                        field: $field,
                        raw: s.to_string(),
                    })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.title())
            }
        }
    };
}

impl_raw_value!(SatHistory, "satHistory");
impl_raw_value!(UserLevel, "level");
impl_raw_value!(TargetBand, "targetBand");

/// Answers collected by the intake questionnaire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeAnswers {
    pub sat_history: SatHistory,
    pub level: UserLevel,
    pub target_band: TargetBand,
}

impl IntakeAnswers {
    pub const SAT_HISTORY_KEY: &'static str = "intake_satHistory";
    pub const LEVEL_KEY: &'static str = "intake_level";
    pub const TARGET_BAND_KEY: &'static str = "intake_targetBand";

    /// Preference key/value pairs in persisted form.
    #[must_use]
    pub fn to_entries(&self) -> [(&'static str, &'static str); 3] {
        [
            (Self::SAT_HISTORY_KEY, self.sat_history.as_str()),
            (Self::LEVEL_KEY, self.level.as_str()),
            (Self::TARGET_BAND_KEY, self.target_band.as_str()),
        ]
    }
}
