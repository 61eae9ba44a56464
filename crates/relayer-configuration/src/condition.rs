use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::manifest::UpdateTriggers;

/// Represent the condition that makes a relayer iteration consider pushing a new price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UpdateCondition {
    ValueDeviation,
    Time,
    FallbackDeviation,
    FallbackTime,
}

impl UpdateCondition {
    /// Derive the ordered list of conditions from the manifest triggers.
    /// - deviation trigger -> `value-deviation`, or `fallback-deviation` when the offset is positive
    /// - time trigger -> `time`, or `fallback-time` when the offset is positive
    ///
    /// The deviation condition always comes before the time condition. A trigger set to zero is
    /// considered absent.
    pub fn derive(triggers: &UpdateTriggers, fallback_offset_in_minutes: i64) -> Vec<Self> {
        let fallback = fallback_offset_in_minutes > 0;

        let mut conditions = Vec::with_capacity(2);
        if triggers.deviation_percentage().is_some() {
            conditions.push(if fallback { Self::FallbackDeviation } else { Self::ValueDeviation });
        }

        if triggers.time_since_last_update_in_milliseconds().is_some() {
            conditions.push(if fallback { Self::FallbackTime } else { Self::Time });
        }

        conditions
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValueDeviation => "value-deviation",
            Self::Time => "time",
            Self::FallbackDeviation => "fallback-deviation",
            Self::FallbackTime => "fallback-time",
        }
    }
}

impl Display for UpdateCondition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UpdateCondition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "value-deviation" => Ok(Self::ValueDeviation),
            "time" => Ok(Self::Time),
            "fallback-deviation" => Ok(Self::FallbackDeviation),
            "fallback-time" => Ok(Self::FallbackTime),
            _ => Err(format!("unknown update condition {}", s)),
        }
    }
}
