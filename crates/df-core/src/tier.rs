//! Network layering tags.

use core::fmt;
use core::str::FromStr;

use crate::error::CoreError;

/// Role of a node in the distribution network.
///
/// Tiers are only read by analytics; the solver never looks at them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Tier {
    /// Super-source feeding the terminals.
    Source,
    /// Supply terminal.
    Terminal,
    /// Intermediate warehouse.
    Warehouse,
    /// Store (demand point).
    Store,
    /// Super-sink collecting store demand.
    Sink,
}

impl Tier {
    pub const ALL: [Tier; 5] = [
        Tier::Source,
        Tier::Terminal,
        Tier::Warehouse,
        Tier::Store,
        Tier::Sink,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Source => "source",
            Tier::Terminal => "terminal",
            Tier::Warehouse => "warehouse",
            Tier::Store => "store",
            Tier::Sink => "sink",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownTier { tag: s.to_string() })
    }
}
