// ── Fan domain types ──

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ── FanId ───────────────────────────────────────────────────────────

/// Opaque unique identifier for a fan, as assigned by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FanId(String);

impl FanId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FanId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<String> for FanId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for FanId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// ── Power ───────────────────────────────────────────────────────────

/// Power state. Wire encoding: `1` on, `0` off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Power {
    On,
    Off,
}

impl Power {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::On),
            0 => Some(Self::Off),
            _ => None,
        }
    }

    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => write!(f, "ON"),
            Self::Off => write!(f, "OFF"),
        }
    }
}

// ── SpeedTier ───────────────────────────────────────────────────────

/// Current speed tier. Wire encoding: `3` high, `2` medium, `1` low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedTier {
    High,
    Medium,
    Low,
}

impl SpeedTier {
    /// Menu ordering, fastest first.
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            3 => Some(Self::High),
            2 => Some(Self::Medium),
            1 => Some(Self::Low),
            _ => None,
        }
    }

    pub fn level(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

impl fmt::Display for SpeedTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
        }
    }
}

// ── SpeedCount ──────────────────────────────────────────────────────

/// How many speed tiers the fan is configured for, derived from the
/// controller's speed-family code (`0` -> 3, `1` -> 2, `4` -> 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedCount {
    Three,
    Two,
    One,
}

impl SpeedCount {
    /// Menu ordering, most tiers first.
    pub const ALL: [Self; 3] = [Self::Three, Self::Two, Self::One];

    pub fn from_family_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Three),
            1 => Some(Self::Two),
            4 => Some(Self::One),
            _ => None,
        }
    }

    pub fn count(self) -> u8 {
        match self {
            Self::Three => 3,
            Self::Two => 2,
            Self::One => 1,
        }
    }
}

impl fmt::Display for SpeedCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

// ── Fan ─────────────────────────────────────────────────────────────

/// The canonical fan record, assembled from one info + one status fetch.
///
/// Never mutated locally: every change goes through the gateway and is
/// only visible after the next directory load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fan {
    pub id: FanId,
    pub name: String,
    pub power: Power,
    pub speed: SpeedTier,
    pub speeds: SpeedCount,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn power_codes_round_trip() {
        assert_eq!(Power::from_code(1), Some(Power::On));
        assert_eq!(Power::from_code(0), Some(Power::Off));
        assert_eq!(Power::from_code(7), None);
        assert!(Power::On.is_on());
        assert!(!Power::Off.is_on());
    }

    #[test]
    fn tier_levels_round_trip() {
        for tier in SpeedTier::ALL {
            assert_eq!(SpeedTier::from_level(tier.level()), Some(tier));
        }
        assert_eq!(SpeedTier::from_level(0), None);
        assert_eq!(SpeedTier::from_level(4), None);
    }

    #[test]
    fn family_codes_map_to_counts() {
        assert_eq!(SpeedCount::from_family_code(0), Some(SpeedCount::Three));
        assert_eq!(SpeedCount::from_family_code(1), Some(SpeedCount::Two));
        assert_eq!(SpeedCount::from_family_code(4), Some(SpeedCount::One));
        assert_eq!(SpeedCount::from_family_code(2), None);
        assert_eq!(SpeedCount::from_family_code(3), None);
    }

    #[test]
    fn display_matches_menu_vocabulary() {
        assert_eq!(Power::On.to_string(), "ON");
        assert_eq!(Power::Off.to_string(), "OFF");
        assert_eq!(SpeedTier::Medium.to_string(), "Medium");
        assert_eq!(SpeedCount::Three.to_string(), "3");
    }
}
