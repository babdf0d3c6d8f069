//! Resolution configuration
//!
//! An explicit value passed into every resolution call; there is no
//! process-wide settings singleton.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Simulation resolution requested from the external simulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResolutionMode {
    /// Coarse, fast preview
    Low,
    /// Balanced default
    Medium,
    /// Fine surface detail
    High,
    /// Finest surface detail
    VeryHigh,
}

impl Default for ResolutionMode {
    fn default() -> Self {
        Self::Medium
    }
}

impl ResolutionMode {
    /// Simulator flag value for this mode
    pub fn as_flag(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::VeryHigh => "VERY_HIGH",
        }
    }
}

impl fmt::Display for ResolutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_flag())
    }
}

impl FromStr for ResolutionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LOW" => Ok(Self::Low),
            "MEDIUM" => Ok(Self::Medium),
            "HIGH" => Ok(Self::High),
            "VERY_HIGH" => Ok(Self::VeryHigh),
            _ => Err(format!("Unknown resolution mode: {}", s)),
        }
    }
}

/// Configuration for one resolution pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Simulation resolution to request
    pub resolution: ResolutionMode,
    /// Length assigned to tools that carry no usable length data, in
    /// output units
    pub default_tool_length: f64,
    /// Skip disabled parts and operations during tool resolution
    pub skip_disabled: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            resolution: ResolutionMode::Medium,
            default_tool_length: 10.0,
            skip_disabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.resolution, ResolutionMode::Medium);
        assert_eq!(cfg.default_tool_length, 10.0);
        assert!(cfg.skip_disabled);
    }

    #[test]
    fn test_resolution_flags() {
        assert_eq!(ResolutionMode::Low.as_flag(), "LOW");
        assert_eq!(ResolutionMode::VeryHigh.as_flag(), "VERY_HIGH");
        assert_eq!("very_high".parse::<ResolutionMode>().unwrap(), ResolutionMode::VeryHigh);
        assert!("ULTRA".parse::<ResolutionMode>().is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let cfg = SimConfig {
            resolution: ResolutionMode::VeryHigh,
            default_tool_length: 7.5,
            skip_disabled: false,
        };
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains("VERY_HIGH"));
        let back: SimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
