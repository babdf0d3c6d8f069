//! Unit handling for drawing and tool-library measurements
//!
//! Drawings are authored in one of several length units; the simulator
//! document always carries millimeters for stock corners and a single
//! MM/INCH flag for tooling. Tool libraries do not self-declare units,
//! so a `-mm` / `-in` name suffix convention disambiguates them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length unit system a drawing is authored in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawingUnits {
    /// Millimeters (metric)
    Millimeters,
    /// Inches (imperial)
    Inches,
    /// Centimeters
    Centimeters,
    /// Meters
    Meters,
    /// Thousandths of an inch
    Thousandths,
    /// Unknown or unspecified (treated as millimeters)
    Unknown,
}

impl Default for DrawingUnits {
    fn default() -> Self {
        Self::Unknown
    }
}

impl DrawingUnits {
    /// Factor that converts a length in this unit system to millimeters
    pub fn scale_to_mm(self) -> f64 {
        match self {
            Self::Millimeters => 1.0,
            Self::Inches => 25.4,
            Self::Centimeters => 10.0,
            Self::Meters => 1000.0,
            Self::Thousandths => 0.0254,
            Self::Unknown => 1.0,
        }
    }

    /// Whether the drawing is authored in an imperial system
    pub fn is_imperial(self) -> bool {
        matches!(self, Self::Inches | Self::Thousandths)
    }

    /// The MM/INCH flag the simulator expects for this drawing
    pub fn tool_units(self) -> ToolUnits {
        if self.is_imperial() {
            ToolUnits::Imperial
        } else {
            ToolUnits::Metric
        }
    }
}

impl fmt::Display for DrawingUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Millimeters => write!(f, "mm"),
            Self::Inches => write!(f, "in"),
            Self::Centimeters => write!(f, "cm"),
            Self::Meters => write!(f, "m"),
            Self::Thousandths => write!(f, "mil"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

impl FromStr for DrawingUnits {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mm" | "millimeters" => Ok(Self::Millimeters),
            "in" | "inch" | "inches" => Ok(Self::Inches),
            "cm" | "centimeters" => Ok(Self::Centimeters),
            "m" | "meters" => Ok(Self::Meters),
            "mil" | "thou" | "thousandths" => Ok(Self::Thousandths),
            _ => Err(format!("Unknown drawing units: {}", s)),
        }
    }
}

/// Unit system a resolved tool is specified in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolUnits {
    /// Metric (mm)
    Metric,
    /// Imperial (inch)
    Imperial,
}

impl ToolUnits {
    /// Simulator flag value ("MM" or "INCH")
    pub fn as_flag(self) -> &'static str {
        match self {
            Self::Metric => "MM",
            Self::Imperial => "INCH",
        }
    }

    /// Short suffix for synthesized tool descriptions ("mm" or "in")
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Metric => "mm",
            Self::Imperial => "in",
        }
    }
}

impl fmt::Display for ToolUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_flag())
    }
}

/// Infer the unit system of a named tool library.
///
/// A library name ending in the literal suffix `-mm` forces metric and
/// `-in` forces imperial; the match is exact and case-sensitive. Any
/// other name, or no library at all, defers to the drawing's own units.
pub fn library_units(library_name: Option<&str>, drawing: DrawingUnits) -> ToolUnits {
    match library_name {
        Some(name) if name.ends_with("-mm") => ToolUnits::Metric,
        Some(name) if name.ends_with("-in") => ToolUnits::Imperial,
        _ => drawing.tool_units(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_factors() {
        assert_eq!(DrawingUnits::Millimeters.scale_to_mm(), 1.0);
        assert_eq!(DrawingUnits::Inches.scale_to_mm(), 25.4);
        assert_eq!(DrawingUnits::Centimeters.scale_to_mm(), 10.0);
        assert_eq!(DrawingUnits::Meters.scale_to_mm(), 1000.0);
        assert_eq!(DrawingUnits::Thousandths.scale_to_mm(), 0.0254);
        assert_eq!(DrawingUnits::Unknown.scale_to_mm(), 1.0);
    }

    #[test]
    fn test_imperial_detection() {
        assert!(DrawingUnits::Inches.is_imperial());
        assert!(DrawingUnits::Thousandths.is_imperial());
        assert!(!DrawingUnits::Millimeters.is_imperial());
        assert!(!DrawingUnits::Centimeters.is_imperial());
        assert!(!DrawingUnits::Meters.is_imperial());
        assert!(!DrawingUnits::Unknown.is_imperial());
    }

    #[test]
    fn test_library_suffix_overrides_drawing() {
        // -in wins regardless of drawing units
        assert_eq!(
            library_units(Some("bits-in"), DrawingUnits::Millimeters),
            ToolUnits::Imperial
        );
        // -mm wins regardless of drawing units
        assert_eq!(
            library_units(Some("bits-mm"), DrawingUnits::Inches),
            ToolUnits::Metric
        );
    }

    #[test]
    fn test_library_fallback_to_drawing() {
        assert_eq!(
            library_units(Some("default"), DrawingUnits::Inches),
            ToolUnits::Imperial
        );
        assert_eq!(
            library_units(None, DrawingUnits::Millimeters),
            ToolUnits::Metric
        );
        // Suffix match is case-sensitive as authored
        assert_eq!(
            library_units(Some("bits-IN"), DrawingUnits::Millimeters),
            ToolUnits::Metric
        );
    }

    #[test]
    fn test_flags_and_suffixes() {
        assert_eq!(ToolUnits::Metric.as_flag(), "MM");
        assert_eq!(ToolUnits::Imperial.as_flag(), "INCH");
        assert_eq!(ToolUnits::Metric.suffix(), "mm");
        assert_eq!(ToolUnits::Imperial.suffix(), "in");
    }

    #[test]
    fn test_parse_drawing_units() {
        assert_eq!("mm".parse::<DrawingUnits>().unwrap(), DrawingUnits::Millimeters);
        assert_eq!("Inches".parse::<DrawingUnits>().unwrap(), DrawingUnits::Inches);
        assert_eq!("thou".parse::<DrawingUnits>().unwrap(), DrawingUnits::Thousandths);
        assert!("furlongs".parse::<DrawingUnits>().is_err());
    }
}
