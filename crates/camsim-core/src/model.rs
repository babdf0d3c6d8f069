//! Read-only machining project snapshot
//!
//! This is the narrow view of the host's CAD/CAM object graph the engine
//! needs: parts, their machining operations, cached per-operation tool
//! data, the referenced library tool definitions, and stock envelopes.
//! The host owns and mutates its own model; it maps into this snapshot
//! for the duration of one resolution pass.

use crate::geom::Point3;
use crate::units::DrawingUnits;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Cutting tool profile as cached by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolProfile {
    /// Flat end mill
    EndMill,
    /// Ball end mill
    BallNose,
    /// Bull nose (corner radius) end mill
    BullNose,
    /// V-cutter / engraving vee bit
    VCutter,
    /// Engraving tool
    Engraver,
    /// Twist drill
    Drill,
}

impl ToolProfile {
    /// Map the profile onto the simulator's shape categories
    pub fn shape(self) -> ToolShape {
        match self {
            Self::VCutter => ToolShape::Conical,
            Self::BallNose | Self::BullNose => ToolShape::Ballnose,
            Self::EndMill | Self::Engraver | Self::Drill => ToolShape::Cylindrical,
        }
    }
}

impl fmt::Display for ToolProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndMill => write!(f, "End Mill"),
            Self::BallNose => write!(f, "Ball Nose"),
            Self::BullNose => write!(f, "Bull Nose"),
            Self::VCutter => write!(f, "V-Cutter"),
            Self::Engraver => write!(f, "Engraver"),
            Self::Drill => write!(f, "Drill"),
        }
    }
}

/// Shape category of a tool in the simulator document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolShape {
    /// Flat-bottomed cutter
    Cylindrical,
    /// Ball or bull nose cutter
    Ballnose,
    /// Vee cutter
    Conical,
}

impl ToolShape {
    /// Simulator flag value for this shape
    pub fn as_flag(self) -> &'static str {
        match self {
            Self::Cylindrical => "CYLINDRICAL",
            Self::Ballnose => "BALLNOSE",
            Self::Conical => "CONICAL",
        }
    }
}

impl fmt::Display for ToolShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_flag())
    }
}

/// A named cutting tool stored in a reusable tool library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryTool {
    /// Tool-table index, unique within a library (1..N)
    pub index: u32,
    /// Display name
    pub name: String,
    /// Cutting diameter in library units
    pub diameter: f64,
    /// Tool profile
    pub profile: ToolProfile,
    /// Flute length (0 = unset)
    pub flute_length: f64,
    /// Shank diameter (conical tools; 0 = unset)
    pub shank_diameter: f64,
    /// Included vee angle in degrees (conical tools; 0 = unset)
    pub vee_angle: f64,
    /// Name of the owning library
    pub library: String,
}

/// One machining operation inside a part
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineOp {
    /// Operation name
    pub name: String,
    /// Whether the operation is enabled
    pub enabled: bool,
    /// Whether the operation is derived from CAD geometry; only
    /// geometry-derived operations participate in resolution
    pub from_geometry: bool,
    /// Cached tool number (0 = no tool assigned)
    pub tool_number: u32,
    /// Cached tool diameter
    pub tool_diameter: f64,
    /// Cached tool profile
    pub tool_profile: ToolProfile,
    /// The currently-resolved library tool reference, if any; may be
    /// absent or stale relative to the cached values above
    pub library_tool: Option<LibraryTool>,
}

/// A work-envelope bounding box in drawing units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StockDef {
    /// Minimum corner
    pub min: Point3,
    /// Maximum corner
    pub max: Point3,
}

/// A machining part: an ordered group of operations plus part-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    /// Part name
    pub name: String,
    /// Whether the part is enabled
    pub enabled: bool,
    /// Ordered machining operations
    pub ops: Vec<MachineOp>,
    /// Name of the tool library this part draws from, if any
    pub tool_library: Option<String>,
    /// Part-level stock definition (`None` = undefined)
    pub stock: Option<StockDef>,
}

/// The read-only machining project snapshot handed over by the host
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Project {
    /// Unit system the drawing is authored in
    pub drawing_units: DrawingUnits,
    /// Ordered parts
    pub parts: Vec<Part>,
    /// Project-level stock definition (`None` = undefined)
    pub stock: Option<StockDef>,
    /// Path of the generated machine-code file; `None` when the project
    /// has never been saved
    pub nc_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_shape_mapping() {
        assert_eq!(ToolProfile::VCutter.shape(), ToolShape::Conical);
        assert_eq!(ToolProfile::BallNose.shape(), ToolShape::Ballnose);
        assert_eq!(ToolProfile::BullNose.shape(), ToolShape::Ballnose);
        assert_eq!(ToolProfile::EndMill.shape(), ToolShape::Cylindrical);
        assert_eq!(ToolProfile::Engraver.shape(), ToolShape::Cylindrical);
        assert_eq!(ToolProfile::Drill.shape(), ToolShape::Cylindrical);
    }

    #[test]
    fn test_shape_flags() {
        assert_eq!(ToolShape::Cylindrical.as_flag(), "CYLINDRICAL");
        assert_eq!(ToolShape::Ballnose.as_flag(), "BALLNOSE");
        assert_eq!(ToolShape::Conical.as_flag(), "CONICAL");
    }
}
