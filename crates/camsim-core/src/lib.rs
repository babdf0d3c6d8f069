//! # camsim Core
//!
//! Core types for the tool and stock resolution engine:
//! unit handling, the read-only machining project snapshot,
//! resolution configuration, and the warning report channel.

pub mod config;
pub mod error;
pub mod geom;
pub mod model;
pub mod report;
pub mod units;

pub use config::{ResolutionMode, SimConfig};
pub use error::{CoreError, Result};
pub use geom::Point3;
pub use model::{LibraryTool, MachineOp, Part, Project, StockDef, ToolProfile, ToolShape};
pub use report::{Report, Warning};
pub use units::{library_units, DrawingUnits, ToolUnits};
