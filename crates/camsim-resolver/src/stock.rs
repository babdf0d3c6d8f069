//! Stock (work envelope) resolution
//!
//! Parts may each declare a stock envelope and the project may declare
//! one more at the top level. The simulator takes a single box, so the
//! first defined envelope wins: part-level definitions in part order,
//! then the project-level one. When nothing is defined the simulator is
//! told to infer the envelope itself.

use camsim_core::{Point3, Project, StockDef};
use serde::{Deserialize, Serialize};

/// The work envelope handed to the simulator, corners in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedStock {
    /// Minimum corner in millimeters
    pub min: Point3,
    /// Maximum corner in millimeters
    pub max: Point3,
}

impl ResolvedStock {
    fn from_def(def: &StockDef, scale: f64) -> Self {
        Self {
            min: def.min.scaled(scale),
            max: def.max.scaled(scale),
        }
    }
}

/// Resolve the project's stock envelope.
///
/// Returns `None` when no part and no project-level stock is defined,
/// which the document layer renders as "automatic workpiece".
pub fn resolve_stock(project: &Project) -> Option<ResolvedStock> {
    let scale = project.drawing_units.scale_to_mm();

    let part_stock = project.parts.iter().find_map(|part| part.stock.as_ref());
    part_stock
        .or(project.stock.as_ref())
        .map(|def| ResolvedStock::from_def(def, scale))
}
