//! Tool resolution
//!
//! Walks every geometry-derived machining operation and decides the
//! effective tool geometry for its tool-table slot. An operation caches
//! its own tool number, diameter and profile; when those agree with the
//! resolved library tool the full library definition is authoritative,
//! otherwise the operation's cached values win. The result is one
//! conflict-checked entry per tool index.

use camsim_core::{
    library_units, LibraryTool, MachineOp, Part, Project, Report, SimConfig, ToolShape, ToolUnits,
    Warning,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Vee angle substituted when a conical tool declares none, in degrees
const DEFAULT_VEE_ANGLE: f64 = 45.0;
/// Shank diameter substituted for imperial conical tools (inches)
const DEFAULT_SHANK_IMPERIAL: f64 = 0.125;
/// Shank diameter substituted for metric conical tools (millimeters)
const DEFAULT_SHANK_METRIC: f64 = 3.175;

/// The engine's final description of the tool used at one table index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedTool {
    /// Tool-table index
    pub index: u32,
    /// Human-readable description
    pub description: String,
    /// Cutting diameter (shank diameter for conical tools)
    pub diameter: f64,
    /// Effective cutting length
    pub length: f64,
    /// Shape category
    pub shape: ToolShape,
    /// Unit system the dimensions are specified in
    pub units: ToolUnits,
}

/// Ordered tool table keyed by index.
///
/// Inserting at an occupied index replaces the entry and hands the
/// displaced one back, so the caller can report the overwrite instead
/// of losing it silently. Iteration is index order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolTable {
    tools: BTreeMap<u32, ResolvedTool>,
}

impl ToolTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tool at its index, returning the displaced entry if the
    /// slot was already occupied
    pub fn insert(&mut self, tool: ResolvedTool) -> Option<ResolvedTool> {
        self.tools.insert(tool.index, tool)
    }

    /// Look up the tool at an index
    pub fn get(&self, index: u32) -> Option<&ResolvedTool> {
        self.tools.get(&index)
    }

    /// Tools in ascending index order
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedTool> {
        self.tools.values()
    }

    /// Number of resolved tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Which side of the divergence check supplies the tool geometry
enum ToolSource<'a> {
    /// The library definition agrees with the operation's cache and is
    /// taken in full
    Library(&'a LibraryTool),
    /// No library tool is resolvable, or the cache disagrees with it;
    /// the operation's own cached values are authoritative
    Operation,
}

fn classify(op: &MachineOp) -> ToolSource<'_> {
    match &op.library_tool {
        Some(lib) if op.tool_diameter == lib.diameter && op.tool_profile == lib.profile => {
            ToolSource::Library(lib)
        }
        _ => ToolSource::Operation,
    }
}

fn from_library(
    lib: &LibraryTool,
    project: &Project,
    config: &SimConfig,
    report: &mut Report,
) -> ResolvedTool {
    let units = library_units(Some(&lib.library), project.drawing_units);
    let shape = lib.profile.shape();

    let (diameter, length) = if shape == ToolShape::Conical {
        // Conical tools cut with the shank taper, so the shank diameter
        // is the effective one.
        let diameter = if lib.shank_diameter > 0.0 {
            lib.shank_diameter
        } else {
            match units {
                ToolUnits::Imperial => DEFAULT_SHANK_IMPERIAL,
                ToolUnits::Metric => DEFAULT_SHANK_METRIC,
            }
        };
        let vee_angle = if lib.vee_angle > 0.0 {
            lib.vee_angle
        } else {
            report.warn(Warning::DefaultedVeeAngle {
                tool: lib.name.clone(),
                index: lib.index,
            });
            DEFAULT_VEE_ANGLE
        };
        let length = (diameter / 2.0) / (vee_angle.to_radians() / 2.0).tan();
        (diameter, length)
    } else {
        let length = if lib.flute_length != 0.0 {
            lib.flute_length
        } else {
            config.default_tool_length
        };
        (lib.diameter, length)
    };

    ResolvedTool {
        index: lib.index,
        description: lib.name.clone(),
        diameter,
        length,
        shape,
        units,
    }
}

fn from_operation(
    part: &Part,
    op: &MachineOp,
    project: &Project,
    config: &SimConfig,
) -> ResolvedTool {
    // Without a trustworthy library tool there is no flute length or
    // vee angle to work from, only the operation's cached values.
    let units = library_units(part.tool_library.as_deref(), project.drawing_units);
    ResolvedTool {
        index: op.tool_number,
        description: format!("{}{}", op.tool_diameter, units.suffix()),
        diameter: op.tool_diameter,
        length: config.default_tool_length,
        shape: op.tool_profile.shape(),
        units,
    }
}

fn resolve_op(
    part: &Part,
    op: &MachineOp,
    project: &Project,
    config: &SimConfig,
    report: &mut Report,
) -> Option<ResolvedTool> {
    if op.tool_number == 0 {
        report.warn(Warning::MissingTool {
            part: part.name.clone(),
            op: op.name.clone(),
        });
        return None;
    }

    let tool = match classify(op) {
        ToolSource::Library(lib) => from_library(lib, project, config, report),
        ToolSource::Operation => from_operation(part, op, project, config),
    };

    if tool.diameter == 0.0 {
        report.warn(Warning::ZeroDiameter {
            part: part.name.clone(),
            op: op.name.clone(),
            index: tool.index,
        });
    }

    Some(tool)
}

/// Resolve every participating operation's tool into one table.
///
/// Disabled parts and operations are excluded while
/// `config.skip_disabled` holds; operations not derived from geometry
/// never participate. Duplicate indexes keep the last-written entry and
/// surface a conflict warning when the displaced entry differed.
pub fn resolve_tools(project: &Project, config: &SimConfig, report: &mut Report) -> ToolTable {
    let mut table = ToolTable::new();

    for part in &project.parts {
        if config.skip_disabled && !part.enabled {
            continue;
        }
        for op in &part.ops {
            if !op.from_geometry {
                continue;
            }
            if config.skip_disabled && !op.enabled {
                continue;
            }
            let Some(tool) = resolve_op(part, op, project, config, report) else {
                continue;
            };
            let index = tool.index;
            if let Some(prev) = table.insert(tool) {
                let differs = table.get(index).is_some_and(|kept| *kept != prev);
                if differs {
                    report.warn(Warning::ToolConflict {
                        part: part.name.clone(),
                        op: op.name.clone(),
                        index,
                    });
                }
            }
        }
    }

    table
}
