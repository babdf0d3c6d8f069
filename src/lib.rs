//! # camsim
//!
//! Turns a read-only machining project snapshot into a simulator
//! project file: one resolution pass computes the unit-normalized tool
//! table and the stock envelope, assembles the document, and writes it
//! alongside the machine-code output.
//!
//! The host application owns the project model, triggers machine-code
//! regeneration, and launches the external viewer; this crate only
//! resolves and serializes. See [`host`] for the regeneration-wait
//! boundary.

pub mod host;

pub use camsim_core::{
    library_units, CoreError, DrawingUnits, LibraryTool, MachineOp, Part, Point3, Project, Report,
    ResolutionMode, SimConfig, StockDef, ToolProfile, ToolShape, ToolUnits, Warning,
};
pub use camsim_export::{ExportError, SimDocument};
pub use camsim_resolver::{resolve_stock, resolve_tools, ResolvedStock, ResolvedTool, ToolTable};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Unified error type for the resolution pipeline
#[derive(Error, Debug)]
pub enum CamsimError {
    /// Precondition failure from the core engine
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Document serialization failure
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Failure writing the document to storage
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The host's machine-code regeneration did not finish in time
    #[error("Machine-code regeneration still busy after {waited_ms}ms")]
    RegenTimeout {
        /// How long the caller waited, in milliseconds
        waited_ms: u64,
    },
}

/// Result type using CamsimError
pub type Result<T> = std::result::Result<T, CamsimError>;

/// Run one resolution pass and assemble the simulator document.
///
/// Fails only when the project has no machine-code output path; every
/// data-quality problem is recorded in `report` and resolution
/// continues with best-effort defaults.
pub fn generate_document(
    project: &Project,
    config: &SimConfig,
    report: &mut Report,
) -> Result<SimDocument> {
    let nc_file = project.nc_file.as_deref().ok_or(CoreError::ProjectNotSaved)?;
    let stock = resolve_stock(project);
    let tools = resolve_tools(project, config, report);
    Ok(SimDocument::build(
        nc_file,
        config,
        project.drawing_units,
        stock,
        tools,
    ))
}

/// Path the simulator project is written to: the machine-code file with
/// its extension replaced, so the document lands alongside it
pub fn sim_project_path(nc_file: &Path) -> PathBuf {
    nc_file.with_extension("xml")
}

/// Generate the document and write it next to the machine-code file.
///
/// Returns the path written. Nothing is written when document
/// generation fails.
pub fn write_sim_project(
    project: &Project,
    config: &SimConfig,
    report: &mut Report,
) -> Result<PathBuf> {
    let document = generate_document(project, config, report)?;
    let nc_file = project.nc_file.as_deref().ok_or(CoreError::ProjectNotSaved)?;
    let path = sim_project_path(nc_file);
    fs::write(&path, document.to_xml()?)?;
    tracing::info!("Created simulator project {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved_project(nc_file: PathBuf) -> Project {
        Project {
            drawing_units: DrawingUnits::Millimeters,
            parts: vec![Part {
                name: "Base".to_string(),
                enabled: true,
                ops: vec![MachineOp {
                    name: "Profile".to_string(),
                    enabled: true,
                    from_geometry: true,
                    tool_number: 1,
                    tool_diameter: 6.0,
                    tool_profile: ToolProfile::EndMill,
                    library_tool: Some(LibraryTool {
                        index: 1,
                        name: "6mm end mill".to_string(),
                        diameter: 6.0,
                        profile: ToolProfile::EndMill,
                        flute_length: 18.0,
                        shank_diameter: 6.0,
                        vee_angle: 0.0,
                        library: "default".to_string(),
                    }),
                }],
                tool_library: Some("default".to_string()),
                stock: None,
            }],
            stock: Some(StockDef {
                min: Point3::new(0.0, 0.0, -10.0),
                max: Point3::new(120.0, 80.0, 0.0),
            }),
            nc_file: Some(nc_file),
        }
    }

    #[test]
    fn test_unsaved_project_is_a_precondition_failure() {
        let mut project = saved_project(PathBuf::from("ignored.nc"));
        project.nc_file = None;
        let mut report = Report::new();

        let err = generate_document(&project, &SimConfig::default(), &mut report).unwrap_err();
        assert!(matches!(err, CamsimError::Core(CoreError::ProjectNotSaved)));
        assert!(report.is_empty());
    }

    #[test]
    fn test_generate_document_resolves_everything() {
        let project = saved_project(PathBuf::from("/jobs/box.nc"));
        let mut report = Report::new();

        let doc = generate_document(&project, &SimConfig::default(), &mut report).unwrap();
        assert_eq!(doc.nc_file, "/jobs/box.nc");
        assert_eq!(doc.tools.len(), 1);
        assert_eq!(doc.tools.get(1).unwrap().length, 18.0);
        let stock = doc.stock.unwrap();
        assert_eq!(stock.max, Point3::new(120.0, 80.0, 0.0));
        assert!(report.is_empty());
    }

    #[test]
    fn test_sim_project_path_is_sibling_xml() {
        assert_eq!(
            sim_project_path(Path::new("/jobs/front panel.nc")),
            PathBuf::from("/jobs/front panel.xml")
        );
    }

    #[test]
    fn test_write_sim_project_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let nc_file = dir.path().join("front panel.nc");
        let project = saved_project(nc_file.clone());
        let mut report = Report::new();

        let path = write_sim_project(&project, &SimConfig::default(), &mut report).unwrap();
        assert_eq!(path, dir.path().join("front panel.xml"));

        let xml = fs::read_to_string(&path).unwrap();
        assert!(xml.contains("<camotics>"));
        assert!(xml.contains("front%20panel.nc"));
        assert!(xml.contains(r#"<automatic-workpiece v="false"/>"#));
        assert!(xml.contains("6mm end mill"));
    }
}
