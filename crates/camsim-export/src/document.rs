//! Simulator project document assembly

use crate::error::ExportResult;
use crate::xml;
use camsim_core::{DrawingUnits, ResolutionMode, SimConfig, ToolUnits};
use camsim_resolver::{ResolvedStock, ToolTable};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything the external simulator needs for one visualization run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimDocument {
    /// Machine-code file reference with spaces percent-encoded
    pub nc_file: String,
    /// Requested simulation resolution
    pub resolution: ResolutionMode,
    /// Output unit system, derived from the drawing units
    pub units: ToolUnits,
    /// Resolved stock envelope; `None` means the simulator infers it
    pub stock: Option<ResolvedStock>,
    /// Resolved tools by index
    pub tools: ToolTable,
}

impl SimDocument {
    /// Assemble a document from one resolution pass over a project
    pub fn build(
        nc_file: &Path,
        config: &SimConfig,
        drawing_units: DrawingUnits,
        stock: Option<ResolvedStock>,
        tools: ToolTable,
    ) -> Self {
        Self {
            nc_file: encode_nc_path(nc_file),
            resolution: config.resolution,
            units: drawing_units.tool_units(),
            stock,
            tools,
        }
    }

    /// Render the document as a simulator project XML string
    pub fn to_xml(&self) -> ExportResult<String> {
        xml::render(self)
    }
}

/// The simulator reads the file reference as a space-separated list, so
/// spaces in the path itself become `%20`. No other characters are
/// escaped.
fn encode_nc_path(path: &Path) -> String {
    path.display().to_string().replace(' ', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_spaces_are_percent_encoded() {
        let path = PathBuf::from("/jobs/front panel v2.nc");
        assert_eq!(encode_nc_path(&path), "/jobs/front%20panel%20v2.nc");
    }

    #[test]
    fn test_other_characters_pass_through() {
        let path = PathBuf::from("/jobs/a+b&c.nc");
        assert_eq!(encode_nc_path(&path), "/jobs/a+b&c.nc");
    }

    #[test]
    fn test_build_derives_units_from_drawing() {
        let doc = SimDocument::build(
            Path::new("part.nc"),
            &SimConfig::default(),
            DrawingUnits::Inches,
            None,
            ToolTable::new(),
        );
        assert_eq!(doc.units, ToolUnits::Imperial);
        assert_eq!(doc.resolution, ResolutionMode::Medium);
    }
}
