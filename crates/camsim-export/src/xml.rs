//! XML rendering of the simulator project document
//!
//! The element and attribute names are the ones the external simulator
//! consumes; workpiece corners reproduce the `Point3` display format
//! wrapped in parentheses. Escaping is left to quick-xml; there is no
//! schema validation beyond well-formed output.

use crate::document::SimDocument;
use crate::error::ExportResult;
use quick_xml::events::BytesText;
use quick_xml::Writer;

/// Render a document to indented simulator project XML
pub fn render(doc: &SimDocument) -> ExportResult<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer
        .create_element("camotics")
        .write_inner_content(|w| -> quick_xml::Result<()> {
            w.create_element("nc-files")
                .write_text_content(BytesText::new(&doc.nc_file))?;
            w.create_element("resolution-mode")
                .with_attribute(("v", doc.resolution.as_flag()))
                .write_empty()?;
            w.create_element("units")
                .with_attribute(("v", doc.units.as_flag()))
                .write_empty()?;

            match &doc.stock {
                None => {
                    w.create_element("automatic-workpiece")
                        .with_attribute(("v", "true"))
                        .write_empty()?;
                }
                Some(stock) => {
                    w.create_element("automatic-workpiece")
                        .with_attribute(("v", "false"))
                        .write_empty()?;
                    w.create_element("workpiece-max")
                        .with_attribute(("v", format!("({})", stock.max).as_str()))
                        .write_empty()?;
                    w.create_element("workpiece-min")
                        .with_attribute(("v", format!("({})", stock.min).as_str()))
                        .write_empty()?;
                }
            }

            w.create_element("tool_table")
                .write_inner_content(|w| -> quick_xml::Result<()> {
                    for tool in doc.tools.iter() {
                        w.create_element("tool")
                            .with_attributes([
                                ("length", tool.length.to_string().as_str()),
                                ("number", tool.index.to_string().as_str()),
                                ("radius", (tool.diameter / 2.0).to_string().as_str()),
                                ("shape", tool.shape.as_flag()),
                                ("units", tool.units.as_flag()),
                            ])
                            .write_text_content(BytesText::new(&tool.description))?;
                    }
                    Ok(())
                })?;
            Ok(())
        })?;

    Ok(String::from_utf8(writer.into_inner())?)
}
