//! Low-level WordprocessingML fragments
//!
//! Cell-property fragments shared by the sidebar, the content boxes and the
//! experience tables. Unit conventions follow the OOXML spec: border sizes
//! are eighths of a point, cell margins are twentieths of a point (dxa),
//! font sizes are half-points.

use crate::theme::Rgb;

/// Escape special XML characters
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Solid background fill for a table cell (`w:shd`)
pub fn cell_shading(fill: Rgb) -> String {
    format!(r#"<w:shd w:val="clear" w:color="auto" w:fill="{}"/>"#, fill.hex())
}

/// Uniform single borders on all four sides of a cell (`w:tcBorders`)
///
/// `size_pt` is the border weight in points.
pub fn cell_borders(color: Rgb, size_pt: u32) -> String {
    let sz = size_pt * 8;
    let hex = color.hex();
    let mut xml = String::from("<w:tcBorders>");
    for side in ["top", "left", "bottom", "right"] {
        xml.push_str(&format!(
            r#"<w:{side} w:val="single" w:sz="{sz}" w:space="0" w:color="{hex}"/>"#
        ));
    }
    xml.push_str("</w:tcBorders>");
    xml
}

/// Internal cell margins (`w:tcMar`), given in points per side
pub fn cell_margins(top_pt: u32, start_pt: u32, bottom_pt: u32, end_pt: u32) -> String {
    let mut xml = String::from("<w:tcMar>");
    for (side, pt) in [
        ("top", top_pt),
        ("start", start_pt),
        ("bottom", bottom_pt),
        ("end", end_pt),
    ] {
        xml.push_str(&format!(
            r#"<w:{side} w:w="{}" w:type="dxa"/>"#,
            pt * 20
        ));
    }
    xml.push_str("</w:tcMar>");
    xml
}

/// Run properties: font, color, half-point size and optional flags
pub fn run_props(
    font: &str,
    color: Option<Rgb>,
    half_points: u32,
    bold: bool,
    italic: bool,
    underline: bool,
) -> String {
    let mut xml = String::from("<w:rPr>");
    xml.push_str(&format!(
        r#"<w:rFonts w:ascii="{font}" w:hAnsi="{font}"/>"#,
        font = escape_xml(font)
    ));
    if bold {
        xml.push_str("<w:b/>");
    }
    if italic {
        xml.push_str("<w:i/>");
    }
    if let Some(color) = color {
        xml.push_str(&format!(r#"<w:color w:val="{}"/>"#, color.hex()));
    }
    xml.push_str(&format!(r#"<w:sz w:val="{half_points}"/>"#));
    xml.push_str(&format!(r#"<w:szCs w:val="{half_points}"/>"#));
    if underline {
        xml.push_str(r#"<w:u w:val="single"/>"#);
    }
    xml.push_str("</w:rPr>");
    xml
}
