//! Visual configuration for the rendered resume
//!
//! All colors, fonts, column widths and page margins live in an immutable
//! [`Theme`] handed to the renderer, so two renders with the same theme and
//! record produce the same document.

use std::path::PathBuf;

/// Twentieths of a point per inch (the base unit for widths and margins)
pub const TWIPS_PER_INCH: i64 = 1440;

/// Convert inches to twips
pub fn inches_to_twips(inches: f64) -> i64 {
    (inches * TWIPS_PER_INCH as f64).round() as i64
}

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// Six-digit uppercase hex form used in OOXML attributes (no '#')
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Page margins in twips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMargins {
    pub top: i64,
    pub bottom: i64,
    pub left: i64,
    pub right: i64,
}

/// Style configuration for the whole document
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for section headers and the sidebar fill
    pub accent: Rgb,
    /// Text color inside the shaded sidebar
    pub sidebar_text: Rgb,
    /// Border color for the content boxes
    pub box_border: Rgb,
    /// Font for headers and body text
    pub heading_font: String,
    /// Font for achievement bullets
    pub bullet_font: String,
    /// Sidebar column width (twips)
    pub sidebar_width: i64,
    /// Spacer column width (twips)
    pub spacer_width: i64,
    /// Main content column width (twips)
    pub main_width: i64,
    /// Margins for the first page
    pub page_margins: PageMargins,
    /// Margins for overflow pages
    pub overflow_margins: PageMargins,
    /// Minimum height of the first-page experience box (twips)
    pub experience_box_height: i64,
    /// Vertical allowance for the repeated header on overflow pages (twips)
    pub overflow_header_allowance: i64,
    /// Maximum number of skills shown in the sidebar
    pub skill_limit: usize,
    /// Text shown when the logo asset is missing
    pub wordmark: String,
    /// Path to the optional logo image
    pub logo_path: PathBuf,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Rgb(0, 102, 204),
            sidebar_text: Rgb::WHITE,
            box_border: Rgb::BLACK,
            heading_font: "Aptos".to_string(),
            bullet_font: "Roboto".to_string(),
            sidebar_width: inches_to_twips(2.4),
            spacer_width: inches_to_twips(0.15),
            main_width: inches_to_twips(5.2),
            page_margins: PageMargins {
                top: inches_to_twips(0.5),
                bottom: inches_to_twips(0.5),
                left: inches_to_twips(0.25),
                right: inches_to_twips(0.25),
            },
            overflow_margins: PageMargins {
                top: inches_to_twips(0.5),
                bottom: inches_to_twips(0.5),
                left: inches_to_twips(0.35),
                right: inches_to_twips(0.25),
            },
            experience_box_height: inches_to_twips(8.0),
            overflow_header_allowance: inches_to_twips(0.8),
            skill_limit: 10,
            wordmark: "KANERIKA".to_string(),
            logo_path: PathBuf::from("logo.png"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_formatting() {
        assert_eq!(Rgb(0, 102, 204).hex(), "0066CC");
        assert_eq!(Rgb::WHITE.hex(), "FFFFFF");
        assert_eq!(Rgb::BLACK.hex(), "000000");
    }

    #[test]
    fn test_inches_to_twips() {
        assert_eq!(inches_to_twips(1.0), 1440);
        assert_eq!(inches_to_twips(2.4), 3456);
        assert_eq!(inches_to_twips(0.15), 216);
    }

    #[test]
    fn test_default_theme_widths() {
        let theme = Theme::default();
        // The three columns fill the printable width of a letter page
        let total = theme.sidebar_width + theme.spacer_width + theme.main_width;
        let printable =
            inches_to_twips(8.5) - theme.page_margins.left - theme.page_margins.right;
        assert!(total <= printable);
        assert_eq!(theme.skill_limit, 10);
    }
}
