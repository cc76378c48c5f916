use serde::{Deserialize, Serialize};

pub const MM_PER_INCH: f64 = 25.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaperSize {
    A4,
}

impl PaperSize {
    /// Portrait (width, height) in millimetres.
    pub fn dimensions_mm(self) -> (f64, f64) {
        match self {
            PaperSize::A4 => (210.0, 297.0),
        }
    }

    pub fn dimensions_in(self) -> (f64, f64) {
        let (w, h) = self.dimensions_mm();
        (mm_to_inches(w), mm_to_inches(h))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top_mm: f64,
    pub right_mm: f64,
    pub bottom_mm: f64,
    pub left_mm: f64,
}

impl Margins {
    pub fn uniform(mm: f64) -> Self {
        Self {
            top_mm: mm,
            right_mm: mm,
            bottom_mm: mm,
            left_mm: mm,
        }
    }
}

/// Page setup applied when the browser prints the document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PdfLayout {
    pub paper: PaperSize,
    pub print_background: bool,
    pub margins: Margins,
}

impl Default for PdfLayout {
    /// A4, backgrounds printed, 1 cm on every side.
    fn default() -> Self {
        Self {
            paper: PaperSize::A4,
            print_background: true,
            margins: Margins::uniform(10.0),
        }
    }
}

pub fn mm_to_inches(mm: f64) -> f64 {
    mm / MM_PER_INCH
}
