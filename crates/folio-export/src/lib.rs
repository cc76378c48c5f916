//! folio-export
//!
//! HTML rendering from Tera templates and PDF rasterization through a
//! headless browser.

pub mod browser;
pub mod chromium;
pub mod error;
pub mod pdf;
pub mod render;
