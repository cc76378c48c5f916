//! folio-lambda
//!
//! The function itself: parse the event, render the template, print it with
//! a headless browser, store the PDF, and answer with it base64-encoded.

pub mod config;
pub mod error;
pub mod event;
pub mod handler;
pub mod pipeline;
pub mod response;
pub mod state;
