//! tm_report — pure renderings of one analysis document.
//!
//! Determinism rules:
//! - No I/O, no clock, no network. Timestamps are arguments.
//! - Section order is fixed in code and identical in both renderings.
//! - Record order inside a section is the service's order, untouched.
//! - Free text is escaped in markup output and left verbatim in text output.
//!
//! Fragments produced here are not attached to any surface; adapters decide
//! where they land (a file, a webview, a test assertion).

#![forbid(unsafe_code)]

pub mod escape;
pub mod html;
pub mod text;

pub use escape::escape_html;
pub use html::{assemble, Fragment};
pub use text::{render_report, report_filename};
