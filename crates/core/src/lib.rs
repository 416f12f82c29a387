#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Shared models and pure logic for the fact-check client.

pub mod api;
pub mod i18n;
pub mod model;
pub mod render;
pub mod validation;

mod text;

pub use text::{hostname_of, strip_markdown_emphasis, truncate_url, URL_DISPLAY_LIMIT};
