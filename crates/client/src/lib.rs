#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Fact-check page controller: validation, submission, result rendering and
//! live language switching over a headless page model.

pub mod backend;
pub mod context;
pub mod controller;
pub mod localize;
pub mod mode;
pub mod prefs;
pub mod submit;
pub mod view;

pub use backend::{Backend, CheckError, HttpBackend, TranslateError};
pub use context::{AppContext, DynamicTextEntry};
pub use controller::{Controller, Event};
pub use prefs::{PreferenceStore, Preferences};
pub use submit::SubmitError;
pub use view::{Page, View};
