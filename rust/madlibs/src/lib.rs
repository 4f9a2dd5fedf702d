//! # parlor-madlibs: Fill-in-the-blank Stories
//!
//! A small catalogue of story templates and the form state used to fill
//! them. Each form field carries an explicit `is_placeholder` flag, so an
//! untouched field is never mistaken for a real answer even when its text
//! equals the hint.
//!
//! ```rust
//! use parlor_madlibs::{story, Form};
//!
//! let mut form = Form::new(story("ambitions").unwrap());
//! form.set("profession", "Doctor").unwrap();
//! form.set("noun", "Music").unwrap();
//! form.set("feeling", "Happy").unwrap();
//! form.set("emotion", "Inspired").unwrap();
//! let text = form.generate().unwrap();
//! assert!(text.starts_with("When I was a child, I wanted to become a Doctor."));
//! ```

mod form;
mod stories;

pub use form::{Entry, Form};
pub use stories::{catalogue, story, Field, FieldKind, Story};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MadLibsError {
    #[error("Unknown story '{0}'")]
    UnknownStory(String),
    #[error("Unknown field '{0}'")]
    UnknownField(String),
    #[error("'{value}' is not an option for {field} (choose from: {options})")]
    InvalidChoice {
        field: String,
        value: String,
        options: String,
    },
    #[error("Please fill: {}", .0.join(", "))]
    Missing(Vec<String>),
}
