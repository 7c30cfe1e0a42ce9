// crates/folder_snippet/src/error.rs

use thiserror::Error;

/// Malformed usage of the snippet generator.
///
/// Every variant is raised before any text is produced, so a caller either
/// gets a complete snippet or one of these.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnippetError {
    #[error("`{field}` must not be empty")]
    EmptyIdentifier { field: &'static str },

    #[error("`{field}` is not a valid script identifier: {value:?}")]
    InvalidIdentifier { field: &'static str, value: String },

    #[error("`{field}` uses the reserved word {value:?}")]
    ReservedIdentifier { field: &'static str, value: String },

    #[error("`{first}` and `{second}` would both declare {value:?}")]
    DuplicateIdentifier {
        first: &'static str,
        second: &'static str,
        value: String,
    },

    #[error("option `{field}` must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("malformed options: {0}")]
    MalformedOptions(String),

    #[error("failed to render folder list: {0}")]
    Render(String),
}
