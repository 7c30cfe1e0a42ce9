// crates/folder_snippet/src/identifier.rs

use crate::error::SnippetError;
use once_cell::sync::Lazy;
use regex::Regex;

// An identifier in the host scripting dialect. `\u` escapes are not accepted.
static IDENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{ID_Start}_$][\p{ID_Continue}$\x{200C}\x{200D}]*$").unwrap()
});

// Words that cannot be bound with `const` inside the host's async wrapper.
// Kept sorted for `binary_search`.
static RESERVED: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "import", "in", "instanceof", "let", "new", "null", "return", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Checks that `value` can be used as the name of a `const` declaration.
///
/// `field` names the option the value came from and is echoed back in the
/// error so the caller knows which override to fix. Unicode identifiers such
/// as `café` are accepted; `\uXXXX` escapes are not.
pub fn validate_identifier(field: &'static str, value: &str) -> Result<(), SnippetError> {
    if value.is_empty() {
        return Err(SnippetError::EmptyIdentifier { field });
    }
    if !IDENT_RE.is_match(value) {
        return Err(SnippetError::InvalidIdentifier {
            field,
            value: value.to_string(),
        });
    }
    if RESERVED.binary_search(&value).is_ok() {
        return Err(SnippetError::ReservedIdentifier {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}
