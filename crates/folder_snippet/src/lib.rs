// crates/folder_snippet/src/lib.rs

//! Generates the folder-constant preamble that DataviewJS blocks paste in
//! front of their own code:
//!
//! ```text
//! const TOPIC_FOLDERS = ["20-Algorithms",...];
//! const folderQuery = TOPIC_FOLDERS.map(folder => `"${folder}"`).join(" or ");
//! ```
//!
//! The output is source text for the host; nothing here evaluates it.

mod error;
mod identifier;
mod options;

pub use error::SnippetError;
pub use identifier::validate_identifier;
pub use options::SnippetOptions;

use folder_constants::{AUXILIARY_FOLDERS_DEFAULT, QUERY_SEPARATOR, TOPIC_FOLDERS_DEFAULT};

/// Builds the snippet for `options`.
///
/// Lines are emitted in a fixed order: topic array, then (with
/// `include_auxiliary`) the auxiliary array and the combined array, then the
/// query line when `with_query` is set. The query reads from the combined
/// array if there is one, otherwise from the topic array.
pub fn generate(options: &SnippetOptions) -> Result<String, SnippetError> {
    options.validate()?;

    let topic_folders = render_folder_array(TOPIC_FOLDERS_DEFAULT)?;
    let mut snippet = format!("const {} = {};\n", options.topic_var, topic_folders);

    let query_source = if options.include_auxiliary {
        let auxiliary_folders = render_folder_array(AUXILIARY_FOLDERS_DEFAULT)?;
        snippet.push_str(&format!(
            "const {} = {};\n",
            options.auxiliary_var, auxiliary_folders
        ));
        snippet.push_str(&format!(
            "const {} = [...{}, ...{}];\n",
            options.combined_var, options.topic_var, options.auxiliary_var
        ));
        &options.combined_var
    } else {
        &options.topic_var
    };

    if options.with_query {
        snippet.push_str(&query_line(&options.query_var, query_source)?);
    }

    log::debug!(
        "generated {} declaration(s) for {}",
        snippet.lines().count(),
        options.topic_var
    );
    Ok(snippet)
}

/// Renders the folders as a compact JSON array, the same text the host's
/// `JSON.stringify` would produce.
fn render_folder_array(folders: &[&str]) -> Result<String, SnippetError> {
    serde_json::to_string(folders).map_err(|e| SnippetError::Render(e.to_string()))
}

/// Renders a JSON string literal, which is also a valid script string literal.
fn render_string(value: &str) -> Result<String, SnippetError> {
    serde_json::to_string(value).map_err(|e| SnippetError::Render(e.to_string()))
}

fn query_line(query_var: &str, source_var: &str) -> Result<String, SnippetError> {
    Ok(format!(
        "const {} = {}.map(folder => `\"${{folder}}\"`).join({});\n",
        query_var,
        source_var,
        render_string(QUERY_SEPARATOR)?
    ))
}
