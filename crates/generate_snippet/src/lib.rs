// crates/generate_snippet/src/lib.rs

use anyhow::{Context, Result};

pub mod clipboard;
pub mod config;

use config::AppConfig;

/// Produces the text to print for `config`: the folder snippet, optionally
/// inside a `dataviewjs` fence ready to paste into a note.
pub fn generate_snippet(config: &AppConfig) -> Result<String> {
    let snippet =
        folder_snippet::generate(&config.options).context("Failed to generate folder snippet")?;

    if config.fence {
        Ok(fence_dataviewjs(&snippet))
    } else {
        Ok(snippet)
    }
}

fn fence_dataviewjs(snippet: &str) -> String {
    format!("```dataviewjs\n{}```\n", snippet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folder_snippet::SnippetOptions;

    fn config(options: SnippetOptions, fence: bool) -> AppConfig {
        AppConfig {
            options,
            fence,
            copy: false,
            disable_pbcopy: true,
            verbose: false,
        }
    }

    #[test]
    fn test_unfenced_output_is_the_snippet() {
        let options = SnippetOptions::default().include_auxiliary(true);
        let out = generate_snippet(&config(options.clone(), false)).unwrap();
        assert_eq!(out, folder_snippet::generate(&options).unwrap());
    }

    #[test]
    fn test_fenced_output() {
        let out = generate_snippet(&config(SnippetOptions::default().with_query(false), true)).unwrap();
        assert!(out.starts_with("```dataviewjs\nconst TOPIC_FOLDERS = ["));
        assert!(out.ends_with("];\n```\n"));
    }

    #[test]
    fn test_usage_error_carries_context() {
        let err = generate_snippet(&config(SnippetOptions::default().with_topic_var("let"), false))
            .unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.starts_with("Failed to generate folder snippet"), "{}", message);
        assert!(message.contains("reserved word"), "{}", message);
    }
}
