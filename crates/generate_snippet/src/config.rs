// crates/generate_snippet/src/config.rs

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use folder_snippet::SnippetOptions;
use std::env;

/// Environment variable holding a default options object (same JSON shape as `--options`).
pub const OPTIONS_ENV: &str = "FOLDER_SNIPPET_OPTIONS";
/// When set, `--copy` only logs instead of running `pbcopy`.
pub const DISABLE_PBCOPY_ENV: &str = "DISABLE_PBCOPY";

/// Runtime configuration composed from CLI + environment.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub options: SnippetOptions,
    /// Wrap the snippet in a ```` ```dataviewjs ```` fence.
    pub fence: bool,
    pub copy: bool,
    pub disable_pbcopy: bool,
    pub verbose: bool,
}

pub fn build_cli() -> Command {
    Command::new("generate_snippet")
        .version("0.1.0")
        .about("Prints the folder constants preamble for DataviewJS blocks")
        .arg(
            Arg::new("include_auxiliary")
                .long("include-auxiliary")
                .help("Also declare the auxiliary folders and the combined list")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no_query")
                .long("no-query")
                .help("Do not declare the OR-joined query string")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("topic_var")
                .long("topic-var")
                .num_args(1)
                .value_name("NAME")
                .help("Identifier for the topic folder array"),
        )
        .arg(
            Arg::new("auxiliary_var")
                .long("auxiliary-var")
                .num_args(1)
                .value_name("NAME")
                .help("Identifier for the auxiliary folder array"),
        )
        .arg(
            Arg::new("combined_var")
                .long("combined-var")
                .num_args(1)
                .value_name("NAME")
                .help("Identifier for the combined folder array"),
        )
        .arg(
            Arg::new("query_var")
                .long("query-var")
                .num_args(1)
                .value_name("NAME")
                .help("Identifier for the query string"),
        )
        .arg(
            Arg::new("options")
                .long("options")
                .num_args(1)
                .value_name("JSON")
                .help("Templater-style options object, e.g. '{\"include_auxiliary\": true}'"),
        )
        .arg(
            Arg::new("fence")
                .long("fence")
                .help("Wrap the snippet in a dataviewjs code fence")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("copy")
                .long("copy")
                .help("Copy the output to the clipboard")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
}

impl AppConfig {
    /// Builds the configuration from parsed arguments and the process environment.
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let env_options = env::var(OPTIONS_ENV).ok();
        let disable_pbcopy = env::var(DISABLE_PBCOPY_ENV).is_ok();
        Self::resolve(matches, env_options.as_deref(), disable_pbcopy)
    }

    /// Precedence: individual flags, then `--options`, then the environment
    /// options object, then the built-in defaults.
    pub fn resolve(
        matches: &ArgMatches,
        env_options: Option<&str>,
        disable_pbcopy: bool,
    ) -> Result<Self> {
        let mut options = match matches.get_one::<String>("options") {
            Some(json) => SnippetOptions::from_json(json).context("Invalid --options")?,
            None => match env_options {
                Some(json) => SnippetOptions::from_json(json)
                    .with_context(|| format!("Invalid {}", OPTIONS_ENV))?,
                None => SnippetOptions::default(),
            },
        };

        if matches.get_flag("include_auxiliary") {
            options.include_auxiliary = true;
        }
        if matches.get_flag("no_query") {
            options.with_query = false;
        }
        if let Some(name) = matches.get_one::<String>("topic_var") {
            options.topic_var = name.clone();
        }
        if let Some(name) = matches.get_one::<String>("auxiliary_var") {
            options.auxiliary_var = name.clone();
        }
        if let Some(name) = matches.get_one::<String>("combined_var") {
            options.combined_var = name.clone();
        }
        if let Some(name) = matches.get_one::<String>("query_var") {
            options.query_var = name.clone();
        }

        Ok(Self {
            options,
            fence: matches.get_flag("fence"),
            copy: matches.get_flag("copy"),
            disable_pbcopy,
            verbose: matches.get_flag("verbose"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(args: &[&str], env_options: Option<&str>) -> Result<AppConfig> {
        let matches = build_cli()
            .try_get_matches_from(std::iter::once("generate_snippet").chain(args.iter().copied()))
            .expect("arguments should parse");
        AppConfig::resolve(&matches, env_options, false)
    }

    #[test]
    fn test_no_arguments_gives_defaults() {
        let config = resolve(&[], None).unwrap();
        assert_eq!(config.options, SnippetOptions::default());
        assert!(!config.fence);
        assert!(!config.copy);
        assert!(!config.verbose);
    }

    #[test]
    fn test_flags_override_options_json() {
        let config = resolve(
            &["--options", r#"{"withQuery": true, "topicVar": "A"}"#, "--no-query", "--topic-var", "B"],
            None,
        )
        .unwrap();
        assert!(!config.options.with_query);
        assert_eq!(config.options.topic_var, "B");
    }

    #[test]
    fn test_options_argument_beats_environment() {
        let config = resolve(
            &["--options", r#"{"queryVar": "fromArg"}"#],
            Some(r#"{"queryVar": "fromEnv", "include_auxiliary": true}"#),
        )
        .unwrap();
        assert_eq!(config.options.query_var, "fromArg");
        assert!(!config.options.include_auxiliary);
    }

    #[test]
    fn test_environment_options_used_without_argument() {
        let config = resolve(&["--fence"], Some(r#"{"include_auxiliary": true}"#)).unwrap();
        assert!(config.options.include_auxiliary);
        assert!(config.fence);
    }

    #[test]
    fn test_bad_options_json_is_reported() {
        let err = resolve(&["--options", r#"{"topicVar": 3}"#], None).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Invalid --options"), "{}", message);
        assert!(message.contains("topicVar"), "{}", message);
    }
}
