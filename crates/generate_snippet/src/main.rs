// crates/generate_snippet/src/main.rs

use anyhow::{Context, Result};
use env_logger::Env;

use generate_snippet::clipboard::{Clipboard, MacClipboard};
use generate_snippet::config::{build_cli, AppConfig};
use generate_snippet::generate_snippet;

fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    let config = AppConfig::from_matches(&matches)?;

    let default_level = if config.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();
    log::debug!("{:?}", config);

    let output = generate_snippet(&config)?;
    print!("{}", output);

    if config.copy {
        if config.disable_pbcopy {
            eprintln!("DISABLE_PBCOPY is set; skipping clipboard copy.");
        } else {
            MacClipboard::default()
                .copy(&output)
                .context("Failed to copy snippet to clipboard")?;
            eprintln!("Snippet has been copied to clipboard.");
        }
    }

    Ok(())
}
