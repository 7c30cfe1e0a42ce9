// crates/generate_snippet/src/clipboard.rs

use anyhow::{anyhow, Result};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Copy text to the clipboard.
pub trait Clipboard {
    fn copy(&self, text: &str) -> Result<()>;
}

/// macOS clipboard via `pbcopy`.
pub struct MacClipboard {
    program: PathBuf,
}

impl Default for MacClipboard {
    fn default() -> Self {
        Self {
            program: PathBuf::from("pbcopy"),
        }
    }
}

impl MacClipboard {
    /// Uses `program` in place of `pbcopy`; it must read the text from stdin.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Clipboard for MacClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        let name = self.program.display();
        let mut child = Command::new(&self.program)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| anyhow!("Error running {}: {}", name, e))?;

        child
            .stdin
            .take()
            .ok_or_else(|| anyhow!("Failed to open {} stdin", name))?
            .write_all(text.as_bytes())
            .map_err(|e| anyhow!("Failed to write to {}: {}", name, e))?;

        let status = child
            .wait()
            .map_err(|e| anyhow!("Failed to wait on {}: {}", name, e))?;
        if !status.success() {
            return Err(anyhow!("{} exited with status {}", name, status));
        }
        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_script(dir: &Path, body: &str) -> PathBuf {
        let script = dir.join("fake_pbcopy");
        fs::write(&script, format!("#!/bin/sh\n{}\n", body)).unwrap();
        let mut perms = fs::metadata(&script).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&script, perms).unwrap();
        script
    }

    #[test]
    fn test_copy_writes_text_to_program_stdin() {
        let td = TempDir::new().unwrap();
        let out_file = td.path().join("captured.txt");
        let script = write_script(td.path(), &format!("cat - > \"{}\"", out_file.display()));

        MacClipboard::with_program(&script)
            .copy("const A = [];\n")
            .expect("copy ok");

        assert_eq!(fs::read_to_string(&out_file).unwrap(), "const A = [];\n");
    }

    #[test]
    fn test_copy_fails_on_nonzero_exit() {
        let td = TempDir::new().unwrap();
        let script = write_script(td.path(), "cat - >/dev/null\nexit 1");

        let err = MacClipboard::with_program(&script)
            .copy("text")
            .unwrap_err()
            .to_string();
        assert!(err.contains("exited with status"), "{}", err);
    }

    #[test]
    fn test_copy_fails_when_program_missing() {
        let td = TempDir::new().unwrap();
        let missing = td.path().join("no_such_pbcopy");

        let err = MacClipboard::with_program(&missing)
            .copy("text")
            .unwrap_err()
            .to_string();
        assert!(err.starts_with("Error running"), "{}", err);
    }
}
