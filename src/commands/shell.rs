use crate::config::home_dir;
use crate::error::{C9aiError, Result};
use crate::session::{self, HostCommand, StdioMode};
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

/// `!<command>`: run a line through the host shell on the shared terminal.
///
/// Failures are reported inline; the shell loop carries on either way.
pub fn run(line: &str) {
    let line = line.trim();
    if line.is_empty() {
        return;
    }

    match session::run(&HostCommand::shell(line), StdioMode::Inherit) {
        Ok(outcome) if !outcome.success() => {
            println!("\n[c9ai: Command exited with code {}]", outcome.code_label());
        }
        Ok(_) => {}
        Err(e) => println!("\n[c9ai: Failed to start command: {}]", e),
    }
}

/// Resolve the target of `!cd`. No argument (or `~`) means home.
pub fn cd_target(arg: Option<&str>) -> Result<PathBuf> {
    match arg.map(str::trim).filter(|a| !a.is_empty()) {
        None => home_dir().ok_or(C9aiError::NoHomeDir),
        Some(dir) => expand_tilde(dir)
            .ok_or_else(|| C9aiError::CommandFailed(format!("cannot expand '{}'", dir))),
    }
}

/// `!cd [dir]`: change the working directory of this process.
pub fn change_dir(arg: Option<&str>) -> Result<()> {
    let target = cd_target(arg)?;
    std::env::set_current_dir(&target)
        .map_err(|e| C9aiError::CommandFailed(format!("cd {}: {}", target.display(), e)))?;

    let cwd = std::env::current_dir()?;
    println!("Changed directory to: {}", cwd.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[serial_test::serial]
    fn test_cd_target_defaults_to_home() {
        let home = home_dir().unwrap();
        assert_eq!(cd_target(None).unwrap(), home);
        assert_eq!(cd_target(Some("  ")).unwrap(), home);
        assert_eq!(cd_target(Some("~")).unwrap(), home);
    }

    #[test]
    fn test_cd_target_plain_path() {
        assert_eq!(cd_target(Some("/tmp")).unwrap(), PathBuf::from("/tmp"));
        assert_eq!(cd_target(Some("sub/dir")).unwrap(), PathBuf::from("sub/dir"));
    }

    #[test]
    #[serial_test::serial]
    fn test_change_dir_moves_process() {
        let original = std::env::current_dir().unwrap();
        let dir = tempfile::TempDir::new().unwrap();

        change_dir(Some(dir.path().to_str().unwrap())).unwrap();
        assert_eq!(
            std::env::current_dir().unwrap().canonicalize().unwrap(),
            dir.path().canonicalize().unwrap()
        );

        std::env::set_current_dir(original).unwrap();
    }

    #[test]
    #[serial_test::serial]
    fn test_change_dir_missing_target() {
        assert!(change_dir(Some("/nonexistent/c9ai/dir")).is_err());
    }
}
