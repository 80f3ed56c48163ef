use crate::commands::helpers;
use crate::context::SessionContext;
use crate::error::Result;
use std::path::Path;

/// Names of the executable files directly inside `dir`, sorted.
///
/// On Unix a file counts when its owner-execute bit is set; elsewhere every
/// regular file is listed.
pub fn executable_tools(dir: &Path) -> Result<Vec<String>> {
    let mut tools = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let meta = entry.metadata()?;
        if meta.is_file() && is_executable(&meta) {
            tools.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    tools.sort();
    Ok(tools)
}

#[cfg(unix)]
fn is_executable(meta: &std::fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o100 != 0
}

#[cfg(not(unix))]
fn is_executable(_meta: &std::fs::Metadata) -> bool {
    true
}

pub fn execute(ctx: &SessionContext) -> Result<()> {
    let dir = ctx.paths.tools_dir();
    helpers::heading("🔧 Available Tools:", 40);

    let tools = match executable_tools(&dir) {
        Ok(tools) => tools,
        Err(e) => {
            tracing::debug!("could not read {}: {}", dir.display(), e);
            Vec::new()
        }
    };

    if tools.is_empty() {
        println!("No executable tools found in {}", dir.display());
        return Ok(());
    }

    for tool in &tools {
        println!("  • {}", tool);
    }
    println!("\n💡 Use them in todo.md with: @action: run <tool>");
    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, mode: u32) {
        let path = dir.join(name);
        std::fs::write(&path, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(mode)).unwrap();
    }

    #[test]
    fn test_only_owner_executable_files() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "zeta.sh", 0o755);
        write(dir.path(), "alpha.sh", 0o700);
        write(dir.path(), "notes.txt", 0o644);
        std::fs::create_dir(dir.path().join("subdir")).unwrap();

        assert_eq!(
            executable_tools(dir.path()).unwrap(),
            vec!["alpha.sh", "zeta.sh"]
        );
    }

    #[test]
    fn test_missing_dir_is_error() {
        assert!(executable_tools(Path::new("/nonexistent/c9ai/tools")).is_err());
    }
}
