use crate::config::home_dir;
use std::path::{Path, PathBuf};

/// Expand a leading tilde in `path`.
///
/// Supports:
/// - `~` or `~/path` - the current user's home directory
/// - `~username/path` - the named user's home directory (Unix only)
///
/// Returns `None` when the home directory can't be determined.
///
/// # Examples
///
/// ```
/// use c9ai::utils::path::expand_tilde;
///
/// let path = expand_tilde("relative/dir").unwrap();
/// assert_eq!(path, std::path::PathBuf::from("relative/dir"));
/// ```
pub fn expand_tilde<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
    let path = path.as_ref();
    let path_str = path.to_str()?;

    let Some(after_tilde) = path_str.strip_prefix('~') else {
        return Some(path.to_path_buf());
    };

    if after_tilde.is_empty() || after_tilde.starts_with('/') {
        return Some(home_dir()?.join(after_tilde.trim_start_matches('/')));
    }

    let username_end = after_tilde.find('/').unwrap_or(after_tilde.len());
    let username = &after_tilde[..username_end];
    let rest = after_tilde[username_end..].trim_start_matches('/');

    Some(user_home(username)?.join(rest))
}

#[cfg(unix)]
fn user_home(username: &str) -> Option<PathBuf> {
    use uzers::os::unix::UserExt;

    let user = uzers::get_user_by_name(username)?;
    Some(user.home_dir().to_path_buf())
}

#[cfg(not(unix))]
fn user_home(_username: &str) -> Option<PathBuf> {
    None
}
