use std::{env, path::PathBuf};

use crate::{shell_error::ShellError, SHELL_ROOT_DIR_NAME, SHELL_ROOT_ENV};

pub(crate) fn program_dir() -> Result<PathBuf, ShellError> {
    let exe_path = env::current_exe()
        .map_err(|error| ShellError::ProgramDir(format!("current_exe failed: {error}")))?;
    exe_path
        .parent()
        .map(|parent| parent.to_path_buf())
        .ok_or_else(|| {
            ShellError::ProgramDir(format!(
                "executable path has no parent: {}",
                exe_path.display()
            ))
        })
}

#[cfg(not(test))]
pub(crate) fn default_packaged_root_dir() -> Option<PathBuf> {
    packaged_root_dir_from(env::var(SHELL_ROOT_ENV).ok(), home::home_dir())
}

// Test runs keep their log output out of the user's home directory.
#[cfg(test)]
pub(crate) fn default_packaged_root_dir() -> Option<PathBuf> {
    Some(env::temp_dir().join(SHELL_ROOT_DIR_NAME).join("test-runs"))
}

fn packaged_root_dir_from(root_override: Option<String>, home_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(root) = root_override {
        let trimmed = root.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }

    home_dir.map(|home| home.join(SHELL_ROOT_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packaged_root_dir_prefers_env_override() {
        let resolved = packaged_root_dir_from(
            Some("  /opt/ngind  ".to_string()),
            Some(PathBuf::from("/home/dev")),
        );
        assert_eq!(resolved, Some(PathBuf::from("/opt/ngind")));
    }

    #[test]
    fn packaged_root_dir_ignores_blank_override() {
        let resolved =
            packaged_root_dir_from(Some("   ".to_string()), Some(PathBuf::from("/home/dev")));
        assert_eq!(
            resolved,
            Some(PathBuf::from("/home/dev").join(SHELL_ROOT_DIR_NAME))
        );
    }

    #[test]
    fn packaged_root_dir_is_none_without_home() {
        assert_eq!(packaged_root_dir_from(None, None), None);
    }

    #[test]
    fn default_packaged_root_dir_stays_in_temp_dir_under_test() {
        let root = default_packaged_root_dir().expect("test root is always set");
        assert!(root.starts_with(env::temp_dir()));
        if let Some(home) = home::home_dir() {
            assert!(!root.starts_with(home.join(SHELL_ROOT_DIR_NAME)));
        }
    }

    #[test]
    fn program_dir_contains_running_executable() {
        let dir = program_dir().expect("test binary has a parent directory");
        let exe = env::current_exe().expect("current exe");
        assert_eq!(exe.parent(), Some(dir.as_path()));
    }
}
