use std::{
    env,
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};

use crate::{runtime_paths, DESKTOP_LOG_FILE, DESKTOP_LOG_MAX_BYTES, SHELL_ROOT_DIR_NAME};

pub(crate) fn resolve_desktop_log_path(root_dir: Option<PathBuf>, file_name: &str) -> PathBuf {
    root_dir
        .unwrap_or_else(|| env::temp_dir().join(SHELL_ROOT_DIR_NAME))
        .join("logs")
        .join(file_name)
}

fn format_log_line(timestamp: DateTime<Local>, scope: &str, message: &str) -> String {
    format!(
        "[{}] [{}] {}\n",
        timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
        scope,
        message
    )
}

fn rotated_log_path(log_path: &Path) -> PathBuf {
    let mut file_name = log_path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    file_name.push(".1");
    log_path.with_file_name(file_name)
}

fn rotate_if_oversized(log_path: &Path, max_bytes: u64) -> Result<(), String> {
    let size = match fs::metadata(log_path) {
        Ok(metadata) => metadata.len(),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(error) => {
            return Err(format!(
                "Failed to stat log file {}: {}",
                log_path.display(),
                error
            ))
        }
    };
    if size < max_bytes {
        return Ok(());
    }

    let rotated = rotated_log_path(log_path);
    fs::rename(log_path, &rotated).map_err(|error| {
        format!(
            "Failed to rotate log file {} to {}: {}",
            log_path.display(),
            rotated.display(),
            error
        )
    })
}

pub(crate) fn append_log_line(
    log_path: &Path,
    max_bytes: u64,
    scope: &str,
    message: &str,
) -> Result<(), String> {
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent).map_err(|error| {
            format!(
                "Failed to create log directory {}: {}",
                parent.display(),
                error
            )
        })?;
    }
    rotate_if_oversized(log_path, max_bytes)?;

    let line = format_log_line(Local::now(), scope, message);
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|error| format!("Failed to open log file {}: {}", log_path.display(), error))?;
    file.write_all(line.as_bytes())
        .map_err(|error| format!("Failed to write log file {}: {}", log_path.display(), error))
}

fn append_scoped_log(scope: &str, message: &str) {
    if cfg!(debug_assertions) {
        eprintln!("[{scope}] {message}");
    }

    let log_path =
        resolve_desktop_log_path(runtime_paths::default_packaged_root_dir(), DESKTOP_LOG_FILE);
    if let Err(error) = append_log_line(&log_path, DESKTOP_LOG_MAX_BYTES, scope, message) {
        eprintln!("desktop log unavailable: {error}");
    }
}

pub(crate) fn append_desktop_log(message: &str) {
    append_scoped_log("desktop", message);
}

pub(crate) fn append_startup_log(message: &str) {
    append_scoped_log("startup", message);
}
