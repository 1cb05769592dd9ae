use std::{fs, path::Path};

use crate::{append_startup_log, ShellManifest, SHELL_MANIFEST_FILE};

pub(crate) fn load_shell_manifest(program_dir: &Path) -> ShellManifest {
    match read_shell_manifest(program_dir) {
        Ok(Some(manifest)) => manifest,
        Ok(None) => ShellManifest::default(),
        Err(error) => {
            append_startup_log(&format!("{error}; using default window settings"));
            ShellManifest::default()
        }
    }
}

fn read_shell_manifest(program_dir: &Path) -> Result<Option<ShellManifest>, String> {
    let manifest_path = program_dir.join(SHELL_MANIFEST_FILE);
    let manifest_text = match fs::read_to_string(&manifest_path) {
        Ok(text) => text,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(error) => {
            return Err(format!(
                "Failed to read shell manifest {}: {}",
                manifest_path.display(),
                error
            ))
        }
    };

    let manifest: ShellManifest = serde_json::from_str(&manifest_text).map_err(|error| {
        format!(
            "Failed to parse shell manifest {}: {}",
            manifest_path.display(),
            error
        )
    })?;
    Ok(Some(manifest.sanitized()))
}
