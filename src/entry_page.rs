use std::path::{Path, PathBuf};

use url::Url;

use crate::{shell_error::ShellError, ENTRY_PAGE_FILE};

pub(crate) fn resolve_entry_page_path(program_dir: &Path) -> PathBuf {
    program_dir.join(ENTRY_PAGE_FILE)
}

pub(crate) fn entry_page_url(entry_page_path: &Path) -> Result<Url, ShellError> {
    Url::from_file_path(entry_page_path)
        .map_err(|()| ShellError::EntryPage(entry_page_path.to_path_buf()))
}
