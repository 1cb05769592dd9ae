pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const ENTRY_PAGE_FILE: &str = "index.html";
pub(crate) const SHELL_MANIFEST_FILE: &str = "shell-manifest.json";

pub(crate) const DEFAULT_WINDOW_TITLE: &str = "ngind editor";
pub(crate) const DEFAULT_WINDOW_WIDTH: f64 = 1280.0;
pub(crate) const DEFAULT_WINDOW_HEIGHT: f64 = 800.0;

pub(crate) const SHELL_ROOT_ENV: &str = "NGIND_EDITOR_ROOT";
pub(crate) const SHELL_ROOT_DIR_NAME: &str = ".ngind-editor";
pub(crate) const DESKTOP_LOG_FILE: &str = "desktop.log";
pub(crate) const DESKTOP_LOG_MAX_BYTES: u64 = 5 * 1024 * 1024;
