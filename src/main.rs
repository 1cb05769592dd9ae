#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_runtime;
mod app_types;
mod bootstrapper;
mod entry_page;
mod lifecycle;
mod logging;
mod main_window;
mod runtime_paths;
mod shell_error;
mod shell_manifest;

pub(crate) use app_constants::*;
pub(crate) use app_types::{BootstrapState, ShellManifest};
pub(crate) use bootstrapper::ShellBootstrapper;
pub(crate) use logging::{append_desktop_log, append_startup_log};

fn main() {
    app_runtime::run();
}
