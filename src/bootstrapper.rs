use std::{
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicBool, Ordering},
        OnceLock,
    },
};

use url::Url;

use crate::{
    append_desktop_log, append_startup_log,
    entry_page::{entry_page_url, resolve_entry_page_path},
    shell_error::ShellError,
    BootstrapState,
};

/// Window-creation primitive of the host runtime.
pub(crate) trait WindowHost {
    type Window;

    fn open_window(&self, target: &Url) -> Result<Self::Window, String>;
}

/// Owns the single main window for the lifetime of the process.
///
/// The window slot starts empty and is filled at most once, after the host
/// runtime has signalled ready.
#[derive(Debug)]
pub(crate) struct ShellBootstrapper<W> {
    program_dir: PathBuf,
    ready: AtomicBool,
    main_window: OnceLock<W>,
}

impl<W> ShellBootstrapper<W> {
    pub(crate) fn new(program_dir: impl Into<PathBuf>) -> Self {
        Self {
            program_dir: program_dir.into(),
            ready: AtomicBool::new(false),
            main_window: OnceLock::new(),
        }
    }

    pub(crate) fn program_dir(&self) -> &Path {
        &self.program_dir
    }

    pub(crate) fn entry_page_path(&self) -> PathBuf {
        resolve_entry_page_path(&self.program_dir)
    }

    pub(crate) fn main_window(&self) -> Option<&W> {
        self.main_window.get()
    }

    pub(crate) fn state(&self) -> BootstrapState {
        if self.main_window.get().is_some() {
            BootstrapState::WindowCreated
        } else {
            BootstrapState::Unstarted
        }
    }

    pub(crate) fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    pub(crate) fn on_ready<H>(&self, host: &H) -> Result<&W, ShellError>
    where
        H: WindowHost<Window = W>,
    {
        self.ready.store(true, Ordering::Release);
        match self.create_main_window(host) {
            Err(ShellError::AlreadyCreated) => {
                append_desktop_log("ready signalled again; keeping existing main window");
                self.main_window.get().ok_or(ShellError::AlreadyCreated)
            }
            result => result,
        }
    }

    pub(crate) fn create_main_window<H>(&self, host: &H) -> Result<&W, ShellError>
    where
        H: WindowHost<Window = W>,
    {
        if !self.is_ready() {
            return Err(ShellError::NotReady);
        }
        if self.main_window.get().is_some() {
            return Err(ShellError::AlreadyCreated);
        }

        let entry_page_path = self.entry_page_path();
        if !entry_page_path.is_file() {
            append_startup_log(&format!(
                "entry page not found at {}; window will show the load failure",
                entry_page_path.display()
            ));
        }
        let target = entry_page_url(&entry_page_path)?;
        append_startup_log(&format!("opening main window at {target}"));

        let window = host.open_window(&target).map_err(ShellError::WindowCreation)?;
        if self.main_window.set(window).is_err() {
            return Err(ShellError::AlreadyCreated);
        }
        self.main_window.get().ok_or(ShellError::AlreadyCreated)
    }
}
