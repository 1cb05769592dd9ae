use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorKind {
    NotReady,
    AlreadyCreated,
    ProgramDir,
    EntryPage,
    WindowCreation,
}

#[derive(Debug, Error)]
pub(crate) enum ShellError {
    #[error("main window requested before the runtime signalled ready")]
    NotReady,

    #[error("main window has already been created")]
    AlreadyCreated,

    #[error("cannot resolve program directory: {0}")]
    ProgramDir(String),

    #[error("entry page path is not an absolute file path: {}", .0.display())]
    EntryPage(PathBuf),

    #[error("failed to create main window: {0}")]
    WindowCreation(String),
}

impl ShellError {
    pub(crate) fn kind(&self) -> ErrorKind {
        match self {
            Self::NotReady => ErrorKind::NotReady,
            Self::AlreadyCreated => ErrorKind::AlreadyCreated,
            Self::ProgramDir(_) => ErrorKind::ProgramDir,
            Self::EntryPage(_) => ErrorKind::EntryPage,
            Self::WindowCreation(_) => ErrorKind::WindowCreation,
        }
    }
}
