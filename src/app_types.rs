use serde::Deserialize;

use crate::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_TITLE, DEFAULT_WINDOW_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BootstrapState {
    Unstarted,
    WindowCreated,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct ShellManifest {
    pub(crate) title: String,
    pub(crate) width: f64,
    pub(crate) height: f64,
}

impl Default for ShellManifest {
    fn default() -> Self {
        Self {
            title: DEFAULT_WINDOW_TITLE.to_string(),
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl ShellManifest {
    pub(crate) fn sanitized(mut self) -> Self {
        if self.title.trim().is_empty() {
            self.title = DEFAULT_WINDOW_TITLE.to_string();
        }
        if !(self.width.is_finite() && self.width > 0.0) {
            self.width = DEFAULT_WINDOW_WIDTH;
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            self.height = DEFAULT_WINDOW_HEIGHT;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitized_replaces_blank_title_and_bad_sizes() {
        let manifest = ShellManifest {
            title: "  ".to_string(),
            width: -4.0,
            height: f64::NAN,
        }
        .sanitized();
        assert_eq!(manifest, ShellManifest::default());
    }

    #[test]
    fn sanitized_keeps_valid_values() {
        let manifest = ShellManifest {
            title: "Scene Editor".to_string(),
            width: 800.0,
            height: 600.0,
        };
        assert_eq!(manifest.clone().sanitized(), manifest);
    }
}
