//! Error types for the configuration wizard.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::WizardPage;

/// Errors returned by [`super::WizardController`] operations.
///
/// None of these are fatal: each one leaves the wizard on the page it was on,
/// so the user can retry, switch method, or cancel.
#[derive(Debug, Error)]
pub enum WizardError {
    /// The picked directory contains none of the recognized init file names.
    #[error("no init file found in {}", path.display())]
    NoScriptFound {
        /// Directory the user picked
        path: PathBuf,
    },

    /// A scheme id that is not in the loaded catalog.
    ///
    /// Means the list widget and the catalog disagree; callers log and move on.
    #[error("unknown key scheme '{id}'")]
    UnknownScheme { id: String },

    /// Finishing on the create path with no scheme chosen.
    #[error("no key scheme is available")]
    NoSchemeAvailable,

    #[error("no setup method has been chosen")]
    MethodNotChosen,

    #[error("filename index {index} is out of range ({len} candidates)")]
    InvalidFilenameIndex { index: usize, len: usize },

    /// The wizard already finished or was cancelled.
    #[error("wizard is closed ({page})")]
    Closed { page: WizardPage },

    /// Picker or path resolution failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_script_found_message_includes_path() {
        let err = WizardError::NoScriptFound {
            path: PathBuf::from("/home/me/empty"),
        };
        assert_eq!(err.to_string(), "no init file found in /home/me/empty");
    }

    #[test]
    fn test_closed_message_names_page() {
        let err = WizardError::Closed {
            page: WizardPage::Cancelled,
        };
        assert_eq!(err.to_string(), "wizard is closed (Cancelled)");
    }
}
