//! Export and clipboard side effects for generated code.
//!
//! Both operations are fire-and-forget from the session's point of view:
//! nothing here feeds back into the animation model.

use std::{
    fs,
    path::{Path, PathBuf},
};

use animotion_core::{AnimationConfiguration, AnimationDefinition, CodeFormat, Session};
use thiserror::Error;
use tracing::{info, warn};

/// Result type for export and clipboard operations.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors raised while writing an artifact or touching the clipboard.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The export target directory is missing or not a directory.
    #[error("export directory does not exist: {0}")]
    MissingDirectory(PathBuf),

    /// The system clipboard could not be opened or written.
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A rendered export artifact: `<id>.<ext>` plus its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub contents: String,
}

impl Artifact {
    /// Render an animation and configuration in the given format.
    pub fn render(
        format: CodeFormat,
        animation: &AnimationDefinition,
        config: &AnimationConfiguration,
    ) -> Self {
        Self {
            file_name: format.file_name(animation),
            contents: format.render(animation, config),
        }
    }

    /// Render whatever the session currently shows.
    pub fn from_session(session: &Session) -> Self {
        Self {
            file_name: session.file_name(),
            contents: session.code(),
        }
    }
}

// -------------------------- FILE EXPORT --------------------------

/// Writes artifacts into a fixed directory.
#[derive(Debug, Clone)]
pub struct Exporter {
    dir: PathBuf,
}

impl Exporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write the artifact, replacing any file of the same name.
    ///
    /// Returns the path written.
    pub fn write(&self, artifact: &Artifact) -> Result<PathBuf> {
        if !self.dir.is_dir() {
            warn!(dir = ?self.dir, "export directory missing");
            return Err(ExportError::MissingDirectory(self.dir.clone()));
        }
        let path = self.dir.join(&artifact.file_name);
        fs::write(&path, &artifact.contents).map_err(|error| {
            warn!(?error, ?path, "failed to write export artifact");
            ExportError::Io(error)
        })?;
        info!(?path, bytes = artifact.contents.len(), "exported animation");
        Ok(path)
    }
}

// -------------------------- CLIPBOARD --------------------------

/// Destination for copied code.
pub trait ClipboardSink {
    /// Replace the clipboard contents with `text`, verbatim.
    fn copy_text(&mut self, text: &str) -> Result<()>;
}

/// The operating system clipboard.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let inner = arboard::Clipboard::new().map_err(|e| ExportError::Clipboard(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl ClipboardSink for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> Result<()> {
        self.inner
            .set_text(text.to_owned())
            .map_err(|e| ExportError::Clipboard(e.to_string()))?;
        info!(bytes = text.len(), "copied code to clipboard");
        Ok(())
    }
}

/// In-process clipboard; keeps the last copied text.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn copy_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_owned());
        Ok(())
    }
}
