//! In-place rewrite of the `create_order` method.
//!
//! [`SourcePatcher`] reads the whole target file, replaces the first region
//! matched by its pattern with a fixed replacement and writes the content
//! back. A missing match is not an error unless the patcher runs in strict
//! mode; the file is still rewritten with its original content.

pub mod pattern;
pub mod replacement;

use regex::{NoExpand, Regex};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{PatchError, Result};
use crate::utils::fs::{read_text, write_text};

pub use pattern::{compile_segments, CREATE_ORDER_PATTERN, CREATE_ORDER_SEGMENTS};
pub use replacement::CREATE_ORDER_REPLACEMENT;

/// Confirmation printed after a run, whether or not anything was replaced
pub const SUCCESS_MESSAGE: &str = "✅ Método create_order actualizado exitosamente";

/// What a patch run did to the content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The pattern matched and its first match was replaced
    Replaced,
    /// The pattern did not match; content is unchanged
    Unchanged,
}

impl fmt::Display for PatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchOutcome::Replaced => write!(f, "replaced"),
            PatchOutcome::Unchanged => write!(f, "unchanged"),
        }
    }
}

/// Result of patching one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    pub path: PathBuf,
    pub outcome: PatchOutcome,
}

impl PatchReport {
    pub fn replaced(&self) -> bool {
        self.outcome == PatchOutcome::Replaced
    }
}

/// Content before and after a substitution, without touching the disk
#[derive(Debug, Clone)]
pub struct PatchPreview {
    pub original: String,
    pub patched: String,
    pub outcome: PatchOutcome,
}

/// Single find-and-replace over one source file
#[derive(Debug, Clone)]
pub struct SourcePatcher {
    pattern: Regex,
    replacement: &'static str,
    strict: bool,
}

impl SourcePatcher {
    /// Patcher for the `create_order` method of the order service
    pub fn create_order() -> Self {
        Self {
            pattern: Regex::clone(&CREATE_ORDER_PATTERN),
            replacement: CREATE_ORDER_REPLACEMENT,
            strict: false,
        }
    }

    /// Patcher built from literal segments, see [`compile_segments`]
    pub fn from_segments(segments: &[&str], replacement: &'static str) -> Result<Self> {
        Ok(Self {
            pattern: compile_segments(segments)?,
            replacement,
            strict: false,
        })
    }

    /// Fail with [`PatchError::NoMatch`] instead of silently rewriting
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Replace the first match in `content`
    pub fn apply(&self, content: &str) -> (String, PatchOutcome) {
        match self.pattern.find(content) {
            Some(found) => {
                debug!(
                    "Pattern matched bytes {}..{} ({} bytes)",
                    found.start(),
                    found.end(),
                    found.len()
                );
                let patched = self.pattern.replace(content, NoExpand(self.replacement));
                (patched.into_owned(), PatchOutcome::Replaced)
            }
            None => (content.to_string(), PatchOutcome::Unchanged),
        }
    }

    /// Compute the patched content of `path` without writing it
    pub fn preview(&self, path: impl AsRef<Path>) -> Result<PatchPreview> {
        let path = path.as_ref();
        let original = read_text(path)?;
        let (patched, outcome) = self.apply(&original);

        if outcome == PatchOutcome::Unchanged && self.strict {
            return Err(PatchError::no_match(path));
        }

        Ok(PatchPreview {
            original,
            patched,
            outcome,
        })
    }

    /// Rewrite `path` in place.
    ///
    /// The file is written back even when nothing matched, unless the patcher
    /// is strict, in which case the file is left alone and
    /// [`PatchError::NoMatch`] is returned.
    pub fn patch(&self, path: impl AsRef<Path>) -> Result<PatchReport> {
        let path = path.as_ref();
        let preview = self.preview(path)?;

        match preview.outcome {
            PatchOutcome::Replaced => info!("Replaced create_order in {}", path.display()),
            PatchOutcome::Unchanged => warn!(
                "create_order pattern not found in {}, writing content back unchanged",
                path.display()
            ),
        }

        write_text(path, &preview.patched)?;

        Ok(PatchReport {
            path: path.to_path_buf(),
            outcome: preview.outcome,
        })
    }
}

impl Default for SourcePatcher {
    fn default() -> Self {
        Self::create_order()
    }
}

/// Rewrite the `create_order` method in `path` with the default patcher
pub fn patch(path: impl AsRef<Path>) -> Result<PatchReport> {
    SourcePatcher::create_order().patch(path)
}
