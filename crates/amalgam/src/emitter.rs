//! Serialization of a resolved include tree into the final single-file artifact
//!
//! Layout is fixed: optional `#pragma once`, then one `#include` line per hoisted
//! external include in discovery order, then the flattened body.

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt as _;
use std::{
    fs,
    io::{self, Write as _},
    path::Path,
};

use log::debug;
use tempfile::NamedTempFile;

use crate::{
    config::GuardPolicy,
    directive::GUARD_PRAGMA,
    error::{AmalgamError, Result},
    types::Amalgamation,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct Emitter {
    guard: GuardPolicy,
}

impl Emitter {
    pub fn new(guard: GuardPolicy) -> Self {
        Self { guard }
    }

    /// Render the artifact text, with or without a leading guard
    pub fn render(amalgamation: &Amalgamation, emit_guard: bool) -> String {
        let mut out = String::new();
        if emit_guard {
            out.push_str(GUARD_PRAGMA);
            out.push('\n');
        }
        for target in &amalgamation.externals {
            out.push_str("#include ");
            out.push_str(target);
            out.push('\n');
        }
        for line in &amalgamation.body {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Write the artifact to `output`, replacing any existing file
    ///
    /// The text goes to a temporary file next to `output` first and is renamed
    /// into place only once fully written, so a failure never leaves a
    /// truncated artifact behind.
    pub fn emit(&self, output: &Path, amalgamation: &Amalgamation) -> Result<()> {
        let emit_guard = self.guard.applies_to(output);
        let text = Self::render(amalgamation, emit_guard);

        let dir = match output.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let io_err = |source: io::Error| AmalgamError::Io {
            path: output.to_path_buf(),
            source,
        };

        let mut temp = create_temp(dir, output).map_err(io_err)?;
        temp.write_all(text.as_bytes()).map_err(io_err)?;
        temp.flush().map_err(io_err)?;

        if output.exists() {
            debug!("Replacing existing {}", output.display());
        }
        temp.persist(output).map_err(|e| io_err(e.error))?;

        debug!(
            "Wrote {} bytes to {} (guard: {emit_guard})",
            text.len(),
            output.display()
        );
        Ok(())
    }
}

/// Create the staging file for `output`
///
/// A new output gets the same umask-derived mode as a plainly created file,
/// and an existing output keeps its mode.
fn create_temp(dir: &Path, output: &Path) -> io::Result<NamedTempFile> {
    let existing = fs::metadata(output).ok().map(|meta| meta.permissions());

    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    builder.permissions(fs::Permissions::from_mode(0o666));
    let temp = builder.tempfile_in(dir)?;

    if let Some(permissions) = existing {
        temp.as_file().set_permissions(permissions)?;
    }
    Ok(temp)
}
