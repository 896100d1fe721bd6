// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Anneal Contributors

//! Ephemeral project fixtures.
//!
//! A fixture is an owned temporary directory standing in for a real
//! project. Its root is always an absolute, canonical path, so scenarios
//! never depend on the working directory of the test process. Deletion is
//! best-effort: a fixture leak must never fail an otherwise-passing run.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tempfile::TempDir;

/// An owned temporary project directory.
pub struct Fixture {
    root: PathBuf,
    dir: Option<TempDir>,
}

impl Fixture {
    /// Allocates a uniquely named temporary directory with the given name
    /// prefix and resolves it to a canonical absolute path.
    pub fn create(name_prefix: &str) -> anyhow::Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix(name_prefix)
            .tempdir()
            .with_context(|| format!("failed to allocate fixture '{name_prefix}'"))?;
        let root = dir
            .path()
            .canonicalize()
            .with_context(|| format!("failed to canonicalize fixture '{name_prefix}'"))?;
        Ok(Self {
            root,
            dir: Some(dir),
        })
    }

    /// Absolute, canonical root of the fixture.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Joins a relative path onto the fixture root.
    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    /// Writes text content at `relative`, creating parent directories as
    /// needed and overwriting any existing file. Returns the absolute path
    /// written.
    pub fn write_file(
        &self,
        relative: impl AsRef<Path>,
        contents: &str,
    ) -> anyhow::Result<PathBuf> {
        let full = self.root.join(relative.as_ref());
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&full, contents).with_context(|| format!("failed to write {}", full.display()))?;
        Ok(full)
    }

    /// Removes a file previously written into the fixture.
    pub fn remove_file(&self, relative: impl AsRef<Path>) -> anyhow::Result<()> {
        let full = self.root.join(relative.as_ref());
        fs::remove_file(&full).with_context(|| format!("failed to remove {}", full.display()))?;
        Ok(())
    }

    /// Recursively deletes the fixture tree.
    ///
    /// Deletion failure (a lingering handle, say) is logged as a warning and
    /// swallowed; it never cascades into unrelated failures. Dropping a
    /// fixture without calling this performs the same best-effort delete
    /// silently.
    pub fn destroy(mut self) {
        if let Some(dir) = self.dir.take()
            && let Err(err) = dir.close()
        {
            tracing::warn!(
                fixture = %self.root.display(),
                "failed to delete fixture: {err}"
            );
        }
    }
}

#[cfg(test)]
#[path = "fixture_tests.rs"]
mod tests;
