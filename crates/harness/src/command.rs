// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Anneal Contributors

//! The invoked-command boundary.
//!
//! Commands under test implement [`CliCommand`] and are driven as black
//! boxes: they receive an ordered argument list (with the tool-root flag
//! already prepended) and write all console-style output through the
//! capture sink's writers. A deliberate, user-facing termination is raised
//! as [`crate::ToolExit`]; anything else is an infrastructure failure.

use std::path::Path;

use crate::capture::CaptureWriter;

/// Flag prepended to every invocation so the command can locate shared tool
/// resources regardless of fixture location. Downstream argument parsing
/// assumes this convention.
pub const TOOL_ROOT_FLAG: &str = "--tool-root";

/// A command-line entry point runnable in-process.
pub trait CliCommand: Send + Sync {
    /// Identifier the command is registered and invoked under.
    fn name(&self) -> &'static str;

    /// One-line description of the command.
    fn description(&self) -> &'static str {
        ""
    }

    /// Runs the command to completion.
    ///
    /// Return `Err` carrying [`crate::ToolExit`] for deliberate user-facing
    /// termination; any other error aborts the scenario loudly.
    fn run(&self, ctx: &CommandContext<'_>) -> anyhow::Result<()>;
}

/// Everything a command sees for one invocation.
pub struct CommandContext<'a> {
    args: &'a [String],
    cwd: Option<&'a Path>,
    separator: char,
    status: CaptureWriter,
    error: CaptureWriter,
}

impl<'a> CommandContext<'a> {
    pub(crate) fn new(
        args: &'a [String],
        cwd: Option<&'a Path>,
        separator: char,
        status: CaptureWriter,
        error: CaptureWriter,
    ) -> Self {
        Self {
            args,
            cwd,
            separator,
            status,
            error,
        }
    }

    /// Ordered arguments, starting with [`TOOL_ROOT_FLAG`] and its value.
    pub fn args(&self) -> &[String] {
        self.args
    }

    /// Working-directory override for this invocation, if any.
    pub fn cwd(&self) -> Option<&Path> {
        self.cwd
    }

    /// Separator glyph for rendered diagnostic lines, resolved once from
    /// the platform probe at harness construction.
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Writer for status (stdout-style) output.
    pub fn status(&self) -> CaptureWriter {
        self.status.clone()
    }

    /// Writer for error (stderr-style) output.
    pub fn error(&self) -> CaptureWriter {
        self.error.clone()
    }
}
