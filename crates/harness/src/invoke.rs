// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Anneal Contributors

//! Command invocation and termination classification.
//!
//! [`Harness::invoke`] executes a registered command synchronously and
//! normalizes every run into exactly one [`Outcome`]: `Completed` when the
//! command returned normally, `ToolExit` when it raised the distinguished
//! termination signal. All other failures propagate to the caller
//! unmodified; they are harness or fixture bugs, not tool behavior.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;

use crate::capture::CaptureSink;
use crate::command::{CliCommand, CommandContext, TOOL_ROOT_FLAG};
use crate::error::ToolExit;
use crate::platform::{HostPlatform, PlatformProbe};

/// One request to run a registered command.
#[derive(Clone, Debug)]
pub struct InvocationRequest {
    pub command: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl InvocationRequest {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Appends one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Sets a working-directory override for the invocation.
    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }
}

/// How an invocation terminated. Exactly one per invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The command ran to its natural end.
    Completed,
    /// The command raised the distinguished termination signal with a
    /// human-readable message.
    ToolExit(String),
}

impl Outcome {
    pub fn is_tool_exit(&self) -> bool {
        matches!(self, Outcome::ToolExit(_))
    }
}

struct HarnessInner {
    tool_root: PathBuf,
    separator: char,
    commands: HashMap<&'static str, Arc<dyn CliCommand>>,
}

/// Registry of commands plus the capture sink they write into.
///
/// Cheap to clone; clones share the sink and registry, which lets an
/// invocation move onto a worker thread while the scenario runner waits on
/// it with a timeout.
#[derive(Clone)]
pub struct Harness {
    inner: Arc<HarnessInner>,
    sink: CaptureSink,
}

impl Harness {
    pub fn builder() -> HarnessBuilder {
        HarnessBuilder::new()
    }

    /// The sink all invocations write through.
    pub fn sink(&self) -> &CaptureSink {
        &self.sink
    }

    /// Diagnostic separator glyph resolved at construction.
    pub fn separator(&self) -> char {
        self.inner.separator
    }

    /// Root of shared tool resources, prepended to every argument list.
    pub fn tool_root(&self) -> &Path {
        &self.inner.tool_root
    }

    /// Executes the request synchronously to completion.
    ///
    /// The tool-root flag is prepended before dispatch. A [`ToolExit`]
    /// raised by the command is recovered and returned as data; any other
    /// error (including an unknown command name) propagates unmodified.
    pub fn invoke(&self, request: &InvocationRequest) -> anyhow::Result<Outcome> {
        let command = self
            .inner
            .commands
            .get(request.command.as_str())
            .with_context(|| format!("no command registered under '{}'", request.command))?;

        let mut args = Vec::with_capacity(request.args.len() + 2);
        args.push(TOOL_ROOT_FLAG.to_string());
        args.push(self.inner.tool_root.display().to_string());
        args.extend(request.args.iter().cloned());

        tracing::debug!(command = %request.command, ?args, "dispatching invocation");

        let ctx = CommandContext::new(
            &args,
            request.cwd.as_deref(),
            self.inner.separator,
            self.sink.status_writer(),
            self.sink.error_writer(),
        );

        match command.run(&ctx) {
            Ok(()) => Ok(Outcome::Completed),
            Err(err) => match err.downcast::<ToolExit>() {
                Ok(exit) => Ok(Outcome::ToolExit(exit.message)),
                Err(other) => Err(other),
            },
        }
    }
}

/// Builder for [`Harness`].
pub struct HarnessBuilder {
    tool_root: PathBuf,
    probe: Box<dyn PlatformProbe>,
    commands: HashMap<&'static str, Arc<dyn CliCommand>>,
}

impl HarnessBuilder {
    fn new() -> Self {
        Self {
            tool_root: std::env::temp_dir(),
            probe: Box::new(HostPlatform),
            commands: HashMap::new(),
        }
    }

    /// Sets the shared tool-resources root (default: the system temp dir).
    pub fn tool_root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.tool_root = dir.into();
        self
    }

    /// Replaces the platform probe, pinning diagnostic rendering to one
    /// family regardless of the host.
    pub fn platform(mut self, probe: impl PlatformProbe + 'static) -> Self {
        self.probe = Box::new(probe);
        self
    }

    /// Registers a command under its own name. Registering a second command
    /// with the same name replaces the first.
    pub fn register(mut self, command: impl CliCommand + 'static) -> Self {
        self.commands.insert(command.name(), Arc::new(command));
        self
    }

    pub fn build(self) -> Harness {
        let separator = self.probe.family().diagnostic_separator();
        Harness {
            inner: Arc::new(HarnessInner {
                tool_root: self.tool_root,
                separator,
                commands: self.commands,
            }),
            sink: CaptureSink::new(),
        }
    }
}

#[cfg(test)]
#[path = "invoke_tests.rs"]
mod tests;
