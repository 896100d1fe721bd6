// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Anneal Contributors

//! Error taxonomy for the harness.
//!
//! Three kinds of failure are kept apart on purpose: a deliberate,
//! user-facing termination of the invoked command ([`ToolExit`]), a mismatch
//! between captured behavior and the scenario's expectations
//! ([`ExpectationError`]), and everything else, which is treated as a genuine
//! infrastructure bug and propagated loudly.

use std::time::Duration;

use thiserror::Error;

/// Deliberate, user-facing termination of an invoked command.
///
/// Commands raise this (through `anyhow`) to end with a message instead of
/// completing normally. The invoker recovers it by downcast and converts it
/// into [`crate::Outcome::ToolExit`]; any other error passes through
/// untouched.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ToolExit {
    pub message: String,
}

impl ToolExit {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Expectation mismatch between captured behavior and a scenario's
/// expectation set.
#[derive(Debug, Error)]
pub enum ExpectationError {
    /// The command completed normally but a tool exit was expected.
    #[error("expected a tool exit, but the command completed normally")]
    ExpectedToolExit,

    /// The command tool-exited but normal completion was expected.
    #[error("expected normal completion, but the command exited: {message}")]
    UnexpectedToolExit { message: String },

    /// The tool-exit message does not contain the required substring.
    #[error("tool exit message {message:?} does not contain {needle:?}")]
    MessageMismatch { needle: String, message: String },

    /// The stream was required to be empty but carried text.
    #[error("expected {stream} output to be empty, got {text:?}")]
    NotEmpty { stream: String, text: String },

    /// One or more required substrings never appeared in the stream.
    ///
    /// All missing substrings are reported together rather than failing on
    /// the first miss.
    #[error("{stream} output is missing {} required substring(s): {missing:?}; captured: {text:?}", .missing.len())]
    MissingSubstrings {
        stream: String,
        missing: Vec<String>,
        text: String,
    },
}

/// Why a scenario failed.
///
/// Tool-exit classification is data, not an error; it only shows up here
/// when the scenario did not expect it.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// Captured behavior did not match the expectation set.
    #[error("scenario '{name}': {source}")]
    Expectation {
        name: String,
        #[source]
        source: ExpectationError,
    },

    /// The invocation did not finish within the scenario's allowance.
    #[error("scenario '{name}': invocation timed out after {timeout:?}")]
    Timeout { name: String, timeout: Duration },

    /// Fixture setup or invocation failed for reasons other than a tool
    /// exit. Never reinterpreted as expected tool behavior.
    #[error("scenario '{name}': infrastructure failure: {cause:#}")]
    Infrastructure { name: String, cause: anyhow::Error },
}
