// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Anneal Contributors

//! The assertion engine: expectation sets and their verification.
//!
//! Every constraint is independently optional. An absent substring set means
//! "no constraint"; an explicitly empty set means "output must be exactly
//! empty". Required substrings are checked independently and
//! order-independent, and all missing ones are reported together.

use crate::error::ExpectationError;
use crate::invoke::Outcome;

/// Expectation set for one scenario.
#[derive(Clone, Debug, Default)]
pub struct Expect {
    status: Option<Vec<String>>,
    error: Option<Vec<String>>,
    tool_exit: bool,
    exit_message: Option<String>,
}

impl Expect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires `needle` to occur somewhere in the status text. Chainable;
    /// order between needles is irrelevant.
    pub fn status_has(mut self, needle: impl Into<String>) -> Self {
        self.status.get_or_insert_default().push(needle.into());
        self
    }

    /// Requires the status text to be exactly empty.
    pub fn status_empty(mut self) -> Self {
        self.status = Some(Vec::new());
        self
    }

    /// Requires `needle` to occur somewhere in the error text.
    pub fn error_has(mut self, needle: impl Into<String>) -> Self {
        self.error.get_or_insert_default().push(needle.into());
        self
    }

    /// Requires the error text to be exactly empty.
    pub fn error_empty(mut self) -> Self {
        self.error = Some(Vec::new());
        self
    }

    /// Requires the command to terminate with a tool exit.
    pub fn tool_exit(mut self) -> Self {
        self.tool_exit = true;
        self
    }

    /// Requires a tool exit whose message contains `needle`. Substring
    /// match, since tool messages carry variable detail such as paths.
    pub fn tool_exit_message(mut self, needle: impl Into<String>) -> Self {
        self.tool_exit = true;
        self.exit_message = Some(needle.into());
        self
    }

    pub(crate) fn status_needles(&self) -> Option<&[String]> {
        self.status.as_deref()
    }

    pub(crate) fn error_needles(&self) -> Option<&[String]> {
        self.error.as_deref()
    }
}

/// Checks the termination classification and, for expected tool exits, the
/// message substring.
pub fn verify_outcome(outcome: &Outcome, expect: &Expect) -> Result<(), ExpectationError> {
    match (expect.tool_exit, outcome) {
        (false, Outcome::Completed) => Ok(()),
        (false, Outcome::ToolExit(message)) => Err(ExpectationError::UnexpectedToolExit {
            message: message.clone(),
        }),
        (true, Outcome::Completed) => Err(ExpectationError::ExpectedToolExit),
        (true, Outcome::ToolExit(message)) => match &expect.exit_message {
            Some(needle) if !message.contains(needle.as_str()) => {
                Err(ExpectationError::MessageMismatch {
                    needle: needle.clone(),
                    message: message.clone(),
                })
            }
            _ => Ok(()),
        },
    }
}

/// Checks one captured stream against a required-substring set.
///
/// `None` means unconstrained. An empty set means the text must be exactly
/// empty (whitespace counts as text). Otherwise every needle must occur;
/// misses do not short-circuit and are reported together.
pub fn verify_output(
    stream: &str,
    text: &str,
    required: Option<&[String]>,
) -> Result<(), ExpectationError> {
    let Some(needles) = required else {
        return Ok(());
    };

    if needles.is_empty() {
        if text.is_empty() {
            return Ok(());
        }
        return Err(ExpectationError::NotEmpty {
            stream: stream.to_string(),
            text: text.to_string(),
        });
    }

    let missing: Vec<String> = needles
        .iter()
        .filter(|needle| !text.contains(needle.as_str()))
        .cloned()
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ExpectationError::MissingSubstrings {
            stream: stream.to_string(),
            missing,
            text: text.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "expect_tests.rs"]
mod tests;
