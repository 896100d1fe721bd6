// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Anneal Contributors

//! anneal: an in-process scenario harness for end-to-end testing of
//! command-line tools.
//!
//! The harness materializes ephemeral project fixtures, drives a registered
//! command as a black box, classifies its termination (normal completion vs.
//! a deliberate tool exit carrying a message), and verifies the captured
//! status/error text against expected substrings. Fixture cleanup and
//! capture-buffer isolation between scenarios are guaranteed on every exit
//! path.
//!
//! A scenario moves through `Setup -> Invoke -> Classify -> Assert ->
//! Cleanup`; see [`Scenario::run`] for the orchestration and
//! [`Harness::invoke`] for the termination contract.

pub mod capture;
pub mod command;
pub mod error;
pub mod expect;
pub mod fixture;
pub mod invoke;
pub mod platform;
pub mod scenario;

pub use capture::CaptureSink;
pub use command::{CliCommand, CommandContext, TOOL_ROOT_FLAG};
pub use error::{ExpectationError, ScenarioError, ToolExit};
pub use expect::Expect;
pub use fixture::Fixture;
pub use invoke::{Harness, HarnessBuilder, InvocationRequest, Outcome};
pub use platform::{HostPlatform, PlatformFamily, PlatformProbe};
pub use scenario::{DEFAULT_TIMEOUT, Scenario, ScenarioReport};
