// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Anneal Contributors

//! Per-scenario orchestration.
//!
//! One scenario moves through `Setup -> Invoke -> Classify -> Assert ->
//! Cleanup`. The capture-sink reset is armed before setup, so it runs on
//! every exit path; a failed assertion ends the scenario immediately and is
//! surfaced to the caller, never swallowed. Scenarios sharing a fixture must
//! run strictly sequentially.

use std::path::PathBuf;
use std::time::Duration;

use crossbeam_channel::RecvTimeoutError;

use crate::error::ScenarioError;
use crate::expect::{Expect, verify_outcome, verify_output};
use crate::fixture::Fixture;
use crate::invoke::{Harness, InvocationRequest, Outcome};

/// Allowance for scenarios that don't override it. Analysis-heavy scenarios
/// should be given more; argument-validation failures need far less.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// One self-contained test case: fixture mutation, invocation, expectation
/// set, and a timeout.
pub struct Scenario {
    name: String,
    files: Vec<(PathBuf, String)>,
    request: InvocationRequest,
    expect: Expect,
    timeout: Duration,
}

/// Snapshot of what a passing scenario observed, taken before the capture
/// sink is cleared.
#[derive(Clone, Debug)]
pub struct ScenarioReport {
    pub outcome: Outcome,
    pub status: String,
    pub error: String,
}

impl Scenario {
    pub fn new(name: impl Into<String>, request: InvocationRequest) -> Self {
        Self {
            name: name.into(),
            files: Vec::new(),
            request,
            expect: Expect::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Queues a file write applied to the fixture during setup. Writes are
    /// applied in order and overwrite existing files.
    pub fn write(mut self, relative: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.files.push((relative.into(), contents.into()));
        self
    }

    pub fn expect(mut self, expect: Expect) -> Self {
        self.expect = expect;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Runs the scenario against a harness and fixture.
    ///
    /// On success the report carries the outcome and the captured text as it
    /// stood before cleanup. Whatever happens, the sink is cleared before
    /// this returns.
    pub fn run(
        &self,
        harness: &Harness,
        fixture: &Fixture,
    ) -> Result<ScenarioReport, ScenarioError> {
        let _reset = harness.sink().reset_on_drop();

        for (relative, contents) in &self.files {
            fixture
                .write_file(relative, contents)
                .map_err(|cause| self.infrastructure(cause))?;
        }

        let outcome = self.invoke_with_timeout(harness)?;

        let status = harness.sink().status_text();
        let error = harness.sink().error_text();

        verify_outcome(&outcome, &self.expect).map_err(|source| self.expectation(source))?;
        verify_output("status", &status, self.expect.status_needles())
            .map_err(|source| self.expectation(source))?;
        verify_output("error", &error, self.expect.error_needles())
            .map_err(|source| self.expectation(source))?;

        Ok(ScenarioReport {
            outcome,
            status,
            error,
        })
    }

    /// Runs the invocation on a worker thread, bounded by the scenario
    /// timeout.
    ///
    /// A timed-out worker is abandoned, not killed; the sink reset orphans
    /// its buffers so any late writes are discarded. A panicking worker is
    /// resumed on this thread so test infrastructure bugs stay loud.
    fn invoke_with_timeout(&self, harness: &Harness) -> Result<Outcome, ScenarioError> {
        let (tx, rx) = crossbeam_channel::bounded(1);
        let worker_harness = harness.clone();
        let request = self.request.clone();

        let worker = std::thread::Builder::new()
            .name(format!("invoke-{}", self.name))
            .spawn(move || {
                let _ = tx.send(worker_harness.invoke(&request));
            })
            .map_err(|err| self.infrastructure(err.into()))?;

        match rx.recv_timeout(self.timeout) {
            Ok(result) => {
                let _ = worker.join();
                result.map_err(|cause| self.infrastructure(cause))
            }
            Err(RecvTimeoutError::Timeout) => Err(ScenarioError::Timeout {
                name: self.name.clone(),
                timeout: self.timeout,
            }),
            Err(RecvTimeoutError::Disconnected) => match worker.join() {
                Err(payload) => std::panic::resume_unwind(payload),
                Ok(()) => Err(self.infrastructure(anyhow::anyhow!(
                    "invocation worker exited without producing a result"
                ))),
            },
        }
    }

    fn expectation(&self, source: crate::error::ExpectationError) -> ScenarioError {
        ScenarioError::Expectation {
            name: self.name.clone(),
            source,
        }
    }

    fn infrastructure(&self, cause: anyhow::Error) -> ScenarioError {
        ScenarioError::Infrastructure {
            name: self.name.clone(),
            cause,
        }
    }
}

#[cfg(test)]
#[path = "scenario_tests.rs"]
mod tests;
