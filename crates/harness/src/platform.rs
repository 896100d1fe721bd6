// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Anneal Contributors

//! Host platform detection.
//!
//! Diagnostic lines emitted by analysis tools use a separator glyph that
//! differs by platform family. The harness resolves the glyph once at
//! construction from a [`PlatformProbe`] so expected output can be built
//! without hardcoding either variant.

/// Platform family, as far as diagnostic rendering is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformFamily {
    Windows,
    Unix,
}

impl PlatformFamily {
    /// The glyph separating fields of a rendered diagnostic line.
    pub fn diagnostic_separator(self) -> char {
        match self {
            PlatformFamily::Windows => '-',
            PlatformFamily::Unix => '•',
        }
    }
}

/// Source of platform facts. Swap in a fixed probe to pin tests to one
/// family.
pub trait PlatformProbe: Send + Sync {
    fn family(&self) -> PlatformFamily;
}

/// Probe reporting the platform the harness is actually running on.
pub struct HostPlatform;

impl PlatformProbe for HostPlatform {
    fn family(&self) -> PlatformFamily {
        if cfg!(windows) {
            PlatformFamily::Windows
        } else {
            PlatformFamily::Unix
        }
    }
}

#[cfg(test)]
#[path = "platform_tests.rs"]
mod tests;
