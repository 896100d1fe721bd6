// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Anneal Contributors

//! Deterministic devtool double for the behavioral specs.
//!
//! Stands in for the external collaborators the harness drives: an
//! `analyze` command backed by a line-scanning analysis engine over a toy
//! scripting language, and a `create` command that scaffolds a minimal
//! project. Deliberately small; the point is stable, predictable output,
//! not real analysis.

pub mod commands;
