// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Anneal Contributors

//! The devtool's `analyze` and `create` commands.
//!
//! Both parse their argument list with clap, starting with the tool-root
//! flag the harness prepends. Deliberate user-facing failures are raised as
//! `ToolExit`; anything else propagates as an infrastructure error.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::io::Write;
use std::path::{Path, PathBuf};

use anneal::{CliCommand, CommandContext, ToolExit};
use clap::Parser;

use super::engine::Engine;

/// Entry file written by `create`.
pub const MAIN_TEMPLATE: &str = "fn main() {\n  echo('hello, world');\n}\n";

#[derive(Parser)]
#[command(name = "analyze")]
struct AnalyzeArgs {
    /// Root of shared tool resources (prepended by the harness).
    #[arg(long = "tool-root", value_name = "DIR")]
    tool_root: PathBuf,

    /// Directory to analyze. Defaults to the working directory.
    #[arg(value_name = "PATH")]
    target: Option<PathBuf>,
}

pub struct AnalyzeCommand;

impl CliCommand for AnalyzeCommand {
    fn name(&self) -> &'static str {
        "analyze"
    }

    fn description(&self) -> &'static str {
        "Analyze project sources for issues"
    }

    fn run(&self, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
        let args: AnalyzeArgs = parse("analyze", ctx)?;
        check_tool_root(&args.tool_root)?;
        let target = resolve(args.target.as_deref(), ctx)?;

        if !target.is_dir() {
            return Err(
                ToolExit::new(format!("'{}' is not a directory.", target.display())).into(),
            );
        }

        let project = target
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| target.display().to_string());
        let sep = ctx.separator();
        let mut out = ctx.status();

        writeln!(out, "Analyzing {project}...")?;

        let diagnostics = Engine::load(&target)?.analyze(&target)?;
        for diagnostic in &diagnostics {
            writeln!(out, "{}", diagnostic.render(sep))?;
        }
        writeln!(out)?;

        if diagnostics.is_empty() {
            writeln!(out, "No issues found!")?;
            return Ok(());
        }

        let plural = if diagnostics.len() == 1 { "" } else { "s" };
        let summary = format!("{} issue{plural} found.", diagnostics.len());
        writeln!(out, "{summary}")?;
        Err(ToolExit::new(summary).into())
    }
}

#[derive(Parser)]
#[command(name = "create")]
struct CreateArgs {
    /// Root of shared tool resources (prepended by the harness).
    #[arg(long = "tool-root", value_name = "DIR")]
    tool_root: PathBuf,

    /// Directory to scaffold the project into.
    #[arg(value_name = "PATH")]
    path: PathBuf,
}

pub struct CreateCommand;

impl CliCommand for CreateCommand {
    fn name(&self) -> &'static str {
        "create"
    }

    fn description(&self) -> &'static str {
        "Scaffold a runnable project skeleton"
    }

    fn run(&self, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
        let args: CreateArgs = parse("create", ctx)?;
        check_tool_root(&args.tool_root)?;
        let root = resolve(Some(&args.path), ctx)?;
        let entry = root.join("lib/main.ft");

        if entry.exists() {
            return Err(ToolExit::new(format!(
                "'{}' already has a main program file.",
                root.display()
            ))
            .into());
        }

        std::fs::create_dir_all(root.join("lib"))?;
        std::fs::write(&entry, MAIN_TEMPLATE)?;

        let project = root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| root.display().to_string());
        let mut out = ctx.status();
        writeln!(out, "Created project {project}!")?;
        writeln!(out, "Your main program file is: lib/main.ft")?;
        Ok(())
    }
}

/// Shared tool resources must exist before any subcommand does real work.
fn check_tool_root(tool_root: &Path) -> anyhow::Result<()> {
    if !tool_root.is_dir() {
        return Err(ToolExit::new(format!(
            "tool root '{}' does not exist.",
            tool_root.display()
        ))
        .into());
    }
    Ok(())
}

fn parse<T: Parser>(name: &str, ctx: &CommandContext<'_>) -> anyhow::Result<T> {
    let argv = std::iter::once(name.to_string()).chain(ctx.args().iter().cloned());
    Ok(T::try_parse_from(argv).map_err(|err| ToolExit::new(err.to_string()))?)
}

/// Resolves a target path against the invocation's working-directory
/// override, falling back to the process working directory.
fn resolve(target: Option<&Path>, ctx: &CommandContext<'_>) -> anyhow::Result<PathBuf> {
    let base = match ctx.cwd() {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir()?,
    };
    Ok(match target {
        None => base,
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => base.join(path),
    })
}
