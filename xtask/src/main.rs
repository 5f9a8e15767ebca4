// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask
//!
//! Workspace automation for the draft league wizard. Every task shells out to
//! `cargo` (or a cargo-installed tool) and logs the command before running it.
//!
//! - `cargo xtask ci` runs lint, build and test in that order
//! - `cargo xtask serve` starts the HTTP server with debug logging

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{fmt::Debug, io, process::Output};

use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{eyre::Context, Result};
use duct::{cmd, Expression};
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

const SERVER_PACKAGE: &str = "draft-league-server";

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    if let Err(err) = args.command.run() {
        tracing::error!("{err}");
        std::process::exit(1);
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Run CI checks (lint, build, test)
    Ci,

    /// Build every target in the workspace
    #[command(visible_alias = "b")]
    Build,

    /// Run cargo check
    #[command(visible_alias = "c")]
    Check,

    /// Generate an lcov coverage report under target/
    #[command(visible_alias = "cov")]
    Coverage,

    /// Lint formatting, clippy and docs
    #[command(visible_alias = "l")]
    Lint,

    /// Run clippy with warnings denied
    #[command(visible_alias = "cl")]
    LintClippy,

    /// Build docs with docs.rs flags and warnings denied
    #[command(visible_alias = "d")]
    LintDocs,

    /// Check formatting
    #[command(visible_alias = "lf")]
    LintFormatting,

    /// Apply clippy fixes
    #[command(visible_alias = "fc")]
    FixClippy,

    /// Format the workspace
    #[command(visible_alias = "fmt")]
    FixFormatting,

    /// Run lib and doc tests
    #[command(visible_alias = "t")]
    Test,

    /// Start the wizard server with debug logging
    #[command(visible_alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::Ci => ci(),
            Self::Build => cargo(&["build", "--workspace", "--all-targets"]),
            Self::Check => cargo(&["check", "--workspace", "--all-targets"]),
            Self::Coverage => cargo(&[
                "llvm-cov",
                "--workspace",
                "--lcov",
                "--output-path",
                "target/lcov.info",
            ]),
            Self::Lint => lint(),
            Self::LintClippy => lint_clippy(),
            Self::LintDocs => lint_docs(),
            Self::LintFormatting => nightly(cmd!("cargo", "fmt", "--all", "--check")),
            Self::FixClippy => cargo(&[
                "clippy",
                "--workspace",
                "--all-targets",
                "--fix",
                "--allow-dirty",
                "--allow-staged",
            ]),
            Self::FixFormatting => nightly(cmd!("cargo", "fmt", "--all")),
            Self::Test => test(),
            Self::Serve { port } => serve(port),
        }
    }
}

fn ci() -> Result<()> {
    lint()?;
    cargo(&["build", "--workspace", "--all-targets"])?;
    test()
}

fn lint() -> Result<()> {
    lint_clippy()?;
    lint_docs()?;
    nightly(cmd!("cargo", "fmt", "--all", "--check"))
}

fn lint_clippy() -> Result<()> {
    cargo(&[
        "clippy",
        "--workspace",
        "--all-targets",
        "--",
        "-D",
        "warnings",
    ])
}

/// Documents each default workspace package on its own so a failure names the
/// package.
fn lint_docs() -> Result<()> {
    let meta = MetadataCommand::new()
        .exec()
        .wrap_err("failed to get cargo metadata")?;

    for package in meta.workspace_default_packages() {
        let name: &str = &package.name;
        nightly(
            cmd!("cargo", "doc", "--no-deps", "--package", name)
                .env("RUSTDOCFLAGS", "--cfg docsrs -D warnings"),
        )?;
    }
    Ok(())
}

fn test() -> Result<()> {
    cargo(&["test", "--workspace", "--all-targets"])?;
    // doc tests are slow, run them last
    cargo(&["test", "--workspace", "--doc"])
}

fn serve(port: u16) -> Result<()> {
    let port: String = port.to_string();
    cmd!(
        "cargo",
        "run",
        "--package",
        SERVER_PACKAGE,
        "--",
        "--port",
        port
    )
    .env("DRAFT_LEAGUE_ENABLE_DEBUG", "true")
    .run_with_trace()
    .wrap_err("server exited with an error")?;
    Ok(())
}

/// Run a cargo subcommand with the default toolchain
fn cargo(args: &[&str]) -> Result<()> {
    cmd("cargo", args).run_with_trace()?;
    Ok(())
}

/// Run an expression with the nightly toolchain
fn nightly(expression: Expression) -> Result<()> {
    expression
        // CARGO is set because we're running inside a cargo subcommand
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .run_with_trace()?;
    Ok(())
}

/// Logs an expression before running it.
trait ExpressionExt {
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            // the command may have scrolled off the screen
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}
