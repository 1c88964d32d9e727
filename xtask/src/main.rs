//! Workspace build tasks.
//!
//! ```text
//! cargo xtask web [--release] [--out-dir pkg]
//! cargo xtask schema [--out options.schema.json]
//! ```

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask", about = "Build tasks for the toque workspace")]
struct Cli {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Build the wasm bundle and generate its JS bindings.
    Web {
        /// Build with optimizations.
        #[arg(long)]
        release: bool,
        /// Directory for the generated bindings.
        #[arg(long, default_value = "pkg")]
        out_dir: PathBuf,
    },
    /// Write the JSON schema of the UI-exposed options.
    Schema {
        /// Output file.
        #[arg(long, default_value = "options.schema.json")]
        out: PathBuf,
    },
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

fn run(cmd: &mut Command) -> Result<()> {
    let status = cmd
        .status()
        .with_context(|| format!("failed to launch {cmd:?}"))?;
    if !status.success() {
        bail!("{cmd:?} exited with {status}");
    }
    Ok(())
}

fn build_web(release: bool, out_dir: &Path) -> Result<()> {
    let root = workspace_root();
    let cargo = std::env::var("CARGO").unwrap_or_else(|_| "cargo".into());

    let mut build = Command::new(cargo);
    let _ = build.current_dir(&root).args([
        "build",
        "--lib",
        "--package",
        "toque",
        "--target",
        "wasm32-unknown-unknown",
        "--features",
        "web",
    ]);
    if release {
        let _ = build.arg("--release");
    }
    run(&mut build)?;

    let profile = if release { "release" } else { "debug" };
    let wasm = root
        .join("target/wasm32-unknown-unknown")
        .join(profile)
        .join("toque.wasm");
    run(Command::new("wasm-bindgen")
        .arg("--target")
        .arg("web")
        .arg("--out-dir")
        .arg(root.join(out_dir))
        .arg(&wasm))
    .context("wasm-bindgen CLI is required (cargo install wasm-bindgen-cli)")
}

fn write_schema(out: &Path) -> Result<()> {
    let schema = serde_json::to_string_pretty(&toque::options::Options::json_schema())?;
    std::fs::write(out, schema).with_context(|| format!("writing {}", out.display()))
}

fn main() -> Result<()> {
    match Cli::parse().task {
        Task::Web { release, out_dir } => build_web(release, &out_dir),
        Task::Schema { out } => write_schema(&out),
    }
}
