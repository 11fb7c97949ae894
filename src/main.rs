//! treesvg CLI - render a folder tree as an SVG diagram
//!
//! Usage: treesvg --path <dir> | --input <json> [options]

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Parser};

use treesvg::{render_svg, scan_directory, RenderOptions, TreeNode, DEFAULT_MAX_DEPTH};

/// Render a folder/file tree as a themed SVG diagram
#[derive(Parser, Debug)]
#[command(name = "treesvg")]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["input", "path"])))]
struct Cli {
    /// Input JSON file with tree structure
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Path to directory to scan
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Output SVG file
    #[arg(short, long, default_value = "tree.svg")]
    output: PathBuf,

    /// Title for the diagram
    #[arg(short, long, default_value = "Folder Structure")]
    title: String,

    /// Hide the title header
    #[arg(long)]
    no_title: bool,

    /// Theme: github-dark (default) or github-light
    #[arg(long, default_value = "github-dark")]
    theme: String,

    /// Maximum depth to scan
    #[arg(short, long, default_value_t = DEFAULT_MAX_DEPTH)]
    depth: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let tree: TreeNode = if let Some(input) = &cli.input {
        let json = fs::read_to_string(input)
            .with_context(|| format!("failed to read {}", input.display()))?;
        TreeNode::from_json(&json)
            .with_context(|| format!("invalid tree JSON in {}", input.display()))?
    } else if let Some(path) = &cli.path {
        scan_directory(path, cli.depth)?
    } else {
        // Unreachable while the clap group stays required.
        bail!("either --input or --path is required");
    };

    let options = RenderOptions {
        theme: cli.theme,
        title: cli.title,
        show_title: !cli.no_title,
        ..RenderOptions::default()
    };
    let svg = render_svg(&tree, &options);

    fs::write(&cli.output, &svg)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    println!("\u{2728} Generated SVG: {}", cli.output.display());
    Ok(())
}
