//! Sprig CLI
//!
//! Compiles template files containing component tags into hydration
//! placeholder markup, or dumps the intermediate template tree for
//! debugging.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use sprig_compiler::{Compiler, DEFAULT_MAX_DEPTH};
use sprig_tree::fmt_tree;

#[derive(Parser)]
#[command(name = "sprig", about = "Component-tag precompiler", version)]
struct Args {
    /// Template file to compile.
    input: Option<PathBuf>,

    /// Compile template source given directly on the command line.
    #[arg(long, conflicts_with = "input")]
    source: Option<String>,

    /// Write output to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Maximum component nesting depth.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Print the intermediate template tree instead of compiled output.
    #[arg(long)]
    dump_tree: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let source = match (&args.input, &args.source) {
        (Some(path), None) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, Some(source)) => source.clone(),
        _ => bail!("provide a template file or --source"),
    };

    let compiler = Compiler::new().with_max_depth(args.max_depth);

    let rendered = if args.dump_tree {
        let tree = compiler.parse(&source)?;
        fmt_tree(&tree, tree.root(), 0)
    } else {
        compiler.compile(&source)?
    };

    match &args.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{rendered}"),
    }

    Ok(())
}
