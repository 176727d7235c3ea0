use std::fs;

use anyhow::Context;
use colored::Colorize;
use tracing::debug;

use quire_diff::{diff_lines, join_lines, split_lines, DiffTag, EditScript};
use quire_merge::{merge, MergeOutcome};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<i32> {
    match cli.command {
        Command::Diff(args) => cmd_diff(args, cli.format),
        Command::Merge(args) => cmd_merge(args, cli.format),
    }
}

/// Reads a page snapshot from disk. The path `-` stands for a page that
/// does not exist yet and reads as the empty sequence.
fn read_snapshot(path: &str) -> anyhow::Result<Vec<String>> {
    if path == "-" {
        return Ok(Vec::new());
    }
    let text = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    Ok(split_lines(&text))
}

fn cmd_diff(args: DiffArgs, format: OutputFormat) -> anyhow::Result<i32> {
    let old = read_snapshot(&args.old)?;
    let new = read_snapshot(&args.new)?;
    let script = diff_lines(&old, &new);
    debug!(
        entries = script.len(),
        additions = script.additions(),
        deletions = script.deletions(),
        "computed edit script"
    );

    match format {
        OutputFormat::Text => print_script(&script),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&script)?),
    }

    // The diff(1) convention: zero only when the inputs are identical.
    Ok(if script.is_unchanged() { 0 } else { 1 })
}

fn print_script(script: &EditScript) {
    for entry in script.iter() {
        match entry.tag {
            DiffTag::Context => println!(" {}", entry.text),
            DiffTag::Insert => println!("{}", format!("+{}", entry.text).green()),
            DiffTag::Delete => println!("{}", format!("-{}", entry.text).red()),
        }
    }
}

fn cmd_merge(args: MergeArgs, format: OutputFormat) -> anyhow::Result<i32> {
    let ancestor = read_snapshot(&args.ancestor)?;
    let theirs = read_snapshot(&args.theirs)?;
    let ours = read_snapshot(&args.ours)?;
    let outcome = merge(&ancestor, &theirs, &ours);

    if let Some(path) = &args.output {
        fs::write(path, join_lines(&outcome.lines))
            .with_context(|| format!("writing {path}"))?;
        debug!(path = %path, lines = outcome.lines.len(), "wrote merged page");
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
        OutputFormat::Text => match &args.output {
            Some(path) => report_merge(&outcome, path),
            None => print!("{}", join_lines(&outcome.lines)),
        },
    }

    // The merge-file convention: zero only when no region was bracketed.
    Ok(if outcome.is_conflicted() { 1 } else { 0 })
}

fn report_merge(outcome: &MergeOutcome, path: &str) {
    if outcome.is_conflicted() {
        println!(
            "{} Wrote {} with {} unresolved conflict region(s)",
            "!".yellow().bold(),
            path.bold(),
            outcome.regions.len(),
        );
    } else {
        println!("{} Merged cleanly into {}", "✓".green().bold(), path.bold());
    }
}
