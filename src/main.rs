//! chat-outline: index a saved chat conversation into a navigable outline.
#![allow(clippy::multiple_crate_versions)]

use chat_outline::config::Config;
use chat_outline::export::{self, ExportedSection, FileSink, JsonSink, OutlineSink};
use chat_outline::outliner::Outliner;
use chat_outline::unit::UnitKind;
use chat_outline::visibility::{has_descendants, visible_sections};
use chat_outline::watch::FileWatcher;
use clap::Parser;
use scraper::Html;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{fs, io};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chat-outline")]
#[command(about = "Navigable outlines for rendered AI chat conversations", long_about = None)]
struct Args {
    /// Saved conversation page, or an exported outline with --snapshot
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Host identifier used to pick the extraction strategy
    #[arg(long)]
    site: Option<String>,

    /// Unit ids whose descendants are hidden in the tree view
    #[arg(long, short = 'c', value_name = "ID")]
    collapse: Vec<String>,

    /// Only show units whose text contains this, ignoring collapsed units
    #[arg(long, short = 'q')]
    query: Option<String>,

    /// Write the outline snapshot to this file instead of stdout
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print the outline as an indented tree
    #[arg(long)]
    tree: bool,

    /// Re-extract whenever the page changes
    #[arg(long)]
    watch: bool,

    /// Treat PATH as a previously exported outline
    #[arg(long, conflicts_with = "watch")]
    snapshot: bool,
}

fn main() -> chat_outline::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut cfg = Config::load();

    // Override config with command line args
    if let Some(site) = args.site.clone() {
        cfg.site = site;
    }

    let mut sink: Option<Box<dyn OutlineSink>> = match &args.output {
        Some(path) => Some(Box::new(FileSink::new(path))),
        None if args.tree => None,
        None => Some(Box::new(JsonSink::new(io::stdout()))),
    };

    if args.snapshot {
        let snapshot = export::load_snapshot(&args.path)?;
        return present(&args, &snapshot, &mut sink);
    }

    let mut outliner = Outliner::new(cfg.site.clone(), cfg.policy());
    run_pass(&args, &cfg, &mut outliner, &mut sink)?;

    if !args.watch {
        return Ok(());
    }

    let mut watcher = FileWatcher::new(&args.path, Duration::from_millis(cfg.debounce_ms))?;
    let interval = Duration::from_millis(cfg.poll_interval_ms);
    tracing::info!(path = %watcher.path().display(), "watching for changes");

    loop {
        if watcher.wait(interval)? {
            if let Err(e) = run_pass(&args, &cfg, &mut outliner, &mut sink) {
                tracing::error!("extraction pass failed: {e}");
            }
        }
    }
}

/// Reads the page, extracts a fresh outline and hands it on.
fn run_pass(
    args: &Args,
    cfg: &Config,
    outliner: &mut Outliner,
    sink: &mut Option<Box<dyn OutlineSink>>,
) -> chat_outline::Result<()> {
    let snapshot = extract(&args.path, cfg, outliner)?;
    present(args, &snapshot, sink)
}

fn extract(
    path: &Path,
    cfg: &Config,
    outliner: &mut Outliner,
) -> chat_outline::Result<Vec<ExportedSection>> {
    let html = fs::read_to_string(path)?;
    let document = Html::parse_document(&html);
    let sections = outliner.reparse(&document);
    Ok(export::export(&sections, cfg.export_preview_len))
}

fn present(
    args: &Args,
    snapshot: &[ExportedSection],
    sink: &mut Option<Box<dyn OutlineSink>>,
) -> chat_outline::Result<()> {
    if let Some(sink) = sink.as_mut() {
        sink.publish(snapshot)?;
    }
    if args.tree {
        let collapsed: HashSet<String> = args.collapse.iter().cloned().collect();
        let query = args.query.as_deref().unwrap_or_default();
        print!("{}", render_tree(snapshot, query, &collapsed));
    }
    Ok(())
}

/// Formats the visible outline with `-`/`+` markers on expanded/collapsed units.
fn render_tree(snapshot: &[ExportedSection], query: &str, collapsed: &HashSet<String>) -> String {
    let mut out = String::new();

    for view in visible_sections(snapshot, query, collapsed) {
        out.push_str(&format!("{}\n", view.section.title));
        for (index, unit) in view.units {
            let marker = match (
                has_descendants(&view.section.units, index),
                collapsed.contains(&unit.id),
            ) {
                (true, true) => '+',
                (true, false) => '-',
                (false, _) => ' ',
            };
            let label = match &unit.kind {
                UnitKind::Heading { level } => format!("h{level} "),
                UnitKind::Code { language } => format!("<{language}> "),
                UnitKind::Text | UnitKind::List => String::new(),
            };
            out.push_str(&format!(
                "{}{marker} {label}{}  [{}]\n",
                "  ".repeat(unit.depth + 1),
                unit.text.replace('\n', " "),
                unit.id
            ));
        }
    }

    out
}

#[cfg(test)]
#[path = "tests/main.rs"]
mod tests;
