use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use sitecraft_document::Document;
use sitecraft_editor::{EditSession, ProjectStore};
use sitecraft_schema::BlockKind;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Project to add the block to (created if missing)
    pub project: String,

    /// Block type (see `sitecraft blocks`)
    #[arg(value_name = "TYPE")]
    pub kind: String,

    /// Insert position; appends by default
    #[arg(long)]
    pub at: Option<usize>,
}

pub fn add(args: AddArgs, cwd: &str) -> Result<()> {
    let kind = parse_kind(&args.kind)?;
    let config = Config::load(cwd)?;
    let store = config.store(cwd);

    let mut session = if store.exists(&args.project)? {
        EditSession::load(&store, &args.project)?
    } else {
        println!("  {} New project {}", "•".dimmed(), args.project);
        EditSession::new(args.project.as_str(), Document::new())
    };

    let id = session.add_block(kind.clone(), args.at)?;
    session.save(&store)?;

    let position = session.document().position(&id).unwrap_or_default();
    println!(
        "  {} Added {} ({}) at position {}",
        "✓".green(),
        kind.label(),
        id.as_str().dimmed(),
        position
    );

    Ok(())
}

fn parse_kind(tag: &str) -> Result<BlockKind> {
    let kind = BlockKind::from_tag(tag);
    if kind.is_known() {
        return Ok(kind);
    }

    let palette = BlockKind::palette();
    let known: Vec<&str> = palette.iter().map(BlockKind::as_str).collect();
    Err(anyhow!(
        "Unknown block type '{}'. Use one of: {}",
        tag,
        known.join(", ")
    ))
}
