use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde_json::json;
use sitecraft_schema::{fields, BlockKind};

#[derive(Debug, Args)]
pub struct BlocksArgs {
    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub fn blocks(args: BlocksArgs, _cwd: &str) -> Result<()> {
    let palette = BlockKind::palette();

    if args.format == "json" {
        let listing: Vec<_> = palette
            .iter()
            .map(|kind| {
                json!({
                    "type": kind.as_str(),
                    "label": kind.label(),
                    "fields": fields(kind).iter().map(|spec| spec.name).collect::<Vec<_>>(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!("{}", "🧱 Available blocks".bright_blue().bold());
    println!();
    for kind in &palette {
        let names: Vec<&str> = fields(kind).iter().map(|spec| spec.name).collect();
        println!(
            "  {} {:<22} {}",
            format!("{:<14}", kind.as_str()).green(),
            kind.label(),
            names.join(", ").dimmed()
        );
    }

    Ok(())
}
