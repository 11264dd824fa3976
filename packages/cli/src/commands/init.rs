use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use sitecraft_document::Document;
use sitecraft_editor::ProjectStore;
use sitecraft_schema::{create_block, BlockKind};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Name of the starter project
    #[arg(short, long, default_value = "site")]
    pub project: String,

    /// Projects directory
    #[arg(long, default_value = "projects")]
    pub projects_dir: String,

    /// Force overwrite existing config and starter project
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!(
        "{}",
        "📝 Initializing Sitecraft project...".bright_blue().bold()
    );

    let config = Config {
        projects_dir: args.projects_dir.clone(),
        ..Config::default()
    };

    // Starter page with one block of every palette kind
    let store = config.store(cwd);
    if store.exists(&args.project)? && !args.force {
        println!("  {} Kept existing {}", "•".dimmed(), args.project);
    } else {
        let blocks = BlockKind::palette().into_iter().map(create_block).collect();
        store.save(&args.project, &Document::from_blocks(blocks)?)?;
        println!(
            "  {} Created {}/{}.json",
            "✓".green(),
            args.projects_dir,
            args.project
        );
    }

    // Write config file
    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: sitecraft add {} gallery", args.project);
    println!("  2. Run: sitecraft render {}", args.project);
    println!("  3. Check output in {}/", config.out_dir);

    Ok(())
}
