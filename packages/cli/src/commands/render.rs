use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use sitecraft_editor::ProjectStore;
use sitecraft_renderer::{render as render_page, render_public_html, to_html, RenderMode, RenderOptions};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Project to render
    pub project: String,

    /// Render mode (public, preview, edit)
    #[arg(short, long, default_value = "public")]
    pub mode: RenderMode,

    /// Output file (defaults to <outDir>/<project>.html)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Output to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
}

pub fn render(args: RenderArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let document = config.store(cwd).load(&args.project)?;
    let options = config.render.html_options();

    // Public output is a full page; preview and edit are fragments for embedding
    let html = match args.mode {
        RenderMode::Public => render_public_html(&document, &options),
        mode => to_html(&render_page(&document, &RenderOptions::new(mode)), &options),
    };

    if args.stdout {
        print!("{}", html);
        return Ok(());
    }

    let out_path = args.out.clone().unwrap_or_else(|| {
        let file_name = match args.mode {
            RenderMode::Public => format!("{}.html", args.project),
            mode => format!("{}.{}.html", args.project, mode),
        };
        config.get_out_dir(cwd).join(file_name)
    });

    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create {}", parent.display()))?;
    }
    fs::write(&out_path, &html).with_context(|| format!("Cannot write {}", out_path.display()))?;

    println!(
        "  {} {} ({}) → {}",
        "✓".green(),
        args.project,
        args.mode,
        out_path.display()
    );

    Ok(())
}
