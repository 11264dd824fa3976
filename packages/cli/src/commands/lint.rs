use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use sitecraft_linter::{lint_source, Diagnostic, DiagnosticLevel, LintOptions};
use std::fs;
use std::io;

#[derive(Args, Debug)]
pub struct LintArgs {
    /// Project to lint
    pub project: String,

    /// Show all diagnostics including info level
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub fn lint(args: LintArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let path = config.store(cwd).path_for(&args.project)?;

    // Lint the payload as stored; loading through the store would repair it first
    let source = fs::read_to_string(&path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => anyhow!("Project not found: {}", args.project),
        _ => anyhow::Error::new(err).context(format!("Cannot read {}", path.display())),
    })?;
    let diagnostics = lint_source(&source, LintOptions::default())
        .with_context(|| format!("Cannot lint {}", args.project))?;

    let errors = count(&diagnostics, DiagnosticLevel::Error);
    let warnings = count(&diagnostics, DiagnosticLevel::Warning);

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&diagnostics)?);
    } else {
        print_text(&args, &diagnostics, errors, warnings);
    }

    // Non-zero exit through main
    if errors > 0 {
        return Err(anyhow!(
            "{} has {} error{}",
            args.project,
            errors,
            if errors == 1 { "" } else { "s" }
        ));
    }

    Ok(())
}

fn count(diagnostics: &[Diagnostic], level: DiagnosticLevel) -> usize {
    diagnostics.iter().filter(|d| d.level == level).count()
}

fn print_text(args: &LintArgs, diagnostics: &[Diagnostic], errors: usize, warnings: usize) {
    println!("🔍 {} Sitecraft Linter", "Starting".green().bold());
    println!("   Project: {}", args.project);
    println!();

    for diagnostic in diagnostics {
        if !args.verbose && diagnostic.level == DiagnosticLevel::Info {
            continue;
        }

        let level_str = match diagnostic.level {
            DiagnosticLevel::Error => "error".red().bold(),
            DiagnosticLevel::Warning => "warning".yellow().bold(),
            DiagnosticLevel::Info => "info".blue().bold(),
        };

        let location = match (&diagnostic.block_id, &diagnostic.field) {
            (Some(block), Some(field)) => format!(" {}.{}", block, field),
            (Some(block), None) => format!(" {}", block),
            _ => String::new(),
        };

        println!(
            "  {} [{}]{} {}",
            level_str,
            diagnostic.rule,
            location.dimmed(),
            diagnostic.message
        );

        if let Some(suggestion) = &diagnostic.suggestion {
            println!("    {} {}", "💡".dimmed(), suggestion.dimmed());
        }
    }

    println!();
    println!(
        "✨ {} Linting complete!",
        if errors > 0 {
            "Done".red().bold()
        } else {
            "Done".green().bold()
        }
    );
    println!("   Total diagnostics: {}", diagnostics.len());

    if errors > 0 {
        println!("   {} {}", "Errors:".red(), errors);
    }
    if warnings > 0 {
        println!("   {} {}", "Warnings:".yellow(), warnings);
    }

    if errors == 0 && warnings == 0 {
        println!("   {} No issues found!", "✓".green());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_project(payload: &str) -> (TempDir, String) {
        let dir = TempDir::new().unwrap();
        let projects = dir.path().join("projects");
        fs::create_dir_all(&projects).unwrap();
        fs::write(projects.join("site.json"), payload).unwrap();
        let cwd = dir.path().display().to_string();
        (dir, cwd)
    }

    fn args() -> LintArgs {
        LintArgs {
            project: "site".to_string(),
            verbose: true,
            format: "json".to_string(),
        }
    }

    #[test]
    fn test_clean_project_passes() {
        let (_dir, cwd) = write_project(
            r#"{"blocks":[{"id":"h","type":"hero","name":"Hero","visible":true,"content":{}}]}"#,
        );
        lint(args(), &cwd).unwrap();
    }

    #[test]
    fn test_errors_fail_the_command() {
        let (_dir, cwd) = write_project(
            r#"{"blocks":[
                {"id":"h","type":"hero","content":{}},
                {"id":"h","type":"footer","content":{}}
            ]}"#,
        );
        let err = lint(args(), &cwd).unwrap_err();
        assert_eq!(err.to_string(), "site has 1 error");
    }

    #[test]
    fn test_warnings_do_not_fail() {
        let (_dir, cwd) = write_project(
            r#"{"blocks":[{"id":"h","type":"hero","content":{"tagline":"x"}}]}"#,
        );
        lint(args(), &cwd).unwrap();
    }

    #[test]
    fn test_missing_project() {
        let dir = TempDir::new().unwrap();
        let err = lint(args(), &dir.path().display().to_string()).unwrap_err();
        assert_eq!(err.to_string(), "Project not found: site");
    }
}
