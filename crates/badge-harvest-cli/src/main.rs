use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;

use badge_harvest_core::{
    aggregate, CategoryReport, Config, Result, ScannedBadge, Summary, CONFIG_ENV_VAR, CONFIG_FILE,
};

mod args;
mod discover;
mod fetch;
mod output;

use args::{Cli, Commands, ConfigAction, PolicyArg, Shell};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config_path = resolve_config_path(cli.config.clone());
    let printer = Printer {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    let result = match cli.command {
        Some(Commands::Scan {
            path,
            policy,
            output,
            recursive,
            tables,
            dry_run,
        }) => handle_scan(
            &config_path,
            path.as_deref(),
            policy,
            &output,
            recursive,
            tables,
            dry_run,
            &printer,
        ),
        Some(Commands::Fetch {
            repo,
            policy,
            output,
            tables,
            dry_run,
        }) => handle_fetch(&config_path, &repo, policy, &output, tables, dry_run, &printer),
        Some(Commands::Config { action }) => handle_config(action, &config_path),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Progress printing gated by the global output flags
struct Printer {
    verbose: bool,
    quiet: bool,
}

impl Printer {
    fn status(&self, message: &str) {
        if !self.quiet {
            println!("{message}");
        }
    }

    fn detail(&self, message: &str) {
        if self.verbose && !self.quiet {
            println!("{message}");
        }
    }

    fn warn(&self, message: &str) {
        eprintln!("{} {}", "[WARN]".yellow().bold(), message);
    }
}

fn resolve_config_path(cli_config: Option<PathBuf>) -> PathBuf {
    if let Some(path) = cli_config {
        return path;
    }

    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        return PathBuf::from(path);
    }

    PathBuf::from(CONFIG_FILE)
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "badge-harvest", &mut std::io::stdout());
}

#[allow(clippy::too_many_arguments)]
fn handle_scan(
    config_path: &Path,
    path: Option<&Path>,
    policy: PolicyArg,
    out_dir: &Path,
    recursive: bool,
    tables: bool,
    dry_run: bool,
    printer: &Printer,
) -> Result<()> {
    let config = Config::load(config_path)?;
    let dir = path.unwrap_or_else(|| Path::new("."));

    let files = discover::find_markdown_files(dir, recursive)?;
    if files.is_empty() {
        printer.status("No markdown files found. Nothing to do.");
        return Ok(());
    }

    printer.status(&format!(
        "Found {} markdown file(s) in {}",
        files.len().to_string().cyan().bold(),
        dir.display()
    ));

    let scanner = config.scanner();
    let resolver = config.resolver(policy.into());

    let mut hits: Vec<ScannedBadge> = Vec::new();
    for file in &files {
        let content = match discover::read_document(file) {
            Ok(content) => content,
            Err(e) => {
                printer.warn(&format!("Skipped {}: {}", file.display(), e));
                continue;
            }
        };

        let source_id = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.display().to_string());

        let found = if tables {
            scanner.scan_tables(&content, &source_id)
        } else {
            scanner.scan(&content, &source_id, &resolver)
        };

        printer.detail(&format!("  {}: {} badge(s)", file.display(), found.len()));
        hits.extend(found);
    }

    if hits.is_empty() && resolver.seed_categories().is_none() {
        printer.status("No badges found. Nothing to do.");
        return Ok(());
    }

    let (reports, summary) = aggregate(&hits, &resolver);
    finish_run(&reports, &summary, out_dir, dry_run, printer)
}

fn handle_fetch(
    config_path: &Path,
    repo: &str,
    policy: PolicyArg,
    out_dir: &Path,
    tables: bool,
    dry_run: bool,
    printer: &Printer,
) -> Result<()> {
    let config = Config::load(config_path)?;

    printer.status(&format!("Fetching README from {}", repo.cyan()));
    let document = fetch::fetch_readme(repo)?;

    if document.content.trim().is_empty() {
        printer.status("Fetched document is empty. Nothing to do.");
        return Ok(());
    }

    let scanner = config.scanner();
    let resolver = config.resolver(policy.into());

    let hits = if tables {
        scanner.scan_tables(&document.content, &document.source_id)
    } else {
        scanner.scan(&document.content, &document.source_id, &resolver)
    };

    if hits.is_empty() && resolver.seed_categories().is_none() {
        printer.status("No badges found. Nothing to do.");
        return Ok(());
    }

    let (reports, summary) = aggregate(&hits, &resolver);
    finish_run(&reports, &summary, out_dir, dry_run, printer)
}

/// Shared tail of a scan/fetch run: breakdown, persistence, totals
fn finish_run(
    reports: &[CategoryReport],
    summary: &Summary,
    out_dir: &Path,
    dry_run: bool,
    printer: &Printer,
) -> Result<()> {
    printer.status("");
    printer.status(&"Category breakdown:".cyan().bold().to_string());
    for report in reports {
        printer.status(&format!(
            "  {}: {} badge(s)",
            report.category_name.cyan(),
            report.badges_count
        ));
    }

    if dry_run {
        printer.status(&format!(
            "\n{} {} badge(s) in {} categorie(s), nothing written (dry run)",
            "Done:".green(),
            summary.total_badges,
            summary.total_categories
        ));
        return Ok(());
    }

    let written = output::write_reports(reports, summary, out_dir)?;
    for path in &written {
        printer.detail(&format!("  {} {}", "Saved:".green(), path.display()));
    }

    printer.status(&format!(
        "\n{} {} badge(s) in {} categorie(s), reports in {}",
        "Done:".green(),
        summary.total_badges,
        summary.total_categories,
        out_dir.display()
    ));

    Ok(())
}

fn handle_config(action: ConfigAction, config_path: &Path) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = Config::init(config_path)?;
            println!("{} {}", "Initialized:".green(), path.display());
        }
        ConfigAction::Path => {
            println!("{}", config_path.display());
        }
        ConfigAction::Show => {
            let config = Config::load(config_path)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
