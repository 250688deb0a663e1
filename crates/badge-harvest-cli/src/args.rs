use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use badge_harvest_core::CategoryPolicy;

#[derive(Parser)]
#[command(name = "badge-harvest")]
#[command(about = "Extract and classify status badges from markdown documents")]
#[command(version)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file (default: ./badge-harvest.toml, or $BADGE_HARVEST_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

/// Category assignment policy
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum PolicyArg {
    /// Group badges under the nearest preceding markdown heading
    #[default]
    Heading,
    /// Match the fixed category taxonomy; drop badges outside it
    Taxonomy,
    /// Classify badges by technology keywords
    Keywords,
}

impl From<PolicyArg> for CategoryPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Heading => CategoryPolicy::HeadingTracking,
            PolicyArg::Taxonomy => CategoryPolicy::FixedTaxonomy,
            PolicyArg::Keywords => CategoryPolicy::KeywordClassification,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan local markdown files for badges
    Scan {
        /// Directory to scan (default: current directory)
        path: Option<PathBuf>,

        /// Category assignment policy
        #[arg(short, long, value_enum, default_value_t)]
        policy: PolicyArg,

        /// Output directory for the JSON reports
        #[arg(short, long, default_value = "badge_data")]
        output: PathBuf,

        /// Recurse into subdirectories
        #[arg(short, long)]
        recursive: bool,

        /// Parse badges from markdown table rows (the table format carries
        /// its own category headings, so --policy is ignored)
        #[arg(long)]
        tables: bool,

        /// Report what would be written without writing any files
        #[arg(short, long)]
        dry_run: bool,
    },

    /// Fetch a repository README and extract its badges
    Fetch {
        /// GitHub repository URL, or any URL serving raw markdown
        repo: String,

        /// Category assignment policy
        #[arg(short, long, value_enum, default_value_t)]
        policy: PolicyArg,

        /// Output directory for the JSON reports
        #[arg(short, long, default_value = "badge_data")]
        output: PathBuf,

        /// Parse badges from markdown table rows (--policy is ignored)
        #[arg(long)]
        tables: bool,

        /// Report what would be written without writing any files
        #[arg(short, long)]
        dry_run: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Write a commented default config file
    Init,

    /// Print the resolved config file path
    Path,

    /// Print the effective configuration
    Show,
}
