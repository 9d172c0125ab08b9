//! Clap derive structures for the `shoreline` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// shoreline -- admin CLI for the lifeguard operations portal
#[derive(Debug, Parser)]
#[command(
    name = "shoreline",
    version,
    about = "Manage regions, managers, lifeguards, and incident reports",
    long_about = "Administration tooling for a lifeguard operations portal.\n\n\
        Talks to the portal's REST API; the portal itself owns all data\n\
        and assigns every identifier.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Portal base URL (overrides the config file)
    #[arg(long, short = 'P', env = "SHORELINE_PORTAL", global = true)]
    pub portal: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "SHORELINE_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "SHORELINE_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides the config file)
    #[arg(long, env = "SHORELINE_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage patrol regions and their manager assignments
    #[command(alias = "region", alias = "r")]
    Regions(RegionsArgs),

    /// Manage managers
    #[command(alias = "manager", alias = "m")]
    Managers(ManagersArgs),

    /// Manage lifeguards
    #[command(alias = "lifeguard", alias = "l")]
    Lifeguards(LifeguardsArgs),

    /// Browse and prune incident reports
    #[command(alias = "incident", alias = "i")]
    Incidents(IncidentsArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  REGIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct RegionsArgs {
    #[command(subcommand)]
    pub command: RegionsCommand,
}

#[derive(Debug, Subcommand)]
pub enum RegionsCommand {
    /// List all regions
    #[command(alias = "ls")]
    List,

    /// Get region details
    Get {
        /// Region ID
        id: String,
    },

    /// Create a region
    Create {
        /// URL-safe unique slug
        #[arg(long, required = true)]
        slug: String,

        /// Location as key=label (repeatable)
        #[arg(long = "location", short = 'l', value_name = "KEY=LABEL")]
        locations: Vec<String>,

        /// Read the locations map from a JSON file instead
        #[arg(long, short = 'F', conflicts_with = "locations")]
        locations_json: Option<PathBuf>,
    },

    /// Update a region's slug and locations
    Update {
        /// Region ID
        id: String,

        /// New slug
        #[arg(long)]
        slug: Option<String>,

        /// Location as key=label (repeatable, replaces existing)
        #[arg(long = "location", short = 'l', value_name = "KEY=LABEL")]
        locations: Vec<String>,
    },

    /// Replace only the locations map (partial update)
    SetLocations {
        /// Region ID
        id: String,

        /// Location as key=label (repeatable)
        #[arg(long = "location", short = 'l', value_name = "KEY=LABEL")]
        locations: Vec<String>,

        /// Read the locations map from a JSON file instead
        #[arg(long, short = 'F', conflicts_with = "locations")]
        locations_json: Option<PathBuf>,
    },

    /// Assign a manager to a region
    Assign {
        /// Region ID
        region: String,

        /// Manager ID
        manager: String,
    },

    /// Unassign a manager from a region
    Unassign {
        /// Region ID
        region: String,

        /// Manager ID
        manager: String,
    },

    /// Delete a region (cascades deletion of its incident reports)
    Delete {
        /// Region ID
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  MANAGERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ManagersArgs {
    #[command(subcommand)]
    pub command: ManagersCommand,
}

#[derive(Debug, Subcommand)]
pub enum ManagersCommand {
    /// List all managers
    #[command(alias = "ls")]
    List,

    /// Get manager details
    Get {
        /// Manager ID
        id: String,
    },

    /// Create a manager (must start with at least one region)
    Create {
        /// Manager name
        #[arg(long, required = true)]
        name: String,

        /// Manager email
        #[arg(long, required = true)]
        email: String,

        /// Region slugs to attach to (comma-separated)
        #[arg(long, value_delimiter = ',', required = true)]
        regions: Vec<String>,
    },

    /// Update a manager's name and email
    Update {
        /// Manager ID
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New email
        #[arg(long)]
        email: Option<String>,
    },

    /// Delete a manager
    Delete {
        /// Manager ID
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  LIFEGUARDS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct LifeguardsArgs {
    #[command(subcommand)]
    pub command: LifeguardsCommand,
}

#[derive(Debug, Subcommand)]
pub enum LifeguardsCommand {
    /// List all lifeguards
    #[command(alias = "ls")]
    List,

    /// Get lifeguard details
    Get {
        /// Lifeguard ID
        id: String,
    },

    /// Look a lifeguard up by phone number
    FindByPhone {
        /// Phone number as stored by the portal
        phone: String,
    },

    /// Create a lifeguard
    Create {
        /// Lifeguard name
        #[arg(long, required = true)]
        name: String,

        /// Phone number
        #[arg(long, required = true)]
        phone: String,

        /// ID of the region the lifeguard belongs to
        #[arg(long, required = true)]
        region: String,
    },

    /// Update a lifeguard's name and phone
    Update {
        /// Lifeguard ID
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New phone number
        #[arg(long)]
        phone: Option<String>,
    },

    /// Delete a lifeguard
    Delete {
        /// Lifeguard ID
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  INCIDENTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct IncidentsArgs {
    #[command(subcommand)]
    pub command: IncidentsCommand,
}

#[derive(Debug, Subcommand)]
pub enum IncidentsCommand {
    /// List incident reports, grouped by correlation id
    #[command(alias = "ls")]
    List {
        /// Substring match on the person involved (case-insensitive)
        #[arg(long)]
        person: Option<String>,

        /// Exact incident date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<chrono::NaiveDate>,

        /// Exact region ID
        #[arg(long)]
        region: Option<String>,

        /// Status filter
        #[arg(long, default_value = "all", value_enum)]
        status: StatusArg,

        /// Show every report, not just one line per group
        #[arg(long)]
        expand: bool,
    },

    /// Delete a single incident report
    Delete {
        /// Incident ID
        id: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusArg {
    /// No status filtering
    All,
    /// Only reports in the "done" state
    Done,
    /// Any state other than "done"
    Unfinished,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Write an initial config file
    Init {
        /// Portal base URL to record
        #[arg(long, required = true)]
        portal: String,
    },

    /// Display the current resolved configuration
    Show,

    /// Print the config file path
    Path,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
