use clap::{Parser, Subcommand};

/// Command-line interface definition for gymattend
/// CLI front desk to track gym check-ins and occupancy with SQLite
#[derive(Parser)]
#[command(
    name = "gymattend",
    version = env!("CARGO_PKG_VERSION"),
    about = "A gym front-desk CLI: check members in and out and watch live occupancy using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init {
        #[arg(long = "seed", help = "Load the demo members and classes")]
        seed: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "check",
            help = "Check the configuration file for missing fields and add them"
        )]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the member directory
    Member {
        #[command(subcommand)]
        action: MemberAction,
    },

    /// Manage the class catalog
    Class {
        #[command(subcommand)]
        action: ClassAction,
    },

    /// Check a member in
    Checkin {
        /// Member id
        member: String,

        /// Visit date (YYYY-MM-DD), defaults to today
        #[arg(long = "date")]
        date: Option<String>,

        #[arg(long = "class", help = "Class the member is attending")]
        class_id: Option<String>,

        #[arg(long = "class-name", help = "Class label to record (overrides the catalog name)")]
        class_name: Option<String>,
    },

    /// Check a visit out, by record id or by member
    Checkout {
        /// Visit record id
        #[arg(required_unless_present = "member", conflicts_with = "member")]
        record: Option<i64>,

        #[arg(long = "member", help = "Check out the open visit of this member")]
        member: Option<String>,

        /// Visit date used with --member (YYYY-MM-DD), defaults to today
        #[arg(long = "date", requires = "member")]
        date: Option<String>,
    },

    /// List the visits of a day
    List {
        #[arg(long = "date", help = "Day to list (YYYY-MM-DD), defaults to today")]
        date: Option<String>,

        #[arg(long = "open", help = "Only members still in the gym")]
        open: bool,

        #[arg(long = "search", help = "Filter by member name (case-insensitive)")]
        search: Option<String>,

        #[arg(long = "json", help = "Print visits as JSON")]
        json: bool,
    },

    /// Show the attendance counters of a day
    Stats {
        #[arg(long = "date", help = "Day to summarize (YYYY-MM-DD), defaults to today")]
        date: Option<String>,

        #[arg(long = "capacity", help = "Facility capacity (overrides the config)")]
        capacity: Option<u32>,

        #[arg(long = "json", help = "Print the summary as JSON")]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum MemberAction {
    /// Register a new member
    Add {
        id: String,

        #[arg(long = "name")]
        name: String,

        #[arg(long = "type", help = "Membership type (e.g. Básico, Premium, VIP)")]
        membership_type: String,
    },

    /// List registered members
    List,

    /// Rename a member (past visits keep the old name)
    Rename {
        id: String,

        #[arg(long = "name")]
        name: String,
    },

    /// Change a member's status
    Status {
        id: String,

        /// active, inactive or suspended
        status: String,
    },
}

#[derive(Subcommand)]
pub enum ClassAction {
    /// Add a class to the catalog
    Add {
        id: String,

        #[arg(long = "name")]
        name: String,

        #[arg(long = "capacity", help = "Maximum number of participants (default 20)")]
        capacity: Option<u32>,
    },

    /// List catalog classes
    List,
}
