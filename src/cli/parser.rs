use crate::core::filter::Window;
use crate::export::ExportFormat;
use crate::models::report_status::ReportStatus;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Command-line interface definition for stafflog
/// CLI application to log daily work and next-day plans with SQLite
#[derive(Parser)]
#[command(
    name = "stafflog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple work logging CLI: daily entries, next-day plans, admin reports and CSV export using SQLite",
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

/// Credentials submitted with every authenticated command. The store never
/// sees the plaintext; it is verified against the Argon2 hash and dropped.
#[derive(Args)]
pub struct Credentials {
    #[arg(long, help = "Login email")]
    pub email: String,

    #[arg(long, help = "Login ID")]
    pub id: String,

    #[arg(long, help = "Login password")]
    pub password: String,
}

/// The named date windows of the report and export filters.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum WindowArg {
    Today,
    Yesterday,
    Weekly,
    Monthly,
    Yearly,
    Range,
}

impl WindowArg {
    pub fn to_window(self) -> Window {
        match self {
            WindowArg::Today => Window::Today,
            WindowArg::Yesterday => Window::Yesterday,
            WindowArg::Weekly => Window::Weekly,
            WindowArg::Monthly => Window::Monthly,
            WindowArg::Yearly => Window::Yearly,
            WindowArg::Range => Window::Range,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database, configuration and admin account
    Init {
        #[arg(long, help = "Admin login email to seed")]
        admin_email: Option<String>,

        #[arg(long, help = "Admin login ID to seed")]
        admin_id: Option<String>,

        #[arg(long, help = "Admin password to seed (stored as an Argon2 hash)")]
        admin_password: Option<String>,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
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

    /// Submit a work entry (employee)
    Work {
        #[command(flatten)]
        auth: Credentials,

        #[arg(long, help = "Entry date (YYYY-MM-DD, default: today)")]
        date: Option<String>,

        #[arg(long, help = "Entry time (HH:MM, default: now)")]
        time: Option<String>,

        #[arg(long, help = "Task description")]
        task: String,

        #[arg(long, help = "Remarks")]
        remarks: String,

        #[arg(long, value_enum, default_value = "in-progress", help = "Final report status")]
        status: ReportStatus,
    },

    /// Submit a next-day plan (employee)
    Plan {
        #[command(flatten)]
        auth: Credentials,

        #[arg(long, help = "Plan date (YYYY-MM-DD, default: today)")]
        date: Option<String>,

        #[arg(long, help = "Plan description")]
        plan: String,

        #[arg(long, help = "Planned start time (HH:MM)")]
        start: String,

        #[arg(long, help = "Planned end time (HH:MM)")]
        end: String,
    },

    /// List your own past entries (employee)
    List {
        #[command(flatten)]
        auth: Credentials,

        #[arg(long, help = "List plan entries instead of work entries")]
        plans: bool,
    },

    /// Filter the full work log by a date window (admin)
    Report {
        #[command(flatten)]
        auth: Credentials,

        #[arg(long, value_enum, default_value = "today", help = "Date window")]
        window: WindowArg,

        #[arg(long, help = "Range start (YYYY-MM-DD, used with --window range)")]
        from: Option<String>,

        #[arg(long, help = "Range end (YYYY-MM-DD, used with --window range)")]
        to: Option<String>,

        #[arg(long = "filter-email", help = "Exact-match email filter")]
        filter_email: Option<String>,

        #[arg(long, help = "Report on plan entries instead of work entries")]
        plans: bool,
    },

    /// Export filtered work data (admin)
    Export {
        #[command(flatten)]
        auth: Credentials,

        #[arg(long, value_enum, help = "Output format (default: from config)")]
        format: Option<ExportFormat>,

        #[arg(long, value_name = "FILE", help = "Absolute output file path")]
        file: String,

        #[arg(long, value_enum, help = "Date window (default: everything)")]
        window: Option<WindowArg>,

        #[arg(long, help = "Range start (YYYY-MM-DD, used with --window range)")]
        from: Option<String>,

        #[arg(long, help = "Range end (YYYY-MM-DD, used with --window range)")]
        to: Option<String>,

        #[arg(long = "filter-email", help = "Exact-match email filter")]
        filter_email: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Import the legacy CSV datasets (admin)
    Import {
        #[command(flatten)]
        auth: Credentials,

        #[arg(
            long,
            value_name = "FILE",
            help = "Legacy work dataset (Date,Time,Email,Task,Remarks,Final Report)"
        )]
        work: Option<String>,

        #[arg(
            long,
            value_name = "FILE",
            help = "Legacy plan dataset (Date,Email,Tomorrow Plan,Start Time,End Time)"
        )]
        plans: Option<String>,

        #[arg(
            long,
            value_name = "FILE",
            help = "Legacy roster (Email,ID,Password); passwords are hashed on import"
        )]
        roster: Option<String>,
    },

    /// Manage the employee roster (admin)
    Employee {
        #[command(flatten)]
        auth: Credentials,

        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Task and completion analytics (admin)
    Stats {
        #[command(flatten)]
        auth: Credentials,
    },
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// Add a roster entry
    Add {
        #[arg(long = "new-email", help = "Email of the new employee")]
        new_email: String,

        #[arg(long = "new-id", help = "ID of the new employee")]
        new_id: String,

        #[arg(long = "new-password", help = "Password of the new employee")]
        new_password: String,
    },

    /// List roster entries (emails and IDs only, never hashes)
    List,
}
