use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for opstrack
/// CLI application for daily reports, tasks and KPI tracking with SQLite
#[derive(Parser)]
#[command(
    name = "opstrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "Daily activity reporting, task tracking and KPI scoring over SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act as this person (defaults to the configured default_user)
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage daily activity reports
    Report {
        #[command(subcommand)]
        command: ReportCmd,
    },

    /// Manage tasks
    Task {
        #[command(subcommand)]
        command: TaskCmd,
    },

    /// Record and summarize KPI entries
    Kpi {
        #[command(subcommand)]
        command: KpiCmd,
    },

    /// List sales leads spawned from demo activities
    Leads,

    /// Show the DCR score and insights for a date
    Dcr {
        /// Date (YYYY-MM-DD)
        date: String,
    },

    /// Export daily report data
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Filter by year/month/day or a custom range (YYYY, YYYY-MM,
        /// YYYY-MM-DD, or ranges like YYYY-MM:YYYY-MM)
        #[arg(long, value_name = "RANGE")]
        period: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ReportCmd {
    /// Log an activity entry for a date
    Add {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Activity category (demo, training, meeting, tech-support, ...)
        #[arg(long)]
        category: String,

        /// Start time (HH:MM)
        #[arg(long)]
        from: String,

        /// End time (HH:MM)
        #[arg(long)]
        to: String,

        /// Free-text note for the entry
        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Remove an activity entry from a date
    Rm {
        /// Date (YYYY-MM-DD)
        date: String,

        /// 1-based entry index shown by `report show`
        #[arg(long)]
        entry: usize,
    },

    /// Save the report for a date as a draft
    Draft {
        /// Date (YYYY-MM-DD)
        date: String,

        /// General notes for the day
        #[arg(long)]
        notes: Option<String>,
    },

    /// Submit the report for a date (one-way; freezes edits)
    Submit {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Attendance status (present, half-day, leave, wfh, client-site)
        #[arg(long)]
        attendance: String,

        /// General notes for the day
        #[arg(long)]
        notes: Option<String>,
    },

    /// Show the report for a date with its day totals
    Show {
        /// Date (YYYY-MM-DD)
        date: String,
    },
}

#[derive(Subcommand)]
pub enum TaskCmd {
    /// Create a task
    Add {
        /// Task title
        title: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Person the task is assigned to (defaults to --user)
        #[arg(long)]
        assignee: Option<String>,

        /// Priority: high, medium, low
        #[arg(long, default_value = "medium")]
        priority: String,

        /// Activity category (demo, project, tech-support, ...)
        #[arg(long, default_value = "project")]
        category: String,

        /// Client the task is for
        #[arg(long)]
        client: Option<String>,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due_date: String,

        /// Due time-of-day (HH:MM); makes the task time-based
        #[arg(long)]
        due_time: Option<String>,

        /// Estimated hours
        #[arg(long, default_value_t = 0.0)]
        estimated_hours: f64,

        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,
    },

    /// List tasks
    List {
        /// Filter by assignee
        #[arg(long)]
        assignee: Option<String>,
    },

    /// Start a pending task
    Start {
        /// Task id
        id: i64,
    },

    /// Complete an in-progress task
    Done {
        /// Task id
        id: i64,
    },

    /// Escalate a task (requires a reason; optionally reassigns)
    Escalate {
        /// Task id
        id: i64,

        /// Why the task is being escalated
        #[arg(long)]
        reason: String,

        /// Reassign the task to this person
        #[arg(long)]
        reassign: Option<String>,
    },

    /// Add a comment to a task
    Comment {
        /// Task id
        id: i64,

        /// Comment author (defaults to --user)
        #[arg(long)]
        author: Option<String>,

        /// Comment text
        #[arg(long)]
        text: String,
    },
}

#[derive(Subcommand)]
pub enum KpiCmd {
    /// Record (or replace) a KPI entry for a date
    Add {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Customer satisfaction rating (1-5)
        #[arg(long, default_value_t = 3)]
        satisfaction: i32,

        /// Timely delivery rating (1-5)
        #[arg(long, default_value_t = 3)]
        delivery: i32,

        /// Certifications earned
        #[arg(long, default_value = "")]
        certifications: String,

        /// Leads generated
        #[arg(long, default_value_t = 0)]
        leads: i32,

        /// DCR maintenance score (1-5); auto-computed from the day's task
        /// outcomes if omitted
        #[arg(long)]
        dcr: Option<f64>,

        /// Technical escalations
        #[arg(long, default_value_t = 0)]
        escalations: i32,

        /// Free-text notes
        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Summarize KPI entries over a window
    Summary {
        /// Filter by year/month/day or a custom range
        #[arg(long, value_name = "RANGE")]
        period: Option<String>,
    },
}
