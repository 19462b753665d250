use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// Format and classify field trial protocol dates
#[derive(Parser, Debug)]
#[command(name = "fieldate", author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Timezone used to resolve timestamps and today's date (IANA format)
    #[arg(long, global = true)]
    pub timezone: Option<String>,

    /// Treat this date as today (e.g. '2024-04-15', 'next monday')
    #[arg(long, global = true)]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the compact display form of dates
    Format(FormatCommand),
    /// Show due dates with their urgency
    Due(DueCommand),
    /// Print the urgency bucket and color of one due date
    Classify(ClassifyCommand),
    /// Describe dates relative to today
    Relative(RelativeCommand),
    /// Summarize a protocol stage
    Info(InfoCommand),
    /// Show the last-updated block of a recorded trait
    Updated(UpdatedCommand),
    /// List timezones
    Timezones(TimezonesCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct FormatCommand {
    /// Dates to format
    #[clap(required = true, num_args = 1..)]
    pub dates: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct DueCommand {
    /// Due dates to classify
    #[clap(required = true, num_args = 1..)]
    pub dates: Vec<String>,
    /// Output format (overrides configuration)
    #[clap(long, value_enum)]
    pub output: Option<OutputFormat>,
}

#[derive(Parser, Debug, Clone)]
pub struct ClassifyCommand {
    /// The due date to classify
    pub date: String,
}

#[derive(Parser, Debug, Clone)]
pub struct RelativeCommand {
    /// Dates to describe
    #[clap(required = true, num_args = 1..)]
    pub dates: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct InfoCommand {
    /// Growth stage name
    #[clap(long)]
    pub stage: Option<String>,
    /// Date of sowing
    #[clap(long)]
    pub sown: Option<String>,
    /// Due date of the stage
    #[clap(long)]
    pub due: Option<String>,
    /// Output format (overrides configuration)
    #[clap(long, value_enum)]
    pub output: Option<OutputFormat>,
}

#[derive(Parser, Debug, Clone)]
pub struct UpdatedCommand {
    /// Date of the last update
    #[clap(long)]
    pub date: Option<String>,
    /// Time of the last update
    #[clap(long)]
    pub time: Option<String>,
    /// Who made the update
    #[clap(long = "by")]
    pub updated_by: Option<String>,
    /// Where the update was made
    #[clap(long)]
    pub location: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct TimezonesCommand {
    /// Search pattern for timezone names
    #[clap(long)]
    pub search: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// One line per record
    Plain,
    /// JSON document
    Json,
}
