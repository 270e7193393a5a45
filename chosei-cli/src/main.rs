mod commands;
mod render;

use anyhow::Result;
use chosei_core::config::ChoseiConfig;
use chosei_core::store::{EventStore, FileStore};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chosei")]
#[command(about = "Create scheduling events and collect availability responses")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new event with candidate date/time slots
    New {
        /// Event name
        name: String,

        /// Event description
        #[arg(long)]
        description: Option<String>,

        /// Candidate calendar date (YYYY/MM/DD, repeatable); combined with --time
        #[arg(short = 'd', long = "date")]
        dates: Vec<String>,

        /// Raw candidate line added verbatim (repeatable)
        #[arg(long = "slot")]
        slots: Vec<String>,

        /// Time label appended to each --date (defaults to the last one used)
        #[arg(short, long)]
        time: Option<String>,
    },
    /// Show an event's availability grid
    Show {
        /// Event identifier
        id: String,
    },
    /// Record a participant's availability for an event
    Respond {
        /// Event identifier
        id: String,

        /// Participant name (prompted for when omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// Optional comment shown next to the response
        #[arg(short, long)]
        comment: Option<String>,

        /// One mark per candidate: o/○ available, m/△ maybe, x/× unavailable
        #[arg(short, long)]
        marks: Option<String>,
    },
    /// List all stored events
    List {
        /// Print raw event records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the participate link for an event
    Share {
        /// Event identifier
        id: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ChoseiConfig::load()?;
    let mut store = EventStore::new(FileStore::new(config.data_path()));

    match cli.command {
        Commands::New {
            name,
            description,
            dates,
            slots,
            time,
        } => commands::new::run(&mut store, &config, name, description, dates, slots, time),
        Commands::Show { id } => commands::show::run(&store, &id),
        Commands::Respond {
            id,
            name,
            comment,
            marks,
        } => commands::respond::run(&mut store, &id, name, comment, marks),
        Commands::List { json } => commands::list::run(&store, json),
        Commands::Share { id } => commands::share::run(&store, &config, &id),
    }
}
