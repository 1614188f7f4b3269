//! CLI frontend for dogworld builders.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "dw",
    about = "dogworld: coordinate worms, minimaps, and dice for builders",
    version,
    propagate_version = true
)]
struct Cli {
    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List rooms with their coordinates
    Rooms {
        /// World file (JSON)
        #[arg(short, long)]
        world: PathBuf,

        /// Only rooms in this zone
        #[arg(short, long)]
        zone: Option<String>,
    },

    /// Draw the overhead map around a room
    Map {
        /// Room name (case-insensitive)
        room: String,

        /// World file (JSON)
        #[arg(short, long)]
        world: PathBuf,

        /// Map width in cells (odd)
        #[arg(long, default_value = "21")]
        width: usize,

        /// Map height in cells (odd)
        #[arg(long, default_value = "21")]
        height: usize,
    },

    /// Show a room with its map alongside
    Look {
        /// Room name (case-insensitive)
        room: String,

        /// World file (JSON)
        #[arg(short, long)]
        world: PathBuf,
    },

    /// Re-derive coordinates for every room connected to a start room
    ResetCoords {
        /// Start room; keeps its current coordinates
        room: String,

        /// World file (JSON)
        #[arg(short, long)]
        world: PathBuf,

        /// Also copy these fields from the start room: zone, setting, non-combat, sector
        #[arg(short, long, value_delimiter = ',')]
        propagate: Vec<String>,

        /// Where to write the updated world (default: overwrite the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Roll dice or sample a distribution
    Roll {
        #[command(subcommand)]
        roll: RollCommand,
    },
}

#[derive(Subcommand)]
enum RollCommand {
    /// Roll the dice pool for a step number
    Step {
        /// Step number (1-100)
        #[arg(allow_negative_numbers = true)]
        step: i64,

        /// Explode maximum dice and report criticals
        #[arg(long)]
        crits: bool,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Sample a normal curve around a mean
    Distro {
        /// Target mean
        #[arg(allow_negative_numbers = true)]
        mean: f64,

        /// Spread: normal, flat, very flat, steep, very steep
        #[arg(long, default_value = "normal")]
        shape: String,

        /// Chase critical successes and report criticals
        #[arg(long)]
        crits: bool,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Roll a starting set of ability scores
    Abilities {
        /// Average score
        #[arg(long, default_value = "100")]
        mean: f64,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Rooms { world, zone } => commands::rooms::run(&world, zone.as_deref()),
        Commands::Map {
            room,
            world,
            width,
            height,
        } => commands::map::run(&world, &room, width, height),
        Commands::Look { room, world } => commands::look::run(&world, &room),
        Commands::ResetCoords {
            room,
            world,
            propagate,
            output,
        } => commands::reset::run(&world, &room, &propagate, output.as_deref()),
        Commands::Roll { roll } => match roll {
            RollCommand::Step { step, crits, seed } => commands::roll::step(step, crits, seed),
            RollCommand::Distro {
                mean,
                shape,
                crits,
                seed,
            } => commands::roll::distro(mean, &shape, crits, seed),
            RollCommand::Abilities { mean, seed } => commands::roll::abilities(mean, seed),
        },
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
