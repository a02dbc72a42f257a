mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "cvscore",
    version,
    about = "Heuristic resume scoring against a target job profile"
)]
struct Cli {
    /// Log pipeline detail to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a resume (PDF, DOCX, TXT or a saved extraction JSON)
    Analyze {
        /// Path to the resume or a JSON file written by `cvscore extract --out`
        input_file: PathBuf,

        /// Predefined job profile (default: civil-engineer)
        #[arg(short, long, value_name = "NAME", conflicts_with = "profile")]
        preset: Option<String>,

        /// Custom JSON job profile
        #[arg(long, value_name = "FILE")]
        profile: Option<PathBuf>,

        /// Output format: text (default) or json
        #[arg(short, long, default_value = "text")]
        output: String,

        /// Also write the report (text) or analysis (json) to a file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Decode a resume into plain text and layout metadata (without scoring)
    Extract {
        /// Path to PDF, DOCX or TXT file
        input_file: PathBuf,

        /// Output format: text (default) or json
        #[arg(short, long, default_value = "text")]
        output: String,

        /// Write the extraction to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Inspect and validate job profiles
    Profiles {
        #[command(subcommand)]
        action: ProfilesAction,
    },
}

#[derive(Subcommand)]
enum ProfilesAction {
    /// List predefined job profiles
    List,
    /// Show what a profile asks for
    Explain {
        /// Preset name (e.g., "civil-engineer")
        preset: String,
    },
    /// Print the JSON profile format with field descriptions
    Schema,
    /// Validate a custom profile file
    Validate {
        /// Path to JSON profile
        file: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "cvscore_core=debug,cvscore=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Analyze {
            input_file,
            preset,
            profile,
            output,
            out,
        } => commands::analyze::run(input_file, preset, profile, &output, out),
        Commands::Extract {
            input_file,
            output,
            out,
        } => commands::extract::run(input_file, &output, out),
        Commands::Profiles { action } => match action {
            ProfilesAction::List => commands::profiles::list(),
            ProfilesAction::Explain { preset } => commands::profiles::explain(&preset),
            ProfilesAction::Schema => commands::profiles::schema(),
            ProfilesAction::Validate { file } => commands::profiles::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
