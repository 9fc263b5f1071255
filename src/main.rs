#![forbid(unsafe_code)]
//! exdoc Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use exdoc::commands::{
    execute_detect, execute_doc, execute_parse, execute_schema, execute_subclasses, DocOptions,
    ParseOptions, SchemaOptions, SubclassesOptions,
};
use exdoc::Config;

#[derive(Parser)]
#[command(name = "exdoc")]
#[command(about = "Extract structured documentation from introspected objects")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path (default: .exdoc.config.json, if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Document an introspected object (ObjectInfo JSON)
    Doc {
        /// Input file, or `-` for stdin
        input: PathBuf,

        /// Document every public member too, keyed by name
        #[arg(short, long)]
        members: bool,
    },

    /// Parse a raw docstring
    Parse {
        /// Input file, or `-` for stdin
        input: PathBuf,

        /// Name identifying the docstring in errors
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Print the dialect of a raw docstring (tag or section)
    Detect {
        /// Input file, or `-` for stdin
        input: PathBuf,
    },

    /// Document a relational model (ModelInfo JSON)
    Schema {
        /// Input file, or `-` for stdin
        input: PathBuf,
    },

    /// List a type and its transitive subtypes (ObjectInfo JSON)
    Subclasses {
        /// Input file, or `-` for stdin
        input: PathBuf,

        /// Only list types without further subtypes
        #[arg(short, long)]
        leaves: bool,
    },
}

/// Log to stderr so stdout stays pure JSON
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("exdoc=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::resolve(cli.config.as_deref())?;

    match cli.command {
        Commands::Doc { input, members } => {
            execute_doc(DocOptions { input, members }, config)?;
        }

        Commands::Parse { input, name } => {
            execute_parse(ParseOptions { input, name }, config)?;
        }

        Commands::Detect { input } => {
            execute_detect(ParseOptions { input, name: None }, config)?;
        }

        Commands::Schema { input } => {
            execute_schema(SchemaOptions { input }, config)?;
        }

        Commands::Subclasses { input, leaves } => {
            execute_subclasses(SubclassesOptions { input, leaves }, config)?;
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("{} {:#}", style("✗").red(), err);
        std::process::exit(1);
    }
}
