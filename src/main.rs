use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use ec2names::config::{self, Config};
use ec2names::exit_codes::exit_code_for_anyhow;
use ec2names::output::{self, ArchReport, OutputFormat};
use ec2names::utils::collect_items;
use ec2names::{
    group_by_family, parse, sort_generations, sort_types, unique_sorted, OrderingOptions,
    SortKind,
};

#[derive(Parser)]
#[command(name = "ec2names")]
#[command(
    about = "Parse, sort, deduplicate and group EC2 instance names",
    long_about = "ec2names orders EC2 instance generations (m6i, c5n) and types (m6i.2xlarge).\n\nNames are read from arguments, or one per line from stdin when none are given.\nMalformed names are never rejected; they are reported as invalid and still ordered."
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (defaults to the config's output.format)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Use a built-in ordering instead of the configured one
    #[arg(long, global = true, value_enum)]
    preset: Option<Preset>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Preset {
    /// Plain alphabetical families and suffixes
    Alphabetical,
    /// Common class buckets (c, m, r, x, ...) first
    ClassBuckets,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the parsed components of each name
    Parse { names: Vec<String> },
    /// Sort generation ids, or full types with --types
    Sort {
        #[arg(short, long)]
        types: bool,
        names: Vec<String>,
    },
    /// Deduplicate (case and whitespace insensitive) and sort
    Unique {
        #[arg(short, long)]
        types: bool,
        names: Vec<String>,
    },
    /// Group names by family, in first-seen order
    Group { names: Vec<String> },
    /// Tag names as Graviton, AMD or Intel
    Arch { names: Vec<String> },
    /// Write a config file with the class-bucket ordering
    Init {
        /// Output path for config file
        #[arg(short, long, default_value = ".ec2names.toml")]
        output: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    // warnings and errors only unless --verbose
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(exit_code_for_anyhow(&e));
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    let options = match cli.preset {
        Some(Preset::Alphabetical) => OrderingOptions::default(),
        Some(Preset::ClassBuckets) => OrderingOptions::class_buckets(),
        None => config.ordering.clone(),
    };
    let format = cli.format.unwrap_or(config.output.format);

    let read = |names: Vec<String>| collect_items(names, io::stdin().lock());

    let rendered = match cli.command {
        Commands::Parse { names } => {
            let ids: Vec<_> = read(names)?.iter().map(|n| parse(n)).collect();
            let invalid = ids.iter().filter(|id| !id.valid).count();
            if invalid > 0 {
                tracing::warn!("{} name(s) did not match the instance name grammar", invalid);
            }
            output::render_parsed(&ids, format)?
        }
        Commands::Sort { types, names } => {
            let items = read(names)?;
            let sorted = if types {
                sort_types(&items, &options)
            } else {
                sort_generations(&items, &options)
            };
            output::render_list(&sorted, format)?
        }
        Commands::Unique { types, names } => {
            let items = read(names)?;
            let kind = if types { SortKind::Types } else { SortKind::Generations };
            let unique = unique_sorted(&items, kind, &options);
            tracing::debug!("{} unique of {} name(s)", unique.len(), items.len());
            output::render_list(&unique, format)?
        }
        Commands::Group { names } => {
            let items = read(names)?;
            output::render_groups(&group_by_family(&items), format)?
        }
        Commands::Arch { names } => {
            let reports: Vec<_> = read(names)?.iter().map(|n| ArchReport::new(n)).collect();
            output::render_arch(&reports, format)?
        }
        Commands::Init { output } => {
            config::init_config(&output)?;
            return Ok(());
        }
    };

    println!("{}", rendered);
    Ok(())
}
