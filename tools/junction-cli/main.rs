use clap::Parser;
use junction::prelude::*;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::time::uptime;

/// Input an edge file and output the corresponding .jsonl format simplified
/// network. By default outputs to stdout and timing information to stderr.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Process a tsv format file
    #[arg(long)]
    tsv: bool,

    /// Dump the working segment table with edge IDs
    #[arg(long)]
    dump: bool,

    /// Suppress timing
    #[arg(short, long)]
    quiet: bool,

    /// Walk isolated rings completely and include their closing segment
    #[arg(long)]
    full_loops: bool,

    /// Name of edge-file to process
    inputfile: PathBuf,

    /// Name of simplified edge-file to output, default stdout
    outputfile: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    if let Err(e) = run(&cli) {
        exit_with_error(&e.to_string());
    }
}

fn init_logging(quiet: bool) {
    let level = if quiet {
        LevelFilter::WARN
    } else {
        LevelFilter::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(uptime())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), JunctionError> {
    let format = InputFormat::detect(&cli.inputfile, cli.tsv);
    let edges = load_path(&cli.inputfile, format)?;

    let builder = Simplifier::builder();
    let simplifier = if cli.full_loops {
        builder.full_loops().build()
    } else {
        builder.build()
    };
    let result = simplifier.simplify(&edges)?;

    if let Some(path) = write_duplicates(&cli.inputfile, &result.duplicates)? {
        info!("Duplicate segments written to {}", path.display());
    }

    if cli.dump {
        let path = write_dump(&cli.inputfile, &result.working)?;
        info!("Segment dump written to {}", path.display());
    }

    write_network(cli.outputfile.as_deref(), &result.edges)?;
    Ok(())
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
