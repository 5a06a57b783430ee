use clap::Parser;
use harscope_cli::commands;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "harscope")]
#[command(author, version)]
#[command(
    about = "Report the slowest and largest requests in an HTTP Archive (HAR) file",
    long_about = "harscope reads a HAR capture and prints the request count, the 15 slowest \
                  requests, the 15 largest responses, and a wait/receive/connect breakdown \
                  of the 10 slowest requests."
)]
struct Cli {
    /// Path to the HAR file
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Enable verbose logging (written to stderr)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let Some(file) = cli.file else {
        println!("Usage: {} <file_path>", env!("CARGO_BIN_NAME"));
        return ExitCode::FAILURE;
    };

    match commands::report::execute(&file) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Load failures are part of the report output, so they go to stdout
            println!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("harscope=debug,harscope_cli=debug,harscope_core=debug")
    } else {
        EnvFilter::new("harscope=warn,harscope_cli=warn,harscope_core=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
