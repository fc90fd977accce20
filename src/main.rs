extern crate argparse;

use std::env;
use std::io;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use anagram_scan::orchestrator::{self, RunOptions};
use anagram_scan::AppConfig;

/// Logs go to stderr so stdout carries only results. `LOG_FORMAT=json`
/// switches to structured output and `LOG_LEVEL` sets the filter.
fn init_logging() {
    let filter = EnvFilter::try_new(env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".into()))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    let json = env::var("LOG_FORMAT").map(|f| f.eq_ignore_ascii_case("json")).unwrap_or(false);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> anagram_scan::Result<()> {
    use argparse::{ArgumentParser, Store, StoreTrue};

    let mut dictionary_path = String::new();
    let mut input_path = String::new();
    let mut options = RunOptions::default();

    {
        let mut ap = ArgumentParser::new();
        ap.set_description("Count dictionary words with an anagram in each input line");
        ap.refer(&mut dictionary_path)
            .required()
            .add_option(&["-d", "--dictionary"], Store, "Path to the dictionary file");
        ap.refer(&mut input_path)
            .required()
            .add_option(&["-i", "--input"], Store, "Path to the input file");
        ap.refer(&mut options.chunk_size)
            .add_option(&["-c", "--chunk-size"], Store, "Fixed chunk size (default: derived from the data)");
        ap.refer(&mut options.workers)
            .add_option(&["-j", "--workers"], Store, "Worker threads for chunk scans (default: one per core)");
        ap.refer(&mut options.overlap)
            .add_option(&["--overlap"], StoreTrue, "Also find words that straddle chunk boundaries");
        ap.parse_args_or_exit();
    }

    dotenv::dotenv().ok();
    init_logging();

    let config = AppConfig::from_env();
    info!(dictionary = %dictionary_path, input = %input_path, "Starting");

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    if let Err(e) = orchestrator::run(&dictionary_path, &input_path, &config, &options, &mut out) {
        error!(error = %e, "Matching failed");
        return Err(e);
    }

    info!("Finished");
    Ok(())
}
