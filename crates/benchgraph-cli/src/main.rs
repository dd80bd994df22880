use anyhow::Result;
use clap::{Arg, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use benchgraph_report::report::{self, DEFAULT_OUTPUT_DIR, DEFAULT_RESULTS_CSV};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(
            env_logger::Env::default()
                .filter_or("BENCHGRAPH_LOG", "error,benchgraph=info,benchgraph_report=info"),
        )
        .init();

    let matches = Command::new("benchgraph")
        .version(clap::crate_version!())
        .about("Render performance charts from resolution prover benchmark results")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .help("Path to the benchmark results CSV")
                .default_value(DEFAULT_RESULTS_CSV)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output_dir")
                .short('o')
                .long("output-dir")
                .help("Existing directory the chart images are written into")
                .default_value(DEFAULT_OUTPUT_DIR)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::DirPath),
        )
        .get_matches();

    let input: &PathBuf = matches.get_one("input").unwrap();
    let output_dir: &PathBuf = matches.get_one("output_dir").unwrap();

    match report::render_report(input, output_dir) {
        Ok(()) => Ok(()),
        Err(e) => {
            log::error!("Report rendering failed: {:#}", e);
            std::process::exit(1)
        }
    }
}
