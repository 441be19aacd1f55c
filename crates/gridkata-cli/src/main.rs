use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use gridkata_cli::drills::construction::{print_construction, run_construction};
use gridkata_cli::drills::extraction::{print_extraction, run_extraction};
use gridkata_cli::drills::load_drill_config;
use gridkata_cli::drills::sequence::{print_sequence, run_sequence, write_sequence_csv};
use gridkata_cli::drills::traversal::{print_traversal, run_traversal};
use gridkata_core::DrillConfig;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("GRIDKATA_LOG", "error,gridkata=info"))
        .init();

    let matches = Command::new("gridkata")
        .version(clap::crate_version!())
        .about("Array fundamentals drills: construction, slicing, traversal, strided mutation")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("run")
                .about("Run the drills in fixed order")
                .arg(
                    Arg::new("config")
                        .help("Path to a JSON drill configuration file")
                        .required(false)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("drill")
                        .long("drill")
                        .help("Run only the named drill. May be repeated.")
                        .action(ArgAction::Append)
                        .value_parser(["construction", "extraction", "traversal", "sequence"]),
                )
                .arg(
                    Arg::new("output_file")
                        .short('o')
                        .long("output")
                        .help("Write the mutated sequence as CSV to this path")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("template").about("Print the default drill configuration as JSON"),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    match matches.subcommand() {
        Some(("run", sub_m)) => handle_run(sub_m),
        Some(("template", _)) => handle_template(),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_template() -> Result<()> {
    let json = serde_json::to_string_pretty(&DrillConfig::default())?;
    println!("{}", json);
    Ok(())
}

fn handle_run(matches: &ArgMatches) -> Result<()> {
    let config = if let Some(config_path) = matches.get_one::<PathBuf>("config") {
        eprintln!("[GridKata] Using config: {:?}", config_path);
        load_drill_config(config_path)?
    } else {
        eprintln!("[GridKata] No config provided; using defaults.");
        DrillConfig::default()
    };

    let selected: Vec<String> = matches
        .get_many::<String>("drill")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let wants = |name: &str| selected.is_empty() || selected.iter().any(|d| d == name);

    if wants("construction") {
        let outcome = run_construction(&config);
        print_construction(&outcome);
        if !outcome.grids_agree() {
            log::warn!("construction primitives produced different grids");
        }
    }

    if wants("extraction") {
        let outcome = run_extraction(&config)?;
        print_extraction(&outcome);
    }

    if wants("traversal") {
        let outcome = run_traversal(&config);
        print_traversal(&outcome);
    }

    if wants("sequence") {
        let outcome = run_sequence(&config)?;
        print_sequence(&outcome);
        if let Some(output_path) = matches.get_one::<PathBuf>("output_file") {
            write_sequence_csv(&outcome, output_path)?;
            eprintln!("[GridKata] Wrote sequence CSV: {:?}", output_path);
        }
    }

    Ok(())
}
