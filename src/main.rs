use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use swasth_khet::footprint::{self, FootprintConfig};
use swasth_khet::{config, history, logging, output, record};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_STORAGE: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a farm's resource-usage record
    Score {
        /// Usage record file (.json, or YAML for any other extension)
        record: PathBuf,

        /// Farm name, shown in the report and used as the history key
        #[arg(short, long)]
        farm: Option<String>,

        /// Save the result to history (requires --farm)
        #[arg(short, long, requires = "farm")]
        save: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the effective emission-factor table
    Factors,
    /// List saved results
    History {
        /// Only show results for this farm
        #[arg(short, long)]
        farm: Option<String>,

        /// Only show the most recent result (requires --farm)
        #[arg(long, requires = "farm")]
        latest: bool,

        /// Tab-separated output for scripting
        #[arg(long)]
        tsv: bool,
    },
    /// Write a config file with the standard factors and rules
    Init {
        /// Where to write the config (defaults to ~/.config/swasth-khet/config.yaml)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file without asking
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "swasth-khet")]
#[command(about = "Farm carbon-footprint and sustainability scoring", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging and score breakdowns
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/swasth-khet/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Commands::Init { path, force } = &cli.command {
        if let Err(e) = config::run_init(path.clone(), *force) {
            eprintln!("Init failed: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
        std::process::exit(EXIT_SUCCESS);
    }

    let config = match config::load_config(cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate footprint config at startup
    if let Err(errors) = footprint::validate_config(&config.footprint) {
        eprintln!("Footprint config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let history_path = match config.history_path.clone() {
        Some(p) => p,
        None => match history::get_history_path() {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Config error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
        },
    };

    let use_colors = output::should_use_colors();

    match cli.command {
        Commands::Score {
            record: record_path,
            farm,
            save,
            json,
        } => {
            let usage = match record::load_record(&record_path) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Record error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            if let Err(errors) = record::validate_record(&usage) {
                eprintln!("Invalid record {}:", record_path.display());
                for error in errors {
                    eprintln!("  - {}", error);
                }
                std::process::exit(EXIT_INPUT);
            }
            warn_unrecognized(&usage);

            let result = footprint::calculate_footprint(&usage, &config.footprint);
            debug!(
                baseline = result.baseline_footprint,
                eco = result.ecofriendly_footprint,
                score = result.sustainability_score,
                "Calculated footprint"
            );

            if json {
                match output::format_json(&result) {
                    Ok(text) => println!("{}", text),
                    Err(e) => {
                        eprintln!("Output error: {:#}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                }
            } else {
                println!("{}", output::format_report(farm.as_deref(), &result, use_colors));
                if cli.verbose {
                    println!();
                    println!("Score breakdown:");
                    println!(
                        "{}",
                        output::format_breakdown(&footprint::score_breakdown(
                            &usage,
                            &config.footprint.score
                        ))
                    );
                }
            }

            if save {
                // clap guarantees --farm accompanies --save
                let farm = farm.unwrap_or_default();
                if let Err(e) = save_result(&history_path, farm, usage, result) {
                    eprintln!("History error: {:#}", e);
                    std::process::exit(EXIT_STORAGE);
                }
            }
        }
        Commands::Factors => {
            print_factors(&config.footprint);
        }
        Commands::History { farm, latest, tsv } => {
            let state = match history::load_history(&history_path) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("History error: {:#}", e);
                    std::process::exit(EXIT_STORAGE);
                }
            };

            let entries: Vec<_> = match farm {
                Some(ref name) if latest => state.latest_for(name).into_iter().collect(),
                Some(ref name) => state.entries_for(name),
                None => state.entries.iter().collect(),
            };

            if tsv {
                let text = output::format_tsv(&entries);
                if !text.is_empty() {
                    println!("{}", text);
                }
            } else {
                println!("{}", output::format_history_table(&entries, use_colors));
            }
        }
        // Handled before config loading
        Commands::Init { .. } => {}
    }

    std::process::exit(EXIT_SUCCESS);
}

fn print_factors(footprint: &FootprintConfig) {
    println!(
        "{}",
        output::format_factor_table(&footprint.factors.entries())
    );
    println!();
    println!("Carbon credit rate: {} per ton CO2e", footprint.credit.rate_per_ton);
}

fn warn_unrecognized(usage: &record::UsageRecord) {
    if let Some(irrigation) = usage.irrigation_type.as_ref().filter(|t| !t.is_recognized()) {
        warn!(
            irrigation_type = irrigation.as_str(),
            "Unrecognized irrigation type, using the fallback factor"
        );
    }
    if let Some(transport) = usage.transport_method.as_ref().filter(|t| !t.is_recognized()) {
        warn!(
            transport_method = transport.as_str(),
            "Unrecognized transport method, using the fallback factor"
        );
    }
}

fn save_result(
    path: &std::path::Path,
    farm: String,
    usage: record::UsageRecord,
    result: footprint::ScoreResult,
) -> anyhow::Result<()> {
    let mut state = history::load_history(path)?;
    state.record(farm.clone(), usage, result);
    history::save_history(path, &state)?;
    info!(farm = %farm, path = %path.display(), "Saved result to history");
    Ok(())
}
