use anyhow::{anyhow, Result};
use clap::{arg, ArgAction, ArgMatches, Command};
use log::{debug, info, LevelFilter};
use maxdefense_algorithms::{Algorithm, DefenseTable};
use maxdefense_catalog::{
    filter_items, generate_catalog, load_catalog, write_catalog, Catalog, Challenge, Item,
    Selection,
};
use maxdefense_utils::{jsonify, load_settings, parse_seed, timed, SolveSettings};
use serde::Serialize;
use std::{
    fs::{self, File},
    io::{self, BufWriter},
    path::{Path, PathBuf},
};

/// Solvers may sum the same items in a different order.
const DEFENSE_TOLERANCE: f64 = 1e-9;

fn cli() -> Command {
    Command::new("maxdefense")
        .about("Chooses the armor with the most defense within a gold budget")
        .arg_required_else_help(true)
        .arg(
            arg!(-v --verbose "Log debug output to stderr")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("solve")
                .about("Solves a catalog with one algorithm")
                .arg(
                    arg!(<CATALOG> "Path to a '^' delimited armor catalog")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(<SETTINGS> "Settings json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--algorithm [ALGORITHM] "Which solver to run")
                        .default_value("dynamic")
                        .value_parser(["dynamic", "exhaustive"]),
                )
                .arg(
                    arg!(--table "Print the dynamic programming table")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, a json report is saved to this file path")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("compare")
                .about("Runs both solvers on the same input and checks they agree")
                .arg(
                    arg!(<CATALOG> "Path to a '^' delimited armor catalog")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(<SETTINGS> "Settings json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("generate")
                .about("Generates a random armor catalog")
                .arg(
                    arg!(<NUM_ITEMS> "Number of items to generate")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--seed [SEED] "32 byte hex seed (defaults to all zeros)")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the catalog is written here instead of stdout")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();
    init_logger(matches.get_flag("verbose"));

    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logger(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn run(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("solve", sub_m)) => solve(
            required::<PathBuf>(sub_m, "CATALOG")?,
            required::<String>(sub_m, "SETTINGS")?,
            required::<String>(sub_m, "algorithm")?.parse()?,
            sub_m.get_flag("table"),
            sub_m.get_one::<PathBuf>("output").cloned(),
        ),
        Some(("compare", sub_m)) => compare(
            required::<PathBuf>(sub_m, "CATALOG")?,
            required::<String>(sub_m, "SETTINGS")?,
        ),
        Some(("generate", sub_m)) => generate(
            required::<usize>(sub_m, "NUM_ITEMS")?,
            sub_m.get_one::<String>("seed").cloned(),
            sub_m.get_one::<PathBuf>("output").cloned(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    }
}

fn required<T: Clone + Send + Sync + 'static>(matches: &ArgMatches, id: &str) -> Result<T> {
    matches
        .get_one::<T>(id)
        .cloned()
        .ok_or_else(|| anyhow!("Missing argument: {}", id))
}

#[derive(Serialize)]
struct SolveReport<'a> {
    algorithm: &'static str,
    budget: u32,
    num_items: usize,
    items: Vec<&'a Item>,
    total_cost: u64,
    total_defense: f64,
    elapsed_secs: f64,
}

fn prepare_challenge(catalog_path: &Path, settings: &str) -> Result<Challenge> {
    let settings: SolveSettings = load_settings(settings)?;
    let catalog: Catalog = load_catalog(catalog_path)?;
    let filtered = filter_items(
        &catalog,
        settings.min_defense,
        settings.max_defense(),
        settings.limit,
    );
    info!(
        "Kept {} of {} items with defense in [{}, {}]",
        filtered.len(),
        catalog.len(),
        settings.min_defense,
        settings.max_defense()
    );
    Ok(Challenge::new(filtered, settings.budget))
}

fn run_algorithm(algorithm: Algorithm, challenge: &Challenge) -> Result<(Selection, f64)> {
    let (selection, elapsed) = timed(|| algorithm.solve_challenge(challenge));
    let selection = selection?;
    let total_defense = challenge.evaluate_selection(&selection)?;
    debug!(
        "{} selected {} items with defense {}",
        algorithm,
        selection.len(),
        total_defense
    );
    Ok((selection, elapsed))
}

pub fn solve(
    catalog_path: PathBuf,
    settings: String,
    algorithm: Algorithm,
    print_table: bool,
    output_file: Option<PathBuf>,
) -> Result<()> {
    let challenge = prepare_challenge(&catalog_path, &settings)?;
    if print_table && algorithm != Algorithm::Dynamic {
        return Err(anyhow!("--table is only available for the dynamic algorithm"));
    }

    let (selection, elapsed) = run_algorithm(algorithm, &challenge)?;
    print!("{}", selection);
    println!("elapsed time = {} seconds", elapsed);

    if print_table {
        print!("{}", DefenseTable::build(&challenge.items, challenge.budget));
    }

    if let Some(path) = output_file {
        let (total_cost, total_defense) = selection.totals();
        let report = SolveReport {
            algorithm: algorithm.name(),
            budget: challenge.budget,
            num_items: challenge.num_items(),
            items: selection.items.iter().map(|item| item.as_ref()).collect(),
            total_cost,
            total_defense,
            elapsed_secs: elapsed,
        };
        fs::write(&path, jsonify(&report)?)
            .map_err(|e| anyhow!("Failed to write {}: {}", path.display(), e))?;
        info!("Saved report to {}", path.display());
    }
    Ok(())
}

pub fn compare(catalog_path: PathBuf, settings: String) -> Result<()> {
    let challenge = prepare_challenge(&catalog_path, &settings)?;

    let mut results = Vec::new();
    for algorithm in Algorithm::ALL {
        let (selection, elapsed) = run_algorithm(algorithm, &challenge)?;
        let (total_cost, total_defense) = selection.totals();
        println!(
            "{}: {} items, cost {} gold, defense {}, elapsed time = {} seconds",
            algorithm,
            selection.len(),
            total_cost,
            total_defense,
            elapsed
        );
        results.push((algorithm, total_defense));
    }

    let (first, first_defense) = results[0];
    for &(other, other_defense) in &results[1..] {
        if (first_defense - other_defense).abs() > DEFENSE_TOLERANCE {
            return Err(anyhow!(
                "{} defense ({}) differs from {} defense ({})",
                first,
                first_defense,
                other,
                other_defense
            ));
        }
    }
    println!("Solvers agree");
    Ok(())
}

pub fn generate(num_items: usize, seed: Option<String>, output_file: Option<PathBuf>) -> Result<()> {
    let seed = match seed {
        Some(seed) => parse_seed(&seed)?,
        None => [0u8; 32],
    };
    let catalog = generate_catalog(&seed, num_items)?;
    match output_file {
        Some(path) => {
            let file = File::create(&path)
                .map_err(|e| anyhow!("Failed to create {}: {}", path.display(), e))?;
            write_catalog(BufWriter::new(file), &catalog)?;
            info!("Wrote {} items to {}", catalog.len(), path.display());
        }
        None => write_catalog(io::stdout().lock(), &catalog)?,
    }
    Ok(())
}
