use std::{fs, process};

use anyhow::{Context, Result};
use clap::{App, Arg};
use log::{error, info, warn};
use wordsquare::{
    config::{Config, Strategy},
    Dictionary, ExhaustiveFiller, Filler, HeuristicFiller, WordSquare, WordSquareError,
};

fn main() {
    // RUST_LOG overrides the default INFO filter
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let matches = App::new("wordsquare")
        .about("Finds an N x N grid whose rows and columns are all dictionary words")
        .arg(
            Arg::with_name("dimension")
                .value_name("N")
                .help("Grid size, defaults to 5")
                .index(1),
        )
        .arg(
            Arg::with_name("dictionary")
                .short("d")
                .long("dictionary")
                .value_name("FILE")
                .help("Word list, one word per line or a JSON list. Defaults to $WORDSQUARE_DICTIONARY, then ./words"),
        )
        .arg(
            Arg::with_name("word")
                .short("w")
                .long("word")
                .value_name("WORD")
                .help("Only search squares with WORD as the first row"),
        )
        .arg(
            Arg::with_name("phase")
                .long("phase")
                .value_name("PHASE")
                .possible_values(&["1", "2", "both"])
                .requires("word")
                .help("First columns to try with --word: 1 the word itself, 2 every other word with its initial"),
        )
        .arg(
            Arg::with_name("exhaustive")
                .long("exhaustive")
                .takes_value(false)
                .help("Backtrack through every row instead of the two-phase heuristic"),
        )
        .arg(
            Arg::with_name("verify")
                .long("verify")
                .value_name("FILE")
                .help("Check the grid in FILE instead of searching"),
        )
        .arg(
            Arg::with_name("profile")
                .short("p")
                .long("profile")
                .takes_value(false)
                .help("Write flamegraph.svg after searching"),
        )
        .get_matches();

    let outcome = configure(&matches).and_then(|config| {
        if let Some(grid) = matches.value_of("verify") {
            verify(&config, grid)
        } else {
            search(&config, matches.is_present("profile"))
        }
    });

    match outcome {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            error!("Error: {e}");
            for cause in e.chain().skip(1) {
                error!("Caused by: {cause}");
            }
            process::exit(1);
        }
    }
}

fn configure(matches: &clap::ArgMatches) -> Result<Config> {
    let config = Config {
        dimension: Config::parse_dimension(matches.value_of("dimension")),
        dictionary: Config::resolve_dictionary(matches.value_of("dictionary"))?,
        strategy: if matches.is_present("exhaustive") {
            Strategy::Exhaustive
        } else {
            Strategy::Heuristic
        },
        first_word: matches
            .value_of("word")
            .map(|word| word.trim().to_ascii_uppercase()),
        phase: Config::parse_phase(matches.value_of("phase"))?,
    };

    if config.strategy == Strategy::Exhaustive && config.first_word.is_some() {
        warn!("--word only applies to the heuristic search, ignoring it");
    }
    Ok(config)
}

fn search(config: &Config, profile: bool) -> Result<bool> {
    let dictionary = Dictionary::load(&config.dictionary, config.dimension)?;

    #[cfg(unix)]
    let profiler = if profile {
        pprof::ProfilerGuard::new(100).ok()
    } else {
        None
    };
    #[cfg(not(unix))]
    {
        if profile {
            warn!("Profiling is only supported on unix");
        }
    }

    let result = match (config.strategy, &config.first_word) {
        (Strategy::Heuristic, Some(word)) => {
            if !dictionary.contains(word) {
                return Err(WordSquareError::InvalidConfiguration(format!(
                    "{} is not a {}-letter word of the dictionary",
                    word, config.dimension
                ))
                .into());
            }
            let mut filler = HeuristicFiller::new(&dictionary);
            let result = filler.solve_for_word(word, config.phase);
            info!("Evaluated {} candidates", filler.candidate_count());
            result
        }
        (Strategy::Heuristic, None) => run(HeuristicFiller::new(&dictionary)),
        (Strategy::Exhaustive, _) => run(ExhaustiveFiller::new(&dictionary)),
    };

    #[cfg(unix)]
    {
        if let Some(guard) = profiler {
            write_flamegraph(&guard);
        }
    }

    match result {
        Some(square) => println!("{}", square),
        None => println!("No Solution"),
    }
    Ok(true)
}

fn run<F: Filler>(mut filler: F) -> Option<WordSquare> {
    let result = filler.fill();
    info!("Evaluated {} candidates", filler.candidate_count());
    result
}

#[cfg(unix)]
fn write_flamegraph(guard: &pprof::ProfilerGuard) {
    let report = match guard.report().build() {
        Ok(report) => report,
        Err(e) => {
            warn!("Failed to build profile report: {e}");
            return;
        }
    };

    let written = fs::File::create("flamegraph.svg")
        .map_err(|e| e.to_string())
        .and_then(|file| report.flamegraph(file).map_err(|e| e.to_string()));

    match written {
        Ok(()) => info!("Wrote flamegraph.svg"),
        Err(e) => warn!("Failed to write flamegraph: {e}"),
    }
}

fn verify(config: &Config, grid: &str) -> Result<bool> {
    let contents =
        fs::read_to_string(grid).with_context(|| format!("Failed to read grid {}", grid))?;
    let square: WordSquare = contents.parse()?;
    let dictionary = Dictionary::load(&config.dictionary, square.dimension())?;

    let valid = square.is_valid(&dictionary);
    println!("{}", square);
    println!("{}", if valid { "Valid" } else { "Invalid" });
    Ok(valid)
}
