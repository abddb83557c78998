#![deny(clippy::all)]

use clap::{value_t, App, AppSettings, Arg, ArgMatches};

use env_logger::{Builder, Env, Target};
use lazy_static::lazy_static;
use log::{debug, info, LevelFilter};
use paste::paste;
use regex::Regex;
use searcher::{Algorithm, LocalOptions, Outcome, SearchNode, SearchOptions, StateSpace};
use thiserror::Error;

use std::collections::HashMap;
use std::fs::File;
use std::io;

pub mod domains;

type Error = anyhow::Error;
type Actor = Box<dyn (Fn(&Config) -> Result<(), Error>) + Send + Sync + 'static>;

macro_rules! domain {
    ($name:ident) => {
        paste! {
            (
                stringify!([<$name:snake>]),
                Box::new(domains::[<$name:snake>]::main) as Actor,
            )
        }
    };
}

lazy_static! {
    static ref DOMAINS: HashMap<&'static str, Actor> = {
        let domains: Vec<(&'static str, Actor)> = vec![
            domain!(GridWorld),
            domain!(Maze),
            domain!(WordLadder),
            domain!(SlidingPuzzle),
            domain!(Quartic),
            domain!(CarSeating),
        ];

        domains.into_iter().collect()
    };
}

/// Names of every registered domain, sorted.
pub fn domain_names() -> Vec<&'static str> {
    let mut names: Vec<_> = DOMAINS.keys().cloned().collect();
    names.sort_unstable();
    names
}

/// Everything a domain needs to know to run.
#[derive(Debug, Clone)]
pub struct Config {
    pub domain: String,
    pub algorithm: Algorithm,
    pub input: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub tiles: Option<String>,
    pub size: Option<(i32, i32)>,
    pub restarts: usize,
    pub seed: u64,
    pub options: SearchOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: String::new(),
            algorithm: Algorithm::AStar,
            input: None,
            from: None,
            to: None,
            tiles: None,
            size: None,
            restarts: 8,
            seed: 0,
            options: SearchOptions::default(),
        }
    }
}

impl Config {
    fn from_matches(matches: &ArgMatches) -> Result<Self, Error> {
        let algorithm = match matches.value_of("algorithm") {
            Some(name) => name.parse()?,
            None => Algorithm::AStar,
        };

        let size = match matches.value_of("size") {
            Some(text) => Some(parse_size(text)?),
            None => None,
        };

        let limit = if matches.is_present("limit") {
            Some(value_t!(matches, "limit", usize)?)
        } else {
            None
        };

        let verbose = if matches.is_present("progress") {
            Some(value_t!(matches, "progress", usize)?)
        } else {
            None
        };

        Ok(Self {
            domain: matches.value_of("domain").unwrap_or_default().replace('-', "_"),
            algorithm,
            input: matches.value_of("input").map(|s| s.to_string()),
            from: matches.value_of("from").map(|s| s.to_string()),
            to: matches.value_of("to").map(|s| s.to_string()),
            tiles: matches.value_of("tiles").map(|s| s.to_string()),
            size,
            restarts: value_t!(matches, "restarts", usize)?,
            seed: value_t!(matches, "seed", u64)?,
            options: SearchOptions {
                verbose,
                limit,
                animate: matches.is_present("animate"),
            },
        })
    }

    /// Local search settings. The expansion limit doubles as the cap on
    /// moves per descent.
    pub fn local_options(&self) -> LocalOptions {
        LocalOptions {
            max_iterations: self.options.limit,
            seed: self.seed,
            parallel: true,
        }
    }
}

fn parse_size(text: &str) -> Result<(i32, i32), RechercherError> {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^\s*(?P<w>\d+)\s*[xX,]\s*(?P<h>\d+)\s*$").unwrap();
    };

    let invalid = || RechercherError::InvalidSize(text.to_string());
    let cap = RE.captures(text).ok_or_else(invalid)?;
    let width: i32 = cap["w"].parse().map_err(|_| invalid())?;
    let height: i32 = cap["h"].parse().map_err(|_| invalid())?;
    if width == 0 || height == 0 {
        return Err(invalid());
    }
    Ok((width, height))
}

/// Run the configured algorithm on a problem, and print a summary.
///
/// Returns the path found, if any.
pub fn report<D>(config: &Config, problem: &D) -> Result<Option<SearchNode<D::State>>, Error>
where
    D: StateSpace,
{
    let engine = config
        .algorithm
        .engine()
        .with_options(config.options.clone());
    let report = engine.search_counted(problem)?;
    info!(
        "{}: expanded {}, generated {}, largest frontier {}",
        engine.name(),
        report.expanded,
        report.generated,
        report.max_frontier
    );

    match report.outcome {
        Outcome::Succeeded(node) => {
            println!(
                "{}: {} states, cost {}, {} visited",
                config.algorithm,
                node.depth(),
                node.cost(),
                report.expanded
            );
            Ok(Some(node))
        }
        Outcome::Exhausted => {
            println!(
                "{}: no solution, {} visited",
                config.algorithm, report.expanded
            );
            Ok(None)
        }
    }
}

fn app() -> App<'static, 'static> {
    App::new("rechercher")
        .version("1.0")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Best-first and local search over small puzzles")
        .setting(AppSettings::ArgRequiredElseHelp)
        .arg(
            Arg::with_name("domain")
                .value_name("DOMAIN")
                .help("Problem to solve, e.g. maze or word-ladder")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("algorithm")
                .short("a")
                .long("algorithm")
                .value_name("ALGORITHM")
                .help("One of dfs, bfs, ucs, greedy, astar")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .value_name("FILE")
                .help("Data file for the domain, or - for stdin")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("from")
                .long("from")
                .value_name("START")
                .allow_hyphen_values(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("to")
                .long("to")
                .alias("goal")
                .value_name("GOAL")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("tiles")
                .long("tiles")
                .value_name("TILES")
                .help("Sliding puzzle tiles in reading order, 0 for the blank")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("size")
                .long("size")
                .value_name("WxH")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("restarts")
                .long("restarts")
                .value_name("N")
                .default_value("8")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .default_value("0")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("limit")
                .long("limit")
                .value_name("N")
                .help("Give up after this many expansions")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("progress")
                .long("progress")
                .value_name("N")
                .help("Log progress every N expansions")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("animate")
                .long("animate")
                .help("Draw each expanded state (logged at trace level)"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Log more; repeat for more detail"),
        )
}

fn setup_logging(verbosity: u64) -> Result<(), Error> {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder = Builder::from_env(Env::default().default_filter_or(level.as_str()));
    builder.format_timestamp(None).target(Target::Stderr);
    builder
        .try_init()
        .map_err(|e| RechercherError::Logging(e.to_string()))?;
    Ok(())
}

pub fn rechercher() -> Result<(), Error> {
    let matches = app().get_matches();
    setup_logging(matches.occurrences_of("verbose"))?;

    let config = Config::from_matches(&matches)?;
    debug!("{:?}", config);

    match DOMAINS.get(config.domain.as_str()) {
        None => Err(RechercherError::DomainNotFound(config.domain, domain_names().join(", ")).into()),
        Some(actor) => actor(&config),
    }
}

type BoxedRead = Box<dyn ::std::io::Read + 'static>;

pub fn get_input_reader(filename: Option<&str>) -> Result<BoxedRead, Error> {
    let reader: BoxedRead = match filename {
        Some("-") => Box::new(::std::io::stdin()),
        Some(path) => {
            let f: File =
                File::open(path).map_err(|e| RechercherError::InputNotFound(path.to_string(), e))?;
            Box::new(f)
        }
        None => return Err(RechercherError::MissingInput.into()),
    };
    Ok(reader)
}

#[derive(Debug, Error)]
pub enum RechercherError {
    #[error("No domain named {0} (try one of: {1})")]
    DomainNotFound(String, String),

    #[error("This domain needs a data file (--input)")]
    MissingInput,

    #[error("Input not found: {0}")]
    InputNotFound(String, #[source] io::Error),

    #[error("Invalid grid size {0:?}, expected WIDTHxHEIGHT")]
    InvalidSize(String),

    #[error("Unable to start logging: {0}")]
    Logging(String),
}
