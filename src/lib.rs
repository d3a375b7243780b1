#![deny(clippy::all)]

use clap::{value_t, App, Arg, ArgMatches};

use anyhow::Context;
use tracing::{debug, info};

use std::io::{self, Write};

use searcher::graph::Graph;
use searcher::{SearchOptions, Strategy};

pub mod demos;
pub mod input;
mod logging;
pub mod narrate;
pub mod report;

use input::{InputError, Source};
use report::Report;

type Error = anyhow::Error;

/// Everything needed to run searches, as read from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub source: Source,
    pub start: String,
    pub goal: String,
    pub strategies: Vec<Strategy>,
    pub options: SearchOptions,
    pub trace: bool,
}

impl Config {
    pub fn from_matches(matches: &ArgMatches<'_>) -> Result<Self, Error> {
        let source = Source::from_args(
            matches.value_of("graph"),
            matches.value_of("demo").unwrap_or(demos::DEFAULT_DEMO),
        )?;

        let (start, goal) = match (matches.value_of("start"), matches.value_of("goal")) {
            (Some(start), Some(goal)) => (start.to_string(), goal.to_string()),
            _ => {
                let (start, goal) = source.canonical_query().ok_or(InputError::MissingQuery)?;
                (start.to_string(), goal.to_string())
            }
        };

        let strategies = match matches.value_of("strategy").unwrap_or("bfs") {
            name if name.eq_ignore_ascii_case("all") => Strategy::all().to_vec(),
            name => vec![name.parse()?],
        };

        let limit = if matches.is_present("limit") {
            Some(value_t!(matches, "limit", usize)?)
        } else {
            None
        };

        Ok(Config {
            source,
            start,
            goal,
            strategies,
            options: SearchOptions {
                limit,
                verbose: matches.occurrences_of("verbose") > 1,
            },
            trace: matches.is_present("trace"),
        })
    }
}

fn app() -> App<'static, 'static> {
    App::new("graphsearch")
        .version("0.1.0")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Breadth-first, depth-first and uniform-cost graph search")
        .arg(
            Arg::with_name("start")
                .value_name("START")
                .help("Node to start searching from")
                .required(false)
                .requires("goal")
                .takes_value(true)
                .index(1),
        )
        .arg(
            Arg::with_name("goal")
                .value_name("GOAL")
                .help("Node to search for")
                .required(false)
                .takes_value(true)
                .index(2),
        )
        .arg(
            Arg::with_name("graph")
                .short("g")
                .long("graph")
                .value_name("FILE")
                .help("Graph to search, or - to read standard input")
                .takes_value(true)
                .conflicts_with("demo"),
        )
        .arg(
            Arg::with_name("demo")
                .short("d")
                .long("demo")
                .value_name("NAME")
                .help("Built-in graph to search when no file is given")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("strategy")
                .short("s")
                .long("strategy")
                .value_name("STRATEGY")
                .help("bfs, dfs, ucs or all")
                .takes_value(true)
                .default_value("bfs"),
        )
        .arg(
            Arg::with_name("limit")
                .short("l")
                .long("limit")
                .value_name("N")
                .help("Give up after expanding N nodes")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("trace")
                .short("t")
                .long("trace")
                .help("Print every step of the search"),
        )
        .arg(
            Arg::with_name("list-demos")
                .long("list-demos")
                .help("List the built-in graphs and exit"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Log more, repeat for even more"),
        )
}

pub fn solver() -> Result<(), Error> {
    let matches = app().get_matches();

    logging::init_tracing(matches.occurrences_of("verbose"))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if matches.is_present("list-demos") {
        return list_demos(&mut out);
    }

    let config = Config::from_matches(&matches)?;
    execute(&config, &mut out)
}

pub fn list_demos(out: &mut dyn Write) -> Result<(), Error> {
    for demo in demos::all() {
        writeln!(
            out,
            "{:<10} {} -> {}  {}",
            demo.name, demo.start, demo.goal, demo.about
        )?;
    }
    Ok(())
}

/// Load the graph and run each requested search, writing reports to `out`.
pub fn execute(config: &Config, out: &mut dyn Write) -> Result<(), Error> {
    let graph = config.source.load()?;

    for (i, strategy) in config.strategies.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        run_one(config, &graph, *strategy, out)
            .with_context(|| format!("{} search failed", strategy))?;
    }

    Ok(())
}

fn run_one(
    config: &Config,
    graph: &Graph<String>,
    strategy: Strategy,
    out: &mut dyn Write,
) -> Result<(), Error> {
    debug!(%strategy, start = %config.start, goal = %config.goal, "running");

    let mut failure: Option<io::Error> = None;
    let result = {
        let searcher = searcher::build(graph, strategy).with_options(config.options.clone());
        let searcher = if config.trace {
            searcher.observe(|step| {
                if failure.is_none() {
                    failure = narrate::write_step(&mut *out, step).err();
                }
            })
        } else {
            searcher
        };
        searcher.run(config.start.clone(), config.goal.clone())?
    };

    if let Some(e) = failure {
        return Err(e.into());
    }

    info!(
        %strategy,
        found = result.found(),
        visited = result.visited().len(),
        "search finished"
    );

    write!(
        out,
        "{}",
        Report {
            start: &config.start,
            goal: &config.goal,
            result: &result,
        }
    )?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn config(args: &[&str]) -> Result<Config, Error> {
        let mut argv = vec!["graphsearch"];
        argv.extend_from_slice(args);
        let matches = app().get_matches_from_safe(argv)?;
        Config::from_matches(&matches)
    }

    fn output(args: &[&str]) -> String {
        let mut out = Vec::new();
        execute(&config(args).unwrap(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn defaults_reproduce_classroom() {
        let config = config(&[]).unwrap();
        assert_eq!(config.start, "S");
        assert_eq!(config.goal, "W");
        assert_eq!(config.strategies, vec![Strategy::BreadthFirst]);
        assert_eq!(config.options, SearchOptions::default());
        assert!(!config.trace);

        let text = output(&[]);
        assert!(text.contains("path: S -> B -> H -> Q -> U -> W"));
        assert!(text.contains("total: 5 hops"));
        assert!(text.contains("visited 29: "));
    }

    #[test]
    fn all_strategies() {
        let config = config(&["--demo", "weighted", "-s", "all", "-l", "100"]).unwrap();
        assert_eq!(config.strategies, Strategy::all().to_vec());
        assert_eq!(config.options.limit, Some(100));

        let text = output(&["--demo", "weighted", "-s", "all"]);
        assert!(text.contains("breadth-first search from S to F\n  path: S -> A -> D -> F\n"));
        assert!(text.contains("depth-first search from S to F"));
        assert!(text.contains("  path: S -> B -> A -> C -> E -> F\n  total: cost 10 over 5 hops"));
    }

    #[test]
    fn explicit_query() {
        let text = output(&["-d", "detour", "-s", "ucs", "S", "A"]);
        assert!(text.contains("uniform-cost search from S to A\n  path: S -> A\n  total: cost 5"));
    }

    #[test]
    fn trace_narrates_steps() {
        let text = output(&["-d", "detour", "-t", "-s", "ucs"]);
        assert!(text.starts_with("step 0: expanded S (visited 1, frontier 2: [B, A])\n"));
        assert!(text.contains("step 2: reached goal C (visited 3)\n"));
    }

    #[test]
    fn start_requires_goal() {
        assert!(config(&["A"]).is_err());
        assert!(config(&["-d", "detour", "B"]).is_err());

        let config = config(&["B", "C"]).unwrap();
        assert_eq!((config.start.as_str(), config.goal.as_str()), ("B", "C"));
    }

    #[test]
    fn all_ignores_case() {
        assert_eq!(config(&["-s", "ALL"]).unwrap().strategies, Strategy::all().to_vec());
        assert_eq!(
            config(&["-s", "All"]).unwrap().strategies,
            Strategy::all().to_vec()
        );
        assert_eq!(
            config(&["-s", "BFS"]).unwrap().strategies,
            vec![Strategy::BreadthFirst]
        );
    }

    #[test]
    fn unknown_strategy() {
        let err = config(&["-s", "astar"]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<searcher::SearchError>(),
            Some(&searcher::SearchError::InvalidStrategy("astar".to_string()))
        );
    }

    #[test]
    fn invalid_start() {
        let mut out = Vec::new();
        let err = execute(&config(&["Q", "W"]).unwrap(), &mut out).unwrap_err();
        assert_eq!(
            err.root_cause().to_string(),
            "Start node \"Q\" is not in the graph"
        );
    }

    #[test]
    fn limit_exhausted() {
        let mut out = Vec::new();
        let err = execute(&config(&["-l", "3"]).unwrap(), &mut out).unwrap_err();
        assert!(err
            .chain()
            .any(|e| e.to_string() == "Step limit exhausted after 3 steps"));
    }

    #[test]
    fn file_requires_query() {
        let err = config(&["--graph", "some-file.txt"]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InputError>(),
            Some(InputError::MissingQuery)
        ));
    }

    #[test]
    fn demo_listing() {
        let mut out = Vec::new();
        list_demos(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("classroom  S -> W"));
    }
}
