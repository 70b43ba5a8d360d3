//! Command-line front end: read a text layout, run one or all strategies, print the paths.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use env_logger::{Builder, Env};
use log::{info, LevelFilter};
use thiserror::Error;

use gridwalk::{GridError, Layout, SearchError, Strategy};


#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq)]
enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

/// Find a path through a grid layout.
///
/// The layout uses `#` for walls, `.` for open cells, and `S`/`E` for the start and end.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Config {
    /// Layout file; reads stdin when omitted.
    #[arg(value_name = "FILE")]
    layout: Option<PathBuf>,

    /// Strategy to run: bfs, dfs, astar or greedy (also b, d, a, h).
    #[arg(short, long, default_value = "astar", conflicts_with = "all")]
    strategy: Strategy,

    /// Run all four strategies one after another.
    #[arg(long, default_value_t = false)]
    all: bool,

    /// Print every cell as it is expanded.
    #[arg(long, default_value_t = false)]
    trace_steps: bool,

    /// Log level; RUST_LOG takes precedence per module.
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read layout: {0}")]
    Io(#[from] io::Error),
    #[error("invalid layout: {0}")]
    Layout(#[from] GridError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("layout has no {0:?} marker")]
    MissingEndpoint(char),
}

fn init_logger(level: LogLevel) {
    let mut builder = Builder::from_env(Env::default().filter_or("RUST_LOG", "info"));
    builder.filter_level(level.into());
    builder.init();
}

fn read_layout(path: Option<&PathBuf>) -> Result<Layout, CliError> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(text.parse::<Layout>()?)
}

fn run(config: &Config) -> Result<(), CliError> {
    let layout = read_layout(config.layout.as_ref())?;
    let start = layout.start.ok_or(CliError::MissingEndpoint('S'))?;
    let end = layout.end.ok_or(CliError::MissingEndpoint('E'))?;
    info!(
        "{}x{} grid, start {}, end {}",
        layout.grid.rows(),
        layout.grid.cols(),
        start,
        end
    );

    let strategies: Vec<Strategy> = if config.all {
        Strategy::ALL.to_vec()
    } else {
        vec![config.strategy]
    };

    for strategy in strategies {
        let report = strategy.run(&layout.grid, start, end, |cell, status| {
            if config.trace_steps {
                println!("{:>13} {} {}", strategy.name(), status.as_str(), cell);
            }
        })?;
        println!("{}", layout.grid.render(&report.path, Some(start), Some(end)));
        println!("{report}");
        println!();
    }
    Ok(())
}

fn main() -> ExitCode {
    let config = Config::parse();
    init_logger(config.log_level);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
