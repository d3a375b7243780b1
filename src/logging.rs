use anyhow::{anyhow, Error};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable which overrides the log filter.
pub const LOG_ENV: &str = "GRAPHSEARCH_LOG";

fn level(verbosity: u64) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize logging to stderr.
///
/// Each `-v` raises the level for this crate and the search engine.
/// `GRAPHSEARCH_LOG` or `RUST_LOG` replace the filter entirely.
pub fn init_tracing(verbosity: u64) -> Result<(), Error> {
    let level = level(verbosity);
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(format!("graphsearch={0},searcher={0}", level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn levels() {
        assert_eq!(level(0), "warn");
        assert_eq!(level(1), "info");
        assert_eq!(level(2), "debug");
        assert_eq!(level(7), "trace");
    }
}
