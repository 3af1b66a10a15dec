//! Logging setup for the command line.

use std::io::{IsTerminal, stderr};

use clap::Args;
use tracing::{Level, debug, metadata::LevelFilter};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Args)]
pub struct Verbosity {
    /// Silence all log output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Verbose mode (-v, or -vv for even more verbose)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

impl Verbosity {
    /// Install the global subscriber. `RUST_LOG` overrides the flags.
    pub fn setup_logging(&self) {
        let filter_layer = self.log_filter();
        let fmt_layer = fmt::layer()
            .with_target(false)
            .with_ansi(stderr().is_terminal())
            .with_writer(stderr);

        tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt_layer)
            .init();

        debug!("logging initialised");
    }

    fn log_filter(&self) -> EnvFilter {
        EnvFilter::builder()
            .with_default_directive(self.level().into())
            .from_env_lossy()
    }

    fn level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::OFF
        } else {
            LevelFilter::from_level(match self.verbose {
                0 => Level::WARN,
                1 => Level::DEBUG,
                _ => Level::TRACE,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels() {
        let v = |quiet, verbose| Verbosity { quiet, verbose }.level();
        assert_eq!(v(false, 0), LevelFilter::WARN);
        assert_eq!(v(false, 1), LevelFilter::DEBUG);
        assert_eq!(v(false, 5), LevelFilter::TRACE);
        assert_eq!(v(true, 2), LevelFilter::OFF);
    }
}
