// Command-line arguments and command dispatch.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use rudolf::{Config, PuzzleKey, Result, resolve_input, text, timing};

#[derive(Parser, Debug)]
#[command(name = "rudolf", version, about = "Fetch and cache Advent of Code puzzle inputs")]
pub struct Cli {
    /// Log cache and request activity to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Puzzle database file.
    #[arg(long, env = "RUDOLF_DB", global = true)]
    pub db: Option<PathBuf>,

    /// Cookie jar holding the session cookie.
    #[arg(long, env = "RUDOLF_COOKIE_JAR", global = true)]
    pub cookie_jar: Option<PathBuf>,

    /// Scheme and host of the puzzle site.
    #[arg(long, env = "RUDOLF_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(
        long,
        env = "RUDOLF_TIMEOUT_SECS",
        global = true,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print puzzle input for given year and day
    Input(PuzzleArgs),
    /// Print puzzle input split into tokens, one per line
    Split {
        #[command(flatten)]
        puzzle: PuzzleArgs,
        /// Characters to split on.
        #[arg(short, long, default_value = "\n")]
        delimiters: String,
    },
}

#[derive(Args, Debug, Clone, Copy)]
pub struct PuzzleArgs {
    pub year: i32,
    pub day: i32,
}

impl From<PuzzleArgs> for PuzzleKey {
    fn from(args: PuzzleArgs) -> Self {
        PuzzleKey::new(args.year, args.day)
    }
}

impl Cli {
    /// Defaults overridden by whatever flags or environment variables are set.
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        if let Some(db) = &self.db {
            config = config.with_db_path(db);
        }
        if let Some(jar) = &self.cookie_jar {
            config = config.with_cookie_jar(jar);
        }
        if let Some(url) = &self.base_url {
            config = config.with_base_url(url);
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config
    }
}

pub async fn run(cli: Cli) -> Result<()> {
    let config = cli.config();

    match cli.command {
        Command::Input(puzzle) => {
            let input = resolve_input(&config, puzzle.into()).await?;
            let mut stdout = io::stdout().lock();
            stdout.write_all(input.as_bytes())?;
            stdout.flush()?;
        }
        Command::Split { puzzle, delimiters } => {
            let input = resolve_input(&config, puzzle.into()).await?;
            let contents = input.text();
            let delimiters: Vec<char> = delimiters.chars().collect();

            let (tokens, seconds) = timing::time(|| text::split(Some(&*contents), &delimiters));
            let tokens = tokens?;
            tracing::debug!(count = tokens.len(), seconds, "split puzzle input");

            let mut stdout = io::stdout().lock();
            for token in &tokens {
                writeln!(stdout, "{}", token)?;
            }
            stdout.flush()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_command() {
        let cli = Cli::try_parse_from(["rudolf", "input", "2023", "1"]).unwrap();
        match cli.command {
            Command::Input(puzzle) => {
                assert_eq!(PuzzleKey::from(puzzle), PuzzleKey::new(2023, 1));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_split_command() {
        let cli =
            Cli::try_parse_from(["rudolf", "split", "2022", "4", "-d", ",-"]).unwrap();
        match cli.command {
            Command::Split { puzzle, delimiters } => {
                assert_eq!(PuzzleKey::from(puzzle), PuzzleKey::new(2022, 4));
                assert_eq!(delimiters, ",-");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_split_defaults_to_newline() {
        let cli = Cli::try_parse_from(["rudolf", "split", "2022", "1"]).unwrap();
        match cli.command {
            Command::Split { delimiters, .. } => assert_eq!(delimiters, "\n"),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_override_config() {
        let cli = Cli::try_parse_from([
            "rudolf",
            "input",
            "2023",
            "1",
            "--db",
            "/tmp/test.db",
            "--base-url",
            "http://localhost:9999",
            "--timeout-secs",
            "3",
        ])
        .unwrap();

        let config = cli.config();
        assert_eq!(config.db_path, PathBuf::from("/tmp/test.db"));
        assert_eq!(config.base_url, "http://localhost:9999");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let result = Cli::try_parse_from(["rudolf", "input", "2023", "1", "--timeout-secs", "0"]);
        assert!(result.is_err());

        let cli =
            Cli::try_parse_from(["rudolf", "input", "2023", "1", "--timeout-secs", "1"]).unwrap();
        assert_eq!(cli.config().timeout, Duration::from_secs(1));
    }

    #[test]
    fn test_rejects_non_numeric_day() {
        assert!(Cli::try_parse_from(["rudolf", "input", "2023", "one"]).is_err());
    }

    #[test]
    fn test_requires_day() {
        assert!(Cli::try_parse_from(["rudolf", "input", "2023"]).is_err());
    }
}
