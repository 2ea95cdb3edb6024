use crate::server;
use crate::terminal::{run_catalog, run_score, run_take, ScoreArgs, TakeArgs};
use clap::{Args, Parser, Subcommand};
use eco::config::{AppConfig, RunMode};
use eco::error::AppError;
use eco::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "eco",
    about = "Take, score and serve the ECO interpersonal-needs questionnaire",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Answer the 54 questions interactively and print the results
    Take(TakeArgs),
    /// Score a stored answer set and print the per-area summary
    Score(ScoreArgs),
    /// Print every question and both answer scales
    Catalog,
}

impl Command {
    fn run_mode(&self) -> RunMode {
        match self {
            Command::Serve(_) => RunMode::Serve,
            Command::Take(_) | Command::Score(_) | Command::Catalog => RunMode::Terminal,
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    let config = AppConfig::load(command.run_mode())?;
    telemetry::init(&config.telemetry)?;

    match command {
        Command::Serve(args) => server::run(config, args).await,
        Command::Take(args) => run_take(args),
        Command::Score(args) => run_score(args),
        Command::Catalog => run_catalog(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["eco"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn take_accepts_prefilled_identity() {
        let cli = Cli::try_parse_from([
            "eco",
            "take",
            "--name",
            "Maria Oliveira",
            "--date-of-birth",
            "20/05/1990",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::Take(args)) => {
                assert_eq!(args.name.as_deref(), Some("Maria Oliveira"));
                assert_eq!(args.date_of_birth, NaiveDate::from_ymd_opt(1990, 5, 20));
            }
            other => panic!("expected take command, got {other:?}"),
        }
    }

    #[test]
    fn take_rejects_unparseable_dates() {
        assert!(Cli::try_parse_from(["eco", "take", "--date-of-birth", "soon"]).is_err());
    }

    #[test]
    fn score_requires_exactly_one_answer_source() {
        assert!(Cli::try_parse_from(["eco", "score"]).is_err());
        assert!(Cli::try_parse_from([
            "eco",
            "score",
            "--answers",
            "answers.json",
            "--answers-inline",
            "1=4"
        ])
        .is_err());

        let cli = Cli::try_parse_from(["eco", "score", "--answers-inline", "1=4, 3=5"])
            .expect("parses");
        match cli.command {
            Some(Command::Score(args)) => {
                assert_eq!(args.answers_inline.as_deref(), Some("1=4, 3=5"));
                assert!(args.answers.is_none());
            }
            other => panic!("expected score command, got {other:?}"),
        }
    }

    #[test]
    fn only_serve_uses_the_service_log_defaults() {
        let modes: Vec<RunMode> = [
            vec!["eco", "serve"],
            vec!["eco", "take"],
            vec!["eco", "score", "--answers-inline", "1=4"],
            vec!["eco", "catalog"],
        ]
        .into_iter()
        .map(|argv| {
            Cli::try_parse_from(argv)
                .expect("parses")
                .command
                .expect("subcommand given")
                .run_mode()
        })
        .collect();

        assert_eq!(
            modes,
            vec![
                RunMode::Serve,
                RunMode::Terminal,
                RunMode::Terminal,
                RunMode::Terminal
            ]
        );
    }

    #[test]
    fn serve_overrides_host_and_port() {
        let cli = Cli::try_parse_from(["eco", "serve", "--host", "0.0.0.0", "--port", "8080"])
            .expect("parses");
        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.host.as_deref(), Some("0.0.0.0"));
                assert_eq!(args.port, Some(8080));
            }
            other => panic!("expected serve command, got {other:?}"),
        }
    }
}
