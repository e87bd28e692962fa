use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use derby_heats::errors::Error;
use derby_heats::modules::helpers::config::Config;
use derby_heats::modules::helpers::heat::HeatsHelper;
use derby_heats::modules::helpers::logging::setup_logging;
use derby_heats::modules::models::roster::Roster;
use derby_heats::modules::session::RaceSession;

#[derive(Parser)]
#[command(name = "print_schedule")]
#[command(about = "Print the heat schedule for a race", long_about = None)]
struct Cli {
    /// Number of cars racing, ignored when a roster file is given
    #[arg(long)]
    cars: Option<usize>,

    /// Number of lanes on the track
    #[arg(long)]
    lanes: Option<usize>,

    /// Roster file, one `number, name, driver` entry per line
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Print the session as JSON instead of text
    #[arg(long, default_value = "false")]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::from_env();
    if let Err(err) = setup_logging(&config) {
        eprintln!("failed to setup logging: {}", err);
    }

    let lanes = cli.lanes.unwrap_or(config.default_lanes);
    let session = match &cli.roster {
        Some(path) => HeatsHelper::load_roster_from_file(path)
            .and_then(|roster| RaceSession::from_roster(roster, lanes)),
        None => Roster::build(cli.cars.unwrap_or(config.default_cars))
            .and_then(|roster| RaceSession::from_roster(roster, lanes)),
    };

    let session = match session {
        Ok(session) => session,
        Err(Error::FileDoesNotExistError { path }) => {
            error!(target: "print_schedule", "File does not exist: {}", path);
            return ExitCode::FAILURE;
        }
        Err(Error::PermissionDeniedError { path }) => {
            error!(target: "print_schedule", "Permission denied: {}", path);
            return ExitCode::FAILURE;
        }
        Err(err) => {
            error!(target: "print_schedule", "could not build schedule: {}", err);
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&session) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                error!(target: "print_schedule", "could not serialize session: {}", err);
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", HeatsHelper::schedule_summary(session.schedule(), session.roster()));
    }

    ExitCode::SUCCESS
}
