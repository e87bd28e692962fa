use std::fmt::Write as _;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::OnceLock;

use log::info;
use regex::Regex;

use crate::errors::{CustomResult, Error};
use crate::modules::models::car::Car;
use crate::modules::models::heat::{Heat, Schedule};
use crate::modules::models::roster::Roster;
use crate::modules::standings::Standing;

/// `number[, car name[, driver]]`, the number is alphanumeric
const ROSTER_ENTRY: &str = r"^([A-Za-z0-9]+)\s*(?:,\s*([^,]*?)\s*(?:,\s*([^,]*?)\s*)?)?$";

fn roster_entry() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(ROSTER_ENTRY).expect("roster entry pattern is valid"))
}

pub struct HeatsHelper {}

impl HeatsHelper {
    /// # load roster from file
    /// read one car per line. blank lines and lines starting with `#` are
    /// skipped.
    ///
    /// ## Arguments
    /// * `filename` - path of the roster file
    ///
    /// ## Returns
    /// * `Roster` - the cars in file order
    pub fn load_roster_from_file(filename: impl AsRef<Path>) -> CustomResult<Roster> {
        let path = filename.as_ref();
        let display = path.display().to_string();

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                return Err(Error::FileDoesNotExistError { path: display });
            }
            Err(error) if error.kind() == ErrorKind::PermissionDenied => {
                return Err(Error::PermissionDeniedError { path: display });
            }
            Err(source) => {
                return Err(Error::ReadRosterError {
                    path: display,
                    source,
                })
            }
        };

        let roster = HeatsHelper::parse_roster(&contents)?;
        info!(target: "roster", "loaded {} cars from {}", roster.len(), display);

        Ok(roster)
    }

    /// parse roster file contents, see `load_roster_from_file`
    pub fn parse_roster(contents: &str) -> CustomResult<Roster> {
        let mut cars = Vec::new();

        for (index, line) in contents.lines().enumerate() {
            let entry = line.trim();
            if entry.is_empty() || entry.starts_with('#') {
                continue;
            }

            let captures = roster_entry()
                .captures(entry)
                .ok_or_else(|| Error::InvalidRosterEntryError {
                    line: index + 1,
                    entry: entry.to_string(),
                })?;

            let field = |i: usize| captures.get(i).map_or("", |m| m.as_str());
            cars.push(Car::new(field(1)).with_name(field(2)).with_driver(field(3)));
        }

        Roster::from_cars(cars)
    }

    /// # schedule summary
    /// one line per heat: `Heat 1: 1 2 4`
    pub fn schedule_summary(schedule: &Schedule, roster: &Roster) -> String {
        let mut summary = String::new();
        for (i, heat) in schedule.iter().enumerate() {
            let numbers: Vec<&str> = heat.numbers(roster).collect();
            let _ = writeln!(summary, "Heat {}: {}", i + 1, numbers.join(" "));
        }

        summary
    }

    /// `Heat 3 of 12`, heats counted from 1
    pub fn run_title(current_heat: usize, schedule: &Schedule) -> String {
        format!("Heat {} of {}", current_heat + 1, schedule.len())
    }

    /// # heat preview
    /// the line announcing the heat on deck
    pub fn heat_preview(on_deck: Option<usize>, schedule: &Schedule, roster: &Roster) -> String {
        match on_deck.and_then(|heat| schedule.get(heat).map(|lineup| (heat, lineup))) {
            Some((heat, lineup)) => format!(
                "Next - Heat {}: {}",
                heat + 1,
                HeatsHelper::lineup(lineup, roster)
            ),
            None => "No more heats to run".to_string(),
        }
    }

    /// the car numbers of a heat separated by commas
    pub fn lineup(heat: &Heat, roster: &Roster) -> String {
        heat.numbers(roster).collect::<Vec<&str>>().join(", ")
    }

    /// # standings listing
    /// one line per car, best first: `1. 7 Bolt (Sam) - 5`
    pub fn standings_listing(standings: &[Standing], roster: &Roster) -> String {
        let mut listing = String::new();
        for (position, standing) in standings.iter().enumerate() {
            if let Some(car) = roster.get(standing.car) {
                let _ = writeln!(listing, "{}. {} - {}", position + 1, car, standing.score);
            }
        }

        listing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::generator::round_robin;
    use crate::modules::models::car::CarId;

    #[test]
    fn parses_roster_entries() {
        let roster = HeatsHelper::parse_roster(
            "# club race\n7, Bolt, Sam\n\n12\nA3 , Comet\n",
        )
        .unwrap();

        assert_eq!(roster.len(), 3);
        assert_eq!(roster.cars()[0], Car::new("7").with_name("Bolt").with_driver("Sam"));
        assert_eq!(roster.cars()[1], Car::new("12"));
        assert_eq!(roster.cars()[2], Car::new("A3").with_name("Comet"));
    }

    #[test]
    fn rejects_bad_entries() {
        assert!(matches!(
            HeatsHelper::parse_roster("1\n2, a, b, c\n"),
            Err(Error::InvalidRosterEntryError { line: 2, .. })
        ));
        assert!(matches!(
            HeatsHelper::parse_roster("# nobody\n"),
            Err(Error::EmptyRosterError)
        ));
    }

    #[test]
    fn missing_file_is_reported() {
        assert!(matches!(
            HeatsHelper::load_roster_from_file("/definitely/not/here.txt"),
            Err(Error::FileDoesNotExistError { .. })
        ));
    }

    #[test]
    fn loads_roster_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.txt");
        fs::write(&path, "1, Red\n2, Blue\n3\n").unwrap();

        let roster = HeatsHelper::load_roster_from_file(&path).unwrap();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.cars()[1].name, "Blue");
    }

    #[test]
    fn renders_text() {
        let roster = Roster::build(5).unwrap();
        let schedule = round_robin(&roster, 3);

        let summary = HeatsHelper::schedule_summary(&schedule, &roster);
        assert_eq!(summary.lines().next(), Some("Heat 1: 1 2 4"));
        assert_eq!(summary.lines().count(), 5);

        assert_eq!(HeatsHelper::run_title(0, &schedule), "Heat 1 of 5");
        assert_eq!(
            HeatsHelper::heat_preview(Some(1), &schedule, &roster),
            "Next - Heat 2: 2, 3, 5"
        );
        assert_eq!(
            HeatsHelper::heat_preview(None, &schedule, &roster),
            "No more heats to run"
        );

        let standings = vec![
            Standing { car: CarId(1), score: 3 },
            Standing { car: CarId(0), score: 6 },
        ];
        assert_eq!(
            HeatsHelper::standings_listing(&standings, &roster),
            "1. 2 - 3\n2. 1 - 6\n"
        );
    }
}
