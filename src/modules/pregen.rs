//! Pre-generated four lane schedules.
//!
//! Round-robin offsets mix small fields poorly, so for four lanes and at most
//! thirteen cars the first heat comes from a fixed table of balanced
//! patterns (https://stanpope.net/ppngen.html) and every following heat
//! shifts each lane one roster position further.

use log::debug;

use crate::modules::models::car::CarId;
use crate::modules::models::heat::{Heat, Schedule};
use crate::modules::models::roster::Roster;

pub const PREGEN_LANES: usize = 4;
pub const PREGEN_MIN_CARS: usize = 4;
pub const PREGEN_MAX_CARS: usize = 13;

/// # first heat of a pre-generated schedule
/// the 1-based roster positions racing in lanes one to four of the first heat
///
/// ## Arguments
/// * `car_count` - the amount of cars racing
///
/// ## Returns
/// * `Option<[usize; 4]>` - the positions, none when the table has no pattern
///   for this many cars
pub fn first_heat(car_count: usize) -> Option<[usize; PREGEN_LANES]> {
    let positions = match car_count {
        4 => [1, 4, 3, 2],
        5..=7 => [1, 3, 5, 2],
        8 => [1, 3, 5, 8],
        9 => [1, 3, 5, 9],
        10 => [1, 3, 5, 10],
        11 => [1, 3, 5, 11],
        12 => [1, 3, 7, 12],
        13 => [1, 3, 7, 6],
        _ => return None,
    };

    Some(positions)
}

/// true when `load_schedule` should be used instead of round-robin
pub fn applies_to(car_count: usize, lane_count: usize) -> bool {
    lane_count == PREGEN_LANES && (PREGEN_MIN_CARS..=PREGEN_MAX_CARS).contains(&car_count)
}

/// # load a pre-generated schedule
/// one heat per car, heat `i` is the first heat with every position moved
/// `i` places along the roster
///
/// ## Arguments
/// * `roster` - the cars racing
///
/// ## Returns
/// * `Schedule` - the unoptimized schedule. empty when the table does not
///   cover the roster size, the caller has to fall back to round-robin
pub fn load_schedule(roster: &Roster) -> Schedule {
    let cars = roster.len();
    let first = match first_heat(cars) {
        Some(first) => first,
        None => {
            debug!(target: "pregen", "no pre-generated pattern for {} cars", cars);
            return Schedule::empty(PREGEN_LANES);
        }
    };

    let heats = (0..cars)
        .map(|i| {
            Heat::new(
                first
                    .iter()
                    .map(|position| CarId((position - 1 + i) % cars))
                    .collect(),
            )
        })
        .collect();

    Schedule::new(PREGEN_LANES, heats)
}
