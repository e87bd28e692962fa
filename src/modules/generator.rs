use log::{debug, info};
use snafu::ensure;

use crate::errors::{CustomResult, InvalidLaneCountSnafu};
use crate::modules::models::car::CarId;
use crate::modules::models::heat::{Heat, Schedule};
use crate::modules::models::roster::Roster;
use crate::modules::optimizer;
use crate::modules::pregen;

/// # lane offsets
/// triangular offsets 0, 1, 3, 6, ... one per lane
pub fn lane_offsets(lane_count: usize) -> Vec<usize> {
    (0..lane_count).map(|lane| lane * (lane + 1) / 2).collect()
}

/// # round-robin schedule
/// one heat per car, lane `l` of heat `i` gets roster position
/// `(i + offset[l]) % car_count`
///
/// ## Arguments
/// * `roster` - the cars racing
/// * `lane_count` - lanes per heat, at least 1 and at most the roster size
///
/// ## Returns
/// * `Schedule` - the unoptimized schedule
pub fn round_robin(roster: &Roster, lane_count: usize) -> Schedule {
    let cars = roster.len();
    let offsets = lane_offsets(lane_count);

    let heats = (0..cars)
        .map(|i| Heat::new(offsets.iter().map(|offset| CarId((i + offset) % cars)).collect()))
        .collect();

    Schedule::new(lane_count, heats)
}

/// # generate schedule
/// build the race schedule for a roster. the lane count is capped at the
/// amount of cars. four lanes with a small field use the pre-generated
/// patterns, everything else uses round-robin. the heats are then reordered
/// so the same car races back to back as little as possible.
///
/// ## Arguments
/// * `roster` - the cars racing
/// * `lane_count` - the lanes on the track
///
/// ## Returns
/// * `Schedule` - the schedule in running order, or an error when `lane_count` is 0
pub fn generate_schedule(roster: &Roster, lane_count: usize) -> CustomResult<Schedule> {
    ensure!(lane_count >= 1, InvalidLaneCountSnafu { count: lane_count });

    let cars = roster.len();
    let lanes = lane_count.min(cars);
    if lanes != lane_count {
        debug!(target: "generator", "capping {} lanes to {} cars", lane_count, cars);
    }

    let mut initial = Schedule::empty(lanes);
    if pregen::applies_to(cars, lanes) {
        initial = pregen::load_schedule(roster);
    }
    if initial.is_empty() {
        initial = round_robin(roster, lanes);
    }

    let schedule = optimizer::optimize(&initial);
    info!(target: "generator", "generated {} heats of {} lanes for {} cars", schedule.len(), lanes, cars);

    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    fn ids(heat: &Heat) -> Vec<usize> {
        heat.lanes().iter().map(|c| c.index()).collect()
    }

    #[test]
    fn offsets_are_triangular() {
        assert_eq!(lane_offsets(1), vec![0]);
        assert_eq!(lane_offsets(5), vec![0, 1, 3, 6, 10]);
    }

    #[test]
    fn round_robin_five_cars_three_lanes() {
        let roster = Roster::build(5).unwrap();
        let schedule = round_robin(&roster, 3);

        assert_eq!(schedule.len(), 5);
        assert_eq!(ids(&schedule.heats()[0]), vec![0, 1, 3]);
        assert_eq!(ids(&schedule.heats()[4]), vec![4, 0, 2]);
        let numbers: Vec<&str> = schedule.heats()[0].numbers(&roster).collect();
        assert_eq!(numbers, vec!["1", "2", "4"]);
    }

    #[test]
    fn caps_lanes_at_car_count() {
        let roster = Roster::build(3).unwrap();
        let schedule = generate_schedule(&roster, 8).unwrap();

        assert_eq!(schedule.lane_count(), 3);
        assert_eq!(schedule.len(), 3);
        assert!(schedule.iter().all(|heat| heat.lane_count() == 3));
    }

    #[test]
    fn rejects_zero_lanes() {
        let roster = Roster::build(3).unwrap();
        assert!(matches!(
            generate_schedule(&roster, 0),
            Err(Error::InvalidLaneCountError { count: 0 })
        ));
    }

    #[test]
    fn four_lanes_use_the_pregenerated_table() {
        let roster = Roster::build(8).unwrap();
        let schedule = generate_schedule(&roster, 4).unwrap();

        // the optimizer keeps the first generated heat in front
        assert_eq!(ids(&schedule.heats()[0]), vec![0, 2, 4, 7]);
        assert_eq!(schedule.appearances(&roster), vec![4; 8]);
    }

    #[test]
    fn large_four_lane_fields_use_round_robin() {
        let roster = Roster::build(14).unwrap();
        let schedule = generate_schedule(&roster, 4).unwrap();

        assert_eq!(ids(&schedule.heats()[0]), vec![0, 1, 3, 6]);
        assert_eq!(schedule.len(), 14);
    }

    #[test]
    fn single_car_single_lane() {
        let roster = Roster::build(1).unwrap();
        let schedule = generate_schedule(&roster, 1).unwrap();

        assert_eq!(schedule.len(), 1);
        assert_eq!(ids(&schedule.heats()[0]), vec![0]);
    }
}
