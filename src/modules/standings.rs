use serde::{Deserialize, Serialize};

use crate::modules::models::car::{Car, CarId};
use crate::modules::models::roster::Roster;
use crate::modules::tracker::ResultsTracker;

/// a car with its cumulative place score
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standing {
    pub car: CarId,
    pub score: i64,
}

/// # score cars
/// sum the places of every recorded result per car, finished heats or not.
/// lowest score first, equal scores keep roster order.
///
/// ## Arguments
/// * `roster` - the cars racing
/// * `results` - the results recorded so far
///
/// ## Returns
/// * `Vec<Standing>` - one entry per car, best first
pub fn score_cars(roster: &Roster, results: &ResultsTracker) -> Vec<Standing> {
    let mut scores = vec![0i64; roster.len()];
    for placement in results.placements() {
        if let Some(score) = scores.get_mut(placement.car.index()) {
            *score += i64::from(placement.place);
        }
    }

    let mut standings: Vec<Standing> = roster
        .ids()
        .zip(scores)
        .map(|(car, score)| Standing { car, score })
        .collect();

    // sort_by_key is stable, ties stay in roster order
    standings.sort_by_key(|standing| standing.score);
    standings
}

/// # calculate standings
/// the cars of the roster from best to worst, see `score_cars`
pub fn calculate_standings<'a>(roster: &'a Roster, results: &ResultsTracker) -> Vec<&'a Car> {
    score_cars(roster, results)
        .iter()
        .filter_map(|standing| roster.get(standing.car))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::generator::round_robin;
    use crate::modules::models::heat::{Heat, Schedule};

    #[test]
    fn three_cars_one_heat() {
        let roster = Roster::build(3).unwrap();
        let schedule = Schedule::new(3, vec![Heat::new(vec![CarId(0), CarId(1), CarId(2)])]);
        let mut results = ResultsTracker::new(&schedule);

        results.record_place(&schedule, 0, 1, 1).unwrap();
        results.record_place(&schedule, 0, 0, 2).unwrap();
        results.record_place(&schedule, 0, 2, 3).unwrap();

        let numbers: Vec<&str> = calculate_standings(&roster, &results)
            .iter()
            .map(|car| car.number.as_str())
            .collect();
        assert_eq!(numbers, vec!["2", "1", "3"]);
        assert_eq!(
            score_cars(&roster, &results),
            vec![
                Standing { car: CarId(1), score: 1 },
                Standing { car: CarId(0), score: 2 },
                Standing { car: CarId(2), score: 3 },
            ]
        );
    }

    #[test]
    fn partial_heats_count_towards_the_score() {
        let roster = Roster::build(4).unwrap();
        let schedule = round_robin(&roster, 2);
        let mut results = ResultsTracker::new(&schedule);

        // heat 0 is cars 1 and 2, heat 3 is cars 4 and 1
        results.record_place(&schedule, 0, 0, 2).unwrap();
        results.record_place(&schedule, 3, 0, 1).unwrap();
        results.record_place(&schedule, 3, 1, 2).unwrap();

        let ids: Vec<usize> = score_cars(&roster, &results).iter().map(|s| s.car.index()).collect();
        assert_eq!(ids, vec![1, 2, 3, 0]);
    }

    #[test]
    fn ties_keep_roster_order_and_repeat() {
        let roster = Roster::build(4).unwrap();
        let schedule = round_robin(&roster, 2);
        let results = ResultsTracker::new(&schedule);

        let first = score_cars(&roster, &results);
        let ids: Vec<usize> = first.iter().map(|s| s.car.index()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        assert!(first.iter().all(|s| s.score == 0));
        assert_eq!(first, score_cars(&roster, &results));
    }
}
