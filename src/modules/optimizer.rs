use log::trace;

use crate::modules::models::heat::{Heat, Schedule};

/// # order heats to avoid back-to-back cars
/// greedy single pass. the first heat stays first, after that each slot gets
/// the first remaining heat that shares no car with the heat before it, or the
/// first remaining heat when every candidate shares one.
///
/// heats are moved whole, so the result is a permutation of the input.
///
/// ## Arguments
/// * `heats` - the heats in generated order
///
/// ## Returns
/// * `Vec<Heat>` - the same heats in running order
pub fn order_heats(heats: &[Heat]) -> Vec<Heat> {
    let mut remaining: Vec<usize> = (0..heats.len()).collect();
    let mut ordered: Vec<Heat> = Vec::with_capacity(heats.len());

    while !remaining.is_empty() {
        let pick = match ordered.last() {
            Some(previous) => remaining
                .iter()
                .position(|&candidate| !heats[candidate].shares_car_with(previous))
                .unwrap_or(0),
            None => 0,
        };

        let chosen = remaining.remove(pick);
        trace!(target: "optimizer", "slot {} <- generated heat {}", ordered.len(), chosen);
        ordered.push(heats[chosen].clone());
    }

    ordered
}

/// run `order_heats` over a whole schedule
pub fn optimize(schedule: &Schedule) -> Schedule {
    Schedule::new(schedule.lane_count(), order_heats(schedule.heats()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::models::car::CarId;

    fn heat(ids: &[usize]) -> Heat {
        Heat::new(ids.iter().map(|i| CarId(*i)).collect())
    }

    #[test]
    fn picks_the_disjoint_candidate() {
        let heats = vec![
            heat(&[0, 1]),
            heat(&[1, 2]),
            heat(&[0, 3]),
            heat(&[4, 5]),
        ];

        let ordered = order_heats(&heats);

        // [4,5] is the only heat without car 0 or 1, then [1,2] is the first
        // candidate sharing nothing with [4,5]
        assert_eq!(
            ordered,
            vec![heat(&[0, 1]), heat(&[4, 5]), heat(&[1, 2]), heat(&[0, 3])]
        );
    }

    #[test]
    fn falls_back_to_first_remaining_heat() {
        let heats = vec![heat(&[0, 1]), heat(&[1, 2]), heat(&[0, 2])];

        assert_eq!(order_heats(&heats), heats);
    }

    #[test]
    fn keeps_length_and_car_sets() {
        let heats: Vec<Heat> = (0..6).map(|i| heat(&[i % 6, (i + 1) % 6, (i + 3) % 6])).collect();
        let ordered = order_heats(&heats);

        assert_eq!(ordered.len(), heats.len());
        assert_eq!(ordered[0], heats[0]);
        for original in &heats {
            assert!(ordered.contains(original));
        }
    }

    #[test]
    fn empty_schedule_stays_empty() {
        assert!(order_heats(&[]).is_empty());
        assert!(optimize(&Schedule::empty(3)).is_empty());
    }
}
