use serde::{Deserialize, Serialize};

use crate::modules::helpers::general::Helpers;
use crate::modules::models::car::CarId;
use crate::modules::models::roster::Roster;

/// # heat
/// one race: the car in every lane, lane 0 first
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Heat {
    lanes: Vec<CarId>,
}

impl Heat {
    pub fn new(lanes: Vec<CarId>) -> Heat {
        Heat { lanes }
    }

    pub fn lanes(&self) -> &[CarId] {
        &self.lanes
    }

    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    /// # car in lane
    ///
    /// ## Arguments
    /// * `lane` - 0-based lane index
    ///
    /// ## Returns
    /// * `Option<CarId>` - the car racing in that lane, none if the lane does not exist
    pub fn car_in_lane(&self, lane: usize) -> Option<CarId> {
        self.lanes.get(lane).copied()
    }

    pub fn contains(&self, car: CarId) -> bool {
        self.lanes.contains(&car)
    }

    /// # shares a car
    /// check if any car races in both heats. cars are compared by roster id
    pub fn shares_car_with(&self, other: &Heat) -> bool {
        Helpers::any_shared(&self.lanes, &other.lanes)
    }

    /// the car numbers in lane order, resolved through the roster
    pub fn numbers<'a>(&'a self, roster: &'a Roster) -> impl Iterator<Item = &'a str> + 'a {
        self.lanes
            .iter()
            .filter_map(move |id| roster.get(*id))
            .map(|car| car.number.as_str())
    }
}

/// # schedule
/// every heat of the race in running order. the lane count is the same for
/// every heat.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    lane_count: usize,
    heats: Vec<Heat>,
}

impl Schedule {
    pub fn new(lane_count: usize, heats: Vec<Heat>) -> Schedule {
        debug_assert!(heats.iter().all(|heat| heat.lane_count() == lane_count));
        Schedule { lane_count, heats }
    }

    pub fn empty(lane_count: usize) -> Schedule {
        Schedule::new(lane_count, Vec::new())
    }

    pub fn lane_count(&self) -> usize {
        self.lane_count
    }

    pub fn len(&self) -> usize {
        self.heats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heats.is_empty()
    }

    pub fn get(&self, heat: usize) -> Option<&Heat> {
        self.heats.get(heat)
    }

    pub fn heats(&self) -> &[Heat] {
        &self.heats
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Heat> {
        self.heats.iter()
    }

    /// # heats per car
    /// count in how many heats every car of the roster races
    pub fn appearances(&self, roster: &Roster) -> Vec<usize> {
        let mut counts = vec![0; roster.len()];
        for heat in &self.heats {
            for car in heat.lanes() {
                if let Some(count) = counts.get_mut(car.index()) {
                    *count += 1;
                }
            }
        }

        counts
    }
}
