use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{CustomResult, Error};
use crate::modules::models::heat::Schedule;
use crate::modules::models::result::{HeatState, LaneResults, Placement};

/// # results tracker
/// the finish line results of every heat. there is exactly one entry per heat
/// of the schedule it was created for, an empty entry is a heat that has not
/// been run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultsTracker {
    heats: Vec<LaneResults>,
}

impl ResultsTracker {
    pub fn new(schedule: &Schedule) -> ResultsTracker {
        ResultsTracker {
            heats: vec![Vec::new(); schedule.len()],
        }
    }

    pub fn heat_count(&self) -> usize {
        self.heats.len()
    }

    /// the result slots of a heat, empty if nothing was recorded
    pub fn results(&self, heat: usize) -> CustomResult<&[Option<Placement>]> {
        Ok(self.slots(heat)?.as_slice())
    }

    /// every recorded placement, in heat then lane order
    pub fn placements(&self) -> impl Iterator<Item = &Placement> + '_ {
        self.heats.iter().flatten().flatten()
    }

    /// # record a place
    /// store where the car in `lane` of `heat` finished. the first placement
    /// of a heat opens one empty slot per lane, recording a lane again
    /// replaces its earlier placement.
    ///
    /// ## Arguments
    /// * `schedule` - the schedule these results belong to
    /// * `heat` - the heat index
    /// * `lane` - the lane index
    /// * `place` - the finishing place, taken as is
    pub fn record_place(
        &mut self,
        schedule: &Schedule,
        heat: usize,
        lane: usize,
        place: i32,
    ) -> CustomResult<Placement> {
        let heats = self.heats.len();
        let scheduled = schedule
            .get(heat)
            .ok_or(Error::HeatOutOfRangeError { heat, heats })?;
        let car = scheduled.car_in_lane(lane).ok_or(Error::LaneOutOfRangeError {
            heat,
            lane,
            lanes: scheduled.lane_count(),
        })?;

        let slots = self.slots_mut(heat)?;
        if slots.is_empty() {
            slots.resize(scheduled.lane_count(), None);
        }

        let placement = Placement { car, place };
        slots[lane] = Some(placement);
        debug!(target: "tracker", "heat {} lane {}: car {} placed {}", heat, lane, car, place);

        Ok(placement)
    }

    /// # clear a heat
    /// forget every placement of a heat so it counts as not run
    pub fn clear_heat(&mut self, heat: usize) -> CustomResult<()> {
        self.slots_mut(heat)?.clear();
        debug!(target: "tracker", "cleared heat {}", heat);

        Ok(())
    }

    pub fn is_heat_complete(&self, heat: usize) -> CustomResult<bool> {
        let slots = self.slots(heat)?;

        Ok(!slots.is_empty() && slots.iter().all(Option::is_some))
    }

    pub fn heat_state(&self, heat: usize) -> CustomResult<HeatState> {
        let slots = self.slots(heat)?;
        let recorded = slots.iter().filter(|slot| slot.is_some()).count();

        Ok(match recorded {
            0 => HeatState::Pending,
            n if n == slots.len() => HeatState::Complete,
            _ => HeatState::Partial,
        })
    }

    /// # next heat
    /// the lowest heat without any placement, none when every heat has at
    /// least one
    pub fn identify_next_heat(&self) -> Option<usize> {
        self.pending_heats().next()
    }

    /// # heat on deck
    /// the second heat without any placement, the one after the heat about to
    /// run
    pub fn identify_heat_on_deck(&self) -> Option<usize> {
        self.pending_heats().nth(1)
    }

    fn pending_heats(&self) -> impl Iterator<Item = usize> + '_ {
        self.heats
            .iter()
            .enumerate()
            .filter(|(_, slots)| slots.iter().all(Option::is_none))
            .map(|(heat, _)| heat)
    }

    fn slots(&self, heat: usize) -> CustomResult<&LaneResults> {
        let heats = self.heats.len();
        self.heats
            .get(heat)
            .ok_or(Error::HeatOutOfRangeError { heat, heats })
    }

    fn slots_mut(&mut self, heat: usize) -> CustomResult<&mut LaneResults> {
        let heats = self.heats.len();
        self.heats
            .get_mut(heat)
            .ok_or(Error::HeatOutOfRangeError { heat, heats })
    }
}
