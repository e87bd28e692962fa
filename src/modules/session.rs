use log::info;
use serde::Serialize;

use crate::errors::{CustomResult, Error};
use crate::modules::generator::generate_schedule;
use crate::modules::models::car::Car;
use crate::modules::models::heat::{Heat, Schedule};
use crate::modules::models::result::{HeatState, Placement};
use crate::modules::models::roster::Roster;
use crate::modules::standings::{calculate_standings, score_cars, Standing};
use crate::modules::tracker::ResultsTracker;

/// # race session
/// everything one race needs: the roster, its schedule, the results and the
/// heat being run. a session is not shared, every caller gets its own.
#[derive(Serialize, Debug, Clone)]
pub struct RaceSession {
    roster: Roster,
    schedule: Schedule,
    results: ResultsTracker,
    current_heat: usize,
}

impl RaceSession {
    /// # new session
    /// build a roster of `car_count` numbered cars and schedule it
    ///
    /// ## Arguments
    /// * `car_count` - the amount of cars racing
    /// * `lane_count` - the lanes on the track, capped at `car_count`
    pub fn new(car_count: usize, lane_count: usize) -> CustomResult<RaceSession> {
        RaceSession::from_roster(Roster::build(car_count)?, lane_count)
    }

    /// # session for a given roster
    pub fn from_roster(roster: Roster, lane_count: usize) -> CustomResult<RaceSession> {
        let schedule = generate_schedule(&roster, lane_count)?;
        let results = ResultsTracker::new(&schedule);

        info!(target: "session", "scheduled {} cars over {} heats", roster.len(), schedule.len());
        Ok(RaceSession {
            roster,
            schedule,
            results,
            current_heat: 0,
        })
    }

    /// # regenerate
    /// replace roster, schedule and results with new ones. on an error the
    /// session is left untouched.
    pub fn regenerate(&mut self, car_count: usize, lane_count: usize) -> CustomResult<()> {
        *self = RaceSession::new(car_count, lane_count)?;
        Ok(())
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn results(&self) -> &ResultsTracker {
        &self.results
    }

    pub fn record_place(&mut self, heat: usize, lane: usize, place: i32) -> CustomResult<Placement> {
        self.results.record_place(&self.schedule, heat, lane, place)
    }

    pub fn clear_heat(&mut self, heat: usize) -> CustomResult<()> {
        self.results.clear_heat(heat)
    }

    pub fn is_heat_complete(&self, heat: usize) -> CustomResult<bool> {
        self.results.is_heat_complete(heat)
    }

    pub fn heat_state(&self, heat: usize) -> CustomResult<HeatState> {
        self.results.heat_state(heat)
    }

    pub fn identify_next_heat(&self) -> Option<usize> {
        self.results.identify_next_heat()
    }

    pub fn identify_heat_on_deck(&self) -> Option<usize> {
        self.results.identify_heat_on_deck()
    }

    pub fn standings(&self) -> Vec<&Car> {
        calculate_standings(&self.roster, &self.results)
    }

    pub fn scores(&self) -> Vec<Standing> {
        score_cars(&self.roster, &self.results)
    }

    /// the heat being run, equal to the schedule length once racing is over
    pub fn current_heat(&self) -> usize {
        self.current_heat
    }

    /// # set the current heat
    /// `heat` may be one past the last heat, which marks racing as finished
    pub fn set_current_heat(&mut self, heat: usize) -> CustomResult<()> {
        let heats = self.schedule.len();
        if heat > heats {
            return Err(Error::HeatOutOfRangeError { heat, heats });
        }

        self.current_heat = heat;
        Ok(())
    }

    /// # advance
    /// move to the next heat without results, or finish racing when there is
    /// none
    ///
    /// ## Returns
    /// * `Option<usize>` - the new current heat, none when racing finished
    pub fn advance(&mut self) -> Option<usize> {
        match self.identify_next_heat() {
            Some(heat) => {
                self.current_heat = heat;
                Some(heat)
            }
            None => {
                self.current_heat = self.schedule.len();
                info!(target: "session", "racing finished after {} heats", self.schedule.len());
                None
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        self.current_heat >= self.schedule.len()
    }

    pub fn current_lineup(&self) -> Option<&Heat> {
        self.schedule.get(self.current_heat)
    }
}
