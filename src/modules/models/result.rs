use serde::{Deserialize, Serialize};

use crate::modules::models::car::CarId;

/// a single finish line result. the place is taken as given and only ever
/// summed, it is not checked against the lane count
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub car: CarId,
    pub place: i32,
}

/// result slots of one heat, slot index is the lane index
pub type LaneResults = Vec<Option<Placement>>;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HeatState {
    /// nothing recorded yet
    Pending,
    /// some lanes recorded
    Partial,
    Complete,
}
