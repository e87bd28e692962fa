use log::debug;
use serde::{Deserialize, Serialize};
use snafu::ensure;

use crate::errors::{CustomResult, EmptyRosterSnafu, InvalidCarCountSnafu};
use crate::modules::models::car::{Car, CarId};

/// # roster
/// the ordered list of cars that race. a new schedule always comes with a
/// new roster, an existing one is never edited.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    cars: Vec<Car>,
}

impl Roster {
    /// # build roster
    /// create `car_count` cars numbered 1 up to `car_count`
    ///
    /// ## Arguments
    /// * `car_count` - the amount of cars racing
    ///
    /// ## Returns
    /// * `Roster` - the roster, or an error when `car_count` is 0
    pub fn build(car_count: usize) -> CustomResult<Roster> {
        ensure!(car_count >= 1, InvalidCarCountSnafu { count: car_count });

        debug!(target: "roster", "building roster of {} cars", car_count);
        Ok(Roster {
            cars: (0..car_count).map(Car::numbered).collect(),
        })
    }

    /// # roster from cars
    /// use explicitly described cars, for example ones loaded from a file
    pub fn from_cars(cars: Vec<Car>) -> CustomResult<Roster> {
        ensure!(!cars.is_empty(), EmptyRosterSnafu);

        Ok(Roster { cars })
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    pub fn get(&self, id: CarId) -> Option<&Car> {
        self.cars.get(id.index())
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    /// all ids in roster order
    pub fn ids(&self) -> impl Iterator<Item = CarId> + '_ {
        (0..self.cars.len()).map(CarId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CarId, &Car)> + '_ {
        self.cars.iter().enumerate().map(|(i, car)| (CarId(i), car))
    }
}
