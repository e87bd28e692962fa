use std::fmt;

use serde::{Deserialize, Serialize};

/// # car id
/// position of a car in the roster it belongs to.
/// heats and results only ever hold these, never the car itself, so two cars
/// that happen to share a number are still told apart.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CarId(pub usize);

impl CarId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// # car
/// a race participant. only the number is required, an empty name or driver
/// means it was not given.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub number: String,
    pub name: String,
    pub driver: String,
}

impl Car {
    pub fn new(number: impl Into<String>) -> Car {
        Car {
            number: number.into(),
            name: String::new(),
            driver: String::new(),
        }
    }

    /// # numbered car
    /// create the car for a 0-based roster position, numbered from 1
    ///
    /// ## Arguments
    /// * `index` - the position in the roster
    ///
    /// ## Returns
    /// * `Car` - a car with number `index + 1` and nothing else set
    pub fn numbered(index: usize) -> Car {
        Car::new((index + 1).to_string())
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Car {
        self.name = name.into();
        self
    }

    pub fn with_driver(mut self, driver: impl Into<String>) -> Car {
        self.driver = driver.into();
        self
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.number)?;
        if !self.name.is_empty() {
            write!(f, " {}", self.name)?;
        }
        if !self.driver.is_empty() {
            write!(f, " ({})", self.driver)?;
        }
        Ok(())
    }
}
