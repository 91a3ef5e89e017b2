//! Test Data Builders
//!
//! Builder patterns for constructing risk profiles with sensible
//! defaults. Tests specify only the attributes they care about; the
//! defaults keep everything else on the flat-rated base path.

use chrono::{Datelike, Utc};
use domain_policy::{AutoRisk, HeatingType, HomeRisk, Location, PolicyRisk, Vehicle};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Returns the current calendar year, the reference point for vehicle age
pub fn current_year() -> i32 {
    Utc::now().year()
}

/// Builds a vehicle whose computed age equals `age` today
pub fn vehicle_of_age(age: i32) -> Vehicle {
    Vehicle::new("Toyota", "Corolla", current_year() - age)
}

/// Builder for auto risk profiles
///
/// Defaults rate on the base path: driver 30, clean record, three-year-old
/// vehicle, so the pre-tax premium is exactly the 750 base.
pub struct AutoRiskBuilder {
    driver_age: i32,
    accident_count: i32,
    vehicle: Vehicle,
}

impl Default for AutoRiskBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AutoRiskBuilder {
    /// Creates a builder with base-path defaults
    pub fn new() -> Self {
        Self {
            driver_age: 30,
            accident_count: 0,
            vehicle: vehicle_of_age(3),
        }
    }

    /// Sets the driver age
    pub fn with_driver_age(mut self, age: i32) -> Self {
        self.driver_age = age;
        self
    }

    /// Sets the five-year accident count
    pub fn with_accidents(mut self, count: i32) -> Self {
        self.accident_count = count;
        self
    }

    /// Sets the vehicle
    pub fn with_vehicle(mut self, vehicle: Vehicle) -> Self {
        self.vehicle = vehicle;
        self
    }

    /// Sets the vehicle's age as computed today
    pub fn with_vehicle_age(mut self, age: i32) -> Self {
        self.vehicle = vehicle_of_age(age);
        self
    }

    /// Builds the risk profile
    pub fn build(self) -> AutoRisk {
        AutoRisk::new(self.driver_age, self.accident_count, self.vehicle)
    }

    /// Builds the tagged policy risk
    pub fn build_risk(self) -> PolicyRisk {
        PolicyRisk::Auto(self.build())
    }
}

/// Builder for home risk profiles
///
/// Defaults rate on the base path: ten-year-old urban home under the
/// value-surcharge threshold with the flat liability limit, so the
/// pre-tax premium is exactly the 500 base.
pub struct HomeRiskBuilder {
    home_age: i32,
    dwelling_type: String,
    heating: HeatingType,
    location: Location,
    home_value: Decimal,
    liability_limit: Decimal,
}

impl Default for HomeRiskBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeRiskBuilder {
    /// Creates a builder with base-path defaults
    pub fn new() -> Self {
        Self {
            home_age: 10,
            dwelling_type: "detached".to_string(),
            heating: HeatingType::Other,
            location: Location::Urban,
            home_value: dec!(200000),
            liability_limit: dec!(1000000),
        }
    }

    /// Sets the home age
    pub fn with_home_age(mut self, age: i32) -> Self {
        self.home_age = age;
        self
    }

    /// Sets the dwelling description
    pub fn with_dwelling_type(mut self, dwelling: impl Into<String>) -> Self {
        self.dwelling_type = dwelling.into();
        self
    }

    /// Sets the heating classification
    pub fn with_heating(mut self, heating: HeatingType) -> Self {
        self.heating = heating;
        self
    }

    /// Sets the location classification
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// Sets the home value
    pub fn with_home_value(mut self, value: Decimal) -> Self {
        self.home_value = value;
        self
    }

    /// Sets the liability limit
    pub fn with_liability_limit(mut self, limit: Decimal) -> Self {
        self.liability_limit = limit;
        self
    }

    /// Builds the risk profile
    pub fn build(self) -> HomeRisk {
        HomeRisk {
            home_age: self.home_age,
            dwelling_type: self.dwelling_type,
            heating: self.heating,
            location: self.location,
            home_value: self.home_value,
            liability_limit: self.liability_limit,
        }
    }

    /// Builds the tagged policy risk
    pub fn build_risk(self) -> PolicyRisk {
        PolicyRisk::Home(self.build())
    }
}
