use serde::{Deserialize, Serialize};

/// A type of beer that can be bought by the case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beer {
    pub brand: String,
    pub name: String,
    pub ounces: f64,
}

impl Beer {
    /// Creates a new Beer instance.
    ///
    /// # Arguments
    /// * `brand` - Brewery or brand name
    /// * `name` - Name of the beer
    /// * `ounces` - Volume of a single container
    pub fn new(brand: impl Into<String>, name: impl Into<String>, ounces: f64) -> Self {
        Self {
            brand: brand.into(),
            name: name.into(),
            ounces,
        }
    }
}
