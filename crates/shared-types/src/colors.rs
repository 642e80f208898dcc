//! Display colors for the vehicle categories reported by the counts API

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Vehicle categories the detector reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    Truck,
    Car,
    Motorbike,
    Bus,
    Person,
}

impl VehicleCategory {
    pub const ALL: [VehicleCategory; 5] = [
        VehicleCategory::Truck,
        VehicleCategory::Car,
        VehicleCategory::Motorbike,
        VehicleCategory::Bus,
        VehicleCategory::Person,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleCategory::Truck => "truck",
            VehicleCategory::Car => "car",
            VehicleCategory::Motorbike => "motorbike",
            VehicleCategory::Bus => "bus",
            VehicleCategory::Person => "person",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            VehicleCategory::Truck => "rgba(255, 99, 132, 0.7)",
            VehicleCategory::Car => "rgba(255, 206, 86, 0.7)",
            VehicleCategory::Motorbike => "rgba(75, 192, 192, 0.7)",
            VehicleCategory::Bus => "rgba(153, 102, 255, 0.7)",
            VehicleCategory::Person => "rgba(255, 159, 64, 0.7)",
        }
    }
}

impl std::fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VehicleCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown vehicle category: {s}"))
    }
}

/// Color for a category name as it appears in the counts payload.
///
/// Unknown names have no color; the chart falls back to its default.
pub fn category_color(name: &str) -> Option<&'static str> {
    name.parse::<VehicleCategory>().ok().map(|c| c.color())
}
