//! Coupon payment periodicity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CuponeraError;

/// Payment periodicity for coupon schedules.
///
/// Parsed from the Spanish market strings used by the input layer
/// ("mensual", "bimestral", "trimestral", "semestral", "anual"); any
/// other value is rejected and schedule construction must treat it as a
/// hard failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Periodicity {
    /// Monthly payments (every 1 month)
    Monthly,
    /// Bimonthly payments (every 2 months)
    Bimonthly,
    /// Quarterly payments (every 3 months)
    Quarterly,
    /// Semi-annual payments (every 6 months)
    SemiAnnual,
    /// Annual payments (every 12 months)
    Annual,
}

impl Periodicity {
    /// Returns the number of months between successive coupons.
    #[must_use]
    pub fn months_per_period(&self) -> u32 {
        match self {
            Periodicity::Monthly => 1,
            Periodicity::Bimonthly => 2,
            Periodicity::Quarterly => 3,
            Periodicity::SemiAnnual => 6,
            Periodicity::Annual => 12,
        }
    }

    /// Returns the number of coupon periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        12 / self.months_per_period()
    }

    /// Returns all supported periodicities.
    #[must_use]
    pub fn all() -> &'static [Periodicity] {
        &[
            Periodicity::Monthly,
            Periodicity::Bimonthly,
            Periodicity::Quarterly,
            Periodicity::SemiAnnual,
            Periodicity::Annual,
        ]
    }
}

impl fmt::Display for Periodicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Periodicity::Monthly => "mensual",
            Periodicity::Bimonthly => "bimestral",
            Periodicity::Quarterly => "trimestral",
            Periodicity::SemiAnnual => "semestral",
            Periodicity::Annual => "anual",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Periodicity {
    type Err = CuponeraError;

    /// Parses a periodicity from its market string, case-insensitively.
    ///
    /// Only the five Spanish periodicity names are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mensual" => Ok(Periodicity::Monthly),
            "bimestral" => Ok(Periodicity::Bimonthly),
            "trimestral" => Ok(Periodicity::Quarterly),
            "semestral" => Ok(Periodicity::SemiAnnual),
            "anual" => Ok(Periodicity::Annual),
            _ => Err(CuponeraError::invalid_periodicity(s)),
        }
    }
}
