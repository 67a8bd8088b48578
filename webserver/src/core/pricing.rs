//! Shipping cost estimation
//!
//! Pure pricing rule: a per-kilogram base rate scaled by the service tier.

use shared::{SharedError, SharedResult};

/// Base rate in currency units per kilogram
pub const BASE_RATE_PER_KG: f64 = 50.0;

/// Pricing tier selected by exact match on the service type label
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceTier {
    Standard,
    Express,
    SameDay,
    International,
}

impl ServiceTier {
    /// Unrecognised labels price as standard delivery
    pub fn from_label(label: &str) -> Self {
        match label {
            "Express Delivery (1-2 days)" => ServiceTier::Express,
            "Same Day Delivery" => ServiceTier::SameDay,
            "International Delivery" => ServiceTier::International,
            _ => ServiceTier::Standard,
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            ServiceTier::Standard => 1.0,
            ServiceTier::Express => 1.5,
            ServiceTier::SameDay => 2.5,
            ServiceTier::International => 3.0,
        }
    }

    pub fn rate_per_kg(self) -> f64 {
        BASE_RATE_PER_KG * self.multiplier()
    }
}

/// Parse a submitted weight; must be a finite number above zero
pub fn parse_weight(input: &str) -> SharedResult<f64> {
    let invalid = || SharedError::InvalidWeight { input: input.to_string() };

    let weight: f64 = input.trim().parse().map_err(|_| invalid())?;
    if !weight.is_finite() || weight <= 0.0 {
        return Err(invalid());
    }
    Ok(weight)
}

/// Estimate the shipping cost for a weight (kg, as text) and service type
pub fn estimate_cost(weight: &str, service_type: &str) -> SharedResult<i64> {
    let kilograms = parse_weight(weight)?;
    let cost = (kilograms * ServiceTier::from_label(service_type).rate_per_kg()).round();

    // i64::MAX is not exactly representable; stay strictly below 2^63.
    if cost >= i64::MAX as f64 {
        return Err(SharedError::InvalidWeight { input: weight.to_string() });
    }
    Ok(cost as i64)
}
