//! Delivery pricing engine.
//!
//! Pure functions over venue pricing configuration: no I/O, no shared state.
//! Every monetary value is an `i64` in minor currency units (cents).

use serde::Serialize;
use thiserror::Error;

/// One tier of the delivery fee schedule, covering `[min, max)` meters.
///
/// `max == 0` marks the final tier: delivery is impossible at or beyond its `min`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistanceRange {
    pub min: f64,
    pub max: f64,
    /// Flat fee addend
    pub a: i64,
    /// Fee per 10 meters of distance
    pub b: i64,
}

impl DistanceRange {
    pub fn is_unbounded(&self) -> bool {
        self.max == 0.0
    }

    pub fn contains(&self, distance: f64) -> bool {
        distance >= self.min && distance < self.max
    }

    /// Tier cost on top of the base price; the proportional term is rounded half away from zero.
    ///
    /// `None` when the cost does not fit in an `i64`.
    pub fn fee(&self, distance: f64) -> Option<i64> {
        let proportional = (self.b as f64 * distance / 10.0).round();
        if !(proportional.is_finite() && proportional.abs() < i64::MAX as f64) {
            return None;
        }
        self.a.checked_add(proportional as i64)
    }
}

/// Pricing configuration for a single venue.
///
/// `distance_ranges` is non-empty and ordered ascending by `min`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenuePricingConfig {
    pub order_minimum_no_surcharge: i64,
    pub base_price: i64,
    pub distance_ranges: Vec<DistanceRange>,
}

impl VenuePricingConfig {
    /// Pairs of adjacent ranges where one tier's `max` is not the next tier's `min`.
    ///
    /// Distances falling into such a gap are charged the base price only.
    pub fn gaps(&self) -> Vec<(f64, f64)> {
        self.distance_ranges
            .windows(2)
            .filter(|pair| pair[0].max != pair[1].min)
            .map(|pair| (pair[0].max, pair[1].min))
            .collect()
    }
}

/// Itemized result of a price calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceBreakdown {
    pub cart_value: i64,
    pub small_order_surcharge: i64,
    pub delivery_fee: i64,
    /// Straight-line distance rounded to the nearest meter
    pub delivery_distance: u64,
    pub total_price: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PricingError {
    #[error("Delivery is not possible for the given distance ({distance:.0} m)")]
    DeliveryImpossible { distance: f64 },

    #[error("Price amounts overflow the minor-unit range")]
    AmountOverflow,
}

/// Surcharge making up the difference between the cart value and the venue minimum.
pub fn small_order_surcharge(order_minimum_no_surcharge: i64, cart_value: i64) -> i64 {
    order_minimum_no_surcharge.saturating_sub(cart_value).max(0)
}

/// Base price plus the cost of the first tier containing `distance`.
///
/// A distance no tier contains pays the base price alone.
pub fn delivery_fee(config: &VenuePricingConfig, distance: f64) -> Result<i64, PricingError> {
    match config.distance_ranges.iter().find(|range| range.contains(distance)) {
        Some(range) => range
            .fee(distance)
            .and_then(|fee| config.base_price.checked_add(fee))
            .ok_or(PricingError::AmountOverflow),
        None => Ok(config.base_price),
    }
}

/// Compute the full price breakdown for delivering a cart over `distance` meters.
pub fn compute_price(
    config: &VenuePricingConfig,
    cart_value: i64,
    distance: f64,
) -> Result<PriceBreakdown, PricingError> {
    if let Some(last) = config.distance_ranges.last() {
        if distance >= last.min && last.is_unbounded() {
            return Err(PricingError::DeliveryImpossible { distance });
        }
    }

    let small_order_surcharge = small_order_surcharge(config.order_minimum_no_surcharge, cart_value);
    let delivery_fee = delivery_fee(config, distance)?;
    let total_price = cart_value
        .checked_add(small_order_surcharge)
        .and_then(|sum| sum.checked_add(delivery_fee))
        .ok_or(PricingError::AmountOverflow)?;

    Ok(PriceBreakdown {
        cart_value,
        small_order_surcharge,
        delivery_fee,
        delivery_distance: distance.round() as u64,
        total_price,
    })
}
