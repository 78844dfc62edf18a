// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Value types for the samples received from the reporting service.

use std::cmp::Ordering;
use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A numeric measurement.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Quantity {
    value: f64,
}

impl Quantity {
    /// Creates a new quantity from a base value.
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    /// Returns the base value of the quantity.
    pub fn base_value(&self) -> f64 {
        self.value
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A measurement taken at a point in time.
///
/// Samples are ordered by their timestamps.  Samples with the same timestamp
/// are ordered by value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample<Q = Quantity> {
    timestamp: DateTime<Utc>,
    value: Q,
}

impl<Q> Sample<Q> {
    /// Creates a new sample.
    pub fn new(timestamp: DateTime<Utc>, value: Q) -> Self {
        Self { timestamp, value }
    }

    /// Returns the time at which the sample was taken.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the value of the sample.
    pub fn value(&self) -> &Q {
        &self.value
    }

    /// Consumes the sample and returns its value.
    pub fn into_value(self) -> Q {
        self.value
    }
}

impl<Q: PartialOrd> PartialOrd for Sample<Q> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.timestamp.cmp(&other.timestamp) {
            Ordering::Equal => self.value.partial_cmp(&other.value),
            ordering => Some(ordering),
        }
    }
}

impl<Q: Display> Display for Sample<Q> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.value, self.timestamp.to_rfc3339())
    }
}

/// The metrics that can be requested from the reporting service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Metric {
    DcVoltage,
    DcCurrent,
    DcPower,
    AcFrequency,
    AcVoltage,
    AcCurrent,
    AcActivePower,
    AcReactivePower,
    AcApparentPower,
    AcPowerFactor,
    AcActiveEnergy,
    BatteryCapacity,
    BatterySocPct,
    BatteryTemperature,
    InverterTemperature,
    EvChargerTemperature,
}

impl Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Metric::DcVoltage => write!(f, "DC_VOLTAGE"),
            Metric::DcCurrent => write!(f, "DC_CURRENT"),
            Metric::DcPower => write!(f, "DC_POWER"),
            Metric::AcFrequency => write!(f, "AC_FREQUENCY"),
            Metric::AcVoltage => write!(f, "AC_VOLTAGE"),
            Metric::AcCurrent => write!(f, "AC_CURRENT"),
            Metric::AcActivePower => write!(f, "AC_ACTIVE_POWER"),
            Metric::AcReactivePower => write!(f, "AC_REACTIVE_POWER"),
            Metric::AcApparentPower => write!(f, "AC_APPARENT_POWER"),
            Metric::AcPowerFactor => write!(f, "AC_POWER_FACTOR"),
            Metric::AcActiveEnergy => write!(f, "AC_ACTIVE_ENERGY"),
            Metric::BatteryCapacity => write!(f, "BATTERY_CAPACITY"),
            Metric::BatterySocPct => write!(f, "BATTERY_SOC_PCT"),
            Metric::BatteryTemperature => write!(f, "BATTERY_TEMPERATURE"),
            Metric::InverterTemperature => write!(f, "INVERTER_TEMPERATURE"),
            Metric::EvChargerTemperature => write!(f, "EV_CHARGER_TEMPERATURE"),
        }
    }
}

/// A single raw entry of a batch delivered by the reporting service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    pub timestamp: DateTime<Utc>,
    pub microgrid_id: u64,
    pub component_id: u64,
    pub metric: Metric,
    pub value: f64,
}

impl From<MetricSample> for Sample<Quantity> {
    fn from(entry: MetricSample) -> Self {
        Sample::new(entry.timestamp, Quantity::new(entry.value))
    }
}
