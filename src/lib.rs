//! Thermistor and RTD calibration tables
//!
//! Converts raw ADC readings to temperatures by linear interpolation in a table of
//! `(adc, temperature)` points. Tables are validated once when they are built, in `const`
//! context for the tables shipped in [`tables`], after which lookups cannot fail: readings
//! outside the table clamp to its first or last temperature.
//!
//! ```
//! use thermistor_lut::{tables::PT100_E3D_3V3, Oversampling, Temperature};
//!
//! // Firmware summing 16 conversions per reading
//! let table = PT100_E3D_3V3
//!     .with_oversampling(Oversampling::new(16).unwrap())
//!     .unwrap();
//!
//! let halfway = (335 + 343) / 2 * 16;
//! assert_eq!(table.lookup(halfway), Temperature::from_num(105));
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

#[macro_use]
mod fmt;
mod interpolate;
mod lookup;
pub mod table;
pub mod tables;
pub mod thermometer;

pub use lookup::lookup;
pub use table::{AdcOrder, CalibrationPoint, CalibrationTable, InvalidTableError, Oversampling};
pub use thermometer::{
    analog::{AdcChannel, AnalogThermometer},
    Temperature, Thermometer,
};
