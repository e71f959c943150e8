//! Temperature sensor interface

pub mod analog;

use fixed::types::I28F4;

/// I28F4 is a fixed point number with 4 fractional bits and 28 integer bits.
/// This gives us a precision of 0.0625 of the table's unit & a range of (-2^27, 2^27 - 0.0625).
pub type Temperature = I28F4;

#[allow(async_fn_in_trait, reason = "implementors run on single-threaded executors")]
pub trait Thermometer {
    type Error;

    /// Read the temperature in the units of the sensor's calibration table
    async fn read(&mut self) -> Result<Temperature, Self::Error>;
}

/// Fake ADC for testing
#[cfg(any(test, feature = "fake"))]
pub mod fake {
    use core::convert::Infallible;

    use crate::thermometer::analog::AdcChannel;

    /// A fake ADC channel that always converts to the same raw value
    pub struct FakeAdc {
        raw: u16,
        conversions: usize,
    }

    impl FakeAdc {
        pub const fn new(raw: u16) -> Self {
            Self {
                raw,
                conversions: 0,
            }
        }

        /// Get the raw value returned by every conversion
        pub const fn raw(&self) -> u16 {
            self.raw
        }
        /// Get a mutable reference to the raw value
        pub fn raw_mut(&mut self) -> &mut u16 {
            &mut self.raw
        }

        /// Number of conversions performed so far
        pub const fn conversions(&self) -> usize {
            self.conversions
        }
    }

    impl AdcChannel for FakeAdc {
        type Error = Infallible;

        async fn read_raw(&mut self) -> Result<u16, Self::Error> {
            self.conversions += 1;
            Ok(self.raw)
        }
    }
}
