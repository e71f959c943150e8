/// Number of ADC conversions summed into one raw reading.
///
/// Firmware that oversamples adds up `N` conversions per reading, so a table written at base
/// resolution has to be compared against `adc * N`. The factor belongs to the surrounding
/// firmware configuration and is never inferred from a table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Oversampling(u16);

impl Oversampling {
    /// One conversion per reading
    pub const NONE: Self = Self(1);

    /// Returns `None` for zero samples.
    pub const fn new(samples: u16) -> Option<Self> {
        if samples == 0 {
            None
        } else {
            Some(Self(samples))
        }
    }

    /// `2^shift` samples, for firmware that expresses oversampling as a bit shift.
    ///
    /// Returns `None` once the factor no longer fits a `u16`.
    pub const fn from_shift(shift: u32) -> Option<Self> {
        if shift < u16::BITS {
            Some(Self(1 << shift))
        } else {
            None
        }
    }

    #[inline]
    pub const fn factor(self) -> u16 {
        self.0
    }
}

impl Default for Oversampling {
    fn default() -> Self {
        Self::NONE
    }
}
