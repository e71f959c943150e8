/// A single `(adc, temperature)` calibration pair.
///
/// `adc` is stored at the table's base resolution, before any [`Oversampling`](super::Oversampling)
/// is applied. `temperature` is in whatever unit the table uses (degrees Celsius, or tenths of a
/// degree), as long as every point of a table agrees.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(C)]
pub struct CalibrationPoint {
    pub adc: u16,
    pub temperature: i16,
}

static_assertions::assert_eq_size!(CalibrationPoint, u32);

impl CalibrationPoint {
    #[inline]
    pub const fn new(adc: u16, temperature: i16) -> Self {
        Self { adc, temperature }
    }
}
