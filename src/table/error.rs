use core::fmt;

/// Reasons a calibration table is rejected when it is constructed.
///
/// Lookups on a constructed [`CalibrationTable`](super::CalibrationTable) never fail, so this is
/// the only error a table can produce.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InvalidTableError {
    /// Interpolation needs at least two points
    TooFewPoints,

    /// The point at `index` repeats the ADC value of the point before it
    Duplicate { index: usize },

    /// The point at `index` runs against the table's declared [`AdcOrder`](super::AdcOrder)
    NotMonotonic { index: usize },

    /// Scaling the table by its oversampling factor pushes the largest ADC value past `u16::MAX`
    ScaleOverflow,
}

impl InvalidTableError {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TooFewPoints => "Too few points",
            Self::Duplicate { .. } => "Duplicate ADC value",
            Self::NotMonotonic { .. } => "ADC values not monotonic",
            Self::ScaleOverflow => "Oversampled ADC value overflows",
        }
    }
}

impl fmt::Display for InvalidTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duplicate { index } | Self::NotMonotonic { index } => {
                write!(f, "{} at point {index}", self.as_str())
            }
            _ => f.write_str(self.as_str()),
        }
    }
}
