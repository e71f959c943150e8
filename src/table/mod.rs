//! Calibration tables mapping raw ADC readings to temperatures

mod error;
mod oversampling;
mod point;

pub use error::InvalidTableError;
pub use oversampling::Oversampling;
pub use point::CalibrationPoint;

/// Direction in which a table's ADC values run.
///
/// NTC thermistors read lower as they heat up, amplified PT100s read higher, so either order is a
/// valid table. The order is declared rather than inferred and checked against the data.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcOrder {
    /// Every point has a larger ADC value than the one before it
    Ascending,
    /// Every point has a smaller ADC value than the one before it
    Descending,
}

/// A validated, read-only calibration table.
///
/// Holds at least two points whose ADC values are strictly monotonic in [`AdcOrder`], and whose
/// largest value still fits a `u16` after [`Oversampling`]. Both hold for the lifetime of the
/// table, so lookups never have to re-check them.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationTable<'a> {
    points: &'a [CalibrationPoint],
    order: AdcOrder,
    oversampling: Oversampling,
}

impl<'a> CalibrationTable<'a> {
    /// Validates `points` against `order` and builds a table at base resolution.
    pub const fn new(
        points: &'a [CalibrationPoint],
        order: AdcOrder,
    ) -> Result<Self, InvalidTableError> {
        if points.len() < 2 {
            return Err(InvalidTableError::TooFewPoints);
        }

        let mut index = 1;
        while index < points.len() {
            let prev = points[index - 1].adc;
            let adc = points[index].adc;

            if adc == prev {
                return Err(InvalidTableError::Duplicate { index });
            }

            let rising = adc > prev;
            if rising != matches!(order, AdcOrder::Ascending) {
                return Err(InvalidTableError::NotMonotonic { index });
            }

            index += 1;
        }

        Ok(Self {
            points,
            order,
            oversampling: Oversampling::NONE,
        })
    }

    /// Rescales the table for readings that sum `oversampling` conversions.
    #[allow(
        clippy::cast_lossless,
        reason = "`u32::from` is not callable in const fn"
    )]
    pub const fn with_oversampling(
        self,
        oversampling: Oversampling,
    ) -> Result<Self, InvalidTableError> {
        let widest = match self.order {
            AdcOrder::Ascending => self.points[self.points.len() - 1].adc,
            AdcOrder::Descending => self.points[0].adc,
        };

        if widest as u32 * oversampling.factor() as u32 > u16::MAX as u32 {
            return Err(InvalidTableError::ScaleOverflow);
        }

        Ok(Self {
            oversampling,
            ..self
        })
    }

    #[inline]
    pub const fn points(&self) -> &'a [CalibrationPoint] {
        self.points
    }

    #[inline]
    pub const fn order(&self) -> AdcOrder {
        self.order
    }

    #[inline]
    pub const fn oversampling(&self) -> Oversampling {
        self.oversampling
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.points.len()
    }

    /// Tables are never empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// First point in table order, at base resolution.
    #[inline]
    pub const fn first(&self) -> CalibrationPoint {
        self.points[0]
    }

    /// Last point in table order, at base resolution.
    #[inline]
    pub const fn last(&self) -> CalibrationPoint {
        self.points[self.points.len() - 1]
    }

    /// ADC value of `point` at the table's oversampled resolution.
    ///
    /// Returns `None` when the scaled value does not fit a `u16`, which only happens for points
    /// that are not part of this table.
    #[inline]
    pub const fn scaled_adc(&self, point: &CalibrationPoint) -> Option<u16> {
        point.adc.checked_mul(self.oversampling.factor())
    }

    /// Scales one of this table's own points.
    ///
    /// Cannot overflow, see [`with_oversampling`](Self::with_oversampling).
    #[inline]
    pub(crate) const fn scale(&self, point: &CalibrationPoint) -> u16 {
        point.adc * self.oversampling.factor()
    }

    /// Smallest and largest oversampled ADC value covered by the table.
    pub const fn adc_bounds(&self) -> (u16, u16) {
        let first = self.scale(&self.points[0]);
        let last = self.scale(&self.points[self.points.len() - 1]);

        match self.order {
            AdcOrder::Ascending => (first, last),
            AdcOrder::Descending => (last, first),
        }
    }

    /// Whether `raw` falls inside the table, bounds included.
    ///
    /// Readings outside are still converted, but clamp to an end of the table. That usually
    /// means a shorted or open sensor.
    pub const fn in_range(&self, raw: u16) -> bool {
        let (min, max) = self.adc_bounds();
        min <= raw && raw <= max
    }
}
