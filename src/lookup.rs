//! ADC sample to temperature conversion

use crate::{
    interpolate,
    table::{AdcOrder, CalibrationTable},
    thermometer::Temperature,
};

/// Converts `raw_adc` to a temperature using `table`.
///
/// Shorthand for [`CalibrationTable::lookup`].
#[inline]
pub fn lookup(table: &CalibrationTable<'_>, raw_adc: u16) -> Temperature {
    table.lookup(raw_adc)
}

impl CalibrationTable<'_> {
    /// Converts an oversampled raw ADC reading to a temperature in the table's units.
    ///
    /// Readings between two points are linearly interpolated. Readings before the first point
    /// return the first temperature, readings past the last point return the last temperature.
    #[cfg_attr(feature = "sizing", inline(never))]
    pub fn lookup(&self, raw_adc: u16) -> Temperature {
        let points = self.points();

        // Number of points at or before `raw_adc` in table order
        let passed = match self.order() {
            AdcOrder::Ascending => points.partition_point(|p| self.scale(p) <= raw_adc),
            AdcOrder::Descending => points.partition_point(|p| self.scale(p) >= raw_adc),
        };

        match passed {
            0 => Temperature::from_num(self.first().temperature),
            n if n == points.len() => Temperature::from_num(self.last().temperature),
            n => {
                // Measured from the lower ADC value in either order
                let (a, b) = match self.order() {
                    AdcOrder::Ascending => (points[n - 1], points[n]),
                    AdcOrder::Descending => (points[n], points[n - 1]),
                };
                interpolate::linear(
                    self.scale(&a),
                    a.temperature,
                    self.scale(&b),
                    b.temperature,
                    raw_adc,
                )
            }
        }
    }

    /// Raw ADC reading at which the table reaches `temperature`.
    ///
    /// Scans segments in table order and answers from the first one whose temperatures enclose
    /// `temperature`. Returns `None` when no segment does.
    pub fn sample_for(&self, temperature: Temperature) -> Option<u16> {
        self.points().windows(2).find_map(|pair| {
            let (a, b) = (pair[0], pair[1]);
            let (ta, tb) = (
                Temperature::from_num(a.temperature),
                Temperature::from_num(b.temperature),
            );

            if temperature < ta.min(tb) || temperature > ta.max(tb) {
                return None;
            }

            if ta == tb {
                return Some(self.scale(&a));
            }

            Some(interpolate::inverse(
                self.scale(&a),
                a.temperature,
                self.scale(&b),
                b.temperature,
                temperature,
            ))
        })
    }
}
