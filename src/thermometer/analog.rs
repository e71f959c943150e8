//! [`Thermometer`] backed by an ADC channel and a calibration table

use crate::{
    table::CalibrationTable,
    thermometer::{Temperature, Thermometer},
};

/// A single analog input that converts to a raw reading.
#[allow(async_fn_in_trait, reason = "implementors run on single-threaded executors")]
pub trait AdcChannel {
    type Error;

    /// Perform one conversion
    async fn read_raw(&mut self) -> Result<u16, Self::Error>;
}

/// Thermistor or amplified RTD on an ADC input.
///
/// Each [`read`](Thermometer::read) sums as many conversions as the table's
/// [`Oversampling`](crate::Oversampling) asks for, and looks the sum up in the table.
pub struct AnalogThermometer<'t, A> {
    adc: A,
    table: CalibrationTable<'t>,
    last_raw: Option<u16>,
}

impl<'t, A: AdcChannel> AnalogThermometer<'t, A> {
    pub const fn new(adc: A, table: CalibrationTable<'t>) -> Self {
        Self {
            adc,
            table,
            last_raw: None,
        }
    }

    pub const fn table(&self) -> &CalibrationTable<'t> {
        &self.table
    }

    pub fn adc(&self) -> &A {
        &self.adc
    }
    pub fn adc_mut(&mut self) -> &mut A {
        &mut self.adc
    }

    /// Last oversampled reading, for diagnostics
    pub const fn last_raw(&self) -> Option<u16> {
        self.last_raw
    }

    pub fn into_inner(self) -> A {
        self.adc
    }

    async fn sample(&mut self) -> Result<u16, A::Error> {
        let mut sum = 0u16;
        for _ in 0..self.table.oversampling().factor() {
            sum = sum.saturating_add(self.adc.read_raw().await?);
        }
        Ok(sum)
    }
}

impl<A: AdcChannel> Thermometer for AnalogThermometer<'_, A> {
    type Error = A::Error;

    #[cfg_attr(feature = "sizing", inline(never))]
    async fn read(&mut self) -> Result<Temperature, Self::Error> {
        let raw = self.sample().await?;
        self.last_raw = Some(raw);

        if !self.table.in_range(raw) {
            let (min, max) = self.table.adc_bounds();
            warn!(
                "Raw reading {=u16} outside table ({=u16}..={=u16}), sensor shorted or open?",
                raw,
                min,
                max
            );
        }

        let temp = self.table.lookup(raw);
        trace!("Raw: {=u16}, Temperature: {=f32}", raw, temp.to_num::<f32>());

        Ok(temp)
    }
}
