//! E3D PT100 amplifier on a 3.3 V, 4.7 kΩ pull-up thermistor input
//!
//! Boards such as the BigTreeTech GTR have a 3.3 V ADC reference and a 4.7 kΩ pull-up on every
//! thermistor input, which skews the amplifier output away from the stock PT100 tables. The
//! amplifier is powered from 3.3 V, which caps the usable range at roughly 360 °C.
//!
//! Points were derived from PT100 resistance against temperature with
//!
//! ```text
//! Vref = 3.30 V
//! Rb   = 4400 Ω  (both bridge resistors of the INA826 circuit)
//! Rpu  = 4700 Ω  (pull-up on the thermistor input)
//! Ramp = 100 Ω   (INA826 output resistor)
//! RTD  = PT100 resistance at the temperature, e.g. 111 Ω at 25 °C
//!
//! Vo   = ((Vref / (RTD + Rb)) * RTD) * 10
//! Vadc = (((Vref - Vo) / Rpu) * Ramp) + Vo
//! ADC  = (Vadc / Vref) * 1024
//! ```

use crate::table::{AdcOrder, CalibrationPoint, CalibrationTable};

const POINTS: &[CalibrationPoint] = &[
    CalibrationPoint::new(0, 0),
    CalibrationPoint::new(245, 1),
    CalibrationPoint::new(261, 10),
    CalibrationPoint::new(269, 20),
    CalibrationPoint::new(277, 30),
    CalibrationPoint::new(286, 40),
    CalibrationPoint::new(294, 50),
    CalibrationPoint::new(302, 60),
    CalibrationPoint::new(311, 70),
    CalibrationPoint::new(319, 80),
    CalibrationPoint::new(327, 90),
    CalibrationPoint::new(335, 100),
    CalibrationPoint::new(343, 110),
    CalibrationPoint::new(351, 120),
    CalibrationPoint::new(359, 130),
    CalibrationPoint::new(367, 140),
    CalibrationPoint::new(375, 150),
    CalibrationPoint::new(383, 160),
    CalibrationPoint::new(391, 170),
    CalibrationPoint::new(398, 180),
    CalibrationPoint::new(406, 190),
    CalibrationPoint::new(414, 200),
    CalibrationPoint::new(422, 210),
    CalibrationPoint::new(429, 220),
    CalibrationPoint::new(437, 230),
    CalibrationPoint::new(444, 240),
    CalibrationPoint::new(452, 250),
    CalibrationPoint::new(459, 260),
    CalibrationPoint::new(467, 270),
    CalibrationPoint::new(474, 280),
    CalibrationPoint::new(482, 290),
    CalibrationPoint::new(489, 300),
    CalibrationPoint::new(497, 310),
    CalibrationPoint::new(504, 320),
    CalibrationPoint::new(511, 330),
    CalibrationPoint::new(518, 340),
    CalibrationPoint::new(525, 350),
    CalibrationPoint::new(533, 360),
    CalibrationPoint::new(540, 370),
    CalibrationPoint::new(547, 380),
    CalibrationPoint::new(554, 390),
    CalibrationPoint::new(561, 400),
    CalibrationPoint::new(629, 500),
    CalibrationPoint::new(694, 600),
    CalibrationPoint::new(755, 700),
    CalibrationPoint::new(815, 800),
    CalibrationPoint::new(854, 900),
    CalibrationPoint::new(914, 1000),
    CalibrationPoint::new(964, 1100),
];

/// Sensor type 24, degrees Celsius, 10 bit ADC values, rising with temperature.
///
/// Apply the firmware's oversample count with
/// [`with_oversampling`](CalibrationTable::with_oversampling) before use.
pub const PT100_E3D_3V3: CalibrationTable<'static> =
    match CalibrationTable::new(POINTS, AdcOrder::Ascending) {
        Ok(table) => table,
        Err(_) => panic!("invalid PT100_E3D_3V3 table"),
    };

static_assertions::const_assert_eq!(PT100_E3D_3V3.len(), 49);
static_assertions::const_assert!(PT100_E3D_3V3.adc_bounds().1 < 1024);
