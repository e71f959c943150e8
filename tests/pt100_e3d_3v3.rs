use thermistor_lut::{
    lookup, tables::PT100_E3D_3V3, AdcOrder, CalibrationPoint, CalibrationTable,
    InvalidTableError, Oversampling, Temperature,
};

fn oversampled(samples: u16) -> CalibrationTable<'static> {
    PT100_E3D_3V3
        .with_oversampling(Oversampling::new(samples).unwrap())
        .unwrap()
}

#[test]
fn test_table_shape() {
    assert_eq!(PT100_E3D_3V3.order(), AdcOrder::Ascending);
    assert_eq!(PT100_E3D_3V3.oversampling(), Oversampling::NONE);
    assert_eq!(PT100_E3D_3V3.first(), CalibrationPoint::new(0, 0));
    assert_eq!(PT100_E3D_3V3.last(), CalibrationPoint::new(964, 1100));
    assert_eq!(PT100_E3D_3V3.adc_bounds(), (0, 964));
}

#[test]
fn test_halfway_between_points() {
    assert_eq!(lookup(&PT100_E3D_3V3, 339), Temperature::from_num(105));

    for samples in [1, 4, 16, 64] {
        let table = oversampled(samples);
        let halfway = (335 + 343) / 2 * samples;
        assert_eq!(table.lookup(halfway), Temperature::from_num(105));
    }
}

#[test]
fn test_every_point_exact() {
    let table = oversampled(16);
    for point in table.points() {
        assert_eq!(
            table.lookup(point.adc * 16),
            Temperature::from_num(point.temperature)
        );
    }
}

#[test]
fn test_clamps_past_last_point() {
    assert_eq!(PT100_E3D_3V3.lookup(1023), Temperature::from_num(1100));
    assert_eq!(oversampled(16).lookup(u16::MAX), Temperature::from_num(1100));
    assert!(!PT100_E3D_3V3.in_range(965));
}

#[test]
fn test_monotonic() {
    let table = oversampled(16);
    let mut prev = table.lookup(0);
    for raw in 1..=u16::MAX {
        let temp = table.lookup(raw);
        assert!(temp >= prev, "lookup({raw}) = {temp} < {prev}");
        prev = temp;
    }
}

#[test]
fn test_usable_limit() {
    // 3.3 V amplifier supply leaves roughly 360 °C of useful range
    assert_eq!(PT100_E3D_3V3.sample_for(Temperature::from_num(360)), Some(533));
    assert_eq!(oversampled(16).sample_for(Temperature::from_num(310)), Some(497 * 16));
    assert_eq!(PT100_E3D_3V3.sample_for(Temperature::from_num(1101)), None);
}

#[test]
fn test_largest_oversampling() {
    // 964 * 67 = 64_588 still fits, 964 * 68 does not
    assert!(PT100_E3D_3V3
        .with_oversampling(Oversampling::new(67).unwrap())
        .is_ok());
    assert_eq!(
        PT100_E3D_3V3.with_oversampling(Oversampling::new(68).unwrap()),
        Err(InvalidTableError::ScaleOverflow)
    );
}

#[test]
fn test_reversed_copy_rejected_as_ascending() {
    let mut points = [CalibrationPoint::new(0, 0); 49];
    points.copy_from_slice(PT100_E3D_3V3.points());
    points.reverse();

    assert_eq!(
        CalibrationTable::new(&points, AdcOrder::Ascending),
        Err(InvalidTableError::NotMonotonic { index: 1 })
    );

    let reversed = CalibrationTable::new(&points, AdcOrder::Descending).unwrap();
    for raw in [0, 100, 245, 300, 339, 600, 777, 964, 1023] {
        assert_eq!(reversed.lookup(raw), PT100_E3D_3V3.lookup(raw));
    }
}

#[test]
fn test_error_display() {
    let points = [CalibrationPoint::new(10, 0), CalibrationPoint::new(10, 5)];
    let err = CalibrationTable::new(&points, AdcOrder::Ascending).unwrap_err();
    assert_eq!(err.to_string(), "Duplicate ADC value at point 1");
    assert_eq!(InvalidTableError::TooFewPoints.to_string(), "Too few points");
}
