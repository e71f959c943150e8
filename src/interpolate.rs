//! Integer linear interpolation on fixed point temperatures

use crate::thermometer::Temperature;

/// Interpolates between `(x0, t0)` and `(x1, t1)` at `x`, which must lie between `x0` and `x1`.
///
/// Works on the raw fixed point bits and truncates toward zero, so `x0` and `x1` map exactly to
/// `t0` and `t1` and the result never leaves `[t0, t1]`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "result lies between t0 and t1, which are both i32 bits"
)]
pub(crate) fn linear(x0: u16, t0: i16, x1: u16, t1: i16, x: u16) -> Temperature {
    let span = i64::from(x0.abs_diff(x1));
    let offset = i64::from(x0.abs_diff(x));

    let t0 = i64::from(Temperature::from_num(t0).to_bits());
    let t1 = i64::from(Temperature::from_num(t1).to_bits());

    Temperature::from_bits((t0 + (t1 - t0) * offset / span) as i32)
}

/// Inverse of [`linear`]: the `x` between `x0` and `x1` where the segment reaches `t`.
///
/// `t` must lie between `t0` and `t1`, and `t0 != t1`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "result lies between x0 and x1"
)]
pub(crate) fn inverse(x0: u16, t0: i16, x1: u16, t1: i16, t: Temperature) -> u16 {
    let span = i64::from(x1) - i64::from(x0);

    let t0 = i64::from(Temperature::from_num(t0).to_bits());
    let t1 = i64::from(Temperature::from_num(t1).to_bits());
    let t = i64::from(t.to_bits());

    (i64::from(x0) + span * (t - t0) / (t1 - t0)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint() {
        assert_eq!(linear(335, 100, 343, 110, 339), Temperature::from_num(105));
        assert_eq!(linear(343, 110, 335, 100, 339), Temperature::from_num(105));
    }

    #[test]
    fn test_endpoints_exact() {
        assert_eq!(linear(10, -40, 90, 300, 10), Temperature::from_num(-40));
        assert_eq!(linear(10, -40, 90, 300, 90), Temperature::from_num(300));
    }

    #[test]
    fn test_fractional_result() {
        // A quarter of the way from 0 to 1 degree
        assert_eq!(linear(0, 0, 4, 1, 1), Temperature::from_num(0.25));
    }

    #[test]
    fn test_falling_temperature() {
        assert_eq!(linear(100, 200, 200, 100, 150), Temperature::from_num(150));
        assert_eq!(linear(100, 200, 200, 100, 125), Temperature::from_num(175));
    }

    #[test]
    fn test_inverse() {
        assert_eq!(inverse(335, 100, 343, 110, Temperature::from_num(105)), 339);
        assert_eq!(inverse(1000, 0, 600, 100, Temperature::from_num(50)), 800);
        assert_eq!(inverse(1000, 0, 600, 100, Temperature::from_num(100)), 600);
    }
}
