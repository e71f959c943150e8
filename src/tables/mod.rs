//! Built-in calibration tables
//!
//! Tables are stored at 10 bit base resolution with no oversampling applied.

mod pt100_e3d_3v3;

pub use pt100_e3d_3v3::PT100_E3D_3V3;
