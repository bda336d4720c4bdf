//! Small numeric/geometric helpers shared by the criterion and relocator
//! library. Not part of the decimation core itself.

pub mod utils;
