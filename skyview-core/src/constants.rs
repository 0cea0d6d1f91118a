pub const J2000_JD: f64 = 2451545.0;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

pub const MINUTES_PER_DAY: f64 = 1440.0;

pub const HOURS_PER_DAY: f64 = 24.0;

pub const DEGREES_PER_CIRCLE: f64 = 360.0;

/// One hour of right ascension spans 15 degrees.
pub const DEGREES_PER_HOUR: f64 = 15.0;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;
