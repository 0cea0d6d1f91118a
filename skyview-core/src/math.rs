/// Cosine of the great-circle separation between two points, by the
/// spherical law of cosines. Inputs in radians.
#[inline]
pub fn cos_separation(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let (sin_lat1, cos_lat1) = libm::sincos(lat1);
    let (sin_lat2, cos_lat2) = libm::sincos(lat2);
    sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * libm::cos(lon1 - lon2)
}
