//! Great-circle distance between patient and hospital coordinates.

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two WGS-84 coordinates, in kilometres.
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Normalize a distance against a cap into [0,1].
///
/// A zero cap disables the distance term (returns 0.0) rather than dividing
/// by zero. The result is clamped so it can never leave [0,1].
pub fn normalize_distance(distance_km: f64, max_km: f64) -> f64 {
    if max_km == 0.0 {
        return 0.0;
    }
    (distance_km / max_km).clamp(0.0, 1.0)
}
