use geo::{Distance, Haversine, Point};

/// Great-circle distance in kilometers between two WGS 84 coordinates.
///
/// Total over all valid coordinates: any pair yields a finite, non-negative
/// result, and identical points yield exactly 0.
pub fn distance_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    // geo points are (x, y) = (lng, lat)
    let a = Point::new(lng1, lat1);
    let b = Point::new(lng2, lat2);
    Haversine.distance(a, b) / 1000.0
}

/// Format a distance for display.
///
/// Below 1 km: whole meters. 1 to 10 km: one decimal. Beyond: rounded km.
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{} m", (km * 1000.0).round() as i64)
    } else if km < 10.0 {
        format!("{:.1} km", km)
    } else {
        format!("{} km", km.round() as i64)
    }
}
