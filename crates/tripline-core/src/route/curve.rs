//! Quadratic Bézier sampling for offset route curves.

use crate::model::GeoPoint;

/// Number of evenly spaced samples along a curve.
pub const CURVE_SAMPLES: usize = 21;

/// Sample `B(t) = (1-t)²·p0 + 2(1-t)t·control + t²·p1` at evenly spaced
/// parameter values over `[0, 1]`.
pub fn sample_quadratic(p0: GeoPoint, control: GeoPoint, p1: GeoPoint) -> Vec<GeoPoint> {
    (0..CURVE_SAMPLES)
        .map(|i| {
            let t = i as f64 / (CURVE_SAMPLES - 1) as f64;
            let u = 1.0 - t;
            GeoPoint {
                lat: u * u * p0.lat + 2.0 * u * t * control.lat + t * t * p1.lat,
                lng: u * u * p0.lng + 2.0 * u * t * control.lng + t * t * p1.lng,
            }
        })
        .collect()
}

/// Control point for a curve displaced perpendicular to the chord.
///
/// The chord's direction vector is rotated 90°, normalized, and scaled by
/// chord length times `offset_factor`, then applied at the midpoint. A
/// factor of zero gives the midpoint itself (a degenerate straight curve).
pub fn offset_control_point(p0: GeoPoint, p1: GeoPoint, offset_factor: f64) -> GeoPoint {
    let mid = GeoPoint {
        lat: (p0.lat + p1.lat) / 2.0,
        lng: (p0.lng + p1.lng) / 2.0,
    };

    let dx = p1.lng - p0.lng;
    let dy = p1.lat - p0.lat;
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 {
        return mid;
    }

    // Rotate the direction 90° counter-clockwise and normalize
    let perp_x = -dy / len;
    let perp_y = dx / len;

    GeoPoint {
        lat: mid.lat + perp_y * len * offset_factor,
        lng: mid.lng + perp_x * len * offset_factor,
    }
}
