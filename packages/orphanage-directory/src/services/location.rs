use geo::{Centroid, MultiPoint, Point};

use crate::models::LocationPoint;

/// Map center shown before the browser reports the device position.
/// Centroid of all known positions, or `fallback` when there are none.
pub fn initial_center<I>(positions: I, fallback: LocationPoint) -> LocationPoint
where
    I: IntoIterator<Item = LocationPoint>,
{
    let points: MultiPoint<f64> = positions
        .into_iter()
        .filter(LocationPoint::is_valid)
        .map(|p| Point::new(p.longitude, p.latitude))
        .collect();

    match points.centroid() {
        Some(center) => LocationPoint::new(center.y(), center.x()),
        None => fallback,
    }
}
