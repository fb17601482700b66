//! Distance ordering for catalog places
//!
//! Pure math with no I/O and no framework types.

use crate::catalog::Place;

/// A single geographic position reading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates (haversine formula).
pub fn distance_km(from: Coordinate, to: Coordinate) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lon = (to.lon - from.lon).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Returns the places ordered ascending by distance from `reference`.
///
/// The input slice is left untouched; ties keep their input order.
pub fn sort_places_by_distance(places: &[Place], reference: Coordinate) -> Vec<Place> {
    let mut keyed: Vec<(f64, &Place)> = places
        .iter()
        .map(|place| {
            let position = Coordinate {
                lat: place.lat,
                lon: place.lon,
            };
            (distance_km(reference, position), place)
        })
        .collect();
    // total_cmp keeps the ordering deterministic even for NaN coordinates.
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    keyed.into_iter().map(|(_, place)| place.clone()).collect()
}
