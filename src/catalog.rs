//! Static place catalog
//!
//! The catalog is the complete set of selectable places. It ships with the
//! binary as an embedded JSON document and is parsed exactly once at startup;
//! nothing creates, destroys, or mutates `Place` records after that.

use serde::Deserialize;

/// One visitable location with identity, display data, and coordinates.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Place {
    pub id: String,
    pub name: String,
    /// Opaque reference to the place's picture, resolved by the presentation layer.
    pub image: String,
    pub lat: f64,
    pub lon: f64,
}

/// Immutable set of all selectable places.
#[derive(Clone, Debug)]
pub struct Catalog {
    places: Vec<Place>,
}

const CATALOG_JSON: &str = include_str!("../data/places.json");

impl Catalog {
    /// Parse the embedded catalog. Called once at startup.
    pub fn load() -> Self {
        let places: Vec<Place> =
            serde_json::from_str(CATALOG_JSON).expect("embedded catalog is valid JSON");
        log::debug!("catalog loaded with {} places", places.len());
        Self { places }
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Look up a place by id.
    pub fn get(&self, id: &str) -> Option<&Place> {
        self.places.iter().find(|place| place.id == id)
    }

    #[cfg(test)]
    pub fn from_places(places: Vec<Place>) -> Self {
        Self { places }
    }
}
