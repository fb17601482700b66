//! Message types for the place-picking session

use crate::geo::Coordinate;

/// Messages for session interactions and async completions.
#[derive(Debug, Clone)]
pub enum Msg {
    /// An available place was activated: add it to the picked list
    PlaceSelected(String),
    /// A picked place was activated: ask for removal confirmation
    RemovalRequested(String),
    /// The confirmation dialog was dismissed without removing anything
    RemovalCancelled,
    /// The confirmation dialog was accepted
    RemovalConfirmed,
    /// The one-shot geolocation request finished (`None` when it failed)
    LocationResolved(Option<Coordinate>),
}
