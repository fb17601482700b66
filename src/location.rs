//! One-shot geolocation via GeoClue2
//!
//! This module contains:
//! - Proxies for the GeoClue2 D-Bus interfaces
//! - A single-reading position request used once at startup
//!
//! The flow mirrors what GeoClue expects of a desktop client: obtain a client
//! object from the manager, identify ourselves, start the client, and take the
//! first `LocationUpdated` signal it delivers. No timeout is applied; when the
//! service is missing or never answers, the caller's view simply keeps its
//! default ordering.

use anyhow::Context;
use futures::StreamExt;
use zbus::zvariant::OwnedObjectPath;

use crate::geo::Coordinate;

/// GeoClue2 accuracy request; city level is plenty for ordering a catalog.
const ACCURACY_LEVEL_CITY: u32 = 4;

#[zbus::proxy(
    interface = "org.freedesktop.GeoClue2.Manager",
    default_service = "org.freedesktop.GeoClue2",
    default_path = "/org/freedesktop/GeoClue2/Manager"
)]
trait Manager {
    fn get_client(&self) -> zbus::Result<OwnedObjectPath>;
}

#[zbus::proxy(
    interface = "org.freedesktop.GeoClue2.Client",
    default_service = "org.freedesktop.GeoClue2"
)]
trait Client {
    fn start(&self) -> zbus::Result<()>;
    fn stop(&self) -> zbus::Result<()>;

    #[zbus(property)]
    fn desktop_id(&self) -> zbus::Result<String>;

    #[zbus(property)]
    fn desired_accuracy_level(&self) -> zbus::Result<u32>;

    /// Object path of the most recent location reading.
    #[zbus(property)]
    fn location(&self) -> zbus::Result<OwnedObjectPath>;

    #[zbus(signal)]
    fn location_updated(
        &self,
        old_location: OwnedObjectPath,
        new_location: OwnedObjectPath,
    ) -> zbus::Result<()>;
}

#[zbus::proxy(
    interface = "org.freedesktop.GeoClue2.Location",
    default_service = "org.freedesktop.GeoClue2"
)]
trait Location {
    #[zbus(property)]
    fn latitude(&self) -> zbus::Result<f64>;

    #[zbus(property)]
    fn longitude(&self) -> zbus::Result<f64>;
}

/// Resolve the device's current position once.
///
/// Failures (no system bus, no agent, permission denial) are logged and
/// collapsed into `None`; the caller treats that the same as a request that
/// never came back.
pub async fn current_position(desktop_id: &str) -> Option<Coordinate> {
    match request_position(desktop_id).await {
        Ok(coordinate) => {
            log::info!("geolocation resolved");
            Some(coordinate)
        }
        Err(err) => {
            log::warn!("geolocation unavailable: {err:?}");
            None
        }
    }
}

async fn request_position(desktop_id: &str) -> anyhow::Result<Coordinate> {
    let connection = zbus::Connection::system().await?;
    let manager = ManagerProxy::new(&connection).await?;
    let client_path = manager.get_client().await?;
    let client = ClientProxy::builder(&connection)
        .path(client_path)?
        .build()
        .await?;

    client.set_desktop_id(desktop_id).await?;
    client
        .set_desired_accuracy_level(ACCURACY_LEVEL_CITY)
        .await?;

    // Subscribe before starting so the first update cannot slip past us.
    let mut updates = client.receive_location_updated().await?;
    client.start().await?;

    updates
        .next()
        .await
        .context("location update stream closed")?;
    let location_path = client.location().await?;
    let location = LocationProxy::builder(&connection)
        .path(location_path)?
        .build()
        .await?;
    let coordinate = Coordinate {
        lat: location.latitude().await?,
        lon: location.longitude().await?,
    };

    // A one-shot reading; release the client so GeoClue can power down.
    if let Err(err) = client.stop().await {
        log::debug!("failed to stop geoclue client: {err}");
    }

    Ok(coordinate)
}
