//! Session state: the picked-place list and the removal confirmation flow

use crate::catalog::{Catalog, Place};
use crate::store::SelectionStore;

/// Confirmation state for removing a picked place.
///
/// The presentation layer opens one modal dialog at a time, so a single
/// pending target suffices; a second request simply replaces the first.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RemovalConfirm {
    #[default]
    Idle,
    /// Waiting for the user to confirm removal of this place id.
    Pending(String),
}

/// In-memory session state, kept consistent with the durable store.
pub struct SessionState {
    store: SelectionStore,
    picked: Vec<Place>,
    confirm: RemovalConfirm,
}

impl SessionState {
    /// Materialize the persisted selection against the catalog.
    ///
    /// Persisted ids with no catalog entry are dropped from the view; the
    /// durable list itself is left alone so a later catalog revision can
    /// surface them again.
    pub fn restore(catalog: &Catalog, store: SelectionStore) -> Self {
        let picked = store
            .load()
            .into_iter()
            .filter_map(|id| match catalog.get(&id) {
                Some(place) => Some(place.clone()),
                None => {
                    log::warn!("stored place {id:?} is not in the catalog, skipping");
                    None
                }
            })
            .collect();
        Self {
            store,
            picked,
            confirm: RemovalConfirm::Idle,
        }
    }

    pub fn picked(&self) -> &[Place] {
        &self.picked
    }

    pub fn confirm(&self) -> &RemovalConfirm {
        &self.confirm
    }

    /// Add the place with this id to the front of the picked list.
    ///
    /// A no-op when the id is already picked or unknown to the catalog.
    pub fn select(&mut self, catalog: &Catalog, id: &str) {
        if self.picked.iter().any(|place| place.id == id) {
            return;
        }
        let Some(place) = catalog.get(id) else {
            log::warn!("selected place {id:?} is not in the catalog");
            return;
        };
        self.picked.insert(0, place.clone());
        self.store.add(id);
    }

    /// Remove the place with this id, keeping the order of the rest.
    pub fn deselect(&mut self, id: &str) {
        self.picked.retain(|place| place.id != id);
        self.store.remove(id);
    }

    /// Start the confirmation flow for this id (last request wins).
    pub fn request_removal(&mut self, id: String) {
        self.confirm = RemovalConfirm::Pending(id);
    }

    /// Abandon the pending removal without touching the picked list.
    pub fn cancel_removal(&mut self) {
        self.confirm = RemovalConfirm::Idle;
    }

    /// Carry out the pending removal, if any.
    pub fn confirm_removal(&mut self) {
        if let RemovalConfirm::Pending(id) = std::mem::take(&mut self.confirm) {
            self.deselect(&id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_places(vec![
            Place {
                id: "p1".into(),
                name: "Cliffs".into(),
                image: "cliffs.jpg".into(),
                lat: 48.0,
                lon: 2.0,
            },
            Place {
                id: "p2".into(),
                name: "Dunes".into(),
                image: "dunes.jpg".into(),
                lat: 35.0,
                lon: 139.0,
            },
        ])
    }

    fn store_at(dir: &tempfile::TempDir) -> SelectionStore {
        SelectionStore::open(dir.path().join("selected_places.json"))
    }

    fn picked_ids(session: &SessionState) -> Vec<&str> {
        session.picked().iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_select_prepends_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = catalog();
        let mut session = SessionState::restore(&catalog, store_at(&dir));

        session.select(&catalog, "p2");
        assert_eq!(picked_ids(&session), vec!["p2"]);
        assert_eq!(store_at(&dir).load(), vec!["p2".to_string()]);

        session.select(&catalog, "p1");
        assert_eq!(picked_ids(&session), vec!["p1", "p2"]);
        assert_eq!(
            store_at(&dir).load(),
            vec!["p1".to_string(), "p2".to_string()]
        );
    }

    #[test]
    fn test_select_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = catalog();
        let mut session = SessionState::restore(&catalog, store_at(&dir));

        session.select(&catalog, "p1");
        session.select(&catalog, "p1");
        assert_eq!(picked_ids(&session), vec!["p1"]);
        assert_eq!(store_at(&dir).load(), vec!["p1".to_string()]);
    }

    #[test]
    fn test_select_unknown_id_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = catalog();
        let mut session = SessionState::restore(&catalog, store_at(&dir));

        session.select(&catalog, "p9");
        assert!(session.picked().is_empty());
        assert!(store_at(&dir).load().is_empty());
    }

    #[test]
    fn test_select_then_deselect_restores_prior_list() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = catalog();
        let mut session = SessionState::restore(&catalog, store_at(&dir));

        session.select(&catalog, "p2");
        session.select(&catalog, "p1");
        session.deselect("p1");
        assert_eq!(picked_ids(&session), vec!["p2"]);
        assert_eq!(store_at(&dir).load(), vec!["p2".to_string()]);
    }

    #[test]
    fn test_restore_materializes_persisted_ids() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_at(&dir);
        store.add("p2");
        store.add("p1");

        let session = SessionState::restore(&catalog(), store);
        assert_eq!(picked_ids(&session), vec!["p1", "p2"]);
    }

    #[test]
    fn test_restore_drops_stale_ids() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_at(&dir);
        store.add("p1");
        store.add("demolished");

        let session = SessionState::restore(&catalog(), store);
        assert_eq!(picked_ids(&session), vec!["p1"]);
        // Materialization filters the view only; the durable list is untouched.
        assert_eq!(
            store_at(&dir).load(),
            vec!["demolished".to_string(), "p1".to_string()]
        );
    }

    #[test]
    fn test_removal_cancel_keeps_list() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = catalog();
        let mut session = SessionState::restore(&catalog, store_at(&dir));
        session.select(&catalog, "p1");

        session.request_removal("p1".into());
        assert_eq!(*session.confirm(), RemovalConfirm::Pending("p1".into()));
        session.cancel_removal();
        assert_eq!(*session.confirm(), RemovalConfirm::Idle);
        assert_eq!(picked_ids(&session), vec!["p1"]);
    }

    #[test]
    fn test_removal_confirm_removes_exactly_the_target() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = catalog();
        let mut session = SessionState::restore(&catalog, store_at(&dir));
        session.select(&catalog, "p2");
        session.select(&catalog, "p1");

        session.request_removal("p1".into());
        session.confirm_removal();
        assert_eq!(*session.confirm(), RemovalConfirm::Idle);
        assert_eq!(picked_ids(&session), vec!["p2"]);
        assert_eq!(store_at(&dir).load(), vec!["p2".to_string()]);
    }

    #[test]
    fn test_removal_confirm_in_idle_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = catalog();
        let mut session = SessionState::restore(&catalog, store_at(&dir));
        session.select(&catalog, "p1");

        session.confirm_removal();
        assert_eq!(picked_ids(&session), vec!["p1"]);
    }

    #[test]
    fn test_second_request_overwrites_pending_target() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = catalog();
        let mut session = SessionState::restore(&catalog, store_at(&dir));
        session.select(&catalog, "p2");
        session.select(&catalog, "p1");

        session.request_removal("p1".into());
        session.request_removal("p2".into());
        session.confirm_removal();
        assert_eq!(picked_ids(&session), vec!["p1"]);
    }
}
