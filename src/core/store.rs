use crate::domain::model::{Link, LinkBioData, LinkDraft, LinkPatch, ProfilePatch, UserProfile};
use crate::utils::error::{LinkBioError, Result};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Authoritative keyed table for one profile and its links. All writes go
/// through the write lock, so concurrent updates to the same entity
/// resolve last-submission-wins. No `.await` happens while the lock is
/// held; an abandoned caller cannot leave the store half-mutated.
#[derive(Debug)]
pub struct MemoryStore {
    data: RwLock<LinkBioData>,
}

impl MemoryStore {
    pub fn new(data: LinkBioData) -> Self {
        Self {
            data: RwLock::new(data),
        }
    }

    pub async fn profile(&self) -> UserProfile {
        self.data.read().await.profile.clone()
    }

    /// Links in insertion order.
    pub async fn links(&self) -> Vec<Link> {
        self.data.read().await.links.clone()
    }

    pub async fn insert_link(&self, draft: LinkDraft) -> Link {
        let link = draft.into_link(Uuid::new_v4());
        let mut data = self.data.write().await;
        data.links.push(link.clone());
        link
    }

    pub async fn update_link(&self, id: Uuid, patch: LinkPatch) -> Result<Link> {
        let mut data = self.data.write().await;
        let link = data
            .links
            .iter_mut()
            .find(|link| link.id == id)
            .ok_or_else(|| LinkBioError::link_not_found(id))?;
        link.apply(patch);
        Ok(link.clone())
    }

    /// Returns whether a record was actually removed.
    pub async fn remove_link(&self, id: Uuid) -> bool {
        let mut data = self.data.write().await;
        let before = data.links.len();
        data.links.retain(|link| link.id != id);
        data.links.len() < before
    }

    pub async fn update_profile(&self, patch: ProfilePatch) -> UserProfile {
        let mut data = self.data.write().await;
        data.profile.apply(patch);
        data.profile.clone()
    }

    /// Full copy of the current state, for persistence.
    pub async fn snapshot(&self) -> LinkBioData {
        self.data.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed;
    use std::collections::HashSet;

    fn store() -> MemoryStore {
        MemoryStore::new(seed::generate(Some(7)))
    }

    fn draft(title: &str, order: i32) -> LinkDraft {
        LinkDraft {
            title: title.to_string(),
            url: format!("https://example.com/{}", order),
            is_active: true,
            icon: Default::default(),
            order,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_distinct_ids() {
        let store = store();
        let mut ids = HashSet::new();

        for i in 0..10 {
            let link = store.insert_link(draft("Link", i)).await;
            assert!(ids.insert(link.id));
        }
    }

    #[tokio::test]
    async fn test_insert_preserves_insertion_order() {
        let store = store();
        let first = store.insert_link(draft("First", 4)).await;
        let second = store.insert_link(draft("Second", 5)).await;

        let links = store.links().await;
        let tail: Vec<_> = links.iter().rev().take(2).rev().map(|l| l.id).collect();
        assert_eq!(tail, vec![first.id, second.id]);
    }

    #[tokio::test]
    async fn test_update_link_missing_id_is_not_found() {
        let store = store();
        let result = store.update_link(Uuid::new_v4(), LinkPatch::default()).await;

        assert!(matches!(
            result,
            Err(LinkBioError::NotFoundError { .. })
        ));
    }

    #[tokio::test]
    async fn test_update_link_leaves_other_fields_untouched() {
        let store = store();
        let link = store.insert_link(draft("Original", 9)).await;

        let updated = store
            .update_link(
                link.id,
                LinkPatch {
                    title: Some("Renamed".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.url, link.url);
        assert_eq!(updated.icon, link.icon);
        assert_eq!(updated.is_active, link.is_active);
        assert_eq!(updated.order, link.order);
    }

    #[tokio::test]
    async fn test_remove_link_is_idempotent() {
        let store = store();
        let link = store.insert_link(draft("Doomed", 8)).await;

        assert!(store.remove_link(link.id).await);
        assert!(!store.remove_link(link.id).await);
        assert!(store.links().await.iter().all(|l| l.id != link.id));
    }

    #[tokio::test]
    async fn test_update_profile_merges_patch() {
        let store = store();
        let before = store.profile().await;

        let updated = store
            .update_profile(ProfilePatch {
                background_color: Some("#000000".to_string()),
                ..Default::default()
            })
            .await;

        assert_eq!(updated.background_color, "#000000");
        assert_eq!(updated.button_color, before.button_color);
        assert_eq!(updated.username, before.username);

        // The change is visible to the next read, not just the returned copy.
        assert_eq!(store.profile().await.background_color, "#000000");
    }

    #[test]
    fn test_snapshot_round_trips_state() {
        tokio_test::block_on(async {
            let store = store();
            let link = store.insert_link(draft("Extra", 4)).await;

            let snapshot = store.snapshot().await;
            assert!(snapshot.links.iter().any(|l| l.id == link.id));

            let restored = MemoryStore::new(snapshot);
            assert_eq!(restored.links().await.len(), store.links().await.len());
        });
    }
}
