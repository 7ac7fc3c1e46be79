use crate::domain::model::{Link, LinkBioData, LinkDraft, LinkPatch, ProfilePatch, UserProfile};
use crate::utils::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// The sole interface through which callers read or mutate profile and
/// link state. A mutation's effect is visible to the next read of the
/// same store.
#[async_trait]
pub trait LinkBioService: Send + Sync {
    async fn get_profile(&self) -> Result<UserProfile>;
    /// Links in insertion order.
    async fn get_links(&self) -> Result<Vec<Link>>;
    /// Allocates a fresh id and stores the record.
    async fn create_link(&self, draft: LinkDraft) -> Result<Link>;
    /// Field-wise merge of the patch; fails with `NotFoundError` when the
    /// id is absent.
    async fn update_link(&self, id: Uuid, patch: LinkPatch) -> Result<Link>;
    /// Idempotent: deleting an id that is already gone is not an error.
    async fn delete_link(&self, id: Uuid) -> Result<()>;
    async fn update_profile(&self, patch: ProfilePatch) -> Result<UserProfile>;
}

pub trait SnapshotStore: Send + Sync {
    /// `Ok(None)` when no snapshot has been written yet.
    fn load(&self) -> impl std::future::Future<Output = Result<Option<LinkBioData>>> + Send;
    fn save(
        &self,
        data: &LinkBioData,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn simulate_latency(&self) -> bool;
    fn seed(&self) -> Option<u64>;
    fn snapshot_path(&self) -> Option<&str>;
}
