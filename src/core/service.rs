use crate::core::store::MemoryStore;
use crate::domain::model::{Link, LinkDraft, LinkPatch, ProfilePatch, UserProfile};
use crate::domain::ports::{ConfigProvider, LinkBioService};
use crate::utils::error::Result;
use crate::utils::validation;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

// Per-operation latencies measured from the hosted API; applied only when
// the config asks for them so callers can exercise loading states.
const GET_PROFILE_DELAY: Duration = Duration::from_millis(800);
const GET_LINKS_DELAY: Duration = Duration::from_millis(600);
const UPDATE_LINK_DELAY: Duration = Duration::from_millis(500);
const CREATE_LINK_DELAY: Duration = Duration::from_millis(700);
const DELETE_LINK_DELAY: Duration = Duration::from_millis(400);
const UPDATE_PROFILE_DELAY: Duration = Duration::from_millis(600);

pub struct SimpleLinkBioService<C: ConfigProvider> {
    store: Arc<MemoryStore>,
    config: C,
}

impl<C: ConfigProvider> SimpleLinkBioService<C> {
    pub fn new(store: Arc<MemoryStore>, config: C) -> Self {
        Self { store, config }
    }

    // Sleeps before the store is touched, so a caller that abandons the
    // future mid-delay has observed no partial effect.
    async fn pause(&self, delay: Duration) {
        if self.config.simulate_latency() {
            tokio::time::sleep(delay).await;
        }
    }

    fn validate_link_patch(patch: &LinkPatch) -> Result<()> {
        if let Some(title) = &patch.title {
            validation::validate_non_empty_string("title", title)?;
        }
        if let Some(url) = &patch.url {
            validation::validate_url("url", url)?;
        }
        Ok(())
    }

    fn validate_profile_patch(patch: &ProfilePatch) -> Result<()> {
        if let Some(username) = &patch.username {
            validation::validate_non_empty_string("username", username)?;
        }
        if let Some(background_color) = &patch.background_color {
            validation::validate_hex_color("background_color", background_color)?;
        }
        if let Some(button_color) = &patch.button_color {
            validation::validate_hex_color("button_color", button_color)?;
        }
        Ok(())
    }
}

#[async_trait]
impl<C: ConfigProvider> LinkBioService for SimpleLinkBioService<C> {
    async fn get_profile(&self) -> Result<UserProfile> {
        self.pause(GET_PROFILE_DELAY).await;
        tracing::debug!("Fetching profile");
        Ok(self.store.profile().await)
    }

    async fn get_links(&self) -> Result<Vec<Link>> {
        self.pause(GET_LINKS_DELAY).await;
        let links = self.store.links().await;
        tracing::debug!("Fetched {} links", links.len());
        Ok(links)
    }

    async fn create_link(&self, draft: LinkDraft) -> Result<Link> {
        self.pause(CREATE_LINK_DELAY).await;
        validation::validate_non_empty_string("title", &draft.title)?;
        validation::validate_url("url", &draft.url)?;

        let link = self.store.insert_link(draft).await;
        tracing::info!(id = %link.id, title = %link.title, "Created link");
        Ok(link)
    }

    async fn update_link(&self, id: Uuid, patch: LinkPatch) -> Result<Link> {
        self.pause(UPDATE_LINK_DELAY).await;
        Self::validate_link_patch(&patch)?;

        let link = self.store.update_link(id, patch).await?;
        tracing::info!(id = %link.id, "Updated link");
        Ok(link)
    }

    async fn delete_link(&self, id: Uuid) -> Result<()> {
        self.pause(DELETE_LINK_DELAY).await;

        // Idempotent: a repeat delete of the same id is a no-op.
        if self.store.remove_link(id).await {
            tracing::info!(id = %id, "Deleted link");
        } else {
            tracing::debug!(id = %id, "Delete ignored, link already gone");
        }
        Ok(())
    }

    async fn update_profile(&self, patch: ProfilePatch) -> Result<UserProfile> {
        self.pause(UPDATE_PROFILE_DELAY).await;
        Self::validate_profile_patch(&patch)?;

        let profile = self.store.update_profile(patch).await;
        tracing::info!(username = %profile.username, "Updated profile");
        Ok(profile)
    }
}
