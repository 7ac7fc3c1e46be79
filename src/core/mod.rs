pub mod seed;
pub mod service;
pub mod store;

pub use crate::domain::model::{
    Icon, Link, LinkBioData, LinkDraft, LinkPatch, ProfilePatch, UserProfile,
};
pub use crate::domain::ports::{ConfigProvider, LinkBioService, SnapshotStore};
pub use crate::utils::error::Result;
