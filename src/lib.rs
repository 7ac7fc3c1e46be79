pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::snapshot::FileSnapshotStore;
pub use core::{seed, service::SimpleLinkBioService, store::MemoryStore};
pub use domain::model::{Icon, Link, LinkBioData, LinkDraft, LinkPatch, ProfilePatch, UserProfile};
pub use domain::ports::{ConfigProvider, LinkBioService, SnapshotStore};
pub use utils::error::{LinkBioError, Result};
