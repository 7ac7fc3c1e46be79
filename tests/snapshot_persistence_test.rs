use linkbio::{
    seed, CliConfig, FileSnapshotStore, Icon, LinkBioService, LinkDraft, MemoryStore,
    ProfilePatch, SimpleLinkBioService, SnapshotStore,
};
use std::sync::Arc;
use tempfile::TempDir;

fn test_config() -> CliConfig {
    CliConfig {
        snapshot_path: None,
        seed: Some(9),
        simulate_latency: false,
        verbose: false,
        command: None,
    }
}

#[tokio::test]
async fn test_mutations_survive_a_snapshot_reload() {
    let temp_dir = TempDir::new().unwrap();
    let snapshot = FileSnapshotStore::new(temp_dir.path().join("linkbio.json"));

    // First session: seed, mutate, persist.
    let store = Arc::new(MemoryStore::new(seed::generate(Some(9))));
    let service = SimpleLinkBioService::new(Arc::clone(&store), test_config());

    let created = service
        .create_link(LinkDraft {
            title: "Newsletter".to_string(),
            url: "https://newsletter.example.com".to_string(),
            is_active: true,
            icon: Icon::Globe,
            order: 4,
        })
        .await
        .unwrap();
    service
        .update_profile(ProfilePatch {
            display_name: Some("Creator Studio".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    snapshot.save(&store.snapshot().await).await.unwrap();

    // Second session: load the snapshot into a fresh store.
    let restored = snapshot.load().await.unwrap().unwrap();
    let store = Arc::new(MemoryStore::new(restored));
    let service = SimpleLinkBioService::new(Arc::clone(&store), test_config());

    let profile = service.get_profile().await.unwrap();
    assert_eq!(profile.display_name, "Creator Studio");

    let links = service.get_links().await.unwrap();
    assert_eq!(links.len(), 4);
    let reloaded = links.iter().find(|l| l.id == created.id).unwrap();
    assert_eq!(reloaded.title, "Newsletter");
    assert!(reloaded.is_active);
}

#[tokio::test]
async fn test_snapshot_excludes_deleted_links() {
    let temp_dir = TempDir::new().unwrap();
    let snapshot = FileSnapshotStore::new(temp_dir.path().join("linkbio.json"));

    let data = seed::generate(Some(9));
    let doomed = data.links[0].id;

    let store = Arc::new(MemoryStore::new(data));
    let service = SimpleLinkBioService::new(Arc::clone(&store), test_config());
    service.delete_link(doomed).await.unwrap();

    snapshot.save(&store.snapshot().await).await.unwrap();

    let restored = snapshot.load().await.unwrap().unwrap();
    assert_eq!(restored.links.len(), 2);
    assert!(restored.links.iter().all(|l| l.id != doomed));
}

#[tokio::test]
async fn test_snapshot_file_keeps_original_field_names() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("linkbio.json");
    let snapshot = FileSnapshotStore::new(path.clone());

    snapshot.save(&seed::generate(Some(9))).await.unwrap();

    let raw = std::fs::read_to_string(path).unwrap();
    assert!(raw.contains("\"isActive\""));
    assert!(raw.contains("\"displayName\""));
    assert!(raw.contains("\"backgroundColor\""));
}
