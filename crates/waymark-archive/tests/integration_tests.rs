//! Integration tests for waymark-archive
//!
//! These verify the full save/load/clear cycle, including reopening a real
//! database file the way the tool server does at startup.

use waymark_archive::SqliteArchive;
use waymark_domain::{Resource, ResourceKind, Roadmap, RoadmapArchive, RoadmapStatus};
use waymark_store::RoadmapStore;

fn sample_roadmap() -> Roadmap {
    let mut roadmap = Roadmap::new();
    roadmap.status = RoadmapStatus::Active;
    roadmap.push_module("Rust Basics".to_string(), "The ground floor".to_string(), 20);
    roadmap.push_module("Async Rust".to_string(), "Futures and executors".to_string(), 30);
    roadmap.modules[0].push_topic("Ownership".to_string(), "Moves and borrows".to_string(), 40);
    roadmap.modules[0].topics[0].push_concept("Moves".to_string(), "Value transfer".to_string());
    roadmap.modules[0].topics[0].push_concept("Borrows".to_string(), "Shared access".to_string());
    roadmap.modules[0].push_resource(Resource::new(
        "The Book".to_string(),
        "https://doc.rust-lang.org/book/".to_string(),
        ResourceKind::Book,
        "rust-lang.org".to_string(),
        "The canonical introduction".to_string(),
    ));
    roadmap.modules[1].push_topic("Futures".to_string(), String::new(), 10);
    roadmap
}

#[test]
fn test_archive_initialization() {
    let archive = SqliteArchive::new(":memory:");
    assert!(archive.is_ok(), "Archive should initialize successfully");
}

#[test]
fn test_empty_archive_loads_nothing() {
    let archive = SqliteArchive::new(":memory:").unwrap();
    assert!(archive.load().unwrap().is_none());
}

#[test]
fn test_save_and_load_round_trip() {
    let mut archive = SqliteArchive::new(":memory:").unwrap();
    let roadmap = sample_roadmap();

    archive.save(&roadmap).unwrap();
    let loaded = archive.load().unwrap().expect("roadmap should be present");

    assert_eq!(loaded.id, roadmap.id);
    assert_eq!(loaded.status, roadmap.status);
    assert_eq!(loaded.created_at, roadmap.created_at);
    assert_eq!(loaded.last_modified_at, roadmap.last_modified_at);
    assert_eq!(loaded.modules, roadmap.modules);
}

#[test]
fn test_save_replaces_previous_tree() {
    let mut archive = SqliteArchive::new(":memory:").unwrap();
    archive.save(&sample_roadmap()).unwrap();

    let mut replacement = Roadmap::new();
    replacement.push_module("Fresh Start".to_string(), String::new(), 5);
    archive.save(&replacement).unwrap();

    let loaded = archive.load().unwrap().unwrap();
    assert_eq!(loaded.id, replacement.id);
    assert_eq!(loaded.modules.len(), 1);
    assert_eq!(loaded.modules[0].title, "Fresh Start");
}

#[test]
fn test_clear_removes_the_roadmap() {
    let mut archive = SqliteArchive::new(":memory:").unwrap();
    archive.save(&sample_roadmap()).unwrap();

    archive.clear().unwrap();
    assert!(archive.load().unwrap().is_none());
}

#[test]
fn test_clear_on_empty_archive_is_fine() {
    let mut archive = SqliteArchive::new(":memory:").unwrap();
    assert!(archive.clear().is_ok());
}

#[test]
fn test_archive_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("waymark.db");
    let roadmap = sample_roadmap();

    {
        let mut archive = SqliteArchive::new(&path).unwrap();
        archive.save(&roadmap).unwrap();
    }

    let archive = SqliteArchive::new(&path).unwrap();
    let loaded = archive.load().unwrap().expect("roadmap should survive reopen");
    assert_eq!(loaded.id, roadmap.id);
    assert_eq!(loaded.modules, roadmap.modules);
    assert_eq!(loaded.created_at, roadmap.created_at);
}

#[test]
fn test_loaded_orders_match_saved_orders() {
    let mut roadmap = Roadmap::new();
    for title in ["A", "B", "C"] {
        roadmap.push_module(title.to_string(), String::new(), 1);
    }
    // remove the middle module so the saved orders come from a renumber
    roadmap.remove_module("B");

    let mut archive = SqliteArchive::new(":memory:").unwrap();
    archive.save(&roadmap).unwrap();
    let loaded = archive.load().unwrap().unwrap();

    let orders: Vec<u32> = loaded.modules.iter().map(|m| m.order).collect();
    assert_eq!(orders, vec![1, 2]);
    assert_eq!(loaded.modules[1].title, "C");
}

#[test]
fn test_out_of_range_confidence_survives_verbatim() {
    let mut roadmap = Roadmap::new();
    roadmap.push_module("M".to_string(), String::new(), 1);
    roadmap.modules[0].push_topic("T".to_string(), String::new(), 120);

    let mut archive = SqliteArchive::new(":memory:").unwrap();
    archive.save(&roadmap).unwrap();
    let loaded = archive.load().unwrap().unwrap();

    // creation-time scores are not clamped, and the archive must not
    // clamp them either
    assert_eq!(loaded.modules[0].topics[0].confidence_score, 120);
}

#[test]
fn test_resource_kinds_survive_the_text_column() {
    let mut roadmap = Roadmap::new();
    roadmap.push_module("M".to_string(), String::new(), 1);
    let kinds = [
        ResourceKind::Documentation,
        ResourceKind::Book,
        ResourceKind::Tutorial,
        ResourceKind::Video,
        ResourceKind::Game,
        ResourceKind::Article,
        ResourceKind::Course,
    ];
    for (i, kind) in kinds.iter().enumerate() {
        roadmap.modules[0].push_resource(Resource::new(
            format!("R{}", i),
            "https://example.com".to_string(),
            *kind,
            String::new(),
            String::new(),
        ));
    }

    let mut archive = SqliteArchive::new(":memory:").unwrap();
    archive.save(&roadmap).unwrap();
    let loaded = archive.load().unwrap().unwrap();

    let loaded_kinds: Vec<ResourceKind> =
        loaded.modules[0].resources.iter().map(|r| r.kind).collect();
    assert_eq!(loaded_kinds, kinds);
}

#[test]
fn test_store_session_round_trip() {
    // the wiring the tool server does: run a session through the store,
    // archive it, revive it into a fresh store
    let store = RoadmapStore::new();
    store.initialize_roadmap("profile");
    store.add_module("Basics", "Start here", 5);
    store.add_topic("Basics", "Syntax", "", 40);

    let mut archive = SqliteArchive::new(":memory:").unwrap();
    archive.save(&store.current_roadmap().unwrap()).unwrap();

    let revived = RoadmapStore::new();
    revived.set_roadmap(archive.load().unwrap().unwrap());
    assert_eq!(revived.all_modules(), "1. Basics (5h) - 1 topics, 0 resources");
    assert_eq!(revived.module_topics("Basics"), "1. Syntax (Confidence: 40%) - 0 concepts");
}
