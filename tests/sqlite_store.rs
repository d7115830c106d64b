//! SQLite store behavior against a real database file in a tempdir.

use std::sync::Arc;

use tempfile::TempDir;

use stringlens::db;
use stringlens::engine::Engine;
use stringlens::migrate;
use stringlens::models::AnalyzedRecord;
use stringlens::store::sqlite::SqliteStore;
use stringlens::store::{PutOutcome, RecordStore};
use stringlens::analyzer;
use chrono::Utc;

async fn store() -> (TempDir, SqliteStore) {
    let tmp = TempDir::new().unwrap();
    let pool = db::connect_path(&tmp.path().join("data").join("strings.sqlite"))
        .await
        .unwrap();
    migrate::run_migrations(&pool).await.unwrap();
    (tmp, SqliteStore::new(pool))
}

fn record(value: &str) -> AnalyzedRecord {
    let props = analyzer::analyze(value).unwrap();
    AnalyzedRecord {
        id: props.sha256_hash.clone(),
        value: value.to_string(),
        length: props.length,
        is_palindrome: props.is_palindrome,
        unique_characters: props.unique_characters,
        word_count: props.word_count,
        sha256_hash: props.sha256_hash,
        character_frequency: props.character_frequency_map,
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let tmp = TempDir::new().unwrap();
    let pool = db::connect_path(&tmp.path().join("strings.sqlite"))
        .await
        .unwrap();
    migrate::run_migrations(&pool).await.unwrap();
    migrate::run_migrations(&pool).await.unwrap();
}

#[tokio::test]
async fn put_then_get_preserves_the_record() {
    let (_tmp, store) = store().await;
    let stored = record("Deja Vu");

    assert_eq!(store.put(&stored).await.unwrap(), PutOutcome::Inserted);

    let by_id = store.get_by_id(&stored.id).await.unwrap().unwrap();
    assert_eq!(by_id.value, "Deja Vu");
    assert_eq!(by_id.character_frequency, stored.character_frequency);
    // Timestamps survive at second precision
    assert_eq!(by_id.created_at.timestamp(), stored.created_at.timestamp());
}

#[tokio::test]
async fn duplicate_id_reports_conflict_and_keeps_original() {
    let (_tmp, store) = store().await;
    let original = record("only once");

    assert_eq!(store.put(&original).await.unwrap(), PutOutcome::Inserted);
    assert_eq!(store.put(&original).await.unwrap(), PutOutcome::Conflict);

    let all = store.list_all().await.unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn value_lookup_and_delete_fold_case() {
    let (_tmp, store) = store().await;
    store.put(&record("MixedCase Words")).await.unwrap();

    let found = store.get_by_value("mixedcase words").await.unwrap();
    assert_eq!(found.unwrap().value, "MixedCase Words");

    assert!(store.delete_by_value("MIXEDCASE WORDS").await.unwrap());
    assert!(!store.delete_by_value("MixedCase Words").await.unwrap());
    assert!(store.get_by_value("MixedCase Words").await.unwrap().is_none());
}

#[tokio::test]
async fn engine_runs_unchanged_over_sqlite() {
    let (_tmp, store) = store().await;
    let engine = Engine::new(Arc::new(store));

    engine.analyze_and_store("racecar").await.unwrap();
    engine.analyze_and_store("not one").await.unwrap();

    let response = engine
        .filter_by_natural_language("palindromic strings")
        .await
        .unwrap();
    assert_eq!(response.count, 1);
    assert_eq!(response.data[0].value, "racecar");
}
