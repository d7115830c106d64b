//! End-to-end engine behavior over the in-memory store.

use std::sync::Arc;

use stringlens::engine::Engine;
use stringlens::error::EngineError;
use stringlens::models::FilterSet;
use stringlens::store::memory::MemoryStore;

fn engine() -> Engine {
    Engine::new(Arc::new(MemoryStore::new()))
}

async fn seed(engine: &Engine, values: &[&str]) {
    for value in values {
        engine.analyze_and_store(value).await.unwrap();
    }
}

#[tokio::test]
async fn analyze_store_and_retrieve_roundtrip() {
    let engine = engine();
    let stored = engine.analyze_and_store("Was it a car or a cat I saw").await.unwrap();

    assert_eq!(stored.id, stored.sha256_hash);
    assert!(stored.is_palindrome);
    assert_eq!(stored.word_count, 9);

    let by_value = engine.get_one("was it a car or a cat i saw").await.unwrap();
    assert_eq!(by_value.id, stored.id);
}

#[tokio::test]
async fn identical_text_conflicts_but_case_variants_do_not() {
    let engine = engine();
    let upper = engine.analyze_and_store("Hi").await.unwrap();

    let duplicate = engine.analyze_and_store("Hi").await;
    assert!(matches!(duplicate, Err(EngineError::AlreadyExists)));

    // Case-sensitive identity: "hi" is a different record
    let lowered = engine.analyze_and_store("hi").await.unwrap();
    assert_ne!(lowered.id, upper.id);
}

#[tokio::test]
async fn structured_filters_narrow_the_listing() {
    let engine = engine();
    seed(&engine, &["racecar", "level up", "hello world", "noon"]).await;

    let palindromes = engine
        .list_filtered(FilterSet {
            is_palindrome: Some(true),
            ..Default::default()
        })
        .await
        .unwrap();
    let mut values: Vec<&str> = palindromes.data.iter().map(|r| r.value.as_str()).collect();
    values.sort();
    assert_eq!(values, ["noon", "racecar"]);

    let two_words_with_l = engine
        .list_filtered(FilterSet {
            word_count: Some(2),
            contains_character: Some("l".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    let mut values: Vec<&str> = two_words_with_l.data.iter().map(|r| r.value.as_str()).collect();
    values.sort();
    assert_eq!(values, ["hello world", "level up"]);
    assert!(two_words_with_l.filters_applied.is_some());
}

#[tokio::test]
async fn illegal_structured_filters_are_rejected_before_listing() {
    let engine = engine();
    let result = engine
        .list_filtered(FilterSet {
            min_length: Some(5),
            max_length: Some(3),
            ..Default::default()
        })
        .await;
    assert!(matches!(result, Err(EngineError::InvalidFilter(_))));
}

#[tokio::test]
async fn natural_language_query_end_to_end() {
    let engine = engine();
    seed(&engine, &["racecar", "ab", "hello", "noon here"]).await;

    let response = engine
        .filter_by_natural_language("palindromic strings longer than 5 characters")
        .await
        .unwrap();
    assert_eq!(response.count, 1);
    assert_eq!(response.data[0].value, "racecar");
    assert_eq!(response.interpreted_query.parsed_filters.is_palindrome, Some(true));
    assert_eq!(response.interpreted_query.parsed_filters.min_length, Some(6));

    let short = engine
        .filter_by_natural_language("strings shorter than 3")
        .await
        .unwrap();
    assert_eq!(short.count, 1);
    assert_eq!(short.data[0].value, "ab");
}

#[tokio::test]
async fn unparseable_and_conflicting_queries_fail_distinctly() {
    let engine = engine();

    let unparseable = engine.filter_by_natural_language("banana").await;
    assert!(matches!(unparseable, Err(EngineError::InvalidQuery)));

    let conflicting = engine
        .filter_by_natural_language("longer than 10 but shorter than 5")
        .await;
    assert!(matches!(conflicting, Err(EngineError::ConflictingFilters)));
}

#[tokio::test]
async fn delete_by_value_is_case_insensitive_and_strict_on_absence() {
    let engine = engine();
    seed(&engine, &["Ephemeral"]).await;

    engine.delete("EPHEMERAL").await.unwrap();
    assert!(matches!(
        engine.get_one("Ephemeral").await,
        Err(EngineError::NotFound)
    ));
    assert!(matches!(
        engine.delete("Ephemeral").await,
        Err(EngineError::NotFound)
    ));
}
