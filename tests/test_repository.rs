use std::collections::HashSet;

use promptstash::domain::entry::{AiModel, Category, Entry};
use promptstash::domain::repositories::repository::EntryRepository;
use promptstash::domain::tag::Tag;
use promptstash::infrastructure::repositories::sqlite::repository::SqliteEntryRepository;
use promptstash::util::testing::init_test_env;
use tempfile::TempDir;

fn setup_repository() -> (TempDir, SqliteEntryRepository) {
    init_test_env();
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir.path().join("promptstash.db");
    let repository = SqliteEntryRepository::from_url(db_path.to_str().unwrap())
        .expect("Failed to create repository");
    (temp_dir, repository)
}

fn sample_entry(prompt: &str) -> Entry {
    Entry::new(
        prompt,
        "https://example.com",
        Tag::parse_tags("rust,cli").unwrap(),
        Category::Code,
        AiModel::Claude,
    )
}

#[test]
fn given_fresh_path_when_from_url_then_schema_created_and_empty() {
    let (_temp_dir, repository) = setup_repository();

    let entries = repository.get_all().unwrap();
    assert!(entries.is_empty());
}

#[test]
fn given_existing_database_when_from_url_again_then_idempotent() {
    init_test_env();
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir.path().join("promptstash.db");
    let db_url = db_path.to_str().unwrap();

    let first = SqliteEntryRepository::from_url(db_url).unwrap();
    let mut entry = sample_entry("persisted across opens");
    first.add(&mut entry).unwrap();
    drop(first);

    // Opening again must not touch existing data
    let second = SqliteEntryRepository::from_url(db_url).unwrap();
    let entries = second.get_all().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].prompt, "persisted across opens");
}

#[test]
fn given_n_inserts_when_get_all_then_n_entries_with_unique_ids() {
    let (_temp_dir, repository) = setup_repository();

    for i in 0..5 {
        let mut entry = sample_entry(&format!("prompt {}", i));
        repository.add(&mut entry).unwrap();
        assert!(entry.id.is_some(), "add must stamp the id");
    }

    let entries = repository.get_all().unwrap();
    assert_eq!(entries.len(), 5);

    let ids: HashSet<i32> = entries.iter().map(|e| e.id.unwrap()).collect();
    assert_eq!(ids.len(), 5, "ids must be unique");
}

#[test]
fn given_inserts_when_get_all_then_insertion_order_preserved() {
    let (_temp_dir, repository) = setup_repository();

    for prompt in ["first", "second", "third"] {
        let mut entry = sample_entry(prompt);
        repository.add(&mut entry).unwrap();
    }

    let entries = repository.get_all().unwrap();
    let prompts: Vec<&str> = entries.iter().map(|e| e.prompt.as_str()).collect();
    assert_eq!(prompts, vec!["first", "second", "third"]);

    // Ids are monotonically increasing
    let ids: Vec<i32> = entries.iter().map(|e| e.id.unwrap()).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn given_stored_entry_when_get_by_id_then_fields_round_trip() {
    let (_temp_dir, repository) = setup_repository();

    let mut entry = sample_entry("lookup me");
    repository.add(&mut entry).unwrap();
    let id = entry.id.unwrap();

    let loaded = repository.get_by_id(id).unwrap().unwrap();
    assert_eq!(loaded.prompt, "lookup me");
    assert_eq!(loaded.link, "https://example.com");
    assert_eq!(loaded.category, Category::Code);
    assert_eq!(loaded.ai_model, AiModel::Claude);
    assert_eq!(loaded.formatted_tags(), "cli,rust");
    // Storage keeps second precision only
    assert_eq!(loaded.formatted_date(), entry.formatted_date());
}

#[test]
fn given_unknown_id_when_get_by_id_then_none() {
    let (_temp_dir, repository) = setup_repository();

    let result = repository.get_by_id(99999).unwrap();
    assert!(result.is_none());
}

#[test]
fn given_populated_table_when_emptied_then_get_all_returns_nothing() {
    let (_temp_dir, repository) = setup_repository();

    for i in 0..3 {
        let mut entry = sample_entry(&format!("prompt {}", i));
        repository.add(&mut entry).unwrap();
    }
    assert_eq!(repository.get_all().unwrap().len(), 3);

    repository.empty_prompts_table().unwrap();
    assert!(repository.get_all().unwrap().is_empty());
}

#[test]
fn given_empty_prompt_with_link_when_add_then_stored() {
    let (_temp_dir, repository) = setup_repository();

    let mut entry = Entry::new(
        "",
        "https://example.com/article",
        HashSet::new(),
        Category::General,
        AiModel::Other,
    );
    repository.add(&mut entry).unwrap();

    let entries = repository.get_all().unwrap();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].prompt.is_empty());
}
