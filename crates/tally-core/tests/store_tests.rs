use jiff::Timestamp;
use tally_core::{
    models::{NewTodo, Priority, TodoFilter, TodoPatch, TodoStatus},
    page::{PageRequest, SortField, SortOrder},
    query::Predicate,
    store::{GroupField, MemoryStore, SqliteStore, Store},
};
use tempfile::NamedTempFile;

/// Helper function to create a temporary SQLite store for testing
fn create_sqlite_store() -> (NamedTempFile, SqliteStore) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let store = SqliteStore::new(temp_file.path()).expect("Failed to create test store");
    (temp_file, store)
}

fn parse_ts(value: &str) -> Timestamp {
    value.parse().expect("valid timestamp")
}

fn page_of(limit: u32) -> tally_core::page::PageSpec {
    PageRequest {
        limit: Some(limit),
        ..Default::default()
    }
    .resolve()
}

fn sorted_page(sort_by: SortField, sort_order: SortOrder) -> tally_core::page::PageSpec {
    PageRequest {
        limit: Some(50),
        sort_by: Some(sort_by),
        sort_order: Some(sort_order),
        ..Default::default()
    }
    .resolve()
}

#[test]
fn test_store_initialization() {
    let (temp_file, _store) = create_sqlite_store();

    assert!(temp_file.path().exists());
}

#[test]
fn test_insert_assigns_sequential_ids() {
    let (_temp_file, store) = create_sqlite_store();

    let first = store
        .insert(NewTodo::new("First"))
        .expect("Failed to insert todo");
    let second = store
        .insert(NewTodo::new("Second"))
        .expect("Failed to insert todo");

    assert!(first.id > 0);
    assert_eq!(second.id, first.id + 1);
}

#[test]
fn test_insert_round_trips_all_fields() {
    let (_temp_file, store) = create_sqlite_store();

    let due = parse_ts("2025-06-01T12:30:00Z");
    let inserted = store
        .insert(NewTodo {
            title: "Everything set".to_string(),
            description: Some("With a description".to_string()),
            priority: Priority::Urgent,
            due_date: Some(due),
            tags: vec!["alpha".to_string(), "beta".to_string()],
        })
        .expect("Failed to insert todo");

    let fetched = store
        .find_by_id(inserted.id)
        .expect("Failed to find todo")
        .expect("Todo should exist");

    assert_eq!(fetched, inserted);
    assert_eq!(fetched.description, Some("With a description".to_string()));
    assert_eq!(fetched.priority, Priority::Urgent);
    assert_eq!(fetched.due_date, Some(due));
    assert_eq!(fetched.tags, vec!["alpha".to_string(), "beta".to_string()]);
    assert_eq!(fetched.status, TodoStatus::Todo);
    assert!(!fetched.completed);
}

#[test]
fn test_find_by_id_missing() {
    let (_temp_file, store) = create_sqlite_store();

    let result = store.find_by_id(42).expect("Lookup should not fail");
    assert!(result.is_none());
}

#[test]
fn test_update_by_id_partial() {
    let (_temp_file, store) = create_sqlite_store();

    let inserted = store
        .insert(NewTodo {
            title: "Original".to_string(),
            description: Some("Keep this".to_string()),
            ..Default::default()
        })
        .expect("Failed to insert todo");

    let updated = store
        .update_by_id(
            inserted.id,
            TodoPatch {
                title: Some("Changed".to_string()),
                status: Some(TodoStatus::InProgress),
                ..Default::default()
            },
        )
        .expect("Failed to update todo")
        .expect("Todo should exist");

    assert_eq!(updated.title, "Changed");
    assert_eq!(updated.status, TodoStatus::InProgress);
    assert_eq!(updated.description, Some("Keep this".to_string()));
    assert!(updated.updated_at >= inserted.updated_at);
}

#[test]
fn test_update_by_id_clear_due_date() {
    let (_temp_file, store) = create_sqlite_store();

    let inserted = store
        .insert(NewTodo {
            title: "Had a deadline".to_string(),
            due_date: Some(parse_ts("2025-06-01T00:00:00Z")),
            ..Default::default()
        })
        .expect("Failed to insert todo");

    let updated = store
        .update_by_id(
            inserted.id,
            TodoPatch {
                clear_due_date: true,
                ..Default::default()
            },
        )
        .expect("Failed to update todo")
        .expect("Todo should exist");

    assert_eq!(updated.due_date, None);
}

#[test]
fn test_update_by_id_missing() {
    let (_temp_file, store) = create_sqlite_store();

    let result = store
        .update_by_id(
            999,
            TodoPatch {
                title: Some("Nobody".to_string()),
                ..Default::default()
            },
        )
        .expect("Update should not fail");

    assert!(result.is_none());
}

#[test]
fn test_delete_by_id() {
    let (_temp_file, store) = create_sqlite_store();

    let inserted = store
        .insert(NewTodo::new("Doomed"))
        .expect("Failed to insert todo");

    assert!(store.delete_by_id(inserted.id).expect("Delete failed"));
    assert!(!store.delete_by_id(inserted.id).expect("Delete failed"));
    assert!(store
        .find_by_id(inserted.id)
        .expect("Lookup failed")
        .is_none());
}

#[test]
fn test_delete_many_with_predicate() {
    let (_temp_file, store) = create_sqlite_store();

    let keep = store
        .insert(NewTodo::new("Pending"))
        .expect("Failed to insert todo");
    for title in ["Done A", "Done B"] {
        let todo = store
            .insert(NewTodo::new(title))
            .expect("Failed to insert todo");
        store
            .update_by_id(
                todo.id,
                TodoPatch {
                    completed: Some(true),
                    status: Some(TodoStatus::Completed),
                    ..Default::default()
                },
            )
            .expect("Failed to update todo");
    }

    let predicate = Predicate::from(&TodoFilter::completed_only());
    let removed = store.delete_many(&predicate).expect("Delete failed");

    assert_eq!(removed, 2);
    assert_eq!(store.count(&Predicate::default()).expect("Count failed"), 1);
    assert!(store
        .find_by_id(keep.id)
        .expect("Lookup failed")
        .is_some());
}

#[test]
fn test_count_with_predicate() {
    let (_temp_file, store) = create_sqlite_store();

    store
        .insert(NewTodo {
            title: "High one".to_string(),
            priority: Priority::High,
            ..Default::default()
        })
        .expect("Failed to insert todo");
    store
        .insert(NewTodo {
            title: "High two".to_string(),
            priority: Priority::High,
            ..Default::default()
        })
        .expect("Failed to insert todo");
    store
        .insert(NewTodo::new("Medium"))
        .expect("Failed to insert todo");

    let filter = TodoFilter {
        priority: Some(Priority::High),
        ..Default::default()
    };

    assert_eq!(
        store
            .count(&Predicate::from(&filter))
            .expect("Count failed"),
        2
    );
    assert_eq!(store.count(&Predicate::default()).expect("Count failed"), 3);
}

#[test]
fn test_find_many_status_and_completed_filters() {
    let (_temp_file, store) = create_sqlite_store();

    let in_progress = store
        .insert(NewTodo::new("Working"))
        .expect("Failed to insert todo");
    store
        .update_by_id(
            in_progress.id,
            TodoPatch {
                status: Some(TodoStatus::InProgress),
                ..Default::default()
            },
        )
        .expect("Failed to update todo");
    let done = store
        .insert(NewTodo::new("Finished"))
        .expect("Failed to insert todo");
    store
        .update_by_id(
            done.id,
            TodoPatch {
                completed: Some(true),
                status: Some(TodoStatus::Completed),
                ..Default::default()
            },
        )
        .expect("Failed to update todo");
    store
        .insert(NewTodo::new("Untouched"))
        .expect("Failed to insert todo");

    let filter = TodoFilter {
        status: Some(TodoStatus::InProgress),
        ..Default::default()
    };
    let found = store
        .find_many(&Predicate::from(&filter), &page_of(10))
        .expect("Find failed");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Working");

    let filter = TodoFilter {
        completed: Some(false),
        ..Default::default()
    };
    let found = store
        .find_many(&Predicate::from(&filter), &page_of(10))
        .expect("Find failed");
    assert_eq!(found.len(), 2);
}

#[test]
fn test_find_many_tags_any_of() {
    let (_temp_file, store) = create_sqlite_store();

    store
        .insert(NewTodo {
            title: "Tagged work".to_string(),
            tags: vec!["work".to_string()],
            ..Default::default()
        })
        .expect("Failed to insert todo");
    store
        .insert(NewTodo {
            title: "Tagged home and garden".to_string(),
            tags: vec!["home".to_string(), "garden".to_string()],
            ..Default::default()
        })
        .expect("Failed to insert todo");
    store
        .insert(NewTodo::new("Untagged"))
        .expect("Failed to insert todo");

    // Any shared tag is enough
    let filter = TodoFilter {
        tags: vec!["garden".to_string(), "work".to_string()],
        ..Default::default()
    };
    let found = store
        .find_many(&Predicate::from(&filter), &page_of(10))
        .expect("Find failed");
    assert_eq!(found.len(), 2);

    let filter = TodoFilter {
        tags: vec!["missing".to_string()],
        ..Default::default()
    };
    let found = store
        .find_many(&Predicate::from(&filter), &page_of(10))
        .expect("Find failed");
    assert!(found.is_empty());
}

#[test]
fn test_find_many_search_matches_title_and_description() {
    let (_temp_file, store) = create_sqlite_store();

    store
        .insert(NewTodo::new("Refactor the PARSER module"))
        .expect("Failed to insert todo");
    store
        .insert(NewTodo {
            title: "Cleanup".to_string(),
            description: Some("remove the old parser shims".to_string()),
            ..Default::default()
        })
        .expect("Failed to insert todo");
    store
        .insert(NewTodo::new("Unrelated"))
        .expect("Failed to insert todo");

    let filter = TodoFilter {
        search: Some("parser".to_string()),
        ..Default::default()
    };
    let found = store
        .find_many(&Predicate::from(&filter), &page_of(10))
        .expect("Find failed");

    assert_eq!(found.len(), 2);
}

#[test]
fn test_find_many_search_escapes_like_wildcards() {
    let (_temp_file, store) = create_sqlite_store();

    store
        .insert(NewTodo::new("Progress 100% done"))
        .expect("Failed to insert todo");
    store
        .insert(NewTodo::new("Progress 1000 done"))
        .expect("Failed to insert todo");
    store
        .insert(NewTodo::new("rename snake_case fields"))
        .expect("Failed to insert todo");
    store
        .insert(NewTodo::new("rename snakeXcase fields"))
        .expect("Failed to insert todo");

    // A literal percent sign must not act as a wildcard
    let filter = TodoFilter {
        search: Some("0% d".to_string()),
        ..Default::default()
    };
    let found = store
        .find_many(&Predicate::from(&filter), &page_of(10))
        .expect("Find failed");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Progress 100% done");

    // Same for underscore
    let filter = TodoFilter {
        search: Some("e_c".to_string()),
        ..Default::default()
    };
    let found = store
        .find_many(&Predicate::from(&filter), &page_of(10))
        .expect("Find failed");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "rename snake_case fields");
}

#[test]
fn test_find_many_due_bounds_inclusive() {
    let (_temp_file, store) = create_sqlite_store();

    let due = parse_ts("2025-06-01T00:00:00Z");
    store
        .insert(NewTodo {
            title: "On the boundary".to_string(),
            due_date: Some(due),
            ..Default::default()
        })
        .expect("Failed to insert todo");
    store
        .insert(NewTodo {
            title: "Well after".to_string(),
            due_date: Some(parse_ts("2025-07-01T00:00:00Z")),
            ..Default::default()
        })
        .expect("Failed to insert todo");
    store
        .insert(NewTodo::new("No due date"))
        .expect("Failed to insert todo");

    let filter = TodoFilter {
        due_before: Some(due),
        ..Default::default()
    };
    let found = store
        .find_many(&Predicate::from(&filter), &page_of(10))
        .expect("Find failed");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "On the boundary");

    let filter = TodoFilter {
        due_after: Some(due),
        ..Default::default()
    };
    let found = store
        .find_many(&Predicate::from(&filter), &page_of(10))
        .expect("Find failed");
    // Both dated todos are at or after the bound; the undated one never
    // matches a due filter
    assert_eq!(found.len(), 2);
}

#[test]
fn test_find_many_default_order_newest_first() {
    let (_temp_file, store) = create_sqlite_store();

    for title in ["oldest", "middle", "newest"] {
        store
            .insert(NewTodo::new(title))
            .expect("Failed to insert todo");
    }

    let found = store
        .find_many(&Predicate::default(), &page_of(10))
        .expect("Find failed");

    let titles: Vec<&str> = found.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["newest", "middle", "oldest"]);
}

#[test]
fn test_find_many_order_due_date_nulls_last() {
    let (_temp_file, store) = create_sqlite_store();

    store
        .insert(NewTodo::new("Undated"))
        .expect("Failed to insert todo");
    store
        .insert(NewTodo {
            title: "June".to_string(),
            due_date: Some(parse_ts("2025-06-01T00:00:00Z")),
            ..Default::default()
        })
        .expect("Failed to insert todo");
    store
        .insert(NewTodo {
            title: "May".to_string(),
            due_date: Some(parse_ts("2025-05-01T00:00:00Z")),
            ..Default::default()
        })
        .expect("Failed to insert todo");

    let found = store
        .find_many(
            &Predicate::default(),
            &sorted_page(SortField::DueDate, SortOrder::Asc),
        )
        .expect("Find failed");
    let titles: Vec<&str> = found.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["May", "June", "Undated"]);

    // Undated todos sink to the end in both directions
    let found = store
        .find_many(
            &Predicate::default(),
            &sorted_page(SortField::DueDate, SortOrder::Desc),
        )
        .expect("Find failed");
    let titles: Vec<&str> = found.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["June", "May", "Undated"]);
}

#[test]
fn test_find_many_order_priority_semantic() {
    let (_temp_file, store) = create_sqlite_store();

    for (title, priority) in [
        ("medium", Priority::Medium),
        ("urgent", Priority::Urgent),
        ("low", Priority::Low),
        ("high", Priority::High),
    ] {
        store
            .insert(NewTodo {
                title: title.to_string(),
                priority,
                ..Default::default()
            })
            .expect("Failed to insert todo");
    }

    let found = store
        .find_many(
            &Predicate::default(),
            &sorted_page(SortField::Priority, SortOrder::Desc),
        )
        .expect("Find failed");

    // Urgency rank, not label text: alphabetically "high" would sort
    // below "low"
    let titles: Vec<&str> = found.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["urgent", "high", "medium", "low"]);
}

#[test]
fn test_find_many_order_title_case_insensitive() {
    let (_temp_file, store) = create_sqlite_store();

    for title in ["banana", "Apple", "cherry"] {
        store
            .insert(NewTodo::new(title))
            .expect("Failed to insert todo");
    }

    let found = store
        .find_many(
            &Predicate::default(),
            &sorted_page(SortField::Title, SortOrder::Asc),
        )
        .expect("Find failed");

    let titles: Vec<&str> = found.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Apple", "banana", "cherry"]);
}

#[test]
fn test_find_many_skip_and_limit() {
    let (_temp_file, store) = create_sqlite_store();

    for i in 1..=5 {
        store
            .insert(NewTodo::new(format!("Todo {i}")))
            .expect("Failed to insert todo");
    }

    let spec = PageRequest {
        page: Some(2),
        limit: Some(2),
        sort_by: Some(SortField::CreatedAt),
        sort_order: Some(SortOrder::Asc),
    }
    .resolve();

    let found = store
        .find_many(&Predicate::default(), &spec)
        .expect("Find failed");

    let titles: Vec<&str> = found.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Todo 3", "Todo 4"]);
}

#[test]
fn test_group_counts_sparse() {
    let (_temp_file, store) = create_sqlite_store();

    store
        .insert(NewTodo {
            title: "One urgent".to_string(),
            priority: Priority::Urgent,
            ..Default::default()
        })
        .expect("Failed to insert todo");
    store
        .insert(NewTodo::new("One medium"))
        .expect("Failed to insert todo");
    store
        .insert(NewTodo::new("Another medium"))
        .expect("Failed to insert todo");

    let rows: std::collections::HashMap<String, u64> = store
        .group_counts(GroupField::Priority)
        .expect("Group counts failed")
        .into_iter()
        .collect();

    assert_eq!(rows.get("medium"), Some(&2));
    assert_eq!(rows.get("urgent"), Some(&1));
    // Priorities with no records produce no row at all
    assert!(!rows.contains_key("low"));
    assert!(!rows.contains_key("high"));

    let rows: std::collections::HashMap<String, u64> = store
        .group_counts(GroupField::Status)
        .expect("Group counts failed")
        .into_iter()
        .collect();
    assert_eq!(rows.get("todo"), Some(&3));
    assert!(!rows.contains_key("completed"));
}

#[test]
fn test_persistence_across_reopen() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");

    let id = {
        let store = SqliteStore::new(temp_file.path()).expect("Failed to create store");
        store
            .insert(NewTodo {
                title: "Survivor".to_string(),
                tags: vec!["durable".to_string()],
                ..Default::default()
            })
            .expect("Failed to insert todo")
            .id
    };

    let reopened = SqliteStore::new(temp_file.path()).expect("Failed to reopen store");
    let fetched = reopened
        .find_by_id(id)
        .expect("Failed to find todo")
        .expect("Todo should survive reopening");

    assert_eq!(fetched.title, "Survivor");
    assert_eq!(fetched.tags, vec!["durable".to_string()]);
}

#[test]
fn test_memory_store_basic_crud() {
    let store = MemoryStore::new();

    let inserted = store
        .insert(NewTodo::new("In memory"))
        .expect("Failed to insert todo");
    assert_eq!(inserted.id, 1);

    let updated = store
        .update_by_id(
            inserted.id,
            TodoPatch {
                title: Some("Still in memory".to_string()),
                ..Default::default()
            },
        )
        .expect("Failed to update todo")
        .expect("Todo should exist");
    assert_eq!(updated.title, "Still in memory");

    assert!(store.delete_by_id(inserted.id).expect("Delete failed"));
    assert_eq!(store.count(&Predicate::default()).expect("Count failed"), 0);
}

#[test]
fn test_memory_store_matches_sqlite_ordering() {
    let (_temp_file, sqlite) = create_sqlite_store();
    let memory = MemoryStore::new();

    let seeds = [
        ("Undated", None),
        ("June", Some(parse_ts("2025-06-01T00:00:00Z"))),
        ("May", Some(parse_ts("2025-05-01T00:00:00Z"))),
        ("Also May", Some(parse_ts("2025-05-01T00:00:00Z"))),
    ];

    for (title, due_date) in seeds {
        let new = NewTodo {
            title: title.to_string(),
            due_date,
            ..Default::default()
        };
        sqlite.insert(new.clone()).expect("Failed to insert todo");
        memory.insert(new).expect("Failed to insert todo");
    }

    let spec = sorted_page(SortField::DueDate, SortOrder::Asc);
    let from_sqlite: Vec<String> = sqlite
        .find_many(&Predicate::default(), &spec)
        .expect("Find failed")
        .into_iter()
        .map(|t| t.title)
        .collect();
    let from_memory: Vec<String> = memory
        .find_many(&Predicate::default(), &spec)
        .expect("Find failed")
        .into_iter()
        .map(|t| t.title)
        .collect();

    // Both backends agree on ordering, including the id tiebreak for
    // equal due dates
    assert_eq!(from_sqlite, from_memory);
    assert_eq!(
        from_sqlite,
        vec!["May", "Also May", "June", "Undated"]
    );
}
