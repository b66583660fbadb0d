use data::{NoteDraft, NoteId, SortOrder, UserId};
use crate::clock::testing::ManualClock;
use crate::database::connect_in_memory;
use super::*;

const START: i64 = 1_700_000_000;

struct Fixture {
    storage: SqlNoteStorageImpl<ManualClock>,
    clock: ManualClock,
    alice: UserId,
    bob: UserId,
}

async fn fixture() -> Fixture {
    let pool = connect_in_memory().await.expect("cannot open database");
    let alice = insert_user(&pool, "alice").await;
    let bob = insert_user(&pool, "bob").await;
    let clock = ManualClock::new(START);
    Fixture {
        storage: SqlNoteStorageImpl::new_internal(pool, clock.clone()),
        clock,
        alice,
        bob,
    }
}

async fn insert_user(pool: &SqlitePool, username: &str) -> UserId {
    let result = sqlx::query(r#"INSERT INTO "user" (username, password) VALUES (?, 'x')"#)
        .bind(username)
        .execute(pool)
        .await
        .unwrap();
    UserId(result.last_insert_rowid())
}

fn draft(title: &str, content: &str) -> NoteDraft {
    NoteDraft::new(title, content, 256, 1024).unwrap()
}

fn ids(notes: &[Note]) -> Vec<i64> {
    notes.iter().map(|n| n.id.0).collect()
}

#[tokio::test]
async fn add_and_get() {
    let f = fixture().await;
    let note = f.storage.add_note(Some(f.alice), draft("title", "content")).await.unwrap();
    assert_eq!(note.owner, Some(f.alice));
    assert_eq!(note.created, note.updated);
    assert_eq!(note.created, ManualClock::timestamp(START));
    assert_eq!(f.storage.get_note(Some(f.alice), note.id).await.unwrap(), note);
}

#[tokio::test]
async fn add_requires_owner() {
    let f = fixture().await;
    let err = f.storage.add_note(None, draft("a", "")).await.expect_err("should fail");
    assert!(matches!(err, StorageError::OwnerRequired), "wrong error type: {err:#?}");
}

#[tokio::test]
async fn add_for_unknown_user_fails() {
    let f = fixture().await;
    let err = f.storage.add_note(Some(UserId(100)), draft("a", "")).await
        .expect_err("should fail");
    assert!(matches!(err, StorageError::Database(_)), "wrong error type: {err:#?}");
}

#[tokio::test]
async fn list_shows_only_own_notes_in_order() {
    let f = fixture().await;
    let first = f.storage.add_note(Some(f.alice), draft("first", "")).await.unwrap();
    f.clock.advance(5);
    f.storage.add_note(Some(f.bob), draft("bob's", "")).await.unwrap();
    f.clock.advance(5);
    let second = f.storage.add_note(Some(f.alice), draft("second", "")).await.unwrap();

    let desc = f.storage.list_notes(Some(f.alice), SortOrder::Desc).await.unwrap();
    assert_eq!(ids(&desc), [second.id.0, first.id.0]);
    let asc = f.storage.list_notes(Some(f.alice), SortOrder::Asc).await.unwrap();
    assert_eq!(ids(&asc), [first.id.0, second.id.0]);
    assert!(asc.iter().all(|n| n.owner == Some(f.alice)));

    let everything = f.storage.list_notes(None, SortOrder::Asc).await.unwrap();
    assert_eq!(everything.len(), 3);
}

#[tokio::test]
async fn equal_timestamps_order_by_id() {
    let f = fixture().await;
    for title in ["a", "b", "c"] {
        f.storage.add_note(Some(f.alice), draft(title, "")).await.unwrap();
    }
    let asc = f.storage.list_notes(Some(f.alice), SortOrder::Asc).await.unwrap();
    assert_eq!(ids(&asc), [1, 2, 3]);
    let desc = f.storage.list_notes(Some(f.alice), SortOrder::Desc).await.unwrap();
    assert_eq!(ids(&desc), [3, 2, 1]);
}

#[tokio::test]
async fn edit_keeps_created() {
    let f = fixture().await;
    let note = f.storage.add_note(Some(f.alice), draft("old", "old")).await.unwrap();
    f.clock.advance(30);
    let edited = f.storage.edit_note(Some(f.alice), note.id, draft(" new ", "new"))
        .await.unwrap();
    assert_eq!(edited.title, "new");
    assert_eq!(edited.content, "new");
    assert_eq!(edited.created, note.created);
    assert_eq!(edited.updated, ManualClock::timestamp(START + 30));
    assert_eq!(f.storage.get_note(Some(f.alice), note.id).await.unwrap(), edited);
}

#[tokio::test]
async fn edit_reorders_listing() {
    let f = fixture().await;
    let old = f.storage.add_note(Some(f.alice), draft("old", "")).await.unwrap();
    f.clock.advance(1);
    let new = f.storage.add_note(Some(f.alice), draft("new", "")).await.unwrap();
    f.clock.advance(1);
    f.storage.edit_note(Some(f.alice), old.id, draft("touched", "")).await.unwrap();
    let desc = f.storage.list_notes(Some(f.alice), SortOrder::Desc).await.unwrap();
    assert_eq!(ids(&desc), [old.id.0, new.id.0]);
}

#[tokio::test]
async fn foreign_notes_are_forbidden_and_unchanged() {
    let f = fixture().await;
    let note = f.storage.add_note(Some(f.bob), draft("bob's", "secret")).await.unwrap();

    let err = f.storage.get_note(Some(f.alice), note.id).await.expect_err("should fail");
    assert!(matches!(err, StorageError::Forbidden), "wrong error type: {err:#?}");
    let err = f.storage.edit_note(Some(f.alice), note.id, draft("mine now", "")).await
        .expect_err("should fail");
    assert!(matches!(err, StorageError::Forbidden), "wrong error type: {err:#?}");
    let err = f.storage.delete_note(Some(f.alice), note.id).await.expect_err("should fail");
    assert!(matches!(err, StorageError::Forbidden), "wrong error type: {err:#?}");

    assert_eq!(f.storage.get_note(Some(f.bob), note.id).await.unwrap(), note);
}

#[tokio::test]
async fn missing_notes_are_not_found() {
    let f = fixture().await;
    let missing = NoteId(42);
    let err = f.storage.get_note(Some(f.alice), missing).await.expect_err("should fail");
    assert!(matches!(err, StorageError::NoteNotFound), "wrong error type: {err:#?}");
    let err = f.storage.edit_note(Some(f.alice), missing, draft("a", "")).await
        .expect_err("should fail");
    assert!(matches!(err, StorageError::NoteNotFound), "wrong error type: {err:#?}");
    let err = f.storage.delete_note(Some(f.alice), missing).await.expect_err("should fail");
    assert!(matches!(err, StorageError::NoteNotFound), "wrong error type: {err:#?}");
    f.storage.delete_note(None, missing).await.expect("should be a no-op");
}

#[tokio::test]
async fn delete_removes_note() {
    let f = fixture().await;
    let note = f.storage.add_note(Some(f.alice), draft("doomed", "")).await.unwrap();
    f.storage.delete_note(Some(f.alice), note.id).await.unwrap();
    let err = f.storage.get_note(Some(f.alice), note.id).await.expect_err("should fail");
    assert!(matches!(err, StorageError::NoteNotFound), "wrong error type: {err:#?}");
    assert!(f.storage.list_notes(Some(f.alice), SortOrder::Asc).await.unwrap().is_empty());
}

#[tokio::test]
async fn search_is_case_insensitive_and_scoped() {
    let f = fixture().await;
    f.storage.add_note(Some(f.alice), draft("ABC title", "")).await.unwrap();
    f.clock.advance(1);
    f.storage.add_note(Some(f.alice), draft("other", "has aBc inside")).await.unwrap();
    f.clock.advance(1);
    f.storage.add_note(Some(f.alice), draft("nothing", "here")).await.unwrap();
    f.storage.add_note(Some(f.bob), draft("abc", "abc")).await.unwrap();

    for query in ["abc", "ABC", "Abc"] {
        let found = f.storage.search_notes(Some(f.alice), query, SortOrder::Asc)
            .await.unwrap();
        assert_eq!(ids(&found), [1, 2], "query {query}");
    }
    let found = f.storage.search_notes(Some(f.alice), "abc", SortOrder::Desc).await.unwrap();
    assert_eq!(ids(&found), [2, 1]);
}

#[tokio::test]
async fn search_treats_wildcards_literally() {
    let f = fixture().await;
    f.storage.add_note(Some(f.alice), draft("100% done", "")).await.unwrap();
    f.storage.add_note(Some(f.alice), draft("1000 done", "")).await.unwrap();
    f.storage.add_note(Some(f.alice), draft("snake_case", "")).await.unwrap();
    f.storage.add_note(Some(f.alice), draft("snakeXcase", "")).await.unwrap();
    f.storage.add_note(Some(f.alice), draft("back\\slash", "")).await.unwrap();

    let search = |query: &'static str| {
        let storage = &f.storage;
        let alice = f.alice;
        async move {
            ids(&storage.search_notes(Some(alice), query, SortOrder::Asc).await.unwrap())
        }
    };
    assert_eq!(search("0%").await, [1]);
    assert_eq!(search("e_c").await, [3]);
    assert_eq!(search("\\").await, [5]);
    assert_eq!(search("").await, [1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn search_folds_non_ascii_case() {
    let f = fixture().await;
    f.storage.add_note(Some(f.alice), draft("Заметка", "Привет")).await.unwrap();
    f.storage.add_note(Some(f.alice), draft("Ünïcode", "")).await.unwrap();
    f.storage.add_note(Some(f.bob), draft("заметка", "")).await.unwrap();

    for query in ["заметка", "ПРИВЕТ", "зАмЕтКа"] {
        let found = f.storage.search_notes(Some(f.alice), query, SortOrder::Asc)
            .await.unwrap();
        assert_eq!(ids(&found), [1], "query {query}");
    }
    let found = f.storage.search_notes(Some(f.alice), "üNÏ", SortOrder::Asc).await.unwrap();
    assert_eq!(ids(&found), [2]);
}
