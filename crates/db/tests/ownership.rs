//! Ownership isolation tests: one account's notes and folders must be
//! invisible to and unmodifiable by every other account, with a miss
//! indistinguishable from the row not existing.

use sqlx::PgPool;

use memopad_core::types::DbId;
use memopad_db::models::account::CreateAccount;
use memopad_db::models::folder::CreateFolder;
use memopad_db::models::note::{CreateNote, UpdateNote};
use memopad_db::repositories::{AccountRepo, FolderRepo, NoteRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_account(pool: &PgPool, username: &str) -> DbId {
    AccountRepo::create(
        pool,
        &CreateAccount {
            username: username.to_string(),
            password_hash: "$argon2id$test-hash".to_string(),
        },
    )
    .await
    .expect("account creation should succeed")
    .id
}

async fn create_note(pool: &PgPool, owner: DbId, content: &str) -> DbId {
    NoteRepo::create(
        pool,
        owner,
        &CreateNote {
            title: None,
            content: content.to_string(),
            color: None,
            folder_id: None,
        },
    )
    .await
    .expect("note creation should succeed")
    .id
}

// ---------------------------------------------------------------------------
// Test: Reads are scoped
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_notes_invisible_across_accounts(pool: PgPool) {
    let alice = create_account(&pool, "alice").await;
    let bob = create_account(&pool, "bob").await;

    let note_id = create_note(&pool, alice, "alice's secret").await;

    // Bob's listing is empty; Alice's has the note.
    assert!(NoteRepo::list(&pool, bob, None).await.unwrap().is_empty());
    assert_eq!(NoteRepo::list(&pool, alice, None).await.unwrap().len(), 1);

    // A direct lookup under Bob's scope behaves like a missing row.
    assert!(NoteRepo::find_by_id(&pool, bob, note_id)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Test: Writes are scoped
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_foreign_note_unmodifiable(pool: PgPool) {
    let alice = create_account(&pool, "alice").await;
    let bob = create_account(&pool, "bob").await;

    let note_id = create_note(&pool, alice, "hands off").await;

    let update = NoteRepo::update(
        &pool,
        bob,
        note_id,
        &UpdateNote {
            title: None,
            content: "defaced".to_string(),
            color: None,
            folder_id: None,
        },
    )
    .await
    .unwrap();
    assert!(update.is_none());

    assert!(NoteRepo::toggle_pin(&pool, bob, note_id)
        .await
        .unwrap()
        .is_none());

    assert!(NoteRepo::move_to_folder(&pool, bob, note_id, None)
        .await
        .unwrap()
        .is_none());

    assert!(!NoteRepo::delete(&pool, bob, note_id).await.unwrap());

    // The note is untouched under its owner's scope.
    let note = NoteRepo::find_by_id(&pool, alice, note_id)
        .await
        .unwrap()
        .expect("owner must still see the note");
    assert_eq!(note.content, "hands off");
    assert!(!note.pinned);
}

// ---------------------------------------------------------------------------
// Test: Folders are scoped the same way
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_foreign_folder_unmodifiable(pool: PgPool) {
    let alice = create_account(&pool, "alice").await;
    let bob = create_account(&pool, "bob").await;

    let folder = FolderRepo::create(
        &pool,
        alice,
        &CreateFolder {
            name: "Private".to_string(),
            color: None,
        },
    )
    .await
    .unwrap();

    assert!(FolderRepo::find_by_id(&pool, bob, folder.id)
        .await
        .unwrap()
        .is_none());
    assert!(FolderRepo::rename(&pool, bob, folder.id, "Mine now")
        .await
        .unwrap()
        .is_none());
    assert!(FolderRepo::recolor(&pool, bob, folder.id, "blue")
        .await
        .unwrap()
        .is_none());
    assert!(FolderRepo::list(&pool, bob).await.unwrap().is_empty());
}
