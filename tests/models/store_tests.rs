//! Entry store and shared model behavior tests

use chat_store::application::models::{Model, USER_COLLECTION};
use chat_store::domain::{Message, User, UserPatch};
use chat_store::shared::error::AppError;
use pretty_assertions::assert_eq;

use crate::common::{fake_user, message, TestStore};

/// Ids keep increasing across removals
#[test]
fn test_ids_strictly_increase_across_removals() {
    let store = TestStore::new();
    let users = store.models.users();

    let mut seen = Vec::new();
    for round in 0..5 {
        let added = users.add(fake_user());
        seen.push(added.id.unwrap());
        if round % 2 == 0 {
            users.remove(added.id.unwrap());
        }
    }

    assert_eq!(seen, vec![1, 2, 3, 4, 5]);
    assert_eq!(users.len(), 2);
}

/// Update on a missing id creates nothing
#[test]
fn test_update_missing_id_does_not_insert() {
    let store = TestStore::new();
    let users = store.models.users();

    let result = users.update(
        42,
        UserPatch {
            name: Some("ghost".into()),
            ..Default::default()
        },
    );

    assert!(result.is_none());
    assert!(users.get_all().is_empty());
}

/// Save adds first, then merges
#[test]
fn test_save_adds_then_updates() {
    let store = TestStore::new();
    let mut user = store.models.user(User {
        name: "Alice".into(),
        email: "alice@example.com".into(),
        ..Default::default()
    });

    let saved = user.save().unwrap();
    assert_eq!(saved.id, Some(1));
    assert_eq!(user.id, Some(1));

    user.name = "Alicia".into();
    let merged = user.save().unwrap();
    assert_eq!(merged.name, "Alicia");
    assert_eq!(merged.email, "alice@example.com");
    assert_eq!(store.models.users().len(), 1);
    assert_eq!(user.by_id(1), Some(user.record().clone()));
}

/// Saving twice without changes is harmless
#[test]
fn test_repeated_save_is_idempotent() {
    let store = TestStore::new();
    let mut msg = store.models.message(message(1, "Hello World"));
    let first = msg.save().unwrap();
    let second = msg.save().unwrap();
    assert_eq!(first, second);
    assert_eq!(store.models.messages().len(), 1);
}

/// Remove on an unsaved entity is a state error
#[test]
fn test_remove_unsaved_is_state_error() {
    let store = TestStore::new();
    let mut msg = store.models.message(Message::default());
    let err = msg.remove().unwrap_err();
    assert_eq!(err, AppError::State("Cannot remove an unsaved object".into()));
}

/// Remove deletes the row and clears the id
#[test]
fn test_remove_clears_id() {
    let store = TestStore::new();
    let mut msg = store.models.message(message(1, "To be removed"));
    msg.save();
    let id = msg.id.unwrap();

    assert_eq!(msg.remove(), Ok(true));
    assert!(msg.id.is_none());
    assert!(store.models.messages().get_by_id(id).is_none());
}

/// Remove of a row deleted elsewhere keeps the id
#[test]
fn test_remove_vanished_row_returns_false() {
    let store = TestStore::new();
    let mut user = store.models.user(fake_user());
    user.save();
    let id = user.id.unwrap();
    store.models.users().remove(id);

    assert_eq!(user.remove(), Ok(false));
    assert_eq!(user.id, Some(id));
}

/// Models built by the factory see the registry's collection
#[test]
fn test_models_use_registry_collections() {
    let store = TestStore::new();
    let direct = store.registry.collection::<User>(USER_COLLECTION).unwrap();
    let mut user = store.models.user(fake_user());
    user.save();
    assert_eq!(direct.get_by_id(user.id.unwrap()), Some(user.into_record()));
}

/// The store handle is the bound collection
#[test]
fn test_store_handle_matches_collection() {
    let store = TestStore::new();
    let user = store.models.user(User::default());
    assert_eq!(user.store().name(), USER_COLLECTION);
}

/// Entities omit unsaved ids when serialized
#[test]
fn test_unsaved_id_is_not_serialized() {
    let value = serde_json::to_value(message(1, "hi")).unwrap();
    assert!(value.get("id").is_none());
    assert_eq!(value["content"], "hi");
    assert_eq!(value["parent_id"], serde_json::Value::Null);
}
