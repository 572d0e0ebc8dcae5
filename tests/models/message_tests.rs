//! Message model tests

use chat_store::application::models::Model;
use chat_store::domain::{EntryId, Message};
use chat_store::shared::error::AppError;
use pretty_assertions::assert_eq;
use test_case::test_case;

use crate::common::{message, TestStore};

fn ids(messages: &[Message]) -> Vec<EntryId> {
    messages.iter().filter_map(|m| m.id).collect()
}

#[test]
fn test_new_message_has_defaults() {
    let store = TestStore::new();
    let msg = store.models.message(Message::default());
    assert!(msg.user_id.is_none());
    assert_eq!(msg.content, "");
    assert!(msg.likes.is_empty());
    assert!(msg.message_ids.is_empty());
}

#[test]
fn test_by_user_id_in_insertion_order() {
    let store = TestStore::new();
    let messages = store.models.messages();
    let m1 = messages.add(message(2, "Hi"));
    let m2 = messages.add(message(2, "Hey"));
    let m3 = messages.add(message(3, "Yo"));

    let finder = store.models.message(Message::default());
    assert_eq!(finder.by_user_id(2), vec![m1, m2]);
    assert_eq!(finder.by_user_id(3), vec![m3]);
    assert!(finder.by_user_id(4).is_empty());
}

#[test]
fn test_like_adds_user() {
    let store = TestStore::new();
    let mut msg = store.models.message(message(1, "Like me!"));
    msg.save();

    assert_eq!(msg.like(42), Ok(true));

    let stored = msg.by_id(msg.id.unwrap()).unwrap();
    assert_eq!(stored.likes, vec![42]);
    assert_eq!(msg.likes, vec![42]);
}

#[test]
fn test_like_twice_keeps_one_entry() {
    let store = TestStore::new();
    let mut msg = store.models.message(message(1, "Like once!"));
    msg.save();

    assert_eq!(msg.like(42), Ok(true));
    assert_eq!(msg.like(42), Ok(false));

    let stored = msg.by_id(msg.id.unwrap()).unwrap();
    assert_eq!(stored.likes.iter().filter(|id| **id == 42).count(), 1);
}

#[test]
fn test_unlike_removes_user() {
    let store = TestStore::new();
    let mut msg = store.models.message(Message {
        likes: vec![42, 7],
        ..message(1, "Unlike me!")
    });
    msg.save();

    assert_eq!(msg.unlike(42), Ok(true));

    let stored = msg.by_id(msg.id.unwrap()).unwrap();
    assert_eq!(stored.likes, vec![7]);
}

#[test]
fn test_unlike_without_like_is_noop() {
    let store = TestStore::new();
    let mut msg = store.models.message(Message {
        likes: vec![7],
        ..message(1, "Never liked")
    });
    msg.save();
    let before = msg.by_id(msg.id.unwrap()).unwrap();

    assert_eq!(msg.unlike(99), Ok(false));

    let after = msg.by_id(msg.id.unwrap()).unwrap();
    assert_eq!(after.likes, vec![7]);
    assert_eq!(after.updated_at, before.updated_at);
}

#[test]
fn test_like_on_unsaved_message_changes_working_copy() {
    let store = TestStore::new();
    let mut msg = store.models.message(message(1, "draft"));

    assert_eq!(msg.like(5), Ok(true));

    assert_eq!(msg.likes, vec![5]);
    assert!(store.models.messages().is_empty());
}

#[test_case(true, "user_id: User ID is required to like a message" ; "like")]
#[test_case(false, "user_id: User ID is required to unlike a message" ; "unlike")]
fn test_like_requires_user_id(like: bool, expected: &str) {
    let store = TestStore::new();
    let mut msg = store.models.message(message(1, "Oops"));
    msg.save();

    let result = if like { msg.like(0) } else { msg.unlike(0) };

    assert_eq!(result, Err(AppError::Validation(expected.to_string())));
    assert!(msg.likes.is_empty());
}

#[test]
fn test_nested_comments() {
    let store = TestStore::new();
    let mut root = store.models.message(message(1, "Root message"));
    root.save();

    let c1 = root.comment(message(2, "First comment")).unwrap();
    assert_eq!(c1.parent_id, root.id);
    assert!(root.message_ids.contains(&c1.id.unwrap()));

    let mut c1_model = store.models.message(c1.clone());
    let c2 = c1_model.comment(message(3, "Reply to first comment")).unwrap();
    assert_eq!(c2.parent_id, c1.id);
    assert!(c1_model.message_ids.contains(&c2.id.unwrap()));

    let mut c2_model = store.models.message(c2.clone());
    let c3 = c2_model.comment(message(4, "Reply to reply")).unwrap();
    assert_eq!(c3.parent_id, c2.id);

    let comments = root.get_comments();
    assert_eq!(ids(&comments), vec![c1.id.unwrap()]);
}

#[test]
fn test_comment_is_persisted_on_parent_row() {
    let store = TestStore::new();
    let mut root = store.models.message(message(1, "Root"));
    root.save();

    let comment = root.comment(message(2, "First")).unwrap();

    let stored_root = root.by_id(root.id.unwrap()).unwrap();
    assert_eq!(stored_root.message_ids, vec![comment.id.unwrap()]);
    let stored_comment = root.by_id(comment.id.unwrap()).unwrap();
    assert_eq!(stored_comment.parent_id, root.id);
    assert_eq!(stored_comment.content, "First");
}

#[test]
fn test_comment_requires_content() {
    let store = TestStore::new();
    let mut root = store.models.message(message(1, "Root"));
    root.save();

    let err = root
        .comment(Message {
            user_id: Some(2),
            ..Default::default()
        })
        .unwrap_err();

    assert_eq!(
        err,
        AppError::Validation("content: Message content is required to comment".into())
    );
    assert_eq!(store.models.messages().len(), 1);
    assert!(root.message_ids.is_empty());
}

#[test]
fn test_comment_on_unsaved_message_is_state_error() {
    let store = TestStore::new();
    let mut draft = store.models.message(message(1, "draft"));
    let err = draft.comment(message(2, "reply")).unwrap_err();
    assert!(err.is_state());
    assert!(store.models.messages().is_empty());
}

#[test]
fn test_by_parent_id_returns_direct_children() {
    let store = TestStore::new();
    let mut root = store.models.message(message(1, "Root"));
    root.save();

    let c1 = root.comment(message(2, "First comment")).unwrap();
    let c2 = root.comment(message(3, "Second comment")).unwrap();
    let mut c1_model = store.models.message(c1.clone());
    let c3 = c1_model.comment(message(4, "Reply to first comment")).unwrap();

    assert_eq!(ids(&root.by_parent_id(root.id.unwrap())), vec![c1.id.unwrap(), c2.id.unwrap()]);
    assert_eq!(ids(&root.by_parent_id(c1.id.unwrap())), vec![c3.id.unwrap()]);
    assert!(root.by_parent_id(c2.id.unwrap()).is_empty());
}

#[test]
fn test_get_comments_returns_direct_children_in_order() {
    let store = TestStore::new();
    let mut root = store.models.message(message(1, "Root"));
    root.save();

    let c1 = root.comment(message(2, "First comment")).unwrap();
    let c2 = root.comment(message(3, "Second comment")).unwrap();
    store
        .models
        .message(c1.clone())
        .comment(message(4, "Nested comment"))
        .unwrap();

    let reloaded = store.models.message(root.by_id(root.id.unwrap()).unwrap());
    let comments = reloaded.get_comments();

    assert_eq!(ids(&comments), vec![c1.id.unwrap(), c2.id.unwrap()]);
    assert!(comments.iter().all(|c| c.parent_id == root.id));
}

#[test]
fn test_get_comments_skips_removed_comment() {
    let store = TestStore::new();
    let mut root = store.models.message(message(1, "Root"));
    root.save();
    let c1 = root.comment(message(2, "gone")).unwrap();
    let c2 = root.comment(message(3, "kept")).unwrap();

    store.models.messages().remove(c1.id.unwrap());

    assert_eq!(ids(&root.get_comments()), vec![c2.id.unwrap()]);
}

#[test]
fn test_concurrent_comments_on_one_parent() {
    use std::sync::Arc;

    let store = Arc::new(TestStore::new());
    let mut root = store.models.message(message(1, "Root"));
    root.save();
    let root_record = root.record().clone();

    let handles: Vec<_> = (0..4u64)
        .map(|i| {
            let store = Arc::clone(&store);
            let root_record = root_record.clone();
            std::thread::spawn(move || {
                let mut parent = store.models.message(root_record);
                for j in 0..25 {
                    parent
                        .comment(message(i + 2, &format!("comment {}-{}", i, j)))
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let stored_root = root.by_id(root.id.unwrap()).unwrap();
    assert_eq!(stored_root.message_ids.len(), 100);
    assert_eq!(root.by_parent_id(root.id.unwrap()).len(), 100);
}
