use tasksync::models::{Task, TaskPatch};
use tasksync::store::TaskStore;

fn task(id: u64, name: &str) -> Task {
    Task {
        id,
        name: name.into(),
        completed: false,
        deleted: false,
    }
}

#[test]
fn test_commit_replaces_provisional_exactly_once() {
    let mut store = TaskStore::new();
    store.replace_all(vec![task(1, "first")]);

    let provisional = Task::provisional("buy milk");
    let provisional_id = provisional.id;
    store.insert_provisional(provisional, false);
    assert_eq!(store.len(), 2);

    let server_task = task(2, "buy milk");
    store.commit_provisional(provisional_id, server_task.clone());

    let committed: Vec<_> = store.tasks().iter().filter(|t| **t == server_task).collect();
    assert_eq!(committed.len(), 1);
    assert!(store.get(provisional_id).is_none());
    assert_eq!(store.len(), 2);
}

#[test]
fn test_commit_with_unknown_id_is_a_noop() {
    let mut store = TaskStore::new();
    store.replace_all(vec![task(1, "first"), task(2, "second")]);
    let before = store.snapshot();

    store.commit_provisional(999, task(3, "orphan"));

    assert_eq!(store.snapshot(), before);
}

#[test]
fn test_insert_provisional_respects_front_flag() {
    let mut store = TaskStore::new();
    store.replace_all(vec![task(1, "first")]);

    store.insert_provisional(task(100, "tail"), false);
    store.insert_provisional(task(200, "head"), true);

    let ids: Vec<u64> = store.tasks().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![200, 1, 100]);
}

#[test]
fn test_reverse_order_twice_is_identity() {
    let mut store = TaskStore::new();
    store.replace_all(vec![task(1, "a"), task(2, "b"), task(3, "c")]);
    let before = store.snapshot();

    store.reverse_order();
    assert_ne!(store.snapshot(), before);
    store.reverse_order();
    assert_eq!(store.snapshot(), before);
}

#[test]
fn test_toggle_order_twice_restores_sequence() {
    let mut store = TaskStore::new();
    store.replace_all(vec![task(1, "a"), task(2, "b")]);
    let before = store.snapshot();

    store.toggle_order();
    assert!(store.reversed());
    store.toggle_order();
    assert!(!store.reversed());
    assert_eq!(store.snapshot(), before);
}

#[test]
fn test_remove_returns_prior_position() {
    let mut store = TaskStore::new();
    store.replace_all(vec![task(1, "a"), task(2, "b"), task(3, "c")]);

    let (index, removed) = store.remove_by_id(2).unwrap();
    assert_eq!(index, 1);
    assert_eq!(removed.name, "b");
    assert_eq!(store.len(), 2);

    store.insert_at(index, removed);
    let ids: Vec<u64> = store.tasks().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_remove_unknown_id_is_a_noop() {
    let mut store = TaskStore::new();
    store.replace_all(vec![task(1, "a")]);
    let before = store.snapshot();

    assert!(store.remove_by_id(42).is_none());
    assert_eq!(store.snapshot(), before);
}

#[test]
fn test_patch_merges_and_returns_prior_record() {
    let mut store = TaskStore::new();
    store.replace_all(vec![task(1, "old name")]);

    let prior = store
        .patch_by_id(1, &TaskPatch::rename("new name"))
        .unwrap();
    assert_eq!(prior.name, "old name");
    assert_eq!(store.get(1).unwrap().name, "new name");
    assert!(!store.get(1).unwrap().completed);

    let prior = store.patch_by_id(1, &TaskPatch::complete(true)).unwrap();
    assert!(!prior.completed);
    let patched = store.get(1).unwrap();
    assert!(patched.completed);
    assert_eq!(patched.name, "new name");
}

#[test]
fn test_patch_unknown_id_is_a_noop() {
    let mut store = TaskStore::new();
    store.replace_all(vec![task(1, "a")]);
    let before = store.snapshot();

    assert!(store.patch_by_id(9, &TaskPatch::complete(true)).is_none());
    assert_eq!(store.snapshot(), before);
}

#[test]
fn test_restore_is_a_total_replace() {
    let mut store = TaskStore::new();
    store.replace_all(vec![task(1, "a"), task(2, "b")]);
    let snapshot = store.snapshot();

    store.remove_by_id(1);
    store.insert_provisional(task(300, "extra"), false);
    store.patch_by_id(2, &TaskPatch::complete(true));

    store.restore(snapshot.clone());
    assert_eq!(store.snapshot(), snapshot);
}
