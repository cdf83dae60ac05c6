use chrono::NaiveDate;
use tasklist::models::{CreateTask, Task, UpdateTask};
use tasklist::StoreError;

use super::setup;

#[tokio::test]
async fn test_create_and_get_task() {
    let (_, stores) = setup().await;

    let created = stores.tasks.create(CreateTask::new("buy milk")).await.unwrap();
    assert_eq!(created.title.as_deref(), Some("buy milk"));
    assert_eq!(created.due_date, None);
    assert!(!created.done);

    let fetched = stores.tasks.get(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_task_without_title() {
    let (_, stores) = setup().await;

    let created = stores.tasks.create(CreateTask::default()).await.unwrap();
    assert_eq!(created.title, None);

    let fetched = stores.tasks.get(created.id).await.unwrap();
    assert_eq!(fetched.title, None);
}

#[tokio::test]
async fn test_create_task_with_due_date() {
    let (_, stores) = setup().await;
    let due = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();

    let created = stores
        .tasks
        .create(CreateTask::new("pick up laundry").with_due_date(due))
        .await
        .unwrap();

    assert_eq!(stores.tasks.get(created.id).await.unwrap().due_date, Some(due));
}

#[tokio::test]
async fn test_created_ids_are_unique_and_listed_in_order() {
    let (_, stores) = setup().await;

    let first = stores.tasks.create(CreateTask::new("first")).await.unwrap();
    let second = stores.tasks.create(CreateTask::new("second")).await.unwrap();
    let third = stores.tasks.create(CreateTask::new("third")).await.unwrap();
    assert!(first.id < second.id && second.id < third.id);

    let titles: Vec<_> = stores
        .tasks
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.title.unwrap())
        .collect();
    assert_eq!(titles, ["first", "second", "third"]);

    // Stable without mutation
    assert_eq!(stores.tasks.list().await.unwrap(), stores.tasks.list().await.unwrap());
}

#[tokio::test]
async fn test_create_rejects_long_title() {
    let (_, stores) = setup().await;
    let title = "x".repeat(1025);

    let err = stores.tasks.create(CreateTask::new(title)).await.unwrap_err();
    assert!(err.is_validation());
    assert!(stores.tasks.list().await.unwrap().is_empty());

    // Exactly at the limit is fine
    assert!(stores.tasks.create(CreateTask::new("x".repeat(1024))).await.is_ok());
}

#[tokio::test]
async fn test_get_missing_task() {
    let (_, stores) = setup().await;

    let err = stores.tasks.get(999).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(999)));
}

#[tokio::test]
async fn test_update_changes_title_keeps_done_state() {
    let (_, stores) = setup().await;
    let done_task = stores.tasks.create(CreateTask::new("wash car")).await.unwrap();
    let open_task = stores.tasks.create(CreateTask::new("call mom")).await.unwrap();
    stores.completions.mark_done(done_task.id).await.unwrap();

    let updated = stores
        .tasks
        .update(done_task.id, UpdateTask::new("wash the car"))
        .await
        .unwrap();
    assert_eq!(updated.id, done_task.id);
    assert_eq!(updated.title.as_deref(), Some("wash the car"));
    assert!(updated.done);
    assert!(stores.completions.is_done(done_task.id).await.unwrap());

    let updated = stores
        .tasks
        .update(open_task.id, UpdateTask::new("call dad"))
        .await
        .unwrap();
    assert!(!updated.done);
    assert_eq!(stores.tasks.get(open_task.id).await.unwrap(), updated);
}

#[tokio::test]
async fn test_update_replaces_due_date() {
    let (_, stores) = setup().await;
    let due = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let later = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
    let task = stores
        .tasks
        .create(CreateTask::new("file taxes").with_due_date(due))
        .await
        .unwrap();

    let updated = stores
        .tasks
        .update(task.id, UpdateTask::new("file taxes").with_due_date(later))
        .await
        .unwrap();
    assert_eq!(updated.due_date, Some(later));

    let cleared = stores.tasks.update(task.id, UpdateTask::default()).await.unwrap();
    assert_eq!(cleared.title, None);
    assert_eq!(cleared.due_date, None);
}

#[tokio::test]
async fn test_update_missing_task() {
    let (_, stores) = setup().await;

    let err = stores.tasks.update(42, UpdateTask::new("nothing")).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(stores.tasks.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_rejects_long_title() {
    let (_, stores) = setup().await;
    let task = stores.tasks.create(CreateTask::new("short")).await.unwrap();

    let err = stores
        .tasks
        .update(task.id, UpdateTask::new("y".repeat(2000)))
        .await
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(stores.tasks.get(task.id).await.unwrap().title.as_deref(), Some("short"));
}

#[tokio::test]
async fn test_delete_removes_task_and_completion() {
    let (_, stores) = setup().await;
    let task = stores.tasks.create(CreateTask::new("buy milk")).await.unwrap();
    stores.completions.mark_done(task.id).await.unwrap();

    stores.tasks.delete(task.id).await.unwrap();

    assert!(stores.tasks.get(task.id).await.unwrap_err().is_not_found());
    assert!(!stores.completions.is_done(task.id).await.unwrap());
    assert!(stores.completions.list_done().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_task_that_was_never_done() {
    let (_, stores) = setup().await;
    let task = stores.tasks.create(CreateTask::new("read a book")).await.unwrap();

    stores.tasks.delete(task.id).await.unwrap();

    assert!(stores.tasks.get(task.id).await.unwrap_err().is_not_found());
    assert!(!stores.completions.is_done(task.id).await.unwrap());
}

#[tokio::test]
async fn test_delete_missing_task() {
    let (_, stores) = setup().await;

    let err = stores.tasks.delete(7).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(7)));
}

#[tokio::test]
async fn test_delete_leaves_other_tasks() {
    let (_, stores) = setup().await;
    let keep = stores.tasks.create(CreateTask::new("keep")).await.unwrap();
    let gone = stores.tasks.create(CreateTask::new("drop")).await.unwrap();
    stores.completions.mark_done(keep.id).await.unwrap();
    stores.completions.mark_done(gone.id).await.unwrap();

    stores.tasks.delete(gone.id).await.unwrap();

    let remaining = stores.tasks.list().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, keep.id);
    assert!(remaining[0].done);
}

#[tokio::test]
async fn test_buy_milk_scenario() {
    let (_, stores) = setup().await;

    let task = stores.tasks.create(CreateTask::new("buy milk")).await.unwrap();
    assert_eq!(task.id, 1);

    let expected = Task {
        id: 1,
        title: Some("buy milk".to_string()),
        due_date: None,
        done: false,
    };
    assert_eq!(stores.tasks.list().await.unwrap(), vec![expected.clone()]);

    stores.completions.mark_done(1).await.unwrap();
    assert_eq!(
        stores.tasks.list().await.unwrap(),
        vec![Task {
            done: true,
            ..expected
        }]
    );

    stores.tasks.delete(1).await.unwrap();
    assert!(stores.tasks.list().await.unwrap().is_empty());
    assert!(!stores.completions.is_done(1).await.unwrap());
}
