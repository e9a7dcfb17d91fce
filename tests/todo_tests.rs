use hometools::core::todo::TaskList;
use hometools::models::task::TaskFilter;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

mod common;
use common::{ht, test_home};

fn tasks_path(name: &str) -> PathBuf {
    test_home(name).join("tasks.json")
}

fn sample(name: &str) -> TaskList {
    let mut list = TaskList::load(&tasks_path(name)).expect("load");
    list.add("Buy milk", "2 litres").unwrap();
    list.add("Pay rent", "").unwrap();
    list.add("Book flights", "").unwrap();
    list
}

#[test]
fn test_add_assigns_sequential_ids() {
    let list = sample("todo_ids");
    let ids: Vec<u32> = list.tasks.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert!(list.tasks.iter().all(|t| !t.completed && !t.selected));
    assert_eq!(list.tasks[0].created_at.len(), "2024-01-01 00:00:00".len());
}

#[test]
fn test_empty_title_rejected() {
    let mut list = TaskList::load(&tasks_path("todo_empty")).unwrap();
    assert!(list.add("   ", "x").is_err());
    assert!(list.tasks.is_empty());
}

#[test]
fn test_toggle_and_status() {
    let mut list = sample("todo_toggle");

    assert!(list.toggle_completion(2).unwrap());
    assert_eq!(
        list.status().to_string(),
        "Total tasks: 3 | Completed: 1 | Remaining: 2"
    );
    assert!(!list.toggle_completion(2).unwrap());
    assert!(list.toggle_completion(9).is_err());
}

#[test]
fn test_delete_selected_renumbers() {
    let mut list = sample("todo_delete_selected");

    list.toggle_selection(1).unwrap();
    assert_eq!(list.delete_selected(), 1);

    let view: Vec<(u32, &str)> = list.tasks.iter().map(|t| (t.id, t.title.as_str())).collect();
    assert_eq!(view, vec![(1, "Pay rent"), (2, "Book flights")]);
}

#[test]
fn test_delete_by_ids() {
    let mut list = sample("todo_delete_ids");

    assert!(list.delete(&[1, 7]).is_err());
    assert_eq!(list.tasks.len(), 3);

    assert_eq!(list.delete(&[1, 3]).unwrap(), 2);
    assert_eq!(list.tasks.len(), 1);
    assert_eq!(list.tasks[0].id, 1);
    assert_eq!(list.tasks[0].title, "Pay rent");
}

#[test]
fn test_filter_and_search() {
    let mut list = sample("todo_filter");
    list.toggle_completion(1).unwrap();

    let titles = |v: Vec<&hometools::models::task::Task>| -> Vec<String> {
        v.into_iter().map(|t| t.title.clone()).collect()
    };

    assert_eq!(titles(list.filter("", TaskFilter::Completed)), vec!["Buy milk"]);
    assert_eq!(list.filter("", TaskFilter::Active).len(), 2);
    assert_eq!(titles(list.filter("BOOK", TaskFilter::All)), vec!["Book flights"]);
    assert!(list.filter("book", TaskFilter::Completed).is_empty());
}

#[test]
fn test_persistence_and_corrupt_file() {
    let path = tasks_path("todo_persist");
    let mut list = TaskList::load(&path).unwrap();
    list.add("Water plants", "").unwrap();
    list.save().unwrap();

    let again = TaskList::load(&path).unwrap();
    assert_eq!(again.tasks, list.tasks);

    fs::write(&path, "not json").unwrap();
    let recovered = TaskList::load(&path).unwrap();
    assert!(recovered.tasks.is_empty());
    assert!(path.with_file_name("tasks.json.corrupt").exists());
}

#[test]
fn test_cli_todo_flow() {
    let home = test_home("cli_todo_flow");

    ht(&home)
        .args(["todo", "add", "Buy milk", "--desc", "2 litres"])
        .assert()
        .success()
        .stdout(contains("Task #1 added: Buy milk"));

    ht(&home).args(["todo", "add", "Pay rent"]).assert().success();
    ht(&home).args(["todo", "done", "1"]).assert().success();

    ht(&home)
        .args(["todo", "list", "--filter", "active"])
        .assert()
        .success()
        .stdout(contains("Pay rent"))
        .stdout(contains("Total tasks: 2 | Completed: 1 | Remaining: 1"));

    ht(&home)
        .args(["todo", "show", "1"])
        .assert()
        .success()
        .stdout(contains("2 litres"));

    ht(&home).args(["todo", "delete", "1"]).assert().success();

    ht(&home)
        .args(["todo", "status"])
        .assert()
        .success()
        .stdout(contains("Total tasks: 1 | Completed: 0 | Remaining: 1"));
}

#[test]
fn test_cli_todo_unknown_task() {
    let home = test_home("cli_todo_unknown");

    ht(&home)
        .args(["todo", "done", "5"])
        .assert()
        .failure()
        .stderr(contains("Task #5 does not exist"));
}

#[test]
fn test_cli_non_utf8_tasks_file_falls_back_to_empty() {
    let home = test_home("cli_todo_non_utf8");
    fs::write(home.join("tasks.json"), [0xff, 0xfe, 0x5b, 0x5d]).unwrap();

    ht(&home)
        .args(["todo", "list"])
        .assert()
        .success()
        .stdout(contains("moved to"));

    assert!(home.join("tasks.json.corrupt").exists());
}
