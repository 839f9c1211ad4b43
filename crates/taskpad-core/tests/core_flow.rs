use std::collections::BTreeSet;

use taskpad_core::clock::FixedClock;
use taskpad_core::store::MemoryBackend;
use taskpad_core::{ActionError, Config, FormMode, KvBackend, Session, StatusFilter, Task};

type TestSession = Session<MemoryBackend, FixedClock>;

fn session_at(millis: u64) -> TestSession {
    Session::with_clock(MemoryBackend::new(), Config::default(), FixedClock(millis))
}

fn create(session: &mut TestSession, title: &str, desc: &str, date: &str) -> u64 {
    session.toggle_form();
    let form = session.form_mut();
    form.set_title(title);
    form.set_desc(desc);
    form.set_date(date);
    session.save().expect("save task")
}

fn titles(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|t| t.title.as_str()).collect()
}

#[test]
fn ids_stay_distinct_across_create_edit_delete() {
    let mut session = session_at(1_700_000_000_000);
    let mut created = Vec::new();
    for n in 0..6 {
        created.push(create(&mut session, &format!("task {n}"), "", ""));
    }
    session.delete(created[2]).expect("delete");
    session.begin_edit(created[4]).expect("begin edit");
    session.form_mut().set_title("edited");
    session.save().expect("edit");
    created.push(create(&mut session, "late", "", ""));

    let tasks = session.tasks();
    let ids: BTreeSet<u64> = tasks.iter().map(|t| t.id).collect();
    assert_eq!(ids.len(), tasks.len());
    assert_eq!(tasks.len(), 6);
}

#[test]
fn empty_title_leaves_store_unchanged() {
    let mut session = session_at(10);
    create(&mut session, "keep me", "", "");
    let before = session.tasks();

    session.toggle_form();
    session.form_mut().set_title(" \n\t ");
    assert!(matches!(session.save(), Err(ActionError::EmptyTitle)));
    assert_eq!(session.tasks(), before);
}

#[test]
fn edit_preserves_id_and_completion() {
    let mut session = session_at(10);
    let id = create(&mut session, "Call mom", "weekly", "2026-01-01");
    session.toggle_complete(id).expect("toggle");

    session.begin_edit(id).expect("begin edit");
    assert_eq!(session.form().mode(), FormMode::Edit(id));
    assert_eq!(session.form_heading(), "Edit Task");
    assert_eq!(session.form_submit_label(), "Update Task");
    let form = session.form_mut();
    form.set_title("Call dad");
    form.set_desc("  monthly ");
    form.set_date("2026-02-02");
    assert_eq!(session.save().expect("save edit"), id);

    let tasks = session.tasks();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, id);
    assert!(tasks[0].completed);
    assert_eq!(tasks[0].title, "Call dad");
    assert_eq!(tasks[0].desc, "monthly");
    assert_eq!(tasks[0].date, "2026-02-02");
    assert_eq!(session.form().mode(), FormMode::Hidden);
    assert_eq!(session.form_heading(), "Add New Task");
}

#[test]
fn toggling_twice_restores_the_task() {
    let mut session = session_at(10);
    let id = create(&mut session, "Buy milk", "2%", "");
    let original = session.tasks();

    assert!(session.toggle_complete(id).expect("first toggle"));
    assert!(session.rows()[0].title_struck);
    assert!(!session.toggle_complete(id).expect("second toggle"));
    assert_eq!(session.tasks(), original);
}

#[test]
fn search_and_status_filters() {
    let mut session = session_at(10);
    create(&mut session, "Call mom", "", "");
    let milk = create(&mut session, "Buy milk", "", "");
    create(&mut session, "Pay rent", "call landlord first", "");
    session.toggle_complete(milk).expect("toggle");

    session.set_query("call");
    let visible: Vec<&str> = session.rows().iter().map(|r| r.title.as_str()).collect();
    assert_eq!(visible, vec!["Call mom", "Pay rent"]);

    session.set_query("");
    session.set_status(StatusFilter::Completed);
    let visible: Vec<u64> = session.rows().iter().map(|r| r.id).collect();
    assert_eq!(visible, vec![milk]);

    session.set_status(StatusFilter::Pending);
    assert_eq!(session.rows().len(), 2);

    session.set_status(StatusFilter::All);
    assert_eq!(session.rows().len(), 3);
}

#[test]
fn drag_reorder_forward_and_backward() {
    let mut session = session_at(10);
    let a = create(&mut session, "A", "", "");
    let _b = create(&mut session, "B", "", "");
    let c = create(&mut session, "C", "", "");
    let d = create(&mut session, "D", "", "");

    session.drag_start(a);
    assert!(session.drop_on(c).expect("forward drop"));
    assert_eq!(titles(&session.tasks()), vec!["B", "C", "A", "D"]);

    session.drag_start(d);
    assert!(session.drop_on(c).expect("backward drop"));
    assert_eq!(titles(&session.tasks()), vec!["B", "D", "C", "A"]);

    let shown: Vec<&str> = session.rows().iter().map(|r| r.title.as_str()).collect();
    assert_eq!(shown, vec!["B", "D", "C", "A"]);
}

#[test]
fn deleting_unknown_id_changes_nothing() {
    let mut session = session_at(10);
    create(&mut session, "only", "", "");
    let before = session.tasks();

    assert!(matches!(session.delete(404), Err(ActionError::NotFound(404))));
    assert!(matches!(session.toggle_complete(404), Err(ActionError::NotFound(404))));
    assert!(matches!(session.begin_edit(404), Err(ActionError::NotFound(404))));
    assert_eq!(session.tasks(), before);
}

#[test]
fn malformed_storage_opens_empty_and_is_overwritten_on_save() {
    let backend = MemoryBackend::with_item("tasks", "{not an array");
    let mut session = Session::with_clock(backend, Config::default(), FixedClock(5));
    assert!(session.rows().is_empty());

    create(&mut session, "fresh", "", "");
    let raw = session
        .store()
        .backend()
        .get_item("tasks")
        .expect("read slot")
        .expect("slot written");
    assert!(raw.starts_with("[{\"id\":5"));
}

#[test]
fn existing_storage_is_rendered_on_open() {
    let raw = r#"[{"id":2,"title":"second","desc":"","date":"","completed":true},
                  {"id":1,"title":"first"}]"#;
    let session = Session::with_clock(
        MemoryBackend::with_item("tasks", raw),
        Config::default(),
        FixedClock(5),
    );
    let rows = session.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].title, "second");
    assert!(rows[0].completed);
    assert_eq!(rows[1].desc, "");
}

#[test]
fn configured_storage_key_is_honoured() {
    let config = Config::from_toml_str("storage_key = \"taskpad.tasks\"").expect("config");
    let mut session = Session::with_clock(MemoryBackend::new(), config, FixedClock(5));
    create(&mut session, "keyed", "", "");

    let backend = session.store().backend();
    assert!(backend.get_item("tasks").expect("read").is_none());
    assert!(backend.get_item("taskpad.tasks").expect("read").is_some());
}

#[test]
fn create_after_highest_possible_id_still_saves() {
    let raw = r#"[{"id":18446744073709551615,"title":"max"}]"#;
    let mut session = Session::with_clock(
        MemoryBackend::with_item("tasks", raw),
        Config::default(),
        FixedClock(5),
    );

    let id = create(&mut session, "new", "", "");
    assert_eq!(id, 0);
    let ids: Vec<u64> = session.tasks().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![u64::MAX, 0]);
}

#[test]
fn null_fields_survive_open_and_next_save() {
    let raw = r#"[{"id":1,"title":"keep","desc":"x","date":"","completed":false},
                  {"id":2,"title":"other","desc":null,"date":null,"completed":false}]"#;
    let mut session = Session::with_clock(
        MemoryBackend::with_item("tasks", raw),
        Config::default(),
        FixedClock(5),
    );
    assert_eq!(session.rows().len(), 2);

    create(&mut session, "new", "", "");
    assert_eq!(titles(&session.tasks()), vec!["keep", "other", "new"]);
}
