//! Integration tests driving the engine the way a table view would
//!
//! Simulates the render loop: the memoized factory is called with the
//! owner's current state, commands run against the returned paginator, and
//! each commit is merged back into the owner's JSON state document.

use pagenav::{
    create_paginator, CommitFn, Mode, PageChange, Paginator, PaginatorFactory, Row, RowSet,
};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

fn rows(count: usize) -> RowSet {
    Rc::new(
        (0..count)
            .map(|i| json!({ "id": i, "name": format!("row-{i}") }))
            .collect::<Vec<Row>>(),
    )
}

/// Commit sink that records every payload
fn recorder() -> (CommitFn, Rc<RefCell<Vec<PageChange>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let commit: CommitFn = Rc::new(move |change| sink.borrow_mut().push(change));
    (commit, log)
}

// ============================================================================
// End-to-End Scenarios
// ============================================================================

#[test]
fn test_client_side_walkthrough() {
    // 25 rows, 10 per page: pages 0, 1 and a partial page 2
    let (commit, log) = recorder();
    let pager = create_paginator(Mode::ClientSide, 0, 10, None, commit, rows(25));

    assert_eq!(pager.last_page(), Some(2));

    pager.load_next();
    pager.load_next();
    assert_eq!(pager.current_page(), 2);

    // third load_next is a no-op at the last page
    pager.load_next();
    assert_eq!(pager.current_page(), 2);

    let log = log.borrow();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].page_current, 1);
    assert_eq!(log[1].page_current, 2);
}

#[test]
fn test_render_loop_reconstruction() {
    // The owner holds page_current; every commit triggers a re-render that
    // calls the factory again with the committed value.
    let committed = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&committed);
    let commit: CommitFn = Rc::new(move |change: PageChange| {
        sink.borrow_mut().push(change.page_current);
    });
    let data = rows(42);
    let mut factory = PaginatorFactory::new();

    let mut page_current = 0;
    for _ in 0..10 {
        let pager = factory.get(
            Mode::ClientSide,
            page_current,
            10,
            None,
            Rc::clone(&commit),
            Rc::clone(&data),
        );
        pager.load_next();
        if let Some(&latest) = committed.borrow().last() {
            page_current = latest;
        }
    }

    // 42 rows / 10 per page: navigation stops at page 4
    assert_eq!(page_current, 4);
    assert_eq!(*committed.borrow(), vec![1, 2, 3, 4]);
}

#[test]
fn test_commit_payload_merges_into_state_document() {
    // The owner's state is a JSON document; a commit merges flat into it.
    let state = Rc::new(RefCell::new(json!({
        "page_current": 0,
        "active_cell": {"row": 2, "column": 1},
        "selected_rows": [2, 5],
        "sort_by": "name",
    })));
    let sink = Rc::clone(&state);
    let commit: CommitFn = Rc::new(move |change: PageChange| {
        let patch = serde_json::to_value(change).unwrap();
        let mut state = sink.borrow_mut();
        for (key, value) in patch.as_object().unwrap() {
            state[key] = value.clone();
        }
    });

    let pager = create_paginator(Mode::ClientSide, 0, 10, None, commit, rows(25));
    pager.load_next();

    let state = state.borrow();
    assert_eq!(state["page_current"], 1);
    // selection cleared by the page change
    assert_eq!(state["active_cell"], json!(null));
    assert_eq!(state["selected_rows"], json!([]));
    // unrelated state untouched
    assert_eq!(state["sort_by"], "name");
}

#[test]
fn test_server_side_unknown_total_streams_forward() {
    let (commit, log) = recorder();
    let pager = create_paginator(Mode::ServerSide, 0, 10, None, commit, rows(0));

    // no reported count: always assume more pages
    for expected in 1..=5 {
        assert!(pager.has_next());
        pager.load_next();
        assert_eq!(pager.current_page(), expected);
    }

    // unknown last page: load_last cannot act
    pager.load_last();
    assert_eq!(pager.current_page(), 5);
    assert_eq!(log.borrow().len(), 5);
}

#[test]
fn test_server_side_known_total() {
    let (commit, _) = recorder();
    let pager = create_paginator(Mode::ServerSide, 0, 10, Some(5), commit, rows(0));

    assert_eq!(pager.last_page(), Some(4));

    pager.go_to_page(1);
    assert_eq!(pager.current_page(), 0);
    pager.go_to_page(10);
    assert_eq!(pager.current_page(), 4);
    assert!(!pager.has_last());
}

#[test]
fn test_memoized_factory_across_renders() {
    let (commit, _) = recorder();
    let data = rows(25);
    let mut factory = PaginatorFactory::new();

    let first_render = factory.get(
        Mode::ClientSide,
        0,
        10,
        None,
        Rc::clone(&commit),
        Rc::clone(&data),
    );
    let second_render = factory.get(
        Mode::ClientSide,
        0,
        10,
        None,
        Rc::clone(&commit),
        Rc::clone(&data),
    );
    assert!(Rc::ptr_eq(&first_render, &second_render));

    // a committed page change re-invokes the factory with a new index
    let after_commit = factory.get(
        Mode::ClientSide,
        1,
        10,
        None,
        Rc::clone(&commit),
        Rc::clone(&data),
    );
    assert!(!Rc::ptr_eq(&second_render, &after_commit));
    assert_eq!(after_commit.current_page(), 1);
}

#[test]
fn test_mode_change_reshapes_paginator() {
    let (commit, _) = recorder();
    let data = rows(25);
    let mut factory = PaginatorFactory::new();

    let client = factory.get(
        Mode::ClientSide,
        0,
        10,
        None,
        Rc::clone(&commit),
        Rc::clone(&data),
    );
    assert_eq!(client.last_page(), Some(2));

    // same inputs, server-side mode: bounds now come from the count
    let server = factory.get(
        Mode::ServerSide,
        0,
        10,
        None,
        Rc::clone(&commit),
        Rc::clone(&data),
    );
    assert_eq!(server.last_page(), None);
    assert!(server.has_next());
}

#[test]
fn test_mode_parses_from_config_value() {
    let mode: Mode = serde_json::from_value(json!("server_side")).unwrap();
    assert_eq!(mode, Mode::ServerSide);

    let err = "infinite_scroll".parse::<Mode>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unknown pagination mode: 'infinite_scroll'"
    );
}
