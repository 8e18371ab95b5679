use board::{Board, ItemId, Priority, RemoteError, Status, WorkItem};

use super::*;

fn item(id: i64, status: Status) -> WorkItem {
    WorkItem {
        id: ItemId(id),
        title: format!("case {id}"),
        description: String::new(),
        priority: Priority::Low,
        status,
        created_at: String::new(),
        owner_id: None,
        comments: Vec::new(),
    }
}

fn board_with(status: Status) -> Board {
    Board::from_items(vec![item(7, status)])
}

fn rejected(detail: &str) -> SyncError {
    SyncError::Rejected {
        item: ItemId(7),
        target: Status::Closed,
        source: RemoteError::from_response(500, &format!(r#"{{"detail":"{detail}"}}"#)),
    }
}

// =============================================================
// Loading
// =============================================================

#[test]
fn default_state_is_idle_and_empty() {
    let state = BoardState::default();
    assert!(state.board.is_empty());
    assert!(!state.is_busy());
    assert_eq!(state.generation, 0);
}

#[test]
fn successful_load_adopts_snapshot() {
    let mut state = BoardState::default();
    state.begin_load();
    assert!(state.is_busy());

    let outcome = Ok(LoadOutcome::Applied { ticket: 1, items: 1 });
    state.finish_load(&outcome, board_with(Status::Open), 1);

    assert!(!state.is_busy());
    assert_eq!(state.board.column(Status::Open).len(), 1);
    assert_eq!(state.generation, 1);
}

#[test]
fn failed_load_keeps_board_and_reports() {
    let mut state = BoardState::default();
    state.finish_load(&Ok(LoadOutcome::Applied { ticket: 1, items: 1 }), board_with(Status::Open), 1);

    state.begin_load();
    let failure = Err(LoadError::from(RemoteError::Transport("offline".to_owned())));
    state.finish_load(&failure, Board::default(), 1);

    assert_eq!(state.board.column(Status::Open).len(), 1);
    assert_eq!(state.error.as_deref(), Some("Failed to load cases"));
}

#[test]
fn older_generation_never_overwrites_newer() {
    let mut state = BoardState::default();
    state.finish_load(&Ok(LoadOutcome::Applied { ticket: 2, items: 1 }), board_with(Status::Closed), 2);
    state.finish_load(&Ok(LoadOutcome::Superseded { ticket: 1, current: 2 }), board_with(Status::Open), 1);

    assert_eq!(state.board.column(Status::Closed).len(), 1);
    assert_eq!(state.generation, 2);
}

// =============================================================
// Status changes
// =============================================================

#[test]
fn change_tracks_pending_count() {
    let mut state = BoardState::default();
    state.begin_change();
    state.begin_change();
    assert_eq!(state.pending, 2);

    state.finish_change(&Ok(LoadOutcome::Applied { ticket: 1, items: 1 }), board_with(Status::Test), 1);
    assert_eq!(state.pending, 1);
    assert!(state.is_busy());
}

#[test]
fn rejected_change_shows_service_detail() {
    let mut state = BoardState::default();
    state.finish_load(&Ok(LoadOutcome::Applied { ticket: 1, items: 1 }), board_with(Status::Open), 1);

    state.begin_change();
    state.finish_change(&Err(rejected("Nicht berechtigt")), board_with(Status::Open), 1);

    assert_eq!(state.error.as_deref(), Some("Nicht berechtigt"));
    assert_eq!(state.board.column(Status::Open).len(), 1);
    assert_eq!(state.pending, 0);
}

#[test]
fn next_action_clears_error() {
    let mut state = BoardState { error: Some("old".to_owned()), ..BoardState::default() };
    state.begin_change();
    assert_eq!(state.error, None);
}

#[test]
fn refused_drop_clears_highlight_only() {
    let mut state = BoardState::default();
    state.feedback.start(ItemId(7));
    state.feedback.enter(Status::Test);

    state.drop_refused(&DropError::UnknownItem(ItemId(7)));

    assert_eq!(state.feedback, DragFeedback::default());
    assert_eq!(state.error, None);
}
