use pixel_forge::history::MAX_HISTORY;
use pixel_forge::{Color, Grid, GridHistory};

fn blank() -> Grid {
    Grid::new(8, 8).unwrap()
}

/// A grid distinguishable by `n`
fn numbered(n: usize) -> Grid {
    blank().set_cell((n % 8) as i32, (n / 8) as i32, Color::RED)
}

#[test]
fn test_initial_history() {
    let history = GridHistory::new(blank());

    assert_eq!(history.len(), 1);
    assert_eq!(history.cursor(), 0);
    assert_eq!(history.capacity(), MAX_HISTORY);
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert!(history.current().is_blank());
}

#[test]
fn test_commit_undo_redo() {
    let mut history = GridHistory::new(blank());
    assert!(history.commit(numbered(1)));
    assert!(history.commit(numbered(2)));
    assert_eq!(history.len(), 3);
    assert_eq!(*history.current(), numbered(2));

    assert_eq!(*history.undo(), numbered(1));
    assert_eq!(*history.undo(), blank());
    assert!(!history.can_undo());
    // Undo at the oldest snapshot stays put
    assert_eq!(*history.undo(), blank());

    assert_eq!(*history.redo(), numbered(1));
    assert_eq!(*history.redo(), numbered(2));
    assert!(!history.can_redo());
    assert_eq!(*history.redo(), numbered(2));
}

#[test]
fn test_commit_after_undo_discards_future() {
    let mut history = GridHistory::new(blank());
    history.commit(numbered(1));
    history.commit(numbered(2));
    history.undo();

    assert!(history.commit(numbered(3)));
    assert_eq!(history.len(), 3);
    assert!(!history.can_redo());

    assert_eq!(*history.undo(), numbered(1));
    assert_eq!(*history.redo(), numbered(3));
}

#[test]
fn test_equal_commit_is_noop() {
    let mut history = GridHistory::new(blank());
    assert!(!history.commit(blank()));
    assert_eq!(history.len(), 1);

    history.commit(numbered(4));
    assert!(!history.commit(numbered(4)));
    assert_eq!(history.len(), 2);
}

#[test]
fn test_equal_commit_keeps_redo_future() {
    let mut history = GridHistory::new(blank());
    history.commit(numbered(1));
    history.undo();

    assert!(!history.commit(blank()));
    assert!(history.can_redo());
}

#[test]
fn test_oldest_snapshots_are_evicted() {
    let mut history = GridHistory::new(blank());
    for n in 1..=60 {
        history.commit(numbered(n));
    }
    assert_eq!(history.len(), MAX_HISTORY);
    assert_eq!(*history.current(), numbered(60));

    let mut steps = 0;
    while history.can_undo() {
        history.undo();
        steps += 1;
    }
    assert_eq!(steps, MAX_HISTORY - 1);
    // Snapshots 0 through 10 were dropped
    assert_eq!(*history.current(), numbered(11));
}

#[test]
fn test_custom_capacity() {
    let mut history = GridHistory::with_capacity(blank(), 3);
    for n in 1..=5 {
        history.commit(numbered(n));
    }
    assert_eq!(history.len(), 3);
    assert_eq!(*history.undo(), numbered(4));
    assert_eq!(*history.undo(), numbered(3));
    assert!(!history.can_undo());

    let single = GridHistory::with_capacity(blank(), 0);
    assert_eq!(single.capacity(), 1);
}

#[test]
fn test_reset_starts_over() {
    let mut history = GridHistory::new(blank());
    history.commit(numbered(1));
    history.commit(numbered(2));
    history.undo();

    let fresh = Grid::new(16, 16).unwrap();
    history.reset(fresh.clone());
    assert_eq!(history.len(), 1);
    assert_eq!(*history.current(), fresh);
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}
