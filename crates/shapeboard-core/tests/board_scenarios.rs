//! Integration tests: end-to-end board scenarios.
//!
//! Drives the board purely through host-facing input (mount, add, pointer
//! and key events) and checks store, selection, and listener state.

use kurbo::{Point, Size};
use pretty_assertions::assert_eq;
use shapeboard_core::{
    BoardConfig, BoardEvent, Channel, KeyEvent, MouseButton, PointerEvent, RandomSource,
    SeededRng, ShapeBoard,
};

/// Returns queued values from `in_range` verbatim, so placements are exact.
/// Falls back to the low end of the range once the queue is drained.
struct ScriptedPlacement {
    values: Vec<f64>,
}

impl RandomSource for ScriptedPlacement {
    fn next_unit(&mut self) -> f64 {
        0.0
    }

    fn in_range(&mut self, lo: f64, _hi: f64) -> f64 {
        if self.values.is_empty() {
            lo
        } else {
            self.values.remove(0)
        }
    }
}

fn scripted_board(values: Vec<f64>, container: Size) -> ShapeBoard {
    let mut board = ShapeBoard::with_rng(
        BoardConfig::default(),
        Box::new(ScriptedPlacement { values }),
    )
    .unwrap();
    board.mount(container).unwrap();
    board
}

fn down(x: f64, y: f64) -> PointerEvent {
    PointerEvent::Down {
        position: Point::new(x, y),
        button: MouseButton::Left,
    }
}

fn up(x: f64, y: f64) -> PointerEvent {
    PointerEvent::Up {
        position: Point::new(x, y),
        button: MouseButton::Left,
    }
}

fn moved(x: f64, y: f64) -> PointerEvent {
    PointerEvent::Move {
        position: Point::new(x, y),
    }
}

fn backspace() -> KeyEvent {
    KeyEvent::Pressed("Backspace".to_string())
}

// ─── Reference scenario ────────────────────────────────────────────────

#[test]
fn add_click_drag_clamp_delete() {
    let mut board = scripted_board(vec![40.0, 100.0, 100.0], Size::new(400.0, 300.0));

    let a = board.add().unwrap();
    let circle = board.circle(a).unwrap();
    assert_eq!((circle.size, circle.x, circle.y), (40.0, 100.0, 100.0));

    // Click selects
    board.handle_pointer(down(120.0, 120.0));
    board.handle_pointer(up(120.0, 120.0));
    assert!(board.is_selected(a));

    // Drag far past the bottom-right corner
    board.handle_pointer(down(120.0, 120.0));
    board.handle_pointer(moved(500.0, 500.0));
    let events = board.handle_pointer(up(500.0, 500.0));
    assert_eq!(events, vec![BoardEvent::GestureEnded]);

    let circle = board.circle(a).unwrap();
    assert_eq!((circle.x, circle.y), (360.0, 260.0));
    assert!(board.is_selected(a));

    assert!(board.handle_key(&backspace()));
    assert_eq!(board.len(), 0);
    assert!(board.selection().is_empty());
}

// ─── Drag ──────────────────────────────────────────────────────────────

#[test]
fn drag_moves_by_pointer_delta() {
    let mut board = scripted_board(vec![40.0, 100.0, 100.0], Size::new(400.0, 300.0));
    let a = board.add().unwrap();
    board.toggle(a);

    board.handle_pointer(down(110.0, 130.0));
    board.handle_pointer(moved(135.0, 120.0));
    board.handle_pointer(moved(160.0, 90.0));

    let circle = board.circle(a).unwrap();
    assert_eq!((circle.x, circle.y), (150.0, 60.0));
}

#[test]
fn drag_saturates_at_origin() {
    let mut board = scripted_board(vec![40.0, 100.0, 100.0], Size::new(400.0, 300.0));
    let a = board.add().unwrap();
    board.toggle(a);

    board.handle_pointer(down(120.0, 120.0));
    board.handle_pointer(moved(-300.0, 50.0));

    let circle = board.circle(a).unwrap();
    assert_eq!((circle.x, circle.y), (0.0, 30.0));
}

#[test]
fn drag_uses_single_grabbed_offset_for_whole_selection() {
    let mut board = scripted_board(
        vec![40.0, 100.0, 100.0, 20.0, 300.0, 200.0],
        Size::new(400.0, 300.0),
    );
    let a = board.add().unwrap();
    let b = board.add().unwrap();
    board.toggle(a);
    board.toggle(b);

    // Grab A 20px in from its corner; both circles follow A's offset
    board.handle_pointer(down(120.0, 120.0));
    board.handle_pointer(moved(70.0, 70.0));

    let a = board.circle(a).unwrap();
    let b = board.circle(b).unwrap();
    assert_eq!(a.top_left(), Point::new(50.0, 50.0));
    assert_eq!(b.top_left(), Point::new(50.0, 50.0));
}

#[test]
fn drag_from_empty_space_offsets_from_container_origin() {
    let mut board = scripted_board(vec![40.0, 100.0, 100.0], Size::new(400.0, 300.0));
    let a = board.add().unwrap();
    board.toggle(a);

    board.handle_pointer(down(300.0, 250.0));
    board.handle_pointer(moved(310.0, 255.0));
    board.handle_pointer(up(310.0, 255.0));

    assert_eq!(board.circle(a).unwrap().top_left(), Point::new(10.0, 5.0));
    assert!(board.is_selected(a));
}

#[test]
fn drag_unselected_circle_does_not_move_it() {
    let mut board = scripted_board(vec![40.0, 100.0, 100.0], Size::new(400.0, 300.0));
    let a = board.add().unwrap();

    board.handle_pointer(down(120.0, 120.0));
    board.handle_pointer(moved(220.0, 220.0));
    board.handle_pointer(up(220.0, 220.0));

    let circle = board.circle(a).unwrap();
    assert_eq!(circle.top_left(), Point::new(100.0, 100.0));
    assert!(!board.is_selected(a));
}

#[test]
fn drag_released_over_grabbed_circle_counts_as_click() {
    let mut board = scripted_board(vec![40.0, 100.0, 100.0], Size::new(400.0, 300.0));
    let a = board.add().unwrap();
    board.toggle(a);

    board.handle_pointer(down(120.0, 120.0));
    board.handle_pointer(moved(170.0, 170.0));
    board.handle_pointer(up(170.0, 170.0));

    assert_eq!(board.circle(a).unwrap().top_left(), Point::new(150.0, 150.0));
    assert!(!board.is_selected(a));
}

// ─── Selection and delete ──────────────────────────────────────────────

#[test]
fn double_toggle_restores_selection() {
    let mut board = scripted_board(Vec::new(), Size::new(400.0, 300.0));
    let a = board.add().unwrap();
    let b = board.add().unwrap();
    board.toggle(a);
    let before = board.selection().clone();

    board.toggle(b);
    board.toggle(b);

    assert_eq!(board.selection(), &before);
}

#[test]
fn delete_removes_exactly_the_selection() {
    let mut board =
        ShapeBoard::with_rng(BoardConfig::default(), Box::new(SeededRng::new(5))).unwrap();
    board.mount(Size::new(640.0, 480.0)).unwrap();

    let ids: Vec<_> = (0..10).map(|_| board.add().unwrap()).collect();
    for id in ids.iter().step_by(2) {
        board.toggle(*id);
    }

    let removed = board.delete_selected();

    assert_eq!(removed, ids.iter().step_by(2).copied().collect::<Vec<_>>());
    assert_eq!(board.len(), 5);
    assert!(board.selection().is_empty());
    for circle in board.circles() {
        assert!(!board.is_selected(circle.id()));
    }
}

#[test]
fn delete_with_nothing_selected_is_noop() {
    let mut board = scripted_board(Vec::new(), Size::new(400.0, 300.0));
    board.add().unwrap();

    assert!(board.handle_key(&backspace()));
    assert_eq!(board.len(), 1);
    assert!(board.selection().is_empty());
}

// ─── Add ───────────────────────────────────────────────────────────────

#[test]
fn many_adds_stay_in_bounds() {
    let container = Size::new(400.0, 300.0);
    let mut board =
        ShapeBoard::with_rng(BoardConfig::default(), Box::new(SeededRng::new(11))).unwrap();
    board.mount(container).unwrap();

    for _ in 0..500 {
        board.add().unwrap();
    }

    assert_eq!(board.len(), 500);
    for circle in board.circles() {
        assert!(circle.size >= 0.05 * container.width);
        assert!(circle.size <= 0.20 * container.width);
        assert!(circle.x >= 0.0 && circle.x <= container.width - circle.size);
        assert!(circle.y >= 0.0 && circle.y <= container.height - circle.size);
    }
}

#[test]
fn back_to_back_adds_have_distinct_ids() {
    let mut board = scripted_board(Vec::new(), Size::new(400.0, 300.0));
    let a = board.add().unwrap();
    let b = board.add().unwrap();
    assert_ne!(a, b);
}

// ─── Listener lifecycle ────────────────────────────────────────────────

#[test]
fn repeated_gestures_do_not_leak_listeners() {
    let mut board = scripted_board(vec![40.0, 100.0, 100.0], Size::new(400.0, 300.0));
    board.add().unwrap();

    for i in 0..20 {
        let offset = i as f64;
        board.handle_pointer(down(120.0, 120.0));
        board.handle_pointer(moved(130.0 + offset, 130.0));
        board.handle_pointer(up(130.0 + offset, 130.0));
    }

    let listeners = board.listeners();
    assert_eq!(listeners.listener_count(Channel::PointerMove), 0);
    assert_eq!(listeners.listener_count(Channel::PointerUp), 0);
    assert_eq!(listeners.listener_count(Channel::KeyDown), 1);
}

#[test]
fn dropped_board_releases_listeners() {
    let board = scripted_board(Vec::new(), Size::new(400.0, 300.0));
    let listeners = board.listeners().clone();
    assert_eq!(listeners.active_count(), 1);

    drop(board);
    assert_eq!(listeners.active_count(), 0);
}
