//! Translation of egui input into board events.

use kurbo::Point;
use shapeboard_core::input::DELETE_KEY;
use shapeboard_core::{KeyEvent, MouseButton, PointerEvent};

/// Input routed to the board.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardInput {
    Pointer(PointerEvent),
    Key(KeyEvent),
}

/// Translate one frame of egui events into board input.
///
/// Positions become container-local. Pointer-down is only forwarded inside
/// `container`; moves and releases are forwarded wherever they happen so a
/// gesture can end outside the container. Keys are dropped while a text
/// widget owns the keyboard.
pub fn translate_events(
    events: &[egui::Event],
    container: egui::Rect,
    keyboard_free: bool,
) -> Vec<BoardInput> {
    let to_local = |pos: egui::Pos2| {
        Point::new((pos.x - container.min.x) as f64, (pos.y - container.min.y) as f64)
    };

    events
        .iter()
        .filter_map(|event| match event {
            egui::Event::PointerButton {
                pos,
                button,
                pressed,
                ..
            } => {
                let button = map_button(*button)?;
                let position = to_local(*pos);
                if *pressed {
                    container.contains(*pos).then_some(BoardInput::Pointer(
                        PointerEvent::Down { position, button },
                    ))
                } else {
                    Some(BoardInput::Pointer(PointerEvent::Up { position, button }))
                }
            }
            egui::Event::PointerMoved(pos) => Some(BoardInput::Pointer(PointerEvent::Move {
                position: to_local(*pos),
            })),
            egui::Event::Key {
                key: egui::Key::Backspace,
                pressed,
                ..
            } if keyboard_free => {
                let name = DELETE_KEY.to_string();
                Some(BoardInput::Key(if *pressed {
                    KeyEvent::Pressed(name)
                } else {
                    KeyEvent::Released(name)
                }))
            }
            _ => None,
        })
        .collect()
}

fn map_button(button: egui::PointerButton) -> Option<MouseButton> {
    match button {
        egui::PointerButton::Primary => Some(MouseButton::Left),
        egui::PointerButton::Secondary => Some(MouseButton::Right),
        egui::PointerButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn container() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(100.0, 50.0), egui::vec2(400.0, 300.0))
    }

    fn button(x: f32, y: f32, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos: egui::pos2(x, y),
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    fn backspace() -> egui::Event {
        egui::Event::Key {
            key: egui::Key::Backspace,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn test_positions_become_local() {
        let inputs = translate_events(&[button(120.0, 70.0, true)], container(), true);
        assert_eq!(
            inputs,
            vec![BoardInput::Pointer(PointerEvent::Down {
                position: Point::new(20.0, 20.0),
                button: MouseButton::Left,
            })]
        );
    }

    #[test]
    fn test_press_outside_container_dropped() {
        let inputs = translate_events(&[button(10.0, 10.0, true)], container(), true);
        assert!(inputs.is_empty());
    }

    #[test]
    fn test_release_and_move_outside_forwarded() {
        let events = [
            egui::Event::PointerMoved(egui::pos2(900.0, 900.0)),
            button(900.0, 900.0, false),
        ];
        let inputs = translate_events(&events, container(), true);
        assert_eq!(
            inputs,
            vec![
                BoardInput::Pointer(PointerEvent::Move {
                    position: Point::new(800.0, 850.0),
                }),
                BoardInput::Pointer(PointerEvent::Up {
                    position: Point::new(800.0, 850.0),
                    button: MouseButton::Left,
                }),
            ]
        );
    }

    #[test]
    fn test_backspace_forwarded_when_keyboard_free() {
        let inputs = translate_events(&[backspace()], container(), true);
        assert_eq!(
            inputs,
            vec![BoardInput::Key(KeyEvent::Pressed("Backspace".to_string()))]
        );
    }

    #[test]
    fn test_backspace_dropped_when_text_has_focus() {
        assert!(translate_events(&[backspace()], container(), false).is_empty());
    }

    #[test]
    fn test_other_keys_dropped() {
        let event = egui::Event::Key {
            key: egui::Key::Delete,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        };
        assert!(translate_events(&[event], container(), true).is_empty());
    }
}
