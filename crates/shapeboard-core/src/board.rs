//! The ShapeBoard component: store, selection, and interaction controller.

use crate::circle::{Circle, CircleId};
use crate::config::BoardConfig;
use crate::error::{BoardError, BoardResult};
use crate::gesture::DragGesture;
use crate::input::{KeyEvent, MouseButton, PointerEvent};
use crate::listener::{Channel, ListenerRegistry, Subscription};
use crate::rng::{RandomSource, SeededRng};
use crate::selection::SelectionSet;
use crate::store::ShapeStore;
use kurbo::{Point, Rect, Size, Vec2};

/// State change reported back to the host after handling input.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardEvent {
    Added(CircleId),
    SelectionChanged,
    Moved(usize),
    Deleted(Vec<CircleId>),
    GestureStarted,
    GestureEnded,
}

/// A bounded container of circles with toggle selection, group drag and
/// keyboard deletion.
///
/// The board is host-agnostic: the host measures the container, delivers
/// pointer/key events in container-local coordinates, and repaints when
/// [`ShapeBoard::take_repaint`] reports a change.
pub struct ShapeBoard {
    config: BoardConfig,
    store: ShapeStore,
    selection: SelectionSet,
    gesture: DragGesture,
    /// Measured container size; `None` until mounted.
    container: Option<Size>,
    listeners: ListenerRegistry,
    /// Key-down listener, held while mounted.
    keyboard: Option<Subscription>,
    rng: Box<dyn RandomSource>,
    repaint: bool,
}

impl Default for ShapeBoard {
    fn default() -> Self {
        Self::from_parts(BoardConfig::default(), Box::new(SeededRng::from_entropy()))
    }
}

impl std::fmt::Debug for ShapeBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapeBoard")
            .field("circles", &self.store.len())
            .field("selected", &self.selection.len())
            .field("container", &self.container)
            .field("dragging", &self.gesture.is_dragging())
            .finish()
    }
}

impl ShapeBoard {
    /// Create a board with the given configuration.
    pub fn new(config: BoardConfig) -> BoardResult<Self> {
        Self::with_rng(config, Box::new(SeededRng::from_entropy()))
    }

    /// Create a board that draws placement randomness from `rng`.
    pub fn with_rng(config: BoardConfig, rng: Box<dyn RandomSource>) -> BoardResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(config, rng))
    }

    fn from_parts(config: BoardConfig, rng: Box<dyn RandomSource>) -> Self {
        Self {
            config,
            store: ShapeStore::new(),
            selection: SelectionSet::new(),
            gesture: DragGesture::default(),
            container: None,
            listeners: ListenerRegistry::new(),
            keyboard: None,
            rng,
            repaint: true,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Registry holding the board's global listeners.
    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    // --- Container lifecycle ---

    /// Attach the board to a measured container and start listening for keys.
    pub fn mount(&mut self, size: Size) -> BoardResult<()> {
        validate_container(size)?;
        if self.container.is_none() {
            log::debug!("Board mounted at {}x{}", size.width, size.height);
        }
        self.container = Some(size);
        if self.keyboard.is_none() {
            self.keyboard = Some(self.listeners.subscribe(Channel::KeyDown));
        }
        self.repaint = true;
        Ok(())
    }

    /// Update the container size. Existing circles are not moved.
    pub fn resize(&mut self, size: Size) -> BoardResult<()> {
        if self.container == Some(size) {
            return Ok(());
        }
        self.mount(size)
    }

    /// Detach from the container, releasing every global listener.
    pub fn unmount(&mut self) {
        self.gesture.end();
        self.keyboard = None;
        self.container = None;
        log::debug!("Board unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.container.is_some()
    }

    pub fn container_size(&self) -> Option<Size> {
        self.container
    }

    // --- Shape store ---

    /// Add a randomly sized circle at a random position inside the container.
    pub fn add(&mut self) -> BoardResult<CircleId> {
        let Some(container) = self.container else {
            log::warn!("Add rejected: container not mounted");
            return Err(BoardError::NotMounted);
        };
        let id = self
            .store
            .add_random(container, &self.config, self.rng.as_mut());
        log::debug!("Added circle {} ({} total)", id, self.store.len());
        self.repaint = true;
        Ok(id)
    }

    /// Reposition every selected circle to `pointer - offset`, clamped.
    pub fn move_selected(&mut self, pointer: Point, offset: Vec2) -> usize {
        let Some(container) = self.container else {
            return 0;
        };
        let moved = self
            .store
            .move_selected(&self.selection, pointer, offset, container);
        if moved > 0 {
            self.repaint = true;
        }
        moved
    }

    /// Remove every selected circle, then clear the selection.
    pub fn delete_selected(&mut self) -> Vec<CircleId> {
        let mut selection = self.selection.clone();
        let removed = self.store.delete_selected(&mut selection);
        self.set_selection(selection);
        if !removed.is_empty() {
            log::debug!("Deleted {} circle(s)", removed.len());
        }
        self.repaint = true;
        removed
    }

    pub fn circles(&self) -> impl Iterator<Item = &Circle> {
        self.store.iter()
    }

    pub fn circle(&self, id: CircleId) -> Option<&Circle> {
        self.store.get(id)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    // --- Selection tracker ---

    /// Toggle a circle in or out of the selection.
    ///
    /// Ids not in the store are ignored. Returns whether the selection changed.
    pub fn toggle(&mut self, id: CircleId) -> bool {
        if !self.store.contains(id) {
            return false;
        }
        let next = self.selection.toggled(id);
        self.set_selection(next);
        true
    }

    pub fn clear_selection(&mut self) {
        let next = self.selection.cleared();
        self.set_selection(next);
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn is_selected(&self, id: CircleId) -> bool {
        self.selection.contains(id)
    }

    /// Install a new selection value.
    ///
    /// The key-down listener is released and re-acquired so it always
    /// observes the current selection; at most one is ever live.
    fn set_selection(&mut self, selection: SelectionSet) {
        self.selection = selection;
        self.repaint = true;
        if self.container.is_some() {
            drop(self.keyboard.take());
            self.keyboard = Some(self.listeners.subscribe(Channel::KeyDown));
        }
    }

    // --- Interaction controller ---

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    pub fn gesture(&self) -> &DragGesture {
        &self.gesture
    }

    /// Handle a pointer event in container-local coordinates.
    ///
    /// Pointer-down starts a gesture only inside the container. Move and up
    /// are global: they are honoured wherever they land, but only while the
    /// gesture's listeners are attached.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Vec<BoardEvent> {
        let mut events = Vec::new();
        match event {
            PointerEvent::Down {
                position,
                button: MouseButton::Left,
            } => {
                let Some(container) = self.container else {
                    return events;
                };
                if !container_rect(container).contains(position) {
                    return events;
                }
                let grabbed = self.store.circle_at(position);
                self.gesture.begin(&self.listeners, position, grabbed);
                log::debug!(
                    "Gesture started at ({:.1}, {:.1}) on {:?}",
                    position.x,
                    position.y,
                    self.gesture.grabbed()
                );
                events.push(BoardEvent::GestureStarted);
            }
            PointerEvent::Down { .. } => {}
            PointerEvent::Move { position } => {
                if !self.listeners.is_listening(Channel::PointerMove) {
                    return events;
                }
                if let Some(offset) = self.gesture.offset() {
                    let moved = self.move_selected(position, offset);
                    if moved > 0 {
                        events.push(BoardEvent::Moved(moved));
                    }
                }
            }
            PointerEvent::Up { position, button } => {
                if !self.listeners.is_listening(Channel::PointerUp) {
                    return events;
                }
                let Some(end) = self.gesture.end() else {
                    return events;
                };
                events.push(BoardEvent::GestureEnded);
                log::debug!("Gesture ended at ({:.1}, {:.1})", position.x, position.y);

                // Down and up on the same circle is a click
                let released_on = self.store.circle_at(position).map(Circle::id);
                if button == MouseButton::Left
                    && end.grabbed.is_some()
                    && end.grabbed == released_on
                {
                    if let Some(id) = end.grabbed {
                        if self.toggle(id) {
                            events.push(BoardEvent::SelectionChanged);
                        }
                    }
                }
            }
        }
        events
    }

    /// Handle a keyboard event. Returns whether the board consumed it.
    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        if !self.listeners.is_listening(Channel::KeyDown) || !event.is_delete() {
            return false;
        }
        self.delete_selected();
        true
    }

    /// Add a circle and report it as an event, for hosts driving the
    /// "Add circle" control.
    pub fn handle_add(&mut self) -> BoardResult<BoardEvent> {
        self.add().map(BoardEvent::Added)
    }

    /// Return whether anything changed since the last call, and reset.
    pub fn take_repaint(&mut self) -> bool {
        std::mem::take(&mut self.repaint)
    }
}

impl Drop for ShapeBoard {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn container_rect(size: Size) -> Rect {
    Rect::from_origin_size(Point::ZERO, size)
}

fn validate_container(size: Size) -> BoardResult<()> {
    let valid = size.width.is_finite()
        && size.height.is_finite()
        && size.width > 0.0
        && size.height > 0.0;
    if valid {
        Ok(())
    } else {
        Err(BoardError::InvalidContainer {
            width: size.width,
            height: size.height,
        })
    }
}
