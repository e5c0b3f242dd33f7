//! Ordered store of circles.

use crate::circle::{Circle, CircleId};
use crate::config::BoardConfig;
use crate::rng::RandomSource;
use crate::selection::SelectionSet;
use kurbo::{Point, Size, Vec2};

/// Circles in insertion order (back to front).
#[derive(Debug, Clone, Default)]
pub struct ShapeStore {
    circles: Vec<Circle>,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a randomly sized and placed circle that fits the container.
    ///
    /// The diameter is drawn from the configured fraction of the container
    /// width. A container shorter than the circle pins it to the top edge.
    pub fn add_random(
        &mut self,
        container: Size,
        config: &BoardConfig,
        rng: &mut dyn RandomSource,
    ) -> CircleId {
        let (min_size, max_size) = config.size_range(container.width);
        let size = rng.in_range(min_size, max_size);
        let x = rng.in_range(0.0, (container.width - size).max(0.0));
        let y = rng.in_range(0.0, (container.height - size).max(0.0));

        let mut circle = Circle::new(size, x, y);
        // Keep the invariant even if a source strays outside its range
        circle.place_clamped(Point::new(x, y), container);
        self.insert(circle)
    }

    /// Append an existing circle.
    pub fn insert(&mut self, circle: Circle) -> CircleId {
        let id = circle.id();
        self.circles.push(circle);
        id
    }

    pub fn get(&self, id: CircleId) -> Option<&Circle> {
        self.circles.iter().find(|c| c.id() == id)
    }

    pub fn get_mut(&mut self, id: CircleId) -> Option<&mut Circle> {
        self.circles.iter_mut().find(|c| c.id() == id)
    }

    pub fn contains(&self, id: CircleId) -> bool {
        self.get(id).is_some()
    }

    /// Circles back to front.
    pub fn iter(&self) -> impl Iterator<Item = &Circle> {
        self.circles.iter()
    }

    pub fn ids(&self) -> Vec<CircleId> {
        self.circles.iter().map(Circle::id).collect()
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    /// Topmost circle whose disc contains `point`.
    pub fn circle_at(&self, point: Point) -> Option<&Circle> {
        self.circles.iter().rev().find(|c| c.hit_test(point))
    }

    /// Place every selected circle at `pointer - offset`, each clamped to
    /// the container independently. Returns how many circles were moved.
    pub fn move_selected(
        &mut self,
        selection: &SelectionSet,
        pointer: Point,
        offset: Vec2,
        container: Size,
    ) -> usize {
        let target = pointer - offset;
        let mut moved = 0;
        for circle in self.circles.iter_mut().filter(|c| selection.contains(c.id())) {
            circle.place_clamped(target, container);
            moved += 1;
        }
        moved
    }

    /// Remove every selected circle and clear the selection.
    /// Returns the removed ids in store order.
    pub fn delete_selected(&mut self, selection: &mut SelectionSet) -> Vec<CircleId> {
        let mut removed = Vec::new();
        self.circles.retain(|c| {
            let keep = !selection.contains(c.id());
            if !keep {
                removed.push(c.id());
            }
            keep
        });
        selection.clear();
        removed
    }
}
