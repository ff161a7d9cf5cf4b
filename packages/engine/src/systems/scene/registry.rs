use crate::rigid_body::{Body, BodyId, Vec2};

use super::schedule::{RemovalSchedule, ScheduledRemoval, TaskId};

/// What one `Scene::step` did besides integrating
#[derive(Debug, Default)]
pub struct StepResult {
    /// Bodies removed because their timer fired
    pub expired: Vec<BodyId>,
    /// Timers that fired for bodies already gone
    pub stale: usize,
}

/// Scene registry - every live body, in creation order.
///
/// The scene is the single shared context of the sandbox: tools, weapons,
/// explosions and fragments all receive it explicitly. It also owns the
/// clock and the deferred removal timers so clearing the scene can cancel
/// them instead of leaving them to fire into nothing.
pub struct Scene {
    bodies: Vec<Body>,
    next_id: BodyId,
    bounds: Vec<BodyId>,
    removals: RemovalSchedule,
    clock_ms: f64,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            next_id: 1,
            bounds: Vec::new(),
            removals: RemovalSchedule::new(),
            clock_ms: 0.0,
        }
    }

    /// Insert a body and return its new ID.
    pub fn add(&mut self, mut body: Body) -> BodyId {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        body.id = id;
        self.bodies.push(body);
        id
    }

    /// Remove a body by ID. Removing an absent body is a no-op (`false`).
    ///
    /// Any timer still pending for the body is cancelled.
    pub fn remove(&mut self, id: BodyId) -> bool {
        let Some(idx) = self.index_of(id) else {
            return false;
        };
        // Erase and point queries depend on creation order
        self.bodies.remove(idx);
        self.removals.cancel_for_body(id);
        self.bounds.retain(|b| *b != id);
        true
    }

    /// Remove every dynamic body and cancel all pending timers.
    /// Static bodies (the bounds) stay. Returns the number removed.
    pub fn clear_dynamic(&mut self) -> usize {
        let before = self.bodies.len();
        self.bodies.retain(|b| b.is_static);
        self.removals.cancel_all();
        before - self.bodies.len()
    }

    /// Replace the four static walls around a `width` x `height` viewport.
    pub fn set_bounds(&mut self, width: f32, height: f32, thickness: f32) -> [BodyId; 4] {
        for id in std::mem::take(&mut self.bounds) {
            self.remove(id);
        }

        let t = thickness;
        let walls = [
            // left, right, floor, ceiling
            Body::static_rect(Vec2::new(-t / 2.0, height / 2.0), t, height * 3.0),
            Body::static_rect(Vec2::new(width + t / 2.0, height / 2.0), t, height * 3.0),
            Body::static_rect(Vec2::new(width / 2.0, height + t / 2.0), width * 2.0, t),
            Body::static_rect(Vec2::new(width / 2.0, -t / 2.0), width * 2.0, t),
        ];
        let ids = walls.map(|wall| self.add(wall));
        self.bounds = ids.to_vec();
        ids
    }

    pub fn bound_ids(&self) -> &[BodyId] {
        &self.bounds
    }

    #[inline]
    fn index_of(&self, id: BodyId) -> Option<usize> {
        self.bodies.iter().position(|b| b.id == id)
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.index_of(id).is_some()
    }

    /// All bodies, oldest first
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn dynamic_bodies(&self) -> impl DoubleEndedIterator<Item = &Body> {
        self.bodies.iter().filter(|b| !b.is_static)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn dynamic_count(&self) -> usize {
        self.dynamic_bodies().count()
    }

    pub fn static_count(&self) -> usize {
        self.bodies.len() - self.dynamic_count()
    }

    /// Topmost (most recently added) body whose geometry contains `point`.
    pub fn point_query(&self, point: Vec2) -> Option<BodyId> {
        self.bodies
            .iter()
            .rev()
            .find(|b| b.contains_point(point))
            .map(|b| b.id)
    }

    // === TIMERS ===

    /// Schedule `id` for removal `delay_ms` from now.
    pub fn schedule_removal(&mut self, id: BodyId, delay_ms: f64) -> TaskId {
        self.removals.schedule(id, self.clock_ms + delay_ms.max(0.0))
    }

    pub fn cancel_removal(&mut self, task: TaskId) -> bool {
        self.removals.cancel(task)
    }

    pub fn pending_removals(&self) -> usize {
        self.removals.len()
    }

    /// Scene time at which `id` is due to be removed, if a timer is pending
    pub fn removal_due(&self, id: BodyId) -> Option<f64> {
        self.removals.due_time(id)
    }

    pub fn now_ms(&self) -> f64 {
        self.clock_ms
    }

    /// Advance the clock by `dt_ms`: integrate every body, then fire due timers.
    pub fn step(&mut self, dt_ms: f32, gravity: Vec2) -> StepResult {
        for body in self.bodies.iter_mut() {
            body.integrate(dt_ms, gravity);
        }

        self.clock_ms += f64::from(dt_ms.max(0.0));

        let mut result = StepResult::default();
        for ScheduledRemoval { body, .. } in self.removals.take_due(self.clock_ms) {
            if self.remove(body) {
                result.expired.push(body);
            } else {
                result.stale += 1;
            }
        }
        result
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
