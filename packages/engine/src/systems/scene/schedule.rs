use crate::rigid_body::BodyId;

pub type TaskId = u64;

/// A deferred "remove this body" task
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScheduledRemoval {
    pub task: TaskId,
    pub body: BodyId,
    /// Scene clock (ms) at which the task fires
    pub due_ms: f64,
}

/// One-shot removal timers owned by the scene.
///
/// Tasks are cancellable individually, per body, or all at once (scene clear).
/// Firing order is by due time, ties broken by scheduling order.
#[derive(Debug)]
pub struct RemovalSchedule {
    pending: Vec<ScheduledRemoval>,
    next_task: TaskId,
}

impl RemovalSchedule {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            next_task: 1,
        }
    }

    pub fn schedule(&mut self, body: BodyId, due_ms: f64) -> TaskId {
        let task = self.next_task;
        self.next_task = self.next_task.saturating_add(1);
        self.pending.push(ScheduledRemoval { task, body, due_ms });
        task
    }

    /// Returns `false` if the task already fired or was cancelled.
    pub fn cancel(&mut self, task: TaskId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.task != task);
        self.pending.len() != before
    }

    pub fn cancel_for_body(&mut self, body: BodyId) -> usize {
        let before = self.pending.len();
        self.pending.retain(|t| t.body != body);
        before - self.pending.len()
    }

    pub fn cancel_all(&mut self) -> usize {
        let n = self.pending.len();
        self.pending.clear();
        n
    }

    /// Remove and return every task with `due_ms <= now_ms`.
    pub fn take_due(&mut self, now_ms: f64) -> Vec<ScheduledRemoval> {
        let mut due = Vec::new();
        self.pending.retain(|t| {
            if t.due_ms <= now_ms {
                due.push(*t);
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.due_ms.total_cmp(&b.due_ms).then(a.task.cmp(&b.task)));
        due
    }

    pub fn is_scheduled(&self, body: BodyId) -> bool {
        self.pending.iter().any(|t| t.body == body)
    }

    pub fn due_time(&self, body: BodyId) -> Option<f64> {
        self.pending.iter().find(|t| t.body == body).map(|t| t.due_ms)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Default for RemovalSchedule {
    fn default() -> Self {
        Self::new()
    }
}
