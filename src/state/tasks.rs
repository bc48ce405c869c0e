#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

/// One checklist entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    pub id: usize,
    pub label: String,
    pub done: bool,
}

/// The task checklist plus its filter query.
///
/// The only user-driven widget: no timer, state changes on checkbox and
/// filter input events.
#[derive(Clone, Debug, Default)]
pub struct TasksState {
    pub tasks: Vec<Task>,
    pub filter: String,
}

impl TasksState {
    /// The demo checklist.
    #[must_use]
    pub fn with_defaults() -> Self {
        let labels = [
            ("Review quarterly metrics", true),
            ("Rotate API credentials", false),
            ("Ship dashboard v2 widgets", false),
            ("Write incident postmortem", true),
            ("Prune stale feature flags", false),
            ("Update on-call runbook", false),
        ];
        let tasks = labels
            .into_iter()
            .enumerate()
            .map(|(id, (label, done))| Task { id, label: label.to_owned(), done })
            .collect();
        Self { tasks, filter: String::new() }
    }

    /// Toggle the task with `id`; unknown ids are a no-op.
    pub fn toggle(&mut self, id: usize) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.done = !task.done;
        }
    }

    pub fn set_filter(&mut self, query: impl Into<String>) {
        self.filter = query.into();
    }

    #[must_use]
    pub fn done_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }

    /// Checked-count ratio in percent; 0 for an empty list.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        if self.tasks.is_empty() {
            return 0.0;
        }
        ratio(self.done_count(), self.tasks.len()) * 100.0
    }

    /// Whether the task with `id` passes the current filter.
    #[must_use]
    pub fn is_visible(&self, id: usize) -> bool {
        self.tasks
            .iter()
            .find(|t| t.id == id)
            .is_some_and(|t| matches(&self.filter, &t.label))
    }

    #[must_use]
    pub fn is_done(&self, id: usize) -> bool {
        self.tasks.iter().any(|t| t.id == id && t.done)
    }
}

/// Case-insensitive substring match. An empty (or whitespace) query
/// matches everything.
#[must_use]
pub fn matches(query: &str, label: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    label.to_lowercase().contains(&query.to_lowercase())
}

fn ratio(part: usize, whole: usize) -> f64 {
    let part = u32::try_from(part).unwrap_or(u32::MAX);
    let whole = u32::try_from(whole).unwrap_or(u32::MAX).max(1);
    f64::from(part) / f64::from(whole)
}
