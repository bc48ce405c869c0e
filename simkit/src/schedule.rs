#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

/// Multi-cadence scheduler driven by a single host timer.
///
/// Replaces one repeating timer per widget: the host runs one coarse
/// interval and asks [`Scheduler::due`] which entries should tick now.
/// Timestamps are explicit milliseconds, so tests drive a virtual clock
/// instead of waiting on real time.
#[derive(Debug, Clone)]
pub struct Scheduler<K> {
    entries: Vec<Entry<K>>,
}

#[derive(Debug, Clone)]
struct Entry<K> {
    key: K,
    period_ms: f64,
    next_due_ms: f64,
}

impl<K: Copy + PartialEq> Scheduler<K> {
    #[must_use]
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Register `key` to fire every `period_ms`, first at `now_ms + period_ms`.
    pub fn insert(&mut self, key: K, period_ms: f64, now_ms: f64) {
        self.entries.push(Entry { key, period_ms, next_due_ms: now_ms + period_ms });
    }

    /// Keys due at `now_ms`, in registration order.
    ///
    /// A fired entry is rescheduled to `now_ms + period`, not
    /// `previous_due + period`: when the host interval was throttled (a
    /// backgrounded tab), each entry ticks once instead of bursting to
    /// catch up.
    pub fn due(&mut self, now_ms: f64) -> Vec<K> {
        let mut fired = Vec::new();
        for entry in &mut self.entries {
            if now_ms >= entry.next_due_ms {
                entry.next_due_ms = now_ms + entry.period_ms;
                fired.push(entry.key);
            }
        }
        fired
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Next due time of `key`, if registered.
    #[must_use]
    pub fn next_due(&self, key: K) -> Option<f64> {
        self.entries.iter().find(|e| e.key == key).map(|e| e.next_due_ms)
    }
}

impl<K: Copy + PartialEq> Default for Scheduler<K> {
    fn default() -> Self {
        Self::new()
    }
}
