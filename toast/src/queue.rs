#[cfg(test)]
#[path = "queue_test.rs"]
mod queue_test;

use uuid::Uuid;

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    /// CSS class modifier used by the host component.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// What happens when a toast arrives while others are visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stacking {
    /// At most one visible toast; a newcomer replaces it.
    Single,
    /// Toasts pile up and dismiss independently.
    Stacked,
}

/// One visible toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub kind: ToastKind,
}

/// Pure toast list model.
///
/// Timing lives in the host. Dismissal is id-based, so the auto-dismiss
/// timer of a replaced toast can never remove its successor.
#[derive(Clone, Debug)]
pub struct ToastQueue {
    stacking: Stacking,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    #[must_use]
    pub fn new(stacking: Stacking) -> Self {
        Self { stacking, toasts: Vec::new() }
    }

    /// Add a toast and return its id for later dismissal.
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> Uuid {
        if self.stacking == Stacking::Single {
            self.toasts.clear();
        }
        let id = Uuid::new_v4();
        self.toasts.push(Toast { id, message: message.into(), kind });
        id
    }

    /// Remove the toast with `id`; unknown ids are a no-op.
    pub fn dismiss(&mut self, id: Uuid) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Visible toasts, oldest first.
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
