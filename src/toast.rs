use crate::ui::render_toast;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Danger,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

/// Where toasts are attached: the dedicated container, or the page body when
/// the page has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastHost {
    Container,
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    kind: ToastKind,
    message: String,
    host: ToastHost,
    markup: String,
    shown_at: Instant,
}

impl Toast {
    pub fn id(&self) -> ToastId {
        self.id
    }

    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn host(&self) -> ToastHost {
        self.host
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }
}

#[derive(Debug, Clone)]
pub struct ToastRack {
    delay: Duration,
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastRack {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            next_id: 0,
            toasts: Vec::new(),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Renders the toast and attaches it to `host`.
    pub fn show(
        &mut self,
        host: ToastHost,
        kind: ToastKind,
        message: impl Into<String>,
        now: Instant,
    ) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        let message = message.into();
        let markup = render_toast(kind, &message);
        debug!(?id, ?host, kind = kind.as_str(), %message, "showing toast");
        self.toasts.push(Toast {
            id,
            kind,
            message,
            host,
            markup,
            shown_at: now,
        });
        id
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|toast| toast.id == id)
    }

    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn messages(&self) -> Vec<(ToastKind, &str)> {
        self.toasts
            .iter()
            .map(|toast| (toast.kind, toast.message.as_str()))
            .collect()
    }

    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        before != self.toasts.len()
    }

    /// Removes every toast that has been shown for at least the configured delay.
    pub fn expire(&mut self, now: Instant) -> usize {
        let delay = self.delay;
        let before = self.toasts.len();
        self.toasts
            .retain(|toast| now.saturating_duration_since(toast.shown_at) < delay);
        let removed = before - self.toasts.len();
        if removed > 0 {
            debug!(removed, "toasts hidden and removed");
        }
        removed
    }
}
