use leptos::prelude::*;
use leptos::mount::mount_to;
use crate::components::notifications::NotificationHost;
use crate::config::{NotifyConfig, Stacking};
use crate::dom;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn banner_class(self) -> &'static str {
        match self {
            Self::Success => "alert alert-success fixed top-4 right-4 z-50 max-w-md",
            Self::Error => "alert alert-error fixed top-4 right-4 z-50 max-w-md",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Success => "fas fa-check-circle mr-2",
            Self::Error => "fas fa-exclamation-triangle mr-2",
        }
    }

    pub fn dismiss_class(self) -> &'static str {
        match self {
            Self::Success => "ml-4 text-green-800 hover:text-green-900",
            Self::Error => "ml-4 text-red-800 hover:text-red-900",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Live notices, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NoticeStack {
    notices: Vec<Notice>,
    next_id: u64,
    max_visible: Option<usize>,
}

impl NoticeStack {
    pub fn new(max_visible: Option<usize>) -> Self {
        Self { notices: Vec::new(), next_id: 0, max_visible }
    }

    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.notices.push(Notice { id, kind, message: message.into() });
        if let Some(max) = self.max_visible {
            let excess = self.notices.len().saturating_sub(max.max(1));
            self.notices.drain(..excess);
        }
        id
    }

    /// Returns false if the notice was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| n.id != id);
        self.notices.len() != before
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn position(&self, id: u64) -> Option<usize> {
        self.notices.iter().position(|n| n.id == id)
    }
}

/// CSS `top` for a banner at `index` in the stack.
pub fn banner_top(stacking: Stacking, index: usize) -> String {
    match stacking {
        Stacking::Overlap => "1rem".into(),
        Stacking::Vertical => format!("{}rem", 1.0 + 4.5 * index as f64),
    }
}

/// Transient success/error banners. Cheap to copy into event handlers.
#[derive(Clone, Copy)]
pub struct Notifier {
    stack: RwSignal<NoticeStack>,
    pub config: NotifyConfig,
}

impl Notifier {
    pub fn new(config: NotifyConfig) -> Self {
        Self {
            stack: RwSignal::new(NoticeStack::new(config.max_visible)),
            config,
        }
    }

    /// Renders the banner host into `<body>`. Call once per page.
    pub fn mount(self) -> Result<(), String> {
        let body = dom::body()?;
        let notifier = self;
        mount_to(body, move || view! { <NotificationHost notifier=notifier /> }).forget();
        Ok(())
    }

    pub fn notify_success(&self, message: impl Into<String>) {
        self.notify(NoticeKind::Success, message);
    }

    pub fn notify_error(&self, message: impl Into<String>) {
        self.notify(NoticeKind::Error, message);
    }

    pub fn notify(&self, kind: NoticeKind, message: impl Into<String>) {
        let message = message.into();
        let id = self.stack.try_update(|s| s.push(kind, message));
        let Some(id) = id else { return };
        let delay = match kind {
            NoticeKind::Success => self.config.success_ms,
            NoticeKind::Error => self.config.error_ms,
        };
        let stack = self.stack;
        if let Err(e) = dom::set_timeout(delay, move || {
            stack.try_update(|s| s.dismiss(id));
        }) {
            log::warn!("Notice {id} will not auto-dismiss: {e}");
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.stack.try_update(|s| s.dismiss(id));
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.stack.with(|s| s.notices().to_vec())
    }

    pub fn top_for(&self, id: u64) -> String {
        let index = self.stack.with(|s| s.position(id)).unwrap_or(0);
        banner_top(self.config.stacking, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut stack = NoticeStack::default();
        let a = stack.push(NoticeKind::Success, "saved");
        let b = stack.push(NoticeKind::Error, "failed");
        assert!(b > a);
        assert_eq!(stack.notices().len(), 2);
        assert_eq!(stack.notices()[1].kind, NoticeKind::Error);
    }

    #[test]
    fn test_auto_dismiss_after_manual_is_noop() {
        let mut stack = NoticeStack::default();
        let id = stack.push(NoticeKind::Error, "Please select a file before submitting.");
        assert!(stack.dismiss(id));
        assert!(!stack.dismiss(id));
        assert!(stack.notices().is_empty());
    }

    #[test]
    fn test_dismiss_leaves_others() {
        let mut stack = NoticeStack::default();
        let a = stack.push(NoticeKind::Success, "one");
        let b = stack.push(NoticeKind::Success, "two");
        stack.dismiss(a);
        assert_eq!(stack.position(b), Some(0));
        assert_eq!(stack.position(a), None);
    }

    #[test]
    fn test_uncapped_by_default() {
        let mut stack = NoticeStack::new(None);
        for i in 0..20 {
            stack.push(NoticeKind::Success, format!("n{i}"));
        }
        assert_eq!(stack.notices().len(), 20);
    }

    #[test]
    fn test_cap_drops_oldest() {
        let mut stack = NoticeStack::new(Some(2));
        stack.push(NoticeKind::Success, "first");
        stack.push(NoticeKind::Success, "second");
        stack.push(NoticeKind::Error, "third");
        let messages: Vec<_> = stack.notices().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, ["second", "third"]);
    }

    #[test]
    fn test_banner_top() {
        assert_eq!(banner_top(Stacking::Overlap, 3), "1rem");
        assert_eq!(banner_top(Stacking::Vertical, 0), "1rem");
        assert_eq!(banner_top(Stacking::Vertical, 2), "10rem");
    }
}
