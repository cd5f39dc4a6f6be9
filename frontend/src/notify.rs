use std::rc::Rc;

use yew::prelude::*;

use crate::error::ActionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
    pub duration_ms: u32,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>, duration_ms: u32) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
            duration_ms,
        }
    }

    pub fn failure(title: impl Into<String>, err: &ActionError, duration_ms: u32) -> Self {
        Self {
            title: title.into(),
            description: err.user_message(),
            variant: ToastVariant::Destructive,
            duration_ms,
        }
    }
}

/// Handle passed down to components that raise notifications.
#[derive(Clone, PartialEq)]
pub struct ToastSender(Callback<Toast>);

impl ToastSender {
    pub fn new(sink: Callback<Toast>) -> Self {
        Self(sink)
    }

    pub fn send(&self, toast: Toast) {
        log::info!("toast: {}", toast.title);
        self.0.emit(toast);
    }
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u64),
}

/// Toasts currently on screen, oldest first.
#[derive(Clone, Default, PartialEq)]
pub struct ToastList {
    next_id: u64,
    pub items: Vec<(u64, Toast)>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut list = (*self).clone();
        match action {
            ToastAction::Push(toast) => {
                list.next_id += 1;
                list.items.push((list.next_id, toast));
            }
            ToastAction::Dismiss(id) => list.items.retain(|(existing, _)| *existing != id),
        }
        Rc::new(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_then_dismiss() {
        let list = Rc::new(ToastList::default());
        let list = list.reduce(ToastAction::Push(Toast::new("a", "first", 3000)));
        let list = list.reduce(ToastAction::Push(Toast::new("b", "second", 3000)));
        assert_eq!(list.items.len(), 2);
        let first_id = list.items[0].0;
        let list = list.reduce(ToastAction::Dismiss(first_id));
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].1.title, "b");
    }

    #[test]
    fn failure_toast_uses_error_message() {
        let toast = Toast::failure("Error", &ActionError::Network("down".into()), 3000);
        assert_eq!(toast.variant, ToastVariant::Destructive);
        assert_eq!(toast.description, crate::error::FALLBACK_MESSAGE);
    }
}
