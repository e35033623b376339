use std::rc::Rc;

use shared::{Notification, Notifier};
use yew::prelude::*;

/// A notification waiting to be shown, keyed for dismissal
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notification: Notification,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastList {
    next_id: u32,
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push(Notification),
    Dismiss(u32),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(notification) => {
                next.toasts.push(Toast {
                    id: next.next_id,
                    notification,
                });
                next.next_id = next.next_id.wrapping_add(1);
            }
            ToastAction::Dismiss(id) => next.toasts.retain(|toast| toast.id != id),
        }
        next.into()
    }
}

/// Result from the toast hook
pub struct UseToastsHandle {
    pub toasts: Vec<Toast>,
    pub push: Callback<Notification>,
    pub dismiss: Callback<u32>,
}

/// Hook owning the page's toast queue
#[hook]
pub fn use_toasts() -> UseToastsHandle {
    let state = use_reducer(ToastList::default);

    let push = {
        let dispatcher = state.dispatcher();
        Callback::from(move |notification: Notification| {
            dispatcher.dispatch(ToastAction::Push(notification));
        })
    };

    let dismiss = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: u32| {
            dispatcher.dispatch(ToastAction::Dismiss(id));
        })
    };

    UseToastsHandle {
        toasts: state.toasts.clone(),
        push,
        dismiss,
    }
}

/// Bridges form notifications into the toast queue
#[derive(Clone, PartialEq)]
pub struct ToastNotifier {
    push: Callback<Notification>,
}

impl ToastNotifier {
    pub fn new(push: Callback<Notification>) -> Self {
        Self { push }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notification: Notification) {
        self.push.emit(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_push_assigns_increasing_ids() {
        let list = Rc::new(ToastList::default());
        let list = list.reduce(ToastAction::Push(Notification::success("Saved")));
        let list = list.reduce(ToastAction::Push(Notification::error("Failed")));

        let ids: Vec<u32> = list.toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(list.toasts[1].notification.message, "Failed");
    }

    #[wasm_bindgen_test]
    fn test_dismiss_removes_only_that_toast() {
        let list = Rc::new(ToastList::default());
        let list = list.reduce(ToastAction::Push(Notification::success("one")));
        let list = list.reduce(ToastAction::Push(Notification::success("two")));
        let list = list.reduce(ToastAction::Dismiss(0));

        assert_eq!(list.toasts.len(), 1);
        assert_eq!(list.toasts[0].notification.message, "two");

        // Unknown ids are ignored
        let list = list.reduce(ToastAction::Dismiss(42));
        assert_eq!(list.toasts.len(), 1);
    }
}
