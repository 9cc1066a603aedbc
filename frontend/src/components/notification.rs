use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::config;

/// Toasts kept on screen at once; pushing past this drops the oldest.
pub const MAX_TOASTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
            ToastKind::Info => "toast-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, kind, message: message.into() });
        if self.toasts.len() > MAX_TOASTS {
            let evicted = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..evicted);
        }
        id
    }

    /// Unknown ids are ignored; the toast may already have been evicted.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

pub enum ToastAction {
    Push(ToastKind, String),
    Dismiss(u64),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(kind, message) => {
                debug!("toast {kind:?}: {message}");
                next.push(kind, message);
            }
            ToastAction::Dismiss(id) => next.dismiss(id),
        }
        next.into()
    }
}

/// Context handle for raising toasts from anywhere below `ToastProvider`.
#[derive(Clone, PartialEq)]
pub struct Toasts {
    queue: UseReducerHandle<ToastQueue>,
}

impl Toasts {
    pub fn success(&self, message: impl Into<String>) {
        self.queue.dispatch(ToastAction::Push(ToastKind::Success, message.into()));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.queue.dispatch(ToastAction::Push(ToastKind::Error, message.into()));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.queue.dispatch(ToastAction::Push(ToastKind::Info, message.into()));
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.dispatch(ToastAction::Dismiss(id));
    }
}

#[hook]
pub fn use_toasts() -> Option<Toasts> {
    use_context::<Toasts>()
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u64>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |id| {
                let id = *id;
                let timeout = Timeout::new(config::TOAST_DISMISS_MS, move || on_dismiss.emit(id));
                move || drop(timeout)
            },
            props.toast.id,
        );
    }

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.toast.id;
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div class={classes!("toast", props.toast.kind.class())} role="status">
            <span class="toast-message">{&props.toast.message}</span>
            <button class="toast-close" aria-label="Dismiss" {onclick}>{"×"}</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);
    let toasts = Toasts { queue: queue.clone() };
    let on_dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id| toasts.dismiss(id))
    };

    html! {
        <ContextProvider<Toasts> context={toasts}>
            { for props.children.iter() }
            <div class="toast-stack">
                <style>
                    {r#"
                        .toast-stack {
                            position: fixed;
                            right: 24px;
                            bottom: 24px;
                            display: flex;
                            flex-direction: column;
                            gap: 12px;
                            z-index: 1000;
                        }
                        .toast {
                            display: flex;
                            align-items: center;
                            gap: 16px;
                            min-width: 280px;
                            max-width: 380px;
                            padding: 14px 18px;
                            border-radius: 12px;
                            background: rgba(20, 20, 20, 0.95);
                            color: #fff;
                            box-shadow: 0 12px 28px rgba(0, 0, 0, 0.3);
                            animation: toastIn 0.3s ease-out;
                        }
                        .toast-success { border-left: 4px solid #3ddc97; }
                        .toast-error { border-left: 4px solid #ff5a5f; }
                        .toast-info { border-left: 4px solid #7b8cff; }
                        .toast-message { flex: 1; font-size: 0.95rem; }
                        .toast-close {
                            background: none;
                            border: none;
                            color: inherit;
                            font-size: 1.2rem;
                            cursor: pointer;
                        }
                        @keyframes toastIn {
                            from { transform: translateY(12px); opacity: 0; }
                            to { transform: translateY(0); opacity: 1; }
                        }
                    "#}
                </style>
                { for queue.toasts().iter().map(|toast| html! {
                    <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
                }) }
            </div>
        </ContextProvider<Toasts>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_keeps_the_newest_three() {
        let mut queue = ToastQueue::default();
        for n in 0..5 {
            queue.push(ToastKind::Info, format!("toast {n}"));
        }
        let messages: Vec<_> = queue.toasts().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["toast 2", "toast 3", "toast 4"]);
    }

    #[test]
    fn ids_stay_unique_after_eviction() {
        let mut queue = ToastQueue::default();
        let ids: Vec<_> = (0..4).map(|_| queue.push(ToastKind::Success, "ok")).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        assert_eq!(queue.toasts()[0].id, 1);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Error, "failed");
        let second = queue.push(ToastKind::Success, "sent");
        queue.dismiss(first);
        queue.dismiss(99);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, second);
    }

    #[test]
    fn reducer_applies_actions() {
        let queue = Rc::new(ToastQueue::default());
        let queue = queue.reduce(ToastAction::Push(ToastKind::Info, "hi".into()));
        assert_eq!(queue.toasts().len(), 1);
        let id = queue.toasts()[0].id;
        let queue = queue.reduce(ToastAction::Dismiss(id));
        assert!(queue.toasts().is_empty());
    }
}
