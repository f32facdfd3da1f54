//! Toast notifications.
//!
//! A small context-backed toast stack rendered bottom-center. Pushing past
//! the configured limit drops the oldest toast; each toast dismisses itself
//! after a delay or on click.

use leptos::prelude::*;

use crate::config::toast::LIMIT;

/// Toast severity, mapped to a visual style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

/// A single toast message.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Toast state, provided as its own context at the app root.
#[derive(Clone, Copy)]
pub struct ToastState {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Show a toast; auto-dismisses after the configured delay.
    pub fn push(&self, kind: ToastKind, message: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                kind,
                message: message.into(),
            });
            while toasts.len() > LIMIT {
                toasts.remove(0);
            }
        });

        #[cfg(target_arch = "wasm32")]
        {
            let state = *self;
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(crate::config::toast::DISMISS_MS).await;
                state.dismiss(id);
            });
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }

    /// Remove a toast by id; already-dismissed ids are ignored.
    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new()
    }
}

stylance::import_crate_style!(css, "src/components/toast/toast.module.css");

/// Toast container, rendered once inside the layout.
#[component]
pub fn Toasts() -> impl IntoView {
    let state = use_context::<ToastState>().expect("ToastState must be provided");

    view! {
        <div class=css::container>
            <For
                each=move || state.toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let kind_class = match toast.kind {
                        ToastKind::Info => css::toastInfo,
                        ToastKind::Success => css::toastSuccess,
                        ToastKind::Error => css::toastError,
                    };
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("{} {}", css::toast, kind_class)
                            on:click=move |_| state.dismiss(id)
                        >
                            {toast.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
