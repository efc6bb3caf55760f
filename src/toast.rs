//! Transient notifications, provided through context so any section can fire one.

use leptos::prelude::*;

/// How long a toast stays on screen before auto-dismissing
const TOAST_DURATION: std::time::Duration = std::time::Duration::from_millis(4000);

/// Title + description payload rendered in the viewport
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Toast {
    pub title: &'static str,
    pub description: &'static str,
}

/// Handle for showing toasts. Cheap to copy into event handlers.
#[derive(Clone, Copy)]
pub struct Toaster {
    current: RwSignal<Option<Toast>>,
}

impl Toaster {
    /// Show a toast, replacing any visible one.
    pub fn show(&self, toast: Toast) {
        let current = self.current;
        current.set(Some(toast));
        set_timeout(move || current.set(None), TOAST_DURATION);
    }
}

/// Install the toaster into context. Called once, at the app root.
pub fn provide_toaster() {
    provide_context(Toaster {
        current: RwSignal::new(None),
    });
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[component]
pub fn ToastViewport() -> impl IntoView {
    let toaster = use_toaster();
    view! {
        <div class="toast-viewport">
            {move || {
                toaster
                    .current
                    .get()
                    .map(|toast| {
                        view! {
                            <div class="toast" role="status">
                                <p class="toast-title">{toast.title}</p>
                                <p class="toast-description">{toast.description}</p>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
