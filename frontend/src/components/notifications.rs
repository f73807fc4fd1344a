//! Transient notifications (toasts).
//!
//! Every failure that reaches the UI (submission, clipboard, download) ends
//! up here. Toasts dismiss themselves after [`TOAST_DURATION_MS`]; at most
//! [`MAX_TOASTS`] are shown, oldest dropped first.

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::{Toast, ToastLevel, MAX_TOASTS, TOAST_DURATION_MS};

/// Push a toast, dropping the oldest beyond `max`.
fn push_capped(toasts: &mut Vec<Toast>, toast: Toast, max: usize) {
    toasts.push(toast);
    if toasts.len() > max {
        let excess = toasts.len() - max;
        toasts.drain(..excess);
    }
}

/// Handle for raising notifications. Cheap to copy into closures.
#[derive(Clone, Copy)]
pub struct Notifier {
    set_toasts: WriteSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Notifier {
    pub fn new(set_toasts: WriteSignal<Vec<Toast>>) -> Self {
        Self {
            set_toasts,
            next_id: store_value(0),
        }
    }

    pub fn notify(&self, level: ToastLevel, message: impl Into<String>) {
        let message = message.into();
        match level {
            ToastLevel::Error => log::error!("{}", message),
            _ => log::info!("{}", message),
        }

        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        let toast = Toast {
            id,
            level,
            message,
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
        };
        self.set_toasts.update(|toasts| push_capped(toasts, toast, MAX_TOASTS));

        let this = *self;
        Timeout::new(TOAST_DURATION_MS, move || this.dismiss(id)).forget();
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(ToastLevel::Info, message);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(ToastLevel::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(ToastLevel::Error, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.set_toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

/// Toast stack, bottom-right.
#[component]
pub fn Notifications(
    /// Toasts to show
    toasts: ReadSignal<Vec<Toast>>,
    /// Used by the close buttons
    notifier: Notifier,
) -> impl IntoView {
    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast {}", toast.level.css_class())>
                            <span class="toast-icon">{toast.level.emoji()}</span>
                            <span class="toast-message">{toast.message.clone()}</span>
                            <span class="toast-time">{toast.timestamp.clone()}</span>
                            <button
                                class="toast-close"
                                aria-label="Fechar"
                                on:click=move |_| notifier.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u64) -> Toast {
        Toast {
            id,
            level: ToastLevel::Info,
            message: format!("m{}", id),
            timestamp: "00:00:00".into(),
        }
    }

    #[test]
    fn test_push_capped_drops_oldest() {
        let mut toasts = Vec::new();
        for id in 0..7 {
            push_capped(&mut toasts, toast(id), 5);
        }
        let ids: Vec<_> = toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3, 4, 5, 6]);
    }
}
