use std::time::Duration;

use leptos::prelude::*;

const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

/// Transient error notifications shared through context.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn push(&self, message: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|items| {
            items.push(Toast {
                id,
                message: message.into(),
            })
        });

        let toasts = *self;
        set_timeout(move || toasts.dismiss(id), TOAST_DURATION);
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|toast| toast.id != id));
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_toaster() -> Toasts {
    let toasts = Toasts::new();
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().unwrap_or_else(provide_toaster)
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-80">
            <For
                each=move || toasts.items.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class="flex items-start gap-3 bg-white border border-red-200 shadow-lg rounded-lg px-4 py-3 text-sm text-red-700">
                            <i class="fas fa-circle-exclamation mt-0.5"></i>
                            <span class="flex-1">{toast.message}</span>
                            <button class="text-slate-400 hover:text-slate-600" on:click=move |_| toasts.dismiss(id)>
                                <i class="fas fa-xmark"></i>
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
