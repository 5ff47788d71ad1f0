use std::time::Duration;

use leptos::prelude::*;

/// Entry animation classes that flip to visible after `delay`.
pub fn use_fade_in(delay: Duration) -> Signal<&'static str> {
    let visible = RwSignal::new(false);

    Effect::new(move |_| {
        set_timeout(move || visible.set(true), delay);
    });

    Signal::derive(move || {
        if visible.get() {
            "opacity-100 translate-y-0 transition-all duration-500 ease-out"
        } else {
            "opacity-0 translate-y-4 transition-all duration-500 ease-out"
        }
    })
}
