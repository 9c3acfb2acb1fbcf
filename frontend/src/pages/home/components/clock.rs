use gloo_timers::callback::Interval;
use leptos::*;

use crate::utils::time::{format_waktu_lokal, now_lokal};

#[component]
pub fn LiveClock() -> impl IntoView {
    let (waktu, set_waktu) = create_signal(format_waktu_lokal(now_lokal()));

    // Update time every second. store_value keeps the Interval alive; it is
    // dropped (and cancelled) when the component is unmounted.
    let _interval = store_value(Interval::new(1000, move || {
        set_waktu.set(format_waktu_lokal(now_lokal()));
    }));

    view! {
        <p class="text-gray-200 text-lg mt-2">{waktu}</p>
    }
}
