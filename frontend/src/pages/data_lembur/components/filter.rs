use chrono::Datelike;
use leptos::*;

use crate::pages::data_lembur::utils::{
    day_options, month_options, year_options, LemburFilterState,
};
use crate::utils::time::now_lokal;

#[component]
pub fn DateFilter(filter_state: LemburFilterState) -> impl IntoView {
    let day = filter_state.day_signal();
    let month = filter_state.month_signal();
    let year = filter_state.year_signal();
    let years = year_options(now_lokal().year());

    view! {
        <div class="flex mb-4 items-center space-x-4">
            <select
                class="border p-2 rounded-md"
                prop:value=move || day.get()
                on:change=move |ev| day.set(event_target_value(&ev))
            >
                <option value="">"Hari"</option>
                {day_options()
                    .into_iter()
                    .map(|d| view! { <option value=d.to_string()>{d}</option> })
                    .collect_view()}
            </select>
            <select
                class="border p-2 rounded-md"
                prop:value=move || month.get()
                on:change=move |ev| month.set(event_target_value(&ev))
            >
                <option value="">"Bulan"</option>
                {month_options()
                    .into_iter()
                    .map(|m| view! { <option value=m.to_string()>{m}</option> })
                    .collect_view()}
            </select>
            <select
                class="border p-2 rounded-md"
                prop:value=move || year.get()
                on:change=move |ev| year.set(event_target_value(&ev))
            >
                <option value="">"Tahun"</option>
                {years
                    .into_iter()
                    .map(|y| view! { <option value=y.to_string()>{y}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
pub fn SearchBox(filter_state: LemburFilterState) -> impl IntoView {
    let query = filter_state.query_signal();
    view! {
        <input
            type="text"
            placeholder="Cari Karyawan..."
            class="border p-2 mb-4 w-full rounded-md"
            prop:value=move || query.get()
            on:input=move |ev| query.set(event_target_value(&ev))
        />
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn date_filter_renders_placeholder_options() {
        let html = render_to_string(move || {
            let filter_state = LemburFilterState::default();
            view! { <DateFilter filter_state=filter_state /> }
        });
        assert!(html.contains("Hari"));
        assert!(html.contains("Bulan"));
        assert!(html.contains("Tahun"));
        assert!(html.contains("31"));
    }

    #[test]
    fn search_box_renders_placeholder() {
        let html = render_to_string(move || {
            let filter_state = LemburFilterState::default();
            view! { <SearchBox filter_state=filter_state /> }
        });
        assert!(html.contains("Cari Karyawan..."));
    }
}
