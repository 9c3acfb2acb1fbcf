use leptos::*;

use crate::pages::home::view_model::HomeViewModel;

#[component]
pub fn HrdSummaryCards(vm: HomeViewModel) -> impl IntoView {
    view! {
        <SummaryCard
            href="/data-karyawan"
            accent="text-green-600"
            label="Total Karyawan"
            count=Signal::derive(move || vm.total_karyawan.get().unwrap_or(0))
        />
        <SummaryCard
            href="/data-absensi"
            accent="text-red-600"
            label="Total Absen"
            count=Signal::derive(move || vm.total_absen.get().unwrap_or(0))
        />
        <SummaryCard
            href="/data-lembur"
            accent="text-blue-600"
            label="Total Lembur"
            count=Signal::derive(move || vm.total_lembur.get().unwrap_or(0))
        />
    }
}

#[component]
pub fn ApprovalSummaryCard(vm: HomeViewModel) -> impl IntoView {
    view! {
        <SummaryCard
            href="/data-approval"
            accent="text-green-600"
            label="Approval Lembur"
            count=Signal::derive(move || vm.total_approval.get().unwrap_or(0))
        />
    }
}

#[component]
fn SummaryCard(
    #[prop(into)] href: String,
    #[prop(into)] accent: String,
    #[prop(into)] label: String,
    #[prop(into)] count: Signal<i64>,
) -> impl IntoView {
    view! {
        <a
            href=href
            class="block p-4 bg-white rounded-lg shadow-md text-center transition-transform transform hover:shadow-xl cursor-pointer"
        >
            <h4 class=format!("text-5xl font-bold {} mb-3", accent)>
                {move || count.get()}
            </h4>
            <p class="text-xl font-semibold text-gray-700">{label}</p>
        </a>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn summary_card_renders_count_and_label() {
        let html = render_to_string(move || {
            view! {
                <SummaryCard
                    href="/data-karyawan"
                    accent="text-green-600"
                    label="Total Karyawan"
                    count=Signal::derive(|| 12)
                />
            }
        });
        assert!(html.contains("Total Karyawan"));
        assert!(html.contains("12"));
        assert!(html.contains("/data-karyawan"));
    }

    #[test]
    fn hrd_cards_render_all_three_labels() {
        let html = render_to_string(move || {
            let vm = HomeViewModel::new();
            view! { <HrdSummaryCards vm=vm /> }
        });
        assert!(html.contains("Total Karyawan"));
        assert!(html.contains("Total Absen"));
        assert!(html.contains("Total Lembur"));
    }

    #[test]
    fn approval_card_links_to_approval_page() {
        let html = render_to_string(move || {
            let vm = HomeViewModel::new();
            view! { <ApprovalSummaryCard vm=vm /> }
        });
        assert!(html.contains("Approval Lembur"));
        assert!(html.contains("/data-approval"));
    }
}
