use crate::components::layout::Layout;
use crate::pages::home::components::{ApprovalSummaryCard, HrdSummaryCards, LiveClock};
use crate::pages::home::view_model::use_home_view_model;
use crate::utils::divisi::{nama_divisi, ROLE_HRD, ROLE_KEPALA_DIVISI};
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let vm = use_home_view_model();
    let session = vm.session;
    let is_hrd = move || session.get().role_id.as_deref() == Some(ROLE_HRD);
    let is_kepala_divisi = move || session.get().role_id.as_deref() == Some(ROLE_KEPALA_DIVISI);
    let divisi = move || {
        session
            .get()
            .role_id
            .map(|id| nama_divisi(&id))
            .unwrap_or_else(|| nama_divisi(""))
    };

    view! {
        <Layout>
            <div class="mt-6 p-8 bg-gradient-to-br from-green-700 via-green-700 to-green-700 text-white rounded-lg shadow-md relative">
                <div class="flex flex-col">
                    <h2 class="text-xl font-semibold">"Selamat Datang,"</h2>
                    <h3 class="text-4xl font-extrabold">
                        {move || session.get().display_name()}
                    </h3>
                    <LiveClock/>
                </div>
                <div class="absolute top-10 right-8 text-white px-2 py-1 font-bold rounded-lg bg-opacity-30">
                    {divisi} " • Kantor Palem"
                </div>
            </div>
            <div class="mt-6 grid grid-cols-3 gap-4">
                <Show when=is_hrd>
                    <HrdSummaryCards vm=vm/>
                </Show>
                <Show when=is_kepala_divisi>
                    <ApprovalSummaryCard vm=vm/>
                </Show>
            </div>
        </Layout>
    }
}
