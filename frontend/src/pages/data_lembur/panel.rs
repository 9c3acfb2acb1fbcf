use leptos::*;

use crate::components::layout::{ErrorMessage, Layout, LoadingSpinner};
use crate::pages::data_lembur::components::{DateFilter, LemburTable, SearchBox};
use crate::pages::data_lembur::view_model::use_data_lembur_view_model;

#[component]
pub fn DataLemburPage() -> impl IntoView {
    let vm = use_data_lembur_view_model();
    let resource = vm.lembur_resource;
    let filtered = vm.filtered_rows();

    view! {
        <Layout>
            <div class="flex-grow px-6 py-8">
                <div class="flex justify-between items-center mb-8">
                    <div class="flex items-center">
                        <a
                            href="/home"
                            title="Back to Home"
                            class="mr-2 cursor-pointer text-white bg-green-600 hover:bg-green-700 transition duration-150 ease-in-out rounded-full p-3 shadow-lg"
                        >
                            <svg class="h-4 w-4" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M10 19l-7-7m0 0l7-7m-7 7h18"/>
                            </svg>
                        </a>
                        <h1 class="text-4xl font-bold text-gray-800 pb-1">
                            "Overview Data Lembur"
                        </h1>
                    </div>
                    <DateFilter filter_state=vm.filter_state/>
                </div>

                <SearchBox filter_state=vm.filter_state/>

                {move || match resource.get() {
                    None => view! {
                        <div class="flex justify-center items-center h-64">
                            <LoadingSpinner/>
                        </div>
                    }
                    .into_view(),
                    Some(Err(err)) => view! {
                        <ErrorMessage message=err.error/>
                    }
                    .into_view(),
                    Some(Ok(_)) => view! { <LemburTable rows=filtered/> }.into_view(),
                }}
            </div>
        </Layout>
    }
}
