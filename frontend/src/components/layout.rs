use crate::state::session::{self, use_session};
use crate::utils::divisi::{ROLE_HRD, ROLE_KEPALA_DIVISI};
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    let (session, set_session) = use_session();
    let is_hrd = move || session.get().role_id.as_deref() == Some(ROLE_HRD);
    let is_kepala_divisi = move || session.get().role_id.as_deref() == Some(ROLE_KEPALA_DIVISI);
    let on_logout = move |_| {
        session::logout(set_session);
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href("/");
        }
    };
    view! {
        <header class="bg-white shadow-sm border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center">
                        <h1 class="text-xl font-semibold text-gray-800">
                            "Absensi Kantor Palem"
                        </h1>
                    </div>
                    <div class="flex items-center">
                        <nav class="flex space-x-4">
                            <a href="/home" class="text-gray-600 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-gray-100">
                                "Beranda"
                            </a>
                            <Show when=is_hrd>
                                <a href="/data-karyawan" class="text-gray-600 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-gray-100">
                                    "Data Karyawan"
                                </a>
                                <a href="/data-absensi" class="text-gray-600 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-gray-100">
                                    "Data Absensi"
                                </a>
                                <a href="/data-lembur" class="text-gray-600 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-gray-100">
                                    "Data Lembur"
                                </a>
                            </Show>
                            <Show when=is_kepala_divisi>
                                <a href="/data-approval" class="text-gray-600 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-gray-100">
                                    "Approval Lembur"
                                </a>
                                <a href="/data-request" class="text-gray-600 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-gray-100">
                                    "Request Lembur"
                                </a>
                            </Show>
                            <button
                                on:click=on_logout
                                class="text-gray-600 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-gray-100"
                            >
                                "Keluar"
                            </button>
                        </nav>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-green-600"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 text-red-600 px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{hrd_session, kepala_divisi_session, provide_session};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_renders_hrd_links() {
        let html = render_to_string(move || {
            provide_session(hrd_session());
            view! { <Header /> }
        });
        assert!(html.contains("Data Karyawan"));
        assert!(html.contains("Data Lembur"));
        assert!(!html.contains("Approval Lembur"));
    }

    #[test]
    fn header_renders_approver_links() {
        let html = render_to_string(move || {
            provide_session(kepala_divisi_session());
            view! { <Header /> }
        });
        assert!(html.contains("Approval Lembur"));
        assert!(!html.contains("Data Karyawan"));
    }

    #[test]
    fn layout_renders_children() {
        let html = render_to_string(move || {
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("child"));
        assert!(html.contains("Absensi Kantor Palem"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="gagal".into() />
                </div>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("gagal"));
    }
}
