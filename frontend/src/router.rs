use leptos::*;
use leptos_router::*;

use crate::{
    api::ApiClient,
    pages::{data_lembur::DataLemburPage, home::HomePage},
    state::session::SessionProvider,
};

pub const ROUTE_PATHS: &[&str] = &["/", "/home", "/data-lembur"];

/// Targets the summary cards and the header navigate to. The data pages
/// without a screen here are owned by sibling bundles.
pub const NAV_TARGET_PATHS: &[&str] = &[
    "/home",
    "/data-absensi",
    "/data-lembur",
    "/data-karyawan",
    "/data-approval",
    "/data-request",
];

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    view! {
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/home" view=HomePage/>
                    <Route path="/data-lembur" view=DataLemburPage/>
                </Routes>
            </Router>
        </SessionProvider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn registered_screens_are_nav_targets() {
        let targets: HashSet<&str> = NAV_TARGET_PATHS.iter().copied().collect();
        assert!(targets.contains("/home"));
        assert!(targets.contains("/data-lembur"));
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());

        let unique: HashSet<&str> = NAV_TARGET_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), NAV_TARGET_PATHS.len());
    }
}
