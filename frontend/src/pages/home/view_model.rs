use crate::api::ApiClient;
use crate::pages::home::repository;
use crate::state::session::{use_session, SessionState};
use crate::utils::divisi::{ROLE_HRD, ROLE_KEPALA_DIVISI};
use leptos::*;

/// One resource per summary count, keyed on the viewer's role. Roles that a
/// count does not apply to resolve to zero without touching the network; a
/// response that lands after the screen is gone hits a disposed scope.
#[derive(Clone, Copy)]
pub struct HomeViewModel {
    pub session: ReadSignal<SessionState>,
    pub total_karyawan: Resource<Option<String>, i64>,
    pub total_absen: Resource<Option<String>, i64>,
    pub total_lembur: Resource<Option<String>, i64>,
    pub total_approval: Resource<Option<String>, i64>,
}

impl HomeViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let (session, _) = use_session();
        let role = move || session.get().role_id;

        let api_clone = api.clone();
        let total_karyawan = create_resource(role, move |role| {
            let api = api_clone.clone();
            async move {
                match role.as_deref() {
                    Some(ROLE_HRD) => repository::fetch_total_karyawan(&api).await,
                    _ => 0,
                }
            }
        });

        let api_clone = api.clone();
        let total_absen = create_resource(role, move |role| {
            let api = api_clone.clone();
            async move {
                match role.as_deref() {
                    Some(ROLE_HRD) => repository::fetch_total_absen(&api).await,
                    _ => 0,
                }
            }
        });

        let api_clone = api.clone();
        let total_lembur = create_resource(role, move |role| {
            let api = api_clone.clone();
            async move {
                match role.as_deref() {
                    Some(ROLE_HRD) => repository::fetch_total_lembur(&api).await,
                    _ => 0,
                }
            }
        });

        let api_clone = api.clone();
        let total_approval = create_resource(role, move |role| {
            let api = api_clone.clone();
            async move {
                match role.as_deref() {
                    Some(ROLE_KEPALA_DIVISI) => repository::fetch_total_approval(&api).await,
                    _ => 0,
                }
            }
        });

        Self {
            session,
            total_karyawan,
            total_absen,
            total_lembur,
            total_approval,
        }
    }
}

pub fn use_home_view_model() -> HomeViewModel {
    match use_context::<HomeViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = HomeViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
