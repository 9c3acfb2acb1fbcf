use crate::api::{ApiClient, ApiError, OvertimeRecord};
use crate::pages::data_lembur::{repository, utils::LemburFilterState};
use leptos::*;

#[derive(Clone, Copy)]
pub struct DataLemburViewModel {
    pub lembur_resource: Resource<(), Result<Vec<OvertimeRecord>, ApiError>>,
    pub filter_state: LemburFilterState,
}

impl DataLemburViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

        let api_clone = api.clone();
        let lembur_resource = create_resource(
            || (),
            move |_| {
                let api = api_clone.clone();
                async move { repository::fetch_lembur(&api).await }
            },
        );

        Self {
            lembur_resource,
            filter_state: LemburFilterState::default(),
        }
    }

    /// The visible rows, recomputed from the fetched snapshot and the
    /// current filter inputs on every render.
    pub fn filtered_rows(&self) -> Signal<Vec<OvertimeRecord>> {
        let resource = self.lembur_resource;
        let filter_state = self.filter_state;
        Signal::derive(move || {
            let rows = resource.get().and_then(Result::ok).unwrap_or_default();
            let filter = filter_state.snapshot();
            rows.into_iter().filter(|row| filter.matches(row)).collect()
        })
    }
}

pub fn use_data_lembur_view_model() -> DataLemburViewModel {
    match use_context::<DataLemburViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DataLemburViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
