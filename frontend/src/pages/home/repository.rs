use crate::api::{ApiClient, STATUS_MENUNGGU};
use serde_json::Value;

pub async fn fetch_total_karyawan(api: &ApiClient) -> i64 {
    match api.list_profil().await {
        Ok(value) => total_karyawan(&value),
        Err(err) => {
            log::error!("Error fetching employees: {}", err);
            0
        }
    }
}

pub async fn fetch_total_absen(api: &ApiClient) -> i64 {
    match api.list_absen().await {
        Ok(value) => total_baris(&value),
        Err(err) => {
            log::error!("Error fetching absences: {}", err);
            0
        }
    }
}

pub async fn fetch_total_lembur(api: &ApiClient) -> i64 {
    match api.list_overtime().await {
        Ok(value) => total_baris(&value),
        Err(err) => {
            log::error!("Error fetching overtime: {}", err);
            0
        }
    }
}

pub async fn fetch_total_approval(api: &ApiClient) -> i64 {
    match api.list_overtime().await {
        Ok(value) => total_menunggu(&value),
        Err(err) => {
            log::error!("Error fetching approvals: {}", err);
            0
        }
    }
}

pub fn total_baris(value: &Value) -> i64 {
    value.as_array().map(|rows| rows.len() as i64).unwrap_or(0)
}

/// The employee endpoint wraps its list in a `data` field on some
/// deployments; accept both shapes.
pub fn total_karyawan(value: &Value) -> i64 {
    if value.is_array() {
        return total_baris(value);
    }
    value.get("data").map(total_baris).unwrap_or(0)
}

/// Count of overtime rows still waiting for a decision (status 0). The
/// approval card intentionally counts pending rows, not approved ones.
pub fn total_menunggu(value: &Value) -> i64 {
    value
        .as_array()
        .map(|rows| {
            rows.iter()
                .filter(|row| row.get("status").and_then(Value::as_i64) == Some(STATUS_MENUNGGU))
                .count() as i64
        })
        .unwrap_or(0)
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn fetch_total_approval_counts_pending_rows() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/overtime/");
            then.status(200).json_body(json!([
                { "id": 1, "status": 1 },
                { "id": 2, "status": 0 }
            ]));
        });

        let api = ApiClient::new_with_base_url(server.base_url());
        assert_eq!(fetch_total_approval(&api).await, 1);
    }

    #[tokio::test]
    async fn fetch_counts_default_to_zero_on_failure() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/absen/");
            then.status(500).json_body(json!({ "error": "boom" }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/profil/");
            then.status(200).json_body(json!({ "error": "boom" }));
        });

        let api = ApiClient::new_with_base_url(server.base_url());
        assert_eq!(fetch_total_absen(&api).await, 0);
        assert_eq!(fetch_total_karyawan(&api).await, 0);
    }
}
