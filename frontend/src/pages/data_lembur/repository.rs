use crate::api::{ApiClient, ApiError, OvertimeRecord};
use serde_json::Value;

pub async fn fetch_lembur(api: &ApiClient) -> Result<Vec<OvertimeRecord>, ApiError> {
    let value = api.list_overtime().await.map_err(|err| {
        log::error!("Error fetching overtime: {}", err);
        ApiError::request_failed("Kesalahan saat mengambil data lembur.")
    })?;
    rows_from_value(&value).ok_or_else(ApiError::unexpected_format)
}

/// A valid payload is a top-level array of overtime rows; anything else is
/// surfaced to the screen as an unexpected format.
pub fn rows_from_value(value: &Value) -> Option<Vec<OvertimeRecord>> {
    if !value.is_array() {
        return None;
    }
    serde_json::from_value(value.clone()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rows_from_value_parses_array_payload() {
        let rows = rows_from_value(&json!([{
            "id": 1,
            "id_user": 7,
            "nama": "Budi Santoso",
            "tanggal": "2024-01-15",
            "lokasi": 1,
            "deskripsi": "Closing gudang",
            "jam_mulai": "18:00",
            "jam_selesai": "20:00",
            "status": 1
        }]))
        .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].nama, "Budi Santoso");
    }

    #[test]
    fn rows_from_value_rejects_non_array_payload() {
        assert!(rows_from_value(&json!({ "error": "x" })).is_none());
        assert!(rows_from_value(&json!("lembur")).is_none());
    }

    #[test]
    fn rows_from_value_rejects_malformed_rows() {
        assert!(rows_from_value(&json!([{ "id": "bukan-angka" }])).is_none());
    }
}
