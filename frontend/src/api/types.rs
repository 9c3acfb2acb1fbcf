use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One row of the remote overtime collection. `tanggal` stays a raw string;
/// the screens parse it on demand because the service mixes date and
/// datetime renditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvertimeRecord {
    pub id: i64,
    pub id_user: i64,
    pub nama: String,
    pub tanggal: String,
    pub lokasi: i64,
    pub deskripsi: String,
    pub jam_mulai: String,
    pub jam_selesai: String,
    pub status: i64,
}

pub const STATUS_MENUNGGU: i64 = 0;
pub const STATUS_DISETUJUI: i64 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl ApiError {
    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn unexpected_format() -> Self {
        Self {
            error: "Unexpected response format.".to_string(),
            code: "UNEXPECTED_FORMAT".to_string(),
            details: None,
        }
    }
}
