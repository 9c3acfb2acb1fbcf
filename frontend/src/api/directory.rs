use serde_json::Value;

use super::{client::ApiClient, types::ApiError};

impl ApiClient {
    /// Employee collection. Some deployments return a bare array, others an
    /// object with a `data` field; the home screen counts either.
    pub async fn list_profil(&self) -> Result<Value, ApiError> {
        self.get_value("/profil/").await
    }

    pub async fn list_absen(&self) -> Result<Value, ApiError> {
        self.get_value("/absen/").await
    }
}
