use serde_json::Value;

use super::{client::ApiClient, types::ApiError};

impl ApiClient {
    pub async fn list_overtime(&self) -> Result<Value, ApiError> {
        self.get_value("/overtime/").await
    }
}
