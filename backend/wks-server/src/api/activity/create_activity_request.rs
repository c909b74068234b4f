use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct CreateActivityRequest {
    pub action: String,
    #[serde(default)]
    pub details: Option<Value>,
}
