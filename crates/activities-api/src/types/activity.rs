use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An activity record scoped to a user and a calendar day. The client only
/// ever looks at `end_date` (path segment and body field) and `id` (deletion
/// path segment); everything else rides along untouched in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
