use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// The remote post resource. The upstream speaks camelCase (`userId`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: Option<u32>,
    pub id: Option<u32>,
    pub title: String,
    pub body: String,
}

/// Payload for create and full replace. Both fields are required.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub body: String,
}

/// Payload for a partial update. Absent fields are omitted from the
/// serialized JSON rather than sent as null.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct PostPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}
