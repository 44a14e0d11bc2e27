use serde::{Deserialize, Serialize};

/// Release metadata returned verbatim from the advisory service.
///
/// The payload structure is owned by the remote service; this crate forwards
/// it to the UI without interpreting its fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReleaseInfo(pub serde_json::Value);
