use crate::api::ReleaseInfo;
use crate::discovery::JdkEntry;
use crate::error::{LatteError, Result};
use serde::{Deserialize, Serialize};

/// Messages the UI sends into this crate.
///
/// The wire form is a JSON object tagged by its `command` field. Payloads
/// are decoded exactly once, here at the boundary; nothing downstream sees
/// untyped values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum InboundMessage {
    #[serde(rename_all = "camelCase")]
    RequestJdkInfo { jdk_version: String, jvm_impl: String },
    #[serde(rename_all = "camelCase")]
    TabActivated { tab_id: String },
}

impl InboundMessage {
    pub fn decode(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| LatteError::InvalidMessage(e.to_string()))
    }
}

/// Messages this crate posts to the UI, tagged the same way.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum OutboundMessage {
    #[serde(rename_all = "camelCase")]
    ApplyJdkInfo { jdk_info: ReleaseInfo },
    #[serde(rename_all = "camelCase")]
    ShowJavaRuntimeEntries { entries: Vec<JdkEntry> },
}
