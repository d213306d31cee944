//! Server configuration settings

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// One entry of `GET /servers/{vhost}/config`
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigSetting {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub setting_type: Option<String>,
    pub value: Option<String>,
}
