use near_sdk::serde::Serialize;
use near_sdk::serde_json::{Map, Value};

#[derive(Serialize, Clone, Debug)]
#[serde(crate = "near_sdk::serde")]
pub(crate) struct Event {
    pub(crate) standard: String,
    pub(crate) version: String,
    pub(crate) event: String,
    pub(crate) data: Vec<EventData>,
}

#[derive(Serialize, Clone, Debug)]
#[serde(crate = "near_sdk::serde")]
pub(crate) struct EventData {
    pub(crate) operation: String,
    pub(crate) author: String,
    #[serde(flatten)]
    pub(crate) extra: Map<String, Value>,
}

/// NEP-297 envelope for standard events whose `data` entries carry no operation/author.
#[derive(Serialize, Clone, Debug)]
#[serde(crate = "near_sdk::serde")]
pub(crate) struct StandardEvent {
    pub(crate) standard: &'static str,
    pub(crate) version: &'static str,
    pub(crate) event: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) data: Option<Vec<Map<String, Value>>>,
}
