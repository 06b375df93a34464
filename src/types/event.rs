use crate::API_VERSION;
use chrono::{DateTime, Utc};
use entity::event::Model as EventModel;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct RAddHost {
    pub host_name: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct HostInfo {
    pub host_name: String,
    pub host_uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ListMeta {
    pub count: u64,
    pub total: u64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct HostListResponse {
    pub hosts: Vec<HostInfo>,
    pub meta: ListMeta,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct EventInfo {
    pub name: String,
    pub description: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub uri: String,
    pub hosts_uri: String,
}

impl EventInfo {
    pub fn from_model(base: &str, event: &EventModel) -> Self {
        let uri = format!("{}/{}/events/{}", base, API_VERSION, event.id);
        EventInfo {
            name: event.name.clone(),
            description: event.description.clone(),
            starts_at: event.starts_at,
            ends_at: event.ends_at,
            hosts_uri: format!("{}/hosts", uri),
            uri,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct EventListResponse {
    pub events: Vec<EventInfo>,
    pub meta: ListMeta,
}
