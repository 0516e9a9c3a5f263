//! Render API wire types

use serde::{Deserialize, Serialize};

use crate::types::{ServiceRecord, SuspendState};

/// One entry of `GET /services`: the service wrapped together with its page cursor.
#[derive(Debug, Deserialize)]
pub struct RenderServiceItem {
    #[serde(default)]
    pub service: Option<RenderService>,
    #[serde(default)]
    pub cursor: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RenderService {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub suspended: Option<String>,
}

impl From<RenderService> for ServiceRecord {
    fn from(service: RenderService) -> Self {
        Self {
            id: service.id,
            name: service.name,
            suspended: service.suspended.map(SuspendState::from),
        }
    }
}

/// Body of `POST /services/{id}/deploys`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeployRequest {
    pub clear_cache: &'static str,
}

impl CreateDeployRequest {
    pub fn new(clear_cache: bool) -> Self {
        Self {
            clear_cache: if clear_cache { "clear" } else { "do_not_clear" },
        }
    }
}
