use serde::{Deserialize, Serialize};

use crate::error::{PanZoomError, PanZoomResult};

use super::PanZoomConfig;

pub const PANZOOM_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanZoomConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: PanZoomConfig,
}

impl PanZoomConfig {
    pub fn to_json_contract_v1_pretty(&self) -> PanZoomResult<String> {
        let payload = PanZoomConfigJsonContractV1 {
            schema_version: PANZOOM_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            PanZoomError::InvalidData(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Parses either a versioned contract payload or a bare config.
    ///
    /// The contract shape is tried first: every bare-config field is
    /// defaultable, so a contract payload would otherwise also parse as an
    /// (empty) bare config.
    pub fn from_json_compat_str(input: &str) -> PanZoomResult<Self> {
        if let Ok(payload) = serde_json::from_str::<PanZoomConfigJsonContractV1>(input) {
            if payload.schema_version != PANZOOM_CONFIG_JSON_SCHEMA_V1 {
                return Err(PanZoomError::InvalidData(format!(
                    "unsupported config schema version: {}",
                    payload.schema_version
                )));
            }
            return payload.config.validate();
        }
        let config: PanZoomConfig = serde_json::from_str(input).map_err(|e| {
            PanZoomError::InvalidData(format!("failed to parse config json payload: {e}"))
        })?;
        config.validate()
    }
}
