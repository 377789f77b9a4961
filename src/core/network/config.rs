//! # 네트워크 구성 설정
//!
//! 레이어 생성 시 사용하는 기본값들 (기본 상태, 기본 에너지, 이름 없는 레이어의 표시 이름)

use super::error::{NetworkError, NetworkResult};
use anyhow::{Context, Result};
use nalgebra::DVector;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 기본 노드 상태 `[1.0, 0.0]`
pub const DEFAULT_STATE: [f64; 2] = [1.0, 0.0];
/// 기본 노드 에너지
pub const DEFAULT_ENERGY: f64 = 1.0;
/// 이름 없이 생성된 레이어의 표시 이름
pub const UNNAMED_LAYER: &str = "Unnamed";

/// 레이어 기본값 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// 상태가 주어지지 않았거나 길이가 맞지 않을 때 모든 노드에 쓰는 상태
    pub default_state: Vec<f64>,
    /// 에너지가 주어지지 않았거나 길이가 맞지 않을 때 모든 노드에 쓰는 에너지
    pub default_energy: f64,
    /// 이름 없는 레이어의 이름 (노드 이름의 접두사로도 쓰임)
    pub unnamed_layer_name: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            default_state: DEFAULT_STATE.to_vec(),
            default_energy: DEFAULT_ENERGY,
            unnamed_layer_name: UNNAMED_LAYER.to_string(),
        }
    }
}

impl NetworkConfig {
    /// 설정값 검증
    pub fn validate(&self) -> NetworkResult<()> {
        if self.default_state.is_empty() {
            return Err(NetworkError::Config("default_state must not be empty".into()));
        }
        if self.default_state.iter().any(|v| !v.is_finite()) {
            return Err(NetworkError::Config("default_state must be finite".into()));
        }
        if !self.default_energy.is_finite() {
            return Err(NetworkError::Config(format!(
                "default_energy must be finite, got {}",
                self.default_energy
            )));
        }
        if self.unnamed_layer_name.is_empty() {
            return Err(NetworkError::Config("unnamed_layer_name must not be empty".into()));
        }
        Ok(())
    }

    /// 기본 상태를 벡터로 반환
    pub fn default_state_vector(&self) -> DVector<f64> {
        DVector::from_vec(self.default_state.clone())
    }

    /// JSON 문자열에서 설정 로드 (누락된 필드는 기본값)
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("invalid network config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// JSON 파일에서 설정 로드
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json_str(&text)
    }
}
