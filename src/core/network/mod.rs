//! # 에너지 네트워크 모듈
//!
//! 노드 → 레이어 → 시스템으로 조립되는 상태/에너지 네트워크의 구조 모델.
//! 갱신 규칙이나 적분기는 없고, 이후 동역학 시뮬레이션을 위한 뼈대만 제공합니다.

pub mod config;
pub mod describe;
pub mod error;
pub mod layer;
pub mod node;
pub mod system;

pub use config::{NetworkConfig, DEFAULT_ENERGY, DEFAULT_STATE, UNNAMED_LAYER};
pub use describe::format_state;
pub use error::{NetworkError, NetworkResult};
pub use layer::{Layer, LayerDiagnostic};
pub use node::Node;
pub use system::{coupling_key, Coupling, LayerKey, System};

// 테스트 모듈들
#[cfg(test)]
pub mod __tests__;
