//! 에너지 노드 네트워크 라이브러리
//!
//! 상태 벡터와 에너지를 가진 노드를 레이어로 묶고, 레이어 사이의 결합 행렬을
//! 시스템 단위로 관리하는 구조 모델

pub mod core;

// 핵심 타입들 재수출
pub use crate::core::network::{
    coupling_key, format_state, Coupling, Layer, LayerDiagnostic, LayerKey, NetworkConfig,
    NetworkError, NetworkResult, Node, System, DEFAULT_ENERGY, DEFAULT_STATE, UNNAMED_LAYER,
};
