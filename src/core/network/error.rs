//! # 네트워크 에러 타입
//!
//! 레이어 생성, 일괄 상태 갱신, 결합 등록에서 발생하는 실패들

use thiserror::Error;

/// 노드/레이어/시스템 연산의 에러
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// 노드가 하나도 없는 레이어는 만들 수 없음
    #[error("layer \"{layer}\" must contain at least one node")]
    EmptyLayer { layer: String },

    /// 레이어 식별자로 빈 문자열을 쓸 수 없음
    #[error("layer name must not be empty")]
    EmptyLayerName,

    /// `update_nodes`에 레이어 노드 수보다 많은 상태가 전달됨
    #[error("too many states for layer \"{layer}\": expected at most {expected}, got {got}")]
    TooManyStates {
        layer: String,
        expected: usize,
        got: usize,
    },

    /// 결합하려는 레이어가 시스템에 없음
    #[error("unknown layer: {0}")]
    UnknownLayer(String),

    /// 설정값 검증 실패
    #[error("config error: {0}")]
    Config(String),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
