//! # 핵심 모듈
//!
//! 노드/레이어/시스템 구조 모델

pub mod network;

pub use network::*;
