//! # 네트워크 모듈 테스트
//!
//! 노드, 레이어, 시스템, 설정, 설명 출력의 단위테스트

pub mod config_test;
pub mod describe_test;
