//! # 노드
//!
//! 상태 벡터와 에너지 스칼라를 가진 최소 단위

use super::config::{DEFAULT_ENERGY, DEFAULT_STATE};
use nalgebra::DVector;

/// 상태 벡터와 에너지를 가진 노드
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    state: DVector<f64>,
    energy: f64,
    name: Option<String>,
}

impl Node {
    pub fn new(energy: f64, state: DVector<f64>, name: Option<String>) -> Self {
        Self { state, energy, name }
    }

    pub fn state(&self) -> &DVector<f64> {
        &self.state
    }

    pub fn energy(&self) -> f64 {
        self.energy
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// 상태 교체. 이전 상태와 차원이 달라도 그대로 받아들임
    pub fn update_state(&mut self, new_state: DVector<f64>) {
        self.state = new_state;
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new(DEFAULT_ENERGY, DVector::from_row_slice(&DEFAULT_STATE), None)
    }
}
