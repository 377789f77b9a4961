//! # 레이어
//!
//! 고정 크기의 순서 있는 노드 묶음.
//! 생성 시 기본값 대체 정책을 적용하고, 위치 기반 일괄 상태 갱신을 제공합니다.

use super::config::NetworkConfig;
use super::error::{NetworkError, NetworkResult};
use super::node::Node;
use nalgebra::DVector;
use std::fmt;

/// 레이어 생성 중 발생한 비치명적 진단
///
/// 길이가 맞지 않는 입력은 레이어 전체를 기본값으로 되돌리며,
/// 그 사실을 이 값으로 기록합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerDiagnostic {
    /// 상태 시퀀스 길이가 노드 수와 다름 → 모든 노드가 기본 상태
    StatesLengthMismatch { expected: usize, got: usize },
    /// 에너지 시퀀스 길이가 노드 수와 다름 → 모든 노드가 기본 에너지
    EnergiesLengthMismatch { expected: usize, got: usize },
}

impl fmt::Display for LayerDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StatesLengthMismatch { expected, got } => write!(
                f,
                "states are inconsistent with num_nodes ({} != {}), using default value",
                got, expected
            ),
            Self::EnergiesLengthMismatch { expected, got } => write!(
                f,
                "energies are inconsistent with num_nodes ({} != {}), using default value",
                got, expected
            ),
        }
    }
}

/// 노드 레이어
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    name: String,
    nodes: Vec<Node>,
    diagnostics: Vec<LayerDiagnostic>,
}

impl Layer {
    /// 기본 설정으로 레이어 생성
    ///
    /// `states`/`energies`가 `None`이면 기본값을 쓰고, 길이가 `num_nodes`와
    /// 다르면 해당 값 전체를 기본값으로 대체합니다 (노드별 대체가 아님).
    pub fn new(
        num_nodes: usize,
        states: Option<Vec<DVector<f64>>>,
        energies: Option<Vec<f64>>,
        name: Option<&str>,
    ) -> NetworkResult<Self> {
        Self::with_config(num_nodes, states, energies, name, &NetworkConfig::default())
    }

    /// 모든 노드가 기본 상태/에너지인 레이어
    pub fn with_defaults(num_nodes: usize, name: Option<&str>) -> NetworkResult<Self> {
        Self::new(num_nodes, None, None, name)
    }

    /// 주어진 설정의 기본값으로 레이어 생성
    pub fn with_config(
        num_nodes: usize,
        states: Option<Vec<DVector<f64>>>,
        energies: Option<Vec<f64>>,
        name: Option<&str>,
        config: &NetworkConfig,
    ) -> NetworkResult<Self> {
        let name = name.unwrap_or(config.unnamed_layer_name.as_str()).to_string();
        if num_nodes == 0 {
            return Err(NetworkError::EmptyLayer { layer: name });
        }

        let mut diagnostics = Vec::new();

        let states = match states {
            Some(states) if states.len() == num_nodes => states,
            Some(states) => {
                diagnostics.push(LayerDiagnostic::StatesLengthMismatch {
                    expected: num_nodes,
                    got: states.len(),
                });
                vec![config.default_state_vector(); num_nodes]
            }
            None => vec![config.default_state_vector(); num_nodes],
        };

        let energies = match energies {
            Some(energies) if energies.len() == num_nodes => energies,
            Some(energies) => {
                diagnostics.push(LayerDiagnostic::EnergiesLengthMismatch {
                    expected: num_nodes,
                    got: energies.len(),
                });
                vec![config.default_energy; num_nodes]
            }
            None => vec![config.default_energy; num_nodes],
        };

        for diagnostic in &diagnostics {
            log::warn!("layer \"{}\": {}", name, diagnostic);
        }

        let nodes = states
            .into_iter()
            .zip(energies)
            .enumerate()
            .map(|(i, (state, energy))| Node::new(energy, state, Some(format!("{}{}", name, i))))
            .collect();

        Ok(Self {
            name,
            nodes,
            diagnostics,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 노드 수 (항상 `nodes().len()`과 같음)
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// 생성 시 기록된 대체 진단들
    pub fn diagnostics(&self) -> &[LayerDiagnostic] {
        &self.diagnostics
    }

    /// 위치 기반 일괄 상태 갱신
    ///
    /// 노드 수보다 짧은 입력은 앞쪽 노드만 갱신하고 나머지는 그대로 둡니다.
    /// 노드 수보다 긴 입력은 어떤 노드도 건드리지 않고 실패합니다.
    /// 반환값은 갱신된 노드 수입니다.
    pub fn update_nodes(&mut self, new_states: Vec<DVector<f64>>) -> NetworkResult<usize> {
        if new_states.len() > self.nodes.len() {
            return Err(NetworkError::TooManyStates {
                layer: self.name.clone(),
                expected: self.nodes.len(),
                got: new_states.len(),
            });
        }

        let applied = new_states.len();
        for (node, state) in self.nodes.iter_mut().zip(new_states) {
            node.update_state(state);
        }
        Ok(applied)
    }

    /// 노드 순서대로의 현재 상태 복사본
    pub fn node_states(&self) -> Vec<DVector<f64>> {
        self.nodes.iter().map(|node| node.state().clone()).collect()
    }

    /// 노드 순서대로의 현재 에너지
    pub fn energies(&self) -> Vec<f64> {
        self.nodes.iter().map(Node::energy).collect()
    }
}
