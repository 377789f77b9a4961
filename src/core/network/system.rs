//! # 시스템
//!
//! 이름으로 구분되는 레이어들과 레이어 간 결합 행렬의 최상위 컨테이너

use super::config::NetworkConfig;
use super::error::{NetworkError, NetworkResult};
use super::layer::Layer;
use nalgebra::{DMatrix, DVector};
use std::collections::BTreeMap;
use std::sync::Arc;

/// 레이어 키. 이름 없이 추가된 레이어는 모두 `None` 키를 공유함
pub type LayerKey = Option<String>;

/// 결합 행렬. 호출자가 준 행렬을 복사하지 않고 공유함
pub type Coupling = Arc<DMatrix<f64>>;

/// `"<X>_to_<Y>"` 형식의 결합 키
pub fn coupling_key(layer_x: &str, layer_y: &str) -> String {
    format!("{}_to_{}", layer_x, layer_y)
}

/// 레이어와 결합의 레지스트리
#[derive(Debug, Clone, Default)]
pub struct System {
    name: Option<String>,
    layers: BTreeMap<LayerKey, Layer>,
    couplings: BTreeMap<String, Coupling>,
    config: NetworkConfig,
}

impl System {
    pub fn new(name: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
            ..Self::default()
        }
    }

    /// 레이어 기본값을 바꾼 시스템
    pub fn with_config(name: Option<&str>, config: NetworkConfig) -> NetworkResult<Self> {
        config.validate()?;
        Ok(Self {
            name: name.map(str::to_string),
            layers: BTreeMap::new(),
            couplings: BTreeMap::new(),
            config,
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn layers(&self) -> &BTreeMap<LayerKey, Layer> {
        &self.layers
    }

    pub fn couplings(&self) -> &BTreeMap<String, Coupling> {
        &self.couplings
    }

    /// 레이어 생성 후 `name` 그대로를 키로 등록
    ///
    /// 같은 키가 이미 있으면 새 레이어가 자리를 차지하고,
    /// 밀려난 레이어를 돌려줍니다. 이름 없는 레이어끼리는 항상 같은 키를 씁니다.
    pub fn add_layer(
        &mut self,
        num_nodes: usize,
        states: Option<Vec<DVector<f64>>>,
        energies: Option<Vec<f64>>,
        name: Option<&str>,
    ) -> NetworkResult<Option<Layer>> {
        let layer = Layer::with_config(num_nodes, states, energies, name, &self.config)?;
        let key: LayerKey = name.map(str::to_string);

        log::debug!("adding layer \"{}\" with {} nodes", layer.name(), num_nodes);
        let displaced = self.layers.insert(key, layer);
        if let Some(previous) = &displaced {
            log::warn!(
                "layer key {:?} already registered, replacing layer \"{}\"",
                name,
                previous.name()
            );
        }
        Ok(displaced)
    }

    /// 비어 있지 않은 식별자를 요구하는 `add_layer`
    pub fn add_named_layer(
        &mut self,
        name: &str,
        num_nodes: usize,
        states: Option<Vec<DVector<f64>>>,
        energies: Option<Vec<f64>>,
    ) -> NetworkResult<Option<Layer>> {
        if name.is_empty() {
            return Err(NetworkError::EmptyLayerName);
        }
        self.add_layer(num_nodes, states, energies, Some(name))
    }

    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.get(&Some(name.to_string()))
    }

    pub fn layer_mut(&mut self, name: &str) -> Option<&mut Layer> {
        self.layers.get_mut(&Some(name.to_string()))
    }

    /// 이름 없이 추가된 (마지막) 레이어
    pub fn unnamed_layer(&self) -> Option<&Layer> {
        self.layers.get(&None)
    }

    pub fn has_layer(&self, name: &str) -> bool {
        self.layer(name).is_some()
    }

    /// 두 레이어 사이의 결합 등록
    ///
    /// 두 레이어가 모두 있으면 `"<X>_to_<Y>"` 키에 행렬을 기록(덮어쓰기)하고 `true`.
    /// 어느 한쪽이라도 없으면 아무것도 하지 않고 `false`. 행렬 모양은 검사하지 않음.
    pub fn couple_layers(&mut self, layer_x: &str, layer_y: &str, couplings: Coupling) -> bool {
        if !(self.has_layer(layer_x) && self.has_layer(layer_y)) {
            return false;
        }
        let key = coupling_key(layer_x, layer_y);
        log::debug!("recording coupling {}", key);
        self.couplings.insert(key, couplings);
        true
    }

    /// 없는 레이어를 에러로 알려주는 `couple_layers`
    pub fn try_couple_layers(
        &mut self,
        layer_x: &str,
        layer_y: &str,
        couplings: Coupling,
    ) -> NetworkResult<()> {
        for name in [layer_x, layer_y] {
            if !self.has_layer(name) {
                return Err(NetworkError::UnknownLayer(name.to_string()));
            }
        }
        self.couple_layers(layer_x, layer_y, couplings);
        Ok(())
    }

    pub fn coupling(&self, layer_x: &str, layer_y: &str) -> Option<&Coupling> {
        self.couplings.get(&coupling_key(layer_x, layer_y))
    }
}
