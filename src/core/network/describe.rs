//! # 사람이 읽는 설명 출력
//!
//! 노드/레이어/시스템의 `Display` 구현. 상태를 읽기만 합니다.

use super::layer::Layer;
use super::node::Node;
use super::system::System;
use nalgebra::DVector;
use std::fmt;

const NODE_RULE: &str = "-------------------";
const LAYER_RULE: &str = "*************************";
const SYSTEM_RULE: &str = "============================";

/// 상태 벡터를 한 줄 `[a, b, ...]` 형식으로
pub fn format_state(state: &DVector<f64>) -> String {
    let items: Vec<String> = state.iter().map(|v| format!("{:?}", v)).collect();
    format!("[{}]", items.join(", "))
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => writeln!(f, "Node \"{}\"", name)?,
            None => write!(f, "Unnamed Node:")?,
        }
        write!(
            f,
            "Energy: {:?}\nCurrent state: {}",
            self.energy(),
            format_state(self.state())
        )
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Layer \"{}\"\n{}\nNumber of nodes: {}\n\n",
            self.name(),
            LAYER_RULE,
            self.num_nodes()
        )?;
        write!(f, "Layer contains:\n{}\n", NODE_RULE)?;
        for node in self.nodes() {
            write!(f, "{}\n{}\n", node, NODE_RULE)?;
        }
        Ok(())
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "System \"{}\"", name)?,
            None => write!(f, "Unnamed system")?,
        }
        write!(f, ":\n{}\n\n", SYSTEM_RULE)?;

        if self.layers().is_empty() {
            write!(f, "Currently no layers specified.")?;
        } else {
            write!(f, "Layers:\n\n")?;
            for layer in self.layers().values() {
                writeln!(f, "{}", layer)?;
            }
        }
        write!(f, "{}\n\n", LAYER_RULE)?;

        if self.couplings().is_empty() {
            write!(f, "Currently no couplings specified.\n\n")?;
        } else {
            write!(f, "Couplings:\n\n")?;
            for (key, coupling) in self.couplings() {
                write!(f, "{}:\n{}\n{}\n", key, coupling, NODE_RULE)?;
            }
        }
        Ok(())
    }
}
