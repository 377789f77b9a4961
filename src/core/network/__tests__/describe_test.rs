//! # 설명 출력 단위테스트

use crate::core::network::describe::format_state;
use crate::core::network::layer::Layer;
use crate::core::network::node::Node;
use crate::core::network::system::System;
use anyhow::Result;
use nalgebra::{DMatrix, DVector};
use std::sync::Arc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn 상태_벡터_한줄_형식_테스트() {
        assert_eq!(format_state(&DVector::from_vec(vec![1.0, 0.0])), "[1.0, 0.0]");
        assert_eq!(format_state(&DVector::from_vec(vec![-0.5])), "[-0.5]");
        assert_eq!(format_state(&DVector::from_vec(vec![])), "[]");
    }

    #[test]
    fn 노드_설명_테스트() {
        let named = Node::new(2.0, DVector::from_vec(vec![0.0, 1.0]), Some("A0".into()));
        assert_eq!(
            named.to_string(),
            "Node \"A0\"\nEnergy: 2.0\nCurrent state: [0.0, 1.0]"
        );

        let unnamed = Node::default();
        assert_eq!(
            unnamed.to_string(),
            "Unnamed Node:Energy: 1.0\nCurrent state: [1.0, 0.0]"
        );
    }

    #[test]
    fn 레이어_설명_테스트() -> Result<()> {
        let layer = Layer::with_defaults(1, Some("L"))?;
        let expected = "Layer \"L\"\n*************************\nNumber of nodes: 1\n\n\
                        Layer contains:\n-------------------\n\
                        Node \"L0\"\nEnergy: 1.0\nCurrent state: [1.0, 0.0]\n-------------------\n";
        assert_eq!(layer.to_string(), expected);
        Ok(())
    }

    #[test]
    fn 빈_시스템_설명_테스트() {
        let system = System::new(None);
        assert_eq!(
            system.to_string(),
            "Unnamed system:\n============================\n\n\
             Currently no layers specified.*************************\n\n\
             Currently no couplings specified.\n\n"
        );
    }

    #[test]
    fn 시스템_설명_테스트() -> Result<()> {
        let mut system = System::new(Some("toy"));
        system.add_layer(2, None, None, Some("A"))?;
        system.add_layer(1, None, None, Some("B"))?;
        system.couple_layers("A", "B", Arc::new(DMatrix::from_element(1, 2, 0.25)));

        let text = system.to_string();
        assert!(text.starts_with("System \"toy\":\n============================\n\nLayers:\n\n"));
        assert!(text.contains("Layer \"A\"\n"));
        assert!(text.contains("Node \"A1\"\n"));
        assert!(text.contains("Layer \"B\"\n"));
        assert!(text.contains("Couplings:\n\nA_to_B:\n"));
        assert!(text.contains("0.25"));
        assert!(text.ends_with("-------------------\n"));
        assert!(!text.contains("Currently no"));
        Ok(())
    }
}
