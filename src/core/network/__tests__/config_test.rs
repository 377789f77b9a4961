//! # 구성 설정 단위테스트

use crate::core::network::config::{NetworkConfig, DEFAULT_ENERGY, UNNAMED_LAYER};
use crate::core::network::error::NetworkError;
use anyhow::Result;
use std::io::Write;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn 설정_기본값_테스트() {
        let config = NetworkConfig::default();

        assert_eq!(config.default_state, vec![1.0, 0.0]);
        assert_eq!(config.default_energy, DEFAULT_ENERGY);
        assert_eq!(config.unnamed_layer_name, UNNAMED_LAYER);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn 잘못된_설정_검증_테스트() {
        let mut config = NetworkConfig::default();
        config.default_state.clear();
        assert!(matches!(config.validate(), Err(NetworkError::Config(_))));

        let mut config = NetworkConfig::default();
        config.default_energy = f64::NAN;
        assert!(matches!(config.validate(), Err(NetworkError::Config(_))));

        let mut config = NetworkConfig::default();
        config.unnamed_layer_name = String::new();
        assert!(matches!(config.validate(), Err(NetworkError::Config(_))));
    }

    #[test]
    fn json_부분_설정_로드_테스트() -> Result<()> {
        let config = NetworkConfig::from_json_str(r#"{ "default_energy": 0.5 }"#)?;

        assert_eq!(config.default_energy, 0.5);
        // 누락된 필드는 기본값
        assert_eq!(config.default_state, vec![1.0, 0.0]);
        assert_eq!(config.unnamed_layer_name, "Unnamed");
        Ok(())
    }

    #[test]
    fn json_파일_로드_테스트() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, r#"{{ "default_state": [0.0, 0.0, 1.0], "unnamed_layer_name": "L" }}"#)?;

        let config = NetworkConfig::from_json_file(file.path())?;
        assert_eq!(config.default_state, vec![0.0, 0.0, 1.0]);
        assert_eq!(config.unnamed_layer_name, "L");
        assert_eq!(config.default_energy, 1.0);
        Ok(())
    }

    #[test]
    fn 검증_실패_JSON_거부_테스트() {
        assert!(NetworkConfig::from_json_str(r#"{ "default_state": [] }"#).is_err());
        assert!(NetworkConfig::from_json_str("not json").is_err());
        assert!(NetworkConfig::from_json_file("/nonexistent/energy_net.json").is_err());
    }
}
