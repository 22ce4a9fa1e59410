use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

/// YAML text format for config files. Errors carry the serde location.
#[derive(Default)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        if content.trim().is_empty() {
            return Err("Failed to deserialize config: file is empty".to_string());
        }
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Window {
        width: u32,
    }

    #[test]
    fn test_yaml_reads_mapping() {
        let serializer = YamlConfigSerializer::new();
        let window: Window = serializer.deserialize("width: 420\n").unwrap();
        assert_eq!(window, Window { width: 420 });
    }

    #[test]
    fn test_wrong_type_is_reported() {
        let serializer = YamlConfigSerializer::new();
        let result: Result<Window, String> = serializer.deserialize("width: wide\n");
        assert!(result.unwrap_err().starts_with("Failed to deserialize config:"));
    }

    #[test]
    fn test_blank_content_is_rejected() {
        let serializer = YamlConfigSerializer::new();
        let result: Result<Window, String> = serializer.deserialize("  \n");
        assert_eq!(result.unwrap_err(), "Failed to deserialize config: file is empty");
    }
}
