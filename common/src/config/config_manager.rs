use serde::de::DeserializeOwned;
use std::path::PathBuf;
use std::sync::Mutex;

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads a config once, validates it and caches the result. A missing
/// config yields `TConfig::default()`.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + DeserializeOwned + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + DeserializeOwned + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + DeserializeOwned + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Mutex::new(None),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let config = match self.config_content_provider.get_config_content()? {
            Some(config_data) => self.config_serializer.deserialize(&config_data)?,
            None => TConfig::default(),
        };

        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::cell::Cell;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    #[serde(default)]
    struct TestConfig {
        port: u16,
        name: String,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self { port: 5000, name: "default".to_string() }
        }
    }

    impl Validate for TestConfig {
        fn validate(&self) -> Result<(), String> {
            if self.port == 0 {
                return Err("port must be non-zero".to_string());
            }
            Ok(())
        }
    }

    struct InMemoryProvider {
        content: Option<String>,
        reads: Cell<usize>,
    }

    impl InMemoryProvider {
        fn new(content: Option<&str>) -> Self {
            Self { content: content.map(str::to_string), reads: Cell::new(0) }
        }
    }

    impl ConfigContentProvider for InMemoryProvider {
        fn get_config_content(&self) -> Result<Option<String>, String> {
            self.reads.set(self.reads.get() + 1);
            Ok(self.content.clone())
        }
    }

    fn manager(content: Option<&str>) -> ConfigManager<InMemoryProvider, TestConfig> {
        ConfigManager::new(InMemoryProvider::new(content), YamlConfigSerializer::new())
    }

    #[test]
    fn test_missing_content_gives_default() {
        assert_eq!(manager(None).get_config(), Ok(TestConfig::default()));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = manager(Some("port: 8080\n")).get_config().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.name, "default");
    }

    #[test]
    fn test_validation_error_is_reported() {
        let err = manager(Some("port: 0\n")).get_config().unwrap_err();
        assert!(err.contains("port must be non-zero"), "{}", err);
    }

    #[test]
    fn test_invalid_yaml_is_reported() {
        let err = manager(Some("port: [not a number\n")).get_config().unwrap_err();
        assert!(err.starts_with("Failed to deserialize config"), "{}", err);
    }

    #[test]
    fn test_config_is_cached() {
        let manager = manager(Some("name: cached\n"));
        manager.get_config().unwrap();
        manager.get_config().unwrap();
        assert_eq!(manager.config_content_provider.reads.get(), 1);
    }
}
