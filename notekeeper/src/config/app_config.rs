use thiserror::Error;
use crate::config::app_config::data::AppConfigData;
use crate::config::hasher_config::HasherConfigData;
use crate::config::log_config::LogConfig;
use crate::config::storage_config::StorageConfigData;

pub mod data;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub storage: StorageConfigData,
    pub max_title_size: usize,
    pub max_content_size: usize,
    pub hasher_config: HasherConfigData,
    pub log: LogConfig,
}

#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("max_title_size must be positive")]
    ZeroTitleSize,

    #[error("max_content_size must be positive")]
    ZeroContentSize,

    #[error("storage.max_connections must be positive")]
    ZeroConnections,

    #[error("log.max_files must be positive")]
    ZeroLogFiles,

    #[error("invalid argon2 parameters: {0}")]
    HasherParams(#[from] argon2::Error),
}

impl TryFrom<AppConfigData> for AppConfig {
    type Error = AppConfigError;

    fn try_from(value: AppConfigData) -> Result<Self, Self::Error> {
        if value.max_title_size == 0 {
            return Err(AppConfigError::ZeroTitleSize);
        }
        if value.max_content_size == 0 {
            return Err(AppConfigError::ZeroContentSize);
        }
        if value.storage.max_connections == 0 {
            return Err(AppConfigError::ZeroConnections);
        }
        if value.log.max_files == 0 {
            return Err(AppConfigError::ZeroLogFiles);
        }
        value.hasher_config.argon2_params()?;
        Ok(
            AppConfig {
                storage: value.storage,
                max_title_size: value.max_title_size,
                max_content_size: value.max_content_size,
                hasher_config: value.hasher_config,
                log: value.log,
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_config_defaults_match() {
        assert_eq!(
            AppConfigData::default(),
            serde_json::de::from_str("{}").unwrap(),
        )
    }

    #[test]
    fn defaults_are_valid() {
        AppConfig::try_from(AppConfigData::default())
            .expect("default config rejected");
    }

    #[test]
    fn zero_limits_are_rejected() {
        let data = AppConfigData {
            max_title_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            AppConfig::try_from(data),
            Err(AppConfigError::ZeroTitleSize),
        ));

        let mut data = AppConfigData::default();
        data.storage.max_connections = 0;
        assert!(matches!(
            AppConfig::try_from(data),
            Err(AppConfigError::ZeroConnections),
        ));
    }

    #[test]
    fn bad_hasher_params_are_rejected() {
        let mut data = AppConfigData::default();
        data.hasher_config.argon2_m_cost = 1;
        assert!(matches!(
            AppConfig::try_from(data),
            Err(AppConfigError::HasherParams(_)),
        ));
    }
}
