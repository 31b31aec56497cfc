use business::domain::product::list_state::ListConfig;

use super::{api_config::ApiConfig, list_config};

pub struct AppConfig {
    pub api: ApiConfig,
    pub list: ListConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            api: ApiConfig::from_env(),
            list: list_config::list_config_from_env(),
        }
    }
}
