use crate::config::cors::CorsConfig;

#[derive(Clone, Debug)]
pub struct AppState {
    pub cors_config: CorsConfig,
}

pub fn init_app_state() -> AppState {
    AppState {
        cors_config: CorsConfig::from_env(),
    }
}
