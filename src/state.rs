use crate::config::Config;
use crate::interpretation::ReportAssembler;
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub assembler: ReportAssembler,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            assembler: ReportAssembler::new(config.engine),
            config,
        }
    }
}

impl FromRef<AppState> for ReportAssembler {
    fn from_ref(state: &AppState) -> Self {
        state.assembler
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
