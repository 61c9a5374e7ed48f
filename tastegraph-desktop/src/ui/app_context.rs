use tastegraph_core::config::Config;

/// Send-safe services handed to the Dioxus launch context
#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
}
