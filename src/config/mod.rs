mod catalog;
mod manager;

pub use catalog::{DEFAULT_MODEL, ModelOption, builtin_models, find_model};
pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_ENDPOINT, ENDPOINT_ENV, ResolveOptions, ResolvedConfig,
    YantraConfig, resolve_config,
};
