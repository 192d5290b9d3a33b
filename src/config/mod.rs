pub mod global;
pub mod request;
pub mod schema;
pub mod validation;

pub use global::GlobalConfigManager;
pub use request::{split_words, LiveCommand, OperationRequest};
pub use schema::{GlobalConfig, LayoutChoice, Settings};
pub use validation::{
    validate_env_dir_name, validate_global_config, validate_request, validate_settings,
};
