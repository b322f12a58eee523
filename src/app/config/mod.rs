mod load_config;

pub(crate) use load_config::parse_base_url;
pub use load_config::{CONFIG_ENV, default_config_path, load_config, parse_config_content};
