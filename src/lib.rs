pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, toml_config::TomlConfig, AppConfig, CliConfig};
pub use self::core::{
    controller::{Controller, RunMode, RunOutcome},
    persistence::ContainerRepository,
};
pub use domain::model::{Product, Store, StoreContainer};
pub use utils::error::{Result, StorekeeperError};
