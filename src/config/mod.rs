pub mod settings;

pub use settings::{check_exists, get_setting, load_config, Settings};
