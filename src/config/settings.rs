use crate::error::{ProcessingError, Result};
use crate::utils::constants::{
    KEY_COLUMNS_OF_INTEREST, KEY_INPUT_FILE, KEY_INPUT_FOLDER, KEY_LOCATION_ID,
    KEY_OUTPUT_FOLDER, KEY_SEPARATOR, KEY_SKIPROWS, OUTPUT_FILE,
};
use ::config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use validator::Validate;

/// Parse a JSON settings file into a flat key/value mapping
pub fn load_config(path: &Path) -> Result<Config> {
    let config = Config::builder()
        .add_source(File::from(path).format(FileFormat::Json))
        .build()?;

    let raw: serde_json::Value = config.clone().try_deserialize()?;
    debug!("{}", raw);

    Ok(config)
}

/// Look up a required key, warning and failing if it is absent
pub fn get_setting<'de, T: Deserialize<'de>>(name: &str, settings: &Config) -> Result<T> {
    match settings.get::<T>(name) {
        Ok(value) => Ok(value),
        Err(ConfigError::NotFound(_)) => {
            warn!("required key {} is not in the settings. Quitting.", name);
            Err(ProcessingError::MissingSetting {
                key: name.to_string(),
            })
        }
        Err(e) => Err(ProcessingError::InvalidSetting {
            key: name.to_string(),
            message: e.to_string(),
        }),
    }
}

/// Require `path` to be an existing directory
pub fn check_exists(path: &Path, descriptor: &str) -> Result<()> {
    if path.is_dir() {
        debug!("using {} as the {} folder", path.display(), descriptor);
        Ok(())
    } else {
        warn!("{} {} does not exist. Quitting.", descriptor, path.display());
        Err(ProcessingError::MissingFolder {
            descriptor: descriptor.to_string(),
            path: path.to_path_buf(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct Settings {
    pub input_folder: PathBuf,

    #[validate(length(min = 1))]
    pub input_file: String,

    pub skiprows: usize,

    #[validate(length(equal = 1))]
    pub separator: String,

    #[validate(length(min = 1))]
    pub columns_of_interest: Vec<String>,

    #[validate(length(min = 1))]
    pub location_id: String,

    pub output_folder: PathBuf,
}

impl Settings {
    /// Load and check every required setting before any data is touched
    pub fn load(path: &Path) -> Result<Self> {
        let config = load_config(path)?;
        Self::from_config(&config)
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let input_folder = PathBuf::from(get_setting::<String>(KEY_INPUT_FOLDER, config)?);
        check_exists(&input_folder, "input")?;

        let input_file: String = get_setting(KEY_INPUT_FILE, config)?;
        let skiprows: usize = get_setting(KEY_SKIPROWS, config)?;
        let separator: String = get_setting(KEY_SEPARATOR, config)?;
        let columns_of_interest: Vec<String> = get_setting(KEY_COLUMNS_OF_INTEREST, config)?;
        let location_id: String = get_setting(KEY_LOCATION_ID, config)?;

        let output_folder = PathBuf::from(get_setting::<String>(KEY_OUTPUT_FOLDER, config)?);
        check_exists(&output_folder, "output")?;

        let settings = Self {
            input_folder,
            input_file,
            skiprows,
            separator,
            columns_of_interest,
            location_id,
            output_folder,
        };
        settings.check()?;

        Ok(settings)
    }

    fn check(&self) -> Result<()> {
        self.validate()?;
        self.separator_byte()?;

        if !self.columns_of_interest.contains(&self.location_id) {
            return Err(ProcessingError::InvalidSetting {
                key: KEY_LOCATION_ID.to_string(),
                message: format!(
                    "'{}' must be one of the columns of interest {:?}",
                    self.location_id, self.columns_of_interest
                ),
            });
        }

        Ok(())
    }

    /// The separator as a single delimiter byte
    pub fn separator_byte(&self) -> Result<u8> {
        match self.separator.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(ProcessingError::InvalidSetting {
                key: KEY_SEPARATOR.to_string(),
                message: format!(
                    "'{}' must be a single ASCII character",
                    self.separator
                ),
            }),
        }
    }

    pub fn input_path(&self) -> PathBuf {
        self.input_folder.join(&self.input_file)
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_folder.join(OUTPUT_FILE)
    }
}
