// src/settings/io.rs
use bevy::log::{debug, error, info};
use directories_next::ProjectDirs;
use std::fs;
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};
use thiserror::Error;

const QUALIFIER: &str = "com";
const ORGANIZATION: &str = "Gridmend";
const APPLICATION: &str = "gridmend";
const CONFIG_FILE: &str = "app_settings.json";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Could not determine project directories for app settings.")]
    NoConfigDir,
    #[error("Settings I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub fn get_config_path() -> Result<PathBuf, SettingsError> {
    let proj_dirs =
        ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION).ok_or(SettingsError::NoConfigDir)?;
    Ok(proj_dirs.config_dir().join(CONFIG_FILE))
}

/// Reads settings from `path`. A missing file yields `T::default()`.
pub fn load_settings_from<T>(path: &Path) -> Result<T, SettingsError>
where
    T: for<'de> serde::de::Deserialize<'de> + Default,
{
    info!("AppSettings: Attempting to load settings from {:?}", path);
    match fs::File::open(path) {
        Ok(file) => {
            let reader = BufReader::new(file);
            let settings = serde_json::from_reader(reader).map_err(|source| {
                error!("AppSettings: Failed to parse settings file {:?}: {}", path, source);
                SettingsError::Parse {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
            info!("AppSettings: Successfully deserialized settings.");
            Ok(settings)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("AppSettings: Settings file not found at {:?}. Returning default.", path);
            Ok(T::default())
        }
        Err(source) => {
            error!("AppSettings: Failed to open settings file {:?}: {}", path, source);
            Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

pub fn save_settings_to<T: serde::Serialize>(settings: &T, path: &Path) -> Result<(), SettingsError> {
    info!("AppSettings: Saving settings to {:?}", path);
    let io_err = |source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(io_err)?;
    }
    let file = fs::File::create(path).map_err(io_err)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, settings).map_err(|source| {
        error!("AppSettings: Failed to serialize settings to {:?}: {}", path, source);
        SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        }
    })?;
    debug!("AppSettings: settings written");
    Ok(())
}

pub fn load_settings_from_file<T>() -> Result<T, SettingsError>
where
    T: for<'de> serde::de::Deserialize<'de> + Default,
{
    load_settings_from(&get_config_path()?)
}

pub fn save_settings_to_file<T: serde::Serialize>(settings: &T) -> Result<(), SettingsError> {
    save_settings_to(settings, &get_config_path()?)
}
