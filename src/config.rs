use crate::binder::merge::UnmatchedPropertyPolicy;
use crate::logging::LogFormat;
use std::{
    io,
    path::{Path, PathBuf},
    str::FromStr,
};

const DEFAULT_DATABASE_URL: &str = "sqlite://content.db?mode=rwc";
const DEFAULT_UPLOAD_TEMP_DIR: &str = "App_Data/TEMP/FileUploads";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 30 * 1024 * 1024;

#[derive(Debug, Clone)]
pub(crate) struct AppSettings {
    pub(crate) database_url: String,
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) upload_temp_dir: PathBuf,
    pub(crate) max_upload_bytes: usize,
    pub(crate) unmatched_property_policy: UnmatchedPropertyPolicy,
    pub(crate) log_format: LogFormat,
}

impl AppSettings {
    pub(crate) fn from_env() -> Result<Self, io::Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, io::Error> {
        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            host: lookup("HTTP_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_var(&lookup, "HTTP_PORT", 3000)?,
            upload_temp_dir: lookup("FILE_UPLOAD_TEMP_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_TEMP_DIR)),
            max_upload_bytes: parse_var(&lookup, "MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            unmatched_property_policy: parse_var(
                &lookup,
                "UNMATCHED_PROPERTY_POLICY",
                UnmatchedPropertyPolicy::default(),
            )?,
            log_format: parse_var(&lookup, "LOG_FORMAT", LogFormat::default())?,
        })
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, io::Error>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|error| io::Error::other(format!("invalid {key} `{raw}`: {error}"))),
    }
}

/// Makes sure the upload temp directory exists and is a directory.
pub(crate) fn init_upload_temp_dir(path: &Path) -> Result<PathBuf, io::Error> {
    if path.exists() {
        if !path.is_dir() {
            return Err(io::Error::other(format!(
                "FILE_UPLOAD_TEMP_DIR is not a directory: {}",
                path.display()
            )));
        }
    } else {
        std::fs::create_dir_all(path).map_err(|error| {
            io::Error::other(format!(
                "failed to create FILE_UPLOAD_TEMP_DIR {}: {error}",
                path.display()
            ))
        })?;
    }

    match path.canonicalize() {
        Ok(resolved) => Ok(resolved),
        Err(_) => Ok(path.to_path_buf()),
    }
}
