//! JSON 설정 파일 읽기/쓰기.
//!
//! 파일 없음은 오류가 아니다. 전역은 기본값, 프로젝트는 `None`으로 해석한다.
//! 쓰기는 임시 파일 없이 직접 덮어쓴다.

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::application::config::{GlobalConfig, ProjectConfig};
use crate::domain::error::{ConfigError, ConfigResult};

/// 전역 설정을 읽는다. 파일이 없으면 스키마 기본값.
pub fn read_global_config(path: &Path) -> ConfigResult<GlobalConfig> {
    let Some(config) = read_json::<GlobalConfig>(path)? else {
        debug!(path = %path.display(), "global config absent; using defaults");
        return Ok(GlobalConfig::default());
    };
    Ok(config)
}

/// 프로젝트 설정을 읽는다. 파일이 없으면 `None`.
pub fn read_project_config(path: &Path) -> ConfigResult<Option<ProjectConfig>> {
    let Some(config) = read_json::<ProjectConfig>(path)? else {
        debug!(path = %path.display(), "project config absent");
        return Ok(None);
    };
    Ok(Some(config))
}

pub fn write_global_config(path: &Path, config: &GlobalConfig) -> ConfigResult<()> {
    write_json(path, config)
}

pub fn write_project_config(path: &Path, config: &ProjectConfig) -> ConfigResult<()> {
    write_json(path, config)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> ConfigResult<Option<T>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(ConfigError::io(
                format!("failed to read config at {}", path.display()),
                err,
            ));
        }
    };

    debug!(path = %path.display(), bytes = raw.len(), "read config");
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|err| ConfigError::validation(source_label(path), err.to_string()))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> ConfigResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|err| {
            ConfigError::io(
                format!("failed to create directory {}", parent.display()),
                err,
            )
        })?;
    }

    let rendered = serde_json::to_string_pretty(value)
        .map_err(|err| ConfigError::validation(source_label(path), err.to_string()))?;
    fs::write(path, format!("{rendered}\n")).map_err(|err| {
        ConfigError::io(format!("failed to write config at {}", path.display()), err)
    })?;
    debug!(path = %path.display(), "wrote config");
    Ok(())
}

fn source_label(path: &Path) -> String {
    format!("config {}", path.display())
}
