//! `config get` / `config set` 유스케이스.

use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::application::config::{GLOBAL_KEYS, GlobalConfigPatch, ProjectConfigPatch};
use crate::application::ports::ConfigRepository;
use crate::domain::error::{ConfigError, ConfigResult};

/// 설정 대상 범위.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
    Global,
    Project,
}

/// 설정 값을 JSON으로 조회한다.
/// 프로젝트 범위는 병합된 실효 설정을, 전역 범위는 전역 파일 값(기본값 포함)을 보여준다.
pub struct GetConfigUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
}

impl<'a> GetConfigUseCase<'a> {
    pub fn execute(
        &self,
        root: &Path,
        scope: ConfigScope,
        key: Option<&str>,
    ) -> ConfigResult<Value> {
        let value = match scope {
            ConfigScope::Global => to_json(&self.config_repo.read_global()?)?,
            ConfigScope::Project => to_json(&self.config_repo.load(root)?)?,
        };

        let Some(key) = key else {
            return Ok(value);
        };

        let valid: &[&str] = match scope {
            ConfigScope::Global => &GLOBAL_KEYS,
            ConfigScope::Project => &MERGED_KEYS,
        };
        if !valid.contains(&key) {
            return Err(ConfigError::validation(
                "config key",
                format!("unknown key '{key}'. Valid keys: {}", valid.join(", ")),
            ));
        }
        Ok(value.get(key).cloned().unwrap_or(Value::Null))
    }
}

const MERGED_KEYS: [&str; 8] = [
    "mode",
    "editor",
    "claudeCodePath",
    "projectName",
    "template",
    "customPrompts",
    "includeSecurityChecklist",
    "includeStandards",
];

/// 단일 필드를 patch로 갱신하고 전체 레코드를 다시 저장한다.
pub struct SetConfigUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
}

impl<'a> SetConfigUseCase<'a> {
    /// 갱신된 레코드를 JSON으로 반환한다.
    pub fn execute(
        &self,
        root: &Path,
        scope: ConfigScope,
        key: &str,
        raw_value: &str,
    ) -> ConfigResult<Value> {
        match scope {
            ConfigScope::Global => {
                let patch = GlobalConfigPatch::from_key_value(key, raw_value)?;
                let next = patch.apply(&self.config_repo.read_global()?);
                self.config_repo.write_global(&next)?;
                info!(key, "updated global config");
                to_json(&next)
            }
            ConfigScope::Project => {
                let patch = ProjectConfigPatch::from_key_value(key, raw_value)?;
                let Some(existing) = self.config_repo.read_project(root)? else {
                    return Err(ConfigError::NotInitialized {
                        root: root.to_path_buf(),
                    });
                };
                let next = patch.apply(&existing);
                self.config_repo.write_project(root, &next)?;
                info!(key, root = %root.display(), "updated project config");
                to_json(&next)
            }
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> ConfigResult<Value> {
    serde_json::to_value(value).map_err(|err| ConfigError::validation("config", err.to_string()))
}
