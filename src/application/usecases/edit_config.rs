//! 설정 파일 편집 대상(경로/편집기)을 결정하는 유스케이스.

use std::path::{Path, PathBuf};

use crate::application::ports::ConfigRepository;
use crate::domain::error::{ConfigError, ConfigResult};

use super::config_values::ConfigScope;

/// 편집할 파일과 설정된 편집기.
#[derive(Debug, Clone)]
pub struct EditTarget {
    pub path: PathBuf,
    /// 전역 설정의 `editor`. 없으면 호출자가 `$EDITOR`로 대체한다.
    pub editor: Option<String>,
}

pub struct EditConfigUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
}

impl<'a> EditConfigUseCase<'a> {
    /// 설정 파일 경로만 반환한다(파일을 만들지 않음).
    pub fn path(&self, root: &Path, scope: ConfigScope) -> ConfigResult<PathBuf> {
        match scope {
            ConfigScope::Global => self.config_repo.global_config_path(),
            ConfigScope::Project => Ok(self.config_repo.project_config_path(root)),
        }
    }

    /// 편집 대상을 준비한다. 전역 파일이 없으면 기본값으로 만든다.
    pub fn execute(&self, root: &Path, scope: ConfigScope) -> ConfigResult<EditTarget> {
        let global = self.config_repo.read_global()?;

        let path = match scope {
            ConfigScope::Global => {
                if !self.config_repo.global_config_exists()? {
                    self.config_repo.write_global(&global)?;
                }
                self.config_repo.global_config_path()?
            }
            ConfigScope::Project => {
                if !self.config_repo.is_project_initialized(root) {
                    return Err(ConfigError::NotInitialized {
                        root: root.to_path_buf(),
                    });
                }
                self.config_repo.project_config_path(root)
            }
        };

        Ok(EditTarget {
            path,
            editor: global.editor,
        })
    }
}
