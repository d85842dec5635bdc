//! 설정 저장소 포트 구현 어댑터.

use std::path::{Path, PathBuf};

use crate::application::config::{GlobalConfig, ProjectConfig};
use crate::application::ports::ConfigRepository;
use crate::domain::error::{ConfigError, ConfigResult};
use crate::infrastructure::config;

/// JSON 파일 기반 설정 저장소 어댑터.
/// 홈 경로를 지정하지 않으면 `VIBE_HOME` 또는 OS 홈을 매 호출마다 해석한다.
#[derive(Debug, Clone, Default)]
pub struct JsonConfigRepository {
    home: Option<PathBuf>,
}

impl JsonConfigRepository {
    /// 전역 설정 위치를 고정한다(테스트/라이브러리 호출용).
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
        }
    }

    fn home(&self) -> ConfigResult<PathBuf> {
        match &self.home {
            Some(home) => Ok(home.clone()),
            None => config::resolve_home(),
        }
    }
}

impl ConfigRepository for JsonConfigRepository {
    fn global_config_path(&self) -> ConfigResult<PathBuf> {
        Ok(config::global_config_path_in(&self.home()?))
    }

    fn project_config_path(&self, root: &Path) -> PathBuf {
        config::project_config_path(root)
    }

    fn read_global(&self) -> ConfigResult<GlobalConfig> {
        config::read_global_config(&self.global_config_path()?)
    }

    fn read_project(&self, root: &Path) -> ConfigResult<Option<ProjectConfig>> {
        config::read_project_config(&self.project_config_path(root))
    }

    fn write_global(&self, cfg: &GlobalConfig) -> ConfigResult<()> {
        config::write_global_config(&self.global_config_path()?, cfg)
    }

    fn write_project(&self, root: &Path, cfg: &ProjectConfig) -> ConfigResult<()> {
        config::write_project_config(&self.project_config_path(root), cfg)
    }

    fn global_config_exists(&self) -> ConfigResult<bool> {
        let path = self.global_config_path()?;
        path.try_exists().map_err(|err| {
            ConfigError::io(format!("failed to stat {}", path.display()), err)
        })
    }

    fn is_project_initialized(&self, root: &Path) -> bool {
        self.project_config_path(root).exists()
    }
}
