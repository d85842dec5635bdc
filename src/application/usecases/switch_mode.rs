//! 모드 전환 + 파생 문서 재생성 유스케이스.
//!
//! 상태 흐름: idle → switching → committed, 또는 어느 단계든 실패 시 failed.
//! 성공한 쓰기를 되돌리지 않는다(보상 트랜잭션 없음).

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::application::config::ProjectConfigPatch;
use crate::application::ports::{ConfigRepository, DocumentBuilder};
use crate::domain::error::{ConfigError, ConfigResult};
use crate::domain::mode::Mode;

/// 전환 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeSwitch {
    pub previous_mode: Mode,
    pub new_mode: Mode,
    pub document_path: PathBuf,
}

impl ModeSwitch {
    pub fn changed(&self) -> bool {
        self.previous_mode != self.new_mode
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SwitchPhase {
    Idle,
    Switching,
    Committed,
    Failed,
}

impl fmt::Display for SwitchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Switching => "switching",
            Self::Committed => "committed",
            Self::Failed => "failed",
        })
    }
}

/// 프로젝트 설정의 `mode`만 바꾸고 CLAUDE.md를 다시 만든다.
pub struct SwitchModeUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub document_builder: &'a dyn DocumentBuilder,
}

impl<'a> SwitchModeUseCase<'a> {
    /// 이전 모드와 같아도 문서는 항상 재생성한다(커스텀 프롬프트 등이 바뀌었을 수 있음).
    pub fn execute(&self, root: &Path, new_mode: Mode) -> ConfigResult<ModeSwitch> {
        debug!(
            phase = %SwitchPhase::Idle,
            root = %root.display(),
            %new_mode,
            "mode switch requested"
        );

        let result = self.switch(root, new_mode);
        match &result {
            Ok(outcome) => debug!(
                phase = %SwitchPhase::Committed,
                previous = %outcome.previous_mode,
                new = %outcome.new_mode,
                "mode switch committed"
            ),
            Err(err) => warn!(phase = %SwitchPhase::Failed, error = %err, "mode switch failed"),
        }
        result
    }

    fn switch(&self, root: &Path, new_mode: Mode) -> ConfigResult<ModeSwitch> {
        if !self.config_repo.is_project_initialized(root) {
            return Err(ConfigError::NotInitialized {
                root: root.to_path_buf(),
            });
        }
        debug!(phase = %SwitchPhase::Switching, "reading current configuration");

        let previous_mode = self.config_repo.load(root)?.mode;

        let existing = self.config_repo.read_project(root)?.unwrap_or_default();
        let patch = ProjectConfigPatch {
            mode: Some(new_mode),
            ..ProjectConfigPatch::default()
        };
        self.config_repo
            .write_project(root, &patch.apply(&existing))?;

        let merged = self.config_repo.load(root)?;
        let document_path = self
            .document_builder
            .build(&merged, root)
            .map_err(|err| ConfigError::RegenerationFailed {
                mode: new_mode,
                message: err.to_string(),
            })?;

        Ok(ModeSwitch {
            previous_mode,
            new_mode,
            document_path,
        })
    }
}
