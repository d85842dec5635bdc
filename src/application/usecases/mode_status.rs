//! 현재 실효 모드 조회 유스케이스.

use std::path::Path;

use crate::application::ports::ConfigRepository;
use crate::domain::error::ConfigResult;
use crate::domain::mode::Mode;

/// 실효 모드가 어디에서 왔는지.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeSource {
    Project,
    GlobalDefault,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeStatus {
    pub current: Mode,
    pub source: ModeSource,
    pub initialized: bool,
}

pub struct ModeStatusUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
}

impl<'a> ModeStatusUseCase<'a> {
    pub fn execute(&self, root: &Path) -> ConfigResult<ModeStatus> {
        let global = self.config_repo.read_global()?;
        let project = self.config_repo.read_project(root)?;

        let (current, source) = match project.as_ref().and_then(|p| p.mode) {
            Some(mode) => (mode, ModeSource::Project),
            None => (global.default_mode, ModeSource::GlobalDefault),
        };

        Ok(ModeStatus {
            current,
            source,
            initialized: project.is_some(),
        })
    }
}
