//! vibe library root.
//! Clean Architecture 계층을 외부에 노출한다.

use std::path::Path;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use application::ports::ConfigRepository;
use infrastructure::adapters::JsonConfigRepository;

/// 프로젝트 설정 파일이 있으면 true.
pub fn is_project_initialized(root: &Path) -> bool {
    JsonConfigRepository::default().is_project_initialized(root)
}

/// 설정이 CLAUDE.md보다 새로우면 true.
pub fn needs_regeneration(root: &Path) -> bool {
    infrastructure::config::needs_regeneration(root)
}
