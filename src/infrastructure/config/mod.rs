//! 사용자 설정(JSON) 저장소 모듈.
//! 전역(`~/.vibe`)과 프로젝트(`<root>/.vibe`) 두 파일을 다루고, 파생 문서의 최신 여부를 판정한다.

mod paths;
mod staleness;
mod store;

pub use paths::{
    CONFIG_FILE, DOCUMENT_FILE, HOME_ENV, PROMPTS_DIR, SETTINGS_DIR, custom_prompt_path,
    derived_document_path, global_config_path_in, project_config_path, resolve_home,
};
pub use staleness::is_stale;
pub use store::{
    read_global_config, read_project_config, write_global_config, write_project_config,
};

use std::path::Path;

/// 프로젝트 설정이 CLAUDE.md보다 새로우면(또는 어느 쪽이든 stat 불가) true.
pub fn needs_regeneration(root: &Path) -> bool {
    is_stale(&project_config_path(root), &derived_document_path(root))
}
