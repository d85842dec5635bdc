//! 설정/파생 문서 경로 규칙. I/O 없이 경로만 계산한다.

use std::env;
use std::path::{Path, PathBuf};

use crate::domain::error::{ConfigError, ConfigResult};

pub const SETTINGS_DIR: &str = ".vibe";
pub const CONFIG_FILE: &str = "config.json";
pub const PROMPTS_DIR: &str = "prompts";
pub const DOCUMENT_FILE: &str = "CLAUDE.md";

/// 전역 설정 디렉터리 기준이 되는 홈 경로를 바꾸는 환경변수.
pub const HOME_ENV: &str = "VIBE_HOME";

/// `<home>/.vibe/config.json`
pub fn global_config_path_in(home: &Path) -> PathBuf {
    home.join(SETTINGS_DIR).join(CONFIG_FILE)
}

/// `<root>/.vibe/config.json`
pub fn project_config_path(root: &Path) -> PathBuf {
    root.join(SETTINGS_DIR).join(CONFIG_FILE)
}

/// `<root>/CLAUDE.md`
pub fn derived_document_path(root: &Path) -> PathBuf {
    root.join(DOCUMENT_FILE)
}

/// `<root>/.vibe/prompts/<id>.md`
pub fn custom_prompt_path(root: &Path, id: &str) -> PathBuf {
    root.join(SETTINGS_DIR)
        .join(PROMPTS_DIR)
        .join(format!("{id}.md"))
}

/// `VIBE_HOME`이 있으면 우선, 없으면 OS 홈 디렉터리.
pub fn resolve_home() -> ConfigResult<PathBuf> {
    if let Ok(home) = env::var(HOME_ENV)
        && !home.trim().is_empty()
    {
        return Ok(PathBuf::from(home));
    }
    dirs::home_dir().ok_or(ConfigError::HomeDirUnavailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_live_under_settings_dir() {
        let root = Path::new("/work/app");
        assert_eq!(
            project_config_path(root),
            PathBuf::from("/work/app/.vibe/config.json")
        );
        assert_eq!(
            global_config_path_in(Path::new("/home/dev")),
            PathBuf::from("/home/dev/.vibe/config.json")
        );
        assert_eq!(derived_document_path(root), PathBuf::from("/work/app/CLAUDE.md"));
        assert_eq!(
            custom_prompt_path(root, "db"),
            PathBuf::from("/work/app/.vibe/prompts/db.md")
        );
    }
}
