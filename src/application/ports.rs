//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::path::{Path, PathBuf};

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::{GlobalConfig, MergedConfig, ProjectConfig, merge_configs};
use crate::domain::error::{ConfigResult, LaunchError};

/// 전역/프로젝트 설정 파일 읽기·쓰기를 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn global_config_path(&self) -> ConfigResult<PathBuf>;
    fn project_config_path(&self, root: &Path) -> PathBuf;
    /// 파일이 없으면 스키마 기본값을 돌려준다.
    fn read_global(&self) -> ConfigResult<GlobalConfig>;
    /// 파일이 없으면 `None`(미초기화)을 돌려준다.
    fn read_project(&self, root: &Path) -> ConfigResult<Option<ProjectConfig>>;
    fn write_global(&self, config: &GlobalConfig) -> ConfigResult<()>;
    fn write_project(&self, root: &Path, config: &ProjectConfig) -> ConfigResult<()>;
    fn global_config_exists(&self) -> ConfigResult<bool>;
    fn is_project_initialized(&self, root: &Path) -> bool;

    /// 현재 시점의 실효 설정을 매 호출마다 새로 계산한다.
    fn load(&self, root: &Path) -> ConfigResult<MergedConfig> {
        let global = self.read_global()?;
        let project = self.read_project(root)?;
        Ok(merge_configs(&global, project.as_ref()))
    }
}

/// 파생 문서(CLAUDE.md) 생성 포트.
pub trait DocumentBuilder: Send + Sync {
    /// 기존 문서를 완전히 덮어쓰고 작성된 경로를 반환한다.
    fn build(&self, config: &MergedConfig, root: &Path) -> ConfigResult<PathBuf>;
    /// 설정 파일이 문서보다 새로우면(또는 stat 실패 시) true.
    fn needs_regeneration(&self, root: &Path) -> bool;
}

/// 템플릿 변수.
#[derive(Debug, Clone)]
pub struct TemplateVars {
    pub project_name: String,
    pub mode: String,
}

/// 프로젝트 템플릿 복사 포트.
pub trait TemplateScaffolder: Send + Sync {
    fn available(&self) -> Vec<&'static str>;
    /// 템플릿이 `.vibe/prompts/`에 두는 커스텀 프롬프트 식별자.
    fn prompt_ids(&self, template: &str) -> Vec<String>;
    /// 생성한 파일 경로 목록을 반환한다. 기존 파일은 `force`일 때만 덮어쓴다.
    fn scaffold(
        &self,
        template: &str,
        root: &Path,
        vars: &TemplateVars,
        force: bool,
    ) -> ConfigResult<Vec<PathBuf>>;
}

/// 외부 도구 실행 요청.
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub program: String,
    pub cwd: PathBuf,
    pub env: Vec<(String, String)>,
    pub args: Vec<String>,
}

/// 외부 AI 도구(Claude Code) 실행 포트.
#[async_trait]
pub trait ToolLauncher: Send + Sync {
    /// 설정 경로 또는 PATH에서 실행 파일을 찾는다.
    fn resolve_program(&self, configured: Option<&str>) -> Result<String, LaunchError>;
    /// `--version` 출력에서 버전을 읽는다. 판별 불가 시 `None`.
    async fn version(&self, program: &str) -> Result<Option<String>>;
    /// 자식 프로세스를 실행하고 종료 코드를 반환한다.
    async fn launch(&self, options: &LaunchOptions) -> Result<i32>;
}

/// 사용자 확인 입력 포트.
pub trait UserConfirmer: Send + Sync {
    fn confirm(&self, message: &str) -> Result<bool>;
}

/// 콘솔/로그 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    fn section(&self, name: &str);
    fn kv(&self, key: &str, value: &str);
    fn status(&self, scope: &str, message: &str);
    fn warn(&self, message: &str);
    fn raw(&self, line: &str);
}
