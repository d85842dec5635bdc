//! 외부 도구 실행 포트 구현 어댑터.

use anyhow::Result;
use async_trait::async_trait;

use crate::application::ports::{LaunchOptions, ToolLauncher};
use crate::domain::error::LaunchError;
use crate::infrastructure::launcher;

/// tokio 프로세스로 Claude Code를 띄우는 어댑터.
pub struct ProcessToolLauncher;

#[async_trait]
impl ToolLauncher for ProcessToolLauncher {
    fn resolve_program(&self, configured: Option<&str>) -> Result<String, LaunchError> {
        let program = configured
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(launcher::DEFAULT_PROGRAM);

        launcher::find_program(program)
            .map(|path| path.display().to_string())
            .ok_or_else(|| LaunchError::NotFound {
                program: program.to_string(),
            })
    }

    async fn version(&self, program: &str) -> Result<Option<String>> {
        launcher::tool_version(program).await
    }

    async fn launch(&self, options: &LaunchOptions) -> Result<i32> {
        launcher::run_tool(options).await
    }
}
