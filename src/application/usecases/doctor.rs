//! 설치/설정 상태 진단 유스케이스. 진단 자체는 설정 오류로 실패하지 않는다.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::application::ports::{ConfigRepository, DocumentBuilder, ToolLauncher};
use crate::domain::error::LaunchError;
use crate::domain::mode::Mode;
use crate::domain::version::{MIN_CLAUDE_VERSION, is_compatible};

/// 설정 파일 하나의 상태.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FileState {
    Missing,
    Valid,
    Invalid { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ToolState {
    NotFound { program: String },
    Found {
        path: String,
        version: Option<String>,
        /// 버전을 해석할 수 없으면 `None`.
        compatible: Option<bool>,
    },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorReport {
    pub global_config_path: Option<PathBuf>,
    pub global_config: FileState,
    pub project_config_path: PathBuf,
    pub project_config: FileState,
    pub mode: Option<Mode>,
    pub document_stale: Option<bool>,
    pub tool: ToolState,
    pub minimum_version: &'static str,
}

impl DoctorReport {
    /// 사용자에게 알릴 문제 목록.
    pub fn problems(&self) -> Vec<String> {
        let mut out = Vec::new();
        if let FileState::Invalid { message } = &self.global_config {
            out.push(format!("global config: {message}"));
        }
        if let FileState::Invalid { message } = &self.project_config {
            out.push(format!("project config: {message}"));
        }
        if self.project_config == FileState::Missing {
            out.push("project is not initialized; run `vibe init`".to_string());
        }
        if self.document_stale == Some(true) {
            out.push("CLAUDE.md is stale; it will be regenerated on `vibe start`".to_string());
        }
        match &self.tool {
            ToolState::NotFound { program } => {
                out.push(format!("'{program}' was not found on PATH"));
            }
            ToolState::Found {
                compatible: Some(false),
                version,
                ..
            } => out.push(format!(
                "Claude Code {} is older than the supported minimum {}",
                version.as_deref().unwrap_or("?"),
                self.minimum_version
            )),
            ToolState::Found {
                compatible: None, ..
            } => out.push("could not determine the Claude Code version".to_string()),
            ToolState::Found { .. } => {}
        }
        out
    }
}

pub struct DoctorUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub document_builder: &'a dyn DocumentBuilder,
    pub launcher: &'a dyn ToolLauncher,
}

impl<'a> DoctorUseCase<'a> {
    pub async fn execute(&self, root: &Path) -> DoctorReport {
        let global_config_path = self.config_repo.global_config_path().ok();

        let (global_config, global) = match self.config_repo.global_config_exists() {
            Ok(false) => (FileState::Missing, self.config_repo.read_global().ok()),
            Ok(true) => match self.config_repo.read_global() {
                Ok(cfg) => (FileState::Valid, Some(cfg)),
                Err(err) => (invalid(err), None),
            },
            Err(err) => (invalid(err), None),
        };

        let project_config_path = self.config_repo.project_config_path(root);
        let initialized = self.config_repo.is_project_initialized(root);
        let (project_config, project) = if !initialized {
            (FileState::Missing, None)
        } else {
            match self.config_repo.read_project(root) {
                Ok(cfg) => (FileState::Valid, cfg),
                Err(err) => (invalid(err), None),
            }
        };

        let mode = match (&global, &project) {
            (Some(global), _) => Some(
                project
                    .as_ref()
                    .and_then(|p| p.mode)
                    .unwrap_or(global.default_mode),
            ),
            (None, Some(project)) => project.mode,
            (None, None) => None,
        };

        let document_stale = initialized.then(|| self.document_builder.needs_regeneration(root));

        let configured = global.as_ref().and_then(|g| g.claude_code_path.clone());
        let tool = match self.launcher.resolve_program(configured.as_deref()) {
            Ok(path) => {
                let version = self.launcher.version(&path).await.ok().flatten();
                let compatible = version
                    .as_deref()
                    .and_then(|v| is_compatible(v, MIN_CLAUDE_VERSION));
                ToolState::Found {
                    path,
                    version,
                    compatible,
                }
            }
            Err(err) => ToolState::NotFound {
                program: match err {
                    LaunchError::NotFound { program }
                    | LaunchError::PermissionDenied { program }
                    | LaunchError::Spawn { program, .. } => program,
                },
            },
        };

        DoctorReport {
            global_config_path,
            global_config,
            project_config_path,
            project_config,
            mode,
            document_stale,
            tool,
            minimum_version: MIN_CLAUDE_VERSION,
        }
    }
}

fn invalid(err: impl ToString) -> FileState {
    FileState::Invalid {
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::ProjectConfig;
    use crate::application::usecases::test_support::{
        FakeLauncher, MemoryConfigRepository, RecordingDocumentBuilder,
    };

    #[tokio::test]
    async fn uninitialized_project_is_reported_not_failed() {
        let repo = MemoryConfigRepository::default();
        let builder = RecordingDocumentBuilder::default();
        let launcher = FakeLauncher::missing();
        let report = DoctorUseCase {
            config_repo: &repo,
            document_builder: &builder,
            launcher: &launcher,
        }
        .execute(Path::new("/p"))
        .await;

        assert_eq!(report.global_config, FileState::Missing);
        assert_eq!(report.project_config, FileState::Missing);
        assert_eq!(report.mode, Some(Mode::Guided));
        assert_eq!(report.document_stale, None);
        assert!(matches!(report.tool, ToolState::NotFound { .. }));
        assert_eq!(report.problems().len(), 2);
    }

    #[tokio::test]
    async fn healthy_setup_has_no_problems() {
        let repo = MemoryConfigRepository::with_project(
            Path::new("/p"),
            ProjectConfig {
                mode: Some(Mode::Expert),
                ..ProjectConfig::default()
            },
        );
        let builder = RecordingDocumentBuilder::default();
        let launcher = FakeLauncher::installed(0);
        let report = DoctorUseCase {
            config_repo: &repo,
            document_builder: &builder,
            launcher: &launcher,
        }
        .execute(Path::new("/p"))
        .await;

        assert_eq!(report.mode, Some(Mode::Expert));
        assert_eq!(report.document_stale, Some(false));
        assert_eq!(
            report.tool,
            ToolState::Found {
                path: "claude".into(),
                version: Some("1.2.0".into()),
                compatible: Some(true),
            }
        );
        assert!(report.problems().is_empty());
    }
}
