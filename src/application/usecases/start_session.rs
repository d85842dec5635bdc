//! 설정을 확인하고 CLAUDE.md를 최신화한 뒤 Claude Code를 실행하는 유스케이스.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::application::ports::{
    ConfigRepository, DocumentBuilder, LaunchOptions, Reporter, ToolLauncher,
};
use crate::domain::error::ConfigError;
use crate::domain::mode::{Mode, format_mode};

use super::switch_mode::SwitchModeUseCase;

/// 자식 프로세스에 전달되는 현재 모드.
pub const MODE_ENV: &str = "VIBE_MODE";
/// 자식 프로세스에 전달되는 프로젝트 루트.
pub const ROOT_ENV: &str = "VIBE_PROJECT_ROOT";

#[derive(Debug, Clone)]
pub struct StartOptions {
    pub root: PathBuf,
    pub mode: Option<Mode>,
    pub regenerate: bool,
    pub args: Vec<String>,
}

pub struct StartSessionUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub document_builder: &'a dyn DocumentBuilder,
    pub launcher: &'a dyn ToolLauncher,
    pub reporter: &'a dyn Reporter,
}

impl<'a> StartSessionUseCase<'a> {
    /// 자식 프로세스의 종료 코드를 반환한다.
    pub async fn execute(&self, options: StartOptions) -> Result<i32> {
        let root = options.root.as_path();
        if !self.config_repo.is_project_initialized(root) {
            return Err(ConfigError::NotInitialized {
                root: root.to_path_buf(),
            }
            .into());
        }

        // 전환은 문서를 항상 다시 만들므로 이후 staleness 판정이 필요 없다.
        let mut fresh = false;
        if let Some(mode) = options.mode {
            let switched = SwitchModeUseCase {
                config_repo: self.config_repo,
                document_builder: self.document_builder,
            }
            .execute(root, mode)?;
            if switched.changed() {
                self.reporter.status(
                    "mode",
                    &format!(
                        "{} → {}",
                        format_mode(switched.previous_mode),
                        format_mode(switched.new_mode)
                    ),
                );
            }
            fresh = true;
        }

        let config = self.config_repo.load(root)?;

        if !fresh {
            let stale = self.document_builder.needs_regeneration(root);
            debug!(regenerate = options.regenerate, stale, "regeneration decision");
            if options.regenerate || stale {
                let path = self.document_builder.build(&config, root)?;
                self.reporter
                    .status("prompt", &format!("regenerated {}", path.display()));
            }
        }

        let program = self
            .launcher
            .resolve_program(config.claude_code_path.as_deref())?;

        self.reporter
            .status("start", &format!("{} in {}", format_mode(config.mode), root.display()));
        info!(%program, mode = %config.mode, "launching assistant");

        let launch = LaunchOptions {
            program: program.clone(),
            cwd: root.to_path_buf(),
            env: vec![
                (MODE_ENV.to_string(), config.mode.code().to_string()),
                (ROOT_ENV.to_string(), root.display().to_string()),
            ],
            args: options.args,
        };
        let code = self
            .launcher
            .launch(&launch)
            .await
            .with_context(|| format!("failed to run {program}"))?;

        debug!(code, "assistant exited");
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::application::config::ProjectConfig;
    use crate::application::usecases::test_support::{
        FakeLauncher, MemoryConfigRepository, RecordingDocumentBuilder, SilentReporter,
    };
    use crate::domain::error::{ExitCode, LaunchError};

    fn options(mode: Option<Mode>, regenerate: bool) -> StartOptions {
        StartOptions {
            root: PathBuf::from("/p"),
            mode,
            regenerate,
            args: vec!["--resume".into()],
        }
    }

    fn initialized(mode: Mode) -> MemoryConfigRepository {
        MemoryConfigRepository::with_project(
            Path::new("/p"),
            ProjectConfig {
                mode: Some(mode),
                ..ProjectConfig::default()
            },
        )
    }

    #[tokio::test]
    async fn requires_initialized_project() {
        let repo = MemoryConfigRepository::default();
        let builder = RecordingDocumentBuilder::default();
        let launcher = FakeLauncher::installed(0);
        let reporter = SilentReporter::default();
        let usecase = StartSessionUseCase {
            config_repo: &repo,
            document_builder: &builder,
            launcher: &launcher,
            reporter: &reporter,
        };

        let err = usecase.execute(options(None, false)).await.unwrap_err();
        assert_eq!(ExitCode::from_error(&err), ExitCode::ConfigError);
        assert!(launcher.launches.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn fresh_document_is_not_rebuilt_and_env_carries_mode() {
        let repo = initialized(Mode::Learning);
        let builder = RecordingDocumentBuilder::default();
        let launcher = FakeLauncher::installed(7);
        let reporter = SilentReporter::default();
        let usecase = StartSessionUseCase {
            config_repo: &repo,
            document_builder: &builder,
            launcher: &launcher,
            reporter: &reporter,
        };

        let code = usecase.execute(options(None, false)).await.unwrap();
        assert_eq!(code, 7);
        assert_eq!(builder.build_count(), 0);

        let launches = launcher.launches.lock().unwrap();
        assert_eq!(launches[0].program, "claude");
        assert_eq!(launches[0].cwd, PathBuf::from("/p"));
        assert_eq!(launches[0].args, vec!["--resume".to_string()]);
        assert!(
            launches[0]
                .env
                .contains(&(MODE_ENV.to_string(), "learning".to_string()))
        );
    }

    #[tokio::test]
    async fn stale_or_forced_document_is_rebuilt_once() {
        let repo = initialized(Mode::Guided);
        let stale = RecordingDocumentBuilder {
            stale: true,
            ..RecordingDocumentBuilder::default()
        };
        let launcher = FakeLauncher::installed(0);
        let reporter = SilentReporter::default();
        StartSessionUseCase {
            config_repo: &repo,
            document_builder: &stale,
            launcher: &launcher,
            reporter: &reporter,
        }
        .execute(options(None, false))
        .await
        .unwrap();
        assert_eq!(stale.build_count(), 1);
        assert!(
            reporter
                .lines
                .lock()
                .unwrap()
                .iter()
                .any(|line| line.contains("regenerated /p/CLAUDE.md"))
        );

        let fresh = RecordingDocumentBuilder::default();
        StartSessionUseCase {
            config_repo: &repo,
            document_builder: &fresh,
            launcher: &launcher,
            reporter: &reporter,
        }
        .execute(options(None, true))
        .await
        .unwrap();
        assert_eq!(fresh.build_count(), 1);
    }

    #[tokio::test]
    async fn mode_flag_switches_before_launch() {
        let repo = initialized(Mode::Guided);
        let builder = RecordingDocumentBuilder {
            stale: true,
            ..RecordingDocumentBuilder::default()
        };
        let launcher = FakeLauncher::installed(0);
        let reporter = SilentReporter::default();
        let usecase = StartSessionUseCase {
            config_repo: &repo,
            document_builder: &builder,
            launcher: &launcher,
            reporter: &reporter,
        };

        usecase
            .execute(options(Some(Mode::Expert), false))
            .await
            .unwrap();

        assert_eq!(builder.build_count(), 1);
        assert_eq!(repo.project(Path::new("/p")).unwrap().mode, Some(Mode::Expert));
        assert!(
            launcher.launches.lock().unwrap()[0]
                .env
                .contains(&(MODE_ENV.to_string(), "expert".to_string()))
        );
    }

    #[tokio::test]
    async fn missing_binary_maps_to_not_found() {
        let repo = initialized(Mode::Guided);
        let builder = RecordingDocumentBuilder::default();
        let launcher = FakeLauncher::missing();
        let reporter = SilentReporter::default();
        let usecase = StartSessionUseCase {
            config_repo: &repo,
            document_builder: &builder,
            launcher: &launcher,
            reporter: &reporter,
        };

        let err = usecase.execute(options(None, false)).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LaunchError>(),
            Some(LaunchError::NotFound { .. })
        ));
        assert_eq!(ExitCode::from_error(&err), ExitCode::NotFound);
    }
}
