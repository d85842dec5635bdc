//! 애플리케이션 조립(composition root) 모듈.

use std::path::PathBuf;

use crate::application::ports::UserConfirmer;
use crate::application::usecases::config_values::{GetConfigUseCase, SetConfigUseCase};
use crate::application::usecases::doctor::DoctorUseCase;
use crate::application::usecases::edit_config::EditConfigUseCase;
use crate::application::usecases::init_project::InitProjectUseCase;
use crate::application::usecases::mode_status::ModeStatusUseCase;
use crate::application::usecases::start_session::StartSessionUseCase;
use crate::application::usecases::switch_mode::SwitchModeUseCase;
use crate::infrastructure::adapters::{
    BuiltinTemplateScaffolder, ConsoleReporter, JsonConfigRepository, MarkdownDocumentBuilder,
    ProcessToolLauncher, StdinConfirmer,
};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: JsonConfigRepository,
    document_builder: MarkdownDocumentBuilder,
    scaffolder: BuiltinTemplateScaffolder,
    launcher: ProcessToolLauncher,
    reporter: ConsoleReporter,
    confirmer: Box<dyn UserConfirmer>,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self::with_confirmer(JsonConfigRepository::default(), Box::new(StdinConfirmer))
    }
}

impl AppComposition {
    /// 전역 설정 위치를 고정한 조합(라이브러리 호출/테스트용).
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self::with_confirmer(JsonConfigRepository::with_home(home), Box::new(StdinConfirmer))
    }

    /// 확인 어댑터를 외부에서 주입한다.
    pub fn with_confirmer(
        config_repo: JsonConfigRepository,
        confirmer: Box<dyn UserConfirmer>,
    ) -> Self {
        Self {
            config_repo,
            document_builder: MarkdownDocumentBuilder,
            scaffolder: BuiltinTemplateScaffolder,
            launcher: ProcessToolLauncher,
            reporter: ConsoleReporter::new(),
            confirmer,
        }
    }

    pub fn reporter(&self) -> &ConsoleReporter {
        &self.reporter
    }

    pub fn init_usecase(&self) -> InitProjectUseCase<'_> {
        InitProjectUseCase {
            config_repo: &self.config_repo,
            document_builder: &self.document_builder,
            scaffolder: &self.scaffolder,
            confirmer: self.confirmer.as_ref(),
        }
    }

    pub fn mode_status_usecase(&self) -> ModeStatusUseCase<'_> {
        ModeStatusUseCase {
            config_repo: &self.config_repo,
        }
    }

    /// 모드 전환(+CLAUDE.md 재생성) 유스케이스를 생성한다.
    pub fn switch_mode_usecase(&self) -> SwitchModeUseCase<'_> {
        SwitchModeUseCase {
            config_repo: &self.config_repo,
            document_builder: &self.document_builder,
        }
    }

    pub fn get_config_usecase(&self) -> GetConfigUseCase<'_> {
        GetConfigUseCase {
            config_repo: &self.config_repo,
        }
    }

    pub fn set_config_usecase(&self) -> SetConfigUseCase<'_> {
        SetConfigUseCase {
            config_repo: &self.config_repo,
        }
    }

    /// 설정 편집 유스케이스를 생성한다.
    pub fn edit_config_usecase(&self) -> EditConfigUseCase<'_> {
        EditConfigUseCase {
            config_repo: &self.config_repo,
        }
    }

    /// Claude Code 실행 유스케이스를 생성한다.
    pub fn start_usecase(&self) -> StartSessionUseCase<'_> {
        StartSessionUseCase {
            config_repo: &self.config_repo,
            document_builder: &self.document_builder,
            launcher: &self.launcher,
            reporter: &self.reporter,
        }
    }

    pub fn doctor_usecase(&self) -> DoctorUseCase<'_> {
        DoctorUseCase {
            config_repo: &self.config_repo,
            document_builder: &self.document_builder,
            launcher: &self.launcher,
        }
    }
}
