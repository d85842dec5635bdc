//! 오류 분류와 종료 코드 정책.
//!
//! 설정 계층 아래의 I/O·파싱 오류는 모두 `ConfigError`로 변환되어 올라온다.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::mode::Mode;

pub type ConfigResult<T> = Result<T, ConfigError>;

/// 설정 저장소/병합/모드 전환에서 발생하는 단일 오류 타입.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 입력값 또는 저장된 데이터가 스키마를 위반함
    #[error("invalid {source_label}: {message}")]
    Validation {
        source_label: String,
        message: String,
    },

    /// 프로젝트 설정이 필요한 명령을 초기화 전에 실행함
    #[error("project is not initialized at {}; run `vibe init` first", root.display())]
    NotInitialized { root: PathBuf },

    #[error("project is already initialized at {}; use --force to overwrite", root.display())]
    AlreadyInitialized { root: PathBuf },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot determine home directory; set VIBE_HOME")]
    HomeDirUnavailable,

    /// 모드는 저장됐지만 파생 문서 재생성이 실패함
    #[error("mode switched to '{mode}' but CLAUDE.md is stale: {message}")]
    RegenerationFailed { mode: Mode, message: String },
}

impl ConfigError {
    pub fn validation(source_label: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            source_label: source_label.into(),
            message: message.into(),
        }
    }

    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// 외부 도구 실행 실패 분류.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("'{program}' not found; install it or set claudeCodePath with `vibe config set claudeCodePath <path> --global`")]
    NotFound { program: String },

    #[error("permission denied while launching '{program}'")]
    PermissionDenied { program: String },

    #[error("failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// 프로세스 종료 코드 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidArgument = 2,
    ConfigError = 3,
    NotFound = 4,
    PermissionDenied = 5,
}

impl ExitCode {
    pub fn code(self) -> i32 {
        self as i32
    }

    /// anyhow 오류 체인을 훑어 가장 구체적인 종료 코드를 고른다.
    pub fn from_error(err: &anyhow::Error) -> Self {
        for cause in err.chain() {
            if cause.downcast_ref::<ConfigError>().is_some() {
                return Self::ConfigError;
            }
            if let Some(launch) = cause.downcast_ref::<LaunchError>() {
                return match launch {
                    LaunchError::NotFound { .. } => Self::NotFound,
                    LaunchError::PermissionDenied { .. } => Self::PermissionDenied,
                    LaunchError::Spawn { .. } => Self::GeneralError,
                };
            }
        }
        Self::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn config_errors_map_to_config_exit_code_through_context() {
        let err: anyhow::Result<()> = Err(ConfigError::NotInitialized {
            root: PathBuf::from("/tmp/p"),
        })
        .context("failed to start session");
        assert_eq!(ExitCode::from_error(&err.unwrap_err()), ExitCode::ConfigError);
    }

    #[test]
    fn launch_errors_map_to_their_codes() {
        let not_found = anyhow::Error::new(LaunchError::NotFound {
            program: "claude".into(),
        });
        assert_eq!(ExitCode::from_error(&not_found).code(), 4);

        let denied = anyhow::Error::new(LaunchError::PermissionDenied {
            program: "claude".into(),
        });
        assert_eq!(ExitCode::from_error(&denied).code(), 5);
    }

    #[test]
    fn unknown_errors_are_general() {
        let err = anyhow::anyhow!("boom");
        assert_eq!(ExitCode::from_error(&err), ExitCode::GeneralError);
    }

    #[test]
    fn not_initialized_message_guides_user() {
        let err = ConfigError::NotInitialized {
            root: PathBuf::from("/work/app"),
        };
        assert_eq!(
            err.to_string(),
            "project is not initialized at /work/app; run `vibe init` first"
        );
    }
}
