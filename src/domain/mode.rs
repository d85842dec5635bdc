//! 모드/체크리스트/표준 태그 값 객체와 모드 레지스트리.
//!
//! 세 열거형 모두 닫힌 집합이다. 파싱 경계에서 정확히 일치하는 값만 허용한다.

use std::fmt;

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use crate::domain::error::{ConfigError, ConfigResult};

/// 파생 문서에 어떤 프롬프트를 조립할지 결정하는 동작 프리셋.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Learning,
    Guided,
    Expert,
}

/// 모드 표시용 메타데이터.
#[derive(Debug, Clone, Copy)]
pub struct ModeInfo {
    pub mode: Mode,
    pub icon: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
}

static MODE_REGISTRY: [ModeInfo; 3] = [
    ModeInfo {
        mode: Mode::Learning,
        icon: "🎓",
        display_name: "Learning",
        description: "Explains every step and the security reasoning behind it",
    },
    ModeInfo {
        mode: Mode::Guided,
        icon: "🧭",
        display_name: "Guided",
        description: "Balanced pace with checkpoints before risky changes",
    },
    ModeInfo {
        mode: Mode::Expert,
        icon: "⚡",
        display_name: "Expert",
        description: "Terse, fast execution with minimal explanation",
    },
];

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Learning, Mode::Guided, Mode::Expert];

    /// 설정 파일/CLI에 쓰이는 식별자.
    pub fn code(self) -> &'static str {
        match self {
            Self::Learning => "learning",
            Self::Guided => "guided",
            Self::Expert => "expert",
        }
    }

    pub fn info(self) -> &'static ModeInfo {
        match self {
            Self::Learning => &MODE_REGISTRY[0],
            Self::Guided => &MODE_REGISTRY[1],
            Self::Expert => &MODE_REGISTRY[2],
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// 모드 문자열을 검증한다. 대소문자 변환/trim/별칭은 허용하지 않는다.
pub fn parse_mode(raw: &str) -> ConfigResult<Mode> {
    Mode::ALL
        .into_iter()
        .find(|mode| mode.code() == raw)
        .ok_or_else(|| {
            ConfigError::validation(
                "mode",
                format!("invalid mode '{raw}'. Valid modes: {}", valid_codes(&Mode::ALL)),
            )
        })
}

/// clap `value_parser`용 래퍼. 실패 시 clap이 exit 2로 종료한다.
pub fn parse_mode_arg(raw: &str) -> Result<Mode, String> {
    parse_mode(raw).map_err(|err| err.to_string())
}

/// 아이콘 + 표시 이름.
pub fn format_mode(mode: Mode) -> String {
    let info = mode.info();
    format!("{} {}", info.icon, info.display_name)
}

/// 모든 모드를 설명과 함께 나열한다. 현재 모드가 주어지면 표시한다.
pub fn format_all_modes(current: Option<Mode>) -> String {
    let labels: Vec<String> = Mode::ALL.iter().map(|m| format_mode(*m)).collect();
    let width = labels.iter().map(|l| l.width()).max().unwrap_or(0);

    let mut out = String::new();
    for (mode, label) in Mode::ALL.iter().zip(&labels) {
        let marker = if Some(*mode) == current { "→" } else { " " };
        let pad = " ".repeat(width - label.width());
        out.push_str(&format!(
            "{marker} {label}{pad}  ({})  {}",
            mode.code(),
            mode.info().description
        ));
        if Some(*mode) == current {
            out.push_str("  [current]");
        }
        out.push('\n');
    }
    out
}

/// 모드 추천 입력 힌트.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuggestContext {
    pub is_new_to_security: bool,
    pub needs_review: bool,
    pub wants_speed: bool,
}

/// 힌트를 우선순위(보안 입문 > 리뷰 필요 > 속도) 순으로 평가한다.
pub fn suggest_mode(context: SuggestContext) -> Mode {
    if context.is_new_to_security {
        Mode::Learning
    } else if context.needs_review {
        Mode::Guided
    } else if context.wants_speed {
        Mode::Expert
    } else {
        Mode::Guided
    }
}

/// 파생 문서에 포함할 보안 체크리스트 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecklistType {
    Pre,
    Post,
    Owasp,
    Api,
    Full,
    None,
}

impl ChecklistType {
    pub const ALL: [ChecklistType; 6] = [
        ChecklistType::Pre,
        ChecklistType::Post,
        ChecklistType::Owasp,
        ChecklistType::Api,
        ChecklistType::Full,
        ChecklistType::None,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Self::Pre => "pre",
            Self::Post => "post",
            Self::Owasp => "owasp",
            Self::Api => "api",
            Self::Full => "full",
            Self::None => "none",
        }
    }

    pub fn parse(raw: &str) -> ConfigResult<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.code() == raw)
            .ok_or_else(|| {
                ConfigError::validation(
                    "includeSecurityChecklist",
                    format!(
                        "invalid checklist '{raw}'. Valid values: {}",
                        valid_codes(&Self::ALL)
                    ),
                )
            })
    }
}

impl fmt::Display for ChecklistType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// 파생 문서에 포함할 코딩 표준.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StandardType {
    Typescript,
    Api,
}

impl StandardType {
    pub const ALL: [StandardType; 2] = [StandardType::Typescript, StandardType::Api];

    pub fn code(self) -> &'static str {
        match self {
            Self::Typescript => "typescript",
            Self::Api => "api",
        }
    }

    pub fn parse(raw: &str) -> ConfigResult<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.code() == raw)
            .ok_or_else(|| {
                ConfigError::validation(
                    "includeStandards",
                    format!(
                        "invalid standard '{raw}'. Valid values: {}",
                        valid_codes(&Self::ALL)
                    ),
                )
            })
    }
}

impl fmt::Display for StandardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

fn valid_codes<T: fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
