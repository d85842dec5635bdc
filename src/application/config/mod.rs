//! 애플리케이션이 사용하는 설정 스키마(순수 데이터)와 병합 규칙.
//!
//! 주의: 파일/환경변수/프로세스 접근은 `infrastructure`에서만 수행한다.

mod patch;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::mode::{ChecklistType, Mode, StandardType};

pub use patch::{GLOBAL_KEYS, GlobalConfigPatch, PROJECT_KEYS, ProjectConfigPatch};

pub const DEFAULT_MODE: Mode = Mode::Guided;
pub const DEFAULT_CHECKLIST: ChecklistType = ChecklistType::Pre;
pub const DEFAULT_STANDARDS: [StandardType; 1] = [StandardType::Typescript];

fn default_mode() -> Mode {
    DEFAULT_MODE
}

fn default_checklist() -> ChecklistType {
    DEFAULT_CHECKLIST
}

fn default_standards() -> Vec<StandardType> {
    DEFAULT_STANDARDS.to_vec()
}

/// 사용자(머신) 단위 기본값. `~/.vibe/config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalConfig {
    /// 프로젝트에 모드가 없을 때 쓰는 기본 모드
    #[serde(default = "default_mode")]
    pub default_mode: Mode,
    /// `config edit`에 사용할 편집기
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
    /// Claude Code 실행 파일 경로(없으면 PATH 탐색)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claude_code_path: Option<String>,
    #[serde(default = "default_checklist")]
    pub include_security_checklist: ChecklistType,
    #[serde(default = "default_standards")]
    pub include_standards: Vec<StandardType>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            default_mode: DEFAULT_MODE,
            editor: None,
            claude_code_path: None,
            include_security_checklist: DEFAULT_CHECKLIST,
            include_standards: default_standards(),
        }
    }
}

/// 프로젝트 단위 덮어쓰기 값. `<root>/.vibe/config.json`. 모든 필드가 선택.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    /// `.vibe/prompts/<id>.md`를 가리키는 식별자 목록
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_prompts: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_security_checklist: Option<ChecklistType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_standards: Option<Vec<StandardType>>,
}

/// 병합이 끝난 실효 설정. 저장하지 않고 매번 다시 계산한다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedConfig {
    pub mode: Mode,
    pub editor: Option<String>,
    pub claude_code_path: Option<String>,
    pub project_name: Option<String>,
    pub template: Option<String>,
    pub custom_prompts: Vec<String>,
    pub include_security_checklist: ChecklistType,
    pub include_standards: Vec<StandardType>,
}

/// 전역 + 프로젝트 + 기본값을 필드 단위 우선순위(project > global > default)로 합친다.
/// 입력을 변경하지 않는 순수 함수.
pub fn merge_configs(global: &GlobalConfig, project: Option<&ProjectConfig>) -> MergedConfig {
    let project = project.cloned().unwrap_or_default();

    MergedConfig {
        mode: project.mode.unwrap_or(global.default_mode),
        editor: global.editor.clone(),
        claude_code_path: global.claude_code_path.clone(),
        project_name: project.project_name,
        template: project.template,
        custom_prompts: project.custom_prompts.unwrap_or_default(),
        include_security_checklist: project
            .include_security_checklist
            .unwrap_or(global.include_security_checklist),
        include_standards: dedupe_standards(
            project
                .include_standards
                .as_deref()
                .unwrap_or(&global.include_standards),
        ),
    }
}

/// `customPrompts` 식별자는 `.vibe/prompts/<id>.md` 경로가 되므로 영숫자, `-`, `_`만 허용한다.
pub fn is_valid_prompt_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// 처음 등장한 순서를 유지하며 중복을 제거한다.
fn dedupe_standards(standards: &[StandardType]) -> Vec<StandardType> {
    let mut seen = HashSet::new();
    standards
        .iter()
        .copied()
        .filter(|standard| seen.insert(*standard))
        .collect()
}
