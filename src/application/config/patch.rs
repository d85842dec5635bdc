//! 부분 필드 갱신(patch) 타입.
//!
//! 저장은 항상 전체 레코드 단위로 하고, 갱신 의미는 지정한 필드만 바꾸는 것으로 유지한다.

use crate::domain::error::{ConfigError, ConfigResult};
use crate::domain::mode::{ChecklistType, Mode, StandardType, parse_mode};

use super::{GlobalConfig, ProjectConfig, is_valid_prompt_id};

pub const PROJECT_KEYS: [&str; 6] = [
    "mode",
    "projectName",
    "template",
    "customPrompts",
    "includeSecurityChecklist",
    "includeStandards",
];

pub const GLOBAL_KEYS: [&str; 5] = [
    "defaultMode",
    "editor",
    "claudeCodePath",
    "includeSecurityChecklist",
    "includeStandards",
];

/// 프로젝트 설정에 적용할 필드 갱신 목록. `None`은 "변경 없음".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectConfigPatch {
    pub mode: Option<Mode>,
    pub project_name: Option<String>,
    pub template: Option<String>,
    pub custom_prompts: Option<Vec<String>>,
    pub include_security_checklist: Option<ChecklistType>,
    pub include_standards: Option<Vec<StandardType>>,
}

/// 전역 설정에 적용할 필드 갱신 목록. `None`은 "변경 없음".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalConfigPatch {
    pub default_mode: Option<Mode>,
    pub editor: Option<String>,
    pub claude_code_path: Option<String>,
    pub include_security_checklist: Option<ChecklistType>,
    pub include_standards: Option<Vec<StandardType>>,
}

impl ProjectConfigPatch {
    /// `config set <key> <value>` 입력을 patch로 변환한다.
    pub fn from_key_value(key: &str, raw: &str) -> ConfigResult<Self> {
        let mut patch = Self::default();
        match key {
            "mode" => patch.mode = Some(parse_mode(raw)?),
            "projectName" => patch.project_name = Some(non_blank(key, raw)?),
            "template" => patch.template = Some(non_blank(key, raw)?),
            "customPrompts" => patch.custom_prompts = Some(parse_prompt_ids(raw)?),
            "includeSecurityChecklist" => {
                patch.include_security_checklist = Some(ChecklistType::parse(raw)?)
            }
            "includeStandards" => patch.include_standards = Some(parse_standards(raw)?),
            _ => return Err(unknown_key(key, &PROJECT_KEYS)),
        }
        Ok(patch)
    }

    /// 이전 레코드를 바탕으로 새 레코드를 만든다. 지정하지 않은 필드는 그대로 유지된다.
    pub fn apply(&self, prior: &ProjectConfig) -> ProjectConfig {
        let mut next = prior.clone();
        if self.mode.is_some() {
            next.mode = self.mode;
        }
        if self.project_name.is_some() {
            next.project_name = self.project_name.clone();
        }
        if self.template.is_some() {
            next.template = self.template.clone();
        }
        if self.custom_prompts.is_some() {
            next.custom_prompts = self.custom_prompts.clone();
        }
        if self.include_security_checklist.is_some() {
            next.include_security_checklist = self.include_security_checklist;
        }
        if self.include_standards.is_some() {
            next.include_standards = self.include_standards.clone();
        }
        next
    }
}

impl GlobalConfigPatch {
    /// `config set --global <key> <value>` 입력을 patch로 변환한다.
    pub fn from_key_value(key: &str, raw: &str) -> ConfigResult<Self> {
        let mut patch = Self::default();
        match key {
            "defaultMode" => patch.default_mode = Some(parse_mode(raw)?),
            "editor" => patch.editor = Some(non_blank(key, raw)?),
            "claudeCodePath" => patch.claude_code_path = Some(non_blank(key, raw)?),
            "includeSecurityChecklist" => {
                patch.include_security_checklist = Some(ChecklistType::parse(raw)?)
            }
            "includeStandards" => patch.include_standards = Some(parse_standards(raw)?),
            _ => return Err(unknown_key(key, &GLOBAL_KEYS)),
        }
        Ok(patch)
    }

    pub fn apply(&self, prior: &GlobalConfig) -> GlobalConfig {
        let mut next = prior.clone();
        if let Some(mode) = self.default_mode {
            next.default_mode = mode;
        }
        if self.editor.is_some() {
            next.editor = self.editor.clone();
        }
        if self.claude_code_path.is_some() {
            next.claude_code_path = self.claude_code_path.clone();
        }
        if let Some(checklist) = self.include_security_checklist {
            next.include_security_checklist = checklist;
        }
        if let Some(standards) = &self.include_standards {
            next.include_standards = standards.clone();
        }
        next
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn non_blank(key: &str, raw: &str) -> ConfigResult<String> {
    if raw.trim().is_empty() {
        return Err(ConfigError::validation(key, "must not be empty"));
    }
    Ok(raw.to_string())
}

fn parse_prompt_ids(raw: &str) -> ConfigResult<Vec<String>> {
    let ids = split_list(raw);
    if let Some(bad) = ids.iter().find(|id| !is_valid_prompt_id(id)) {
        return Err(ConfigError::validation(
            "customPrompts",
            format!("'{bad}' must use only letters, digits, '-' or '_' (file name without .md)"),
        ));
    }
    Ok(ids)
}

fn parse_standards(raw: &str) -> ConfigResult<Vec<StandardType>> {
    split_list(raw)
        .iter()
        .map(|s| StandardType::parse(s))
        .collect()
}

fn unknown_key(key: &str, valid: &[&str]) -> ConfigError {
    ConfigError::validation(
        "config key",
        format!("unknown key '{key}'. Valid keys: {}", valid.join(", ")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_patch_preserves_other_project_fields() {
        let prior = ProjectConfig {
            mode: Some(Mode::Learning),
            project_name: Some("foo".into()),
            custom_prompts: Some(vec!["x".into()]),
            ..ProjectConfig::default()
        };
        let patch = ProjectConfigPatch {
            mode: Some(Mode::Guided),
            ..ProjectConfigPatch::default()
        };

        let next = patch.apply(&prior);
        assert_eq!(
            next,
            ProjectConfig {
                mode: Some(Mode::Guided),
                project_name: Some("foo".into()),
                custom_prompts: Some(vec!["x".into()]),
                ..ProjectConfig::default()
            }
        );
        assert_eq!(prior.mode, Some(Mode::Learning));
    }

    #[test]
    fn list_values_are_comma_separated() {
        let patch = ProjectConfigPatch::from_key_value("customPrompts", "db, auth,,").unwrap();
        assert_eq!(
            patch.custom_prompts,
            Some(vec!["db".to_string(), "auth".to_string()])
        );

        let patch =
            GlobalConfigPatch::from_key_value("includeStandards", "api,typescript").unwrap();
        assert_eq!(
            patch.include_standards,
            Some(vec![StandardType::Api, StandardType::Typescript])
        );
    }

    #[test]
    fn enum_values_are_validated() {
        assert!(ProjectConfigPatch::from_key_value("mode", "Expert").is_err());
        assert!(ProjectConfigPatch::from_key_value("includeSecurityChecklist", "all").is_err());
        assert!(GlobalConfigPatch::from_key_value("includeStandards", "typescript,go").is_err());
    }

    #[test]
    fn cli_input_rejects_blank_strings_and_path_like_prompt_ids() {
        assert!(ProjectConfigPatch::from_key_value("projectName", "  ").is_err());
        assert!(GlobalConfigPatch::from_key_value("editor", "").is_err());
        assert!(ProjectConfigPatch::from_key_value("customPrompts", "db,security.md").is_err());
        assert!(ProjectConfigPatch::from_key_value("customPrompts", "team/db").is_err());
        assert!(ProjectConfigPatch::from_key_value("customPrompts", "db,auth_2").is_ok());
    }

    #[test]
    fn scope_specific_keys_are_rejected_elsewhere() {
        let err = ProjectConfigPatch::from_key_value("editor", "vim").unwrap_err();
        assert!(err.to_string().contains("unknown key 'editor'"));
        assert!(GlobalConfigPatch::from_key_value("projectName", "x").is_err());
    }

    #[test]
    fn global_patch_applies_only_named_fields() {
        let prior = GlobalConfig {
            editor: Some("vim".into()),
            ..GlobalConfig::default()
        };
        let next = GlobalConfigPatch::from_key_value("defaultMode", "expert")
            .unwrap()
            .apply(&prior);
        assert_eq!(next.default_mode, Mode::Expert);
        assert_eq!(next.editor.as_deref(), Some("vim"));
        assert_eq!(next.include_standards, prior.include_standards);
    }
}
