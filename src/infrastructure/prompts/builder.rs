//! CLAUDE.md(파생 문서) 렌더링/기록.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::application::config::{MergedConfig, is_valid_prompt_id};
use crate::domain::error::{ConfigError, ConfigResult};
use crate::domain::mode::format_mode;
use crate::infrastructure::config::{custom_prompt_path, derived_document_path};

use super::checklists::checklist_sections;
use super::modes::mode_prompt;
use super::standards::standard_section;

pub const GENERATED_NOTICE: &str =
    "<!-- Generated by vibe from .vibe/config.json. Manual edits are overwritten on regeneration. -->";

/// 커스텀 프롬프트 파일을 읽고 문서를 통째로 다시 쓴다.
pub fn build_document(config: &MergedConfig, root: &Path) -> ConfigResult<PathBuf> {
    let custom = load_custom_prompts(root, &config.custom_prompts)?;
    let document = render_document(config, &custom);

    let path = derived_document_path(root);
    fs::write(&path, document).map_err(|err| {
        ConfigError::io(format!("failed to write {}", path.display()), err)
    })?;
    info!(path = %path.display(), mode = %config.mode, "regenerated derived document");
    Ok(path)
}

/// 같은 설정이면 항상 같은 문자열을 만든다(시각 정보 없음).
pub fn render_document(config: &MergedConfig, custom_prompts: &[(String, String)]) -> String {
    let title = config.project_name.as_deref().unwrap_or("Project");

    let mut out = String::new();
    out.push_str(&format!("# {title}: AI Assistant Instructions\n\n"));
    out.push_str(GENERATED_NOTICE);
    out.push_str("\n\n");

    out.push_str(&format!("## Mode: {}\n\n", format_mode(config.mode)));
    out.push_str(mode_prompt(config.mode));
    out.push_str("\n\n");

    let sections = checklist_sections(config.include_security_checklist);
    if !sections.is_empty() {
        out.push_str("## Security Checklist\n\n");
        for section in sections {
            out.push_str(section);
            out.push_str("\n\n");
        }
    }

    for standard in &config.include_standards {
        out.push_str(standard_section(*standard));
        out.push_str("\n\n");
    }

    for (id, body) in custom_prompts {
        out.push_str(&format!("## Custom: {id}\n\n"));
        out.push_str(body.trim());
        out.push_str("\n\n");
    }

    let trimmed_len = out.trim_end().len();
    out.truncate(trimmed_len);
    out.push('\n');
    out
}

fn load_custom_prompts(root: &Path, ids: &[String]) -> ConfigResult<Vec<(String, String)>> {
    let mut prompts = Vec::with_capacity(ids.len());
    for id in ids {
        if !is_valid_prompt_id(id) {
            return Err(ConfigError::validation(
                "customPrompts",
                format!(
                    "'{id}' is not a prompt id; use the file name under .vibe/prompts without .md"
                ),
            ));
        }
        let path = custom_prompt_path(root, id);
        let body = match fs::read_to_string(&path) {
            Ok(body) => body,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(ConfigError::validation(
                    "customPrompts",
                    format!("prompt '{id}' not found at {}", path.display()),
                ));
            }
            Err(err) => {
                return Err(ConfigError::io(
                    format!("failed to read custom prompt {}", path.display()),
                    err,
                ));
            }
        };
        prompts.push((id.clone(), body));
    }
    Ok(prompts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::{GlobalConfig, ProjectConfig, merge_configs};
    use crate::domain::mode::{ChecklistType, Mode, StandardType};

    fn config(mode: Mode) -> MergedConfig {
        let project = ProjectConfig {
            mode: Some(mode),
            project_name: Some("shop".into()),
            ..ProjectConfig::default()
        };
        merge_configs(&GlobalConfig::default(), Some(&project))
    }

    #[test]
    fn document_contains_mode_checklist_and_standard() {
        let doc = render_document(&config(Mode::Learning), &[]);
        assert!(doc.starts_with("# shop: AI Assistant Instructions\n"));
        assert!(doc.contains("## Mode: 🎓 Learning"));
        assert!(doc.contains("### Before implementing"));
        assert!(doc.contains("## Standard: TypeScript"));
        assert!(!doc.contains("### OWASP Top 10 review"));
        assert!(doc.ends_with('\n') && !doc.ends_with("\n\n"));
    }

    #[test]
    fn none_checklist_omits_section_and_full_includes_all() {
        let mut cfg = config(Mode::Expert);
        cfg.include_security_checklist = ChecklistType::None;
        cfg.include_standards = vec![];
        let doc = render_document(&cfg, &[]);
        assert!(!doc.contains("## Security Checklist"));
        assert!(!doc.contains("## Standard:"));

        cfg.include_security_checklist = ChecklistType::Full;
        let doc = render_document(&cfg, &[]);
        for heading in [
            "### Before implementing",
            "### After implementing",
            "### OWASP Top 10 review",
            "### API security",
        ] {
            assert!(doc.contains(heading), "missing {heading}");
        }
    }

    #[test]
    fn standards_render_in_listed_order() {
        let mut cfg = config(Mode::Guided);
        cfg.include_standards = vec![StandardType::Api, StandardType::Typescript];
        let doc = render_document(&cfg, &[]);
        let api = doc.find("## Standard: API design").unwrap();
        let ts = doc.find("## Standard: TypeScript").unwrap();
        assert!(api < ts);
    }

    #[test]
    fn rendering_is_idempotent() {
        let cfg = config(Mode::Guided);
        let custom = vec![("db".to_string(), "Use migrations.\n".to_string())];
        assert_eq!(render_document(&cfg, &custom), render_document(&cfg, &custom));
    }

    #[test]
    fn build_reads_custom_prompts_and_overwrites_document() {
        let dir = tempfile::tempdir().unwrap();
        let prompts = dir.path().join(".vibe").join("prompts");
        fs::create_dir_all(&prompts).unwrap();
        fs::write(prompts.join("db.md"), "Always use migrations.").unwrap();
        fs::write(dir.path().join("CLAUDE.md"), "stale manual edits").unwrap();

        let mut cfg = config(Mode::Guided);
        cfg.custom_prompts = vec!["db".into()];
        let path = build_document(&cfg, dir.path()).unwrap();

        let doc = fs::read_to_string(path).unwrap();
        assert!(doc.contains("## Custom: db\n\nAlways use migrations."));
        assert!(!doc.contains("stale manual edits"));
    }

    #[test]
    fn missing_custom_prompt_fails_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = config(Mode::Guided);
        cfg.custom_prompts = vec!["ghost".into()];

        let err = build_document(&cfg, dir.path()).unwrap_err();
        assert!(err.to_string().contains("prompt 'ghost' not found"));
        assert!(!dir.path().join("CLAUDE.md").exists());
    }

    #[test]
    fn path_like_prompt_id_fails_at_build_time() {
        let dir = tempfile::tempdir().unwrap();
        let prompts = dir.path().join(".vibe").join("prompts");
        fs::create_dir_all(prompts.join("team")).unwrap();
        fs::write(prompts.join("team").join("db.md"), "nested").unwrap();
        fs::write(prompts.join("security.md"), "dotted").unwrap();

        for id in ["team/db", "security.md", "../secrets"] {
            let mut cfg = config(Mode::Guided);
            cfg.custom_prompts = vec![id.into()];
            let err = build_document(&cfg, dir.path()).unwrap_err();
            assert!(matches!(err, ConfigError::Validation { .. }), "{id}");
        }
        assert!(!dir.path().join("CLAUDE.md").exists());
    }
}
