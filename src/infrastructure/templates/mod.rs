//! 내장 프로젝트 템플릿 복사(플레이스홀더 치환 포함).

mod catalog;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::application::ports::TemplateVars;
use crate::domain::error::{ConfigError, ConfigResult};

pub use catalog::{TEMPLATE_NAMES, TemplateFile, template_files, template_prompt_ids};

/// `{{projectName}}`, `{{mode}}`를 치환한다.
pub fn substitute(content: &str, vars: &TemplateVars) -> String {
    content
        .replace("{{projectName}}", &vars.project_name)
        .replace("{{mode}}", &vars.mode)
}

/// 템플릿 파일을 `root` 아래에 쓴다. 기존 파일은 `force`가 아니면 건너뛴다.
pub fn scaffold_template(
    name: &str,
    root: &Path,
    vars: &TemplateVars,
    force: bool,
) -> ConfigResult<Vec<PathBuf>> {
    let files = template_files(name).ok_or_else(|| {
        ConfigError::validation(
            "template",
            format!(
                "unknown template '{name}'. Available: {}",
                TEMPLATE_NAMES.join(", ")
            ),
        )
    })?;

    let mut written = Vec::new();
    for file in files {
        let target = root.join(substitute(file.path, vars));
        if target.exists() && !force {
            debug!(path = %target.display(), "template file exists; skipping");
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                ConfigError::io(format!("failed to create directory {}", parent.display()), err)
            })?;
        }
        fs::write(&target, substitute(file.content, vars)).map_err(|err| {
            ConfigError::io(format!("failed to write {}", target.display()), err)
        })?;
        written.push(target);
    }

    Ok(written)
}
