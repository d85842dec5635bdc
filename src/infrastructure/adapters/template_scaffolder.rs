//! 템플릿 복사 포트 구현 어댑터.

use std::path::{Path, PathBuf};

use crate::application::ports::{TemplateScaffolder, TemplateVars};
use crate::domain::error::ConfigResult;
use crate::infrastructure::templates;

/// 바이너리에 내장된 템플릿을 사용하는 어댑터.
pub struct BuiltinTemplateScaffolder;

impl TemplateScaffolder for BuiltinTemplateScaffolder {
    fn available(&self) -> Vec<&'static str> {
        templates::TEMPLATE_NAMES.to_vec()
    }

    fn prompt_ids(&self, template: &str) -> Vec<String> {
        templates::template_prompt_ids(template)
    }

    fn scaffold(
        &self,
        template: &str,
        root: &Path,
        vars: &TemplateVars,
        force: bool,
    ) -> ConfigResult<Vec<PathBuf>> {
        templates::scaffold_template(template, root, vars, force)
    }
}
