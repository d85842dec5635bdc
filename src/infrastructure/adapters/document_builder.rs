//! 파생 문서 생성 포트 구현 어댑터.

use std::path::{Path, PathBuf};

use crate::application::config::MergedConfig;
use crate::application::ports::DocumentBuilder;
use crate::domain::error::ConfigResult;
use crate::infrastructure::{config, prompts};

/// CLAUDE.md를 Markdown으로 조립하는 어댑터.
pub struct MarkdownDocumentBuilder;

impl DocumentBuilder for MarkdownDocumentBuilder {
    fn build(&self, cfg: &MergedConfig, root: &Path) -> ConfigResult<PathBuf> {
        prompts::build_document(cfg, root)
    }

    fn needs_regeneration(&self, root: &Path) -> bool {
        config::needs_regeneration(root)
    }
}
