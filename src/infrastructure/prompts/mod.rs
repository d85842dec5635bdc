//! 파생 문서(CLAUDE.md) 프롬프트 조립 모듈.
//! 모드 프롬프트, 보안 체크리스트, 코딩 표준, 프로젝트 커스텀 프롬프트를 순서대로 합친다.

mod builder;
mod checklists;
mod modes;
mod standards;

pub use builder::{GENERATED_NOTICE, build_document, render_document};
pub use modes::mode_prompt;
