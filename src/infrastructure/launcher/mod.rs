//! 외부 AI 도구(Claude Code) 탐색/실행 모듈.

mod process;
mod program;

pub use process::{tool_version, run_tool};
pub use program::find_program;

/// 설정이 없을 때 PATH에서 찾는 실행 파일 이름.
pub const DEFAULT_PROGRAM: &str = "claude";
