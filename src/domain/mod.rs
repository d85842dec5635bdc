//! Domain layer
//! 모드/오류/버전 규칙을 외부 의존성 없이 표현한다.

pub mod error;
pub mod mode;
pub mod version;
