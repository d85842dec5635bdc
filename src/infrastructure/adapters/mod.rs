//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod config_repository;
mod document_builder;
mod reporter;
mod template_scaffolder;
mod tool_launcher;
mod user_confirmer;

pub use config_repository::JsonConfigRepository;
pub use document_builder::MarkdownDocumentBuilder;
pub use reporter::ConsoleReporter;
pub use template_scaffolder::BuiltinTemplateScaffolder;
pub use tool_launcher::ProcessToolLauncher;
pub use user_confirmer::StdinConfirmer;
