//! 애플리케이션 유스케이스 모음.

pub mod config_values;
pub mod doctor;
pub mod edit_config;
pub mod init_project;
pub mod mode_status;
pub mod start_session;
pub mod switch_mode;

#[cfg(test)]
mod test_support;
