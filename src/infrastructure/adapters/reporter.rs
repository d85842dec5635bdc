//! 콘솔 리포터 포트 구현 어댑터.

use std::io::{self, IsTerminal};

use crossterm::style::Stylize;

use crate::application::ports::Reporter;

/// 콘솔 전용 리포터 어댑터. stdout이 TTY일 때만 색을 입힌다.
pub struct ConsoleReporter {
    colored: bool,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            colored: io::stdout().is_terminal(),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn section(&self, name: &str) {
        println!();
        if self.colored {
            println!("{}", format!("== {name} ==").bold());
        } else {
            println!("== {name} ==");
        }
    }

    fn kv(&self, key: &str, value: &str) {
        println!("{:<14}: {}", key, value);
    }

    fn status(&self, scope: &str, message: &str) {
        if self.colored {
            println!("[{}] {}", format!("{scope:<8}").green(), message);
        } else {
            println!("[{scope:<8}] {message}");
        }
    }

    fn warn(&self, message: &str) {
        if self.colored {
            eprintln!("{} {}", "warning:".yellow().bold(), message);
        } else {
            eprintln!("warning: {message}");
        }
    }

    fn raw(&self, line: &str) {
        println!("{}", line);
    }
}
