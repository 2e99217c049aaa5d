//! Line-oriented console used by the interaction shell

use crate::document::DirectoryPrompt;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Text input and message output
pub trait Console {
    /// Show `label` and read one answer. `None` on end of input.
    fn prompt(&mut self, label: &str) -> Option<String>;

    /// Show a message to the user
    fn show(&mut self, message: &str);
}

/// Console over stdin/stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct StdConsole;

impl Console for StdConsole {
    fn prompt(&mut self, label: &str) -> Option<String> {
        print!("{label} ");
        if let Err(e) = io::stdout().flush() {
            tracing::warn!(error = %e, "Failed to flush stdout");
        }

        let mut input = String::new();
        match io::stdin().lock().read_line(&mut input) {
            Ok(0) => None,
            Ok(_) => Some(strip_line_ending(input)),
            Err(e) => {
                tracing::error!(error = %e, "Failed to read from stdin");
                None
            }
        }
    }

    fn show(&mut self, message: &str) {
        println!("{message}");
    }
}

impl DirectoryPrompt for StdConsole {
    /// Re-asks until an existing directory is entered. An empty answer cancels.
    fn select_directory(&mut self, title: &str) -> Option<PathBuf> {
        loop {
            let answer = self.prompt(title)?;
            let answer = answer.trim();
            if answer.is_empty() {
                return None;
            }

            let path = PathBuf::from(answer);
            if path.is_dir() {
                return Some(path);
            }
            self.show(&format!("Not a folder: {}", path.display()));
        }
    }
}

/// Remove the trailing newline without touching other whitespace
fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
