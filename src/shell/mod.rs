//! Interaction shell
//!
//! Collects the collection name and suffix, runs the export and reports the
//! result. This is the only place where export errors become user messages.

pub mod console;

pub use console::{Console, StdConsole};

use crate::core::export::{BatchExporter, ExportOutcome};

/// Window title shown when the shell starts
pub const SHELL_TITLE: &str = "Export Groups as SVGs";

const GROUP_LABEL: &str = "Group Name:";
const SUFFIX_LABEL: &str = "Add suffix (optional):";
const ACTION_LABEL: &str = "[E]xport / [c]ancel:";

/// Values supplied up front instead of being prompted for
#[derive(Debug, Clone, Default)]
pub struct ShellInputs {
    /// Collection name
    pub collection: Option<String>,
    /// File name suffix
    pub suffix: Option<String>,
    /// Skip the export/cancel choice
    pub confirmed: bool,
}

/// How the shell session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellOutcome {
    /// Export completed with this many files
    Exported(usize),
    /// Directory selection was cancelled
    Cancelled,
    /// The user chose cancel (or input ended) before exporting
    Dismissed,
    /// Export failed; carries the process exit code
    Failed(i32),
}

impl ShellOutcome {
    /// Process exit code for this outcome
    pub fn exit_code(&self) -> i32 {
        match self {
            ShellOutcome::Failed(code) => *code,
            _ => 0,
        }
    }
}

/// Two text fields and two actions around a [`BatchExporter`]
pub struct InteractionShell<C: Console> {
    console: C,
    inputs: ShellInputs,
}

impl<C: Console> InteractionShell<C> {
    /// Create a shell that prompts for everything
    pub fn new(console: C) -> Self {
        Self {
            console,
            inputs: ShellInputs::default(),
        }
    }

    /// Preset some or all inputs
    pub fn with_inputs(mut self, inputs: ShellInputs) -> Self {
        self.inputs = inputs;
        self
    }

    /// Run one session
    pub fn run(&mut self, exporter: &mut BatchExporter) -> ShellOutcome {
        tracing::debug!(title = SHELL_TITLE, "Shell opened");

        let Some(collection) = self.field(GROUP_LABEL, self.inputs.collection.clone()) else {
            return ShellOutcome::Dismissed;
        };
        let Some(suffix) = self.field(SUFFIX_LABEL, self.inputs.suffix.clone()) else {
            return ShellOutcome::Dismissed;
        };

        if !self.inputs.confirmed && !self.confirm_export() {
            tracing::info!("Export dismissed");
            return ShellOutcome::Dismissed;
        }

        match exporter.run(&collection, &suffix) {
            ExportOutcome::Completed(report) => {
                self.console.show(&report.success_message());
                ShellOutcome::Exported(report.count())
            }
            ExportOutcome::Cancelled => ShellOutcome::Cancelled,
            ExportOutcome::Failed(e) => {
                self.console.show(&e.to_string());
                ShellOutcome::Failed(e.exit_code())
            }
        }
    }

    /// Consume the shell and return its console
    pub fn into_console(self) -> C {
        self.console
    }

    fn field(&mut self, label: &str, preset: Option<String>) -> Option<String> {
        preset.or_else(|| self.console.prompt(label))
    }

    fn confirm_export(&mut self) -> bool {
        match self.console.prompt(ACTION_LABEL) {
            Some(answer) => !matches!(
                answer.trim().to_lowercase().as_str(),
                "c" | "cancel" | "n" | "no"
            ),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::export::ExportConfiguration;
    use crate::document::{DocumentHandle, FixedDirectory, SvgDocument};
    use std::collections::VecDeque;
    use tempfile::TempDir;

    #[derive(Default)]
    struct ScriptedConsole {
        answers: VecDeque<String>,
        labels: Vec<String>,
        messages: Vec<String>,
    }

    impl ScriptedConsole {
        fn with_answers(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(|a| a.to_string()).collect(),
                ..Self::default()
            }
        }
    }

    impl Console for ScriptedConsole {
        fn prompt(&mut self, label: &str) -> Option<String> {
            self.labels.push(label.to_string());
            self.answers.pop_front()
        }

        fn show(&mut self, message: &str) {
            self.messages.push(message.to_string());
        }
    }

    fn exporter(dir: &TempDir) -> BatchExporter {
        let document = SvgDocument::parse(
            r#"<svg><g id="Traits"><g data-name="Hat One"/><g id="Eyes"/></g></svg>"#,
        )
        .unwrap();
        BatchExporter::new(
            Some(DocumentHandle::new(document)),
            Box::new(FixedDirectory(dir.path().to_path_buf())),
            ExportConfiguration::default(),
        )
    }

    #[test]
    fn test_prompts_then_exports() {
        let dir = TempDir::new().unwrap();
        let mut shell = InteractionShell::new(ScriptedConsole::with_answers(&["Traits", "", "e"]));

        let outcome = shell.run(&mut exporter(&dir));
        assert_eq!(outcome, ShellOutcome::Exported(2));

        let console = shell.into_console();
        assert_eq!(console.labels, vec![GROUP_LABEL, SUFFIX_LABEL, ACTION_LABEL]);
        assert_eq!(console.messages, vec!["Successfully saved 2 SVGs"]);
    }

    #[test]
    fn test_empty_action_answer_exports() {
        let dir = TempDir::new().unwrap();
        let mut shell = InteractionShell::new(ScriptedConsole::with_answers(&["Traits", "-v2", ""]));

        assert_eq!(shell.run(&mut exporter(&dir)), ShellOutcome::Exported(2));
        assert!(dir.path().join("Hat-One-v2.svg").exists());
    }

    #[test]
    fn test_cancel_action_dismisses() {
        let dir = TempDir::new().unwrap();
        let mut shell = InteractionShell::new(ScriptedConsole::with_answers(&["Traits", "", "c"]));

        assert_eq!(shell.run(&mut exporter(&dir)), ShellOutcome::Dismissed);
        assert!(shell.into_console().messages.is_empty());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_end_of_input_dismisses() {
        let dir = TempDir::new().unwrap();
        let mut shell = InteractionShell::new(ScriptedConsole::with_answers(&["Traits"]));

        assert_eq!(shell.run(&mut exporter(&dir)), ShellOutcome::Dismissed);
    }

    #[test]
    fn test_failure_is_reported() {
        let dir = TempDir::new().unwrap();
        let mut shell = InteractionShell::new(ScriptedConsole::default()).with_inputs(ShellInputs {
            collection: Some("Nope".to_string()),
            suffix: Some(String::new()),
            confirmed: true,
        });

        let outcome = shell.run(&mut exporter(&dir));
        assert_eq!(outcome, ShellOutcome::Failed(3));
        assert_eq!(outcome.exit_code(), 3);

        let console = shell.into_console();
        assert!(console.labels.is_empty());
        assert_eq!(
            console.messages,
            vec!["No group named 'Nope' in the active document"]
        );
    }

    #[test]
    fn test_presets_skip_prompts() {
        let dir = TempDir::new().unwrap();
        let mut shell = InteractionShell::new(ScriptedConsole::with_answers(&["-v2"])).with_inputs(
            ShellInputs {
                collection: Some("Traits".to_string()),
                suffix: None,
                confirmed: true,
            },
        );

        assert_eq!(shell.run(&mut exporter(&dir)), ShellOutcome::Exported(2));
        assert_eq!(shell.into_console().labels, vec![SUFFIX_LABEL]);
        assert!(dir.path().join("Eyes-v2.svg").exists());
    }
}
