//! End-to-end tests for batch export from a document on disk

use std::fs;
use std::path::{Path, PathBuf};
use svgsplit::config::ExportConfig;
use svgsplit::core::export::{BatchExporter, CollisionPolicy, ExportConfiguration, ExportOutcome};
use svgsplit::document::{DirectoryPrompt, Document, FixedDirectory, Workspace};
use svgsplit::domain::SvgSplitError;
use svgsplit::shell::{Console, InteractionShell, ShellInputs, ShellOutcome};
use tempfile::TempDir;
use test_case::test_case;

const AVATAR: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="200" height="200" viewBox="0 0 200 200">
  <defs>
    <linearGradient id="shade"><stop offset="0" stop-color="#000"/></linearGradient>
  </defs>
  <g id="Background"><rect width="200" height="200" fill="#eee"/></g>
  <g id="Traits" transform="translate(10 20)">
    <g id="Hat_One" data-name="Hat One" style="display:none"><rect class="hat" width="50" height="10"/></g>
    <g id="Eyes"><circle class="eye" r="4" fill="url(#shade)"/></g>
  </g>
</svg>
"##;

/// Directory prompt that records how often it was asked
struct CountingPrompt {
    answer: Option<PathBuf>,
    asked: std::rc::Rc<std::cell::Cell<usize>>,
}

impl DirectoryPrompt for CountingPrompt {
    fn select_directory(&mut self, _title: &str) -> Option<PathBuf> {
        self.asked.set(self.asked.get() + 1);
        self.answer.clone()
    }
}

/// Console that answers nothing and records what is shown
#[derive(Default)]
struct SilentConsole {
    shown: Vec<String>,
}

impl Console for SilentConsole {
    fn prompt(&mut self, _label: &str) -> Option<String> {
        None
    }

    fn show(&mut self, message: &str) {
        self.shown.push(message.to_string());
    }
}

fn write_document(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("avatar.svg");
    fs::write(&path, contents).unwrap();
    path
}

fn exporter_for(workspace: &Workspace, out: &Path) -> BatchExporter {
    BatchExporter::new(
        workspace.active_document(),
        Box::new(FixedDirectory(out.to_path_buf())),
        ExportConfiguration::default(),
    )
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test_case("", &["Eyes.svg", "Hat-One.svg"] ; "without suffix")]
#[test_case("-v2", &["Eyes-v2.svg", "Hat-One-v2.svg"] ; "with suffix")]
fn test_export_collection_from_file(suffix: &str, expected: &[&str]) {
    let source_dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let workspace = Workspace::open(write_document(source_dir.path(), AVATAR)).unwrap();

    let outcome = exporter_for(&workspace, out.path()).run("Traits", suffix);

    let ExportOutcome::Completed(report) = outcome else {
        panic!("expected completion, got {outcome:?}");
    };
    assert_eq!(report.count(), 2);
    assert_eq!(report.success_message(), "Successfully saved 2 SVGs");
    assert_eq!(file_names(out.path()), expected);
}

#[test]
fn test_exported_file_holds_only_its_element() {
    let source_dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let workspace = Workspace::open(write_document(source_dir.path(), AVATAR)).unwrap();

    assert!(exporter_for(&workspace, out.path()).run("Traits", "").is_completed());

    let hat = fs::read_to_string(out.path().join("Hat-One.svg")).unwrap();
    assert!(hat.starts_with("<?xml"));
    assert!(hat.contains(r#"viewBox="0 0 200 200""#));
    assert!(hat.contains(r#"transform="translate(10 20)""#));
    assert!(hat.contains("class=\"hat\""));
    assert!(!hat.contains("class=\"eye\""));
    assert!(!hat.contains("fill=\"#eee\""));
    assert!(!hat.contains("display:none"));

    let eyes = fs::read_to_string(out.path().join("Eyes.svg")).unwrap();
    assert!(eyes.contains("linearGradient"));
    assert!(!eyes.contains("class=\"hat\""));
}

#[test]
fn test_unknown_collection_writes_nothing() {
    let source_dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let workspace = Workspace::open(write_document(source_dir.path(), AVATAR)).unwrap();
    let asked = std::rc::Rc::new(std::cell::Cell::new(0));
    let mut exporter = BatchExporter::new(
        workspace.active_document(),
        Box::new(CountingPrompt {
            answer: Some(out.path().to_path_buf()),
            asked: asked.clone(),
        }),
        ExportConfiguration::default(),
    );

    let outcome = exporter.run("Nope", "");

    assert!(matches!(
        outcome,
        ExportOutcome::Failed(SvgSplitError::CollectionNotFound(ref name)) if name == "Nope"
    ));
    assert_eq!(asked.get(), 0);
    assert!(file_names(out.path()).is_empty());
}

#[test]
fn test_cancelled_directory_is_silent() {
    let source_dir = TempDir::new().unwrap();
    let workspace = Workspace::open(write_document(source_dir.path(), AVATAR)).unwrap();
    let asked = std::rc::Rc::new(std::cell::Cell::new(0));
    let mut exporter = BatchExporter::new(
        workspace.active_document(),
        Box::new(CountingPrompt {
            answer: None,
            asked: asked.clone(),
        }),
        ExportConfiguration::default(),
    );
    let mut shell = InteractionShell::new(SilentConsole::default()).with_inputs(ShellInputs {
        collection: Some("Traits".to_string()),
        suffix: Some(String::new()),
        confirmed: true,
    });

    assert_eq!(shell.run(&mut exporter), ShellOutcome::Cancelled);
    assert_eq!(asked.get(), 1);
    assert!(shell.into_console().shown.is_empty());
    assert_eq!(file_names(source_dir.path()), vec!["avatar.svg"]);
}

#[test]
fn test_no_document_reports_error() {
    let out = TempDir::new().unwrap();
    let mut exporter = exporter_for(&Workspace::empty(), out.path());
    let mut shell = InteractionShell::new(SilentConsole::default()).with_inputs(ShellInputs {
        collection: Some("Traits".to_string()),
        suffix: Some(String::new()),
        confirmed: true,
    });

    assert_eq!(shell.run(&mut exporter), ShellOutcome::Failed(3));
    assert_eq!(shell.into_console().shown, vec!["There are no document open!"]);
    assert!(file_names(out.path()).is_empty());
}

#[test]
fn test_dotted_name_is_truncated_at_last_dot() {
    let source_dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let workspace = Workspace::open(write_document(
        source_dir.path(),
        r#"<svg xmlns="http://www.w3.org/2000/svg"><g id="Badges"><g data-name="v1.0 Badge"/></g></svg>"#,
    ))
    .unwrap();

    let outcome = exporter_for(&workspace, out.path()).run("Badges", "");

    assert_eq!(outcome.exported_count(), Some(1));
    assert_eq!(file_names(out.path()), vec!["v1.svg"]);
}

#[test]
fn test_rerun_overwrites_previous_files() {
    let source_dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let workspace = Workspace::open(write_document(source_dir.path(), AVATAR)).unwrap();
    fs::write(out.path().join("Eyes.svg"), "stale").unwrap();

    assert_eq!(
        exporter_for(&workspace, out.path()).run("Traits", "").exported_count(),
        Some(2)
    );
    assert_eq!(
        exporter_for(&workspace, out.path()).run("Traits", "").exported_count(),
        Some(2)
    );

    assert_eq!(file_names(out.path()), vec!["Eyes.svg", "Hat-One.svg"]);
    assert_ne!(fs::read_to_string(out.path().join("Eyes.svg")).unwrap(), "stale");
}

#[test]
fn test_hidden_members_stay_visible_after_export() {
    let source_dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let workspace = Workspace::open(write_document(source_dir.path(), AVATAR)).unwrap();
    let document = workspace.active_document().unwrap();
    let hat = document.borrow().find_collection("Traits").unwrap().members[0].clone();
    assert!(hat.hidden);

    assert!(exporter_for(&workspace, out.path()).run("Traits", "").is_completed());

    assert!(!document.borrow().is_hidden(&hat).unwrap());
}

#[test]
fn test_output_count_matches_distinct_names() {
    let source_dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let workspace = Workspace::open(write_document(
        source_dir.path(),
        r#"<svg xmlns="http://www.w3.org/2000/svg"><g id="Set"><g data-name="Hat One"/><g data-name="Hat  One"/><g id="Eyes"/><rect/></g></svg>"#,
    ))
    .unwrap();

    let outcome = exporter_for(&workspace, out.path()).run("Set", "");

    // three members, two distinct file names, the later duplicate wins
    assert_eq!(outcome.exported_count(), Some(3));
    assert_eq!(file_names(out.path()), vec!["Eyes.svg", "Hat-One.svg"]);
}

#[test]
fn test_auto_suffix_keeps_every_member() {
    let source_dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let workspace = Workspace::open(write_document(
        source_dir.path(),
        r#"<svg xmlns="http://www.w3.org/2000/svg"><g id="Set"><g data-name="Hat One"/><g data-name="Hat  One"/></g></svg>"#,
    ))
    .unwrap();
    let config = ExportConfig {
        collision_policy: CollisionPolicy::AutoSuffix,
        ..ExportConfig::default()
    };
    let mut exporter = BatchExporter::new(
        workspace.active_document(),
        Box::new(FixedDirectory(out.path().to_path_buf())),
        ExportConfiguration::from_config(&config),
    );

    assert_eq!(exporter.run("Set", "").exported_count(), Some(2));
    assert_eq!(file_names(out.path()), vec!["Hat-One-2.svg", "Hat-One.svg"]);
}

#[test]
fn test_missing_destination_is_access_denied() {
    let source_dir = TempDir::new().unwrap();
    let workspace = Workspace::open(write_document(source_dir.path(), AVATAR)).unwrap();
    let missing = source_dir.path().join("missing").join("deeper");

    let outcome = exporter_for(&workspace, &missing).run("Traits", "");

    assert!(matches!(
        outcome,
        ExportOutcome::Failed(SvgSplitError::AccessDenied { .. })
    ));
}

#[test]
fn test_linked_images_are_embedded_when_enabled() {
    let source_dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(source_dir.path().join("pixel.png"), [0x89, b'P', b'N', b'G']).unwrap();
    let workspace = Workspace::open(write_document(
        source_dir.path(),
        r#"<svg xmlns="http://www.w3.org/2000/svg"><g id="Set"><g id="Photo"><image href="pixel.png" width="1" height="1"/></g></g></svg>"#,
    ))
    .unwrap();
    let config = ExportConfig {
        embed_raster_images: true,
        ..ExportConfig::default()
    };
    let mut exporter = BatchExporter::new(
        workspace.active_document(),
        Box::new(FixedDirectory(out.path().to_path_buf())),
        ExportConfiguration::from_config(&config),
    );

    assert!(exporter.run("Set", "").is_completed());

    let photo = fs::read_to_string(out.path().join("Photo.svg")).unwrap();
    assert!(photo.contains("href=\"data:image/png;base64,iVBORw==\""));
}

#[test]
fn test_illustrator_entities_resolve_in_exported_files() {
    let source_dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let workspace = Workspace::open(write_document(
        source_dir.path(),
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd" [
	<!ENTITY ns_svg "http://www.w3.org/2000/svg">
	<!ENTITY ns_xlink "http://www.w3.org/1999/xlink">
]>
<svg version="1.1" xmlns="&ns_svg;" xmlns:xlink="&ns_xlink;" width="10" height="10">
  <g id="Set"><g id="A"><rect width="1" height="1"/></g></g>
</svg>"#,
    ))
    .unwrap();

    assert_eq!(
        exporter_for(&workspace, out.path()).run("Set", "").exported_count(),
        Some(1)
    );

    let exported = fs::read_to_string(out.path().join("A.svg")).unwrap();
    assert!(exported.contains(r#"xmlns="http://www.w3.org/2000/svg""#));
    assert!(exported.contains(r#"xmlns:xlink="http://www.w3.org/1999/xlink""#));
    assert!(!exported.contains("&ns_"));
}

#[test]
fn test_text_spacing_survives_export() {
    let source_dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let workspace = Workspace::open(write_document(
        source_dir.path(),
        r#"<svg xmlns="http://www.w3.org/2000/svg">
  <g id="Labels">
    <g id="Tight"><text><tspan>Hat</tspan><tspan>One</tspan></text></g>
    <g id="Spaced"><text><tspan>Big</tspan> <tspan>Hat</tspan></text></g>
  </g>
</svg>"#,
    ))
    .unwrap();

    assert!(exporter_for(&workspace, out.path()).run("Labels", "").is_completed());

    let tight = fs::read_to_string(out.path().join("Tight.svg")).unwrap();
    assert!(tight.contains("<text><tspan>Hat</tspan><tspan>One</tspan></text>"));
    let spaced = fs::read_to_string(out.path().join("Spaced.svg")).unwrap();
    assert!(spaced.contains("<text><tspan>Big</tspan> <tspan>Hat</tspan></text>"));
}
