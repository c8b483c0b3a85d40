use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

use specprune_ops::{
    BatchProcessor, Classifier, Disposition, FileError, FileOp, FileReader, MemoryConsole, Remover,
};

/// Serves content from memory; paths without an entry fail to read.
#[derive(Default)]
struct MemReader {
    files: HashMap<PathBuf, String>,
    reads: RefCell<Vec<PathBuf>>,
}

impl MemReader {
    fn with(files: &[(&str, &str)]) -> Self {
        Self {
            files: files
                .iter()
                .map(|(p, c)| (PathBuf::from(p), c.to_string()))
                .collect(),
            reads: RefCell::default(),
        }
    }
}

impl FileReader for MemReader {
    fn read(&self, path: &Path) -> Result<String, FileError> {
        self.reads.borrow_mut().push(path.to_path_buf());
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| FileError::read(path, io::Error::from_raw_os_error(2)))
    }
}

/// Records removals; listed paths fail, optionally without diagnostic fields.
#[derive(Default)]
struct MemRemover {
    failing: HashSet<PathBuf>,
    bare_errors: bool,
    removed: RefCell<Vec<PathBuf>>,
}

impl MemRemover {
    fn failing(paths: &[&str], bare_errors: bool) -> Self {
        Self {
            failing: paths.iter().map(PathBuf::from).collect(),
            bare_errors,
            removed: RefCell::default(),
        }
    }
}

impl Remover for MemRemover {
    fn remove(&self, path: &Path) -> Result<(), FileError> {
        if self.failing.contains(path) {
            return Err(if self.bare_errors {
                FileError::new(FileOp::Remove, None, io::Error::other("denied"))
            } else {
                FileError::remove(path, io::Error::from_raw_os_error(13))
            });
        }
        self.removed.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}

fn paths(items: &[&str]) -> Vec<PathBuf> {
    items.iter().map(PathBuf::from).collect()
}

#[test]
fn test_process_one_removes_when_not_dry_run() {
    let reader = MemReader::with(&[("path 1", "describe('x')")]);
    let remover = MemRemover::default();
    let processor = BatchProcessor::new(&reader, &remover, Classifier::default());
    let mut console = MemoryConsole::new();

    let disposition = processor
        .process_one(Path::new("path 1"), false, &mut console)
        .unwrap();

    assert_eq!(disposition, Disposition::Removed);
    assert_eq!(*reader.reads.borrow(), paths(&["path 1"]));
    assert_eq!(*remover.removed.borrow(), paths(&["path 1"]));
    assert_eq!(console.out, vec!["~ REMOVED path 1".to_string()]);
}

#[test]
fn test_process_one_dry_run_never_removes() {
    let reader = MemReader::with(&[("path 1", "describe('x')")]);
    let remover = MemRemover::default();
    let processor = BatchProcessor::new(&reader, &remover, Classifier::default());
    let mut console = MemoryConsole::new();

    let disposition = processor
        .process_one(Path::new("path 1"), true, &mut console)
        .unwrap();

    assert_eq!(disposition, Disposition::Removed);
    assert!(remover.removed.borrow().is_empty());
    assert_eq!(console.out, vec!["~ REMOVED path 1".to_string()]);
}

#[test]
fn test_process_one_skips_ineligible() {
    let reader = MemReader::with(&[("path 1", "describe describe")]);
    let remover = MemRemover::default();
    let processor = BatchProcessor::new(&reader, &remover, Classifier::default());
    let mut console = MemoryConsole::new();

    let disposition = processor
        .process_one(Path::new("path 1"), false, &mut console)
        .unwrap();

    assert_eq!(disposition, Disposition::Skipped);
    assert!(remover.removed.borrow().is_empty());
    assert_eq!(console.out, vec!["~ SKIPPED path 1".to_string()]);
}

#[test]
fn test_process_one_propagates_remove_failure() {
    let reader = MemReader::with(&[("path 1", "describe")]);
    let remover = MemRemover::failing(&["path 1"], false);
    let processor = BatchProcessor::new(&reader, &remover, Classifier::default());
    let mut console = MemoryConsole::new();

    let err = processor
        .process_one(Path::new("path 1"), false, &mut console)
        .unwrap_err();

    assert_eq!(err.op, FileOp::Remove);
    assert!(console.out.is_empty());
}

#[test]
fn test_unreadable_path_is_skipped_with_read_error() {
    let reader = MemReader::with(&[]);
    let remover = MemRemover::default();
    let processor = BatchProcessor::new(&reader, &remover, Classifier::default());
    let mut console = MemoryConsole::new();

    let outcome = processor.process_all(&paths(&["missing"]), false, &mut console);

    assert_eq!(outcome.skipped, paths(&["missing"]));
    assert_eq!(outcome.error_count(), 0);
    assert_eq!(console.err, vec!["! READ ERROR -2: - missing".to_string()]);
}

#[test]
fn test_process_all_preserves_order_and_logs_skipped() {
    let reader = MemReader::with(&[
        ("path 1", ""),
        ("path 2", "x"),
        ("path 3", "describe describe"),
    ]);
    let remover = MemRemover::default();
    let processor = BatchProcessor::new(&reader, &remover, Classifier::default());
    let mut console = MemoryConsole::new();

    let outcome =
        processor.process_all(&paths(&["path 1", "path 2", "path 3"]), true, &mut console);

    assert_eq!(*reader.reads.borrow(), paths(&["path 1", "path 2", "path 3"]));
    assert_eq!(outcome.skipped, paths(&["path 1", "path 2", "path 3"]));
    assert_eq!(
        console.out,
        vec![
            "~ SKIPPED path 1",
            "~ SKIPPED path 2",
            "~ SKIPPED path 3",
            "\n~ DELETED: 0\n~ ERROR: 0\n~ SKIPPED: 3",
            "\n",
            "~ SKIPPED: path 1",
            "~ SKIPPED: path 2",
            "~ SKIPPED: path 3",
        ]
    );
}

#[test]
fn test_process_all_continues_after_errors() {
    let reader = MemReader::with(&[
        ("path 1", "describe"),
        ("path 2", "describe"),
        ("path 3", "describe"),
    ]);
    let remover = MemRemover::failing(&["path 1", "path 2"], false);
    let processor = BatchProcessor::new(&reader, &remover, Classifier::default());
    let mut console = MemoryConsole::new();

    let outcome =
        processor.process_all(&paths(&["path 1", "path 2", "path 3"]), false, &mut console);

    assert_eq!(outcome.deleted, paths(&["path 3"]));
    assert_eq!(
        outcome.errored_paths().collect::<Vec<_>>(),
        vec![Path::new("path 1"), Path::new("path 2")]
    );
    assert_eq!(*remover.removed.borrow(), paths(&["path 3"]));
    assert_eq!(
        console.err,
        vec![
            "! REMOVE ERROR -13: - path 1".to_string(),
            "! REMOVE ERROR -13: - path 2".to_string(),
        ]
    );
    assert_eq!(
        console.out,
        vec![
            "~ REMOVED path 3",
            "\n~ DELETED: 1\n~ ERROR: 2\n~ SKIPPED: 0",
            "\n",
            "~ ERROR: path 1",
            "~ ERROR: path 2",
        ]
    );
}

#[test]
fn test_process_all_uses_placeholders_for_bare_errors() {
    let reader = MemReader::with(&[("path 1", "describe")]);
    let remover = MemRemover::failing(&["path 1"], true);
    let processor = BatchProcessor::new(&reader, &remover, Classifier::default());
    let mut console = MemoryConsole::new();

    let outcome = processor.process_all(&paths(&["path 1"]), false, &mut console);

    assert_eq!(outcome.error_count(), 1);
    assert_eq!(console.err, vec!["! REMOVE ERROR na: - unknown path".to_string()]);
    assert_eq!(console.out.last().map(String::as_str), Some("~ ERROR: path 1"));
}

#[test]
fn test_every_path_lands_in_exactly_one_bucket() {
    let reader = MemReader::with(&[
        ("a", "describe"),
        ("b", "describe describe"),
        ("c", "describe"),
        ("app.component.spec.ts", "describe"),
    ]);
    let remover = MemRemover::failing(&["c"], false);
    let processor = BatchProcessor::new(&reader, &remover, Classifier::default());
    let mut console = MemoryConsole::new();

    let input = paths(&["a", "b", "c", "app.component.spec.ts", "unreadable"]);
    let outcome = processor.process_all(&input, false, &mut console);

    assert_eq!(outcome.total(), input.len());
    for path in &input {
        let hits = usize::from(outcome.deleted.contains(path))
            + usize::from(outcome.skipped.contains(path))
            + usize::from(outcome.errored_paths().any(|p| p == path.as_path()));
        assert_eq!(hits, 1, "{} must be in exactly one bucket", path.display());
    }
}
