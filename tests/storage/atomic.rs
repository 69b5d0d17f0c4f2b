//! Atomic file replacement

use std::fs;

use crate::common::*;
use fleetdb::AtomicFileWriter;

#[test]
fn test_write_replaces_whole_file() {
    let dir = TestDir::new();
    let target = dir.inventory();
    let writer = AtomicFileWriter::new(&target);

    writer.write(["a", "b", "c"]).unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), "a\nb\nc\n");

    writer.write(["z"]).unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), "z\n");
}

#[test]
fn test_interrupted_write_leaves_previous_file() {
    let dir = TestDir::new();
    let target = dir.inventory();
    let writer = AtomicFileWriter::new(&target);
    writer.write(["car-1,Atlas,good,1800,Available"]).unwrap();
    let before = fs::read(&target).unwrap();

    // Staged but never committed: the process "dies" before the rename
    let lines: Vec<String> = (0..10_000)
        .map(|i| format!("car-{},Falcon,fair,{},Available", i, 1000 + i))
        .collect();
    let staged = writer.stage(&lines).unwrap();
    let temp = staged.temp_path().to_path_buf();
    assert!(temp.exists());
    assert_eq!(fs::read(&target).unwrap(), before);
    drop(staged);

    assert_eq!(fs::read(&target).unwrap(), before);
    assert!(!temp.exists());
    let leftovers: Vec<_> = fs::read_dir(dir.dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .filter(|n| n.to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "stray temp files: {:?}", leftovers);
}

#[test]
fn test_failed_write_keeps_target_and_cleans_up() {
    let dir = TestDir::new();
    // A directory in the target's place makes the rename fail
    let target = dir.path("occupied");
    fs::create_dir(&target).unwrap();

    let err = AtomicFileWriter::new(&target).write(["x"]).unwrap_err();
    assert!(err.is_io());
    assert!(target.is_dir());

    let entries = fs::read_dir(dir.dir.path()).unwrap().count();
    assert_eq!(entries, 1);
}

#[test]
fn test_creates_missing_parent_directories() {
    let dir = TestDir::new();
    let target = dir.path("nested/deeper/cars.txt");
    AtomicFileWriter::new(&target).write(["only"]).unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), "only\n");
}
