use super::*;

use std::fs::{create_dir, write};

fn names(scan: DirScan) -> Vec<String> {
    let mut names: Vec<String> = scan
        .map(|item| item.expect("scan item ok").1.name)
        .collect();
    names.sort();
    names
}

#[test]
fn inspect_entry_returns_record_for_regular_file() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = tmp.path();

    let file_path = root.join("report.csv");
    write(&file_path, b"hello world").expect("write file");

    let entry = fs::read_dir(root)
        .expect("read_dir")
        .next()
        .expect("one entry")
        .expect("entry ok");

    let record = inspect_entry(&entry)
        .expect("inspect_entry ok")
        .expect("regular file yields a record");

    let metadata = fs::metadata(&file_path).expect("stat file");
    let modified: DateTime<Local> = metadata.modified().expect("mtime").into();

    assert_eq!(record.name, "report.csv");
    assert_eq!(record.size, 11);
    assert_eq!(record.modification_time, modified);
    assert_eq!(
        record.creation_time,
        creation_time(&metadata).expect("creation time")
    );
}

#[test]
fn inspect_entry_skips_directories() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    create_dir(tmp.path().join("nested")).expect("create subdir");

    let entry = fs::read_dir(tmp.path())
        .expect("read_dir")
        .next()
        .expect("one entry")
        .expect("entry ok");

    assert!(inspect_entry(&entry).expect("inspect_entry ok").is_none());
}

#[test]
fn scan_dir_yields_only_top_level_regular_files() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = tmp.path();

    // root/
    //   a.txt
    //   .hidden
    //   sub/
    //     deep.txt
    write(root.join("a.txt"), b"a").expect("write a.txt");
    write(root.join(".hidden"), b"h").expect("write .hidden");
    create_dir(root.join("sub")).expect("create sub");
    write(root.join("sub").join("deep.txt"), b"d").expect("write deep.txt");

    let scan = scan_dir(root).expect("scan_dir");
    assert_eq!(names(scan), vec![".hidden", "a.txt"]);
}

#[test]
fn scan_dir_yields_full_paths() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    write(tmp.path().join("one.bin"), b"1").expect("write one.bin");

    let items: Vec<(PathBuf, FileRecord)> = scan_dir(tmp.path())
        .expect("scan_dir")
        .collect::<Result<_>>()
        .expect("scan ok");

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].0, tmp.path().join("one.bin"));
    assert_eq!(items[0].1.name, "one.bin");
}

#[cfg(unix)]
#[test]
fn scan_dir_skips_symlinks() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = tmp.path();

    write(root.join("target.txt"), b"t").expect("write target");
    std::os::unix::fs::symlink(root.join("target.txt"), root.join("link.txt"))
        .expect("create symlink");

    let scan = scan_dir(root).expect("scan_dir");
    assert_eq!(names(scan), vec!["target.txt"]);
}

#[test]
fn scan_dir_on_empty_directory_yields_nothing() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    assert_eq!(scan_dir(tmp.path()).expect("scan_dir").count(), 0);
}

#[test]
fn scan_dir_missing_directory_is_not_found() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let missing = tmp.path().join("missing");

    let err = scan_dir(&missing).err().expect("missing dir should fail");
    let io_err = err
        .downcast_ref::<std::io::Error>()
        .expect("io error in chain");
    assert_eq!(io_err.kind(), std::io::ErrorKind::NotFound);
    assert!(err.to_string().contains("missing"));
}
