use assert_fs::prelude::*;
use blockcut_fs::{Error, NormalizedPath, io};
use fs2::FileExt;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_write_atomic_overwrites_existing() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("App.tsx");
    file.write_str("original").unwrap();

    let path = NormalizedPath::new(file.path());
    io::write_atomic(&path, b"updated").unwrap();

    file.assert("updated");
}

#[test]
fn test_write_text_creates_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("test.txt"));

    io::write_text(&path, "hello world").unwrap();

    let content = fs::read_to_string(path.to_native()).unwrap();
    assert_eq!(content, "hello world");
}

#[test]
fn test_write_atomic_leaves_no_temp_files() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("target.txt");
    file.write_str("before\n").unwrap();

    io::write_text(&NormalizedPath::new(file.path()), "after\n").unwrap();

    let leftovers: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(
        leftovers.is_empty(),
        "temp files left behind: {:?}",
        leftovers.iter().map(|e| e.file_name()).collect::<Vec<_>>()
    );
    file.assert(predicate::str::contains("after"));
}

#[test]
fn test_read_text_preserves_crlf() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("windows.txt");
    file.write_str("a\r\nb\r\n").unwrap();

    let content = io::read_text(&NormalizedPath::new(file.path())).unwrap();
    assert_eq!(content, "a\r\nb\r\n");
}

#[test]
fn test_read_text_nonexistent_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("missing.txt"));

    let err = io::read_text(&path).unwrap_err();
    match err {
        Error::Io { source, .. } => assert_eq!(source.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_read_text_rejects_invalid_utf8() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("latin1.txt");
    file.write_binary(&[b'c', b'a', b'f', 0xE9, b'\n']).unwrap();

    let err = io::read_text(&NormalizedPath::new(file.path())).unwrap_err();
    match err {
        Error::Io { source, .. } => {
            assert_eq!(source.kind(), std::io::ErrorKind::InvalidData)
        }
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_error_reports_path() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing.txt");

    let err = io::read_text(&NormalizedPath::new(&missing)).unwrap_err();
    assert!(err.to_string().contains("missing.txt"));
    match err {
        Error::Io { path, .. } => assert_eq!(path, missing),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_write_fails_while_another_writer_holds_the_lock() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("shared.txt");
    fs::write(&file_path, "original").unwrap();

    let holder = fs::OpenOptions::new().write(true).open(&file_path).unwrap();
    holder.lock_exclusive().unwrap();

    let result = io::write_text(&NormalizedPath::new(&file_path), "changed");

    FileExt::unlock(&holder).unwrap();

    assert!(matches!(result, Err(Error::LockFailed { .. })));
    assert_eq!(fs::read_to_string(&file_path).unwrap(), "original");

    io::write_text(&NormalizedPath::new(&file_path), "changed").unwrap();
    assert_eq!(fs::read_to_string(&file_path).unwrap(), "changed");
}

#[cfg(unix)]
mod unix_tests {
    use super::*;
    use std::fs::Permissions;
    use std::os::unix::fs::PermissionsExt;

    fn is_root() -> bool {
        match std::process::Command::new("id").arg("-u").output() {
            Ok(output) => String::from_utf8_lossy(&output.stdout).trim() == "0",
            Err(_) => false,
        }
    }

    #[test]
    fn test_write_atomic_keeps_permissions() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("script.sh");
        fs::write(&file_path, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&file_path, Permissions::from_mode(0o750)).unwrap();

        io::write_text(&NormalizedPath::new(&file_path), "#!/bin/sh\necho hi\n").unwrap();

        let mode = fs::metadata(&file_path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o750);
    }

    #[test]
    fn test_write_to_readonly_directory_fails_and_keeps_original() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("locked");
        fs::create_dir(&dir).unwrap();
        let file_path = dir.join("file.txt");
        fs::write(&file_path, "original").unwrap();
        fs::set_permissions(&dir, Permissions::from_mode(0o555)).unwrap();

        let result = io::write_text(&NormalizedPath::new(&file_path), "changed");

        let _ = fs::set_permissions(&dir, Permissions::from_mode(0o755));

        assert!(result.is_err(), "writing into a read-only directory should fail");
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "original");
    }

    #[test]
    fn test_write_to_readonly_target_fails_and_keeps_original() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("readonly.txt");
        fs::write(&file_path, "original").unwrap();
        fs::set_permissions(&file_path, Permissions::from_mode(0o444)).unwrap();

        let result = io::write_text(&NormalizedPath::new(&file_path), "changed");

        let _ = fs::set_permissions(&file_path, Permissions::from_mode(0o644));

        match result {
            Err(Error::Io { source, .. }) => {
                assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied)
            }
            other => panic!("expected permission error, got {other:?}"),
        }
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "original");
    }

    #[test]
    fn test_write_through_symlink_replaces_target() {
        let temp = TempDir::new().unwrap();
        let real = temp.path().join("real.txt");
        let link = temp.path().join("link.txt");
        fs::write(&real, "old").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        io::write_text(&NormalizedPath::new(&link), "new").unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&real).unwrap(), "new");
    }
}
