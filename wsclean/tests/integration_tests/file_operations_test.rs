// tests/integration_tests/file_operations_test.rs
use super::common::{create_test_file, read, setup_test_directory};
use anyhow::Result;
use std::fs;
use tempfile::TempDir;
use wsclean::{FileStatus, cleanup_dir_with, cleanup_file};

#[test]
fn test_dirty_file_rewritten_exactly() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(
        temp_dir.path(),
        "main.cpp",
        "int x = 1;   \n   \nreturn 0;\t\t\n",
    )?;

    let outcome = cleanup_file(&temp_dir.path().join("main.cpp"));

    assert!(matches!(outcome.result, Ok(FileStatus::Cleaned)));
    assert_eq!(read(temp_dir.path(), "main.cpp")?, "int x = 1;\n\nreturn 0;\n");
    Ok(())
}

#[test]
fn test_clean_file_left_byte_identical() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let path = temp_dir.path().join("include/engine.h");
    let before = fs::read(&path)?;
    let modified_before = fs::metadata(&path)?.modified()?;

    cleanup_dir_with(temp_dir.path(), |_| {})?;

    assert_eq!(fs::read(&path)?, before);
    assert_eq!(fs::metadata(&path)?.modified()?, modified_before);
    Ok(())
}

#[test]
fn test_project_files_after_cleanup() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    cleanup_dir_with(temp_dir.path(), |_| {})?;

    assert_eq!(
        read(temp_dir.path(), "src/main.cpp")?,
        "#include \"engine.h\"\n\nint main() {\n    return 0;\n}\n"
    );
    assert_eq!(
        read(temp_dir.path(), "src/core/logger.cxx")?,
        "void log() {\n\n}\n"
    );
    assert_eq!(
        read(temp_dir.path(), "include/scene.hpp")?,
        "struct Scene {\r\n  int id;\r\n};\r\n"
    );
    assert_eq!(read(temp_dir.path(), "legacy/util.c")?, "int util(void);\n");
    Ok(())
}

#[test]
fn test_clean_crlf_file_left_byte_identical() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let content = "#include <vector>\r\n\r\nint main() {\r\n    return 0;\r\n}\r\n";
    create_test_file(temp_dir.path(), "win.cpp", content)?;

    let stats = cleanup_dir_with(temp_dir.path(), |_| {})?;

    assert_eq!(stats.total, 1);
    assert_eq!(stats.cleaned, 0);
    assert_eq!(read(temp_dir.path(), "win.cpp")?, content);
    Ok(())
}

#[test]
fn test_lone_carriage_return_splits_lines() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "old.c", "a  \rb\n")?;

    let outcome = cleanup_file(&temp_dir.path().join("old.c"));

    assert!(matches!(outcome.result, Ok(FileStatus::Cleaned)));
    assert_eq!(read(temp_dir.path(), "old.c")?, "a\nb\n");
    Ok(())
}
