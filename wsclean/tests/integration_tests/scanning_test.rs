// tests/integration_tests/scanning_test.rs
use super::common::{read, setup_test_directory};
use anyhow::Result;
use std::path::PathBuf;
use wsclean::{SOURCE_EXTENSIONS, cleanup_dir_with};

#[test]
fn test_scanning_visits_nested_sources_only() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    let mut visited: Vec<PathBuf> = Vec::new();
    let stats = cleanup_dir_with(temp_dir.path(), |outcome| {
        visited.push(outcome.path.clone());
    })?;

    assert_eq!(stats.total, 6, "Should visit every C/C++ source");
    assert_eq!(visited.len(), 6);
    for path in &visited {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        assert!(SOURCE_EXTENSIONS.contains(&ext), "unexpected file {path:?}");
    }

    assert_eq!(read(temp_dir.path(), "cleanup.py")?, "import os   \n   \n");
    assert_eq!(read(temp_dir.path(), "README.txt")?, "Readme   \n");
    assert_eq!(read(temp_dir.path(), "build/CMakeLists.txt")?, "project(x)  \n");

    Ok(())
}

#[test]
fn test_counter_consistency() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    let stats = cleanup_dir_with(temp_dir.path(), |_| {})?;

    assert_eq!(stats.cleaned, 4, "main.cpp, logger.cxx, scene.hpp and util.c are dirty");
    assert_eq!(stats.unchanged(), 2);
    assert_eq!(stats.total, stats.cleaned + stats.unchanged());

    Ok(())
}

#[test]
fn test_second_run_is_a_no_op() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    let first = cleanup_dir_with(temp_dir.path(), |_| {})?;
    let second = cleanup_dir_with(temp_dir.path(), |outcome| {
        assert!(!outcome.is_cleaned(), "{} changed twice", outcome.path.display());
    })?;

    assert_eq!(first.total, second.total);
    assert_eq!(second.cleaned, 0);
    assert_eq!(second.unchanged(), second.total);

    Ok(())
}
