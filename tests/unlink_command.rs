//! Integration tests for the `unlink` flow: only links created by winlink
//! are removed; everything else survives.
#![allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
#![cfg(unix)]

mod common;

use std::fs;

use common::TestEnv;
use winlink_cli::logging::EntryStatus;
use winlink_cli::tasks::links::{LinkFolders, UnlinkFolders};
use winlink_cli::tasks::{Task as _, TaskResult};

#[test]
fn removes_links_created_by_link() {
    let env = TestEnv::new()
        .with_windows_folder("Desktop")
        .with_windows_folder("Documents");
    let (ctx, _log) = env.context(&["Desktop", "Documents"]);
    LinkFolders::new(vec![], vec![]).run(&ctx).unwrap();

    let (ctx, log) = env.context(&["Desktop", "Documents"]);
    let result = UnlinkFolders.run(&ctx).unwrap();
    assert_eq!(result, TaskResult::Ok);

    assert!(fs::symlink_metadata(env.site("Desktop")).is_err());
    assert!(fs::symlink_metadata(env.site("Documents")).is_err());
    assert!(log.entries().iter().all(|e| e.status == EntryStatus::Changed));
}

#[test]
fn leaves_foreign_links_and_files_alone() {
    let env = TestEnv::new().with_windows_folder("Desktop");
    let foreign = env.profile().join("Other");
    std::os::unix::fs::symlink(&foreign, env.site("Desktop")).unwrap();
    fs::write(env.site("Notes"), "a real file").unwrap();

    let (ctx, log) = env.context(&["Desktop", "Notes"]);
    UnlinkFolders.run(&ctx).unwrap();

    assert_eq!(fs::read_link(env.site("Desktop")).unwrap(), foreign);
    assert_eq!(fs::read(env.site("Notes")).unwrap(), b"a real file");
    assert!(log.entries().iter().all(|e| e.status == EntryStatus::Unchanged));
}

/// Links whose Windows folder has since disappeared are still removed: the
/// match is on the stored link text, not on the source still existing.
#[test]
fn removes_links_whose_source_is_gone() {
    let env = TestEnv::new().with_windows_folder("Music");
    let (ctx, _log) = env.context(&["Music"]);
    LinkFolders::new(vec![], vec![]).run(&ctx).unwrap();

    fs::remove_dir(env.profile().join("Music")).unwrap();

    let (ctx, log) = env.context(&["Music"]);
    UnlinkFolders.run(&ctx).unwrap();

    assert!(fs::symlink_metadata(env.site("Music")).is_err());
    assert_eq!(log.entries()[0].status, EntryStatus::Changed);
}

#[test]
fn dry_run_previews_removals_without_removing() {
    let env = TestEnv::new().with_windows_folder("Desktop");
    let (ctx, _log) = env.context(&["Desktop"]);
    LinkFolders::new(vec![], vec![]).run(&ctx).unwrap();

    let (ctx, log) = env.context_with_dry_run(&["Desktop"], true);
    let result = UnlinkFolders.run(&ctx).unwrap();

    assert_eq!(result, TaskResult::DryRun);
    assert!(env.site("Desktop").is_symlink(), "link still present");
    assert_eq!(log.entries()[0].status, EntryStatus::DryRun);
}
