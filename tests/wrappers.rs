use std::env;

use chrono::TimeDelta;

use bracket::wrap::{format_elapsed, pushd, timed};

// A single test, since the working directory is shared by the whole process.
#[test]
fn pushd_changes_and_restores_working_directory() {
    let before = env::current_dir().expect("cwd");
    let target = tempfile::tempdir().expect("temp dir");
    let target_path = target.path().canonicalize().expect("canonical");

    let inside = pushd(&target_path, || env::current_dir().expect("cwd")).expect("pushd");
    assert_eq!(inside.canonicalize().expect("canonical"), target_path);
    assert_eq!(env::current_dir().expect("cwd"), before);

    let unwound = std::panic::catch_unwind(|| {
        let _ = pushd(&target_path, || -> u8 { panic!("inside the directory") });
    });
    assert!(unwound.is_err());
    assert_eq!(env::current_dir().expect("cwd"), before);

    assert!(pushd(target_path.join("missing"), || ()).is_err());
    assert_eq!(env::current_dir().expect("cwd"), before);
}

#[test]
fn timed_returns_result_and_elapsed() {
    let (value, elapsed) = timed("square", || 12 * 12);
    assert_eq!(value, 144);
    assert!(elapsed >= TimeDelta::zero());
}

#[test]
fn elapsed_format() {
    assert_eq!(format_elapsed(TimeDelta::milliseconds(400)), "0:00:00.400000");
    assert_eq!(format_elapsed(TimeDelta::seconds(3723)), "1:02:03.000000");
}
