//! Wrappers that run a closure inside some temporary arrangement.

use std::env;
use std::path::{Path, PathBuf};

use chrono::{TimeDelta, Utc};
use tracing::{debug, info, warn};

use crate::error::Result;

// Puts the previous working directory back when dropped, so the change is
// undone even when the wrapped closure panics.
struct RestoreDir(PathBuf);

impl Drop for RestoreDir {
    fn drop(&mut self) {
        match env::set_current_dir(&self.0) {
            Ok(()) => debug!(dir = %self.0.display(), "restored working directory"),
            Err(e) => {
                warn!(dir = %self.0.display(), error = %e, "could not restore working directory")
            }
        }
    }
}

/// Runs `f` with the process working directory set to `dir`.
///
/// The working directory is process wide, so callers must not run this
/// concurrently from several threads.
pub fn pushd<T, P, F>(dir: P, f: F) -> Result<T>
where
    P: AsRef<Path>,
    F: FnOnce() -> T,
{
    let previous = env::current_dir()?;
    env::set_current_dir(dir.as_ref())?;
    debug!(dir = %dir.as_ref().display(), "changed working directory");
    let _restore = RestoreDir(previous);
    Ok(f())
}

/// Runs `f` and logs how long it took.
pub fn timed<T, F>(name: &str, f: F) -> (T, TimeDelta)
where
    F: FnOnce() -> T,
{
    let start = Utc::now();
    let result = f();
    let elapsed = Utc::now() - start;
    info!(name, elapsed = %format_elapsed(elapsed), "{name} took {}", format_elapsed(elapsed));
    (result, elapsed)
}

/// Formats a duration as `H:MM:SS.ffffff`.
pub fn format_elapsed(elapsed: TimeDelta) -> String {
    let micros = elapsed.num_microseconds().unwrap_or(i64::MAX).max(0);
    let seconds = micros / 1_000_000;
    format!(
        "{}:{:02}:{:02}.{:06}",
        seconds / 3600,
        (seconds / 60) % 60,
        seconds % 60,
        micros % 1_000_000
    )
}
