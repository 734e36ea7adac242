//! Bracket – scoped guards with an error suppression policy, and a few small
//! helpers built in the same spirit.
//!
//! The centre of the crate is the [`guard::ScopedGuard`]: it emits an "enter"
//! notification, runs a protected block, emits an "exit" notification and then
//! decides, from its [`policy::SuppressionPolicy`], whether an error raised by
//! the block is swallowed or handed back to the caller.
//!
//! ## Modules
//! * [`guard`] – The guard, its scope handle and notification sinks.
//! * [`policy`] – Suppression policies and the loose inputs they are built from.
//! * [`kind`] – Error kinds and the [`kind::Classify`] trait for block errors.
//! * [`wrap`] – Closure wrappers: temporary working directory, timing.
//! * [`seq`] – A stateful iterator and an index-driven iterable.
//! * [`puzzles`] – Fuel requirements, Fibonacci and a simulation sum.
//! * [`prompt`] – An integer prompt that re-asks on bad input.
//! * [`books`] – A single-table SQLite book store.
//! * [`settings`] – Layered configuration for the binary.
//!
//! ## Policies
//! A policy is built from a flag, nothing, or a collection of error kinds:
//! * nothing, `false`, `0` or an empty collection suppress nothing,
//! * `true` suppresses every kind,
//! * a collection suppresses exactly the kinds it contains,
//! * anything else (e.g. the number `42`) is rejected with
//!   [`BracketError::InvalidPolicy`].
//!
//! ## Quick Start
//! ```
//! use bracket::guard::ScopedGuard;
//! use bracket::kind::{BlockError, ErrorKind};
//!
//! let guard = ScopedGuard::try_new([ErrorKind::Value]).unwrap();
//! let outcome = guard.run(|_| -> Result<u32, BlockError> { Err(BlockError::value("bad")) });
//! assert_eq!(outcome, Ok(None));
//!
//! let guard = ScopedGuard::try_new([ErrorKind::Index, ErrorKind::Key]).unwrap();
//! let outcome = guard.run(|_| -> Result<u32, BlockError> { Err(BlockError::value("bad")) });
//! assert!(outcome.is_err());
//!
//! assert!(ScopedGuard::try_new(42_i64).is_err());
//! ```

pub mod books;
pub mod error;
pub mod guard;
pub mod kind;
pub mod policy;
pub mod prompt;
pub mod puzzles;
pub mod seq;
pub mod settings;
pub mod wrap;

pub use error::{BracketError, Result};
