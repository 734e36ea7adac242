//! Scoped guards with an error suppression policy.
//!
//! A [`ScopedGuard`] wraps a protected block between an "enter" and an "exit"
//! notification. When the block fails, the guard classifies the error and
//! either swallows it (the scope completes normally) or hands it back to the
//! caller, always after the exit notification has been emitted.
//!
//! The lifecycle `Created -> Entered -> Exited` is carried by the types:
//! [`ScopedGuard::enter`] consumes the guard and returns a [`Scope`], and
//! [`Scope::exit`] consumes the scope. A guard can therefore not be entered
//! twice, and a scope that is dropped without an explicit exit (early return,
//! unwinding panic) still fires its exit notification from `Drop`.
//!
//! ```
//! use bracket::guard::ScopedGuard;
//! use bracket::kind::{BlockError, ErrorKind};
//!
//! let guard = ScopedGuard::try_new([ErrorKind::Index, ErrorKind::Key]).unwrap();
//! let outcome = guard.run(|_scope| -> Result<(), BlockError> {
//!     Err(BlockError::key("missing"))
//! });
//! assert_eq!(outcome, Ok(None));
//! ```

use std::fmt;

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::kind::{Classify, ErrorKind};
use crate::policy::{PolicyInput, SuppressionPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Created,
    Entered,
    Exited,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardEvent {
    Enter,
    Exit {
        kind: Option<ErrorKind>,
        suppressed: bool,
    },
}

impl fmt::Display for GuardEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enter => write!(f, "enter"),
            Self::Exit { .. } => write!(f, "exit"),
        }
    }
}

/// Receives the enter/exit notifications of a guard.
pub type Sink = Box<dyn FnMut(&GuardEvent)>;

/// Default sink, reports notifications as tracing events.
pub fn tracing_sink() -> Sink {
    Box::new(|event: &GuardEvent| match event {
        GuardEvent::Enter => info!("enter"),
        GuardEvent::Exit { kind, suppressed } => {
            let kind = kind.as_ref().map(ErrorKind::name).unwrap_or("-");
            info!(kind, suppressed, "exit");
        }
    })
}

/// Prints `enter` and `exit` on standard output.
pub fn console_sink() -> Sink {
    Box::new(|event: &GuardEvent| println!("{event}"))
}

// ------------- ScopedGuard -------------
pub struct ScopedGuard {
    name: String,
    policy: SuppressionPolicy,
    sink: Sink,
}

impl ScopedGuard {
    pub fn new(policy: SuppressionPolicy) -> Self {
        Self {
            name: String::from("guard"),
            policy,
            sink: tracing_sink(),
        }
    }
    /// Builds the policy from a loosely shaped input. Inputs that are neither
    /// a flag, empty, nor a collection of error kinds are rejected with
    /// `InvalidPolicy`.
    pub fn try_new(input: impl Into<PolicyInput>) -> Result<Self> {
        let policy = SuppressionPolicy::try_from(input.into())?;
        Ok(Self::new(policy))
    }
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
    pub fn with_sink(mut self, sink: impl FnMut(&GuardEvent) + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn policy(&self) -> &SuppressionPolicy {
        &self.policy
    }
    /// Always [`GuardState::Created`]: entering consumes the guard, and the
    /// entered state lives on the returned [`Scope`].
    pub fn state(&self) -> GuardState {
        GuardState::Created
    }

    pub fn enter(mut self) -> Scope {
        debug!(guard = %self.name, policy = %self.policy, "entering scope");
        (self.sink)(&GuardEvent::Enter);
        Scope {
            guard: self,
            state: GuardState::Entered,
        }
    }

    /// Runs `block` inside the scope of this guard.
    ///
    /// Returns `Ok(Some(value))` when the block succeeds, `Ok(None)` when it
    /// fails with a suppressed kind and `Err(error)` otherwise. The exit
    /// notification has always been emitted by the time this returns, and it
    /// is also emitted if the block panics.
    pub fn run<T, E, F>(self, block: F) -> std::result::Result<Option<T>, E>
    where
        E: Classify,
        F: FnOnce(&Scope) -> std::result::Result<T, E>,
    {
        let scope = self.enter();
        match block(&scope) {
            Ok(value) => {
                scope.exit(None);
                Ok(Some(value))
            }
            Err(error) => {
                let kind = error.kind();
                if scope.exit(Some(&kind)) {
                    Ok(None)
                } else {
                    Err(error)
                }
            }
        }
    }
}

impl fmt::Debug for ScopedGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedGuard")
            .field("name", &self.name)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

// ------------- Scope -------------
/// An entered guard.
pub struct Scope {
    guard: ScopedGuard,
    state: GuardState,
}

impl Scope {
    pub fn name(&self) -> &str {
        &self.guard.name
    }
    pub fn policy(&self) -> &SuppressionPolicy {
        &self.guard.policy
    }
    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Leaves the scope, reporting the kind of the error that ended the block
    /// if there was one. Returns whether that error is suppressed.
    pub fn exit(mut self, kind: Option<&ErrorKind>) -> bool {
        self.finish(kind)
    }

    fn finish(&mut self, kind: Option<&ErrorKind>) -> bool {
        self.state = GuardState::Exited;
        let suppressed = kind.is_some_and(|kind| self.guard.policy.suppresses(kind));
        (self.guard.sink)(&GuardEvent::Exit {
            kind: kind.cloned(),
            suppressed,
        });
        match kind {
            Some(kind) if suppressed => debug!(guard = %self.guard.name, %kind, "suppressed error"),
            Some(kind) => debug!(guard = %self.guard.name, %kind, "propagating error"),
            None => debug!(guard = %self.guard.name, "left scope"),
        }
        suppressed
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        if self.state == GuardState::Entered {
            if std::thread::panicking() {
                warn!(guard = %self.guard.name, "scope unwound by a panic");
            }
            self.finish(None);
        }
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("guard", &self.guard)
            .field("state", &self.state)
            .finish()
    }
}
