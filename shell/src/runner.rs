use log::{debug, trace};
use std::io;
use std::process;
use thiserror::Error;

/// How a command line handed to the shell came to an end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Exited(i32),
    Interrupted,
}

impl Default for Outcome {
    fn default() -> Self {
        Outcome::Exited(0)
    }
}

impl Outcome {
    /// The status the wrapper itself should exit with.
    /// An interrupt is a normal way to leave an interactive session.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Exited(code) => *code,
            Outcome::Interrupted => 0,
        }
    }
}

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Could not start the shell for `{line}`: {source}")]
    Spawn {
        line: String,
        #[source]
        source: io::Error,
    },
    #[error("Could not install the interrupt handler: {0}")]
    Signal(io::Error),
}

/// Hands a complete command line to the command interpreter and waits for it
pub trait Runner {
    fn run(&mut self, line: &str) -> Result<Outcome, ShellError>;
}

/// Runs command lines through `sh -c`, with the wrapper's stdio inherited.
/// Concurrent runs from several threads are serialized.
#[derive(Debug, Default)]
pub struct SystemShell;

impl Runner for SystemShell {
    fn run(&mut self, line: &str) -> Result<Outcome, ShellError> {
        debug!("sh -c {:?}", line);
        let guard = interrupt::Guard::install()?;
        let status = process::Command::new("sh")
            .arg("-c")
            .arg(line)
            .status()
            .map_err(|source| ShellError::Spawn {
                line: line.to_string(),
                source,
            })?;
        let interrupted = guard.interrupted();
        drop(guard);
        trace!("shell finished with {:?}, interrupted: {}", status, interrupted);

        if interrupted {
            return Ok(Outcome::Interrupted);
        }
        match status.code() {
            Some(code) if code == 128 + interrupt::SIGINT => Ok(Outcome::Interrupted),
            Some(code) => Ok(Outcome::Exited(code)),
            // killed by a signal
            None => Ok(Outcome::Interrupted),
        }
    }
}

/// Records command lines instead of running them
#[derive(Debug, Default)]
pub struct Recorder {
    pub lines: Vec<String>,
    pub outcome: Outcome,
}

impl Recorder {
    pub fn new() -> Self {
        Recorder::default()
    }

    pub fn with_outcome(outcome: Outcome) -> Self {
        Recorder {
            lines: Vec::new(),
            outcome,
        }
    }
}

impl Runner for Recorder {
    fn run(&mut self, line: &str) -> Result<Outcome, ShellError> {
        self.lines.push(line.to_string());
        Ok(self.outcome)
    }
}

#[cfg(unix)]
mod interrupt {
    use super::ShellError;
    use std::io;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Mutex, MutexGuard};

    pub const SIGINT: i32 = libc::SIGINT;

    static INTERRUPTED: AtomicBool = AtomicBool::new(false);
    /// The SIGINT disposition is process-wide; one child at a time owns it
    static OWNER: Mutex<()> = Mutex::new(());

    extern "C" fn on_interrupt(_signal: libc::c_int) {
        INTERRUPTED.store(true, Ordering::SeqCst);
    }

    /// Catches SIGINT in the wrapper while a child runs.
    /// A caught (not ignored) signal is reset to its default by exec, so the child still sees Ctrl-C.
    pub struct Guard {
        previous: libc::sighandler_t,
        // released only after `drop` has restored `previous`
        _owner: MutexGuard<'static, ()>,
    }

    impl Guard {
        pub fn install() -> Result<Self, ShellError> {
            let owner = OWNER.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            INTERRUPTED.store(false, Ordering::SeqCst);
            let handler = on_interrupt as extern "C" fn(libc::c_int) as libc::sighandler_t;
            let previous = unsafe { libc::signal(libc::SIGINT, handler) };
            if previous == libc::SIG_ERR {
                return Err(ShellError::Signal(io::Error::last_os_error()));
            }
            Ok(Guard {
                previous,
                _owner: owner,
            })
        }

        pub fn interrupted(&self) -> bool {
            INTERRUPTED.load(Ordering::SeqCst)
        }
    }

    impl Drop for Guard {
        fn drop(&mut self) {
            unsafe {
                libc::signal(libc::SIGINT, self.previous);
            }
        }
    }
}

#[cfg(not(unix))]
mod interrupt {
    use super::ShellError;

    pub const SIGINT: i32 = 2;

    pub struct Guard;

    impl Guard {
        pub fn install() -> Result<Self, ShellError> {
            Ok(Guard)
        }

        pub fn interrupted(&self) -> bool {
            false
        }
    }
}
