//! Puts the terminal into widget mode and guarantees it comes back out,
//! on drop, on panic unwinding and on SIGINT/SIGTERM.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub trait TerminalOps: Send + Sync + 'static {
    fn setup(&self) -> io::Result<()>;
    fn restore(&self) -> io::Result<()>;
}

/// Raw mode, alternate screen, bracketed paste and (optionally) mouse capture.
#[derive(Debug, Clone, Copy)]
pub struct CrosstermTerminalOps {
    pub mouse_capture: bool,
}

impl Default for CrosstermTerminalOps {
    fn default() -> Self {
        Self {
            mouse_capture: true,
        }
    }
}

impl TerminalOps for CrosstermTerminalOps {
    fn setup(&self) -> io::Result<()> {
        use crossterm::{
            cursor,
            event::{EnableBracketedPaste, EnableMouseCapture},
            execute,
            terminal::{enable_raw_mode, EnterAlternateScreen},
        };

        enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(
            out,
            EnterAlternateScreen,
            EnableBracketedPaste,
            cursor::SetCursorStyle::SteadyBar
        )?;
        if self.mouse_capture {
            execute!(out, EnableMouseCapture)?;
        }
        Ok(())
    }

    fn restore(&self) -> io::Result<()> {
        use crossterm::{
            cursor,
            event::{DisableBracketedPaste, DisableMouseCapture},
            execute,
            terminal::{disable_raw_mode, LeaveAlternateScreen},
        };

        // Run every step; report the first failure.
        let mut out = io::stdout();
        let steps = [
            disable_raw_mode(),
            if self.mouse_capture {
                execute!(out, DisableMouseCapture)
            } else {
                Ok(())
            },
            execute!(
                out,
                DisableBracketedPaste,
                LeaveAlternateScreen,
                cursor::SetCursorStyle::DefaultUserShape,
                cursor::Show
            ),
        ];
        steps.into_iter().collect()
    }
}

/// Cloneable handle that restores the terminal at most once.
#[derive(Clone)]
pub struct TerminalRestorer {
    restored: Arc<AtomicBool>,
    ops: Arc<dyn TerminalOps>,
}

impl TerminalRestorer {
    pub fn restore(&self) -> io::Result<()> {
        if self.restored.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.ops.restore()
    }

    pub fn is_restored(&self) -> bool {
        self.restored.load(Ordering::SeqCst)
    }
}

pub struct TerminalGuard {
    restorer: TerminalRestorer,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        Self::with_ops(Arc::new(CrosstermTerminalOps::default()))
    }

    pub fn with_ops(ops: Arc<dyn TerminalOps>) -> io::Result<Self> {
        ops.setup()?;
        Ok(Self {
            restorer: TerminalRestorer {
                restored: Arc::new(AtomicBool::new(false)),
                ops,
            },
        })
    }

    pub fn restorer(&self) -> TerminalRestorer {
        self.restorer.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = self.restorer.restore() {
            tracing::warn!(error = %e, "terminal restore failed");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    SigInt,
    SigTerm,
}

impl TerminationSignal {
    pub fn exit_code(self) -> i32 {
        match self {
            TerminationSignal::SigInt => 130,
            TerminationSignal::SigTerm => 143,
        }
    }
}

/// Forward SIGINT/SIGTERM to the event loop. If the loop has not exited
/// within `grace`, restore the terminal and exit from the signal thread.
#[cfg(unix)]
pub fn install_termination_signals(
    restorer: TerminalRestorer,
    tx: std::sync::mpsc::Sender<TerminationSignal>,
    grace: std::time::Duration,
) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    std::thread::Builder::new()
        .name("typeahead-signals".to_string())
        .spawn(move || {
            for sig in signals.forever() {
                let signal = match sig {
                    SIGINT => TerminationSignal::SigInt,
                    SIGTERM => TerminationSignal::SigTerm,
                    _ => continue,
                };
                tracing::info!(?signal, "termination signal received");
                let _ = tx.send(signal);

                std::thread::sleep(grace);
                let _ = restorer.restore();
                std::process::exit(signal.exit_code());
            }
        })
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
