//! Output mode and terminal detection.
//!
//! Flags win over the `[ui]` config section, and the environment
//! (`NO_COLOR`, `TERM=dumb`, no TTY) can only ever turn decoration off.

use std::io::IsTerminal;

use crate::cli::{Cli, Format};
use crate::config::UiSection;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One JSON object per command, nothing else on stdout
    Json,
    /// key=value lines
    #[default]
    Plain,
    /// Badges, colors and the spinner; TTY only
    Pretty,
}

impl OutputMode {
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

/// What the process learned about its terminal at startup.
#[derive(Debug, Clone, Copy)]
struct Terminal {
    is_tty: bool,
    dumb: bool,
    no_color: bool,
}

impl Terminal {
    fn detect() -> Self {
        Self {
            is_tty: std::io::stdout().is_terminal(),
            dumb: std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false),
            no_color: std::env::var_os("NO_COLOR").is_some(),
        }
    }
}

/// Rendering decisions shared by every command.
#[derive(Debug, Clone)]
pub struct UiContext {
    pub is_tty: bool,
    pub color: bool,
    pub unicode: bool,
    /// Columns available for receipts; only measured in pretty mode.
    pub width: usize,
    pub mode: OutputMode,
}

impl UiContext {
    /// Build the context for this invocation from flags and the `[ui]` section.
    pub fn new(cli: &Cli, settings: &UiSection) -> Self {
        let ctx = Self::resolve(cli, settings, Terminal::detect());
        if ctx.mode.is_pretty() {
            Self {
                width: terminal_width().unwrap_or(DEFAULT_WIDTH),
                ..ctx
            }
        } else {
            ctx
        }
    }

    fn resolve(cli: &Cli, settings: &UiSection, term: Terminal) -> Self {
        let mode = if cli.json {
            OutputMode::Json
        } else if term.is_tty && !term.dumb && cli.format != Some(Format::Plain) {
            OutputMode::Pretty
        } else {
            OutputMode::Plain
        };

        Self {
            is_tty: term.is_tty,
            color: mode.is_pretty() && settings.color && !cli.no_color && !term.no_color,
            unicode: !(cli.ascii || settings.ascii),
            width: DEFAULT_WIDTH,
            mode,
        }
    }

    /// Spinners only draw on an interactive pretty terminal.
    pub fn allows_animation(&self) -> bool {
        self.is_tty && self.mode.is_pretty()
    }
}

const DEFAULT_WIDTH: usize = 80;

#[cfg(unix)]
fn terminal_width() -> Option<usize> {
    use std::mem::MaybeUninit;

    let mut winsize = MaybeUninit::<libc::winsize>::uninit();
    // SAFETY: TIOCGWINSZ only writes into winsize; it is read only on success.
    let result =
        unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, winsize.as_mut_ptr()) };
    if result != 0 {
        return None;
    }
    let ws = unsafe { winsize.assume_init() };
    (ws.ws_col > 0).then_some(ws.ws_col as usize)
}

#[cfg(not(unix))]
fn terminal_width() -> Option<usize> {
    None
}
