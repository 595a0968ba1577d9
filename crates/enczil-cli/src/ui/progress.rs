//! Progress indication for long-running operations.
//!
//! Key derivation takes a noticeable fraction of a second, so the work runs
//! on a worker thread while the calling thread animates a spinner.

use std::io::{self, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use super::context::UiContext;
use super::theme::spinner_frames;

const FRAME_INTERVAL: Duration = Duration::from_millis(80);

/// A spinner for indeterminate progress.
pub struct Spinner<'a> {
    ctx: &'a UiContext,
    message: String,
    frame: usize,
}

impl<'a> Spinner<'a> {
    /// Create a new spinner with the given message.
    pub fn new(ctx: &'a UiContext, message: &str) -> Self {
        Self {
            ctx,
            message: message.to_string(),
            frame: 0,
        }
    }

    /// Advance to the next frame and redraw.
    pub fn tick(&mut self) {
        let frames = spinner_frames(self.ctx.unicode);
        self.frame = (self.frame + 1) % frames.len();
        self.render();
    }

    fn render(&self) {
        let frames = spinner_frames(self.ctx.unicode);
        print!("\r\x1b[K{} {}...", frames[self.frame], self.message);
        let _ = io::stdout().flush();
    }

    /// Erase the spinner line.
    pub fn clear(&self) {
        print!("\r\x1b[K");
        let _ = io::stdout().flush();
    }
}

/// Run `job` on a worker thread, animating a spinner until its result
/// arrives over a channel.
///
/// Without a TTY in pretty mode (or with `quiet`) the job still runs on the
/// worker thread but nothing is drawn. The job cannot be cancelled once
/// started.
pub fn run_with_spinner<T, F>(ctx: &UiContext, message: &str, quiet: bool, job: F) -> T
where
    T: Send,
    F: FnOnce() -> T + Send,
{
    let animate = ctx.allows_animation() && !quiet;

    thread::scope(|scope| {
        let (tx, rx) = mpsc::channel();
        let handle = scope.spawn(move || {
            let _ = tx.send(job());
        });

        let mut spinner = animate.then(|| Spinner::new(ctx, message));
        if let Some(s) = &spinner {
            s.render();
        }

        let received = loop {
            match rx.recv_timeout(FRAME_INTERVAL) {
                Ok(value) => break Some(value),
                Err(RecvTimeoutError::Timeout) => {
                    if let Some(s) = spinner.as_mut() {
                        s.tick();
                    }
                }
                Err(RecvTimeoutError::Disconnected) => break None,
            }
        };

        if let Some(s) = &spinner {
            s.clear();
        }

        match (received, handle.join()) {
            (Some(value), _) => value,
            (None, Err(panic)) => std::panic::resume_unwind(panic),
            (None, Ok(())) => unreachable!("worker exited without sending a result"),
        }
    })
}
