//! Interactive session system
//!
//! Runs the live viewer loop:
//! - Input lines arrive from a reader thread over a channel
//! - The loop waits for input until the next autoplay tick is due
//! - Commands and fired ticks update the explorer
//! - The live frame is rewritten after every state change
//!
//! The reader thread only forwards text. The explorer is touched from the
//! loop alone, so there is a single writer of the viewer state.

use std::io::{BufRead, Write};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Instant;

use flatland_core::{Explorer, IntervalScheduler};

use crate::error::AppError;
use crate::input::{Command, CommandMapper, HELP};
use crate::systems::FrameSink;

/// Prefix of frames captured with `snap`
const SNAPSHOT_PREFIX: &str = "snapshot";

/// Counters reported when a session ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Input lines that mapped to a command
    pub commands: usize,
    /// Input lines that were rejected
    pub rejected: usize,
    /// Autoplay ticks applied
    pub ticks: usize,
}

/// The live viewer loop
pub struct InteractiveSession<W: Write> {
    explorer: Explorer<IntervalScheduler>,
    sink: FrameSink,
    /// Where help text and prompts go
    out: W,
}

impl<W: Write> InteractiveSession<W> {
    pub fn new(explorer: Explorer<IntervalScheduler>, sink: FrameSink, out: W) -> Self {
        Self { explorer, sink, out }
    }

    pub fn explorer(&self) -> &Explorer<IntervalScheduler> {
        &self.explorer
    }

    /// Run until `quit` or end of input
    ///
    /// `input` is read on a separate thread so that ticks keep firing while
    /// waiting for the user.
    pub fn run<R>(&mut self, input: R) -> Result<SessionSummary, AppError>
    where
        R: BufRead + Send + 'static,
    {
        let lines = spawn_reader(input);
        let mut summary = SessionSummary::default();

        log::info!("Session started ({} at {})", self.explorer.shape(), self.explorer.position());
        writeln!(self.out, "{}", HELP)?;
        self.sink.write_live(&self.explorer.state())?;

        loop {
            let received = match self.explorer.scheduler().next_deadline() {
                Some(deadline) => {
                    let wait = deadline.saturating_duration_since(Instant::now());
                    lines.recv_timeout(wait)
                }
                None => lines.recv().map_err(|_| RecvTimeoutError::Disconnected),
            };

            match received {
                Ok(line) => {
                    if !self.handle_line(&line, &mut summary)? {
                        break;
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    log::info!("Input closed");
                    break;
                }
            }

            let applied = self.explorer.pump();
            if applied > 0 {
                summary.ticks += applied;
                self.sink.write_live(&self.explorer.state())?;
            }
        }

        self.explorer.shutdown();
        log::info!(
            "Session ended: {} commands, {} rejected, {} ticks, {} frame writes, {} captures",
            summary.commands,
            summary.rejected,
            summary.ticks,
            self.sink.live_writes(),
            self.sink.captures()
        );
        Ok(summary)
    }

    /// Apply one input line; returns `false` when the session should end
    fn handle_line(&mut self, line: &str, summary: &mut SessionSummary) -> Result<bool, AppError> {
        let command = match CommandMapper::map_line(line, self.explorer.is_animating()) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(true),
            Err(e) => {
                log::warn!("{}", e);
                summary.rejected += 1;
                return Ok(true);
            }
        };
        summary.commands += 1;

        match command {
            Command::Apply(action) => {
                self.explorer.apply(action);
                self.sink.write_live(&self.explorer.state())?;
            }
            Command::Snapshot => {
                self.sink.capture(&self.explorer.state(), SNAPSHOT_PREFIX)?;
            }
            Command::Help => {
                writeln!(self.out, "{}", HELP)?;
            }
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }
}

/// Forward lines from `input` over a channel until it closes
fn spawn_reader<R>(input: R) -> Receiver<String>
where
    R: BufRead + Send + 'static,
{
    let (sender, receiver) = channel();
    thread::spawn(move || {
        for line in input.lines() {
            let Ok(line) = line else {
                break;
            };
            if sender.send(line).is_err() {
                break;
            }
        }
    });
    receiver
}
