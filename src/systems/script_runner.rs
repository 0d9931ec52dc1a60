//! Script playback system
//!
//! Replays a [`Script`] against an explorer driven by virtual time, so the
//! same script always yields the same frames regardless of machine speed.

use flatland_core::{Explorer, ManualScheduler, Script, ScriptStep, ViewState};

use crate::systems::{FrameError, FrameSink};

/// Outcome of playing a script
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptReport {
    /// Actions applied
    pub actions: usize,
    /// Autoplay ticks applied
    pub ticks: usize,
    /// Frames captured
    pub captures: usize,
    /// State after the last step
    pub final_state: ViewState,
}

/// Plays scripts step by step
pub struct ScriptRunner {
    explorer: Explorer<ManualScheduler>,
    sink: FrameSink,
}

impl ScriptRunner {
    pub fn new(explorer: Explorer<ManualScheduler>, sink: FrameSink) -> Self {
        Self { explorer, sink }
    }

    /// Run every step of `script` in order
    pub fn run(&mut self, script: &Script) -> Result<ScriptReport, FrameError> {
        let prefix = file_prefix(&script.name);
        log::info!(
            "Playing script '{}' ({} steps, {} ticks, {} captures)",
            script.name,
            script.steps.len(),
            script.total_wait_ticks(),
            script.capture_count()
        );

        let mut report = ScriptReport {
            actions: 0,
            ticks: 0,
            captures: 0,
            final_state: self.explorer.state(),
        };

        for step in &script.steps {
            if let Some(action) = step.action() {
                self.explorer.apply(action);
                report.actions += 1;
                continue;
            }
            match *step {
                ScriptStep::Wait(ticks) => {
                    let interval = self.explorer.sweep().interval;
                    self.explorer.scheduler_mut().advance(interval * ticks);
                    report.ticks += self.explorer.pump();
                }
                ScriptStep::Capture => {
                    self.sink.capture(&self.explorer.state(), &prefix)?;
                    report.captures += 1;
                }
                _ => {}
            }
        }

        self.explorer.shutdown();
        report.final_state = self.explorer.state();
        log::info!(
            "Script '{}' finished at {} ({} ticks)",
            script.name,
            report.final_state.position,
            report.ticks
        );
        Ok(report)
    }
}

/// File-name-safe form of a script name
fn file_prefix(name: &str) -> String {
    let slug: String = name
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        "script".to_string()
    } else {
        slug.to_string()
    }
}
