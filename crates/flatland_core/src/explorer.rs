//! Interaction and animation state machine
//!
//! The [`Explorer`] is the single owner of the shape, the position and the
//! autoplay timer. It has two states:
//!
//! - **Idle**: no timer; only user actions change the position
//! - **Animating**: a periodic timer is running and its ticks own the position
//!
//! Any direct input (shape change or slider) drops back to Idle, cancelling
//! the timer before the input is applied. Renderers only ever see the
//! read-only [`ViewState`] snapshot.

use flatland_math::{project, CrossSection, Position, ShapeKind};

use crate::action::Action;
use crate::scheduler::{Scheduler, TickHandle};
use crate::sweep::{Direction, SweepConfig, SweepConfigError};

/// Read-only snapshot handed to the renderers
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    /// Selected solid
    pub shape: ShapeKind,
    /// Position along the hidden axis
    pub position: Position,
    /// Whether autoplay owns the position
    pub animating: bool,
    /// Direction of the next sweep tick
    pub direction: Direction,
}

impl ViewState {
    /// Cross-section of the current shape at the current position
    pub fn cross_section(&self) -> CrossSection {
        project(self.shape, self.position)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            shape: ShapeKind::default(),
            position: Position::PLANE,
            animating: false,
            direction: Direction::Forward,
        }
    }
}

/// The interaction state machine
pub struct Explorer<S: Scheduler> {
    shape: ShapeKind,
    position: Position,
    direction: Direction,
    sweep: SweepConfig,
    scheduler: S,
    /// Running autoplay timer; `Some` exactly while animating
    timer: Option<TickHandle>,
}

impl<S: Scheduler> Explorer<S> {
    /// Create an idle explorer showing a sphere centered on the plane
    ///
    /// Fails if `sweep` does not validate.
    pub fn new(scheduler: S, sweep: SweepConfig) -> Result<Self, SweepConfigError> {
        sweep.validate()?;
        Ok(Self {
            shape: ShapeKind::default(),
            position: Position::PLANE,
            direction: Direction::Forward,
            sweep,
            scheduler,
            timer: None,
        })
    }

    /// Start on a specific shape instead of the default sphere
    pub fn with_shape(mut self, shape: ShapeKind) -> Self {
        self.shape = shape;
        self
    }

    /// Start at a specific position instead of the plane
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Current snapshot for rendering
    pub fn state(&self) -> ViewState {
        ViewState {
            shape: self.shape,
            position: self.position,
            animating: self.is_animating(),
            direction: self.direction,
        }
    }

    #[inline]
    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.timer.is_some()
    }

    /// Sweep parameters in use
    pub fn sweep(&self) -> &SweepConfig {
        &self.sweep
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable scheduler access, e.g. to advance a manual clock
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Switch to another shape, re-centering it on the plane
    ///
    /// Always leaves the explorer idle.
    pub fn select_shape(&mut self, shape: ShapeKind) {
        self.stop_timer();
        self.shape = shape;
        self.position = Position::PLANE;
        log::debug!("Selected {} at {}", shape, self.position);
    }

    /// Move the shape directly, as the slider does
    ///
    /// Always leaves the explorer idle.
    pub fn set_position(&mut self, position: Position) {
        self.stop_timer();
        self.position = position;
        log::debug!("Position set to {} ({} plane)", position, position.relation());
    }

    /// Start or stop autoplay; returns whether it is now running
    pub fn toggle_animation(&mut self) -> bool {
        if self.is_animating() {
            self.stop_timer();
        } else {
            let handle = self.scheduler.start(self.sweep.interval);
            log::debug!(
                "Autoplay started (timer {}, every {:?})",
                handle.id(),
                self.sweep.interval
            );
            self.timer = Some(handle);
        }
        self.is_animating()
    }

    /// Dispatch a user action
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SelectShape(shape) => self.select_shape(shape),
            Action::SetPosition(position) => self.set_position(position),
            Action::ToggleAnimation => {
                self.toggle_animation();
            }
        }
    }

    /// Apply one sweep step for `handle`
    ///
    /// Ticks from a cancelled or foreign timer are ignored. Returns whether
    /// the position changed.
    pub fn tick(&mut self, handle: TickHandle) -> bool {
        if self.timer != Some(handle) {
            log::trace!("Ignoring stale tick from timer {}", handle.id());
            return false;
        }

        let (position, direction) = self.sweep.advance(self.position, self.direction);
        if direction != self.direction {
            log::debug!("Sweep reversed at {}", position);
        }
        log::trace!("Tick: {} -> {}", self.position, position);
        self.position = position;
        self.direction = direction;
        true
    }

    /// Apply every tick that fired since the last pump; returns how many changed the position
    pub fn pump(&mut self) -> usize {
        let fired = self.scheduler.poll();
        fired.into_iter().filter(|&handle| self.tick(handle)).count()
    }

    /// Cancel any running timer; the explorer stays usable afterwards
    pub fn shutdown(&mut self) {
        self.stop_timer();
    }

    fn stop_timer(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
            log::debug!("Autoplay stopped (timer {})", handle.id());
        }
    }
}

impl<S: Scheduler> Drop for Explorer<S> {
    fn drop(&mut self) {
        self.stop_timer();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;
    use std::time::Duration;

    fn explorer() -> Explorer<ManualScheduler> {
        Explorer::new(ManualScheduler::new(), SweepConfig::default()).unwrap()
    }

    fn run_ticks(explorer: &mut Explorer<ManualScheduler>, ticks: u32) -> usize {
        let interval = explorer.sweep().interval;
        explorer.scheduler_mut().advance(interval * ticks);
        explorer.pump()
    }

    #[test]
    fn test_starts_idle_at_plane() {
        let e = explorer();
        assert_eq!(e.shape(), ShapeKind::Sphere);
        assert_eq!(e.position(), Position::PLANE);
        assert!(!e.is_animating());
        assert_eq!(e.state(), ViewState::default());
    }

    #[test]
    fn test_select_shape_resets_and_stops() {
        let mut e = explorer();
        e.set_position(Position::new(0.2));
        e.toggle_animation();

        e.select_shape(ShapeKind::Torus);
        assert_eq!(e.shape(), ShapeKind::Torus);
        assert_eq!(e.position(), Position::PLANE);
        assert!(!e.is_animating());
        assert_eq!(e.scheduler().active_count(), 0);
        assert_eq!(
            e.state().cross_section(),
            CrossSection::TubePair { distance: 80.0, radius: 20.0 }
        );
    }

    #[test]
    fn test_toggle_twice_restores_idle() {
        let mut e = explorer();
        let before = e.position();
        assert!(e.toggle_animation());
        assert!(!e.toggle_animation());
        assert!(!e.is_animating());
        assert_eq!(e.position(), before);
    }

    #[test]
    fn test_ticks_move_position_while_animating() {
        let mut e = explorer();
        e.toggle_animation();
        assert_eq!(run_ticks(&mut e, 10), 10);
        assert!((e.position().value() - 0.56).abs() < 1e-4);
    }

    #[test]
    fn test_no_ticks_while_idle() {
        let mut e = explorer();
        assert_eq!(run_ticks(&mut e, 10), 0);
        assert_eq!(e.position(), Position::PLANE);
    }

    #[test]
    fn test_set_position_stops_animation() {
        let mut e = explorer();
        e.toggle_animation();
        run_ticks(&mut e, 3);

        e.set_position(Position::new(0.95));
        assert!(!e.is_animating());
        assert_eq!(run_ticks(&mut e, 20), 0);
        assert_eq!(e.position().value(), 0.95);
    }

    #[test]
    fn test_stale_tick_is_ignored() {
        let mut e = explorer();
        e.toggle_animation();
        let old = e.timer.expect("timer should be running");
        e.toggle_animation();
        e.toggle_animation();

        assert!(!e.tick(old));
        assert_eq!(e.position(), Position::PLANE);
    }

    #[test]
    fn test_bounces_between_bounds() {
        let mut e = explorer();
        e.toggle_animation();
        // 0.5 -> 0.99 takes 82 ticks
        run_ticks(&mut e, 82);
        assert_eq!(e.position().value(), 0.99);
        assert_eq!(e.direction(), Direction::Backward);

        run_ticks(&mut e, 1);
        assert!(e.position().value() < 0.99);
    }

    #[test]
    fn test_apply_dispatches() {
        let mut e = explorer();
        e.apply(Action::ToggleAnimation);
        assert!(e.is_animating());
        e.apply(Action::SetPosition(Position::new(0.3)));
        assert!(!e.is_animating());
        assert_eq!(e.position().value(), 0.3);
        e.apply(Action::SelectShape(ShapeKind::Cone));
        assert_eq!(e.shape(), ShapeKind::Cone);
        assert_eq!(e.position(), Position::PLANE);
    }

    #[test]
    fn test_shutdown_cancels_timer() {
        let mut e = explorer();
        e.toggle_animation();
        e.shutdown();
        assert!(!e.is_animating());
        assert_eq!(e.scheduler().active_count(), 0);
    }

    #[test]
    fn test_builder_initial_values() {
        let e = explorer()
            .with_shape(ShapeKind::Cube)
            .with_position(Position::new(0.25));
        assert_eq!(e.shape(), ShapeKind::Cube);
        assert_eq!(e.position().value(), 0.25);
    }

    #[test]
    fn test_interval_respected() {
        let mut e = Explorer::new(
            ManualScheduler::new(),
            SweepConfig { interval: Duration::from_millis(100), ..SweepConfig::default() },
        )
        .unwrap();
        e.toggle_animation();
        e.scheduler_mut().advance(Duration::from_millis(250));
        assert_eq!(e.pump(), 2);
    }

    #[test]
    fn test_rejects_zero_interval() {
        let sweep = SweepConfig { interval: Duration::ZERO, ..SweepConfig::default() };
        let result = Explorer::new(ManualScheduler::new(), sweep);
        assert!(matches!(result, Err(SweepConfigError::ZeroInterval)));
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let sweep = SweepConfig { lower: 0.9, upper: 0.1, ..SweepConfig::default() };
        assert!(Explorer::new(ManualScheduler::new(), sweep).is_err());
    }
}
