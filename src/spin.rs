//! Spin control: landing angle computation and the spin lifecycle
//!
//! A spin moves through `Idle → Requested → Animating → Completed → Idle`.
//! The accumulated rotation only ever grows, so every new spin starts from
//! wherever the wheel visually is and keeps turning forward.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

const DEFAULT_DURATION_MS: u64 = 4000;
const DEFAULT_EXTRA_SPINS: u32 = 5;

/// Timing shared by the rotation animation and the completion timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinConfig {
    /// Length of one spin, in milliseconds
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,

    /// Full turns added on top of the landing distance
    #[serde(default = "default_extra_spins")]
    pub extra_spins: u32,
}

fn default_duration_ms() -> u64 {
    DEFAULT_DURATION_MS
}

fn default_extra_spins() -> u32 {
    DEFAULT_EXTRA_SPINS
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            extra_spins: default_extra_spins(),
        }
    }
}

impl SpinConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpinError {
    #[error("the wheel has no segments")]
    EmptyWheel,
    #[error("winner {winner} is out of range for {total} segments")]
    WinnerOutOfRange { winner: usize, total: usize },
    #[error("a spin is already {state}")]
    Busy { state: &'static str },
    #[error("no spin has been requested")]
    NotRequested,
}

/// Orientation (in `[0, 360)`) at which `winner`'s center sits under the pointer
pub fn landing_angle(winner: usize, total: usize) -> Option<f64> {
    if total == 0 {
        return None;
    }
    let span = 360.0 / total as f64;
    let center_offset = span / 2.0;
    Some((360.0 - winner as f64 * span - center_offset).rem_euclid(360.0))
}

/// Cumulative rotation that lands `winner` under the pointer.
///
/// The result is always reached by turning forward from `current_rotation`,
/// plus `extra_spins` full turns. Returns `None` for an empty wheel.
pub fn compute_target_rotation(
    current_rotation: f64,
    winner: usize,
    total: usize,
    extra_spins: u32,
) -> Option<f64> {
    let target = landing_angle(winner, total)?;

    let mut delta = target - current_rotation.rem_euclid(360.0);
    if delta < 0.0 {
        delta += 360.0;
    }

    Some(current_rotation + delta + 360.0 * f64::from(extra_spins))
}

/// Ease-out cubic: fast start, gentle stop
pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Where the wheel is in its spin lifecycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinState {
    Idle,
    Requested {
        winner: usize,
    },
    Animating {
        spin_id: u64,
        winner: usize,
        from_rotation: f64,
        target_rotation: f64,
        started_at: Instant,
    },
    Completed {
        spin_id: u64,
        winner: usize,
    },
}

impl SpinState {
    pub fn name(&self) -> &'static str {
        match self {
            SpinState::Idle => "idle",
            SpinState::Requested { .. } => "requested",
            SpinState::Animating { .. } => "animating",
            SpinState::Completed { .. } => "completed",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, SpinState::Idle)
    }

    pub fn is_animating(&self) -> bool {
        matches!(self, SpinState::Animating { .. })
    }
}

/// A spin that has been committed to the animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinCommit {
    pub spin_id: u64,
    pub winner: usize,
    pub target_rotation: f64,
    /// How long until the completion notification is due
    pub duration: Duration,
}

/// Owns the wheel's rotation and drives one spin at a time
#[derive(Debug, Clone)]
pub struct SpinController {
    config: SpinConfig,
    rotation: f64,
    state: SpinState,
    total: usize,
    next_spin_id: u64,
}

impl SpinController {
    pub fn new(config: SpinConfig) -> Self {
        Self {
            config,
            rotation: 0.0,
            state: SpinState::Idle,
            total: 0,
            next_spin_id: 1,
        }
    }

    /// Committed rotation; during a spin this is already the target
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn state(&self) -> SpinState {
        self.state
    }

    pub fn config(&self) -> SpinConfig {
        self.config
    }

    /// Accepts a spin request. Only valid while idle.
    pub fn request(&mut self, winner: usize, total: usize) -> Result<(), SpinError> {
        if !self.state.is_idle() {
            return Err(SpinError::Busy {
                state: self.state.name(),
            });
        }
        if total == 0 {
            return Err(SpinError::EmptyWheel);
        }
        if winner >= total {
            return Err(SpinError::WinnerOutOfRange { winner, total });
        }

        debug!(winner, total, "spin requested");
        self.total = total;
        self.state = SpinState::Requested { winner };
        Ok(())
    }

    /// Moves a requested spin into the animation and fixes its target
    pub fn commit(&mut self, now: Instant) -> Result<SpinCommit, SpinError> {
        let winner = match self.state {
            SpinState::Requested { winner } => winner,
            SpinState::Idle => return Err(SpinError::NotRequested),
            other => {
                return Err(SpinError::Busy {
                    state: other.name(),
                });
            }
        };

        let target_rotation =
            compute_target_rotation(self.rotation, winner, self.total, self.config.extra_spins)
                .ok_or(SpinError::EmptyWheel)?;

        let spin_id = self.next_spin_id;
        self.next_spin_id += 1;

        info!(
            spin_id,
            winner,
            from = self.rotation,
            target = target_rotation,
            "spin committed"
        );

        self.state = SpinState::Animating {
            spin_id,
            winner,
            from_rotation: self.rotation,
            target_rotation,
            started_at: now,
        };
        self.rotation = target_rotation;

        Ok(SpinCommit {
            spin_id,
            winner,
            target_rotation,
            duration: self.config.duration(),
        })
    }

    /// `request` followed by `commit`
    pub fn spin(
        &mut self,
        winner: usize,
        total: usize,
        now: Instant,
    ) -> Result<SpinCommit, SpinError> {
        self.request(winner, total)?;
        self.commit(now)
    }

    /// Marks the animation finished. Returns the winner, or `None` when the
    /// notification does not belong to the spin in flight.
    pub fn complete(&mut self, spin_id: u64) -> Option<usize> {
        match self.state {
            SpinState::Animating {
                spin_id: current,
                winner,
                ..
            } if current == spin_id => {
                debug!(spin_id, winner, "spin completed");
                self.state = SpinState::Completed { spin_id, winner };
                Some(winner)
            }
            _ => {
                debug!(spin_id, state = self.state.name(), "ignoring stale completion");
                None
            }
        }
    }

    /// Returns a completed wheel to idle so the next spin can be requested
    pub fn acknowledge(&mut self) -> bool {
        if let SpinState::Completed { .. } = self.state {
            self.state = SpinState::Idle;
            true
        } else {
            false
        }
    }

    /// Withdraws a pending or running spin.
    ///
    /// The wheel stops where it currently appears to be, which is never
    /// behind where it started.
    pub fn cancel(&mut self, now: Instant) -> bool {
        match self.state {
            SpinState::Requested { .. } => {
                self.state = SpinState::Idle;
                true
            }
            SpinState::Animating { spin_id, .. } => {
                self.rotation = self.displayed_rotation(now);
                debug!(spin_id, rotation = self.rotation, "spin cancelled");
                self.state = SpinState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Rotation to draw at `now`, following the eased animation
    pub fn displayed_rotation(&self, now: Instant) -> f64 {
        match self.state {
            SpinState::Animating {
                from_rotation,
                target_rotation,
                started_at,
                ..
            } => {
                let duration = self.config.duration().as_secs_f64();
                if duration <= 0.0 {
                    return target_rotation;
                }
                let elapsed = now.saturating_duration_since(started_at).as_secs_f64();
                let progress = ease_out(elapsed / duration);
                from_rotation + (target_rotation - from_rotation) * progress
            }
            _ => self.rotation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::sector_under_pointer;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_alignment_for_eight_segments() {
        let rotation = compute_target_rotation(0.0, 2, 8, 5).unwrap();
        assert!(close(rotation.rem_euclid(360.0), 247.5));
    }

    #[test]
    fn test_worked_example_four_segments() {
        let rotation = compute_target_rotation(10.0, 1, 4, 5).unwrap();
        assert!(close(rotation, 2025.0));
        assert!(close(rotation.rem_euclid(360.0), 225.0));
    }

    #[test]
    fn test_single_segment_lands_at_half_turn() {
        assert_eq!(landing_angle(0, 1), Some(180.0));
        for start in [0.0, 45.0, 180.0, 359.0, 1234.5] {
            let rotation = compute_target_rotation(start, 0, 1, 5).unwrap();
            assert!(close(rotation.rem_euclid(360.0), 180.0));
            assert!(rotation > start);
        }
    }

    #[test]
    fn test_rotation_only_moves_forward() {
        for total in 1..=12 {
            for winner in 0..total {
                for step in 0..40 {
                    let current = step as f64 * 37.3;
                    let target = compute_target_rotation(current, winner, total, 1).unwrap();
                    assert!(target > current);
                    // Never more than the forward delta plus the extra turn.
                    assert!(target - current < 720.0);
                }
            }
        }
    }

    #[test]
    fn test_target_lands_on_winner() {
        for total in 1..=12 {
            for winner in 0..total {
                let target = compute_target_rotation(123.4, winner, total, 3).unwrap();
                let expected = landing_angle(winner, total).unwrap();
                let diff = (target.rem_euclid(360.0) - expected).abs();
                assert!(diff < 1e-6 || (360.0 - diff) < 1e-6);
                assert_eq!(sector_under_pointer(target, total), Some(winner));
            }
        }
    }

    #[test]
    fn test_zero_extra_spins_can_stay_put() {
        // Already on target: no movement without extra turns.
        let rotation = compute_target_rotation(225.0, 1, 4, 0).unwrap();
        assert!(close(rotation, 225.0));
    }

    #[test]
    fn test_empty_wheel_is_a_noop() {
        assert_eq!(compute_target_rotation(10.0, 0, 0, 5), None);
        let mut controller = SpinController::new(SpinConfig::default());
        assert_eq!(controller.request(0, 0), Err(SpinError::EmptyWheel));
        assert!(controller.state().is_idle());
        assert_eq!(controller.rotation(), 0.0);
    }

    #[test]
    fn test_full_lifecycle() {
        let mut controller = SpinController::new(SpinConfig::default());
        let now = Instant::now();

        controller.request(1, 4).unwrap();
        assert_eq!(controller.state(), SpinState::Requested { winner: 1 });

        let commit = controller.commit(now).unwrap();
        assert_eq!(commit.winner, 1);
        assert_eq!(commit.duration, Duration::from_millis(4000));
        assert!(close(commit.target_rotation, 225.0 + 1800.0));
        assert!(controller.state().is_animating());
        assert!(close(controller.rotation(), commit.target_rotation));

        assert_eq!(controller.complete(commit.spin_id), Some(1));
        assert_eq!(controller.state().name(), "completed");

        assert!(controller.acknowledge());
        assert!(controller.state().is_idle());
    }

    #[test]
    fn test_overlapping_request_is_rejected() {
        let mut controller = SpinController::new(SpinConfig::default());
        let commit = controller.spin(0, 8, Instant::now()).unwrap();
        let rotation = controller.rotation();

        assert_eq!(
            controller.request(3, 8),
            Err(SpinError::Busy { state: "animating" })
        );
        assert!(close(controller.rotation(), rotation));

        controller.complete(commit.spin_id);
        // Still waiting for acknowledgement.
        assert_eq!(
            controller.request(3, 8),
            Err(SpinError::Busy { state: "completed" })
        );
        controller.acknowledge();
        assert!(controller.request(3, 8).is_ok());
    }

    #[test]
    fn test_out_of_range_winner_is_rejected() {
        let mut controller = SpinController::new(SpinConfig::default());
        assert_eq!(
            controller.request(8, 8),
            Err(SpinError::WinnerOutOfRange { winner: 8, total: 8 })
        );
    }

    #[test]
    fn test_commit_without_request() {
        let mut controller = SpinController::new(SpinConfig::default());
        assert_eq!(controller.commit(Instant::now()), Err(SpinError::NotRequested));
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut controller = SpinController::new(SpinConfig::default());
        let first = controller.spin(0, 4, Instant::now()).unwrap();
        assert_eq!(controller.complete(first.spin_id + 1), None);
        assert!(controller.state().is_animating());

        assert_eq!(controller.complete(first.spin_id), Some(0));
        // A duplicate notification does nothing.
        assert_eq!(controller.complete(first.spin_id), None);
    }

    #[test]
    fn test_spin_ids_increase() {
        let mut controller = SpinController::new(SpinConfig::default());
        let first = controller.spin(0, 4, Instant::now()).unwrap();
        controller.complete(first.spin_id);
        controller.acknowledge();
        let second = controller.spin(2, 4, Instant::now()).unwrap();
        assert!(second.spin_id > first.spin_id);
        assert!(second.target_rotation > first.target_rotation);
    }

    #[test]
    fn test_cancel_freezes_rotation_mid_spin() {
        let mut controller = SpinController::new(SpinConfig::default());
        let start = Instant::now();
        let commit = controller.spin(2, 8, start).unwrap();

        let halfway = start + Duration::from_millis(2000);
        let shown = controller.displayed_rotation(halfway);
        assert!(shown > 0.0 && shown < commit.target_rotation);

        assert!(controller.cancel(halfway));
        assert!(controller.state().is_idle());
        assert!(close(controller.rotation(), shown));

        // A late notification for the cancelled spin is dropped.
        assert_eq!(controller.complete(commit.spin_id), None);
        assert!(!controller.cancel(halfway));
    }

    #[test]
    fn test_cancel_requested_spin() {
        let mut controller = SpinController::new(SpinConfig::default());
        controller.request(1, 4).unwrap();
        assert!(controller.cancel(Instant::now()));
        assert_eq!(controller.rotation(), 0.0);
    }

    #[test]
    fn test_displayed_rotation_follows_easing() {
        let mut controller = SpinController::new(SpinConfig::default());
        let start = Instant::now();
        let commit = controller.spin(1, 4, start).unwrap();

        assert!(close(controller.displayed_rotation(start), 0.0));
        let quarter = controller.displayed_rotation(start + Duration::from_millis(1000));
        let half = controller.displayed_rotation(start + Duration::from_millis(2000));
        assert!(quarter > 0.0 && half > quarter);
        // Ease-out covers more than half the distance in the first half.
        assert!(half > commit.target_rotation / 2.0);
        assert!(close(
            controller.displayed_rotation(start + Duration::from_secs(10)),
            commit.target_rotation
        ));
    }

    #[test]
    fn test_ease_out_bounds() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert_eq!(ease_out(2.0), 1.0);
        assert_eq!(ease_out(-1.0), 0.0);
    }

    #[test]
    fn test_spin_config_from_toml() {
        let config: SpinConfig = toml::from_str("duration_ms = 2500").expect("Failed to parse");
        assert_eq!(config.duration(), Duration::from_millis(2500));
        assert_eq!(config.extra_spins, 5);
    }
}
