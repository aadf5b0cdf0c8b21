//! Fly/jump camera animation between poses.

use crate::camera::CameraPose;

/// Smoothstep-eased animator that carries the host camera from one pose to
/// another over a fixed duration, or jumps instantly.
///
/// Drive it from the per-frame tick: [`CameraFlight::tick`] returns the pose
/// to apply this frame and `None` once idle. Starting a new flight or jump
/// preempts any flight in progress.
#[derive(Debug, Clone, Default)]
pub struct CameraFlight {
    state: State,
}

#[derive(Debug, Clone, Default)]
enum State {
    #[default]
    Idle,
    Flying {
        from: CameraPose,
        to: CameraPose,
        elapsed: f32,
        duration: f32,
    },
}

impl CameraFlight {
    /// Creates an idle animator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts an animated flight. A non-positive duration degenerates to a
    /// jump: the next tick delivers the destination immediately.
    pub fn fly(&mut self, from: CameraPose, to: CameraPose, duration_secs: f32) {
        self.state = State::Flying {
            from,
            to,
            elapsed: 0.0,
            duration: duration_secs.max(0.0),
        };
    }

    /// Jumps straight to the destination; the next tick delivers it.
    pub fn jump(&mut self, to: CameraPose) {
        self.fly(to, to, 0.0);
    }

    /// Returns whether a flight is in progress.
    #[must_use]
    pub fn is_flying(&self) -> bool {
        matches!(self.state, State::Flying { .. })
    }

    /// Advances the animation by `dt` seconds and returns the pose to apply
    /// this frame. A non-positive `dt` reports the current in-flight pose
    /// without advancing. Returns `None` while idle.
    pub fn tick(&mut self, dt: f32) -> Option<CameraPose> {
        let State::Flying {
            from,
            to,
            elapsed,
            duration,
        } = &mut self.state
        else {
            return None;
        };

        if dt > 0.0 {
            *elapsed += dt;
        }

        if *duration <= 0.0 || *elapsed >= *duration {
            let done = *to;
            self.state = State::Idle;
            return Some(done);
        }

        let t = (*elapsed / *duration).clamp(0.0, 1.0);
        let s = t * t * (3.0 - 2.0 * t);
        Some(lerp_pose(from, to, s))
    }

    /// Stops a flight in progress and returns the pose it had reached, or
    /// `None` when idle.
    pub fn cancel(&mut self) -> Option<CameraPose> {
        let State::Flying {
            from,
            to,
            elapsed,
            duration,
        } = &self.state
        else {
            return None;
        };

        let pose = if *duration <= 0.0 {
            *to
        } else {
            let t = (*elapsed / *duration).clamp(0.0, 1.0);
            let s = t * t * (3.0 - 2.0 * t);
            lerp_pose(from, to, s)
        };
        self.state = State::Idle;
        Some(pose)
    }
}

/// Interpolates eye and target linearly; up via normalized lerp.
fn lerp_pose(from: &CameraPose, to: &CameraPose, s: f32) -> CameraPose {
    let up = from.up.lerp(to.up, s);
    let up = if up.length_squared() > 1e-9 {
        up.normalize()
    } else {
        to.up
    };
    CameraPose {
        eye: from.eye.lerp(to.eye, s),
        target: from.target.lerp(to.target, s),
        up,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn pose_a() -> CameraPose {
        CameraPose::look_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y)
    }

    fn pose_b() -> CameraPose {
        CameraPose::look_at(Vec3::new(10.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0), Vec3::Y)
    }

    #[test]
    fn test_idle_tick_returns_none() {
        let mut flight = CameraFlight::new();
        assert!(flight.tick(0.016).is_none());
        assert!(!flight.is_flying());
    }

    #[test]
    fn test_flight_reaches_destination() {
        let mut flight = CameraFlight::new();
        flight.fly(pose_a(), pose_b(), 0.5);

        let mut last = None;
        for _ in 0..100 {
            match flight.tick(0.016) {
                Some(pose) => last = Some(pose),
                None => break,
            }
        }

        let last = last.unwrap();
        assert_eq!(last.eye, pose_b().eye);
        assert_eq!(last.target, pose_b().target);
        assert!(!flight.is_flying());
    }

    #[test]
    fn test_progress_monotone_toward_destination() {
        let mut flight = CameraFlight::new();
        flight.fly(pose_a(), pose_b(), 1.0);

        let mut prev_dist = f32::MAX;
        while let Some(pose) = flight.tick(0.05) {
            let dist = (pose.eye - pose_b().eye).length();
            assert!(dist <= prev_dist + 1e-4);
            prev_dist = dist;
        }
    }

    #[test]
    fn test_zero_duration_is_jump() {
        let mut flight = CameraFlight::new();
        flight.fly(pose_a(), pose_b(), 0.0);
        assert_eq!(flight.tick(0.0).unwrap().eye, pose_b().eye);
        assert!(flight.tick(0.016).is_none());
    }

    #[test]
    fn test_jump_delivers_once() {
        let mut flight = CameraFlight::new();
        flight.jump(pose_b());
        assert!(flight.is_flying());
        assert_eq!(flight.tick(0.016).unwrap().eye, pose_b().eye);
        assert!(flight.tick(0.016).is_none());
    }

    #[test]
    fn test_negative_dt_does_not_advance() {
        let mut flight = CameraFlight::new();
        flight.fly(pose_a(), pose_b(), 1.0);
        let p1 = flight.tick(0.25).unwrap();
        let p2 = flight.tick(-1.0).unwrap();
        assert_eq!(p1.eye, p2.eye);
    }

    #[test]
    fn test_preemption_restarts() {
        let mut flight = CameraFlight::new();
        flight.fly(pose_a(), pose_b(), 1.0);
        let _ = flight.tick(0.5);

        flight.fly(pose_b(), pose_a(), 1.0);
        let mut last = None;
        while let Some(pose) = flight.tick(0.1) {
            last = Some(pose);
        }
        assert_eq!(last.unwrap().eye, pose_a().eye);
    }

    #[test]
    fn test_cancel_mid_flight() {
        let mut flight = CameraFlight::new();
        flight.fly(pose_a(), pose_b(), 1.0);
        let _ = flight.tick(0.5);

        let pose = flight.cancel().unwrap();
        assert!(!flight.is_flying());
        // Somewhere strictly between the endpoints.
        assert!((pose.eye - pose_a().eye).length() > 1e-3);
        assert!((pose.eye - pose_b().eye).length() > 1e-3);

        assert!(flight.cancel().is_none());
    }

    #[test]
    fn test_up_stays_normalized() {
        let mut flight = CameraFlight::new();
        let from = CameraPose::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        let to = CameraPose::look_at(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO, Vec3::NEG_Z);
        flight.fly(from, to, 1.0);
        while let Some(pose) = flight.tick(0.07) {
            assert!((pose.up.length() - 1.0).abs() < 1e-4);
        }
    }
}
