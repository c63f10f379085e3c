use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use enigo::{Button, Coordinate, Direction, Enigo, Mouse, Settings};
use pinpoint_core::ClickTarget;

/// Drives the OS pointer in logical-pixel coordinates.
pub struct PointerDriver {
    move_duration: Duration,
    move_steps: u32,
}

impl PointerDriver {
    pub fn new(move_duration: Duration, move_steps: u32) -> Self {
        Self {
            move_duration,
            move_steps: move_steps.max(1),
        }
    }

    /// Glide to the target and click the primary button.
    ///
    /// Movement is spread over `move_duration`; instant jumps trip
    /// anti-automation heuristics in some applications.
    pub fn click_at(&self, target: &ClickTarget) -> Result<()> {
        let mut enigo =
            Enigo::new(&Settings::default()).context("Failed to initialize input backend")?;
        let from = enigo
            .location()
            .context("Failed to read pointer location")?;
        let to = (target.x.round() as i32, target.y.round() as i32);

        let pause = self.move_duration / self.move_steps;
        for (x, y) in movement_path(from, to, self.move_steps) {
            enigo
                .move_mouse(x, y, Coordinate::Abs)
                .context("Failed to move pointer")?;
            thread::sleep(pause);
        }

        enigo
            .button(Button::Left, Direction::Click)
            .context("Failed to click")?;
        tracing::debug!("clicked at ({}, {})", to.0, to.1);
        Ok(())
    }
}

/// Linear interpolation from `from` to `to`, landing exactly on `to`.
pub fn movement_path(from: (i32, i32), to: (i32, i32), steps: u32) -> Vec<(i32, i32)> {
    let steps = steps.max(1);
    (1..=steps)
        .map(|step| {
            let t = f64::from(step) / f64::from(steps);
            (
                (f64::from(from.0) + f64::from(to.0 - from.0) * t).round() as i32,
                (f64::from(from.1) + f64::from(to.1 - from.1) * t).round() as i32,
            )
        })
        .collect()
}
