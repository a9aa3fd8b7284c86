// Frame driver for the particle field. Each frame ticks, renders, and asks the
// scheduler for the next one; the handle it gets back is what teardown cancels.

use crate::config::FieldConfig;
use crate::field::ParticleField;
use crate::surface::Surface;

/// Id of a pending display-refresh callback.
pub type FrameHandle = i32;

pub trait FrameScheduler {
    /// Arms the next frame. `None` means the host refused.
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running(FrameHandle),
    Stopped,
}

pub struct Animation<S: Surface, F: FrameScheduler> {
    field: ParticleField,
    surface: S,
    scheduler: F,
    state: LoopState,
    last_timestamp: Option<f64>,
}

/// Smallest step a frame integrates. Two callbacks sharing a timestamp still
/// damp the field a little.
pub const MIN_FRAME_STEP: f64 = 0.001;

// Elapsed time in 60 Hz frames, clamped so a long pause integrates as a short step
pub fn frame_delta(last: Option<f64>, now: f64, max_step: f64) -> f64 {
    match last {
        Some(last) => ((now - last) / FieldConfig::FRAME_MS)
            .max(MIN_FRAME_STEP)
            .min(max_step),
        None => 1.0,
    }
}

impl<S: Surface, F: FrameScheduler> Animation<S, F> {
    pub fn new(field: ParticleField, surface: S, scheduler: F) -> Self {
        Animation {
            field,
            surface,
            scheduler,
            state: LoopState::Stopped,
            last_timestamp: None,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state != LoopState::Stopped
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.last_timestamp = None;
        self.schedule_next();
    }

    pub fn on_frame(&mut self, timestamp: f64) {
        if !self.is_running() {
            return;
        }
        let max_step = self.field.config().max_frame_step;
        let dt = frame_delta(self.last_timestamp, timestamp, max_step);
        self.last_timestamp = Some(timestamp);

        self.field.tick(dt);
        self.field.render(&mut self.surface);
        self.schedule_next();
    }

    pub fn teardown(&mut self) {
        if let LoopState::Running(handle) = self.state {
            self.scheduler.cancel_frame(handle);
            log::debug!("cancelled frame {}", handle);
        }
        self.state = LoopState::Stopped;
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.field.resize(width, height);
        self.surface.resize(width, height);
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.field.set_pointer(x, y);
    }

    fn schedule_next(&mut self) {
        self.state = match self.scheduler.request_frame() {
            Some(handle) => LoopState::Running(handle),
            None => {
                log::warn!("frame request refused, particle animation stopped");
                LoopState::Stopped
            }
        };
    }
}
