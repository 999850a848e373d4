pub mod animation;
pub mod curtain;
pub mod mesh;
pub mod transition;

use std::ops::ControlFlow;
use std::time::{Duration, Instant};

use calloop::timer::{TimeoutAction, Timer};
use calloop::EventLoop;
use thiserror::Error;

pub mod prelude {
    pub use crate::animation::{PanelAnimator, PanelState, QuadMesh, SlideDirection, Uv, WipeProfile};
    pub use crate::curtain::{CurtainConfig, CurtainFlags, CurtainRig, DemoInput, PanelSurface};
    pub use crate::mesh::{split_curtain, Quad};
    pub use crate::transition::{
        ContentLoader, InteractionSurface, Screen, ScreenRegistry, SequencerConfig,
        TransitionEvent, TransitionSequencer,
    };
    pub use crate::{App, AppConfig};
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Event loop error: {0}")]
    EventLoop(#[from] calloop::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub struct AppConfig {
    /// Time between two frames of the step loop
    pub frame_interval: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(16),
        }
    }
}

/// A callback that gets called once per frame with the elapsed time in seconds.
/// Return `ControlFlow::Break(())` to stop the loop.
pub type UpdateCallback = Box<dyn FnMut(f32) -> ControlFlow<()>>;

/// Cooperative step loop driving curtains and transitions.
///
/// Every frame the update callback receives the real time elapsed since the
/// previous frame. All animation and sequencing happens inside that callback,
/// on the loop's thread.
pub struct App {
    config: AppConfig,
    on_update: Option<UpdateCallback>,
}

struct LoopState {
    on_update: UpdateCallback,
    last_frame: Instant,
    frames: u64,
}

impl App {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            on_update: None,
        }
    }

    pub fn frame_interval(mut self, interval: Duration) -> Self {
        self.config.frame_interval = interval;
        self
    }

    /// Set the per-frame callback.
    ///
    /// # Example
    /// ```ignore
    /// let mut sequencer = TransitionSequencer::new(registry, rig, loader, blocker, config);
    /// sequencer.start();
    ///
    /// App::new()
    ///     .on_update(move |dt| {
    ///         sequencer.update(dt);
    ///         if sequencer.is_transitioning() {
    ///             ControlFlow::Continue(())
    ///         } else {
    ///             ControlFlow::Break(())
    ///         }
    ///     })
    ///     .run()?;
    /// ```
    pub fn on_update<F: FnMut(f32) -> ControlFlow<()> + 'static>(mut self, callback: F) -> Self {
        self.on_update = Some(Box::new(callback));
        self
    }

    /// Run until the update callback breaks
    pub fn run(self) -> Result<()> {
        let Some(on_update) = self.on_update else {
            log::warn!("No update callback set, nothing to run");
            return Ok(());
        };

        let mut event_loop: EventLoop<LoopState> = EventLoop::try_new()?;
        let signal = event_loop.get_signal();
        let interval = self.config.frame_interval;

        event_loop
            .handle()
            .insert_source(Timer::from_duration(interval), move |_, _, state| {
                let now = Instant::now();
                let dt = now.duration_since(state.last_frame).as_secs_f32();
                state.last_frame = now;
                state.frames += 1;

                if (state.on_update)(dt).is_break() {
                    signal.stop();
                    return TimeoutAction::Drop;
                }
                TimeoutAction::ToDuration(interval)
            })
            .map_err(|e| e.error)?;

        let mut state = LoopState {
            on_update,
            last_frame: Instant::now(),
            frames: 0,
        };

        log::info!("Starting step loop, frame interval {:?}", interval);
        event_loop.run(Some(interval), &mut state, |_| {})?;
        log::info!("Step loop stopped after {} frames", state.frames);
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_run_without_callback_returns() {
        assert!(App::new().run().is_ok());
    }

    #[test]
    fn test_run_stops_on_break() {
        let frames = Rc::new(Cell::new(0));
        let counter = frames.clone();
        App::new()
            .frame_interval(Duration::from_millis(1))
            .on_update(move |dt| {
                assert!(dt >= 0.0);
                counter.set(counter.get() + 1);
                if counter.get() >= 3 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            })
            .run()
            .unwrap();
        assert_eq!(frames.get(), 3);
    }
}
