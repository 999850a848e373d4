//! Walks through every screen once behind a split curtain.
//!
//! Run with `RUST_LOG=debug cargo run --example curtain_demo` to see each
//! transition step.

use std::ops::ControlFlow;

use curtain::prelude::*;

/// Pretends each load or unload takes a fixed number of frames
struct FrameLoader {
    frames_per_operation: u32,
}

struct PendingOperation {
    resource: String,
    frames_left: std::cell::Cell<u32>,
}

impl ContentLoader for FrameLoader {
    type Operation = PendingOperation;

    fn load(&mut self, resource: &str) -> Self::Operation {
        PendingOperation {
            resource: resource.to_string(),
            frames_left: std::cell::Cell::new(self.frames_per_operation),
        }
    }

    fn unload(&mut self, resource: &str) -> Self::Operation {
        self.load(resource)
    }

    fn is_done(&mut self, operation: &Self::Operation) -> bool {
        let left = operation.frames_left.get().saturating_sub(1);
        operation.frames_left.set(left);
        if left == 0 {
            log::debug!("'{}' finished", operation.resource);
        }
        left == 0
    }

    fn set_active(&mut self, resource: &str) {
        log::info!("Presenting '{}'", resource);
    }
}

struct InputBlocker;

impl InteractionSurface for InputBlocker {
    fn set_interactable(&mut self, interactable: bool) {
        log::info!("Input {}", if interactable { "enabled" } else { "blocked" });
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let registry = ScreenRegistry::new([
        ("main_menu", "MainMenuScreen"),
        ("game", "GameScreen"),
        ("results", "ResultsScreen"),
    ])?;
    let rig = CurtainRig::new(split_curtain(), CurtainConfig::new(0.75));
    let mut sequencer = TransitionSequencer::new(
        registry,
        rig,
        FrameLoader {
            frames_per_operation: 10,
        },
        InputBlocker,
        SequencerConfig::default(),
    );
    sequencer.start();

    let mut visited = 0;
    App::new()
        .on_update(move |dt| {
            let flags = sequencer.update(dt);
            if flags.contains(CurtainFlags::UVS_CHANGED) {
                let panel = &sequencer.rig().panels()[0];
                log::trace!("Left panel top-left u = {:.3}", panel.uvs()[1].u);
            }
            for event in sequencer.drain_events() {
                log::info!("{:?}", event);
            }

            if sequencer.is_transitioning() {
                return ControlFlow::Continue(());
            }
            visited += 1;
            if visited >= sequencer.registry().screens().count() {
                return ControlFlow::Break(());
            }
            sequencer.next();
            ControlFlow::Continue(())
        })
        .run()?;

    Ok(())
}
