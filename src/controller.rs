use crate::constants::{DISPLAY_DURATION, TRANSITION_DURATION};
use crate::error::SlideshowError;
use crate::slide::Slide;
use crate::state::SlideshowState;
use crate::transition::Wipe;

/// Timing knobs, in seconds.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub display_time: f32,
    pub transition_duration: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display_time: DISPLAY_DURATION,
            transition_duration: TRANSITION_DURATION,
        }
    }
}

// Repeating autoplay timer.
struct AutoPlay {
    interval: f32,
    elapsed: f32,
}

// One-shot cleanup scheduled by an advance.
struct Cleanup {
    outgoing: usize,
    remaining: f32,
}

/// Drives the deck: advances on the autoplay interval, flips the presentation
/// flags on the outgoing and incoming slides, and keeps transitions from
/// overlapping.
pub struct Controller {
    slides: Vec<Slide>,
    current: usize,
    advances: u64,
    state: SlideshowState,
    config: Config,
    autoplay: Option<AutoPlay>,
    cleanup: Option<Cleanup>,
}

impl Controller {
    /// Build the controller over a fixed deck. Marks slide 0 active and
    /// starts autoplay. An empty deck is rejected and nothing is started.
    pub fn new(slides: Vec<Slide>, config: Config) -> Result<Self, SlideshowError> {
        if slides.is_empty() {
            return Err(SlideshowError::NoSlides);
        }

        let mut controller = Self {
            slides,
            current: 0,
            advances: 0,
            state: SlideshowState::Settled,
            config,
            autoplay: None,
            cleanup: None,
        };
        controller.slides[0].active = true;
        controller.start_auto_play();

        tracing::info!(
            slides = controller.slides.len(),
            display_time = config.display_time,
            "slideshow initialized"
        );
        Ok(controller)
    }

    pub fn current_slide(&self) -> usize {
        self.current
    }

    /// Number of advances begun since construction. Keeps growing on
    /// single-slide decks, where `current_slide` never moves.
    pub fn advances(&self) -> u64 {
        self.advances
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn is_transitioning(&self) -> bool {
        self.state == SlideshowState::Transitioning
    }

    pub fn is_auto_playing(&self) -> bool {
        self.autoplay.is_some()
    }

    /// Advance to the next slide. Calls made while a transition is in flight
    /// are dropped so at most one transition runs at a time.
    pub fn next_slide(&mut self) {
        if self.state == SlideshowState::Transitioning {
            tracing::debug!("advance dropped, transition in flight");
            return;
        }
        self.begin_transition();
    }

    fn begin_transition(&mut self) {
        self.state = SlideshowState::Transitioning;

        let prev = self.current;
        self.current = (self.current + 1) % self.slides.len();
        self.advances += 1;

        // Order matters for single-slide decks, where outgoing and incoming
        // are the same panel: the exiting flag goes on first, then the wipe.
        let outgoing = &mut self.slides[prev];
        outgoing.active = false;
        outgoing.exiting = true;

        let incoming = &mut self.slides[self.current];
        incoming.clear_wipe();
        let wipe = Wipe::resolve(incoming.declared_transition());
        incoming.set_wipe(wipe);
        incoming.active = true;

        self.cleanup = Some(Cleanup {
            outgoing: prev,
            remaining: self.config.transition_duration,
        });
        tracing::debug!(from = prev, to = self.current, wipe = wipe.class(), "transition started");
    }

    /// Finish the in-flight transition: strip the outgoing slide's transient
    /// flags and release the guard. Fired by `tick` when the cleanup timer
    /// expires; tests call it directly. No-op when nothing is pending.
    pub fn complete_transition(&mut self) {
        let Some(cleanup) = self.cleanup.take() else {
            return;
        };

        let outgoing = &mut self.slides[cleanup.outgoing];
        outgoing.exiting = false;
        outgoing.clear_wipe();

        self.state = SlideshowState::Settled;
        tracing::debug!(slide = self.current, "transition complete");
    }

    /// Advance the cooperative clock. The pending cleanup always has the
    /// earlier deadline, so it is expired before the autoplay interval; an
    /// autoplay expiry that lands mid-transition is dropped, not queued.
    pub fn tick(&mut self, dt: f32) {
        if let Some(cleanup) = self.cleanup.as_mut() {
            cleanup.remaining -= dt;
            if cleanup.remaining <= 0.0 {
                self.complete_transition();
            }
        }

        if let Some(autoplay) = self.autoplay.as_mut() {
            autoplay.elapsed += dt;
            if autoplay.elapsed >= autoplay.interval {
                autoplay.elapsed = 0.0;
                self.next_slide();
            }
        }
    }

    /// (Re)start the repeating autoplay timer. Any existing timer is
    /// replaced, so repeated calls never stack ticks.
    pub fn start_auto_play(&mut self) {
        self.autoplay = Some(AutoPlay {
            interval: self.config.display_time,
            elapsed: 0.0,
        });
        tracing::debug!(interval = self.config.display_time, "autoplay started");
    }

    /// Cancel the repeating timer. An in-flight transition's cleanup is left
    /// scheduled; it only clears transient flags and is harmless to fire.
    pub fn stop_auto_play(&mut self) {
        if self.autoplay.take().is_some() {
            tracing::debug!("autoplay stopped");
        }
    }
}
