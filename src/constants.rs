pub const FPS: u32 = 60;                      // Ticks per second of the cooperative clock

pub const DISPLAY_DURATION: f32 = 5.0;        // Time each slide is shown prominently (seconds)
pub const TRANSITION_DURATION: f32 = 0.6;     // Duration of a wipe transition (seconds)

pub const TOTAL_SLIDES: usize = 7;            // Deck size of the stock signage page (informational)
