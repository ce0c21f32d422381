use std::thread;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::filter::EnvFilter;

mod constants;
mod controller;
mod error;
mod slide;
mod state;
mod transition;
mod view;

use crate::constants::{FPS, TOTAL_SLIDES};
use crate::controller::{Config, Controller};
use crate::slide::Slide;
use crate::view::{ConsoleView, View};

// The deck the stock signage page ships with, in display order.
const DEFAULT_DECK: [&str; TOTAL_SLIDES] = [
    "diagonal-left",
    "vertical-down",
    "diagonal-corner",
    "circular",
    "shutter",
    "squeeze",
    "fade-vertical",
];

/// Digital signage slideshow controller with wipe transitions.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Transition name for each slide, in deck order. Defaults to the
    /// built-in seven-slide signage deck.
    transitions: Vec<String>,

    /// Time each slide stays on screen, in milliseconds
    #[arg(long, default_value_t = 5000)]
    display_time_ms: u64,

    /// Wipe transition duration, in milliseconds
    #[arg(long, default_value_t = 600)]
    transition_ms: u64,

    /// Full loops through the deck before exiting (0 = run until interrupted)
    #[arg(long, default_value_t = 1)]
    cycles: u64,

    /// Tick rate of the cooperative clock
    #[arg(long, default_value_t = FPS, value_parser = clap::value_parser!(u32).range(1..))]
    fps: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    let names: Vec<String> = if args.transitions.is_empty() {
        DEFAULT_DECK.iter().map(|s| s.to_string()).collect()
    } else {
        args.transitions
    };
    let slides: Vec<Slide> = names.into_iter().map(Slide::new).collect();

    let config = Config {
        display_time: args.display_time_ms as f32 / 1000.0,
        transition_duration: args.transition_ms as f32 / 1000.0,
    };

    let mut controller = match Controller::new(slides, config) {
        Ok(controller) => controller,
        Err(e) => {
            tracing::error!("{e}");
            return Err(e.into());
        }
    };

    let mut view = ConsoleView::new();
    view.present(controller.slides(), controller.current_slide());

    let dt = 1.0 / args.fps as f32;
    let frame = Duration::from_secs_f32(dt);
    let deck_len = controller.slides().len() as u64;

    while controller.is_auto_playing() {
        thread::sleep(frame);

        controller.tick(dt);
        view.present(controller.slides(), controller.current_slide());

        // One full loop through the deck is deck_len advances. Counting
        // advances instead of index wraps keeps single-slide decks finite.
        if args.cycles > 0 && controller.advances() >= deck_len * args.cycles {
            controller.stop_auto_play();
        }
    }

    // Let the last wipe finish before exiting.
    while controller.is_transitioning() {
        thread::sleep(frame);
        controller.tick(dt);
        view.present(controller.slides(), controller.current_slide());
    }

    Ok(())
}
