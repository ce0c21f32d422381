use thiserror::Error;

/// Errors that can occur while setting up the slideshow.
#[derive(Error, Debug)]
pub enum SlideshowError {
    #[error("no slides found")]
    NoSlides,
}
