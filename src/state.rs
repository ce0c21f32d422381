#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SlideshowState {
    Settled,       // Current slide is displayed, nothing in flight
    Transitioning, // Outgoing slide is exiting while the incoming slide wipes in
}
