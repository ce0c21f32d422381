/// The seven wipe effects the style layer knows how to render.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Wipe {
    DiagonalLeft,
    VerticalDown,
    DiagonalCorner,
    Circular,
    Shutter,
    Squeeze,
    FadeVertical,
}

impl Wipe {
    /// Resolve a slide's declared transition name to a wipe effect.
    /// Total: unknown or empty names fall back to the diagonal-left wipe.
    pub fn resolve(name: &str) -> Self {
        match name {
            "diagonal-left" => Wipe::DiagonalLeft,
            "vertical-down" => Wipe::VerticalDown,
            "diagonal-corner" => Wipe::DiagonalCorner,
            "circular" => Wipe::Circular,
            "shutter" => Wipe::Shutter,
            "squeeze" => Wipe::Squeeze,
            "fade-vertical" => Wipe::FadeVertical,
            _ => Wipe::DiagonalLeft,
        }
    }

    /// Class the presentation binding attaches to the incoming slide.
    pub fn class(&self) -> &'static str {
        match self {
            Wipe::DiagonalLeft => "wipe-diagonal-left",
            Wipe::VerticalDown => "wipe-vertical-down",
            Wipe::DiagonalCorner => "wipe-diagonal-corner",
            Wipe::Circular => "wipe-circular",
            Wipe::Shutter => "wipe-shutter",
            Wipe::Squeeze => "wipe-squeeze",
            Wipe::FadeVertical => "wipe-fade-vertical",
        }
    }
}
