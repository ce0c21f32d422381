use crate::transition::Wipe;

/// One panel of the deck. The declared transition is set at construction and
/// never changes; the presentation flags are driven by the controller and
/// read by the presentation binding.
pub struct Slide {
    declared_transition: String,

    pub active: bool,
    pub exiting: bool,

    wipe: Option<Wipe>,
}

impl Slide {
    pub fn new(declared_transition: impl Into<String>) -> Self {
        Self {
            declared_transition: declared_transition.into(),
            active: false,
            exiting: false,
            wipe: None,
        }
    }

    pub fn declared_transition(&self) -> &str {
        &self.declared_transition
    }

    pub fn wipe(&self) -> Option<Wipe> {
        self.wipe
    }

    pub fn set_wipe(&mut self, wipe: Wipe) {
        self.wipe = Some(wipe);
    }

    /// Remove whatever wipe flag is set. Safe to call when none is.
    pub fn clear_wipe(&mut self) {
        self.wipe = None;
    }

    /// Class list the presentation binding would attach to this panel.
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::new();
        if self.active {
            classes.push("active");
        }
        if self.exiting {
            classes.push("exiting");
        }
        if let Some(wipe) = self.wipe {
            classes.push(wipe.class());
        }
        classes
    }
}
