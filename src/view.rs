use crate::slide::Slide;

/// Surface the run loop presents each tick. The concrete binding owns how
/// presentation flags turn into visuals; the controller never sees it.
pub trait View {
    fn present(&mut self, slides: &[Slide], current: usize);
}

/// Binding that reports class-list changes through the log instead of
/// drawing anything.
pub struct ConsoleView {
    last: Vec<String>,
}

impl ConsoleView {
    pub fn new() -> Self {
        Self { last: Vec::new() }
    }
}

impl Default for ConsoleView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for ConsoleView {
    fn present(&mut self, slides: &[Slide], current: usize) {
        let classes: Vec<String> = slides.iter().map(|s| s.classes().join(" ")).collect();
        if self.last.len() != classes.len() {
            self.last = vec![String::new(); classes.len()];
        }

        for (index, class_list) in classes.iter().enumerate() {
            if *class_list != self.last[index] {
                tracing::info!(slide = index, current, classes = %class_list, "slide updated");
            }
        }
        self.last = classes;
    }
}
