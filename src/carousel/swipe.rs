use crate::carousel::mode::CarouselAction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    // Finger moved left: show the next slide.
    Forward,
    Backward,
}

impl From<SwipeDirection> for CarouselAction {
    fn from(direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::Forward => CarouselAction::Next,
            SwipeDirection::Backward => CarouselAction::Previous,
        }
    }
}

/// Start and end screen X of one touch interaction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeGesture {
    pub start_x: f64,
    pub end_x: f64,
}

impl SwipeGesture {
    /// Any horizontal movement counts; there is no minimum distance.
    pub fn direction(&self) -> Option<SwipeDirection> {
        if self.end_x < self.start_x {
            Some(SwipeDirection::Forward)
        } else if self.end_x > self.start_x {
            Some(SwipeDirection::Backward)
        } else {
            None
        }
    }
}

/// Remembers where the last touch began until it ends.
#[derive(Clone, Copy, Debug, Default)]
pub struct SwipeTracker {
    start_x: f64,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f64) {
        self.start_x = x;
    }

    pub fn finish(&mut self, x: f64) -> SwipeGesture {
        SwipeGesture { start_x: self.start_x, end_x: x }
    }
}
