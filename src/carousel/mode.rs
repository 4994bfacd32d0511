use std::rc::Rc;

use yew::functional::Reducible;

use crate::carousel::navigator::SlideNavigator;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Grid,
    Slider,
}

/// What a call to [`ModeController::evaluate`] actually did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeChange {
    Unchanged,
    SliderBuilt { slides: usize },
    SliderRemoved,
    // Narrow viewport with nothing to slide: grid hidden, no slider.
    GridHidden,
    GridRestored,
}

/// Requests the page can make of the music carousel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselAction {
    Resize(f64),
    GoTo(isize),
    Next,
    Previous,
}

/// Decides between grid and slider presentation and owns the slider while it
/// exists. At most one [`SlideNavigator`] is alive at a time.
#[derive(Clone, Debug, PartialEq)]
pub struct ModeController {
    breakpoint: f64,
    card_count: usize,
    grid_hidden: bool,
    slider: Option<SlideNavigator>,
}

impl ModeController {
    pub fn new(breakpoint: f64, card_count: usize) -> Self {
        Self {
            breakpoint,
            card_count,
            grid_hidden: false,
            slider: None,
        }
    }

    pub fn mode(&self) -> Mode {
        if self.slider.is_some() {
            Mode::Slider
        } else {
            Mode::Grid
        }
    }

    pub fn slider(&self) -> Option<&SlideNavigator> {
        self.slider.as_ref()
    }

    pub fn grid_hidden(&self) -> bool {
        self.grid_hidden
    }

    /// Brings the presentation in line with `viewport_width`. Safe to call on
    /// every resize: repeated calls with the same side of the breakpoint do
    /// nothing.
    pub fn evaluate(&mut self, viewport_width: f64) -> ModeChange {
        if viewport_width <= self.breakpoint {
            if self.slider.is_some() || self.grid_hidden {
                return ModeChange::Unchanged;
            }

            self.grid_hidden = true;
            if self.card_count == 0 {
                log::info!("viewport {}px is narrow but there are no cards to slide", viewport_width);
                return ModeChange::GridHidden;
            }

            self.slider = Some(SlideNavigator::new(self.card_count));
            log::info!("viewport {}px: music slider built with {} slides", viewport_width, self.card_count);
            ModeChange::SliderBuilt { slides: self.card_count }
        } else if self.slider.take().is_some() {
            self.grid_hidden = false;
            log::info!("viewport {}px: music slider removed, grid restored", viewport_width);
            ModeChange::SliderRemoved
        } else if self.grid_hidden {
            self.grid_hidden = false;
            log::info!("viewport {}px: grid restored", viewport_width);
            ModeChange::GridRestored
        } else {
            ModeChange::Unchanged
        }
    }

    /// Applies an action, returning whether anything needs re-rendering.
    /// Navigation requests are forwarded to the slider and dropped in grid mode.
    pub fn apply(&mut self, action: CarouselAction) -> bool {
        match action {
            CarouselAction::Resize(width) => self.evaluate(width) != ModeChange::Unchanged,
            CarouselAction::GoTo(index) => self.slider.as_mut().and_then(|s| s.go_to(index)).is_some(),
            CarouselAction::Next => self.slider.as_mut().and_then(SlideNavigator::next).is_some(),
            CarouselAction::Previous => self.slider.as_mut().and_then(SlideNavigator::previous).is_some(),
        }
    }
}

impl Reducible for ModeController {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}
