/// Current slide of the music slider plus the one primitive that moves it.
///
/// Only `go_to` writes `current`; `next` and `previous` are thin wrappers
/// around it. Rendering reads `track_transform` and `is_active` afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideNavigator {
    current: usize,
    count: usize,
}

impl SlideNavigator {
    pub fn new(count: usize) -> Self {
        Self { current: 0, count }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Moves to `requested`, wrapping below zero to the last slide and past
    /// the end to the first. Returns the slide that is now showing, or `None`
    /// when there are no slides at all.
    pub fn go_to(&mut self, requested: isize) -> Option<usize> {
        if self.count == 0 {
            return None;
        }

        let index = if requested < 0 {
            self.count - 1
        } else if requested as usize >= self.count {
            0
        } else {
            requested as usize
        };

        self.current = index;
        log::debug!("slider moved to slide {} of {}", index + 1, self.count);
        Some(index)
    }

    pub fn next(&mut self) -> Option<usize> {
        self.go_to(self.current as isize + 1)
    }

    pub fn previous(&mut self) -> Option<usize> {
        self.go_to(self.current as isize - 1)
    }

    /// CSS transform for the slide track, one container width per slide.
    pub fn track_transform(&self) -> String {
        format!("translateX(-{}%)", self.current * 100)
    }

    pub fn is_active(&self, dot: usize) -> bool {
        self.count > 0 && dot == self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_slide() {
        let nav = SlideNavigator::new(4);
        assert_eq!(nav.current(), 0);
        assert_eq!(nav.track_transform(), "translateX(-0%)");
        assert!(nav.is_active(0));
    }

    #[test]
    fn in_range_requests_land_exactly() {
        let mut nav = SlideNavigator::new(4);
        for i in 0..4 {
            assert_eq!(nav.go_to(i), Some(i as usize));
            assert_eq!(nav.current(), i as usize);
        }
    }

    #[test]
    fn one_step_out_of_range_wraps_like_modulo() {
        let mut nav = SlideNavigator::new(4);
        assert_eq!(nav.go_to(-1), Some(3));
        assert_eq!(nav.go_to(4), Some(0));
    }

    #[test]
    fn far_out_of_range_snaps_to_the_ends() {
        let mut nav = SlideNavigator::new(4);
        assert_eq!(nav.go_to(-7), Some(3));
        assert_eq!(nav.go_to(11), Some(0));
    }

    #[test]
    fn previous_from_first_then_cycle_forward() {
        let mut nav = SlideNavigator::new(4);
        assert_eq!(nav.previous(), Some(3));

        let seen: Vec<usize> = (0..4).filter_map(|_| nav.next()).collect();
        assert_eq!(seen, vec![0, 1, 2, 3]);
        assert_eq!(nav.next(), Some(0));
    }

    #[test]
    fn exactly_one_dot_is_active() {
        let mut nav = SlideNavigator::new(5);
        nav.go_to(2);
        let active: Vec<usize> = (0..5).filter(|&d| nav.is_active(d)).collect();
        assert_eq!(active, vec![2]);
        assert_eq!(nav.track_transform(), "translateX(-200%)");
    }

    #[test]
    fn revisiting_the_same_slide_still_reports_it() {
        let mut nav = SlideNavigator::new(3);
        nav.go_to(1);
        assert_eq!(nav.go_to(1), Some(1));
    }

    #[test]
    fn empty_slider_ignores_navigation() {
        let mut nav = SlideNavigator::new(0);
        assert_eq!(nav.go_to(2), None);
        assert_eq!(nav.next(), None);
        assert_eq!(nav.previous(), None);
        assert_eq!(nav.current(), 0);
        assert!(!nav.is_active(0));
    }
}
