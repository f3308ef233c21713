use std::rc::Rc;

use log::debug;
use yew::Reducible;

use crate::config::SCROLL_THRESHOLD;

/// The only mutable state on the page: what the navigation bar needs to style itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
    pub scrolled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavAction {
    ToggleMenu,
    /// A navigation link was followed.
    SelectLink,
    /// Latest vertical scroll offset in pixels.
    Scrolled(f64),
}

impl NavState {
    pub fn apply(self, action: NavAction) -> NavState {
        match action {
            NavAction::ToggleMenu => NavState {
                menu_open: !self.menu_open,
                ..self
            },
            NavAction::SelectLink => NavState {
                menu_open: false,
                ..self
            },
            NavAction::Scrolled(offset) => NavState {
                scrolled: offset > SCROLL_THRESHOLD,
                ..self
            },
        }
    }
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            return self;
        }
        if next.scrolled != self.scrolled {
            debug!("navbar scrolled: {}", next.scrolled);
        }
        if next.menu_open != self.menu_open {
            debug!("mobile menu open: {}", next.menu_open);
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(actions: &[NavAction]) -> NavState {
        actions
            .iter()
            .fold(NavState::default(), |state, action| state.apply(*action))
    }

    #[test]
    fn menu_starts_closed() {
        let state = NavState::default();
        assert!(!state.menu_open);
        assert!(!state.scrolled);
    }

    #[test]
    fn toggle_parity_decides_menu_state() {
        for toggles in 0..7 {
            let state = run(&vec![NavAction::ToggleMenu; toggles]);
            assert_eq!(state.menu_open, toggles % 2 == 1, "after {} toggles", toggles);
        }
    }

    #[test]
    fn selecting_a_link_closes_the_menu() {
        let state = run(&[NavAction::ToggleMenu, NavAction::SelectLink]);
        assert!(!state.menu_open);

        // already closed stays closed
        let state = run(&[NavAction::SelectLink]);
        assert!(!state.menu_open);
    }

    #[test]
    fn scrolled_only_strictly_past_threshold() {
        assert!(!run(&[NavAction::Scrolled(0.0)]).scrolled);
        assert!(!run(&[NavAction::Scrolled(SCROLL_THRESHOLD)]).scrolled);
        assert!(run(&[NavAction::Scrolled(SCROLL_THRESHOLD + 0.5)]).scrolled);
        assert!(run(&[NavAction::Scrolled(2400.0)]).scrolled);
    }

    #[test]
    fn scrolling_back_up_reverts_the_flag() {
        let state = run(&[
            NavAction::Scrolled(300.0),
            NavAction::Scrolled(49.0),
        ]);
        assert!(!state.scrolled);
    }

    #[test]
    fn scroll_and_menu_are_independent() {
        let state = run(&[
            NavAction::ToggleMenu,
            NavAction::Scrolled(120.0),
        ]);
        assert_eq!(state, NavState { menu_open: true, scrolled: true });

        let state = state.apply(NavAction::SelectLink);
        assert_eq!(state, NavState { menu_open: false, scrolled: true });
    }

    #[test]
    fn reducer_keeps_the_same_rc_when_nothing_changes() {
        let state = Rc::new(NavState::default());
        let same = state.clone().reduce(NavAction::Scrolled(10.0));
        assert!(Rc::ptr_eq(&state, &same));

        let changed = state.clone().reduce(NavAction::Scrolled(80.0));
        assert!(!Rc::ptr_eq(&state, &changed));
        assert!(changed.scrolled);
    }
}
