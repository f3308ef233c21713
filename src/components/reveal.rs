use log::{debug, warn};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

/// Where an element comes from before its entrance animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    /// Rise into place from `px` pixels below.
    FadeUp(f64),
    /// Slide in from `px` pixels to the left.
    FromLeft(f64),
    /// Slide in from `px` pixels to the right.
    FromRight(f64),
    /// Grow from `scale` to full size.
    Zoom(f64),
}

impl Motion {
    pub fn initial_transform(self) -> String {
        match self {
            Motion::FadeUp(px) => format!("translate3d(0, {}px, 0)", px),
            Motion::FromLeft(px) => format!("translate3d(-{}px, 0, 0)", px),
            Motion::FromRight(px) => format!("translate3d({}px, 0, 0)", px),
            Motion::Zoom(scale) => format!("scale({})", scale),
        }
    }

    pub fn style(self, duration: f64, delay: f64) -> String {
        format!(
            "--reveal-from: {}; transition-duration: {}s; transition-delay: {}s;",
            self.initial_transform(),
            duration,
            delay
        )
    }
}

/// Delay for the `index`th card of a list so cards appear one after another.
pub fn stagger(index: usize) -> f64 {
    index as f64 / 10.0
}

/// One-shot visibility flag: once revealed it never hides again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    pub revealed: bool,
}

impl RevealState {
    pub fn observe(self, intersecting: bool) -> RevealState {
        RevealState {
            revealed: self.revealed || intersecting,
        }
    }
}

/// Observes `node` and flips to revealed the first time it scrolls into view.
#[hook]
pub fn use_reveal() -> (NodeRef, bool) {
    let node = use_node_ref();
    let state = use_state_eq(RevealState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let destructor: Box<dyn FnOnce()> = match node.cast::<Element>() {
                    Some(element) => observe_once(element, state),
                    None => Box::new(|| ()),
                };
                destructor
            },
            node.clone(),
        );
    }

    let revealed = state.revealed;
    (node, revealed)
}

fn observe_once(element: Element, state: UseStateHandle<RevealState>) -> Box<dyn FnOnce()> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new({
        let state = state.clone();
        move |entries: Array, observer: IntersectionObserver| {
            let intersecting = entries.iter().any(|entry| {
                entry
                    .dyn_into::<IntersectionObserverEntry>()
                    .map(|entry| entry.is_intersecting())
                    .unwrap_or(false)
            });
            let next = (*state).observe(intersecting);
            if next.revealed {
                debug!("section revealed");
                observer.disconnect();
                state.set(next);
            }
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(&element);
            Box::new(move || {
                observer.disconnect();
                drop(callback);
            })
        }
        Err(err) => {
            warn!("IntersectionObserver unavailable, showing content without animation: {:?}", err);
            state.set(state.observe(true));
            Box::new(|| ())
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub motion: Motion,
    #[prop_or(0.8)]
    pub duration: f64,
    #[prop_or_default]
    pub delay: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let (node, revealed) = use_reveal();

    html! {
        <div
            ref={node}
            class={classes!("reveal", revealed.then(|| "revealed"), props.class.clone())}
            style={props.motion.style(props.duration, props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_is_one_shot() {
        let state = RevealState::default();
        assert!(!state.revealed);

        let state = state.observe(false);
        assert!(!state.revealed);

        let state = state.observe(true).observe(false).observe(false);
        assert!(state.revealed);
    }

    #[test]
    fn motions_describe_their_starting_point() {
        assert_eq!(Motion::FadeUp(30.0).initial_transform(), "translate3d(0, 30px, 0)");
        assert_eq!(Motion::FromLeft(50.0).initial_transform(), "translate3d(-50px, 0, 0)");
        assert_eq!(Motion::FromRight(50.0).initial_transform(), "translate3d(50px, 0, 0)");
        assert_eq!(Motion::Zoom(0.9).initial_transform(), "scale(0.9)");
    }

    #[test]
    fn style_carries_duration_and_delay() {
        let style = Motion::Zoom(0.95).style(0.8, stagger(2));
        assert!(style.contains("--reveal-from: scale(0.95);"));
        assert!(style.contains("transition-duration: 0.8s;"));
        assert!(style.contains("transition-delay: 0.2s;"));
    }

    #[test]
    fn stagger_grows_by_a_tenth_per_card() {
        assert_eq!(stagger(0), 0.0);
        assert_eq!(stagger(1), 0.1);
        assert_eq!(stagger(3), 0.3);
    }
}
