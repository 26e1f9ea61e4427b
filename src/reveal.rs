use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};
use yew::Callback;

/// One-shot scroll reveals: each registered element gets the reveal class the
/// first time enough of it is on screen, then stops being watched. Elements
/// never go back to hidden, so fast scroll direction changes cannot flicker.
pub struct RevealController {
    // None when the observer could not be constructed; registration then
    // reveals elements on the spot instead of failing the page.
    observer: Option<IntersectionObserver>,
    watched: Rc<RefCell<Vec<Element>>>,
    registry: Rc<RefCell<RevealRegistry>>,
    stagger_ms: u32,
    reveal_class: &'static str,
    on_visible: Option<Callback<Element>>,
    _on_intersect: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

#[derive(Clone, PartialEq, Debug)]
pub struct RevealOptions {
    /// Fraction of the element that must be visible before it reveals.
    pub threshold: f64,
    /// Viewport-edge bias passed straight to the observer.
    pub root_margin: &'static str,
    /// Per-element delay multiplier applied by registration order.
    pub stagger_ms: u32,
    /// Class added on reveal; the CSS transition lives on the element itself.
    pub reveal_class: &'static str,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px",
            stagger_ms: 0,
            reveal_class: "visible",
        }
    }
}

impl RevealController {
    pub fn new(options: RevealOptions) -> Self {
        Self::build(options, None)
    }

    /// Same as `new`, plus a callback fired exactly once per element on its
    /// pending -> revealed transition. Stat counters hang off this.
    pub fn with_on_visible(options: RevealOptions, on_visible: Callback<Element>) -> Self {
        Self::build(options, Some(on_visible))
    }

    fn build(options: RevealOptions, on_visible: Option<Callback<Element>>) -> Self {
        let watched: Rc<RefCell<Vec<Element>>> = Rc::new(RefCell::new(Vec::new()));
        let registry = Rc::new(RefCell::new(RevealRegistry::default()));
        let reveal_class = options.reveal_class;

        let callback = {
            let watched = watched.clone();
            let registry = registry.clone();
            let on_visible = on_visible.clone();
            Closure::wrap(Box::new(
                move |entries: Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        if !entry.is_intersecting() {
                            continue;
                        }
                        let target = entry.target();
                        let index = watched.borrow().iter().position(|el| el == &target);
                        let index = match index {
                            Some(index) => index,
                            None => continue,
                        };
                        // The observer delivers an initial entry for elements
                        // already in view at registration; the registry keeps
                        // any duplicate delivery a no-op.
                        if registry.borrow_mut().reveal(index) {
                            let _ = target.class_list().add_1(reveal_class);
                            observer.unobserve(&target);
                            if let Some(on_visible) = &on_visible {
                                on_visible.emit(target);
                            }
                        }
                    }
                },
            )
                as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from(options.threshold));
        init.set_root_margin(options.root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok();

        Self {
            observer,
            watched,
            registry,
            stagger_ms: options.stagger_ms,
            reveal_class,
            on_visible,
            _on_intersect: callback,
        }
    }

    /// Starts watching a batch of elements. Stagger delays continue from the
    /// controller's current registration count, so batches queue up naturally.
    pub fn register<I>(&self, elements: I)
    where
        I: IntoIterator<Item = Element>,
    {
        for element in elements {
            self.watched.borrow_mut().push(element.clone());
            let index = self.registry.borrow_mut().add();
            if self.stagger_ms > 0 {
                if let Some(html) = element.dyn_ref::<HtmlElement>() {
                    let delay = stagger_delay_ms(index, self.stagger_ms);
                    let _ = html
                        .style()
                        .set_property("transition-delay", &format!("{}ms", delay));
                }
            }
            match &self.observer {
                Some(observer) => observer.observe(&element),
                // No observer support: show content up front rather than
                // leaving it stuck in the pre-reveal style.
                None => {
                    if self.registry.borrow_mut().reveal(index) {
                        let _ = element.class_list().add_1(self.reveal_class);
                        if let Some(on_visible) = &self.on_visible {
                            on_visible.emit(element);
                        }
                    }
                }
            }
        }
    }

    /// Registers everything the selector matches; no matches is a no-op.
    pub fn register_selector(&self, selector: &str) {
        let document = match web_sys::window().and_then(|w| w.document()) {
            Some(document) => document,
            None => return,
        };
        let nodes = match document.query_selector_all(selector) {
            Ok(nodes) => nodes,
            Err(_) => return,
        };
        let mut elements = Vec::new();
        for i in 0..nodes.length() {
            if let Some(element) = nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                elements.push(element);
            }
        }
        self.register(elements);
    }

    pub fn pending(&self) -> usize {
        self.registry.borrow().pending()
    }
}

impl Drop for RevealController {
    fn drop(&mut self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
    }
}

fn stagger_delay_ms(index: usize, stagger_ms: u32) -> u32 {
    index as u32 * stagger_ms
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RevealState {
    Pending,
    Revealed,
}

/// Pending/revealed bookkeeping for the controller, kept free of DOM types.
/// Revealed is terminal; there is no way back to Pending.
#[derive(Default)]
pub struct RevealRegistry {
    states: Vec<RevealState>,
}

impl RevealRegistry {
    pub fn add(&mut self) -> usize {
        self.states.push(RevealState::Pending);
        self.states.len() - 1
    }

    /// Returns true only on the first reveal of a known element.
    pub fn reveal(&mut self, index: usize) -> bool {
        match self.states.get_mut(index) {
            Some(state) if *state == RevealState::Pending => {
                *state = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }

    pub fn pending(&self) -> usize {
        self.states
            .iter()
            .filter(|state| **state == RevealState::Pending)
            .count()
    }

    pub fn revealed(&self) -> usize {
        self.states.len() - self.pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_is_one_way_and_fires_once() {
        let mut registry = RevealRegistry::default();
        let index = registry.add();
        assert_eq!(registry.state(index), Some(RevealState::Pending));

        assert!(registry.reveal(index));
        assert_eq!(registry.state(index), Some(RevealState::Revealed));

        // Re-delivered observer entries must not count as a new reveal.
        assert!(!registry.reveal(index));
        assert_eq!(registry.state(index), Some(RevealState::Revealed));
    }

    #[test]
    fn pending_count_drops_as_elements_reveal() {
        let mut registry = RevealRegistry::default();
        let first = registry.add();
        let second = registry.add();
        let third = registry.add();
        assert_eq!(registry.pending(), 3);

        assert!(registry.reveal(second));
        assert_eq!(registry.pending(), 2);
        assert_eq!(registry.revealed(), 1);

        assert!(registry.reveal(first));
        assert!(registry.reveal(third));
        assert_eq!(registry.pending(), 0);
        assert_eq!(registry.revealed(), 3);
    }

    #[test]
    fn unknown_index_never_reveals() {
        let mut registry = RevealRegistry::default();
        assert!(!registry.reveal(0));
        let index = registry.add();
        assert!(!registry.reveal(index + 1));
        assert_eq!(registry.pending(), 1);
    }

    #[test]
    fn stagger_scales_with_registration_order() {
        assert_eq!(stagger_delay_ms(0, 100), 0);
        assert_eq!(stagger_delay_ms(1, 100), 100);
        assert_eq!(stagger_delay_ms(7, 100), 700);
        assert_eq!(stagger_delay_ms(3, 0), 0);
    }

    #[test]
    fn default_options_match_site_wide_reveal_config() {
        let options = RevealOptions::default();
        assert!((options.threshold - 0.1).abs() < f64::EPSILON);
        assert_eq!(options.root_margin, "0px 0px -50px 0px");
        assert_eq!(options.stagger_ms, 0);
        assert_eq!(options.reveal_class, "visible");
    }
}
