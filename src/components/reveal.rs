use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Fraction of an element that must be on screen before it reveals.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// One-shot latch behind every reveal-on-view transition. Once fired it
/// never goes back, no matter where the element scrolls afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealLatch {
    Unobserved,
    Observing,
    Fired,
}

impl RevealLatch {
    pub fn new() -> Self {
        RevealLatch::Unobserved
    }

    /// Observation has started for the target element.
    pub fn observe(&mut self) {
        if *self == RevealLatch::Unobserved {
            *self = RevealLatch::Observing;
        }
    }

    /// Feed an intersection ratio. Returns true exactly once, on the
    /// transition into `Fired`.
    pub fn on_intersect(&mut self, ratio: f64, threshold: f64) -> bool {
        if *self == RevealLatch::Observing && ratio >= threshold {
            *self = RevealLatch::Fired;
            true
        } else {
            false
        }
    }

    pub fn is_visible(&self) -> bool {
        *self == RevealLatch::Fired
    }
}

/// Whatever is watching the element on the latch's behalf. Released once,
/// either on first fire or when the subscription is dropped.
pub trait ObserverHandle {
    fn release(&self);
}

/// Couples a [`RevealLatch`] to the observation backing it. The handle is
/// released exactly once: on the firing transition, or on `Drop` for
/// elements that never came on screen.
pub struct RevealSubscription<H: ObserverHandle> {
    latch: RevealLatch,
    handle: Option<H>,
}

impl<H: ObserverHandle> RevealSubscription<H> {
    pub fn new(handle: H) -> Self {
        let mut latch = RevealLatch::new();
        latch.observe();
        RevealSubscription {
            latch,
            handle: Some(handle),
        }
    }

    /// Forwards the ratio to the latch; on the firing transition the
    /// underlying observation is released as well.
    pub fn on_intersect(&mut self, ratio: f64, threshold: f64) -> bool {
        let fired = self.latch.on_intersect(ratio, threshold);
        if fired {
            self.release();
        }
        fired
    }

    pub fn is_visible(&self) -> bool {
        self.latch.is_visible()
    }

    fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.release();
        }
    }
}

impl<H: ObserverHandle> Drop for RevealSubscription<H> {
    fn drop(&mut self) {
        self.release();
    }
}

/// A live `IntersectionObserver` watching a single element.
struct DomObserver {
    observer: IntersectionObserver,
}

impl ObserverHandle for DomObserver {
    fn release(&self) {
        self.observer.disconnect();
    }
}

/// Observes the returned node and flips the boolean to true the first time
/// at least `threshold` of it is on screen, then stops observing. If the
/// observer cannot be constructed the element simply never reveals.
#[hook]
pub fn use_reveal(threshold: f64) -> (NodeRef, bool) {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let mut teardown: Box<dyn FnOnce()> = Box::new(|| {});

                if let Some(element) = node.cast::<Element>() {
                    let subscription: Rc<RefCell<Option<RevealSubscription<DomObserver>>>> =
                        Rc::new(RefCell::new(None));

                    let callback = {
                        let subscription = subscription.clone();
                        Closure::wrap(Box::new(
                            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                                let Ok(entry) =
                                    entries.get(0).dyn_into::<IntersectionObserverEntry>()
                                else {
                                    return;
                                };
                                // At the crossing the reported ratio can land just
                                // under the configured threshold.
                                let ratio = if entry.is_intersecting() {
                                    entry.intersection_ratio().max(threshold)
                                } else {
                                    entry.intersection_ratio()
                                };
                                if let Some(sub) = subscription.borrow_mut().as_mut() {
                                    if sub.on_intersect(ratio, threshold) {
                                        visible.set(true);
                                    }
                                }
                            },
                        )
                            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>)
                    };

                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(threshold));

                    let observer = IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    );
                    match observer {
                        Ok(observer) => {
                            observer.observe(&element);
                            *subscription.borrow_mut() =
                                Some(RevealSubscription::new(DomObserver { observer }));
                            teardown = Box::new(move || {
                                // Covers elements that never came on screen;
                                // after firing this is a no-op.
                                subscription.borrow_mut().take();
                                drop(callback);
                            });
                        }
                        Err(_) => {
                            log::warn!("intersection observer unavailable, content stays hidden");
                            drop(callback);
                        }
                    }
                }

                move || teardown()
            },
            (),
        );
    }

    (node, *visible)
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub children: Children,
    /// Extra transition delay used to stagger neighbouring elements.
    #[prop_or(0)]
    pub delay_ms: u32,
}

/// Wrapper that fades and slides its children in the first time they
/// scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let (node, visible) = use_reveal(DEFAULT_THRESHOLD);

    html! {
        <div
            ref={node}
            class={classes!("reveal", visible.then_some("revealed"))}
            style={format!("transition-delay: {}ms;", props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Clone)]
    struct CountingObserver {
        released: Rc<Cell<u32>>,
    }

    impl CountingObserver {
        fn new() -> Self {
            CountingObserver {
                released: Rc::new(Cell::new(0)),
            }
        }
    }

    impl ObserverHandle for CountingObserver {
        fn release(&self) {
            self.released.set(self.released.get() + 1);
        }
    }

    #[test]
    fn starts_hidden() {
        let mut latch = RevealLatch::new();
        assert!(!latch.is_visible());
        latch.observe();
        assert!(!latch.is_visible());
    }

    #[test]
    fn fires_once_at_threshold_and_latches() {
        let mut latch = RevealLatch::new();
        latch.observe();

        assert!(!latch.on_intersect(0.05, 0.1));
        assert!(!latch.is_visible());

        assert!(latch.on_intersect(0.15, 0.1));
        assert!(latch.is_visible());

        // Scrolling away never unfires the latch.
        assert!(!latch.on_intersect(0.0, 0.1));
        assert!(latch.is_visible());

        // And coming back never fires it a second time.
        assert!(!latch.on_intersect(0.9, 0.1));
        assert!(latch.is_visible());
    }

    #[test]
    fn never_intersecting_element_stays_hidden() {
        let mut latch = RevealLatch::new();
        latch.observe();
        for _ in 0..100 {
            assert!(!latch.on_intersect(0.0, 0.1));
        }
        assert!(!latch.is_visible());
    }

    #[test]
    fn intersection_before_observe_is_ignored() {
        let mut latch = RevealLatch::new();
        assert!(!latch.on_intersect(1.0, 0.1));
        assert!(!latch.is_visible());
    }

    #[test]
    fn exact_threshold_fires() {
        let mut latch = RevealLatch::new();
        latch.observe();
        assert!(latch.on_intersect(0.1, 0.1));
    }

    #[test]
    fn dropping_unrevealed_subscription_releases_observer_once() {
        let handle = CountingObserver::new();
        let released = handle.released.clone();

        let mut sub = RevealSubscription::new(handle);
        assert!(!sub.on_intersect(0.0, 0.1));
        assert!(!sub.is_visible());
        assert_eq!(released.get(), 0);

        drop(sub);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn firing_releases_observer_and_drop_does_not_release_again() {
        let handle = CountingObserver::new();
        let released = handle.released.clone();

        let mut sub = RevealSubscription::new(handle);
        assert!(sub.on_intersect(0.5, 0.1));
        assert!(sub.is_visible());
        assert_eq!(released.get(), 1);

        // Late observer callbacks after the fire change nothing.
        assert!(!sub.on_intersect(0.9, 0.1));
        assert_eq!(released.get(), 1);

        drop(sub);
        assert_eq!(released.get(), 1);
    }
}
