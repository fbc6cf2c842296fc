use std::cell::RefCell;
use std::rc::Rc;

/// Whether the page body is currently allowed to scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollPolicy {
    Allowed,
    Locked,
}

/// Whatever actually carries the scroll policy. The real one is the
/// document body; tests substitute a recording host.
pub trait ScrollHost {
    fn apply(&self, policy: ScrollPolicy);
}

/// Host backed by `document.body.style.overflow`.
pub struct DomBody;

impl ScrollHost for DomBody {
    fn apply(&self, policy: ScrollPolicy) {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        // Missing body (e.g. before the document is ready) degrades to a no-op.
        if let Some(body) = body {
            let style = body.style();
            let result = match policy {
                ScrollPolicy::Locked => style.set_property("overflow", "hidden"),
                ScrollPolicy::Allowed => style.remove_property("overflow").map(|_| ()),
            };
            if result.is_err() {
                log::warn!("failed to update body scroll policy");
            }
        }
    }
}

struct GateInner {
    holds: u32,
    host: Box<dyn ScrollHost>,
}

/// Shared ownership of the global scroll policy. The policy is `Locked`
/// while at least one [`ScrollHold`] is alive and `Allowed` otherwise;
/// acquiring while already locked and releasing while already unlocked
/// touch the host at most once per actual transition.
#[derive(Clone)]
pub struct ScrollGate {
    inner: Rc<RefCell<GateInner>>,
}

impl ScrollGate {
    pub fn new(host: impl ScrollHost + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(GateInner {
                holds: 0,
                host: Box::new(host),
            })),
        }
    }

    /// The gate owning the real document body. One per page.
    pub fn page() -> Self {
        thread_local! {
            static PAGE: ScrollGate = ScrollGate::new(DomBody);
        }
        PAGE.with(|gate| gate.clone())
    }

    /// Keeps the page locked for as long as the returned hold is alive.
    pub fn acquire(&self) -> ScrollHold {
        {
            let mut inner = self.inner.borrow_mut();
            inner.holds += 1;
            if inner.holds == 1 {
                inner.host.apply(ScrollPolicy::Locked);
            }
        }
        ScrollHold {
            gate: self.clone(),
        }
    }

    pub fn policy(&self) -> ScrollPolicy {
        if self.inner.borrow().holds > 0 {
            ScrollPolicy::Locked
        } else {
            ScrollPolicy::Allowed
        }
    }

    fn release(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.holds = inner.holds.saturating_sub(1);
        if inner.holds == 0 {
            inner.host.apply(ScrollPolicy::Allowed);
        }
    }
}

/// Scoped hold on the scroll lock. Dropping it releases the lock on every
/// exit path, including abrupt unmount of the owning component.
pub struct ScrollHold {
    gate: ScrollGate,
}

impl Drop for ScrollHold {
    fn drop(&mut self) {
        self.gate.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct RecordingHost {
        applied: Rc<RefCell<Vec<ScrollPolicy>>>,
    }

    impl ScrollHost for RecordingHost {
        fn apply(&self, policy: ScrollPolicy) {
            self.applied.borrow_mut().push(policy);
        }
    }

    #[test]
    fn gate_starts_allowed() {
        let host = RecordingHost::default();
        let gate = ScrollGate::new(host.clone());
        assert_eq!(gate.policy(), ScrollPolicy::Allowed);
        assert!(host.applied.borrow().is_empty());
    }

    #[test]
    fn hold_locks_and_drop_restores() {
        let host = RecordingHost::default();
        let gate = ScrollGate::new(host.clone());

        let hold = gate.acquire();
        assert_eq!(gate.policy(), ScrollPolicy::Locked);

        drop(hold);
        assert_eq!(gate.policy(), ScrollPolicy::Allowed);
        assert_eq!(
            *host.applied.borrow(),
            vec![ScrollPolicy::Locked, ScrollPolicy::Allowed]
        );
    }

    #[test]
    fn nested_holds_touch_host_once_per_transition() {
        let host = RecordingHost::default();
        let gate = ScrollGate::new(host.clone());

        let first = gate.acquire();
        let second = gate.acquire();
        assert_eq!(gate.policy(), ScrollPolicy::Locked);
        // Second acquisition is a no-op at the host level.
        assert_eq!(*host.applied.borrow(), vec![ScrollPolicy::Locked]);

        drop(first);
        assert_eq!(gate.policy(), ScrollPolicy::Locked);

        drop(second);
        assert_eq!(gate.policy(), ScrollPolicy::Allowed);
        assert_eq!(
            *host.applied.borrow(),
            vec![ScrollPolicy::Locked, ScrollPolicy::Allowed]
        );
    }
}
