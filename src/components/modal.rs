use yew::prelude::*;

use crate::scroll_lock::{ScrollGate, ScrollHold};

/// The closed set of overlays the page can show. At most one is open at a
/// time; the page holds the selection as a single `Option<OverlayKind>`
/// rather than independent booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Video,
    Story,
    Contact,
}

impl OverlayKind {
    pub fn label(&self) -> &'static str {
        match self {
            OverlayKind::Video => "video",
            OverlayKind::Story => "story",
            OverlayKind::Contact => "contact",
        }
    }
}

/// Mutually-exclusive overlay selection. Opening is last-writer-wins plain
/// assignment, so switching overlays never passes through a both-open state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OverlaySelector {
    active: Option<OverlayKind>,
}

impl OverlaySelector {
    pub fn open(&mut self, kind: OverlayKind) {
        self.active = Some(kind);
    }

    pub fn close_all(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<OverlayKind> {
        self.active
    }

    pub fn is_open(&self, kind: OverlayKind) -> bool {
        self.active == Some(kind)
    }
}

/// Tracks one overlay's open window over the scroll lock. Holds the lock
/// while open; dropping the window releases it, which is what makes abrupt
/// unmount safe.
pub struct OverlayWindow {
    gate: ScrollGate,
    hold: Option<ScrollHold>,
}

impl OverlayWindow {
    pub fn new(gate: ScrollGate) -> Self {
        Self { gate, hold: None }
    }

    /// Idempotent: opening while open and closing while closed are no-ops.
    pub fn set_open(&mut self, open: bool) {
        if open {
            if self.hold.is_none() {
                self.hold = Some(self.gate.acquire());
            }
        } else {
            self.hold = None;
        }
    }

    pub fn is_open(&self) -> bool {
        self.hold.is_some()
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

/// Full-screen overlay surface. While open the page behind it cannot
/// scroll; the lock is restored on close, backdrop click, the close button
/// and unmount alike. The component has no opinion on why it was dismissed,
/// it just forwards every trigger to `on_close`.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let window = use_mut_ref(|| OverlayWindow::new(ScrollGate::page()));

    {
        let window = window.clone();
        use_effect_with_deps(
            move |open| {
                window.borrow_mut().set_open(*open);
                || ()
            },
            props.open,
        );
    }

    if !props.open {
        return html! {};
    }

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-overlay">
            <div class="modal-backdrop" onclick={on_backdrop}></div>
            <div class={classes!("modal-content", props.class.clone())}>
                <button class="modal-close" aria-label="Close" onclick={on_button}>
                    {"✕"}
                </button>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll_lock::{ScrollHost, ScrollPolicy};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct RecordingHost {
        applied: Rc<RefCell<Vec<ScrollPolicy>>>,
    }

    impl ScrollHost for RecordingHost {
        fn apply(&self, policy: ScrollPolicy) {
            self.applied.borrow_mut().push(policy);
        }
    }

    /// Drives one window per overlay kind off the selector, the way the
    /// page wires its modals.
    fn sync(selector: &OverlaySelector, windows: &mut [(OverlayKind, OverlayWindow)]) {
        for (kind, window) in windows.iter_mut() {
            window.set_open(selector.is_open(*kind));
        }
    }

    fn page_fixture(gate: &ScrollGate) -> Vec<(OverlayKind, OverlayWindow)> {
        [OverlayKind::Video, OverlayKind::Story, OverlayKind::Contact]
            .into_iter()
            .map(|kind| (kind, OverlayWindow::new(gate.clone())))
            .collect()
    }

    #[test]
    fn opening_locks_and_closing_restores() {
        let gate = ScrollGate::new(RecordingHost::default());
        let mut selector = OverlaySelector::default();
        let mut windows = page_fixture(&gate);

        assert_eq!(gate.policy(), ScrollPolicy::Allowed);

        selector.open(OverlayKind::Contact);
        sync(&selector, &mut windows);
        assert_eq!(gate.policy(), ScrollPolicy::Locked);

        selector.close_all();
        sync(&selector, &mut windows);
        assert_eq!(selector.active(), None);
        assert_eq!(gate.policy(), ScrollPolicy::Allowed);
    }

    #[test]
    fn switching_overlays_is_exclusive_and_stays_locked() {
        let gate = ScrollGate::new(RecordingHost::default());
        let mut selector = OverlaySelector::default();
        let mut windows = page_fixture(&gate);

        selector.open(OverlayKind::Story);
        sync(&selector, &mut windows);
        assert_eq!(selector.active(), Some(OverlayKind::Story));

        // Last writer wins, no intermediate both-open state.
        selector.open(OverlayKind::Video);
        assert_eq!(selector.active(), Some(OverlayKind::Video));
        assert!(!selector.is_open(OverlayKind::Story));

        sync(&selector, &mut windows);
        let open_count = windows.iter().filter(|(_, w)| w.is_open()).count();
        assert_eq!(open_count, 1);
        assert_eq!(gate.policy(), ScrollPolicy::Locked);
    }

    #[test]
    fn open_open_close_all_scenario() {
        let gate = ScrollGate::new(RecordingHost::default());
        let mut selector = OverlaySelector::default();
        let mut windows = page_fixture(&gate);

        selector.open(OverlayKind::Contact);
        sync(&selector, &mut windows);
        selector.open(OverlayKind::Video);
        sync(&selector, &mut windows);
        selector.close_all();
        sync(&selector, &mut windows);

        assert_eq!(selector.active(), None);
        assert_eq!(gate.policy(), ScrollPolicy::Allowed);
    }

    #[test]
    fn policy_locked_iff_exactly_one_open() {
        let gate = ScrollGate::new(RecordingHost::default());
        let mut selector = OverlaySelector::default();
        let mut windows = page_fixture(&gate);

        let script = [
            Some(OverlayKind::Video),
            Some(OverlayKind::Story),
            None,
            Some(OverlayKind::Contact),
            Some(OverlayKind::Contact),
            None,
            None,
        ];
        for step in script {
            match step {
                Some(kind) => selector.open(kind),
                None => selector.close_all(),
            }
            sync(&selector, &mut windows);

            let open_count = windows.iter().filter(|(_, w)| w.is_open()).count();
            let expected = if selector.active().is_some() {
                assert_eq!(open_count, 1);
                ScrollPolicy::Locked
            } else {
                assert_eq!(open_count, 0);
                ScrollPolicy::Allowed
            };
            assert_eq!(gate.policy(), expected);
        }
    }

    #[test]
    fn abrupt_unmount_while_open_restores_policy() {
        let host = RecordingHost::default();
        let gate = ScrollGate::new(host.clone());

        let mut window = OverlayWindow::new(gate.clone());
        window.set_open(true);
        assert_eq!(gate.policy(), ScrollPolicy::Locked);

        // Dropping the window mid-open stands in for the component being
        // torn down without a close event.
        drop(window);
        assert_eq!(gate.policy(), ScrollPolicy::Allowed);
        assert_eq!(
            *host.applied.borrow(),
            vec![ScrollPolicy::Locked, ScrollPolicy::Allowed]
        );
    }

    #[test]
    fn set_open_is_idempotent() {
        let host = RecordingHost::default();
        let gate = ScrollGate::new(host.clone());
        let mut window = OverlayWindow::new(gate.clone());

        window.set_open(true);
        window.set_open(true);
        assert_eq!(gate.policy(), ScrollPolicy::Locked);

        window.set_open(false);
        window.set_open(false);
        assert_eq!(gate.policy(), ScrollPolicy::Allowed);
        assert_eq!(
            *host.applied.borrow(),
            vec![ScrollPolicy::Locked, ScrollPolicy::Allowed]
        );
    }
}
