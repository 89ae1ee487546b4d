//! Toggle Controller
//!
//! Opens and closes the compact menu with a timed animation marker. The
//! state lives in the menu's marker classes; timers finish each transition
//! after the configured duration.

use crate::config::{ClassNames, MenuConfig};
use crate::host::{MenuHost, set_pressed};
use crate::timer::TimerQueue;
use std::time::Duration;

/// Primary menu state in compact mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryState {
    Hidden,
    OpeningAnimating,
    Open,
    ClosingAnimating,
}

/// Deferred step of an open or close transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTimer {
    EndOpenAnimation,
    EndCloseAnimation,
    RemoveOpen,
    AddHidden,
}

/// What an activation did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Opened,
    Closed,
    /// Menu is in full mode, nothing to toggle
    Ignored,
}

/// Read the state from the menu's markers. `None` in full mode.
pub fn state<H: MenuHost>(host: &H, menu: H::Node, classes: &ClassNames) -> Option<PrimaryState> {
    if host.has_class(menu, &classes.hide) {
        Some(PrimaryState::Hidden)
    } else if host.has_class(menu, &classes.open) {
        if host.has_class(menu, &classes.animate_close) {
            Some(PrimaryState::ClosingAnimating)
        } else if host.has_class(menu, &classes.animate_open) {
            Some(PrimaryState::OpeningAnimating)
        } else {
            Some(PrimaryState::Open)
        }
    } else {
        None
    }
}

/// Handle one press of the primary toggle.
///
/// Pressing again while a transition is still animating is not guarded:
/// the new transition's markers and the pending timers both apply.
pub fn activate<H: MenuHost>(
    host: &mut H,
    menu: H::Node,
    toggle: H::Node,
    config: &MenuConfig,
    timers: &mut TimerQueue<MenuTimer>,
    now: Duration,
) -> Activation {
    let classes = &config.classes;
    let delay = config.animation_duration;

    if host.has_class(menu, &classes.hide) {
        // Visible at once so the opening animation can run.
        host.remove_class(menu, &classes.hide);
        host.add_class(menu, &classes.open);
        host.add_class(menu, &classes.animate_open);
        timers.schedule(now, delay, MenuTimer::EndOpenAnimation);
        set_pressed(host, toggle, &classes.toggle_closed, true);
        tracing::debug!("Menu opening");
        Activation::Opened
    } else if host.has_class(menu, &classes.open) {
        // Stays visible until the closing animation has run.
        host.add_class(menu, &classes.animate_close);
        timers.schedule(now, delay, MenuTimer::EndCloseAnimation);
        timers.schedule(now, delay, MenuTimer::RemoveOpen);
        timers.schedule(now, delay, MenuTimer::AddHidden);
        set_pressed(host, toggle, &classes.toggle_closed, false);
        tracing::debug!("Menu closing");
        Activation::Closed
    } else {
        Activation::Ignored
    }
}

/// Apply a fired timer to the menu.
///
/// A close that finishes after the viewport crossed into full mode does not
/// hide the full menu.
pub fn fire<H: MenuHost>(host: &mut H, menu: H::Node, classes: &ClassNames, timer: MenuTimer) {
    tracing::trace!("Timer fired: {:?}", timer);
    match timer {
        MenuTimer::EndOpenAnimation => host.remove_class(menu, &classes.animate_open),
        MenuTimer::EndCloseAnimation => host.remove_class(menu, &classes.animate_close),
        MenuTimer::RemoveOpen => host.remove_class(menu, &classes.open),
        MenuTimer::AddHidden => {
            if !host.has_class(menu, &classes.full_menu) {
                host.add_class(menu, &classes.hide);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navmenu_dom::{Document, NodeId};

    fn setup() -> (Document, NodeId, NodeId, MenuConfig) {
        let mut doc = Document::new();
        let menu = doc.append_element(doc.body(), "ul", &["rm-closed"]).unwrap();
        let toggle = doc.append_element(doc.body(), "button", &[]).unwrap();
        (doc, menu, toggle, MenuConfig::default())
    }

    fn fire_all(
        doc: &mut Document,
        menu: NodeId,
        timers: &mut TimerQueue<MenuTimer>,
        at: Duration,
    ) {
        let classes = ClassNames::default();
        for timer in timers.take_due(at) {
            fire(doc, menu, &classes, timer);
        }
    }

    #[test]
    fn test_open_then_animation_ends() {
        let (mut doc, menu, toggle, config) = setup();
        let mut timers = TimerQueue::new();

        let result = activate(&mut doc, menu, toggle, &config, &mut timers, Duration::ZERO);

        assert_eq!(result, Activation::Opened);
        assert_eq!(state(&doc, menu, &config.classes), Some(PrimaryState::OpeningAnimating));
        assert!(doc.has_class(toggle, "rm-togglebutton--closed"));

        fire_all(&mut doc, menu, &mut timers, Duration::from_millis(600));
        assert_eq!(state(&doc, menu, &config.classes), Some(PrimaryState::Open));
    }

    #[test]
    fn test_close_waits_for_duration() {
        let (mut doc, menu, toggle, config) = setup();
        let mut timers = TimerQueue::new();
        activate(&mut doc, menu, toggle, &config, &mut timers, Duration::ZERO);
        fire_all(&mut doc, menu, &mut timers, Duration::from_millis(600));

        let now = Duration::from_millis(1000);
        let result = activate(&mut doc, menu, toggle, &config, &mut timers, now);

        assert_eq!(result, Activation::Closed);
        assert_eq!(state(&doc, menu, &config.classes), Some(PrimaryState::ClosingAnimating));
        assert!(!doc.has_class(toggle, "rm-togglebutton--closed"));
        assert_eq!(timers.len(), 3);

        fire_all(&mut doc, menu, &mut timers, Duration::from_millis(1599));
        assert_eq!(state(&doc, menu, &config.classes), Some(PrimaryState::ClosingAnimating));

        fire_all(&mut doc, menu, &mut timers, Duration::from_millis(1600));
        assert_eq!(state(&doc, menu, &config.classes), Some(PrimaryState::Hidden));
        assert!(!doc.has_class(menu, "rm-opened"));
        assert!(!doc.has_class(menu, "is-closing"));
    }

    #[test]
    fn test_full_mode_ignores_activation() {
        let (mut doc, menu, toggle, config) = setup();
        doc.remove_class(menu, "rm-closed");
        doc.add_class(menu, "rm-fullmenu");
        let mut timers = TimerQueue::new();

        let result = activate(&mut doc, menu, toggle, &config, &mut timers, Duration::ZERO);

        assert_eq!(result, Activation::Ignored);
        assert_eq!(state(&doc, menu, &config.classes), None);
        assert!(!timers.has_pending());
    }

    #[test]
    fn test_late_hide_does_not_touch_full_menu() {
        let (mut doc, menu, _, config) = setup();
        doc.remove_class(menu, "rm-closed");
        doc.add_class(menu, "rm-fullmenu");

        fire(&mut doc, menu, &config.classes, MenuTimer::AddHidden);
        assert!(!doc.has_class(menu, "rm-closed"));
    }
}
