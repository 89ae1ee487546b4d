//! Menu controller
//!
//! Owns one menu for the lifetime of the page: the host it mutates, the
//! resolved configuration, the generated toggles and the timer queue.
//! Independent controllers share nothing.

use crate::breakpoint::{self, DisplayMode, Evaluation};
use crate::config::{ClassNames, MenuConfig, MenuOptions};
use crate::focus::FocusTracker;
use crate::host::{MenuHost, create_control};
use crate::primary::{self, Activation, MenuTimer, PrimaryState};
use crate::sticky::{self, StickyState};
use crate::submenu::{SubmenuRegistry, SubmenuState};
use crate::timer::{Clock, TimerQueue};
use crate::MenuError;
use std::time::Duration;

/// Where the menu lives in the host tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuTargets<N> {
    /// Node wrapping the menu; measured for sticky compensation
    pub wrapper: N,
    /// The menu list. Defaults to the first `<ul>` inside the wrapper.
    pub menu: Option<N>,
    /// The primary toggle is inserted before this node. Defaults to the
    /// wrapper's first child.
    pub before: Option<N>,
}

impl<N> MenuTargets<N> {
    pub fn new(wrapper: N) -> Self {
        Self { wrapper, menu: None, before: None }
    }

    pub fn with_menu(mut self, menu: N) -> Self {
        self.menu = Some(menu);
        self
    }

    pub fn with_anchor(mut self, before: N) -> Self {
        self.before = Some(before);
        self
    }
}

/// Why a page keeps its static menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegradeReason {
    /// Node selection or event registration is missing
    Unsupported,
    /// No list to control inside the wrapper
    MenuNotFound,
}

/// Outcome of [`init`]
#[derive(Debug)]
pub enum Init<H: MenuHost, C: Clock> {
    Ready(MenuController<H, C>),
    /// The host is handed back with only the no-responsive-menu marker added
    Degraded { host: H, reason: DegradeReason },
}

impl<H: MenuHost, C: Clock> Init<H, C> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn controller(self) -> Option<MenuController<H, C>> {
        match self {
            Self::Ready(controller) => Some(controller),
            Self::Degraded { .. } => None,
        }
    }
}

/// Input delivered by the host's event loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent<N> {
    Resize,
    Click(N),
    Focus(N),
    Blur(N),
}

/// Responsive menu state controller
#[derive(Debug)]
pub struct MenuController<H: MenuHost, C: Clock> {
    host: H,
    clock: C,
    config: MenuConfig,
    wrapper: H::Node,
    menu: H::Node,
    toggle: H::Node,
    submenus: SubmenuRegistry<H::Node>,
    focus: FocusTracker<H::Node>,
    sticky: StickyState,
    timers: TimerQueue<MenuTimer>,
}

/// Resolve `options`, build the controls and run the first evaluation.
///
/// Only invalid options on a supported platform are an error. An unsupported
/// platform or a wrapper without a list degrades to the static menu.
pub fn init<H: MenuHost, C: Clock>(
    mut host: H,
    targets: MenuTargets<H::Node>,
    options: &MenuOptions,
    clock: C,
) -> Result<Init<H, C>, MenuError> {
    if !host.supports_responsive_menu() {
        let marker = match options.resolve() {
            Ok(config) => config.classes.no_responsive_menu,
            Err(_) => ClassNames::default().no_responsive_menu,
        };
        return Ok(degrade(host, &marker, DegradeReason::Unsupported));
    }

    let config = options.resolve()?;

    let wrapper = targets.wrapper;
    let Some(menu) = targets
        .menu
        .or_else(|| host.descendants_by_tag(wrapper, "ul").first().copied())
    else {
        let marker = &config.classes.no_responsive_menu;
        return Ok(degrade(host, marker, DegradeReason::MenuNotFound));
    };

    host.add_class(wrapper, &config.classes.initiated);

    let toggle = create_control(
        &mut host,
        &config.toggle_tag,
        &config.toggle_content,
        &[config.classes.toggle.as_str()],
    );
    let anchor = targets.before.or_else(|| host.first_child(wrapper));
    match anchor.and_then(|a| host.parent(a).map(|p| (p, a))) {
        Some((parent, anchor)) => host.insert_before(parent, toggle, Some(anchor)),
        None => host.insert_before(wrapper, toggle, None),
    }

    let submenus = SubmenuRegistry::build(&mut host, menu, &config);
    let links = host.descendants_by_tag(menu, "a");
    tracing::info!(
        "Responsive menu initialized: {} submenus, {} links",
        submenus.len(),
        links.len()
    );

    let mut controller = MenuController {
        host,
        clock,
        config,
        wrapper,
        menu,
        toggle,
        submenus,
        focus: FocusTracker::new(links),
        sticky: StickyState::default(),
        timers: TimerQueue::new(),
    };
    controller.on_resize();
    Ok(Init::Ready(controller))
}

fn degrade<H: MenuHost, C: Clock>(mut host: H, marker: &str, reason: DegradeReason) -> Init<H, C> {
    tracing::warn!("Responsive menu disabled: {:?}", reason);
    let root = host.document_element();
    host.add_class(root, marker);
    Init::Degraded { host, reason }
}

impl<H: MenuHost, C: Clock> MenuController<H, C> {
    /// Dispatch one host event. Returns whether the controller handled it.
    pub fn handle_event(&mut self, event: MenuEvent<H::Node>) -> bool {
        match event {
            MenuEvent::Resize => {
                self.on_resize();
                true
            }
            MenuEvent::Click(node) if node == self.toggle => {
                self.toggle_primary();
                true
            }
            MenuEvent::Click(node) => match self.submenus.position_of_toggle(node) {
                Some(index) => self.toggle_submenu(index).is_some(),
                None => false,
            },
            MenuEvent::Focus(node) => self.focus_link(node),
            MenuEvent::Blur(node) => self.blur_link(node),
        }
    }

    /// Re-run the breakpoint and sticky steps against the current viewport
    pub fn on_resize(&mut self) {
        let width = self.host.viewport().width;
        let menu_open = self.host.has_class(self.menu, &self.config.classes.open);
        if let Some(evaluation) = breakpoint::evaluate(width, menu_open, &self.config) {
            let previous = self.display_mode();
            apply_evaluation(&mut self.host, &evaluation, self.menu, self.toggle, &self.submenus);
            if previous != evaluation.mode {
                tracing::debug!("Display mode {:?} at width {}", evaluation.mode, width);
            }
        }
        self.recompute_sticky();
    }

    /// Press the primary toggle
    pub fn toggle_primary(&mut self) -> Activation {
        let now = self.clock.now();
        let activation = primary::activate(
            &mut self.host,
            self.menu,
            self.toggle,
            &self.config,
            &mut self.timers,
            now,
        );
        self.recompute_sticky();
        activation
    }

    /// Press the toggle of submenu `index`. Hidden toggles (full mode) are
    /// inert and return `None`.
    pub fn toggle_submenu(&mut self, index: usize) -> Option<SubmenuState> {
        let entry = self.submenus.get(index)?;
        if self.host.has_class(entry.toggle, &self.config.classes.hide) {
            return None;
        }
        let state = self.submenus.toggle(&mut self.host, index, &self.config);
        self.recompute_sticky();
        state
    }

    /// A menu link received focus
    pub fn focus_link(&mut self, link: H::Node) -> bool {
        self.focus
            .focus(&mut self.host, link, self.menu, &self.config.classes.focused)
    }

    /// A menu link lost focus
    pub fn blur_link(&mut self, link: H::Node) -> bool {
        self.focus.blur(&mut self.host, link, &self.config.classes.focused)
    }

    /// Fire every timer due at the clock's current time
    pub fn run_due_timers(&mut self) -> usize {
        let due = self.timers.take_due(self.clock.now());
        for &timer in &due {
            primary::fire(&mut self.host, self.menu, &self.config.classes, timer);
        }
        due.len()
    }

    fn recompute_sticky(&mut self) {
        sticky::recompute(
            &mut self.host,
            self.wrapper,
            self.menu,
            &self.config,
            &mut self.sticky,
        );
    }

    /// Mode implied by the menu's current markers
    pub fn display_mode(&self) -> DisplayMode {
        if self.host.has_class(self.menu, &self.config.classes.full_menu) {
            DisplayMode::Full
        } else {
            DisplayMode::Compact
        }
    }

    /// Primary menu state; `None` in full mode
    pub fn primary_state(&self) -> Option<PrimaryState> {
        primary::state(&self.host, self.menu, &self.config.classes)
    }

    pub fn submenus(&self) -> &SubmenuRegistry<H::Node> {
        &self.submenus
    }

    pub fn submenu_state(&self, index: usize) -> Option<SubmenuState> {
        self.submenus.state(&self.host, index, &self.config)
    }

    pub fn sticky_state(&self) -> StickyState {
        self.sticky
    }

    /// List items marked for the focused link, nearest first
    pub fn focus_chain(&self) -> &[H::Node] {
        self.focus.chain()
    }

    pub fn links(&self) -> &[H::Node] {
        self.focus.links()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn next_timer_due(&self) -> Option<Duration> {
        self.timers.next_due()
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn wrapper(&self) -> H::Node {
        self.wrapper
    }

    pub fn menu(&self) -> H::Node {
        self.menu
    }

    /// The primary toggle control
    pub fn toggle(&self) -> H::Node {
        self.toggle
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host access, e.g. to change the viewport before a resize
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }
}

fn apply_evaluation<H: MenuHost>(
    host: &mut H,
    evaluation: &Evaluation<'_>,
    menu: H::Node,
    toggle: H::Node,
    submenus: &SubmenuRegistry<H::Node>,
) {
    let aria_hidden = if evaluation.toggles_visible() { "false" } else { "true" };

    evaluation.primary_toggle.apply(host, toggle);
    host.set_attribute(toggle, "aria-hidden", aria_hidden);
    if !evaluation.toggles_visible() {
        host.set_attribute(toggle, "aria-pressed", "false");
    }

    for entry in submenus.entries() {
        evaluation.submenu_list.apply(host, entry.list);
        evaluation.submenu_toggle.apply(host, entry.toggle);
        host.set_attribute(entry.toggle, "aria-hidden", aria_hidden);
        host.set_attribute(entry.toggle, "aria-pressed", "false");
    }

    evaluation.menu.apply(host, menu);
}
