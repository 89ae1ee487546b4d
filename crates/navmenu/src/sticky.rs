//! Sticky Compensator
//!
//! Keeps a pinned menu usable. When the menu is taller than the viewport the
//! body stops scrolling and the menu scrolls instead; otherwise the wrapper
//! is marked sticky and the body is padded by the menu height, once.

use crate::config::MenuConfig;
use crate::host::MenuHost;

/// Flags carried between measurements
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StickyState {
    /// Body overflow is suppressed and the menu scrolls on its own
    pub overflow_suppressed: bool,
    /// Body padding has been written; it is never recomputed
    pub padding_initialized: bool,
}

/// Changes decided for one measurement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StickyPlan {
    /// `Some(true)` suppress body overflow, `Some(false)` restore it
    pub overflow: Option<bool>,
    /// Make sure the wrapper carries the sticky marker
    pub mark_sticky: bool,
    /// Body top padding to write, in pixels
    pub padding_top: Option<u32>,
}

/// Decide what one measurement changes
pub fn plan(
    menu_height: u32,
    viewport_height: u32,
    menu_open: bool,
    state: StickyState,
) -> StickyPlan {
    if viewport_height <= menu_height {
        return StickyPlan {
            overflow: (!state.overflow_suppressed).then_some(true),
            ..StickyPlan::default()
        };
    }
    StickyPlan {
        overflow: state.overflow_suppressed.then_some(false),
        mark_sticky: true,
        padding_top: (!menu_open && !state.padding_initialized).then_some(menu_height),
    }
}

/// Measure and apply. No-op unless sticky mode is configured.
pub fn recompute<H: MenuHost>(
    host: &mut H,
    wrapper: H::Node,
    menu: H::Node,
    config: &MenuConfig,
    state: &mut StickyState,
) {
    if !config.sticky {
        return;
    }
    let classes = &config.classes;
    let body = host.body();
    let menu_height = host.offset_height(wrapper);
    let viewport_height = host.viewport().height;
    let menu_open = host.has_class(menu, &classes.open);

    let plan = plan(menu_height, viewport_height, menu_open, *state);

    match plan.overflow {
        Some(true) => {
            host.add_class(body, &classes.body_overflow_hidden);
            host.add_class(wrapper, &classes.menu_overflow_auto);
            state.overflow_suppressed = true;
            tracing::debug!(
                "Menu ({}px) taller than viewport ({}px)",
                menu_height,
                viewport_height
            );
        }
        Some(false) => {
            host.remove_class(body, &classes.body_overflow_hidden);
            host.remove_class(wrapper, &classes.menu_overflow_auto);
            state.overflow_suppressed = false;
        }
        None => {}
    }

    if plan.mark_sticky && !host.has_class(wrapper, &classes.sticky) {
        host.add_class(wrapper, &classes.sticky);
    }

    if let Some(padding) = plan.padding_top {
        host.set_attribute(body, "style", &format!("padding-top:{padding}px"));
        host.add_class(body, &classes.sticky_initiated);
        state.padding_initialized = true;
        tracing::debug!("Body padded by {}px for sticky menu", padding);
    }
}
