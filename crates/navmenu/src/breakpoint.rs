//! Breakpoint Evaluator
//!
//! Decides between compact and full display from the viewport width and
//! produces the class changes that mode implies. Deciding is pure; applying
//! is a separate step so the decision can be checked without a host.

use crate::config::MenuConfig;
use crate::host::MenuHost;

/// Menu display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    /// Collapsed behind the primary toggle
    Compact,
    /// Everything visible, toggles hidden
    Full,
}

/// Classify a width against the breakpoint.
///
/// Returns `None` when the width is below the breakpoint but the menu is
/// already open: an open menu is left alone on resize. There is no matching
/// guard on the full side.
pub fn classify(width: u32, breakpoint: u32, menu_open: bool) -> Option<DisplayMode> {
    if width < breakpoint {
        (!menu_open).then_some(DisplayMode::Compact)
    } else {
        Some(DisplayMode::Full)
    }
}

/// Classes to add to and remove from one node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassDelta<'a> {
    pub add: Vec<&'a str>,
    pub remove: Vec<&'a str>,
}

impl<'a> ClassDelta<'a> {
    fn new(add: &[&'a str], remove: &[&'a str]) -> Self {
        Self { add: add.to_vec(), remove: remove.to_vec() }
    }

    /// Removals first, then additions
    pub fn apply<H: MenuHost>(&self, host: &mut H, node: H::Node) {
        for class in &self.remove {
            host.remove_class(node, class);
        }
        for class in &self.add {
            host.add_class(node, class);
        }
    }
}

/// Everything one evaluation changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation<'a> {
    pub mode: DisplayMode,
    pub menu: ClassDelta<'a>,
    pub primary_toggle: ClassDelta<'a>,
    pub submenu_toggle: ClassDelta<'a>,
    pub submenu_list: ClassDelta<'a>,
}

impl Evaluation<'_> {
    /// Whether toggle controls are shown in this mode
    pub fn toggles_visible(&self) -> bool {
        self.mode == DisplayMode::Compact
    }
}

/// Work out the class changes for the current width
pub fn evaluate(width: u32, menu_open: bool, config: &MenuConfig) -> Option<Evaluation<'_>> {
    let mode = classify(width, config.breakpoint, menu_open)?;
    let c = &config.classes;
    let (hide, open, full_menu) = (c.hide.as_str(), c.open.as_str(), c.full_menu.as_str());
    let (pressed, absolute) = (c.toggle_closed.as_str(), c.absolute_menu.as_str());

    let evaluation = match mode {
        DisplayMode::Compact => {
            let mut menu = ClassDelta::new(&[hide], &[open, full_menu]);
            if config.absolute {
                menu.add.push(absolute);
            }
            Evaluation {
                mode,
                menu,
                primary_toggle: ClassDelta::new(&[], &[hide]),
                submenu_toggle: ClassDelta::new(&[], &[hide, pressed]),
                submenu_list: ClassDelta::new(&[hide], &[]),
            }
        }
        DisplayMode::Full => {
            let mut menu = ClassDelta::new(&[full_menu], &[open, hide]);
            if config.absolute {
                menu.remove.push(absolute);
            }
            Evaluation {
                mode,
                menu,
                primary_toggle: ClassDelta::new(&[hide], &[pressed]),
                submenu_toggle: ClassDelta::new(&[hide], &[pressed]),
                submenu_list: ClassDelta::new(&[], &[hide]),
            }
        }
    };
    Some(evaluation)
}
