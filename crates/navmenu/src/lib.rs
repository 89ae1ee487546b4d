//! navmenu - Responsive navigation menu controller
//!
//! Turns a nested navigation list into a width-responsive, collapsible menu.
//! Below the breakpoint the menu hides behind a toggle and every nested list
//! gets its own collapsible toggle; at or above it the full menu shows and
//! the toggles are hidden.
//!
//! The controller drives any render tree through [`MenuHost`];
//! [`navmenu_dom::Document`] implements it for in-memory pages.
//!
//! # Example
//!
//! ```
//! use navmenu::{init, ManualClock, MenuEvent, MenuOptions, MenuTargets, PrimaryState};
//! use navmenu_dom::{Document, Viewport};
//!
//! let mut doc = Document::new();
//! doc.set_viewport(Viewport::new(480, 800));
//! let nav = doc.append_element(doc.body(), "nav", &[]).unwrap();
//! let menu = doc.append_element(nav, "ul", &[]).unwrap();
//! let item = doc.append_element(menu, "li", &[]).unwrap();
//! doc.append_text_element(item, "a", "Home").unwrap();
//!
//! let clock = ManualClock::new();
//! let mut controller = init(doc, MenuTargets::new(nav), &MenuOptions::new(), clock.clone())
//!     .unwrap()
//!     .controller()
//!     .unwrap();
//!
//! controller.handle_event(MenuEvent::Click(controller.toggle()));
//! clock.advance_ms(600);
//! controller.run_due_timers();
//! assert_eq!(controller.primary_state(), Some(PrimaryState::Open));
//! ```

pub mod breakpoint;
pub mod config;
mod controller;
pub mod focus;
pub mod host;
pub mod primary;
pub mod sticky;
pub mod submenu;
pub mod timer;

pub use breakpoint::{ClassDelta, DisplayMode, Evaluation};
pub use config::{
    ClassNames, ClassOptions, ConfigError, MenuConfig, MenuOptions, parse_data_options,
};
pub use controller::{DegradeReason, Init, MenuController, MenuEvent, MenuTargets, init};
pub use focus::FocusTracker;
pub use host::{MenuHost, Viewport};
pub use primary::{Activation, MenuTimer, PrimaryState};
pub use sticky::{StickyPlan, StickyState};
pub use submenu::{SubmenuEntry, SubmenuRegistry, SubmenuState};
pub use timer::{Clock, ManualClock, SystemClock, TimerQueue};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Menu error
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
