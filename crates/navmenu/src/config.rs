//! Menu Configuration
//!
//! [`MenuOptions`] is the partial overlay a page supplies, either
//! deserialized or built from flat `key: value` pairs. [`MenuOptions::resolve`]
//! lays it over the defaults and validates the result into an immutable
//! [`MenuConfig`].

use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

/// Marker class tokens applied by the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNames {
    /// Added to the wrapper once the controller is running
    pub initiated: String,
    /// Primary toggle control
    pub toggle: String,
    /// Pressed state on primary and submenu toggles
    pub toggle_closed: String,
    /// Submenu toggle controls
    pub subtoggle: String,
    /// Hidden menu, hidden submenu list, hidden toggle
    pub hide: String,
    pub open: String,
    pub focused: String,
    pub animate_open: String,
    pub animate_close: String,
    /// List item owning a nested list
    pub parent: String,
    pub full_menu: String,
    pub absolute_menu: String,
    pub body_overflow_hidden: String,
    pub menu_overflow_auto: String,
    pub sticky: String,
    pub sticky_initiated: String,
    /// Added to the document element when the platform is unsupported
    pub no_responsive_menu: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            initiated: "rm-initiated".into(),
            toggle: "rm-togglebutton".into(),
            toggle_closed: "rm-togglebutton--closed".into(),
            subtoggle: "rm-subtoggle".into(),
            hide: "rm-closed".into(),
            open: "rm-opened".into(),
            focused: "rm-focused".into(),
            animate_open: "is-opening".into(),
            animate_close: "is-closing".into(),
            parent: "rm-parent".into(),
            full_menu: "rm-fullmenu".into(),
            absolute_menu: "rm-absolutemenu".into(),
            body_overflow_hidden: "rm-bodyoverflowhidden".into(),
            menu_overflow_auto: "rm-menuoverflowauto".into(),
            sticky: "rm-sticky".into(),
            sticky_initiated: "rm-sticky-initiated".into(),
            no_responsive_menu: "rm-no-responsive-menu".into(),
        }
    }
}

impl ClassNames {
    /// Every token paired with its option key
    pub fn entries(&self) -> [(&'static str, &str); 17] {
        [
            ("initiated_class", self.initiated.as_str()),
            ("toggleclass", self.toggle.as_str()),
            ("toggleclosedclass", self.toggle_closed.as_str()),
            ("subtoggleclass", self.subtoggle.as_str()),
            ("hideclass", self.hide.as_str()),
            ("openclass", self.open.as_str()),
            ("focusedclass", self.focused.as_str()),
            ("animateopenclass", self.animate_open.as_str()),
            ("animatecloseclass", self.animate_close.as_str()),
            ("parentclass", self.parent.as_str()),
            ("fullmenuclass", self.full_menu.as_str()),
            ("absolutemenuclass", self.absolute_menu.as_str()),
            ("bodyoverflowhiddenclass", self.body_overflow_hidden.as_str()),
            ("menuoverflowautoclass", self.menu_overflow_auto.as_str()),
            ("stickyclass", self.sticky.as_str()),
            ("stickyinitiatedclass", self.sticky_initiated.as_str()),
            ("noresponsivemenuclass", self.no_responsive_menu.as_str()),
        ]
    }

    /// Tokens must be non-empty, whitespace-free and mutually distinct
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen: HashMap<&str, &'static str> = HashMap::new();
        for (key, value) in self.entries() {
            if value.is_empty() {
                return Err(ConfigError::EmptyClass(key));
            }
            if value.chars().any(char::is_whitespace) {
                return Err(ConfigError::InvalidClass { key, value: value.to_string() });
            }
            if let Some(first) = seen.insert(value, key) {
                return Err(ConfigError::DuplicateClass {
                    value: value.to_string(),
                    first,
                    second: key,
                });
            }
        }
        Ok(())
    }
}

/// Resolved, validated menu configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuConfig {
    /// Viewport width (px) at and above which the full menu shows
    pub breakpoint: u32,
    /// Pin the menu and pad the body to compensate
    pub sticky: bool,
    /// Position the compact menu absolutely
    pub absolute: bool,
    /// Must match the CSS transition duration
    pub animation_duration: Duration,
    pub toggle_tag: String,
    pub toggle_content: String,
    pub subtoggle_tag: String,
    pub subtoggle_content: String,
    pub classes: ClassNames,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            breakpoint: 600,
            sticky: false,
            absolute: false,
            animation_duration: Duration::from_millis(600),
            toggle_tag: "button".into(),
            toggle_content: "menu".into(),
            subtoggle_tag: "button".into(),
            subtoggle_content: "+".into(),
            classes: ClassNames::default(),
        }
    }
}

impl MenuConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tags = [("toggletype", &self.toggle_tag), ("subtoggletype", &self.subtoggle_tag)];
        for (key, tag) in tags {
            if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
                return Err(ConfigError::InvalidValue { key: key.to_string(), value: tag.clone() });
            }
        }
        self.classes.validate()
    }
}

/// Partial class overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassOptions {
    pub initiated: Option<String>,
    pub toggle: Option<String>,
    pub toggle_closed: Option<String>,
    pub subtoggle: Option<String>,
    pub hide: Option<String>,
    pub open: Option<String>,
    pub focused: Option<String>,
    pub animate_open: Option<String>,
    pub animate_close: Option<String>,
    pub parent: Option<String>,
    pub full_menu: Option<String>,
    pub absolute_menu: Option<String>,
    pub body_overflow_hidden: Option<String>,
    pub menu_overflow_auto: Option<String>,
    pub sticky: Option<String>,
    pub sticky_initiated: Option<String>,
    pub no_responsive_menu: Option<String>,
}

impl ClassOptions {
    fn slot_mut(&mut self, key: &str) -> Option<&mut Option<String>> {
        Some(match key {
            "initiated_class" => &mut self.initiated,
            "toggleclass" => &mut self.toggle,
            "toggleclosedclass" => &mut self.toggle_closed,
            "subtoggleclass" => &mut self.subtoggle,
            "hideclass" => &mut self.hide,
            "openclass" => &mut self.open,
            "focusedclass" => &mut self.focused,
            "animateopenclass" => &mut self.animate_open,
            "animatecloseclass" => &mut self.animate_close,
            "parentclass" => &mut self.parent,
            "fullmenuclass" => &mut self.full_menu,
            "absolutemenuclass" => &mut self.absolute_menu,
            "bodyoverflowhiddenclass" => &mut self.body_overflow_hidden,
            "menuoverflowautoclass" => &mut self.menu_overflow_auto,
            "stickyclass" => &mut self.sticky,
            "stickyinitiatedclass" => &mut self.sticky_initiated,
            "noresponsivemenuclass" => &mut self.no_responsive_menu,
            _ => return None,
        })
    }

    fn overlay(&self, base: &mut ClassNames) {
        let pairs: [(&Option<String>, &mut String); 17] = [
            (&self.initiated, &mut base.initiated),
            (&self.toggle, &mut base.toggle),
            (&self.toggle_closed, &mut base.toggle_closed),
            (&self.subtoggle, &mut base.subtoggle),
            (&self.hide, &mut base.hide),
            (&self.open, &mut base.open),
            (&self.focused, &mut base.focused),
            (&self.animate_open, &mut base.animate_open),
            (&self.animate_close, &mut base.animate_close),
            (&self.parent, &mut base.parent),
            (&self.full_menu, &mut base.full_menu),
            (&self.absolute_menu, &mut base.absolute_menu),
            (&self.body_overflow_hidden, &mut base.body_overflow_hidden),
            (&self.menu_overflow_auto, &mut base.menu_overflow_auto),
            (&self.sticky, &mut base.sticky),
            (&self.sticky_initiated, &mut base.sticky_initiated),
            (&self.no_responsive_menu, &mut base.no_responsive_menu),
        ];
        for (overlay, target) in pairs {
            if let Some(value) = overlay {
                target.clone_from(value);
            }
        }
    }
}

/// User-supplied options; unset fields keep their defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MenuOptions {
    /// Breakpoint width in pixels
    pub width: Option<u32>,
    pub sticky: Option<bool>,
    pub absolute: Option<bool>,
    /// Animation duration in milliseconds
    #[serde(alias = "animateduration")]
    pub animate_duration: Option<u64>,
    #[serde(alias = "toggletype")]
    pub toggle_type: Option<String>,
    #[serde(alias = "togglecontent")]
    pub toggle_content: Option<String>,
    #[serde(alias = "subtoggletype")]
    pub subtoggle_type: Option<String>,
    #[serde(alias = "subtogglecontent")]
    pub subtoggle_content: Option<String>,
    pub classes: ClassOptions,
}

impl MenuOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build options from an inline `key: value; key: value` string
    pub fn from_data_options(input: &str) -> Result<Self, ConfigError> {
        let mut options = Self::new();
        for (key, value) in parse_data_options(input) {
            options.apply_pair(&key, &value)?;
        }
        Ok(options)
    }

    /// Apply one flat option using the plugin's historical key names
    pub fn apply_pair(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "width" => self.width = Some(value.parse().map_err(|_| invalid())?),
            "sticky" => self.sticky = Some(parse_flag(value).ok_or_else(invalid)?),
            "absolute" => self.absolute = Some(parse_flag(value).ok_or_else(invalid)?),
            "animateduration" => {
                self.animate_duration = Some(value.parse().map_err(|_| invalid())?)
            }
            "toggletype" => self.toggle_type = Some(value.to_string()),
            "togglecontent" => self.toggle_content = Some(value.to_string()),
            "subtoggletype" => self.subtoggle_type = Some(value.to_string()),
            "subtogglecontent" => self.subtoggle_content = Some(value.to_string()),
            _ => match self.classes.slot_mut(key) {
                Some(slot) => *slot = Some(value.to_string()),
                None => return Err(ConfigError::UnknownOption(key.to_string())),
            },
        }
        Ok(())
    }

    /// Overlay onto the defaults and validate
    pub fn resolve(&self) -> Result<MenuConfig, ConfigError> {
        let mut config = MenuConfig::default();
        if let Some(width) = self.width {
            config.breakpoint = width;
        }
        if let Some(sticky) = self.sticky {
            config.sticky = sticky;
        }
        if let Some(absolute) = self.absolute {
            config.absolute = absolute;
        }
        if let Some(ms) = self.animate_duration {
            config.animation_duration = Duration::from_millis(ms);
        }
        for (overlay, target) in [
            (&self.toggle_type, &mut config.toggle_tag),
            (&self.toggle_content, &mut config.toggle_content),
            (&self.subtoggle_type, &mut config.subtoggle_tag),
            (&self.subtoggle_content, &mut config.subtoggle_content),
        ] {
            if let Some(value) = overlay {
                target.clone_from(value);
            }
        }
        self.classes.overlay(&mut config.classes);
        config.validate()?;
        Ok(config)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

/// Parse an inline option string such as `"width: 800; sticky: 1"`.
///
/// Segments are split on `;`, keys and values trimmed, empty segments
/// skipped. A later duplicate key replaces the earlier value in place.
/// The value is everything after the first `:`, so `"a: b:c"` yields `"b:c"`.
pub fn parse_data_options(input: &str) -> Vec<(String, String)> {
    let mut out: Vec<(String, String)> = Vec::new();
    for segment in input.split(';') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        let (key, value) = segment.split_once(':').unwrap_or((segment, ""));
        let (key, value) = (key.trim().to_string(), value.trim().to_string());
        match out.iter_mut().find(|(k, _)| *k == key) {
            Some(existing) => existing.1 = value,
            None => out.push((key, value)),
        }
    }
    out
}

/// Configuration error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Class option {0} is empty")]
    EmptyClass(&'static str),

    #[error("Class option {key} contains whitespace: {value:?}")]
    InvalidClass { key: &'static str, value: String },

    #[error("Class {value:?} is used by both {first} and {second}")]
    DuplicateClass {
        value: String,
        first: &'static str,
        second: &'static str,
    },

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}
