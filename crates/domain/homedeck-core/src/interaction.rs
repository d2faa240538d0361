use crate::app::App;

/// How the tile body is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileMode {
    /// Anchor to the app's URL.
    Link,
    /// Inert container, e.g. apps without a URL.
    Button,
}

/// Result of the interaction decision for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interaction {
    pub mode: TileMode,
    /// Whether pointer input reaches the tile body.
    pub interactive: bool,
}

impl Interaction {
    /// Clicking the body should navigate.
    pub fn navigates(&self) -> bool {
        self.interactive && self.mode == TileMode::Link
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowTarget {
    Blank,
    SelfWindow,
}

impl WindowTarget {
    pub fn from_new_tab(new_tab: bool) -> Self {
        if new_tab {
            WindowTarget::Blank
        } else {
            WindowTarget::SelfWindow
        }
    }

    /// HTML `target` attribute value.
    pub fn as_attr(self) -> &'static str {
        match self {
            WindowTarget::Blank => "_blank",
            WindowTarget::SelfWindow => "_self",
        }
    }

    pub fn is_new_tab(self) -> bool {
        self == WindowTarget::Blank
    }
}

/// Where a live link tile navigates to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    pub url: String,
    pub window: WindowTarget,
}

/// Picks the tile mode from the app and gates pointer input on edit mode.
///
/// Pure; callers re-evaluate it whenever the app or the edit flag changes.
pub fn resolve_mode(app: &App, edit_mode_enabled: bool) -> Interaction {
    let mode = if app.link().is_some() {
        TileMode::Link
    } else {
        TileMode::Button
    };
    Interaction {
        mode,
        interactive: !edit_mode_enabled,
    }
}
