use serde::{Deserialize, Serialize};

/// A monitored service shown as a tile. Owned by whoever loads the board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct App {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub appearance: AppAppearance,
    #[serde(default)]
    pub behaviour: AppBehaviour,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NameStatus {
    #[default]
    Normal,
    Hover,
    Hidden,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum NamePosition {
    #[default]
    Column,
    Row,
    ColumnReverse,
    RowReverse,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppAppearance {
    #[serde(default)]
    pub icon_url: String,
    #[serde(default)]
    pub app_name_status: NameStatus,
    #[serde(default)]
    pub position_app_name: NamePosition,
    #[serde(default = "default_font_size")]
    pub app_name_font_size: f32,
    #[serde(default = "default_line_clamp")]
    pub line_clamp_app_name: u32,
}

fn default_font_size() -> f32 {
    16.0
}

fn default_line_clamp() -> u32 {
    1
}

impl Default for AppAppearance {
    fn default() -> Self {
        Self {
            icon_url: String::new(),
            app_name_status: NameStatus::default(),
            position_app_name: NamePosition::default(),
            app_name_font_size: default_font_size(),
            line_clamp_app_name: default_line_clamp(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppBehaviour {
    #[serde(default = "default_new_tab")]
    pub is_opening_new_tab: bool,
    #[serde(default)]
    pub external_url: String,
    #[serde(default)]
    pub tooltip_description: String,
}

fn default_new_tab() -> bool {
    true
}

impl Default for AppBehaviour {
    fn default() -> Self {
        Self {
            is_opening_new_tab: default_new_tab(),
            external_url: String::new(),
            tooltip_description: String::new(),
        }
    }
}

impl App {
    /// App with only a name; everything else defaulted.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            url: None,
            appearance: AppAppearance::default(),
            behaviour: AppBehaviour::default(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Navigation URL, treating an empty string as absent.
    pub fn link(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }

    pub fn shows_name_inline(&self) -> bool {
        self.appearance.app_name_status == NameStatus::Normal
    }

    pub fn is_row_layout(&self) -> bool {
        matches!(
            self.appearance.position_app_name,
            NamePosition::Row | NamePosition::RowReverse
        )
    }

    /// Hover text: the name (when it is hidden until hover) and the description.
    pub fn tooltip_text(&self) -> Option<String> {
        let name =
            (self.appearance.app_name_status == NameStatus::Hover).then_some(self.name.as_str());
        let description = Some(self.behaviour.tooltip_description.trim()).filter(|d| !d.is_empty());

        let parts: Vec<&str> = [name, description].into_iter().flatten().collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(": "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_joins_hover_name_and_description() {
        let mut app = App::named("Sonarr");
        assert_eq!(app.tooltip_text(), None);

        app.behaviour.tooltip_description = "TV shows".into();
        assert_eq!(app.tooltip_text().as_deref(), Some("TV shows"));

        app.appearance.app_name_status = NameStatus::Hover;
        assert_eq!(app.tooltip_text().as_deref(), Some("Sonarr: TV shows"));

        app.behaviour.tooltip_description.clear();
        assert_eq!(app.tooltip_text().as_deref(), Some("Sonarr"));
    }

    #[test]
    fn empty_url_is_not_a_link() {
        assert_eq!(App::named("x").with_url("  ").link(), None);
        assert_eq!(
            App::named("x").with_url("http://x.lan").link(),
            Some("http://x.lan")
        );
    }
}
