/// Page colour scheme. Dark is the default and is denoted by the *absence*
/// of the `data-theme` attribute on the root element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Involution: toggling twice restores the original theme.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Value for the root `data-theme` attribute; `None` means remove it.
    #[inline]
    pub fn attr_value(self) -> Option<&'static str> {
        match self {
            Theme::Dark => None,
            Theme::Light => Some("light"),
        }
    }

    pub fn from_attr(attr: Option<&str>) -> Self {
        match attr {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    /// Parse the durable preference value, defaulting to dark.
    pub fn from_saved(saved: Option<&str>) -> Self {
        match saved {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Star fill colour: white on dark, black on light.
    #[inline]
    pub fn star_rgb(self) -> (u8, u8, u8) {
        match self {
            Theme::Dark => (255, 255, 255),
            Theme::Light => (0, 0, 0),
        }
    }
}
