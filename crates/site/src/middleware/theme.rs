//! Theme preference, carried by the `theme` cookie.
//!
//! The cookie holds `"light"` or `"dark"` and is read at render time to
//! set the page's theme class. Anything else falls back to light.

use axum::{
    extract::FromRequestParts,
    http::{HeaderValue, header, request::Parts},
};

/// Cookie key for the theme preference.
pub const THEME_COOKIE_NAME: &str = "theme";

/// The visitor's theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The cookie/class value for this theme.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Parse a cookie value; anything but "dark" is light.
    #[must_use]
    pub fn from_cookie_value(value: &str) -> Self {
        if value == "dark" { Self::Dark } else { Self::Light }
    }

    /// The `Set-Cookie` header value persisting this theme for a year.
    #[must_use]
    pub fn set_cookie(self) -> HeaderValue {
        let cookie = format!(
            "{THEME_COOKIE_NAME}={}; Path=/; Max-Age=31536000; SameSite=Lax",
            self.as_str()
        );
        HeaderValue::from_str(&cookie)
            .unwrap_or_else(|_| HeaderValue::from_static("theme=light; Path=/"))
    }
}

impl<S> FromRequestParts<S> for Theme
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let theme = parts
            .headers
            .get(header::COOKIE)
            .and_then(|value| value.to_str().ok())
            .and_then(find_theme_cookie)
            .unwrap_or_default();
        Ok(theme)
    }
}

/// Pull the theme value out of a `Cookie` header.
fn find_theme_cookie(header: &str) -> Option<Theme> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == THEME_COOKIE_NAME).then(|| Theme::from_cookie_value(value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cookie_header() {
        assert_eq!(
            find_theme_cookie("lexiops_session=abc; theme=dark"),
            Some(Theme::Dark)
        );
        assert_eq!(find_theme_cookie("theme=light"), Some(Theme::Light));
        assert_eq!(find_theme_cookie("theme=purple"), Some(Theme::Light));
        assert_eq!(find_theme_cookie("session=abc"), None);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_set_cookie_value() {
        let value = Theme::Dark.set_cookie();
        let text = value.to_str().expect("ascii");
        assert!(text.starts_with("theme=dark"));
        assert!(text.contains("SameSite=Lax"));
    }
}
