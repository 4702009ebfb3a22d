//! Style/variant resolution
//!
//! Maps declarative button props to the ordered class list applied to the
//! rendered element. Class names match the rules in `assets/styles.css`.

use std::fmt;

/// Base class carried by every button
pub const BUTTON_BASE: &str = "Button";
/// Class applied when the button is filled with its palette color
pub const BUTTON_FILL: &str = "Button-background-fill";
/// Palette name used when no color is given
pub const DEFAULT_COLOR: &str = "primary";

/// Palette colors the stylesheet defines a variant rule for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonColor {
    Primary,
    Secondary,
    Danger,
    Gray,
}

impl ButtonColor {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "primary" => Some(Self::Primary),
            "secondary" => Some(Self::Secondary),
            "danger" => Some(Self::Danger),
            "gray" => Some(Self::Gray),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Danger => "danger",
            Self::Gray => "gray",
        }
    }

    /// Variant class, e.g. `Button-danger`
    pub fn token(&self) -> &'static str {
        match self {
            Self::Primary => "Button-primary",
            Self::Secondary => "Button-secondary",
            Self::Danger => "Button-danger",
            Self::Gray => "Button-gray",
        }
    }
}

/// Ordered list of class tokens without duplicates or blanks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token unless it is blank or already present
    pub fn push(&mut self, token: impl AsRef<str>) {
        let token = token.as_ref().trim();
        if token.is_empty() || self.tokens.iter().any(|t| t == token) {
            return;
        }
        self.tokens.push(token.to_string());
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn into_vec(self) -> Vec<String> {
        self.tokens
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

/// Declarative inputs controlling a button's classes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantDescriptor {
    pub color: Option<String>,
    pub fill: Option<bool>,
    pub extra_class: Option<String>,
}

impl VariantDescriptor {
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn fill(mut self, fill: bool) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn extra_class(mut self, class: impl Into<String>) -> Self {
        self.extra_class = Some(class.into());
        self
    }

    pub fn resolve(&self) -> ClassList {
        resolve_button_classes(
            self.color.as_deref(),
            self.fill.unwrap_or(true),
            self.extra_class.as_deref(),
        )
    }
}

/// Resolve the class list for a button.
///
/// Unknown colors contribute no variant class. `extra_class` is appended
/// last as a single token, trimmed of surrounding whitespace. Because the
/// list is de-duplicated, an `extra_class` equal to a token already present
/// (e.g. `"Button"`) is dropped rather than repeated, and a blank one adds
/// nothing.
pub fn resolve_button_classes(color: Option<&str>, fill: bool, extra_class: Option<&str>) -> ClassList {
    let mut classes = ClassList::new();
    classes.push(BUTTON_BASE);

    if let Some(variant) = ButtonColor::from_name(color.unwrap_or(DEFAULT_COLOR)) {
        classes.push(variant.token());
    }

    if fill {
        classes.push(BUTTON_FILL);
    }

    if let Some(extra) = extra_class {
        classes.push(extra);
    }

    classes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_filled() {
        let classes = VariantDescriptor::default().color("primary").fill(true).resolve();
        assert_eq!(
            classes.into_vec(),
            vec!["Button", "Button-primary", "Button-background-fill"]
        );
    }

    #[test]
    fn test_danger_outline_with_extra_class() {
        let classes = VariantDescriptor::default()
            .color("danger")
            .fill(false)
            .extra_class("mt-2")
            .resolve();
        assert_eq!(classes.into_vec(), vec!["Button", "Button-danger", "mt-2"]);
    }

    #[test]
    fn test_defaults() {
        let classes = VariantDescriptor::default().resolve();
        assert_eq!(classes.tokens()[1], "Button-primary");
        assert!(classes.tokens().iter().any(|t| t == BUTTON_FILL));
    }

    #[test]
    fn test_unknown_color_has_no_variant() {
        let classes = resolve_button_classes(Some("chartreuse"), true, None);
        assert_eq!(classes.into_vec(), vec!["Button", "Button-background-fill"]);
    }

    #[test]
    fn test_extra_class_is_last() {
        let classes = resolve_button_classes(Some("gray"), true, Some("w-full py-3"));
        assert_eq!(classes.tokens().last().map(String::as_str), Some("w-full py-3"));
        assert_eq!(classes.to_string(), "Button Button-gray Button-background-fill w-full py-3");
    }

    #[test]
    fn test_duplicates_and_blanks_dropped() {
        let classes = resolve_button_classes(None, true, Some("Button"));
        assert_eq!(classes.into_vec(), vec!["Button", "Button-primary", "Button-background-fill"]);

        let classes = resolve_button_classes(None, false, Some(" mt-2 "));
        assert_eq!(classes.tokens().last().map(String::as_str), Some("mt-2"));

        let classes = resolve_button_classes(None, false, Some("   "));
        assert_eq!(classes.into_vec(), vec!["Button", "Button-primary"]);
    }

    #[test]
    fn test_deterministic() {
        let descriptor = VariantDescriptor::default().color("secondary").extra_class("ml-1");
        assert_eq!(descriptor.resolve(), descriptor.resolve());
    }

    #[test]
    fn test_color_names_round_trip() {
        for color in [ButtonColor::Primary, ButtonColor::Secondary, ButtonColor::Danger, ButtonColor::Gray] {
            assert_eq!(ButtonColor::from_name(color.as_str()), Some(color));
            assert_eq!(color.token(), format!("Button-{}", color.as_str()));
        }
    }
}
