//! Button primitive
//!
//! A stateless `<button type="button">` whose classes come from
//! [`resolve_button_classes`](crate::ui::style::resolve_button_classes).

use crate::ui::style::{resolve_button_classes, ClassList};
use dioxus::prelude::*;
use thiserror::Error;

/// Non-fatal prop contract violations, reported in debug builds
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractWarning {
    #[error("Button rendered without a label")]
    MissingLabel,
}

pub fn check_label(label: &str) -> Option<ContractWarning> {
    label.trim().is_empty().then_some(ContractWarning::MissingLabel)
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    /// Visible text
    #[props(into)]
    pub label: String,
    /// Palette name: "primary" (default), "secondary", "danger" or "gray"
    #[props(optional)]
    pub color: Option<String>,
    #[props(default = true)]
    pub fill: bool,
    /// Extra classes appended after the variant classes
    #[props(optional)]
    pub class: Option<String>,
    #[props(default)]
    pub disabled: bool,
    #[props(optional)]
    pub title: Option<String>,
    #[props(optional)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    /// Free-form attributes forwarded to the element
    #[props(default)]
    pub attributes: Vec<Attribute>,
}

impl ButtonProps {
    pub fn classes(&self) -> ClassList {
        resolve_button_classes(self.color.as_deref(), self.fill, self.class.as_deref())
    }
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    #[cfg(debug_assertions)]
    if let Some(warning) = check_label(&props.label) {
        tracing::warn!("{}", warning);
    }

    let classes = props.classes().to_string();
    let ButtonProps {
        label,
        disabled,
        title,
        onclick,
        attributes,
        ..
    } = props;

    rsx! {
        button {
            r#type: "button",
            class: "{classes}",
            disabled,
            title,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            ..attributes,
            "{label}"
        }
    }
}
