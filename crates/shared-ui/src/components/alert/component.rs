use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCircleAlert, LdInfo, LdTriangleAlert};
use dioxus_free_icons::Icon;

/// Visual variant for alerts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AlertVariant {
    #[default]
    Info,
    Warning,
    Error,
}

impl AlertVariant {
    fn class(&self) -> &'static str {
        match self {
            AlertVariant::Info => "info",
            AlertVariant::Warning => "warning",
            AlertVariant::Error => "error",
        }
    }
}

/// A themed inline alert banner with a leading icon.
#[component]
pub fn Alert(
    #[props(default)] variant: AlertVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "alert", None, false),
        Attribute::new("data-style", variant.class(), None, false),
        Attribute::new("role", "alert", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            span { class: "alert-icon",
                match variant {
                    AlertVariant::Info => rsx! {
                        Icon::<LdInfo> { icon: LdInfo, width: 18, height: 18 }
                    },
                    AlertVariant::Warning => rsx! {
                        Icon::<LdTriangleAlert> { icon: LdTriangleAlert, width: 18, height: 18 }
                    },
                    AlertVariant::Error => rsx! {
                        Icon::<LdCircleAlert> { icon: LdCircleAlert, width: 18, height: 18 }
                    },
                }
            }
            div { class: "alert-body", {children} }
        }
    }
}
