use dioxus::prelude::*;

/// A themed text input component.
///
/// `min` and `max` are passed straight through to the native input, which
/// makes them usable as bounds for `date` and `number` types.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] on_keydown: EventHandler<KeyboardEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] min: String,
    #[props(default)] max: String,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", "{label}" }
            }
            input {
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                min: if min.is_empty() { None } else { Some(min) },
                max: if max.is_empty() { None } else { Some(max) },
                disabled: disabled,
                oninput: move |evt| on_input.call(evt),
                onkeydown: move |evt| on_keydown.call(evt),
                ..merged,
            }
        }
    }
}
