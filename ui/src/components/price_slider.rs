use dioxus::prelude::*;

use shopfront_common::currency::format_vnd;

/// Labelled range input for one price bound.
#[component]
pub fn PriceSlider(
    label: String,
    value: u64,
    max: u64,
    step: u64,
    on_change: EventHandler<u64>,
) -> Element {
    let value_str = format_vnd(value);

    rsx! {
        div { class: "filter-field price-slider",
            label { class: "filter-label", "{label}" }
            input {
                r#type: "range",
                min: "0",
                max: "{max}",
                step: "{step}",
                value: "{value}",
                oninput: move |evt| match evt.value().parse::<u64>() {
                    Ok(v) => on_change.call(v.min(max)),
                    Err(err) => tracing::warn!("Ignoring slider value {:?}: {err}", evt.value()),
                },
            }
            span { class: "price-value", "{value_str}" }
        }
    }
}
