use leptos::prelude::*;

/// Row of radio pills for a small fixed set of options
/// (consumption mode, document type).
#[component]
pub fn ChoiceGroup(
    /// Label for the group
    #[prop(optional, into)]
    label: Option<String>,
    /// Name attribute (for grouping)
    #[prop(into)]
    name: String,
    /// Options: (value, label) pairs
    options: Vec<(&'static str, &'static str)>,
    /// Currently selected value
    value: Signal<String>,
    /// Called with the newly selected value
    on_change: Callback<String>,
    /// Disabled state
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {label.map(|l| view! { <label class="form__label">{l}</label> })}
            <div class="form__radio-group">
                {options
                    .into_iter()
                    .map(|(option_value, option_label)| {
                        let radio_id = format!("{}-{}", name, option_value);
                        let label_for = radio_id.clone();
                        view! {
                            <label class="form__radio-wrapper" for=label_for>
                                <input
                                    id=radio_id
                                    type="radio"
                                    class="form__radio"
                                    name=name.clone()
                                    value=option_value
                                    prop:checked=move || value.get() == option_value
                                    disabled=move || disabled.get().unwrap_or(false)
                                    on:change=move |_| on_change.run(option_value.to_string())
                                />
                                <span class="form__radio-label">{option_label}</span>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
