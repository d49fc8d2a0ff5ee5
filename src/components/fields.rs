//! Shared form inputs with inline validation errors

use leptos::prelude::*;

/// "required" rule; returns the error text when the value is blank
pub fn required(label: &str, value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(format!("{} is required", label))
    } else {
        None
    }
}

/// Minimum-length rule, applied on top of `required`
pub fn min_len(label: &str, value: &str, min: usize) -> Option<String> {
    required(label, value).or_else(|| {
        if value.trim().len() < min {
            Some(format!("{} should be at least {} characters", label, min))
        } else {
            None
        }
    })
}

/// Labelled text input with inline error text
#[component]
pub fn TextField(
    label: &'static str,
    value: RwSignal<String>,
    error: RwSignal<Option<String>>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="field-label">{label}</label>
            {if multiline {
                view! {
                    <textarea
                        prop:value=move || value.get()
                        on:input=move |ev| value.set(event_target_value(&ev))
                        rows="4"
                        class="input"
                    ></textarea>
                }
                .into_any()
            } else {
                view! {
                    <input
                        type=input_type
                        prop:value=move || value.get()
                        on:input=move |ev| value.set(event_target_value(&ev))
                        class="input"
                    />
                }
                .into_any()
            }}
            <Show when=move || error.get().is_some()>
                <p class="field-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}

/// Labelled select with a placeholder option and inline error text
#[component]
pub fn SelectField(
    label: &'static str,
    value: RwSignal<String>,
    error: RwSignal<Option<String>>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="field-label">{label}</label>
            <select class="input" on:change=move |ev| value.set(event_target_value(&ev))>
                {move || {
                    let current = value.get();
                    let mut items = vec![view! {
                        <option value="" disabled=true selected=current.is_empty()>
                            {format!("Select {}", label)}
                        </option>
                    }
                    .into_any()];
                    for (val, text) in options.get() {
                        let selected = val == current;
                        items.push(
                            view! {
                                <option value=val selected=selected>{text}</option>
                            }
                            .into_any(),
                        );
                    }
                    items
                }}
            </select>
            <Show when=move || error.get().is_some()>
                <p class="field-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank_values() {
        assert_eq!(required("Name", ""), Some("Name is required".to_string()));
        assert_eq!(required("Name", "   "), Some("Name is required".to_string()));
        assert_eq!(required("Name", "North Tower"), None);
    }

    #[test]
    fn min_len_reports_required_first() {
        assert_eq!(min_len("Title", "", 5), Some("Title is required".to_string()));
    }

    #[test]
    fn min_len_enforces_the_threshold() {
        assert_eq!(
            min_len("Title", "Drip", 5),
            Some("Title should be at least 5 characters".to_string())
        );
        assert_eq!(min_len("Title", "Leaky tap", 5), None);
    }

    #[test]
    fn min_len_ignores_surrounding_whitespace() {
        assert_eq!(
            min_len("Title", "  Drip  ", 5),
            Some("Title should be at least 5 characters".to_string())
        );
    }
}
