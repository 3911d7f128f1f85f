use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands;

/// A single text preference with its own save button and status.
#[component]
fn PreferenceField(
    /// Preference key in the backend store
    #[prop(into)]
    pref_key: String,
    #[prop(into)]
    label: String,
    #[prop(into)]
    placeholder: String,
    #[prop(into)]
    description: String,
) -> impl IntoView {
    let (value, set_value) = signal(String::new());
    let (field_status, set_field_status) = signal::<Option<String>>(None);

    let load_key = pref_key.clone();
    Effect::new(move |_| {
        let key = load_key.clone();
        spawn_local(async move {
            match commands::get_preference(&key).await {
                Ok(Some(saved)) => set_value.set(saved),
                Ok(None) => {}
                Err(e) => set_field_status.set(Some(format!("Failed to load preference: {}", e))),
            }
        });
    });

    let save_key = pref_key.clone();
    let save = move |_| {
        let key = save_key.clone();
        let v = value.get_untracked();
        spawn_local(async move {
            match commands::set_preference(&key, &v).await {
                Ok(()) => set_field_status.set(Some("Saved".to_string())),
                Err(e) => set_field_status.set(Some(format!("Failed to save: {}", e))),
            }
        });
    };

    view! {
        <div class="form-group">
            <label for={pref_key.clone()}>{label}</label>
            <p class="section-description">{description}</p>
            <div class="input-row">
                <input
                    id=pref_key
                    type="text"
                    class="input"
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| {
                        set_value.set(event_target_value(&ev));
                    }
                />
                <button class="btn btn-save" on:click=save>"Save"</button>
            </div>
            <Show when=move || field_status.get().is_some()>
                <span class="status-text">{move || field_status.get().unwrap_or_default()}</span>
            </Show>
        </div>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <div class="page settings-page">
            <h2>"Settings"</h2>

            <section class="settings-section">
                <PreferenceField
                    pref_key="meeting_host"
                    label="Meeting host"
                    placeholder="meet.google.com"
                    description="Checks only run on tabs served from this host."
                />
                <PreferenceField
                    pref_key="panel_label"
                    label="People panel label"
                    placeholder="참가자"
                    description="Label of the participants panel in your Meet language. English \"People\" is always tried too."
                />
            </section>
        </div>
    }
}
