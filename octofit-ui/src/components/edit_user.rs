//! Edit User Modal
//!
//! Form over one user record. Closing discards unsaved edits; submitting is
//! handled by the users page.

use leptos::*;
use octofit::{FitnessLevel, FormField, UserEditor};

const INPUT_CLASS: &str = "w-full bg-gray-700 rounded-lg px-4 py-3 \
                           border border-gray-600 focus:border-primary-500 focus:outline-none";

/// Modal dialog bound to the users page editor
#[component]
pub fn EditUserModal(
    editor: RwSignal<UserEditor>,
    #[prop(into)]
    team_options: Signal<Vec<String>>,
    on_submit: impl Fn() + 'static,
) -> impl IntoView {
    let close = move || editor.update(|e| e.close());
    let submitting = move || editor.with(|e| e.is_submitting());

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit();
    };

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-gray-800 rounded-xl p-6 w-full max-w-md mx-4">
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-xl font-semibold">"Edit User Details"</h2>
                    <button on:click=move |_| close() class="text-gray-400 hover:text-white">
                        "✕"
                    </button>
                </div>

                <form on:submit=handle_submit class="space-y-4">
                    <TextField editor=editor field=FormField::Name input_type="text" required=true />
                    <TextField editor=editor field=FormField::Alias input_type="text" required=false />
                    <TextField editor=editor field=FormField::Email input_type="email" required=true />

                    // Team
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">{FormField::Team.label()}</label>
                        <select
                            required
                            on:change=move |ev| {
                                editor.update(|e| e.set_field(FormField::Team, event_target_value(&ev)))
                            }
                            prop:value=move || editor.with(|e| e.form().team.clone())
                            class=INPUT_CLASS
                        >
                            <option value="">"Select a team..."</option>
                            {move || {
                                team_options
                                    .get()
                                    .into_iter()
                                    .map(|name| view! { <option value=name.clone()>{name}</option> })
                                    .collect_view()
                            }}
                        </select>
                    </div>

                    // Fitness level
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">
                            {FormField::FitnessLevel.label()}
                        </label>
                        <select
                            required
                            on:change=move |ev| {
                                editor.update(|e| {
                                    e.set_field(FormField::FitnessLevel, event_target_value(&ev))
                                })
                            }
                            prop:value=move || editor.with(|e| e.form().fitness_level.clone())
                            class=INPUT_CLASS
                        >
                            <option value="">"Select fitness level..."</option>
                            {FitnessLevel::ALL
                                .into_iter()
                                .map(|level| view! { <option value=level.as_str()>{level.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>

                    // Buttons
                    <div class="flex space-x-3 pt-4">
                        <button
                            type="button"
                            on:click=move |_| close()
                            class="flex-1 px-4 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            disabled=submitting
                            class="flex-1 px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                                   rounded-lg font-medium transition-colors"
                        >
                            {move || if submitting() { "Saving..." } else { "Save Changes" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// Labelled text input for one form field
#[component]
fn TextField(
    editor: RwSignal<UserEditor>,
    field: FormField,
    input_type: &'static str,
    required: bool,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{field.label()}</label>
            <input
                type=input_type
                name=field.key()
                required=required
                prop:value=move || editor.with(|e| e.form().get(field).to_string())
                on:input=move |ev| editor.update(|e| e.set_field(field, event_target_value(&ev)))
                class=INPUT_CLASS
            />
        </div>
    }
}
