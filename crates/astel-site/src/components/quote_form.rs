//! Quote / meeting-request form

use astel_core::{FormField, MailHandoff, QuoteForm as FormModel, TopicOption};
use leptos::*;

use crate::handoff::BrowserMailHandoff;

const INPUT_CLASS: &str = "w-full px-4 py-2 border border-slate-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-blue-500 outline-none transition";
const LABEL_CLASS: &str = "block text-sm font-medium text-slate-700 mb-1";

#[component]
fn TextField(
    form: RwSignal<FormModel>,
    field: FormField,
    input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label class=LABEL_CLASS>{field.to_string()}</label>
            <input
                type=input_type
                name=field.name()
                required=field.is_required()
                class=INPUT_CLASS
                placeholder=placeholder
                on:input=move |ev| form.update(|f| f.update(field, event_target_value(&ev)))
                prop:value=move || form.with(|f| f.fields.get(field).to_string())
            />
        </div>
    }
}

/// Controlled inquiry form. `default_interest` and `initial_message` are the
/// page's pre-fill signals; each overwrites its field only when it changes
/// to a non-empty value.
#[component]
pub fn QuoteForm(
    #[prop(into)] default_interest: Signal<Option<String>>,
    #[prop(into)] initial_message: Signal<Option<String>>,
    contact_email: String,
    signature: String,
    topics: Vec<TopicOption>,
) -> impl IntoView {
    let form = create_rw_signal(FormModel::new());

    create_effect(move |_| {
        let topic = default_interest.get();
        form.update(|f| {
            f.sync_topic(topic.as_deref());
        });
    });

    create_effect(move |_| {
        let message = initial_message.get();
        form.update(|f| {
            f.sync_message(message.as_deref());
        });
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let inquiry = match form.with_untracked(|f| f.submit()) {
            Ok(inquiry) => inquiry,
            Err(err) => {
                tracing::warn!("Inquiry not sent: {}", err);
                return;
            }
        };

        let link = inquiry.to_mailto(&contact_email, &signature);
        tracing::info!(
            to = %link.to(),
            subject = %link.subject(),
            "Opening mail client for inquiry"
        );
        if let Err(err) = BrowserMailHandoff.hand_off(&link) {
            tracing::warn!("{}", err);
        }
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <div class="grid grid-cols-2 gap-4">
                <TextField form=form field=FormField::FirstName input_type="text" placeholder="John"/>
                <TextField form=form field=FormField::LastName input_type="text" placeholder="Doe"/>
            </div>

            <TextField form=form field=FormField::Email input_type="email" placeholder="john@hospital.com"/>
            <TextField form=form field=FormField::Company input_type="text" placeholder="General Hospital"/>

            <div>
                <label class=LABEL_CLASS>{FormField::Topic.to_string()}</label>
                <select
                    name=FormField::Topic.name()
                    class=format!("{INPUT_CLASS} bg-white")
                    on:change=move |ev| form.update(|f| f.update(FormField::Topic, event_target_value(&ev)))
                    prop:value=move || form.with(|f| f.fields.topic.clone())
                >
                    {topics.into_iter().map(|option| {
                        let value = option.value.clone();
                        view! {
                            <option
                                value=option.value
                                selected=move || form.with(|f| f.fields.topic == value)
                            >
                                {option.label}
                            </option>
                        }
                    }).collect::<Vec<_>>()}
                </select>
            </div>

            <div>
                <label class=LABEL_CLASS>{FormField::Message.to_string()}</label>
                <textarea
                    rows="4"
                    name=FormField::Message.name()
                    class=INPUT_CLASS
                    placeholder="I would like to know the pricing for..."
                    on:input=move |ev| form.update(|f| f.update(FormField::Message, event_target_value(&ev)))
                    prop:value=move || form.with(|f| f.fields.message.clone())
                ></textarea>
            </div>

            <button
                type="submit"
                class="w-full bg-blue-600 text-white font-bold py-3 rounded-lg hover:bg-blue-700 transition shadow-md hover:shadow-lg flex justify-center items-center gap-2"
            >
                "✉ Send Request"
            </button>
            <p class="text-xs text-center text-slate-400 mt-2">
                "This will open your default email client."
            </p>
        </form>
    }
}
