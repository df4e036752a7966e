//! Card components

use astel_core::{EventRecord, ProductRecord, Section};
use leptos::*;

#[component]
pub fn StatCard(
    value: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <div class="text-3xl font-bold mb-1">{value}</div>
            <div class="text-blue-200 text-sm">{label}</div>
        </div>
    }
}

#[component]
pub fn ProductCard(
    product: ProductRecord,
    image: String,
    on_request_pricing: Callback<ProductRecord>,
) -> impl IntoView {
    let name = product.name.clone();
    let category = product.category.to_string();
    let description = product.description.clone();
    let features = product.features.clone();

    view! {
        <div class="group bg-slate-50 rounded-xl overflow-hidden hover:shadow-2xl transition duration-300 border border-slate-100 flex flex-col">
            <div class="h-64 p-8 flex items-center justify-center bg-white relative overflow-hidden">
                <div class="absolute top-0 right-0 bg-blue-600 text-white text-xs font-bold px-3 py-1 rounded-bl-lg z-10">
                    {category}
                </div>
                <img
                    src=image
                    alt=name.clone()
                    class="h-full w-auto object-contain group-hover:scale-105 transition duration-500"
                />
            </div>
            <div class="p-6 flex-grow flex flex-col">
                <h4 class="text-xl font-bold text-slate-900 mb-2">{name}</h4>
                <p class="text-slate-600 text-sm mb-4 flex-grow">{description}</p>

                <ul class="space-y-2 mb-6">
                    {features.into_iter().map(|feature| view! {
                        <li class="flex items-center text-xs text-slate-500">
                            <span class="text-green-500 mr-2">"✓"</span>
                            {feature}
                        </li>
                    }).collect::<Vec<_>>()}
                </ul>

                <a
                    href=Section::Quote.href()
                    class="w-full block text-center py-2 border-2 border-blue-600 text-blue-600 font-semibold rounded-lg hover:bg-blue-600 hover:text-white transition"
                    on:click=move |_| on_request_pricing.call(product.clone())
                >
                    "Request Pricing"
                </a>
            </div>
        </div>
    }
}

#[component]
pub fn EventCard(
    event: EventRecord,
    on_inquire: Callback<EventRecord>,
) -> impl IntoView {
    let is_past = event.is_past;
    let title = event.title.clone();
    let date = event.date.clone();
    let location = event.location.clone();
    let description = event.description.clone();
    let action = event.action_label();

    let (card_class, date_class, button_class) = if is_past {
        (
            "bg-white p-8 rounded-2xl shadow-sm hover:shadow-md transition border-l-4 flex flex-col border-slate-400 opacity-75",
            "flex items-center font-semibold text-slate-500",
            "w-full text-center py-2 font-bold rounded-lg transition border border-slate-300 text-slate-500 bg-slate-100 cursor-pointer hover:bg-slate-200",
        )
    } else {
        (
            "bg-white p-8 rounded-2xl shadow-sm hover:shadow-md transition border-l-4 flex flex-col border-blue-600",
            "flex items-center font-semibold text-blue-600",
            "w-full text-center py-2 font-bold rounded-lg transition border border-blue-600 text-blue-600 hover:bg-blue-600 hover:text-white",
        )
    };

    view! {
        <div class=card_class>
            <div class="flex items-start justify-between mb-4">
                <div class=date_class>
                    <span class="mr-2">"📅"</span>
                    {date}
                </div>
                <Show when=move || is_past>
                    <span class="text-xs font-bold text-slate-500 bg-slate-200 px-2 py-0.5 rounded-full">
                        "PAST EVENT"
                    </span>
                </Show>
            </div>
            <h4 class="text-xl font-bold text-slate-900 mb-2">{title}</h4>
            <div class="flex items-center text-slate-500 text-sm mb-4">
                <span class="mr-1">"📍"</span>
                {location}
            </div>
            <p class="text-slate-600 text-sm mb-6 flex-grow">{description}</p>
            <button class=button_class on:click=move |_| on_inquire.call(event.clone())>
                {action}
            </button>
        </div>
    }
}

#[component]
pub fn ContactDetail(
    icon: &'static str,
    heading: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="flex items-start">
            <div class="bg-blue-700 p-2 rounded-lg mr-4">
                <span class="text-white">{icon}</span>
            </div>
            <div>
                <p class="text-blue-200 text-sm font-medium uppercase tracking-wide mb-1">{heading}</p>
                {children()}
            </div>
        </div>
    }
}
