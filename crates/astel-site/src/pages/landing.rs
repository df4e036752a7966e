//! The single landing page: hero, products, events and the quote section

use astel_core::inquiry::topic_options;
use astel_core::{
    ContactInfo, EventRecord, PageState, ProductRecord, Section, SiteSettings, TopicOption,
};
use leptos::*;

use crate::components::*;
use crate::handoff::scroll_to_section;

#[component]
pub fn LandingPage(
    state: RwSignal<PageState>,
    settings: SiteSettings,
    contact: ContactInfo,
    products: Vec<ProductRecord>,
    events: Vec<EventRecord>,
) -> impl IntoView {
    let topics = topic_options(&products);
    let hero_image = settings.product_image_path.clone();
    let card_image = settings.product_image_path.clone();
    let brand = settings.brand.clone();

    view! {
        <main>
            <Hero image=hero_image brand=brand/>
            <StatsBar/>
            <ProductsSection state=state products=products image=card_image/>
            <EventsSection state=state events=events/>
            <QuoteSection state=state settings=settings contact=contact topics=topics/>
        </main>
    }
}

#[component]
fn Hero(image: String, brand: String) -> impl IntoView {
    view! {
        <section id=Section::Home.id() class="relative pt-32 pb-20 md:pt-48 md:pb-32 overflow-hidden">
            <div class="absolute inset-0 z-0 bg-gradient-to-br from-slate-100 to-blue-50 opacity-70"></div>
            <div class="absolute top-0 right-0 w-1/2 h-full bg-blue-100/50 rounded-l-full transform translate-x-1/3 z-0"></div>

            <div class="container mx-auto px-6 relative z-10">
                <div class="flex flex-col md:flex-row items-center gap-12">
                    <div class="md:w-1/2 space-y-6">
                        <div class="inline-block px-3 py-1 bg-blue-100 text-blue-800 rounded-full text-sm font-semibold mb-2">
                            "Advanced Digital Radiography"
                        </div>
                        <h1 class="text-4xl md:text-6xl font-extrabold text-slate-900 leading-tight">
                            "Crystal Clear "
                            <span class="text-blue-700">"Imaging"</span>
                            " Solutions"
                        </h1>
                        <p class="text-lg text-slate-600 leading-relaxed max-w-lg">
                            "Innovating healthcare with state-of-the-art Flat Panel Detectors. "
                            "Experience precision, speed, and reliability with " {brand.clone()} "."
                        </p>
                        <div class="flex flex-wrap gap-4 pt-4">
                            <a
                                href=Section::Products.href()
                                class="px-8 py-3 bg-blue-700 text-white font-bold rounded-lg hover:bg-blue-800 transition shadow-lg flex items-center gap-2"
                            >
                                "View Products →"
                            </a>
                            <a
                                href=Section::Contact.href()
                                class="px-8 py-3 bg-white text-slate-700 font-bold rounded-lg border border-slate-200 hover:border-blue-300 hover:bg-blue-50 transition"
                            >
                                "Contact Us"
                            </a>
                        </div>
                    </div>
                    <div class="md:w-1/2 flex justify-center">
                        <div class="relative w-full max-w-md flex justify-center">
                            <div class="absolute inset-0 bg-blue-200 rounded-full filter blur-3xl opacity-30 transform scale-110"></div>
                            <img
                                src=image
                                alt=format!("{brand} Flat Panel Detector")
                                class="relative z-10 h-auto w-3/4 md:w-full object-contain drop-shadow-2xl transform -rotate-6 hover:rotate-0 transition duration-700 ease-out"
                            />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn StatsBar() -> impl IntoView {
    view! {
        <div class="bg-blue-900 text-white py-12">
            <div class="container mx-auto px-6">
                <div class="grid grid-cols-2 md:grid-cols-4 gap-8 text-center">
                    <StatCard value="Global" label="Distribution Network"/>
                    <StatCard value="ISO" label="Certified Quality"/>
                    <StatCard value="24/7" label="Technical Support"/>
                    <StatCard value="Premium" label="FPD Technology"/>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProductsSection(
    state: RwSignal<PageState>,
    products: Vec<ProductRecord>,
    image: String,
) -> impl IntoView {
    let on_request_pricing =
        Callback::new(move |product: ProductRecord| state.update(|s| s.request_pricing(&product)));

    view! {
        <section id=Section::Products.id() class="py-24 bg-white">
            <div class="container mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-sm font-bold text-blue-600 uppercase tracking-wider mb-2">"Our Technology"</h2>
                    <h3 class="text-3xl md:text-4xl font-bold text-slate-900">"Flat Panel Detectors"</h3>
                    <div class="w-24 h-1 bg-blue-600 mx-auto mt-6 rounded-full"></div>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {products.into_iter().map(|product| view! {
                        <ProductCard
                            product=product
                            image=image.clone()
                            on_request_pricing=on_request_pricing
                        />
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn EventsSection(state: RwSignal<PageState>, events: Vec<EventRecord>) -> impl IntoView {
    let show_all = create_memo(move |_| state.with(|s| s.show_all_events));
    let heading = create_memo(move |_| state.with(|s| s.events_heading()));
    let toggle_label = create_memo(move |_| state.with(|s| s.events_toggle_label()));

    let on_inquire = Callback::new(move |event: EventRecord| {
        let target = state.try_update(|s| s.book_meeting(&event));
        if let Some(section) = target {
            scroll_to_section(section);
        }
    });

    let visible = move || {
        let show_all = show_all.get();
        astel_core::catalog::visible_events(&events, show_all)
            .into_iter()
            .cloned()
            .map(|event| view! { <EventCard event=event on_inquire=on_inquire/> })
            .collect::<Vec<_>>()
    };

    view! {
        <section id=Section::Events.id() class="py-24 bg-slate-100">
            <div class="container mx-auto px-6">
                <div class="flex flex-col md:flex-row justify-between items-end mb-12">
                    <div>
                        <h2 class="text-sm font-bold text-blue-600 uppercase tracking-wider mb-2">"Networking"</h2>
                        <h3 class="text-3xl md:text-4xl font-bold text-slate-900">
                            {heading}
                        </h3>
                    </div>
                    <button
                        class="flex items-center text-blue-700 font-semibold hover:text-blue-900 mt-4 md:mt-0 transition"
                        on:click=move |_| state.update(|s| s.toggle_event_visibility())
                    >
                        {toggle_label}
                        <span class="ml-1">{move || if show_all.get() { "‹" } else { "›" }}</span>
                    </button>
                </div>

                <div class="grid md:grid-cols-3 gap-8">
                    {visible}
                </div>
            </div>
        </section>
    }
}

#[component]
fn QuoteSection(
    state: RwSignal<PageState>,
    settings: SiteSettings,
    contact: ContactInfo,
    topics: Vec<TopicOption>,
) -> impl IntoView {
    let active_topic = create_memo(move |_| state.with(|s| s.active_topic.clone()));
    let prefill_message = create_memo(move |_| state.with(|s| s.prefill_message.clone()));
    let mailto = contact.mailto();
    let ContactInfo {
        name,
        email,
        phone,
        fax,
        mobile,
        address,
    } = contact;
    let contact_email = email.clone();

    view! {
        <section id=Section::Quote.id() class="py-24 bg-white relative">
            <div class="container mx-auto px-6">
                <div class="bg-blue-900 rounded-3xl overflow-hidden shadow-2xl flex flex-col md:flex-row">
                    // Form
                    <div class="md:w-3/5 p-8 md:p-12 lg:p-16 bg-white">
                        <h3 class="text-3xl font-bold text-slate-900 mb-2">"Get a Quote / Book Meeting"</h3>
                        <p class="text-slate-600 mb-8">"Tell us about your requirements or preferred meeting time."</p>

                        <QuoteForm
                            default_interest=active_topic
                            initial_message=prefill_message
                            contact_email=contact_email
                            signature=settings.mail_signature
                            topics=topics
                        />
                    </div>

                    // Contact Info
                    <div class="md:w-2/5 bg-blue-800 p-8 md:p-12 text-blue-50 flex flex-col justify-between relative overflow-hidden">
                        <div class="absolute top-0 right-0 -mt-10 -mr-10 w-40 h-40 bg-blue-700 rounded-full opacity-50"></div>
                        <div class="absolute bottom-0 left-0 -mb-10 -ml-10 w-40 h-40 bg-blue-900 rounded-full opacity-50"></div>

                        <div class="relative z-10">
                            <h4 class="text-xl font-bold text-white mb-6">"Contact Information"</h4>

                            <div class="space-y-6">
                                <ContactDetail icon="📍" heading="Address">
                                    <p class="text-white leading-relaxed">{address}</p>
                                </ContactDetail>

                                <ContactDetail icon="📞" heading="Phone / Fax">
                                    <p class="text-white">"T: " {phone}</p>
                                    <p class="text-blue-200">"F: " {fax}</p>
                                </ContactDetail>

                                <ContactDetail icon="✉" heading="Direct Contact">
                                    <p class="text-white font-bold">{name}</p>
                                    <a href=mailto class="text-blue-200 hover:text-white transition block">
                                        {email}
                                    </a>
                                    <p class="text-white mt-2 flex items-center gap-2">
                                        <span class="bg-green-500 w-2 h-2 rounded-full"></span>
                                        "WhatsApp: " {mobile}
                                    </p>
                                </ContactDetail>
                            </div>
                        </div>

                        <div class="mt-12 relative z-10">
                            <p class="text-sm text-blue-300">"\"Committed to excellence in medical imaging technology.\""</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
