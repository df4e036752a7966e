//! Site footer

use astel_core::{Section, SiteSettings};
use chrono::Datelike;
use leptos::*;

const PRODUCT_LINKS: [&str; 4] = [
    "Static Detectors",
    "Mobile Detectors",
    "Veterinary Solutions",
    "Software",
];

const LEGAL_LINKS: [&str; 3] = ["Privacy Policy", "Terms of Service", "Support"];

const SOCIAL: [&str; 3] = ["In", "Tw", "Fb"];

#[component]
fn LinkColumn(heading: &'static str, links: &'static [&'static str]) -> impl IntoView {
    view! {
        <div>
            <h5 class="text-white font-bold mb-4">{heading}</h5>
            <ul class="space-y-2 text-sm">
                {links.iter().map(|link| view! {
                    <li><a href="#" class="hover:text-blue-400 transition">{*link}</a></li>
                }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

#[component]
pub fn Footer(settings: SiteSettings) -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer id=Section::Contact.id() class="bg-slate-900 text-slate-400 py-12 border-t border-slate-800">
            <div class="container mx-auto px-6">
                <div class="grid md:grid-cols-4 gap-8 mb-8">
                    <div class="col-span-1 md:col-span-2">
                        <div class="text-2xl font-bold text-white mb-4 flex items-center gap-3">
                            <img
                                src=settings.logo_path
                                alt=format!("{} Logo", settings.brand)
                                class="h-8 w-auto brightness-0 invert"
                            />
                        </div>
                        <p class="max-w-xs mb-6">
                            "Leading provider of digital radiography solutions, delivering "
                            "high-quality imaging for better diagnostics worldwide."
                        </p>
                    </div>
                    <LinkColumn heading="Products" links=&PRODUCT_LINKS/>
                    <LinkColumn heading="Legal" links=&LEGAL_LINKS/>
                </div>
                <div class="border-t border-slate-800 pt-8 flex flex-col md:flex-row justify-between items-center text-sm">
                    <p>"© " {year} " " {settings.company} ". All rights reserved."</p>
                    <div class="flex space-x-4 mt-4 md:mt-0">
                        {SOCIAL.iter().map(|label| view! {
                            <div class="w-8 h-8 bg-slate-800 rounded-full flex items-center justify-center hover:bg-blue-600 transition cursor-pointer">
                                {*label}
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
