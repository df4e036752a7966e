//! Marketing navigation component

use astel_core::{PageState, Section};
use leptos::*;

#[component]
pub fn MarketingNav(state: RwSignal<PageState>, logo: String, brand: String) -> impl IntoView {
    let menu_open = create_memo(move |_| state.with(|s| s.menu_open));
    let scrolled = create_memo(move |_| state.with(|s| s.scrolled));

    let nav_class = move || {
        if scrolled.get() {
            "fixed w-full z-50 transition-all duration-300 bg-white shadow-md py-2"
        } else {
            "fixed w-full z-50 transition-all duration-300 bg-transparent py-4"
        }
    };

    view! {
        <nav class=nav_class>
            <div class="container mx-auto px-6 flex justify-between items-center">
                // Logo
                <div class="flex items-center">
                    <div class="h-10 md:h-12 flex items-center">
                        <img src=logo alt=brand class="h-full w-auto object-contain"/>
                    </div>
                </div>

                // Desktop Nav
                <div class="hidden md:flex space-x-8 items-center">
                    {Section::NAV
                        .into_iter()
                        .map(|section| view! {
                            <a
                                href=section.href()
                                class="text-slate-600 hover:text-blue-700 font-medium transition"
                            >
                                {section.label()}
                            </a>
                        })
                        .collect::<Vec<_>>()}
                    <a
                        href=Section::Quote.href()
                        class="px-5 py-2.5 bg-blue-700 text-white font-semibold rounded-lg hover:bg-blue-800 transition shadow-lg hover:shadow-xl transform hover:-translate-y-0.5"
                    >
                        {Section::Quote.label()}
                    </a>
                </div>

                // Mobile menu button
                <button
                    class="md:hidden text-slate-700 focus:outline-none"
                    on:click=move |_| state.update(|s| s.toggle_menu())
                >
                    <Show
                        when=move || menu_open.get()
                        fallback=|| view! {
                            <svg class="h-7 w-7" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                            </svg>
                        }
                    >
                        <svg class="h-7 w-7" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                        </svg>
                    </Show>
                </button>
            </div>

            // Mobile menu; picking a link closes it
            <Show when=move || menu_open.get()>
                <div class="md:hidden absolute top-full left-0 w-full bg-white shadow-lg py-4 px-6 flex flex-col space-y-4 border-t border-slate-100">
                    {Section::NAV
                        .into_iter()
                        .map(|section| view! {
                            <a
                                href=section.href()
                                class="text-slate-600 font-medium"
                                on:click=move |_| state.update(|s| s.close_menu())
                            >
                                {section.label()}
                            </a>
                        })
                        .collect::<Vec<_>>()}
                    <a
                        href=Section::Quote.href()
                        class="text-blue-700 font-bold"
                        on:click=move |_| state.update(|s| s.close_menu())
                    >
                        {Section::Quote.label()}
                    </a>
                </div>
            </Show>
        </nav>
    }
}
