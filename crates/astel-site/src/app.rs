//! Main application component

use astel_core::{PageState, SiteConfig};
use leptos::*;

use crate::components::*;
use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    match SiteConfig::builtin() {
        Ok(config) => view! { <Site config=config/> }.into_view(),
        Err(err) => {
            tracing::error!("Failed to load site configuration: {}", err);
            view! {
                <div class="min-h-screen flex items-center justify-center bg-slate-50">
                    <p class="text-slate-600">"This page is temporarily unavailable."</p>
                </div>
            }
            .into_view()
        }
    }
}

/// Owns the page state and the window scroll subscription
#[component]
fn Site(config: SiteConfig) -> impl IntoView {
    let state = create_rw_signal(PageState::new());
    let threshold = config.site.scroll_threshold;

    let scroll_handle = window_event_listener(ev::scroll, move |_| {
        let offset = window().scroll_y().unwrap_or_default();
        state.update(|s| {
            if s.on_scroll(offset, threshold) {
                tracing::trace!(offset, scrolled = s.scrolled, "Nav style changed");
            }
        });
    });
    on_cleanup(move || scroll_handle.remove());

    let SiteConfig {
        site,
        contact,
        products,
        events,
    } = config;
    let logo = site.logo_path.clone();
    let brand = site.brand.clone();
    let page_settings = site.clone();

    view! {
        <div class="min-h-screen font-sans text-slate-800 bg-slate-50">
            <MarketingNav state=state logo=logo brand=brand/>
            <LandingPage
                state=state
                settings=page_settings
                contact=contact
                products=products
                events=events
            />
            <Footer settings=site/>
        </div>
    }
}
