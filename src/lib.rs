// Trackith investor landing page — Leptos 0.8 Edition

pub mod sections;
pub mod toast;

use leptos::prelude::*;
use sections::*;
use toast::{ToastViewport, provide_toaster};

#[component]
pub fn App() -> impl IntoView {
    provide_toaster();
    view! {
        <main>
            <Hero />
            <Stats />
            <Features />
            <MarketOpportunity />
            <Survey />
            <ClosingCta />
        </main>
        <ToastViewport />
    }
}
