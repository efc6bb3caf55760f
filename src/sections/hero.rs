use super::open_external_survey;
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-content">
                    <div class="hero-badge">
                        <span class="hero-badge-dot"></span>
                        "Series A Funding Opportunity"
                    </div>
                    <h1 class="hero-title">
                        "The Future of"
                        <br />
                        <span class="hero-title-accent">"Data Tracking"</span>
                    </h1>
                    <p class="hero-description">
                        "Trackith revolutionizes how enterprises monitor, analyze, and optimize "
                        "their operations with AI-powered insights and real-time analytics."
                    </p>
                    <div class="hero-actions">
                        <button class="btn btn-primary">
                            "View Investment Deck →"
                        </button>
                        <button class="btn btn-secondary" on:click=move |_| open_external_survey()>
                            "Take Investor Survey ↗"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
