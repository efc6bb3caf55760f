use leptos::prelude::*;

#[component]
pub fn ClosingCta() -> impl IntoView {
    view! {
        <section class="closing-cta">
            <div class="container">
                <h2 class="closing-title">"Ready to Transform the Future?"</h2>
                <p class="closing-description">
                    "Join us in revolutionizing enterprise data analytics. Let's build the "
                    "next generation of business intelligence together."
                </p>
                <div class="closing-actions">
                    <button class="btn btn-primary">"Download Pitch Deck"</button>
                    <button class="btn btn-secondary">"Schedule Due Diligence Call"</button>
                </div>
            </div>
        </section>
    }
}
