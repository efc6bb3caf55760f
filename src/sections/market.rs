use leptos::prelude::*;

/// Traction bullets, each rendered with a check mark
const PROOF_POINTS: &[&str] = &[
    "40% YoY revenue growth",
    "98% customer retention rate",
    "Fortune 500 client base",
];

struct Metric {
    label: &'static str,
    value: &'static str,
}

const METRICS: &[Metric] = &[
    Metric {
        label: "ARR Growth",
        value: "+150%",
    },
    Metric {
        label: "Market Share",
        value: "12%",
    },
    Metric {
        label: "Customer LTV",
        value: "$2.4M",
    },
];

#[component]
pub fn MarketOpportunity() -> impl IntoView {
    view! {
        <section class="market">
            <div class="container">
                <div class="market-grid">
                    <div class="market-content">
                        <h2 class="section-title">"$2.8T Market Opportunity"</h2>
                        <p class="section-description">
                            "The global data analytics market is experiencing unprecedented growth. "
                            "Trackith is positioned to capture significant market share in the "
                            "enterprise segment."
                        </p>
                        <ul class="proof-list">
                            {PROOF_POINTS
                                .iter()
                                .copied()
                                .map(|point| {
                                    view! {
                                        <li class="proof-item">
                                            <span class="proof-check">"✓"</span>
                                            {point}
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>
                    <div class="market-panel">
                        {METRICS
                            .iter()
                            .map(|metric| {
                                view! {
                                    <div class="metric-row">
                                        <span class="metric-label">{metric.label}</span>
                                        <span class="metric-value">{metric.value}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
}
