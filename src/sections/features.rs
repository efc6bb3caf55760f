use leptos::prelude::*;

/// Feature card copy
struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "📊",
        title: "Advanced Analytics",
        description: "Real-time insights and comprehensive reporting that drives data-driven decisions",
    },
    Feature {
        icon: "🎯",
        title: "Precision Tracking",
        description: "Accurate monitoring of key metrics with customizable dashboards and alerts",
    },
    Feature {
        icon: "👥",
        title: "Team Collaboration",
        description: "Seamless workflow management with role-based access and team synchronization",
    },
    Feature {
        icon: "📈",
        title: "Growth Optimization",
        description: "AI-powered recommendations to maximize performance and ROI",
    },
    Feature {
        icon: "🛡",
        title: "Enterprise Security",
        description: "Bank-grade security with SOC 2 compliance and advanced encryption",
    },
    Feature {
        icon: "⚡",
        title: "Lightning Fast",
        description: "Optimized performance with sub-second response times and 99.9% uptime",
    },
];

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Powerful Features That Scale"</h2>
                    <p class="section-description">
                        "Built for enterprise-grade performance with the flexibility to adapt "
                        "to any industry or use case."
                    </p>
                </div>
                <div class="features-grid">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <FeatureCard
                                    icon=feature.icon
                                    title=feature.title
                                    description=feature.description
                                />
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class="feature-icon">{icon}</div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
        </article>
    }
}
