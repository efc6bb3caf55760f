use leptos::prelude::*;

/// Headline metric
struct Stat {
    number: &'static str,
    label: &'static str,
}

const STATS: &[Stat] = &[
    Stat {
        number: "500+",
        label: "Enterprise Clients",
    },
    Stat {
        number: "99.9%",
        label: "Uptime SLA",
    },
    Stat {
        number: "50M+",
        label: "Data Points Tracked",
    },
    Stat {
        number: "85%",
        label: "Efficiency Increase",
    },
];

#[component]
pub fn Stats() -> impl IntoView {
    view! {
        <section class="stats">
            <div class="container">
                <div class="stats-grid">
                    {STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="stat-block">
                                    <div class="stat-number">{stat.number}</div>
                                    <div class="stat-label">{stat.label}</div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
