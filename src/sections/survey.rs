use super::open_external_survey;
use crate::toast::{Toast, use_toaster};
use leptos::prelude::*;

/// Confirmation shown after the on-page form submits
const SUBMIT_TOAST: Toast = Toast {
    title: "Survey Submitted!",
    description: "Thank you for your interest. We'll be in touch soon.",
};

const INVESTMENT_SIZES: &[&str] = &["Under $250K", "$250K-$1M", "$1M-$5M", "$5M+"];

const TIMELINES: &[&str] = &[
    "Immediately",
    "Within 3 months",
    "3-6 months",
    "Exploring options",
];

/// In-memory draft of the investor interest form. Never leaves the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct SurveyDraft {
    name: String,
    company: String,
    email: String,
    investment_size: String,
    timeline: String,
    interests: String,
    feedback: String,
}

impl SurveyDraft {
    fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.company.is_empty()
            && self.email.is_empty()
            && self.investment_size.is_empty()
            && self.timeline.is_empty()
            && self.interests.is_empty()
            && self.feedback.is_empty()
    }
}

#[component]
pub fn Survey() -> impl IntoView {
    let draft = RwSignal::new(SurveyDraft::default());
    let toaster = use_toaster();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        toaster.show(SUBMIT_TOAST);
        draft.set(SurveyDraft::default());
    };

    view! {
        <section id="survey" class="survey">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Partner With Trackith"</h2>
                    <p class="section-description">
                        "Join leading investors in shaping the future of enterprise analytics. "
                        "Share your investment interests with us."
                    </p>
                </div>

                <div class="survey-card">
                    <div class="survey-card-header">
                        <h3 class="survey-card-title">"Investment Interest Survey"</h3>
                        <p class="survey-card-subtitle">
                            "Complete our detailed investment survey to help us understand "
                            "your criteria and timeline"
                        </p>
                    </div>
                    <div class="survey-card-body">
                        <p class="survey-pitch">
                            "Our comprehensive survey covers investment size, timeline, sector "
                            "preferences, and specific areas of interest. This helps us provide "
                            "you with the most relevant information about Trackith's investment "
                            "opportunity."
                        </p>
                        <button class="btn btn-primary btn-wide" on:click=move |_| open_external_survey()>
                            "Complete Investment Survey ↗"
                        </button>
                        <p class="survey-note">"Survey takes approximately 3-5 minutes to complete"</p>
                    </div>
                </div>

                // Lightweight alternative to the hosted survey, kept on-page
                <form class="survey-form" on:submit=submit>
                    <div class="form-row">
                        <div class="form-field">
                            <label class="form-label">"Name"</label>
                            <input
                                type="text"
                                name="name"
                                placeholder="Jane Doe"
                                prop:value=move || draft.with(|d| d.name.clone())
                                on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-field">
                            <label class="form-label">"Company"</label>
                            <input
                                type="text"
                                name="company"
                                placeholder="Acme Capital"
                                prop:value=move || draft.with(|d| d.company.clone())
                                on:input=move |ev| draft.update(|d| d.company = event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div class="form-field">
                        <label class="form-label">"Email"</label>
                        <input
                            type="email"
                            name="email"
                            placeholder="you@fund.com"
                            prop:value=move || draft.with(|d| d.email.clone())
                            on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                        />
                    </div>

                    <fieldset class="form-field">
                        <legend class="form-label">"Investment size"</legend>
                        <div class="radio-row">
                            {INVESTMENT_SIZES
                                .iter()
                                .copied()
                                .map(|size| {
                                    view! {
                                        <label class="radio-option">
                                            <input
                                                type="radio"
                                                name="investment-size"
                                                value=size
                                                prop:checked=move || draft.with(|d| d.investment_size == size)
                                                on:change=move |_| {
                                                    draft.update(|d| d.investment_size = size.to_string())
                                                }
                                            />
                                            <span>{size}</span>
                                        </label>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </fieldset>

                    <fieldset class="form-field">
                        <legend class="form-label">"Timeline"</legend>
                        <div class="radio-row">
                            {TIMELINES
                                .iter()
                                .copied()
                                .map(|timeline| {
                                    view! {
                                        <label class="radio-option">
                                            <input
                                                type="radio"
                                                name="timeline"
                                                value=timeline
                                                prop:checked=move || draft.with(|d| d.timeline == timeline)
                                                on:change=move |_| {
                                                    draft.update(|d| d.timeline = timeline.to_string())
                                                }
                                            />
                                            <span>{timeline}</span>
                                        </label>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </fieldset>

                    <div class="form-field">
                        <label class="form-label">"Areas of interest"</label>
                        <input
                            type="text"
                            name="interests"
                            placeholder="Analytics, infrastructure, AI tooling..."
                            prop:value=move || draft.with(|d| d.interests.clone())
                            on:input=move |ev| draft.update(|d| d.interests = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-field">
                        <label class="form-label">"Feedback"</label>
                        <textarea
                            name="feedback"
                            rows="4"
                            placeholder="Anything you'd like us to know"
                            prop:value=move || draft.with(|d| d.feedback.clone())
                            on:input=move |ev| draft.update(|d| d.feedback = event_target_value(&ev))
                        ></textarea>
                    </div>

                    <button type="submit" class="btn btn-primary">
                        "Share Interest"
                    </button>
                </form>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn draft_starts_empty() {
        let draft = SurveyDraft::default();
        assert!(draft.is_empty());
        assert_eq!(draft.company, "");
    }

    #[test]
    fn populated_draft_is_not_empty() {
        let draft = SurveyDraft {
            company: "Acme Corp".into(),
            ..Default::default()
        };
        assert!(!draft.is_empty());
        assert_ne!(draft, SurveyDraft::default());
    }

    #[test]
    fn reset_clears_every_field() {
        let mut draft = SurveyDraft {
            name: "Jane Doe".into(),
            company: "Acme Corp".into(),
            email: "jane@acme.com".into(),
            investment_size: "$5M+".into(),
            timeline: "Immediately".into(),
            interests: "Analytics".into(),
            feedback: "Looks promising".into(),
        };
        assert!(!draft.is_empty());
        draft = SurveyDraft::default();
        assert!(draft.is_empty());
    }

    #[test]
    fn submit_toast_payload_is_fixed() {
        assert_eq!(SUBMIT_TOAST.title, "Survey Submitted!");
        assert_eq!(
            SUBMIT_TOAST.description,
            "Thank you for your interest. We'll be in touch soon."
        );
    }

    #[test]
    fn radio_options_are_distinct() {
        for options in [INVESTMENT_SIZES, TIMELINES] {
            assert_eq!(options.len(), 4);
            for (i, a) in options.iter().enumerate() {
                assert!(!options[i + 1..].contains(a));
            }
        }
    }
}
