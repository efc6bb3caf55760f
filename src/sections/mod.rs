// Landing page sections

/// Hosted investor survey the page links out to (single source of truth)
pub const SURVEY_FORM_URL: &str = "https://docs.google.com/forms/d/e/1FAIpQLSfCmLxgQopCFeLyocBAJc7V03NOc7WG5C9ySdyGrj0ptN6wdw/viewform";

mod closing;
mod features;
mod hero;
mod market;
mod stats;
mod survey;

pub use closing::ClosingCta;
pub use features::Features;
pub use hero::Hero;
pub use market::MarketOpportunity;
pub use stats::Stats;
pub use survey::Survey;

/// Open the hosted survey in a new tab. A blocked popup is left to the browser.
pub(crate) fn open_external_survey() {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(SURVEY_FORM_URL, "_blank");
    }
}
