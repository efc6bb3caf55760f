//! Browser-level checks for the mounted page. Run with `wasm-pack test --headless`.

#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use trackith_landing::App;

wasm_bindgen_test_configure!(run_in_browser);

fn mount() -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let host: web_sys::HtmlElement = document
        .create_element("div")
        .unwrap()
        .dyn_into()
        .unwrap();
    document.body().unwrap().append_child(&host).unwrap();
    leptos::mount::mount_to(host.clone(), || view! { <App/> }).forget();
    host
}

/// Leptos schedules reactive updates on the microtask queue
async fn flush() {
    for _ in 0..10 {
        let resolved = js_sys::Promise::resolve(&wasm_bindgen::JsValue::UNDEFINED);
        wasm_bindgen_futures::JsFuture::from(resolved).await.unwrap();
    }
}

#[wasm_bindgen_test]
fn renders_descriptor_sections_in_order() {
    let host = mount();

    let cards = host.query_selector_all(".feature-card").unwrap();
    assert_eq!(cards.length(), 6);
    let first_card = cards.get(0).unwrap();
    assert!(
        first_card
            .text_content()
            .unwrap()
            .contains("Advanced Analytics")
    );

    let stats = host.query_selector_all(".stat-block").unwrap();
    assert_eq!(stats.length(), 4);
    let first_stat = stats.get(0).unwrap();
    assert!(first_stat.text_content().unwrap().contains("500+"));
}

#[wasm_bindgen_test]
fn survey_form_exposes_seven_fields() {
    let host = mount();

    for name in ["name", "company", "email", "interests", "feedback"] {
        let selector = format!("[name='{name}']");
        assert!(
            host.query_selector(&selector).unwrap().is_some(),
            "missing control: {name}"
        );
    }
    // Radio groups share a control name across their options
    assert_eq!(
        host.query_selector_all("[name='investment-size']")
            .unwrap()
            .length(),
        4
    );
    assert_eq!(host.query_selector_all("[name='timeline']").unwrap().length(), 4);
}

#[wasm_bindgen_test]
async fn submit_resets_fields_and_shows_toast() {
    let host = mount();

    let company: web_sys::HtmlInputElement = host
        .query_selector("[name='company']")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    company.set_value("Acme Corp");

    let input_init = web_sys::EventInit::new();
    input_init.set_bubbles(true);
    let input_ev = web_sys::Event::new_with_event_init_dict("input", &input_init).unwrap();
    company.dispatch_event(&input_ev).unwrap();
    flush().await;
    assert_eq!(company.value(), "Acme Corp");

    let form = host.query_selector("form.survey-form").unwrap().unwrap();
    let submit_init = web_sys::EventInit::new();
    submit_init.set_bubbles(true);
    submit_init.set_cancelable(true);
    let submit_ev = web_sys::Event::new_with_event_init_dict("submit", &submit_init).unwrap();
    form.dispatch_event(&submit_ev).unwrap();
    flush().await;

    assert_eq!(company.value(), "");
    assert!(host.query_selector(".toast").unwrap().is_some());
}
