pub mod city_dashboard;
pub mod contact_form;
pub mod extractor;
pub mod fpic_dashboard;
pub mod impact_calculator;
pub mod location_os;
pub mod materiality_panel;
pub mod pricing_tiers;
pub mod risk_chart;
pub mod scorecard;
pub mod toaster;
pub mod water_case_study;

use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Smooth-scrolls to the landing section with the given element id.
/// Does nothing on routes where the section is not mounted.
pub fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::debug!("scroll target #{} not on this page", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
