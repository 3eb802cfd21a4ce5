use log::{debug, warn};
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};

use crate::state::ui::Section;

/// Smooth-scrolls to the section's anchor. Returns false if the anchor is missing.
pub fn scroll_to_section(section: Section) -> bool {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.id()))
    else {
        debug!("No #{} anchor on the page, skipping scroll", section.id());
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

pub fn alert(message: &str) {
    if let Some(window) = window() {
        if let Err(e) = window.alert_with_message(message) {
            warn!("Alert was blocked: {:?}", e);
        }
    }
}

pub fn set_document_title(title: &str) {
    if let Some(document) = window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}
