//! In-page anchor navigation

use leptos::logging::log;
use schoolpal_core::Section;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Smooth-scroll the element tagged with the section's anchor into view.
/// Does nothing when the element is not in the document.
pub fn scroll_to(section: Section) {
    let id = section.anchor_id();
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    else {
        log!("No element with id \"{id}\", skipping scroll");
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
