//! Document head metadata

use leptos::logging::warn;
use schoolpal_core::Page;

/// Set the document title and `description` meta tag for `page`
pub fn apply_page_meta(page: Page) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };

    document.set_title(page.title());

    match document.query_selector("meta[name=\"description\"]") {
        Ok(Some(meta)) => {
            if meta.set_attribute("content", page.description()).is_err() {
                warn!("Could not update description meta tag");
            }
        }
        Ok(None) => warn!("No description meta tag in document"),
        Err(_) => warn!("Description meta tag query failed"),
    }
}
