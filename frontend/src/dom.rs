use web_sys::window;

/// Smoothly scrolls the section with the given element id into view. The
/// smoothing comes from `scroll-behavior: smooth` on the document.
pub fn scroll_to_section(id: &str) {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match element {
        Some(element) => element.scroll_into_view(),
        None => log::warn!("No section with id `{}` to scroll to", id),
    }
}

/// Vertical scroll offset of the document, 0 when unavailable.
pub fn scroll_top() -> i32 {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|e| e.scroll_top())
        .unwrap_or(0)
}
