use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up a required element by id and downcast it to `HtmlElement`.
pub fn require_element(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("#{id} is not an HtmlElement: {e:?}"))
}

/// Measured inner width of the case, in CSS pixels.
#[inline]
pub fn track_width(case: &web::HtmlElement) -> f32 {
    case.offset_width() as f32
}

/// Apply the simulated position as the lid's horizontal offset.
#[inline]
pub fn set_lid_offset(lid: &web::HtmlElement, position_px: f32) {
    let _ = lid
        .style()
        .set_property("left", &format!("{position_px}px"));
}
