use pixplat_core::Palette;
use web_sys::Window;

/// Reads `--background`, `--primary` and `--secondary` from the document
/// root once. Any failure falls back to the default colors.
pub(crate) fn read_palette(window: &Window) -> Palette {
    let style = window
        .document()
        .and_then(|d| d.document_element())
        .and_then(|root| window.get_computed_style(&root).ok().flatten());

    match style {
        Some(style) => Palette::from_theme(|name| style.get_property_value(name).ok()),
        None => {
            log::warn!("computed style unavailable, using default palette");
            Palette::default()
        }
    }
}
