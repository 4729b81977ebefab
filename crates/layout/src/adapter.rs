use crate::zone::{self, Frame};
use crate::LayoutError;
use banner_types::{Element, Format};
use log::debug;

/// Adapts `elements` to the format string `format` (`"WxH"`).
///
/// The output has the same length and order as the input; each entry is a copy
/// of the corresponding input with position and/or size replaced by its zone
/// rule. Malformed formats are rejected before any element is touched.
pub fn adapt(format: &str, elements: &[Element]) -> Result<Vec<Element>, LayoutError> {
    let format = Format::parse(format)?;
    Ok(adapt_to(format, elements))
}

/// Same as [`adapt`] for an already validated format. Never fails.
pub fn adapt_to(format: Format, elements: &[Element]) -> Vec<Element> {
    let frame = Frame::for_format(format);
    debug!(
        "Adapting {} element(s) to {} (scale {:.4})",
        elements.len(),
        format,
        frame.scale
    );
    elements.iter().map(|el| zone::place(el, &frame)).collect()
}
