//! Splicing replacement text into a located region

use crate::locate::Region;

/// Replace `region` of `text` with `replacement`.
///
/// Produces `text[..start] + replacement + text[end..]`. The start marker
/// (which sits at `start`) is displaced along with the region body; the end
/// marker (at `end`) and everything after it survive.
///
/// # Panics
///
/// Panics if `region` does not fit `text`; regions returned by
/// [`locate`](crate::locate::locate) for the same text always fit. Use
/// [`Region::validate`] first for regions of other provenance.
pub fn splice(text: &str, region: Region, replacement: &str) -> String {
    let mut out =
        String::with_capacity(region.start() + replacement.len() + (text.len() - region.end()));
    out.push_str(&text[..region.start()]);
    out.push_str(replacement);
    out.push_str(&text[region.end()..]);
    out
}

/// The slice of `text` a splice over `region` would displace.
pub fn replaced_span(text: &str, region: Region) -> &str {
    &text[region.as_range()]
}
