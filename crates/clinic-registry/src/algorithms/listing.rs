//! Plain-text rendering of an appointment listing.

use crate::domain::AppointmentView;

/// Text shown when there is nothing to list.
pub const EMPTY_LISTING: &str = "No appointments found.";

/// One line per appointment, in the order given.
pub fn render_listing<'a, I>(views: I) -> String
where
    I: IntoIterator<Item = &'a AppointmentView>,
{
    let lines: Vec<String> = views.into_iter().map(ToString::to_string).collect();
    if lines.is_empty() {
        EMPTY_LISTING.to_string()
    } else {
        lines.join("\n")
    }
}
