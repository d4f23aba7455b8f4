//! Attributes of tables, lists, quotations, edits and disclosure widgets.

use chrono::{DateTime, TimeZone};
use htmlprop_core::Property;

use crate::cases::ScopeCase;

attributes! {
    /// URL explaining the quotation or change.
    cite(value: &str) => "cite";

    /// Number of columns a cell spans.
    colspan(value: u64) => "colspan";

    /// Header cells a cell is related to.
    headers(value: &str) => "headers";

    /// Show the details to the user.
    open(flag: bool) => "open";

    /// Descending list order.
    reversed(flag: bool) => "reversed";

    /// Number of rows a cell spans.
    row_span(value: u64) => "rowspan";

    /// Number of columns a `<col>` or `<colgroup>` spans.
    span(value: u64) => "span";

    /// Start value of an ordered list.
    start(value: i64) => "start";
}

/// Machine-readable date and time, as RFC 3339.
pub fn datetime<Tz: TimeZone>(value: &DateTime<Tz>) -> Property
where
    Tz::Offset: std::fmt::Display,
{
    Property::new("datetime", value.to_rfc3339())
}

/// Cells a header cell applies to.
pub fn scope(value: ScopeCase) -> Property {
    Property::new("scope", value)
}
