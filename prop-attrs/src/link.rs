//! Attributes of hyperlinks, external resources, scripts and metadata.

use htmlprop_builders::MediaQuery;
use htmlprop_core::{PropValue, Property};

use crate::cases::{HttpEquivCase, RelCase, TargetCase};

attributes! {
    /// Character encoding of the document or script.
    charset(value: &str) => "charset";

    /// Execute the external script when the page has finished parsing.
    defer(flag: bool) => "defer";

    /// Download the target instead of navigating to it.
    download(flag: bool) => "download";

    /// Download the target under the given filename.
    download_with_filename(filename: &str) => "download";

    /// URL the link goes to.
    href(value: &str) => "href";

    /// Language of the linked document.
    href_lang(value: &str) => "hreflang";
}

/// Execute the external script asynchronously.
pub fn async_(flag: bool) -> Property {
    Property::new("async", flag)
}

/// Value associated with `http-equiv` or `name` of a `<meta>`.
pub fn content(value: impl Into<PropValue>) -> Property {
    Property::new("content", value)
}

/// HTTP header supplied by a `<meta>`.
pub fn http_equiv(value: HttpEquivCase) -> Property {
    Property::new("http-equiv", value)
}

/// Media or device the resource is optimized for.
pub fn media(value: &MediaQuery) -> Property {
    Property::new("media", value.build())
}

/// Relationship between the document and the linked resource.
pub fn rel(value: RelCase) -> Property {
    Property::new("rel", value)
}

/// Where to open the link or show the form response.
pub fn target(value: TargetCase) -> Property {
    Property::new("target", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_keeps_trailing_space() {
        let mut query = MediaQuery::new();
        query.screen().and().width(600);
        assert_eq!(
            media(&query).value(),
            &PropValue::from("screen and (width: 600px) ")
        );
    }

    #[test]
    fn test_download_variants_share_a_name() {
        assert_eq!(download(true).name(), "download");
        assert_eq!(
            download_with_filename("report.pdf").value(),
            &PropValue::from("report.pdf")
        );
    }

    #[test]
    fn test_cases() {
        assert_eq!(rel(RelCase::NoReferrer).value(), &PropValue::from("noreferrer"));
        assert_eq!(target(TargetCase::Top).value(), &PropValue::from("_top"));
        assert_eq!(
            http_equiv(HttpEquivCase::Refresh).name(),
            "http-equiv"
        );
        assert_eq!(async_(true).name(), "async");
        assert_eq!(content(30i64).value(), &PropValue::Int(30));
    }
}
