//! Attributes of forms, form controls and meters.

use htmlprop_core::{PropValue, Property};
use regex::Regex;

use crate::{
    cases::{AcceptCase, EnctypeCase, MethodCase, TypeCase, WrapCase},
    join_tokens,
};

attributes! {
    /// Where to send the form data on submit.
    action(value: &str) => "action";

    /// Focus the control when the page loads.
    autofocus(flag: bool) => "autofocus";

    /// Pre-select a checkbox or radio button.
    checked(flag: bool) => "checked";

    /// Visible width of a text area, in characters.
    cols(value: u64) => "cols";

    /// Disable the control or group of controls.
    disabled(flag: bool) => "disabled";

    /// Form the control belongs to.
    form(value: &str) => "form";

    /// Submit target overriding the form's `action`.
    form_action(value: &str) => "formaction";

    /// Lower bound of the high range of a meter.
    high(value: i64) => "high";

    /// `<datalist>` offering predefined options.
    list(value: &str) => "list";

    /// Upper bound of the low range of a meter.
    low(value: i64) => "low";

    /// Maximum value.
    max(value: &str) => "max";

    /// Maximum number of characters.
    max_length(value: u64) => "maxlength";

    /// Minimum value.
    min(value: &str) => "min";

    /// Let the user enter more than one value.
    multiple(flag: bool) => "multiple";

    /// Name of the control.
    name(value: &str) => "name";

    /// Skip validation on submit.
    novalidate(flag: bool) => "novalidate";

    /// Optimal value of a meter.
    optimum(value: i64) => "optimum";

    /// Short hint describing the expected value.
    placeholder(value: &str) => "placeholder";

    /// The value cannot be edited.
    readonly(flag: bool) => "readonly";

    /// The control must be filled out before submitting.
    required(flag: bool) => "required";

    /// Visible number of lines of a text area.
    rows(value: u64) => "rows";

    /// Pre-select an option.
    selected(flag: bool) => "selected";

    /// Width in characters of an input, or visible options of a select.
    size(value: u64) => "size";
}

/// File types the server accepts.
pub fn accept(value: AcceptCase) -> Property {
    Property::new("accept", value)
}

/// Character encodings used for submission.
pub fn accept_charset<S: AsRef<str>>(values: impl IntoIterator<Item = S>) -> Property {
    Property::new("accept-charset", join_tokens(values))
}

/// Enable or disable browser autocompletion.
pub fn autocomplete(flag: bool) -> Property {
    Property::new("autocomplete", if flag { "on" } else { "off" })
}

/// Submit the text direction as `<name>.dir`.
pub fn dirname(value: &str) -> Property {
    Property::new("dirname", format!("{}.dir", value))
}

/// Encoding of the submitted form data.
pub fn enctype(value: EnctypeCase) -> Property {
    Property::new("enctype", value)
}

/// Control a label or output is bound to.
pub fn for_(value: &str) -> Property {
    Property::new("htmlFor", value)
}

/// HTTP method used for submission.
pub fn method(value: MethodCase) -> Property {
    Property::new("method", value)
}

/// Pattern the value is checked against.
pub fn pattern(value: &Regex) -> Property {
    Property::new("pattern", value.as_str())
}

/// Legal number interval; `0` means any value.
pub fn step(value: u64) -> Property {
    if value == 0 {
        Property::new("step", "any")
    } else {
        Property::new("step", value.to_string())
    }
}

/// Type of the element.
pub fn type_(value: TypeCase) -> Property {
    Property::new("type", value)
}

/// Value of the element.
pub fn value(value: impl Into<PropValue>) -> Property {
    Property::new("value", value)
}

/// How submitted text area content is wrapped.
pub fn wrap(value: WrapCase) -> Property {
    Property::new("wrap", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_autocomplete() {
        assert_eq!(autocomplete(true).value(), &PropValue::from("on"));
        assert_eq!(autocomplete(false).value(), &PropValue::from("off"));
    }

    #[test]
    fn test_step() {
        assert_eq!(step(0).value(), &PropValue::from("any"));
        assert_eq!(step(5).value(), &PropValue::from("5"));
    }

    #[test]
    fn test_for_uses_dom_property_name() {
        assert_eq!(for_("email").name(), "htmlFor");
    }

    #[test]
    fn test_dirname() {
        assert_eq!(dirname("comment").value(), &PropValue::from("comment.dir"));
    }

    #[test]
    fn test_pattern_uses_regex_source() {
        let re = Regex::new(r"[0-9]{3}-[0-9]{4}").unwrap();
        assert_eq!(
            pattern(&re).value(),
            &PropValue::from(r"[0-9]{3}-[0-9]{4}")
        );
    }

    #[test]
    fn test_accept_charset() {
        assert_eq!(
            accept_charset(["utf-8", "iso-8859-1"]).value(),
            &PropValue::from("utf-8 iso-8859-1")
        );
    }

    #[test]
    fn test_cases() {
        assert_eq!(accept(AcceptCase::Image).value(), &PropValue::from("image/*"));
        assert_eq!(method(MethodCase::Get).value(), &PropValue::from("GET"));
        assert_eq!(type_(TypeCase::Email).name(), "type");
        assert_eq!(
            enctype(EnctypeCase::MultipartFormData).value(),
            &PropValue::from("multipart/form-data")
        );
    }

    #[test]
    fn test_value_accepts_any_primitive() {
        assert_eq!(value("x").value(), &PropValue::from("x"));
        assert_eq!(value(3u64).value(), &PropValue::UInt(3));
        assert_eq!(max_length(10).value(), &PropValue::UInt(10));
    }
}
