//! Global attributes, valid on every element.

use htmlprop_core::{PropValue, Property};

use crate::{cases::DirCase, join_tokens};

attributes! {
    /// Shortcut key to activate or focus the element.
    access_key(value: &str) => "accesskey";

    /// Whether the content of the element is editable.
    content_editable(flag: bool) => "contenteditable";

    /// Whether the element is draggable.
    draggable(flag: bool) => "draggable";

    /// The element is not, or is no longer, relevant.
    hidden(flag: bool) => "hidden";

    /// Unique id of the element.
    id(value: &str) => "id";

    /// Language of the element's content.
    lang(value: &str) => "lang";

    /// Whether spelling and grammar are checked.
    spell_check(flag: bool) => "spellcheck";

    /// Tabbing order of the element.
    tab_index(value: i64) => "tabindex";

    /// Extra information about the element.
    title(value: &str) => "title";

    /// Whether the content should be translated.
    translate(flag: bool) => "translate";
}

/// One or more class names, space-separated.
pub fn class<S: AsRef<str>>(values: impl IntoIterator<Item = S>) -> Property {
    Property::new("class", join_tokens(values))
}

/// Custom `data-<key>` attribute.
pub fn data_pair(key: &str, value: impl Into<PropValue>) -> Property {
    Property::new(format!("data-{}", key), value)
}

/// Text direction of the element's content.
pub fn dir(value: DirCase) -> Property {
    Property::new("dir", value)
}
