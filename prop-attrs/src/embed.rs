//! Attributes of images, image maps, media elements and frames.

use htmlprop_builders::{
    CoordsSet, Markup, MarkupOptions, SizesSet, SrcsetPair, build_srcset,
};
use htmlprop_core::{Property, Result};

use crate::cases::{KindCase, PreloadCase, ShapeCase};

attributes! {
    /// Alternate text shown when the element fails to display.
    alt(value: &str) => "alt";

    /// Start playing as soon as possible.
    autoplay(flag: bool) => "autoplay";

    /// Show the media controls.
    controls(flag: bool) => "controls";

    /// URL of the resource used by an `<object>`.
    data(value: &str) => "data";

    /// Enable the track unless the user prefers another one.
    default(flag: bool) => "default";

    /// Height of the element, in pixels.
    height(value: u64) => "height";

    /// The image is a server-side image map.
    is_map(flag: bool) => "ismap";

    /// Title of a text track or option.
    label(value: &str) => "label";

    /// Start over when finished.
    loop_(flag: bool) => "loop";

    /// Mute the audio output.
    muted(flag: bool) => "muted";

    /// Image shown until the video plays.
    poster(value: &str) => "poster";

    /// Extra restrictions for the content of an `<iframe>`.
    sandbox(flag: bool) => "sandbox";

    /// URL of the media resource.
    src(value: &str) => "src";

    /// Language of the track text.
    src_lang(value: &str) => "srclang";

    /// Width of the element, in pixels.
    width(value: u64) => "width";
}

/// Coordinates of an `<area>`.
///
/// # Panics
///
/// Panics if the shape is malformed; see [`try_coords`].
#[track_caller]
pub fn coords(value: &(impl CoordsSet + ?Sized)) -> Property {
    Property::new("coords", value.template())
}

pub fn try_coords(value: &(impl CoordsSet + ?Sized)) -> Result<Property> {
    Ok(Property::new("coords", value.try_template()?))
}

/// Kind of a text track.
pub fn kind(value: KindCase) -> Property {
    Property::new("kind", value)
}

/// How the media should be preloaded.
pub fn preload(value: PreloadCase) -> Property {
    Property::new("preload", value)
}

/// Shape of an `<area>`.
pub fn shape(value: ShapeCase) -> Property {
    Property::new("shape", value)
}

/// Rendered sizes of the image candidates, or sizes of a linked icon.
pub fn sizes(value: &(impl SizesSet + ?Sized)) -> Property {
    Property::new("sizes", value.template())
}

/// Inline HTML document of an `<iframe>`.
pub fn src_doc(value: &(impl Markup + ?Sized)) -> Property {
    src_doc_with(value, &MarkupOptions::default())
}

/// Inline HTML document of an `<iframe>`, serialized with `options`.
pub fn src_doc_with(value: &(impl Markup + ?Sized), options: &MarkupOptions) -> Property {
    Property::new("srcdoc", value.to_markup_with(options))
}

/// Image candidates for different situations.
///
/// # Panics
///
/// Panics if a candidate has no descriptor; see [`try_srcset`].
#[track_caller]
pub fn srcset<'a>(values: impl IntoIterator<Item = &'a SrcsetPair>) -> Property {
    try_srcset(values).unwrap_or_else(|e| e.fail())
}

pub fn try_srcset<'a>(values: impl IntoIterator<Item = &'a SrcsetPair>) -> Result<Property> {
    Ok(Property::new("srcset", build_srcset(values)?))
}

/// Client-side image map, referenced by name.
pub fn use_map(value: &str) -> Property {
    Property::new("usemap", format!("#{}", value))
}
