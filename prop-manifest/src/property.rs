//! Property entries of a manifest and how they lower to [`Property`] values.

use htmlprop_attrs::{property, try_coords, try_srcset};
use htmlprop_builders::{
    CircleCoords, ImageSizes, LinkSizes, MediaQuery, MediaQuerySize, OrientationCase,
    PolyCoords, RectCoords, ScanCase, SrcsetPair,
};
use htmlprop_core::{PropValue, Property, Result};
use serde::Deserialize;

/// One `[[properties]]` entry, selected by its `kind` key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PropertySpec {
    /// A plain attribute value.
    Value { name: String, value: ValueSpec },
    /// `coords` of a rectangle: left, top, right, bottom.
    Rect { coords: [i64; 4] },
    /// `coords` of a circle; the radius may end in `%`.
    Circle { x: i64, y: i64, radius: String },
    /// `coords` of a polygon, one `[x, y]` pair per point.
    Poly { points: Vec<[i64; 2]> },
    /// `media`, as a sequence of query tokens.
    Media { query: Vec<MediaToken> },
    /// `sizes` of an image.
    ImageSizes { entries: Vec<SizeEntry> },
    /// `sizes` of a linked icon.
    LinkSizes { pairs: Vec<[u64; 2]> },
    /// `srcset` image candidates.
    Srcset { candidates: Vec<SrcsetCandidate> },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ValueSpec {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl From<&ValueSpec> for PropValue {
    fn from(value: &ValueSpec) -> Self {
        match value {
            ValueSpec::Bool(b) => PropValue::Bool(*b),
            ValueSpec::Int(i) => PropValue::Int(*i),
            ValueSpec::Str(s) => PropValue::Str(s.clone()),
        }
    }
}

/// A media query keyword, media type or feature.
///
/// Keywords and types are bare strings (`"screen"`, `"and"`); features are
/// single-key tables (`{ width = 600 }`, `{ aspect-ratio = [16, 9] }`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MediaToken {
    And,
    Comma,
    Not,
    All,
    Aural,
    Braille,
    Handheld,
    Projection,
    Print,
    Screen,
    Tty,
    Tv,
    Width(i64),
    Height(i64),
    DeviceWidth(i64),
    DeviceHeight(i64),
    Orientation(OrientationCase),
    AspectRatio(i64, i64),
    DeviceAspectRatio(i64, i64),
    Color(i64),
    ColorIndex(i64),
    Monochrome(i64),
    Resolution(String),
    Scan(ScanCase),
    Grid(bool),
}

impl MediaToken {
    fn apply(&self, query: &mut MediaQuery) -> Result<()> {
        match self {
            Self::And => query.and(),
            Self::Comma => query.comma(),
            Self::Not => query.not(),
            Self::All => query.all(),
            Self::Aural => query.aural(),
            Self::Braille => query.braille(),
            Self::Handheld => query.handheld(),
            Self::Projection => query.projection(),
            Self::Print => query.print(),
            Self::Screen => query.screen(),
            Self::Tty => query.tty(),
            Self::Tv => query.tv(),
            Self::Width(v) => query.width(*v),
            Self::Height(v) => query.height(*v),
            Self::DeviceWidth(v) => query.device_width(*v),
            Self::DeviceHeight(v) => query.device_height(*v),
            Self::Orientation(v) => query.orientation(*v),
            Self::AspectRatio(w, h) => query.aspect_ratio(*w, *h),
            Self::DeviceAspectRatio(w, h) => query.device_aspect_ratio(*w, *h),
            Self::Color(v) => query.color(*v),
            Self::ColorIndex(v) => query.color_index(*v),
            Self::Monochrome(v) => query.monochrome(*v),
            Self::Resolution(v) => query.try_resolution(v)?,
            Self::Scan(v) => query.scan(*v),
            Self::Grid(v) => query.grid(*v),
        };
        Ok(())
    }
}

/// An image `sizes` entry: a bare default size, or a size with conditions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SizeEntry {
    Default(String),
    Group(SizeGroup),
}

/// A size used when its conditions hold: `{ size = "100vw", when = [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SizeGroup {
    pub size: String,
    #[serde(default)]
    pub when: Vec<SizeCondition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizeCondition {
    MinWidth(String),
    MaxWidth(String),
    And,
    Or,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SrcsetCandidate {
    pub url: String,
    pub width: Option<u64>,
    pub density: Option<u64>,
}

impl PropertySpec {
    /// The `kind` key this entry was declared with.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Value { .. } => "value",
            Self::Rect { .. } => "rect",
            Self::Circle { .. } => "circle",
            Self::Poly { .. } => "poly",
            Self::Media { .. } => "media",
            Self::ImageSizes { .. } => "image-sizes",
            Self::LinkSizes { .. } => "link-sizes",
            Self::Srcset { .. } => "srcset",
        }
    }

    /// Run the builder behind this entry and return the attribute it yields.
    pub fn to_property(&self) -> Result<Property> {
        match self {
            Self::Value { name, value } => Ok(property(name.clone(), value)),
            Self::Rect { coords: [l, t, r, b] } => try_coords(&RectCoords::new(*l, *t, *r, *b)),
            Self::Circle { x, y, radius } => try_coords(&CircleCoords::new(*x, *y, radius.clone())),
            Self::Poly { points } => try_coords(&PolyCoords::new(points.iter().copied())),
            Self::Media { query } => {
                let mut media = MediaQuery::new();
                for token in query {
                    token.apply(&mut media)?;
                }
                Ok(htmlprop_attrs::media(&media))
            }
            Self::ImageSizes { entries } => {
                let mut sizes = ImageSizes::new();
                for entry in entries {
                    match entry {
                        SizeEntry::Default(size) => {
                            sizes.default_size(size.clone());
                        }
                        SizeEntry::Group(SizeGroup { size, when }) => {
                            let mut group = MediaQuerySize::new(size.clone());
                            for condition in when {
                                match condition {
                                    SizeCondition::MinWidth(v) => group.min_width(v),
                                    SizeCondition::MaxWidth(v) => group.max_width(v),
                                    SizeCondition::And => group.and(),
                                    SizeCondition::Or => group.or(),
                                };
                            }
                            sizes.group(&group);
                        }
                    }
                }
                Ok(htmlprop_attrs::sizes(&sizes))
            }
            Self::LinkSizes { pairs } => {
                let mut sizes = LinkSizes::new();
                for [width, height] in pairs {
                    sizes.pair(*width, *height);
                }
                Ok(htmlprop_attrs::sizes(&sizes))
            }
            Self::Srcset { candidates } => {
                let pairs: Vec<SrcsetPair> = candidates
                    .iter()
                    .map(|candidate| {
                        let mut pair = SrcsetPair::new(candidate.url.clone());
                        if let Some(width) = candidate.width {
                            pair.width(width);
                        }
                        if let Some(density) = candidate.density {
                            pair.pixel_density(density);
                        }
                        pair
                    })
                    .collect();
                try_srcset(&pairs)
            }
        }
    }
}
