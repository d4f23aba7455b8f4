//! Closed sets of attribute values.

use std::fmt;

use htmlprop_core::PropValue;

macro_rules! cases {
    (
        $(
            $(#[$meta:meta])*
            $name:ident {
                $( $variant:ident => $value:literal ),* $(,)?
            }
        )*
    ) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            pub enum $name {
                $( $variant, )*
            }

            impl $name {
                /// Every value, in declaration order.
                pub const ALL: &'static [Self] = &[$( Self::$variant ),*];

                /// The attribute value as written in HTML.
                pub fn as_str(&self) -> &'static str {
                    match self {
                        $( Self::$variant => $value, )*
                    }
                }

                /// Look up a value by its HTML spelling.
                pub fn parse(value: &str) -> Option<Self> {
                    Self::ALL.iter().copied().find(|case| case.as_str() == value)
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl From<$name> for PropValue {
                fn from(case: $name) -> Self {
                    PropValue::Str(case.as_str().to_string())
                }
            }
        )*
    };
}

cases! {
    /// File types accepted by `<input type="file">`.
    AcceptCase {
        Audio => "audio/*",
        Video => "video/*",
        Image => "image/*",
    }

    /// Text direction.
    DirCase {
        Ltr => "ltr",
        Rtl => "rtl",
        Auto => "auto",
    }

    /// Form submission encoding.
    EnctypeCase {
        FormUrlencoded => "application/x-www-form-urlencoded",
        MultipartFormData => "multipart/form-data",
        PlainText => "text/plain",
    }

    /// Pragma directives of `<meta http-equiv>`.
    HttpEquivCase {
        ContentSecurityPolicy => "content-security-policy",
        ContentType => "content-type",
        DefaultStyle => "default-style",
        Refresh => "refresh",
    }

    /// Kind of `<track>`.
    KindCase {
        Captions => "captions",
        Chapters => "chapters",
        Descriptions => "descriptions",
        Metadata => "metadata",
        Subtitles => "subtitles",
    }

    /// Form submission method.
    MethodCase {
        Get => "GET",
        Post => "POST",
    }

    /// Media preloading hint.
    PreloadCase {
        Auto => "auto",
        Metadata => "metadata",
        None => "none",
    }

    /// Link relationship.
    RelCase {
        Alternate => "alternate",
        Author => "author",
        Bookmark => "bookmark",
        External => "external",
        Help => "help",
        Licence => "licence",
        Next => "next",
        Nofollow => "nofollow",
        NoOpener => "noopener",
        NoReferrer => "noreferrer",
        Prev => "prev",
        Search => "search",
        Tag => "tag",
    }

    /// Cells covered by a header cell.
    ScopeCase {
        Col => "col",
        Row => "row",
        ColGroup => "colgroup",
        RowGroup => "rowgroup",
    }

    /// Shape of an `<area>`.
    ShapeCase {
        Default => "default",
        Rect => "rect",
        Circle => "circle",
        Poly => "poly",
    }

    /// Browsing context for navigation.
    TargetCase {
        Blank => "_blank",
        SelfContext => "_self",
        Parent => "_parent",
        Top => "_top",
    }

    /// Element type for `type`.
    TypeCase {
        Button => "button",
        Checkbox => "checkbox",
        Color => "color",
        Date => "date",
        Datetime => "datetime",
        DatetimeLocal => "datetime-local",
        Email => "email",
        File => "file",
        Hidden => "hidden",
        Image => "image",
        Month => "month",
        Number => "number",
        Password => "password",
        Radio => "radio",
        Range => "range",
        Min => "min",
        Max => "max",
        Value => "value",
        Step => "step",
        Reset => "reset",
        Search => "search",
        Submit => "submit",
        Tel => "tel",
        Text => "text",
        Time => "time",
        Url => "url",
        Week => "week",
        List => "list",
        Context => "context",
        Toolbar => "toolbar",
        Module => "module",
    }

    /// Line wrapping of submitted `<textarea>` text.
    WrapCase {
        Soft => "soft",
        Hard => "hard",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(AcceptCase::Audio.as_str(), "audio/*");
        assert_eq!(MethodCase::Post.as_str(), "POST");
        assert_eq!(TargetCase::SelfContext.as_str(), "_self");
        assert_eq!(TypeCase::DatetimeLocal.to_string(), "datetime-local");
    }

    #[test]
    fn test_parse() {
        assert_eq!(RelCase::parse("noopener"), Some(RelCase::NoOpener));
        assert_eq!(ShapeCase::parse("poly"), Some(ShapeCase::Poly));
        assert_eq!(ShapeCase::parse("polygon"), None);
    }

    #[test]
    fn test_all_is_complete() {
        assert_eq!(TypeCase::ALL.len(), 31);
        assert_eq!(RelCase::ALL.len(), 13);
        for case in KindCase::ALL {
            assert_eq!(KindCase::parse(case.as_str()), Some(*case));
        }
    }

    #[test]
    fn test_into_prop_value() {
        assert_eq!(PropValue::from(WrapCase::Hard), PropValue::from("hard"));
    }
}
