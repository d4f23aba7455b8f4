//! `sizes` templates for `<img>`, `<source>` and `<link>`.

/// Something that renders to a `sizes` attribute value.
pub trait SizesSet {
    fn template(&self) -> String;
}

/// A size guarded by width conditions, e.g. `(max-width: 600px) 480px`.
///
/// Conditions are space-joined and wrapped in parentheses only when there
/// is more than one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaQuerySize {
    conditions: Vec<String>,
    size: String,
}

impl MediaQuerySize {
    pub fn new(size: impl Into<String>) -> Self {
        Self {
            conditions: Vec::new(),
            size: size.into(),
        }
    }

    pub fn min_width(&mut self, value: &str) -> &mut Self {
        self.conditions.push(format!("(min-width: {})", value));
        self
    }

    pub fn max_width(&mut self, value: &str) -> &mut Self {
        self.conditions.push(format!("(max-width: {})", value));
        self
    }

    pub fn and(&mut self) -> &mut Self {
        self.conditions.push("and".to_string());
        self
    }

    pub fn or(&mut self) -> &mut Self {
        self.conditions.push("or".to_string());
        self
    }

    pub fn build(&self) -> String {
        let mut tpl = self.conditions.join(" ");
        if self.conditions.len() > 1 {
            tpl = format!("({})", tpl);
        }
        tpl.push(' ');
        tpl.push_str(&self.size);
        tpl
    }
}

/// `sizes` for `<img>` and `<source>`: a comma list of guarded and default sizes.
///
/// # Example
///
/// ```
/// use htmlprop_builders::sizes::{ImageSizes, MediaQuerySize, SizesSet};
///
/// let mut narrow = MediaQuerySize::new("100vw");
/// narrow.max_width("600px");
///
/// let mut sizes = ImageSizes::new();
/// sizes.group(&narrow).default_size("50vw");
/// assert_eq!(sizes.template(), "(max-width: 600px) 100vw, 50vw");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSizes {
    sizes: Vec<String>,
}

impl ImageSizes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a conditional size. The condition is rendered now, so later
    /// changes to `size` do not affect this entry.
    pub fn group(&mut self, size: &MediaQuerySize) -> &mut Self {
        self.sizes.push(size.build());
        self
    }

    /// Add an unconditional size.
    pub fn default_size(&mut self, size: impl Into<String>) -> &mut Self {
        self.sizes.push(size.into());
        self
    }
}

impl SizesSet for ImageSizes {
    fn template(&self) -> String {
        self.sizes.join(", ")
    }
}

/// `sizes` for `<link rel="icon">`: space-separated `WxH` tokens.
///
/// A pair with a zero side turns the whole value into `any`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkSizes {
    sizes: Vec<[u64; 2]>,
}

impl LinkSizes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pair(&mut self, width: u64, height: u64) -> &mut Self {
        self.sizes.push([width, height]);
        self
    }
}

impl SizesSet for LinkSizes {
    fn template(&self) -> String {
        let mut tpl = String::new();
        for &[width, height] in &self.sizes {
            if width == 0 || height == 0 {
                return "any".to_string();
            }
            tpl.push_str(&format!("{}x{} ", width, height));
        }
        tpl
    }
}
