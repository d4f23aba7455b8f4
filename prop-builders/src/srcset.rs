//! Image candidate strings for the `srcset` attribute.

use htmlprop_core::{BuildError, Result};

/// One `srcset` candidate: a URL and a width or pixel-density descriptor.
///
/// The descriptor set last wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrcsetPair {
    url: String,
    template: String,
}

impl SrcsetPair {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            template: String::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Width descriptor, `url Nw`.
    pub fn width(&mut self, value: u64) -> &mut Self {
        self.template = format!("{} {}w", self.url, value);
        self
    }

    /// Pixel density descriptor, `url Nx`.
    pub fn pixel_density(&mut self, value: u64) -> &mut Self {
        self.template = format!("{} {}x", self.url, value);
        self
    }

    pub fn try_build(&self) -> Result<String> {
        if self.template.is_empty() {
            return Err(BuildError::MissingDescriptor {
                value: self.template.clone(),
            });
        }
        Ok(self.template.clone())
    }

    /// # Panics
    ///
    /// Panics if no descriptor was set.
    #[track_caller]
    pub fn build(&self) -> String {
        self.try_build().unwrap_or_else(|e| e.fail())
    }
}

/// Join candidates into a `srcset` value, in the given order.
pub fn build_srcset<'a>(pairs: impl IntoIterator<Item = &'a SrcsetPair>) -> Result<String> {
    let pairs = pairs
        .into_iter()
        .map(SrcsetPair::try_build)
        .collect::<Result<Vec<_>>>()?;
    Ok(pairs.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_descriptor() {
        let mut pair = SrcsetPair::new("a.png");
        pair.width(100);
        assert_eq!(pair.build(), "a.png 100w");
    }

    #[test]
    fn test_last_descriptor_wins() {
        let mut pair = SrcsetPair::new("a.png");
        pair.width(100).pixel_density(2);
        assert_eq!(pair.build(), "a.png 2x");

        pair.width(640);
        assert_eq!(pair.build(), "a.png 640w");
    }

    #[test]
    fn test_build_is_idempotent() {
        let mut pair = SrcsetPair::new("a.png");
        pair.pixel_density(3);
        assert_eq!(pair.build(), pair.build());
        assert_eq!(
            build_srcset([&pair, &pair]).unwrap(),
            build_srcset([&pair, &pair]).unwrap()
        );
    }

    #[test]
    fn test_missing_descriptor() {
        let pair = SrcsetPair::new("a.png");
        assert_eq!(
            pair.try_build(),
            Err(BuildError::MissingDescriptor {
                value: String::new()
            })
        );
    }

    #[test]
    #[should_panic(expected = "bad value '' for attribute srcset")]
    fn test_missing_descriptor_panics() {
        SrcsetPair::new("a.png").build();
    }

    #[test]
    fn test_build_srcset_joins_in_order() {
        let mut small = SrcsetPair::new("small.jpg");
        small.width(480);
        let mut large = SrcsetPair::new("large.jpg");
        large.width(1080);

        assert_eq!(
            build_srcset([&small, &large]).unwrap(),
            "small.jpg 480w, large.jpg 1080w"
        );
        assert_eq!(build_srcset(std::iter::empty()).unwrap(), "");
    }

    #[test]
    fn test_build_srcset_fails_on_any_missing() {
        let mut ok = SrcsetPair::new("ok.jpg");
        ok.pixel_density(1);
        let missing = SrcsetPair::new("missing.jpg");

        assert!(build_srcset([&ok, &missing]).is_err());
    }
}
