//! Attrs command report data structures.

use htmlprop_core::PropertyMap;

use super::output::{Output, Report};

/// Attributes built from the manifest, in first-seen order.
#[derive(Debug)]
pub struct AttrsReport {
    pub attributes: PropertyMap,
}

impl Report for AttrsReport {
    fn render(&self, out: &mut dyn Output) {
        for (name, value) in self.attributes.iter() {
            out.preformatted(&format!("{}=\"{}\"", name, value));
        }
    }
}

#[cfg(test)]
mod tests {
    use htmlprop_core::Property;

    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render_lines() {
        let mut attributes = PropertyMap::new();
        attributes.extend(&[
            Property::new("media", "screen and (width: 600px) "),
            Property::new("width", 480u64),
            Property::new("hidden", false),
        ]);

        let mut out = BufferOutput::default();
        AttrsReport { attributes }.render(&mut out);
        assert_eq!(
            out.lines,
            vec![
                r#"media="screen and (width: 600px) ""#,
                r#"width="480""#,
                r#"hidden="false""#,
            ]
        );
    }
}
