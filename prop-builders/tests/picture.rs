//! Builds a responsive `<picture>` fragment from every builder at once.

use htmlprop_builders::{
    Attr, ImageSizes, LinkSizes, Markup, MediaQuery, MediaQuerySize, Node, RawNode, SizesSet,
    SrcsetPair, build_srcset,
};

fn picture() -> Node {
    let mut wide = MediaQuery::new();
    wide.screen().and().width(1200);

    let mut avif_1x = SrcsetPair::new("hero.avif");
    avif_1x.pixel_density(1);
    let mut avif_2x = SrcsetPair::new("hero@2x.avif");
    avif_2x.pixel_density(2);

    let mut narrow = MediaQuerySize::new("100vw");
    narrow.max_width("600px");
    let mut sizes = ImageSizes::new();
    sizes.group(&narrow).default_size("50vw");

    let mut small = SrcsetPair::new("hero-480.jpg");
    small.width(480);
    let mut large = SrcsetPair::new("hero-1080.jpg");
    large.width(1080);

    let mut picture = Node::new("picture", []);
    picture
        .include(Node::new(
            "source",
            [
                Attr::new("media", wide.build()),
                Attr::new("srcset", build_srcset([&avif_1x, &avif_2x]).unwrap()),
            ],
        ))
        .include(Node::new(
            "img",
            [
                Attr::new("src", "hero-480.jpg"),
                Attr::new("srcset", build_srcset([&small, &large]).unwrap()),
                Attr::new("sizes", sizes.template()),
            ],
        ));
    picture
}

#[test]
fn test_picture_fragment() {
    let html = picture().to_markup().replace("><", ">\n<");
    insta::assert_snapshot!(html, @r#"
    <picture>
    <source media="screen and (width: 1200px) " srcset="hero.avif 1x, hero@2x.avif 2x">
    <img src="hero-480.jpg" srcset="hero-480.jpg 480w, hero-1080.jpg 1080w" sizes="(max-width: 600px) 100vw, 50vw">
    </picture>
    "#);
}

#[test]
fn test_icon_links_in_head() {
    let mut icons = LinkSizes::new();
    icons.pair(16, 16).pair(32, 32);
    let mut any = LinkSizes::new();
    any.pair(0, 0);

    let head = RawNode::empty([
        Node::new(
            "link",
            [
                Attr::new("rel", "icon"),
                Attr::new("sizes", icons.template()),
            ],
        ),
        Node::new(
            "link",
            [Attr::new("rel", "icon"), Attr::new("sizes", any.template())],
        ),
    ]);

    assert_eq!(
        head.to_markup(),
        r#"<link rel="icon" sizes="16x16 32x32 "><link rel="icon" sizes="any">"#
    );
}
