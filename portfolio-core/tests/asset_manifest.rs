use portfolio_core::{asset_links, parse_manifest, AssetLink, SiteConfig};

#[test]
fn two_files_render_two_links_in_order() {
    let cfg = SiteConfig::default();
    let files = parse_manifest(r#"["a.txt","b.txt"]"#).expect("parse");
    let links = asset_links(&cfg.asset_base, &files);
    assert_eq!(
        links,
        vec![
            AssetLink {
                href: "Source/a.txt".into(),
                label: "a.txt".into(),
            },
            AssetLink {
                href: "Source/b.txt".into(),
                label: "b.txt".into(),
            },
        ]
    );
}

#[test]
fn malformed_manifest_is_an_error() {
    assert!(parse_manifest("not json").is_err());
}
