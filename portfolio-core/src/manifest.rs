use crate::error::ManifestError;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AssetLink {
    pub href: String,
    pub label: String,
}

/// Parses the manifest body: a JSON array of file names.
pub fn parse_manifest(body: &str) -> Result<Vec<String>, ManifestError> {
    Ok(serde_json::from_str(body)?)
}

/// One link per file, in manifest order, rooted at `base`.
pub fn asset_links(base: &str, files: &[String]) -> Vec<AssetLink> {
    let base = base.trim_end_matches('/');
    files
        .iter()
        .map(|file| AssetLink {
            href: format!("{base}/{file}"),
            label: file.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_array_manifest() {
        assert!(matches!(
            parse_manifest(r#"{"files": []}"#),
            Err(ManifestError::Parse(_))
        ));
    }

    #[test]
    fn base_trailing_slash_is_ignored() {
        let links = asset_links("Source/", &["x.pdf".to_string()]);
        assert_eq!(links[0].href, "Source/x.pdf");
    }

    #[test]
    fn empty_manifest_yields_no_links() {
        let files = parse_manifest("[]").expect("parse");
        assert!(asset_links("Source", &files).is_empty());
    }
}
