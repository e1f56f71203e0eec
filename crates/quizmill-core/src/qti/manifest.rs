//! IMS content-package manifest

use crate::qti::xml::XmlWriter;

/// Encode `imsmanifest.xml` for one package.
///
/// `items` holds (archive filename, item identifier) pairs in generation
/// order; `assets` holds archive-relative asset paths in first-reference
/// order. A run with no items still produces a well-formed manifest with
/// an empty resource list.
pub fn encode_manifest(package_id: &str, items: &[(String, String)], assets: &[String]) -> String {
    let mut xml = XmlWriter::new();
    xml.open(
        "manifest",
        &[
            ("identifier", package_id),
            ("xmlns", "http://www.imsglobal.org/xsd/imscp_v1p1"),
        ],
    );

    xml.open("metadata", &[]);
    xml.text_element("schema", &[], "IMS Content");
    xml.text_element("schemaversion", &[], "1.1.3");
    xml.close("metadata");
    xml.leaf("organizations", &[]);

    xml.open("resources", &[]);
    for (filename, item_id) in items {
        xml.open(
            "resource",
            &[
                ("identifier", item_id.as_str()),
                ("type", "imsqti_xmlv1p2"),
                ("href", filename.as_str()),
            ],
        );
        xml.leaf("file", &[("href", filename.as_str())]);
        xml.close("resource");
    }
    for href in assets {
        let ident = asset_identifier(href);
        xml.open(
            "resource",
            &[
                ("identifier", ident.as_str()),
                ("type", "webcontent"),
                ("href", href.as_str()),
            ],
        );
        xml.leaf("file", &[("href", href.as_str())]);
        xml.close("resource");
    }
    xml.close("resources");

    xml.close("manifest");
    xml.into_string()
}

/// Manifest identifier for an asset file, derived from its file stem.
fn asset_identifier(href: &str) -> String {
    let name = href.rsplit('/').next().unwrap_or(href);
    let stem = name
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(name);
    let mut ident = String::from("asset_");
    for ch in stem.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            ident.push(ch);
        } else {
            ident.push('_');
        }
    }
    ident
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_with_items_and_assets() {
        let items = vec![
            ("question1.xml".to_string(), "q1_v1".to_string()),
            ("question2.xml".to_string(), "q1_v2".to_string()),
        ];
        let assets = vec!["images/eq_17b3a9c0e1d2.png".to_string()];
        let xml = encode_manifest("quiz_pkg", &items, &assets);

        assert!(xml.contains("<manifest identifier=\"quiz_pkg\""));
        assert!(xml.contains(
            "<resource identifier=\"q1_v1\" type=\"imsqti_xmlv1p2\" href=\"question1.xml\">"
        ));
        assert!(xml.contains("<file href=\"question2.xml\"/>"));
        assert!(xml.contains(
            "<resource identifier=\"asset_eq_17b3a9c0e1d2\" type=\"webcontent\" href=\"images/eq_17b3a9c0e1d2.png\">"
        ));
    }

    #[test]
    fn test_manifest_orders_items_before_assets() {
        let items = vec![("question1.xml".to_string(), "q1_v1".to_string())];
        let assets = vec!["images/eq_a.png".to_string()];
        let xml = encode_manifest("pkg", &items, &assets);
        let item_pos = xml.find("imsqti_xmlv1p2").unwrap();
        let asset_pos = xml.find("webcontent").unwrap();
        assert!(item_pos < asset_pos);
    }

    #[test]
    fn test_empty_manifest_is_well_formed() {
        let xml = encode_manifest("empty_pkg", &[], &[]);
        assert!(xml.contains("<resources>\n  </resources>"));
        assert!(xml.contains("<schemaversion>1.1.3</schemaversion>"));
    }

    #[test]
    fn test_manifest_is_deterministic() {
        let items = vec![("question1.xml".to_string(), "q1_v1".to_string())];
        assert_eq!(
            encode_manifest("pkg", &items, &[]),
            encode_manifest("pkg", &items, &[])
        );
    }
}
