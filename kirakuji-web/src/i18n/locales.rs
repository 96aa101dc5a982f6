use serde_json::Value;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
}

pub const DEFAULT_LANG: &str = "ja";

pub const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "ja",
        name: "日本語",
    },
    LocaleMeta {
        code: "en",
        name: "English",
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("ja", include_str!("../../i18n/ja.json")),
    ("en", include_str!("../../i18n/en.json")),
];

/// Supported locales with their native names.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

#[must_use]
pub fn is_supported(lang: &str) -> bool {
    LOCALE_META.iter().any(|m| m.code == lang)
}

/// Parse the bundle for `lang`, or the default bundle for unknown codes.
pub fn load_translations(lang: &str) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))
        .or_else(|| LOCALE_TABLE.first().map(|(_, data)| *data))?;

    serde_json::from_str(bundle).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_keys(prefix: &str, value: &Value, out: &mut Vec<String>) {
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    leaf_keys(&path, child, out);
                }
            }
            _ => out.push(prefix.to_string()),
        }
    }

    #[test]
    fn every_bundle_parses() {
        for meta in locales() {
            assert!(load_translations(meta.code).is_some(), "{}", meta.code);
        }
    }

    #[test]
    fn bundles_share_the_same_keys() {
        let mut ja = Vec::new();
        let mut en = Vec::new();
        leaf_keys("", &load_translations("ja").unwrap(), &mut ja);
        leaf_keys("", &load_translations("en").unwrap(), &mut en);
        ja.sort();
        en.sort();
        assert_eq!(ja, en);
    }

    #[test]
    fn unknown_codes_fall_back_to_default() {
        assert!(!is_supported("xx"));
        assert_eq!(load_translations("xx"), load_translations(DEFAULT_LANG));
    }
}
