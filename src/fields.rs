use std::collections::BTreeMap;

/// Structured fields attached to a log record or to a hook's static set.
pub type Fields = BTreeMap<String, serde_json::Value>;

/// Copy every entry of `src` into `dst` whose key is absent from `dst`.
///
/// Existing entries in `dst` are never altered (first writer wins). The
/// result is independent of iteration order since each key is decided on
/// its own; merging an empty map is a no-op.
///
/// This is deliberately one-directional and is called from two places
/// with opposite precedence: extra fields merged into the pre-seeded
/// static set at construction (seeded keys win), and the static set
/// merged into a record's fields at send time (record keys win). Keep
/// the two call sites separate; do not fold them into one bidirectional
/// merge.
pub fn merge_missing(dst: &mut Fields, src: &Fields) {
    for (key, value) in src {
        dst.entry(key.clone()).or_insert_with(|| value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(pairs: &[(&str, serde_json::Value)]) -> Fields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn adds_only_missing_keys() {
        let mut dst = fields(&[("env", json!("prod")), ("region", json!("eu"))]);
        let src = fields(&[("env", json!("staging")), ("host", json!("web-1"))]);

        merge_missing(&mut dst, &src);

        assert_eq!(dst["env"], json!("prod"));
        assert_eq!(dst["region"], json!("eu"));
        assert_eq!(dst["host"], json!("web-1"));
        assert_eq!(dst.len(), 3);
    }

    #[test]
    fn empty_source_is_a_noop() {
        let mut dst = fields(&[("env", json!("prod"))]);
        merge_missing(&mut dst, &Fields::new());
        assert_eq!(dst, fields(&[("env", json!("prod"))]));
    }

    #[test]
    fn empty_destination_takes_everything() {
        let mut dst = Fields::new();
        let src = fields(&[("a", json!(1)), ("b", json!(true))]);
        merge_missing(&mut dst, &src);
        assert_eq!(dst, src);
    }
}
