//! Option resolution: which option values a given line item may choose from.

use std::collections::BTreeMap;

use super::aggregate::Catalog;

/// Options applicable to one line item, grouped by category key.
///
/// Values keep the order of the underlying settings list and are NOT
/// deduplicated: a value present both universally and product-scoped
/// appears twice, which is how the admin screens expose it for cleanup.
/// Categories with no applicable value are absent from the map entirely.
pub type ResolvedOptions = BTreeMap<String, Vec<String>>;

/// Resolve the option values for an item whose product field holds
/// `product_name` (matched against the catalog by exact name).
///
/// An empty or unknown product name yields universal options only.
pub fn resolve_options(catalog: &Catalog, product_name: &str) -> ResolvedOptions {
    let product_id = catalog.product_by_name(product_name).map(|p| p.id);
    let mut grouped = ResolvedOptions::new();
    for setting in &catalog.settings {
        if setting.scope.applies_to(product_id) {
            grouped
                .entry(setting.category.clone())
                .or_default()
                .push(setting.value.clone());
        }
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, OptionScope, Product, Setting};

    fn setting(id: i64, category: &str, value: &str, scope: OptionScope) -> Setting {
        Setting {
            id,
            category: category.into(),
            value: value.into(),
            scope,
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                Product {
                    id: 1,
                    name: "Business Card".into(),
                },
                Product {
                    id: 2,
                    name: "Flyer".into(),
                },
            ],
            vec![Category {
                id: 1,
                name: "finish".into(),
                display_name: "Finish".into(),
            }],
            vec![
                setting(1, "finish", "Glossy", OptionScope::Universal),
                setting(2, "finish", "Matte", OptionScope::Product(1)),
                setting(3, "finish", "Velvet", OptionScope::Product(2)),
                setting(4, "printing_type", "Offset", OptionScope::Universal),
                setting(5, "corner", "Rounded", OptionScope::Product(1)),
            ],
        )
    }

    #[test]
    fn union_of_universal_and_product_scoped() {
        let opts = resolve_options(&catalog(), "Business Card");
        assert_eq!(opts["finish"], vec!["Glossy", "Matte"]);
        assert_eq!(opts["printing_type"], vec!["Offset"]);
        assert_eq!(opts["corner"], vec!["Rounded"]);
        assert!(!opts.contains_key("binding"));
    }

    #[test]
    fn other_products_settings_are_excluded() {
        let opts = resolve_options(&catalog(), "Flyer");
        assert_eq!(opts["finish"], vec!["Glossy", "Velvet"]);
        assert!(!opts.contains_key("corner"));
    }

    #[test]
    fn unknown_or_empty_product_gets_universal_only() {
        for name in ["", "Poster"] {
            let opts = resolve_options(&catalog(), name);
            assert_eq!(opts["finish"], vec!["Glossy"]);
            assert_eq!(opts["printing_type"], vec!["Offset"]);
            assert!(!opts.contains_key("corner"));
        }
    }

    #[test]
    fn duplicate_values_are_preserved_in_settings_order() {
        let mut cat = catalog();
        cat.settings
            .push(setting(6, "finish", "Glossy", OptionScope::Product(1)));
        let opts = resolve_options(&cat, "Business Card");
        assert_eq!(opts["finish"], vec!["Glossy", "Matte", "Glossy"]);
    }
}
