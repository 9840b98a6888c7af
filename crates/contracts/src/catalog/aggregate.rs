use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ============================================================================
// Products
// ============================================================================

/// A product type offered by the shop (business cards, flyers, ...).
/// Referenced by settings via id and by job line items via `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
}

/// Payload for creating or renaming a product.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductDto {
    pub name: String,
}

// ============================================================================
// Categories
// ============================================================================

/// A customization category. `name` is the stable machine key (snake_case);
/// `display_name` is what staff see on forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub display_name: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryDto {
    pub name: String,
    pub display_name: String,
}

impl CategoryDto {
    /// Build a category from its display name, deriving the machine key
    /// the same way the admin form does (lowercase, whitespace to `_`).
    pub fn from_display_name(display_name: &str) -> Self {
        let name = display_name
            .trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_");
        Self {
            name,
            display_name: display_name.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.display_name.trim().is_empty() {
            return Err("Category name is required".into());
        }
        Ok(())
    }
}

/// Category names with dedicated line-item columns and reset behavior.
/// Anything outside this set is a custom category stored in the per-item map.
pub const CORE_CATEGORIES: [&str; 9] = [
    "printing_type",
    "printing_mode",
    "finish",
    "accessories",
    "card_size",
    "material",
    "binding",
    "corner",
    "paper_thickness",
];

pub fn is_core_category(name: &str) -> bool {
    CORE_CATEGORIES.contains(&name)
}

// ============================================================================
// Settings (option values)
// ============================================================================

/// Scope of a setting: valid for every product, or for exactly one.
/// On the wire this is the nullable `product_id` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptionScope {
    #[default]
    Universal,
    Product(i64),
}

impl OptionScope {
    /// Whether a setting with this scope applies to the product resolved for
    /// an item (`None` when the item's product name matched nothing).
    pub fn applies_to(&self, product_id: Option<i64>) -> bool {
        match self {
            OptionScope::Universal => true,
            OptionScope::Product(id) => product_id == Some(*id),
        }
    }

    pub fn product_id(&self) -> Option<i64> {
        match self {
            OptionScope::Universal => None,
            OptionScope::Product(id) => Some(*id),
        }
    }
}

impl Serialize for OptionScope {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            OptionScope::Universal => serializer.serialize_none(),
            OptionScope::Product(id) => serializer.serialize_some(id),
        }
    }
}

impl<'de> Deserialize<'de> for OptionScope {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<i64>::deserialize(deserializer)?
            .map_or(OptionScope::Universal, OptionScope::Product))
    }
}

/// One allowed option value for a category, optionally scoped to a product.
/// Duplicates across scopes are legal and must all surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setting {
    pub id: i64,
    pub category: String,
    pub value: String,
    #[serde(rename = "product_id", default)]
    pub scope: OptionScope,
}

/// Payload for creating or updating a setting.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SettingDto {
    pub category: String,
    pub value: String,
    #[serde(rename = "product_id")]
    pub scope: OptionScope,
}

impl SettingDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.category.trim().is_empty() {
            return Err("Category is required".into());
        }
        if self.value.trim().is_empty() {
            return Err("Option value is required".into());
        }
        Ok(())
    }
}

// ============================================================================
// Catalog index
// ============================================================================

/// The combined catalog fetched once per page session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub settings: Vec<Setting>,
}

impl Catalog {
    pub fn new(products: Vec<Product>, categories: Vec<Category>, settings: Vec<Setting>) -> Self {
        Self {
            products,
            categories,
            settings,
        }
    }

    pub fn product_by_name(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    pub fn product_by_id(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Human label for a setting's scope. Deleted products leave orphaned
    /// settings behind; those are still shown, labeled "Unknown Product".
    pub fn scope_label(&self, scope: OptionScope) -> String {
        match scope {
            OptionScope::Universal => "All Products".to_string(),
            OptionScope::Product(id) => self
                .product_by_id(id)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| "Unknown Product".to_string()),
        }
    }

    /// Display name for a category key, falling back to the key itself when
    /// the category record was deleted out from under its settings.
    pub fn category_label(&self, name: &str) -> String {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.display_name.clone())
            .unwrap_or_else(|| name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_scope_round_trips_through_nullable_product_id() {
        let universal: Setting = serde_json::from_str(
            r#"{"id":1,"category":"finish","value":"Glossy","product_id":null}"#,
        )
        .unwrap();
        assert_eq!(universal.scope, OptionScope::Universal);

        let scoped: Setting = serde_json::from_str(
            r#"{"id":2,"category":"finish","value":"Matte","product_id":7}"#,
        )
        .unwrap();
        assert_eq!(scoped.scope, OptionScope::Product(7));

        let json = serde_json::to_value(&universal).unwrap();
        assert!(json["product_id"].is_null());
        let json = serde_json::to_value(&scoped).unwrap();
        assert_eq!(json["product_id"], 7);
    }

    #[test]
    fn scope_label_degrades_to_unknown_product() {
        let catalog = Catalog::new(
            vec![Product {
                id: 1,
                name: "Business Card".into(),
            }],
            vec![],
            vec![],
        );
        assert_eq!(catalog.scope_label(OptionScope::Universal), "All Products");
        assert_eq!(
            catalog.scope_label(OptionScope::Product(1)),
            "Business Card"
        );
        assert_eq!(
            catalog.scope_label(OptionScope::Product(99)),
            "Unknown Product"
        );
    }

    #[test]
    fn category_machine_name_is_derived_from_display_name() {
        let dto = CategoryDto::from_display_name("  Lamination  Type ");
        assert_eq!(dto.name, "lamination_type");
        assert_eq!(dto.display_name, "Lamination  Type");
    }
}
