use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::api::nullable;
use crate::catalog::ResolvedOptions;

/// Accessories travel as one comma-joined column (`"Box, Ribbon"`); in
/// memory they are a list so checkboxes can toggle individual entries.
mod accessories_wire {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(values: &[String], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&values.join(", "))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        if raw.is_empty() {
            return Ok(Vec::new());
        }
        Ok(raw.split(", ").map(str::to_string).collect())
    }
}

/// Custom field values are stored as a JSON-encoded string column. Older
/// rows (and in-flight payloads) may carry a real object instead, so reads
/// accept both; unparseable text degrades to an empty map.
mod custom_fields_wire {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S>(fields: &BTreeMap<String, String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let encoded = serde_json::to_string(fields).unwrap_or_else(|_| "{}".to_string());
        serializer.serialize_str(&encoded)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        let map = match value {
            None | Some(Value::Null) => BTreeMap::new(),
            Some(Value::String(encoded)) => {
                serde_json::from_str::<BTreeMap<String, Value>>(&encoded)
                    .map(stringify_values)
                    .unwrap_or_default()
            }
            Some(Value::Object(map)) => stringify_values(map.into_iter().collect()),
            Some(_) => BTreeMap::new(),
        };
        Ok(map)
    }

    fn stringify_values(map: BTreeMap<String, Value>) -> BTreeMap<String, String> {
        map.into_iter()
            .map(|(k, v)| {
                let s = match v {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                (k, s)
            })
            .collect()
    }
}

/// One line item of a job order, in its wire shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default, deserialize_with = "nullable::string")]
    pub product_type: String,
    #[serde(default, deserialize_with = "nullable::string")]
    pub card_size: String,
    #[serde(default, deserialize_with = "nullable::i64")]
    pub quantity: i64,
    #[serde(default, deserialize_with = "nullable::f64")]
    pub rate: f64,
    #[serde(default, deserialize_with = "nullable::f64")]
    pub advance_amount: f64,
    #[serde(default, deserialize_with = "nullable::string")]
    pub printing_type: String,
    #[serde(default, deserialize_with = "nullable::string")]
    pub printing_mode: String,
    #[serde(default, deserialize_with = "nullable::string")]
    pub finish: String,
    #[serde(default, deserialize_with = "nullable::string")]
    pub material: String,
    #[serde(default, with = "accessories_wire")]
    pub accessories: Vec<String>,
    #[serde(default, deserialize_with = "nullable::string")]
    pub binding: String,
    #[serde(default, deserialize_with = "nullable::string")]
    pub corner: String,
    #[serde(default, deserialize_with = "nullable::string")]
    pub paper_thickness: String,
    #[serde(default, deserialize_with = "nullable::string")]
    pub variable_data: String,
    #[serde(default, deserialize_with = "nullable::string")]
    pub additional_info: String,
    #[serde(default, with = "custom_fields_wire")]
    pub custom_fields: BTreeMap<String, String>,
}

impl LineItem {
    /// Attribute pairs worth printing on the order sheet, skipping empties.
    /// Printing type and mode collapse into one "Offset (Single Side)" entry.
    pub fn display_attrs(&self) -> Vec<(&'static str, String)> {
        let mut attrs = Vec::new();
        let mut push = |label: &'static str, value: &str| {
            let value = value.trim();
            if !value.is_empty() {
                attrs.push((label, value.to_string()));
            }
        };
        push("Material", &self.material);
        let printing = match (
            self.printing_type.trim(),
            self.printing_mode.trim(),
        ) {
            ("", "") => String::new(),
            (t, "") => t.to_string(),
            ("", m) => m.to_string(),
            (t, m) => format!("{} ({})", t, m),
        };
        push("Printing", &printing);
        push("Finish", &self.finish);
        let accessories = self.accessories.join(", ");
        push("Accessories", &accessories);
        push("Binding", &self.binding);
        push("Corner", &self.corner);
        push("Paper Thickness", &self.paper_thickness);
        push("Variable Data", &self.variable_data);
        attrs
    }
}

/// The core item fields: those with dedicated columns and fixed controls.
/// Any category name outside this set is routed to `custom_fields`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreField {
    ProductType,
    CardSize,
    Quantity,
    Rate,
    AdvanceAmount,
    VariableData,
    PrintingType,
    PrintingMode,
    Finish,
    Material,
    Accessories,
    Binding,
    Corner,
    PaperThickness,
    AdditionalInfo,
}

impl CoreField {
    pub fn parse(name: &str) -> Option<Self> {
        Some(match name {
            "product_type" => Self::ProductType,
            "card_size" => Self::CardSize,
            "quantity" => Self::Quantity,
            "rate" => Self::Rate,
            "advance_amount" => Self::AdvanceAmount,
            "variable_data" => Self::VariableData,
            "printing_type" => Self::PrintingType,
            "printing_mode" => Self::PrintingMode,
            "finish" => Self::Finish,
            "material" => Self::Material,
            "accessories" => Self::Accessories,
            "binding" => Self::Binding,
            "corner" => Self::Corner,
            "paper_thickness" => Self::PaperThickness,
            "additional_info" => Self::AdditionalInfo,
            _ => return None,
        })
    }
}

/// Editable state of one line item while the form is open.
///
/// Numeric fields stay as raw input text until submit so a half-typed value
/// never snaps to zero under the user's cursor. `draft_id` is unique within
/// the form for the life of the page and never reused after removal, so
/// per-item side state (artwork picks, open panels) survives reordering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineItemDraft {
    pub draft_id: u64,
    pub product_type: String,
    pub card_size: String,
    pub quantity: String,
    pub rate: String,
    pub advance_amount: String,
    pub printing_type: String,
    pub printing_mode: String,
    pub finish: String,
    pub material: String,
    pub accessories: Vec<String>,
    pub binding: String,
    pub corner: String,
    pub paper_thickness: String,
    pub variable_data: String,
    pub additional_info: String,
    pub custom_fields: BTreeMap<String, String>,
}

impl LineItemDraft {
    /// Fresh item defaulted from the options resolved for `product_type`:
    /// first value of each select-backed category, "Standard" when no card
    /// size is configured anywhere.
    pub fn with_defaults(draft_id: u64, product_type: &str, options: &ResolvedOptions) -> Self {
        let first = |category: &str| -> String {
            options
                .get(category)
                .and_then(|v| v.first())
                .cloned()
                .unwrap_or_default()
        };
        let card_size = options
            .get("card_size")
            .and_then(|v| v.first())
            .cloned()
            .unwrap_or_else(|| "Standard".to_string());
        Self {
            draft_id,
            product_type: product_type.to_string(),
            card_size,
            printing_type: first("printing_type"),
            printing_mode: first("printing_mode"),
            finish: first("finish"),
            material: first("material"),
            binding: first("binding"),
            corner: first("corner"),
            paper_thickness: first("paper_thickness"),
            ..Default::default()
        }
    }

    /// Load an existing item back into editable form. Zero money amounts
    /// render as empty inputs, matching how an untouched field was
    /// submitted; quantity carries through verbatim.
    pub fn from_wire(draft_id: u64, item: &LineItem) -> Self {
        let money = |v: f64| -> String {
            if v == 0.0 {
                String::new()
            } else {
                v.to_string()
            }
        };
        Self {
            draft_id,
            product_type: item.product_type.clone(),
            card_size: item.card_size.clone(),
            quantity: item.quantity.to_string(),
            rate: money(item.rate),
            advance_amount: money(item.advance_amount),
            printing_type: item.printing_type.clone(),
            printing_mode: item.printing_mode.clone(),
            finish: item.finish.clone(),
            material: item.material.clone(),
            accessories: item.accessories.clone(),
            binding: item.binding.clone(),
            corner: item.corner.clone(),
            paper_thickness: item.paper_thickness.clone(),
            variable_data: item.variable_data.clone(),
            additional_info: item.additional_info.clone(),
            custom_fields: item.custom_fields.clone(),
        }
    }

    /// Submission shape: empty numeric inputs become zero, unparseable text
    /// likewise.
    pub fn to_wire(&self) -> LineItem {
        LineItem {
            product_type: self.product_type.clone(),
            card_size: self.card_size.clone(),
            quantity: self.quantity.trim().parse().unwrap_or(0),
            rate: self.rate.trim().parse().unwrap_or(0.0),
            advance_amount: self.advance_amount.trim().parse().unwrap_or(0.0),
            printing_type: self.printing_type.clone(),
            printing_mode: self.printing_mode.clone(),
            finish: self.finish.clone(),
            material: self.material.clone(),
            accessories: self.accessories.clone(),
            binding: self.binding.clone(),
            corner: self.corner.clone(),
            paper_thickness: self.paper_thickness.clone(),
            variable_data: self.variable_data.clone(),
            additional_info: self.additional_info.clone(),
            custom_fields: self.custom_fields.clone(),
        }
    }

    pub fn toggle_accessory(&mut self, value: &str, checked: bool) {
        if checked {
            self.accessories.push(value.to_string());
        } else {
            self.accessories.retain(|a| a != value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessories_round_trip_through_joined_column() {
        let item: LineItem = serde_json::from_str(
            r#"{"product_type":"Wedding Card","accessories":"Box, Ribbon"}"#,
        )
        .unwrap();
        assert_eq!(item.accessories, vec!["Box", "Ribbon"]);

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["accessories"], "Box, Ribbon");

        let empty: LineItem =
            serde_json::from_str(r#"{"product_type":"Flyer","accessories":null}"#).unwrap();
        assert!(empty.accessories.is_empty());
    }

    #[test]
    fn custom_fields_accept_string_or_object() {
        let from_string: LineItem = serde_json::from_str(
            r#"{"custom_fields":"{\"lamination_type\":\"Thermal\"}"}"#,
        )
        .unwrap();
        assert_eq!(from_string.custom_fields["lamination_type"], "Thermal");

        let from_object: LineItem =
            serde_json::from_str(r#"{"custom_fields":{"lamination_type":"Matt"}}"#).unwrap();
        assert_eq!(from_object.custom_fields["lamination_type"], "Matt");

        let garbage: LineItem = serde_json::from_str(r#"{"custom_fields":"not json"}"#).unwrap();
        assert!(garbage.custom_fields.is_empty());

        let json = serde_json::to_value(&from_object).unwrap();
        assert_eq!(json["custom_fields"], r#"{"lamination_type":"Matt"}"#);
    }

    #[test]
    fn empty_amounts_submit_as_zero_and_load_back_empty() {
        let draft = LineItemDraft {
            quantity: "500".into(),
            rate: "".into(),
            advance_amount: "150.5".into(),
            ..Default::default()
        };
        let wire = draft.to_wire();
        assert_eq!(wire.quantity, 500);
        assert_eq!(wire.rate, 0.0);
        assert_eq!(wire.advance_amount, 150.5);

        let reloaded = LineItemDraft::from_wire(9, &wire);
        assert_eq!(reloaded.draft_id, 9);
        assert_eq!(reloaded.rate, "");
        assert_eq!(reloaded.advance_amount, "150.5");
    }

    #[test]
    fn zero_quantity_loads_back_verbatim_unlike_money() {
        let wire = LineItem::default();
        let reloaded = LineItemDraft::from_wire(1, &wire);
        assert_eq!(reloaded.quantity, "0");
        assert_eq!(reloaded.rate, "");
        assert_eq!(reloaded.advance_amount, "");
    }

    #[test]
    fn defaults_take_first_option_with_standard_card_size_fallback() {
        let mut options = ResolvedOptions::new();
        options.insert("finish".into(), vec!["Glossy".into(), "Matte".into()]);
        options.insert("material".into(), vec!["Art Paper".into()]);

        let draft = LineItemDraft::with_defaults(1, "Flyer", &options);
        assert_eq!(draft.finish, "Glossy");
        assert_eq!(draft.material, "Art Paper");
        assert_eq!(draft.binding, "");
        assert_eq!(draft.card_size, "Standard");
        assert!(draft.accessories.is_empty());
    }

    #[test]
    fn display_attrs_skip_blanks_and_combine_printing() {
        let item = LineItem {
            material: "Art Paper".into(),
            printing_type: "Offset".into(),
            printing_mode: "Single Side".into(),
            accessories: vec!["Box".into()],
            paper_thickness: "300gsm".into(),
            ..Default::default()
        };
        assert_eq!(
            item.display_attrs(),
            vec![
                ("Material", "Art Paper".to_string()),
                ("Printing", "Offset (Single Side)".to_string()),
                ("Accessories", "Box".to_string()),
                ("Paper Thickness", "300gsm".to_string()),
            ]
        );

        let only_mode = LineItem {
            printing_mode: "Both Sides".into(),
            ..Default::default()
        };
        assert_eq!(
            only_mode.display_attrs(),
            vec![("Printing", "Both Sides".to_string())]
        );
    }

    #[test]
    fn toggling_accessories_preserves_check_order() {
        let mut draft = LineItemDraft::default();
        draft.toggle_accessory("Ribbon", true);
        draft.toggle_accessory("Box", true);
        draft.toggle_accessory("Ribbon", false);
        draft.toggle_accessory("Tag", true);
        assert_eq!(draft.accessories, vec!["Box", "Tag"]);
    }
}
