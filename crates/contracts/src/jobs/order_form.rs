//! Form-state model behind the job create/edit screens.
//!
//! `OrderForm` owns the header draft plus the line item drafts and, for each
//! item, the option values resolved for that item's product. The two vectors
//! stay index-aligned at all times; every mutation below maintains that.

use crate::catalog::{resolve_options, Catalog, ResolvedOptions, Setting};
use crate::clients::Client;
use crate::jobs::aggregate::{Job, JobHeader};
use crate::jobs::line_item::{CoreField, LineItem, LineItemDraft};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderForm {
    pub header: JobHeader,
    pub items: Vec<LineItemDraft>,
    pub options: Vec<ResolvedOptions>,
    next_draft_id: u64,
}

impl OrderForm {
    /// Fresh form with one item preset to the catalog's first product.
    pub fn new(catalog: &Catalog) -> Self {
        let mut form = Self::default();
        form.add_item(catalog);
        form
    }

    /// Load an existing job for editing.
    pub fn from_job(catalog: &Catalog, job: &Job) -> Self {
        let mut form = Self {
            header: job.header.clone(),
            ..Self::default()
        };
        for item in &job.items {
            let draft = LineItemDraft::from_wire(form.take_draft_id(), item);
            form.options
                .push(resolve_options(catalog, &draft.product_type));
            form.items.push(draft);
        }
        if form.items.is_empty() {
            form.add_item(catalog);
        }
        form
    }

    fn take_draft_id(&mut self) -> u64 {
        let id = self.next_draft_id;
        self.next_draft_id += 1;
        id
    }

    pub fn add_item(&mut self, catalog: &Catalog) {
        let product = catalog
            .products
            .first()
            .map(|p| p.name.clone())
            .unwrap_or_default();
        let options = resolve_options(catalog, &product);
        let draft_id = self.take_draft_id();
        self.items
            .push(LineItemDraft::with_defaults(draft_id, &product, &options));
        self.options.push(options);
    }

    /// Remove an item. The last remaining item cannot be removed.
    pub fn remove_item(&mut self, index: usize) {
        if self.items.len() <= 1 || index >= self.items.len() {
            return;
        }
        self.items.remove(index);
        self.options.remove(index);
    }

    /// Apply a field edit coming from the item's controls. Category names
    /// without a dedicated column land in the item's custom field map.
    ///
    /// Changing the product re-resolves that item's options and resets its
    /// select-backed fields to the new defaults; quantity, amounts, variable
    /// data, accessories and custom fields are kept as entered.
    pub fn set_item_field(&mut self, catalog: &Catalog, index: usize, name: &str, value: &str) {
        let Some(item) = self.items.get_mut(index) else {
            return;
        };
        match CoreField::parse(name) {
            Some(CoreField::ProductType) => {
                item.product_type = value.to_string();
                let options = resolve_options(catalog, value);
                let first = |category: &str| -> String {
                    options
                        .get(category)
                        .and_then(|v| v.first())
                        .cloned()
                        .unwrap_or_default()
                };
                item.printing_type = first("printing_type");
                item.printing_mode = first("printing_mode");
                item.finish = first("finish");
                item.material = first("material");
                item.card_size = options
                    .get("card_size")
                    .and_then(|v| v.first())
                    .cloned()
                    .unwrap_or_else(|| "Standard".to_string());
                item.binding = first("binding");
                item.corner = first("corner");
                item.paper_thickness = first("paper_thickness");
                item.additional_info.clear();
                self.options[index] = options;
            }
            Some(CoreField::CardSize) => item.card_size = value.to_string(),
            Some(CoreField::Quantity) => item.quantity = value.to_string(),
            Some(CoreField::Rate) => item.rate = value.to_string(),
            Some(CoreField::AdvanceAmount) => item.advance_amount = value.to_string(),
            Some(CoreField::VariableData) => item.variable_data = value.to_string(),
            Some(CoreField::PrintingType) => item.printing_type = value.to_string(),
            Some(CoreField::PrintingMode) => item.printing_mode = value.to_string(),
            Some(CoreField::Finish) => item.finish = value.to_string(),
            Some(CoreField::Material) => item.material = value.to_string(),
            // The accessory checkboxes go through toggle_accessory.
            Some(CoreField::Accessories) => {}
            Some(CoreField::Binding) => item.binding = value.to_string(),
            Some(CoreField::Corner) => item.corner = value.to_string(),
            Some(CoreField::PaperThickness) => item.paper_thickness = value.to_string(),
            Some(CoreField::AdditionalInfo) => item.additional_info = value.to_string(),
            None => {
                item.custom_fields
                    .insert(name.to_string(), value.to_string());
            }
        }
    }

    pub fn toggle_accessory(&mut self, index: usize, value: &str, checked: bool) {
        if let Some(item) = self.items.get_mut(index) {
            item.toggle_accessory(value, checked);
        }
    }

    /// Precondition check for adding a new option value from within an item:
    /// the item's product must resolve before anything is sent anywhere.
    pub fn quick_add_target(&self, catalog: &Catalog, index: usize) -> Result<i64, String> {
        let item = self
            .items
            .get(index)
            .ok_or_else(|| "Please select a product first.".to_string())?;
        catalog
            .product_by_name(&item.product_type)
            .map(|p| p.id)
            .ok_or_else(|| "Please select a product first.".to_string())
    }

    /// Fold a freshly created setting into the catalog, refresh the resolved
    /// options of every item (the new value may apply to siblings of the same
    /// product), then select it on the item that originated the add.
    pub fn apply_quick_add(&mut self, catalog: &mut Catalog, index: usize, setting: Setting) {
        let category = setting.category.clone();
        let value = setting.value.clone();
        catalog.settings.push(setting);
        for (i, item) in self.items.iter().enumerate() {
            self.options[i] = resolve_options(catalog, &item.product_type);
        }
        self.set_item_field(catalog, index, &category, &value);
    }

    /// Copy a picked client's contact data into the header, or clear it all
    /// when the picker returns to "walk-in".
    pub fn select_client(&mut self, client: Option<&Client>) {
        match client {
            Some(c) => {
                self.header.client_id = c.id.to_string();
                self.header.client_name = c.name.clone();
                self.header.client_phone = c.phone.clone();
                self.header.client_email = c.email.clone();
                self.header.client_company = c.company.clone();
                self.header.client_address = c.address.clone();
            }
            None => {
                self.header.client_id.clear();
                self.header.client_name.clear();
                self.header.client_phone.clear();
                self.header.client_email.clear();
                self.header.client_company.clear();
                self.header.client_address.clear();
            }
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        self.header.validate()?;
        if self.items.is_empty() {
            return Err("At least one item is required".into());
        }
        Ok(())
    }

    /// The `items` field of the multipart submission body.
    pub fn items_json(&self) -> Result<String, String> {
        let wire: Vec<LineItem> = self.items.iter().map(LineItemDraft::to_wire).collect();
        serde_json::to_string(&wire).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, OptionScope, Product};

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
                    name: "Wedding Card".into(),
                },
            ],
            vec![Category {
                id: 1,
                name: "lamination_type".into(),
                display_name: "Lamination Type".into(),
            }],
            vec![
                setting(1, "finish", "Glossy", OptionScope::Universal),
                setting(2, "finish", "Velvet", OptionScope::Product(2)),
                setting(3, "material", "Art Paper", OptionScope::Product(1)),
                setting(4, "material", "Ivory", OptionScope::Product(2)),
                setting(5, "card_size", "90x54", OptionScope::Product(1)),
                setting(6, "accessories", "Box", OptionScope::Product(2)),
            ],
        )
    }

    #[test]
    fn new_form_seeds_one_item_from_first_product() {
        let form = OrderForm::new(&catalog());
        assert_eq!(form.items.len(), 1);
        assert_eq!(form.options.len(), 1);
        let item = &form.items[0];
        assert_eq!(item.product_type, "Business Card");
        assert_eq!(item.finish, "Glossy");
        assert_eq!(item.material, "Art Paper");
        assert_eq!(item.card_size, "90x54");
    }

    #[test]
    fn product_change_resets_selects_but_keeps_entered_values() {
        let cat = catalog();
        let mut form = OrderForm::new(&cat);
        form.set_item_field(&cat, 0, "quantity", "500");
        form.set_item_field(&cat, 0, "rate", "12.5");
        form.set_item_field(&cat, 0, "variable_data", "names.xlsx");
        form.set_item_field(&cat, 0, "additional_info", "gold foil on edges");
        form.toggle_accessory(0, "Box", true);
        form.set_item_field(&cat, 0, "lamination_type", "Thermal");

        form.set_item_field(&cat, 0, "product_type", "Wedding Card");

        let item = &form.items[0];
        assert_eq!(item.finish, "Glossy");
        assert_eq!(item.material, "Ivory");
        assert_eq!(item.card_size, "Standard");
        assert_eq!(item.additional_info, "");
        // Quantity, amounts, variable data, accessories and custom fields
        // survive the product switch.
        assert_eq!(item.quantity, "500");
        assert_eq!(item.rate, "12.5");
        assert_eq!(item.variable_data, "names.xlsx");
        assert_eq!(item.accessories, vec!["Box"]);
        assert_eq!(item.custom_fields["lamination_type"], "Thermal");
        // The item's option map follows the new product.
        assert_eq!(form.options[0]["finish"], vec!["Glossy", "Velvet"]);
    }

    #[test]
    fn options_stay_aligned_with_items_across_add_and_remove() {
        let cat = catalog();
        let mut form = OrderForm::new(&cat);
        form.add_item(&cat);
        form.add_item(&cat);
        form.set_item_field(&cat, 1, "product_type", "Wedding Card");
        assert_eq!(form.items.len(), 3);
        assert_eq!(form.options.len(), 3);

        form.remove_item(0);
        assert_eq!(form.items.len(), 2);
        assert_eq!(form.options.len(), 2);
        // The wedding-card item moved to index 0 together with its options.
        assert_eq!(form.items[0].product_type, "Wedding Card");
        assert_eq!(form.options[0]["material"], vec!["Ivory"]);
    }

    #[test]
    fn last_item_cannot_be_removed() {
        let cat = catalog();
        let mut form = OrderForm::new(&cat);
        form.remove_item(0);
        assert_eq!(form.items.len(), 1);
    }

    #[test]
    fn draft_ids_are_never_reused() {
        let cat = catalog();
        let mut form = OrderForm::new(&cat);
        form.add_item(&cat);
        form.add_item(&cat);
        let removed_id = form.items[1].draft_id;
        form.remove_item(1);
        form.add_item(&cat);
        let ids: Vec<u64> = form.items.iter().map(|i| i.draft_id).collect();
        assert!(!ids.contains(&removed_id));
        assert_eq!(ids.len(), 3);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn quick_add_requires_a_resolvable_product() {
        let cat = catalog();
        let mut form = OrderForm::new(&cat);
        assert_eq!(form.quick_add_target(&cat, 0), Ok(1));

        form.set_item_field(&cat, 0, "product_type", "");
        assert_eq!(
            form.quick_add_target(&cat, 0),
            Err("Please select a product first.".to_string())
        );
    }

    #[test]
    fn quick_add_refreshes_every_item_and_selects_the_new_value() {
        let mut cat = catalog();
        let mut form = OrderForm::new(&cat);
        form.add_item(&cat);
        // Both items are Business Card; the new option must reach both.
        form.apply_quick_add(
            &mut cat,
            0,
            setting(7, "finish", "Spot UV", OptionScope::Product(1)),
        );
        assert_eq!(form.items[0].finish, "Spot UV");
        assert_eq!(form.items[1].finish, "Glossy");
        assert_eq!(form.options[0]["finish"], vec!["Glossy", "Spot UV"]);
        assert_eq!(form.options[1]["finish"], vec!["Glossy", "Spot UV"]);
    }

    #[test]
    fn quick_add_of_custom_category_lands_in_custom_fields() {
        let mut cat = catalog();
        let mut form = OrderForm::new(&cat);
        form.apply_quick_add(
            &mut cat,
            0,
            setting(8, "lamination_type", "Thermal", OptionScope::Product(1)),
        );
        assert_eq!(form.items[0].custom_fields["lamination_type"], "Thermal");
        assert_eq!(form.options[0]["lamination_type"], vec!["Thermal"]);
    }

    #[test]
    fn selecting_and_clearing_a_client_fills_the_header() {
        let cat = catalog();
        let mut form = OrderForm::new(&cat);
        let client = Client {
            id: 5,
            name: "Acme".into(),
            phone: "555".into(),
            company: "Acme Prints".into(),
            ..Default::default()
        };
        form.select_client(Some(&client));
        assert_eq!(form.header.client_id, "5");
        assert_eq!(form.header.client_name, "Acme");
        assert_eq!(form.header.client_company, "Acme Prints");

        form.select_client(None);
        assert_eq!(form.header.client_id, "");
        assert_eq!(form.header.client_name, "");
    }

    #[test]
    fn items_json_applies_wire_conventions() {
        let cat = catalog();
        let mut form = OrderForm::new(&cat);
        form.set_item_field(&cat, 0, "quantity", "100");
        form.toggle_accessory(0, "Box", true);
        form.toggle_accessory(0, "Ribbon", true);

        let json = form.items_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["quantity"], 100);
        assert_eq!(parsed[0]["rate"], 0.0);
        assert_eq!(parsed[0]["accessories"], "Box, Ribbon");
    }
}
