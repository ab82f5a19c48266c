use crate::error::{DraftError, OrderError};
use crate::inventory::Inventory;
use crate::models::OrderLine;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SelectedItem {
    pub item_name: String,
    pub qty: u32,
}

/// One "Item N" block of the form: a category and the items picked from it.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub category: Option<String>,
    pub items: Vec<SelectedItem>,
}

/// The order being filled in. Handlers take it and hand back the new value.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DraftOrder {
    pub sections: Vec<Section>,
}

impl Default for DraftOrder {
    fn default() -> Self {
        DraftOrder {
            sections: vec![Section::default()],
        }
    }
}

impl DraftOrder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_section(&mut self) {
        self.sections.push(Section::default());
    }

    /// Back to a single empty section.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }

    fn section_mut(&mut self, index: usize) -> Result<&mut Section, DraftError> {
        self.sections
            .get_mut(index)
            .ok_or(DraftError::NoSuchSection(index))
    }

    /// Sets or clears a section's category. Switching to another category
    /// drops the items picked under the old one.
    pub fn select_category(
        &mut self,
        index: usize,
        category: Option<String>,
    ) -> Result<(), DraftError> {
        let section = self.section_mut(index)?;
        let category = category.filter(|c| !c.is_empty());
        if section.category != category {
            section.category = category;
            section.items.clear();
        }
        Ok(())
    }

    /// Replaces the picked items. Items that stay picked keep their quantity.
    pub fn select_items(&mut self, index: usize, names: Vec<String>) -> Result<(), DraftError> {
        let section = self.section_mut(index)?;
        let mut items: Vec<SelectedItem> = Vec::with_capacity(names.len());
        for name in names {
            if items.iter().any(|item| item.item_name == name) {
                continue;
            }
            let qty = section
                .items
                .iter()
                .find(|item| item.item_name == name)
                .map_or(0, |item| item.qty);
            items.push(SelectedItem {
                item_name: name,
                qty,
            });
        }
        section.items = items;
        Ok(())
    }

    pub fn set_quantity(
        &mut self,
        index: usize,
        item_name: &str,
        qty: u32,
    ) -> Result<(), DraftError> {
        let section = self.section_mut(index)?;
        let item = section
            .items
            .iter_mut()
            .find(|item| item.item_name == item_name)
            .ok_or_else(|| DraftError::ItemNotSelected {
                section: index,
                item: item_name.to_string(),
            })?;
        item.qty = qty;
        Ok(())
    }

    /// Whether `collect_order_lines` would produce anything: some section
    /// with a category has an item with a positive quantity.
    pub fn has_order_lines(&self) -> bool {
        self.sections
            .iter()
            .filter(|section| section.category.is_some())
            .any(|section| section.items.iter().any(|item| item.qty > 0))
    }

    /// One line per picked item with a positive quantity, SKU looked up in
    /// the catalog. Zero quantities and sections without a category are
    /// skipped.
    pub fn collect_order_lines(
        &self,
        inventory: &Inventory,
    ) -> Result<Vec<OrderLine>, OrderError> {
        let mut lines = Vec::new();

        for section in &self.sections {
            let category = match &section.category {
                Some(category) => category,
                None => continue,
            };

            for selected in section.items.iter().filter(|item| item.qty > 0) {
                let item = inventory
                    .find(category, &selected.item_name)
                    .ok_or_else(|| OrderError::UnknownItem {
                        category: category.clone(),
                        item: selected.item_name.clone(),
                    })?;

                lines.push(OrderLine {
                    item_name: item.item_name.clone(),
                    category: item.category.clone(),
                    sku: item.sku.clone(),
                    qty: selected.qty,
                });
            }
        }

        Ok(lines)
    }
}
