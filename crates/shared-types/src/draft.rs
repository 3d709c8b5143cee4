use std::collections::BTreeMap;

use crate::product::{NewProduct, Product};

// ---------------------------------------------------------------------------
// Field identifiers and errors
// ---------------------------------------------------------------------------

/// Identifies one editable field of a product draft.
///
/// Used as the tag of [`ProductDraft::set`] and as the key of
/// [`FieldErrors`], so updates and error lookups stay explicit per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProductField {
    Name,
    Category,
    Price,
    Quantity,
    Description,
}

/// Validation failures keyed by the field that produced them.
///
/// Recomputed wholesale on every validation attempt and replaced, never
/// merged.
pub type FieldErrors = BTreeMap<ProductField, String>;

const NAME_TOO_SHORT: &str = "Product name must be at least 3 characters.";
const CATEGORY_MISSING: &str = "Please select a category.";
const PRICE_INVALID: &str = "Price must be a positive number.";
const QUANTITY_INVALID: &str = "Quantity must be a positive whole number.";
const DESCRIPTION_TOO_SHORT: &str = "Description must be at least 10 characters.";

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

/// An in-progress product record as the user edits it.
///
/// Every field is held as text — numeric fields included, so inputs can be
/// empty mid-edit — and coerced to its proper type only when a submit
/// attempt passes validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub price: String,
    pub quantity: String,
    pub description: String,
}

impl ProductDraft {
    /// Pre-fill a draft from an existing record (edit mode).
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price.to_string(),
            quantity: product.quantity.to_string(),
            description: product.description.clone(),
        }
    }

    /// Replace a single field's raw text, leaving every other field and any
    /// displayed errors untouched.
    pub fn set(&mut self, field: ProductField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProductField::Name => self.name = value,
            ProductField::Category => self.category = value,
            ProductField::Price => self.price = value,
            ProductField::Quantity => self.quantity = value,
            ProductField::Description => self.description = value,
        }
    }

    /// Check every field against its rule in one pass, with no
    /// short-circuit, and collect all applicable errors.
    ///
    /// Length rules count characters, not bytes.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.name.trim().chars().count() < 3 {
            errors.insert(ProductField::Name, NAME_TOO_SHORT.to_string());
        }
        if self.category.is_empty() {
            errors.insert(ProductField::Category, CATEGORY_MISSING.to_string());
        }
        if parse_positive_number(&self.price).is_none() {
            errors.insert(ProductField::Price, PRICE_INVALID.to_string());
        }
        if parse_positive_integer(&self.quantity).is_none() {
            errors.insert(ProductField::Quantity, QUANTITY_INVALID.to_string());
        }
        if self.description.trim().chars().count() < 10 {
            errors.insert(ProductField::Description, DESCRIPTION_TOO_SHORT.to_string());
        }

        errors
    }

    /// Validate the draft and, if every rule passes, coerce the numeric
    /// fields and hand back the normalized record. On failure the full
    /// error map is returned and no record is produced.
    pub fn submit(&self) -> Result<NewProduct, FieldErrors> {
        let errors = self.validate();
        match (
            parse_positive_number(&self.price),
            parse_positive_integer(&self.quantity),
        ) {
            (Some(price), Some(quantity)) if errors.is_empty() => Ok(NewProduct {
                name: self.name.clone(),
                category: self.category.clone(),
                price,
                quantity,
                description: self.description.clone(),
            }),
            _ => Err(errors),
        }
    }
}

/// Parse raw input as a finite number greater than zero.
fn parse_positive_number(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Parse raw input as a positive whole number.
///
/// Accepts integer-valued text such as `"3"` or `"3.0"`, rejects
/// fractional values and anything beyond `u32::MAX`.
fn parse_positive_integer(raw: &str) -> Option<u32> {
    let value = parse_positive_number(raw)?;
    (value.fract() == 0.0 && value <= u32::MAX as f64).then_some(value as u32)
}
