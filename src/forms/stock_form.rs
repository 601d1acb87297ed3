//! # Stock Form
//!
//! Controlled inputs for adding or editing a stock record. The form keeps exactly what the
//! user typed and only turns it into a typed [`StockFormData`] on a successful submit.
//!
//! ## Validation Rules
//!
//! - `name`: required after trimming whitespace.
//! - `price`, `quantity`: required and non-zero. Empty text, text that is not a number and a
//!   zero value are all reported as missing. A zero price is therefore refused here even
//!   though the reducer would accept it.
//! - `price` must also be finite (`inf`, `1e999`), the same rule the reducer applies.
//!
//! Errors are shown only after the first submit; editing a field clears that field's error
//! until the next submit.

use crate::model::Stock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

/// The validated payload of a submitted form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockFormData {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

impl From<&Stock> for StockFormData {
    fn from(stock: &Stock) -> Self {
        Self {
            name: stock.name.clone(),
            price: stock.price,
            quantity: stock.quantity,
        }
    }
}

/// The inputs of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Price,
    Quantity,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Price, Field::Quantity];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Price => "Price",
            Field::Quantity => "Quantity",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Unknown field name in [`Field::from_str`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown field: {0} (expected name, price or quantity)")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(Field::Name),
            "price" => Ok(Field::Price),
            "quantity" | "qty" => Ok(Field::Quantity),
            _ => Err(UnknownField(s.to_string())),
        }
    }
}

/// Field -> message. A field without an entry is valid.
pub type FieldErrors = BTreeMap<Field, String>;

/// The raw text currently in each input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormInput {
    pub name: String,
    pub price: String,
    pub quantity: String,
}

impl FormInput {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Price => &self.price,
            Field::Quantity => &self.quantity,
        }
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Price => self.price = value,
            Field::Quantity => self.quantity = value,
        }
    }
}

/// Checks `input` and returns the errors for every invalid field.
pub fn validate(input: &FormInput) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if input.name.trim().is_empty() {
        errors.insert(Field::Name, "Name is required.".to_string());
    }
    if let Err(message) = parse_price(&input.price) {
        errors.insert(Field::Price, message);
    }
    if let Err(message) = parse_quantity(&input.quantity) {
        errors.insert(Field::Quantity, message);
    }
    errors
}

fn parse_price(text: &str) -> Result<f64, String> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| "Price is required.".to_string())?;
    if value == 0.0 || value.is_nan() {
        return Err("Price is required.".to_string());
    }
    if value.is_infinite() {
        return Err("Price must be a finite number.".to_string());
    }
    Ok(value)
}

fn parse_quantity(text: &str) -> Result<i64, String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err("Quantity is required.".to_string());
    }
    let value: i64 = trimmed
        .parse()
        .map_err(|_| "Quantity must be a whole number.".to_string())?;
    if value == 0 {
        return Err("Quantity is required.".to_string());
    }
    Ok(value)
}

/// What the form tells its owner when Save is pressed. Cancel is handled by the owner.
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    /// Valid input.
    Submitted(StockFormData),
    /// Invalid input; errors are now visible.
    Invalid,
}

/// Form state: current input, last validation result and whether a submit was attempted.
#[derive(Debug, Clone, Default)]
pub struct StockForm {
    input: FormInput,
    errors: FieldErrors,
    submitted: bool,
}

impl StockForm {
    /// An empty form for adding a record.
    pub fn new() -> Self {
        Self::with_input(FormInput {
            name: String::new(),
            price: "0".to_string(),
            quantity: "0".to_string(),
        })
    }

    /// A form prefilled with an existing record.
    pub fn prefilled(data: &StockFormData) -> Self {
        Self::with_input(FormInput {
            name: data.name.clone(),
            price: data.price.to_string(),
            quantity: data.quantity.to_string(),
        })
    }

    fn with_input(input: FormInput) -> Self {
        Self {
            input,
            errors: FieldErrors::new(),
            submitted: false,
        }
    }

    pub fn input(&self) -> &FormInput {
        &self.input
    }

    /// Replaces the text of `field` and clears its error.
    pub fn change(&mut self, field: Field, value: impl Into<String>) {
        self.input.set(field, value.into());
        self.errors.remove(&field);
    }

    /// Validates the input. On success returns the typed payload.
    pub fn submit(&mut self) -> FormOutcome {
        self.submitted = true;
        self.errors = validate(&self.input);
        if !self.errors.is_empty() {
            return FormOutcome::Invalid;
        }
        match (parse_price(&self.input.price), parse_quantity(&self.input.quantity)) {
            (Ok(price), Ok(quantity)) => FormOutcome::Submitted(StockFormData {
                name: self.input.name.clone(),
                price,
                quantity,
            }),
            _ => FormOutcome::Invalid,
        }
    }

    /// The error to display next to `field`, if any. Nothing is shown before the first submit.
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if !self.submitted {
            return None;
        }
        self.errors.get(&field).map(String::as_str)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }
}

impl Display for StockForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for field in Field::ALL {
            let marker = if self.errors.contains_key(&field) { "!" } else { " " };
            writeln!(f, "{marker}{:<9} [{}]", format!("{}:", field.label()), self.input.get(field))?;
            if let Some(error) = self.visible_error(field) {
                writeln!(f, "            {error}")?;
            }
        }
        write!(f, "  (Cancel) (Save)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, price: &str, quantity: &str) -> FormInput {
        FormInput {
            name: name.into(),
            price: price.into(),
            quantity: quantity.into(),
        }
    }

    #[test]
    fn empty_name_is_flagged() {
        let errors = validate(&input("", "5", "1"));
        assert!(errors.contains_key(&Field::Name));
        assert_eq!(errors.len(), 1);

        let errors = validate(&input("   ", "5", "1"));
        assert_eq!(errors.get(&Field::Name).map(String::as_str), Some("Name is required."));
    }

    #[test]
    fn zero_price_is_flagged_like_missing() {
        let errors = validate(&input("Kiwi", "0", "1"));
        assert_eq!(errors.get(&Field::Price).map(String::as_str), Some("Price is required."));
        assert!(validate(&input("Kiwi", "0.00", "1")).contains_key(&Field::Price));
        assert!(validate(&input("Kiwi", "", "1")).contains_key(&Field::Price));
        assert!(validate(&input("Kiwi", "abc", "1")).contains_key(&Field::Price));
    }

    #[test]
    fn infinite_price_is_flagged_inline() {
        for text in ["inf", "-infinity", "1e999"] {
            assert_eq!(
                validate(&input("Kiwi", text, "1")).get(&Field::Price).map(String::as_str),
                Some("Price must be a finite number."),
                "price {text:?}"
            );
        }
        assert!(validate(&input("Kiwi", "1e3", "1")).is_empty());
    }

    #[test]
    fn quantity_must_be_whole_and_non_zero() {
        assert!(validate(&input("Kiwi", "1", "0")).contains_key(&Field::Quantity));
        assert_eq!(
            validate(&input("Kiwi", "1", "2.5")).get(&Field::Quantity).map(String::as_str),
            Some("Quantity must be a whole number.")
        );
        assert!(validate(&input("Kiwi", "1", "3")).is_empty());
    }

    #[test]
    fn negative_values_pass_the_form() {
        assert!(validate(&input("Kiwi", "-1", "-2")).is_empty());
    }

    #[test]
    fn errors_hidden_until_first_submit() {
        let mut form = StockForm::new();
        assert_eq!(form.visible_error(Field::Name), None);

        assert_eq!(form.submit(), FormOutcome::Invalid);
        assert_eq!(form.visible_error(Field::Name), Some("Name is required."));
        assert!(form.visible_error(Field::Price).is_some());
        assert!(form.visible_error(Field::Quantity).is_some());
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut form = StockForm::new();
        form.submit();
        form.change(Field::Name, "Kiwi");
        assert_eq!(form.visible_error(Field::Name), None);
        assert!(form.visible_error(Field::Price).is_some());

        // Not re-validated until the next submit.
        form.change(Field::Price, "0");
        assert_eq!(form.visible_error(Field::Price), None);
        form.submit();
        assert!(form.visible_error(Field::Price).is_some());
    }

    #[test]
    fn valid_submit_yields_typed_payload() {
        let mut form = StockForm::new();
        form.change(Field::Name, "Kiwi");
        form.change(Field::Price, "2.5");
        form.change(Field::Quantity, " 40 ");
        assert_eq!(
            form.submit(),
            FormOutcome::Submitted(StockFormData {
                name: "Kiwi".into(),
                price: 2.5,
                quantity: 40,
            })
        );
        assert!(form.errors().is_empty());
    }

    #[test]
    fn prefilled_form_round_trips_record() {
        let stock = Stock::new(3, "Orange", 8.0, 80);
        let mut form = StockForm::prefilled(&StockFormData::from(&stock));
        assert_eq!(form.input().price, "8");
        assert_eq!(form.submit(), FormOutcome::Submitted(StockFormData::from(&stock)));
    }

    #[test]
    fn field_names_parse_case_insensitively() {
        assert_eq!("Price".parse::<Field>(), Ok(Field::Price));
        assert_eq!("qty".parse::<Field>(), Ok(Field::Quantity));
        assert!("colour".parse::<Field>().is_err());
    }
}
