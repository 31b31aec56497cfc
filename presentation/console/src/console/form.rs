use std::sync::{Mutex, MutexGuard, PoisonError};

use business::domain::product::services::ProductForm;
use business::domain::product::use_cases::create::CreateProductParams;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Fields {
    name: String,
    price: String,
    stock: String,
}

impl Default for Fields {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: "0".to_string(),
            stock: "0".to_string(),
        }
    }
}

/// Product draft typed at the console.
///
/// Holds raw text inputs; `is_valid` and `errors` run the field validators.
#[derive(Debug, Default)]
pub struct ConsoleProductForm {
    fields: Mutex<Fields>,
}

impl ConsoleProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill(&self, name: &str, price: &str, stock: &str) {
        *self.fields() = Fields {
            name: name.to_string(),
            price: price.to_string(),
            stock: stock.to_string(),
        };
    }

    /// Validation messages for the current inputs, empty when valid.
    pub fn errors(&self) -> Vec<String> {
        let fields = self.fields();
        let mut errors = Vec::new();

        if fields.name.trim().is_empty() {
            errors.push("Name is required".to_string());
        }
        if let Err(message) = parse_price(&fields.price) {
            errors.push(message);
        }
        if let Err(message) = parse_stock(&fields.stock) {
            errors.push(message);
        }

        errors
    }

    fn fields(&self) -> MutexGuard<'_, Fields> {
        self.fields.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ProductForm for ConsoleProductForm {
    fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    fn value(&self) -> CreateProductParams {
        let fields = self.fields();
        CreateProductParams {
            name: fields.name.trim().to_string(),
            price: parse_price(&fields.price).unwrap_or_default(),
            stock: parse_stock(&fields.stock).unwrap_or_default(),
        }
    }

    fn reset(&self) {
        *self.fields() = Fields::default();
    }
}

fn parse_price(raw: &str) -> Result<f64, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("Price is required".to_string());
    }
    match raw.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        Ok(_) => Err("Price must be 0 or more".to_string()),
        Err(_) => Err(format!("Price '{}' is not a number", raw)),
    }
}

fn parse_stock(raw: &str) -> Result<u32, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("Stock is required".to_string());
    }
    match raw.parse::<i64>() {
        Ok(stock) if stock < 0 => Err("Stock must be 0 or more".to_string()),
        Ok(stock) => u32::try_from(stock).map_err(|_| format!("Stock {} is too large", stock)),
        Err(_) => Err(format!("Stock '{}' is not a whole number", raw)),
    }
}
