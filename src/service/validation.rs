//! Presence checks and price coercion for product bodies.

use crate::error::{AppError, REQUIRED_FIELDS_MESSAGE};
use crate::model::{NewProduct, ProductInput};
use serde_json::Value;

pub struct ProductValidator;

impl ProductValidator {
    /// All three fields must be present and non-empty. `name` and `seller` are trimmed;
    /// a numeric `price` is turned into its decimal text.
    pub fn validate(input: &ProductInput) -> Result<NewProduct, AppError> {
        let name = required_text(input.name.as_ref())?;
        let seller = required_text(input.seller.as_ref())?;
        let price = price_text(input.price.as_ref())?;
        Ok(NewProduct { name, seller, price })
    }
}

fn missing() -> AppError {
    AppError::Validation(REQUIRED_FIELDS_MESSAGE.into())
}

fn required_text(v: Option<&Value>) -> Result<String, AppError> {
    match v {
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Err(missing());
            }
            Ok(trimmed.to_string())
        }
        _ => Err(missing()),
    }
}

fn price_text(v: Option<&Value>) -> Result<String, AppError> {
    match v {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(missing()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(v: Value) -> ProductInput {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn trims_name_and_seller() {
        let p = ProductValidator::validate(&input(json!({
            "name": "  Widget ",
            "seller": "Acme\n",
            "price": "9.99"
        })))
        .unwrap();
        assert_eq!(p, NewProduct::new("Widget", "Acme", "9.99"));
    }

    #[test]
    fn numeric_price_becomes_text() {
        let p = ProductValidator::validate(&input(json!({
            "name": "Widget",
            "seller": "Acme",
            "price": 12.5
        })))
        .unwrap();
        assert_eq!(p.price, "12.5");

        let p = ProductValidator::validate(&input(json!({
            "name": "Widget",
            "seller": "Acme",
            "price": 0
        })))
        .unwrap();
        assert_eq!(p.price, "0");
    }

    #[test]
    fn price_text_is_kept_verbatim() {
        let p = ProductValidator::validate(&input(json!({
            "name": "Widget",
            "seller": "Acme",
            "price": "10.50"
        })))
        .unwrap();
        assert_eq!(p.price, "10.50");
    }

    #[test]
    fn rejects_missing_or_empty_fields() {
        for body in [
            json!({"seller": "Acme", "price": "1"}),
            json!({"name": "", "seller": "Acme", "price": "1"}),
            json!({"name": "   ", "seller": "Acme", "price": "1"}),
            json!({"name": "Widget", "seller": "", "price": "1"}),
            json!({"name": "Widget", "seller": "Acme"}),
            json!({"name": "Widget", "seller": "Acme", "price": ""}),
            json!({"name": "Widget", "seller": "Acme", "price": null}),
            json!({"name": "Widget", "seller": "Acme", "price": true}),
            json!({"name": 5, "seller": "Acme", "price": "1"}),
        ] {
            let err = ProductValidator::validate(&input(body.clone())).unwrap_err();
            assert!(
                matches!(err, AppError::Validation(ref m) if m == REQUIRED_FIELDS_MESSAGE),
                "expected validation error for {body}"
            );
        }
    }
}
