use serde::{Deserialize, Serialize};

use relay_core::{DomainError, DomainResult, Entity, OrderId};

/// An order with its computed final price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    price: f64,
    tax: f64,
    final_price: f64,
}

impl Order {
    /// Build and validate an order.
    ///
    /// Price and tax must both be strictly positive; the final price is their sum.
    pub fn new(id: impl Into<String>, price: f64, tax: f64) -> DomainResult<Self> {
        let id = OrderId::new(id)?;
        let mut order = Self {
            id,
            price,
            tax,
            final_price: 0.0,
        };
        order.validate()?;
        order.calculate_final_price();
        Ok(order)
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn tax(&self) -> f64 {
        self.tax
    }

    pub fn final_price(&self) -> f64 {
        self.final_price
    }

    fn validate(&self) -> DomainResult<()> {
        // NaN and infinities are not finite, so they fail here too.
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(DomainError::validation("invalid price"));
        }
        if !self.tax.is_finite() || self.tax <= 0.0 {
            return Err(DomainError::validation("invalid tax"));
        }
        Ok(())
    }

    fn calculate_final_price(&mut self) {
        self.final_price = self.price + self.tax;
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Input of the create-order use case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderInput {
    pub id: String,
    pub price: f64,
    pub tax: f64,
}

/// Order as returned by use cases and carried in `OrderCreated` payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderOutput {
    pub id: String,
    pub price: f64,
    pub tax: f64,
    pub final_price: f64,
}

impl From<&Order> for OrderOutput {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id().to_string(),
            price: order.price(),
            tax: order.tax(),
            final_price: order.final_price(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn final_price_is_price_plus_tax() {
        let order = Order::new("123", 10.0, 2.0).unwrap();
        assert_eq!(order.id().as_str(), "123");
        assert_eq!(order.final_price(), 12.0);
    }

    #[test]
    fn blank_id_is_rejected() {
        let err = Order::new("", 10.0, 2.0).unwrap_err();
        assert_eq!(err, DomainError::invalid_id("invalid id"));
    }

    #[test]
    fn non_positive_price_is_rejected() {
        for price in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = Order::new("123", price, 2.0).unwrap_err();
            assert_eq!(err, DomainError::validation("invalid price"));
        }
    }

    #[test]
    fn non_positive_tax_is_rejected() {
        for tax in [0.0, -0.5, f64::NAN] {
            let err = Order::new("123", 10.0, tax).unwrap_err();
            assert_eq!(err, DomainError::validation("invalid tax"));
        }
    }

    #[test]
    fn output_serializes_with_snake_case_fields() {
        let order = Order::new("abc", 100.0, 5.5).unwrap();
        let json = serde_json::to_value(OrderOutput::from(&order)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "abc", "price": 100.0, "tax": 5.5, "final_price": 105.5})
        );
    }

    proptest! {
        /// Property: any strictly positive price/tax pair yields a valid order whose
        /// final price is never below either component.
        #[test]
        fn positive_inputs_always_validate(price in 0.01f64..1_000_000.0, tax in 0.01f64..100_000.0) {
            let order = Order::new("p", price, tax).unwrap();
            prop_assert!(order.final_price() >= order.price());
            prop_assert!(order.final_price() >= order.tax());
            prop_assert_eq!(order.final_price(), price + tax);
        }
    }
}
