//! Pricing engine — subtotal/tax/total computation from catalog line references.
//!
//! Pure function over its inputs: the caller resolves the catalog rows, the
//! engine only does arithmetic and snapshot assembly. All amounts are exact
//! decimals; tax and total round to two places, half away from zero.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bistrohub_core::error::AppError;
use bistrohub_core::result::AppResult;
use bistrohub_entity::menu::MenuItem;
use bistrohub_entity::order::OrderLineDraft;

/// One requested order line: a catalog reference plus a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineRequest {
    /// The referenced catalog item.
    pub menu_item_id: Uuid,
    /// Requested quantity. Values below 1 are floored to 1.
    pub quantity: i32,
}

/// The engine's output: totals plus per-line snapshots ready for persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedOrder {
    /// Sum of `unit_price × quantity` over all lines.
    pub subtotal: Decimal,
    /// `round2(subtotal × tax_rate)`.
    pub tax: Decimal,
    /// `round2(subtotal + tax)`.
    pub total: Decimal,
    /// Snapshot drafts, one per requested line, in request order.
    pub lines: Vec<OrderLineDraft>,
}

/// Computes order totals and line snapshots from resolved catalog items.
#[derive(Debug, Clone)]
pub struct PricingEngine {
    tax_rate: Decimal,
}

impl PricingEngine {
    /// Creates an engine with the given tax rate (e.g. `0.0825`).
    pub fn new(tax_rate: Decimal) -> Self {
        Self { tax_rate }
    }

    /// The configured tax rate.
    pub fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }

    /// Prices the requested lines against the resolved catalog items.
    ///
    /// Every requested line must reference an item present in `catalog`;
    /// the checkout coordinator verifies this up front, so a miss here
    /// means the caller broke the contract and surfaces as `InvalidItems`.
    pub fn price(&self, requested: &[LineRequest], catalog: &[MenuItem]) -> AppResult<PricedOrder> {
        let mut subtotal = Decimal::ZERO;
        let mut lines = Vec::with_capacity(requested.len());

        for line in requested {
            let item = catalog
                .iter()
                .find(|candidate| candidate.id == line.menu_item_id)
                .ok_or_else(|| {
                    AppError::invalid_items(format!(
                        "Menu item {} is not in the resolved catalog",
                        line.menu_item_id
                    ))
                })?;

            let quantity = effective_quantity(line.quantity);
            subtotal += item.price * Decimal::from(quantity);

            lines.push(OrderLineDraft {
                menu_item_id: item.id,
                name_snapshot: item.name.clone(),
                image_url_snapshot: item.image_url.clone(),
                quantity,
                unit_price: item.price,
            });
        }

        let tax = round2(subtotal * self.tax_rate);
        let total = round2(subtotal + tax);

        Ok(PricedOrder {
            subtotal,
            tax,
            total,
            lines,
        })
    }
}

/// Floors non-positive quantities to 1 rather than rejecting the line.
fn effective_quantity(requested: i32) -> i32 {
    requested.max(1)
}

/// Rounds to two decimal places, half away from zero.
fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn catalog_item(price: &str) -> MenuItem {
        MenuItem {
            id: Uuid::new_v4(),
            name: "Lamb Biryani".to_string(),
            description: "Slow-cooked lamb over saffron rice".to_string(),
            category: "mains".to_string(),
            price: price.parse().unwrap(),
            image_url: Some("/images/lamb-biryani.jpg".to_string()),
            is_halal: true,
            prep_time_minutes: Some(25),
            servings: Some("serves 1".to_string()),
            rating: None,
            owner_id: None,
            enabled: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn engine() -> PricingEngine {
        PricingEngine::new("0.0825".parse().unwrap())
    }

    #[test]
    fn test_single_line_worked_example() {
        let item = catalog_item("10.99");
        let requested = [LineRequest {
            menu_item_id: item.id,
            quantity: 2,
        }];

        let priced = engine().price(&requested, &[item.clone()]).unwrap();

        assert_eq!(priced.subtotal.to_string(), "21.98");
        assert_eq!(priced.tax.to_string(), "1.81");
        assert_eq!(priced.total.to_string(), "23.79");
        assert_eq!(priced.lines.len(), 1);
        assert_eq!(priced.lines[0].unit_price, item.price);
        assert_eq!(priced.lines[0].name_snapshot, item.name);
        assert_eq!(priced.lines[0].quantity, 2);
    }

    #[test]
    fn test_subtotal_sums_all_lines() {
        let first = catalog_item("10.99");
        let second = catalog_item("4.50");
        let requested = [
            LineRequest {
                menu_item_id: first.id,
                quantity: 2,
            },
            LineRequest {
                menu_item_id: second.id,
                quantity: 3,
            },
        ];

        let priced = engine().price(&requested, &[first, second]).unwrap();

        // 21.98 + 13.50
        assert_eq!(priced.subtotal.to_string(), "35.48");
        assert_eq!(priced.total, round2(priced.subtotal + priced.tax));
    }

    #[test]
    fn test_non_positive_quantity_floored_to_one() {
        let item = catalog_item("10.00");
        for requested_quantity in [0, -1, -100] {
            let requested = [LineRequest {
                menu_item_id: item.id,
                quantity: requested_quantity,
            }];
            let priced = engine().price(&requested, &[item.clone()]).unwrap();
            assert_eq!(priced.lines[0].quantity, 1);
            assert_eq!(priced.subtotal.to_string(), "10.00");
        }
    }

    #[test]
    fn test_tax_rounds_half_away_from_zero() {
        // 0.30 * 0.0825 = 0.02475 → 0.02; 10.00 * 0.0825 = 0.825 → 0.83
        let cheap = catalog_item("0.30");
        let requested = [LineRequest {
            menu_item_id: cheap.id,
            quantity: 1,
        }];
        let priced = engine().price(&requested, &[cheap]).unwrap();
        assert_eq!(priced.tax.to_string(), "0.02");

        let item = catalog_item("10.00");
        let requested = [LineRequest {
            menu_item_id: item.id,
            quantity: 1,
        }];
        let priced = engine().price(&requested, &[item]).unwrap();
        assert_eq!(priced.tax.to_string(), "0.83");
    }

    #[test]
    fn test_midpoint_rounds_up() {
        // 0.10 * 0.05 = 0.005 → exactly halfway → 0.01
        let item = catalog_item("0.10");
        let requested = [LineRequest {
            menu_item_id: item.id,
            quantity: 1,
        }];
        let priced = PricingEngine::new("0.05".parse().unwrap())
            .price(&requested, &[item])
            .unwrap();
        assert_eq!(priced.tax.to_string(), "0.01");
    }

    #[test]
    fn test_duplicate_references_price_as_separate_lines() {
        let item = catalog_item("5.00");
        let requested = [
            LineRequest {
                menu_item_id: item.id,
                quantity: 1,
            },
            LineRequest {
                menu_item_id: item.id,
                quantity: 2,
            },
        ];
        let priced = engine().price(&requested, &[item]).unwrap();
        assert_eq!(priced.lines.len(), 2);
        assert_eq!(priced.subtotal.to_string(), "15.00");
    }

    #[test]
    fn test_missing_catalog_item_is_invalid() {
        let item = catalog_item("5.00");
        let requested = [LineRequest {
            menu_item_id: Uuid::new_v4(),
            quantity: 1,
        }];
        let err = engine().price(&requested, &[item]).unwrap_err();
        assert_eq!(err.kind, bistrohub_core::error::ErrorKind::InvalidItems);
    }

    #[test]
    fn test_empty_request_prices_to_zero() {
        let priced = engine().price(&[], &[]).unwrap();
        assert_eq!(priced.subtotal, Decimal::ZERO);
        assert_eq!(priced.total, Decimal::ZERO);
        assert!(priced.lines.is_empty());
    }
}
