use crate::domain::a006_booking::aggregate::ItemRow;
use crate::system::auth::Role;

/// Creation prices off the base total (core discount counted in); editing
/// prices off the already-discounted offer total. The asymmetry is part of
/// the backend's contract and must not be normalized away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingMode {
    Create,
    Edit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingSummary {
    pub base_total: f64,
    pub offer_total: f64,
    /// `base - offer`; negative values pass through unclamped — that is
    /// upstream catalog data, not this reducer's problem.
    pub core_discount: f64,
    pub total_discount: f64,
    /// Never below zero, however large the discounts.
    pub final_amount: f64,
}

/// Numeric coercion for the backend's decimal strings. Anything unparseable
/// counts as zero.
pub fn parse_money(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

/// Trailing-zero-free rendering matching how the edit buffer's recomputed
/// amount is compared against the server's stored string (750.0 -> "750",
/// 750.5 -> "750.5").
pub fn format_amount(value: f64) -> String {
    format!("{}", value)
}

/// Derive the pricing summary from the current line items and the two
/// discount inputs. Stateless; callers recompute from source rows on every
/// change rather than patching a running total.
pub fn price_booking(
    items: &[ItemRow],
    admin_discount: f64,
    coupon_discount: f64,
    mode: PricingMode,
) -> PricingSummary {
    let base_total: f64 = items.iter().map(|i| parse_money(&i.price)).sum();
    let offer_total: f64 = items.iter().map(|i| parse_money(&i.offer_price)).sum();
    let core_discount = base_total - offer_total;

    let (total_discount, final_amount) = match mode {
        PricingMode::Create => {
            let total = core_discount + admin_discount + coupon_discount;
            (total, (base_total - total).max(0.0))
        }
        // Offer prices already absorb the core discount here; subtracting it
        // again would double-count.
        PricingMode::Edit => {
            let total = admin_discount + coupon_discount;
            (total, (offer_total - admin_discount - coupon_discount).max(0.0))
        }
    };

    PricingSummary {
        base_total,
        offer_total,
        core_discount,
        total_discount,
        final_amount,
    }
}

/// Ceiling for a discretionary admin discount under the given role.
pub fn max_admin_discount(role: &Role, offer_total: f64) -> f64 {
    role.max_amount.min(offer_total * role.max_percentage / 100.0)
}

/// Gate applied before a proposed discount is accepted into the edit
/// buffer. The reducer itself never clamps; a proposal outside (0, max]
/// simply is not accepted.
pub fn admin_discount_within_bounds(role: &Role, offer_total: f64, proposed: f64) -> bool {
    proposed > 0.0 && proposed <= max_admin_discount(role, offer_total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_patient::Patient;
    use crate::domain::a004_lab_test::CatalogItem;
    use crate::enums::ItemType;

    fn row(id: i64, price: &str, offer: &str) -> ItemRow {
        ItemRow {
            id,
            patient: Patient {
                id: 1,
                user: 1,
                first_name: "A".into(),
                last_name: String::new(),
                gender: None,
                age: None,
            },
            item_type: ItemType::LabTest,
            item: CatalogItem {
                id,
                name: format!("T{id}"),
                price: price.into(),
                offer_price: offer.into(),
            },
            price: price.into(),
            offer_price: offer.into(),
        }
    }

    fn role(max_amount: f64, max_percentage: f64) -> Role {
        Role {
            id: 1,
            name: "Verifier".into(),
            permissions: vec![],
            view_all: false,
            max_amount,
            max_percentage,
        }
    }

    // Two items, no extra discounts: 500/450 + 300/300.
    #[test]
    fn create_mode_derives_all_totals() {
        let items = [row(1, "500", "450"), row(2, "300", "300")];
        let summary = price_booking(&items, 0.0, 0.0, PricingMode::Create);
        assert_eq!(summary.base_total, 800.0);
        assert_eq!(summary.offer_total, 750.0);
        assert_eq!(summary.core_discount, 50.0);
        assert_eq!(summary.total_discount, 50.0);
        assert_eq!(summary.final_amount, 750.0);
    }

    // Same items in edit mode with an admin discount of 50.
    #[test]
    fn edit_mode_omits_core_discount_from_subtraction() {
        let items = [row(1, "500", "450"), row(2, "300", "300")];
        let summary = price_booking(&items, 50.0, 0.0, PricingMode::Edit);
        assert_eq!(summary.total_discount, 50.0);
        assert_eq!(summary.final_amount, 700.0);
        // The core discount is still reported for display.
        assert_eq!(summary.core_discount, 50.0);
    }

    #[test]
    fn modes_differ_by_exactly_the_core_discount() {
        let items = [row(1, "500", "450"), row(2, "300", "250")];
        let create = price_booking(&items, 20.0, 10.0, PricingMode::Create);
        let edit = price_booking(&items, 20.0, 10.0, PricingMode::Edit);
        assert_eq!(create.core_discount, 100.0);
        assert_eq!(edit.final_amount - create.final_amount, 0.0);
        assert_eq!(create.total_discount - edit.total_discount, create.core_discount);
    }

    #[test]
    fn final_amount_floors_at_zero() {
        let items = [row(1, "100", "90")];
        let create = price_booking(&items, 500.0, 500.0, PricingMode::Create);
        assert_eq!(create.final_amount, 0.0);
        let edit = price_booking(&items, 500.0, 500.0, PricingMode::Edit);
        assert_eq!(edit.final_amount, 0.0);
    }

    #[test]
    fn non_numeric_prices_count_as_zero() {
        let items = [row(1, "n/a", ""), row(2, "300", "300")];
        let summary = price_booking(&items, 0.0, 0.0, PricingMode::Create);
        assert_eq!(summary.base_total, 300.0);
        assert_eq!(summary.offer_total, 300.0);
    }

    #[test]
    fn negative_core_discount_is_not_clamped() {
        // Offer above base is bad catalog data; it passes through as-is.
        let items = [row(1, "100", "150")];
        let summary = price_booking(&items, 0.0, 0.0, PricingMode::Create);
        assert_eq!(summary.core_discount, -50.0);
        assert_eq!(summary.final_amount, 150.0);
    }

    #[test]
    fn admin_discount_bound_is_min_of_amount_and_percentage() {
        // 10% of 2000 = 200 < 500 flat cap.
        assert_eq!(max_admin_discount(&role(500.0, 10.0), 2000.0), 200.0);
        // 10% of 10000 = 1000 > 500 flat cap.
        assert_eq!(max_admin_discount(&role(500.0, 10.0), 10000.0), 500.0);
    }

    #[test]
    fn discount_gate_rejects_zero_negative_and_excess() {
        let r = role(500.0, 10.0);
        assert!(admin_discount_within_bounds(&r, 2000.0, 150.0));
        assert!(admin_discount_within_bounds(&r, 2000.0, 200.0));
        assert!(!admin_discount_within_bounds(&r, 2000.0, 200.01));
        assert!(!admin_discount_within_bounds(&r, 2000.0, 0.0));
        assert!(!admin_discount_within_bounds(&r, 2000.0, -5.0));
    }

    #[test]
    fn amounts_render_like_the_backend_compares_them() {
        assert_eq!(format_amount(750.0), "750");
        assert_eq!(format_amount(750.5), "750.5");
        assert_eq!(format_amount(0.0), "0");
    }
}
