//! Property tests for rounding and money arithmetic.

use proptest::prelude::*;
use salestax_core::{Category, Money, MoneyError, Product, Rounder, TaxCalculator};

proptest! {
    #[test]
    fn round_up_lands_on_next_multiple(centicents in 0i64..10_000_000) {
        let rounded = Rounder::default().round_up(centicents).unwrap();

        prop_assert_eq!(rounded % 500, 0);
        prop_assert!(rounded >= centicents);
        prop_assert!(rounded - centicents < 500);
    }

    #[test]
    fn round_up_is_idempotent(centicents in 0i64..10_000_000, increment in 1i64..100) {
        let rounder = Rounder::with_increment_cents(increment).unwrap();
        let once = rounder.round_up(centicents).unwrap();
        prop_assert_eq!(rounder.round_up(once), Ok(once));
    }

    #[test]
    fn two_decimal_amounts_round_trip(cents in 0i64..100_000_000) {
        let text = format!("{}.{:02}", cents / 100, cents % 100);
        let money = Money::from_amount(&text).unwrap();

        prop_assert_eq!(money.cents(), cents);
        prop_assert_eq!(money.format(), text);
    }

    #[test]
    fn addition_matches_cent_addition(
        a in -1_000_000i64..1_000_000,
        b in -1_000_000i64..1_000_000,
        c in -1_000_000i64..1_000_000,
    ) {
        let (ma, mb, mc) = (Money::from_cents(a), Money::from_cents(b), Money::from_cents(c));
        let ab = ma.checked_add(mb).unwrap();

        prop_assert_eq!(ab, Money::from_cents(a + b));
        prop_assert_eq!(mb.checked_add(ma), Ok(ab));
        prop_assert_eq!(ab.checked_add(mc), ma.checked_add(mb.checked_add(mc).unwrap()));
    }

    #[test]
    fn addition_never_wraps(a in any::<i64>(), b in any::<i64>()) {
        let sum = Money::from_cents(a).checked_add(Money::from_cents(b));
        match a.checked_add(b) {
            Some(cents) => prop_assert_eq!(sum, Ok(Money::from_cents(cents))),
            None => prop_assert!(matches!(sum, Err(MoneyError::Overflow { .. })), "expected Overflow, got {:?}", sum),
        }
    }

    #[test]
    fn line_tax_is_unit_tax_times_quantity(
        cents in 0i64..1_000_000,
        quantity in 1i64..1_000,
        imported in any::<bool>(),
        category in prop::sample::select(Category::ALL.to_vec()),
    ) {
        let product = Product::new("item", Money::from_cents(cents), imported, category).unwrap();
        let calculator = TaxCalculator::new();

        let unit = calculator.calculate_for_product(&product, 1).unwrap();
        let line = calculator.calculate_for_product(&product, quantity).unwrap();

        prop_assert_eq!(unit.cents() % 5, 0);
        prop_assert_eq!(line, unit.checked_multiply(quantity).unwrap());
    }
}
