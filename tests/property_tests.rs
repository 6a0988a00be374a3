use bank_account::{Account, Error, RangeValidator};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..=i64::MAX, 0u32..=8).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

fn non_positive_amount() -> impl Strategy<Value = Decimal> {
    (i64::MIN..=0i64, 0u32..=8).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

fn bounded() -> impl Strategy<Value = f64> {
    -1.0e9..1.0e9
}

proptest! {
    #[test]
    fn deposit_on_empty_account_reports_twice_the_amount(amount in positive_amount()) {
        let mut account = Account::new("1234-ABCDE");
        let reported = account.deposit(amount).unwrap();

        prop_assert_eq!(account.balance(), amount);
        prop_assert_eq!(reported, amount * Decimal::TWO);
    }

    #[test]
    fn deposit_rejects_non_positive(seed in positive_amount(), amount in non_positive_amount()) {
        let mut account = Account::new("1234-ABCDE");
        account.deposit(seed).unwrap();

        let rejected = matches!(account.deposit(amount), Err(Error::InvalidAmount { .. }));
        prop_assert!(rejected);
        prop_assert_eq!(account.balance(), seed);
    }

    #[test]
    fn withdraw_within_balance_returns_remainder(
        balance in positive_amount(),
        ratio in 1u32..=100,
    ) {
        let amount = (balance * Decimal::from(ratio) / Decimal::ONE_HUNDRED).max(Decimal::new(1, 28));
        prop_assume!(amount <= balance);

        let mut account = Account::new("1234-ABCDE");
        account.deposit(balance).unwrap();

        let remaining = account.withdraw(amount).unwrap();
        prop_assert_eq!(remaining, balance - amount);
        prop_assert_eq!(account.balance(), balance - amount);
        prop_assert!(remaining >= Decimal::ZERO);
    }

    #[test]
    fn withdraw_beyond_balance_is_rejected(balance in positive_amount(), extra in positive_amount()) {
        let mut account = Account::new("1234-ABCDE");
        account.deposit(balance).unwrap();

        let rejected = matches!(account.withdraw(balance + extra), Err(Error::InvalidAmount { .. }));
        prop_assert!(rejected);
        prop_assert_eq!(account.balance(), balance);
    }

    #[test]
    fn values_between_bounds_are_in_range(a in bounded(), b in bounded(), v in bounded()) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let value = v.clamp(min, max);

        let validator = RangeValidator::new();
        prop_assert!(!validator.is_within_range(value, min, max));
        prop_assert!(!validator.is_within_range(min, min, max));
        prop_assert!(!validator.is_within_range(max, min, max));
    }

    #[test]
    fn values_beyond_bounds_are_outside(a in bounded(), b in bounded(), gap in 1.0f64..1.0e6) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };

        let validator = RangeValidator::new();
        prop_assert!(validator.is_within_range(min - gap, min, max));
        prop_assert!(validator.is_within_range(max + gap, min, max));
        prop_assert!(validator.is_within_range(f64::INFINITY, min, max));
        prop_assert!(validator.is_within_range(f64::NEG_INFINITY, min, max));
    }

    #[test]
    fn nan_value_is_never_outside(min in bounded(), max in bounded()) {
        let validator = RangeValidator::new();
        prop_assert!(!validator.is_within_range(f64::NAN, min, max));
        prop_assert!(!validator.is_out_of_range(f64::NAN, min, max));
    }
}
