use rust_decimal::Decimal;
use std::str::FromStr;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[test]
fn positive_ties_go_away_from_zero() {
    assert_eq!(kalium_units::round_half_away_from_zero(1.5, 0), 2.0);
    assert_eq!(kalium_units::round_half_away_from_zero(1.55, 1), 1.6);
    assert_eq!(kalium_units::round_half_away_from_zero(1.54, 1), 1.5);
    assert_eq!(kalium_units::round_half_away_from_zero(1.555, 2), 1.56);
}

#[test]
fn negative_ties_go_away_from_zero() {
    assert_eq!(kalium_units::round_half_away_from_zero(-1.5, 0), -2.0);
    assert_eq!(kalium_units::round_half_away_from_zero(-1.55, 1), -1.6);
    assert_eq!(kalium_units::round_half_away_from_zero(-1.54, 1), -1.5);
    assert_eq!(kalium_units::round_half_away_from_zero(-1.555, 2), -1.56);
    assert_eq!(kalium_units::round_half_away_from_zero(-1.5554, 3), -1.555);
}

#[test]
fn decimal_inputs_round_exactly() {
    assert_eq!(
        kalium_units::round_decimal_half_away_from_zero(dec("1.5"), 0),
        Decimal::from(2)
    );
    assert_eq!(
        kalium_units::round_decimal_half_away_from_zero(dec("1.55"), 1),
        dec("1.6")
    );
    assert_eq!(
        kalium_units::round_decimal_half_away_from_zero(dec("1.555"), 2),
        dec("1.56")
    );
    assert_eq!(
        kalium_units::round_decimal_half_away_from_zero(dec("-1.5"), 0),
        Decimal::from(-2)
    );
    assert_eq!(
        kalium_units::round_decimal_half_away_from_zero(dec("-1.555"), 2),
        dec("-1.56")
    );
    assert_eq!(
        kalium_units::round_decimal_half_away_from_zero(dec("-1.5554"), 3),
        dec("-1.555")
    );
}

#[test]
fn half_up_ties_go_toward_positive_infinity() {
    assert_eq!(kalium_units::round_half_up(1.5, 0), 2.0);
    assert_eq!(kalium_units::round_half_up(2.45, 1), 2.5);
    assert_eq!(kalium_units::round_half_up(-1.5, 0), -1.0);
    assert_eq!(kalium_units::round_half_up(-1.55, 1), -1.5);
    // Non-ties are unaffected by the tie-breaking direction.
    assert_eq!(kalium_units::round_half_up(-1.54, 1), -1.5);
    assert_eq!(kalium_units::round_half_up(-1.56, 1), -1.6);

    assert_eq!(kalium_units::round_decimal_half_up(dec("1.5"), 0), Decimal::from(2));
    assert_eq!(kalium_units::round_decimal_half_up(dec("-1.5"), 0), Decimal::from(-1));
}

#[test]
fn values_without_decimal_digits_pass_through() {
    assert_eq!(kalium_units::round_half_away_from_zero(0.0, 2), 0.0);
    assert_eq!(kalium_units::round_half_away_from_zero(120.0, 2), 120.0);
    // Beyond Decimal's 28-digit range the value is already integral.
    assert_eq!(kalium_units::round_half_away_from_zero(1e30, 2), 1e30);
    assert!(kalium_units::round_half_away_from_zero(f64::NAN, 2).is_nan());
}
