//! Abbreviation and currency rendering in the en-IN locale.

use revenue_core::{
    format::{IndianLocale, NumberFormat},
    normalizer::normalize,
    rates::DerivedRates,
};

#[test]
fn abbreviation_boundaries_are_exact() {
    let fmt = IndianLocale;
    assert_eq!(fmt.abbreviate(999.0), "999");
    assert_eq!(fmt.abbreviate(1_000.0), "1.0K");
    assert_eq!(fmt.abbreviate(99_999.0), "100.0K");
    assert_eq!(fmt.abbreviate(100_000.0), "1.0L");
    assert_eq!(fmt.abbreviate(9_999_999.0), "100.0L");
    assert_eq!(fmt.abbreviate(10_000_000.0), "1.0Cr");
}

#[test]
fn large_crore_mantissa_is_grouped() {
    // 1,234,567 crore
    assert_eq!(IndianLocale.abbreviate(12_345_670_000_000.0), "12,34,567.0Cr");
}

#[test]
fn sub_thousand_values_round_to_whole_units() {
    let fmt = IndianLocale;
    assert_eq!(fmt.abbreviate(0.0), "0");
    assert_eq!(fmt.abbreviate(2.28), "2");
    assert_eq!(fmt.abbreviate(136.89), "137");
}

#[test]
fn currency_keeps_two_to_four_fraction_digits() {
    let fmt = IndianLocale;
    assert_eq!(fmt.format_currency(0.0), "₹0.00");
    assert_eq!(fmt.format_currency(0.5), "₹0.50");
    assert_eq!(fmt.format_currency(0.038025705), "₹0.038");
    assert_eq!(fmt.format_currency(0.380257054), "₹0.3803");
    assert_eq!(fmt.format_currency(1_234_567.891), "₹12,34,567.891");
}

#[test]
fn twelve_lakh_scenario_rates() {
    let rates = DerivedRates::from_annual(1_200_000);
    assert!((rates.daily - 3285.42).abs() < 0.01, "daily={}", rates.daily);
    assert!((rates.per_second - 0.038026).abs() < 1e-6, "per_second={}", rates.per_second);

    let shown = rates.display(&IndianLocale);
    assert_eq!(shown.daily, "₹3.3K");
    assert_eq!(shown.hourly, "₹137");
    assert_eq!(shown.per_minute, "₹2");
}

#[test]
fn normalized_digits_are_exactly_the_input_digits() {
    let samples = [
        "",
        "abc",
        "1,00,000",
        "₹ 12 lakh 50",
        "--42--",
        "٣٤٥ 7",     // non-ASCII digits are dropped
        "0001",
        "9a8b7c6d5e4f3g2h1i0",
    ];
    for raw in samples {
        let expected: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        let once = normalize(raw, &IndianLocale);
        assert_eq!(once.digits, expected, "input {raw:?}");

        let twice = normalize(&once.digits, &IndianLocale);
        assert_eq!(twice, once, "re-normalizing {raw:?} changed it");
    }
}

#[test]
fn normalizing_display_text_round_trips_the_value() {
    let first = normalize("1234567", &IndianLocale);
    assert_eq!(first.display, "12,34,567");
    let again = normalize(&first.display, &IndianLocale);
    assert_eq!(again.amount(), first.amount());
    assert_eq!(again.display, first.display);
}

#[test]
fn empty_input_has_no_amount() {
    let n = normalize("no digits here", &IndianLocale);
    assert!(n.is_empty());
    assert_eq!(n.display, "");
    assert_eq!(n.amount(), None);
}
