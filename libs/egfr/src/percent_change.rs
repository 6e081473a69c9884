/// Percent change between two eGFR readings, as a magnitude.
///
/// `baseline` is the reference reading; the result is
/// `|current - baseline| / baseline * 100`. Returns `0.0` when either
/// reading is zero: a zero eGFR is not a usable comparison point, and
/// callers only test the result against thresholds.
pub fn egfr_percent_change(baseline: f64, current: f64) -> f64 {
    if baseline == 0.0 || current == 0.0 {
        return 0.0;
    }
    ((current - baseline).abs() / baseline) * 100.0
}

#[cfg(test)]
mod tests {
    use super::egfr_percent_change;

    #[test]
    fn equal_readings_have_no_change() {
        assert_eq!(egfr_percent_change(51.10, 51.10), 0.0);
    }

    #[test]
    fn zero_readings_short_circuit() {
        assert_eq!(egfr_percent_change(51.10, 0.0), 0.0);
        assert_eq!(egfr_percent_change(0.0, 51.10), 0.0);
    }

    #[test]
    fn rises_and_drops_report_magnitude() {
        assert!(egfr_percent_change(51.10, 131.50) > 20.0);
        assert!(egfr_percent_change(51.10, 21.10) > 20.0);
        assert!(egfr_percent_change(51.10, 61.10) < 20.0);
    }
}
