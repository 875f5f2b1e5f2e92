//! Indicator Reshaping
//!
//! The backend sends indicators as `name -> { total, <section>... }` with
//! numbers as locale-formatted strings.

use serde_json::Value;

use crate::api::ApiIndicators;
use crate::models::{Indicator, ProjIndicators, Section};

const TOTAL_KEY: &str = "total";

/// Parse a decimal that may use a comma separator ("123,45").
///
/// Like a lenient number parse, only the leading numeric part counts
/// ("12,5 м²" is 12.5). Anything unparsable is 0.
pub fn parse_decimal(raw: &str) -> f64 {
    let normalized = raw.replacen(',', ".", 1);
    let text = normalized.trim_start();
    let end = numeric_prefix_len(text);

    text[..end]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_start = end;
    end = digits_from(end);
    let mut digit_count = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        let frac_count = frac_end - (end + 1);
        if digit_count > 0 || frac_count > 0 {
            digit_count += frac_count;
            end = frac_end;
        }
    }
    if digit_count == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    end
}

fn value_as_decimal(value: &Value) -> f64 {
    match value {
        Value::String(s) => parse_decimal(s),
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Display unit implied by an indicator's name.
pub fn unit_for_indicator(name: &str) -> &'static str {
    let name = name.to_lowercase();
    let has = |keywords: &[&str]| keywords.iter().any(|k| name.contains(k));

    if has(&["площадь"]) {
        "м²"
    } else if has(&["объем", "объём"]) {
        "м³"
    } else if has(&["высота"]) {
        "м"
    } else if has(&["этаж"]) {
        "эт."
    } else {
        // apartments, "N-комнатные", pieces and anything unrecognised are counts
        "шт"
    }
}

pub fn convert_indicators(raw: &ApiIndicators) -> ProjIndicators {
    let indicators: Vec<Indicator> = raw
        .iter()
        .map(|(name, data)| {
            let sum = data.get(TOTAL_KEY).map(value_as_decimal).unwrap_or(0.0);
            let unit = unit_for_indicator(name);
            let section = data
                .as_object()
                .into_iter()
                .flatten()
                .filter(|(key, _)| key.as_str() != TOTAL_KEY)
                .map(|(_, value)| Section {
                    name: name.clone(),
                    value: value_as_decimal(value),
                    unit: unit.to_string(),
                })
                .collect();
            Indicator { sum, section }
        })
        .collect();

    ProjIndicators {
        size: indicators.len(),
        indicators,
    }
}
