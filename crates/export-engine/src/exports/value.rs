use chrono::{DateTime, NaiveDate};
use serde_json::{Number, Value};

/// Target representation of a normalized value.
///
/// Tabular output (delimited text, spreadsheet markup) is read by machines and
/// keeps raw values; document output is read by people.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendering {
    Tabular,
    Document,
}

impl Rendering {
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Tabular => "",
            Self::Document => "-",
        }
    }
}

/// Coerce any field value into a display string. Never fails.
pub fn display_value(value: Option<&Value>, rendering: Rendering) -> String {
    match value {
        None | Some(Value::Null) => rendering.placeholder().to_string(),
        Some(Value::String(text)) => match rendering {
            Rendering::Tabular => text.clone(),
            Rendering::Document => format_timestamp(text).unwrap_or_else(|| text.clone()),
        },
        Some(Value::Bool(flag)) => match rendering {
            Rendering::Tabular => flag.to_string(),
            Rendering::Document => yes_no(*flag).to_string(),
        },
        Some(Value::Number(number)) => format_number(number),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_value(Some(other), rendering),
            })
            .collect::<Vec<_>>()
            .join(", "),
        Some(object @ Value::Object(_)) => object.to_string(),
    }
}

pub(crate) const fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Integral floats print without a trailing `.0`.
pub(crate) fn format_number(number: &Number) -> String {
    match number.as_f64() {
        Some(float) if number.is_f64() && float.is_finite() && float.fract() == 0.0 => {
            if float.abs() < 1e15 {
                format!("{}", float as i64)
            } else {
                number.to_string()
            }
        }
        _ => number.to_string(),
    }
}

/// RFC 3339 timestamps render as `YYYY-MM-DD HH:MM` in their own offset.
pub(crate) fn format_timestamp(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.len() < 20 || !trimmed.as_bytes()[0].is_ascii_digit() {
        return None;
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|timestamp| timestamp.format("%Y-%m-%d %H:%M").to_string())
}

pub(crate) fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(timestamp.date_naive());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn arrays_join_with_comma_space() {
        let value = json!(["a", "b"]);
        assert_eq!(display_value(Some(&value), Rendering::Tabular), "a, b");
        assert_eq!(display_value(Some(&value), Rendering::Document), "a, b");
    }

    #[test]
    fn missing_values_use_rendering_placeholder() {
        assert_eq!(display_value(None, Rendering::Tabular), "");
        assert_eq!(display_value(Some(&Value::Null), Rendering::Tabular), "");
        assert_eq!(display_value(None, Rendering::Document), "-");
        assert_eq!(display_value(Some(&Value::Null), Rendering::Document), "-");
    }

    #[test]
    fn objects_serialize_compactly() {
        let value = json!({ "city": "İzmir" });
        assert_eq!(
            display_value(Some(&value), Rendering::Tabular),
            r#"{"city":"İzmir"}"#
        );
    }

    #[test]
    fn scalars_use_natural_form() {
        assert_eq!(display_value(Some(&json!(42)), Rendering::Tabular), "42");
        assert_eq!(display_value(Some(&json!(2.0)), Rendering::Tabular), "2");
        assert_eq!(display_value(Some(&json!(2.5)), Rendering::Tabular), "2.5");
        assert_eq!(display_value(Some(&json!(true)), Rendering::Tabular), "true");
        assert_eq!(display_value(Some(&json!(false)), Rendering::Document), "No");
    }

    #[test]
    fn timestamps_are_humanized_only_in_documents() {
        let value = json!("2025-03-14T09:26:53Z");
        assert_eq!(
            display_value(Some(&value), Rendering::Tabular),
            "2025-03-14T09:26:53Z"
        );
        assert_eq!(
            display_value(Some(&value), Rendering::Document),
            "2025-03-14 09:26"
        );
    }

    #[test]
    fn nested_nulls_inside_arrays_stay_blank() {
        let value = json!(["x", null, ["y", "z"]]);
        assert_eq!(display_value(Some(&value), Rendering::Document), "x, , y, z");
    }
}
