//! Display helpers shared by templates, registered as Tera filters.

use std::collections::HashMap;

use tera::{Value, to_value, try_get_value};

/// Items shown by the specialties preview before the "+N more" suffix.
pub const PREVIEW_MAX_ITEMS: usize = 3;
/// Character budget of the specialties preview.
pub const PREVIEW_MAX_CHARS: usize = 60;

/// Joins up to `max_items` non-blank entries with ", ", appends
/// " +N more" for the rest and truncates the result to `max_chars`.
pub fn list_preview<S: AsRef<str>>(items: &[S], max_items: usize, max_chars: usize) -> String {
    let items: Vec<&str> = items
        .iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .collect();

    if items.is_empty() {
        return String::new();
    }

    let shown = &items[..items.len().min(max_items)];
    let hidden = items.len() - shown.len();

    let mut display = shown.join(", ");
    if hidden > 0 {
        display.push_str(&format!(" +{hidden} more"));
    }

    truncate(&display, max_chars)
}

/// Cuts `s` to at most `max` characters, the last one being an ellipsis.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let cut: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}

/// Phone numbers are stored as bare US digits.
pub fn display_phone(phone_number: i64) -> String {
    format!("+1{phone_number}")
}

/// Tera filter: `{{ advocate.specialties | list_preview }}`.
///
/// Accepts optional `max_items` and `max_chars` arguments.
pub fn list_preview_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let items = try_get_value!("list_preview", "value", Vec<String>, value);
    let max_items = match args.get("max_items") {
        Some(v) => try_get_value!("list_preview", "max_items", usize, v),
        None => PREVIEW_MAX_ITEMS,
    };
    let max_chars = match args.get("max_chars") {
        Some(v) => try_get_value!("list_preview", "max_chars", usize, v),
        None => PREVIEW_MAX_CHARS,
    };
    Ok(to_value(list_preview(&items, max_items, max_chars))?)
}

/// Tera filter: `{{ advocate.phoneNumber | phone }}`.
pub fn phone_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let phone = try_get_value!("phone", "value", i64, value);
    Ok(to_value(display_phone(phone))?)
}
