//! List and dropdown renderers.
//!
//! Both renderers accept whatever the backend sent. Malformed input is
//! logged and rendered as a placeholder; they never fail.

use serde_json::Value;
use tracing::warn;

use crate::domain::ports::{ListId, ListItem, SelectId, SelectOption, ViewPort};

const EMPTY_LIST: &str = "(Lista vacía)";
const NO_DATA: &str = "(No hay datos disponibles)";
const UNNAMED: &str = "(Sin nombre especificado)";

/// Fills a dropdown with one option per mapping entry.
///
/// The option value is `entry[value_field]` when present, else the mapping
/// key. The text is `entry[text_field]` for object entries and the entry
/// itself for scalars.
pub fn populate_select<V: ViewPort + ?Sized>(
    view: &mut V,
    select: SelectId,
    data: &Value,
    value_field: &str,
    text_field: &str,
    placeholder: Option<&str>,
    clear_first: bool,
) {
    if clear_first {
        view.clear_select(select);
    }

    if let Some(text) = placeholder {
        view.push_option(select, SelectOption::placeholder(text));
    }

    let Some(entries) = entries(data) else {
        warn!(select = ?select, data = %data, "Invalid data for select");
        return;
    };

    for (key, entry) in entries {
        let value = match entry {
            Value::Object(fields) => fields.get(value_field).map(display_text),
            _ => None,
        }
        .unwrap_or_else(|| key.clone());

        let text = match entry {
            Value::Object(fields) => fields.get(text_field).map_or(key, display_text),
            other => display_text(other),
        };

        view.push_option(select, SelectOption::new(value, text));
    }
}

/// Fills a list with one `ID: <id>` line per mapping entry.
///
/// With `key_is_id` the mapping key is the id, otherwise the entry's `id`
/// field. Empty mappings and non-mapping input render a placeholder.
pub fn populate_list<V: ViewPort + ?Sized>(
    view: &mut V,
    list: ListId,
    data: &Value,
    display_field: Option<&str>,
    key_is_id: bool,
) {
    view.clear_list(list);

    let Some(entries) = entries(data) else {
        warn!(list = ?list, data = %data, "Invalid data for list");
        view.push_list_item(list, ListItem::placeholder(NO_DATA));
        return;
    };

    if entries.is_empty() {
        view.push_list_item(list, ListItem::placeholder(EMPTY_LIST));
        return;
    }

    for (key, entry) in entries {
        let id = if key_is_id {
            key
        } else {
            entry.get("id").map_or(key, display_text)
        };

        let name = match entry {
            Value::Object(fields) => display_field
                .and_then(|field| fields.get(field))
                .filter(|value| is_truthy(value))
                .map(display_text),
            Value::Null => None,
            scalar => Some(display_text(scalar)),
        };

        let text = match name {
            Some(name) => format!("ID: {id} - Nombre: {name}"),
            None => format!("ID: {id} - {UNNAMED}"),
        };
        view.push_list_item(list, ListItem::new(text));
    }
}

fn entries(data: &Value) -> Option<Vec<(String, &Value)>> {
    match data {
        Value::Object(map) => Some(map.iter().map(|(k, v)| (k.clone(), v)).collect()),
        Value::Array(items) => Some(
            items
                .iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v))
                .collect(),
        ),
        _ => None,
    }
}

fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
