use serde_json::Value;

/// Shape of a dynamic input value, decided once at the JSON boundary.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ValueKind {
    Numeric,
    Text,
    List,
    Map,
    Other,
}

pub fn classify(value: &Value) -> ValueKind {
    match value {
        Value::Number(_) => ValueKind::Numeric,
        Value::String(_) => ValueKind::Text,
        Value::Array(_) => ValueKind::List,
        Value::Object(_) => ValueKind::Map,
        Value::Bool(_) | Value::Null => ValueKind::Other,
    }
}

pub fn is_numeric(value: &Value) -> bool {
    classify(value) == ValueKind::Numeric
}

pub fn is_text(value: &Value) -> bool {
    classify(value) == ValueKind::Text
}

pub fn is_list(value: &Value) -> bool {
    classify(value) == ValueKind::List
}

/// First member value of an object; `None` for empty objects and anything
/// that is not an object. Members follow serde_json's key order.
pub fn first_member(value: &Value) -> Option<&Value> {
    value.as_object().and_then(|members| members.values().next())
}
