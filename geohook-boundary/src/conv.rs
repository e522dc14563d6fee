use super::*;
use geohook_entities as e;

impl From<FieldValue> for e::field::FieldValue {
    fn from(from: FieldValue) -> Self {
        match from {
            FieldValue::Text(s) => Self::Text(s),
            FieldValue::Integer(n) => Self::Integer(n),
            FieldValue::Number(n) => Self::Number(n),
            FieldValue::Bool(b) => Self::Bool(b),
            FieldValue::Null => Self::Null,
        }
    }
}

impl From<e::field::FieldValue> for FieldValue {
    fn from(from: e::field::FieldValue) -> Self {
        use e::field::FieldValue as E;
        match from {
            E::Text(s) => Self::Text(s),
            E::Integer(n) => Self::Integer(n),
            E::Number(n) => Self::Number(n),
            E::Bool(b) => Self::Bool(b),
            E::Null => Self::Null,
        }
    }
}

impl From<ChangeNotification> for e::notification::ChangeNotification {
    fn from(from: ChangeNotification) -> Self {
        let ChangeNotification {
            operation,
            entity_type,
            entity_id,
            pending_fields,
        } = from;
        Self {
            entity_type,
            operation: operation.as_str().into(),
            entity_id: entity_id.into(),
            pending_fields: pending_fields.into_iter().collect(),
        }
    }
}

impl From<e::notification::ChangeNotification> for ChangeNotification {
    fn from(from: e::notification::ChangeNotification) -> Self {
        let e::notification::ChangeNotification {
            entity_type,
            operation,
            entity_id,
            pending_fields,
        } = from;
        Self {
            operation: operation.to_string(),
            entity_type,
            entity_id: entity_id.into(),
            pending_fields: pending_fields
                .into_iter()
                .map(|(k, v)| (k, v.into()))
                .collect(),
        }
    }
}
