use serde::Serialize;
use serde_json::Value;

/// How the echoed payload is laid out in the response body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResponseShape {
    #[default]
    Identity,
    Envelope,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum TemperatureResponse {
    Identity(Value),
    Envelope { data: Value },
}

impl TemperatureResponse {
    pub fn new(shape: ResponseShape, payload: Value) -> Self {
        match shape {
            ResponseShape::Identity => Self::Identity(payload),
            ResponseShape::Envelope => Self::Envelope { data: payload },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn identity_serializes_payload_verbatim() {
        let payload = json!({"city": "Berlin", "celsius": 21.5});
        let body = serde_json::to_value(TemperatureResponse::new(
            ResponseShape::Identity,
            payload.clone(),
        ))
        .unwrap();
        assert_eq!(body, payload);
    }

    #[test]
    fn envelope_nests_payload_under_data() {
        let body = serde_json::to_value(TemperatureResponse::new(
            ResponseShape::Envelope,
            json!([1, 2, 3]),
        ))
        .unwrap();
        let object = body.as_object().expect("envelope is an object");
        assert_eq!(object.len(), 1);
        assert_eq!(object["data"], json!([1, 2, 3]));
    }

    #[test]
    fn null_payload_keeps_its_shape() {
        let identity = serde_json::to_string(&TemperatureResponse::new(
            ResponseShape::Identity,
            Value::Null,
        ))
        .unwrap();
        assert_eq!(identity, "null");

        let envelope = serde_json::to_string(&TemperatureResponse::new(
            ResponseShape::Envelope,
            Value::Null,
        ))
        .unwrap();
        assert_eq!(envelope, r#"{"data":null}"#);
    }
}
