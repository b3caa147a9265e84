use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::api_error::ApiError;

/// Payload as returned by the registry API.
///
/// Most endpoints wrap their result in `{"data": ...}`, a few answer with the
/// bare value. Both decode to the same `T`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(value) => value,
        }
    }
}

/// Decode a response body, accepting either envelope shape.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str::<Envelope<T>>(body)
        .map(Envelope::into_inner)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: i64,
        name: String,
    }

    #[test]
    fn decodes_wrapped_and_bare() {
        let wrapped: Vec<Item> = decode(r#"{"data":[{"id":1,"name":"Silla"}]}"#).unwrap();
        let bare: Vec<Item> = decode(r#"[{"id":1,"name":"Silla"}]"#).unwrap();
        assert_eq!(wrapped, bare);
        assert_eq!(wrapped[0].name, "Silla");
    }

    #[test]
    fn object_with_data_field_is_unwrapped() {
        let item: Item = decode(r#"{"data":{"id":7,"name":"Mesa"}}"#).unwrap();
        assert_eq!(item.id, 7);
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let res: Result<Vec<Item>, _> = decode("<html>");
        assert!(matches!(res, Err(ApiError::Decode(_))));
    }
}
