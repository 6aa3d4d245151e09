//! Log call shapes and argument validation
//!
//! A `LogCall` is built either from typed arguments (message + tags,
//! optionally data) or from a positional argument list whose shape is
//! checked at run time. Validation completes before anything is emitted.

use crate::errors::{FacadeError, Result};
use seedlog_core_types::Severity;
use serde::Serialize;
use serde_json::{Map, Value};

/// Structured payload attached to a record
pub type LogData = Map<String, Value>;

/// One invocation of a severity method
#[derive(Debug, Clone, PartialEq)]
pub struct LogCall {
    pub severity: Severity,
    pub message: String,
    pub data: Option<LogData>,
    pub tags: Vec<String>,
}

impl LogCall {
    /// Message + tags shape
    pub fn new<I, T>(severity: Severity, message: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            severity,
            message: message.into(),
            data: None,
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Attach a data payload; it must serialize to a JSON object
    ///
    /// # Errors
    ///
    /// Returns `FacadeError::InvalidDataType` if `data` is not a non-null mapping.
    pub fn with_data<D>(mut self, data: &D) -> Result<Self>
    where
        D: Serialize + ?Sized,
    {
        let value = serde_json::to_value(data).map_err(|e| FacadeError::InvalidDataType {
            found: format!("unserializable value ({})", e),
        })?;
        self.data = Some(data_from_value(value)?);
        Ok(self)
    }

    /// Build a call from 2 or 3 positional arguments
    ///
    /// - `[message, tags]`
    /// - `[message, data, tags]`
    ///
    /// A non-string message is rendered as its JSON text.
    ///
    /// # Errors
    ///
    /// - `InvalidArgumentCount` for fewer than 2 or more than 3 arguments
    /// - `InvalidDataType` if the data argument is not a non-null object
    /// - `InvalidTagsType` if tags is not an array of strings
    pub fn from_args(severity: Severity, args: &[Value]) -> Result<Self> {
        let (message, data, tags) = match args {
            [message, tags] => (message, None, tags),
            [message, data, tags] => (message, Some(data), tags),
            _ => {
                return Err(FacadeError::InvalidArgumentCount { count: args.len() });
            }
        };

        let data = data.cloned().map(data_from_value).transpose()?;
        let tags = tags_from_value(tags)?;
        let message = match message {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };

        Ok(Self {
            severity,
            message,
            data,
            tags,
        })
    }
}

fn data_from_value(value: Value) -> Result<LogData> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(FacadeError::InvalidDataType {
            found: json_type_name(&other).to_string(),
        }),
    }
}

fn tags_from_value(value: &Value) -> Result<Vec<String>> {
    let items = value.as_array().ok_or_else(|| FacadeError::InvalidTagsType {
        reason: format!("expected array, got {}", json_type_name(value)),
    })?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::String(tag) => Ok(tag.clone()),
            other => Err(FacadeError::InvalidTagsType {
                reason: format!("element {} is {}", i, json_type_name(other)),
            }),
        })
        .collect()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_two_args_message_and_tags() {
        let call = LogCall::from_args(Severity::Info, &[json!("started"), json!(["boot"])]).unwrap();
        assert_eq!(call.message, "started");
        assert_eq!(call.tags, vec!["boot".to_string()]);
        assert!(call.data.is_none());
    }

    #[test]
    fn test_three_args_with_data() {
        let call = LogCall::from_args(
            Severity::Error,
            &[json!("disk failure"), json!({"code": 28}), json!(["io", "fatal"])],
        )
        .unwrap();
        assert_eq!(call.data.unwrap().get("code"), Some(&json!(28)));
        assert_eq!(call.tags, vec!["io".to_string(), "fatal".to_string()]);
    }

    #[test]
    fn test_argument_count_bounds() {
        for args in [vec![], vec![json!("m")], vec![json!("m"); 4], vec![json!("m"); 7]] {
            let err = LogCall::from_args(Severity::Warn, &args).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgumentCount);
        }
    }

    #[test]
    fn test_data_must_be_object() {
        for data in [json!(null), json!(1), json!("text"), json!(true), json!([1, 2])] {
            let err = LogCall::from_args(Severity::Debug, &[json!("m"), data, json!([])])
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidDataType);
        }
    }

    #[test]
    fn test_tags_must_be_array_of_strings() {
        let not_array = LogCall::from_args(Severity::Info, &[json!("m"), json!("boot")]).unwrap_err();
        assert_eq!(not_array.kind(), ErrorKind::InvalidTagsType);

        let null_tags = LogCall::from_args(Severity::Info, &[json!("m"), json!(null)]).unwrap_err();
        assert_eq!(null_tags.kind(), ErrorKind::InvalidTagsType);

        let mixed = LogCall::from_args(Severity::Info, &[json!("m"), json!(["ok", 3])]).unwrap_err();
        assert_eq!(mixed.kind(), ErrorKind::InvalidTagsType);
        assert!(mixed.to_string().contains("element 1 is number"));
    }

    #[test]
    fn test_data_error_reported_before_tags_error() {
        let err = LogCall::from_args(Severity::Info, &[json!("m"), json!(1), json!(2)]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDataType);
    }

    #[test]
    fn test_non_string_message_rendered_as_json() {
        let call = LogCall::from_args(Severity::Info, &[json!(42), json!([])]).unwrap();
        assert_eq!(call.message, "42");
    }

    #[test]
    fn test_typed_with_data() {
        #[derive(Serialize)]
        struct Failure {
            code: u32,
        }

        let call = LogCall::new(Severity::Error, "disk failure", ["io"])
            .with_data(&Failure { code: 28 })
            .unwrap();
        assert_eq!(call.data.unwrap(), json!({"code": 28}).as_object().cloned().unwrap());

        let err = LogCall::new(Severity::Error, "m", ["io"]).with_data(&28).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDataType);

        let none: Option<u8> = None;
        let err = LogCall::new(Severity::Error, "m", ["io"]).with_data(&none).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDataType);
    }

    proptest! {
        #[test]
        fn prop_string_tags_always_accepted(tags in proptest::collection::vec("[a-z]{0,8}", 0..6)) {
            let call = LogCall::from_args(Severity::Trace, &[json!("m"), json!(tags.clone())]).unwrap();
            prop_assert_eq!(call.tags, tags);
        }

        #[test]
        fn prop_bad_counts_rejected(count in 4usize..16) {
            let args = vec![json!("m"); count];
            let err = LogCall::from_args(Severity::Fatal, &args).unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::InvalidArgumentCount);
        }
    }
}
