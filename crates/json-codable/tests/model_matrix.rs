//! End-to-end decode/encode of nested model types through the four bindings
//! per direction.

use json_codable::encode::bindings as enc;
use json_codable::{
    ArrayPolicy, Decimal, Decodable, DecodeError, DecodeOptions, Encodable, EncodeError,
    EncodeOptions, FieldReader, JsonValue, Validation,
};
use serde_json::json;

#[derive(Debug, Clone, PartialEq)]
struct SubModel {
    a_sub_string: String,
}

impl Decodable for SubModel {
    fn decode(json: Option<&JsonValue>) -> Result<Self, DecodeError> {
        let r = FieldReader::new(json);
        SubModel {
            a_sub_string: r.required("aSubString")?,
        }
        .validated()
    }
}

impl Encodable for SubModel {
    fn encode(&self) -> Result<JsonValue, EncodeError> {
        self.encode_to_json([enc::required("aSubString", &self.a_sub_string)])
    }
}

#[derive(Debug, Clone, PartialEq)]
struct TestModel {
    a_string: String,
    a_float: f32,
    an_int: isize,
    a_number: Decimal,
    an_array: Vec<String>,
    a_model: SubModel,
    a_model_array: Vec<SubModel>,

    opt_string: Option<String>,
    opt_string_nil: Option<i64>,
    opt_model: Option<SubModel>,
    opt_model_nil: Option<SubModel>,
    opt_model_array: Option<Vec<SubModel>>,
    opt_model_array_nil: Option<Vec<SubModel>>,
}

impl TestModel {
    fn decode_with(json: Option<&JsonValue>, options: DecodeOptions) -> Result<Self, DecodeError> {
        let r = FieldReader::with_options(json, options);
        TestModel {
            a_string: r.required("aString")?,
            a_float: r.required("aFloat")?,
            an_int: r.required("anInt")?,
            a_number: r.required("aNumber")?,
            an_array: r.required_array("anArray")?,
            a_model: r.required("aModel")?,
            a_model_array: r.required_array("aModelArray")?,
            opt_string: r.optional("optString")?,
            opt_string_nil: r.optional("optStringNil")?,
            opt_model: r.optional("optModel")?,
            opt_model_nil: r.optional("optModelNil")?,
            opt_model_array: r.optional_array("optModelArray")?,
            opt_model_array_nil: r.optional_array("optModelArrayNil")?,
        }
        .validated()
    }
}

impl Decodable for TestModel {
    fn decode(json: Option<&JsonValue>) -> Result<Self, DecodeError> {
        Self::decode_with(json, DecodeOptions::default())
    }

    fn validate_decode(&self) -> Validation {
        Validation::check(self.a_float == 1.234)
    }
}

impl TestModel {
    fn fields(&self) -> Vec<json_codable::EncodeField> {
        vec![
            enc::required("aString", &self.a_string),
            enc::required("aFloat", &self.a_float),
            enc::required("anInt", &self.an_int),
            enc::required("aNumber", &self.a_number),
            enc::required_array("anArray", &self.an_array),
            enc::required("aModel", &self.a_model),
            enc::required_array("aModelArray", &self.a_model_array),
            enc::optional("optString", self.opt_string.as_ref()),
            enc::optional("optStringNil", self.opt_string_nil.as_ref()),
            enc::optional("optModel", self.opt_model.as_ref()),
            enc::optional("optModelNil", self.opt_model_nil.as_ref()),
            enc::optional_array("optModelArray", self.opt_model_array.as_deref()),
            enc::optional_array("optModelArrayNil", self.opt_model_array_nil.as_deref()),
        ]
    }
}

impl Encodable for TestModel {
    fn encode(&self) -> Result<JsonValue, EncodeError> {
        self.encode_to_json(self.fields())
    }

    fn validate_encode(&self) -> Validation {
        Validation::Passed
    }
}

fn document() -> serde_json::Value {
    json!({
        "aString": "hello",
        "aFloat": 1.234,
        "anInt": 1234,
        "aNumber": 1234,
        "anArray": ["1", "2", "3", "4"],
        "aModel": {"aSubString": "value"},
        "aModelArray": [
            {"aSubString": "value1"},
            {"aSubString": "value2"},
            {"aSubString": "value3"}
        ],
        "optString": "helloAgain",
        "optStringNil": null,
        "optModel": {"aSubString": "value"},
        "optModelArray": [
            {"aSubString": "value1"},
            {"aSubString": "value2"},
            {"aSubString": "value3"}
        ]
    })
}

fn decode(doc: serde_json::Value) -> Result<TestModel, DecodeError> {
    TestModel::decode(Some(&JsonValue::from(doc)))
}

fn sub(text: &str) -> SubModel {
    SubModel {
        a_sub_string: text.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Decode
// ---------------------------------------------------------------------------

#[test]
fn full_document_decodes() {
    let model = decode(document()).unwrap();
    assert_eq!(model.a_string, "hello");
    assert_eq!(model.a_float, 1.234);
    assert_eq!(model.an_int, 1234);
    assert_eq!(model.a_number, Decimal::from(1234));
    assert_eq!(model.an_array, ["1", "2", "3", "4"]);
    assert_eq!(model.a_model, sub("value"));
    assert_eq!(model.a_model_array, [sub("value1"), sub("value2"), sub("value3")]);
    assert_eq!(model.opt_string.as_deref(), Some("helloAgain"));
    assert_eq!(model.opt_string_nil, None);
    assert_eq!(model.opt_model, Some(sub("value")));
    assert_eq!(model.opt_model_nil, None);
    assert_eq!(model.opt_model_array.map(|v| v.len()), Some(3));
    assert_eq!(model.opt_model_array_nil, None);
}

#[test]
fn validator_rejects_other_float() {
    let mut doc = document();
    doc["aFloat"] = json!(9.99);
    assert_eq!(decode(doc), Err(DecodeError::ValidationFailed));
}

#[test]
fn missing_required_field_names_it() {
    let mut doc = document();
    doc.as_object_mut().unwrap().remove("aString");
    assert_eq!(
        decode(doc),
        Err(DecodeError::NotFound {
            field: "aString".to_string()
        })
    );
}

#[test]
fn nested_required_failure_names_outer_field() {
    let mut doc = document();
    doc["aModel"] = json!({"wrong": "value"});
    assert_eq!(
        decode(doc),
        Err(DecodeError::NotFound {
            field: "aModel".to_string()
        })
    );
}

#[test]
fn absent_tree_is_empty_json() {
    assert_eq!(TestModel::decode(None), Err(DecodeError::EmptyJson));
}

#[test]
fn absent_optional_fields_are_none() {
    let mut doc = document();
    let obj = doc.as_object_mut().unwrap();
    obj.remove("optString");
    obj.remove("optModel");
    obj.remove("optModelArray");
    let model = decode(doc).unwrap();
    assert_eq!(model.opt_string, None);
    assert_eq!(model.opt_model, None);
    assert_eq!(model.opt_model_array, None);
}

#[test]
fn malformed_optional_scalar_is_none() {
    let mut doc = document();
    doc["optModel"] = json!("not a model");
    assert_eq!(decode(doc).unwrap().opt_model, None);
}

#[test]
fn required_array_with_bad_element_fails() {
    let mut doc = document();
    doc["aModelArray"] = json!([{"aSubString": "a"}, {"nope": 1}, {"aSubString": "c"}]);
    assert_eq!(
        decode(doc),
        Err(DecodeError::NotFound {
            field: "aSubString".to_string()
        })
    );
}

#[test]
fn optional_array_drops_bad_element() {
    let mut doc = document();
    doc["optModelArray"] = json!([{"aSubString": "a"}, {"nope": 1}, {"aSubString": "c"}]);
    let model = decode(doc).unwrap();
    assert_eq!(model.opt_model_array, Some(vec![sub("a"), sub("c")]));
}

#[test]
fn strict_policy_rejects_bad_optional_element() {
    let mut doc = document();
    doc["optModelArray"] = json!([{"aSubString": "a"}, {"nope": 1}]);
    let json = JsonValue::from(doc);
    let strict = DecodeOptions {
        optional_array: ArrayPolicy::Strict,
    };
    assert_eq!(
        TestModel::decode_with(Some(&json), strict),
        Err(DecodeError::Invalid {
            field: "optModelArray".to_string()
        })
    );
}

#[test]
fn type_without_validator_is_not_aborted() {
    let json = JsonValue::from(json!({"aSubString": "x"}));
    assert_eq!(SubModel::decode(Some(&json)), Ok(sub("x")));
    assert_eq!(sub("x").validate_decode(), Validation::Unimplemented);
}

// ---------------------------------------------------------------------------
// Encode
// ---------------------------------------------------------------------------

#[test]
fn encode_then_decode_is_identity() {
    let model = decode(document()).unwrap();
    let json = model.encode().unwrap();
    assert_eq!(TestModel::decode(Some(&json)), Ok(model));
}

#[test]
fn encoded_document_shape() {
    let model = decode(document()).unwrap();
    let json = model.encode().unwrap();
    let mut expected = document();
    expected["optModelNil"] = json!(null);
    expected["optModelArrayNil"] = json!(null);
    assert_eq!(json, JsonValue::from(expected));
}

#[test]
fn omit_nulls_drops_absent_optionals() {
    let model = decode(document()).unwrap();
    let json = model
        .encode_to_json_with(EncodeOptions { omit_nulls: true }, model.fields())
        .unwrap();
    for key in ["optStringNil", "optModelNil", "optModelArrayNil"] {
        assert!(json.get(key).is_none(), "{key} should be omitted");
    }
    assert_eq!(json.get("optString"), Some(&JsonValue::from("helloAgain")));
}

#[test]
fn unencodable_required_field_aborts() {
    let mut model = decode(document()).unwrap();
    model.a_float = f32::NAN;
    assert_eq!(model.encode(), Err(EncodeError::Unencodable));
}

#[test]
fn sub_model_encodes_compactly() {
    assert_eq!(sub("v").encode().unwrap().to_string(), r#"{"aSubString":"v"}"#);
}
