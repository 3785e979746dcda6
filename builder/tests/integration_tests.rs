use json_schema_builder::s::{
    self, ArrayOptions, Contains, NumericOptions, ObjectOptions, PropertyOptions,
    RequiredPropertyOptions, StringOptions,
};
use json_schema_builder::{
    Annotations, DRAFT_2020_12, OutputFormat, RenderOptions, SchemaBuilder, StringFormat,
};
use serde_json::{Value, json};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn document(builder: &SchemaBuilder) -> Value {
    builder.finalize().to_value()
}

fn email_string() -> SchemaBuilder {
    s::string_with(StringOptions {
        format: Some(StringFormat::Email),
        ..Default::default()
    })
}

// ---------------------------------------------------------------------------
// Objects
// ---------------------------------------------------------------------------

#[test]
fn test_optional_property_has_no_required_list() {
    let schema = s::object_with(ObjectOptions {
        properties: vec![s::property("name", s::string())],
        ..Default::default()
    });

    assert_eq!(
        document(&schema),
        json!({
            "$schema": DRAFT_2020_12,
            "type": "object",
            "properties": {"name": {"type": "string"}}
        })
    );
}

#[test]
fn test_required_property_adds_required_list() {
    let schema = s::object_with(ObjectOptions {
        properties: vec![s::required_property("name", s::string())],
        ..Default::default()
    });

    assert_eq!(
        document(&schema),
        json!({
            "$schema": DRAFT_2020_12,
            "type": "object",
            "properties": {"name": {"type": "string"}},
            "required": ["name"]
        })
    );
}

#[test]
fn test_required_names_follow_property_order() {
    let schema = s::object_with(ObjectOptions {
        properties: vec![
            s::required_property("b", s::string()),
            s::property("c", s::string()),
            s::required_property("a", s::string()),
        ],
        ..Default::default()
    });

    let object = schema.to_schema();
    let object = object.as_object().unwrap();
    assert_eq!(object.required.as_deref(), Some(&["b".to_string(), "a".to_string()][..]));
    let names: Vec<&str> = object.properties.as_ref().unwrap().keys().map(String::as_str).collect();
    assert_eq!(names, vec!["b", "c", "a"]);
}

#[test]
fn test_pattern_properties() {
    let schema = s::object_with(ObjectOptions {
        pattern_properties: vec![s::pattern_property("^[A-Za-z]$", s::string())],
        ..Default::default()
    });

    assert_eq!(
        document(&schema),
        json!({
            "$schema": DRAFT_2020_12,
            "type": "object",
            "patternProperties": {"^[A-Za-z]$": {"type": "string"}}
        })
    );
}

#[test]
fn test_dependent_required() {
    let schema = s::object_with(ObjectOptions {
        properties: vec![
            s::property("name", s::string()),
            s::property_with(
                "email",
                email_string(),
                PropertyOptions {
                    depends_on: Some(vec!["name".into()]),
                    ..Default::default()
                },
            ),
        ],
        ..Default::default()
    });

    assert_eq!(
        document(&schema),
        json!({
            "$schema": DRAFT_2020_12,
            "type": "object",
            "properties": {
                "name": {"type": "string"},
                "email": {"type": "string", "format": "email"}
            },
            "dependentRequired": {"email": ["name"]}
        })
    );
}

#[test]
fn test_dependent_schemas() {
    let billing = || s::properties([s::required_property("billing", s::string())]);
    let expected_dependent = json!({
        "creditCard": {
            "properties": {"billing": {"type": "string"}},
            "required": ["billing"]
        }
    });

    let optional = s::object_with(ObjectOptions {
        properties: vec![
            s::property("name", s::string()),
            s::property_with(
                "creditCard",
                s::string(),
                PropertyOptions {
                    dependent_schema: Some(billing()),
                    ..Default::default()
                },
            ),
        ],
        ..Default::default()
    });
    assert_eq!(
        document(&optional),
        json!({
            "$schema": DRAFT_2020_12,
            "type": "object",
            "properties": {
                "name": {"type": "string"},
                "creditCard": {"type": "string"}
            },
            "dependentSchemas": expected_dependent
        })
    );

    let required = s::object_with(ObjectOptions {
        properties: vec![
            s::property("name", s::string()),
            s::required_property_with(
                "creditCard",
                s::string(),
                RequiredPropertyOptions {
                    dependent_schema: Some(billing()),
                },
            ),
        ],
        ..Default::default()
    });
    assert_eq!(
        document(&required),
        json!({
            "$schema": DRAFT_2020_12,
            "type": "object",
            "properties": {
                "name": {"type": "string"},
                "creditCard": {"type": "string"}
            },
            "required": ["creditCard"],
            "dependentSchemas": expected_dependent
        })
    );
}

// ---------------------------------------------------------------------------
// Arrays
// ---------------------------------------------------------------------------

#[test]
fn test_closed_tuple() {
    let schema = s::array_with(ArrayOptions {
        prefix_items: vec![s::string(), s::integer()],
        items: Some(s::always_invalid().into()),
        ..Default::default()
    });

    assert_eq!(
        document(&schema),
        json!({
            "$schema": DRAFT_2020_12,
            "type": "array",
            "prefixItems": [{"type": "string"}, {"type": "integer"}],
            "items": false
        })
    );
}

#[test]
fn test_array_with_everything() {
    let schema = s::array_with(ArrayOptions {
        annotations: Annotations::default().with_title("Tags"),
        items: Some(s::string().into()),
        unevaluated_items: Some(false.into()),
        min_items: Some(1),
        max_items: Some(10),
        unique_items: Some(true),
        contains: Some(Contains {
            schema: s::constant("primary"),
            min: Some(1),
            max: None,
        }),
        ..Default::default()
    });

    assert_eq!(
        document(&schema),
        json!({
            "$schema": DRAFT_2020_12,
            "title": "Tags",
            "type": "array",
            "items": {"type": "string"},
            "unevaluatedItems": false,
            "minItems": 1,
            "maxItems": 10,
            "uniqueItems": true,
            "contains": {"const": "primary"},
            "minContains": 1
        })
    );
}

// ---------------------------------------------------------------------------
// Structuring
// ---------------------------------------------------------------------------

#[test]
fn test_definitions_are_hoisted_by_object_and_array() {
    let email_def = s::def("email", email_string());
    let expected_defs = json!({"email": {"type": "string", "format": "email"}});

    let object = s::object_with(ObjectOptions {
        properties: vec![
            s::property("email", s::reference("email")),
            s::property("friend", s::reference("email")),
        ],
        defs: vec![email_def.clone()],
        ..Default::default()
    });
    assert_eq!(
        document(&object),
        json!({
            "$schema": DRAFT_2020_12,
            "type": "object",
            "properties": {
                "email": {"$ref": "#/$defs/email"},
                "friend": {"$ref": "#/$defs/email"}
            },
            "$defs": expected_defs
        })
    );

    let array = s::array_with(ArrayOptions {
        items: Some(s::reference("email").into()),
        defs: vec![email_def],
        ..Default::default()
    });
    assert_eq!(
        document(&array),
        json!({
            "$schema": DRAFT_2020_12,
            "type": "array",
            "items": {"$ref": "#/$defs/email"},
            "$defs": expected_defs
        })
    );
}

#[test]
fn test_nested_defs_are_not_hoisted_implicitly() {
    let inner = s::object_with(ObjectOptions {
        defs: vec![s::def("id", s::integer())],
        ..Default::default()
    });
    let outer = s::object_with(ObjectOptions {
        properties: vec![s::property("inner", inner)],
        ..Default::default()
    });

    let document = document(&outer);
    assert!(document.get("$defs").is_none());
    assert_eq!(document["properties"]["inner"]["$defs"], json!({"id": {"type": "integer"}}));
}

#[test]
fn test_nullable_inside_object() {
    let schema = s::object_with(ObjectOptions {
        properties: vec![s::property("middleName", s::nullable(s::string()))],
        ..Default::default()
    });

    assert_eq!(
        document(&schema)["properties"]["middleName"],
        json!({"type": ["string", "null"]})
    );
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

#[test]
fn test_composition_fields() {
    for (builder, field) in [
        (s::all_of([s::string(), s::integer()]), "allOf"),
        (s::any_of([s::string(), s::integer()]), "anyOf"),
        (s::one_of([s::string(), s::integer()]), "oneOf"),
    ] {
        assert_eq!(
            builder.to_schema().to_value(),
            json!({field: [{"type": "string"}, {"type": "integer"}]})
        );
    }
}

#[test]
fn test_merging_restrictions_into_kind() {
    let status = s::string().merged(&s::enumerator(["active", "disabled"]));
    assert_eq!(
        document(&status),
        json!({"$schema": DRAFT_2020_12, "type": "string", "enum": ["active", "disabled"]})
    );

    let widened = status.merged(&s::enumerator(["archived"]));
    assert_eq!(
        widened.to_schema().to_value()["enum"],
        json!(["active", "disabled", "archived"])
    );
}

#[test]
fn test_read_then_finalize() {
    let builder = s::integer_with(NumericOptions::range(0, 10));

    let read = builder.to_schema().to_value();
    assert!(read.get("$schema").is_none());

    let finalized = document(&builder);
    assert_eq!(finalized["$schema"], json!(DRAFT_2020_12));
    assert_eq!(finalized.as_object().unwrap().len(), read.as_object().unwrap().len() + 1);
}

// ---------------------------------------------------------------------------
// Person profile
// ---------------------------------------------------------------------------

fn person_profile() -> SchemaBuilder {
    let phone_number = s::def(
        "phoneNumber",
        s::string_with(StringOptions {
            pattern: Some("^[0-9]{3}-[0-9]{3}-[0-9]{4}$".into()),
            ..Default::default()
        }),
    );
    let us_address = s::def(
        "usAddress",
        s::object_with(ObjectOptions {
            properties: vec![s::required_property("zipCode", s::string())],
            ..Default::default()
        }),
    );
    let uk_address = s::def(
        "ukAddress",
        s::object_with(ObjectOptions {
            properties: vec![s::required_property("postCode", s::string())],
            ..Default::default()
        }),
    );

    s::object_with(ObjectOptions {
        annotations: Annotations {
            id: Some("/schemas/person".into()),
            title: Some("Person Profile".into()),
            description: Some("Attributes of a person object".into()),
            examples: Some(vec![json!({"name": "Eric", "email": "eric@stackhero.dev"})]),
            comment: Some("This is just a preview".into()),
            default: Some(json!({})),
            ..Default::default()
        },
        properties: vec![
            s::required_property("name", s::string()),
            s::property("email", email_string()),
            s::property("phoneNumber", s::reference("phoneNumber")),
            s::property(
                "billingAddress",
                s::one_of([s::reference("ukAddress"), s::reference("usAddress")]),
            ),
            s::pattern_property("^[A-Za-z]$", s::string()),
        ],
        additional_properties: Some(s::array_with(ArrayOptions {
            items: Some(s::number_with(NumericOptions::range(0, 5000)).into()),
            ..Default::default()
        })),
        property_names: Some("^[A-Za-z_][A-Za-z0-9_]*$".into()),
        min_properties: Some(3),
        max_properties: Some(20),
        unevaluated_properties: Some(false),
        defs: vec![phone_number, us_address, uk_address],
        ..Default::default()
    })
}

#[test]
fn test_person_profile_document() {
    assert_eq!(
        document(&person_profile()),
        json!({
            "$schema": DRAFT_2020_12,
            "$id": "/schemas/person",
            "$comment": "This is just a preview",
            "title": "Person Profile",
            "description": "Attributes of a person object",
            "examples": [{"name": "Eric", "email": "eric@stackhero.dev"}],
            "default": {},
            "type": "object",
            "properties": {
                "name": {"type": "string"},
                "email": {"type": "string", "format": "email"},
                "phoneNumber": {"$ref": "#/$defs/phoneNumber"},
                "billingAddress": {
                    "oneOf": [
                        {"$ref": "#/$defs/ukAddress"},
                        {"$ref": "#/$defs/usAddress"}
                    ]
                }
            },
            "required": ["name"],
            "patternProperties": {"^[A-Za-z]$": {"type": "string"}},
            "additionalProperties": {
                "type": "array",
                "items": {"type": "number", "minimum": 0, "maximum": 5000}
            },
            "propertyNames": {"pattern": "^[A-Za-z_][A-Za-z0-9_]*$"},
            "minProperties": 3,
            "maxProperties": 20,
            "unevaluatedProperties": false,
            "$defs": {
                "phoneNumber": {"type": "string", "pattern": "^[0-9]{3}-[0-9]{3}-[0-9]{4}$"},
                "usAddress": {
                    "type": "object",
                    "properties": {"zipCode": {"type": "string"}},
                    "required": ["zipCode"]
                },
                "ukAddress": {
                    "type": "object",
                    "properties": {"postCode": {"type": "string"}},
                    "required": ["postCode"]
                }
            }
        })
    );
}

#[test]
fn test_person_profile_yaml_round_trip() {
    let options = RenderOptions {
        format: OutputFormat::Yaml,
        ..Default::default()
    };
    let text = person_profile().to_document_string(&options).unwrap();

    let parsed: Value = serde_yaml::from_str(&text).unwrap();
    assert_eq!(parsed, document(&person_profile()));

    let reread = SchemaBuilder::from_value(parsed).unwrap();
    assert_eq!(reread.to_schema(), person_profile().finalize());
}
