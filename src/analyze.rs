//! JSON structure analysis.
//!
//! Recursively walks one JSON document and produces a tree of class
//! descriptors ([`ClassInfo`]) that the code emitter renders. Object keys
//! become snake_case fields; nested objects and object-typed list elements
//! become nested classes with synthesized PascalCase names.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::inference::python_type;
use crate::naming::{camel_to_snake, snake_to_pascal};

/// One inferred class. Field order is first-seen document order.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassInfo {
    pub name: String,
    pub fields: IndexMap<String, FieldInfo>,
}

/// One member of a [`ClassInfo`].
///
/// `info` is present iff the field owns a nested class: either the field is
/// itself an object (`is_custom_class`) or a list of objects
/// (`is_list && list_element_is_custom`). `is_custom_class` and `is_list`
/// are mutually exclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldInfo {
    pub ty: String,
    pub info: Option<Box<ClassInfo>>,
    pub is_custom_class: bool,
    pub is_list: bool,
    pub list_element_type: Option<String>,
    pub list_element_is_custom: bool,
}

impl FieldInfo {
    fn scalar(ty: String) -> Self {
        FieldInfo {
            ty,
            info: None,
            is_custom_class: false,
            is_list: false,
            list_element_type: None,
            list_element_is_custom: false,
        }
    }
}

/// Analyze a JSON document into a class tree rooted at `class_name`.
///
/// Non-object roots are wrapped in a synthetic single-field class so the
/// emitter only ever deals in classes: a root list of objects becomes an
/// `items` field, anything else a `value` field.
pub fn analyze_structure(value: &Value, class_name: &str) -> ClassInfo {
    let mut taken = BTreeSet::new();
    taken.insert(class_name.to_string());
    analyze_value(value, class_name, &mut taken)
}

fn analyze_value(value: &Value, class_name: &str, taken: &mut BTreeSet<String>) -> ClassInfo {
    match value {
        Value::Object(map) => analyze_object(map, class_name, taken),
        Value::Array(items) if items.first().is_some_and(Value::is_object) => {
            let element_name = claim_name(&snake_to_pascal("item"), taken);
            let element = analyze_value(&items[0], &element_name, taken);
            let mut fields = IndexMap::new();
            fields.insert(
                "items".to_string(),
                FieldInfo {
                    ty: format!("List[{element_name}]"),
                    info: Some(Box::new(element)),
                    is_custom_class: false,
                    is_list: true,
                    list_element_type: Some(element_name),
                    list_element_is_custom: true,
                },
            );
            ClassInfo { name: class_name.to_string(), fields }
        }
        _ => {
            // Bare scalar or scalar list at the root.
            let mut fields = IndexMap::new();
            fields.insert("value".to_string(), FieldInfo::scalar(python_type(value)));
            ClassInfo { name: class_name.to_string(), fields }
        }
    }
}

fn analyze_object(
    map: &Map<String, Value>,
    class_name: &str,
    taken: &mut BTreeSet<String>,
) -> ClassInfo {
    let mut fields = IndexMap::new();

    for (key, value) in map {
        let field_name = camel_to_snake(key);
        let pascal_key = snake_to_pascal(&field_name);

        let field = match value {
            Value::Object(_) => {
                let nested_name = claim_name(&format!("{class_name}{pascal_key}"), taken);
                let nested = analyze_value(value, &nested_name, taken);
                FieldInfo {
                    ty: nested_name,
                    info: Some(Box::new(nested)),
                    is_custom_class: true,
                    is_list: false,
                    list_element_type: None,
                    list_element_is_custom: false,
                }
            }
            Value::Array(items) => match items.first() {
                Some(first @ Value::Object(_)) => {
                    let element_name = claim_name(&format!("{pascal_key}Item"), taken);
                    let element = analyze_value(first, &element_name, taken);
                    FieldInfo {
                        ty: format!("List[{element_name}]"),
                        info: Some(Box::new(element)),
                        is_custom_class: false,
                        is_list: true,
                        list_element_type: Some(element_name),
                        list_element_is_custom: true,
                    }
                }
                first => {
                    let element_type = first
                        .map(python_type)
                        .unwrap_or_else(|| "Any".to_string());
                    FieldInfo {
                        ty: format!("List[{element_type}]"),
                        info: None,
                        is_custom_class: false,
                        is_list: true,
                        list_element_type: Some(element_type),
                        list_element_is_custom: false,
                    }
                }
            },
            _ => FieldInfo::scalar(python_type(value)),
        };

        fields.insert(field_name, field);
    }

    ClassInfo { name: class_name.to_string(), fields }
}

/// Reserve a synthesized class name. When an earlier field already produced
/// the same name for a differently-rooted nested object, append the first
/// free numeric suffix instead of silently colliding.
fn claim_name(candidate: &str, taken: &mut BTreeSet<String>) -> String {
    if taken.insert(candidate.to_string()) {
        return candidate.to_string();
    }
    let mut n = 2u32;
    loop {
        let name = format!("{candidate}{n}");
        if taken.insert(name.clone()) {
            return name;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn simple_object_fields() {
        let data = json!({
            "name": "Test",
            "age": 30,
            "is_active": true
        });
        let result = analyze_structure(&data, "TestClass");

        assert_eq!(result.name, "TestClass");
        assert_eq!(result.fields.len(), 3);
        assert_eq!(result.fields["name"].ty, "str");
        assert_eq!(result.fields["age"].ty, "int");
        assert_eq!(result.fields["is_active"].ty, "bool");
        assert!(result.fields.values().all(|f| f.info.is_none()));
    }

    #[test]
    fn field_order_is_document_order() {
        let data = json!({"zulu": 1, "alpha": 2, "mike": 3});
        let result = analyze_structure(&data, "Ordered");
        let names: Vec<&str> = result.fields.keys().map(String::as_str).collect();
        assert_eq!(names, ["zulu", "alpha", "mike"]);
    }

    #[test]
    fn nested_objects_get_concatenated_names() {
        let data = json!({
            "user": {
                "name": "John",
                "address": {
                    "street": "Main St",
                    "zipcode": "12345"
                }
            }
        });
        let result = analyze_structure(&data, "Root");

        let user = &result.fields["user"];
        assert!(user.is_custom_class);
        assert!(!user.is_list);
        assert_eq!(user.ty, "RootUser");

        let user_class = user.info.as_deref().unwrap();
        assert_eq!(user_class.name, "RootUser");

        let address = &user_class.fields["address"];
        assert!(address.is_custom_class);
        assert_eq!(address.ty, "RootUserAddress");
    }

    #[test]
    fn one_nested_descriptor_per_object_field() {
        let data = json!({
            "a": {"x": 1},
            "b": {"y": 2},
            "c": 3
        });
        let result = analyze_structure(&data, "Root");
        let nested = result.fields.values().filter(|f| f.info.is_some()).count();
        assert_eq!(nested, 2);
        assert_eq!(result.fields["a"].ty, "RootA");
        assert_eq!(result.fields["b"].ty, "RootB");
    }

    #[test]
    fn scalar_lists() {
        let data = json!({"items": [1, 2, 3, 4]});
        let result = analyze_structure(&data, "ListTest");

        let items = &result.fields["items"];
        assert!(items.is_list);
        assert!(!items.is_custom_class);
        assert!(!items.list_element_is_custom);
        assert_eq!(items.ty, "List[int]");
        assert_eq!(items.list_element_type.as_deref(), Some("int"));
        assert!(items.info.is_none());
    }

    #[test]
    fn empty_list_elements_are_any() {
        let data = json!({"tags": []});
        let result = analyze_structure(&data, "Root");
        let tags = &result.fields["tags"];
        assert_eq!(tags.ty, "List[Any]");
        assert_eq!(tags.list_element_type.as_deref(), Some("Any"));
        assert!(!tags.list_element_is_custom);
    }

    #[test]
    fn lists_of_objects_get_item_classes() {
        let data = json!({
            "users": [
                {"name": "John", "age": 30},
                {"name": "Jane", "age": 25}
            ]
        });
        let result = analyze_structure(&data, "UserList");

        let users = &result.fields["users"];
        assert!(users.is_list);
        assert!(users.list_element_is_custom);
        assert_eq!(users.ty, "List[UsersItem]");
        assert_eq!(users.list_element_type.as_deref(), Some("UsersItem"));

        let element = users.info.as_deref().unwrap();
        assert_eq!(element.name, "UsersItem");
        assert_eq!(element.fields["name"].ty, "str");
        assert_eq!(element.fields["age"].ty, "int");
    }

    #[test]
    fn camel_case_keys_become_snake_fields() {
        let data = json!({"userName": "x", "innerValue": {"someKey": 1}});
        let result = analyze_structure(&data, "Root");
        assert_eq!(result.fields["user_name"].ty, "str");
        let inner = &result.fields["inner_value"];
        assert_eq!(inner.ty, "RootInnerValue");
        assert_eq!(inner.info.as_deref().unwrap().fields["some_key"].ty, "int");
    }

    #[test]
    fn root_list_of_objects_is_wrapped() {
        let data = json!([
            {"name": "Item 1"},
            {"name": "Item 2"}
        ]);
        let result = analyze_structure(&data, "RootList");

        assert_eq!(result.name, "RootList");
        let items = &result.fields["items"];
        assert!(items.is_list);
        assert!(items.list_element_is_custom);
        assert_eq!(items.ty, "List[Item]");
        assert_eq!(items.list_element_type.as_deref(), Some("Item"));
        assert_eq!(items.info.as_deref().unwrap().name, "Item");
    }

    #[test]
    fn root_scalar_is_wrapped() {
        let result = analyze_structure(&json!(42), "Root");
        assert_eq!(result.fields["value"].ty, "int");
        assert!(!result.fields["value"].is_list);
    }

    #[test]
    fn root_scalar_list_is_wrapped_as_plain_value() {
        let result = analyze_structure(&json!(["a", "b"]), "Root");
        let value = &result.fields["value"];
        assert_eq!(value.ty, "List[str]");
        assert!(!value.is_list);
        assert!(value.info.is_none());
    }

    #[test]
    fn colliding_synthesized_names_get_suffixes() {
        // "a" → RootA → RootAB (via nested "b"); sibling "a_b" also wants
        // RootAB and must be disambiguated.
        let data = json!({
            "a": {"b": {"x": 1}},
            "a_b": {"y": 2}
        });
        let result = analyze_structure(&data, "Root");

        let inner = result.fields["a"].info.as_deref().unwrap();
        assert_eq!(inner.fields["b"].ty, "RootAB");
        assert_eq!(result.fields["a_b"].ty, "RootAB2");
        assert_eq!(result.fields["a_b"].info.as_deref().unwrap().name, "RootAB2");
    }
}
