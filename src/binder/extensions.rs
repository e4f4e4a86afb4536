//! Built-in members of the primitive, `Range` and array pseudo-types.
//!
//! These take priority over every other kind of member lookup, so `s.length`
//! on a string is always `int` whatever the object is declared as.

use crate::types::Type;

fn method(parameters: &[(&str, Type)], return_type: Type) -> Type {
    Type::function(
        parameters
            .iter()
            .map(|(name, ty)| (name.to_string(), ty.clone()))
            .collect(),
        return_type,
    )
}

/// The type of extension member `name` on `object`, if it has one.
pub fn extension_member(object: &Type, name: &str) -> Option<Type> {
    let object = object.widened();

    if let Some(element) = object.element_type() {
        return array_member(element, name);
    }

    match object.nominal_name()? {
        "string" => string_member(name),
        "int" | "float" => match name {
            "toString" => Some(method(&[], Type::string())),
            _ => None,
        },
        "Range" => range_member(name),
        _ => None,
    }
}

fn string_member(name: &str) -> Option<Type> {
    match name {
        "length" => Some(Type::int()),
        "upper" | "lower" => Some(method(&[], Type::string())),
        "split" => Some(method(
            &[("separator", Type::string())],
            Type::array(Type::string()),
        )),
        "contains" => Some(method(&[("value", Type::string())], Type::bool())),
        _ => None,
    }
}

fn array_member(element: Type, name: &str) -> Option<Type> {
    match name {
        "length" => Some(Type::int()),
        "push" => Some(method(&[("value", element)], Type::void())),
        "pop" => Some(method(&[], element)),
        "join" => Some(method(&[("separator", Type::string())], Type::string())),
        _ => None,
    }
}

fn range_member(name: &str) -> Option<Type> {
    match name {
        "start" | "end" => Some(Type::int()),
        "contains" => Some(method(&[("value", Type::int())], Type::bool())),
        "toArray" => Some(method(&[], Type::array(Type::int()))),
        _ => None,
    }
}
