//! Unit tests for the type model.
//!
//! - Union construction
//! - The assignability relation, kind by kind
//! - Canonical rendering
//! - `TypeRef` conversion

use std::rc::Rc;

use pretty_assertions::assert_eq;

use crate::{
    ast::{
        statements::MemberModifiers,
        types::{IndexSignatureRef, PropertyRef, TypeRef},
    },
    Position, Span,
};

use super::{
    conversion::{convert_type_ref, TypeTracker},
    ClassType, IndexKey, InterfaceType, LiteralValue, Member, Property, Type,
};

fn span() -> Span {
    let position = Position(3, Rc::new(String::from("test.lang")));
    Span {
        start: position.clone(),
        end: position,
    }
}

fn interface(name: Option<&str>, properties: Vec<(&str, Type, bool)>) -> Type {
    Type::Interface(InterfaceType {
        name: name.map(String::from),
        properties: properties
            .into_iter()
            .map(|(name, value_type, mutable)| {
                (
                    name.to_string(),
                    Property {
                        value_type,
                        mutable,
                    },
                )
            })
            .collect(),
        index_signatures: vec![],
    })
}

fn class(name: &str, members: Vec<(&str, Type)>, superclass: Option<Type>) -> Type {
    Type::Class(ClassType {
        name: name.to_string(),
        members: members
            .into_iter()
            .map(|(name, value_type)| {
                (
                    name.to_string(),
                    Member {
                        value_type,
                        modifiers: MemberModifiers::PUBLIC,
                        mutable: true,
                    },
                )
            })
            .collect(),
        mixins: vec![],
        superclass: superclass.map(Box::new),
    })
}

#[test]
fn test_union_flattens_and_deduplicates() {
    let union = Type::union(vec![
        Type::int(),
        Type::union(vec![Type::string(), Type::int()]),
        Type::bool(),
    ]);

    assert_eq!(union, Type::Union(vec![Type::int(), Type::string(), Type::bool()]));
}

#[test]
fn test_union_of_one_member_collapses() {
    assert_eq!(Type::union(vec![Type::int(), Type::int()]), Type::int());
}

#[test]
fn test_array_generic_is_array() {
    assert_eq!(Type::generic("Array", vec![Type::int()]), Type::array(Type::int()));
}

#[test]
fn test_assignability_is_reflexive() {
    let types = vec![
        Type::int(),
        Type::union(vec![Type::int(), Type::string()]),
        Type::array(Type::string()),
        interface(None, vec![("name", Type::string(), true)]),
        Type::function(vec![(String::from("x"), Type::int())], Type::void()),
        class("Point", vec![("x", Type::int())], None),
        Type::Literal(LiteralValue::Int(5)),
        Type::intersection(vec![
            interface(None, vec![("a", Type::int(), true)]),
            interface(None, vec![("b", Type::int(), true)]),
        ]),
    ];

    for ty in types {
        assert!(ty.is_assignable_to(&ty), "{} should be assignable to itself", ty);
    }
}

#[test]
fn test_any_absorbs_both_ways() {
    let point = class("Point", vec![], None);

    assert!(Type::any().is_assignable_to(&Type::int()));
    assert!(Type::int().is_assignable_to(&Type::any()));
    assert!(Type::any().is_assignable_to(&point));
    assert!(point.is_assignable_to(&Type::any()));
}

#[test]
fn test_union_distribution() {
    let int_or_string = Type::union(vec![Type::int(), Type::string()]);

    assert!(Type::int().is_assignable_to(&int_or_string));
    assert!(int_or_string.is_assignable_to(&Type::union(vec![
        Type::int(),
        Type::string(),
        Type::bool()
    ])));
    assert!(!int_or_string.is_assignable_to(&Type::int()));
}

#[test]
fn test_literal_narrowing() {
    let five = Type::Literal(LiteralValue::Int(5));

    assert!(five.is_assignable_to(&Type::int()));
    assert!(!Type::int().is_assignable_to(&five));
    assert!(!five.is_assignable_to(&Type::string()));
    assert!(!five.is_assignable_to(&Type::Literal(LiteralValue::Int(6))));
    assert!(Type::Literal(LiteralValue::Str(String::from("on"))).is_assignable_to(
        &Type::union(vec![
            Type::Literal(LiteralValue::Str(String::from("on"))),
            Type::Literal(LiteralValue::Str(String::from("off"))),
        ])
    ));
}

#[test]
fn test_array_covariance() {
    let ints = Type::array(Type::int());
    let numbers = Type::array(Type::union(vec![Type::int(), Type::float()]));

    assert!(ints.is_assignable_to(&numbers));
    assert!(!numbers.is_assignable_to(&ints));
    assert!(Type::empty_array().is_assignable_to(&ints));
    assert!(ints.is_assignable_to(&Type::empty_array()));
    assert!(!ints.is_assignable_to(&Type::int()));
}

#[test]
fn test_singular_type_arguments() {
    let boxed_int = Type::generic("Box", vec![Type::int()]);
    let boxed_string = Type::generic("Box", vec![Type::string()]);

    assert!(!boxed_int.is_assignable_to(&boxed_string));
    assert!(boxed_int.is_assignable_to(&Type::singular("Box")));
}

#[test]
fn test_interface_width_subtyping() {
    let named = interface(None, vec![("name", Type::string(), true)]);
    let user = interface(
        None,
        vec![("name", Type::string(), true), ("id", Type::int(), true)],
    );

    assert!(user.is_assignable_to(&named));
    assert!(!named.is_assignable_to(&user));
}

#[test]
fn test_interface_index_signature() {
    let dictionary = Type::Interface(InterfaceType {
        name: None,
        properties: vec![],
        index_signatures: vec![(IndexKey::String, Type::int())],
    });
    let numbers = interface(
        None,
        vec![("a", Type::int(), true), ("b", Type::int(), true)],
    );
    let mixed = interface(
        None,
        vec![("a", Type::int(), true), ("b", Type::string(), true)],
    );

    assert!(numbers.is_assignable_to(&dictionary));
    assert!(!mixed.is_assignable_to(&dictionary));
}

#[test]
fn test_class_to_interface_is_structural() {
    let point = class("Point", vec![("x", Type::int()), ("y", Type::int())], None);
    let has_x = interface(Some("HasX"), vec![("x", Type::int(), true)]);

    assert!(point.is_assignable_to(&has_x));
}

#[test]
fn test_class_to_class_follows_superclass() {
    let animal = class("Animal", vec![], None);
    let dog = class("Dog", vec![], Some(animal.clone()));
    let cat = class("Cat", vec![], None);

    assert!(dog.is_assignable_to(&animal));
    assert!(!animal.is_assignable_to(&dog));
    assert!(!cat.is_assignable_to(&animal));
}

#[test]
fn test_named_types_match_their_placeholder() {
    let node = interface(Some("Node"), vec![("next", Type::singular("Node"), true)]);

    assert!(node.is_assignable_to(&Type::singular("Node")));
    assert!(Type::singular("Node").is_assignable_to(&node));
}

#[test]
fn test_function_assignability() {
    let takes_number = Type::function(
        vec![(
            String::from("x"),
            Type::union(vec![Type::int(), Type::float()]),
        )],
        Type::int(),
    );
    let takes_int = Type::function(vec![(String::from("x"), Type::int())], Type::int());
    let takes_two = Type::function(
        vec![
            (String::from("x"), Type::int()),
            (String::from("y"), Type::int()),
        ],
        Type::int(),
    );
    let returns_number = Type::function(
        vec![(String::from("x"), Type::int())],
        Type::union(vec![Type::int(), Type::float()]),
    );

    assert!(takes_number.is_assignable_to(&takes_int));
    assert!(!takes_int.is_assignable_to(&takes_number));
    assert!(takes_int.is_assignable_to(&takes_two));
    assert!(!takes_two.is_assignable_to(&takes_int));
    assert!(takes_int.is_assignable_to(&returns_number));
    assert!(!returns_number.is_assignable_to(&takes_int));
}

#[test]
fn test_intersection_assignability() {
    let a = interface(None, vec![("a", Type::int(), true)]);
    let b = interface(None, vec![("b", Type::int(), true)]);
    let both = interface(
        None,
        vec![("a", Type::int(), true), ("b", Type::int(), true)],
    );
    let a_and_b = Type::intersection(vec![a.clone(), b.clone()]);

    assert!(both.is_assignable_to(&a_and_b));
    assert!(!a.is_assignable_to(&a_and_b));
    assert!(a_and_b.is_assignable_to(&a));
    assert!(a_and_b.is_assignable_to(&both));
}

#[test]
fn test_widened() {
    let literals = Type::union(vec![
        Type::Literal(LiteralValue::Int(1)),
        Type::Literal(LiteralValue::Int(2)),
        Type::Literal(LiteralValue::Str(String::from("a"))),
    ]);

    assert_eq!(literals.widened(), Type::union(vec![Type::int(), Type::string()]));
}

#[test]
fn test_contains_any_and_undefined() {
    let maybe = Type::union(vec![Type::int(), Type::undefined()]);

    assert!(maybe.contains_undefined());
    assert!(!maybe.contains_any());
    assert!(Type::union(vec![Type::any(), Type::int()]).contains_any());
}

#[test]
fn test_comparability() {
    assert!(Type::Literal(LiteralValue::Int(1)).is_comparable_with(&Type::int()));
    assert!(Type::int().is_comparable_with(&Type::union(vec![Type::int(), Type::string()])));
    assert!(!Type::int().is_comparable_with(&Type::string()));
    assert!(Type::float().is_comparable_with(&Type::Literal(LiteralValue::Int(10))));
    assert!(class("Point", vec![], None).is_comparable_with(&Type::null()));
}

#[test]
fn test_display() {
    assert_eq!(Type::union(vec![Type::int(), Type::string()]).to_string(), "int | string");
    assert_eq!(Type::array(Type::int()).to_string(), "Array<int>");
    assert_eq!(Type::empty_array().to_string(), "Array<never>");
    assert_eq!(
        Type::function(vec![(String::from("x"), Type::int())], Type::string()).to_string(),
        "(int x) :: string"
    );
    assert_eq!(
        Type::Interface(InterfaceType {
            name: None,
            properties: vec![
                (
                    String::from("name"),
                    Property {
                        value_type: Type::string(),
                        mutable: true
                    }
                ),
                (
                    String::from("id"),
                    Property {
                        value_type: Type::int(),
                        mutable: false
                    }
                ),
            ],
            index_signatures: vec![(IndexKey::String, Type::any())],
        })
        .to_string(),
        "{ name: string, const id: int, [string]: any }"
    );
    assert_eq!(interface(Some("User"), vec![]).to_string(), "User");
    assert_eq!(class("Point", vec![], None).to_string(), "Point");
    assert_eq!(Type::Literal(LiteralValue::Int(5)).to_string(), "5");
    assert_eq!(Type::Literal(LiteralValue::Float(1.5)).to_string(), "1.5");
    assert_eq!(
        Type::Literal(LiteralValue::Str(String::from("abc"))).to_string(),
        "\"abc\""
    );
    assert_eq!(Type::Literal(LiteralValue::Bool(true)).to_string(), "true");
    assert_eq!(Type::generic("Map", vec![Type::string()]).to_string(), "Map<string>");
}

#[test]
fn test_convert_named_and_array() {
    let tracker = TypeTracker::new();

    let ints = TypeRef::Array {
        element: Box::new(TypeRef::named("int", span())),
        span: span(),
    };
    assert_eq!(convert_type_ref(&ints, &tracker).unwrap(), Type::array(Type::int()));

    let generic = TypeRef::Named {
        name: String::from("Array"),
        type_arguments: vec![TypeRef::named("string", span())],
        span: span(),
    };
    assert_eq!(
        convert_type_ref(&generic, &tracker).unwrap(),
        Type::array(Type::string())
    );
}

#[test]
fn test_convert_unknown_type() {
    let tracker = TypeTracker::new();
    let error = convert_type_ref(&TypeRef::named("Missing", span()), &tracker).unwrap_err();

    assert_eq!(error.get_error_name(), "UnknownType");
    assert_eq!(error.get_position().0, 3);
    assert_eq!(error.to_string(), "BindingError: unknown type `Missing` found");
}

#[test]
fn test_convert_declared_type() {
    let mut tracker = TypeTracker::new();
    let user = interface(Some("User"), vec![("name", Type::string(), true)]);
    tracker.declare("User", user.clone());

    assert_eq!(
        convert_type_ref(&TypeRef::named("User", span()), &tracker).unwrap(),
        user
    );
}

#[test]
fn test_tracker_scopes() {
    let mut tracker = TypeTracker::new();
    tracker.declare("Id", Type::int());
    tracker.begin_scope();
    tracker.declare("Id", Type::string());
    tracker.declare("Local", Type::bool());

    assert_eq!(tracker.get("Id"), Some(&Type::string()));
    assert!(tracker.contains("Local"));

    tracker.end_scope();
    assert_eq!(tracker.get("Id"), Some(&Type::int()));
    assert!(!tracker.contains("Local"));
    let error = convert_type_ref(&TypeRef::named("Local", span()), &tracker).unwrap_err();
    assert_eq!(error.get_error_name(), "UnknownType");
}

#[test]
fn test_convert_interface() {
    let tracker = TypeTracker::new();
    let type_ref = TypeRef::Interface {
        properties: vec![PropertyRef {
            name: String::from("id"),
            type_ref: TypeRef::named("int", span()),
            mutable: false,
        }],
        index_signatures: vec![IndexSignatureRef {
            key: String::from("int"),
            key_span: span(),
            value: TypeRef::named("string", span()),
        }],
        span: span(),
    };

    assert_eq!(
        convert_type_ref(&type_ref, &tracker).unwrap().to_string(),
        "{ const id: int, [int]: string }"
    );
}

#[test]
fn test_convert_invalid_index_signature() {
    let tracker = TypeTracker::new();
    let type_ref = TypeRef::Interface {
        properties: vec![],
        index_signatures: vec![IndexSignatureRef {
            key: String::from("bool"),
            key_span: span(),
            value: TypeRef::named("string", span()),
        }],
        span: span(),
    };

    let error = convert_type_ref(&type_ref, &tracker).unwrap_err();
    assert_eq!(error.get_error_name(), "InvalidIndexSignature");
}
