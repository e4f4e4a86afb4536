//! Type signatures of the intrinsic functions and the `Math` namespace.
//!
//! Only the signatures live here; the host registers them in the global scope
//! of the resolver and the binder before any user code is checked.

use crate::{
    binder::Binder,
    resolver::Resolver,
    types::{InterfaceType, Property, Type},
};

fn signature(parameters: &[(&str, Type)], return_type: Type) -> Type {
    Type::function(
        parameters
            .iter()
            .map(|(name, ty)| (name.to_string(), ty.clone()))
            .collect(),
        return_type,
    )
}

fn math() -> Type {
    let number = Type::union(vec![Type::int(), Type::float()]);
    let unary = signature(&[("value", number.clone())], Type::float());
    let binary = signature(&[("a", number.clone()), ("b", number)], Type::float());

    let properties = [
        ("PI", Type::float()),
        ("E", Type::float()),
        ("floor", signature(&[("value", Type::float())], Type::int())),
        ("ceil", signature(&[("value", Type::float())], Type::int())),
        ("round", signature(&[("value", Type::float())], Type::int())),
        ("abs", unary.clone()),
        ("sqrt", unary),
        ("random", signature(&[], Type::float())),
        ("min", binary.clone()),
        ("max", binary),
    ];

    Type::Interface(InterfaceType {
        name: Some("Math".to_string()),
        properties: properties
            .into_iter()
            .map(|(name, value_type)| {
                let property = Property {
                    value_type,
                    mutable: false,
                };
                (name.to_string(), property)
            })
            .collect(),
        index_signatures: vec![],
    })
}

/// Every intrinsic name with its type.
pub fn intrinsics() -> Vec<(&'static str, Type)> {
    vec![
        ("print", signature(&[("value", Type::any())], Type::void())),
        ("eval", signature(&[("code", Type::string())], Type::any())),
        ("len", signature(&[("value", Type::any())], Type::int())),
        ("typeOf", signature(&[("value", Type::any())], Type::string())),
        ("str", signature(&[("value", Type::any())], Type::string())),
        ("input", signature(&[("prompt", Type::string())], Type::string())),
        ("assert", signature(&[("condition", Type::bool())], Type::void())),
        ("Math", math()),
    ]
}

/// Registers every intrinsic in the global scope of both passes.
pub fn define_intrinsics(resolver: &mut Resolver, binder: &mut Binder) {
    for (name, ty) in intrinsics() {
        resolver.define_global(name);
        binder.define_symbol(name, ty);
    }
    tracing::debug!("intrinsics defined");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::intrinsics;

    #[test]
    fn test_intrinsic_signatures() {
        let rendered: Vec<String> = intrinsics()
            .iter()
            .filter(|(name, _)| *name != "Math")
            .map(|(name, ty)| format!("{}: {}", name, ty))
            .collect();

        assert_eq!(
            rendered,
            vec![
                "print: (any value) :: void",
                "eval: (string code) :: any",
                "len: (any value) :: int",
                "typeOf: (any value) :: string",
                "str: (any value) :: string",
                "input: (string prompt) :: string",
                "assert: (bool condition) :: void",
            ]
        );
    }

    #[test]
    fn test_math_constants_are_readonly() {
        let (_, math) = intrinsics()
            .into_iter()
            .find(|(name, _)| *name == "Math")
            .unwrap();
        let crate::types::Type::Interface(math) = math else {
            panic!("expected an interface");
        };

        let pi = math.property("PI").unwrap();
        assert!(!pi.mutable);
        assert_eq!(pi.value_type.to_string(), "float");
        assert_eq!(
            math.property("max").unwrap().value_type.to_string(),
            "(int | float a, int | float b) :: float"
        );
    }
}
