//! The assignability relation between types.

use super::types::{IndexKey, Type};

/// The structural view of an interface, class or intersection: every
/// property it exposes plus its index signatures.
#[derive(Debug, Default)]
struct Shape {
    properties: Vec<(String, Type)>,
    index_signatures: Vec<(IndexKey, Type)>,
}

impl Shape {
    fn property(&self, name: &str) -> Option<&Type> {
        self.properties
            .iter()
            .find(|(property, _)| property == name)
            .map(|(_, ty)| ty)
    }

    fn merge(&mut self, other: Shape) {
        for (name, ty) in other.properties {
            if self.property(&name).is_none() {
                self.properties.push((name, ty));
            }
        }
        for (key, ty) in other.index_signatures {
            if !self.index_signatures.iter().any(|(own, _)| *own == key) {
                self.index_signatures.push((key, ty));
            }
        }
    }
}

fn shape_of(ty: &Type) -> Option<Shape> {
    match ty {
        Type::Interface(interface) => Some(Shape {
            properties: interface
                .properties
                .iter()
                .map(|(name, property)| (name.clone(), property.value_type.clone()))
                .collect(),
            index_signatures: interface.index_signatures.clone(),
        }),
        Type::Class(class) => {
            let mut shape = Shape {
                properties: class
                    .members
                    .iter()
                    .filter(|(_, member)| !member.is_private())
                    .map(|(name, member)| (name.clone(), member.value_type.clone()))
                    .collect(),
                index_signatures: vec![],
            };
            if let Some(superclass) = class.superclass.as_deref().and_then(shape_of) {
                shape.merge(superclass);
            }
            for mixin in class.mixins.iter().filter_map(shape_of) {
                shape.merge(mixin);
            }
            Some(shape)
        }
        Type::Intersection(members) => {
            let mut shape = Shape::default();
            for member in members {
                shape.merge(shape_of(member)?);
            }
            Some(shape)
        }
        _ => None,
    }
}

fn shape_satisfies(source: &Shape, target: &Shape) -> bool {
    let properties_match = target.properties.iter().all(|(name, target_type)| {
        source
            .property(name)
            .is_some_and(|source_type| source_type.is_assignable_to(target_type))
    });

    let signatures_match = target.index_signatures.iter().all(|(key, target_type)| {
        let by_signature = source
            .index_signatures
            .iter()
            .any(|(own, source_type)| own == key && source_type.is_assignable_to(target_type));

        by_signature
            || (*key == IndexKey::String
                && source
                    .properties
                    .iter()
                    .all(|(_, source_type)| source_type.is_assignable_to(target_type)))
    });

    properties_match && signatures_match
}

impl Type {
    /// Whether a value of type `self` may be stored where `target` is
    /// expected.
    pub fn is_assignable_to(&self, target: &Type) -> bool {
        if self == target || self.is_any() || target.is_any() {
            return true;
        }

        // Unions distribute; the source side decides first.
        if let Type::Union(members) = self {
            return members.iter().all(|member| member.is_assignable_to(target));
        }
        if let Type::Union(members) = target {
            return members.iter().any(|member| self.is_assignable_to(member));
        }

        if let Type::Intersection(members) = target {
            return members.iter().all(|member| self.is_assignable_to(member));
        }
        if let Type::Intersection(members) = self {
            return members.iter().any(|member| member.is_assignable_to(target))
                || match (shape_of(self), shape_of(target)) {
                    (Some(source), Some(target)) => shape_satisfies(&source, &target),
                    _ => false,
                };
        }

        if let Type::Literal(value) = self {
            return target.is_named(value.widened_name());
        }

        if let (Some(source), Some(target)) = (self.array_element(), target.array_element()) {
            return match (source, target) {
                (Some(source), Some(target)) => source.is_assignable_to(target),
                _ => true,
            };
        }

        match (self, target) {
            (
                Type::Singular {
                    name,
                    type_arguments,
                },
                Type::Singular {
                    name: target_name,
                    type_arguments: target_arguments,
                },
            ) => {
                name == target_name
                    && (type_arguments.is_empty()
                        || target_arguments.is_empty()
                        || (type_arguments.len() == target_arguments.len()
                            && type_arguments
                                .iter()
                                .zip(target_arguments)
                                .all(|(source, target)| source.is_assignable_to(target))))
            }

            // Self-referencing declarations see their own name as a placeholder
            (Type::Class(_) | Type::Interface(_), Type::Singular { name, .. })
            | (Type::Singular { name, .. }, Type::Class(_) | Type::Interface(_)) => {
                let other = if self.is_singular() { target } else { self };
                other.nominal_name() == Some(name.as_str())
            }

            (Type::Class(class), Type::Class(target_class)) => {
                class.name == target_class.name
                    || class
                        .superclass
                        .as_deref()
                        .is_some_and(|superclass| superclass.is_assignable_to(target))
                    || class.mixins.iter().any(|mixin| mixin.is_assignable_to(target))
            }

            (Type::Class(_) | Type::Interface(_), Type::Interface(_)) => {
                match (shape_of(self), shape_of(target)) {
                    (Some(source), Some(target)) => shape_satisfies(&source, &target),
                    _ => false,
                }
            }

            (Type::Function(function), Type::Function(target_function)) => {
                function.parameters.len() <= target_function.parameters.len()
                    && function
                        .parameters
                        .iter()
                        .zip(&target_function.parameters)
                        .all(|((_, source), (_, target))| target.is_assignable_to(source))
                    && function
                        .return_type
                        .is_assignable_to(&target_function.return_type)
            }

            _ => false,
        }
    }

    /// Two types are comparable when either is assignable to the other once
    /// literals are widened. Anything compares against `null` and `undefined`,
    /// and `int` compares against `float`.
    pub fn is_comparable_with(&self, other: &Type) -> bool {
        let left = self.widened();
        let right = other.widened();
        let is_nothing = |ty: &Type| ty.is_named("null") || ty.is_named("undefined");
        let number = Type::union(vec![Type::int(), Type::float()]);

        is_nothing(&left)
            || is_nothing(&right)
            || (left.is_assignable_to(&number) && right.is_assignable_to(&number))
            || left.is_assignable_to(&right)
            || right.is_assignable_to(&left)
    }
}
