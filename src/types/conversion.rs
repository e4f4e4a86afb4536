//! Conversion of syntactic type references into semantic types.

use crate::{
    ast::types::TypeRef,
    errors::errors::{Error, ErrorImpl},
    scope::ScopeStack,
};

use super::types::{FunctionType, IndexKey, InterfaceType, Property, Type, INTRINSIC_TYPE_NAMES};

/// Registry of the type names in scope, and what they stand for.
///
/// Seeded with the intrinsic types in the global scope. `Array` is handled by
/// the conversion itself since it takes a type argument. Names declared in an
/// inner scope are dropped when that scope ends.
#[derive(Debug, Clone)]
pub struct TypeTracker {
    types: ScopeStack<Type>,
}

impl Default for TypeTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeTracker {
    pub fn new() -> Self {
        let mut types = ScopeStack::new();
        for name in INTRINSIC_TYPE_NAMES.iter().filter(|name| **name != "Array") {
            types.insert(name, Type::singular(name));
        }

        TypeTracker { types }
    }

    /// Registers or replaces a named type in the innermost scope.
    pub fn declare(&mut self, name: &str, ty: Type) {
        self.types.insert(name, ty);
    }

    pub fn get(&self, name: &str) -> Option<&Type> {
        self.types.lookup(name).map(|(_, ty)| ty)
    }

    pub fn contains(&self, name: &str) -> bool {
        name == "Array" || self.get(name).is_some()
    }

    pub fn begin_scope(&mut self) {
        self.types.begin_scope();
    }

    pub fn end_scope(&mut self) {
        self.types.end_scope();
    }

    /// Drops every scope above the global one.
    pub fn truncate(&mut self) {
        self.types.truncate();
    }
}

/// Converts `type_ref` to a [`Type`], resolving names through `tracker`.
pub fn convert_type_ref(type_ref: &TypeRef, tracker: &TypeTracker) -> Result<Type, Error> {
    match type_ref {
        TypeRef::Named {
            name,
            type_arguments,
            span,
        } => {
            let arguments = type_arguments
                .iter()
                .map(|argument| convert_type_ref(argument, tracker))
                .collect::<Result<Vec<_>, _>>()?;

            if name == "Array" {
                return Ok(match arguments.len() {
                    0 => Type::array(Type::any()),
                    _ => Type::generic(name, arguments),
                });
            }

            match tracker.get(name) {
                Some(ty) if arguments.is_empty() => Ok(ty.clone()),
                Some(_) => Ok(Type::generic(name, arguments)),
                None => Err(Error::new(
                    ErrorImpl::UnknownType {
                        type_: name.clone(),
                    },
                    span.start.clone(),
                )),
            }
        }
        TypeRef::Array { element, .. } => Ok(Type::array(convert_type_ref(element, tracker)?)),
        TypeRef::Union(members, _) => Ok(Type::union(
            members
                .iter()
                .map(|member| convert_type_ref(member, tracker))
                .collect::<Result<Vec<_>, _>>()?,
        )),
        TypeRef::Intersection(members, _) => Ok(Type::intersection(
            members
                .iter()
                .map(|member| convert_type_ref(member, tracker))
                .collect::<Result<Vec<_>, _>>()?,
        )),
        TypeRef::Interface {
            properties,
            index_signatures,
            ..
        } => {
            let mut converted = InterfaceType {
                name: None,
                properties: vec![],
                index_signatures: vec![],
            };

            for property in properties {
                converted.properties.push((
                    property.name.clone(),
                    Property {
                        value_type: convert_type_ref(&property.type_ref, tracker)?,
                        mutable: property.mutable,
                    },
                ));
            }

            for signature in index_signatures {
                let key = match signature.key.as_str() {
                    "string" => IndexKey::String,
                    "int" => IndexKey::Int,
                    other => {
                        return Err(Error::new(
                            ErrorImpl::InvalidIndexSignature {
                                key: other.to_string(),
                            },
                            signature.key_span.start.clone(),
                        ))
                    }
                };
                converted
                    .index_signatures
                    .push((key, convert_type_ref(&signature.value, tracker)?));
            }

            Ok(Type::Interface(converted))
        }
        TypeRef::Function {
            parameters,
            return_type,
            ..
        } => {
            let parameters = parameters
                .iter()
                .map(|parameter| {
                    Ok((
                        parameter.name.clone(),
                        convert_type_ref(&parameter.type_ref, tracker)?,
                    ))
                })
                .collect::<Result<Vec<_>, Error>>()?;

            Ok(Type::Function(FunctionType {
                parameters,
                return_type: Box::new(convert_type_ref(return_type, tracker)?),
            }))
        }
        TypeRef::Literal(value, _) => Ok(Type::Literal(value.clone())),
    }
}
