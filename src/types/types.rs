//! The semantic type model.
//!
//! Types are immutable values. Construct them through the helpers on [`Type`]
//! so unions and intersections stay flat and de-duplicated.

use crate::ast::statements::MemberModifiers;

/// Type names every unit starts with.
pub const INTRINSIC_TYPE_NAMES: &[&str] = &[
    "any",
    "int",
    "float",
    "string",
    "bool",
    "void",
    "null",
    "undefined",
    "Range",
    "Array",
];

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
}

impl LiteralValue {
    /// Name of the singular type this literal widens to.
    pub fn widened_name(&self) -> &'static str {
        match self {
            LiteralValue::Int(_) => "int",
            LiteralValue::Float(_) => "float",
            LiteralValue::Str(_) => "string",
            LiteralValue::Bool(_) => "bool",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKey {
    String,
    Int,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub value_type: Type,
    pub mutable: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceType {
    /// Declared interfaces carry their name; object literals do not.
    pub name: Option<String>,
    pub properties: Vec<(String, Property)>,
    pub index_signatures: Vec<(IndexKey, Type)>,
}

impl InterfaceType {
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties
            .iter()
            .find(|(property, _)| property == name)
            .map(|(_, property)| property)
    }

    pub fn index_signature(&self, key: IndexKey) -> Option<&Type> {
        self.index_signatures
            .iter()
            .find(|(signature, _)| *signature == key)
            .map(|(_, value)| value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionType {
    pub parameters: Vec<(String, Type)>,
    pub return_type: Box<Type>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub value_type: Type,
    pub modifiers: MemberModifiers,
    pub mutable: bool,
}

impl Member {
    pub fn is_private(&self) -> bool {
        self.modifiers.contains(MemberModifiers::PRIVATE)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassType {
    pub name: String,
    pub members: Vec<(String, Member)>,
    pub mixins: Vec<Type>,
    pub superclass: Option<Box<Type>>,
}

/// Where a class member was found, for privacy checks.
#[derive(Debug, Clone, PartialEq)]
pub struct FoundMember {
    pub member: Member,
    pub owner: String,
}

impl ClassType {
    /// Looks a member up on the class itself, then its superclass chain, then
    /// its mixins. Interface mixins contribute public members.
    pub fn find_member(&self, name: &str) -> Option<FoundMember> {
        if let Some((_, member)) = self.members.iter().find(|(member, _)| member == name) {
            return Some(FoundMember {
                member: member.clone(),
                owner: self.name.clone(),
            });
        }

        if let Some(Type::Class(superclass)) = self.superclass.as_deref() {
            if let Some(found) = superclass.find_member(name) {
                return Some(found);
            }
        }

        self.mixins.iter().find_map(|mixin| match mixin {
            Type::Class(class) => class.find_member(name),
            Type::Interface(interface) => interface.property(name).map(|property| FoundMember {
                member: Member {
                    value_type: property.value_type.clone(),
                    modifiers: MemberModifiers::PUBLIC,
                    mutable: property.mutable,
                },
                owner: interface.name.clone().unwrap_or_default(),
            }),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    /// Nominal or intrinsic type, `int`, `Point`, `Map<string>`
    Singular {
        name: String,
        type_arguments: Vec<Type>,
    },
    Union(Vec<Type>),
    /// `None` is the element type of `[]`, which has not been decided yet
    Array(Option<Box<Type>>),
    Interface(InterfaceType),
    Function(FunctionType),
    Class(ClassType),
    Literal(LiteralValue),
    Intersection(Vec<Type>),
}

impl Type {
    pub fn singular(name: &str) -> Type {
        Type::Singular {
            name: name.to_string(),
            type_arguments: vec![],
        }
    }

    /// `Array<T>` is the array type; any other name stays singular.
    pub fn generic(name: &str, type_arguments: Vec<Type>) -> Type {
        if let ("Array", [element]) = (name, type_arguments.as_slice()) {
            return Type::array(element.clone());
        }

        Type::Singular {
            name: name.to_string(),
            type_arguments,
        }
    }

    pub fn any() -> Type {
        Type::singular("any")
    }

    pub fn int() -> Type {
        Type::singular("int")
    }

    pub fn float() -> Type {
        Type::singular("float")
    }

    pub fn string() -> Type {
        Type::singular("string")
    }

    pub fn bool() -> Type {
        Type::singular("bool")
    }

    pub fn void() -> Type {
        Type::singular("void")
    }

    pub fn null() -> Type {
        Type::singular("null")
    }

    pub fn undefined() -> Type {
        Type::singular("undefined")
    }

    pub fn range() -> Type {
        Type::singular("Range")
    }

    pub fn array(element: Type) -> Type {
        Type::Array(Some(Box::new(element)))
    }

    pub fn empty_array() -> Type {
        Type::Array(None)
    }

    pub fn literal(value: LiteralValue) -> Type {
        Type::Literal(value)
    }

    pub fn function(parameters: Vec<(String, Type)>, return_type: Type) -> Type {
        Type::Function(FunctionType {
            parameters,
            return_type: Box::new(return_type),
        })
    }

    /// Builds a union, flattening nested unions and dropping duplicates while
    /// keeping first-appearance order. A single distinct member is returned
    /// as itself.
    pub fn union(types: Vec<Type>) -> Type {
        let mut members: Vec<Type> = vec![];
        for ty in types {
            match ty {
                Type::Union(inner) => {
                    for member in inner {
                        if !members.contains(&member) {
                            members.push(member);
                        }
                    }
                }
                other => {
                    if !members.contains(&other) {
                        members.push(other);
                    }
                }
            }
        }

        if members.len() == 1 {
            members.remove(0)
        } else {
            Type::Union(members)
        }
    }

    /// Builds an intersection, flattened and de-duplicated like [`Type::union`].
    pub fn intersection(types: Vec<Type>) -> Type {
        let mut members: Vec<Type> = vec![];
        for ty in types {
            let flattened = match ty {
                Type::Intersection(inner) => inner,
                other => vec![other],
            };
            for member in flattened {
                if !members.contains(&member) {
                    members.push(member);
                }
            }
        }

        if members.len() == 1 {
            members.remove(0)
        } else {
            Type::Intersection(members)
        }
    }

    pub fn is_singular(&self) -> bool {
        matches!(self, Type::Singular { .. })
    }

    pub fn is_union(&self) -> bool {
        matches!(self, Type::Union(_))
    }

    pub fn is_array(&self) -> bool {
        self.array_element().is_some()
    }

    pub fn is_interface(&self) -> bool {
        matches!(self, Type::Interface(_))
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Type::Function(_))
    }

    pub fn is_class(&self) -> bool {
        matches!(self, Type::Class(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Type::Literal(_))
    }

    pub fn is_intersection(&self) -> bool {
        matches!(self, Type::Intersection(_))
    }

    pub fn is_any(&self) -> bool {
        self.is_named("any")
    }

    /// `true` for a singular type called `name`.
    pub fn is_named(&self, name: &str) -> bool {
        matches!(self, Type::Singular { name: own, .. } if own == name)
    }

    pub fn contains_any(&self) -> bool {
        match self {
            Type::Union(members) => members.iter().any(Type::contains_any),
            other => other.is_any(),
        }
    }

    pub fn contains_undefined(&self) -> bool {
        match self {
            Type::Union(members) => members.iter().any(Type::contains_undefined),
            other => other.is_named("undefined"),
        }
    }

    /// Literal types become their singular type, through unions too.
    pub fn widened(&self) -> Type {
        match self {
            Type::Literal(value) => Type::singular(value.widened_name()),
            Type::Union(members) => Type::union(members.iter().map(Type::widened).collect()),
            other => other.clone(),
        }
    }

    /// The element slot of an array type, with `Singular("Array", [T])`
    /// treated like `Array(T)`. `Some(None)` is the undecided `[]` element.
    pub fn array_element(&self) -> Option<Option<&Type>> {
        match self {
            Type::Array(element) => Some(element.as_deref()),
            Type::Singular {
                name,
                type_arguments,
            } if name == "Array" => Some(type_arguments.first()),
            _ => None,
        }
    }

    /// The element type of an array, `any` for `[]`.
    pub fn element_type(&self) -> Option<Type> {
        self.array_element()
            .map(|element| element.cloned().unwrap_or_else(Type::any))
    }

    /// The declared name of a nominal type, if any.
    pub fn nominal_name(&self) -> Option<&str> {
        match self {
            Type::Singular { name, .. } => Some(name),
            Type::Class(class) => Some(&class.name),
            Type::Interface(interface) => interface.name.as_deref(),
            _ => None,
        }
    }
}
