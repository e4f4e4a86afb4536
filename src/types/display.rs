use std::fmt::{Display, Formatter, Result};

use super::types::{FunctionType, IndexKey, InterfaceType, LiteralValue, Type};

fn write_joined(f: &mut Formatter<'_>, types: &[Type], separator: &str) -> Result {
    for (i, ty) in types.iter().enumerate() {
        if i > 0 {
            write!(f, "{}", separator)?;
        }
        write!(f, "{}", ty)?;
    }
    Ok(())
}

impl Display for LiteralValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            LiteralValue::Int(value) => write!(f, "{}", value),
            LiteralValue::Float(value) if value.fract() == 0.0 && value.is_finite() => {
                write!(f, "{:.1}", value)
            }
            LiteralValue::Float(value) => write!(f, "{}", value),
            LiteralValue::Str(value) => write!(f, "{:?}", value),
            LiteralValue::Bool(value) => write!(f, "{}", value),
        }
    }
}

impl Display for IndexKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            IndexKey::String => write!(f, "string"),
            IndexKey::Int => write!(f, "int"),
        }
    }
}

impl Display for InterfaceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if let Some(name) = &self.name {
            return write!(f, "{}", name);
        }

        if self.properties.is_empty() && self.index_signatures.is_empty() {
            return write!(f, "{{}}");
        }

        let mut entries = vec![];
        for (name, property) in &self.properties {
            let prefix = if property.mutable { "" } else { "const " };
            entries.push(format!("{}{}: {}", prefix, name, property.value_type));
        }
        for (key, value) in &self.index_signatures {
            entries.push(format!("[{}]: {}", key, value));
        }

        write!(f, "{{ {} }}", entries.join(", "))
    }
}

impl Display for FunctionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let parameters = self
            .parameters
            .iter()
            .map(|(name, ty)| format!("{} {}", ty, name))
            .collect::<Vec<_>>()
            .join(", ");

        write!(f, "({}) :: {}", parameters, self.return_type)
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Type::Singular {
                name,
                type_arguments,
            } => {
                write!(f, "{}", name)?;
                if !type_arguments.is_empty() {
                    write!(f, "<")?;
                    write_joined(f, type_arguments, ", ")?;
                    write!(f, ">")?;
                }
                Ok(())
            }
            Type::Union(members) if members.is_empty() => write!(f, "never"),
            Type::Union(members) => write_joined(f, members, " | "),
            Type::Array(None) => write!(f, "Array<never>"),
            Type::Array(Some(element)) => write!(f, "Array<{}>", element),
            Type::Interface(interface) => write!(f, "{}", interface),
            Type::Function(function) => write!(f, "{}", function),
            Type::Class(class) => write!(f, "{}", class.name),
            Type::Literal(value) => write!(f, "{}", value),
            Type::Intersection(members) => write_joined(f, members, " & "),
        }
    }
}
