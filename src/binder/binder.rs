use std::collections::HashMap;

use crate::{
    ast::{
        ast::{Expr, NodeId, Stmt},
        expressions::{
            AccessExpr, AccessKey, ArrayLiteralExpr, AssignmentExpr, BinaryExpr, CallExpr,
            Keyword, NewExpr, ObjectKey, ObjectLiteralExpr, PrefixExpr, SymbolExpr,
        },
        statements::{
            BlockStmt, ClassDeclStmt, FnDeclStmt, ForStmt, MemberModifiers, TypeDeclStmt,
            VarDeclStmt,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    scope::ScopeStack,
    types::{
        conversion::{convert_type_ref, TypeTracker},
        ClassType, FunctionType, IndexKey, InterfaceType, LiteralValue, Member, Property, Type,
    },
    Position,
};

use super::{
    bound_ast::{
        union_of_returns, BoundAccessKey, BoundExpr, BoundExprKind, BoundField, BoundFunction,
        BoundObjectKey, BoundStmt, BoundStmtKind,
    },
    extensions::extension_member,
    operators::{BoundBinaryOperator, BoundUnaryOperator},
};

/// A named value in a binder scope.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableSymbol {
    pub name: String,
    pub ty: Type,
    pub mutable: bool,
}

/// Global symbols and type names, kept across units by a session.
#[derive(Debug, Clone)]
pub struct BinderGlobals {
    symbols: HashMap<String, VariableSymbol>,
    types: TypeTracker,
}

/// Key of a member lookup on an interface or class.
enum MemberKey<'a> {
    Name(&'a str),
    Index(IndexKey),
}

type Bound = (BoundExprKind, Type);

/// Builds the bound tree, giving every expression a [`Type`].
///
/// Scopes are pushed and popped at exactly the points the resolver pushes
/// and pops them, so the resolver's distances can be used for every lookup.
#[derive(Debug, Default)]
pub struct Binder {
    scopes: ScopeStack<VariableSymbol>,
    types: TypeTracker,
    distances: HashMap<NodeId, usize>,
    bound_types: HashMap<NodeId, Type>,
    /// Classes whose bodies are being bound, innermost last
    classes: Vec<String>,
}

impl Binder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an immutable symbol in the innermost scope.
    pub fn define_symbol(&mut self, name: &str, ty: Type) {
        self.define(name, ty, false);
    }

    fn define(&mut self, name: &str, ty: Type, mutable: bool) {
        self.scopes.insert(
            name,
            VariableSymbol {
                name: name.to_string(),
                ty,
                mutable,
            },
        );
    }

    /// Finds the symbol an expression reads, at the distance the resolver
    /// recorded for it when there is one.
    pub fn find_symbol(
        &self,
        name: &str,
        id: NodeId,
        position: &Position,
    ) -> Result<(VariableSymbol, Option<usize>), Error> {
        let found = match self.distances.get(&id) {
            Some(&distance) => self
                .scopes
                .lookup_at(distance, name)
                .map(|symbol| (symbol, Some(distance))),
            None => self
                .scopes
                .lookup(name)
                .map(|(distance, symbol)| (symbol, Some(distance))),
        };

        found
            .map(|(symbol, distance)| (symbol.clone(), distance))
            .ok_or_else(|| {
                Error::new(
                    ErrorImpl::SymbolNotFound {
                        name: name.to_string(),
                    },
                    position.clone(),
                )
            })
    }

    pub fn type_tracker(&self) -> &TypeTracker {
        &self.types
    }

    pub fn get_bound_type(&self, id: NodeId) -> Option<&Type> {
        self.bound_types.get(&id)
    }

    pub fn take_bound_types(&mut self) -> HashMap<NodeId, Type> {
        std::mem::take(&mut self.bound_types)
    }

    pub fn globals(&self) -> BinderGlobals {
        BinderGlobals {
            symbols: self.scopes.snapshot(),
            types: self.types.clone(),
        }
    }

    pub fn restore_globals(&mut self, globals: BinderGlobals) {
        self.scopes.restore(globals.symbols);
        self.types = globals.types;
    }

    /// Binds a unit in the global scope, using the distances the resolver
    /// recorded for it.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn bind(
        &mut self,
        block: &BlockStmt,
        distances: HashMap<NodeId, usize>,
    ) -> Result<Vec<BoundStmt>, Error> {
        self.distances = distances;
        self.bound_types.clear();
        self.classes.clear();

        let result = self.bind_stmts(block);
        self.scopes.truncate();
        self.types.truncate();
        self.distances.clear();

        tracing::debug!(expressions = self.bound_types.len(), "bound");
        result
    }

    /// Value and type names share scope boundaries.
    fn begin_scope(&mut self) {
        self.scopes.begin_scope();
        self.types.begin_scope();
    }

    fn end_scope(&mut self) {
        self.scopes.end_scope();
        self.types.end_scope();
    }

    fn bind_stmts(&mut self, block: &BlockStmt) -> Result<Vec<BoundStmt>, Error> {
        block.iter().map(|stmt| self.bind_stmt(stmt)).collect()
    }

    fn bind_block(&mut self, block: &BlockStmt) -> Result<Vec<BoundStmt>, Error> {
        self.begin_scope();
        let result = self.bind_stmts(block);
        self.end_scope();
        result
    }

    fn bind_stmt(&mut self, stmt: &Stmt) -> Result<BoundStmt, Error> {
        let (kind, ty) = match stmt {
            Stmt::Expression(stmt) => (
                BoundStmtKind::Expression(self.bind_expr(&stmt.expression)?),
                None,
            ),
            Stmt::Block(block) => {
                let body = self.bind_block(block)?;
                let ty = union_of_returns(body.iter().map(|stmt| &stmt.ty));
                (BoundStmtKind::Block(body), ty)
            }
            Stmt::VarDecl(decl) => (self.bind_var_decl(decl)?, None),
            Stmt::If(stmt) => {
                let condition = self.bind_expr(&stmt.condition)?;
                let then_body = self.bind_stmt(&stmt.then_body)?;
                let else_body = match &stmt.else_body {
                    Some(else_body) => Some(Box::new(self.bind_stmt(else_body)?)),
                    None => None,
                };

                let ty = union_of_returns(
                    std::iter::once(&then_body.ty).chain(else_body.iter().map(|stmt| &stmt.ty)),
                );
                let kind = BoundStmtKind::If {
                    condition,
                    then_body: Box::new(then_body),
                    else_body,
                };
                (kind, ty)
            }
            Stmt::While(stmt) => {
                let condition = self.bind_expr(&stmt.condition)?;
                let body = self.bind_stmt(&stmt.body)?;
                let ty = body.ty.clone();
                let kind = BoundStmtKind::While {
                    condition,
                    body: Box::new(body),
                };
                (kind, ty)
            }
            Stmt::For(stmt) => self.bind_for(stmt)?,
            Stmt::FnDecl(function) => (
                BoundStmtKind::FnDecl(self.bind_function(function, true)?),
                None,
            ),
            Stmt::Return(stmt) => {
                let value = match &stmt.value {
                    Some(value) => Some(self.bind_expr(value)?),
                    None => None,
                };
                let ty = value
                    .as_ref()
                    .map_or_else(Type::void, |value| value.ty.widened());
                (BoundStmtKind::Return(value), Some(ty))
            }
            Stmt::Break(stmt) => (
                BoundStmtKind::Break {
                    is_continue: stmt.is_continue,
                },
                None,
            ),
            Stmt::ClassDecl(class) => (self.bind_class(class)?, None),
            Stmt::TypeDecl(decl) => (self.bind_type_decl(decl)?, None),
        };

        Ok(BoundStmt {
            kind,
            ty,
            span: stmt.get_span().clone(),
        })
    }

    fn bind_var_decl(&mut self, decl: &VarDeclStmt) -> Result<BoundStmtKind, Error> {
        let mut declared_type = match &decl.explicit_type {
            Some(type_ref) => convert_type_ref(type_ref, &self.types)?,
            None => Type::any(),
        };

        let initializer = match &decl.assigned_value {
            Some(value) => Some(self.bind_expr(value)?),
            None => None,
        };

        if let Some(initializer) = &initializer {
            if declared_type.is_any() {
                declared_type = initializer.ty.widened();
            } else if initializer.ty.contains_undefined() && !declared_type.contains_undefined() {
                declared_type = Type::union(vec![declared_type, Type::undefined()]);
            }
        }

        self.define(&decl.identifier, declared_type.clone(), !decl.is_constant);
        Ok(BoundStmtKind::VarDecl {
            name: decl.identifier.clone(),
            declared_type,
            initializer,
            is_constant: decl.is_constant,
        })
    }

    fn bind_for(&mut self, stmt: &ForStmt) -> Result<(BoundStmtKind, Option<Type>), Error> {
        let iterable = self.bind_expr(&stmt.iterable)?;
        let element_type = iteration_type(&iterable.ty);

        self.begin_scope();
        self.define(&stmt.variable, element_type.clone(), true);
        let body = self.bind_stmts(&stmt.body);
        self.end_scope();
        let body = body?;

        let ty = union_of_returns(body.iter().map(|stmt| &stmt.ty));
        let kind = BoundStmtKind::For {
            variable: stmt.variable.clone(),
            element_type,
            iterable,
            body,
        };
        Ok((kind, ty))
    }

    fn function_signature(&self, function: &FnDeclStmt) -> Result<FunctionType, Error> {
        let parameters = function
            .parameters
            .iter()
            .map(|parameter| {
                Ok((
                    parameter.name.clone(),
                    convert_type_ref(&parameter.type_ref, &self.types)?,
                ))
            })
            .collect::<Result<Vec<_>, Error>>()?;

        let return_type = match &function.return_type {
            Some(return_type) => convert_type_ref(return_type, &self.types)?,
            None => Type::any(),
        };

        Ok(FunctionType {
            parameters,
            return_type: Box::new(return_type),
        })
    }

    /// Binds a function or method. Free functions are defined in the
    /// enclosing scope before their body binds, so they can recurse, and are
    /// redefined once an unannotated return type has been inferred.
    fn bind_function(
        &mut self,
        function: &FnDeclStmt,
        define: bool,
    ) -> Result<BoundFunction, Error> {
        let mut function_type = self.function_signature(function)?;
        if define {
            self.define_symbol(&function.identifier, Type::Function(function_type.clone()));
        }

        self.begin_scope();
        let body = self.bind_function_scope(&function_type, &function.body);
        self.end_scope();
        let body = body?;

        if function.return_type.is_none() {
            let inferred = union_of_returns(body.iter().map(|stmt| &stmt.ty)).unwrap_or_else(Type::void);
            function_type.return_type = Box::new(inferred);

            if define {
                self.define_symbol(&function.identifier, Type::Function(function_type.clone()));
            }
        }

        tracing::trace!(name = %function.identifier, ty = %Type::Function(function_type.clone()), "bound function");
        Ok(BoundFunction {
            name: function.identifier.clone(),
            function_type,
            body,
        })
    }

    fn bind_function_scope(
        &mut self,
        function_type: &FunctionType,
        body: &BlockStmt,
    ) -> Result<Vec<BoundStmt>, Error> {
        for (name, ty) in &function_type.parameters {
            self.define(name, ty.clone(), true);
        }
        self.bind_stmts(body)
    }

    fn declare_class(&mut self, class: &ClassType) {
        let ty = Type::Class(class.clone());
        self.types.declare(&class.name, ty.clone());
        self.define_symbol(&class.name, ty);
    }

    fn bind_class(&mut self, class: &ClassDeclStmt) -> Result<BoundStmtKind, Error> {
        // Placeholder so members can refer to the class being declared
        self.types.declare(&class.name, Type::singular(&class.name));

        let superclass = match &class.superclass {
            Some((name, span)) => match self.types.get(name) {
                Some(ty @ Type::Class(_)) => Some(Box::new(ty.clone())),
                _ => {
                    return Err(Error::new(
                        ErrorImpl::InvalidSuperclass { name: name.clone() },
                        span.start.clone(),
                    ))
                }
            },
            None => None,
        };

        let mixins = class
            .mixins
            .iter()
            .map(|(name, span)| match self.types.get(name) {
                Some(ty @ (Type::Class(_) | Type::Interface(_))) => Ok(ty.clone()),
                _ => Err(Error::new(
                    ErrorImpl::InvalidMixin { name: name.clone() },
                    span.start.clone(),
                )),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut members = vec![];
        for field in &class.fields {
            members.push((
                field.name.clone(),
                Member {
                    value_type: convert_type_ref(&field.type_ref, &self.types)?,
                    modifiers: field.modifiers,
                    mutable: !field.modifiers.contains(MemberModifiers::CONST),
                },
            ));
        }
        for method in &class.methods {
            members.push((
                method.function.identifier.clone(),
                Member {
                    value_type: Type::Function(self.function_signature(&method.function)?),
                    modifiers: method.modifiers,
                    mutable: false,
                },
            ));
        }

        let mut class_type = ClassType {
            name: class.name.clone(),
            members,
            mixins,
            superclass,
        };
        self.declare_class(&class_type);

        self.classes.push(class.name.clone());
        self.begin_scope();
        let bound = self.bind_class_scope(class, &class_type);
        self.end_scope();
        self.classes.pop();
        let (fields, methods) = bound?;

        // Methods without a return annotation now have an inferred one
        for method in &methods {
            let member = class_type
                .members
                .iter_mut()
                .skip(class.fields.len())
                .find(|(name, _)| *name == method.name);
            if let Some((_, member)) = member {
                member.value_type = Type::Function(method.function_type.clone());
            }
        }
        self.declare_class(&class_type);

        Ok(BoundStmtKind::ClassDecl {
            class: class_type,
            fields,
            methods,
        })
    }

    fn bind_class_scope(
        &mut self,
        class: &ClassDeclStmt,
        class_type: &ClassType,
    ) -> Result<(Vec<BoundField>, Vec<BoundFunction>), Error> {
        self.define_symbol("this", Type::Class(class_type.clone()));

        let mut fields = vec![];
        for (field, (_, member)) in class.fields.iter().zip(&class_type.members) {
            let initializer = match &field.initializer {
                Some(initializer) => Some(self.bind_expr(initializer)?),
                None => None,
            };
            fields.push(BoundField {
                name: field.name.clone(),
                ty: member.value_type.clone(),
                initializer,
            });
        }

        let methods = class
            .methods
            .iter()
            .map(|method| self.bind_function(&method.function, false))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((fields, methods))
    }

    fn bind_type_decl(&mut self, decl: &TypeDeclStmt) -> Result<BoundStmtKind, Error> {
        // Placeholder for self-reference
        self.types.declare(&decl.name, Type::singular(&decl.name));

        let mut ty = convert_type_ref(&decl.type_ref, &self.types)?;
        if let Type::Interface(interface) = &mut ty {
            interface.name = Some(decl.name.clone());
        }
        self.types.declare(&decl.name, ty.clone());

        Ok(BoundStmtKind::TypeDecl {
            name: decl.name.clone(),
            ty,
        })
    }

    fn finish(&mut self, expr: &Expr, (kind, ty): Bound) -> BoundExpr {
        let id = expr.get_id();
        self.bound_types.insert(id, ty.clone());

        BoundExpr {
            kind,
            ty,
            id,
            span: expr.get_span().clone(),
        }
    }

    fn bind_expr(&mut self, expr: &Expr) -> Result<BoundExpr, Error> {
        let bound = match expr {
            Expr::Literal(literal) => (
                BoundExprKind::Literal(literal.value.clone()),
                Type::literal(literal.value.clone()),
            ),
            Expr::Keyword(keyword) => {
                let ty = match keyword.keyword {
                    Keyword::Null => Type::null(),
                    Keyword::Undefined => Type::undefined(),
                };
                (BoundExprKind::Keyword(keyword.keyword), ty)
            }
            Expr::Symbol(symbol) => self.bind_symbol(symbol)?,
            Expr::Array(array) => self.bind_array(array)?,
            Expr::Object(object) => self.bind_object(object)?,
            Expr::Binary(binary) => self.bind_binary(binary)?,
            Expr::Prefix(prefix) => self.bind_prefix(prefix)?,
            Expr::Assignment(assignment) => self.bind_assignment(assignment)?,
            Expr::Access(access) => {
                let (kind, ty, _) = self.bind_access(access)?;
                (kind, ty)
            }
            Expr::Call(call) => self.bind_call(call)?,
            Expr::New(new) => self.bind_new(new)?,
        };

        Ok(self.finish(expr, bound))
    }

    /// Binds the target of an assignment, `++` or `--`, rejecting targets
    /// that cannot be written.
    fn bind_target(&mut self, expr: &Expr) -> Result<BoundExpr, Error> {
        let bound = match expr {
            Expr::Symbol(symbol) => {
                let (found, distance) =
                    self.find_symbol(&symbol.value, symbol.id, &symbol.span.start)?;
                if !found.mutable {
                    return Err(Error::new(
                        ErrorImpl::ConstantAssignment {
                            variable: symbol.value.clone(),
                        },
                        symbol.span.start.clone(),
                    ));
                }

                let kind = BoundExprKind::Symbol {
                    name: symbol.value.clone(),
                    distance,
                };
                (kind, found.ty)
            }
            Expr::Access(access) => {
                let (kind, ty, mutable) = self.bind_access(access)?;
                if !mutable {
                    return Err(Error::new(
                        ErrorImpl::ReadonlyProperty {
                            property: describe_key(&access.key),
                        },
                        access.span.start.clone(),
                    ));
                }
                (kind, ty)
            }
            other => {
                return Err(Error::new(
                    ErrorImpl::InvalidAssignmentTarget,
                    other.get_span().start.clone(),
                ))
            }
        };

        Ok(self.finish(expr, bound))
    }

    fn bind_symbol(&mut self, symbol: &SymbolExpr) -> Result<Bound, Error> {
        let (found, distance) = self.find_symbol(&symbol.value, symbol.id, &symbol.span.start)?;
        let kind = BoundExprKind::Symbol {
            name: symbol.value.clone(),
            distance,
        };
        Ok((kind, found.ty))
    }

    fn bind_array(&mut self, array: &ArrayLiteralExpr) -> Result<Bound, Error> {
        let elements = array
            .elements
            .iter()
            .map(|element| self.bind_expr(element))
            .collect::<Result<Vec<_>, _>>()?;

        let ty = if elements.is_empty() {
            Type::empty_array()
        } else {
            Type::array(Type::union(
                elements.iter().map(|element| element.ty.widened()).collect(),
            ))
        };
        Ok((BoundExprKind::Array(elements), ty))
    }

    fn bind_object(&mut self, object: &ObjectLiteralExpr) -> Result<Bound, Error> {
        let mut shape = InterfaceType {
            name: None,
            properties: vec![],
            index_signatures: vec![],
        };
        let mut properties = vec![];

        for property in &object.properties {
            match &property.key {
                ObjectKey::Named(name, _) => {
                    let value = self.bind_expr(&property.value)?;
                    let entry = Property {
                        value_type: value.ty.widened(),
                        mutable: true,
                    };
                    match shape.properties.iter_mut().find(|(existing, _)| existing == name) {
                        Some((_, existing)) => *existing = entry,
                        None => shape.properties.push((name.clone(), entry)),
                    }
                    properties.push((BoundObjectKey::Named(name.clone()), value));
                }
                ObjectKey::Computed(key) => {
                    let key = self.bind_expr(key)?;
                    if !key
                        .ty
                        .is_assignable_to(&Type::union(vec![Type::string(), Type::int()]))
                    {
                        return Err(Error::new(
                            ErrorImpl::InvalidComputedKey {
                                received: key.ty.widened().to_string(),
                            },
                            key.span.start.clone(),
                        ));
                    }

                    let index = if key.ty.widened().is_named("int") {
                        IndexKey::Int
                    } else {
                        IndexKey::String
                    };
                    let value = self.bind_expr(&property.value)?;
                    match shape
                        .index_signatures
                        .iter_mut()
                        .find(|(existing, _)| *existing == index)
                    {
                        Some((_, existing)) => {
                            *existing = Type::union(vec![existing.clone(), value.ty.widened()])
                        }
                        None => shape.index_signatures.push((index, value.ty.widened())),
                    }
                    properties.push((BoundObjectKey::Computed(key), value));
                }
            }
        }

        Ok((BoundExprKind::Object(properties), Type::Interface(shape)))
    }

    fn bind_binary(&mut self, binary: &BinaryExpr) -> Result<Bound, Error> {
        let left = self.bind_expr(&binary.left)?;
        let right = self.bind_expr(&binary.right)?;

        let operator = BoundBinaryOperator::bind(binary.operator.kind, &left.ty, &right.ty)
            .ok_or_else(|| operator_error(&binary.operator, &[&left.ty, &right.ty]))?;

        let kind = BoundExprKind::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        };
        Ok((kind, operator.result_type.clone()))
    }

    fn bind_prefix(&mut self, prefix: &PrefixExpr) -> Result<Bound, Error> {
        let operand = match prefix.operator.kind {
            TokenKind::PlusPlus | TokenKind::MinusMinus => self.bind_target(&prefix.right_expr)?,
            _ => self.bind_expr(&prefix.right_expr)?,
        };

        let operator = BoundUnaryOperator::bind(prefix.operator.kind, &operand.ty)
            .ok_or_else(|| operator_error(&prefix.operator, &[&operand.ty]))?;

        let kind = BoundExprKind::Unary {
            operator,
            operand: Box::new(operand),
        };
        Ok((kind, operator.result_type.clone()))
    }

    fn bind_assignment(&mut self, assignment: &AssignmentExpr) -> Result<Bound, Error> {
        let target = self.bind_target(&assignment.assignee)?;
        let value = self.bind_expr(&assignment.value)?;

        let operator = match assignment.operator.kind {
            TokenKind::Assignment => None,
            compound => Some(
                BoundBinaryOperator::bind(compound, &target.ty, &value.ty)
                    .ok_or_else(|| operator_error(&assignment.operator, &[&target.ty, &value.ty]))?,
            ),
        };

        let ty = target.ty.clone();
        let kind = BoundExprKind::Assignment {
            target: Box::new(target),
            operator,
            value: Box::new(value),
        };
        Ok((kind, ty))
    }

    /// Binds a member or index access. The flag reports whether the accessed
    /// slot may be assigned to.
    fn bind_access(&mut self, access: &AccessExpr) -> Result<(BoundExprKind, Type, bool), Error> {
        let object = self.bind_expr(&access.object)?;
        let object_type = self.expand(&object.ty);
        let position = &access.span.start;

        let (key, ty, mutable, is_extension) = match &access.key {
            AccessKey::Name(name, _) => match extension_member(&object_type, name) {
                Some(ty) => (BoundAccessKey::Name(name.clone()), ty, false, true),
                None => {
                    let (ty, mutable) =
                        self.member_type(&object_type, &MemberKey::Name(name), position)?;
                    (BoundAccessKey::Name(name.clone()), ty, mutable, false)
                }
            },
            AccessKey::Computed(key) => {
                let key = self.bind_expr(key)?;
                let widened = object_type.widened();

                let (ty, mutable) = if let Some(element) = widened.element_type() {
                    (element, true)
                } else if widened.is_named("string") {
                    (Type::string(), false)
                } else {
                    match &key.ty {
                        Type::Literal(LiteralValue::Str(name)) => {
                            self.member_type(&object_type, &MemberKey::Name(name), position)?
                        }
                        key_type if key_type.widened().is_named("int") => {
                            self.member_type(&object_type, &MemberKey::Index(IndexKey::Int), position)?
                        }
                        _ => self.member_type(
                            &object_type,
                            &MemberKey::Index(IndexKey::String),
                            position,
                        )?,
                    }
                };
                (BoundAccessKey::Computed(Box::new(key)), ty, mutable, false)
            }
        };

        let kind = BoundExprKind::Access {
            object: Box::new(object),
            key,
            is_extension,
        };
        Ok((kind, ty, mutable))
    }

    /// Replaces a placeholder for a declared class or interface with the
    /// declaration itself.
    fn expand(&self, ty: &Type) -> Type {
        match ty {
            Type::Singular {
                name,
                type_arguments,
            } if type_arguments.is_empty() => match self.types.get(name) {
                Some(found @ (Type::Class(_) | Type::Interface(_) | Type::Intersection(_))) => {
                    found.clone()
                }
                _ => ty.clone(),
            },
            _ => ty.clone(),
        }
    }

    fn member_type(
        &self,
        object: &Type,
        key: &MemberKey,
        position: &Position,
    ) -> Result<(Type, bool), Error> {
        match object {
            Type::Interface(interface) => {
                let found = match key {
                    MemberKey::Name(name) => interface
                        .property(name)
                        .map(|property| (property.value_type.clone(), property.mutable))
                        .or_else(|| {
                            interface
                                .index_signature(IndexKey::String)
                                .map(|ty| (ty.clone(), true))
                        }),
                    MemberKey::Index(index) => interface
                        .index_signature(*index)
                        .map(|ty| (ty.clone(), true)),
                };
                Ok(found.unwrap_or_else(|| (Type::undefined(), true)))
            }
            Type::Class(class) => {
                let MemberKey::Name(name) = key else {
                    return Ok((Type::undefined(), true));
                };
                let Some(found) = class.find_member(name) else {
                    return Ok((Type::undefined(), true));
                };

                if found.member.is_private() && !self.classes.contains(&found.owner) {
                    return Err(Error::new(
                        ErrorImpl::PrivateMemberAccess {
                            member: name.to_string(),
                            class: found.owner,
                        },
                        position.clone(),
                    ));
                }
                Ok((found.member.value_type, found.member.mutable))
            }
            Type::Intersection(members) => {
                for member in members {
                    let (ty, mutable) = self.member_type(&self.expand(member), key, position)?;
                    if !ty.is_named("undefined") {
                        return Ok((ty, mutable));
                    }
                }
                Ok((Type::undefined(), true))
            }
            other if other.contains_any() => Ok((Type::any(), true)),
            _ => Ok((Type::undefined(), true)),
        }
    }

    fn bind_call(&mut self, call: &CallExpr) -> Result<Bound, Error> {
        let callee = self.bind_expr(&call.callee)?;
        let arguments = call
            .arguments
            .iter()
            .map(|argument| self.bind_expr(argument))
            .collect::<Result<Vec<_>, _>>()?;

        let ty = match (call.callee.as_ref(), &callee.ty) {
            (Expr::Symbol(_) | Expr::Access(_), Type::Function(function)) => {
                function.return_type.as_ref().clone()
            }
            (Expr::Symbol(_) | Expr::Access(_), ty) if ty.is_any() => Type::any(),
            _ => {
                return Err(Error::new(
                    ErrorImpl::NotCallable {
                        received: callee.ty.widened().to_string(),
                    },
                    callee.span.start.clone(),
                ))
            }
        };

        let kind = BoundExprKind::Call {
            callee: Box::new(callee),
            arguments,
        };
        Ok((kind, ty))
    }

    fn bind_new(&mut self, new: &NewExpr) -> Result<Bound, Error> {
        let (found, _) = self.find_symbol(&new.class.value, new.class.id, &new.class.span.start)?;
        let class = match found.ty {
            Type::Class(class) => class,
            other => {
                return Err(Error::new(
                    ErrorImpl::NotConstructable {
                        received: other.widened().to_string(),
                    },
                    new.class.span.start.clone(),
                ))
            }
        };
        self.bound_types
            .insert(new.class.id, Type::Class(class.clone()));

        let arguments = new
            .arguments
            .iter()
            .map(|argument| self.bind_expr(argument))
            .collect::<Result<Vec<_>, _>>()?;

        let ty = Type::Class(class.clone());
        Ok((BoundExprKind::New { class, arguments }, ty))
    }
}

/// Element type of a `for` loop over `iterable`.
fn iteration_type(iterable: &Type) -> Type {
    let iterable = iterable.widened();
    if let Some(element) = iterable.element_type() {
        element
    } else if iterable.is_named("Range") {
        Type::int()
    } else {
        Type::any()
    }
}

fn describe_key(key: &AccessKey) -> String {
    match key {
        AccessKey::Name(name, _) => name.clone(),
        AccessKey::Computed(key) => match key.as_ref() {
            Expr::Literal(literal) => format!("[{}]", Type::literal(literal.value.clone())),
            _ => String::from("[index]"),
        },
    }
}

fn operator_error(operator: &Token, operands: &[&Type]) -> Error {
    let operands = operands
        .iter()
        .map(|operand| operand.widened().to_string())
        .collect::<Vec<_>>()
        .join(", ");

    Error::new(
        ErrorImpl::OperatorTypeMatchError {
            operator: operator.kind.symbol().to_string(),
            operands,
        },
        operator.span.start.clone(),
    )
}
