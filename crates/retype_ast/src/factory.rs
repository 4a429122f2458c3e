//! The node factory.
//!
//! [`NodeFactory`] is the only way to create an [`Identifier`], and it
//! interns them: the first request for a given text allocates the node, every
//! later request returns that same reference. The cache lives as long as the
//! factory and is shared by every parse that uses it.

use crate::flags::ModifierFlags;
use crate::node::*;
use bumpalo::Bump;
use retype_core::intern::{StringInterner, Symbol};
use rustc_hash::FxHashMap;
use std::cell::RefCell;

/// Builds AST nodes in an arena.
///
/// The identifier cache sits behind a `RefCell`, so a factory is confined to
/// one thread.
pub struct NodeFactory<'a> {
    arena: &'a Bump,
    interner: StringInterner,
    identifiers: RefCell<FxHashMap<Symbol, &'a Identifier<'a>>>,
}

impl<'a> NodeFactory<'a> {
    pub fn new(arena: &'a Bump) -> Self {
        Self {
            arena,
            interner: StringInterner::new(),
            identifiers: RefCell::new(FxHashMap::default()),
        }
    }

    #[inline]
    pub fn arena(&self) -> &'a Bump {
        self.arena
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    /// Number of distinct identifiers created so far.
    pub fn identifier_count(&self) -> usize {
        self.identifiers.borrow().len()
    }

    #[inline]
    pub fn alloc<T>(&self, value: T) -> &'a T {
        self.arena.alloc(value)
    }

    /// Move a vector into the arena.
    #[inline]
    pub fn list<T>(&self, items: Vec<T>) -> NodeList<'a, T> {
        self.arena.alloc_slice_fill_iter(items)
    }

    #[inline]
    pub fn alloc_str(&self, text: &str) -> &'a str {
        self.arena.alloc_str(text)
    }

    // ========================================================================
    // Identifiers and names
    // ========================================================================

    /// The identifier node for `text`, created on first use.
    pub fn identifier(&self, text: &str) -> &'a Identifier<'a> {
        let symbol = self.interner.intern(text);
        if let Some(existing) = self.identifiers.borrow().get(&symbol).copied() {
            return existing;
        }
        let node: &'a Identifier<'a> = self
            .arena
            .alloc(Identifier::new(symbol, self.arena.alloc_str(text)));
        self.identifiers.borrow_mut().insert(symbol, node);
        node
    }

    pub fn qualified_name(
        &self,
        prefix: Vec<&'a Identifier<'a>>,
        name: &'a Identifier<'a>,
    ) -> &'a QualifiedName<'a> {
        self.alloc(QualifiedName {
            prefix: self.list(prefix),
            name,
        })
    }

    pub fn identifier_property_name(&self, name: &'a Identifier<'a>) -> PropertyName<'a> {
        PropertyName::Identifier(name)
    }

    pub fn string_property_name(&self, value: &str) -> PropertyName<'a> {
        PropertyName::StringLiteral(self.alloc_str(value))
    }

    pub fn numeric_property_name(&self, value: f64) -> PropertyName<'a> {
        PropertyName::NumericLiteral(value)
    }

    pub fn computed_property_name(&self, expression: Expression<'a>) -> PropertyName<'a> {
        PropertyName::Computed(self.alloc(expression))
    }

    // ========================================================================
    // Types
    // ========================================================================

    pub fn predefined_type(&self, predefined: PredefinedType) -> TypeNode<'a> {
        TypeNode::Predefined(predefined)
    }

    pub fn type_reference(
        &self,
        name: &'a QualifiedName<'a>,
        type_arguments: Vec<TypeNode<'a>>,
    ) -> &'a TypeReference<'a> {
        self.alloc(TypeReference {
            name,
            type_arguments: self.list(type_arguments),
        })
    }

    pub fn type_reference_node(&self, reference: &'a TypeReference<'a>) -> TypeNode<'a> {
        TypeNode::TypeReference(reference)
    }

    pub fn type_query(&self, name: &'a QualifiedName<'a>) -> TypeNode<'a> {
        TypeNode::TypeQuery(name)
    }

    pub fn object_type(&self, members: Vec<TypeMember<'a>>) -> &'a ObjectType<'a> {
        self.alloc(ObjectType {
            members: self.list(members),
        })
    }

    pub fn object_type_node(&self, object: &'a ObjectType<'a>) -> TypeNode<'a> {
        TypeNode::ObjectType(object)
    }

    pub fn array_type(&self, element: TypeNode<'a>) -> TypeNode<'a> {
        TypeNode::ArrayType(self.alloc(element))
    }

    pub fn tuple_type(&self, elements: Vec<TypeNode<'a>>) -> TypeNode<'a> {
        TypeNode::TupleType(self.list(elements))
    }

    pub fn function_type(
        &self,
        type_parameters: Vec<TypeParameter<'a>>,
        parameters: ParameterList<'a>,
        return_type: TypeNode<'a>,
    ) -> TypeNode<'a> {
        TypeNode::FunctionType(self.alloc(FunctionType {
            type_parameters: self.list(type_parameters),
            parameters,
            return_type,
        }))
    }

    pub fn constructor_type(
        &self,
        type_parameters: Vec<TypeParameter<'a>>,
        parameters: ParameterList<'a>,
        return_type: TypeNode<'a>,
    ) -> TypeNode<'a> {
        TypeNode::ConstructorType(self.alloc(FunctionType {
            type_parameters: self.list(type_parameters),
            parameters,
            return_type,
        }))
    }

    pub fn union_type(&self, left: TypeNode<'a>, right: TypeNode<'a>) -> TypeNode<'a> {
        TypeNode::UnionType(self.alloc(BinaryType { left, right }))
    }

    pub fn intersection_type(&self, left: TypeNode<'a>, right: TypeNode<'a>) -> TypeNode<'a> {
        TypeNode::IntersectionType(self.alloc(BinaryType { left, right }))
    }

    pub fn parenthesized_type(&self, inner: TypeNode<'a>) -> TypeNode<'a> {
        TypeNode::ParenthesizedType(self.alloc(inner))
    }

    pub fn this_type(&self) -> TypeNode<'a> {
        TypeNode::ThisType
    }

    pub fn type_parameter(
        &self,
        name: &'a Identifier<'a>,
        constraint: Option<TypeNode<'a>>,
    ) -> TypeParameter<'a> {
        TypeParameter { name, constraint }
    }

    pub fn call_signature(
        &self,
        type_parameters: Vec<TypeParameter<'a>>,
        parameters: ParameterList<'a>,
        return_type: Option<TypeNode<'a>>,
    ) -> CallSignature<'a> {
        CallSignature {
            type_parameters: self.list(type_parameters),
            parameters,
            return_type,
        }
    }

    pub fn property_signature(
        &self,
        name: PropertyName<'a>,
        optional: bool,
        type_annotation: Option<TypeNode<'a>>,
    ) -> TypeMember<'a> {
        TypeMember::Property(self.alloc(PropertySignature {
            name,
            optional,
            type_annotation,
        }))
    }

    pub fn method_signature(
        &self,
        name: PropertyName<'a>,
        optional: bool,
        signature: CallSignature<'a>,
    ) -> TypeMember<'a> {
        TypeMember::Method(self.alloc(MethodSignature {
            name,
            optional,
            signature,
        }))
    }

    pub fn call_signature_member(&self, signature: CallSignature<'a>) -> TypeMember<'a> {
        TypeMember::CallSignature(self.alloc(signature))
    }

    pub fn construct_signature_member(&self, signature: CallSignature<'a>) -> TypeMember<'a> {
        TypeMember::ConstructSignature(self.alloc(signature))
    }

    pub fn index_signature(
        &self,
        parameter: &'a Identifier<'a>,
        key_type: TypeNode<'a>,
        type_annotation: TypeNode<'a>,
    ) -> &'a IndexSignature<'a> {
        self.alloc(IndexSignature {
            parameter,
            key_type,
            type_annotation,
        })
    }

    // ========================================================================
    // Parameters
    // ========================================================================

    pub fn parameter_list(
        &self,
        required: Vec<RequiredParameter<'a>>,
        optional: Vec<OptionalParameter<'a>>,
        rest: Option<RestParameter<'a>>,
    ) -> ParameterList<'a> {
        ParameterList {
            required: self.list(required),
            optional: self.list(optional),
            rest: rest.map(|r| self.alloc(r)),
        }
    }

    pub fn binding_parameter(
        &self,
        accessibility: Option<Accessibility>,
        binding: BindingPattern<'a>,
        type_annotation: Option<TypeNode<'a>>,
    ) -> RequiredParameter<'a> {
        RequiredParameter::Binding(self.alloc(BindingParameter {
            accessibility,
            binding,
            type_annotation,
        }))
    }

    pub fn string_literal_parameter(
        &self,
        accessibility: Option<Accessibility>,
        name: &'a Identifier<'a>,
        literal: &str,
    ) -> RequiredParameter<'a> {
        RequiredParameter::StringLiteral(self.alloc(StringLiteralParameter {
            accessibility,
            name,
            literal: self.alloc_str(literal),
        }))
    }

    pub fn optional_parameter(
        &self,
        accessibility: Option<Accessibility>,
        binding: BindingPattern<'a>,
        question: bool,
        type_annotation: Option<TypeNode<'a>>,
        initializer: Option<Expression<'a>>,
    ) -> OptionalParameter<'a> {
        debug_assert!(question != initializer.is_some());
        OptionalParameter {
            accessibility,
            binding,
            question,
            type_annotation,
            initializer,
        }
    }

    pub fn rest_parameter(
        &self,
        name: &'a Identifier<'a>,
        type_annotation: Option<TypeNode<'a>>,
    ) -> RestParameter<'a> {
        RestParameter {
            name,
            type_annotation,
        }
    }

    // ========================================================================
    // Binding patterns
    // ========================================================================

    pub fn identifier_pattern(&self, name: &'a Identifier<'a>) -> BindingPattern<'a> {
        BindingPattern::Identifier(name)
    }

    pub fn object_pattern(&self, properties: Vec<BindingProperty<'a>>) -> BindingPattern<'a> {
        BindingPattern::Object(self.alloc(ObjectBindingPattern {
            properties: self.list(properties),
        }))
    }

    pub fn array_pattern(
        &self,
        elements: Vec<ArrayBindingElement<'a>>,
        rest: Option<&'a Identifier<'a>>,
    ) -> BindingPattern<'a> {
        BindingPattern::Array(self.alloc(ArrayBindingPattern {
            elements: self.list(elements),
            rest,
        }))
    }

    pub fn shorthand_binding(
        &self,
        name: &'a Identifier<'a>,
        initializer: Option<Expression<'a>>,
    ) -> BindingProperty<'a> {
        BindingProperty::Shorthand { name, initializer }
    }

    pub fn remapped_binding(
        &self,
        key: PropertyName<'a>,
        binding: BindingPattern<'a>,
        initializer: Option<Expression<'a>>,
    ) -> BindingProperty<'a> {
        BindingProperty::Remapped {
            key,
            binding,
            initializer,
        }
    }

    pub fn binding_element(
        &self,
        binding: BindingPattern<'a>,
        initializer: Option<Expression<'a>>,
    ) -> ArrayBindingElement<'a> {
        ArrayBindingElement::Element {
            binding,
            initializer,
        }
    }

    pub fn elided_binding(&self) -> ArrayBindingElement<'a> {
        ArrayBindingElement::Elided
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    pub fn this_expression(&self) -> Expression<'a> {
        Expression::This
    }

    pub fn super_expression(&self) -> Expression<'a> {
        Expression::Super
    }

    pub fn identifier_expression(&self, name: &'a Identifier<'a>) -> Expression<'a> {
        Expression::Identifier(name)
    }

    pub fn null_literal(&self) -> Expression<'a> {
        Expression::Literal(Literal::Null)
    }

    pub fn boolean_literal(&self, value: bool) -> Expression<'a> {
        Expression::Literal(Literal::Boolean(value))
    }

    pub fn numeric_literal(&self, value: f64) -> Expression<'a> {
        Expression::Literal(Literal::Number(value))
    }

    pub fn string_literal(&self, value: &str) -> Expression<'a> {
        Expression::Literal(Literal::String(self.alloc_str(value)))
    }

    pub fn regular_expression_literal(&self, pattern: &str, flags: &str) -> Expression<'a> {
        Expression::Literal(Literal::RegularExpression(self.alloc(
            RegularExpressionLiteral {
                pattern: self.alloc_str(pattern),
                flags: self.alloc_str(flags),
            },
        )))
    }

    pub fn template_span(&self, expression: Expression<'a>, literal: &str) -> TemplateSpan<'a> {
        TemplateSpan {
            expression,
            literal: self.alloc_str(literal),
        }
    }

    pub fn template_literal(
        &self,
        head: &str,
        spans: Vec<TemplateSpan<'a>>,
    ) -> &'a TemplateLiteral<'a> {
        self.alloc(TemplateLiteral {
            head: self.alloc_str(head),
            spans: self.list(spans),
        })
    }

    pub fn template_expression(&self, template: &'a TemplateLiteral<'a>) -> Expression<'a> {
        Expression::Template(template)
    }

    pub fn tagged_template(
        &self,
        tag: Expression<'a>,
        template: &'a TemplateLiteral<'a>,
    ) -> Expression<'a> {
        Expression::TaggedTemplate(self.alloc(TaggedTemplateExpression { tag, template }))
    }

    pub fn array_literal(&self, elements: Vec<ArrayElement<'a>>) -> Expression<'a> {
        Expression::ArrayLiteral(self.alloc(ArrayLiteral {
            elements: self.list(elements),
        }))
    }

    pub fn object_literal(&self, members: Vec<ObjectMember<'a>>) -> Expression<'a> {
        Expression::ObjectLiteral(self.alloc(ObjectLiteral {
            members: self.list(members),
        }))
    }

    pub fn property_assignment(
        &self,
        name: PropertyName<'a>,
        value: Expression<'a>,
    ) -> ObjectMember<'a> {
        ObjectMember::Property { name, value }
    }

    pub fn shorthand_property(&self, name: &'a Identifier<'a>) -> ObjectMember<'a> {
        ObjectMember::Shorthand(name)
    }

    pub fn method_definition(
        &self,
        name: PropertyName<'a>,
        generator: bool,
        signature: CallSignature<'a>,
        body: FunctionBody<'a>,
    ) -> &'a MethodDefinition<'a> {
        self.alloc(MethodDefinition {
            name,
            generator,
            signature,
            body,
        })
    }

    pub fn get_accessor(
        &self,
        name: PropertyName<'a>,
        return_type: Option<TypeNode<'a>>,
        body: FunctionBody<'a>,
    ) -> &'a GetAccessor<'a> {
        self.alloc(GetAccessor {
            name,
            return_type,
            body,
        })
    }

    pub fn set_accessor(
        &self,
        name: PropertyName<'a>,
        parameter: RequiredParameter<'a>,
        body: FunctionBody<'a>,
    ) -> &'a SetAccessor<'a> {
        self.alloc(SetAccessor {
            name,
            parameter,
            body,
        })
    }

    pub fn function_expression(
        &self,
        name: Option<&'a Identifier<'a>>,
        generator: bool,
        signature: CallSignature<'a>,
        body: FunctionBody<'a>,
    ) -> Expression<'a> {
        Expression::Function(self.alloc(FunctionExpression {
            name,
            generator,
            signature,
            body,
        }))
    }

    pub fn class_expression(&self, class: &'a ClassDefinition<'a>) -> Expression<'a> {
        Expression::Class(class)
    }

    pub fn arrow_function(
        &self,
        signature: CallSignature<'a>,
        body: ArrowFunctionBody<'a>,
    ) -> Expression<'a> {
        Expression::Arrow(self.alloc(ArrowFunction { signature, body }))
    }

    pub fn parenthesized(&self, expression: Expression<'a>) -> Expression<'a> {
        Expression::Parenthesized(self.alloc(expression))
    }

    pub fn property_access(
        &self,
        expression: Expression<'a>,
        name: &'a Identifier<'a>,
    ) -> Expression<'a> {
        Expression::PropertyAccess(self.alloc(PropertyAccessExpression { expression, name }))
    }

    pub fn element_access(
        &self,
        expression: Expression<'a>,
        argument: Expression<'a>,
    ) -> Expression<'a> {
        Expression::ElementAccess(self.alloc(ElementAccessExpression {
            expression,
            argument,
        }))
    }

    pub fn call(
        &self,
        expression: Expression<'a>,
        type_arguments: Vec<TypeNode<'a>>,
        arguments: Vec<Argument<'a>>,
    ) -> Expression<'a> {
        Expression::Call(self.alloc(CallExpression {
            expression,
            type_arguments: self.list(type_arguments),
            arguments: self.list(arguments),
        }))
    }

    pub fn new_expression(
        &self,
        expression: Expression<'a>,
        type_arguments: Vec<TypeNode<'a>>,
        arguments: Option<Vec<Argument<'a>>>,
    ) -> Expression<'a> {
        Expression::New(self.alloc(NewExpression {
            expression,
            type_arguments: self.list(type_arguments),
            arguments: arguments.map(|args| self.list(args)),
        }))
    }

    pub fn unary(&self, operator: UnaryOperator, operand: Expression<'a>) -> Expression<'a> {
        Expression::Unary(self.alloc(UnaryExpression { operator, operand }))
    }

    pub fn update(
        &self,
        operator: UpdateOperator,
        prefix: bool,
        operand: Expression<'a>,
    ) -> Expression<'a> {
        Expression::Update(self.alloc(UpdateExpression {
            operator,
            prefix,
            operand,
        }))
    }

    pub fn binary(
        &self,
        left: Expression<'a>,
        operator: BinaryOperator,
        right: Expression<'a>,
    ) -> Expression<'a> {
        Expression::Binary(self.alloc(BinaryExpression {
            left,
            operator,
            right,
        }))
    }

    pub fn assignment(
        &self,
        target: Expression<'a>,
        operator: AssignmentOperator,
        value: Expression<'a>,
    ) -> Expression<'a> {
        Expression::Assignment(self.alloc(AssignmentExpression {
            target,
            operator,
            value,
        }))
    }

    pub fn conditional(
        &self,
        condition: Expression<'a>,
        when_true: Expression<'a>,
        when_false: Expression<'a>,
    ) -> Expression<'a> {
        Expression::Conditional(self.alloc(ConditionalExpression {
            condition,
            when_true,
            when_false,
        }))
    }

    pub fn sequence(&self, expressions: Vec<Expression<'a>>) -> Expression<'a> {
        Expression::Sequence(self.list(expressions))
    }

    pub fn yield_expression(
        &self,
        delegate: bool,
        argument: Option<Expression<'a>>,
    ) -> Expression<'a> {
        Expression::Yield(self.alloc(YieldExpression { delegate, argument }))
    }

    pub fn type_assertion(
        &self,
        type_node: TypeNode<'a>,
        expression: Expression<'a>,
    ) -> Expression<'a> {
        Expression::TypeAssertion(self.alloc(TypeAssertion {
            type_node,
            expression,
        }))
    }

    pub fn as_expression(
        &self,
        expression: Expression<'a>,
        type_node: TypeNode<'a>,
    ) -> Expression<'a> {
        Expression::As(self.alloc(TypeAssertion {
            type_node,
            expression,
        }))
    }

    // ========================================================================
    // Statements
    // ========================================================================

    pub fn block(&self, statements: Vec<Statement<'a>>) -> Statement<'a> {
        Statement::Block(self.list(statements))
    }

    pub fn variable_statement(
        &self,
        kind: VariableKind,
        declarations: Vec<VariableDeclaration<'a>>,
    ) -> &'a VariableStatement<'a> {
        self.alloc(VariableStatement {
            kind,
            declarations: self.list(declarations),
        })
    }

    pub fn simple_declaration(
        &self,
        name: &'a Identifier<'a>,
        type_annotation: Option<TypeNode<'a>>,
        initializer: Option<Expression<'a>>,
    ) -> VariableDeclaration<'a> {
        VariableDeclaration::Simple(self.alloc(SimpleVariableDeclaration {
            name,
            type_annotation,
            initializer,
        }))
    }

    pub fn destructuring_declaration(
        &self,
        pattern: BindingPattern<'a>,
        type_annotation: Option<TypeNode<'a>>,
        initializer: Expression<'a>,
    ) -> VariableDeclaration<'a> {
        debug_assert!(pattern.is_destructuring());
        VariableDeclaration::Destructuring(self.alloc(DestructuringVariableDeclaration {
            pattern,
            type_annotation,
            initializer,
        }))
    }

    pub fn variable(&self, statement: &'a VariableStatement<'a>) -> Statement<'a> {
        Statement::Variable(statement)
    }

    pub fn empty_statement(&self) -> Statement<'a> {
        Statement::Empty
    }

    pub fn expression_statement(&self, expression: Expression<'a>) -> Statement<'a> {
        Statement::Expression(expression)
    }

    pub fn if_statement(
        &self,
        condition: Expression<'a>,
        then_statement: Statement<'a>,
        else_statement: Option<Statement<'a>>,
    ) -> Statement<'a> {
        Statement::If(self.alloc(IfStatement {
            condition,
            then_statement,
            else_statement,
        }))
    }

    pub fn do_while_statement(&self, body: Statement<'a>, condition: Expression<'a>) -> Statement<'a> {
        Statement::DoWhile(self.alloc(DoWhileStatement { body, condition }))
    }

    pub fn while_statement(&self, condition: Expression<'a>, body: Statement<'a>) -> Statement<'a> {
        Statement::While(self.alloc(WhileStatement { condition, body }))
    }

    pub fn for_statement(
        &self,
        initializer: Option<ForInitializer<'a>>,
        condition: Option<Expression<'a>>,
        incrementor: Option<Expression<'a>>,
        body: Statement<'a>,
    ) -> Statement<'a> {
        Statement::For(self.alloc(ForStatement {
            initializer,
            condition,
            incrementor,
            body,
        }))
    }

    pub fn for_in_statement(
        &self,
        binding: ForBinding<'a>,
        expression: Expression<'a>,
        body: Statement<'a>,
    ) -> Statement<'a> {
        Statement::ForIn(self.alloc(ForEachStatement {
            binding,
            expression,
            body,
        }))
    }

    pub fn for_of_statement(
        &self,
        binding: ForBinding<'a>,
        expression: Expression<'a>,
        body: Statement<'a>,
    ) -> Statement<'a> {
        Statement::ForOf(self.alloc(ForEachStatement {
            binding,
            expression,
            body,
        }))
    }

    pub fn continue_statement(&self, label: Option<&'a Identifier<'a>>) -> Statement<'a> {
        Statement::Continue(label)
    }

    pub fn break_statement(&self, label: Option<&'a Identifier<'a>>) -> Statement<'a> {
        Statement::Break(label)
    }

    pub fn return_statement(&self, expression: Option<Expression<'a>>) -> Statement<'a> {
        Statement::Return(expression)
    }

    pub fn with_statement(&self, object: Expression<'a>, body: Statement<'a>) -> Statement<'a> {
        Statement::With(self.alloc(WithStatement { object, body }))
    }

    pub fn switch_clause(
        &self,
        test: Option<Expression<'a>>,
        statements: Vec<Statement<'a>>,
    ) -> SwitchClause<'a> {
        SwitchClause {
            test,
            statements: self.list(statements),
        }
    }

    pub fn switch_statement(
        &self,
        discriminant: Expression<'a>,
        clauses: Vec<SwitchClause<'a>>,
    ) -> Statement<'a> {
        Statement::Switch(self.alloc(SwitchStatement {
            discriminant,
            clauses: self.list(clauses),
        }))
    }

    pub fn labeled_statement(&self, label: &'a Identifier<'a>, body: Statement<'a>) -> Statement<'a> {
        Statement::Labeled(self.alloc(LabeledStatement { label, body }))
    }

    pub fn throw_statement(&self, expression: Expression<'a>) -> Statement<'a> {
        Statement::Throw(expression)
    }

    pub fn catch_clause(
        &self,
        parameter: Option<BindingPattern<'a>>,
        block: Vec<Statement<'a>>,
    ) -> CatchClause<'a> {
        CatchClause {
            parameter,
            block: self.list(block),
        }
    }

    pub fn try_statement(
        &self,
        block: Vec<Statement<'a>>,
        catch_clause: Option<CatchClause<'a>>,
        finally_block: Option<Vec<Statement<'a>>>,
    ) -> Statement<'a> {
        Statement::Try(self.alloc(TryStatement {
            block: self.list(block),
            catch_clause,
            finally_block: finally_block.map(|b| self.list(b)),
        }))
    }

    pub fn debugger_statement(&self) -> Statement<'a> {
        Statement::Debugger
    }

    pub fn declaration_statement(&self, declaration: Declaration<'a>) -> Statement<'a> {
        Statement::Declaration(declaration)
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    pub fn function_declaration(
        &self,
        name: &'a Identifier<'a>,
        generator: bool,
        signature: CallSignature<'a>,
        body: FunctionBody<'a>,
    ) -> Declaration<'a> {
        Declaration::Function(self.alloc(FunctionDeclaration {
            name,
            generator,
            signature,
            body,
        }))
    }

    pub fn class_heritage(
        &self,
        expression: Expression<'a>,
        type_arguments: Vec<TypeNode<'a>>,
    ) -> ClassHeritage<'a> {
        ClassHeritage {
            expression,
            type_arguments: self.list(type_arguments),
        }
    }

    pub fn class_definition(
        &self,
        name: Option<&'a Identifier<'a>>,
        type_parameters: Vec<TypeParameter<'a>>,
        heritage: Option<ClassHeritage<'a>>,
        implements: Vec<&'a TypeReference<'a>>,
        members: Vec<ClassMember<'a>>,
    ) -> &'a ClassDefinition<'a> {
        self.alloc(ClassDefinition {
            name,
            type_parameters: self.list(type_parameters),
            heritage,
            implements: self.list(implements),
            members: self.list(members),
        })
    }

    pub fn class_declaration(&self, class: &'a ClassDefinition<'a>) -> Declaration<'a> {
        debug_assert!(class.name.is_some());
        Declaration::Class(class)
    }

    pub fn constructor_member(
        &self,
        modifiers: ModifierFlags,
        parameters: ParameterList<'a>,
        body: FunctionBody<'a>,
    ) -> ClassMember<'a> {
        ClassMember::Constructor(self.alloc(ConstructorDeclaration {
            modifiers,
            parameters,
            body,
        }))
    }

    pub fn method_member(
        &self,
        modifiers: ModifierFlags,
        method: &'a MethodDefinition<'a>,
    ) -> ClassMember<'a> {
        ClassMember::Method { modifiers, method }
    }

    pub fn property_member(
        &self,
        modifiers: ModifierFlags,
        name: PropertyName<'a>,
        optional: bool,
        type_annotation: Option<TypeNode<'a>>,
        initializer: Option<Expression<'a>>,
    ) -> ClassMember<'a> {
        ClassMember::Property(self.alloc(PropertyDeclaration {
            modifiers,
            name,
            optional,
            type_annotation,
            initializer,
        }))
    }

    pub fn get_accessor_member(
        &self,
        modifiers: ModifierFlags,
        accessor: &'a GetAccessor<'a>,
    ) -> ClassMember<'a> {
        ClassMember::GetAccessor { modifiers, accessor }
    }

    pub fn set_accessor_member(
        &self,
        modifiers: ModifierFlags,
        accessor: &'a SetAccessor<'a>,
    ) -> ClassMember<'a> {
        ClassMember::SetAccessor { modifiers, accessor }
    }

    pub fn interface_declaration(
        &self,
        name: &'a Identifier<'a>,
        type_parameters: Vec<TypeParameter<'a>>,
        extends: Vec<&'a TypeReference<'a>>,
        body: &'a ObjectType<'a>,
    ) -> Declaration<'a> {
        Declaration::Interface(self.alloc(InterfaceDeclaration {
            name,
            type_parameters: self.list(type_parameters),
            extends: self.list(extends),
            body,
        }))
    }

    pub fn type_alias_declaration(
        &self,
        name: &'a Identifier<'a>,
        type_parameters: Vec<TypeParameter<'a>>,
        type_node: TypeNode<'a>,
    ) -> Declaration<'a> {
        Declaration::TypeAlias(self.alloc(TypeAliasDeclaration {
            name,
            type_parameters: self.list(type_parameters),
            type_node,
        }))
    }

    pub fn enum_member(
        &self,
        name: PropertyName<'a>,
        initializer: Option<Expression<'a>>,
    ) -> EnumMember<'a> {
        EnumMember { name, initializer }
    }

    pub fn enum_declaration(
        &self,
        name: &'a Identifier<'a>,
        is_const: bool,
        members: Vec<EnumMember<'a>>,
    ) -> Declaration<'a> {
        Declaration::Enum(self.alloc(EnumDeclaration {
            name,
            is_const,
            members: self.list(members),
        }))
    }

    // ========================================================================
    // Modules
    // ========================================================================

    pub fn program(&self, items: Vec<ModuleItem<'a>>, strict: bool) -> &'a Program<'a> {
        self.alloc(Program {
            items: self.list(items),
            strict,
        })
    }

    pub fn statement_item(&self, statement: Statement<'a>) -> ModuleItem<'a> {
        ModuleItem::Statement(statement)
    }

    pub fn import_specifier(
        &self,
        imported: &'a Identifier<'a>,
        local: &'a Identifier<'a>,
    ) -> ImportSpecifier<'a> {
        ImportSpecifier { imported, local }
    }

    pub fn import_declaration(
        &self,
        default_binding: Option<&'a Identifier<'a>>,
        namespace_binding: Option<&'a Identifier<'a>>,
        named_bindings: Vec<ImportSpecifier<'a>>,
        module_specifier: &str,
    ) -> ModuleItem<'a> {
        ModuleItem::Import(self.alloc(ImportDeclaration {
            default_binding,
            namespace_binding,
            named_bindings: self.list(named_bindings),
            module_specifier: self.alloc_str(module_specifier),
        }))
    }

    pub fn export_specifier(
        &self,
        local: &'a Identifier<'a>,
        exported: &'a Identifier<'a>,
    ) -> ExportSpecifier<'a> {
        ExportSpecifier { local, exported }
    }

    pub fn export_named(
        &self,
        specifiers: Vec<ExportSpecifier<'a>>,
        module_specifier: Option<&str>,
    ) -> ModuleItem<'a> {
        ModuleItem::Export(ExportDeclaration::Named(self.alloc(NamedExports {
            specifiers: self.list(specifiers),
            module_specifier: module_specifier.map(|m| self.alloc_str(m)),
        })))
    }

    pub fn export_all(&self, module_specifier: &str) -> ModuleItem<'a> {
        ModuleItem::Export(ExportDeclaration::All(self.alloc_str(module_specifier)))
    }

    pub fn export_default(&self, expression: Expression<'a>) -> ModuleItem<'a> {
        ModuleItem::Export(ExportDeclaration::Default(expression))
    }

    pub fn export_declaration(&self, declaration: Declaration<'a>) -> ModuleItem<'a> {
        ModuleItem::Export(ExportDeclaration::Declaration(declaration))
    }

    pub fn export_variable(&self, statement: &'a VariableStatement<'a>) -> ModuleItem<'a> {
        ModuleItem::Export(ExportDeclaration::Variable(statement))
    }
}

impl std::fmt::Debug for NodeFactory<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeFactory")
            .field("identifiers", &self.identifier_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_is_interned() {
        let arena = Bump::new();
        let factory = NodeFactory::new(&arena);
        let a = factory.identifier("value");
        let b = factory.identifier("value");
        let c = factory.identifier("other");

        assert!(std::ptr::eq(a, b));
        assert!(!std::ptr::eq(a, c));
        assert_eq!(a.text(), "value");
        assert_eq!(factory.identifier_count(), 2);
    }

    #[test]
    fn test_identifier_text_is_exact() {
        let arena = Bump::new();
        let factory = NodeFactory::new(&arena);
        let lower = factory.identifier("name");
        let upper = factory.identifier("Name");
        assert!(!std::ptr::eq(lower, upper));
    }

    #[test]
    fn test_qualified_name_parts() {
        let arena = Bump::new();
        let factory = NodeFactory::new(&arena);
        let a = factory.identifier("a");
        let b = factory.identifier("b");
        let c = factory.identifier("c");
        let name = factory.qualified_name(vec![a, b], c);
        let texts: Vec<_> = name.parts().map(|id| id.text()).collect();
        assert_eq!(texts, ["a", "b", "c"]);
    }

    #[test]
    fn test_union_shape() {
        let arena = Bump::new();
        let factory = NodeFactory::new(&arena);
        let number = factory.predefined_type(PredefinedType::Number);
        let string = factory.predefined_type(PredefinedType::String);
        match factory.union_type(number, string) {
            TypeNode::UnionType(union) => {
                assert_eq!(union.left, number);
                assert_eq!(union.right, string);
            }
            other => panic!("expected union, got {other:?}"),
        }
    }

    #[test]
    fn test_parameter_list_len() {
        let arena = Bump::new();
        let factory = NodeFactory::new(&arena);
        let a = factory.identifier_pattern(factory.identifier("a"));
        let b = factory.identifier_pattern(factory.identifier("b"));
        let list = factory.parameter_list(
            vec![factory.binding_parameter(None, a, None)],
            vec![factory.optional_parameter(None, b, true, None, None)],
            Some(factory.rest_parameter(factory.identifier("c"), None)),
        );
        assert_eq!(list.len(), 3);
        assert!(!list.is_empty());
        assert!(ParameterList::default().is_empty());
    }
}
