//! AST node definitions.
//!
//! Every node shape belongs to exactly one closed family: [`Expression`],
//! [`Statement`], [`Declaration`], [`TypeNode`] or [`BindingPattern`], plus
//! the supporting shapes they are built from. Nodes are immutable, live in a
//! `bumpalo` arena and reference their children by `&'a` reference.
//! Construct them through [`NodeFactory`](crate::factory::NodeFactory).

use crate::flags::ModifierFlags;
use retype_core::intern::Symbol;
use std::fmt;

/// A list of nodes, allocated in the arena.
pub type NodeList<'a, T> = &'a [T];

/// The statements of a function, method, accessor or arrow body.
pub type FunctionBody<'a> = NodeList<'a, Statement<'a>>;

// ============================================================================
// Identifiers and names
// ============================================================================

/// An identifier, interned by its exact text.
///
/// Only the factory can create one, and it hands out the same reference for
/// the same text, so `std::ptr::eq` is identifier identity.
#[derive(PartialEq, Eq, Hash)]
pub struct Identifier<'a> {
    symbol: Symbol,
    text: &'a str,
}

impl<'a> Identifier<'a> {
    pub(crate) fn new(symbol: Symbol, text: &'a str) -> Self {
        Self { symbol, text }
    }

    #[inline]
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    #[inline]
    pub fn text(&self) -> &'a str {
        self.text
    }
}

impl fmt::Debug for Identifier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identifier({:?})", self.text)
    }
}

/// `a.b.c`: the rightmost identifier plus the identifiers before it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualifiedName<'a> {
    pub prefix: NodeList<'a, &'a Identifier<'a>>,
    pub name: &'a Identifier<'a>,
}

impl<'a> QualifiedName<'a> {
    /// All parts, leftmost first.
    pub fn parts(&self) -> impl Iterator<Item = &'a Identifier<'a>> + '_ {
        self.prefix.iter().copied().chain(std::iter::once(self.name))
    }
}

/// The key of a property, member or enum member.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyName<'a> {
    Identifier(&'a Identifier<'a>),
    StringLiteral(&'a str),
    NumericLiteral(f64),
    Computed(&'a Expression<'a>),
}

// ============================================================================
// Type Nodes
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypeNode<'a> {
    Predefined(PredefinedType),
    TypeReference(&'a TypeReference<'a>),
    TypeQuery(&'a QualifiedName<'a>),
    ObjectType(&'a ObjectType<'a>),
    ArrayType(&'a TypeNode<'a>),
    TupleType(NodeList<'a, TypeNode<'a>>),
    FunctionType(&'a FunctionType<'a>),
    ConstructorType(&'a FunctionType<'a>),
    UnionType(&'a BinaryType<'a>),
    IntersectionType(&'a BinaryType<'a>),
    ParenthesizedType(&'a TypeNode<'a>),
    ThisType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredefinedType {
    Any,
    Number,
    Boolean,
    String,
    Symbol,
    Void,
}

impl PredefinedType {
    pub fn as_str(self) -> &'static str {
        match self {
            PredefinedType::Any => "any",
            PredefinedType::Number => "number",
            PredefinedType::Boolean => "boolean",
            PredefinedType::String => "string",
            PredefinedType::Symbol => "symbol",
            PredefinedType::Void => "void",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeReference<'a> {
    pub name: &'a QualifiedName<'a>,
    pub type_arguments: NodeList<'a, TypeNode<'a>>,
}

/// Shared by function types and constructor types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunctionType<'a> {
    pub type_parameters: NodeList<'a, TypeParameter<'a>>,
    pub parameters: ParameterList<'a>,
    pub return_type: TypeNode<'a>,
}

/// A union or intersection. Both associate to the right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryType<'a> {
    pub left: TypeNode<'a>,
    pub right: TypeNode<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectType<'a> {
    pub members: NodeList<'a, TypeMember<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypeMember<'a> {
    Property(&'a PropertySignature<'a>),
    Method(&'a MethodSignature<'a>),
    CallSignature(&'a CallSignature<'a>),
    ConstructSignature(&'a CallSignature<'a>),
    IndexSignature(&'a IndexSignature<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertySignature<'a> {
    pub name: PropertyName<'a>,
    pub optional: bool,
    pub type_annotation: Option<TypeNode<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MethodSignature<'a> {
    pub name: PropertyName<'a>,
    pub optional: bool,
    pub signature: CallSignature<'a>,
}

/// Type parameters, parameters and return type of anything callable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CallSignature<'a> {
    pub type_parameters: NodeList<'a, TypeParameter<'a>>,
    pub parameters: ParameterList<'a>,
    pub return_type: Option<TypeNode<'a>>,
}

/// `[key: string]: T`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexSignature<'a> {
    pub parameter: &'a Identifier<'a>,
    pub key_type: TypeNode<'a>,
    pub type_annotation: TypeNode<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeParameter<'a> {
    pub name: &'a Identifier<'a>,
    pub constraint: Option<TypeNode<'a>>,
}

// ============================================================================
// Parameters
// ============================================================================

/// A parameter list, split by shape. No required parameter follows an
/// optional one, and the rest parameter (if any) comes last.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParameterList<'a> {
    pub required: NodeList<'a, RequiredParameter<'a>>,
    pub optional: NodeList<'a, OptionalParameter<'a>>,
    pub rest: Option<&'a RestParameter<'a>>,
}

impl ParameterList<'_> {
    pub fn len(&self) -> usize {
        self.required.len() + self.optional.len() + usize::from(self.rest.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accessibility {
    Public,
    Private,
    Protected,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RequiredParameter<'a> {
    Binding(&'a BindingParameter<'a>),
    /// `name: "literal"`, a parameter restricted to one string value.
    StringLiteral(&'a StringLiteralParameter<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BindingParameter<'a> {
    pub accessibility: Option<Accessibility>,
    pub binding: BindingPattern<'a>,
    pub type_annotation: Option<TypeNode<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StringLiteralParameter<'a> {
    pub accessibility: Option<Accessibility>,
    pub name: &'a Identifier<'a>,
    pub literal: &'a str,
}

/// Exactly one of `question` and `initializer` is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionalParameter<'a> {
    pub accessibility: Option<Accessibility>,
    pub binding: BindingPattern<'a>,
    pub question: bool,
    pub type_annotation: Option<TypeNode<'a>>,
    pub initializer: Option<Expression<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestParameter<'a> {
    pub name: &'a Identifier<'a>,
    pub type_annotation: Option<TypeNode<'a>>,
}

// ============================================================================
// Binding Patterns
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BindingPattern<'a> {
    Identifier(&'a Identifier<'a>),
    Object(&'a ObjectBindingPattern<'a>),
    Array(&'a ArrayBindingPattern<'a>),
}

impl BindingPattern<'_> {
    pub fn is_destructuring(&self) -> bool {
        !matches!(self, BindingPattern::Identifier(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectBindingPattern<'a> {
    pub properties: NodeList<'a, BindingProperty<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BindingProperty<'a> {
    /// `name` or `name = init`
    Shorthand {
        name: &'a Identifier<'a>,
        initializer: Option<Expression<'a>>,
    },
    /// `key: pattern` or `key: pattern = init`
    Remapped {
        key: PropertyName<'a>,
        binding: BindingPattern<'a>,
        initializer: Option<Expression<'a>>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrayBindingPattern<'a> {
    pub elements: NodeList<'a, ArrayBindingElement<'a>>,
    pub rest: Option<&'a Identifier<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArrayBindingElement<'a> {
    Elided,
    Element {
        binding: BindingPattern<'a>,
        initializer: Option<Expression<'a>>,
    },
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expression<'a> {
    This,
    Super,
    Identifier(&'a Identifier<'a>),
    Literal(Literal<'a>),
    Template(&'a TemplateLiteral<'a>),
    TaggedTemplate(&'a TaggedTemplateExpression<'a>),
    ArrayLiteral(&'a ArrayLiteral<'a>),
    ObjectLiteral(&'a ObjectLiteral<'a>),
    Function(&'a FunctionExpression<'a>),
    Class(&'a ClassDefinition<'a>),
    Arrow(&'a ArrowFunction<'a>),
    Parenthesized(&'a Expression<'a>),
    PropertyAccess(&'a PropertyAccessExpression<'a>),
    ElementAccess(&'a ElementAccessExpression<'a>),
    Call(&'a CallExpression<'a>),
    New(&'a NewExpression<'a>),
    Unary(&'a UnaryExpression<'a>),
    Update(&'a UpdateExpression<'a>),
    Binary(&'a BinaryExpression<'a>),
    Assignment(&'a AssignmentExpression<'a>),
    Conditional(&'a ConditionalExpression<'a>),
    Sequence(NodeList<'a, Expression<'a>>),
    Yield(&'a YieldExpression<'a>),
    TypeAssertion(&'a TypeAssertion<'a>),
    As(&'a TypeAssertion<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal<'a> {
    Null,
    Boolean(bool),
    Number(f64),
    /// The decoded value.
    String(&'a str),
    RegularExpression(&'a RegularExpressionLiteral<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegularExpressionLiteral<'a> {
    pub pattern: &'a str,
    pub flags: &'a str,
}

/// `` `head${e}middle${e}tail` ``; strings are the cooked values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateLiteral<'a> {
    pub head: &'a str,
    pub spans: NodeList<'a, TemplateSpan<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateSpan<'a> {
    pub expression: Expression<'a>,
    pub literal: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaggedTemplateExpression<'a> {
    pub tag: Expression<'a>,
    pub template: &'a TemplateLiteral<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrayLiteral<'a> {
    pub elements: NodeList<'a, ArrayElement<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArrayElement<'a> {
    Elided,
    Expression(Expression<'a>),
    Spread(Expression<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectLiteral<'a> {
    pub members: NodeList<'a, ObjectMember<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObjectMember<'a> {
    Property {
        name: PropertyName<'a>,
        value: Expression<'a>,
    },
    Shorthand(&'a Identifier<'a>),
    Method(&'a MethodDefinition<'a>),
    GetAccessor(&'a GetAccessor<'a>),
    SetAccessor(&'a SetAccessor<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MethodDefinition<'a> {
    pub name: PropertyName<'a>,
    pub generator: bool,
    pub signature: CallSignature<'a>,
    pub body: FunctionBody<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GetAccessor<'a> {
    pub name: PropertyName<'a>,
    pub return_type: Option<TypeNode<'a>>,
    pub body: FunctionBody<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetAccessor<'a> {
    pub name: PropertyName<'a>,
    pub parameter: RequiredParameter<'a>,
    pub body: FunctionBody<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunctionExpression<'a> {
    pub name: Option<&'a Identifier<'a>>,
    pub generator: bool,
    pub signature: CallSignature<'a>,
    pub body: FunctionBody<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowFunction<'a> {
    pub signature: CallSignature<'a>,
    pub body: ArrowFunctionBody<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArrowFunctionBody<'a> {
    Block(FunctionBody<'a>),
    Expression(Expression<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyAccessExpression<'a> {
    pub expression: Expression<'a>,
    pub name: &'a Identifier<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementAccessExpression<'a> {
    pub expression: Expression<'a>,
    pub argument: Expression<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Argument<'a> {
    Expression(Expression<'a>),
    Spread(Expression<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallExpression<'a> {
    pub expression: Expression<'a>,
    pub type_arguments: NodeList<'a, TypeNode<'a>>,
    pub arguments: NodeList<'a, Argument<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewExpression<'a> {
    pub expression: Expression<'a>,
    pub type_arguments: NodeList<'a, TypeNode<'a>>,
    /// `None` for `new Foo` without parentheses.
    pub arguments: Option<NodeList<'a, Argument<'a>>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Delete,
    Void,
    TypeOf,
    Plus,
    Minus,
    BitwiseNot,
    LogicalNot,
}

impl UnaryOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOperator::Delete => "delete",
            UnaryOperator::Void => "void",
            UnaryOperator::TypeOf => "typeof",
            UnaryOperator::Plus => "+",
            UnaryOperator::Minus => "-",
            UnaryOperator::BitwiseNot => "~",
            UnaryOperator::LogicalNot => "!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnaryExpression<'a> {
    pub operator: UnaryOperator,
    pub operand: Expression<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateOperator {
    Increment,
    Decrement,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateExpression<'a> {
    pub operator: UpdateOperator,
    pub prefix: bool,
    pub operand: Expression<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    LogicalOr,
    LogicalAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Equal,
    NotEqual,
    StrictEqual,
    StrictNotEqual,
    LessThan,
    GreaterThan,
    LessThanOrEqual,
    GreaterThanOrEqual,
    InstanceOf,
    In,
    LeftShift,
    RightShift,
    UnsignedRightShift,
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
}

impl BinaryOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOperator::LogicalOr => "||",
            BinaryOperator::LogicalAnd => "&&",
            BinaryOperator::BitwiseOr => "|",
            BinaryOperator::BitwiseXor => "^",
            BinaryOperator::BitwiseAnd => "&",
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::StrictEqual => "===",
            BinaryOperator::StrictNotEqual => "!==",
            BinaryOperator::LessThan => "<",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::LessThanOrEqual => "<=",
            BinaryOperator::GreaterThanOrEqual => ">=",
            BinaryOperator::InstanceOf => "instanceof",
            BinaryOperator::In => "in",
            BinaryOperator::LeftShift => "<<",
            BinaryOperator::RightShift => ">>",
            BinaryOperator::UnsignedRightShift => ">>>",
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Remainder => "%",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryExpression<'a> {
    pub left: Expression<'a>,
    pub operator: BinaryOperator,
    pub right: Expression<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignmentOperator {
    Assign,
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    LeftShift,
    RightShift,
    UnsignedRightShift,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
}

impl AssignmentOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            AssignmentOperator::Assign => "=",
            AssignmentOperator::Add => "+=",
            AssignmentOperator::Subtract => "-=",
            AssignmentOperator::Multiply => "*=",
            AssignmentOperator::Divide => "/=",
            AssignmentOperator::Remainder => "%=",
            AssignmentOperator::LeftShift => "<<=",
            AssignmentOperator::RightShift => ">>=",
            AssignmentOperator::UnsignedRightShift => ">>>=",
            AssignmentOperator::BitwiseAnd => "&=",
            AssignmentOperator::BitwiseOr => "|=",
            AssignmentOperator::BitwiseXor => "^=",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssignmentExpression<'a> {
    pub target: Expression<'a>,
    pub operator: AssignmentOperator,
    pub value: Expression<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionalExpression<'a> {
    pub condition: Expression<'a>,
    pub when_true: Expression<'a>,
    pub when_false: Expression<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldExpression<'a> {
    pub delegate: bool,
    pub argument: Option<Expression<'a>>,
}

/// `<T>expr` or `expr as T`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeAssertion<'a> {
    pub type_node: TypeNode<'a>,
    pub expression: Expression<'a>,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Statement<'a> {
    Block(NodeList<'a, Statement<'a>>),
    Variable(&'a VariableStatement<'a>),
    Empty,
    Expression(Expression<'a>),
    If(&'a IfStatement<'a>),
    DoWhile(&'a DoWhileStatement<'a>),
    While(&'a WhileStatement<'a>),
    For(&'a ForStatement<'a>),
    ForIn(&'a ForEachStatement<'a>),
    ForOf(&'a ForEachStatement<'a>),
    Continue(Option<&'a Identifier<'a>>),
    Break(Option<&'a Identifier<'a>>),
    Return(Option<Expression<'a>>),
    With(&'a WithStatement<'a>),
    Switch(&'a SwitchStatement<'a>),
    Labeled(&'a LabeledStatement<'a>),
    Throw(Expression<'a>),
    Try(&'a TryStatement<'a>),
    Debugger,
    Declaration(Declaration<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

impl VariableKind {
    pub fn as_str(self) -> &'static str {
        match self {
            VariableKind::Var => "var",
            VariableKind::Let => "let",
            VariableKind::Const => "const",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariableStatement<'a> {
    pub kind: VariableKind,
    pub declarations: NodeList<'a, VariableDeclaration<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VariableDeclaration<'a> {
    Simple(&'a SimpleVariableDeclaration<'a>),
    Destructuring(&'a DestructuringVariableDeclaration<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpleVariableDeclaration<'a> {
    pub name: &'a Identifier<'a>,
    pub type_annotation: Option<TypeNode<'a>>,
    pub initializer: Option<Expression<'a>>,
}

/// An object or array pattern; the initializer is mandatory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DestructuringVariableDeclaration<'a> {
    pub pattern: BindingPattern<'a>,
    pub type_annotation: Option<TypeNode<'a>>,
    pub initializer: Expression<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IfStatement<'a> {
    pub condition: Expression<'a>,
    pub then_statement: Statement<'a>,
    pub else_statement: Option<Statement<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoWhileStatement<'a> {
    pub body: Statement<'a>,
    pub condition: Expression<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhileStatement<'a> {
    pub condition: Expression<'a>,
    pub body: Statement<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForStatement<'a> {
    pub initializer: Option<ForInitializer<'a>>,
    pub condition: Option<Expression<'a>>,
    pub incrementor: Option<Expression<'a>>,
    pub body: Statement<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ForInitializer<'a> {
    Variable(&'a VariableStatement<'a>),
    Expression(Expression<'a>),
}

/// The shape shared by `for (x in o)` and `for (x of o)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForEachStatement<'a> {
    pub binding: ForBinding<'a>,
    pub expression: Expression<'a>,
    pub body: Statement<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ForBinding<'a> {
    Variable {
        kind: VariableKind,
        binding: BindingPattern<'a>,
    },
    Expression(Expression<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WithStatement<'a> {
    pub object: Expression<'a>,
    pub body: Statement<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchStatement<'a> {
    pub discriminant: Expression<'a>,
    pub clauses: NodeList<'a, SwitchClause<'a>>,
}

/// A `case` clause, or the `default` clause when `test` is `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchClause<'a> {
    pub test: Option<Expression<'a>>,
    pub statements: NodeList<'a, Statement<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledStatement<'a> {
    pub label: &'a Identifier<'a>,
    pub body: Statement<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TryStatement<'a> {
    pub block: NodeList<'a, Statement<'a>>,
    pub catch_clause: Option<CatchClause<'a>>,
    pub finally_block: Option<NodeList<'a, Statement<'a>>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatchClause<'a> {
    pub parameter: Option<BindingPattern<'a>>,
    pub block: NodeList<'a, Statement<'a>>,
}

// ============================================================================
// Declarations
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Declaration<'a> {
    Function(&'a FunctionDeclaration<'a>),
    Class(&'a ClassDefinition<'a>),
    Interface(&'a InterfaceDeclaration<'a>),
    TypeAlias(&'a TypeAliasDeclaration<'a>),
    Enum(&'a EnumDeclaration<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunctionDeclaration<'a> {
    pub name: &'a Identifier<'a>,
    pub generator: bool,
    pub signature: CallSignature<'a>,
    pub body: FunctionBody<'a>,
}

/// A class declaration or class expression. Declarations always have a name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassDefinition<'a> {
    pub name: Option<&'a Identifier<'a>>,
    pub type_parameters: NodeList<'a, TypeParameter<'a>>,
    pub heritage: Option<ClassHeritage<'a>>,
    pub implements: NodeList<'a, &'a TypeReference<'a>>,
    pub members: NodeList<'a, ClassMember<'a>>,
}

/// `extends Base<T>`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassHeritage<'a> {
    pub expression: Expression<'a>,
    pub type_arguments: NodeList<'a, TypeNode<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClassMember<'a> {
    Constructor(&'a ConstructorDeclaration<'a>),
    Method {
        modifiers: ModifierFlags,
        method: &'a MethodDefinition<'a>,
    },
    Property(&'a PropertyDeclaration<'a>),
    GetAccessor {
        modifiers: ModifierFlags,
        accessor: &'a GetAccessor<'a>,
    },
    SetAccessor {
        modifiers: ModifierFlags,
        accessor: &'a SetAccessor<'a>,
    },
    IndexSignature(&'a IndexSignature<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstructorDeclaration<'a> {
    pub modifiers: ModifierFlags,
    pub parameters: ParameterList<'a>,
    pub body: FunctionBody<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyDeclaration<'a> {
    pub modifiers: ModifierFlags,
    pub name: PropertyName<'a>,
    pub optional: bool,
    pub type_annotation: Option<TypeNode<'a>>,
    pub initializer: Option<Expression<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterfaceDeclaration<'a> {
    pub name: &'a Identifier<'a>,
    pub type_parameters: NodeList<'a, TypeParameter<'a>>,
    pub extends: NodeList<'a, &'a TypeReference<'a>>,
    pub body: &'a ObjectType<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeAliasDeclaration<'a> {
    pub name: &'a Identifier<'a>,
    pub type_parameters: NodeList<'a, TypeParameter<'a>>,
    pub type_node: TypeNode<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnumDeclaration<'a> {
    pub name: &'a Identifier<'a>,
    pub is_const: bool,
    pub members: NodeList<'a, EnumMember<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnumMember<'a> {
    pub name: PropertyName<'a>,
    pub initializer: Option<Expression<'a>>,
}

// ============================================================================
// Modules
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Program<'a> {
    pub items: NodeList<'a, ModuleItem<'a>>,
    /// Whether the program body is strict mode code.
    pub strict: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModuleItem<'a> {
    Statement(Statement<'a>),
    Import(&'a ImportDeclaration<'a>),
    Export(ExportDeclaration<'a>),
}

/// `import d, * as ns from "m"`, `import { a as b } from "m"`, `import "m"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImportDeclaration<'a> {
    pub default_binding: Option<&'a Identifier<'a>>,
    pub namespace_binding: Option<&'a Identifier<'a>>,
    pub named_bindings: NodeList<'a, ImportSpecifier<'a>>,
    pub module_specifier: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImportSpecifier<'a> {
    pub imported: &'a Identifier<'a>,
    pub local: &'a Identifier<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExportDeclaration<'a> {
    Declaration(Declaration<'a>),
    Variable(&'a VariableStatement<'a>),
    Named(&'a NamedExports<'a>),
    /// `export * from "m"`
    All(&'a str),
    Default(Expression<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamedExports<'a> {
    pub specifiers: NodeList<'a, ExportSpecifier<'a>>,
    pub module_specifier: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportSpecifier<'a> {
    pub local: &'a Identifier<'a>,
    pub exported: &'a Identifier<'a>,
}
