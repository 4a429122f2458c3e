//! Signatures, parameters, binding patterns, function bodies and classes.

use crate::parser::{Context, Parser};
use crate::utilities::{accessibility, can_follow_modifier, is_property_name_start};
use retype_ast::{
    BindingPattern, BindingProperty, CallSignature, ClassDefinition, ClassMember, Declaration,
    Expression, FunctionBody, GetAccessor, IdentifierPosition, MethodDefinition, ModifierFlags,
    OptionalParameter, ParameterList, PropertyName, RequiredParameter, RestParameter,
    SetAccessor, TokenCode, TypeParameter,
};
use retype_diagnostics::{messages, Result};

/// One parsed parameter, before it is sorted into its list.
enum Parameter<'a> {
    Required(RequiredParameter<'a>),
    Optional(OptionalParameter<'a>),
    Rest(RestParameter<'a>),
}

impl<'a, 'f> Parser<'a, 'f> {
    // ========================================================================
    // Signatures and parameters
    // ========================================================================

    /// Optional type parameters, a parameter list and an optional return
    /// type annotation.
    pub(crate) fn parse_call_signature(&mut self) -> Result<CallSignature<'a>> {
        let type_parameters = self.parse_type_parameters()?;
        let parameters = self.parse_parameter_list()?;
        let return_type = self.parse_type_annotation()?;
        Ok(self
            .factory
            .call_signature(type_parameters, parameters, return_type))
    }

    /// `<T, U extends C>`, or nothing when no `<` follows.
    pub(crate) fn parse_type_parameters(&mut self) -> Result<Vec<TypeParameter<'a>>> {
        if !self.read_if(TokenCode::LessThanToken) {
            return Ok(Vec::new());
        }
        let mut parameters = Vec::new();
        loop {
            let name = self.parse_identifier(IdentifierPosition::TypeDeclaration)?;
            let constraint = if self.read_if(TokenCode::ExtendsKeyword) {
                Some(self.parse_union_type()?)
            } else {
                None
            };
            parameters.push(self.factory.type_parameter(name, constraint));
            if !self.read_if(TokenCode::CommaToken) {
                break;
            }
        }
        self.expect(TokenCode::GreaterThanToken)?;
        Ok(parameters)
    }

    /// `(required..., optional..., ...rest)`. Once an optional parameter has
    /// been seen only optional ones and a final rest parameter may follow.
    pub(crate) fn parse_parameter_list(&mut self) -> Result<ParameterList<'a>> {
        self.expect(TokenCode::OpenParenToken)?;
        let mut required = Vec::new();
        let mut optional = Vec::new();
        let mut rest = None;
        while !self.at(TokenCode::CloseParenToken) {
            let start = self.peek().clone();
            match self.parse_parameter()? {
                Parameter::Required(parameter) => {
                    if !optional.is_empty() {
                        return Err(self.error_at(
                            &start,
                            &messages::A_REQUIRED_PARAMETER_CANNOT_FOLLOW_AN_OPTIONAL_PARAMETER,
                            &[],
                        ));
                    }
                    required.push(parameter);
                }
                Parameter::Optional(parameter) => optional.push(parameter),
                Parameter::Rest(parameter) => rest = Some(parameter),
            }
            if !self.at(TokenCode::CommaToken) {
                break;
            }
            if rest.is_some() {
                return Err(self.error(&messages::A_REST_PARAMETER_MUST_BE_LAST, &[]));
            }
            self.advance();
        }
        self.expect(TokenCode::CloseParenToken)?;
        Ok(self.factory.parameter_list(required, optional, rest))
    }

    fn parse_parameter(&mut self) -> Result<Parameter<'a>> {
        let factory = self.factory;
        if self.read_if(TokenCode::DotDotDotToken) {
            let name = self.parse_identifier(IdentifierPosition::Expression)?;
            let type_annotation = self.parse_type_annotation()?;
            return Ok(Parameter::Rest(factory.rest_parameter(name, type_annotation)));
        }

        let modifier = accessibility(self.peek_code(0)).filter(|_| self.is_binding_start(1));
        if modifier.is_some() {
            self.advance();
        }
        let binding_start = self.peek().clone();
        let binding = self.parse_binding_pattern()?;
        let question = self.read_if(TokenCode::QuestionToken);

        // name: "literal"
        if !question
            && self.at(TokenCode::ColonToken)
            && self.peek_code(1) == TokenCode::StringLiteral
            && matches!(
                self.peek_code(2),
                TokenCode::CommaToken | TokenCode::CloseParenToken
            )
        {
            let BindingPattern::Identifier(name) = binding else {
                return Err(self.error_at(
                    &binding_start,
                    &messages::STRING_LITERAL_PARAMETER_REQUIRES_IDENTIFIER,
                    &[],
                ));
            };
            self.advance();
            let literal = self.tokens.read();
            let literal = literal.string_value().unwrap_or_default();
            return Ok(Parameter::Required(
                factory.string_literal_parameter(modifier, name, literal),
            ));
        }

        let type_annotation = self.parse_type_annotation()?;
        if self.at(TokenCode::EqualsToken) {
            if question {
                return Err(self.error(
                    &messages::PARAMETER_CANNOT_HAVE_QUESTION_MARK_AND_INITIALIZER,
                    &[],
                ));
            }
            self.advance();
            let initializer = self.allowing_in(|p| p.parse_assignment_expression())?;
            return Ok(Parameter::Optional(factory.optional_parameter(
                modifier,
                binding,
                false,
                type_annotation,
                Some(initializer),
            )));
        }
        if question {
            Ok(Parameter::Optional(factory.optional_parameter(
                modifier,
                binding,
                true,
                type_annotation,
                None,
            )))
        } else {
            Ok(Parameter::Required(factory.binding_parameter(
                modifier,
                binding,
                type_annotation,
            )))
        }
    }

    // ========================================================================
    // Binding patterns
    // ========================================================================

    pub(crate) fn is_binding_start(&self, n: usize) -> bool {
        self.is_identifier(n)
            || matches!(
                self.peek_code(n),
                TokenCode::OpenBraceToken | TokenCode::OpenBracketToken
            )
    }

    /// An identifier, `{ ... }` or `[ ... ]`.
    pub(crate) fn parse_binding_pattern(&mut self) -> Result<BindingPattern<'a>> {
        match self.peek_code(0) {
            TokenCode::OpenBraceToken => self.parse_object_binding_pattern(),
            TokenCode::OpenBracketToken => self.parse_array_binding_pattern(),
            _ => {
                let name = self.parse_identifier(IdentifierPosition::Expression)?;
                Ok(self.factory.identifier_pattern(name))
            }
        }
    }

    fn parse_object_binding_pattern(&mut self) -> Result<BindingPattern<'a>> {
        self.expect(TokenCode::OpenBraceToken)?;
        let mut properties = Vec::new();
        while !self.at(TokenCode::CloseBraceToken) {
            properties.push(self.parse_binding_property()?);
            if !self.read_if(TokenCode::CommaToken) {
                break;
            }
        }
        self.expect(TokenCode::CloseBraceToken)?;
        Ok(self.factory.object_pattern(properties))
    }

    /// `name = init` or `key: pattern = init`
    fn parse_binding_property(&mut self) -> Result<BindingProperty<'a>> {
        let remapped = match self.peek_code(0) {
            TokenCode::OpenBracketToken | TokenCode::StringLiteral | TokenCode::NumericLiteral => {
                true
            }
            code => code.is_identifier_name() && self.peek_code(1) == TokenCode::ColonToken,
        };
        if remapped {
            let key = self.parse_property_name()?;
            self.expect(TokenCode::ColonToken)?;
            let binding = self.parse_binding_pattern()?;
            let initializer = self.parse_binding_initializer()?;
            return Ok(self.factory.remapped_binding(key, binding, initializer));
        }
        let name = self.parse_identifier(IdentifierPosition::Expression)?;
        let initializer = self.parse_binding_initializer()?;
        Ok(self.factory.shorthand_binding(name, initializer))
    }

    /// `[a, , b = 1, ...rest]`
    fn parse_array_binding_pattern(&mut self) -> Result<BindingPattern<'a>> {
        self.expect(TokenCode::OpenBracketToken)?;
        let mut elements = Vec::new();
        let mut rest = None;
        loop {
            match self.peek_code(0) {
                TokenCode::CloseBracketToken => break,
                TokenCode::CommaToken => {
                    self.advance();
                    elements.push(self.factory.elided_binding());
                    continue;
                }
                TokenCode::DotDotDotToken => {
                    self.advance();
                    rest = Some(self.parse_identifier(IdentifierPosition::Expression)?);
                    break;
                }
                _ => {
                    let binding = self.parse_binding_pattern()?;
                    let initializer = self.parse_binding_initializer()?;
                    elements.push(self.factory.binding_element(binding, initializer));
                }
            }
            if !self.read_if(TokenCode::CommaToken) {
                break;
            }
        }
        self.expect(TokenCode::CloseBracketToken)?;
        Ok(self.factory.array_pattern(elements, rest))
    }

    fn parse_binding_initializer(&mut self) -> Result<Option<Expression<'a>>> {
        if self.read_if(TokenCode::EqualsToken) {
            self.allowing_in(|p| p.parse_assignment_expression())
                .map(Some)
        } else {
            Ok(None)
        }
    }

    // ========================================================================
    // Functions
    // ========================================================================

    /// `{ statements }`. The body is strict when the enclosing code is or
    /// when it opens with a `"use strict"` directive.
    pub(crate) fn parse_function_body(&mut self, generator: bool) -> Result<FunctionBody<'a>> {
        self.expect(TokenCode::OpenBraceToken)?;
        let context = Context {
            strict: self.context.strict || self.has_use_strict_directive(),
            in_generator: generator,
            allow_in: true,
        };
        let statements = self.with_context(context, |p| p.parse_statements_until_close_brace())?;
        self.expect(TokenCode::CloseBraceToken)?;
        Ok(self.factory.list(statements))
    }

    pub(crate) fn parse_function_declaration(&mut self) -> Result<Declaration<'a>> {
        self.expect(TokenCode::FunctionKeyword)?;
        let generator = self.read_if(TokenCode::AsteriskToken);
        let name = self.parse_identifier(IdentifierPosition::Expression)?;
        let signature = self.parse_call_signature()?;
        let body = self.parse_function_body(generator)?;
        Ok(self
            .factory
            .function_declaration(name, generator, signature, body))
    }

    pub(crate) fn parse_function_expression(&mut self) -> Result<Expression<'a>> {
        self.expect(TokenCode::FunctionKeyword)?;
        let generator = self.read_if(TokenCode::AsteriskToken);
        let name = if self.is_identifier(0) {
            Some(self.parse_identifier(IdentifierPosition::Expression)?)
        } else {
            None
        };
        let signature = self.parse_call_signature()?;
        let body = self.parse_function_body(generator)?;
        Ok(self
            .factory
            .function_expression(name, generator, signature, body))
    }

    /// The signature and body of a method whose name has been read.
    pub(crate) fn parse_method_definition(
        &mut self,
        name: PropertyName<'a>,
        generator: bool,
    ) -> Result<&'a MethodDefinition<'a>> {
        let signature = self.parse_call_signature()?;
        let body = self.parse_function_body(generator)?;
        Ok(self
            .factory
            .method_definition(name, generator, signature, body))
    }

    pub(crate) fn parse_get_accessor(&mut self, name: PropertyName<'a>) -> Result<&'a GetAccessor<'a>> {
        let start = self.peek().clone();
        let parameters = self.parse_parameter_list()?;
        if !parameters.is_empty() {
            return Err(self.error_at(
                &start,
                &messages::ACCESSOR_PARAMETER_COUNT,
                &["get", "no parameters"],
            ));
        }
        let return_type = self.parse_type_annotation()?;
        let body = self.parse_function_body(false)?;
        Ok(self.factory.get_accessor(name, return_type, body))
    }

    pub(crate) fn parse_set_accessor(&mut self, name: PropertyName<'a>) -> Result<&'a SetAccessor<'a>> {
        let start = self.peek().clone();
        let parameters = self.parse_parameter_list()?;
        let parameter = match (parameters.required, parameters.optional, parameters.rest) {
            ([parameter], [], None) => *parameter,
            _ => {
                return Err(self.error_at(
                    &start,
                    &messages::ACCESSOR_PARAMETER_COUNT,
                    &["set", "exactly one parameter"],
                ))
            }
        };
        let body = self.parse_function_body(false)?;
        Ok(self.factory.set_accessor(name, parameter, body))
    }

    // ========================================================================
    // Classes
    // ========================================================================

    /// `class Name<T> extends Base<U> implements I, J { members }`. The name
    /// is required when `is_declaration` is set.
    pub(crate) fn parse_class_definition(
        &mut self,
        is_declaration: bool,
    ) -> Result<&'a ClassDefinition<'a>> {
        self.expect(TokenCode::ClassKeyword)?;
        let name = if is_declaration
            || (self.is_identifier(0) && !self.at(TokenCode::ImplementsKeyword))
        {
            Some(self.parse_identifier(IdentifierPosition::TypeDeclaration)?)
        } else {
            None
        };
        let type_parameters = self.parse_type_parameters()?;

        let heritage = if self.read_if(TokenCode::ExtendsKeyword) {
            let expression = self.parse_member_expression()?;
            let type_arguments = if self.at(TokenCode::LessThanToken) {
                self.parse_type_arguments()?
            } else {
                Vec::new()
            };
            Some(self.factory.class_heritage(expression, type_arguments))
        } else {
            None
        };

        let mut implements = Vec::new();
        if self.read_if(TokenCode::ImplementsKeyword) {
            loop {
                implements.push(self.parse_type_reference()?);
                if !self.read_if(TokenCode::CommaToken) {
                    break;
                }
            }
        }

        self.expect(TokenCode::OpenBraceToken)?;
        let mut members = Vec::new();
        while !self.at(TokenCode::CloseBraceToken) {
            if self.read_if(TokenCode::SemicolonToken) {
                continue;
            }
            members.push(self.parse_class_member()?);
        }
        self.expect(TokenCode::CloseBraceToken)?;
        Ok(self
            .factory
            .class_definition(name, type_parameters, heritage, implements, members))
    }

    /// Leading `public`, `private`, `protected` and `static`. A modifier
    /// keyword directly followed by `(`, `:`, `=` and the like is the
    /// member's name instead.
    fn parse_member_modifiers(&mut self) -> ModifierFlags {
        let mut modifiers = ModifierFlags::NONE;
        loop {
            let flag = match self.peek_code(0) {
                TokenCode::PublicKeyword => ModifierFlags::PUBLIC,
                TokenCode::PrivateKeyword => ModifierFlags::PRIVATE,
                TokenCode::ProtectedKeyword => ModifierFlags::PROTECTED,
                TokenCode::StaticKeyword => ModifierFlags::STATIC,
                _ => break,
            };
            if !can_follow_modifier(self.peek_code(1)) {
                break;
            }
            self.advance();
            modifiers |= flag;
        }
        modifiers
    }

    fn parse_class_member(&mut self) -> Result<ClassMember<'a>> {
        let factory = self.factory;
        let modifiers = self.parse_member_modifiers();

        if self.at(TokenCode::ConstructorKeyword) && self.peek_code(1) == TokenCode::OpenParenToken {
            self.advance();
            let parameters = self.parse_parameter_list()?;
            let body = self.parse_function_body(false)?;
            return Ok(factory.constructor_member(modifiers, parameters, body));
        }
        if self.is_index_signature_start() {
            let signature = self.parse_index_signature()?;
            self.parse_semicolon()?;
            return Ok(ClassMember::IndexSignature(signature));
        }

        let code = self.peek_code(0);
        if matches!(code, TokenCode::GetKeyword | TokenCode::SetKeyword)
            && is_property_name_start(self.peek_code(1))
        {
            self.advance();
            let name = self.parse_property_name()?;
            return if code == TokenCode::GetKeyword {
                let accessor = self.parse_get_accessor(name)?;
                Ok(factory.get_accessor_member(modifiers, accessor))
            } else {
                let accessor = self.parse_set_accessor(name)?;
                Ok(factory.set_accessor_member(modifiers, accessor))
            };
        }
        if self.read_if(TokenCode::AsteriskToken) {
            let name = self.parse_property_name()?;
            let method = self.parse_method_definition(name, true)?;
            return Ok(factory.method_member(modifiers, method));
        }

        let name = self.parse_property_name()?;
        let optional = self.read_if(TokenCode::QuestionToken);
        if matches!(
            self.peek_code(0),
            TokenCode::OpenParenToken | TokenCode::LessThanToken
        ) {
            let method = self.parse_method_definition(name, false)?;
            return Ok(factory.method_member(modifiers, method));
        }
        let type_annotation = self.parse_type_annotation()?;
        let initializer = if self.read_if(TokenCode::EqualsToken) {
            Some(self.allowing_in(|p| p.parse_assignment_expression())?)
        } else {
            None
        };
        self.parse_semicolon()?;
        Ok(factory.property_member(modifiers, name, optional, type_annotation, initializer))
    }
}

#[cfg(test)]
mod tests {
    use crate::{ParseOptions, Parser};
    use bumpalo::Bump;
    use retype_ast::*;

    fn parse(source: &str, check: impl FnOnce(Declaration<'_>)) {
        let arena = Bump::new();
        let factory = NodeFactory::new(&arena);
        let mut parser = Parser::new(&factory, source, ParseOptions::default()).unwrap();
        check(parser.parse_declaration().unwrap());
    }

    fn parse_err(source: &str) -> String {
        let arena = Bump::new();
        let factory = NodeFactory::new(&arena);
        let mut parser = Parser::new(&factory, source, ParseOptions::default()).unwrap();
        parser.parse_declaration().unwrap_err().message
    }

    fn function(declaration: Declaration<'_>) -> &FunctionDeclaration<'_> {
        match declaration {
            Declaration::Function(function) => function,
            other => panic!("not a function: {other:?}"),
        }
    }

    #[test]
    fn test_parameter_shapes() {
        parse(
            "function f(public a, b: number, c: \"lit\", d?: string, e = 1, ...rest: any[]) {}",
            |d| {
                let parameters = function(d).signature.parameters;
                assert_eq!(parameters.required.len(), 3);
                assert!(matches!(
                    parameters.required[0],
                    RequiredParameter::Binding(p) if p.accessibility == Some(Accessibility::Public)
                ));
                assert!(matches!(
                    parameters.required[2],
                    RequiredParameter::StringLiteral(p) if p.literal == "lit"
                ));
                assert_eq!(parameters.optional.len(), 2);
                assert!(parameters.optional[0].question);
                assert!(parameters.optional[1].initializer.is_some());
                assert_eq!(parameters.rest.map(|r| r.name.text()), Some("rest"));
            },
        );
    }

    #[test]
    fn test_parameter_errors() {
        assert_eq!(
            parse_err("function f(a?, b) {}"),
            "A required parameter cannot follow an optional parameter."
        );
        assert_eq!(
            parse_err("function f(...a, b) {}"),
            "A rest parameter must be last in a parameter list."
        );
        assert_eq!(
            parse_err("function f(a? = 1) {}"),
            "Parameter cannot have question mark and initializer."
        );
        assert_eq!(
            parse_err("function f({ a }: \"x\") {}"),
            "A parameter with a string literal type must be a simple identifier."
        );
    }

    #[test]
    fn test_binding_patterns() {
        parse("function f({ a, b: [c, , d = 1, ...e], 'f': g = 2 }) {}", |d| {
            let RequiredParameter::Binding(parameter) = function(d).signature.parameters.required[0]
            else {
                panic!()
            };
            let BindingPattern::Object(object) = parameter.binding else { panic!() };
            assert_eq!(object.properties.len(), 3);
            assert!(matches!(object.properties[0], BindingProperty::Shorthand { initializer: None, .. }));
            let BindingProperty::Remapped { binding: BindingPattern::Array(array), .. } =
                object.properties[1]
            else {
                panic!()
            };
            assert!(matches!(
                array.elements,
                [
                    ArrayBindingElement::Element { initializer: None, .. },
                    ArrayBindingElement::Elided,
                    ArrayBindingElement::Element { initializer: Some(_), .. },
                ]
            ));
            assert_eq!(array.rest.map(|r| r.text()), Some("e"));
            assert!(matches!(
                object.properties[2],
                BindingProperty::Remapped { key: PropertyName::StringLiteral("f"), initializer: Some(_), .. }
            ));
        });
    }

    #[test]
    fn test_generator_body_enables_yield() {
        parse("function* g() { yield; yield* h(); yield 1; }", |d| {
            let f = function(d);
            assert!(f.generator);
            assert!(f.body.iter().all(|s| matches!(s, Statement::Expression(Expression::Yield(_)))));
        });
    }

    #[test]
    fn test_class_members() {
        let source = "class C<T> extends B<T> implements I, J {
            private static x: number = 1;
            y?;
            [key: string]: any;
            constructor(public a) { super(); }
            static m<U>(u: U): U { return u; }
            get v(): number { return 1; }
            set v(value) {}
            *items() {}
            static() {}
            public;
        }";
        parse(source, |d| {
            let Declaration::Class(class) = d else { panic!("{d:?}") };
            assert_eq!(class.name.map(|n| n.text()), Some("C"));
            assert_eq!(class.type_parameters.len(), 1);
            assert_eq!(class.heritage.map(|h| h.type_arguments.len()), Some(1));
            assert_eq!(class.implements.len(), 2);
            let members = class.members;
            assert_eq!(members.len(), 10);
            let ClassMember::Property(x) = members[0] else { panic!() };
            assert!(x.modifiers.is_static());
            assert_eq!(x.modifiers.accessibility(), Some(Accessibility::Private));
            assert!(matches!(members[1], ClassMember::Property(y) if y.optional));
            assert!(matches!(members[2], ClassMember::IndexSignature(_)));
            assert!(matches!(members[3], ClassMember::Constructor(_)));
            assert!(matches!(members[4], ClassMember::Method { modifiers, .. } if modifiers.is_static()));
            assert!(matches!(members[5], ClassMember::GetAccessor { .. }));
            assert!(matches!(members[6], ClassMember::SetAccessor { .. }));
            assert!(matches!(members[7], ClassMember::Method { method, .. } if method.generator));
            assert!(matches!(
                members[8],
                ClassMember::Method { modifiers, method }
                    if modifiers.is_empty()
                        && matches!(method.name, PropertyName::Identifier(n) if n.text() == "static")
            ));
            assert!(matches!(members[9], ClassMember::Property(p) if p.modifiers.is_empty()));
        });
    }

    #[test]
    fn test_accessor_parameter_counts() {
        assert_eq!(
            parse_err("class C { get x(a) {} }"),
            "A 'get' accessor must have no parameters."
        );
        assert_eq!(
            parse_err("class C { set x() {} }"),
            "A 'set' accessor must have exactly one parameter."
        );
    }

    #[test]
    fn test_class_declaration_needs_a_name() {
        assert_eq!(parse_err("class { }"), "Identifier expected.");
        assert_eq!(parse_err("class number { }"), "Type name cannot be 'number'.");
    }
}
