//! Expression parsing: sequence down to primary.

use crate::parser::{Context, Parser};
use crate::precedence::{
    assignment_operator, binary_operator, binary_operator_precedence, unary_operator,
    update_operator, OperatorPrecedence,
};
use crate::utilities::{
    can_start_expression, is_legacy_octal_literal, is_property_name_start,
    split_regular_expression,
};
use retype_ast::keywords::{self, KeywordCategory};
use retype_ast::{
    Argument, ArrayElement, ArrowFunctionBody, CallSignature, Expression, IdentifierPosition,
    ObjectMember, PropertyName, TemplateLiteral, TokenCode, TypeNode,
};
use retype_diagnostics::{messages, Result};

impl<'a, 'f> Parser<'a, 'f> {
    /// `a, b, c`
    pub(crate) fn parse_comma_expression(&mut self) -> Result<Expression<'a>> {
        let first = self.parse_assignment_expression()?;
        if !self.at(TokenCode::CommaToken) {
            return Ok(first);
        }
        let mut expressions = vec![first];
        while self.read_if(TokenCode::CommaToken) {
            expressions.push(self.parse_assignment_expression()?);
        }
        Ok(self.factory.sequence(expressions))
    }

    pub(crate) fn parse_assignment_expression(&mut self) -> Result<Expression<'a>> {
        if self.context.in_generator && self.at(TokenCode::YieldKeyword) {
            return self.parse_yield_expression();
        }
        if let Some(arrow) = self.try_parse_arrow_function()? {
            return Ok(arrow);
        }

        let target = self.parse_conditional_expression()?;
        let (code, width) = self.peek_operator();
        let Some(operator) = assignment_operator(code) else {
            return Ok(target);
        };
        self.skip(width);
        let value = self.parse_assignment_expression()?;
        Ok(self.factory.assignment(target, operator, value))
    }

    fn parse_yield_expression(&mut self) -> Result<Expression<'a>> {
        self.expect(TokenCode::YieldKeyword)?;
        if self.has_line_break_before() {
            return Ok(self.factory.yield_expression(false, None));
        }
        let delegate = self.read_if(TokenCode::AsteriskToken);
        let argument = if delegate || can_start_expression(self.peek_code(0)) {
            Some(self.parse_assignment_expression()?)
        } else {
            None
        };
        Ok(self.factory.yield_expression(delegate, argument))
    }

    // ========================================================================
    // Arrow functions
    // ========================================================================

    /// An arrow function if one starts here. A bare `x =>` is recognized
    /// directly; a parenthesized or generic signature is tried speculatively
    /// and must be followed by `=>`.
    fn try_parse_arrow_function(&mut self) -> Result<Option<Expression<'a>>> {
        if self.is_identifier(0) && self.peek_code(1) == TokenCode::EqualsGreaterThanToken {
            let name = self.parse_identifier(IdentifierPosition::Expression)?;
            self.advance();
            let factory = self.factory;
            let parameter = factory.binding_parameter(None, factory.identifier_pattern(name), None);
            let parameters = factory.parameter_list(vec![parameter], Vec::new(), None);
            let signature = factory.call_signature(Vec::new(), parameters, None);
            return self.parse_arrow_function_body(signature).map(Some);
        }

        if !matches!(
            self.peek_code(0),
            TokenCode::OpenParenToken | TokenCode::LessThanToken
        ) {
            return Ok(None);
        }
        if self.look_ahead(|p| p.skip_to_arrow_after_parameters()) {
            let signature = self.parse_call_signature()?;
            self.expect(TokenCode::EqualsGreaterThanToken)?;
            return self.parse_arrow_function_body(signature).map(Some);
        }
        let signature = self.try_parse(|p| {
            let signature = p.parse_call_signature()?;
            p.expect(TokenCode::EqualsGreaterThanToken)?;
            Ok(signature)
        });
        match signature {
            Some(signature) => self.parse_arrow_function_body(signature).map(Some),
            None => Ok(None),
        }
    }

    /// Skip an optional `<...>` and a balanced `(...)`, then report whether
    /// `=>` follows directly. Only called inside `look_ahead`.
    fn skip_to_arrow_after_parameters(&mut self) -> bool {
        if self.at(TokenCode::LessThanToken) {
            let mut depth = 0usize;
            loop {
                match self.peek_code(0) {
                    TokenCode::LessThanToken => depth += 1,
                    TokenCode::GreaterThanToken => depth -= 1,
                    TokenCode::EndOfFileToken => return false,
                    _ => {}
                }
                self.advance();
                if depth == 0 {
                    break;
                }
            }
        }
        if !self.at(TokenCode::OpenParenToken) {
            return false;
        }
        let mut depth = 0usize;
        loop {
            match self.peek_code(0) {
                TokenCode::OpenParenToken => depth += 1,
                TokenCode::CloseParenToken => depth -= 1,
                TokenCode::EndOfFileToken => return false,
                _ => {}
            }
            self.advance();
            if depth == 0 {
                break;
            }
        }
        self.at(TokenCode::EqualsGreaterThanToken)
    }

    fn parse_arrow_function_body(&mut self, signature: CallSignature<'a>) -> Result<Expression<'a>> {
        let body = if self.at(TokenCode::OpenBraceToken) {
            ArrowFunctionBody::Block(self.parse_function_body(false)?)
        } else {
            let context = Context {
                in_generator: false,
                ..self.context
            };
            ArrowFunctionBody::Expression(
                self.with_context(context, |p| p.parse_assignment_expression())?,
            )
        };
        Ok(self.factory.arrow_function(signature, body))
    }

    // ========================================================================
    // Conditional and binary
    // ========================================================================

    fn parse_conditional_expression(&mut self) -> Result<Expression<'a>> {
        let condition = self.parse_binary_expression(OperatorPrecedence::Lowest)?;
        if !self.read_if(TokenCode::QuestionToken) {
            return Ok(condition);
        }
        let when_true = self.allowing_in(|p| p.parse_assignment_expression())?;
        self.expect(TokenCode::ColonToken)?;
        let when_false = self.parse_assignment_expression()?;
        Ok(self.factory.conditional(condition, when_true, when_false))
    }

    /// Operators binding tighter than `minimum`, left-associative.
    fn parse_binary_expression(&mut self, minimum: OperatorPrecedence) -> Result<Expression<'a>> {
        let mut left = self.parse_unary_expression()?;
        loop {
            let (code, width) = self.peek_operator();
            let precedence = binary_operator_precedence(code);
            if precedence == OperatorPrecedence::Invalid || precedence <= minimum {
                break;
            }
            if code == TokenCode::InKeyword && !self.context.allow_in {
                break;
            }
            if code == TokenCode::AsKeyword {
                self.advance();
                let type_node = self.parse_union_type()?;
                left = self.factory.as_expression(left, type_node);
                continue;
            }
            let Some(operator) = binary_operator(code) else {
                break;
            };
            self.skip(width);
            let right = self.parse_binary_expression(precedence)?;
            left = self.factory.binary(left, operator, right);
        }
        Ok(left)
    }

    // ========================================================================
    // Unary and postfix
    // ========================================================================

    fn parse_unary_expression(&mut self) -> Result<Expression<'a>> {
        let code = self.peek_code(0);
        if let Some(operator) = unary_operator(code) {
            self.advance();
            let operand = self.parse_unary_expression()?;
            return Ok(self.factory.unary(operator, operand));
        }
        if let Some(operator) = update_operator(code) {
            self.advance();
            let operand = self.parse_unary_expression()?;
            return Ok(self.factory.update(operator, true, operand));
        }
        if code == TokenCode::LessThanToken {
            self.advance();
            let type_node = self.parse_union_type()?;
            self.expect(TokenCode::GreaterThanToken)?;
            let expression = self.parse_unary_expression()?;
            return Ok(self.factory.type_assertion(type_node, expression));
        }
        self.parse_postfix_expression()
    }

    fn parse_postfix_expression(&mut self) -> Result<Expression<'a>> {
        let operand = self.parse_left_hand_side_expression()?;
        match update_operator(self.peek_code(0)) {
            Some(operator) => {
                self.advance();
                Ok(self.factory.update(operator, false, operand))
            }
            None => Ok(operand),
        }
    }

    // ========================================================================
    // Left-hand side
    // ========================================================================

    pub(crate) fn parse_left_hand_side_expression(&mut self) -> Result<Expression<'a>> {
        let mut expression = self.parse_member_expression_head()?;
        loop {
            if let Some(next) = self.parse_member_suffix(expression)? {
                expression = next;
                continue;
            }
            expression = match self.peek_code(0) {
                TokenCode::OpenParenToken => {
                    let arguments = self.parse_arguments()?;
                    self.factory.call(expression, Vec::new(), arguments)
                }
                TokenCode::LessThanToken => match self.try_parse(|p| p.parse_call_type_arguments()) {
                    Some(type_arguments) => {
                        let arguments = self.parse_arguments()?;
                        self.factory.call(expression, type_arguments, arguments)
                    }
                    None => return Ok(expression),
                },
                _ => return Ok(expression),
            };
        }
    }

    /// The member expression used as a class heritage: no calls.
    pub(crate) fn parse_member_expression(&mut self) -> Result<Expression<'a>> {
        let mut expression = self.parse_member_expression_head()?;
        while let Some(next) = self.parse_member_suffix(expression)? {
            expression = next;
        }
        Ok(expression)
    }

    fn parse_member_expression_head(&mut self) -> Result<Expression<'a>> {
        match self.peek_code(0) {
            TokenCode::NewKeyword => self.parse_new_expression(),
            TokenCode::SuperKeyword => {
                self.advance();
                Ok(self.factory.super_expression())
            }
            _ => self.parse_primary_expression(),
        }
    }

    /// `new Callee<T>(args)`; the type arguments and the arguments are both
    /// optional.
    fn parse_new_expression(&mut self) -> Result<Expression<'a>> {
        self.expect(TokenCode::NewKeyword)?;
        let callee = self.parse_member_expression()?;
        let type_arguments = if self.at(TokenCode::LessThanToken) {
            self.try_parse(|p| p.parse_call_type_arguments())
                .unwrap_or_default()
        } else {
            Vec::new()
        };
        let arguments = if self.at(TokenCode::OpenParenToken) {
            Some(self.parse_arguments()?)
        } else {
            None
        };
        Ok(self.factory.new_expression(callee, type_arguments, arguments))
    }

    /// One `.name`, `[index]` or tagged template suffix.
    fn parse_member_suffix(&mut self, expression: Expression<'a>) -> Result<Option<Expression<'a>>> {
        let suffix = match self.peek_code(0) {
            TokenCode::DotToken => {
                self.advance();
                let name = self.parse_identifier_name()?;
                self.factory.property_access(expression, name)
            }
            TokenCode::OpenBracketToken => {
                self.advance();
                let argument = self.allowing_in(|p| p.parse_comma_expression())?;
                self.expect(TokenCode::CloseBracketToken)?;
                self.factory.element_access(expression, argument)
            }
            TokenCode::NoSubstitutionTemplateLiteral | TokenCode::TemplateHead => {
                let template = self.parse_template_literal()?;
                self.factory.tagged_template(expression, template)
            }
            _ => return Ok(None),
        };
        Ok(Some(suffix))
    }

    /// Type arguments of a call. Only taken when `(` follows, so that `a < b`
    /// stays a comparison.
    fn parse_call_type_arguments(&mut self) -> Result<Vec<TypeNode<'a>>> {
        let type_arguments = self.parse_type_arguments()?;
        if !self.at(TokenCode::OpenParenToken) {
            return Err(self.expected(TokenCode::OpenParenToken));
        }
        Ok(type_arguments)
    }

    pub(crate) fn parse_arguments(&mut self) -> Result<Vec<Argument<'a>>> {
        self.expect(TokenCode::OpenParenToken)?;
        let mut arguments = Vec::new();
        if !self.at(TokenCode::CloseParenToken) {
            loop {
                let spread = self.read_if(TokenCode::DotDotDotToken);
                let expression = self.allowing_in(|p| p.parse_assignment_expression())?;
                arguments.push(if spread {
                    Argument::Spread(expression)
                } else {
                    Argument::Expression(expression)
                });
                if !self.read_if(TokenCode::CommaToken) {
                    break;
                }
            }
        }
        self.expect(TokenCode::CloseParenToken)?;
        Ok(arguments)
    }

    // ========================================================================
    // Primary
    // ========================================================================

    fn parse_primary_expression(&mut self) -> Result<Expression<'a>> {
        let factory = self.factory;
        let code = self.peek_code(0);
        let expression = match code {
            TokenCode::ThisKeyword => {
                self.advance();
                factory.this_expression()
            }
            TokenCode::NullKeyword => {
                self.advance();
                factory.null_literal()
            }
            TokenCode::TrueKeyword | TokenCode::FalseKeyword => {
                self.advance();
                factory.boolean_literal(code == TokenCode::TrueKeyword)
            }
            TokenCode::NumericLiteral => {
                self.check_numeric_literal()?;
                let token = self.tokens.read();
                factory.numeric_literal(token.number_value().unwrap_or_default())
            }
            TokenCode::StringLiteral => {
                let token = self.tokens.read();
                factory.string_literal(token.string_value().unwrap_or_default())
            }
            TokenCode::RegularExpressionLiteral => {
                let token = self.tokens.read();
                let (pattern, flags) = split_regular_expression(&token.text);
                factory.regular_expression_literal(pattern, flags)
            }
            TokenCode::NoSubstitutionTemplateLiteral | TokenCode::TemplateHead => {
                let template = self.parse_template_literal()?;
                factory.template_expression(template)
            }
            TokenCode::OpenBracketToken => self.parse_array_literal()?,
            TokenCode::OpenBraceToken => self.parse_object_literal()?,
            TokenCode::FunctionKeyword => self.parse_function_expression()?,
            TokenCode::ClassKeyword => {
                let class = self.parse_class_definition(false)?;
                factory.class_expression(class)
            }
            TokenCode::OpenParenToken => {
                self.advance();
                let inner = self.allowing_in(|p| p.parse_comma_expression())?;
                self.expect(TokenCode::CloseParenToken)?;
                factory.parenthesized(inner)
            }
            _ if self.is_identifier(0) => {
                let name = self.parse_identifier(IdentifierPosition::Expression)?;
                factory.identifier_expression(name)
            }
            // a word that is reserved only here: report it as such
            _ if keywords::category(code) == Some(KeywordCategory::ReservedInStrictMode) => {
                let name = self.parse_identifier(IdentifierPosition::Expression)?;
                factory.identifier_expression(name)
            }
            TokenCode::EndOfFileToken => {
                return Err(self.error(&messages::UNEXPECTED_END_OF_INPUT, &[]))
            }
            _ => return Err(self.error(&messages::EXPRESSION_EXPECTED, &[])),
        };
        Ok(expression)
    }

    /// Legacy octal literals are only valid in non-strict code.
    fn check_numeric_literal(&self) -> Result<()> {
        if self.context.strict && is_legacy_octal_literal(&self.peek().text) {
            return Err(self.error(&messages::OCTAL_LITERALS_NOT_ALLOWED_IN_STRICT_MODE, &[]));
        }
        Ok(())
    }

    /// A template starting at a `NoSubstitutionTemplateLiteral` or
    /// `TemplateHead` token.
    pub(crate) fn parse_template_literal(&mut self) -> Result<&'a TemplateLiteral<'a>> {
        let head = self.read();
        let head_text = head.string_value().unwrap_or_default();
        match head.code {
            TokenCode::NoSubstitutionTemplateLiteral => {
                return Ok(self.factory.template_literal(head_text, Vec::new()))
            }
            TokenCode::TemplateHead => {}
            _ => return Err(self.error_at(&head, &messages::UNEXPECTED_TOKEN, &[head.text.as_str()])),
        }

        let mut spans = Vec::new();
        loop {
            let expression = self.allowing_in(|p| p.parse_comma_expression())?;
            let piece = self.peek();
            let code = piece.code;
            if !matches!(code, TokenCode::TemplateMiddle | TokenCode::TemplateTail) {
                return Err(self.unexpected());
            }
            spans.push(
                self.factory
                    .template_span(expression, piece.string_value().unwrap_or_default()),
            );
            self.advance();
            if code == TokenCode::TemplateTail {
                break;
            }
        }
        Ok(self.factory.template_literal(head_text, spans))
    }

    fn parse_array_literal(&mut self) -> Result<Expression<'a>> {
        self.expect(TokenCode::OpenBracketToken)?;
        let mut elements = Vec::new();
        loop {
            match self.peek_code(0) {
                TokenCode::CloseBracketToken => break,
                TokenCode::CommaToken => {
                    self.advance();
                    elements.push(ArrayElement::Elided);
                    continue;
                }
                TokenCode::DotDotDotToken => {
                    self.advance();
                    let expression = self.allowing_in(|p| p.parse_assignment_expression())?;
                    elements.push(ArrayElement::Spread(expression));
                }
                _ => {
                    let expression = self.allowing_in(|p| p.parse_assignment_expression())?;
                    elements.push(ArrayElement::Expression(expression));
                }
            }
            if !self.read_if(TokenCode::CommaToken) {
                break;
            }
        }
        self.expect(TokenCode::CloseBracketToken)?;
        Ok(self.factory.array_literal(elements))
    }

    fn parse_object_literal(&mut self) -> Result<Expression<'a>> {
        self.expect(TokenCode::OpenBraceToken)?;
        let mut members = Vec::new();
        while !self.at(TokenCode::CloseBraceToken) {
            members.push(self.parse_object_member()?);
            if !self.read_if(TokenCode::CommaToken) {
                break;
            }
        }
        self.expect(TokenCode::CloseBraceToken)?;
        Ok(self.factory.object_literal(members))
    }

    fn parse_object_member(&mut self) -> Result<ObjectMember<'a>> {
        let code = self.peek_code(0);
        if matches!(code, TokenCode::GetKeyword | TokenCode::SetKeyword)
            && is_property_name_start(self.peek_code(1))
        {
            self.advance();
            let name = self.parse_property_name()?;
            return if code == TokenCode::GetKeyword {
                self.parse_get_accessor(name).map(ObjectMember::GetAccessor)
            } else {
                self.parse_set_accessor(name).map(ObjectMember::SetAccessor)
            };
        }
        if self.read_if(TokenCode::AsteriskToken) {
            let name = self.parse_property_name()?;
            return self
                .parse_method_definition(name, true)
                .map(ObjectMember::Method);
        }
        if self.is_identifier(0)
            && matches!(
                self.peek_code(1),
                TokenCode::CommaToken | TokenCode::CloseBraceToken
            )
        {
            let name = self.parse_identifier(IdentifierPosition::Expression)?;
            return Ok(self.factory.shorthand_property(name));
        }

        let name = self.parse_property_name()?;
        match self.peek_code(0) {
            TokenCode::OpenParenToken | TokenCode::LessThanToken => self
                .parse_method_definition(name, false)
                .map(ObjectMember::Method),
            TokenCode::ColonToken => {
                self.advance();
                let value = self.allowing_in(|p| p.parse_assignment_expression())?;
                Ok(self.factory.property_assignment(name, value))
            }
            _ => Err(self.error(&messages::PROPERTY_ASSIGNMENT_EXPECTED, &[])),
        }
    }

    /// An identifier name, string, number or `[computed]` key.
    pub(crate) fn parse_property_name(&mut self) -> Result<PropertyName<'a>> {
        let factory = self.factory;
        match self.peek_code(0) {
            TokenCode::StringLiteral => {
                let token = self.tokens.read();
                Ok(factory.string_property_name(token.string_value().unwrap_or_default()))
            }
            TokenCode::NumericLiteral => {
                self.check_numeric_literal()?;
                let token = self.tokens.read();
                Ok(factory.numeric_property_name(token.number_value().unwrap_or_default()))
            }
            TokenCode::OpenBracketToken => {
                self.advance();
                let expression = self.allowing_in(|p| p.parse_assignment_expression())?;
                self.expect(TokenCode::CloseBracketToken)?;
                Ok(factory.computed_property_name(expression))
            }
            code if code.is_identifier_name() => {
                let name = self.parse_identifier_name()?;
                Ok(factory.identifier_property_name(name))
            }
            _ => Err(self.error(&messages::PROPERTY_NAME_EXPECTED, &[])),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{ParseOptions, Parser};
    use bumpalo::Bump;
    use retype_ast::*;

    fn parse(source: &str, check: impl FnOnce(Expression<'_>)) {
        let arena = Bump::new();
        let factory = NodeFactory::new(&arena);
        let mut parser = Parser::new(&factory, source, ParseOptions::default()).unwrap();
        check(parser.parse_expression().unwrap());
    }

    fn parse_err(source: &str) -> String {
        let arena = Bump::new();
        let factory = NodeFactory::new(&arena);
        let mut parser = Parser::new(&factory, source, ParseOptions::default()).unwrap();
        parser.parse_expression().unwrap_err().message
    }

    #[test]
    fn test_precedence() {
        parse("a + b * c", |e| {
            let Expression::Binary(add) = e else { panic!("{e:?}") };
            assert_eq!(add.operator, BinaryOperator::Add);
            assert!(matches!(add.right, Expression::Binary(m) if m.operator == BinaryOperator::Multiply));
        });
        parse("a - b - c", |e| {
            let Expression::Binary(outer) = e else { panic!("{e:?}") };
            assert!(matches!(outer.left, Expression::Binary(_)));
            assert!(matches!(outer.right, Expression::Identifier(_)));
        });
    }

    #[test]
    fn test_shift_operators_from_split_tokens() {
        parse("a >>> b", |e| {
            assert!(matches!(e, Expression::Binary(b) if b.operator == BinaryOperator::UnsignedRightShift));
        });
        parse("a >>= b", |e| {
            assert!(matches!(e, Expression::Assignment(a) if a.operator == AssignmentOperator::RightShift));
        });
        parse("a >= b", |e| {
            assert!(matches!(e, Expression::Binary(b) if b.operator == BinaryOperator::GreaterThanOrEqual));
        });
    }

    #[test]
    fn test_assignment_is_right_associative() {
        parse("a = b = c", |e| {
            let Expression::Assignment(outer) = e else { panic!("{e:?}") };
            assert!(matches!(outer.value, Expression::Assignment(_)));
        });
    }

    #[test]
    fn test_conditional() {
        parse("a ? b : c ? d : e", |e| {
            let Expression::Conditional(c) = e else { panic!("{e:?}") };
            assert!(matches!(c.when_false, Expression::Conditional(_)));
        });
    }

    #[test]
    fn test_arrow_functions() {
        parse("x => x", |e| {
            let Expression::Arrow(arrow) = e else { panic!("{e:?}") };
            assert_eq!(arrow.signature.parameters.required.len(), 1);
            assert!(matches!(arrow.body, ArrowFunctionBody::Expression(_)));
        });
        parse("(a: number, b?) => { return a; }", |e| {
            let Expression::Arrow(arrow) = e else { panic!("{e:?}") };
            assert_eq!(arrow.signature.parameters.required.len(), 1);
            assert_eq!(arrow.signature.parameters.optional.len(), 1);
            assert!(matches!(arrow.body, ArrowFunctionBody::Block(body) if body.len() == 1));
        });
        parse("<T>(x: T): T => x", |e| {
            let Expression::Arrow(arrow) = e else { panic!("{e:?}") };
            assert_eq!(arrow.signature.type_parameters.len(), 1);
            assert!(arrow.signature.return_type.is_some());
        });
        parse("(a, b)", |e| assert!(matches!(e, Expression::Parenthesized(Expression::Sequence(s)) if s.len() == 2)));
    }

    #[test]
    fn test_arrow_parameter_errors_are_reported() {
        assert_eq!(
            parse_err("(a: number, b?: string, c: number) => 1"),
            "A required parameter cannot follow an optional parameter."
        );
        assert_eq!(
            parse_err("<T>(...xs, y) => 1"),
            "A rest parameter must be last in a parameter list."
        );
        parse("(a) ? (b) : (c)", |e| assert!(matches!(e, Expression::Conditional(_))));
        parse("<T>(x)", |e| assert!(matches!(e, Expression::TypeAssertion(_))));
    }

    #[test]
    fn test_type_assertions() {
        parse("<number>x", |e| {
            assert!(matches!(e, Expression::TypeAssertion(t) if t.type_node == TypeNode::Predefined(PredefinedType::Number)));
        });
        parse("x as string", |e| assert!(matches!(e, Expression::As(_))));
    }

    #[test]
    fn test_call_with_type_arguments() {
        parse("f<string>(x)", |e| {
            let Expression::Call(call) = e else { panic!("{e:?}") };
            assert_eq!(call.type_arguments.len(), 1);
            assert_eq!(call.arguments.len(), 1);
        });
        parse("a < b", |e| assert!(matches!(e, Expression::Binary(b) if b.operator == BinaryOperator::LessThan)));
        parse("a < b > c", |e| assert!(matches!(e, Expression::Binary(_))));
    }

    #[test]
    fn test_new_expressions() {
        parse("new Foo", |e| assert!(matches!(e, Expression::New(n) if n.arguments.is_none())));
        parse("new a.B<T>(1, ...rest)", |e| {
            let Expression::New(n) = e else { panic!("{e:?}") };
            assert!(matches!(n.expression, Expression::PropertyAccess(_)));
            assert_eq!(n.type_arguments.len(), 1);
            assert!(matches!(n.arguments, Some([Argument::Expression(_), Argument::Spread(_)])));
        });
        parse("new Foo().bar", |e| assert!(matches!(e, Expression::PropertyAccess(_))));
    }

    #[test]
    fn test_literals() {
        parse("[1, , ...xs,]", |e| {
            let Expression::ArrayLiteral(array) = e else { panic!("{e:?}") };
            assert!(matches!(
                array.elements,
                [ArrayElement::Expression(_), ArrayElement::Elided, ArrayElement::Spread(_)]
            ));
        });
        parse("{ a, b: 1, [c]: 2, 'd': 3, m() {}, get g() { return 1; }, set s(v) {}, *gen() {} }", |e| {
            let Expression::ObjectLiteral(object) = e else { panic!("{e:?}") };
            assert_eq!(object.members.len(), 8);
            assert!(matches!(object.members[0], ObjectMember::Shorthand(_)));
            assert!(matches!(object.members[2], ObjectMember::Property { name: PropertyName::Computed(_), .. }));
            assert!(matches!(object.members[5], ObjectMember::GetAccessor(_)));
            assert!(matches!(object.members[7], ObjectMember::Method(m) if m.generator));
        });
        parse("/ab+c/gi", |e| {
            assert!(matches!(e, Expression::Literal(Literal::RegularExpression(r)) if r.pattern == "ab+c" && r.flags == "gi"));
        });
        parse("`a${b}c${d}e`", |e| {
            let Expression::Template(t) = e else { panic!("{e:?}") };
            assert_eq!(t.head, "a");
            assert_eq!(t.spans.len(), 2);
            assert_eq!(t.spans[1].literal, "e");
        });
        parse("tag`x`", |e| assert!(matches!(e, Expression::TaggedTemplate(_))));
    }

    #[test]
    fn test_object_literal_with_get_as_name() {
        parse("{ get: 1, set }", |e| {
            let Expression::ObjectLiteral(object) = e else { panic!("{e:?}") };
            assert!(matches!(object.members[0], ObjectMember::Property { .. }));
            assert!(matches!(object.members[1], ObjectMember::Shorthand(_)));
        });
    }

    #[test]
    fn test_expression_errors() {
        assert_eq!(parse_err("a +"), "Unexpected end of input.");
        assert_eq!(parse_err(")"), "Expression expected.");
        assert_eq!(parse_err("{ a: 1 b }"), "'}' expected.");
        assert_eq!(parse_err("{ 1 }"), "Property assignment expected.");
        assert_eq!(parse_err("a b"), "Unexpected token 'b'.");
    }
}
