//! Statements and the non-module declarations.

use crate::parser::{Context, Parser};
use retype_ast::{
    BindingPattern, Declaration, EnumMember, Expression, ForBinding, ForInitializer,
    IdentifierPosition, Statement, TokenCode, TypeNode, VariableDeclaration, VariableKind,
    VariableStatement,
};
use retype_diagnostics::{messages, Result};
use retype_scanner::Token;

/// A declarator as written. Whether it is legal depends on whether a `for`
/// head turns out to be `in`/`of` or a plain three-part loop.
struct PendingDeclaration<'a> {
    start: Token,
    binding: BindingPattern<'a>,
    type_annotation: Option<TypeNode<'a>>,
    initializer: Option<Expression<'a>>,
}

impl<'a, 'f> Parser<'a, 'f> {
    pub(crate) fn parse_statement_list_item(&mut self) -> Result<Statement<'a>> {
        use TokenCode::*;
        let factory = self.factory;
        match self.peek_code(0) {
            OpenBraceToken => {
                let statements = self.parse_block()?;
                Ok(factory.block(statements))
            }
            VarKeyword => self.parse_variable_statement(VariableKind::Var),
            LetKeyword if self.is_let_declaration() => self.parse_variable_statement(VariableKind::Let),
            ConstKeyword if self.peek_code(1) != EnumKeyword => {
                self.parse_variable_statement(VariableKind::Const)
            }
            SemicolonToken => {
                self.advance();
                Ok(factory.empty_statement())
            }
            IfKeyword => self.parse_if_statement(),
            DoKeyword => self.parse_do_statement(),
            WhileKeyword => {
                self.advance();
                let condition = self.parse_parenthesized_expression()?;
                let body = self.parse_statement_list_item()?;
                Ok(factory.while_statement(condition, body))
            }
            ForKeyword => self.parse_for_statement(),
            ContinueKeyword | BreakKeyword => self.parse_break_or_continue(),
            ReturnKeyword => {
                self.advance();
                let expression = if self.can_insert_semicolon() || self.at(SemicolonToken) {
                    None
                } else {
                    Some(self.allowing_in(|p| p.parse_comma_expression())?)
                };
                self.parse_semicolon()?;
                Ok(factory.return_statement(expression))
            }
            WithKeyword => {
                self.advance();
                let object = self.parse_parenthesized_expression()?;
                let body = self.parse_statement_list_item()?;
                Ok(factory.with_statement(object, body))
            }
            SwitchKeyword => self.parse_switch_statement(),
            ThrowKeyword => {
                self.advance();
                if self.has_line_break_before() {
                    return Err(self.error(&messages::LINE_BREAK_NOT_PERMITTED_HERE, &[]));
                }
                let expression = self.allowing_in(|p| p.parse_comma_expression())?;
                self.parse_semicolon()?;
                Ok(factory.throw_statement(expression))
            }
            TryKeyword => self.parse_try_statement(),
            DebuggerKeyword => {
                self.advance();
                self.parse_semicolon()?;
                Ok(factory.debugger_statement())
            }
            _ if self.is_start_of_declaration() => {
                let declaration = self.parse_declaration_item()?;
                Ok(factory.declaration_statement(declaration))
            }
            _ if self.is_identifier(0) && self.peek_code(1) == ColonToken => {
                let label = self.parse_identifier(IdentifierPosition::Expression)?;
                self.advance();
                let body = self.parse_statement_list_item()?;
                Ok(factory.labeled_statement(label, body))
            }
            _ => {
                let expression = self.allowing_in(|p| p.parse_comma_expression())?;
                self.parse_semicolon()?;
                Ok(factory.expression_statement(expression))
            }
        }
    }

    /// `let` begins a declaration only when a binding follows it; otherwise
    /// it is an ordinary identifier outside strict code.
    fn is_let_declaration(&self) -> bool {
        self.is_identifier(1)
            || matches!(
                self.peek_code(1),
                TokenCode::OpenBracketToken | TokenCode::OpenBraceToken
            )
    }

    fn is_start_of_declaration(&self) -> bool {
        match self.peek_code(0) {
            TokenCode::FunctionKeyword | TokenCode::ClassKeyword | TokenCode::EnumKeyword => true,
            TokenCode::ConstKeyword => self.peek_code(1) == TokenCode::EnumKeyword,
            TokenCode::InterfaceKeyword | TokenCode::TypeKeyword => self.is_identifier(1),
            _ => false,
        }
    }

    /// Statements up to, but not including, the closing brace.
    pub(crate) fn parse_statements_until_close_brace(&mut self) -> Result<Vec<Statement<'a>>> {
        let mut statements = Vec::new();
        while !self.at(TokenCode::CloseBraceToken) {
            if self.at(TokenCode::EndOfFileToken) {
                return Err(self.expected(TokenCode::CloseBraceToken));
            }
            statements.push(self.parse_statement_list_item()?);
        }
        Ok(statements)
    }

    pub(crate) fn parse_block(&mut self) -> Result<Vec<Statement<'a>>> {
        self.expect(TokenCode::OpenBraceToken)?;
        let statements = self.parse_statements_until_close_brace()?;
        self.expect(TokenCode::CloseBraceToken)?;
        Ok(statements)
    }

    fn parse_parenthesized_expression(&mut self) -> Result<Expression<'a>> {
        self.expect(TokenCode::OpenParenToken)?;
        let expression = self.allowing_in(|p| p.parse_comma_expression())?;
        self.expect(TokenCode::CloseParenToken)?;
        Ok(expression)
    }

    // ========================================================================
    // Variable declarations
    // ========================================================================

    fn parse_variable_statement(&mut self, kind: VariableKind) -> Result<Statement<'a>> {
        let statement = self.parse_variable_declaration_list(kind)?;
        self.parse_semicolon()?;
        Ok(self.factory.variable(statement))
    }

    /// `var a = 1, { b } = c` without its terminator. The current token is
    /// the `var`, `let` or `const` keyword.
    pub(crate) fn parse_variable_declaration_list(
        &mut self,
        kind: VariableKind,
    ) -> Result<&'a VariableStatement<'a>> {
        self.advance();
        let declarations = self
            .parse_pending_declarations()?
            .into_iter()
            .map(|pending| self.finish_declaration(pending))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.factory.variable_statement(kind, declarations))
    }

    fn parse_pending_declarations(&mut self) -> Result<Vec<PendingDeclaration<'a>>> {
        let mut declarations = Vec::new();
        loop {
            let start = self.peek().clone();
            let binding = self.parse_binding_pattern()?;
            let type_annotation = self.parse_type_annotation()?;
            let initializer = if self.read_if(TokenCode::EqualsToken) {
                Some(self.parse_assignment_expression()?)
            } else {
                None
            };
            declarations.push(PendingDeclaration {
                start,
                binding,
                type_annotation,
                initializer,
            });
            if !self.read_if(TokenCode::CommaToken) {
                return Ok(declarations);
            }
        }
    }

    fn finish_declaration(&self, pending: PendingDeclaration<'a>) -> Result<VariableDeclaration<'a>> {
        let factory = self.factory;
        match (pending.binding, pending.initializer) {
            (BindingPattern::Identifier(name), initializer) => {
                Ok(factory.simple_declaration(name, pending.type_annotation, initializer))
            }
            (pattern, Some(initializer)) => Ok(factory.destructuring_declaration(
                pattern,
                pending.type_annotation,
                initializer,
            )),
            (_, None) => Err(self.error_at(
                &pending.start,
                &messages::DESTRUCTURING_DECLARATION_MUST_HAVE_INITIALIZER,
                &[],
            )),
        }
    }

    // ========================================================================
    // Control flow
    // ========================================================================

    fn parse_if_statement(&mut self) -> Result<Statement<'a>> {
        self.expect(TokenCode::IfKeyword)?;
        let condition = self.parse_parenthesized_expression()?;
        let then_statement = self.parse_statement_list_item()?;
        let else_statement = if self.read_if(TokenCode::ElseKeyword) {
            Some(self.parse_statement_list_item()?)
        } else {
            None
        };
        Ok(self
            .factory
            .if_statement(condition, then_statement, else_statement))
    }

    fn parse_do_statement(&mut self) -> Result<Statement<'a>> {
        self.expect(TokenCode::DoKeyword)?;
        let body = self.parse_statement_list_item()?;
        self.expect(TokenCode::WhileKeyword)?;
        let condition = self.parse_parenthesized_expression()?;
        // The semicolon after `do ... while (x)` is always optional.
        self.read_if(TokenCode::SemicolonToken);
        Ok(self.factory.do_while_statement(body, condition))
    }

    fn parse_for_statement(&mut self) -> Result<Statement<'a>> {
        self.expect(TokenCode::ForKeyword)?;
        self.expect(TokenCode::OpenParenToken)?;
        let head = Context {
            allow_in: false,
            ..self.context
        };

        let kind = match self.peek_code(0) {
            TokenCode::VarKeyword => Some(VariableKind::Var),
            TokenCode::LetKeyword if self.is_let_declaration() => Some(VariableKind::Let),
            TokenCode::ConstKeyword => Some(VariableKind::Const),
            _ => None,
        };

        if let Some(kind) = kind {
            self.advance();
            let declarations = self.with_context(head, |p| p.parse_pending_declarations())?;
            if let Some(each) = self.for_each_keyword() {
                return self.parse_for_each_declaration(kind, declarations, each);
            }
            let declarations = declarations
                .into_iter()
                .map(|pending| self.finish_declaration(pending))
                .collect::<Result<Vec<_>>>()?;
            let statement = self.factory.variable_statement(kind, declarations);
            return self.parse_for_rest(Some(ForInitializer::Variable(statement)));
        }

        if self.at(TokenCode::SemicolonToken) {
            return self.parse_for_rest(None);
        }
        let initializer = self.with_context(head, |p| p.parse_comma_expression())?;
        match self.for_each_keyword() {
            Some(each) => self.parse_for_each_rest(each, ForBinding::Expression(initializer)),
            None => self.parse_for_rest(Some(ForInitializer::Expression(initializer))),
        }
    }

    fn for_each_keyword(&self) -> Option<TokenCode> {
        match self.peek_code(0) {
            code @ (TokenCode::InKeyword | TokenCode::OfKeyword) => Some(code),
            _ => None,
        }
    }

    fn parse_for_each_declaration(
        &mut self,
        kind: VariableKind,
        declarations: Vec<PendingDeclaration<'a>>,
        each: TokenCode,
    ) -> Result<Statement<'a>> {
        let statement = if each == TokenCode::InKeyword {
            "for...in"
        } else {
            "for...of"
        };
        let mut declarations = declarations.into_iter();
        let (Some(declaration), None) = (declarations.next(), declarations.next()) else {
            return Err(self.error(
                &messages::ONLY_ONE_VARIABLE_DECLARATION_ALLOWED_IN_FOR_IN_OR_OF,
                &[statement],
            ));
        };
        if declaration.initializer.is_some() {
            return Err(self.error_at(
                &declaration.start,
                &messages::INITIALIZER_NOT_ALLOWED_IN_FOR_IN_OR_OF,
                &[statement],
            ));
        }
        if declaration.type_annotation.is_some() {
            return Err(self.error_at(
                &declaration.start,
                &messages::TYPE_ANNOTATION_NOT_ALLOWED_IN_FOR_IN_OR_OF,
                &[statement],
            ));
        }
        let binding = ForBinding::Variable {
            kind,
            binding: declaration.binding,
        };
        self.parse_for_each_rest(each, binding)
    }

    /// From the `in` or `of` keyword to the end of the loop body.
    fn parse_for_each_rest(&mut self, each: TokenCode, binding: ForBinding<'a>) -> Result<Statement<'a>> {
        self.advance();
        let expression = self.allowing_in(|p| {
            if each == TokenCode::OfKeyword {
                p.parse_assignment_expression()
            } else {
                p.parse_comma_expression()
            }
        })?;
        self.expect(TokenCode::CloseParenToken)?;
        let body = self.parse_statement_list_item()?;
        Ok(if each == TokenCode::OfKeyword {
            self.factory.for_of_statement(binding, expression, body)
        } else {
            self.factory.for_in_statement(binding, expression, body)
        })
    }

    /// From the first `;` of a three-part `for` to the end of the body.
    fn parse_for_rest(&mut self, initializer: Option<ForInitializer<'a>>) -> Result<Statement<'a>> {
        self.expect(TokenCode::SemicolonToken)?;
        let condition = if self.at(TokenCode::SemicolonToken) {
            None
        } else {
            Some(self.allowing_in(|p| p.parse_comma_expression())?)
        };
        self.expect(TokenCode::SemicolonToken)?;
        let incrementor = if self.at(TokenCode::CloseParenToken) {
            None
        } else {
            Some(self.allowing_in(|p| p.parse_comma_expression())?)
        };
        self.expect(TokenCode::CloseParenToken)?;
        let body = self.parse_statement_list_item()?;
        Ok(self
            .factory
            .for_statement(initializer, condition, incrementor, body))
    }

    fn parse_break_or_continue(&mut self) -> Result<Statement<'a>> {
        let is_break = self.at(TokenCode::BreakKeyword);
        self.advance();
        let label = if !self.can_insert_semicolon() && self.is_identifier(0) {
            Some(self.parse_identifier(IdentifierPosition::Expression)?)
        } else {
            None
        };
        self.parse_semicolon()?;
        Ok(if is_break {
            self.factory.break_statement(label)
        } else {
            self.factory.continue_statement(label)
        })
    }

    fn parse_switch_statement(&mut self) -> Result<Statement<'a>> {
        self.expect(TokenCode::SwitchKeyword)?;
        let discriminant = self.parse_parenthesized_expression()?;
        self.expect(TokenCode::OpenBraceToken)?;
        let mut clauses = Vec::new();
        while !self.at(TokenCode::CloseBraceToken) {
            let test = match self.peek_code(0) {
                TokenCode::CaseKeyword => {
                    self.advance();
                    Some(self.allowing_in(|p| p.parse_comma_expression())?)
                }
                TokenCode::DefaultKeyword => {
                    self.advance();
                    None
                }
                _ => return Err(self.expected(TokenCode::CaseKeyword)),
            };
            self.expect(TokenCode::ColonToken)?;
            let mut statements = Vec::new();
            while !matches!(
                self.peek_code(0),
                TokenCode::CaseKeyword
                    | TokenCode::DefaultKeyword
                    | TokenCode::CloseBraceToken
                    | TokenCode::EndOfFileToken
            ) {
                statements.push(self.parse_statement_list_item()?);
            }
            clauses.push(self.factory.switch_clause(test, statements));
        }
        self.expect(TokenCode::CloseBraceToken)?;
        Ok(self.factory.switch_statement(discriminant, clauses))
    }

    fn parse_try_statement(&mut self) -> Result<Statement<'a>> {
        self.expect(TokenCode::TryKeyword)?;
        let block = self.parse_block()?;
        let catch_clause = if self.read_if(TokenCode::CatchKeyword) {
            let parameter = if self.read_if(TokenCode::OpenParenToken) {
                let parameter = self.parse_binding_pattern()?;
                self.expect(TokenCode::CloseParenToken)?;
                Some(parameter)
            } else {
                None
            };
            let block = self.parse_block()?;
            Some(self.factory.catch_clause(parameter, block))
        } else {
            None
        };
        let finally_block = if self.read_if(TokenCode::FinallyKeyword) {
            Some(self.parse_block()?)
        } else {
            None
        };
        if catch_clause.is_none() && finally_block.is_none() {
            return Err(self.expected(TokenCode::CatchKeyword));
        }
        Ok(self.factory.try_statement(block, catch_clause, finally_block))
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    pub(crate) fn parse_declaration_item(&mut self) -> Result<Declaration<'a>> {
        match self.peek_code(0) {
            TokenCode::FunctionKeyword => self.parse_function_declaration(),
            TokenCode::ClassKeyword => {
                let class = self.parse_class_definition(true)?;
                Ok(self.factory.class_declaration(class))
            }
            TokenCode::InterfaceKeyword => self.parse_interface_declaration(),
            TokenCode::TypeKeyword => self.parse_type_alias_declaration(),
            TokenCode::EnumKeyword => self.parse_enum_declaration(false),
            TokenCode::ConstKeyword if self.peek_code(1) == TokenCode::EnumKeyword => {
                self.advance();
                self.parse_enum_declaration(true)
            }
            _ => Err(self.error(&messages::DECLARATION_EXPECTED, &[])),
        }
    }

    fn parse_interface_declaration(&mut self) -> Result<Declaration<'a>> {
        self.expect(TokenCode::InterfaceKeyword)?;
        let name = self.parse_identifier(IdentifierPosition::TypeDeclaration)?;
        let type_parameters = self.parse_type_parameters()?;
        let mut extends = Vec::new();
        if self.read_if(TokenCode::ExtendsKeyword) {
            loop {
                extends.push(self.parse_type_reference()?);
                if !self.read_if(TokenCode::CommaToken) {
                    break;
                }
            }
        }
        let body = self.parse_object_type()?;
        Ok(self
            .factory
            .interface_declaration(name, type_parameters, extends, body))
    }

    fn parse_type_alias_declaration(&mut self) -> Result<Declaration<'a>> {
        self.expect(TokenCode::TypeKeyword)?;
        let name = self.parse_identifier(IdentifierPosition::TypeDeclaration)?;
        let type_parameters = self.parse_type_parameters()?;
        self.expect(TokenCode::EqualsToken)?;
        let type_node = self.parse_union_type()?;
        self.parse_semicolon()?;
        Ok(self
            .factory
            .type_alias_declaration(name, type_parameters, type_node))
    }

    /// `enum E { A, B = 2, }`. A leading `const` has been consumed already.
    fn parse_enum_declaration(&mut self, is_const: bool) -> Result<Declaration<'a>> {
        self.expect(TokenCode::EnumKeyword)?;
        let name = self.parse_identifier(IdentifierPosition::TypeDeclaration)?;
        self.expect(TokenCode::OpenBraceToken)?;
        let mut members: Vec<EnumMember<'a>> = Vec::new();
        while !self.at(TokenCode::CloseBraceToken) {
            let member = self.parse_property_name()?;
            let initializer = if self.read_if(TokenCode::EqualsToken) {
                Some(self.allowing_in(|p| p.parse_assignment_expression())?)
            } else {
                None
            };
            members.push(self.factory.enum_member(member, initializer));
            if !self.read_if(TokenCode::CommaToken) {
                break;
            }
        }
        self.expect(TokenCode::CloseBraceToken)?;
        Ok(self.factory.enum_declaration(name, is_const, members))
    }
}
