//! Type parsing.

use crate::parser::Parser;
use crate::utilities::{accessibility, predefined_type};
use retype_ast::{
    IdentifierPosition, IndexSignature, ObjectType, QualifiedName, TokenCode, TypeMember,
    TypeNode, TypeReference,
};
use retype_diagnostics::{messages, Result};

impl<'a, 'f> Parser<'a, 'f> {
    /// `A | B` and `A & B`. Both operators share one precedence level and
    /// associate to the right.
    pub(crate) fn parse_union_type(&mut self) -> Result<TypeNode<'a>> {
        let left = self.parse_array_type_or_higher()?;
        match self.peek_code(0) {
            TokenCode::BarToken => {
                self.advance();
                let right = self.parse_union_type()?;
                Ok(self.factory.union_type(left, right))
            }
            TokenCode::AmpersandToken => {
                self.advance();
                let right = self.parse_union_type()?;
                Ok(self.factory.intersection_type(left, right))
            }
            _ => Ok(left),
        }
    }

    /// `T[]`, `T[][]`, ...
    fn parse_array_type_or_higher(&mut self) -> Result<TypeNode<'a>> {
        let mut type_node = self.parse_primary_type()?;
        while self.at(TokenCode::OpenBracketToken)
            && self.peek_code(1) == TokenCode::CloseBracketToken
        {
            self.skip(2);
            type_node = self.factory.array_type(type_node);
        }
        Ok(type_node)
    }

    fn parse_primary_type(&mut self) -> Result<TypeNode<'a>> {
        let factory = self.factory;
        let code = self.peek_code(0);
        if let Some(predefined) = predefined_type(code) {
            self.advance();
            return Ok(factory.predefined_type(predefined));
        }
        match code {
            TokenCode::OpenParenToken => {
                if self.look_ahead(|p| p.is_start_of_function_type()) {
                    self.parse_function_type()
                } else {
                    self.advance();
                    let inner = self.parse_union_type()?;
                    self.expect(TokenCode::CloseParenToken)?;
                    Ok(factory.parenthesized_type(inner))
                }
            }
            TokenCode::LessThanToken => self.parse_function_type(),
            TokenCode::NewKeyword => {
                self.advance();
                let type_parameters = self.parse_type_parameters()?;
                let parameters = self.parse_parameter_list()?;
                self.expect(TokenCode::EqualsGreaterThanToken)?;
                let return_type = self.parse_union_type()?;
                Ok(factory.constructor_type(type_parameters, parameters, return_type))
            }
            TokenCode::OpenBraceToken => {
                let object = self.parse_object_type()?;
                Ok(factory.object_type_node(object))
            }
            TokenCode::OpenBracketToken => {
                self.advance();
                let mut elements = vec![self.parse_union_type()?];
                while self.read_if(TokenCode::CommaToken) {
                    elements.push(self.parse_union_type()?);
                }
                self.expect(TokenCode::CloseBracketToken)?;
                Ok(factory.tuple_type(elements))
            }
            TokenCode::TypeOfKeyword => {
                self.advance();
                let name = self.parse_qualified_name()?;
                Ok(factory.type_query(name))
            }
            TokenCode::ThisKeyword => {
                self.advance();
                Ok(factory.this_type())
            }
            _ if self.is_identifier(0) => {
                let reference = self.parse_type_reference()?;
                Ok(factory.type_reference_node(reference))
            }
            _ => Err(self.error(&messages::TYPE_EXPECTED, &[])),
        }
    }

    /// Decide whether the `(` here opens a function type's parameter list.
    /// Only called inside `look_ahead`, so it may consume freely.
    fn is_start_of_function_type(&mut self) -> bool {
        self.advance();
        if matches!(
            self.peek_code(0),
            TokenCode::CloseParenToken | TokenCode::DotDotDotToken
        ) {
            return true;
        }
        if accessibility(self.peek_code(0)).is_some() && self.is_binding_start(1) {
            self.advance();
        }
        if self.is_identifier(0) {
            self.advance();
        } else if matches!(
            self.peek_code(0),
            TokenCode::OpenBraceToken | TokenCode::OpenBracketToken
        ) {
            if self.parse_binding_pattern().is_err() {
                return false;
            }
        } else {
            return false;
        }
        match self.peek_code(0) {
            TokenCode::ColonToken
            | TokenCode::CommaToken
            | TokenCode::QuestionToken
            | TokenCode::EqualsToken => true,
            TokenCode::CloseParenToken => self.peek_code(1) == TokenCode::EqualsGreaterThanToken,
            _ => false,
        }
    }

    /// `<T>(x: T) => R` or `(x) => R`
    fn parse_function_type(&mut self) -> Result<TypeNode<'a>> {
        let type_parameters = self.parse_type_parameters()?;
        let parameters = self.parse_parameter_list()?;
        self.expect(TokenCode::EqualsGreaterThanToken)?;
        let return_type = self.parse_union_type()?;
        Ok(self
            .factory
            .function_type(type_parameters, parameters, return_type))
    }

    pub(crate) fn parse_qualified_name(&mut self) -> Result<&'a QualifiedName<'a>> {
        let mut name = self.parse_identifier(IdentifierPosition::Expression)?;
        let mut prefix = Vec::new();
        while self.read_if(TokenCode::DotToken) {
            prefix.push(name);
            name = self.parse_identifier_name()?;
        }
        Ok(self.factory.qualified_name(prefix, name))
    }

    pub(crate) fn parse_type_reference(&mut self) -> Result<&'a TypeReference<'a>> {
        let name = self.parse_qualified_name()?;
        let type_arguments = if self.at(TokenCode::LessThanToken) {
            self.parse_type_arguments()?
        } else {
            Vec::new()
        };
        Ok(self.factory.type_reference(name, type_arguments))
    }

    /// `<A, B>`. The closing `>` is always its own token, so nested lists
    /// such as `A<B<C>>` close one at a time.
    pub(crate) fn parse_type_arguments(&mut self) -> Result<Vec<TypeNode<'a>>> {
        self.expect(TokenCode::LessThanToken)?;
        let mut arguments = vec![self.parse_union_type()?];
        while self.read_if(TokenCode::CommaToken) {
            arguments.push(self.parse_union_type()?);
        }
        self.expect(TokenCode::GreaterThanToken)?;
        Ok(arguments)
    }

    /// `: T`, if present.
    pub(crate) fn parse_type_annotation(&mut self) -> Result<Option<TypeNode<'a>>> {
        if self.read_if(TokenCode::ColonToken) {
            self.parse_union_type().map(Some)
        } else {
            Ok(None)
        }
    }

    // ========================================================================
    // Object types
    // ========================================================================

    /// `{ member; member, member }`. A line break also separates members.
    pub(crate) fn parse_object_type(&mut self) -> Result<&'a ObjectType<'a>> {
        self.expect(TokenCode::OpenBraceToken)?;
        let mut members = Vec::new();
        while !self.at(TokenCode::CloseBraceToken) {
            members.push(self.parse_type_member()?);
            let separated = self.read_if(TokenCode::SemicolonToken)
                || self.read_if(TokenCode::CommaToken)
                || self.can_insert_semicolon();
            if !separated {
                return Err(self.expected(TokenCode::SemicolonToken));
            }
        }
        self.expect(TokenCode::CloseBraceToken)?;
        Ok(self.factory.object_type(members))
    }

    fn parse_type_member(&mut self) -> Result<TypeMember<'a>> {
        let factory = self.factory;
        match self.peek_code(0) {
            TokenCode::OpenParenToken | TokenCode::LessThanToken => {
                let signature = self.parse_call_signature()?;
                Ok(factory.call_signature_member(signature))
            }
            TokenCode::NewKeyword
                if matches!(
                    self.peek_code(1),
                    TokenCode::OpenParenToken | TokenCode::LessThanToken
                ) =>
            {
                self.advance();
                let signature = self.parse_call_signature()?;
                Ok(factory.construct_signature_member(signature))
            }
            TokenCode::OpenBracketToken if self.is_index_signature_start() => {
                self.parse_index_signature().map(TypeMember::IndexSignature)
            }
            _ => {
                let name = self.parse_property_name()?;
                let optional = self.read_if(TokenCode::QuestionToken);
                if matches!(
                    self.peek_code(0),
                    TokenCode::OpenParenToken | TokenCode::LessThanToken
                ) {
                    let signature = self.parse_call_signature()?;
                    Ok(factory.method_signature(name, optional, signature))
                } else {
                    let type_annotation = self.parse_type_annotation()?;
                    Ok(factory.property_signature(name, optional, type_annotation))
                }
            }
        }
    }

    /// `[name:` opens an index signature rather than a computed key.
    pub(crate) fn is_index_signature_start(&self) -> bool {
        self.at(TokenCode::OpenBracketToken)
            && self.peek_code(1).is_identifier_name()
            && self.peek_code(2) == TokenCode::ColonToken
    }

    /// `[key: K]: T`
    pub(crate) fn parse_index_signature(&mut self) -> Result<&'a IndexSignature<'a>> {
        self.expect(TokenCode::OpenBracketToken)?;
        let parameter = self.parse_identifier(IdentifierPosition::Expression)?;
        self.expect(TokenCode::ColonToken)?;
        let key_type = self.parse_union_type()?;
        self.expect(TokenCode::CloseBracketToken)?;
        self.expect(TokenCode::ColonToken)?;
        let type_annotation = self.parse_union_type()?;
        Ok(self
            .factory
            .index_signature(parameter, key_type, type_annotation))
    }
}

#[cfg(test)]
mod tests {
    use crate::{ParseOptions, Parser};
    use bumpalo::Bump;
    use retype_ast::*;

    fn parse(source: &str, check: impl FnOnce(TypeNode<'_>)) {
        let arena = Bump::new();
        let factory = NodeFactory::new(&arena);
        let mut parser = Parser::new(&factory, source, ParseOptions::default()).unwrap();
        check(parser.parse_type().unwrap());
    }

    fn parse_err(source: &str) -> String {
        let arena = Bump::new();
        let factory = NodeFactory::new(&arena);
        let mut parser = Parser::new(&factory, source, ParseOptions::default()).unwrap();
        parser.parse_type().unwrap_err().message
    }

    #[test]
    fn test_nested_type_arguments() {
        parse("A<B<C>>", |t| {
            let TypeNode::TypeReference(a) = t else { panic!("{t:?}") };
            assert_eq!(a.name.name.text(), "A");
            let [TypeNode::TypeReference(b)] = a.type_arguments else { panic!("{a:?}") };
            assert_eq!(b.name.name.text(), "B");
            assert!(matches!(b.type_arguments, [TypeNode::TypeReference(c)] if c.name.name.text() == "C"));
        });
        parse("Map<string, Array<Set<number>>>", |t| {
            assert!(matches!(t, TypeNode::TypeReference(r) if r.type_arguments.len() == 2));
        });
    }

    #[test]
    fn test_union_and_intersection_associate_right() {
        parse("A | B & C", |t| {
            let TypeNode::UnionType(union) = t else { panic!("{t:?}") };
            assert!(matches!(union.left, TypeNode::TypeReference(_)));
            assert!(matches!(union.right, TypeNode::IntersectionType(_)));
        });
        parse("A & B | C", |t| {
            let TypeNode::IntersectionType(intersection) = t else { panic!("{t:?}") };
            assert!(matches!(intersection.right, TypeNode::UnionType(_)));
        });
        assert_eq!(parse_err("| A"), "Type expected.");
    }

    #[test]
    fn test_array_suffix_iterates() {
        parse("number[][]", |t| {
            let TypeNode::ArrayType(TypeNode::ArrayType(inner)) = t else { panic!("{t:?}") };
            assert_eq!(**inner, TypeNode::Predefined(PredefinedType::Number));
        });
    }

    #[test]
    fn test_function_type_or_parenthesized() {
        parse("(x: number) => number", |t| {
            let TypeNode::FunctionType(function) = t else { panic!("{t:?}") };
            assert_eq!(function.parameters.required.len(), 1);
            assert_eq!(function.return_type, TypeNode::Predefined(PredefinedType::Number));
        });
        parse("(number)", |t| {
            assert_eq!(
                t,
                TypeNode::ParenthesizedType(&TypeNode::Predefined(PredefinedType::Number))
            );
        });
        parse("() => void", |t| assert!(matches!(t, TypeNode::FunctionType(f) if f.parameters.is_empty())));
        parse("(...xs: any[]) => void", |t| assert!(matches!(t, TypeNode::FunctionType(f) if f.parameters.rest.is_some())));
        parse("(a) => a", |t| assert!(matches!(t, TypeNode::FunctionType(_))));
        parse("({ a, b }: T) => void", |t| assert!(matches!(t, TypeNode::FunctionType(_))));
        parse("(A | B)[]", |t| assert!(matches!(t, TypeNode::ArrayType(TypeNode::ParenthesizedType(_)))));
        parse("<T>(x: T) => T", |t| assert!(matches!(t, TypeNode::FunctionType(f) if f.type_parameters.len() == 1)));
        parse("new (x: string) => Foo", |t| assert!(matches!(t, TypeNode::ConstructorType(_))));
    }

    #[test]
    fn test_other_primary_types() {
        parse("[string, number]", |t| assert!(matches!(t, TypeNode::TupleType(e) if e.len() == 2)));
        parse("typeof a.b.c", |t| {
            let TypeNode::TypeQuery(name) = t else { panic!("{t:?}") };
            let parts: Vec<_> = name.parts().map(|p| p.text()).collect();
            assert_eq!(parts, ["a", "b", "c"]);
        });
        parse("this", |t| assert_eq!(t, TypeNode::ThisType));
        parse("ns.Foo", |t| assert!(matches!(t, TypeNode::TypeReference(r) if r.name.prefix.len() == 1)));
        assert_eq!(parse_err("[]"), "Type expected.");
    }

    #[test]
    fn test_object_type_members() {
        parse(
            "{ a: string; b?: number, m(x): void\n (): any; new (): Foo; [key: string]: any; <T>(x: T): T }",
            |t| {
                let TypeNode::ObjectType(object) = t else { panic!("{t:?}") };
                assert!(matches!(
                    object.members,
                    [
                        TypeMember::Property(_),
                        TypeMember::Property(b),
                        TypeMember::Method(_),
                        TypeMember::CallSignature(_),
                        TypeMember::ConstructSignature(_),
                        TypeMember::IndexSignature(_),
                        TypeMember::CallSignature(_),
                    ] if b.optional
                ));
            },
        );
        assert_eq!(parse_err("{ a: string b: number }"), "';' expected.");
    }
}
