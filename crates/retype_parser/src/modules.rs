//! Import and export declarations.

use crate::parser::Parser;
use retype_ast::{
    ExportSpecifier, IdentifierPosition, ImportSpecifier, ModuleItem, TokenCode, VariableKind,
};
use retype_diagnostics::Result;

impl<'a, 'f> Parser<'a, 'f> {
    pub(crate) fn parse_module_item(&mut self) -> Result<ModuleItem<'a>> {
        match self.peek_code(0) {
            TokenCode::ImportKeyword => self.parse_import_declaration(),
            TokenCode::ExportKeyword => self.parse_export_declaration(),
            _ => {
                let statement = self.parse_statement_list_item()?;
                Ok(self.factory.statement_item(statement))
            }
        }
    }

    fn parse_module_specifier(&mut self) -> Result<String> {
        if !self.at(TokenCode::StringLiteral) {
            return Err(self.expected(TokenCode::StringLiteral));
        }
        Ok(self.read().string_value().unwrap_or_default().to_string())
    }

    fn parse_import_declaration(&mut self) -> Result<ModuleItem<'a>> {
        self.expect(TokenCode::ImportKeyword)?;

        if self.at(TokenCode::StringLiteral) {
            let module_specifier = self.parse_module_specifier()?;
            self.parse_semicolon()?;
            return Ok(self
                .factory
                .import_declaration(None, None, Vec::new(), &module_specifier));
        }

        let mut default_binding = None;
        let mut namespace_binding = None;
        let mut named_bindings = Vec::new();

        if self.is_identifier(0) {
            default_binding = Some(self.parse_identifier(IdentifierPosition::Expression)?);
        }
        if default_binding.is_none() || self.read_if(TokenCode::CommaToken) {
            match self.peek_code(0) {
                TokenCode::AsteriskToken => {
                    self.advance();
                    self.expect(TokenCode::AsKeyword)?;
                    namespace_binding =
                        Some(self.parse_identifier(IdentifierPosition::Expression)?);
                }
                TokenCode::OpenBraceToken => named_bindings = self.parse_import_specifiers()?,
                _ => return Err(self.expected(TokenCode::OpenBraceToken)),
            }
        }

        self.expect(TokenCode::FromKeyword)?;
        let module_specifier = self.parse_module_specifier()?;
        self.parse_semicolon()?;
        Ok(self.factory.import_declaration(
            default_binding,
            namespace_binding,
            named_bindings,
            &module_specifier,
        ))
    }

    /// `{ a, b as c, default as d }`. Without `as` the imported name is
    /// also the local binding, so it has to be a legal identifier.
    fn parse_import_specifiers(&mut self) -> Result<Vec<ImportSpecifier<'a>>> {
        self.expect(TokenCode::OpenBraceToken)?;
        let mut specifiers = Vec::new();
        while !self.at(TokenCode::CloseBraceToken) {
            let bindable = self.is_identifier(0);
            let imported = self.parse_identifier_name()?;
            let local = if self.read_if(TokenCode::AsKeyword) {
                self.parse_identifier(IdentifierPosition::Expression)?
            } else if bindable {
                imported
            } else {
                return Err(self.expected(TokenCode::AsKeyword));
            };
            specifiers.push(self.factory.import_specifier(imported, local));
            if !self.read_if(TokenCode::CommaToken) {
                break;
            }
        }
        self.expect(TokenCode::CloseBraceToken)?;
        Ok(specifiers)
    }

    fn parse_export_declaration(&mut self) -> Result<ModuleItem<'a>> {
        self.expect(TokenCode::ExportKeyword)?;
        let factory = self.factory;
        match self.peek_code(0) {
            TokenCode::AsteriskToken => {
                self.advance();
                self.expect(TokenCode::FromKeyword)?;
                let module_specifier = self.parse_module_specifier()?;
                self.parse_semicolon()?;
                Ok(factory.export_all(&module_specifier))
            }
            TokenCode::OpenBraceToken => {
                let specifiers = self.parse_export_specifiers()?;
                let module_specifier = if self.read_if(TokenCode::FromKeyword) {
                    Some(self.parse_module_specifier()?)
                } else {
                    None
                };
                self.parse_semicolon()?;
                Ok(factory.export_named(specifiers, module_specifier.as_deref()))
            }
            TokenCode::DefaultKeyword => {
                self.advance();
                let hoistable = matches!(
                    self.peek_code(0),
                    TokenCode::FunctionKeyword | TokenCode::ClassKeyword
                );
                let expression = self.allowing_in(|p| p.parse_assignment_expression())?;
                if hoistable {
                    self.read_if(TokenCode::SemicolonToken);
                } else {
                    self.parse_semicolon()?;
                }
                Ok(factory.export_default(expression))
            }
            code @ (TokenCode::VarKeyword | TokenCode::LetKeyword | TokenCode::ConstKeyword)
                if self.peek_code(1) != TokenCode::EnumKeyword =>
            {
                let kind = match code {
                    TokenCode::VarKeyword => VariableKind::Var,
                    TokenCode::LetKeyword => VariableKind::Let,
                    _ => VariableKind::Const,
                };
                let statement = self.parse_variable_declaration_list(kind)?;
                self.parse_semicolon()?;
                Ok(factory.export_variable(statement))
            }
            _ => {
                let declaration = self.parse_declaration_item()?;
                Ok(factory.export_declaration(declaration))
            }
        }
    }

    /// `{ a, b as c }`. Both sides are identifier names: a re-export may
    /// name `default`.
    fn parse_export_specifiers(&mut self) -> Result<Vec<ExportSpecifier<'a>>> {
        self.expect(TokenCode::OpenBraceToken)?;
        let mut specifiers = Vec::new();
        while !self.at(TokenCode::CloseBraceToken) {
            let local = self.parse_identifier_name()?;
            let exported = if self.read_if(TokenCode::AsKeyword) {
                self.parse_identifier_name()?
            } else {
                local
            };
            specifiers.push(self.factory.export_specifier(local, exported));
            if !self.read_if(TokenCode::CommaToken) {
                break;
            }
        }
        self.expect(TokenCode::CloseBraceToken)?;
        Ok(specifiers)
    }
}

#[cfg(test)]
mod tests {
    use crate::{ParseOptions, Parser};
    use bumpalo::Bump;
    use retype_ast::*;

    fn parse(source: &str, check: impl FnOnce(&Program<'_>)) {
        let arena = Bump::new();
        let factory = NodeFactory::new(&arena);
        let mut parser = Parser::new(&factory, source, ParseOptions::default()).unwrap();
        check(parser.parse_program().unwrap());
    }

    fn parse_err(source: &str) -> String {
        let arena = Bump::new();
        let factory = NodeFactory::new(&arena);
        let mut parser = Parser::new(&factory, source, ParseOptions::default()).unwrap();
        parser.parse_program().unwrap_err().message
    }

    fn import<'a>(program: &Program<'a>) -> ImportDeclaration<'a> {
        match program.items[0] {
            ModuleItem::Import(import) => *import,
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn test_import_forms() {
        parse("import 'side-effect';", |p| {
            let i = import(p);
            assert_eq!(i.module_specifier, "side-effect");
            assert!(i.default_binding.is_none() && i.named_bindings.is_empty());
        });
        parse("import React, { useState as state, memo } from \"react\";", |p| {
            let i = import(p);
            assert_eq!(i.default_binding.map(|d| d.text()), Some("React"));
            assert_eq!(i.named_bindings.len(), 2);
            assert_eq!(i.named_bindings[0].imported.text(), "useState");
            assert_eq!(i.named_bindings[0].local.text(), "state");
        });
        parse("import * as fs from 'fs'", |p| {
            assert_eq!(import(p).namespace_binding.map(|n| n.text()), Some("fs"));
        });
        parse("import { default as x } from 'm';", |p| {
            assert_eq!(import(p).named_bindings[0].imported.text(), "default");
        });
    }

    #[test]
    fn test_import_errors() {
        assert_eq!(parse_err("import { default } from 'm';"), "'as' expected.");
        assert_eq!(parse_err("import x 'm';"), "'from' expected.");
    }

    #[test]
    fn test_export_forms() {
        parse(
            "export * from 'a';\n\
             export { a as b, default } from 'c';\n\
             export default function () {}\n\
             export const x = 1;\n\
             export interface I {}\n\
             export const enum E { A }",
            |p| {
                let items = p.items;
                assert!(matches!(items[0], ModuleItem::Export(ExportDeclaration::All("a"))));
                let ModuleItem::Export(ExportDeclaration::Named(named)) = items[1] else {
                    panic!("{:?}", items[1])
                };
                assert_eq!(named.module_specifier, Some("c"));
                assert_eq!(named.specifiers[0].exported.text(), "b");
                assert!(matches!(
                    items[2],
                    ModuleItem::Export(ExportDeclaration::Default(Expression::Function(_)))
                ));
                assert!(matches!(items[3], ModuleItem::Export(ExportDeclaration::Variable(_))));
                assert!(matches!(
                    items[4],
                    ModuleItem::Export(ExportDeclaration::Declaration(Declaration::Interface(_)))
                ));
                assert!(matches!(
                    items[5],
                    ModuleItem::Export(ExportDeclaration::Declaration(Declaration::Enum(e))) if e.is_const
                ));
            },
        );
    }
}
