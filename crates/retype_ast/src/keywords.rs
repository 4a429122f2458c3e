//! Keyword classification tables.
//!
//! Every keyword sits in exactly one [`KeywordCategory`]. The category alone
//! decides whether a keyword token may stand where an identifier is expected.

use crate::token_code::TokenCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// Never usable as an identifier.
    ReservedAlways,
    /// Usable as an identifier outside strict mode only.
    ReservedInStrictMode,
    /// Usable as an identifier, but never as the name of a user-defined type.
    TypeNameRestricted,
    /// Contextual keywords, usable as identifiers everywhere.
    IdentifierEligible,
}

/// Where an identifier is being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierPosition {
    Expression,
    /// The declared name of an interface, type alias, class, enum or type
    /// parameter.
    TypeDeclaration,
}

/// Look up a keyword by its exact text.
pub fn keyword_from_str(text: &str) -> Option<TokenCode> {
    let code = match text {
        "break" => TokenCode::BreakKeyword,
        "case" => TokenCode::CaseKeyword,
        "catch" => TokenCode::CatchKeyword,
        "class" => TokenCode::ClassKeyword,
        "const" => TokenCode::ConstKeyword,
        "continue" => TokenCode::ContinueKeyword,
        "debugger" => TokenCode::DebuggerKeyword,
        "default" => TokenCode::DefaultKeyword,
        "delete" => TokenCode::DeleteKeyword,
        "do" => TokenCode::DoKeyword,
        "else" => TokenCode::ElseKeyword,
        "enum" => TokenCode::EnumKeyword,
        "export" => TokenCode::ExportKeyword,
        "extends" => TokenCode::ExtendsKeyword,
        "false" => TokenCode::FalseKeyword,
        "finally" => TokenCode::FinallyKeyword,
        "for" => TokenCode::ForKeyword,
        "function" => TokenCode::FunctionKeyword,
        "if" => TokenCode::IfKeyword,
        "import" => TokenCode::ImportKeyword,
        "in" => TokenCode::InKeyword,
        "instanceof" => TokenCode::InstanceOfKeyword,
        "new" => TokenCode::NewKeyword,
        "null" => TokenCode::NullKeyword,
        "return" => TokenCode::ReturnKeyword,
        "super" => TokenCode::SuperKeyword,
        "switch" => TokenCode::SwitchKeyword,
        "this" => TokenCode::ThisKeyword,
        "throw" => TokenCode::ThrowKeyword,
        "true" => TokenCode::TrueKeyword,
        "try" => TokenCode::TryKeyword,
        "typeof" => TokenCode::TypeOfKeyword,
        "var" => TokenCode::VarKeyword,
        "void" => TokenCode::VoidKeyword,
        "while" => TokenCode::WhileKeyword,
        "with" => TokenCode::WithKeyword,
        "implements" => TokenCode::ImplementsKeyword,
        "interface" => TokenCode::InterfaceKeyword,
        "let" => TokenCode::LetKeyword,
        "package" => TokenCode::PackageKeyword,
        "private" => TokenCode::PrivateKeyword,
        "protected" => TokenCode::ProtectedKeyword,
        "public" => TokenCode::PublicKeyword,
        "static" => TokenCode::StaticKeyword,
        "yield" => TokenCode::YieldKeyword,
        "any" => TokenCode::AnyKeyword,
        "boolean" => TokenCode::BooleanKeyword,
        "number" => TokenCode::NumberKeyword,
        "string" => TokenCode::StringKeyword,
        "symbol" => TokenCode::SymbolKeyword,
        "abstract" => TokenCode::AbstractKeyword,
        "as" => TokenCode::AsKeyword,
        "async" => TokenCode::AsyncKeyword,
        "await" => TokenCode::AwaitKeyword,
        "constructor" => TokenCode::ConstructorKeyword,
        "declare" => TokenCode::DeclareKeyword,
        "from" => TokenCode::FromKeyword,
        "get" => TokenCode::GetKeyword,
        "is" => TokenCode::IsKeyword,
        "module" => TokenCode::ModuleKeyword,
        "namespace" => TokenCode::NamespaceKeyword,
        "of" => TokenCode::OfKeyword,
        "readonly" => TokenCode::ReadonlyKeyword,
        "require" => TokenCode::RequireKeyword,
        "set" => TokenCode::SetKeyword,
        "type" => TokenCode::TypeKeyword,
        _ => return None,
    };
    Some(code)
}

/// The category of a keyword code, or None for non-keywords.
pub fn category(code: TokenCode) -> Option<KeywordCategory> {
    use TokenCode::*;
    let category = match code {
        BreakKeyword | CaseKeyword | CatchKeyword | ClassKeyword | ConstKeyword
        | ContinueKeyword | DebuggerKeyword | DefaultKeyword | DeleteKeyword | DoKeyword
        | ElseKeyword | EnumKeyword | ExportKeyword | ExtendsKeyword | FalseKeyword
        | FinallyKeyword | ForKeyword | FunctionKeyword | IfKeyword | ImportKeyword
        | InKeyword | InstanceOfKeyword | NewKeyword | NullKeyword | ReturnKeyword
        | SuperKeyword | SwitchKeyword | ThisKeyword | ThrowKeyword | TrueKeyword
        | TryKeyword | TypeOfKeyword | VarKeyword | VoidKeyword | WhileKeyword
        | WithKeyword => KeywordCategory::ReservedAlways,

        ImplementsKeyword | InterfaceKeyword | LetKeyword | PackageKeyword
        | PrivateKeyword | ProtectedKeyword | PublicKeyword | StaticKeyword
        | YieldKeyword => KeywordCategory::ReservedInStrictMode,

        AnyKeyword | BooleanKeyword | NumberKeyword | StringKeyword | SymbolKeyword => {
            KeywordCategory::TypeNameRestricted
        }

        AbstractKeyword | AsKeyword | AsyncKeyword | AwaitKeyword | ConstructorKeyword
        | DeclareKeyword | FromKeyword | GetKeyword | IsKeyword | ModuleKeyword
        | NamespaceKeyword | OfKeyword | ReadonlyKeyword | RequireKeyword | SetKeyword
        | TypeKeyword => KeywordCategory::IdentifierEligible,

        _ => return None,
    };
    Some(category)
}

/// Whether a token with `code` may be used as an identifier at `position`.
pub fn is_identifier_eligible(code: TokenCode, strict: bool, position: IdentifierPosition) -> bool {
    if code == TokenCode::Identifier {
        return true;
    }
    match category(code) {
        None | Some(KeywordCategory::ReservedAlways) => false,
        Some(KeywordCategory::ReservedInStrictMode) => !strict,
        Some(KeywordCategory::TypeNameRestricted) => position == IdentifierPosition::Expression,
        Some(KeywordCategory::IdentifierEligible) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KEYWORDS: &[&str] = &[
        "break", "case", "catch", "class", "const", "continue", "debugger", "default",
        "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for",
        "function", "if", "import", "in", "instanceof", "new", "null", "return", "super",
        "switch", "this", "throw", "true", "try", "typeof", "var", "void", "while", "with",
        "implements", "interface", "let", "package", "private", "protected", "public",
        "static", "yield", "any", "boolean", "number", "string", "symbol", "abstract", "as",
        "async", "await", "constructor", "declare", "from", "get", "is", "module",
        "namespace", "of", "readonly", "require", "set", "type",
    ];

    #[test]
    fn test_every_keyword_has_one_category() {
        for text in ALL_KEYWORDS {
            let code = keyword_from_str(text).unwrap();
            assert!(code.is_keyword(), "{text}");
            assert!(category(code).is_some(), "{text}");
            assert_eq!(code.keyword_text(), Some(*text));
        }
    }

    #[test]
    fn test_category_sizes() {
        let count = |c| {
            ALL_KEYWORDS
                .iter()
                .filter(|t| category(keyword_from_str(t).unwrap()) == Some(c))
                .count()
        };
        assert_eq!(count(KeywordCategory::ReservedAlways), 36);
        assert_eq!(count(KeywordCategory::ReservedInStrictMode), 9);
        assert_eq!(count(KeywordCategory::TypeNameRestricted), 5);
        assert_eq!(count(KeywordCategory::IdentifierEligible), 16);
    }

    #[test]
    fn test_not_a_keyword() {
        assert_eq!(keyword_from_str("foo"), None);
        assert_eq!(keyword_from_str("Var"), None);
        assert_eq!(category(TokenCode::Identifier), None);
    }

    #[test]
    fn test_identifier_eligibility() {
        use IdentifierPosition::*;
        assert!(is_identifier_eligible(TokenCode::Identifier, true, TypeDeclaration));
        assert!(!is_identifier_eligible(TokenCode::VarKeyword, false, Expression));
        assert!(is_identifier_eligible(TokenCode::YieldKeyword, false, Expression));
        assert!(!is_identifier_eligible(TokenCode::YieldKeyword, true, Expression));
        assert!(is_identifier_eligible(TokenCode::NumberKeyword, true, Expression));
        assert!(!is_identifier_eligible(TokenCode::NumberKeyword, false, TypeDeclaration));
        assert!(is_identifier_eligible(TokenCode::FromKeyword, true, TypeDeclaration));
        assert!(!is_identifier_eligible(TokenCode::CommaToken, false, Expression));
    }
}
