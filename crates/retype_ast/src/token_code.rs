//! TokenCode enum - every terminal the lexer can produce.
//!
//! The `>`-family compound codes (`>=`, `>>`, `>>>`, `>>=`, `>>>=`) are never
//! emitted by the lexer. The parser forms them from adjacent `>` and `=`
//! tokens when it reads an operator, so that `A<B<C>>` closes two type
//! argument lists.

/// The code of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenCode {
    // ========================================================================
    // Special
    // ========================================================================
    EndOfFileToken,
    Identifier,

    // Literals
    NumericLiteral,
    StringLiteral,
    RegularExpressionLiteral,
    NoSubstitutionTemplateLiteral,

    // Template pieces
    TemplateHead,
    TemplateMiddle,
    TemplateTail,

    // ========================================================================
    // Punctuation
    // ========================================================================
    OpenBraceToken,
    CloseBraceToken,
    OpenParenToken,
    CloseParenToken,
    OpenBracketToken,
    CloseBracketToken,
    DotToken,
    DotDotDotToken,
    SemicolonToken,
    CommaToken,
    LessThanToken,
    GreaterThanToken,
    LessThanEqualsToken,
    GreaterThanEqualsToken,
    EqualsEqualsToken,
    ExclamationEqualsToken,
    EqualsEqualsEqualsToken,
    ExclamationEqualsEqualsToken,
    EqualsGreaterThanToken,
    PlusToken,
    MinusToken,
    AsteriskToken,
    SlashToken,
    PercentToken,
    PlusPlusToken,
    MinusMinusToken,
    LessThanLessThanToken,
    GreaterThanGreaterThanToken,
    GreaterThanGreaterThanGreaterThanToken,
    AmpersandToken,
    BarToken,
    CaretToken,
    ExclamationToken,
    TildeToken,
    AmpersandAmpersandToken,
    BarBarToken,
    QuestionToken,
    ColonToken,
    AtToken,

    // Assignments
    EqualsToken,
    PlusEqualsToken,
    MinusEqualsToken,
    AsteriskEqualsToken,
    SlashEqualsToken,
    PercentEqualsToken,
    LessThanLessThanEqualsToken,
    GreaterThanGreaterThanEqualsToken,
    GreaterThanGreaterThanGreaterThanEqualsToken,
    AmpersandEqualsToken,
    BarEqualsToken,
    CaretEqualsToken,

    // ========================================================================
    // Reserved words
    // ========================================================================
    BreakKeyword,
    CaseKeyword,
    CatchKeyword,
    ClassKeyword,
    ConstKeyword,
    ContinueKeyword,
    DebuggerKeyword,
    DefaultKeyword,
    DeleteKeyword,
    DoKeyword,
    ElseKeyword,
    EnumKeyword,
    ExportKeyword,
    ExtendsKeyword,
    FalseKeyword,
    FinallyKeyword,
    ForKeyword,
    FunctionKeyword,
    IfKeyword,
    ImportKeyword,
    InKeyword,
    InstanceOfKeyword,
    NewKeyword,
    NullKeyword,
    ReturnKeyword,
    SuperKeyword,
    SwitchKeyword,
    ThisKeyword,
    ThrowKeyword,
    TrueKeyword,
    TryKeyword,
    TypeOfKeyword,
    VarKeyword,
    VoidKeyword,
    WhileKeyword,
    WithKeyword,

    // Strict mode reserved words
    ImplementsKeyword,
    InterfaceKeyword,
    LetKeyword,
    PackageKeyword,
    PrivateKeyword,
    ProtectedKeyword,
    PublicKeyword,
    StaticKeyword,
    YieldKeyword,

    // Predefined type names
    AnyKeyword,
    BooleanKeyword,
    NumberKeyword,
    StringKeyword,
    SymbolKeyword,

    // Contextual keywords
    AbstractKeyword,
    AsKeyword,
    AsyncKeyword,
    AwaitKeyword,
    ConstructorKeyword,
    DeclareKeyword,
    FromKeyword,
    GetKeyword,
    IsKeyword,
    ModuleKeyword,
    NamespaceKeyword,
    OfKeyword,
    ReadonlyKeyword,
    RequireKeyword,
    SetKeyword,
    TypeKeyword,
}

impl TokenCode {
    pub const FIRST_KEYWORD: TokenCode = TokenCode::BreakKeyword;
    pub const LAST_KEYWORD: TokenCode = TokenCode::TypeKeyword;
    pub const FIRST_PUNCTUATION: TokenCode = TokenCode::OpenBraceToken;
    pub const LAST_PUNCTUATION: TokenCode = TokenCode::CaretEqualsToken;
    pub const FIRST_ASSIGNMENT: TokenCode = TokenCode::EqualsToken;
    pub const LAST_ASSIGNMENT: TokenCode = TokenCode::CaretEqualsToken;

    #[inline]
    pub fn is_keyword(self) -> bool {
        self >= Self::FIRST_KEYWORD && self <= Self::LAST_KEYWORD
    }

    #[inline]
    pub fn is_punctuation(self) -> bool {
        self >= Self::FIRST_PUNCTUATION && self <= Self::LAST_PUNCTUATION
    }

    #[inline]
    pub fn is_assignment_operator(self) -> bool {
        self >= Self::FIRST_ASSIGNMENT && self <= Self::LAST_ASSIGNMENT
    }

    #[inline]
    pub fn is_template_start(self) -> bool {
        matches!(
            self,
            TokenCode::NoSubstitutionTemplateLiteral | TokenCode::TemplateHead
        )
    }

    /// Any identifier-shaped token: a plain identifier or a keyword. Every
    /// such token may appear as a property name.
    #[inline]
    pub fn is_identifier_name(self) -> bool {
        self == TokenCode::Identifier || self.is_keyword()
    }

    /// Get the source text of a keyword code, or None.
    pub fn keyword_text(self) -> Option<&'static str> {
        let text = match self {
            TokenCode::BreakKeyword => "break",
            TokenCode::CaseKeyword => "case",
            TokenCode::CatchKeyword => "catch",
            TokenCode::ClassKeyword => "class",
            TokenCode::ConstKeyword => "const",
            TokenCode::ContinueKeyword => "continue",
            TokenCode::DebuggerKeyword => "debugger",
            TokenCode::DefaultKeyword => "default",
            TokenCode::DeleteKeyword => "delete",
            TokenCode::DoKeyword => "do",
            TokenCode::ElseKeyword => "else",
            TokenCode::EnumKeyword => "enum",
            TokenCode::ExportKeyword => "export",
            TokenCode::ExtendsKeyword => "extends",
            TokenCode::FalseKeyword => "false",
            TokenCode::FinallyKeyword => "finally",
            TokenCode::ForKeyword => "for",
            TokenCode::FunctionKeyword => "function",
            TokenCode::IfKeyword => "if",
            TokenCode::ImportKeyword => "import",
            TokenCode::InKeyword => "in",
            TokenCode::InstanceOfKeyword => "instanceof",
            TokenCode::NewKeyword => "new",
            TokenCode::NullKeyword => "null",
            TokenCode::ReturnKeyword => "return",
            TokenCode::SuperKeyword => "super",
            TokenCode::SwitchKeyword => "switch",
            TokenCode::ThisKeyword => "this",
            TokenCode::ThrowKeyword => "throw",
            TokenCode::TrueKeyword => "true",
            TokenCode::TryKeyword => "try",
            TokenCode::TypeOfKeyword => "typeof",
            TokenCode::VarKeyword => "var",
            TokenCode::VoidKeyword => "void",
            TokenCode::WhileKeyword => "while",
            TokenCode::WithKeyword => "with",
            TokenCode::ImplementsKeyword => "implements",
            TokenCode::InterfaceKeyword => "interface",
            TokenCode::LetKeyword => "let",
            TokenCode::PackageKeyword => "package",
            TokenCode::PrivateKeyword => "private",
            TokenCode::ProtectedKeyword => "protected",
            TokenCode::PublicKeyword => "public",
            TokenCode::StaticKeyword => "static",
            TokenCode::YieldKeyword => "yield",
            TokenCode::AnyKeyword => "any",
            TokenCode::BooleanKeyword => "boolean",
            TokenCode::NumberKeyword => "number",
            TokenCode::StringKeyword => "string",
            TokenCode::SymbolKeyword => "symbol",
            TokenCode::AbstractKeyword => "abstract",
            TokenCode::AsKeyword => "as",
            TokenCode::AsyncKeyword => "async",
            TokenCode::AwaitKeyword => "await",
            TokenCode::ConstructorKeyword => "constructor",
            TokenCode::DeclareKeyword => "declare",
            TokenCode::FromKeyword => "from",
            TokenCode::GetKeyword => "get",
            TokenCode::IsKeyword => "is",
            TokenCode::ModuleKeyword => "module",
            TokenCode::NamespaceKeyword => "namespace",
            TokenCode::OfKeyword => "of",
            TokenCode::ReadonlyKeyword => "readonly",
            TokenCode::RequireKeyword => "require",
            TokenCode::SetKeyword => "set",
            TokenCode::TypeKeyword => "type",
            _ => return None,
        };
        Some(text)
    }

    /// Get the punctuation text for a punctuation code, or None.
    pub fn punctuation_text(self) -> Option<&'static str> {
        let text = match self {
            TokenCode::OpenBraceToken => "{",
            TokenCode::CloseBraceToken => "}",
            TokenCode::OpenParenToken => "(",
            TokenCode::CloseParenToken => ")",
            TokenCode::OpenBracketToken => "[",
            TokenCode::CloseBracketToken => "]",
            TokenCode::DotToken => ".",
            TokenCode::DotDotDotToken => "...",
            TokenCode::SemicolonToken => ";",
            TokenCode::CommaToken => ",",
            TokenCode::LessThanToken => "<",
            TokenCode::GreaterThanToken => ">",
            TokenCode::LessThanEqualsToken => "<=",
            TokenCode::GreaterThanEqualsToken => ">=",
            TokenCode::EqualsEqualsToken => "==",
            TokenCode::ExclamationEqualsToken => "!=",
            TokenCode::EqualsEqualsEqualsToken => "===",
            TokenCode::ExclamationEqualsEqualsToken => "!==",
            TokenCode::EqualsGreaterThanToken => "=>",
            TokenCode::PlusToken => "+",
            TokenCode::MinusToken => "-",
            TokenCode::AsteriskToken => "*",
            TokenCode::SlashToken => "/",
            TokenCode::PercentToken => "%",
            TokenCode::PlusPlusToken => "++",
            TokenCode::MinusMinusToken => "--",
            TokenCode::LessThanLessThanToken => "<<",
            TokenCode::GreaterThanGreaterThanToken => ">>",
            TokenCode::GreaterThanGreaterThanGreaterThanToken => ">>>",
            TokenCode::AmpersandToken => "&",
            TokenCode::BarToken => "|",
            TokenCode::CaretToken => "^",
            TokenCode::ExclamationToken => "!",
            TokenCode::TildeToken => "~",
            TokenCode::AmpersandAmpersandToken => "&&",
            TokenCode::BarBarToken => "||",
            TokenCode::QuestionToken => "?",
            TokenCode::ColonToken => ":",
            TokenCode::AtToken => "@",
            TokenCode::EqualsToken => "=",
            TokenCode::PlusEqualsToken => "+=",
            TokenCode::MinusEqualsToken => "-=",
            TokenCode::AsteriskEqualsToken => "*=",
            TokenCode::SlashEqualsToken => "/=",
            TokenCode::PercentEqualsToken => "%=",
            TokenCode::LessThanLessThanEqualsToken => "<<=",
            TokenCode::GreaterThanGreaterThanEqualsToken => ">>=",
            TokenCode::GreaterThanGreaterThanGreaterThanEqualsToken => ">>>=",
            TokenCode::AmpersandEqualsToken => "&=",
            TokenCode::BarEqualsToken => "|=",
            TokenCode::CaretEqualsToken => "^=",
            _ => return None,
        };
        Some(text)
    }

    /// A short human-readable description, used in diagnostics.
    pub fn describe(self) -> &'static str {
        if let Some(text) = self.keyword_text().or_else(|| self.punctuation_text()) {
            return text;
        }
        match self {
            TokenCode::EndOfFileToken => "end of input",
            TokenCode::Identifier => "identifier",
            TokenCode::NumericLiteral => "numeric literal",
            TokenCode::StringLiteral => "string literal",
            TokenCode::RegularExpressionLiteral => "regular expression",
            _ => "template literal",
        }
    }
}

impl std::fmt::Display for TokenCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges() {
        assert!(TokenCode::BreakKeyword.is_keyword());
        assert!(TokenCode::TypeKeyword.is_keyword());
        assert!(!TokenCode::Identifier.is_keyword());
        assert!(TokenCode::CaretEqualsToken.is_punctuation());
        assert!(TokenCode::PlusEqualsToken.is_assignment_operator());
        assert!(!TokenCode::EqualsEqualsToken.is_assignment_operator());
    }

    #[test]
    fn test_texts() {
        assert_eq!(TokenCode::InstanceOfKeyword.keyword_text(), Some("instanceof"));
        assert_eq!(TokenCode::DotDotDotToken.punctuation_text(), Some("..."));
        assert_eq!(TokenCode::Identifier.keyword_text(), None);
        assert_eq!(TokenCode::EndOfFileToken.describe(), "end of input");
    }
}
