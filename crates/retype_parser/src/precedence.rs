//! Operator precedence and operator token mapping.

use retype_ast::{AssignmentOperator, BinaryOperator, TokenCode, UnaryOperator, UpdateOperator};

/// Binary operator precedence levels, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum OperatorPrecedence {
    Lowest = 0,
    LogicalOr = 1,
    LogicalAnd = 2,
    BitwiseOr = 3,
    BitwiseXor = 4,
    BitwiseAnd = 5,
    Equality = 6,
    Relational = 7,
    Shift = 8,
    Additive = 9,
    Multiplicative = 10,
    Invalid = 255,
}

/// Get the binary operator precedence for a token code. `as` sits at
/// relational precedence.
pub fn binary_operator_precedence(code: TokenCode) -> OperatorPrecedence {
    match code {
        TokenCode::BarBarToken => OperatorPrecedence::LogicalOr,
        TokenCode::AmpersandAmpersandToken => OperatorPrecedence::LogicalAnd,
        TokenCode::BarToken => OperatorPrecedence::BitwiseOr,
        TokenCode::CaretToken => OperatorPrecedence::BitwiseXor,
        TokenCode::AmpersandToken => OperatorPrecedence::BitwiseAnd,
        TokenCode::EqualsEqualsToken
        | TokenCode::ExclamationEqualsToken
        | TokenCode::EqualsEqualsEqualsToken
        | TokenCode::ExclamationEqualsEqualsToken => OperatorPrecedence::Equality,
        TokenCode::LessThanToken
        | TokenCode::GreaterThanToken
        | TokenCode::LessThanEqualsToken
        | TokenCode::GreaterThanEqualsToken
        | TokenCode::InstanceOfKeyword
        | TokenCode::InKeyword
        | TokenCode::AsKeyword => OperatorPrecedence::Relational,
        TokenCode::LessThanLessThanToken
        | TokenCode::GreaterThanGreaterThanToken
        | TokenCode::GreaterThanGreaterThanGreaterThanToken => OperatorPrecedence::Shift,
        TokenCode::PlusToken | TokenCode::MinusToken => OperatorPrecedence::Additive,
        TokenCode::AsteriskToken | TokenCode::SlashToken | TokenCode::PercentToken => {
            OperatorPrecedence::Multiplicative
        }
        _ => OperatorPrecedence::Invalid,
    }
}

pub fn binary_operator(code: TokenCode) -> Option<BinaryOperator> {
    let operator = match code {
        TokenCode::BarBarToken => BinaryOperator::LogicalOr,
        TokenCode::AmpersandAmpersandToken => BinaryOperator::LogicalAnd,
        TokenCode::BarToken => BinaryOperator::BitwiseOr,
        TokenCode::CaretToken => BinaryOperator::BitwiseXor,
        TokenCode::AmpersandToken => BinaryOperator::BitwiseAnd,
        TokenCode::EqualsEqualsToken => BinaryOperator::Equal,
        TokenCode::ExclamationEqualsToken => BinaryOperator::NotEqual,
        TokenCode::EqualsEqualsEqualsToken => BinaryOperator::StrictEqual,
        TokenCode::ExclamationEqualsEqualsToken => BinaryOperator::StrictNotEqual,
        TokenCode::LessThanToken => BinaryOperator::LessThan,
        TokenCode::GreaterThanToken => BinaryOperator::GreaterThan,
        TokenCode::LessThanEqualsToken => BinaryOperator::LessThanOrEqual,
        TokenCode::GreaterThanEqualsToken => BinaryOperator::GreaterThanOrEqual,
        TokenCode::InstanceOfKeyword => BinaryOperator::InstanceOf,
        TokenCode::InKeyword => BinaryOperator::In,
        TokenCode::LessThanLessThanToken => BinaryOperator::LeftShift,
        TokenCode::GreaterThanGreaterThanToken => BinaryOperator::RightShift,
        TokenCode::GreaterThanGreaterThanGreaterThanToken => BinaryOperator::UnsignedRightShift,
        TokenCode::PlusToken => BinaryOperator::Add,
        TokenCode::MinusToken => BinaryOperator::Subtract,
        TokenCode::AsteriskToken => BinaryOperator::Multiply,
        TokenCode::SlashToken => BinaryOperator::Divide,
        TokenCode::PercentToken => BinaryOperator::Remainder,
        _ => return None,
    };
    Some(operator)
}

pub fn assignment_operator(code: TokenCode) -> Option<AssignmentOperator> {
    let operator = match code {
        TokenCode::EqualsToken => AssignmentOperator::Assign,
        TokenCode::PlusEqualsToken => AssignmentOperator::Add,
        TokenCode::MinusEqualsToken => AssignmentOperator::Subtract,
        TokenCode::AsteriskEqualsToken => AssignmentOperator::Multiply,
        TokenCode::SlashEqualsToken => AssignmentOperator::Divide,
        TokenCode::PercentEqualsToken => AssignmentOperator::Remainder,
        TokenCode::LessThanLessThanEqualsToken => AssignmentOperator::LeftShift,
        TokenCode::GreaterThanGreaterThanEqualsToken => AssignmentOperator::RightShift,
        TokenCode::GreaterThanGreaterThanGreaterThanEqualsToken => {
            AssignmentOperator::UnsignedRightShift
        }
        TokenCode::AmpersandEqualsToken => AssignmentOperator::BitwiseAnd,
        TokenCode::BarEqualsToken => AssignmentOperator::BitwiseOr,
        TokenCode::CaretEqualsToken => AssignmentOperator::BitwiseXor,
        _ => return None,
    };
    Some(operator)
}

pub fn unary_operator(code: TokenCode) -> Option<UnaryOperator> {
    let operator = match code {
        TokenCode::DeleteKeyword => UnaryOperator::Delete,
        TokenCode::VoidKeyword => UnaryOperator::Void,
        TokenCode::TypeOfKeyword => UnaryOperator::TypeOf,
        TokenCode::PlusToken => UnaryOperator::Plus,
        TokenCode::MinusToken => UnaryOperator::Minus,
        TokenCode::TildeToken => UnaryOperator::BitwiseNot,
        TokenCode::ExclamationToken => UnaryOperator::LogicalNot,
        _ => return None,
    };
    Some(operator)
}

pub fn update_operator(code: TokenCode) -> Option<UpdateOperator> {
    match code {
        TokenCode::PlusPlusToken => Some(UpdateOperator::Increment),
        TokenCode::MinusMinusToken => Some(UpdateOperator::Decrement),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_order() {
        let p = binary_operator_precedence;
        assert!(p(TokenCode::AsteriskToken) > p(TokenCode::PlusToken));
        assert!(p(TokenCode::PlusToken) > p(TokenCode::LessThanLessThanToken));
        assert!(p(TokenCode::InstanceOfKeyword) > p(TokenCode::EqualsEqualsToken));
        assert!(p(TokenCode::AmpersandAmpersandToken) > p(TokenCode::BarBarToken));
        assert_eq!(p(TokenCode::AsKeyword), OperatorPrecedence::Relational);
        assert_eq!(p(TokenCode::EqualsToken), OperatorPrecedence::Invalid);
    }

    #[test]
    fn test_every_precedence_has_an_operator() {
        for code in [
            TokenCode::BarBarToken,
            TokenCode::GreaterThanGreaterThanGreaterThanToken,
            TokenCode::InKeyword,
            TokenCode::PercentToken,
        ] {
            assert!(binary_operator(code).is_some(), "{code}");
        }
        assert!(binary_operator(TokenCode::AsKeyword).is_none());
    }
}
