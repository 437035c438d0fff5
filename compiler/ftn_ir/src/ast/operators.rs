//! Built-in unary and binary operators.
//!
//! Precedence is a parsing concern and is already encoded in tree shape;
//! the level is kept on the operator so diagnostics and the printer can
//! decide where parentheses are needed.

/// Built-in unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOp {
    /// `.NOT.`
    Not,
    /// Unary `+`
    Plus,
    /// Unary `-`
    Minus,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Not => ".NOT.",
            Self::Plus => "+",
            Self::Minus => "-",
        }
    }

    /// `.NOT.` binds at the logical level, signs at the additive level.
    pub const fn level(self) -> OperatorLevel {
        match self {
            Self::Not => OperatorLevel::Logical,
            Self::Plus | Self::Minus => OperatorLevel::Numeric,
        }
    }
}

/// Precedence tier of a binary operator, loosest first.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum OperatorLevel {
    /// `.EQV.` `.NEQV.` `.OR.` `.AND.`
    Logical,
    /// `==` `/=` `<` `<=` `>` `>=`
    Relational,
    /// `//`
    Concatenation,
    /// `+` `-` `*` `/` `**`
    Numeric,
}

/// Built-in binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    // Logical
    Eqv,
    Neqv,
    Or,
    And,

    // Relational
    Equal,
    NotEqual,
    LessThan,
    LessThanEqual,
    GreaterThan,
    GreaterThanEqual,

    // Character
    Concat,

    // Arithmetic
    Plus,
    Minus,
    Multiply,
    Divide,
    Power,
}

impl BinaryOp {
    /// Source spelling, as used in diagnostics.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Eqv => ".EQV.",
            Self::Neqv => ".NEQV.",
            Self::Or => ".OR.",
            Self::And => ".AND.",
            Self::Equal => "==",
            Self::NotEqual => "/=",
            Self::LessThan => "<",
            Self::LessThanEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanEqual => ">=",
            Self::Concat => "//",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "**",
        }
    }

    pub const fn level(self) -> OperatorLevel {
        match self {
            Self::Eqv | Self::Neqv | Self::Or | Self::And => OperatorLevel::Logical,
            Self::Equal
            | Self::NotEqual
            | Self::LessThan
            | Self::LessThanEqual
            | Self::GreaterThan
            | Self::GreaterThanEqual => OperatorLevel::Relational,
            Self::Concat => OperatorLevel::Concatenation,
            Self::Plus | Self::Minus | Self::Multiply | Self::Divide | Self::Power => {
                OperatorLevel::Numeric
            }
        }
    }

    /// Binding strength; higher binds tighter.
    ///
    /// - 1: `.EQV.` `.NEQV.`
    /// - 2: `.OR.`
    /// - 3: `.AND.`
    /// - 4: relational
    /// - 5: `//`
    /// - 6: binary `+` `-`
    /// - 7: `*` `/`
    /// - 8: `**`
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Eqv | Self::Neqv => 1,
            Self::Or => 2,
            Self::And => 3,
            Self::Equal
            | Self::NotEqual
            | Self::LessThan
            | Self::LessThanEqual
            | Self::GreaterThan
            | Self::GreaterThanEqual => 4,
            Self::Concat => 5,
            Self::Plus | Self::Minus => 6,
            Self::Multiply | Self::Divide => 7,
            Self::Power => 8,
        }
    }

    /// Relational and logical operators always yield `LOGICAL`.
    pub const fn yields_logical(self) -> bool {
        matches!(
            self.level(),
            OperatorLevel::Logical | OperatorLevel::Relational
        )
    }

    /// `**` groups right to left; every other operator groups left to right.
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Self::Power)
    }
}
