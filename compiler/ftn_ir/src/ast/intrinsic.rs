//! FORTRAN 77 intrinsic functions recognized by the front end.

/// Broad family of an intrinsic, used by Sema to pick argument rules.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum IntrinsicGroup {
    /// Type conversions (`INT`, `REAL`, `CHAR`, ...).
    Conversion,
    /// Numeric helpers (`ABS`, `MOD`, `MAX`, ...).
    Numeric,
    /// Character inquiries (`LEN`, `INDEX`).
    Character,
    /// Elementary math functions.
    Math,
    /// `LGE` `LGT` `LLE` `LLT`
    LexicalComparison,
}

macro_rules! define_intrinsics {
    ($($variant:ident => $group:ident),* $(,)?) => {
        /// Intrinsic function tag carried by an intrinsic call node.
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
        #[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
        #[allow(clippy::upper_case_acronyms, reason = "variants are spelled as in source")]
        pub enum IntrinsicFunction {
            $($variant,)*
        }

        impl IntrinsicFunction {
            /// Every intrinsic, in declaration order.
            pub const ALL: &'static [IntrinsicFunction] = &[$(IntrinsicFunction::$variant,)*];

            /// Upper-case source name.
            pub const fn name(self) -> &'static str {
                match self {
                    $(IntrinsicFunction::$variant => stringify!($variant),)*
                }
            }

            pub const fn group(self) -> IntrinsicGroup {
                match self {
                    $(IntrinsicFunction::$variant => IntrinsicGroup::$group,)*
                }
            }
        }
    };
}

define_intrinsics! {
    INT => Conversion,
    REAL => Conversion,
    DBLE => Conversion,
    CMPLX => Conversion,
    ICHAR => Conversion,
    CHAR => Conversion,

    AINT => Numeric,
    ANINT => Numeric,
    NINT => Numeric,
    ABS => Numeric,
    MOD => Numeric,
    SIGN => Numeric,
    DIM => Numeric,
    DPROD => Numeric,
    MAX => Numeric,
    MIN => Numeric,
    AIMAG => Numeric,
    CONJG => Numeric,

    LEN => Character,
    INDEX => Character,

    SQRT => Math,
    EXP => Math,
    LOG => Math,
    LOG10 => Math,
    SIN => Math,
    COS => Math,
    TAN => Math,
    ASIN => Math,
    ACOS => Math,
    ATAN => Math,
    ATAN2 => Math,
    SINH => Math,
    COSH => Math,
    TANH => Math,

    LGE => LexicalComparison,
    LGT => LexicalComparison,
    LLE => LexicalComparison,
    LLT => LexicalComparison,
}

impl IntrinsicFunction {
    /// Look up an intrinsic by source name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.name().eq_ignore_ascii_case(name))
    }

    pub fn is_conversion(self) -> bool {
        self.group() == IntrinsicGroup::Conversion
    }
}
