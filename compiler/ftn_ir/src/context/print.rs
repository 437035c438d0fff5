//! Diagnostic rendering of expressions.
//!
//! Output resembles source but is not guaranteed to re-parse: operators
//! are fully parenthesized and real values print in shortest round-trip
//! form.

use std::fmt::{self, Write};

use super::AstContext;
use crate::ast::{ConstantValue, Designator, ExprKind, SectionSubscript};
use crate::stack::ensure_sufficient_stack;
use crate::{ExprId, ExprRange};

impl AstContext {
    /// Write a rendering of `id` to `out`.
    pub fn print(&self, id: ExprId, out: &mut dyn Write) -> fmt::Result {
        ensure_sufficient_stack(|| self.print_expr(id, out))
    }

    fn print_expr(&self, id: ExprId, out: &mut dyn Write) -> fmt::Result {
        match *self.kind(id) {
            ExprKind::Constant(c) => {
                let constant = self.arena.get_constant(c);
                self.print_constant_value(constant.value(), out)?;
                if let Some(selector) = constant.kind_selector() {
                    out.write_char('_')?;
                    self.print(selector, out)?;
                }
                Ok(())
            }
            ExprKind::Designator(d) => self.print_designator(&d, out),
            ExprKind::Unary { op, operand } => {
                out.write_char('(')?;
                out.write_str(op.as_symbol())?;
                if op.as_symbol().ends_with('.') {
                    out.write_char(' ')?;
                }
                self.print(operand, out)?;
                out.write_char(')')
            }
            ExprKind::DefinedUnary { op, operand } => {
                write!(out, "(.{}. ", self.lookup(op))?;
                self.print(operand, out)?;
                out.write_char(')')
            }
            ExprKind::Binary { op, lhs, rhs } => {
                out.write_char('(')?;
                self.print(lhs, out)?;
                write!(out, " {} ", op.as_symbol())?;
                self.print(rhs, out)?;
                out.write_char(')')
            }
            ExprKind::DefinedBinary { op, lhs, rhs } => {
                out.write_char('(')?;
                self.print(lhs, out)?;
                write!(out, " .{}. ", self.lookup(op))?;
                self.print(rhs, out)?;
                out.write_char(')')
            }
            ExprKind::IntrinsicCall { function, args } => {
                out.write_str(function.name())?;
                out.write_char('(')?;
                self.print_list(args, out)?;
                out.write_char(')')
            }
        }
    }

    /// Display adapter over [`print`](Self::print).
    pub fn display(&self, id: ExprId) -> ExprDisplay<'_> {
        ExprDisplay { ctx: self, id }
    }

    fn print_constant_value(&self, value: &ConstantValue, out: &mut dyn Write) -> fmt::Result {
        match value {
            ConstantValue::Integer(v) => write!(out, "{v}"),
            ConstantValue::Real(v) | ConstantValue::DoublePrecision(v) => write!(out, "{v}"),
            ConstantValue::Complex { re, im } => write!(out, "({re}, {im})"),
            ConstantValue::Character(range) => {
                let text = String::from_utf8_lossy(self.arena.get_chars(*range));
                write!(out, "'{}'", text.replace('\'', "''"))
            }
            ConstantValue::Boz { kind, value } => {
                write!(out, "{}'{}'", kind.prefix(), value.to_string_radix(kind.radix()))
            }
            ConstantValue::Logical(true) => out.write_str(".TRUE."),
            ConstantValue::Logical(false) => out.write_str(".FALSE."),
        }
    }

    fn print_designator(&self, designator: &Designator, out: &mut dyn Write) -> fmt::Result {
        match *designator {
            Designator::Var { decl } => out.write_str(self.lookup(self.decl(decl).name)),
            Designator::ArrayElement { target, subscripts } => {
                self.print(target, out)?;
                out.write_char('(')?;
                self.print_list(subscripts, out)?;
                out.write_char(')')
            }
            Designator::ArraySection { target, subscripts } => {
                self.print(target, out)?;
                out.write_char('(')?;
                let subscripts = self.arena.get_section_subscripts(subscripts);
                for (i, subscript) in subscripts.iter().enumerate() {
                    if i > 0 {
                        out.write_str(", ")?;
                    }
                    self.print_section_subscript(subscript, out)?;
                }
                out.write_char(')')
            }
            Designator::Substring { target, start, end } => {
                self.print(target, out)?;
                out.write_char('(')?;
                if let Some(start) = start {
                    self.print(start, out)?;
                }
                out.write_char(':')?;
                if let Some(end) = end {
                    self.print(end, out)?;
                }
                out.write_char(')')
            }
            Designator::ComplexPart { target, part } => {
                self.print(target, out)?;
                write!(out, "%{}", part.as_str())
            }
            Designator::StructureComponent { parent, component } => {
                self.print(parent, out)?;
                write!(out, "%{}", self.lookup(component))
            }
            Designator::Coindexed {
                target,
                cosubscripts,
            } => {
                self.print(target, out)?;
                out.write_char('[')?;
                self.print_list(cosubscripts, out)?;
                out.write_char(']')
            }
        }
    }

    fn print_section_subscript(&self, subscript: &SectionSubscript, out: &mut dyn Write) -> fmt::Result {
        match *subscript {
            SectionSubscript::Subscript(e) => self.print(e, out),
            SectionSubscript::Triplet {
                lower,
                upper,
                stride,
            } => {
                if let Some(lower) = lower {
                    self.print(lower, out)?;
                }
                out.write_char(':')?;
                if let Some(upper) = upper {
                    self.print(upper, out)?;
                }
                if let Some(stride) = stride {
                    out.write_char(':')?;
                    self.print(stride, out)?;
                }
                Ok(())
            }
        }
    }

    fn print_list(&self, range: ExprRange, out: &mut dyn Write) -> fmt::Result {
        for (i, &e) in self.arena.get_expr_list(range).iter().enumerate() {
            if i > 0 {
                out.write_str(", ")?;
            }
            self.print(e, out)?;
        }
        Ok(())
    }
}

/// Renders an expression with [`AstContext::print`].
pub struct ExprDisplay<'a> {
    ctx: &'a AstContext,
    id: ExprId,
}

impl fmt::Display for ExprDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ctx.print(self.id, f)
    }
}
