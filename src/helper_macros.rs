//! Operator-forwarding macros.
//!
//! `Number` only ever combines with another `Number` (there is no second operand type to
//! generalize over, unlike `dashu-int`'s `UBig`/`IBig`/`&str` combinations), so the forwarding
//! macros here are simpler than `dashu-int/src/helper_macros.rs`: each one expands the
//! by-value `impl Op<Number> for Number` into the three reference combinations.

/// Implement `impl Op<&Number> for &Number` and the two mixed reference forms by forwarding
/// to an existing `impl Op<Number> for Number`.
macro_rules! forward_binop_to_owned {
    (impl $trait:ident, $method:ident) => {
        impl $trait<&Number> for Number {
            type Output = Number;

            #[inline]
            fn $method(self, rhs: &Number) -> Number {
                $trait::$method(self, rhs.clone())
            }
        }

        impl $trait<Number> for &Number {
            type Output = Number;

            #[inline]
            fn $method(self, rhs: Number) -> Number {
                $trait::$method(self.clone(), rhs)
            }
        }

        impl $trait<&Number> for &Number {
            type Output = Number;

            #[inline]
            fn $method(self, rhs: &Number) -> Number {
                $trait::$method(self.clone(), rhs.clone())
            }
        }
    };
}

/// Implement `impl OpAssign<&Number> for Number` by forwarding to an existing
/// `impl OpAssign<Number> for Number`.
macro_rules! forward_assignop_to_owned {
    (impl $trait:ident, $method:ident) => {
        impl $trait<&Number> for Number {
            #[inline]
            fn $method(&mut self, rhs: &Number) {
                $trait::$method(self, rhs.clone())
            }
        }
    };
}

pub(crate) use forward_assignop_to_owned;
pub(crate) use forward_binop_to_owned;
