/// Implements a binary operator and its assigning form for every owned/borrowed
/// operand combination, on top of two inherent methods:
/// `$by_ref(&self, &T) -> T` and `$assign_by_ref(&mut self, &T)`.
/// Owned left operands reuse their allocation.
macro_rules! forward_binop {
    ($t: ty, $imp: ident, $method: ident, $assign_imp: ident, $assign_method: ident,
     $by_ref: ident, $assign_by_ref: ident) => {
        impl $imp<&$t> for &$t {
            type Output = $t;

            fn $method(self, rhs: &$t) -> Self::Output {
                self.$by_ref(rhs)
            }
        }

        impl $imp<$t> for &$t {
            type Output = $t;

            fn $method(self, rhs: $t) -> Self::Output {
                self.$by_ref(&rhs)
            }
        }

        impl $imp<&$t> for $t {
            type Output = $t;

            fn $method(mut self, rhs: &$t) -> Self::Output {
                self.$assign_by_ref(rhs);
                self
            }
        }

        impl $imp<$t> for $t {
            type Output = $t;

            fn $method(mut self, rhs: $t) -> Self::Output {
                self.$assign_by_ref(&rhs);
                self
            }
        }

        impl $assign_imp<&$t> for $t {
            fn $assign_method(&mut self, rhs: &$t) {
                self.$assign_by_ref(rhs);
            }
        }

        impl $assign_imp<$t> for $t {
            fn $assign_method(&mut self, rhs: $t) {
                self.$assign_by_ref(&rhs);
            }
        }
    };
}

/// Same as [`forward_binop`] for shift operators taking a `usize` bit count.
macro_rules! forward_shift {
    ($t: ty, $imp: ident, $method: ident, $assign_imp: ident, $assign_method: ident,
     $assign_by_bits: ident) => {
        impl $imp<usize> for $t {
            type Output = $t;

            fn $method(mut self, bits: usize) -> Self::Output {
                self.$assign_by_bits(bits);
                self
            }
        }

        impl $imp<usize> for &$t {
            type Output = $t;

            fn $method(self, bits: usize) -> Self::Output {
                let mut result = self.clone();
                result.$assign_by_bits(bits);
                result
            }
        }

        impl $assign_imp<usize> for $t {
            fn $assign_method(&mut self, bits: usize) {
                self.$assign_by_bits(bits);
            }
        }
    };
}

/// Unwraps an arithmetic `Result` inside an operator impl, panicking with the
/// error's message the way primitive integers do.
macro_rules! or_panic {
    ($result: expr) => {
        match $result {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    };
}
