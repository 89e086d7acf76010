// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Singular/plural count phrases ("1 example", "3 failures").

/// A numeric count that can be rendered in a count phrase.
pub trait Quantity: Copy {
    /// Numerically equal to one.
    fn is_one(self) -> bool;

    /// Text form used for every count other than one.
    fn show(self) -> String;
}

macro_rules! integer_quantity {
    ($($t:ty),*) => {
        $(
            impl Quantity for $t {
                fn is_one(self) -> bool {
                    self == 1
                }

                fn show(self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

// Floats keep their fractional part ("2.0", not "2").
macro_rules! float_quantity {
    ($($t:ty),*) => {
        $(
            impl Quantity for $t {
                fn is_one(self) -> bool {
                    self == 1.0
                }

                fn show(self) -> String {
                    format!("{self:?}")
                }
            }
        )*
    };
}

integer_quantity!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
float_quantity!(f32, f64);

/// Render `count` with `noun`, pluralized with a trailing "s" unless the count
/// is exactly one.
pub fn quantify<Q: Quantity>(count: Q, noun: &str) -> String {
    if count.is_one() { format!("1 {noun}") } else { format!("{} {noun}s", count.show()) }
}

#[cfg(test)]
#[path = "quantify_tests.rs"]
mod tests;
