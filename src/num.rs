//! numerical trait constraints
use std::fmt::{Debug, Display};

pub trait Float: Sized + num_traits::Float + Debug + Display {
    /// Convert a literal constant to this type. Only used for the built-in
    /// defaults, which are representable in every implementor.
    fn lit(x: f64) -> Self;
}

impl Float for f32 {
    #[inline]
    fn lit(x: f64) -> Self {
        x as f32
    }
}

impl Float for f64 {
    #[inline]
    fn lit(x: f64) -> Self {
        x
    }
}
