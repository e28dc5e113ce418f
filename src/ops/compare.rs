//! Elementwise comparisons producing boolean masks

use super::{map_array, zip_broadcast};
use crate::error::Result;
use crate::ndarray::NdArray;
use paste::paste;

macro_rules! comparison_methods {
    ($bound:ident: $($op:ident, $sym:tt);* $(;)?) => {
        paste! {
            impl<T: Copy + $bound> NdArray<T> {
                $(
                    #[doc = concat!("Elementwise `a ", stringify!($sym), " b` with broadcasting")]
                    pub fn $op(&self, other: &NdArray<T>) -> Result<NdArray<bool>> {
                        zip_broadcast(self, other, |a, b| a $sym b)
                    }

                    #[doc = concat!("Elementwise `a ", stringify!($sym), " value`")]
                    pub fn [<$op _scalar>](&self, value: T) -> NdArray<bool> {
                        map_array(self, |a| a $sym value)
                    }
                )*
            }
        }
    };
}

comparison_methods! {
    PartialEq:
    equal, ==;
    not_equal, !=;
}

comparison_methods! {
    PartialOrd:
    less, <;
    less_equal, <=;
    greater, >;
    greater_equal, >=;
}
