//! Named component access (`v.x`, `v.y`, `v.r`, ...).
//!
//! `Vector<T, N>` is `#[repr(transparent)]` over `[T; N]`, and each view struct is `#[repr(C)]`
//! with `N` fields of type `T` followed by a zero-sized field, so the layouts are identical and a
//! reference to one can be reinterpreted as a reference to the other.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Vector;

macro_rules! views {
    ($($name:ident { $($field:ident),+ }),+ $(,)?) => {
        $(
            #[repr(C)]
            pub struct $name<T> {
                $(pub $field: T,)+
                _priv: (), // prevent external construction
            }
        )+
    };
}

macro_rules! deref_to {
    ($($from:ty => $to:ident),+ $(,)?) => {
        $(
            impl<T> Deref for $from {
                type Target = $to<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    unsafe { mem::transmute(self) }
                }
            }

            impl<T> DerefMut for $from {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    unsafe { mem::transmute(self) }
                }
            }
        )+
    };
}

views! {
    X { x },
    XY { x, y },
    XYZ { x, y, z },
    XYZW { x, y, z, w },
    R { r },
    RG { r, g },
    RGB { r, g, b },
    RGBA { r, g, b, a },
}

deref_to! {
    Vector<T, 1> => X,
    Vector<T, 2> => XY,
    Vector<T, 3> => XYZ,
    Vector<T, 4> => XYZW,
    X<T> => R,
    XY<T> => RG,
    XYZ<T> => RGB,
    XYZW<T> => RGBA,
}
