//! Anyrt prelude: Functor/Monad/Monoid/Eq/Ord/Show primitives over erased values
//!
//! Every primitive is available in two shapes. The curried entry point
//! (`array_map(&f)`) matches the one-argument-per-call convention of compiled
//! code and returns a closure `Value` until saturated. The saturated form
//! (`map_array(&f, &xs)`) is what the closure eventually runs and can be
//! called directly when all arguments are at hand.

pub use anyrt_core::{AnyrtError, AnyrtResult, Kind, Value};

mod curry;

pub mod bind;
pub mod eq;
pub mod functor;
pub mod lattice;
pub mod monoid;
pub mod numeric;
pub mod ord;
pub mod registry;
pub mod show;

pub use bind::{array_bind, bind_array};
pub use eq::{eq_array_impl, eq_arrays, ref_eq, ref_ineq};
pub use functor::{array_map, map_array};
pub use lattice::{bool_and, bool_not, bool_or};
pub use monoid::{append_arrays, append_strings, concat_array, concat_string};
pub use numeric::{
    int_add, int_div, int_mod, int_mul, int_sub, num_add, num_div, num_mul, num_sub,
};
pub use ord::{ord_array_impl, ord_arrays, ordering_result, unsafe_compare, unsafe_compare_impl};
pub use registry::{lookup, primitives, Primitive};
pub use show::{
    show_array, show_array_impl, show_char_impl, show_int_impl, show_number_impl,
    show_string_impl,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curried_and_saturated_forms_agree() {
        let inc = Value::closure("inc", |x| Ok(Value::from(x.as_int()? + 1)));
        let xs = Value::array([Value::from(1), Value::from(2)]);

        let curried = array_map(&inc).apply(xs.clone()).expect("curried map failed");
        let saturated = map_array(&inc, &xs).expect("saturated map failed");
        assert_eq!(curried, saturated);
    }

    #[test]
    fn partial_application_can_be_shared() {
        let prefix = concat_string(&Value::from("id-"));
        let a = prefix.apply(Value::from("1")).expect("concat failed");
        let b = prefix.apply(Value::from("2")).expect("concat failed");
        assert_eq!(a.as_str().unwrap(), "id-1");
        assert_eq!(b.as_str().unwrap(), "id-2");
    }
}
