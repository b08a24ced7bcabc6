/// A conditional-expression macro.  Rust's `if` is already an
/// expression, but `cargo fmt` breaks it up line-by-line, and the
/// matrix of border-handling rules in the energy and flow code is much
/// easier to read once this macro is understood.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
