/// A tuple of functions that can each be applied to the same input.
///
/// Implemented for tuples of one to six `FnOnce(In) -> R` values; the output
/// is the tuple of their results in the same order.
pub trait FanOut<In> {
    type Output;

    fn fan_out(self, input: In) -> Self::Output;
}

macro_rules! impl_fan_out {
    ($(($f:ident, $r:ident)),+) => {
        impl<In: Copy, $($f, $r),+> FanOut<In> for ($($f,)+)
        where
            $($f: FnOnce(In) -> $r,)+
        {
            type Output = ($($r,)+);

            #[allow(non_snake_case)]
            fn fan_out(self, input: In) -> Self::Output {
                let ($($f,)+) = self;
                ($($f(input),)+)
            }
        }
    };
}

impl_fan_out!((F0, R0));
impl_fan_out!((F0, R0), (F1, R1));
impl_fan_out!((F0, R0), (F1, R1), (F2, R2));
impl_fan_out!((F0, R0), (F1, R1), (F2, R2), (F3, R3));
impl_fan_out!((F0, R0), (F1, R1), (F2, R2), (F3, R3), (F4, R4));
impl_fan_out!((F0, R0), (F1, R1), (F2, R2), (F3, R3), (F4, R4), (F5, R5));

/// A tuple of functions applied in sequence, each consuming the previous
/// result.
///
/// Implemented for tuples of one to six functions. Intermediate and final
/// types are free, so a chain can start on a vector and end on a scalar or a
/// predicate.
pub trait Chain<In> {
    type Output;

    fn chain(self, input: In) -> Self::Output;
}

macro_rules! impl_chain {
    ($out:ident; $(($f:ident, $arg:ident, $r:ident)),+) => {
        impl<In, $($f, $r),+> Chain<In> for ($($f,)+)
        where
            $($f: FnOnce($arg) -> $r,)+
        {
            type Output = $out;

            #[allow(non_snake_case)]
            fn chain(self, input: In) -> $out {
                let ($($f,)+) = self;
                let value = input;
                $(let value = $f(value);)+
                value
            }
        }
    };
}

impl_chain!(R0; (F0, In, R0));
impl_chain!(R1; (F0, In, R0), (F1, R0, R1));
impl_chain!(R2; (F0, In, R0), (F1, R0, R1), (F2, R1, R2));
impl_chain!(R3; (F0, In, R0), (F1, R0, R1), (F2, R1, R2), (F3, R2, R3));
impl_chain!(R4; (F0, In, R0), (F1, R0, R1), (F2, R1, R2), (F3, R2, R3), (F4, R3, R4));
impl_chain!(
    R5;
    (F0, In, R0),
    (F1, R0, R1),
    (F2, R1, R2),
    (F3, R2, R3),
    (F4, R3, R4),
    (F5, R4, R5)
);
