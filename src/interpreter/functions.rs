use crate::interpreter::value::Number;

/// A built-in math function.
///
/// The catalog is fixed: it is keyed by name and arity, and there are no
/// zero-argument entries, so `f()` never resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Sqrt,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    /// Natural logarithm.
    Log,
    Log2,
    Log10,
    /// `atan2(y, x)`
    Atan2,
    /// `pow(base, exponent)`
    Pow,
}

/// Every built-in with the name it is called by.
pub const CATALOG: &[(&str, Builtin)] = &[("sqrt", Builtin::Sqrt),
                                          ("sin", Builtin::Sin),
                                          ("cos", Builtin::Cos),
                                          ("tan", Builtin::Tan),
                                          ("asin", Builtin::Asin),
                                          ("acos", Builtin::Acos),
                                          ("atan", Builtin::Atan),
                                          ("log", Builtin::Log),
                                          ("log2", Builtin::Log2),
                                          ("log10", Builtin::Log10),
                                          ("atan2", Builtin::Atan2),
                                          ("pow", Builtin::Pow)];

impl Builtin {
    /// Finds the built-in called `name` that takes `arity` arguments.
    ///
    /// Names are case sensitive.
    ///
    /// # Example
    /// ```
    /// use llcalc::interpreter::functions::Builtin;
    ///
    /// assert_eq!(Builtin::lookup("pow", 2), Some(Builtin::Pow));
    /// assert_eq!(Builtin::lookup("pow", 1), None);
    /// assert_eq!(Builtin::lookup("Sqrt", 1), None);
    /// assert_eq!(Builtin::lookup("sqrt", 0), None);
    /// ```
    #[must_use]
    pub fn lookup(name: &str, arity: usize) -> Option<Self> {
        CATALOG.iter()
               .find(|(n, f)| *n == name && f.arity() == arity)
               .map(|(_, f)| *f)
    }

    /// Number of arguments the function takes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Atan2 | Self::Pow => 2,
            _ => 1,
        }
    }

    /// Applies the function to its arguments.
    ///
    /// `args` holds [`Builtin::arity`] values; missing ones read as zero.
    /// Everything except `pow` is computed in `f64`. `pow` uses the domain's
    /// own exponentiation, the same one `^` uses.
    ///
    /// # Example
    /// ```
    /// use llcalc::interpreter::functions::Builtin;
    ///
    /// assert_eq!(Builtin::Sqrt.apply(&[16.0]), 4.0);
    /// assert_eq!(Builtin::Pow.apply(&[2.0, 10.0]), 1024.0);
    /// assert_eq!(Builtin::Sqrt.apply(&[17_i64]), 4);
    /// ```
    #[must_use]
    pub fn apply<N: Number>(self, args: &[N]) -> N {
        let a = args.first().copied().unwrap_or_default();
        let b = args.get(1).copied().unwrap_or_default();
        let x = a.to_f64();
        let result = match self {
            Self::Sqrt => x.sqrt(),
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Asin => x.asin(),
            Self::Acos => x.acos(),
            Self::Atan => x.atan(),
            Self::Log => x.ln(),
            Self::Log2 => x.log2(),
            Self::Log10 => x.log10(),
            Self::Atan2 => x.atan2(b.to_f64()),
            Self::Pow => return a.pow(b),
        };
        N::from_f64(result)
    }
}
