use llcalc::{
    Diagnostic, Session, SessionConfig,
    error::{ParseError, RuntimeError},
    util::num::{FormatOptions, approx_eq, format_real},
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn variables_persist_across_lines() {
    let mut session = Session::<f64>::new();

    assert_eq!(session.parse("x = 3 + 4"), 7.0);
    assert_eq!(session.parse("x * 2"), 14.0);
    assert_eq!(session.parse("y = x = 2"), 2.0);
    assert_eq!(session.parse("x + y"), 4.0);
}

#[test]
fn assignment_is_a_factor() {
    let mut session = Session::<f64>::new();

    assert_eq!(session.parse("2 * (a = 3) + a"), 9.0);
    assert_eq!(session.parse("2 * b = 3 + 1"), 8.0);
    assert_eq!(session.parse("b"), 4.0);
}

#[test]
fn reassignment_does_not_duplicate() {
    let mut session = Session::<f64>::new();
    session.parse("x = 1");
    session.parse("x = 2");

    assert_eq!(session.symbols().len(), 2);
    assert_eq!(session.print_symbols(), "pi = 3.14159265\nx = 2\n");
}

#[test]
fn symbols_keep_insertion_order() {
    let mut session = Session::<f64>::new();
    session.parse("zeta = 1");
    session.parse("alpha = 2.5");
    session.parse("zeta = 0.125");

    let names: Vec<&str> = session.symbols().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["pi", "zeta", "alpha"]);
    assert_eq!(session.print_symbols(),
               "pi = 3.14159265\nzeta = 0.125\nalpha = 2.5\n");
}

#[test]
fn pi_can_be_overwritten() {
    let mut session = Session::<f64>::new();

    assert_eq!(session.parse("pi = 3"), 3.0);
    assert_eq!(session.parse("pi * 2"), 6.0);
    assert_eq!(session.print_symbols(), "pi = 3\n");
}

#[test]
fn assignments_before_a_failure_are_kept() {
    let mut session = Session::<f64>::new();

    assert_eq!(session.try_parse("a = 1 + (b = 2) + zzz"),
               Err(RuntimeError::UnknownIdentifier { name:   "zzz".into(),
                                                     column: 19, }.into()));
    assert_eq!(session.symbols().find("b").map(|s| s.value), Some(2.0));
    assert!(session.symbols().find("a").is_none());
}

#[test]
fn diagnostics_belong_to_the_last_line() {
    let mut session = Session::<f64>::new();

    assert_eq!(session.parse("zzz"), 0.0);
    assert_eq!(session.diagnostics().len(), 1);

    assert_eq!(session.parse("1 + 1"), 2.0);
    assert!(session.diagnostics().is_empty());
}

#[test]
fn session_survives_every_kind_of_error() {
    let mut session = Session::<f64>::new();
    for line in ["zzz", "foo(1)", "sqrt()", "1 2", "#", "(", "1 +", "x ="] {
        assert_eq!(session.parse(line), 0.0, "{line:?}");
        assert!(session.diagnostics().iter().any(Diagnostic::is_fatal),
                "{line:?}");
    }
    assert_eq!(session.parse("x = 5"), 5.0);
    session.close();
}

#[test]
fn results_are_formatted_with_session_options() {
    let session = Session::<f64>::new();
    assert_eq!(session.format_number(1123.0), "1123");
    assert_eq!(session.format_number(0.1 + 0.2), "0.3");
    assert_eq!(session.format_number(-0.000_000_001), "0");

    let config = SessionConfig { format: FormatOptions { radix:    2,
                                                         decimals: 8, },
                                 ..SessionConfig::default() };
    let session = Session::<f64>::with_config(config);
    assert_eq!(session.format_number(2.5), "10.1");

    let config = SessionConfig { format: FormatOptions { radix:    10,
                                                         decimals: 2, },
                                 ..SessionConfig::default() };
    let session = Session::<f64>::with_config(config);
    assert_eq!(session.format_number(std::f64::consts::PI), "3.14");
    assert_eq!(session.format_number(9.999), "10");
}

#[test]
fn integer_domain_arithmetic() {
    let mut session = Session::<i64>::new();

    assert_eq!(session.parse("123 + 500*2"), 1123);
    assert_eq!(session.parse("7 / 2"), 3);
    assert_eq!(session.parse("-7 / 2"), -3);
    assert_eq!(session.parse("-7 % 3"), -1);
    assert_eq!(session.parse("2^10"), 1024);
    assert_eq!(session.parse("2^3^2"), 64);
    assert_eq!(session.parse("sqrt(17)"), 4);
    assert_eq!(session.parse("pi"), 3);
    assert_eq!(session.parse("9223372036854775807 + 1"), i64::MIN);
}

#[test]
fn integer_division_by_zero_is_an_error() {
    let mut session = Session::<i64>::new();

    assert_eq!(session.try_parse("7 / 0"),
               Err(RuntimeError::DivisionByZero { column: 3 }.into()));
    assert_eq!(session.try_parse("1 + 7 % (2 - 2)"),
               Err(RuntimeError::DivisionByZero { column: 7 }.into()));
    assert_eq!(session.parse("7 / 0"), 0);
}

#[test]
fn integer_domain_rejects_decimal_literals() {
    let mut session = Session::<i64>::new();

    assert_eq!(session.try_parse("1.5"),
               Err(ParseError::InvalidInput { text:   ".".into(),
                                              column: 2, }.into()));
}

#[test]
fn integer_domain_prints_in_radix() {
    let config = SessionConfig { format: FormatOptions { radix:    16,
                                                         decimals: 8, },
                                 ..SessionConfig::default() };
    let mut session = Session::<i64>::with_config(config);

    let value = session.parse("x = 255");
    assert_eq!(session.format_number(value), "ff");
    assert_eq!(session.format_number(-26), "-1a");
    assert_eq!(session.print_symbols(), "pi = 3\nx = ff\n");
}

#[test]
fn huge_reals_print_as_readable_literals() {
    let mut session = Session::<f64>::new();

    let value = session.parse("10^39");
    let text = session.format_number(value);
    assert!(text.bytes().all(|b| b.is_ascii_digit()), "{text}");

    for value in [value,
                  f64::MAX,
                  -f64::MAX,
                  2_f64.powi(128),
                  3.5e38,
                  -1e300,
                  1.234_567_89e208]
    {
        let text = session.format_number(value);
        let back = session.parse(&text);
        assert!(session.diagnostics().is_empty(),
                "{text} reported {:?}",
                session.diagnostics());
        assert_eq!(back, value);
        assert_eq!(session.format_number(back), text);
    }
}

#[test]
fn smallest_integer_reads_back() {
    let mut session = Session::<i64>::new();

    let value = session.parse("9223372036854775807 + 1");
    let text = session.format_number(value);
    assert_eq!(text, "-9223372036854775808");
    assert_eq!(session.try_parse(&text), Ok(i64::MIN));
    assert_eq!(session.parse("9223372036854775808"), i64::MIN);
    assert!(session.try_parse("9223372036854775809").is_err());
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

impl Op {
    const fn symbol(self) -> &'static str {
        match self {
            Self::Add => " + ",
            Self::Sub => " - ",
            Self::Mul => " * ",
            Self::Div => " / ",
            Self::Rem => " % ",
            Self::Pow => "^",
        }
    }

    const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div | Self::Rem => 2,
            Self::Pow => 3,
        }
    }

    fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
            Self::Rem => lhs % rhs,
            Self::Pow => lhs.powf(rhs),
        }
    }
}

/// `first (op operand)*`, written without parentheses.
#[derive(Debug, Clone)]
struct Chain {
    first: Box<Operand>,
    rest:  Vec<(Op, Operand)>,
}

#[derive(Debug, Clone)]
enum Operand {
    Literal(u8),
    Group(Chain),
}

impl Chain {
    fn render(&self) -> String {
        self.rest
            .iter()
            .fold(self.first.render(), |mut line, (op, operand)| {
                line.push_str(op.symbol());
                line.push_str(&operand.render());
                line
            })
    }

    /// Operator-precedence evaluation with a value and an operator stack.
    /// Every operator is left-associative.
    fn reference(&self) -> f64 {
        let mut values = vec![self.first.reference()];
        let mut ops: Vec<Op> = Vec::new();

        for (op, operand) in &self.rest {
            while ops.last().is_some_and(|top| top.precedence() >= op.precedence()) {
                reduce(&mut values, &mut ops);
            }
            ops.push(*op);
            values.push(operand.reference());
        }
        while !ops.is_empty() {
            reduce(&mut values, &mut ops);
        }
        values[0]
    }
}

impl Operand {
    fn render(&self) -> String {
        match self {
            Self::Literal(n) => n.to_string(),
            Self::Group(chain) => format!("({})", chain.render()),
        }
    }

    fn reference(&self) -> f64 {
        match self {
            Self::Literal(n) => f64::from(*n),
            Self::Group(chain) => chain.reference(),
        }
    }
}

fn reduce(values: &mut Vec<f64>, ops: &mut Vec<Op>) {
    let op = ops.pop().expect("operator");
    let rhs = values.pop().expect("right operand");
    let lhs = values.pop().expect("left operand");
    values.push(op.apply(lhs, rhs));
}

fn same_real(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Add),
                Just(Op::Sub),
                Just(Op::Mul),
                Just(Op::Div),
                Just(Op::Rem),
                Just(Op::Pow)]
}

fn chain_of(operand: impl Strategy<Value = Operand> + Clone, len: usize)
            -> impl Strategy<Value = Chain> {
    (operand.clone(), proptest::collection::vec((op(), operand), 0..len))
        .prop_map(|(first, rest)| Chain { first: Box::new(first),
                                          rest })
}

fn operand() -> BoxedStrategy<Operand> {
    (0_u8..10).prop_map(Operand::Literal)
              .prop_recursive(3, 32, 4, |inner| chain_of(inner, 4).prop_map(Operand::Group))
              .boxed()
}

fn finite_real() -> impl Strategy<Value = f64> {
    use proptest::num::f64::{NEGATIVE, NORMAL, POSITIVE, SUBNORMAL, ZERO};
    POSITIVE | NEGATIVE | NORMAL | SUBNORMAL | ZERO
}

proptest! {
    #[test]
    fn formatted_reals_read_back(value in finite_real()) {
        let text = format_real(value, &FormatOptions::default());
        let mut session = Session::<f64>::new();
        let parsed = session.parse(&text);

        prop_assert!(session.diagnostics().is_empty(), "{text}");
        prop_assert!(approx_eq(parsed, value), "{value} printed as {text} read back as {parsed}");
    }

    #[test]
    fn formatted_integers_read_back(value in any::<i64>()) {
        let mut session = Session::<i64>::new();
        let text = session.format_number(value);
        prop_assert_eq!(session.try_parse(&text), Ok(value));
    }

    #[test]
    fn operators_follow_precedence_levels(chain in chain_of(operand(), 6)) {
        let line = chain.render();
        let expected = chain.reference();

        let mut session = Session::<f64>::new();
        let value = session.try_parse(&line);
        prop_assert!(value.is_ok(), "{line} failed with {value:?}");
        let value = value.unwrap_or_default();
        prop_assert!(same_real(value, expected), "{line} = {value}, expected {expected}");
    }

    #[test]
    fn arbitrary_input_never_panics(line in "[ -~]{0,64}") {
        let mut session = Session::<f64>::new();
        let value = session.parse(&line);
        if session.diagnostics().iter().any(Diagnostic::is_fatal) {
            prop_assert_eq!(value.to_bits(), 0.0_f64.to_bits());
        }
    }
}
