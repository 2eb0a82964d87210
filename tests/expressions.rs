use std::{cell::RefCell, collections::HashMap, rc::Rc};

use embex::{
    Class, ClassDef, Engine, Error, Instance, NativeFunction, OpTag, Value,
    error::{ParseError, RuntimeError, TokenizeError},
    interpreter::tokenizer::{Token, tokenize, tokenize_template_with},
    reset_default_engine, with_default_engine,
};
use num_bigint::BigInt;

fn eval(source: &str) -> Value {
    Engine::with_defaults().evaluate(source)
                           .unwrap_or_else(|e| panic!("'{source}' failed: {e}"))
}

fn eval_err(source: &str) -> Error {
    match Engine::with_defaults().evaluate(source) {
        Ok(v) => panic!("'{source}' succeeded with {v} but was expected to fail"),
        Err(e) => e,
    }
}

fn ints(values: &[i64]) -> Value {
    Value::from(values.iter().map(|&n| Value::Integer(n)).collect::<Vec<_>>())
}

fn big(digits: &str) -> Value {
    Value::Big(digits.parse::<BigInt>().unwrap())
}

#[test]
fn arithmetic_and_precedence() {
    assert_eq!(eval("2 + 3 * 4"), Value::Integer(14));
    assert_eq!(eval("(2 + 3) * 4"), Value::Integer(20));
    assert_eq!(eval("10 / 2"), Value::Integer(5));
    assert_eq!(eval("7 % 3"), Value::Integer(1));
    assert_eq!(eval("1 + 2.5"), Value::Real(3.5));
    assert_eq!(eval("7.0 / 2"), Value::Real(3.5));
}

#[test]
fn exponentiation_is_right_associative() {
    assert_eq!(eval("2 ** 3 ** 2"), Value::Integer(512));
    assert_eq!(eval("(2 ** 3) ** 2"), Value::Integer(64));
    assert_eq!(eval("2 ** -1"), Value::Real(0.5));
}

#[test]
fn unary_operators() {
    assert_eq!(eval("-5"), Value::Integer(-5));
    assert_eq!(eval("+7"), Value::Integer(7));
    assert_eq!(eval("~5"), Value::Integer(-6));
    assert_eq!(eval("!true"), Value::Bool(false));
    assert_eq!(eval("!0"), Value::Bool(true));
    // The operand of unary minus is parsed at the unary precedence, so the
    // tighter-binding `**` stays inside it.
    assert_eq!(eval("-2 ** 2"), Value::Integer(-4));
}

#[test]
fn logical_operators_select_by_truthiness() {
    assert_eq!(eval("0 || 'fallback'"), Value::Str("fallback".to_string()));
    assert_eq!(eval("'' && 1"), Value::Str(String::new()));
    assert_eq!(eval("1 && 2"), Value::Integer(2));
    assert_eq!(eval("null || 3"), Value::Integer(3));
}

#[test]
fn bitwise_and_shifts() {
    assert_eq!(eval("5 & 3"), Value::Integer(1));
    assert_eq!(eval("5 | 2"), Value::Integer(7));
    assert_eq!(eval("5 ^ 1"), Value::Integer(4));
    assert_eq!(eval("1 << 4"), Value::Integer(16));
    assert_eq!(eval("-8 >> 1"), Value::Integer(-4));
    assert_eq!(eval("-8 >>> 1"), Value::Integer(9_223_372_036_854_775_804));
}

#[test]
fn equality_is_loose_and_strict() {
    assert_eq!(eval("1 == 1.0"), Value::Bool(true));
    assert_eq!(eval("1 === 1.0"), Value::Bool(false));
    assert_eq!(eval("1 != 2"), Value::Bool(true));
    assert_eq!(eval("'a' == 'a'"), Value::Bool(true));
    assert_eq!(eval("123n == 123"), Value::Bool(true));
    assert_eq!(eval("123n === 123"), Value::Bool(false));
    assert_eq!(eval("1 !== 1"), Value::Bool(false));
}

#[test]
fn comparisons() {
    assert_eq!(eval("3 < 4"), Value::Bool(true));
    assert_eq!(eval("3 <= 3"), Value::Bool(true));
    assert_eq!(eval("4 > 4"), Value::Bool(false));
    assert_eq!(eval("'abc' < 'abd'"), Value::Bool(true));
    assert_eq!(eval("2n >= 1"), Value::Bool(true));
}

#[test]
fn numeric_constants_decode() {
    assert_eq!(eval("1e-4"), eval("1E-4"));
    assert_eq!(eval("1e-4"), Value::Real(1e-4));
    assert_eq!(eval(".5"), Value::Real(0.5));
    assert_eq!(eval("123n"), big("123"));
}

#[test]
fn big_integer_arithmetic() {
    assert_eq!(eval("2n + 3n"), big("5"));
    assert_eq!(eval("1n + 2"), big("3"));
    assert_eq!(eval("2n ** 64n"), big("18446744073709551616"));
    assert!(matches!(eval_err("1n + 0.5"),
                     Error::Runtime(RuntimeError::TypeError { .. })));
}

#[test]
fn string_concatenation_and_repetition() {
    assert_eq!(eval("'a' + 'b'"), Value::Str("ab".to_string()));
    assert_eq!(eval("'ha' * 3"), Value::Str("hahaha".to_string()));
    // Dispatch through the right operand's class.
    assert_eq!(eval("3 * 'hey'"), Value::Str("heyheyhey".to_string()));
}

#[test]
fn string_escapes_decode() {
    assert_eq!(eval(r"'it\'s'"), Value::Str("it's".to_string()));
    assert_eq!(eval(r"'a\\b'"), Value::Str(r"a\b".to_string()));
    assert_eq!(eval(r"'\u0041'"), Value::Str("A".to_string()));
    assert_eq!(eval(r"'\u{1F600}'"), Value::Str("\u{1F600}".to_string()));
}

#[test]
fn unicode_escapes_expand_outside_strings() {
    let mut engine = Engine::with_defaults();
    engine.bind("a", 5);
    // `\u0061` expands to `a` before scanning, so it resolves as the
    // identifier.
    assert_eq!(engine.evaluate(r"\u0061 + 1").unwrap(), Value::Integer(6));
}

#[test]
fn unicode_identifiers() {
    let mut engine = Engine::with_defaults();
    engine.bind("你好", 1);
    engine.bind("Привет", 2);
    engine.bind("$value", 3);
    engine.bind("_x", 4);
    assert_eq!(engine.evaluate("你好 + Привет + $value + _x").unwrap(),
               Value::Integer(10));
}

#[test]
fn sequence_concatenation() {
    let result = Engine::with_defaults().evaluate_template(&["", " + ", ""],
                                                           &[ints(&[1, 2]), ints(&[3, 4])])
                                        .unwrap();
    assert_eq!(result, ints(&[1, 2, 3, 4]));
}

#[test]
fn array_indexing_wraps_negatives() {
    let mut engine = Engine::with_defaults();
    engine.bind("arr", ints(&[10, 20, 30]));

    assert_eq!(engine.evaluate("arr[0]").unwrap(), Value::Integer(10));
    assert_eq!(engine.evaluate("arr[-1]").unwrap(), Value::Integer(30));
    assert!(matches!(engine.evaluate("arr[3]").unwrap_err(),
                     Error::Runtime(RuntimeError::IndexOutOfBounds { len: 3, found: 3 })));
}

#[test]
fn array_slicing() {
    let mut engine = Engine::with_defaults();
    engine.bind("arr", ints(&[1, 2, 3, 4, 5, 6, 7, 8]));

    assert_eq!(engine.evaluate("arr[::-1]").unwrap(),
               ints(&[8, 7, 6, 5, 4, 3, 2, 1]));
    assert_eq!(engine.evaluate("arr[1:-2:2]").unwrap(), ints(&[2, 4, 6]));
    assert_eq!(engine.evaluate("arr[2:5]").unwrap(), ints(&[3, 4, 5]));
    assert_eq!(engine.evaluate("arr[:]").unwrap(),
               ints(&[1, 2, 3, 4, 5, 6, 7, 8]));
    assert_eq!(engine.evaluate("arr[::2]").unwrap(), ints(&[1, 3, 5, 7]));
    // The negative-step end default is an exclusive lower sentinel, so the
    // run reaches index 0: six elements.
    assert_eq!(engine.evaluate("arr[5::-1]").unwrap(),
               ints(&[6, 5, 4, 3, 2, 1]));
    // Oversized bounds clamp instead of failing.
    assert_eq!(engine.evaluate("arr[-100:100]").unwrap(),
               ints(&[1, 2, 3, 4, 5, 6, 7, 8]));
}

#[test]
fn slice_failure_modes() {
    let mut engine = Engine::with_defaults();
    engine.bind("arr", ints(&[1, 2, 3]));

    assert!(matches!(engine.evaluate("arr[::0]").unwrap_err(),
                     Error::Runtime(RuntimeError::SliceStepZero)));
    // The default array overload rejects multi-dimensional slices.
    assert!(matches!(engine.evaluate("arr[1:2, 0:1]").unwrap_err(),
                     Error::Runtime(RuntimeError::InvalidArgument { .. })));
}

#[test]
fn slicing_without_overload_degenerates_to_indexing() {
    let engine = Engine::new();
    let arr = ints(&[10, 20, 30]);

    // One start-only dimension collapses to an index access.
    assert_eq!(engine.evaluate_template(&["", "[2:]"], std::slice::from_ref(&arr))
                     .unwrap(),
               Value::Integer(30));
    assert!(matches!(engine.evaluate_template(&["", "[::2]"], &[arr]).unwrap_err(),
                     Error::Runtime(RuntimeError::SliceNotSupported { .. })));
}

#[test]
fn set_union_and_difference() {
    let mut engine = Engine::with_defaults();
    engine.bind("a", eval_set(&[1, 2, 3]));
    engine.bind("b", eval_set(&[2, 3, 4]));

    assert_eq!(engine.evaluate("a + b").unwrap(), eval_set(&[1, 2, 3, 4]));
    assert_eq!(engine.evaluate("a - b").unwrap(), eval_set(&[1]));
    assert_eq!(engine.evaluate("(a + b).size").unwrap(), Value::Integer(4));
}

fn eval_set(values: &[i64]) -> Value {
    use embex::interpreter::value::set_value::SetValue;
    Value::from(values.iter()
                      .map(|&n| SetValue::Integer(n))
                      .collect::<std::collections::HashSet<_>>())
}

#[test]
fn property_access() {
    let mut engine = Engine::with_defaults();
    let mut obj = HashMap::new();
    obj.insert("x".to_string(), Value::Integer(40));
    engine.bind("obj", obj);
    engine.bind("arr", ints(&[1, 2, 3]));

    assert_eq!(engine.evaluate("obj.x + 2").unwrap(), Value::Integer(42));
    assert_eq!(engine.evaluate("arr.length").unwrap(), Value::Integer(3));
    assert_eq!(engine.evaluate("'hey'.length").unwrap(), Value::Integer(3));
    assert!(matches!(engine.evaluate("obj.missing").unwrap_err(),
                     Error::Runtime(RuntimeError::UnknownProperty { .. })));
}

#[test]
fn map_indexing_by_key() {
    let mut engine = Engine::with_defaults();
    let mut obj = HashMap::new();
    obj.insert("key".to_string(), Value::Integer(7));
    engine.bind("obj", obj);

    assert_eq!(engine.evaluate("obj['key']").unwrap(), Value::Integer(7));
    assert_eq!(engine.evaluate("'hey'[1]").unwrap(), Value::Str("e".to_string()));
}

#[test]
fn math_namespace_and_builtins() {
    assert_eq!(eval("Math.max(3, 4)"), Value::Integer(4));
    assert_eq!(eval("max(3, 4.5)"), Value::Real(4.5));
    assert_eq!(eval("min(3, 4, -1)"), Value::Integer(-1));
    assert_eq!(eval("abs(-5)"), Value::Integer(5));
    assert_eq!(eval("floor(3.7)"), Value::Real(3.0));
    assert_eq!(eval("sqrt(9)"), Value::Real(3.0));
    assert_eq!(eval("pow(2, 10)"), Value::Integer(1024));
    assert_eq!(eval("PI > 3 && PI < 4"), Value::Bool(true));
}

#[test]
fn invocation_forms() {
    assert_eq!(eval("max(1, 2,)"), Value::Integer(2));
    assert!(matches!(eval_err("max()"),
                     Error::Runtime(RuntimeError::InvalidArgument { .. })));
    assert!(matches!(eval_err("3(4)"),
                     Error::Runtime(RuntimeError::NotCallable { .. })));
}

#[test]
fn embedded_functions_are_callable() {
    let double = NativeFunction::new("double", |args| match args {
        [Value::Integer(n)] => Ok(Value::Integer(n * 2)),
        _ => Ok(Value::Null),
    });

    let result = Engine::with_defaults().evaluate_template(&["", "(21)"],
                                                           &[Value::Function(double)])
                                        .unwrap();
    assert_eq!(result, Value::Integer(42));
}

#[test]
fn arguments_evaluate_left_to_right() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let tracer = |name: &'static str, log: &Rc<RefCell<Vec<&'static str>>>| {
        let log = log.clone();
        NativeFunction::new(name, move |_| {
            log.borrow_mut().push(name);
            Ok(Value::Integer(0))
        })
    };

    let mut engine = Engine::with_defaults();
    engine.bind("a", tracer("a", &log));
    engine.bind("b", tracer("b", &log));
    engine.bind("f", tracer("f", &log));

    engine.evaluate("f(a(), b())").unwrap();
    assert_eq!(*log.borrow(), vec!["a", "b", "f"]);
}

#[test]
fn binary_operands_evaluate_left_to_right() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let tracer = |name: &'static str, log: &Rc<RefCell<Vec<&'static str>>>| {
        let log = log.clone();
        NativeFunction::new(name, move |_| {
            log.borrow_mut().push(name);
            Ok(Value::Integer(1))
        })
    };

    let mut engine = Engine::with_defaults();
    engine.bind("a", tracer("a", &log));
    engine.bind("b", tracer("b", &log));

    // Both operands are always evaluated, even for `&&`.
    assert_eq!(engine.evaluate("a() && b()").unwrap(), Value::Integer(1));
    assert_eq!(*log.borrow(), vec!["a", "b"]);
}

#[test]
fn overload_preference_left_then_right_then_native() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let tracer_class = |marker: &'static str, calls: &Rc<RefCell<Vec<&'static str>>>| {
        let calls = calls.clone();
        ClassDef::new(marker).with_operator(OpTag::Add, NativeFunction::new(marker, move |_| {
                                calls.borrow_mut().push(marker);
                                Ok(Value::Integer(0))
                            }))
                             .build()
    };

    let left_class = tracer_class("left", &calls);
    let right_class = tracer_class("right", &calls);
    let left = Value::from(Instance::new(&left_class, Vec::<(&str, Value)>::new()));
    let right = Value::from(Instance::new(&right_class, Vec::<(&str, Value)>::new()));

    let engine = Engine::with_defaults();

    // Left operand's class wins.
    engine.evaluate_template(&["", " + ", ""], &[left.clone(), right.clone()])
          .unwrap();
    assert_eq!(*calls.borrow(), vec!["left"]);

    // Otherwise the right operand's class is consulted, exactly once.
    calls.borrow_mut().clear();
    engine.evaluate_template(&["1 + ", ""], &[right]).unwrap();
    assert_eq!(*calls.borrow(), vec!["right"]);

    // With no overload on either side, the native fallback runs alone.
    calls.borrow_mut().clear();
    assert_eq!(engine.evaluate("1 + 2").unwrap(), Value::Integer(3));
    assert!(calls.borrow().is_empty());
}

#[test]
fn right_overload_receives_swapped_operands() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let class = {
        let seen = seen.clone();
        ClassDef::new("swapper").with_operator(OpTag::Mul,
                                               NativeFunction::new("swapper.mul", move |args| {
                                                   seen.borrow_mut().extend(args.to_vec());
                                                   Ok(Value::Null)
                                               }))
                                .build()
    };

    let instance = Value::from(Instance::new(&class, Vec::<(&str, Value)>::new()));
    Engine::new().evaluate_template(&["5 * ", ""], &[instance.clone()])
                 .unwrap();

    // The receiver comes first even though it was the right operand.
    assert_eq!(seen.borrow()[0], instance);
    assert_eq!(seen.borrow()[1], Value::Integer(5));
}

#[test]
fn class_declared_operators_need_no_registration() {
    let vec2 = ClassDef::new("vec2").with_operator(OpTag::Add,
                                                   NativeFunction::new("vec2.add", |args| {
                                                       let x = args[0].get_property("x")?;
                                                       let y = args[1].get_property("x")?;
                                                       match (x, y) {
                                                           (Value::Integer(a), Value::Integer(b)) => {
                                                               Ok(Value::Integer(a + b))
                                                           },
                                                           _ => Ok(Value::Null),
                                                       }
                                                   }))
                                    .build();

    let a = Value::from(Instance::new(&vec2, [("x", Value::Integer(1))]));
    let b = Value::from(Instance::new(&vec2, [("x", Value::Integer(2))]));

    // A bare engine sees the declared operator.
    let result = Engine::new().evaluate_template(&["", " + ", ""], &[a, b]).unwrap();
    assert_eq!(result, Value::Integer(3));
}

#[test]
fn engine_registration_shadows_declared_operators() {
    let class = ClassDef::new("shadowed").with_operator(OpTag::Add,
                                                        NativeFunction::new("declared", |_| {
                                                            Ok(Value::Str("declared".to_string()))
                                                        }))
                                         .build();

    let mut engine = Engine::new();
    engine.overload(&Class::Defined(class.clone()),
                    "+",
                    NativeFunction::new("registered", |_| Ok(Value::Str("registered".to_string()))))
          .unwrap();

    let instance = Value::from(Instance::new(&class, Vec::<(&str, Value)>::new()));
    let result = engine.evaluate_template(&["", " + 1"], &[instance]).unwrap();
    assert_eq!(result, Value::Str("registered".to_string()));
}

#[test]
fn overload_resolution_walks_the_parent_chain() {
    let parent = ClassDef::new("parent").with_operator(OpTag::Mul,
                                                       NativeFunction::new("parent.mul", |_| {
                                                           Ok(Value::Str("inherited".to_string()))
                                                       }))
                                        .build();
    let child = ClassDef::new("child").with_parent(&parent).build();

    let instance = Value::from(Instance::new(&child, Vec::<(&str, Value)>::new()));
    let result = Engine::new().evaluate_template(&["", " * 2"], &[instance]).unwrap();
    assert_eq!(result, Value::Str("inherited".to_string()));

    let engine = Engine::new();
    assert!(engine.overload_for_class(&Class::Defined(child), OpTag::Mul).is_some());
    assert!(engine.overload_for_class(&Class::Defined(parent), OpTag::Add).is_none());
}

#[test]
fn binding_api() {
    let mut engine = Engine::new();

    engine.bind("x", 1);
    engine.bind("x", 2); // upsert
    engine.bind_all([("y", Value::Integer(3)), ("z", Value::Integer(4))]);

    let mut map = HashMap::new();
    map.insert("w".to_string(), Value::Integer(5));
    engine.bind_all(map);

    assert_eq!(engine.evaluate("x + y + z + w").unwrap(), Value::Integer(14));

    engine.unbind_all(["y", "z", "never-bound"]);
    assert!(engine.binding("y").is_none());
    assert!(matches!(engine.evaluate("y").unwrap_err(),
                     Error::Runtime(RuntimeError::UnknownIdentifier { .. })));
}

#[test]
fn overload_registration_rejects_unknown_names() {
    let mut engine = Engine::new();
    let noop = NativeFunction::new("noop", |_| Ok(Value::Null));

    assert!(matches!(engine.overload(&Class::Array, "<=>", noop).unwrap_err(),
                     RuntimeError::UnknownOperation { .. }));
}

#[test]
fn bulk_overload_registration() {
    let mut engine = Engine::new();
    engine.overload_all(&Class::Str,
                        [("+", NativeFunction::new("shout.concat", |args| {
                             match args {
                                 [Value::Str(a), Value::Str(b)] => {
                                     Ok(Value::Str(format!("{a}!{b}")))
                                 },
                                 _ => Ok(Value::Null),
                             }
                         })),
                         ("-x", NativeFunction::new("shout.neg", |args| {
                             match args {
                                 [Value::Str(s)] => {
                                     Ok(Value::Str(s.chars().rev().collect()))
                                 },
                                 _ => Ok(Value::Null),
                             }
                         }))])
          .unwrap();

    assert_eq!(engine.evaluate("'a' + 'b'").unwrap(), Value::Str("a!b".to_string()));
    assert_eq!(engine.evaluate("-'abc'").unwrap(), Value::Str("cba".to_string()));
}

#[test]
fn default_engine_is_resettable() {
    reset_default_engine();
    with_default_engine(|engine| engine.bind("custom", 99));
    assert_eq!(embex::evaluate("custom").unwrap(), Value::Integer(99));

    reset_default_engine();
    assert!(embex::evaluate("custom").is_err());
    // Defaults come back after the reset.
    assert_eq!(embex::evaluate("Math.max(3, 4)").unwrap(), Value::Integer(4));
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(eval("2+3*4"), eval(" 2 +\t3 \n * 4 "));

    // Retained whitespace tokens are accepted by the parser unchanged.
    let tokens = tokenize_template_with(&[" 1 + 2 "], &[], true).unwrap();
    assert!(tokens.iter().any(|t| matches!(t, Token::Whitespace(_))));
    let parsed = embex::interpreter::parser::core::parse(&tokens).unwrap();
    assert_eq!(Engine::new().eval(&parsed).unwrap(), Value::Integer(3));
}

#[test]
fn parenthesization_is_sound() {
    assert_eq!(eval("1 + 2 * 3"), eval("1 + (2 * 3)"));
    assert_eq!(eval("1 + 2 * 3"), eval("(1) + ((2) * (3))"));
    assert_eq!(eval("2 ** (3 ** 2)"), eval("2 ** 3 ** 2"));
}

#[test]
fn token_literals_round_trip() {
    let source = "arr[1:-2:2]+max(x,.5)*'it\\'s'==1e-4";
    let tokens = tokenize(source).unwrap();

    let rebuilt: String = tokens.iter().map(|t| t.literal()).collect();
    assert_eq!(rebuilt, source);
    assert_eq!(tokenize(&rebuilt).unwrap(), tokens);
}

#[test]
fn tokenizer_reports_unknown_code_points() {
    let Error::Tokenize(TokenizeError::UnknownCodePoint { code_point,
                                                          line,
                                                          column,
                                                          excerpt, }) = eval_err("2 + @ 3")
    else {
        panic!("expected a tokenize error");
    };

    assert_eq!(code_point, '@');
    assert_eq!((line, column), (1, 5));
    assert!(excerpt.contains('^'));
}

#[test]
fn parser_failure_modes() {
    assert!(matches!(eval_err(""), Error::Parse(ParseError::EmptyExpression)));
    assert!(matches!(eval_err("   "), Error::Parse(ParseError::EmptyExpression)));
    assert!(matches!(eval_err("3 +"), Error::Parse(ParseError::UnexpectedEndOfInput)));
    assert!(matches!(eval_err("1 2"), Error::Parse(ParseError::TrailingTokens { .. })));
    assert!(matches!(eval_err("(1 + 2"), Error::Parse(ParseError::ExpectedClosingParen)));
    assert!(matches!(eval_err("{1}"), Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(eval_err("1 * * 2"), Error::Parse(ParseError::UnexpectedToken { .. })));

    let mut engine = Engine::with_defaults();
    engine.bind("arr", ints(&[1, 2, 3]));
    assert!(matches!(engine.evaluate("arr[]").unwrap_err(),
                     Error::Parse(ParseError::EmptySubscript)));
    assert!(matches!(engine.evaluate("arr[1").unwrap_err(),
                     Error::Parse(ParseError::ExpectedClosingBracket)));
    assert!(matches!(engine.evaluate("arr[1:2:3:4]").unwrap_err(),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(engine.evaluate("arr.").unwrap_err(),
                     Error::Parse(ParseError::ExpectedIdentifier { .. })));
    assert!(matches!(engine.evaluate("arr.0").unwrap_err(),
                     Error::Parse(ParseError::ExpectedIdentifier { .. })));
}

#[test]
fn runtime_failure_modes() {
    assert!(matches!(eval_err("nope"),
                     Error::Runtime(RuntimeError::UnknownIdentifier { .. })));
    assert!(matches!(eval_err("1 / 0"), Error::Runtime(RuntimeError::DivisionByZero)));
    assert!(matches!(eval_err("1 % 0"), Error::Runtime(RuntimeError::DivisionByZero)));
    assert!(matches!(eval_err("9223372036854775807 + 1"),
                     Error::Runtime(RuntimeError::Overflow)));
    assert!(matches!(eval_err("'a' - 'b'"),
                     Error::Runtime(RuntimeError::TypeError { .. })));
}
