use doxa::Form;
use doxsh::parse::parse;

fn at(name: &str) -> Form<String> {
    Form::Atom(name.to_string())
}

#[test]
fn precedence() {
    assert_eq!(parse("a & b | c").unwrap(), (at("a") & at("b")) | at("c"));
    assert_eq!(parse("a | b & c").unwrap(), at("a") | (at("b") & at("c")));
    assert_eq!(parse("!a & b").unwrap(), -at("a") & at("b"));
    assert_eq!(parse("a -> b | c").unwrap(), Form::imp(at("a"), at("b") | at("c")));
    assert_eq!(
        parse("a -> b -> c").unwrap(),
        Form::imp(Form::imp(at("a"), at("b")), at("c"))
    );
    assert_eq!(
        parse("a <-> b -> c").unwrap(),
        Form::eqfm(at("a"), Form::imp(at("b"), at("c")))
    );
}

#[test]
fn synonyms() {
    for s in ["a & b", "a && b", "a ∧ b"] {
        assert_eq!(parse(s).unwrap(), at("a") & at("b"))
    }
    for s in ["a | b", "a || b", "a ∨ b"] {
        assert_eq!(parse(s).unwrap(), at("a") | at("b"))
    }
    for s in ["a -> b", "a => b", "a → b"] {
        assert_eq!(parse(s).unwrap(), Form::imp(at("a"), at("b")))
    }
    for s in ["a <-> b", "a <=> b", "a ↔ b"] {
        assert_eq!(parse(s).unwrap(), Form::eqfm(at("a"), at("b")))
    }
    for s in ["!a", "~a", "-a", "¬a"] {
        assert_eq!(parse(s).unwrap(), -at("a"))
    }
}

#[test]
fn parens_and_atoms() {
    assert_eq!(parse("(a | b) & c").unwrap(), (at("a") | at("b")) & at("c"));
    assert_eq!(parse("rain_2 -> wet").unwrap(), Form::imp(at("rain_2"), at("wet")));
    assert_eq!(parse("!!a").unwrap(), --at("a"));
    assert_eq!(parse("r <-> (p | s)").unwrap(), Form::eqfm(at("r"), at("p") | at("s")));
}

#[test]
fn errors() {
    assert!(parse("").is_err());
    assert!(parse("a &").is_err());
    assert!(parse("(a | b").is_err());
    assert!(parse("a b").is_err());
    assert!(parse("a $ b").is_err());
    assert!(parse("a < b").is_err());
    assert!(parse("a = b").is_err());
}
