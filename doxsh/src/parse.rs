use crate::{Error, Kind};
use doxa::fof::SForm;
use doxa::Form;
use std::iter::Peekable;

#[derive(Clone, Debug, PartialEq)]
enum Token {
    LParen,
    RParen,
    Neg,
    Conj,
    Disj,
    Impl,
    EqFm,
    Atom(String),
}

fn syntax(msg: String) -> Error {
    Error::new(Kind::Syntax, msg.into())
}

fn tokenize(input: &str) -> Result<Vec<Token>, Error> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            c if c.is_whitespace() => (),
            '(' => tokens.push(Token::LParen),
            ')' => tokens.push(Token::RParen),
            '!' | '~' | '¬' => tokens.push(Token::Neg),
            '∧' => tokens.push(Token::Conj),
            '∨' => tokens.push(Token::Disj),
            '→' => tokens.push(Token::Impl),
            '↔' => tokens.push(Token::EqFm),
            '&' => {
                chars.next_if_eq(&'&');
                tokens.push(Token::Conj)
            }
            '|' => {
                chars.next_if_eq(&'|');
                tokens.push(Token::Disj)
            }
            // "->" is an implication, a lone "-" negates
            '-' => match chars.next_if_eq(&'>') {
                Some(_) => tokens.push(Token::Impl),
                None => tokens.push(Token::Neg),
            },
            '=' => match chars.next_if_eq(&'>') {
                Some(_) => tokens.push(Token::Impl),
                None => return Err(syntax("expected '>' after '='".into())),
            },
            '<' => {
                // "<->" and "<=>"
                if chars.next_if_eq(&'-').is_none() && chars.next_if_eq(&'=').is_none() {
                    return Err(syntax("expected '-' or '=' after '<'".into()));
                }
                if chars.next_if_eq(&'>').is_none() {
                    return Err(syntax("expected '>' in biconditional".into()));
                }
                tokens.push(Token::EqFm)
            }
            c if c.is_alphanumeric() || c == '_' => {
                let mut name = String::from(c);
                while let Some(c) = chars.next_if(|c| c.is_alphanumeric() || *c == '_') {
                    name.push(c)
                }
                tokens.push(Token::Atom(name))
            }
            c => return Err(syntax(format!("unexpected character '{}'", c))),
        }
    }
    Ok(tokens)
}

struct Parser(Peekable<std::vec::IntoIter<Token>>);

impl Parser {
    fn next_if_eq(&mut self, tk: &Token) -> bool {
        self.0.next_if(|t| t == tk).is_some()
    }

    fn eqfm(&mut self) -> Result<SForm, Error> {
        let mut l = self.imp()?;
        while self.next_if_eq(&Token::EqFm) {
            l = Form::eqfm(l, self.imp()?)
        }
        Ok(l)
    }

    fn imp(&mut self) -> Result<SForm, Error> {
        let mut l = self.disj()?;
        while self.next_if_eq(&Token::Impl) {
            l = Form::imp(l, self.disj()?)
        }
        Ok(l)
    }

    fn disj(&mut self) -> Result<SForm, Error> {
        let mut l = self.conj()?;
        while self.next_if_eq(&Token::Disj) {
            l = l | self.conj()?
        }
        Ok(l)
    }

    fn conj(&mut self) -> Result<SForm, Error> {
        let mut l = self.neg()?;
        while self.next_if_eq(&Token::Conj) {
            l = l & self.neg()?
        }
        Ok(l)
    }

    fn neg(&mut self) -> Result<SForm, Error> {
        if self.next_if_eq(&Token::Neg) {
            Ok(-self.neg()?)
        } else {
            self.primary()
        }
    }

    fn primary(&mut self) -> Result<SForm, Error> {
        match self.0.next() {
            Some(Token::LParen) => {
                let fm = self.eqfm()?;
                if self.0.next() != Some(Token::RParen) {
                    return Err(syntax("expected closing parenthesis".into()));
                }
                Ok(fm)
            }
            Some(Token::Atom(name)) => Ok(Form::Atom(name)),
            Some(tk) => Err(syntax(format!("unexpected token {:?}", tk))),
            None => Err(syntax("unexpected end of input".into())),
        }
    }
}

/// Parse a propositional formula.
///
/// Atoms are alphanumeric words (underscores allowed); the connectives are
/// `!`/`~`/`-`/`¬` (negation), `&`/`&&`/`∧` (conjunction),
/// `|`/`||`/`∨` (disjunction), `->`/`=>`/`→` (implication) and
/// `<->`/`<=>`/`↔` (biconditional).
/// Binary connectives associate to the left and bind with decreasing
/// strength from conjunction over disjunction and implication to
/// biconditional.
pub fn parse(input: &str) -> Result<SForm, Error> {
    let mut parser = Parser(tokenize(input)?.into_iter().peekable());
    let fm = parser.eqfm()?;
    match parser.0.next() {
        None => Ok(fm),
        Some(tk) => Err(syntax(format!("trailing input at {:?}", tk))),
    }
}
