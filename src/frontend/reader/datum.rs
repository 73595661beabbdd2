use crate::source::{HasSourceLocation, Location};
use std::fmt::Formatter;

/// `Datum` is what the reader creates from the token stream.
///
/// Datums are the external representation of scheme values: atoms, lists,
/// vectors and the reader abbreviations. The program parser consumes them
/// to build expressions.
#[derive(Debug, PartialEq, Clone)]
pub enum Datum {
    Boolean(bool, Location),
    Number(f64, Location),
    String(String, Location),
    Char(char, Location),
    Symbol(String, Location),
    List(Vec<Datum>, Location),
    ImproperList(Vec<Datum>, Box<Datum>, Location),
    Vector(Vec<Datum>, Location),
    Quote(Box<Datum>, Location),
    Quasiquote(Box<Datum>, Location),
    Unquote(Box<Datum>, Location),
    UnquoteSplicing(Box<Datum>, Location),
}

impl Datum {
    #[inline]
    pub fn boolean(v: bool, location: Location) -> Self {
        Self::Boolean(v, location)
    }

    #[inline]
    pub fn number(v: f64, location: Location) -> Self {
        Self::Number(v, location)
    }

    #[inline]
    pub fn string<S: Into<String>>(v: S, location: Location) -> Self {
        Self::String(v.into(), location)
    }

    #[inline]
    pub fn character(v: char, location: Location) -> Self {
        Self::Char(v, location)
    }

    #[inline]
    pub fn symbol<S: Into<String>>(v: S, location: Location) -> Self {
        Self::Symbol(v.into(), location)
    }

    pub fn list<I>(elements: I, location: Location) -> Self
    where
        I: IntoIterator<Item = Datum>,
    {
        Self::List(elements.into_iter().collect(), location)
    }

    pub fn improper_list<I>(elements: I, tail: Datum, location: Location) -> Self
    where
        I: IntoIterator<Item = Datum>,
    {
        Self::ImproperList(elements.into_iter().collect(), Box::new(tail), location)
    }

    pub fn vector<I>(elements: I, location: Location) -> Self
    where
        I: IntoIterator<Item = Datum>,
    {
        Self::Vector(elements.into_iter().collect(), location)
    }

    pub fn quote(inner: Datum, location: Location) -> Self {
        Self::Quote(Box::new(inner), location)
    }

    pub fn quasiquote(inner: Datum, location: Location) -> Self {
        Self::Quasiquote(Box::new(inner), location)
    }

    pub fn unquote(inner: Datum, location: Location) -> Self {
        Self::Unquote(Box::new(inner), location)
    }

    pub fn unquote_splicing(inner: Datum, location: Location) -> Self {
        Self::UnquoteSplicing(Box::new(inner), location)
    }

    pub fn is_atom(&self) -> bool {
        !matches!(
            self,
            Self::List(_, _)
                | Self::ImproperList(_, _, _)
                | Self::Vector(_, _)
                | Self::Quote(_, _)
                | Self::Quasiquote(_, _)
                | Self::Unquote(_, _)
                | Self::UnquoteSplicing(_, _)
        )
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, Self::Symbol(_, _))
    }

    /// The name of this datum, if it is a symbol
    pub fn symbol_name(&self) -> Option<&str> {
        match self {
            Self::Symbol(name, _) => Some(name),
            _ => None,
        }
    }

    /// If the current datum is a proper list, return the slice of the
    /// list's elements.
    ///
    /// This function is mostly used in the parser, which matches slice
    /// patterns against it.
    pub fn list_slice(&self) -> Option<&[Datum]> {
        match self {
            Self::List(elements, _) => Some(&elements[..]),
            _ => None,
        }
    }

    pub fn improper_list_slice(&self) -> Option<(&[Datum], &Datum)> {
        match self {
            Self::ImproperList(head, tail, _) => Some((&head[..], tail)),
            _ => None,
        }
    }
}

/// The `Display` instance for `Datum` is meant for debug output and logs.
/// Use the `Writer` for the full, re-readable external representation.
impl std::fmt::Display for Datum {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let location = self.source_location();
        let span = format!("[{}..{}]", location.span.start(), location.span.end());

        match self {
            Self::Boolean(v, _) => write!(f, "{}@{}", span, v),
            Self::Number(v, _) => write!(f, "{}@{}", span, v),
            Self::String(v, _) => write!(f, "{}@\"{}\"", span, v),
            Self::Char(v, _) => write!(f, "{}@{}", span, v),
            Self::Symbol(v, _) => write!(f, "{}@{}", span, v),
            Self::List(elements, _) => {
                let elements: Vec<_> = elements.iter().map(|e| e.to_string()).collect();
                write!(f, "{} @ ( {} )", span, elements.join(" "))
            }
            Self::ImproperList(head, tail, _) => {
                let head: Vec<_> = head.iter().map(|e| e.to_string()).collect();
                write!(f, "{} @ ( {} . {} )", span, head.join(" "), tail)
            }
            Self::Vector(elements, _) => {
                let elements: Vec<_> = elements.iter().map(|e| e.to_string()).collect();
                write!(f, "{} @ #( {} )", span, elements.join(" "))
            }
            Self::Quote(inner, _) => write!(f, "{} @ '{}", span, inner),
            Self::Quasiquote(inner, _) => write!(f, "{} @ `{}", span, inner),
            Self::Unquote(inner, _) => write!(f, "{} @ ,{}", span, inner),
            Self::UnquoteSplicing(inner, _) => write!(f, "{} @ ,@{}", span, inner),
        }
    }
}

impl HasSourceLocation for Datum {
    fn source_location(&self) -> &Location {
        match self {
            Datum::Boolean(_, loc) => loc,
            Datum::Number(_, loc) => loc,
            Datum::String(_, loc) => loc,
            Datum::Char(_, loc) => loc,
            Datum::Symbol(_, loc) => loc,
            Datum::List(_, loc) => loc,
            Datum::ImproperList(_, _, loc) => loc,
            Datum::Vector(_, loc) => loc,
            Datum::Quote(_, loc) => loc,
            Datum::Quasiquote(_, loc) => loc,
            Datum::Unquote(_, loc) => loc,
            Datum::UnquoteSplicing(_, loc) => loc,
        }
    }
}
