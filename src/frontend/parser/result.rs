use crate::frontend::error::Error;
use crate::source::Location;

/// The two level result used by the expression parsers.
///
/// An alternative that doesn't apply at the current datum answers
/// `NonApplicable` without consuming anything and the dispatcher moves on
/// to the next alternative. An alternative that matched but found its form
/// malformed answers `Applicable(Err(_))`, which aborts the whole parse.
pub enum ParseResult<T> {
    Applicable(Result<T, Error>),
    NonApplicable(String, Location),
}

impl<T> ParseResult<T> {
    pub fn accept(v: T) -> ParseResult<T> {
        ParseResult::Applicable(Ok(v))
    }

    pub fn error(e: Error) -> ParseResult<T> {
        ParseResult::Applicable(Err(e))
    }

    pub fn ignore<S: Into<String>>(message: S, location: Location) -> ParseResult<T> {
        ParseResult::NonApplicable(message.into(), location)
    }

    /// Try `op` if this alternative didn't apply
    pub fn or<F: FnOnce() -> ParseResult<T>>(self, op: F) -> ParseResult<T> {
        match self {
            Self::NonApplicable(_, _) => op(),
            other => other,
        }
    }

    pub fn map<R, F: FnOnce(T) -> R>(self, op: F) -> ParseResult<R> {
        match self {
            Self::Applicable(res) => ParseResult::Applicable(res.map(op)),
            Self::NonApplicable(message, location) => {
                ParseResult::NonApplicable(message, location)
            }
        }
    }

    /// Collapse into a hard result; a non applicable alternative becomes
    /// a parse error carrying its message and location.
    pub fn res(self) -> Result<T, Error> {
        match self {
            Self::Applicable(res) => res,
            Self::NonApplicable(message, location) => {
                Err(Error::parse_error(message, location))
            }
        }
    }

    #[inline]
    pub fn is_applicable(&self) -> bool {
        matches!(self, Self::Applicable(_))
    }
}

impl<T> From<Result<T, Error>> for ParseResult<T> {
    fn from(value: Result<T, Error>) -> Self {
        Self::Applicable(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ignored() -> ParseResult<u32> {
        ParseResult::ignore("not my form", Location::synthetic())
    }

    #[test]
    fn test_or_takes_the_first_applicable() {
        assert_eq!(ignored().or(|| ParseResult::accept(10)).res().unwrap(), 10);
        assert_eq!(
            ParseResult::accept(5).or(|| ParseResult::accept(10)).res().unwrap(),
            5
        );
    }

    #[test]
    fn test_non_applicable_becomes_parse_error() {
        let res: Result<u32, Error> = ignored().res();
        assert!(res.is_err(), "expected parse error");
    }

    #[test]
    fn test_map_keeps_applicability() {
        assert!(ignored().map(|v| v + 1).res().is_err());
        assert_eq!(ParseResult::accept(1).map(|v| v + 1).res().unwrap(), 2);
    }
}
