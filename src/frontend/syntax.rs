use lazy_static::lazy_static;
use rustc_hash::FxHashSet;

lazy_static! {
    /// Identifiers that are reserved for syntactic forms and may not be
    /// used as variables.
    static ref KEYWORDS: FxHashSet<&'static str> = {
        let mut keywords = FxHashSet::default();
        keywords.insert("else");
        keywords.insert("=>");
        keywords.insert("define");
        keywords.insert("unquote");
        keywords.insert("unquote-splicing");
        keywords.insert("quote");
        keywords.insert("lambda");
        keywords.insert("if");
        keywords.insert("set!");
        keywords.insert("begin");
        keywords.insert("cond");
        keywords.insert("and");
        keywords.insert("or");
        keywords.insert("case");
        keywords.insert("let");
        keywords.insert("let*");
        keywords.insert("letrec");
        keywords.insert("do");
        keywords.insert("delay");
        keywords.insert("quasiquote");
        keywords
    };
}

pub fn is_keyword(name: &str) -> bool {
    KEYWORDS.contains(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_are_reserved() {
        for kw in ["lambda", "set!", "let*", "=>", "unquote-splicing"] {
            assert!(is_keyword(kw), "expected {} to be reserved", kw);
        }
    }

    #[test]
    fn test_ordinary_identifiers_are_not_reserved() {
        for id in ["lambdas", "defined", "x", "list->vector", "..."] {
            assert!(!is_keyword(id), "expected {} not to be reserved", id);
        }
    }
}
