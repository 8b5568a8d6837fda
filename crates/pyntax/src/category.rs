//! Semantic span categories.
//!
//! Categories are the shared vocabulary between the classifier and any
//! rendering layer: every produced span carries exactly one [`Category`].

/// Semantic classification tag attached to a span of line text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Language keyword (`def`, `return`, `lambda`, ...).
    Keyword,
    /// Built-in function name (`len`, `print`, `range`, ...).
    BuiltinFunction,
    /// Built-in constant (`True`, `False`, `None`, ...).
    Constant,
    /// Built-in exception or warning type name (`ValueError`, `KeyError`, ...).
    ExceptionName,
    /// Dunder method name (`__init__`, `__repr__`, ...).
    MagicMethod,
    /// Ordinary single-line string literal.
    String,
    /// Formatted string literal (`f"..."`, `rf'...'`).
    FString,
    /// Triple-quoted string literal, possibly spanning multiple lines.
    Docstring,
    /// `#` comment running to end of line.
    Comment,
    /// Numeric literal (integer, float, hex, binary, octal, imaginary).
    Number,
    /// Decorator reference (`@app.route`).
    Decorator,
    /// Operator (`+`, `==`, `->`, ...).
    Operator,
    /// Round bracket `(` or `)`.
    BracketRound,
    /// Curly bracket `{` or `}`.
    BracketCurly,
    /// Square bracket `[` or `]`.
    BracketSquare,
    /// Name introduced by `class`.
    ClassName,
    /// Name introduced by `def`.
    FunctionName,
    /// The `self` or `cls` receiver name.
    SelfOrCls,
    /// Unclassified text.
    Plain,
}

impl Category {
    /// All categories, in a stable order.
    pub const ALL: [Category; 19] = [
        Category::Keyword,
        Category::BuiltinFunction,
        Category::Constant,
        Category::ExceptionName,
        Category::MagicMethod,
        Category::String,
        Category::FString,
        Category::Docstring,
        Category::Comment,
        Category::Number,
        Category::Decorator,
        Category::Operator,
        Category::BracketRound,
        Category::BracketCurly,
        Category::BracketSquare,
        Category::ClassName,
        Category::FunctionName,
        Category::SelfOrCls,
        Category::Plain,
    ];

    /// Returns `true` for categories whose spans claim their character range
    /// outright: string, f-string, docstring, and comment.
    ///
    /// Once one of these claims a range, no later classification pass may
    /// emit a span over any part of it.
    pub const fn is_exclusionary(self) -> bool {
        matches!(
            self,
            Category::String | Category::FString | Category::Docstring | Category::Comment
        )
    }

    /// Stable name for this category (used as theme file keys).
    pub const fn name(self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::BuiltinFunction => "builtin-function",
            Category::Constant => "constant",
            Category::ExceptionName => "exception-name",
            Category::MagicMethod => "magic-method-name",
            Category::String => "string",
            Category::FString => "f-string",
            Category::Docstring => "docstring",
            Category::Comment => "comment",
            Category::Number => "number",
            Category::Decorator => "decorator",
            Category::Operator => "operator",
            Category::BracketRound => "bracket-round",
            Category::BracketCurly => "bracket-curly",
            Category::BracketSquare => "bracket-square",
            Category::ClassName => "class-name",
            Category::FunctionName => "function-name",
            Category::SelfOrCls => "self-or-cls",
            Category::Plain => "plain",
        }
    }

    /// Parse a category from its stable name.
    pub fn from_name(name: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusionary_categories() {
        assert!(Category::String.is_exclusionary());
        assert!(Category::FString.is_exclusionary());
        assert!(Category::Docstring.is_exclusionary());
        assert!(Category::Comment.is_exclusionary());

        assert!(!Category::Keyword.is_exclusionary());
        assert!(!Category::Number.is_exclusionary());
        assert!(!Category::BracketRound.is_exclusionary());
        assert!(!Category::Plain.is_exclusionary());
    }

    #[test]
    fn test_name_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::from_name(category.name()), Some(category));
        }
    }

    #[test]
    fn test_from_name_invalid() {
        assert_eq!(Category::from_name("Keyword"), None);
        assert_eq!(Category::from_name("strings"), None);
        assert_eq!(Category::from_name(""), None);
    }

    #[test]
    fn test_name_phrasing_for_name_categories() {
        assert_eq!(Category::MagicMethod.name(), "magic-method-name");
        assert_eq!(
            Category::from_name("magic-method-name"),
            Some(Category::MagicMethod)
        );
        assert_eq!(Category::from_name("magic-method"), None);
        assert_eq!(Category::ExceptionName.name(), "exception-name");
        assert_eq!(Category::FunctionName.name(), "function-name");
    }

    #[test]
    fn test_all_has_no_duplicates() {
        for (i, a) in Category::ALL.iter().enumerate() {
            for b in Category::ALL.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
