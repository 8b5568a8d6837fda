//! Static classification tables and compiled patterns.
//!
//! The five word lists are disjoint by construction, so a token can match
//! at most one of them. Tables and regexes are built once, lazily, and
//! shared by every classification call.

use crate::category::Category;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Language keywords.
///
/// `True`/`False`/`None` are not keywords here; they live in [`CONSTANTS`].
pub static KEYWORDS: &[&str] = &[
    "and", "as", "assert", "async", "await", "break", "class", "continue", "def", "del", "elif",
    "else", "except", "finally", "for", "from", "global", "if", "import", "in", "is", "lambda",
    "nonlocal", "not", "or", "pass", "raise", "return", "try", "while", "with", "yield",
];

/// Built-in function and type constructor names.
pub static BUILTIN_FUNCTIONS: &[&str] = &[
    "abs",
    "aiter",
    "all",
    "anext",
    "any",
    "ascii",
    "bin",
    "bool",
    "breakpoint",
    "bytearray",
    "bytes",
    "callable",
    "chr",
    "classmethod",
    "compile",
    "complex",
    "delattr",
    "dict",
    "dir",
    "divmod",
    "enumerate",
    "eval",
    "exec",
    "filter",
    "float",
    "format",
    "frozenset",
    "getattr",
    "globals",
    "hasattr",
    "hash",
    "help",
    "hex",
    "id",
    "input",
    "int",
    "isinstance",
    "issubclass",
    "iter",
    "len",
    "list",
    "locals",
    "map",
    "max",
    "memoryview",
    "min",
    "next",
    "object",
    "oct",
    "open",
    "ord",
    "pow",
    "print",
    "property",
    "range",
    "repr",
    "reversed",
    "round",
    "set",
    "setattr",
    "slice",
    "sorted",
    "staticmethod",
    "str",
    "sum",
    "super",
    "tuple",
    "type",
    "vars",
    "zip",
];

/// Built-in constants.
pub static CONSTANTS: &[&str] = &[
    "True",
    "False",
    "None",
    "Ellipsis",
    "NotImplemented",
    "__debug__",
];

/// Built-in exception and warning type names.
pub static EXCEPTIONS: &[&str] = &[
    "ArithmeticError",
    "AssertionError",
    "AttributeError",
    "BaseException",
    "BlockingIOError",
    "BrokenPipeError",
    "BufferError",
    "BytesWarning",
    "ChildProcessError",
    "ConnectionAbortedError",
    "ConnectionError",
    "ConnectionRefusedError",
    "ConnectionResetError",
    "DeprecationWarning",
    "EOFError",
    "Exception",
    "FileExistsError",
    "FileNotFoundError",
    "FloatingPointError",
    "FutureWarning",
    "GeneratorExit",
    "ImportError",
    "ImportWarning",
    "IndentationError",
    "IndexError",
    "InterruptedError",
    "IsADirectoryError",
    "KeyError",
    "KeyboardInterrupt",
    "LookupError",
    "MemoryError",
    "ModuleNotFoundError",
    "NameError",
    "NotADirectoryError",
    "NotImplementedError",
    "OSError",
    "OverflowError",
    "PendingDeprecationWarning",
    "PermissionError",
    "ProcessLookupError",
    "RecursionError",
    "ReferenceError",
    "ResourceWarning",
    "RuntimeError",
    "RuntimeWarning",
    "StopAsyncIteration",
    "StopIteration",
    "SyntaxError",
    "SyntaxWarning",
    "SystemError",
    "SystemExit",
    "TabError",
    "TimeoutError",
    "TypeError",
    "UnboundLocalError",
    "UnicodeDecodeError",
    "UnicodeEncodeError",
    "UnicodeError",
    "UnicodeTranslateError",
    "UnicodeWarning",
    "UserWarning",
    "ValueError",
    "Warning",
    "ZeroDivisionError",
];

/// Dunder method names.
pub static MAGIC_METHODS: &[&str] = &[
    "__abs__",
    "__add__",
    "__aenter__",
    "__aexit__",
    "__aiter__",
    "__and__",
    "__anext__",
    "__await__",
    "__bool__",
    "__bytes__",
    "__call__",
    "__ceil__",
    "__complex__",
    "__contains__",
    "__del__",
    "__delattr__",
    "__delete__",
    "__delitem__",
    "__dir__",
    "__divmod__",
    "__enter__",
    "__eq__",
    "__exit__",
    "__float__",
    "__floor__",
    "__floordiv__",
    "__format__",
    "__ge__",
    "__get__",
    "__getattr__",
    "__getattribute__",
    "__getitem__",
    "__gt__",
    "__hash__",
    "__iadd__",
    "__iand__",
    "__ifloordiv__",
    "__ilshift__",
    "__imatmul__",
    "__imod__",
    "__imul__",
    "__index__",
    "__init__",
    "__init_subclass__",
    "__instancecheck__",
    "__int__",
    "__invert__",
    "__ior__",
    "__ipow__",
    "__irshift__",
    "__isub__",
    "__iter__",
    "__itruediv__",
    "__ixor__",
    "__le__",
    "__len__",
    "__length_hint__",
    "__lshift__",
    "__lt__",
    "__matmul__",
    "__missing__",
    "__mod__",
    "__mul__",
    "__ne__",
    "__neg__",
    "__new__",
    "__next__",
    "__or__",
    "__pos__",
    "__pow__",
    "__radd__",
    "__rand__",
    "__rdivmod__",
    "__repr__",
    "__reversed__",
    "__rfloordiv__",
    "__rlshift__",
    "__rmatmul__",
    "__rmod__",
    "__rmul__",
    "__ror__",
    "__round__",
    "__rpow__",
    "__rrshift__",
    "__rshift__",
    "__rsub__",
    "__rtruediv__",
    "__rxor__",
    "__set__",
    "__set_name__",
    "__setattr__",
    "__setitem__",
    "__str__",
    "__sub__",
    "__subclasscheck__",
    "__truediv__",
    "__trunc__",
    "__xor__",
];

/// Word lookup tables backing the word-list pass.
pub(crate) struct WordTables {
    keywords: HashSet<&'static str>,
    builtins: HashSet<&'static str>,
    constants: HashSet<&'static str>,
    exceptions: HashSet<&'static str>,
    magic_methods: HashSet<&'static str>,
}

impl WordTables {
    fn build() -> Self {
        Self {
            keywords: KEYWORDS.iter().copied().collect(),
            builtins: BUILTIN_FUNCTIONS.iter().copied().collect(),
            constants: CONSTANTS.iter().copied().collect(),
            exceptions: EXCEPTIONS.iter().copied().collect(),
            magic_methods: MAGIC_METHODS.iter().copied().collect(),
        }
    }

    /// Look up a whole word in the five tables.
    pub(crate) fn categorize(&self, word: &str) -> Option<Category> {
        if self.keywords.contains(word) {
            Some(Category::Keyword)
        } else if self.builtins.contains(word) {
            Some(Category::BuiltinFunction)
        } else if self.constants.contains(word) {
            Some(Category::Constant)
        } else if self.exceptions.contains(word) {
            Some(Category::ExceptionName)
        } else if self.magic_methods.contains(word) {
            Some(Category::MagicMethod)
        } else {
            None
        }
    }
}

pub(crate) static WORD_TABLES: LazyLock<WordTables> = LazyLock::new(WordTables::build);

/// Compiled regex patterns for the classification passes.
pub(crate) struct Patterns {
    /// `f`/`rf`/`fr`-prefixed single-line string literal, prefix included.
    pub(crate) f_string: Regex,
    /// Ordinary single-line string literal, escapes tolerated.
    pub(crate) string: Regex,
    /// Numeric literal alternation, most specific forms first.
    pub(crate) number: Regex,
    /// Decorator reference with optional dotted path.
    pub(crate) decorator: Regex,
    /// Whole-word identifier, for word-table lookup.
    pub(crate) identifier: Regex,
    /// Operators, multi-character alternatives before single characters.
    pub(crate) operator: Regex,
    /// `class` binding, name in capture group 1.
    pub(crate) class_name: Regex,
    /// `def` binding, name in capture group 1.
    pub(crate) function_name: Regex,
    /// Whole-word `self` or `cls`.
    pub(crate) self_cls: Regex,
}

impl Patterns {
    fn build() -> Self {
        Self {
            f_string: compile(r#"\b(?:rf|fr|f)(?:"(?:\\.|[^"\\])*"|'(?:\\.|[^'\\])*')"#),
            string: compile(r#""(?:\\.|[^"\\])*"|'(?:\\.|[^'\\])*'"#),
            number: compile(
                r"\b0[xX][0-9a-fA-F]+|\b0[bB][01]+|\b0[oO][0-7]+|\b\d+\.\d*(?:[eE][+-]?\d+)?|\.\d+(?:[eE][+-]?\d+)?|\b\d+[eE][+-]?\d+|\b\d+[jJ]\b|\b\d+\b",
            ),
            decorator: compile(r"@[A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)*"),
            identifier: compile(r"\b[A-Za-z_][A-Za-z0-9_]*\b"),
            operator: compile(r"==|!=|<=|>=|<<|>>|\*\*|//|->|\+\+|--|[+\-*/%=<>!&|^~]"),
            class_name: compile(r"\bclass\s+([A-Z][A-Za-z0-9_]*)"),
            function_name: compile(r"\bdef\s+([A-Za-z_][A-Za-z0-9_]*)"),
            self_cls: compile(r"\b(?:self|cls)\b"),
        }
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern compiles")
}

pub(crate) static PATTERNS: LazyLock<Patterns> = LazyLock::new(Patterns::build);
