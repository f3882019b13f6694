//! Parser configuration for sif

/// Default cap on function parameters and call arguments.
pub const DEFAULT_MAX_FN_PARAMS: usize = 64;

/// Default cap on nested blocks, groups, assignments and unary operators.
///
/// Each level costs a dozen stack frames in the expression ladder, so the limit keeps the
/// parser inside a 2 MiB thread stack even in debug builds.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Parser configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum number of parameters a function may declare (and arguments a call may pass)
    pub max_fn_params: usize,
    /// Whether to consult the symbol table for declaration, arity and assignment checks
    pub check_symbols: bool,
    /// Maximum nesting depth before parsing stops with `NestingTooDeep`
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_fn_params: DEFAULT_MAX_FN_PARAMS,
            check_symbols: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParserConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the parameter limit
    pub fn with_max_fn_params(mut self, max: usize) -> Self {
        self.max_fn_params = max;
        self
    }

    /// Enable or disable symbol-table checks
    pub fn with_check_symbols(mut self, check: bool) -> Self {
        self.check_symbols = check;
        self
    }

    /// Set the nesting limit
    pub fn with_max_depth(mut self, max: usize) -> Self {
        self.max_depth = max;
        self
    }

    /// Syntax-only parsing: no symbol-table diagnostics
    pub fn syntax_only() -> Self {
        Self::default().with_check_symbols(false)
    }
}
