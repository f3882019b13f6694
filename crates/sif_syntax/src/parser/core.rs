/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type, the expression context threaded through the
/// expression productions, and the top-level `parse()` loop.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module.

/// Per-expression parsing context.
///
/// Identifier declaration checks are switched off while parsing the key of a table access
/// (`t.key`), where the key names a field rather than a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ExprContext {
    check_symbols: bool,
}

impl ExprContext {
    fn member_key() -> Self {
        Self { check_symbols: false }
    }
}

/// Parser state.
///
/// ## Notes
/// - Single pass, one token of lookahead, no backtracking.
/// - Recovers from errors by synchronizing at statement/declaration boundaries, both at the top
///   level and inside blocks. Fatal errors (lexical, or nesting past `max_depth`) end the parse.
pub struct Parser {
    lexer: Lexer,
    symbols: SymbolTable,
    config: ParserConfig,
    current: Token,
    errors: Vec<ParseError>,
    /// Reads of declared-but-unassigned variables in the expression being parsed. Entries are
    /// dropped again when the read turns out to be an assignment target.
    unassigned_reads: Vec<Token>,
    /// Error raised while priming the first token.
    pending: Option<ParseError>,
    /// Current nesting of blocks and expression levels, bounded by `config.max_depth`.
    depth: usize,
}

impl Parser {
    /// Create a parser with the default [`ParserConfig`].
    pub fn new(lexer: Lexer, symbols: SymbolTable) -> Self {
        Self::with_config(lexer, symbols, ParserConfig::default())
    }

    pub fn with_config(mut lexer: Lexer, symbols: SymbolTable, config: ParserConfig) -> Self {
        let (current, pending) = match lexer.next_token() {
            Ok(token) => (token, None),
            Err(err) => (Token::eof(err.line(), err.column()), Some(ParseError::from(err))),
        };
        Self {
            lexer,
            symbols,
            config,
            current,
            errors: Vec::new(),
            unassigned_reads: Vec::new(),
            pending,
            depth: 0,
        }
    }

    /// Parse the whole input into a [`ParseOutcome`].
    ///
    /// Never fails: every problem is collected in the outcome. Items that parsed successfully are
    /// kept in the program even when other items failed.
    pub fn parse(mut self) -> ParseOutcome {
        let mut items = Vec::new();

        if let Some(err) = self.pending.take() {
            self.report(err);
            return ParseOutcome::new(items, self.errors);
        }

        while !self.is_at_end() {
            match self.declaration() {
                Ok(node) => {
                    tracing::trace!(kind = node.kind_name(), "item parsed");
                    items.push(node);
                }
                Err(err) => {
                    let fatal = err.kind.is_fatal();
                    self.report(err);
                    if fatal {
                        break;
                    }
                    if let Err(err) = self.synchronize(false) {
                        self.report(err);
                        break;
                    }
                }
            }
        }

        tracing::debug!(items = items.len(), errors = self.errors.len(), "parse finished");
        ParseOutcome::new(items, self.errors)
    }
}
