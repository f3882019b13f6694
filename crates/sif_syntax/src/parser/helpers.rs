/// Token-stream helpers and error recovery.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Consuming tokens (`advance`)
/// - Matching / expecting keywords, operators, and punctuation
/// - Scope bookkeeping (`enter_scope`, `leave_scope`)
/// - Nesting limits (`descend`, `ascend`)
/// - Error recording and recovery (`report`, `synchronize`)
impl Parser {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        self.current.kind() == TokenKind::Eof
    }

    /// Pull the next token from the lexer and return the one it replaces.
    ///
    /// A lexical error leaves `current` untouched and is returned as a fatal [`ParseError`].
    fn advance(&mut self) -> Result<Token, ParseError> {
        let next = self.lexer.next_token()?;
        tracing::trace!(token = %next, line = next.line(), column = next.column(), "token");
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Return `true` if the current token is the given keyword.
    fn check_keyword(&self, id: KeywordId) -> bool {
        self.current.kind().is_keyword(id)
    }

    /// Return `true` if the current token is the given punctuation.
    fn check_punct(&self, id: PunctuationId) -> bool {
        self.current.kind().is_punctuation(id)
    }

    /// Return `true` if the current token is the given operator.
    fn check_op(&self, id: OperatorId) -> bool {
        self.current.kind().is_operator(id)
    }

    fn match_keyword(&mut self, id: KeywordId) -> Result<bool, ParseError> {
        if self.check_keyword(id) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn match_punct(&mut self, id: PunctuationId) -> Result<bool, ParseError> {
        if self.check_punct(id) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn match_op(&mut self, id: OperatorId) -> Result<bool, ParseError> {
        if self.check_op(id) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consume the given punctuation or fail with `TokenMismatch` at the current token.
    fn expect_punct(&mut self, id: PunctuationId) -> Result<Token, ParseError> {
        if self.check_punct(id) {
            self.advance()
        } else {
            Err(self.error_here(ParseErrorKind::TokenMismatch))
        }
    }

    /// Consume a `]`.
    ///
    /// The lexer turns `]]` into a single table-closing token, so `a[b[0]]` arrives as
    /// `... 0 ]]`. In that position the pair is split and its second half stays current.
    fn expect_close_bracket(&mut self) -> Result<Token, ParseError> {
        if self.check_punct(PunctuationId::DoubleRBracket) {
            let (line, column) = (self.current.line(), self.current.column());
            let rest = Token::new(TokenKind::Punctuation(PunctuationId::RBracket), line, column + 1);
            self.current = rest;
            return Ok(Token::new(TokenKind::Punctuation(PunctuationId::RBracket), line, column));
        }
        self.expect_punct(PunctuationId::RBracket)
    }

    fn error_here(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::at(kind, &self.current)
    }

    // ========================================================================
    // Scopes
    // ========================================================================

    fn enter_scope(&mut self) -> usize {
        self.symbols.init_scope()
    }

    fn leave_scope(&mut self) {
        if let Err(err) = self.symbols.close_scope() {
            tracing::error!(error = %err, "unbalanced scope close");
        }
    }

    // ========================================================================
    // Nesting
    // ========================================================================

    /// Enter one level of recursion, failing with the fatal `NestingTooDeep` at the limit.
    ///
    /// Every successful call must be paired with [`Self::ascend`], on the error path too.
    fn descend(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.config.max_depth {
            tracing::debug!(depth = self.depth, "nesting limit reached");
            return Err(self.error_here(ParseErrorKind::NestingTooDeep));
        }
        self.depth += 1;
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    // ========================================================================
    // Error recovery
    // ========================================================================

    fn report(&mut self, err: ParseError) {
        tracing::debug!(kind = ?err.kind, line = err.line, column = err.column, "parse error");
        self.errors.push(err);
    }

    /// Skip tokens until a likely statement boundary.
    ///
    /// Consumes at least one token unless at end of input, or inside a block already sitting on
    /// its closing `}`. Stops just past a `;`, in front of a declaration/statement keyword, or
    /// (when `in_block`) in front of a `}`.
    fn synchronize(&mut self, in_block: bool) -> Result<(), ParseError> {
        self.unassigned_reads.clear();
        if in_block && self.check_punct(PunctuationId::RBrace) {
            return Ok(());
        }
        while !self.is_at_end() {
            let consumed = self.advance()?;
            if consumed.kind().is_punctuation(PunctuationId::Semicolon) {
                return Ok(());
            }
            if self.current.kind().starts_statement() {
                return Ok(());
            }
            if in_block && self.check_punct(PunctuationId::RBrace) {
                return Ok(());
            }
        }
        Ok(())
    }
}
