/// Miscellaneous parser utilities.
///
/// Name handling shared by declarations and expressions.
impl Parser {
    // ========================================================================
    // Utilities
    // ========================================================================

    /// Consume the identifier naming a declaration, parameter or loop variable.
    fn declared_name(&mut self) -> Result<Token, ParseError> {
        match self.current.kind() {
            TokenKind::Identifier => self.advance(),
            TokenKind::Keyword(_) => Err(self.error_here(ParseErrorKind::InvalidIdentifier)),
            _ => Err(self.error_here(ParseErrorKind::ExpectedIdentifier)),
        }
    }

    /// Check a read of `name` against the symbol table.
    ///
    /// Builtins are always visible. A declared variable without a value is remembered in
    /// `unassigned_reads` until the enclosing expression is complete.
    fn reference(&mut self, name: &Token, ctx: ExprContext) -> Result<(), ParseError> {
        if !ctx.check_symbols || builtins::is_builtin(name.name()) {
            return Ok(());
        }
        match self.symbols.retrieve(name.name()) {
            None => Err(ParseError::at(ParseErrorKind::UndeclaredSymbol, name)),
            Some(symbol) => {
                if !symbol.assigned {
                    self.unassigned_reads.push(name.clone());
                }
                Ok(())
            }
        }
    }
}
