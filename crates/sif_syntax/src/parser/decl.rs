/// Declaration parsing.
///
/// This chunk handles `var` and `fn` declarations and the literal forms that may only appear as
/// a `var` initializer (`array [...]` and `table [[...]]`).
impl Parser {
    // ========================================================================
    // Declarations
    // ========================================================================

    fn declaration(&mut self) -> Result<Node, ParseError> {
        if self.check_keyword(KeywordId::Var) {
            self.var_decl()
        } else if self.check_keyword(KeywordId::Fn) {
            self.fn_decl()
        } else {
            self.statement()
        }
    }

    /// `var name (= initializer)? ;`
    ///
    /// The name is stored after the initializer is parsed, so `var x = x;` only sees an outer `x`.
    fn var_decl(&mut self) -> Result<Node, ParseError> {
        self.advance()?; // var
        let name = self.declared_name()?;
        let init = if self.match_op(OperatorId::Eq)? {
            Some(Box::new(self.initializer()?))
        } else {
            None
        };
        self.expect_punct(PunctuationId::Semicolon)?;

        let is_global = self.symbols.is_global();
        self.symbols.store(Symbol::variable(&name, init.is_some()));
        Ok(Node::VarDecl(VarDecl { name, is_global, init }))
    }

    /// `fn name ( params ) block`
    fn fn_decl(&mut self) -> Result<Node, ParseError> {
        self.advance()?; // fn
        let name = self.declared_name()?;
        self.expect_punct(PunctuationId::LParen)?;
        let params = self.param_names()?;
        self.expect_punct(PunctuationId::RParen)?;

        // Visible inside its own body so it can recurse.
        self.symbols.store(Symbol::function(&name, params.len()));

        let bindings = params.iter().map(Symbol::binding).collect();
        let body = self.block(bindings)?;
        let scope_level = body.scope_level;

        Ok(Node::FnDecl(FnDecl {
            name,
            params: Box::new(Node::ParamList(params.into_iter().map(Node::LiteralExpr).collect())),
            body: Box::new(Node::Block(body)),
            scope_level,
        }))
    }

    fn param_names(&mut self) -> Result<Vec<Token>, ParseError> {
        let mut params = Vec::new();
        if self.check_punct(PunctuationId::RParen) {
            return Ok(params);
        }
        loop {
            if params.len() == self.config.max_fn_params {
                return Err(self.error_here(ParseErrorKind::TooManyFnParams));
            }
            params.push(self.declared_name()?);
            if !self.match_punct(PunctuationId::Comma)? {
                return Ok(params);
            }
        }
    }

    // ========================================================================
    // Initializers
    // ========================================================================

    fn initializer(&mut self) -> Result<Node, ParseError> {
        if self.match_keyword(KeywordId::Array)? || self.check_punct(PunctuationId::LBracket) {
            return self.array_literal();
        }
        if self.match_keyword(KeywordId::Table)? || self.check_punct(PunctuationId::DoubleLBracket) {
            return self.table_literal();
        }
        self.expression()
    }

    /// `[ (expr (, expr)*)? ]`
    fn array_literal(&mut self) -> Result<Node, ParseError> {
        self.expect_punct(PunctuationId::LBracket)?;
        let mut items = Vec::new();
        if !self.check_punct(PunctuationId::RBracket) && !self.check_punct(PunctuationId::DoubleRBracket) {
            loop {
                items.push(self.expression()?);
                if !self.match_punct(PunctuationId::Comma)? {
                    break;
                }
            }
        }
        self.expect_close_bracket()?;
        Ok(Node::ArrayLiteral(items))
    }

    /// `[[ (key => expr (, key => expr)*)? ]]` where a key is an identifier or a string.
    fn table_literal(&mut self) -> Result<Node, ParseError> {
        self.expect_punct(PunctuationId::DoubleLBracket)?;
        let mut entries = Vec::new();
        if !self.check_punct(PunctuationId::DoubleRBracket) {
            loop {
                let key = match self.current.kind() {
                    TokenKind::Identifier | TokenKind::StringLiteral => self.advance()?,
                    _ => return Err(self.error_here(ParseErrorKind::ExpectedIdentifier)),
                };
                self.expect_punct(PunctuationId::FatArrow)?;
                let value = self.expression()?;
                entries.push(TableEntry { key, value });
                if !self.match_punct(PunctuationId::Comma)? {
                    break;
                }
            }
        }
        self.expect_punct(PunctuationId::DoubleRBracket)?;
        Ok(Node::TableLiteral(entries))
    }
}
