/// Statement parsing.
///
/// This chunk handles blocks, `if`/`elif`/`else`, `for ... in`, `return`, expression statements
/// and the empty statement.
impl Parser {
    // ========================================================================
    // Statements
    // ========================================================================

    fn statement(&mut self) -> Result<Node, ParseError> {
        match self.current.kind() {
            TokenKind::Keyword(KeywordId::If) => self.if_stmt(),
            TokenKind::Keyword(KeywordId::For) => self.for_stmt(),
            TokenKind::Keyword(KeywordId::Return) => self.return_stmt(),
            TokenKind::Keyword(KeywordId::Elif | KeywordId::Else) => {
                Err(self.error_here(ParseErrorKind::InvalidIfStmt))
            }
            TokenKind::Punctuation(PunctuationId::LBrace) => Ok(Node::Block(self.block(Vec::new())?)),
            TokenKind::Punctuation(PunctuationId::Semicolon) => {
                self.advance()?;
                Ok(Node::Empty)
            }
            _ => self.expr_stmt(),
        }
    }

    /// `{ declaration* }`
    ///
    /// Opens a scope, stores `bindings` in it, parses the body, and closes the scope again even
    /// when the body fails.
    fn block(&mut self, bindings: Vec<Symbol>) -> Result<Block, ParseError> {
        self.expect_punct(PunctuationId::LBrace)?;
        self.descend()?;
        let scope_level = self.enter_scope();
        for symbol in bindings {
            self.symbols.store(symbol);
        }
        let decls = self.block_body();
        self.leave_scope();
        self.ascend();
        Ok(Block {
            decls: decls?,
            scope_level,
        })
    }

    fn block_body(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut decls = Vec::new();
        while !self.check_punct(PunctuationId::RBrace) && !self.is_at_end() {
            match self.declaration() {
                Ok(node) => decls.push(node),
                Err(err) if err.kind.is_fatal() => return Err(err),
                Err(err) => {
                    self.report(err);
                    self.synchronize(true)?;
                }
            }
        }
        self.expect_punct(PunctuationId::RBrace)?;
        Ok(decls)
    }

    /// `if cond block (elif cond block)* (else block)?`
    fn if_stmt(&mut self) -> Result<Node, ParseError> {
        self.advance()?; // if
        let cond = self.condition()?;
        let then_block = self.block(Vec::new())?;

        let mut elifs = Vec::new();
        while self.match_keyword(KeywordId::Elif)? {
            let cond = self.condition()?;
            let block = self.block(Vec::new())?;
            elifs.push(Node::ElifStmt(ElifStmt {
                cond: Box::new(cond),
                block: Box::new(Node::Block(block)),
            }));
        }

        let else_block = if self.match_keyword(KeywordId::Else)? {
            Some(Box::new(Node::Block(self.block(Vec::new())?)))
        } else {
            None
        };

        Ok(Node::IfStmt(IfStmt {
            cond: Box::new(cond),
            then_block: Box::new(Node::Block(then_block)),
            elifs,
            else_block,
        }))
    }

    /// Condition of an `if` / `elif`; a block in its place means it is missing.
    fn condition(&mut self) -> Result<Node, ParseError> {
        if self.check_punct(PunctuationId::LBrace) {
            return Err(self.error_here(ParseErrorKind::InvalidIfStmt));
        }
        self.expression()
    }

    /// `for k (, v)? in iterable block`
    fn for_stmt(&mut self) -> Result<Node, ParseError> {
        self.advance()?; // for
        let mut vars = Vec::new();
        loop {
            if self.current.kind() != TokenKind::Identifier {
                return Err(self.error_here(ParseErrorKind::InvalidForStmt));
            }
            vars.push(self.advance()?);
            if !self.match_punct(PunctuationId::Comma)? {
                break;
            }
        }
        if let Some(extra) = vars.get(2) {
            return Err(ParseError::at(ParseErrorKind::InvalidForStmt, extra));
        }
        if !self.match_keyword(KeywordId::In)? {
            return Err(self.error_here(ParseErrorKind::InvalidForStmt));
        }

        let iterable = self.expression()?;
        let bindings = vars.iter().map(Symbol::binding).collect();
        let block = self.block(bindings)?;

        Ok(Node::ForStmt(ForStmt {
            vars,
            iterable: Box::new(iterable),
            block: Box::new(Node::Block(block)),
        }))
    }

    /// `return expr? ;`
    fn return_stmt(&mut self) -> Result<Node, ParseError> {
        self.advance()?; // return
        let value = if self.check_punct(PunctuationId::Semicolon) {
            None
        } else {
            Some(Box::new(self.expression()?))
        };
        self.expect_punct(PunctuationId::Semicolon)?;
        Ok(Node::ReturnStmt(value))
    }

    fn expr_stmt(&mut self) -> Result<Node, ParseError> {
        let expr = self.expression()?;
        self.expect_punct(PunctuationId::Semicolon)?;
        Ok(Node::ExprStmt(Box::new(expr)))
    }
}
