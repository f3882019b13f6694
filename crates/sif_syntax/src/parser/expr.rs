/// Expression parsing.
///
/// Precedence, lowest to highest: assignment, `||`, `&&`, equality, relational, additive,
/// multiplicative, modulo, unary, call/access, primary. Binary levels take their operator sets
/// from the `sif_core` operator registry.
impl Parser {
    // ========================================================================
    // Expressions
    // ========================================================================

    /// Parse a full expression.
    ///
    /// Reads of unassigned variables are only reported here, once it is known which of them were
    /// assignment targets.
    fn expression(&mut self) -> Result<Node, ParseError> {
        let mark = self.unassigned_reads.len();
        let ctx = ExprContext {
            check_symbols: self.config.check_symbols,
        };
        let expr = self.assignment(ctx)?;
        if let Some(read) = self.unassigned_reads.get(mark).cloned() {
            self.unassigned_reads.truncate(mark);
            return Err(ParseError::at(ParseErrorKind::UnassignedVar, &read));
        }
        Ok(expr)
    }

    /// Every nested expression (groups, arguments, indices, right-hand sides) enters here, so
    /// this is where expression nesting is counted.
    fn assignment(&mut self, ctx: ExprContext) -> Result<Node, ParseError> {
        self.descend()?;
        let result = self.assignment_level(ctx);
        self.ascend();
        result
    }

    fn assignment_level(&mut self, ctx: ExprContext) -> Result<Node, ParseError> {
        let lhs = self.logical_or(ctx)?;
        if !self.check_op(OperatorId::Eq) {
            return Ok(lhs);
        }
        let eq = self.advance()?;
        let value = self.assignment(ctx)?;

        match lhs {
            Node::LiteralExpr(target) if target.is_identifier() => self.var_assign(target, value, ctx),
            Node::ArrayAccess(access) => Ok(Node::ArrayMutExpr(ArrayMutExpr {
                base: access.base,
                index: access.index,
                value: Box::new(value),
            })),
            _ => Err(ParseError::at(ParseErrorKind::InvalidAssignTarget, &eq)),
        }
    }

    fn var_assign(&mut self, target: Token, value: Node, ctx: ExprContext) -> Result<Node, ParseError> {
        let name = target.name();
        if ctx.check_symbols {
            match self.symbols.retrieve(name) {
                None => return Err(ParseError::at(ParseErrorKind::UndeclaredSymbol, &target)),
                Some(symbol) if symbol.is_function() => {
                    return Err(ParseError::at(ParseErrorKind::InvalidAssignTarget, &target));
                }
                Some(_) => {}
            }
        }

        let is_global = self
            .symbols
            .retrieve(name)
            .map_or(self.symbols.is_global(), |symbol| symbol.level == 0);
        self.symbols.mark_assigned(name);
        if let Some(pos) = self.unassigned_reads.iter().position(|read| *read == target) {
            self.unassigned_reads.remove(pos);
        }

        Ok(Node::VarAssign(VarAssign {
            target,
            is_global,
            value: Box::new(value),
        }))
    }

    /// Left-associative fold over the infix operators sharing `level`'s precedence.
    fn binary_level(
        &mut self,
        ctx: ExprContext,
        level: OperatorId,
        next: fn(&mut Self, ExprContext) -> Result<Node, ParseError>,
    ) -> Result<Node, ParseError> {
        let ops = operators::infix_at(operators::precedence(level));
        let mut lhs = next(self, ctx)?;
        while self.current.operator_id().is_some_and(|id| ops.contains(&id)) {
            let op = self.advance()?;
            let rhs = next(self, ctx)?;
            lhs = Node::BinaryExpr(BinaryExpr {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            });
        }
        Ok(lhs)
    }

    fn logical_or(&mut self, ctx: ExprContext) -> Result<Node, ParseError> {
        self.binary_level(ctx, OperatorId::OrOr, Self::logical_and)
    }

    fn logical_and(&mut self, ctx: ExprContext) -> Result<Node, ParseError> {
        self.binary_level(ctx, OperatorId::AndAnd, Self::equality)
    }

    fn equality(&mut self, ctx: ExprContext) -> Result<Node, ParseError> {
        self.binary_level(ctx, OperatorId::EqEq, Self::relational)
    }

    fn relational(&mut self, ctx: ExprContext) -> Result<Node, ParseError> {
        self.binary_level(ctx, OperatorId::Lt, Self::additive)
    }

    fn additive(&mut self, ctx: ExprContext) -> Result<Node, ParseError> {
        self.binary_level(ctx, OperatorId::Plus, Self::multiplicative)
    }

    fn multiplicative(&mut self, ctx: ExprContext) -> Result<Node, ParseError> {
        self.binary_level(ctx, OperatorId::Star, Self::modulo)
    }

    fn modulo(&mut self, ctx: ExprContext) -> Result<Node, ParseError> {
        self.binary_level(ctx, OperatorId::Percent, Self::unary)
    }

    /// `!x`, `-x`
    fn unary(&mut self, ctx: ExprContext) -> Result<Node, ParseError> {
        if self.check_op(OperatorId::Bang) || self.check_op(OperatorId::Minus) {
            let op = self.advance()?;
            self.descend()?;
            let operand = self.unary(ctx);
            self.ascend();
            let operand = operand?;
            return Ok(Node::UnaryExpr(UnaryExpr {
                op,
                operand: Box::new(operand),
            }));
        }
        self.call(ctx)
    }

    /// Identifier followed by `(`, `.` or `[`; anything else falls through to [`Self::primary`].
    fn call(&mut self, ctx: ExprContext) -> Result<Node, ParseError> {
        if !self.current.is_identifier() {
            return self.primary(ctx);
        }
        let name = self.advance()?;

        if self.check_punct(PunctuationId::LParen) {
            return self.fn_call(name, ctx);
        }

        self.reference(&name, ctx)?;

        if self.match_punct(PunctuationId::Dot)? {
            let key = self.primary(ExprContext::member_key())?;
            return Ok(Node::TableAccess(TableAccess {
                base: name,
                key: Box::new(key),
            }));
        }
        if self.match_punct(PunctuationId::LBracket)? {
            let index = self.expression()?;
            self.expect_close_bracket()?;
            return Ok(Node::ArrayAccess(ArrayAccess {
                base: name,
                index: Box::new(index),
            }));
        }
        Ok(Node::LiteralExpr(name))
    }

    /// `name ( args )`, checked against the callee's declaration unless it is a builtin.
    fn fn_call(&mut self, name: Token, ctx: ExprContext) -> Result<Node, ParseError> {
        self.expect_punct(PunctuationId::LParen)?;
        let mut args = Vec::new();
        if !self.check_punct(PunctuationId::RParen) {
            loop {
                if args.len() == self.config.max_fn_params {
                    return Err(self.error_here(ParseErrorKind::TooManyFnParams));
                }
                args.push(self.expression()?);
                if !self.match_punct(PunctuationId::Comma)? {
                    break;
                }
            }
        }
        self.expect_punct(PunctuationId::RParen)?;

        let is_builtin = builtins::is_builtin(name.name());
        if !is_builtin && ctx.check_symbols {
            match self.symbols.retrieve(name.name()).map(|symbol| symbol.kind) {
                None => return Err(ParseError::at(ParseErrorKind::UndeclaredSymbol, &name)),
                Some(SymbolKind::Fn { param_count }) if param_count != args.len() => {
                    return Err(ParseError::at(ParseErrorKind::WrongFnParamCount, &name));
                }
                Some(_) => {}
            }
        }

        Ok(Node::FnCallExpr(FnCallExpr { name, args, is_builtin }))
    }

    /// Number, string, `true`/`false`, identifier or `( expr )`.
    fn primary(&mut self, ctx: ExprContext) -> Result<Node, ParseError> {
        match self.current.kind() {
            TokenKind::NumberLiteral
            | TokenKind::StringLiteral
            | TokenKind::Keyword(KeywordId::True | KeywordId::False) => Ok(Node::LiteralExpr(self.advance()?)),
            TokenKind::Identifier => {
                let name = self.advance()?;
                self.reference(&name, ctx)?;
                Ok(Node::LiteralExpr(name))
            }
            // Groups share the enclosing expression's pending reads: `(x) = 1` does not read `x`.
            TokenKind::Punctuation(PunctuationId::LParen) => {
                self.advance()?;
                let inner = self.assignment(ctx)?;
                self.expect_punct(PunctuationId::RParen)?;
                Ok(inner)
            }
            _ => Err(self.error_here(ParseErrorKind::InvalidToken)),
        }
    }
}
