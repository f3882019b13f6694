/// Parse sif source text into a [`ParseOutcome`].
///
/// This is the main public entrypoint for parsing in-memory source.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> ParseOutcome {
    Parser::new(Lexer::new(source), SymbolTable::new()).parse()
}

/// Parse with an explicit [`ParserConfig`].
#[tracing::instrument(skip_all, fields(source_len = source.len(), check_symbols = config.check_symbols))]
pub fn parse_with_config(source: &str, config: ParserConfig) -> ParseOutcome {
    Parser::with_config(Lexer::new(source), SymbolTable::new(), config).parse()
}

/// Read and parse a file.
///
/// ## Errors
/// Returns [`SourceError`] if the file cannot be read. Parse problems are reported in the
/// outcome, not as an error.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn parse_file(path: impl AsRef<Path>, config: ParserConfig) -> Result<ParseOutcome, SourceError> {
    let lexer = Lexer::from_path(path)?;
    Ok(Parser::with_config(lexer, SymbolTable::new(), config).parse())
}
