#![no_main]

use libfuzzer_sys::fuzz_target;
use sif::{lexer, parser};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let lexed = lexer::lex(s);
        let outcome = parser::parse(s);
        // A lexical error always surfaces in the parse outcome
        if lexed.is_err() {
            assert!(outcome.had_error);
        }
        assert_eq!(outcome.had_error, !outcome.errors.is_empty());
    }
});
