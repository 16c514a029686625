#![no_main]

use libfuzzer_sys::fuzz_target;
use minic::syntax::{lexer, parser};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // The scanner never fails; fuzz the parser over whatever it produces
        let tokens = lexer::lex(s);
        let _ = parser::parse(&tokens);
    }
});
