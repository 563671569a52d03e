#![no_main]
use libfuzzer_sys::fuzz_target;
use numlex::{BIN, DEC, HEX, OCT, parse, parse_token, to_literal};

fuzz_target!(|text: &str| {
    let _ = parse_token(text);

    for strict in [false, true] {
        if let Some(value) = parse(text, strict) {
            for radix in [BIN, OCT, DEC, HEX] {
                // Whatever the engine accepted must render back into a
                // literal the strict parser accepts again.
                let rendered = to_literal(&value, radix);
                assert!(parse(&rendered, true).is_some(), "unparseable render: {rendered}");
            }
        }
    }
});
