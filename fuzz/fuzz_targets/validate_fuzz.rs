//! Validator fuzz target: feed arbitrary bytes to a fixed rule tree.
//! The validator must not panic; it should return Ok(()) or a ValidationError.
//! Build with: cargo fuzz run validate_fuzz (requires nightly and cargo fuzz).

#![cfg_attr(fuzzing, no_main)]

#[cfg(fuzzing)]
use libfuzzer_sys::fuzz_target;

#[cfg(fuzzing)]
fn fuzz_rule() -> abnf_validate::Rule {
    use abnf_validate::{Element, Rule, Terminal};
    // method SP %i"http", method = %s"GET" / %i"post" / %x50-55
    Rule::new(
        "fuzz",
        Element::sequence(vec![
            Element::alternation(vec![
                Element::terminal(Terminal::case_sensitive_string("GET")),
                Element::terminal(Terminal::case_insensitive_string("post")),
                Element::terminal(Terminal::byte_range(0x50, 0x55)),
            ]),
            Element::terminal(Terminal::byte(0x20)),
            Element::terminal(Terminal::case_insensitive_string("http")),
        ]),
    )
}

#[cfg(fuzzing)]
fuzz_target!(|data: &[u8]| {
    let rule = fuzz_rule();
    let _ = abnf_validate::validate(data, &rule);
});

#[cfg(not(fuzzing))]
fn main() {
    eprintln!("Build with: cargo fuzz run validate_fuzz");
}
