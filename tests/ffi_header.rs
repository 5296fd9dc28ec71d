//! The generated C header covers the exported ABI

const HEADER: &str = include_str!(concat!(env!("OUT_DIR"), "/pinknoise.h"));

#[test]
fn test_header_declares_exports() {
    for symbol in [
        "pink_noise_new",
        "pink_noise_free",
        "pink_noise_init",
        "pink_noise_next",
        "pink_noise_render",
        "pink_noise_octave_count",
    ] {
        assert!(HEADER.contains(symbol), "header is missing {}", symbol);
    }
}

#[test]
fn test_header_has_include_guard() {
    assert!(HEADER.contains("#ifndef PINKNOISE_H"));
    assert!(HEADER.contains("#define PINKNOISE_H"));
}
