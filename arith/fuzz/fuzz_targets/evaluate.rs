#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = libarith::evaluate_expression(s);
        let _ = libarith::validate(s);
        let _ = libarith::math::mixed::parse(s);
    }
});
