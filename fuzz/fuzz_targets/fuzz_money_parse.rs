#![no_main]

use libfuzzer_sys::fuzz_target;
use resi::{CommissionRate, Money};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(value) = input.parse::<Money>() {
        // Whatever parses must survive a display round trip
        let again: Money = value.to_string().parse().unwrap();
        assert_eq!(again, value);

        if let Ok(rate) = "15".parse::<CommissionRate>() {
            if let Some(total) = value.percent(rate) {
                let (member, resi) = total.split_half();
                assert_eq!(member + resi, total);
            }
        }
    }
});
