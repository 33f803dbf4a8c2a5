// SPDX-License-Identifier: Apache-2.0

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Some((a, b)) = s.split_once('\n') {
            let ratio = bugrelay_core::partial_ratio(a, b);
            assert!(ratio <= 100);
            assert_eq!(ratio, bugrelay_core::partial_ratio(b, a));
        }
    }
});
