#![no_main]

// Code lookups either fail or return the descriptor holding exactly that code,
// which must also resolve back through its name.

use libfuzzer_sys::fuzz_target;
use pfnc_unpack_formats::{component_class, FormatError, FormatRegistry};

fuzz_target!(|code: u32| {
    let registry = FormatRegistry::standard();
    match registry.lookup_code(code) {
        Ok(descriptor) => {
            assert_eq!(descriptor.code(), code);
            assert_eq!(registry.resolve_by_name(descriptor.symbolic()), Some(descriptor));
        }
        Err(FormatError::MalformedCode(raw)) => {
            assert_eq!(raw, code);
            assert!(component_class(code).is_none());
        }
        Err(FormatError::UnknownCode(raw)) => assert_eq!(raw, code),
        Err(other) => panic!("unexpected lookup error {other:?}"),
    }
});
