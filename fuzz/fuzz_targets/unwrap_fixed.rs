#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let kek = [0x42u8; 32];

    let mut ctx = aes_wrap::AES_256_WRAP.create();
    ctx.decrypt_init(Some(&kek), None).unwrap();

    let mut out = vec![0u8; data.len()];
    let _ = ctx.transform(&mut out, data);
});
