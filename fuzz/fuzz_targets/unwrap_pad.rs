#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // first byte splits key selection from ciphertext
    let kek = [data[0]; 16];
    let ct = &data[1..];

    let mut ctx = aes_wrap::AES_128_WRAP_PAD.create();
    ctx.decrypt_init(Some(&kek), None).unwrap();

    let mut out = vec![0u8; ct.len()];
    let _ = ctx.transform(&mut out, ct);
});
