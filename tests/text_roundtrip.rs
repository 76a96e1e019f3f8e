use base64::{Engine, engine::general_purpose::STANDARD};
use rand::{SeedableRng, rngs::StdRng};

use sealtext::crypto::{aead, kdf};
use sealtext::format::blob;
use sealtext::{BlobLayout, SealTextError};

#[test]
fn hello_world_scenario() {
    // 12 + 11 + 16 = 39 字节 -> 52 个 base64 字符
    let blob = sealtext::encrypt_text("hello world", "correct horse").expect("encrypt");
    assert_eq!(blob.len(), 52);

    let plain = sealtext::decrypt_text(&blob, "correct horse").expect("decrypt");
    assert_eq!(plain, "hello world");

    let result = sealtext::decrypt_text(&blob, "wrong password");
    assert!(matches!(result, Err(SealTextError::Authentication)));
}

#[test]
fn unicode_text_round_trips() {
    let text = "密文测试 ✓ — naïve café\n第二行";
    let blob = sealtext::encrypt_text(text, "пароль").expect("encrypt");
    assert_eq!(sealtext::decrypt_text(&blob, "пароль").expect("decrypt"), text);
}

#[test]
fn random_salt_layout_round_trips() {
    let mut rng = StdRng::seed_from_u64(11);
    let blob = sealtext::encrypt_text_with(
        "hello world",
        "correct horse",
        BlobLayout::RandomSalt,
        &mut rng,
    )
    .expect("encrypt");

    let plain = sealtext::decrypt_text_with(&blob, "correct horse", BlobLayout::RandomSalt)
        .expect("decrypt");
    assert_eq!(plain, "hello world");

    assert!(matches!(
        sealtext::decrypt_text_with(&blob, "wrong password", BlobLayout::RandomSalt),
        Err(SealTextError::Authentication)
    ));
}

#[test]
fn same_input_gets_a_fresh_nonce_each_time() {
    let a = sealtext::encrypt_text("same text", "same password").expect("encrypt");
    let b = sealtext::encrypt_text("same text", "same password").expect("encrypt");

    let a = STANDARD.decode(a).expect("base64");
    let b = STANDARD.decode(b).expect("base64");
    assert_ne!(a[..aead::NONCE_LEN], b[..aead::NONCE_LEN]);
}

#[test]
fn random_salt_layout_varies_the_salt() {
    let mut rng = StdRng::seed_from_u64(5);
    let a = sealtext::encrypt_text_with("x", "pw", BlobLayout::RandomSalt, &mut rng)
        .expect("encrypt");
    let b = sealtext::encrypt_text_with("x", "pw", BlobLayout::RandomSalt, &mut rng)
        .expect("encrypt");

    let a = blob::unpack_salted(&a).expect("unpack");
    let b = blob::unpack_salted(&b).expect("unpack");
    assert_ne!(a.salt, b.salt);
}

#[test]
fn empty_inputs_are_rejected_before_crypto() {
    assert!(matches!(
        sealtext::encrypt_text("", "anypassword"),
        Err(SealTextError::Input(_))
    ));
    assert!(matches!(
        sealtext::encrypt_text("text", ""),
        Err(SealTextError::Input(_))
    ));
    assert!(matches!(
        sealtext::decrypt_text("irrelevant", ""),
        Err(SealTextError::Input(_))
    ));
}

#[test]
fn short_or_invalid_blobs_are_malformed() {
    let short = STANDARD.encode([0u8; blob::MIN_BLOB_LEN - 1]);
    assert!(matches!(
        sealtext::decrypt_text(&short, "pw"),
        Err(SealTextError::MalformedInput(_))
    ));

    assert!(matches!(
        sealtext::decrypt_text("%%% not base64 %%%", "pw"),
        Err(SealTextError::MalformedInput(_))
    ));

    assert!(matches!(
        sealtext::decrypt_text("", "pw"),
        Err(SealTextError::MalformedInput(_))
    ));
}

#[test]
fn tampered_blob_fails_authentication() {
    let blob = sealtext::encrypt_text("hello world", "correct horse").expect("encrypt");
    let mut raw = STANDARD.decode(&blob).expect("base64");
    let last = raw.len() - 1;
    raw[last] ^= 0x80;

    let result = sealtext::decrypt_text(&STANDARD.encode(raw), "correct horse");
    assert!(matches!(result, Err(SealTextError::Authentication)));
}

#[test]
fn every_single_bit_flip_is_detected() {
    // 只派生一次密钥，逐位翻转整条密文（nonce、密文体、标签）
    let key = kdf::derive_key("correct horse").expect("derive");
    let mut rng = StdRng::seed_from_u64(42);
    let sealed = aead::encrypt(&key, b"hello world", &mut rng).expect("encrypt");
    let raw = STANDARD
        .decode(blob::pack(&sealed.nonce, &sealed.ciphertext))
        .expect("base64");

    for bit in 0..raw.len() * 8 {
        let mut flipped = raw.clone();
        flipped[bit / 8] ^= 1 << (bit % 8);

        let parts = blob::unpack(&STANDARD.encode(&flipped)).expect("length unchanged");
        let result = aead::decrypt(&key, &parts.nonce, &parts.ciphertext);
        assert!(
            matches!(result, Err(SealTextError::Authentication)),
            "bit {bit} flip was accepted"
        );
    }
}

#[test]
fn layouts_are_not_interchangeable() {
    let mut rng = StdRng::seed_from_u64(8);
    let blob = sealtext::encrypt_text_with(
        "some longer plaintext",
        "pw",
        BlobLayout::RandomSalt,
        &mut rng,
    )
    .expect("encrypt");

    let result = sealtext::decrypt_text_with(&blob, "pw", BlobLayout::FixedSalt);
    assert!(matches!(result, Err(SealTextError::Authentication)));
}

#[test]
fn invalid_utf8_plaintext_is_decoded_lossily() {
    let mut rng = StdRng::seed_from_u64(3);
    let blob = sealtext::seal_bytes(
        &[0x66, 0xff, 0x6f],
        "pw",
        BlobLayout::FixedSalt,
        &mut rng,
    )
    .expect("seal");

    assert_eq!(
        sealtext::open_bytes(&blob, "pw", BlobLayout::FixedSalt).expect("open"),
        vec![0x66, 0xff, 0x6f]
    );
    assert_eq!(
        sealtext::decrypt_text(&blob, "pw").expect("decrypt"),
        "f\u{fffd}o"
    );
}
