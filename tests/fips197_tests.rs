#![cfg(feature = "test-vectors")]

// known-answer vectors from FIPS-197 Appendix B and Appendix C

use aesfips::{Cipher, Key, Result, TraceRecorder, decrypt, encrypt};
use hex_literal::hex;

struct Vector {
    key: &'static [u8],
    plaintext: [u8; 16],
    ciphertext: [u8; 16],
}

const VECTORS: [Vector; 4] = [
    // Appendix B
    Vector {
        key: &hex!("2b7e151628aed2a6abf7158809cf4f3c"),
        plaintext: hex!("3243f6a8885a308d313198a2e0370734"),
        ciphertext: hex!("3925841d02dc09fbdc118597196a0b32"),
    },
    // Appendix C.1
    Vector {
        key: &hex!("000102030405060708090a0b0c0d0e0f"),
        plaintext: hex!("00112233445566778899aabbccddeeff"),
        ciphertext: hex!("69c4e0d86a7b0430d8cdb78070b4c55a"),
    },
    // Appendix C.2
    Vector {
        key: &hex!("000102030405060708090a0b0c0d0e0f1011121314151617"),
        plaintext: hex!("00112233445566778899aabbccddeeff"),
        ciphertext: hex!("dda97ca4864cdfe06eaf70a0ec0d7191"),
    },
    // Appendix C.3
    Vector {
        key: &hex!("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f"),
        plaintext: hex!("00112233445566778899aabbccddeeff"),
        ciphertext: hex!("8ea2b7ca516745bfeafc49904b496089"),
    },
];

#[test]
fn encrypt_known_answers() -> Result<()> {
    for (i, v) in VECTORS.iter().enumerate() {
        assert_eq!(encrypt(&v.plaintext, v.key)?, v.ciphertext, "vector {i}");
    }
    Ok(())
}

#[test]
fn decrypt_known_answers() -> Result<()> {
    for (i, v) in VECTORS.iter().enumerate() {
        assert_eq!(decrypt(&v.ciphertext, v.key)?, v.plaintext, "vector {i}");
    }
    Ok(())
}

#[test]
fn cipher_known_answers() -> Result<()> {
    for (i, v) in VECTORS.iter().enumerate() {
        let cipher = Cipher::new(&Key::try_from_slice(v.key)?);
        assert_eq!(cipher.encrypt_block(&v.plaintext)?, v.ciphertext, "vector {i}");
        assert_eq!(cipher.decrypt_block(&v.ciphertext)?, v.plaintext, "vector {i}");
    }
    Ok(())
}

#[test]
fn key_schedule_appendix_a1() -> Result<()> {
    let cipher = Cipher::new(&Key::try_from_slice(VECTORS[0].key)?);
    let words = cipher.key_schedule().words();
    assert_eq!(words.len(), 44);
    assert_eq!(words[4], 0xa0fafe17);
    assert_eq!(words[43], 0xb6630ca6);
    Ok(())
}

#[test]
fn cipher_trace_appendix_c1() -> Result<()> {
    let v = &VECTORS[1];
    let cipher = Cipher::new(&Key::try_from_slice(v.key)?);
    let mut recorder = TraceRecorder::new();
    cipher.encrypt_block_traced(&v.plaintext, &mut recorder)?;

    let lines: Vec<String> = recorder.events().iter().map(|e| e.to_string()).collect();
    let expected = [
        "round[ 0].input   00112233445566778899aabbccddeeff",
        "round[ 0].k_sch   000102030405060708090a0b0c0d0e0f",
        "round[ 1].start   00102030405060708090a0b0c0d0e0f0",
        "round[ 1].s_box   63cab7040953d051cd60e0e7ba70e18c",
        "round[ 1].s_row   6353e08c0960e104cd70b751bacad0e7",
        "round[ 1].m_col   5f72641557f5bc92f7be3b291db9f91a",
        "round[ 1].k_sch   d6aa74fdd2af72fadaa678f1d6ab76fe",
        "round[ 2].start   89d810e8855ace682d1843d8cb128fe4",
    ];
    assert_eq!(lines[..expected.len()], expected);

    let tail = [
        "round[10].start   bd6e7c3df2b5779e0b61216e8b10b689",
        "round[10].s_box   7a9f102789d5f50b2beffd9f3dca4ea7",
        "round[10].s_row   7ad5fda789ef4e272bca100b3d9ff59f",
        "round[10].k_sch   13111d7fe3944a17f307a78b4d2b30c5",
        "round[10].output  69c4e0d86a7b0430d8cdb78070b4c55a",
    ];
    assert_eq!(lines[lines.len() - tail.len()..], tail);
    Ok(())
}

#[test]
fn inverse_cipher_trace_appendix_c1() -> Result<()> {
    let v = &VECTORS[1];
    let cipher = Cipher::new(&Key::try_from_slice(v.key)?);
    let mut recorder = TraceRecorder::new();
    cipher.decrypt_block_traced(&v.ciphertext, &mut recorder)?;

    let lines: Vec<String> = recorder.events().iter().map(|e| e.to_string()).collect();
    let expected = [
        "round[ 0].iinput  69c4e0d86a7b0430d8cdb78070b4c55a",
        "round[ 0].ik_sch  13111d7fe3944a17f307a78b4d2b30c5",
        "round[ 1].istart  7ad5fda789ef4e272bca100b3d9ff59f",
        "round[ 1].is_row  7a9f102789d5f50b2beffd9f3dca4ea7",
        "round[ 1].is_box  bd6e7c3df2b5779e0b61216e8b10b689",
        "round[ 1].ik_sch  549932d1f08557681093ed9cbe2c974e",
        "round[ 1].ik_add  e9f74eec023020f61bf2ccf2353c21c7",
        "round[ 2].istart  54d990a16ba09ab596bbf40ea111702f",
    ];
    assert_eq!(lines[..expected.len()], expected);

    let tail = [
        "round[10].ik_sch  000102030405060708090a0b0c0d0e0f",
        "round[10].ioutput 00112233445566778899aabbccddeeff",
    ];
    assert_eq!(lines[lines.len() - tail.len()..], tail);
    Ok(())
}
