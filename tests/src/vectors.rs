//! Known-answer vectors

/// P-256 ECDH, two fixed key pairs and their shared secret
pub mod p256 {
    pub const ALICE_PRIVATE: &str =
        "c88f01f510d9ac3f70a292daa2316de544e9aab8afe84049c62a9c57862d1433";
    pub const ALICE_PUBLIC_X: &str =
        "dad0b65394221cf9b051e1feca5787d098dfe637fc90b9ef945d0c3772581180";
    pub const ALICE_PUBLIC_Y: &str =
        "5271a0461cdb8252d61f1c456fa3e59ab1f45b33accf5f58389e0577b8990bb3";
    pub const BOB_PRIVATE: &str =
        "c6ef9c5d78ae012a011164acb397ce2088685d8f06bf9be0b283ab46476bee53";
    pub const BOB_PUBLIC_X: &str =
        "d12dfb5289c8d4f81208b70270398c342296970a0bccb74c736fc7554494bf63";
    pub const BOB_PUBLIC_Y: &str =
        "56fbf3ca366cc23e8157854c13c58d6aac23f046ada30f8353e74f33039872ab";
    pub const SHARED_SECRET: &str =
        "d6840f6b42f6edafd13116e0e12565202fef8e9ece7dce03812464d04b9442de";
}

/// Uncompressed SEC1 encoding from hex coordinates
pub fn uncompressed(x: &str, y: &str) -> Vec<u8> {
    let mut out = vec![0x04];
    out.extend(hex::decode(x).expect("hex x"));
    out.extend(hex::decode(y).expect("hex y"));
    out
}
