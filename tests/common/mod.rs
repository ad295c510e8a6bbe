//! Shared argument fixtures for the integration tests.
#![allow(dead_code)]

pub const VALIDATOR: &str = "0x67Ec6DC56caC1061f4dCA604e5170B87DeF97D52";

/// BN254 scalar field modulus minus one, well above 2^53.
pub const BIG: &str =
    "21888242871839275222246405745257275088548364400416034343698204186575808495616";

pub fn word(byte: &str) -> String {
    format!("0x{}", byte.repeat(32))
}

/// The six arguments as a browser console renders them: a tuple with
/// BigInt literals and unquoted keys.
pub fn console_tuple_blob() -> String {
    format!(
        "({validator}, ['{att0}', '{att1}'], {{a: [1n, 2n], b: [[3n, 4n], [5n, 6n]], c: [7n, 8n], \
         publicInputs: [{big}n, 42n], programKey: '{pk}', nullifier: '{nul}', chainId: 17000n, \
         expiresAt: 1758842435n, metadata: '0xdeadbeef'}}, {{X: 11n, Y: 12n}}, \
         {{X: [13n, {big}n], Y: [15n, 16n]}}, [17n, 18n])",
        validator = VALIDATOR,
        att0 = word("11"),
        att1 = word("22"),
        big = BIG,
        pk = word("aa"),
        nul = word("bb"),
    )
}

/// The same arguments as strict JSON.
pub fn json_array_blob() -> String {
    format!(
        r#"["{validator}", ["{att0}", "{att1}"], {{"a": ["1", "2"], "b": [["3", "4"], ["5", "6"]], "c": ["7", "8"],
         "publicInputs": ["{big}", 42], "programKey": "{pk}", "nullifier": "{nul}", "chainId": 17000,
         "expiresAt": "1758842435", "metadata": "0xdeadbeef"}}, {{"X": "11", "Y": "12"}},
         {{"X": ["13", "{big}"], "Y": ["15", "16"]}}, ["17", "18"]]"#,
        validator = VALIDATOR,
        att0 = word("11"),
        att1 = word("22"),
        big = BIG,
        pk = word("aa"),
        nul = word("bb"),
    )
}
