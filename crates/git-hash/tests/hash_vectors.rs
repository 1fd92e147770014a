use git_hash::hasher::Hasher;
use git_hash::hex;
use git_hash::ObjectId;
use proptest::prelude::*;

#[test]
fn empty_input_digest() {
    assert_eq!(
        Hasher::digest(b"").to_hex(),
        "da39a3ee5e6b4b0d3255bfef95601890afd80709"
    );
}

#[test]
fn empty_blob_name() {
    assert_eq!(
        Hasher::hash_object("blob", b"").to_hex(),
        "e69de29bb2d1d6434b8b29ae775ad8c2e48c5391"
    );
}

#[test]
fn hello_blob_name_matches_git() {
    // `printf 'hello\n' | git hash-object --stdin`
    let oid = Hasher::hash_object("blob", b"hello\n");
    assert_eq!(oid.to_hex(), "ce013625030ba8dba906f756967f9e9ca394464a");
    assert_eq!(Hasher::digest(b"blob 6\0hello\n"), oid);
}

#[test]
fn streaming_matches_one_shot() {
    let mut h = Hasher::new();
    h.update(b"blob 6\0");
    h.update(b"hello\n");
    assert_eq!(h.finalize(), Hasher::hash_object("blob", b"hello\n"));
}

proptest! {
    #[test]
    fn oid_hex_roundtrip(bytes in proptest::collection::vec(any::<u8>(), 20..=20)) {
        let oid = ObjectId::from_bytes(&bytes).unwrap();
        let parsed: ObjectId = oid.to_hex().parse().unwrap();
        prop_assert_eq!(oid, parsed);
    }

    #[test]
    fn hex_is_lowercase_and_double_length(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let s = hex::encode(&bytes);
        prop_assert_eq!(s.len(), bytes.len() * 2);
        prop_assert!(s.bytes().all(|c| c.is_ascii_digit() || (b'a'..=b'f').contains(&c)));
    }
}
