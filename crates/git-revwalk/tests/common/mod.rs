//! Hand-written loose objects for traversal tests.

#![allow(dead_code)]

use std::fs;
use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use git_hash::hasher::Hasher;
use git_hash::ObjectId;
use git_loose::LooseObjectStore;

pub struct Fixture {
    _dir: tempfile::TempDir,
    pub store: LooseObjectStore,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let objects = dir.path().join("objects");
        fs::create_dir_all(&objects).unwrap();
        Self {
            store: LooseObjectStore::open(&objects),
            _dir: dir,
        }
    }

    pub fn object(&self, kind: &str, payload: &[u8]) -> ObjectId {
        let oid = Hasher::hash_object(kind, payload);
        let mut raw = format!("{} {}\0", kind, payload.len()).into_bytes();
        raw.extend_from_slice(payload);
        self.write_raw(&oid, &raw);
        oid
    }

    /// Store `raw` under an arbitrary name.
    pub fn write_raw(&self, oid: &ObjectId, raw: &[u8]) {
        let mut enc = ZlibEncoder::new(Vec::new(), Compression::default());
        enc.write_all(raw).unwrap();
        let path = self.store.object_path(oid);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, enc.finish().unwrap()).unwrap();
    }

    pub fn blob(&self, data: &str) -> ObjectId {
        self.object("blob", data.as_bytes())
    }

    pub fn tree(&self, entries: &[(&str, &str, ObjectId)]) -> ObjectId {
        self.object("tree", &tree_payload(entries))
    }

    pub fn commit(&self, tree: ObjectId, parents: &[ObjectId], message: &str) -> ObjectId {
        let mut body = format!("tree {tree}\n");
        for parent in parents {
            body.push_str(&format!("parent {parent}\n"));
        }
        body.push_str("author mike <mike@mail.com> 1585491500 +0300\n");
        body.push_str("committer mike <mike@mail.com> 1585491500 +0300\n\n");
        body.push_str(message);
        body.push('\n');
        self.object("commit", body.as_bytes())
    }
}

pub fn tree_payload(entries: &[(&str, &str, ObjectId)]) -> Vec<u8> {
    let mut payload = Vec::new();
    for (mode, name, oid) in entries {
        payload.extend_from_slice(format!("{mode} {name}\0").as_bytes());
        payload.extend_from_slice(oid.as_bytes());
    }
    payload
}

pub fn oid(hex: &str) -> ObjectId {
    ObjectId::from_hex(hex).unwrap()
}
