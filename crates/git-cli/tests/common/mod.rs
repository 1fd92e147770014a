//! Shared harness for git-internals integration tests.
//!
//! Builds git directories by hand (loose objects, HEAD, branch files) and
//! runs the compiled binary against them.

#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use flate2::write::ZlibEncoder;
use flate2::Compression;
use git_hash::hasher::Hasher;
use git_hash::ObjectId;

/// Captured output from running a command.
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Path to the compiled `git-internals` binary.
pub fn bin() -> PathBuf {
    let mut path = std::env::current_exe()
        .unwrap()
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf();
    path.push("git-internals");
    path
}

fn command(cwd: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new(bin());
    cmd.args(args)
        .current_dir(cwd)
        .env_remove("GIT_DIR")
        .env_remove("GIT_INTERNALS_LOG")
        .env("LC_ALL", "C");
    cmd
}

/// Run the binary in `cwd` with the given arguments.
pub fn run(cwd: &Path, args: &[&str]) -> CommandResult {
    let output = command(cwd, args).output().expect("failed to run git-internals");
    CommandResult {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(128),
    }
}

/// Run the binary with `stdin` piped in.
pub fn run_with_stdin(cwd: &Path, args: &[&str], stdin: &str) -> CommandResult {
    let mut child = command(cwd, args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn git-internals");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    CommandResult {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(128),
    }
}

/// A hand-built git directory at `<tmp>/work/.git`.
pub struct TestRepo {
    _tmp: tempfile::TempDir,
    pub work: PathBuf,
    pub git_dir: PathBuf,
}

impl TestRepo {
    pub fn new() -> Self {
        let tmp = tempfile::tempdir().unwrap();
        let work = tmp.path().join("work");
        let git_dir = work.join(".git");
        fs::create_dir_all(git_dir.join("objects")).unwrap();
        fs::create_dir_all(git_dir.join("refs").join("heads")).unwrap();
        fs::write(git_dir.join("HEAD"), "ref: refs/heads/main\n").unwrap();
        Self {
            _tmp: tmp,
            work,
            git_dir,
        }
    }

    pub fn git_dir_str(&self) -> &str {
        self.git_dir.to_str().unwrap()
    }

    pub fn object(&self, kind: &str, payload: &[u8]) -> ObjectId {
        let oid = Hasher::hash_object(kind, payload);
        let mut raw = format!("{} {}\0", kind, payload.len()).into_bytes();
        raw.extend_from_slice(payload);
        self.write_raw(&oid, &raw);
        oid
    }

    pub fn write_raw(&self, oid: &ObjectId, raw: &[u8]) {
        let mut enc = ZlibEncoder::new(Vec::new(), Compression::default());
        enc.write_all(raw).unwrap();
        self.write_file(oid, &enc.finish().unwrap());
    }

    /// Write bytes to the object's path without compressing them.
    pub fn write_file(&self, oid: &ObjectId, bytes: &[u8]) {
        let path = self.git_dir.join("objects").join(oid.loose_path());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, bytes).unwrap();
    }

    pub fn blob(&self, data: &str) -> ObjectId {
        self.object("blob", data.as_bytes())
    }

    pub fn tree(&self, entries: &[(&str, &str, ObjectId)]) -> ObjectId {
        let mut payload = Vec::new();
        for (mode, name, oid) in entries {
            payload.extend_from_slice(format!("{mode} {name}\0").as_bytes());
            payload.extend_from_slice(oid.as_bytes());
        }
        self.object("tree", &payload)
    }

    /// Commit by `mike` at 2020-03-29 17:18:20 +03:00 plus `offset` seconds.
    pub fn commit(&self, tree: ObjectId, parents: &[ObjectId], offset: i64, message: &str) -> ObjectId {
        let when = 1_585_491_500 + offset;
        let mut body = format!("tree {tree}\n");
        for parent in parents {
            body.push_str(&format!("parent {parent}\n"));
        }
        body.push_str(&format!("author mike <mike@mail.com> {when} +0300\n"));
        body.push_str(&format!("committer mike <mike@mail.com> {when} +0300\n\n"));
        body.push_str(message);
        self.object("commit", body.as_bytes())
    }

    pub fn set_branch(&self, name: &str, oid: &ObjectId) {
        let path = self.git_dir.join("refs").join("heads").join(name);
        fs::write(path, format!("{oid}\n")).unwrap();
    }

    pub fn set_head(&self, content: &str) {
        fs::write(self.git_dir.join("HEAD"), content).unwrap();
    }

    pub fn run(&self, args: &[&str]) -> CommandResult {
        let mut full = vec!["--git-dir", self.git_dir_str()];
        full.extend_from_slice(args);
        run(&self.work, &full)
    }
}
