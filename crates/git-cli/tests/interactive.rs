//! The prompt-driven mode, fed through stdin.

mod common;

use common::{run_with_stdin, TestRepo};

#[test]
fn prompts_for_directory_command_and_parameter() {
    let repo = TestRepo::new();
    let oid = repo.blob("hello\n");
    let input = format!("{}\ncat-file\n{oid}\n", repo.git_dir_str());

    let result = run_with_stdin(&repo.work, &[], &input);
    assert_eq!(result.exit_code, 0, "{}", result.stderr);
    assert_eq!(
        result.stdout,
        "Enter .git directory location:\n\
         Enter command:\n\
         Enter git object hash:\n\
         *BLOB*\nhello\n\
         Enter command:\n"
    );
}

#[test]
fn errors_do_not_end_the_session() {
    let repo = TestRepo::new();
    let tree = repo.tree(&[]);
    let c = repo.commit(tree, &[], 0, "only\n");
    repo.set_branch("main", &c);
    let input = format!(
        "{}\nfrobnicate\ncat-file\n0000000000000000000000000000000000000001\nlist-branches\nquit\nlog\n",
        repo.git_dir_str()
    );

    let result = run_with_stdin(&repo.work, &[], &input);
    assert_eq!(result.exit_code, 0, "{}", result.stderr);
    assert!(result.stderr.contains("error: unknown command 'frobnicate'"));
    assert!(result.stderr.contains("error: object not found"));
    assert!(result.stdout.contains("* main\n"));
    // Nothing after `quit` runs.
    assert!(!result.stdout.contains("Enter branch name:"));
}

#[test]
fn git_dir_flag_skips_directory_prompt() {
    let repo = TestRepo::new();
    let tree = repo.tree(&[]);
    let root = repo.commit(tree, &[], 0, "root\n");
    repo.set_branch("main", &root);

    let result = run_with_stdin(
        &repo.work,
        &["--git-dir", repo.git_dir_str()],
        "log\nmain\n",
    );
    assert_eq!(result.exit_code, 0, "{}", result.stderr);
    assert!(result.stdout.starts_with("Enter command:\nEnter branch name:\n"));
    assert!(result.stdout.contains(&format!("Commit: {root}\n")));
}

#[test]
fn end_of_input_exits_cleanly() {
    let repo = TestRepo::new();
    let result = run_with_stdin(&repo.work, &[], "");
    assert_eq!(result.exit_code, 0);
    assert_eq!(result.stdout, "Enter .git directory location:\n");
}

#[test]
fn bad_directory_is_fatal() {
    let repo = TestRepo::new();
    let missing = repo.work.join("missing");
    let input = format!("{}\nlist-branches\n", missing.display());
    let result = run_with_stdin(&repo.work, &[], &input);
    assert_eq!(result.exit_code, 128);
    assert!(result.stderr.starts_with("fatal: "), "{}", result.stderr);
}
