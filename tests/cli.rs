use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn classroom_by_default() {
    let mut cmd = cargo_bin_cmd!("graphsearch");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("breadth-first search from S to W"))
        .stdout(predicate::str::contains("path: S -> B -> H -> Q -> U -> W"))
        .stdout(predicate::str::contains("total: 5 hops"));
}

#[test]
fn list_demos() {
    let mut cmd = cargo_bin_cmd!("graphsearch");
    cmd.arg("--list-demos")
        .assert()
        .success()
        .stdout(predicate::str::contains("classroom"))
        .stdout(predicate::str::contains("detour"))
        .stdout(predicate::str::contains("weighted"));
}

#[test]
fn every_strategy() {
    let mut cmd = cargo_bin_cmd!("graphsearch");
    cmd.args(["--demo", "detour", "--strategy", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("breadth-first search from S to C"))
        .stdout(predicate::str::contains("depth-first search from S to C"))
        .stdout(predicate::str::contains(
            "uniform-cost search from S to C\n  path: S -> B -> C\n  total: cost 2 over 2 hops",
        ));
}

#[test]
fn graph_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "S: A B\nA: C\nB: C\nC:\nZ:").unwrap();

    let mut cmd = cargo_bin_cmd!("graphsearch");
    cmd.arg("--graph")
        .arg(file.path())
        .args(["S", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path: S -> A -> C"));

    let mut cmd = cargo_bin_cmd!("graphsearch");
    cmd.arg("--graph")
        .arg(file.path())
        .args(["-s", "dfs", "S", "Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path: none, Z cannot be reached"))
        .stdout(predicate::str::contains("total: unreachable"));
}

#[test]
fn graph_from_stdin() {
    let mut cmd = cargo_bin_cmd!("graphsearch");
    cmd.args(["-g", "-", "-s", "ucs", "S", "C"])
        .write_stdin("S: A=5 B=1\nA: C=1\nB: C=1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("path: S -> B -> C"));
}

#[test]
fn trace() {
    let mut cmd = cargo_bin_cmd!("graphsearch");
    cmd.args(["-d", "detour", "--trace"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "step 0: expanded S (visited 1, frontier 2: [A, B])",
        ))
        .stdout(predicate::str::contains("reached goal C"));
}

#[test]
fn unknown_strategy() {
    let mut cmd = cargo_bin_cmd!("graphsearch");
    cmd.args(["--strategy", "astar"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown search strategy"));
}

#[test]
fn start_without_goal() {
    let mut cmd = cargo_bin_cmd!("graphsearch");
    cmd.arg("A")
        .assert()
        .failure()
        .stdout(predicate::str::contains("search from").not());
}

#[test]
fn missing_start() {
    let mut cmd = cargo_bin_cmd!("graphsearch");
    cmd.args(["Q", "W"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Start node \"Q\" is not in the graph"));
}

#[test]
fn file_needs_query() {
    let file = tempfile::NamedTempFile::new().unwrap();

    let mut cmd = cargo_bin_cmd!("graphsearch");
    cmd.arg("--graph")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("START and GOAL are required"));
}

#[test]
fn unreadable_graph() {
    let mut cmd = cargo_bin_cmd!("graphsearch");
    cmd.args(["--graph", "no/such/graph.txt", "S", "C"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Graph not found: no/such/graph.txt"));
}

#[test]
fn malformed_graph() {
    let mut cmd = cargo_bin_cmd!("graphsearch");
    cmd.args(["-g", "-", "S", "A"])
        .write_stdin("S: A=x\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid cost"));
}
