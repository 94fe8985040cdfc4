//! Fan-out, planting and message composition through an owned forest.

use std::io;
use std::sync::Arc;

use grove::tree::pipeline::render_error;
use grove::{Forest, ForestError, Priority, Tree, TreeExt};

mod common;
use common::{RecordingTree, RequestFailed};

#[test]
fn test_every_planted_tree_receives_the_call() {
    let forest = Forest::new();
    let trees: Vec<Arc<RecordingTree>> = (0..3).map(|_| Arc::new(RecordingTree::new())).collect();
    for tree in &trees {
        forest.plant(tree.clone()).unwrap();
    }

    let err = io::Error::new(io::ErrorKind::Other, "disk full");
    grove::e!(in forest, err: &err, "saving {}", "draft");

    for tree in &trees {
        let seen = tree.seen();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].priority, Priority::ERROR);
        assert_eq!(seen[0].message, "saving draft\ndisk full");
        assert_eq!(seen[0].error.as_deref(), Some("disk full"));
    }
}

#[test]
fn test_each_tree_applies_its_own_filter() {
    let forest = Forest::new();
    let chatty = Arc::new(RecordingTree::new());
    let quiet = Arc::new(RecordingTree::at_least(Priority::WARN));
    forest.plant_all([chatty.clone() as Arc<dyn Tree>, quiet.clone()]).unwrap();

    grove::d!(in forest, "detail");
    grove::w!(in forest, "problem");

    assert_eq!(chatty.messages(), vec!["detail", "problem"]);
    assert_eq!(quiet.messages(), vec!["problem"]);
}

#[test]
fn test_plant_then_uproot_round_trips() {
    let forest = Forest::new();
    let first = Arc::new(RecordingTree::new());
    forest.plant(first.clone()).unwrap();
    let before: Vec<_> = forest.forest().iter().map(|t| Arc::as_ptr(t).cast::<()>()).collect();

    let second = Arc::new(RecordingTree::new());
    forest.plant(second.clone()).unwrap();
    forest.uproot(&second).unwrap();

    let after: Vec<_> = forest.forest().iter().map(|t| Arc::as_ptr(t).cast::<()>()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_uproot_unplanted_tree_fails_and_keeps_set() {
    let forest = Forest::new();
    let planted = Arc::new(RecordingTree::new());
    let stranger = Arc::new(RecordingTree::new());
    forest.plant(planted).unwrap();

    assert_eq!(forest.uproot(&stranger), Err(ForestError::NotPlanted));
    assert_eq!(forest.tree_count(), 1);
}

#[test]
fn test_uproot_all_clears() {
    let forest = Forest::new();
    let tree = Arc::new(RecordingTree::new());
    forest.plant(tree.clone()).unwrap();

    forest.uproot_all();
    grove::i!(in forest, "nobody listens");

    assert_eq!(forest.tree_count(), 0);
    assert!(tree.seen().is_empty());
}

#[test]
fn test_same_tree_planted_twice_logs_twice() {
    let forest = Forest::new();
    let tree = Arc::new(RecordingTree::new());
    forest.plant(tree.clone()).unwrap();
    forest.plant(tree.clone()).unwrap();

    grove::i!(in forest, "echo");

    assert_eq!(tree.messages(), vec!["echo", "echo"]);
}

#[test]
fn test_one_shot_tag_applies_to_next_call_only() {
    let forest = Forest::new();
    let tree = Arc::new(RecordingTree::new());
    forest.plant(tree.clone()).unwrap();

    grove::i!(in forest.tag("Net"), "first");
    grove::i!(in forest, "second");

    assert_eq!(tree.tags(), vec![Some("Net".to_string()), None]);
}

#[test]
fn test_tag_reaches_every_tree() {
    let forest = Forest::new();
    let a = Arc::new(RecordingTree::new());
    let b = Arc::new(RecordingTree::new());
    forest.plant_all([a.clone() as Arc<dyn Tree>, b.clone()]).unwrap();

    grove::w!(in forest.tag("Db"), "slow query");

    assert_eq!(a.tags(), vec![Some("Db".to_string())]);
    assert_eq!(b.tags(), vec![Some("Db".to_string())]);
}

#[test]
fn test_empty_message_without_error_is_dropped() {
    let forest = Forest::new();
    let tree = Arc::new(RecordingTree::new());
    forest.plant(tree.clone()).unwrap();

    grove::i!(in forest, "");
    let empty = String::new();
    grove::i!(in forest, empty);

    assert!(tree.seen().is_empty());
}

#[test]
fn test_dropped_empty_message_keeps_pending_tag() {
    let forest = Forest::new();
    let tree = Arc::new(RecordingTree::new());
    forest.plant(tree.clone()).unwrap();

    grove::i!(in forest.tag("Net"), "");
    grove::i!(in forest, "real");
    grove::i!(in forest, "after");

    assert_eq!(tree.messages(), vec!["real", "after"]);
    assert_eq!(tree.tags(), vec![Some("Net".to_string()), None]);
}

#[test]
fn test_error_without_message_renders_error() {
    let forest = Forest::new();
    let tree = Arc::new(RecordingTree::new());
    forest.plant(tree.clone()).unwrap();

    let err = RequestFailed(io::Error::new(io::ErrorKind::TimedOut, "timed out"));
    grove::w!(in forest, err: &err);

    let seen = tree.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].message, render_error(&err));
    assert_eq!(seen[0].message, "request failed\nCaused by: timed out");
}

#[test]
fn test_template_is_formatted() {
    let forest = Forest::new();
    let tree = Arc::new(RecordingTree::new());
    forest.plant(tree.clone()).unwrap();

    grove::d!(in forest, "Hi, {}", "there");

    assert_eq!(tree.messages(), vec!["Hi, there"]);
}

#[test]
fn test_message_without_arguments_passes_through() {
    let forest = Forest::new();
    let tree = Arc::new(RecordingTree::new());
    forest.plant(tree.clone()).unwrap();

    grove::d!(in forest, "100% done");
    grove::d!(in forest, "literal {} braces");
    let runtime = String::from("50%s {0}");
    grove::d!(in forest, runtime);

    assert_eq!(tree.messages(), vec!["100% done", "literal {} braces", "50%s {0}"]);
}

#[test]
fn test_generic_log_accepts_raw_priority() {
    let forest = Forest::new();
    let tree = Arc::new(RecordingTree::new());
    forest.plant(tree.clone()).unwrap();

    grove::log!(in forest, 11, "custom {}", "level");
    grove::log!(in forest, Priority::INFO, "named");

    let seen = tree.seen();
    assert_eq!(seen[0].priority, Priority(11));
    assert_eq!(seen[0].message, "custom level");
    assert_eq!(seen[1].priority, Priority::INFO);
}

#[test]
fn test_as_tree_injects_the_whole_forest() {
    let forest = Forest::new();
    let tree = Arc::new(RecordingTree::new());
    forest.plant(tree.clone()).unwrap();

    let injected: Arc<dyn Tree> = forest.as_tree();
    injected.i(format_args!("via {}", "injection"));
    injected.set_tag("Svc");
    injected.log_error(Priority::ERROR, &io::Error::new(io::ErrorKind::Other, "lost"));

    let seen = tree.seen();
    assert_eq!(seen[0].message, "via injection");
    assert_eq!(seen[1].tag.as_deref(), Some("Svc"));
    assert_eq!(seen[1].message, "lost");
}

#[test]
fn test_every_level_macro_maps_to_its_priority() {
    let forest = Forest::new();
    let tree = Arc::new(RecordingTree::new());
    forest.plant(tree.clone()).unwrap();

    grove::v!(in forest, "v");
    grove::d!(in forest, "d");
    grove::i!(in forest, "i");
    grove::w!(in forest, "w");
    grove::e!(in forest, "e");
    grove::wtf!(in forest, "wtf");

    let priorities: Vec<_> = tree.seen().into_iter().map(|e| e.priority).collect();
    assert_eq!(
        priorities,
        vec![
            Priority::VERBOSE,
            Priority::DEBUG,
            Priority::INFO,
            Priority::WARN,
            Priority::ERROR,
            Priority::ASSERT,
        ]
    );
}
