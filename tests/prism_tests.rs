//! Integration tests for Prism optics.
//!
//! Tests cover:
//! - get_option / reverse_get / modify on a hand-written prism
//! - modify_f in Option, Result and writer contexts
//! - imap, filter and composition, including with an optional
//! - the standard prisms (some, left, right, from_predicate)
//! - focusing helpers chained from a prism

use std::collections::BTreeMap;

use focal::optics::{
    FunctionOptional, FunctionPrism, Lens, Optional, Prism, Traversal, from_nullable,
    from_predicate, left, prism, right, some,
};
use focal::typeclass::{OptionContext, ResultContext, WriterContext};
use focal::{lens, prism};
use rstest::rstest;

// =============================================================================
// Test data types
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
enum Tree {
    Leaf,
    Node(i32, Box<Tree>, Box<Tree>),
}

fn node(value: i32, left: Tree, right: Tree) -> Tree {
    Tree::Node(value, Box::new(left), Box::new(right))
}

/// Focuses the value of a node; rebuilding always produces a node with two
/// leaves.
fn node_value() -> impl Prism<Tree, i32> + Clone {
    FunctionPrism::new(
        |tree: &Tree| match tree {
            Tree::Node(value, _, _) => Some(*value),
            Tree::Leaf => None,
        },
        |value: i32| node(value, Tree::Leaf, Tree::Leaf),
        |tree: Tree| match tree {
            Tree::Node(value, _, _) => Ok(value),
            leaf => Err(leaf),
        },
    )
}

#[derive(Clone, PartialEq, Debug)]
enum Message {
    Text(String),
    Number(i64),
    Batch(Vec<i64>),
    Settings(BTreeMap<String, i64>),
}

#[derive(Clone, PartialEq, Debug)]
struct Profile {
    name: String,
    age: u32,
}

// =============================================================================
// Node value view
// =============================================================================

#[rstest]
#[case(Tree::Leaf, None)]
#[case(node(1, Tree::Leaf, Tree::Leaf), Some(1))]
#[case(node(5, node(1, Tree::Leaf, Tree::Leaf), Tree::Leaf), Some(5))]
fn test_node_value_get_option(#[case] tree: Tree, #[case] expected: Option<i32>) {
    assert_eq!(node_value().get_option(&tree), expected);
}

#[test]
fn test_node_value_reverse_get_builds_node() {
    assert_eq!(node_value().reverse_get(1), node(1, Tree::Leaf, Tree::Leaf));
}

#[test]
fn test_node_value_modify() {
    let doubled = node_value().modify(node(1, Tree::Leaf, Tree::Leaf), |value| value * 2);
    assert_eq!(doubled, node(2, Tree::Leaf, Tree::Leaf));

    let untouched = node_value().modify(Tree::Leaf, |value| value * 2);
    assert_eq!(untouched, Tree::Leaf);
}

#[test]
fn test_node_value_modify_option_reports_mismatch() {
    assert_eq!(node_value().modify_option(Tree::Leaf, |value| value + 1), None);
    assert_eq!(
        node_value().modify_option(node(1, Tree::Leaf, Tree::Leaf), |value| value + 1),
        Some(node(2, Tree::Leaf, Tree::Leaf))
    );
}

#[test]
fn test_is_match_and_preview() {
    let prism = node_value();
    assert!(prism.is_match(&node(0, Tree::Leaf, Tree::Leaf)));
    assert!(!prism.is_match(&Tree::Leaf));
    assert_eq!(prism.preview(&node(3, Tree::Leaf, Tree::Leaf)), Some(3));
}

// =============================================================================
// modify_f
// =============================================================================

#[test]
fn test_modify_f_option_context() {
    let halve = |value: i32| (value % 2 == 0).then_some(value / 2);

    assert_eq!(
        node_value().modify_f::<OptionContext, _>(node(4, Tree::Leaf, Tree::Leaf), halve),
        Some(node(2, Tree::Leaf, Tree::Leaf))
    );
    assert_eq!(
        node_value().modify_f::<OptionContext, _>(node(3, Tree::Leaf, Tree::Leaf), halve),
        None
    );
    assert_eq!(
        node_value().modify_f::<OptionContext, _>(Tree::Leaf, halve),
        Some(Tree::Leaf)
    );
}

#[test]
fn test_modify_f_result_context() {
    let text = prism!(Message, Text);
    let parse = |input: String| {
        input
            .trim()
            .parse::<i64>()
            .map(|number| number.to_string())
            .map_err(|_| format!("not a number: {input}"))
    };

    assert_eq!(
        text.modify_f::<ResultContext<String>, _>(Message::Text(" 42 ".into()), parse),
        Ok(Message::Text("42".into()))
    );
    assert_eq!(
        text.modify_f::<ResultContext<String>, _>(Message::Text("x".into()), parse),
        Err("not a number: x".to_string())
    );
    assert_eq!(
        text.modify_f::<ResultContext<String>, _>(Message::Number(1), parse),
        Ok(Message::Number(1))
    );
}

#[test]
fn test_modify_f_writer_context_logs_only_on_match() {
    let number = prism!(Message, Number);
    let logged = |value: i64| (vec![format!("saw {value}")], value + 1);

    assert_eq!(
        number.modify_f::<WriterContext<Vec<String>>, _>(Message::Number(1), logged),
        (vec!["saw 1".to_string()], Message::Number(2))
    );
    assert_eq!(
        number.modify_f::<WriterContext<Vec<String>>, _>(Message::Text("a".into()), logged),
        (Vec::new(), Message::Text("a".into()))
    );
}

// =============================================================================
// imap / filter / compose
// =============================================================================

#[test]
fn test_imap_changes_part_representation() {
    let as_text = node_value().imap(|value: i32| value.to_string(), |text: String| {
        text.parse().unwrap_or_default()
    });

    assert_eq!(
        as_text.get_option(&node(7, Tree::Leaf, Tree::Leaf)),
        Some("7".to_string())
    );
    assert_eq!(as_text.reverse_get("8".into()), node(8, Tree::Leaf, Tree::Leaf));
    assert_eq!(as_text.get_option(&Tree::Leaf), None);
}

#[test]
fn test_filter_narrows_reads_only() {
    let positive = node_value().filter(|value: &i32| *value > 0);

    assert_eq!(positive.get_option(&node(1, Tree::Leaf, Tree::Leaf)), Some(1));
    assert_eq!(positive.get_option(&node(-1, Tree::Leaf, Tree::Leaf)), None);
    assert_eq!(positive.reverse_get(-1), node(-1, Tree::Leaf, Tree::Leaf));
    assert_eq!(
        positive.modify(node(-1, Tree::Leaf, Tree::Leaf), |value| value * 10),
        node(-1, Tree::Leaf, Tree::Leaf)
    );
}

#[test]
fn test_compose_through_two_prisms() {
    let node_in_option = some::<Tree>().compose(node_value());

    assert_eq!(
        node_in_option.get_option(&Some(node(3, Tree::Leaf, Tree::Leaf))),
        Some(3)
    );
    assert_eq!(node_in_option.get_option(&Some(Tree::Leaf)), None);
    assert_eq!(node_in_option.get_option(&None), None);
    assert_eq!(
        node_in_option.reverse_get(3),
        Some(node(3, Tree::Leaf, Tree::Leaf))
    );
}

/// Focuses the first character of a non-empty string.
fn first_char() -> impl Optional<String, char> + Clone {
    FunctionOptional::new(
        |text: &String| text.chars().next(),
        |text: String, head: char| {
            let mut chars = text.chars();
            match chars.next() {
                Some(_) => std::iter::once(head).chain(chars).collect(),
                None => text,
            }
        },
    )
}

#[rstest]
#[case(None, None)]
#[case(Some(""), None)]
#[case(Some("ab"), Some('a'))]
fn test_compose_optional_get_option(#[case] source: Option<&str>, #[case] expected: Option<char>) {
    let initial = some::<String>().compose_optional(first_char());
    assert_eq!(initial.get_option(&source.map(String::from)), expected);
}

#[rstest]
#[case(None, None)]
#[case(Some(""), Some(""))]
#[case(Some("ab"), Some("zb"))]
fn test_compose_optional_set(#[case] source: Option<&str>, #[case] expected: Option<&str>) {
    let initial = some::<String>().compose_optional(first_char());
    assert_eq!(
        initial.set(source.map(String::from), 'z'),
        expected.map(String::from)
    );
}

#[test]
fn test_id_is_neutral_for_compose() {
    let left_id = prism::id::<Tree>().compose(node_value());
    let right_id = node_value().compose(prism::id::<i32>());
    let tree = node(9, Tree::Leaf, Tree::Leaf);

    assert_eq!(left_id.get_option(&tree), node_value().get_option(&tree));
    assert_eq!(right_id.get_option(&tree), node_value().get_option(&tree));
    assert_eq!(left_id.reverse_get(1), node_value().reverse_get(1));
}

// =============================================================================
// Standard prisms
// =============================================================================

#[test]
fn test_some_and_from_nullable() {
    assert_eq!(some::<i32>().get_option(&Some(1)), Some(1));
    assert_eq!(some::<i32>().get_option(&None), None);
    assert_eq!(from_nullable::<&str>().reverse_get("x"), Some("x"));
}

#[test]
fn test_left_and_right() {
    let ok: Result<i32, String> = Ok(1);
    let err: Result<i32, String> = Err("boom".into());

    assert_eq!(right::<i32, String>().get_option(&ok), Some(1));
    assert_eq!(right::<i32, String>().get_option(&err), None);
    assert_eq!(left::<i32, String>().get_option(&err), Some("boom".to_string()));
    assert_eq!(left::<i32, String>().reverse_get("e".into()), Err("e".to_string()));
}

#[test]
fn test_from_predicate() {
    let even = from_predicate(|value: &u8| value % 2 == 0);

    assert_eq!(even.get_option(&4), Some(4));
    assert_eq!(even.get_option(&5), None);
    assert_eq!(even.modify(5, |value| value + 1), 5);
    assert_eq!(even.modify(4, |value| value + 2), 6);
}

#[test]
fn test_chained_some_left_right() {
    let nested = prism::id::<Option<Result<i32, String>>>().some().right();

    assert_eq!(nested.get_option(&Some(Ok(2))), Some(2));
    assert_eq!(nested.get_option(&Some(Err("x".into()))), None);
    assert_eq!(nested.reverse_get(2), Some(Ok(2)));

    let failure = prism::id::<Option<Result<i32, String>>>().some().left();
    assert_eq!(failure.get_option(&Some(Err("x".into()))), Some("x".to_string()));
}

// =============================================================================
// Focusing helpers
// =============================================================================

#[test]
fn test_prop_on_matching_variant() {
    let age = some::<Profile>().prop(lens!(Profile, age));
    let profile = Profile {
        name: "ann".into(),
        age: 30,
    };

    assert_eq!(age.get_option(&Some(profile.clone())), Some(30));
    assert_eq!(age.get_option(&None), None);
    assert_eq!(
        age.set(Some(profile), 31),
        Some(Profile {
            name: "ann".into(),
            age: 31
        })
    );
    assert_eq!(age.set(None, 31), None);
}

#[test]
fn test_index_into_batch() {
    let second = prism!(Message, Batch).index(1);

    assert_eq!(second.get_option(&Message::Batch(vec![1, 2, 3])), Some(2));
    assert_eq!(second.get_option(&Message::Batch(vec![1])), None);
    assert_eq!(
        second.set(Message::Batch(vec![1, 2, 3]), 20),
        Message::Batch(vec![1, 20, 3])
    );
    assert_eq!(
        second.set(Message::Batch(vec![1]), 20),
        Message::Batch(vec![1])
    );
}

#[test]
fn test_key_and_at_key_into_settings() {
    let settings = BTreeMap::from([("volume".to_string(), 3_i64)]);
    let volume = prism!(Message, Settings).key("volume".to_string());

    assert_eq!(volume.get_option(&Message::Settings(settings.clone())), Some(3));
    assert_eq!(
        volume.set(Message::Settings(BTreeMap::new()), 1),
        Message::Settings(BTreeMap::new())
    );

    let brightness = prism!(Message, Settings).at_key("brightness".to_string());
    let updated = brightness.set(Message::Settings(settings), Some(7));
    assert_eq!(
        updated,
        Message::Settings(BTreeMap::from([
            ("brightness".to_string(), 7),
            ("volume".to_string(), 3),
        ]))
    );
}

#[test]
fn test_find_first_in_optional_sequence() {
    let first_positive = some::<Vec<i32>>().find_first(|value: &i32| *value > 0);

    assert_eq!(first_positive.get_option(&Some(vec![-1, 2, -3])), Some(2));
    assert_eq!(
        first_positive.set(Some(vec![-1, 2, -3]), 4),
        Some(vec![-1, 4, -3])
    );
    assert_eq!(
        first_positive.set(Some(vec![-1, -2, -3]), 4),
        Some(vec![-1, -2, -3])
    );
    assert_eq!(first_positive.get_option(&None), None);
}

#[test]
fn test_component_of_tuple_part() {
    let second = some::<(String, i32)>().component::<1>();

    assert_eq!(second.get_option(&Some(("a".into(), 1))), Some(1));
    assert_eq!(second.set(Some(("a".into(), 1)), 2), Some(("a".to_string(), 2)));
}

#[test]
fn test_traverse_batch() {
    let numbers = prism!(Message, Batch).traverse();

    assert_eq!(numbers.get_all(Message::Batch(vec![1, 2])), vec![1, 2]);
    assert_eq!(numbers.get_all(Message::Number(1)), Vec::<i64>::new());
    assert_eq!(
        numbers.modify(Message::Batch(vec![1, 2]), |value| -value),
        Message::Batch(vec![-1, -2])
    );
}

#[test]
fn test_compose_lens_directly() {
    let name = lens!(Profile, name);
    let option_name = some::<Profile>().compose_lens(name.clone());
    let profile = Profile {
        name: "bo".into(),
        age: 2,
    };

    assert_eq!(
        option_name.get_option(&Some(profile.clone())),
        Some(name.get(&profile))
    );
}
