use super::*;

use proptest::prelude::*;
use std::collections::BTreeSet;

/// Check the structural invariants. `heap_ordered` additionally checks the
/// treap order, which only balanced insertion maintains.
fn validate_trie(t: &HybridTrie, heap_ordered: bool) {
    // (node, exclusive lower bound, exclusive upper bound) on the left/right axis.
    let mut stack: Vec<(&Node, Option<char>, Option<char>)> = Vec::new();
    if let Some(root) = t.root() {
        stack.push((root, None, None));
    }

    let mut terminals = 0usize;
    while let Some((node, lo, hi)) = stack.pop() {
        let c = node.character();
        assert!(lo.map_or(true, |lo| lo < c), "{c:?} not above {lo:?}");
        assert!(hi.map_or(true, |hi| c < hi), "{c:?} not below {hi:?}");

        assert!(
            node.is_terminal() || node.middle().is_some(),
            "node {c:?} neither ends a word nor continues one"
        );
        if node.is_terminal() {
            terminals += 1;
        }

        if heap_ordered {
            let below = node.middle().map_or(0, Node::priority);
            assert_eq!(node.priority(), node.terminal_weight().max(below));
            for side in [node.left(), node.right()].into_iter().flatten() {
                assert!(
                    side.priority() <= node.priority(),
                    "sibling {:?} outranks {c:?}",
                    side.character()
                );
            }
        }

        if let Some(left) = node.left() {
            stack.push((left, lo, Some(c)));
        }
        if let Some(right) = node.right() {
            stack.push((right, Some(c), hi));
        }
        if let Some(middle) = node.middle() {
            stack.push((middle, None, None));
        }
    }

    assert_eq!(terminals, t.word_count());
    let nodes = t.node_count();
    let expected_nulls = if nodes == 0 { 0 } else { 2 * nodes + 1 };
    assert_eq!(t.null_link_count(), expected_nulls);
}

#[derive(Clone, Debug)]
enum Op {
    Insert(String),
    Remove(String),
    Contains(String),
    PrefixCount(String),
}

fn word_strategy() -> impl Strategy<Value = String> + Clone {
    // A small alphabet makes shared prefixes and sibling chains common.
    "[a-e]{1,6}"
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let word = word_strategy();
    let op = prop_oneof![
        45 => word.clone().prop_map(Op::Insert),
        30 => word.clone().prop_map(Op::Remove),
        15 => word.clone().prop_map(Op::Contains),
        10 => word.clone().prop_map(Op::PrefixCount),
    ];
    prop::collection::vec(op, 0..=400)
}

fn model_prefix_count(m: &BTreeSet<String>, prefix: &str) -> usize {
    m.range(prefix.to_string()..)
        .take_while(|w| w.starts_with(prefix))
        .count()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 10_000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence(ops in ops_strategy()) {
        let mut t = HybridTrie::new();
        let mut m: BTreeSet<String> = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(word) => {
                    t.insert(&word).unwrap();
                    m.insert(word);
                }
                Op::Remove(word) => {
                    prop_assert_eq!(t.remove(&word).unwrap(), m.remove(&word));
                }
                Op::Contains(word) => {
                    prop_assert_eq!(t.contains(&word).unwrap(), m.contains(&word));
                }
                Op::PrefixCount(word) => {
                    prop_assert_eq!(t.prefix_count(&word).unwrap(), model_prefix_count(&m, &word));
                }
            }
            prop_assert_eq!(t.word_count(), m.len());
        }

        validate_trie(&t, false);
        prop_assert_eq!(t.is_empty(), m.is_empty());
        let expected: Vec<String> = m.into_iter().collect();
        prop_assert_eq!(t.words(), expected);
    }

    #[test]
    fn prop_balanced_keeps_treap_order(
        words in prop::collection::vec(word_strategy(), 1..=300),
        seed in any::<u64>(),
    ) {
        let mut t = HybridTrie::new();
        let mut priorities = UniquePriorities::seeded(seed);
        for word in &words {
            t.insert_balanced(word, &mut priorities).unwrap();
        }
        validate_trie(&t, true);

        let expected: Vec<String> = words.iter().cloned().collect::<BTreeSet<_>>().into_iter().collect();
        prop_assert_eq!(t.words(), expected);
        prop_assert_eq!(priorities.issued(), t.word_count());
    }

    #[test]
    fn prop_balanced_then_removed(
        words in prop::collection::vec(word_strategy(), 1..=200),
        removals in prop::collection::vec(word_strategy(), 0..=200),
        seed in any::<u64>(),
    ) {
        let mut t = HybridTrie::new();
        let mut m: BTreeSet<String> = words.iter().cloned().collect();
        t.insert_all_balanced(&words, &mut UniquePriorities::seeded(seed)).unwrap();
        for word in &removals {
            prop_assert_eq!(t.remove(word).unwrap(), m.remove(word));
        }
        validate_trie(&t, false);
        let expected: Vec<String> = m.into_iter().collect();
        prop_assert_eq!(t.words(), expected);
    }

    #[test]
    fn prop_stats_agree(words in prop::collection::vec(word_strategy(), 1..=200)) {
        let mut t = HybridTrie::new();
        t.insert_all(&words).unwrap();
        let stats = t.stats();
        prop_assert_eq!(stats.nodes, t.node_count());
        prop_assert_eq!(stats.words, t.word_count());
        prop_assert_eq!(stats.null_links, t.null_link_count());
        prop_assert_eq!(stats.height, t.height());
        prop_assert_eq!(stats.leaves, t.leaf_count());
        prop_assert!((stats.average_leaf_depth() - t.average_leaf_depth()).abs() < 1e-12);
        for word in &words {
            prop_assert!(t.prefix_count(word).unwrap() >= 1);
        }
    }
}

fn for_each_permutation<T: Clone>(items: &[T], mut f: impl FnMut(Vec<T>)) {
    fn rec<T: Clone>(items: &[T], used: &mut [bool], out: &mut Vec<T>, f: &mut impl FnMut(Vec<T>)) {
        if out.len() == items.len() {
            f(out.clone());
            return;
        }
        for i in 0..items.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            out.push(items[i].clone());
            rec(items, used, out, f);
            out.pop();
            used[i] = false;
        }
    }

    let mut used = vec![false; items.len()];
    let mut out = Vec::with_capacity(items.len());
    rec(items, &mut used, &mut out, &mut f);
}

const SMALL_SET: [&str; 6] = ["b", "a", "c", "ab", "ba", "bab"];

#[test]
fn exhaustive_insert_order_small_set() {
    let expected: Vec<String> = SMALL_SET
        .iter()
        .map(|w| w.to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    for_each_permutation(&SMALL_SET, |perm| {
        let mut t = HybridTrie::new();
        t.insert_all(&perm).unwrap();
        validate_trie(&t, false);
        assert_eq!(t.words(), expected);
        // Node count depends only on the set of distinct prefixes.
        assert_eq!(t.node_count(), 6);
    });
}

#[test]
fn exhaustive_remove_order_small_set() {
    // Insert in a fixed order, then remove in all permutations.
    let mut base = HybridTrie::new();
    base.insert_all(SMALL_SET).unwrap();

    for_each_permutation(&SMALL_SET, |perm| {
        let mut t = base.clone();
        let mut m: BTreeSet<&str> = SMALL_SET.iter().copied().collect();

        for w in perm {
            assert!(t.remove(w).unwrap());
            m.remove(w);
            assert_eq!(t.word_count(), m.len());
            validate_trie(&t, false);
            let expected: Vec<String> = m.iter().map(|w| w.to_string()).collect();
            assert_eq!(t.words(), expected);
        }
        assert!(t.is_empty());
    });
}

#[test]
fn exhaustive_balanced_insert_order_small_set() {
    for_each_permutation(&SMALL_SET, |perm| {
        let mut t = HybridTrie::new();
        let mut priorities = UniquePriorities::seeded(99);
        t.insert_all_balanced(&perm, &mut priorities).unwrap();
        validate_trie(&t, true);
        assert_eq!(t.word_count(), SMALL_SET.len());
    });
}
