use algos::traversal::{
    bfs, dfs_iterative, dfs_recursive, on_enter_leave, DepthFirst, Iterative, Recursive,
};
use algos::tree::{create_tree, TreeNode};

use quickcheck_macros::quickcheck;

/// Collects the values handed to `enter` and `leave` by a depth-first strategy.
fn orders(strategy: impl DepthFirst, root: Option<&TreeNode<i8>>) -> (Vec<i8>, Vec<i8>) {
    let mut entered = Vec::new();
    let mut left = Vec::new();
    strategy.traverse(
        root,
        &mut on_enter_leave(|n| entered.push(n.val), |n| left.push(n.val)),
    );
    (entered, left)
}

#[quickcheck]
fn empty_iff_no_root(slots: Vec<Option<i8>>) -> bool {
    let expect_empty = slots.first().map_or(true, Option::is_none);
    create_tree(&slots).is_none() == expect_empty
}

#[quickcheck]
fn recursive_and_iterative_agree(slots: Vec<Option<i8>>) -> bool {
    let tree = create_tree(&slots);
    orders(Recursive, tree.as_ref()) == orders(Iterative, tree.as_ref())
}

#[quickcheck]
fn level_order_round_trips(slots: Vec<Option<i8>>) -> bool {
    match create_tree(&slots) {
        Some(tree) => create_tree(&tree.to_level_order()).as_ref() == Some(&tree),
        None => true,
    }
}

#[quickcheck]
fn text_round_trips(slots: Vec<Option<i8>>) -> bool {
    match create_tree(&slots) {
        Some(tree) => tree.to_string().parse::<TreeNode<i8>>() == Ok(tree),
        None => true,
    }
}

#[quickcheck]
fn leave_order_reverses_mirrored_enter_order(slots: Vec<Option<i8>>) -> bool {
    // Postorder of a tree is the reverse of the preorder of its mirror image.
    fn mirror(node: &TreeNode<i8>) -> TreeNode<i8> {
        TreeNode::with_children(
            node.val,
            node.right().map(mirror),
            node.left().map(mirror),
        )
    }

    let tree = create_tree(&slots);
    let mirrored = tree.as_ref().map(mirror);

    let (_, mut left) = orders(Iterative, tree.as_ref());
    let (mirrored_entered, _) = orders(Recursive, mirrored.as_ref());
    left.reverse();
    left == mirrored_entered
}

#[test]
fn complete_tree_orders() {
    let root: TreeNode = "[1,2,3,4,5,6,7]".parse().unwrap();

    let mut entered = Vec::new();
    let mut left = Vec::new();
    dfs_recursive(
        Some(&root),
        &mut on_enter_leave(|n| entered.push(n.val), |n| left.push(n.val)),
    );
    assert_eq!(entered, vec![1, 2, 4, 5, 3, 6, 7]);
    assert_eq!(left, vec![4, 5, 2, 6, 7, 3, 1]);

    let mut iter_entered = Vec::new();
    let mut iter_left = Vec::new();
    dfs_iterative(
        Some(&root),
        &mut on_enter_leave(|n| iter_entered.push(n.val), |n| iter_left.push(n.val)),
    );
    assert_eq!(iter_entered, entered);
    assert_eq!(iter_left, left);

    let mut visited = Vec::new();
    bfs(Some(&root), |n| visited.push(n.val));
    assert_eq!(visited, vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn sparse_tree_bfs() {
    let root = create_tree(&[Some(1), Some(2), Some(3), None, None, Some(6)]).unwrap();
    let mut visited = Vec::new();
    bfs(Some(&root), |n| visited.push(n.val));
    assert_eq!(visited, vec![1, 2, 3, 6]);
}
