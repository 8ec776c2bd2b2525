//! End-to-end mutation sequences: interleaved edits, undo/redo, and
//! rendering-visible effects across the document and editor crates.

use resumark_document::{
    ContentTree, Decoration, DecoratorKind, FontStyle, Margins, NodeDoc, NodeKind, Status,
};
use resumark_editor::{Mutation, UndoStack};

fn text_doc(value: &str) -> NodeDoc {
    NodeDoc::TextElement {
        status: 1,
        label: None,
        value: value.to_string(),
    }
}

#[test]
fn build_edit_and_unwind_a_section() {
    let mut tree = ContentTree::default();
    let mut history = UndoStack::new();

    // Build a small section: a header line plus a detail list.
    let header = tree.alloc(NodeKind::header(2));
    tree.insert(tree.root(), header, None).unwrap();
    let list = tree.alloc(NodeKind::unordered_list());
    tree.insert(tree.root(), list, None).unwrap();

    history
        .apply(
            &Mutation::InsertNode {
                parent: header,
                index: None,
                node: text_doc("Experience"),
            },
            &mut tree,
        )
        .unwrap();

    history.begin_batch();
    for value in ["[description 1]", "[description 2]"] {
        let line = NodeDoc::TextLine {
            status: 1,
            label: None,
            children: vec![text_doc(value)],
        };
        history
            .apply(
                &Mutation::InsertNode {
                    parent: list,
                    index: None,
                    node: line,
                },
                &mut tree,
            )
            .unwrap();
    }
    history.end_batch();

    let full = tree.to_doc().unwrap();

    // One undo drops both detail lines, the next drops the title.
    assert!(history.undo(&mut tree).unwrap());
    assert!(tree
        .get(list)
        .unwrap()
        .kind
        .children()
        .unwrap()
        .is_empty());

    assert!(history.undo(&mut tree).unwrap());
    assert!(tree
        .get(header)
        .unwrap()
        .kind
        .children()
        .unwrap()
        .is_empty());

    assert!(history.redo(&mut tree).unwrap());
    assert!(history.redo(&mut tree).unwrap());
    assert_eq!(tree.to_doc().unwrap(), full);
}

#[test]
fn decorator_edits_unwind_to_original_chain() {
    let mut tree = ContentTree::default();
    let mut history = UndoStack::new();

    let key = tree.alloc(NodeKind::text("Email: "));
    tree.insert(tree.root(), key, None).unwrap();
    let before = tree.to_doc().unwrap();

    history
        .apply(
            &Mutation::Decorate {
                node: key,
                decoration: Decoration::StyledFont(FontStyle::bold()),
            },
            &mut tree,
        )
        .unwrap();
    history
        .apply(
            &Mutation::Decorate {
                node: key,
                decoration: Decoration::BoxMargin(Margins::new("-5px", "0px", "0px", "10px")),
            },
            &mut tree,
        )
        .unwrap();
    history
        .apply(
            &Mutation::Decorate {
                node: key,
                decoration: Decoration::StyledFont(FontStyle::default()),
            },
            &mut tree,
        )
        .unwrap();
    assert_eq!(tree.decorated_structure(key).unwrap().len(), 3);

    // Unwind: restyle, then margin, then font.
    assert!(history.undo(&mut tree).unwrap());
    assert!(history.undo(&mut tree).unwrap());
    assert_eq!(tree.decorated_structure(key).unwrap().len(), 2);
    assert!(history.undo(&mut tree).unwrap());
    assert_eq!(tree.to_doc().unwrap(), before);
}

#[test]
fn status_and_attribute_edits_round_trip() {
    let mut tree = ContentTree::default();
    let mut history = UndoStack::new();

    let header = tree.alloc(NodeKind::header(1));
    tree.insert(tree.root(), header, None).unwrap();
    let before = tree.to_doc().unwrap();

    history
        .apply(
            &Mutation::SetAttribute {
                node: header,
                name: "level".to_string(),
                value: "3".to_string(),
            },
            &mut tree,
        )
        .unwrap();
    history
        .apply(
            &Mutation::SetStatus {
                node: header,
                status: Status::Disabled,
            },
            &mut tree,
        )
        .unwrap();
    history
        .apply(
            &Mutation::SetLabel {
                node: header,
                label: "Name".to_string(),
            },
            &mut tree,
        )
        .unwrap();

    let node = tree.get(header).unwrap();
    assert_eq!(node.status, Status::Disabled);
    assert_eq!(node.label, "Name");

    while history.undo(&mut tree).unwrap() {}
    assert_eq!(tree.to_doc().unwrap(), before);
}

#[test]
fn clone_then_swap_then_remove() {
    let mut tree = ContentTree::default();
    let mut history = UndoStack::new();

    let line = tree.alloc(NodeKind::text_line());
    tree.insert(tree.root(), line, None).unwrap();
    for value in ["a", "b"] {
        history
            .apply(
                &Mutation::InsertNode {
                    parent: line,
                    index: None,
                    node: text_doc(value),
                },
                &mut tree,
            )
            .unwrap();
    }

    history
        .apply(
            &Mutation::CloneChild {
                parent: line,
                index: 0,
            },
            &mut tree,
        )
        .unwrap();
    history
        .apply(
            &Mutation::SwapChildren {
                parent: line,
                a: 0,
                b: 2,
            },
            &mut tree,
        )
        .unwrap();
    history
        .apply(
            &Mutation::RemoveAt {
                parent: line,
                index: 1,
            },
            &mut tree,
        )
        .unwrap();

    let values: Vec<String> = tree
        .get(line)
        .unwrap()
        .kind
        .children()
        .unwrap()
        .iter()
        .map(|&id| match &tree.get(id).unwrap().kind {
            NodeKind::Text { value } => value.clone(),
            other => panic!("expected text, got {other:?}"),
        })
        .collect();
    // Start [a, b]; clone -> [a, a, b]; swap(0,2) -> [b, a, a]; remove(1) -> [b, a].
    assert_eq!(values, vec!["b", "a"]);
}

#[test]
fn undecorate_redo_keeps_payload() {
    let mut tree = ContentTree::default();
    let mut history = UndoStack::new();

    let text = tree.alloc(NodeKind::text("x"));
    tree.insert(tree.root(), text, None).unwrap();
    let style = FontStyle {
        italic: true,
        ..FontStyle::default()
    };
    tree.decorate(text, Decoration::StyledFont(style.clone()))
        .unwrap();

    history
        .apply(
            &Mutation::Undecorate {
                node: text,
                kind: DecoratorKind::StyledFont,
            },
            &mut tree,
        )
        .unwrap();
    assert_eq!(tree.decorated_structure(text).unwrap().len(), 1);

    assert!(history.undo(&mut tree).unwrap());
    let chain = tree.decorated_structure(text).unwrap();
    assert_eq!(chain.len(), 2);
    match &tree.get(chain[1]).unwrap().kind {
        NodeKind::StyledFont { style: got, .. } => assert_eq!(got, &style),
        other => panic!("expected StyledFont, got {other:?}"),
    }
}
