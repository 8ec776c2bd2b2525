//! # Content Tree
//!
//! Arena-backed mutable tree of résumé content nodes.
//!
//! ## Design
//!
//! - **Ownership flows downward**: containers own their ordered `children`
//!   index list, decorators own their single `component` index. The `parent`
//!   field is a non-owning back-index used for upward walks.
//! - **Identity is the arena index**: list membership, `remove`,
//!   `replace_child` and the decorator chain all operate on `NodeId`, never
//!   on node values. Generational indices make stale ids detectable.
//! - **No silent no-ops**: operations on foreign nodes or bad indices return
//!   explicit errors instead of quietly leaving the tree inconsistent.
//!
//! The tree is single-writer: operations are synchronous and individually
//! atomic, and callers that read while another path writes must snapshot via
//! the serialized form.

use generational_arena::Arena;

use crate::error::TreeError;
use crate::node::{Decoration, DecoratorKind, Node, NodeKind, Status};

/// Identity of a node within its tree.
pub type NodeId = generational_arena::Index;

/// A whole content tree: an arena of nodes plus the root id.
///
/// Detached fragments (popped children awaiting reinsertion) live in the same
/// arena; `release` frees a fragment that will not be reinserted.
#[derive(Debug, Clone)]
pub struct ContentTree {
    arena: Arena<Node>,
    root: NodeId,
}

impl ContentTree {
    /// Create a tree whose root is a fresh node of the given kind.
    pub fn with_root(kind: NodeKind) -> Self {
        let mut arena = Arena::new();
        let label = kind.type_name().to_string();
        let root = arena.insert(Node {
            kind,
            status: Status::Enabled,
            label,
            parent: None,
        });
        Self { arena, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Promote a grafted subtree to be the tree's root, dropping the
    /// placeholder root created at construction.
    pub(crate) fn set_root(&mut self, root: NodeId, placeholder: NodeId) {
        self.root = root;
        self.arena.remove(placeholder);
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.arena.contains(id)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.arena.get(id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.arena.get_mut(id)
    }

    pub(crate) fn node(&self, id: NodeId) -> Result<&Node, TreeError> {
        self.arena.get(id).ok_or(TreeError::NodeNotFound(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, TreeError> {
        self.arena.get_mut(id).ok_or(TreeError::NodeNotFound(id))
    }

    /// Allocate a detached node. Container constructors start empty; wire the
    /// node in with `insert` (or `decorate` for decorators).
    pub fn alloc(&mut self, kind: NodeKind) -> NodeId {
        let label = kind.type_name().to_string();
        self.alloc_with(kind, Status::Enabled, label)
    }

    pub fn alloc_with(&mut self, kind: NodeKind, status: Status, label: String) -> NodeId {
        self.arena.insert(Node {
            kind,
            status,
            label,
            parent: None,
        })
    }

    /// Drop a detached node and its whole subtree from the arena.
    pub fn release(&mut self, id: NodeId) -> Result<(), TreeError> {
        if self.node(id)?.parent.is_some() {
            return Err(TreeError::StillAttached);
        }
        if id == self.root {
            return Err(TreeError::StillAttached);
        }
        let ids: Vec<NodeId> = self.pre_order(id).collect();
        for id in ids {
            self.arena.remove(id);
        }
        Ok(())
    }

    /// True if `ancestor` appears on the parent chain of `id` (or equals it).
    fn is_ancestor_or_self(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut cur = Some(id);
        while let Some(at) = cur {
            if at == ancestor {
                return true;
            }
            cur = self.get(at).and_then(|node| node.parent);
        }
        false
    }

    // ------------------------------------------------------------------
    // Composite operations
    // ------------------------------------------------------------------

    /// Insert a detached node into a container's child list. `index == None`
    /// appends; otherwise the node lands at `index` (which may equal the
    /// current length).
    pub fn insert(
        &mut self,
        parent: NodeId,
        child: NodeId,
        index: Option<usize>,
    ) -> Result<(), TreeError> {
        let len = self
            .node(parent)?
            .kind
            .children()
            .ok_or(TreeError::NotAContainer)?
            .len();
        if self.node(child)?.parent.is_some() {
            return Err(TreeError::AlreadyAttached);
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(TreeError::CycleDetected);
        }
        let index = match index {
            Some(index) if index > len => {
                return Err(TreeError::IndexOutOfRange { index, len });
            }
            Some(index) => index,
            None => len,
        };

        let children = self
            .node_mut(parent)?
            .kind
            .children_mut()
            .ok_or(TreeError::NotAContainer)?;
        children.insert(index, child);
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Deep-clone the child at `index` (serialize → rebuild) and insert the
    /// clone immediately before it. Returns the clone's id.
    pub fn insert_clone(&mut self, parent: NodeId, index: usize) -> Result<NodeId, TreeError> {
        let children = self
            .node(parent)?
            .kind
            .children()
            .ok_or(TreeError::NotAContainer)?;
        let len = children.len();
        let original = *children
            .get(index)
            .ok_or(TreeError::IndexOutOfRange { index, len })?;
        let doc = crate::doc::NodeDoc::from_tree(self, original)?;
        let clone = doc.graft(self);
        self.insert(parent, clone, Some(index))?;
        Ok(clone)
    }

    /// Remove a child found by identity. The child stays allocated as a
    /// detached fragment.
    pub fn remove(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        let children = self
            .node(parent)?
            .kind
            .children()
            .ok_or(TreeError::NotAContainer)?;
        let index = children
            .iter()
            .position(|&id| id == child)
            .ok_or(TreeError::ChildNotFound)?;
        self.pop_at(parent, index)?;
        Ok(())
    }

    /// Detach and return the child at `index`.
    pub fn pop_at(&mut self, parent: NodeId, index: usize) -> Result<NodeId, TreeError> {
        let children = self
            .node_mut(parent)?
            .kind
            .children_mut()
            .ok_or(TreeError::NotAContainer)?;
        let len = children.len();
        if index >= len {
            return Err(TreeError::IndexOutOfRange { index, len });
        }
        let child = children.remove(index);
        self.node_mut(child)?.parent = None;
        Ok(child)
    }

    /// Swap the children at two indices. `swap(i, i)` is a no-op.
    pub fn swap(&mut self, parent: NodeId, a: usize, b: usize) -> Result<(), TreeError> {
        let children = self
            .node_mut(parent)?
            .kind
            .children_mut()
            .ok_or(TreeError::NotAContainer)?;
        let len = children.len();
        for index in [a, b] {
            if index >= len {
                return Err(TreeError::IndexOutOfRange { index, len });
            }
        }
        children.swap(a, b);
        Ok(())
    }

    /// Substitute `new` for `old` at `old`'s exact position under `owner`
    /// (container slot or decorator component), re-parenting both. `new` must
    /// be detached.
    pub fn replace_child(
        &mut self,
        owner: NodeId,
        old: NodeId,
        new: NodeId,
    ) -> Result<(), TreeError> {
        if self.node(new)?.parent.is_some() {
            return Err(TreeError::AlreadyAttached);
        }
        if self.is_ancestor_or_self(new, owner) {
            return Err(TreeError::CycleDetected);
        }
        self.relink_child(owner, old, new)?;
        self.node_mut(old)?.parent = None;
        self.node_mut(new)?.parent = Some(owner);
        Ok(())
    }

    /// Point `owner`'s reference at `new` instead of `old` without touching
    /// parent fields. Shared by `replace_child` and the decorator splices.
    fn relink_child(&mut self, owner: NodeId, old: NodeId, new: NodeId) -> Result<(), TreeError> {
        let kind = &mut self.node_mut(owner)?.kind;
        if let Some(children) = kind.children_mut() {
            let slot = children
                .iter_mut()
                .find(|id| **id == old)
                .ok_or(TreeError::ChildNotFound)?;
            *slot = new;
            Ok(())
        } else if let Some(component) = kind.component_mut() {
            if *component != old {
                return Err(TreeError::ChildNotFound);
            }
            *component = new;
            Ok(())
        } else {
            Err(TreeError::NotAContainer)
        }
    }

    /// Remove a node from its structural position.
    ///
    /// For a decorator this splices it out: the component takes its place and
    /// is returned, and the decorator node itself is dropped from the arena.
    /// For any other node it is popped from its parent container and returned
    /// as a detached fragment; detaching the direct component of a decorator
    /// is rejected, since it would leave the decorator childless.
    pub fn detach(&mut self, id: NodeId) -> Result<NodeId, TreeError> {
        if let Some(component) = self.node(id)?.kind.component() {
            self.splice_out_decorator(id, component)?;
            return Ok(component);
        }

        match self.node(id)?.parent {
            None => Ok(id),
            Some(parent) => {
                if self.node(parent)?.kind.is_decorator() {
                    return Err(TreeError::WouldOrphanDecorator);
                }
                self.remove(parent, id)?;
                Ok(id)
            }
        }
    }

    /// Unlink a decorator node, promoting its component into its position.
    /// The decorator is removed from the arena.
    fn splice_out_decorator(&mut self, decorator: NodeId, component: NodeId) -> Result<(), TreeError> {
        let parent = self.node(decorator)?.parent;

        self.node_mut(component)?.parent = parent;
        match parent {
            Some(parent) => self.relink_child(parent, decorator, component)?,
            None => {
                if decorator == self.root {
                    self.root = component;
                }
            }
        }
        self.arena.remove(decorator);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Decorator chain
    // ------------------------------------------------------------------

    /// Innermost non-decorator node reached by unwrapping `component` links.
    pub fn bottom_component(&self, id: NodeId) -> Result<NodeId, TreeError> {
        let mut cur = id;
        while let Some(component) = self.node(cur)?.kind.component() {
            cur = component;
        }
        Ok(cur)
    }

    /// The decorated structure of `id`: its bottom component followed by the
    /// decorator chain above it, innermost to outermost.
    pub fn decorated_structure(&self, id: NodeId) -> Result<Vec<NodeId>, TreeError> {
        let bottom = self.bottom_component(id)?;
        let mut structure = vec![bottom];
        let mut cur = self.node(bottom)?.parent;
        while let Some(at) = cur {
            let node = self.node(at)?;
            if !node.kind.is_decorator() {
                break;
            }
            structure.push(at);
            cur = node.parent;
        }
        Ok(structure)
    }

    /// Attach or replace a decorator above `id`'s existing chain.
    ///
    /// If the chain already holds a decorator of the same kind, that node
    /// takes the new payload in place. Otherwise a new decorator is pushed on
    /// top of the chain, taking over the outermost node's tree position.
    /// Returns the (possibly new) outermost node.
    pub fn decorate(&mut self, id: NodeId, decoration: Decoration) -> Result<NodeId, TreeError> {
        let structure = self.decorated_structure(id)?;
        let outermost = *structure.last().expect("structure is never empty");

        let existing = structure[1..].iter().copied().find(|&at| {
            self.get(at)
                .map(|node| node.kind.decorator_kind() == Some(decoration.kind()))
                .unwrap_or(false)
        });
        if let Some(existing) = existing {
            match (&mut self.node_mut(existing)?.kind, decoration) {
                (NodeKind::StyledFont { style, .. }, Decoration::StyledFont(new_style)) => {
                    *style = new_style;
                }
                (NodeKind::BoxMargin { margins, .. }, Decoration::BoxMargin(new_margins)) => {
                    *margins = new_margins;
                }
                _ => unreachable!("decorator kind checked above"),
            }
            return Ok(outermost);
        }

        let old_parent = self.node(outermost)?.parent;
        let kind = match decoration {
            Decoration::StyledFont(style) => NodeKind::StyledFont {
                component: outermost,
                style,
            },
            Decoration::BoxMargin(margins) => NodeKind::BoxMargin {
                component: outermost,
                margins,
            },
        };
        let decorator = self.alloc(kind);
        self.node_mut(decorator)?.parent = old_parent;
        self.node_mut(outermost)?.parent = Some(decorator);
        match old_parent {
            Some(parent) => self.relink_child(parent, outermost, decorator)?,
            None => {
                if outermost == self.root {
                    self.root = decorator;
                }
            }
        }
        Ok(decorator)
    }

    /// Remove the decorator of the given kind from `id`'s chain, returning
    /// the outermost node of what remains.
    pub fn undecorate(&mut self, id: NodeId, kind: DecoratorKind) -> Result<NodeId, TreeError> {
        let structure = self.decorated_structure(id)?;
        let target = structure[1..]
            .iter()
            .copied()
            .find(|&at| {
                self.get(at)
                    .map(|node| node.kind.decorator_kind() == Some(kind))
                    .unwrap_or(false)
            })
            .ok_or(TreeError::DecoratorNotFound(kind))?;
        let component = self
            .node(target)?
            .kind
            .component()
            .ok_or(TreeError::DecoratorNotFound(kind))?;
        self.splice_out_decorator(target, component)?;
        let remaining = self.decorated_structure(component)?;
        Ok(*remaining.last().expect("structure is never empty"))
    }

    // ------------------------------------------------------------------
    // Attributes and traversal
    // ------------------------------------------------------------------

    pub fn set_status(&mut self, id: NodeId, status: Status) -> Result<(), TreeError> {
        self.node_mut(id)?.status = status;
        Ok(())
    }

    pub fn set_label(&mut self, id: NodeId, label: impl Into<String>) -> Result<(), TreeError> {
        self.node_mut(id)?.label = label.into();
        Ok(())
    }

    /// Build a detached `Url` node carrying a text element's value and the
    /// given url. Works regardless of the source node's status; status
    /// suppression is a rendering concern, not a construction one.
    pub fn to_url_element(&mut self, id: NodeId, url: impl Into<String>) -> Result<NodeId, TreeError> {
        let value = match &self.node(id)?.kind {
            NodeKind::Text { value } => value.clone(),
            _ => return Err(TreeError::NotAText),
        };
        Ok(self.alloc(NodeKind::url(value, url)))
    }

    /// Depth-first, node-before-children traversal of the subtree at `id`.
    pub fn pre_order(&self, id: NodeId) -> PreOrder<'_> {
        PreOrder {
            tree: self,
            stack: vec![id],
        }
    }
}

impl Default for ContentTree {
    fn default() -> Self {
        Self::with_root(NodeKind::sequence())
    }
}

/// Iterator over a subtree in pre-order. Yields each reachable node exactly
/// once, parents strictly before their children/component.
pub struct PreOrder<'a> {
    tree: &'a ContentTree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        if let Some(node) = self.tree.get(id) {
            if let Some(children) = node.kind.children() {
                self.stack.extend(children.iter().rev());
            } else if let Some(component) = node.kind.component() {
                self.stack.push(component);
            }
        }
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::NodeDoc;
    use crate::node::{FontStyle, Margins};

    fn sample_line(tree: &mut ContentTree) -> (NodeId, Vec<NodeId>) {
        let line = tree.alloc(NodeKind::text_line());
        tree.insert(tree.root(), line, None).unwrap();
        let children: Vec<NodeId> = ["a", "b", "c"]
            .iter()
            .map(|value| {
                let id = tree.alloc(NodeKind::text(*value));
                tree.insert(line, id, None).unwrap();
                id
            })
            .collect();
        (line, children)
    }

    #[test]
    fn insert_appends_and_positions() {
        let mut tree = ContentTree::default();
        let (line, children) = sample_line(&mut tree);

        let x = tree.alloc(NodeKind::text("x"));
        tree.insert(line, x, Some(1)).unwrap();
        assert_eq!(
            tree.get(line).unwrap().kind.children().unwrap(),
            &[children[0], x, children[1], children[2]]
        );
        assert_eq!(tree.get(x).unwrap().parent, Some(line));
    }

    #[test]
    fn insert_rejects_attached_nodes_and_bad_indices() {
        let mut tree = ContentTree::default();
        let (line, children) = sample_line(&mut tree);

        assert_eq!(
            tree.insert(line, children[0], None),
            Err(TreeError::AlreadyAttached)
        );
        let x = tree.alloc(NodeKind::text("x"));
        assert_eq!(
            tree.insert(line, x, Some(9)),
            Err(TreeError::IndexOutOfRange { index: 9, len: 3 })
        );
    }

    #[test]
    fn insert_rejects_cycles() {
        let mut tree = ContentTree::default();
        let outer = tree.alloc(NodeKind::sequence());
        let inner = tree.alloc(NodeKind::sequence());
        tree.insert(outer, inner, None).unwrap();

        // outer is detached (parent None) but contains inner.
        assert_eq!(tree.insert(inner, outer, None), Err(TreeError::CycleDetected));
    }

    #[test]
    fn pop_at_is_inverse_of_insert() {
        let mut tree = ContentTree::default();
        let (line, children) = sample_line(&mut tree);

        let x = tree.alloc(NodeKind::text("x"));
        let before = NodeDoc::from_tree(&tree, line).unwrap();
        tree.insert(line, x, Some(1)).unwrap();
        let popped = tree.pop_at(line, 1).unwrap();

        assert_eq!(popped, x);
        assert_eq!(tree.get(popped).unwrap().parent, None);
        assert_eq!(NodeDoc::from_tree(&tree, line).unwrap(), before);
        assert_eq!(
            tree.get(line).unwrap().kind.children().unwrap(),
            &children[..]
        );
    }

    #[test]
    fn swap_same_index_is_noop() {
        let mut tree = ContentTree::default();
        let (line, children) = sample_line(&mut tree);

        tree.swap(line, 1, 1).unwrap();
        assert_eq!(
            tree.get(line).unwrap().kind.children().unwrap(),
            &children[..]
        );

        tree.swap(line, 0, 2).unwrap();
        assert_eq!(
            tree.get(line).unwrap().kind.children().unwrap(),
            &[children[2], children[1], children[0]]
        );
    }

    #[test]
    fn swap_out_of_range_errors() {
        let mut tree = ContentTree::default();
        let (line, _) = sample_line(&mut tree);
        assert_eq!(
            tree.swap(line, 0, 3),
            Err(TreeError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn remove_foreign_node_errors() {
        let mut tree = ContentTree::default();
        let (line, _) = sample_line(&mut tree);
        let foreign = tree.alloc(NodeKind::text("foreign"));
        assert_eq!(tree.remove(line, foreign), Err(TreeError::ChildNotFound));
    }

    #[test]
    fn replace_child_substitutes_in_place() {
        let mut tree = ContentTree::default();
        let (line, children) = sample_line(&mut tree);

        let x = tree.alloc(NodeKind::text("x"));
        tree.replace_child(line, children[1], x).unwrap();
        assert_eq!(
            tree.get(line).unwrap().kind.children().unwrap(),
            &[children[0], x, children[2]]
        );
        assert_eq!(tree.get(x).unwrap().parent, Some(line));
        assert_eq!(tree.get(children[1]).unwrap().parent, None);
    }

    #[test]
    fn insert_clone_copies_before_original() {
        let mut tree = ContentTree::default();
        let (line, children) = sample_line(&mut tree);

        let clone = tree.insert_clone(line, 1).unwrap();
        let slots = tree.get(line).unwrap().kind.children().unwrap().to_vec();
        assert_eq!(slots, vec![children[0], clone, children[1], children[2]]);
        assert_eq!(
            NodeDoc::from_tree(&tree, clone).unwrap(),
            NodeDoc::from_tree(&tree, children[1]).unwrap()
        );
        // Fresh identity, not an alias.
        assert_ne!(clone, children[1]);
    }

    #[test]
    fn pre_order_visits_each_node_once_parent_first() {
        let mut tree = ContentTree::default();
        let (line, children) = sample_line(&mut tree);
        tree.decorate(children[0], Decoration::StyledFont(FontStyle::bold()))
            .unwrap();

        let order: Vec<NodeId> = tree.pre_order(tree.root()).collect();
        assert_eq!(order.len(), tree.len());
        for (pos, &id) in order.iter().enumerate() {
            assert_eq!(order.iter().filter(|&&other| other == id).count(), 1);
            if let Some(parent) = tree.get(id).unwrap().parent {
                assert!(order.iter().position(|&p| p == parent).unwrap() < pos);
            }
        }
        assert_eq!(order[0], tree.root());
        assert!(order.contains(&line));
    }

    #[test]
    fn decorate_pushes_above_chain() {
        let mut tree = ContentTree::default();
        let (line, children) = sample_line(&mut tree);

        let font = tree
            .decorate(children[1], Decoration::StyledFont(FontStyle::bold()))
            .unwrap();
        // The decorator takes the child's slot in the container.
        assert!(tree
            .get(line)
            .unwrap()
            .kind
            .children()
            .unwrap()
            .contains(&font));
        assert_eq!(tree.get(font).unwrap().parent, Some(line));
        assert_eq!(tree.get(children[1]).unwrap().parent, Some(font));

        let margin = tree
            .decorate(children[1], Decoration::BoxMargin(Margins::default()))
            .unwrap();
        assert_eq!(
            tree.decorated_structure(children[1]).unwrap(),
            vec![children[1], font, margin]
        );
        assert_eq!(tree.get(margin).unwrap().parent, Some(line));
    }

    #[test]
    fn decorate_same_kind_replaces_in_place() {
        let mut tree = ContentTree::default();
        let (_, children) = sample_line(&mut tree);

        tree.decorate(children[0], Decoration::StyledFont(FontStyle::bold()))
            .unwrap();
        let before = tree.decorated_structure(children[0]).unwrap();

        let replacement = FontStyle {
            italic: true,
            ..FontStyle::default()
        };
        tree.decorate(children[0], Decoration::StyledFont(replacement.clone()))
            .unwrap();
        let after = tree.decorated_structure(children[0]).unwrap();

        // Idempotent: still exactly one StyledFont, second payload wins.
        assert_eq!(before, after);
        match &tree.get(after[1]).unwrap().kind {
            NodeKind::StyledFont { style, .. } => assert_eq!(style, &replacement),
            other => panic!("expected StyledFont, got {other:?}"),
        }
    }

    #[test]
    fn decorating_the_root_moves_the_root() {
        let mut tree = ContentTree::default();
        let old_root = tree.root();
        let new_root = tree
            .decorate(old_root, Decoration::BoxMargin(Margins::default()))
            .unwrap();
        assert_eq!(tree.root(), new_root);
        assert_eq!(tree.get(old_root).unwrap().parent, Some(new_root));
    }

    #[test]
    fn bottom_component_unwraps_full_chain() {
        let mut tree = ContentTree::default();
        let (_, children) = sample_line(&mut tree);
        let outer = tree
            .decorate(children[2], Decoration::StyledFont(FontStyle::bold()))
            .unwrap();
        let outer = tree
            .decorate(outer, Decoration::BoxMargin(Margins::default()))
            .unwrap();

        assert_eq!(tree.bottom_component(outer).unwrap(), children[2]);
        let structure = tree.decorated_structure(outer).unwrap();
        assert_eq!(structure[0], tree.bottom_component(structure[0]).unwrap());
        assert_eq!(structure.len(), 3);
    }

    #[test]
    fn undecorate_splices_chain() {
        let mut tree = ContentTree::default();
        let (line, children) = sample_line(&mut tree);
        let font = tree
            .decorate(children[0], Decoration::StyledFont(FontStyle::bold()))
            .unwrap();
        let margin = tree
            .decorate(children[0], Decoration::BoxMargin(Margins::default()))
            .unwrap();

        let outermost = tree
            .undecorate(children[0], DecoratorKind::StyledFont)
            .unwrap();
        assert_eq!(outermost, margin);
        assert!(!tree.contains(font));
        assert_eq!(
            tree.decorated_structure(children[0]).unwrap(),
            vec![children[0], margin]
        );
        assert!(tree
            .get(line)
            .unwrap()
            .kind
            .children()
            .unwrap()
            .contains(&margin));

        assert_eq!(
            tree.undecorate(children[0], DecoratorKind::StyledFont),
            Err(TreeError::DecoratorNotFound(DecoratorKind::StyledFont))
        );
    }

    #[test]
    fn detach_decorator_returns_component() {
        let mut tree = ContentTree::default();
        let (line, children) = sample_line(&mut tree);
        let font = tree
            .decorate(children[1], Decoration::StyledFont(FontStyle::bold()))
            .unwrap();

        let component = tree.detach(font).unwrap();
        assert_eq!(component, children[1]);
        assert_eq!(tree.get(children[1]).unwrap().parent, Some(line));
        assert!(!tree.contains(font));
    }

    #[test]
    fn detach_component_of_decorator_is_rejected() {
        let mut tree = ContentTree::default();
        let (_, children) = sample_line(&mut tree);
        tree.decorate(children[1], Decoration::StyledFont(FontStyle::bold()))
            .unwrap();
        assert_eq!(
            tree.detach(children[1]),
            Err(TreeError::WouldOrphanDecorator)
        );
    }

    #[test]
    fn release_drops_detached_subtree() {
        let mut tree = ContentTree::default();
        let (line, children) = sample_line(&mut tree);
        assert_eq!(tree.release(line), Err(TreeError::StillAttached));

        let popped = tree.pop_at(tree.root(), 0).unwrap();
        assert_eq!(popped, line);
        let count = tree.len();
        tree.release(line).unwrap();
        assert_eq!(tree.len(), count - 4);
        assert!(!tree.contains(children[0]));
    }

    #[test]
    fn to_url_element_ignores_status() {
        let mut tree = ContentTree::default();
        let text = tree.alloc(NodeKind::text("profile"));
        tree.set_status(text, Status::Disabled).unwrap();

        let url = tree.to_url_element(text, "https://example.com").unwrap();
        match &tree.get(url).unwrap().kind {
            NodeKind::Url { value, url } => {
                assert_eq!(value, "profile");
                assert_eq!(url, "https://example.com");
            }
            other => panic!("expected Url, got {other:?}"),
        }

        let hline = tree.alloc(NodeKind::HLine);
        assert_eq!(
            tree.to_url_element(hline, "https://example.com"),
            Err(TreeError::NotAText)
        );
    }
}
