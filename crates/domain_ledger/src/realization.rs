//! Account realization
//!
//! Builds the account hierarchy from a flat list of directives. Every
//! account named by a directive gets a node, as do all of its ancestors, and
//! each directive is attached to the node of the exact account it names (never
//! to descendants or ancestors).
//!
//! Nodes live in an arena and are addressed by [`NodeId`]. The tree borrows
//! the entries it was built from and is meant to be discarded after use.

use std::collections::BTreeMap;

use tracing::debug;

use core_kernel::Account;
use crate::directive::{Directive, DirectiveKind, Posting};

/// Index of a node in a [`Realization`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The synthetic root node
    pub const ROOT: NodeId = NodeId(0);
}

/// Something attached directly to an account node
#[derive(Debug, Clone, Copy)]
pub enum RealPosting<'a> {
    /// One posting of a transaction, together with its transaction
    Posting {
        entry: &'a Directive,
        posting: &'a Posting,
    },
    /// A non-transaction directive (open, close, pad, balance, note, document)
    Entry(&'a Directive),
}

impl<'a> RealPosting<'a> {
    /// The directive this item came from
    pub fn entry(&self) -> &'a Directive {
        match self {
            RealPosting::Posting { entry, .. } => entry,
            RealPosting::Entry(entry) => entry,
        }
    }
}

/// A node of the account hierarchy
#[derive(Debug)]
pub struct RealAccount<'a> {
    account: Option<Account>,
    children: BTreeMap<String, NodeId>,
    postings: Vec<RealPosting<'a>>,
}

impl<'a> RealAccount<'a> {
    fn new(account: Option<Account>) -> Self {
        Self {
            account,
            children: BTreeMap::new(),
            postings: Vec::new(),
        }
    }

    /// The account path, or None for the root
    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    /// Number of direct children
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if the node has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// A leaf account has no child accounts
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Directives and postings attached directly to this account
    pub fn postings(&self) -> &[RealPosting<'a>] {
        &self.postings
    }

    /// Child node ids, sorted by component name
    pub fn child_ids(&self) -> impl DoubleEndedIterator<Item = NodeId> + '_ {
        self.children.values().copied()
    }
}

/// The realized account tree
#[derive(Debug)]
pub struct Realization<'a> {
    nodes: Vec<RealAccount<'a>>,
}

impl<'a> Default for Realization<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Realization<'a> {
    /// Creates a tree holding only the synthetic root
    pub fn new() -> Self {
        Self {
            nodes: vec![RealAccount::new(None)],
        }
    }

    /// The synthetic root
    pub fn root(&self) -> &RealAccount<'a> {
        &self.nodes[NodeId::ROOT.0]
    }

    /// Looks up a node by id
    pub fn node(&self, id: NodeId) -> &RealAccount<'a> {
        &self.nodes[id.0]
    }

    /// Number of account nodes, excluding the root
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Returns true if no account was realized
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Finds the node for an account path
    pub fn get(&self, account: &Account) -> Option<&RealAccount<'a>> {
        let mut current = self.root();
        for component in account.components() {
            let id = current.children.get(component)?;
            current = self.node(*id);
        }
        Some(current)
    }

    /// Direct children of a node, sorted by component name
    pub fn children<'r>(
        &'r self,
        node: &'r RealAccount<'a>,
    ) -> impl Iterator<Item = &'r RealAccount<'a>> + 'r {
        node.child_ids().map(move |id| self.node(id))
    }

    /// Walks every account depth-first in pre-order, excluding the root
    pub fn iter(&self) -> Iter<'_, 'a> {
        let mut stack: Vec<NodeId> = self.root().child_ids().collect();
        stack.reverse();
        Iter { tree: self, stack }
    }

    /// Attaches an item to the node for `account`, creating the path as needed
    pub fn attach(&mut self, account: &Account, posting: RealPosting<'a>) {
        let id = self.get_or_create(account);
        self.nodes[id.0].postings.push(posting);
    }

    /// Returns the node for `account`, creating it and any missing ancestors
    pub fn get_or_create(&mut self, account: &Account) -> NodeId {
        let mut path = account.ancestors();
        path.reverse();
        path.push(account.clone());

        let mut current = NodeId::ROOT;
        for prefix in path {
            let key = prefix.leaf_name().to_string();
            current = match self.nodes[current.0].children.get(&key) {
                Some(id) => *id,
                None => {
                    let id = NodeId(self.nodes.len());
                    self.nodes.push(RealAccount::new(Some(prefix)));
                    self.nodes[current.0].children.insert(key, id);
                    id
                }
            };
        }
        current
    }
}

/// Pre-order iterator over a [`Realization`]
pub struct Iter<'r, 'a> {
    tree: &'r Realization<'a>,
    stack: Vec<NodeId>,
}

impl<'r, 'a> Iterator for Iter<'r, 'a> {
    type Item = &'r RealAccount<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.node(id);
        self.stack.extend(node.child_ids().rev());
        Some(node)
    }
}

/// Builds the account hierarchy for a list of entries
///
/// Transactions contribute one item per posting on that posting's account.
/// Pads are attached to both the padded account and the source account.
/// Every other directive is attached to the account it names.
pub fn realize(entries: &[Directive]) -> Realization<'_> {
    let mut tree = Realization::new();

    for entry in entries {
        match &entry.kind {
            DirectiveKind::Transaction(txn) => {
                for posting in &txn.postings {
                    tree.attach(&posting.account, RealPosting::Posting { entry, posting });
                }
            }
            DirectiveKind::Pad(pad) => {
                tree.attach(&pad.account, RealPosting::Entry(entry));
                tree.attach(&pad.source_account, RealPosting::Entry(entry));
            }
            DirectiveKind::Open(_)
            | DirectiveKind::Close(_)
            | DirectiveKind::Balance(_)
            | DirectiveKind::Note(_)
            | DirectiveKind::Document(_) => {
                for account in entry.accounts() {
                    tree.attach(account, RealPosting::Entry(entry));
                }
            }
        }
    }

    debug!(entries = entries.len(), accounts = tree.len(), "Realized account tree");
    tree
}
