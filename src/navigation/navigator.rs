use crate::common::debug;
use crate::core::{SessionChanges, SessionStore};
use crate::error::NavigationError;
use crate::navigation::{select_tree, NavigationTree, Screen};

/// Screen stack of one rendering layer.
///
/// The active tree is always derived from the session store. The stack is
/// rebuilt from the tree's entry whenever the session cell has been replaced
/// since the stack was built, so a new session never resumes an old position.
pub struct Navigator {
    store: SessionStore,
    changes: SessionChanges,
    built_for: NavigationTree,
    stack: Vec<Screen>,
}

impl Navigator {
    pub fn new(store: SessionStore) -> Self {
        let changes = store.subscribe();
        let tree = select_tree(store.is_authenticated());
        Self {
            store,
            changes,
            built_for: tree,
            stack: vec![tree.entry()],
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn tree(&self) -> NavigationTree {
        select_tree(self.store.is_authenticated())
    }

    pub fn current(&self) -> Screen {
        let tree = self.tree();
        if self.is_stale(tree) {
            tree.entry()
        } else {
            self.stack.last().copied().unwrap_or_else(|| tree.entry())
        }
    }

    /// Re-run the gate. Returns true when history was discarded.
    pub fn sync(&mut self) -> bool {
        let tree = self.tree();
        if !self.is_stale(tree) {
            return false;
        }

        debug!(from=%self.built_for, to=%tree, dropped=self.stack.len(), "Reset navigation stack");
        self.changes.mark_seen();
        self.built_for = tree;
        self.stack.clear();
        self.stack.push(tree.entry());
        true
    }

    fn is_stale(&self, tree: NavigationTree) -> bool {
        tree != self.built_for || self.changes.has_changed()
    }

    /// Move to `screen` within the active tree. A screen already on the stack is
    /// returned to instead of pushed again.
    pub fn navigate(&mut self, screen: Screen) -> Result<(), NavigationError> {
        self.sync();

        if !self.built_for.contains(screen) {
            return Err(NavigationError::OutsideActiveTree {
                screen,
                tree: self.built_for,
            });
        }

        match self.stack.iter().position(|s| *s == screen) {
            Some(pos) => self.stack.truncate(pos + 1),
            None => self.stack.push(screen),
        }
        Ok(())
    }

    pub fn back(&mut self) -> Result<Screen, NavigationError> {
        self.sync();

        if self.stack.len() <= 1 {
            return Err(NavigationError::AtEntry {
                screen: self.current(),
            });
        }
        self.stack.pop();
        Ok(self.current())
    }

    pub fn history(&mut self) -> &[Screen] {
        self.sync();
        &self.stack
    }
}
