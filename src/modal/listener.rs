use crate::animation::RefName;

/// What a transition listener reports when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    /// The enter animation finished.
    Enter,
    /// The exit animation finished; the modal unmounts.
    Leave,
}

/// One-shot subscription to the end of an animation on a single node.
///
/// Only events that originate on the node itself are accepted; events that
/// bubble up from descendants are ignored. After the first accepted event the
/// listener is spent and accepts nothing more.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionListener {
    node: RefName,
    completion: Completion,
    spent: bool,
}

impl TransitionListener {
    pub fn new(node: RefName, completion: Completion) -> Self {
        Self {
            node,
            completion,
            spent: false,
        }
    }

    pub fn node(&self) -> RefName {
        self.node
    }

    pub fn completion(&self) -> Completion {
        self.completion
    }

    pub fn is_spent(&self) -> bool {
        self.spent
    }

    /// `origin` is the node the event was fired on, `None` when it came from
    /// a node the modal does not track.
    pub fn accept(&mut self, origin: Option<RefName>) -> Option<Completion> {
        if self.spent || origin != Some(self.node) {
            return None;
        }
        self.spent = true;
        Some(self.completion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once() {
        let mut listener = TransitionListener::new(RefName::Content, Completion::Leave);

        assert_eq!(listener.accept(Some(RefName::Content)), Some(Completion::Leave));
        assert!(listener.is_spent());
        assert_eq!(listener.accept(Some(RefName::Content)), None);
    }

    #[test]
    fn test_ignores_other_origins() {
        let mut listener = TransitionListener::new(RefName::Content, Completion::Enter);

        assert_eq!(listener.accept(None), None);
        assert_eq!(listener.accept(Some(RefName::Modal)), None);
        assert!(!listener.is_spent());
        assert_eq!(listener.accept(Some(RefName::Content)), Some(Completion::Enter));
    }
}
