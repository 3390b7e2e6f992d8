use crate::{
    errors::GadgetListError,
    gadget::Gadget,
    node::{Link, Node},
    weekday::Weekday,
};
use log::{debug, warn};

/// A singly-linked list of gadgets, kept in insertion order.
#[derive(Debug, Default)]
pub struct GadgetList {
    head: Link,
    len: usize,
}

/// Iterator over gadgets from head to tail.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    next: Option<&'a Node>,
    remaining: usize,
}

impl GadgetList {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Number of gadgets. O(1).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Is the list empty?
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Push a gadget to the back. Walks the whole list.
    pub fn append(&mut self, gadget: Gadget) {
        debug!("appending {:?} at position {}", gadget.name(), self.len);
        let node = Node::detached(gadget);
        match self.tail_mut() {
            Some(tail) => tail.next = Some(node),
            None => self.head = Some(node),
        }
        self.len += 1;
    }

    /// Insert a gadget so that it ends up at index `position`.
    ///
    /// `position == len()` appends. Anything larger is rejected and the list
    /// is left untouched.
    pub fn insert_at(&mut self, position: usize, gadget: Gadget) -> Result<(), GadgetListError> {
        let len = self.len;
        let Some(link) = self.link_at_mut(position) else {
            warn!("rejecting insert of {:?} at {position}, len is {len}", gadget.name());
            return Err(GadgetListError::OutOfRange { position, len });
        };

        debug!("inserting {:?} at position {position}", gadget.name());
        let mut node = Node::detached(gadget);
        node.next = link.take();
        *link = Some(node);
        self.len += 1;
        Ok(())
    }

    /// Unlink the first gadget called `name` and hand it back.
    pub fn take_by_name(&mut self, name: &str) -> Result<Gadget, GadgetListError> {
        if let Some(mut head) = self.head.take_if(|head| head.gadget.name() == name) {
            self.head = head.next.take();
            self.len -= 1;
            debug!("removed {name:?} from the head");
            return Ok(head.gadget);
        }

        // Trailing cursor: `prev.next` is the candidate.
        let mut cursor = self.head.as_deref_mut();
        while let Some(prev) = cursor {
            if let Some(mut removed) = prev.next.take_if(|next| next.gadget.name() == name) {
                prev.next = removed.next.take();
                self.len -= 1;
                debug!("removed {name:?}");
                return Ok(removed.gadget);
            }
            cursor = prev.next.as_deref_mut();
        }

        debug!("no gadget named {name:?}");
        Err(GadgetListError::NotFound {
            name: name.to_owned(),
        })
    }

    /// Remove the first gadget called `name`. Returns whether one was removed.
    pub fn remove_by_name(&mut self, name: &str) -> bool {
        self.take_by_name(name).is_ok()
    }

    /// First gadget called `name`, if any.
    pub fn find_by_name(&self, name: &str) -> Option<&Gadget> {
        self.iter().find(|gadget| gadget.name() == name)
    }

    /// Reverse the links in place.
    pub fn reverse(&mut self) {
        let mut reversed: Link = None;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }
        self.head = reversed;
        debug!("reversed {} gadgets", self.len);
    }

    /// Drop every gadget.
    pub fn clear(&mut self) {
        // Unlink one node at a time so long lists do not recurse in `Drop`.
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
        if self.len > 0 {
            debug!("cleared {} gadgets", self.len);
        }
        self.len = 0;
    }

    /// Iterate gadgets from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// Gadgets carried on `day`, in list order.
    pub fn carried_on(&self, day: Weekday) -> impl Iterator<Item = &Gadget> + '_ {
        self.iter().filter(move |gadget| gadget.is_carried_on(day))
    }

    /// The link that index `position` hangs off, if the list reaches that far.
    fn link_at_mut(&mut self, position: usize) -> Option<&mut Link> {
        match position.checked_sub(1) {
            None => Some(&mut self.head),
            Some(index) => self.node_at_mut(index).map(|prev| &mut prev.next),
        }
    }

    fn node_at_mut(&mut self, index: usize) -> Option<&mut Node> {
        let mut node = self.head.as_deref_mut()?;
        for _ in 0..index {
            node = node.next.as_deref_mut()?;
        }
        Some(node)
    }

    fn tail_mut(&mut self) -> Option<&mut Node> {
        let mut node = self.head.as_deref_mut()?;
        while node.next.is_some() {
            node = node.next.as_deref_mut()?;
        }
        Some(node)
    }
}

impl Drop for GadgetList {
    fn drop(&mut self) {
        self.clear();
    }
}

impl FromIterator<Gadget> for GadgetList {
    fn from_iter<I: IntoIterator<Item = Gadget>>(iter: I) -> Self {
        let mut list = GadgetList::new();
        list.extend(iter);
        list
    }
}

impl Extend<Gadget> for GadgetList {
    fn extend<I: IntoIterator<Item = Gadget>>(&mut self, iter: I) {
        for gadget in iter {
            self.append(gadget);
        }
    }
}

impl<'a> IntoIterator for &'a GadgetList {
    type Item = &'a Gadget;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Gadget;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.gadget)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
