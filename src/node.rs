use crate::gadget::Gadget;

pub(crate) type Link = Option<Box<Node>>;

#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) gadget: Gadget,
    pub(crate) next: Link,
}

impl Node {
    /// Boxed node that is not yet linked to anything.
    pub(crate) fn detached(gadget: Gadget) -> Box<Self> {
        Box::new(Node { gadget, next: None })
    }
}
