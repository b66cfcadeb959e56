use crate::NodeId;
use std::fmt::{Display, Error, Formatter};

impl From<usize> for NodeId {
    fn from(val: usize) -> Self {
        NodeId(val)
    }
}

impl From<NodeId> for usize {
    fn from(value: NodeId) -> Self {
        value.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "RbnNode({})", self.0)
    }
}

impl NodeId {
    /// The position of this node in the node-index order of its network.
    pub fn to_index(self) -> usize {
        self.0
    }
}
