/// # Call stack
/// Return addresses pushed by CALL and popped by RET.
///
/// There is no depth limit; a program that recurses forever will grow it
/// forever.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallStack {
    addresses: Vec<u16>,
}

impl CallStack {
    pub fn new() -> Self {
        CallStack {
            addresses: Vec::with_capacity(16),
        }
    }

    /// Always succeeds.
    pub fn push(&mut self, addr: u16) -> bool {
        self.addresses.push(addr);
        true
    }

    pub fn pop(&mut self) -> Option<u16> {
        self.addresses.pop()
    }

    pub fn peek(&self) -> Option<u16> {
        self.addresses.last().copied()
    }

    pub fn clear(&mut self) {
        self.addresses.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }
}
