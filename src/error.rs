use quick_error::quick_error;

quick_error! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Error {
        EmptyHeap {
            display("Heap is empty")
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn empty_heap_display() {
        assert_eq!(Error::EmptyHeap.to_string(), "Heap is empty");
    }
}
