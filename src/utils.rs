// Every helper tolerates `capacity == 0` so callers never compute `x % 0`.

#[inline]
pub fn wrap_add(index: usize, addend: usize, capacity: usize) -> usize {
    if capacity == 0 {
        return 0;
    }
    debug_assert!(index < capacity);
    (index + addend % capacity) % capacity
}

#[inline]
pub fn wrap_sub(index: usize, subtrahend: usize, capacity: usize) -> usize {
    if capacity == 0 {
        return 0;
    }
    debug_assert!(index < capacity);
    (index + capacity - subtrahend % capacity) % capacity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_wraps() {
        assert_eq!(wrap_add(0, 0, 3), 0);
        assert_eq!(wrap_add(1, 1, 3), 2);
        assert_eq!(wrap_add(2, 1, 3), 0);
        assert_eq!(wrap_add(2, 7, 3), 0);
        assert_eq!(wrap_add(1, usize::MAX, 4), 0);
    }

    #[test]
    fn sub_wraps() {
        assert_eq!(wrap_sub(0, 1, 3), 2);
        assert_eq!(wrap_sub(2, 1, 3), 1);
        assert_eq!(wrap_sub(1, 5, 3), 2);
    }

    #[test]
    fn zero_capacity() {
        assert_eq!(wrap_add(0, 5, 0), 0);
        assert_eq!(wrap_sub(0, 1, 0), 0);
    }
}
