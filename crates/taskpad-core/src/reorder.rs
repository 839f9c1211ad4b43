/// Moves the element at `from` so that it lands at `to`, measured against
/// the sequence before removal: remove, then insert at `to`.
///
/// Out-of-range indices and `from == to` leave the slice untouched and
/// return `false`.
pub fn move_to<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= items.len() || to >= items.len() {
        return false;
    }
    let moved = items.remove(from);
    items.insert(to, moved);
    true
}

#[cfg(test)]
mod tests {
    use super::move_to;

    fn abcd() -> Vec<char> {
        vec!['A', 'B', 'C', 'D']
    }

    #[test]
    fn forward_move_lands_after_target() {
        let mut items = abcd();
        assert!(move_to(&mut items, 0, 2));
        assert_eq!(items, vec!['B', 'C', 'A', 'D']);
    }

    #[test]
    fn forward_move_to_end() {
        let mut items = abcd();
        assert!(move_to(&mut items, 1, 3));
        assert_eq!(items, vec!['A', 'C', 'D', 'B']);
    }

    #[test]
    fn backward_move_lands_before_target() {
        let mut items = abcd();
        assert!(move_to(&mut items, 3, 1));
        assert_eq!(items, vec!['A', 'D', 'B', 'C']);
    }

    #[test]
    fn backward_move_to_front() {
        let mut items = abcd();
        assert!(move_to(&mut items, 2, 0));
        assert_eq!(items, vec!['C', 'A', 'B', 'D']);
    }

    #[test]
    fn adjacent_moves_swap_neighbours() {
        let mut items = abcd();
        assert!(move_to(&mut items, 1, 2));
        assert_eq!(items, vec!['A', 'C', 'B', 'D']);
        assert!(move_to(&mut items, 2, 1));
        assert_eq!(items, abcd());
    }

    #[test]
    fn same_index_and_out_of_range_are_noops() {
        let mut items = abcd();
        assert!(!move_to(&mut items, 2, 2));
        assert!(!move_to(&mut items, 4, 0));
        assert!(!move_to(&mut items, 0, 9));
        assert_eq!(items, abcd());
    }
}
