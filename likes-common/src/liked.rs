use crate::catalog::Identified;

/// Remove `item` from `items` if an entry with its id is present, otherwise
/// append it. Returns whether the item is liked afterwards.
pub fn toggle_liked<T: Identified>(items: &mut Vec<T>, item: T) -> bool {
    if let Some(pos) = items.iter().position(|existing| existing.id() == item.id()) {
        items.remove(pos);
        false
    } else {
        items.push(item);
        true
    }
}
