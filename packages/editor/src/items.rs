//! Index-checked edits on an ordered item sequence.
//!
//! Insert positions accept `0..=len`; references to an existing item accept
//! `0..len`. Both fail with [`ConfigError::OutOfRange`] otherwise.

use lovelace_config::{ConfigError, ConfigResult};

pub(crate) fn check_index(index: usize, len: usize) -> ConfigResult<()> {
    if index < len {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { index, len })
    }
}

pub(crate) fn get_at<T: Clone>(items: &[T], index: usize) -> ConfigResult<T> {
    check_index(index, items.len())?;
    Ok(items[index].clone())
}

pub(crate) fn insert_at<T>(items: &mut Vec<T>, index: usize, item: T) -> ConfigResult<()> {
    if index > items.len() {
        return Err(ConfigError::OutOfRange {
            index,
            len: items.len(),
        });
    }
    items.insert(index, item);
    Ok(())
}

pub(crate) fn remove_at<T>(items: &mut Vec<T>, index: usize) -> ConfigResult<T> {
    check_index(index, items.len())?;
    Ok(items.remove(index))
}

pub(crate) fn replace_at<T>(items: &mut [T], index: usize, item: T) -> ConfigResult<T> {
    check_index(index, items.len())?;
    Ok(std::mem::replace(&mut items[index], item))
}

/// Move the item at `from` so that it ends up at position `to` of the
/// resulting sequence.
pub(crate) fn move_to_index<T>(items: &mut Vec<T>, from: usize, to: usize) -> ConfigResult<()> {
    check_index(from, items.len())?;
    check_index(to, items.len())?;
    let item = items.remove(from);
    items.insert(to, item);
    Ok(())
}

pub(crate) fn swap<T>(items: &mut [T], a: usize, b: usize) -> ConfigResult<()> {
    check_index(a, items.len())?;
    check_index(b, items.len())?;
    items.swap(a, b);
    Ok(())
}
