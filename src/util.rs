/// Converts a caller-supplied count, returning `None` if it is negative or too large.
pub fn to_usize<T>(x: T) -> Option<usize>
where
    T: TryInto<usize>,
{
    x.try_into().ok()
}
