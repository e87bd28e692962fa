pub struct Helpers {}

impl Helpers {
    /// # check for a shared element
    /// true if any element of `a` is also in `b`
    ///
    /// ## Arguments
    /// * `a` - The first slice
    /// * `b` - The second slice
    ///
    /// ## Returns
    /// * 'bool' - if the two slices have at least one element in common
    pub fn any_shared<T: PartialEq>(a: &[T], b: &[T]) -> bool {
        a.iter().any(|x| b.contains(x))
    }
}
