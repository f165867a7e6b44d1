//! Mapping population elements to their objective vectors.
//!
//! Sorting and indicators never look at elements directly; they ask a
//! [`FitnessExtractor`] for the objective vector of each element. Use
//! [`Identity`] when the elements already are vectors, or [`from_fn`] when
//! they carry more than their objectives (a genotype, a label, ...).

/// Maps an element of type `T` to its objective vector.
///
/// The returned slice borrows from the element, so extraction never copies.
pub trait FitnessExtractor<T: ?Sized> {
    /// Returns the objective vector of `element`.
    fn extract<'a>(&self, element: &'a T) -> &'a [f64];
}

/// Extractor for elements that are objective vectors themselves.
///
/// ```
/// use u_moeval::extract::{FitnessExtractor, Identity};
///
/// let v = vec![1.0, 2.0];
/// assert_eq!(Identity.extract(&v), &[1.0, 2.0]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl<T: AsRef<[f64]> + ?Sized> FitnessExtractor<T> for Identity {
    #[inline]
    fn extract<'a>(&self, element: &'a T) -> &'a [f64] {
        element.as_ref()
    }
}

/// Extractor backed by a closure. Built with [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnExtractor<F> {
    f: F,
}

impl<F> std::fmt::Debug for FnExtractor<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnExtractor").finish_non_exhaustive()
    }
}

impl<T: ?Sized, F> FitnessExtractor<T> for FnExtractor<F>
where
    F: for<'a> Fn(&'a T) -> &'a [f64],
{
    #[inline]
    fn extract<'a>(&self, element: &'a T) -> &'a [f64] {
        (self.f)(element)
    }
}

/// Wraps a closure as a [`FitnessExtractor`].
///
/// ```
/// use u_moeval::extract::{from_fn, FitnessExtractor};
///
/// struct Evaluated {
///     genes: Vec<f64>,
///     objectives: Vec<f64>,
/// }
///
/// let e = Evaluated { genes: vec![0.3], objectives: vec![1.0, 4.0] };
/// let by_objectives = from_fn(|e: &Evaluated| e.objectives.as_slice());
/// assert_eq!(by_objectives.extract(&e), &[1.0, 4.0]);
/// ```
pub fn from_fn<T: ?Sized, F>(f: F) -> FnExtractor<F>
where
    F: for<'a> Fn(&'a T) -> &'a [f64],
{
    FnExtractor { f }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tagged {
        tag: &'static str,
        fitness: [f64; 3],
    }

    #[test]
    fn test_identity_vec_and_array() {
        let v = vec![3.0, 1.0];
        let a = [0.5, 0.25, 0.125];
        assert_eq!(Identity.extract(&v), &[3.0, 1.0]);
        assert_eq!(Identity.extract(&a), &[0.5, 0.25, 0.125]);
    }

    #[test]
    fn test_closure_extractor() {
        let t = Tagged {
            tag: "x",
            fitness: [1.0, 2.0, 3.0],
        };
        let ex = from_fn(|t: &Tagged| &t.fitness[..]);
        assert_eq!(ex.extract(&t), &[1.0, 2.0, 3.0]);
        assert_eq!(t.tag, "x");
    }
}
