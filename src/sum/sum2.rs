#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An algebraic sum of two payload types.
///
/// A `Sum2<T1, T2>` carries a single value which is either a `T1` or a `T2`.
/// The enum tag is the discriminant, so exactly one slot is ever populated
/// and no invalid discriminant can be constructed.
///
/// Instances are immutable: every operation either borrows the payload or
/// consumes the sum and produces a new value.
///
/// # Construction
///
/// Construction is explicit through the variants (or through
/// [`From<Result>`]). There is no blanket conversion from a bare payload:
/// for `Sum2<T, T>` both slots hold the same type and such a conversion
/// would be ambiguous.
///
/// # Examples
///
/// ```
/// use sum_rail::Sum2;
///
/// let width: Sum2<u32, String> = Sum2::First(640);
/// let label: Sum2<u32, String> = Sum2::Second("wide".to_owned());
///
/// assert_eq!(width.reduce(|n| n.to_string(), |s| s), "640");
/// assert_eq!(label.reduce(|n| n.to_string(), |s| s), "wide");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Sum2<T1, T2> {
    First(T1),
    Second(T2),
}

impl<T1, T2> Sum2<T1, T2> {
    /// Returns `true` if the first slot is populated.
    ///
    /// # Examples
    ///
    /// ```
    /// use sum_rail::Sum2;
    ///
    /// let sum: Sum2<i32, &str> = Sum2::First(1);
    /// assert!(sum.is_first());
    /// assert!(!sum.is_second());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_first(&self) -> bool {
        matches!(self, Self::First(_))
    }

    /// Returns `true` if the second slot is populated.
    #[must_use]
    #[inline]
    pub fn is_second(&self) -> bool {
        matches!(self, Self::Second(_))
    }

    /// Side-effecting pattern match: runs exactly the action whose slot is
    /// populated, passing a reference to the payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::cell::Cell;
    /// use sum_rail::Sum2;
    ///
    /// let seen = Cell::new(None);
    /// let sum: Sum2<i32, &str> = Sum2::Second("oops");
    /// sum.visit(|n| seen.set(Some(n.to_string())), |s| seen.set(Some(s.to_string())));
    /// assert_eq!(seen.into_inner().as_deref(), Some("oops"));
    /// ```
    #[inline]
    pub fn visit<F1, F2>(&self, on_first: F1, on_second: F2)
    where
        F1: FnOnce(&T1),
        F2: FnOnce(&T2),
    {
        match self {
            Self::First(first) => on_first(first),
            Self::Second(second) => on_second(second),
        }
    }

    /// Collapses the sum into a single value.
    ///
    /// This is the eliminator every other operation derives from: the mapper
    /// for the populated slot runs and its return value is the result. Both
    /// mappers must return the same type.
    ///
    /// # Examples
    ///
    /// ```
    /// use sum_rail::Sum2;
    ///
    /// let sum: Sum2<i32, &str> = Sum2::First(21);
    /// assert_eq!(sum.reduce(|n| n * 2, |s| s.len() as i32), 42);
    /// ```
    #[inline]
    pub fn reduce<R, F1, F2>(self, on_first: F1, on_second: F2) -> R
    where
        F1: FnOnce(T1) -> R,
        F2: FnOnce(T2) -> R,
    {
        match self {
            Self::First(first) => on_first(first),
            Self::Second(second) => on_second(second),
        }
    }

    /// Re-types both slots in one call, transforming the held payload.
    ///
    /// The discriminant is preserved; only the mapper for the populated slot
    /// runs, the other merely re-types its empty slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use sum_rail::Sum2;
    ///
    /// let sum: Sum2<i32, &str> = Sum2::First(2);
    /// let mapped: Sum2<String, usize> = sum.map(|n| n.to_string(), str::len);
    /// assert_eq!(mapped, Sum2::First("2".to_owned()));
    /// ```
    #[inline]
    pub fn map<U1, U2, F1, F2>(self, on_first: F1, on_second: F2) -> Sum2<U1, U2>
    where
        F1: FnOnce(T1) -> U1,
        F2: FnOnce(T2) -> U2,
    {
        self.reduce(|first| Sum2::First(on_first(first)), |second| Sum2::Second(on_second(second)))
    }

    /// [`map`](Self::map) with the identity on the second slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use sum_rail::Sum2;
    ///
    /// let sum: Sum2<i32, &str> = Sum2::First(20);
    /// assert_eq!(sum.map_first(|n| n + 1), Sum2::First(21));
    /// ```
    #[inline]
    pub fn map_first<U, F>(self, mapper: F) -> Sum2<U, T2>
    where
        F: FnOnce(T1) -> U,
    {
        self.map(mapper, |second| second)
    }

    /// [`map`](Self::map) with the identity on the first slot.
    #[inline]
    pub fn map_second<U, F>(self, mapper: F) -> Sum2<T1, U>
    where
        F: FnOnce(T2) -> U,
    {
        self.map(|first| first, mapper)
    }

    /// Borrows the first payload, if the first slot is populated.
    ///
    /// # Examples
    ///
    /// ```
    /// use sum_rail::Sum2;
    ///
    /// let sum: Sum2<i32, &str> = Sum2::First(7);
    /// assert_eq!(sum.as_first(), Some(&7));
    /// assert_eq!(sum.as_second(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn as_first(&self) -> Option<&T1> {
        match self {
            Self::First(first) => Some(first),
            Self::Second(_) => None,
        }
    }

    /// Borrows the second payload, if the second slot is populated.
    #[must_use]
    #[inline]
    pub fn as_second(&self) -> Option<&T2> {
        match self {
            Self::First(_) => None,
            Self::Second(second) => Some(second),
        }
    }

    /// Extracts the first payload, if the first slot is populated.
    ///
    /// This is the non-panicking probe; use [`unwrap_first`](Self::unwrap_first)
    /// when the slot is known to be populated.
    #[must_use]
    #[inline]
    pub fn into_first(self) -> Option<T1> {
        self.reduce(Some, |_| None)
    }

    /// Extracts the second payload, if the second slot is populated.
    #[must_use]
    #[inline]
    pub fn into_second(self) -> Option<T2> {
        self.reduce(|_| None, Some)
    }

    /// Extracts the first payload.
    ///
    /// # Panics
    ///
    /// Panics if the second slot is populated. Callers that cannot rule the
    /// other branch out must use [`into_first`](Self::into_first) instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use sum_rail::Sum2;
    ///
    /// let sum: Sum2<i32, &str> = Sum2::First(7);
    /// assert_eq!(sum.unwrap_first(), 7);
    /// ```
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn unwrap_first(self) -> T1 {
        match self {
            Self::First(first) => first,
            Self::Second(_) => {
                panic!("called `unwrap_first` on a `Sum2` holding its second branch")
            },
        }
    }

    /// Extracts the second payload.
    ///
    /// # Panics
    ///
    /// Panics if the first slot is populated.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn unwrap_second(self) -> T2 {
        match self {
            Self::First(_) => {
                panic!("called `unwrap_second` on a `Sum2` holding its first branch")
            },
            Self::Second(second) => second,
        }
    }
}

impl<T> Sum2<T, T> {
    /// Collapses a same-typed sum into its payload, whichever slot holds it.
    ///
    /// # Examples
    ///
    /// ```
    /// use sum_rail::Sum2;
    ///
    /// assert_eq!(Sum2::<i32, i32>::First(1).collapse(), 1);
    /// assert_eq!(Sum2::<i32, i32>::Second(2).collapse(), 2);
    /// ```
    #[must_use]
    #[inline]
    pub fn collapse(self) -> T {
        self.reduce(|first| first, |second| second)
    }
}

impl<T, E> From<Result<T, E>> for Sum2<T, E> {
    /// `Ok` populates the first slot, `Err` the second.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::First(value),
            Err(error) => Self::Second(error),
        }
    }
}

impl<T, E> From<Sum2<T, E>> for Result<T, E> {
    #[inline]
    fn from(sum: Sum2<T, E>) -> Self {
        sum.reduce(Ok, Err)
    }
}
