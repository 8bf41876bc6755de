#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An algebraic sum of three payload types.
///
/// The three-slot counterpart to [`Sum2`](crate::Sum2): a single value of one
/// of three types, tagged by the variant. All operations mirror `Sum2` with
/// one extra slot; see its docs for the construction and conversion policy.
///
/// # Examples
///
/// ```
/// use sum_rail::Sum3;
///
/// let sum: Sum3<u8, u16, u32> = Sum3::Second(500);
/// assert_eq!(sum.reduce(u32::from, u32::from, |n| n), 500);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Sum3<T1, T2, T3> {
    First(T1),
    Second(T2),
    Third(T3),
}

impl<T1, T2, T3> Sum3<T1, T2, T3> {
    /// Returns `true` if the first slot is populated.
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

    /// Returns `true` if the third slot is populated.
    #[must_use]
    #[inline]
    pub fn is_third(&self) -> bool {
        matches!(self, Self::Third(_))
    }

    /// Side-effecting pattern match: runs exactly the action whose slot is
    /// populated, passing a reference to the payload.
    #[inline]
    pub fn visit<F1, F2, F3>(&self, on_first: F1, on_second: F2, on_third: F3)
    where
        F1: FnOnce(&T1),
        F2: FnOnce(&T2),
        F3: FnOnce(&T3),
    {
        match self {
            Self::First(first) => on_first(first),
            Self::Second(second) => on_second(second),
            Self::Third(third) => on_third(third),
        }
    }

    /// Collapses the sum into a single value by running the mapper for the
    /// populated slot. All mappers must return the same type.
    ///
    /// # Examples
    ///
    /// ```
    /// use sum_rail::Sum3;
    ///
    /// let sum: Sum3<i32, &str, bool> = Sum3::Third(true);
    /// let tag = sum.reduce(|_| "number", |_| "text", |_| "flag");
    /// assert_eq!(tag, "flag");
    /// ```
    #[inline]
    pub fn reduce<R, F1, F2, F3>(self, on_first: F1, on_second: F2, on_third: F3) -> R
    where
        F1: FnOnce(T1) -> R,
        F2: FnOnce(T2) -> R,
        F3: FnOnce(T3) -> R,
    {
        match self {
            Self::First(first) => on_first(first),
            Self::Second(second) => on_second(second),
            Self::Third(third) => on_third(third),
        }
    }

    /// Re-types all three slots in one call, transforming the held payload
    /// and preserving the discriminant.
    #[inline]
    pub fn map<U1, U2, U3, F1, F2, F3>(
        self,
        on_first: F1,
        on_second: F2,
        on_third: F3,
    ) -> Sum3<U1, U2, U3>
    where
        F1: FnOnce(T1) -> U1,
        F2: FnOnce(T2) -> U2,
        F3: FnOnce(T3) -> U3,
    {
        self.reduce(
            |first| Sum3::First(on_first(first)),
            |second| Sum3::Second(on_second(second)),
            |third| Sum3::Third(on_third(third)),
        )
    }

    /// [`map`](Self::map) with identities on the second and third slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use sum_rail::Sum3;
    ///
    /// let sum: Sum3<i32, &str, bool> = Sum3::First(20);
    /// assert_eq!(sum.map_first(|n| n + 1), Sum3::First(21));
    /// ```
    #[inline]
    pub fn map_first<U, F>(self, mapper: F) -> Sum3<U, T2, T3>
    where
        F: FnOnce(T1) -> U,
    {
        self.map(mapper, |second| second, |third| third)
    }

    /// [`map`](Self::map) with identities on the first and third slots.
    #[inline]
    pub fn map_second<U, F>(self, mapper: F) -> Sum3<T1, U, T3>
    where
        F: FnOnce(T2) -> U,
    {
        self.map(|first| first, mapper, |third| third)
    }

    /// [`map`](Self::map) with identities on the first and second slots.
    #[inline]
    pub fn map_third<U, F>(self, mapper: F) -> Sum3<T1, T2, U>
    where
        F: FnOnce(T3) -> U,
    {
        self.map(|first| first, |second| second, mapper)
    }

    /// Borrows the first payload, if the first slot is populated.
    #[must_use]
    #[inline]
    pub fn as_first(&self) -> Option<&T1> {
        match self {
            Self::First(first) => Some(first),
            _ => None,
        }
    }

    /// Borrows the second payload, if the second slot is populated.
    #[must_use]
    #[inline]
    pub fn as_second(&self) -> Option<&T2> {
        match self {
            Self::Second(second) => Some(second),
            _ => None,
        }
    }

    /// Borrows the third payload, if the third slot is populated.
    #[must_use]
    #[inline]
    pub fn as_third(&self) -> Option<&T3> {
        match self {
            Self::Third(third) => Some(third),
            _ => None,
        }
    }

    /// Extracts the first payload, if the first slot is populated.
    #[must_use]
    #[inline]
    pub fn into_first(self) -> Option<T1> {
        self.reduce(Some, |_| None, |_| None)
    }

    /// Extracts the second payload, if the second slot is populated.
    #[must_use]
    #[inline]
    pub fn into_second(self) -> Option<T2> {
        self.reduce(|_| None, Some, |_| None)
    }

    /// Extracts the third payload, if the third slot is populated.
    #[must_use]
    #[inline]
    pub fn into_third(self) -> Option<T3> {
        self.reduce(|_| None, |_| None, Some)
    }

    /// Extracts the first payload.
    ///
    /// # Panics
    ///
    /// Panics if another slot is populated.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn unwrap_first(self) -> T1 {
        match self {
            Self::First(first) => first,
            _ => panic!("called `unwrap_first` on a `Sum3` holding another branch"),
        }
    }

    /// Extracts the second payload.
    ///
    /// # Panics
    ///
    /// Panics if another slot is populated.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn unwrap_second(self) -> T2 {
        match self {
            Self::Second(second) => second,
            _ => panic!("called `unwrap_second` on a `Sum3` holding another branch"),
        }
    }

    /// Extracts the third payload.
    ///
    /// # Panics
    ///
    /// Panics if another slot is populated.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn unwrap_third(self) -> T3 {
        match self {
            Self::Third(third) => third,
            _ => panic!("called `unwrap_third` on a `Sum3` holding another branch"),
        }
    }
}

impl<T> Sum3<T, T, T> {
    /// Collapses a same-typed sum into its payload, whichever slot holds it.
    #[must_use]
    #[inline]
    pub fn collapse(self) -> T {
        self.reduce(|first| first, |second| second, |third| third)
    }
}
